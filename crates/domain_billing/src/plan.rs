//! Rate plan tags and fixed-charge categories

use serde::{Deserialize, Serialize};
use std::fmt;

/// The rate plan a bill is charged under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanKind {
    /// Month-to-month, no commitment
    #[serde(rename = "mtm")]
    MonthToMonth,
    /// Fixed-term with deposit and free minutes
    Term,
    /// Prepaid credit
    Prepaid,
}

impl PlanKind {
    /// Short plan code shown on bills
    pub fn code(&self) -> &'static str {
        match self {
            PlanKind::MonthToMonth => "mtm",
            PlanKind::Term => "term",
            PlanKind::Prepaid => "prepaid",
        }
    }
}

impl fmt::Display for PlanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Category of a fixed-cost line on a bill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargeKind {
    /// Recurring monthly plan fee
    MonthlyFee,
    /// Term contract deposit, charged in the first month
    Deposit,
    /// Deposit returned when a term line outlives its commitment
    DepositRefund,
    /// Prepaid credit carried into the month (usually negative)
    CreditCarryover,
    /// Automatic prepaid credit purchase
    TopUp,
}

impl fmt::Display for ChargeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ChargeKind::MonthlyFee => "monthly fee",
            ChargeKind::Deposit => "deposit",
            ChargeKind::DepositRefund => "deposit refund",
            ChargeKind::CreditCarryover => "credit carryover",
            ChargeKind::TopUp => "top-up",
        };
        f.write_str(label)
    }
}
