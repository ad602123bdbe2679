//! Contract signup terms
//!
//! `ContractTerms` describes what a customer signed up for, independent of
//! pricing. Combining it with a `Tariff` yields the contract itself.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::Money;
use domain_billing::PlanKind;

use crate::contract::Contract;
use crate::error::ContractError;
use crate::month_to_month::MonthToMonth;
use crate::prepaid::Prepaid;
use crate::tariff::Tariff;
use crate::term::Term;

/// The plan and parameters chosen at signup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "plan", rename_all = "snake_case")]
pub enum ContractTerms {
    #[serde(rename = "mtm")]
    MonthToMonth {
        start: NaiveDate,
    },
    Term {
        start: NaiveDate,
        end: NaiveDate,
    },
    Prepaid {
        start: NaiveDate,
        /// Credit bought at signup
        credit: Money,
    },
}

impl ContractTerms {
    pub fn plan(&self) -> PlanKind {
        match self {
            ContractTerms::MonthToMonth { .. } => PlanKind::MonthToMonth,
            ContractTerms::Term { .. } => PlanKind::Term,
            ContractTerms::Prepaid { .. } => PlanKind::Prepaid,
        }
    }

    pub fn start(&self) -> NaiveDate {
        match self {
            ContractTerms::MonthToMonth { start }
            | ContractTerms::Term { start, .. }
            | ContractTerms::Prepaid { start, .. } => *start,
        }
    }

    /// Builds the contract priced by `tariff`
    ///
    /// # Errors
    ///
    /// - `InvalidTerm` if a term ends on or before its start
    /// - `InvalidCredit` if prepaid credit is negative
    pub fn into_contract(self, tariff: &Tariff) -> Result<Box<dyn Contract>, ContractError> {
        let contract: Box<dyn Contract> = match self {
            ContractTerms::MonthToMonth { start } => {
                Box::new(MonthToMonth::with_rates(start, tariff.month_to_month))
            }
            ContractTerms::Term { start, end } => {
                Box::new(Term::with_rates(start, end, tariff.term)?)
            }
            ContractTerms::Prepaid { start, credit } => {
                Box::new(Prepaid::with_rates(start, credit, tariff.prepaid)?)
            }
        };
        Ok(contract)
    }
}
