//! Monthly bill ledger
//!
//! A `Bill` accumulates everything a line is charged for in one billing
//! month. The contract that owns it decides what goes in; the bill only
//! keeps the arithmetic consistent.

use serde::{Deserialize, Serialize};
use tracing::trace;

use core_kernel::{BillId, BillingMonth, MinuteRate, Money};
use crate::error::BillingError;
use crate::plan::{ChargeKind, PlanKind};

/// One itemised fixed-cost line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedCharge {
    pub kind: ChargeKind,
    pub amount: Money,
}

/// The bill for one phone line for one month
///
/// # Invariants
///
/// - The total is always fixed costs plus billed minutes at the current rate
/// - Minutes can only be billed once a rate plan has been set
/// - Free minutes never contribute to the total
#[derive(Debug, Clone)]
pub struct Bill {
    id: BillId,
    period: BillingMonth,
    plan: Option<PlanKind>,
    minute_rate: MinuteRate,
    charges: Vec<FixedCharge>,
    free_minutes: u32,
    billed_minutes: u32,
}

impl Bill {
    /// Creates an empty bill for the given month
    pub fn new(period: BillingMonth) -> Self {
        Self {
            id: BillId::new(),
            period,
            plan: None,
            minute_rate: MinuteRate::default(),
            charges: Vec::new(),
            free_minutes: 0,
            billed_minutes: 0,
        }
    }

    pub fn id(&self) -> BillId {
        self.id
    }

    pub fn period(&self) -> BillingMonth {
        self.period
    }

    /// The plan this bill is charged under, if one has been set
    pub fn plan(&self) -> Option<PlanKind> {
        self.plan
    }

    pub fn minute_rate(&self) -> MinuteRate {
        self.minute_rate
    }

    /// Checks that this bill belongs to the month being opened
    ///
    /// # Errors
    ///
    /// Returns `PeriodMismatch` if the bill was created for another month
    pub fn ensure_period(&self, expected: BillingMonth) -> Result<(), BillingError> {
        if self.period != expected {
            return Err(BillingError::PeriodMismatch {
                expected,
                actual: self.period,
            });
        }
        Ok(())
    }

    /// Tags the bill with its plan and the price of a billed minute
    pub fn set_rates(&mut self, plan: PlanKind, minute_rate: MinuteRate) {
        self.plan = Some(plan);
        self.minute_rate = minute_rate;
    }

    /// Adds a fixed-cost line; negative amounts reduce the bill
    pub fn add_fixed_cost(&mut self, kind: ChargeKind, amount: Money) {
        trace!(bill_id = %self.id, %kind, %amount, "Fixed cost added");
        self.charges.push(FixedCharge { kind, amount });
    }

    /// Itemised fixed costs in the order they were added
    pub fn charges(&self) -> &[FixedCharge] {
        &self.charges
    }

    /// Sum of all fixed-cost lines
    pub fn fixed_cost(&self) -> Money {
        self.charges.iter().map(|c| c.amount).sum()
    }

    /// Sum of the fixed-cost lines of one kind
    pub fn fixed_cost_of(&self, kind: ChargeKind) -> Money {
        self.charges
            .iter()
            .filter(|c| c.kind == kind)
            .map(|c| c.amount)
            .sum()
    }

    /// Records minutes covered by the plan's allowance
    ///
    /// # Errors
    ///
    /// Returns `MinutesOverflow` if the counter would exceed `u32::MAX`
    pub fn add_free_minutes(&mut self, minutes: u32) -> Result<(), BillingError> {
        self.free_minutes = self
            .free_minutes
            .checked_add(minutes)
            .ok_or(BillingError::MinutesOverflow(self.period))?;
        Ok(())
    }

    /// Starts the free-minute allowance over for the month
    pub fn reset_free_minutes(&mut self) {
        self.free_minutes = 0;
    }

    /// Free minutes used so far this month
    pub fn free_minutes(&self) -> u32 {
        self.free_minutes
    }

    /// Records minutes charged at the plan rate
    ///
    /// # Errors
    ///
    /// - `RatesNotSet` if no plan has been set on the bill
    /// - `MinutesOverflow` if the counter would exceed `u32::MAX`; the bill is
    ///   left unchanged
    pub fn add_billed_minutes(&mut self, minutes: u32) -> Result<(), BillingError> {
        if self.plan.is_none() {
            return Err(BillingError::RatesNotSet(self.period));
        }
        self.billed_minutes = self
            .billed_minutes
            .checked_add(minutes)
            .ok_or(BillingError::MinutesOverflow(self.period))?;
        Ok(())
    }

    pub fn billed_minutes(&self) -> u32 {
        self.billed_minutes
    }

    /// Cost of the billed minutes alone
    pub fn minutes_cost(&self) -> Money {
        self.minute_rate.charge(self.billed_minutes)
    }

    /// Total owed for the month: fixed costs plus billed minutes
    pub fn cost(&self) -> Money {
        self.fixed_cost() + self.minutes_cost()
    }

    /// Snapshot of the bill for reporting
    pub fn summary(&self) -> BillSummary {
        BillSummary {
            bill_id: self.id,
            period: self.period,
            plan: self.plan,
            fixed_cost: self.fixed_cost(),
            free_minutes: self.free_minutes,
            billed_minutes: self.billed_minutes,
            minute_rate: self.minute_rate,
            total: self.cost(),
            charges: self.charges.clone(),
        }
    }
}

/// A point-in-time view of a bill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillSummary {
    pub bill_id: BillId,
    pub period: BillingMonth,
    pub plan: Option<PlanKind>,
    pub fixed_cost: Money,
    pub free_minutes: u32,
    pub billed_minutes: u32,
    pub minute_rate: MinuteRate,
    pub total: Money,
    pub charges: Vec<FixedCharge>,
}
