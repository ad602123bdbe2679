//! Month-to-month plan
//!
//! A flat monthly fee and every minute billed. No deposit, no allowance,
//! nothing carried from one month to the next, nothing extra at
//! cancellation.

use chrono::NaiveDate;

use core_kernel::{BillingMonth, Money};
use domain_billing::{Bill, Call, ChargeKind, PlanKind};

use crate::contract::{bill_at_plan_rate, Contract, ContractState};
use crate::error::ContractError;
use crate::tariff::MonthToMonthRates;

/// A month-to-month contract
#[derive(Debug, Clone)]
pub struct MonthToMonth {
    state: ContractState,
    rates: MonthToMonthRates,
}

impl MonthToMonth {
    /// Creates a contract signed on `start` at the standard rates
    pub fn new(start: NaiveDate) -> Self {
        Self::with_rates(start, MonthToMonthRates::default())
    }

    pub fn with_rates(start: NaiveDate, rates: MonthToMonthRates) -> Self {
        Self {
            state: ContractState::new(start),
            rates,
        }
    }

    pub fn rates(&self) -> &MonthToMonthRates {
        &self.rates
    }
}

impl Contract for MonthToMonth {
    fn plan(&self) -> PlanKind {
        PlanKind::MonthToMonth
    }

    fn state(&self) -> &ContractState {
        &self.state
    }

    fn new_month(&mut self, period: BillingMonth, bill: Bill) -> Result<(), ContractError> {
        let bill = self.state.open_month(period, bill)?;
        bill.set_rates(PlanKind::MonthToMonth, self.rates.minute_rate);
        bill.add_fixed_cost(ChargeKind::MonthlyFee, self.rates.monthly_fee);
        self.state.month_opened()
    }

    fn bill_call(&mut self, call: &Call) -> Result<(), ContractError> {
        bill_at_plan_rate(&mut self.state, call).map(|_| ())
    }

    fn cancel(&mut self) -> Result<Money, ContractError> {
        let settlement = self.state.settle()?;
        tracing::info!(contract_id = %self.state.id(), %settlement, "Month-to-month contract cancelled");
        Ok(settlement)
    }
}
