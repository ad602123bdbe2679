//! Term plan
//!
//! A term contract commits the customer until an end date. It charges a
//! deposit in the first month and a lower monthly fee every month, includes
//! a monthly allowance of free minutes, and bills minutes past the
//! allowance at the term rate.
//!
//! # Deposit refund
//!
//! The deposit is refunded at cancellation only if the most recently opened
//! billing month starts strictly after the end date. Term completion is
//! therefore measured in billed months, not in the date the customer asked
//! to cancel: a line cancelled in the month containing its end date keeps
//! no deposit.

use chrono::{Datelike, NaiveDate};
use tracing::{debug, info};

use core_kernel::{BillingMonth, Money};
use domain_billing::{Bill, Call, ChargeKind, PlanKind};

use crate::contract::{Contract, ContractState};
use crate::error::ContractError;
use crate::events::ContractEvent;
use crate::tariff::TermRates;

/// A fixed-term contract
#[derive(Debug, Clone)]
pub struct Term {
    state: ContractState,
    rates: TermRates,
    /// Date the minimum-term obligation is satisfied
    end: NaiveDate,
    /// First day of the most recently opened billing month
    current_date: NaiveDate,
}

impl Term {
    /// Creates a term contract from `start` to `end` at the standard rates
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ContractError> {
        Self::with_rates(start, end, TermRates::default())
    }

    /// # Errors
    ///
    /// Returns `InvalidTerm` unless `end` is after `start`
    pub fn with_rates(start: NaiveDate, end: NaiveDate, rates: TermRates) -> Result<Self, ContractError> {
        if end <= start {
            return Err(ContractError::InvalidTerm { start, end });
        }
        Ok(Self {
            state: ContractState::new(start),
            rates,
            end,
            current_date: start,
        })
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn current_date(&self) -> NaiveDate {
        self.current_date
    }

    pub fn rates(&self) -> &TermRates {
        &self.rates
    }

    /// True once the line has been billed for a month after the end date
    pub fn is_term_complete(&self) -> bool {
        self.current_date > self.end
    }

    /// Splits a call's minutes into free and billed given the allowance used
    ///
    /// Free minutes are used first; once the allowance is exhausted every
    /// further minute is billed.
    pub fn split_minutes(&self, used: u32, needed: u32) -> (u32, u32) {
        let allowance = self.rates.free_minutes;
        if used.saturating_add(needed) <= allowance {
            (needed, 0)
        } else {
            let free = allowance.saturating_sub(used);
            (free, needed - free)
        }
    }
}

impl Contract for Term {
    fn plan(&self) -> PlanKind {
        PlanKind::Term
    }

    fn state(&self) -> &ContractState {
        &self.state
    }

    fn new_month(&mut self, period: BillingMonth, bill: Bill) -> Result<(), ContractError> {
        let start = self.state.ensure_open()?;
        let bill = self.state.open_month(period, bill)?;
        bill.set_rates(PlanKind::Term, self.rates.minute_rate);
        bill.add_fixed_cost(ChargeKind::MonthlyFee, self.rates.monthly_fee);
        bill.reset_free_minutes();

        let first_month = period.month() == start.month() && period.year() == start.year();
        if first_month {
            bill.add_fixed_cost(ChargeKind::Deposit, self.rates.deposit);
        }

        self.current_date = period.first_day();

        if first_month {
            debug!(contract_id = %self.state.id(), deposit = %self.rates.deposit, "Term deposit charged");
            self.state.record(ContractEvent::DepositCharged {
                contract_id: self.state.id(),
                amount: self.rates.deposit,
            });
        }
        self.state.month_opened()
    }

    fn bill_call(&mut self, call: &Call) -> Result<(), ContractError> {
        let needed = call.billed_minutes();
        let used = self.state.active_bill()?.free_minutes();
        let (free, billed) = self.split_minutes(used, needed);

        let bill = self.state.active_bill()?;
        if billed > 0 {
            bill.add_billed_minutes(billed)?;
        }
        bill.add_free_minutes(free)?;

        debug!(
            contract_id = %self.state.id(),
            call_id = %call.id,
            free,
            billed,
            "Call billed against term allowance"
        );
        self.state.record(ContractEvent::CallBilled {
            contract_id: self.state.id(),
            call_id: call.id,
            free_minutes: free,
            billed_minutes: billed,
        });
        Ok(())
    }

    fn cancel(&mut self) -> Result<Money, ContractError> {
        let contract_id = self.state.id();
        let deposit = self.rates.deposit;
        let refund = self.is_term_complete();

        let bill = self.state.active_bill()?;
        if refund {
            bill.add_fixed_cost(ChargeKind::DepositRefund, -deposit);
        }

        self.state.record(if refund {
            ContractEvent::DepositRefunded { contract_id, amount: deposit }
        } else {
            ContractEvent::DepositForfeited { contract_id, amount: deposit }
        });

        let settlement = self.state.settle()?;
        info!(
            %contract_id,
            %settlement,
            deposit_refunded = refund,
            "Term contract cancelled"
        );
        Ok(settlement)
    }
}
