//! Phone line aggregate
//!
//! A `PhoneLine` binds a number to its contract and drives the contract
//! through the month: it opens a fresh bill for each month, routes the
//! line's calls to the contract, and keeps a summary of every closed bill
//! so past months can still be reported once the contract has moved on.

use std::collections::BTreeMap;
use tracing::{info, instrument, warn};

use core_kernel::{BillingMonth, Money};
use domain_billing::{Bill, BillSummary, Call, PlanKind};

use crate::contract::Contract;
use crate::error::ContractError;

/// A phone number and the contract it is billed under
#[derive(Debug)]
pub struct PhoneLine {
    number: String,
    contract: Box<dyn Contract>,
    history: BTreeMap<BillingMonth, BillSummary>,
    calls: Vec<Call>,
}

impl PhoneLine {
    pub fn new(number: impl Into<String>, contract: Box<dyn Contract>) -> Self {
        Self {
            number: number.into(),
            contract,
            history: BTreeMap::new(),
            calls: Vec::new(),
        }
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn plan(&self) -> PlanKind {
        self.contract.plan()
    }

    pub fn contract(&self) -> &dyn Contract {
        self.contract.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.contract.is_active()
    }

    /// Opens `period` with a fresh bill
    ///
    /// The outgoing month's bill is archived once the contract has accepted
    /// the new month.
    ///
    /// # Errors
    ///
    /// - `MonthNotAfter` if `period` does not follow the month currently open
    /// - any error from the contract's `new_month`
    #[instrument(skip(self), fields(number = %self.number, plan = %self.contract.plan()))]
    pub fn new_month(&mut self, period: BillingMonth) -> Result<(), ContractError> {
        let outgoing = self.contract.bill().map(Bill::summary);

        if let Some(current) = outgoing.as_ref().map(|s| s.period) {
            if self.contract.is_active() && period <= current {
                warn!(%current, requested = %period, "Billing month does not advance");
                return Err(ContractError::MonthNotAfter {
                    current,
                    requested: period,
                });
            }
        }

        self.contract.new_month(period, Bill::new(period))?;
        if let Some(summary) = outgoing {
            self.history.insert(summary.period, summary);
        }
        Ok(())
    }

    /// Bills a call placed from this line
    ///
    /// # Errors
    ///
    /// - `ForeignCall` if the call was placed from another number
    /// - any error from the contract's `bill_call`
    #[instrument(skip(self, call), fields(number = %self.number, call_id = %call.id))]
    pub fn make_call(&mut self, call: Call) -> Result<(), ContractError> {
        if call.src_number != self.number {
            warn!(caller = %call.src_number, "Call routed to the wrong line");
            return Err(ContractError::ForeignCall {
                line: self.number.clone(),
                caller: call.src_number,
            });
        }
        self.contract.bill_call(&call)?;
        self.calls.push(call);
        Ok(())
    }

    /// Cancels the line's contract and returns the settlement
    #[instrument(skip(self), fields(number = %self.number))]
    pub fn cancel_line(&mut self) -> Result<Money, ContractError> {
        let settlement = self.contract.cancel()?;
        self.archive_current_bill();
        info!(%settlement, "Line cancelled");
        Ok(settlement)
    }

    /// Bill summary for a month, including the month currently open
    pub fn bill(&self, period: BillingMonth) -> Option<BillSummary> {
        match self.contract.bill() {
            Some(bill) if bill.period() == period => Some(bill.summary()),
            _ => self.history.get(&period).cloned(),
        }
    }

    /// Every month billed so far, oldest first
    pub fn billed_months(&self) -> Vec<BillingMonth> {
        let mut months: Vec<BillingMonth> = self.history.keys().copied().collect();
        if let Some(bill) = self.contract.bill() {
            if !self.history.contains_key(&bill.period()) {
                months.push(bill.period());
            }
        }
        months.sort();
        months
    }

    /// Calls billed on this line in the order they were made
    pub fn call_history(&self) -> &[Call] {
        &self.calls
    }

    /// Calls made during one billing month
    pub fn calls_in(&self, period: BillingMonth) -> impl Iterator<Item = &Call> {
        self.calls.iter().filter(move |c| c.period() == period)
    }

    fn archive_current_bill(&mut self) {
        if let Some(bill) = self.contract.bill() {
            self.history.insert(bill.period(), bill.summary());
        }
    }
}
