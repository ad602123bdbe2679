//! The contract capability shared by every plan
//!
//! A contract owns the bill for the month currently being billed. Each
//! plan decides what is charged when a month opens, how a call is priced
//! and what is settled on cancellation; the bookkeeping around those rules
//! (open/closed state, the active bill, the audit trail) lives in
//! `ContractState`.

use chrono::NaiveDate;
use std::fmt;
use tracing::{debug, warn};

use core_kernel::{BillingMonth, ContractId, Money};
use domain_billing::{Bill, Call, PlanKind};

use crate::error::ContractError;
use crate::events::ContractEvent;

/// Billing rules of one phone line
///
/// # Lifecycle
///
/// `new_month` must be called for a month before any call in that month is
/// billed. `cancel` is terminal: afterwards every operation fails with
/// `ContractError::ContractClosed`.
pub trait Contract: fmt::Debug + Send {
    /// The plan this contract bills under
    fn plan(&self) -> PlanKind;

    /// Shared lifecycle state
    fn state(&self) -> &ContractState;

    /// Opens a billing month with a fresh bill and applies its fixed costs
    ///
    /// # Errors
    ///
    /// - `ContractClosed` if the contract was cancelled
    /// - `Billing(PeriodMismatch)` if `bill` belongs to another month
    fn new_month(&mut self, period: BillingMonth, bill: Bill) -> Result<(), ContractError>;

    /// Charges a call to the open bill
    ///
    /// # Errors
    ///
    /// - `ContractClosed` if the contract was cancelled
    /// - `NoActiveBill` if no month has been opened
    fn bill_call(&mut self, call: &Call) -> Result<(), ContractError>;

    /// Closes the contract and returns the amount owed to settle it
    ///
    /// # Errors
    ///
    /// - `ContractClosed` if the contract was already cancelled
    /// - `NoActiveBill` if no month has been opened
    fn cancel(&mut self) -> Result<Money, ContractError>;

    fn id(&self) -> ContractId {
        self.state().id()
    }

    /// Signup date, or `None` once the contract has been cancelled
    fn start(&self) -> Option<NaiveDate> {
        self.state().start()
    }

    /// The bill for the month currently open
    fn bill(&self) -> Option<&Bill> {
        self.state().bill()
    }

    fn is_active(&self) -> bool {
        self.state().is_open()
    }

    /// Audit trail in the order events occurred
    fn events(&self) -> &[ContractEvent] {
        self.state().events()
    }
}

/// Lifecycle state common to every plan
#[derive(Debug, Clone)]
pub struct ContractState {
    id: ContractId,
    start: Option<NaiveDate>,
    bill: Option<Bill>,
    events: Vec<ContractEvent>,
}

impl ContractState {
    /// State for a contract signed on `start`, with no month open yet
    pub fn new(start: NaiveDate) -> Self {
        Self {
            id: ContractId::new(),
            start: Some(start),
            bill: None,
            events: Vec::new(),
        }
    }

    pub fn id(&self) -> ContractId {
        self.id
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    pub fn bill(&self) -> Option<&Bill> {
        self.bill.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.start.is_some()
    }

    pub fn events(&self) -> &[ContractEvent] {
        &self.events
    }

    /// Appends an event to the audit trail
    pub fn record(&mut self, event: ContractEvent) {
        self.events.push(event);
    }

    /// Returns the signup date of an open contract
    ///
    /// # Errors
    ///
    /// Returns `ContractClosed` after cancellation
    pub fn ensure_open(&self) -> Result<NaiveDate, ContractError> {
        self.start.ok_or_else(|| {
            warn!(contract_id = %self.id, "Operation on closed contract rejected");
            ContractError::ContractClosed(self.id)
        })
    }

    /// Replaces the active bill with `bill` for `period`
    ///
    /// The previous month's bill is dropped; nothing is merged.
    pub fn open_month(&mut self, period: BillingMonth, bill: Bill) -> Result<&mut Bill, ContractError> {
        self.ensure_open()?;
        if let Err(err) = bill.ensure_period(period) {
            warn!(
                contract_id = %self.id,
                %period,
                bill_period = %bill.period(),
                "Bill for another month rejected"
            );
            return Err(err.into());
        }
        debug!(contract_id = %self.id, %period, "Opening billing month");
        Ok(self.bill.insert(bill))
    }

    /// The bill calls and settlement are charged to
    ///
    /// # Errors
    ///
    /// - `ContractClosed` after cancellation
    /// - `NoActiveBill` before the first month is opened
    pub fn active_bill(&mut self) -> Result<&mut Bill, ContractError> {
        self.ensure_open()?;
        let id = self.id;
        self.bill.as_mut().ok_or_else(|| {
            warn!(contract_id = %id, "No bill open for contract");
            ContractError::NoActiveBill
        })
    }

    /// Records the month-opened event once the plan has applied its fixed costs
    pub fn month_opened(&mut self) -> Result<(), ContractError> {
        let contract_id = self.id;
        let bill = self.active_bill()?;
        let event = ContractEvent::MonthStarted {
            contract_id,
            period: bill.period(),
            fixed_cost: bill.fixed_cost(),
        };
        self.record(event);
        Ok(())
    }

    /// Closes the contract and settles at the open bill's total
    pub fn settle(&mut self) -> Result<Money, ContractError> {
        let settlement = self.active_bill()?.cost();
        self.close(settlement);
        Ok(settlement)
    }

    /// Closes the contract with the given settlement
    pub fn close(&mut self, settlement: Money) {
        self.start = None;
        self.record(ContractEvent::Cancelled {
            contract_id: self.id,
            settlement,
        });
    }
}

/// Bills every minute of `call` at the plan's per-minute rate
///
/// This is the default call pricing shared by plans without a free-minute
/// allowance. Returns the amount charged.
pub fn bill_at_plan_rate(state: &mut ContractState, call: &Call) -> Result<Money, ContractError> {
    let minutes = call.billed_minutes();
    let bill = state.active_bill()?;
    bill.add_billed_minutes(minutes)?;
    let charge = bill.minute_rate().charge(minutes);

    debug!(contract_id = %state.id(), call_id = %call.id, minutes, %charge, "Call billed");
    state.record(ContractEvent::CallBilled {
        contract_id: state.id(),
        call_id: call.id,
        free_minutes: 0,
        billed_minutes: minutes,
    });
    Ok(charge)
}
