//! Prepaid plan
//!
//! The customer buys credit up front. The balance is signed: negative means
//! credit remains, positive means the customer owes money. Calls move the
//! balance toward (and possibly past) zero.
//!
//! When a month opens, the balance is carried onto the bill as a fixed cost.
//! If less than $10 of credit remains, $25 more is bought and charged.
//! Unused credit is forfeited at cancellation.

use chrono::NaiveDate;
use tracing::{debug, info};

use core_kernel::{BillingMonth, Money};
use domain_billing::{Bill, Call, ChargeKind, PlanKind};

use crate::contract::{bill_at_plan_rate, Contract, ContractState};
use crate::error::ContractError;
use crate::events::ContractEvent;
use crate::tariff::PrepaidRates;

/// A prepaid contract
#[derive(Debug, Clone)]
pub struct Prepaid {
    state: ContractState,
    rates: PrepaidRates,
    balance: Money,
}

impl Prepaid {
    /// Creates a prepaid contract with `credit` bought at signup
    pub fn new(start: NaiveDate, credit: Money) -> Result<Self, ContractError> {
        Self::with_rates(start, credit, PrepaidRates::default())
    }

    /// # Errors
    ///
    /// Returns `InvalidCredit` if `credit` is negative
    pub fn with_rates(start: NaiveDate, credit: Money, rates: PrepaidRates) -> Result<Self, ContractError> {
        if credit.is_negative() {
            return Err(ContractError::InvalidCredit(credit));
        }
        Ok(Self {
            state: ContractState::new(start),
            rates,
            balance: -credit,
        })
    }

    /// Signed balance: negative is remaining credit, positive is owed
    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn rates(&self) -> &PrepaidRates {
        &self.rates
    }

    /// True when the balance is high enough to trigger a top-up
    pub fn needs_top_up(&self) -> bool {
        self.balance > self.rates.top_up_threshold
    }
}

impl Contract for Prepaid {
    fn plan(&self) -> PlanKind {
        PlanKind::Prepaid
    }

    fn state(&self) -> &ContractState {
        &self.state
    }

    fn new_month(&mut self, period: BillingMonth, bill: Bill) -> Result<(), ContractError> {
        let top_up = self.needs_top_up();
        let bill = self.state.open_month(period, bill)?;
        bill.set_rates(PlanKind::Prepaid, self.rates.minute_rate);
        bill.add_fixed_cost(ChargeKind::CreditCarryover, self.balance);

        if top_up {
            bill.add_fixed_cost(ChargeKind::TopUp, self.rates.top_up_amount);
            self.balance -= self.rates.top_up_amount;

            debug!(
                contract_id = %self.state.id(),
                amount = %self.rates.top_up_amount,
                balance = %self.balance,
                "Prepaid credit topped up"
            );
            self.state.record(ContractEvent::ToppedUp {
                contract_id: self.state.id(),
                amount: self.rates.top_up_amount,
                balance: self.balance,
            });
        }
        self.state.month_opened()
    }

    fn bill_call(&mut self, call: &Call) -> Result<(), ContractError> {
        let charge = bill_at_plan_rate(&mut self.state, call)?;
        self.balance += charge;
        Ok(())
    }

    fn cancel(&mut self) -> Result<Money, ContractError> {
        let contract_id = self.state.id();
        self.state.active_bill()?;

        if self.balance.is_positive() {
            let settlement = self.state.settle()?;
            info!(%contract_id, %settlement, "Prepaid contract cancelled with balance owing");
            return Ok(settlement);
        }

        let credit = -self.balance;
        self.state.record(ContractEvent::CreditForfeited { contract_id, credit });
        self.state.close(Money::zero());
        info!(%contract_id, forfeited = %credit, "Prepaid contract cancelled, credit forfeited");
        Ok(Money::zero())
    }
}
