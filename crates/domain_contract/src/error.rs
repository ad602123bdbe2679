//! Contract domain errors

use chrono::NaiveDate;
use thiserror::Error;

use core_kernel::{BillingMonth, ContractId, CoreError, Money};
use domain_billing::BillingError;

/// Errors that can occur in the contract domain
#[derive(Debug, Error)]
pub enum ContractError {
    /// A call was billed or the line cancelled before any month was opened
    #[error("No bill is open: start a billing month first")]
    NoActiveBill,

    /// The contract has already been cancelled
    #[error("Contract {0} is closed")]
    ContractClosed(ContractId),

    /// Term contract whose commitment ends on or before it starts
    #[error("Invalid term: end {end} is not after start {start}")]
    InvalidTerm {
        start: NaiveDate,
        end: NaiveDate,
    },

    /// Prepaid signup with negative credit
    #[error("Invalid prepaid credit: {0}")]
    InvalidCredit(Money),

    /// A call placed from another number was routed to this line
    #[error("Call from {caller} does not belong to line {line}")]
    ForeignCall {
        line: String,
        caller: String,
    },

    /// A line was asked to open a month that is not after its current one
    #[error("Cannot open {requested}: month {current} is already open")]
    MonthNotAfter {
        current: BillingMonth,
        requested: BillingMonth,
    },

    #[error(transparent)]
    Billing(#[from] BillingError),

    #[error(transparent)]
    Core(#[from] CoreError),
}
