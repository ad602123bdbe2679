//! Billing domain errors

use core_kernel::BillingMonth;
use thiserror::Error;

/// Errors that can occur in the billing domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BillingError {
    /// Minutes were billed before the bill was tagged with a plan and rate
    #[error("Bill for {0} has no rate plan set")]
    RatesNotSet(BillingMonth),

    /// Bill handed over for a different month than the one being opened
    #[error("Bill period mismatch: expected {expected}, got {actual}")]
    PeriodMismatch {
        expected: BillingMonth,
        actual: BillingMonth,
    },

    /// A minute counter on the bill would overflow
    #[error("Minute counter overflow on bill for {0}")]
    MinutesOverflow(BillingMonth),
}
