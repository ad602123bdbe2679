//! Billing Domain - Monthly Phone Bill Ledger
//!
//! This crate holds the per-month accumulator a phone line's contract
//! charges into, and the call records that drive per-minute charges.
//!
//! # Bill Composition
//!
//! A bill's total is the sum of:
//! - **Fixed costs**: itemised charges such as monthly fees, deposits,
//!   deposit refunds, prepaid top-ups and carried-over credit
//! - **Billed minutes**: airtime charged at the plan's per-minute rate
//!
//! Free minutes are tracked for reporting but never cost anything.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_billing::{Bill, ChargeKind, PlanKind};
//!
//! let mut bill = Bill::new(BillingMonth::new(1, 2019)?);
//! bill.set_rates(PlanKind::MonthToMonth, MinuteRate::new(dec!(0.05)));
//! bill.add_fixed_cost(ChargeKind::MonthlyFee, Money::new(dec!(50.00)));
//! bill.add_billed_minutes(12)?;
//!
//! assert_eq!(bill.cost().amount(), dec!(50.60));
//! ```

pub mod bill;
pub mod call;
pub mod plan;
pub mod error;

pub use bill::{Bill, BillSummary, FixedCharge};
pub use call::{Call, billed_minutes};
pub use plan::{PlanKind, ChargeKind};
pub use error::BillingError;
