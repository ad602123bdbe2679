//! Contract Domain - Phone Plan State Machines
//!
//! This crate implements the billing rules of a phone line's contract:
//! what is charged when a month opens, how each call is priced, and what
//! is owed when the line is cancelled.
//!
//! # Plans
//!
//! - **Month-to-month**: flat monthly fee, every minute billed
//! - **Term**: monthly fee, one-time deposit, 100 free minutes a month,
//!   deposit refunded only once the line has billed a month past its end date
//! - **Prepaid**: running credit balance, automatic top-up when credit runs
//!   low, unused credit forfeited at cancellation
//!
//! # Contract Lifecycle
//!
//! ```text
//! signup -> new_month -> bill_call* -> new_month -> ... -> cancel (closed)
//! ```
//!
//! Every operation after `cancel`, and `bill_call`/`cancel` before the first
//! `new_month`, is rejected with a `ContractError`.

pub mod contract;
pub mod month_to_month;
pub mod term;
pub mod prepaid;
pub mod tariff;
pub mod terms;
pub mod events;
pub mod phone_line;
pub mod error;

pub use contract::{Contract, ContractState, bill_at_plan_rate};
pub use month_to_month::MonthToMonth;
pub use term::Term;
pub use prepaid::Prepaid;
pub use tariff::{Tariff, MonthToMonthRates, TermRates, PrepaidRates};
pub use terms::ContractTerms;
pub use events::ContractEvent;
pub use phone_line::PhoneLine;
pub use error::ContractError;
