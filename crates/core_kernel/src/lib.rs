//! Core Kernel - Foundational types for phone line billing
//!
//! This crate provides the building blocks shared by the billing and
//! contract domains:
//! - Money with precise decimal arithmetic and per-minute rates
//! - Billing months used to key bills and drive monthly rollover
//! - Strongly-typed identifiers

pub mod money;
pub mod temporal;
pub mod identifiers;
pub mod error;

pub use money::{Money, MinuteRate};
pub use temporal::{BillingMonth, TemporalError};
pub use identifiers::{ContractId, BillId, CallId};
pub use error::CoreError;
