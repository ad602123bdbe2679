//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use core_kernel::{BillingMonth, Money};
use proptest::prelude::*;

/// Strategy for call durations in seconds, up to five hours
pub fn call_duration_strategy() -> impl Strategy<Value = u32> {
    0u32..18_000u32
}

/// Strategy for a month's worth of call durations
pub fn call_durations_strategy(max_calls: usize) -> impl Strategy<Value = Vec<u32>> {
    proptest::collection::vec(call_duration_strategy(), 0..=max_calls)
}

/// Strategy for billing months between 2000 and 2049
pub fn billing_month_strategy() -> impl Strategy<Value = BillingMonth> {
    (1u32..=12u32, 2000i32..2050i32)
        .prop_map(|(month, year)| BillingMonth::new(month, year).unwrap())
}

/// Strategy for prepaid signup credit from $0 to $500
pub fn credit_strategy() -> impl Strategy<Value = Money> {
    (0i64..50_000i64).prop_map(Money::from_cents)
}

/// Strategy for free-minute counters within a 100 minute allowance
pub fn free_minutes_used_strategy() -> impl Strategy<Value = u32> {
    0u32..=100u32
}
