//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use core_kernel::Money;
use domain_contract::{Contract, ContractError, ContractEvent};
use rust_decimal::Decimal;

/// Asserts that a Money value equals the expected decimal amount
pub fn assert_money_eq(actual: Money, expected: Decimal) {
    assert_eq!(
        actual.amount(),
        expected,
        "Money mismatch: actual={}, expected={}",
        actual,
        expected
    );
}

/// Asserts that a contract has been cancelled and rejects further use
pub fn assert_contract_closed(contract: &dyn Contract) {
    assert!(
        contract.start().is_none(),
        "Expected contract {} to be closed",
        contract.id()
    );
    assert!(!contract.is_active());
}

/// Asserts that a result is the closed-contract error
pub fn assert_closed_error<T: std::fmt::Debug>(result: Result<T, ContractError>) {
    match result {
        Err(ContractError::ContractClosed(_)) => {}
        other => panic!("Expected ContractClosed, got {:?}", other),
    }
}

/// Asserts that a result is the no-open-bill error
pub fn assert_no_bill_error<T: std::fmt::Debug>(result: Result<T, ContractError>) {
    match result {
        Err(ContractError::NoActiveBill) => {}
        other => panic!("Expected NoActiveBill, got {:?}", other),
    }
}

/// Asserts the sequence of event type names recorded by a contract
pub fn assert_event_types(events: &[ContractEvent], expected: &[&str]) {
    let actual: Vec<&str> = events.iter().map(|e| e.event_type()).collect();
    assert_eq!(actual, expected, "Unexpected contract event sequence");
}
