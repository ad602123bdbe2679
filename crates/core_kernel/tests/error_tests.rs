//! Tests for core_kernel error types

use core_kernel::error::CoreError;
use core_kernel::temporal::TemporalError;

#[test]
fn test_core_error_validation() {
    let error = CoreError::validation("Invalid input");

    match error {
        CoreError::Validation(msg) => assert_eq!(msg, "Invalid input"),
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_core_error_from_temporal_error() {
    let temporal = TemporalError::InvalidMonth { month: 13, year: 2019 };
    let core_error: CoreError = temporal.into();

    assert!(matches!(core_error, CoreError::Temporal(_)));
    assert!(core_error.to_string().contains("Invalid month 13"));
}

#[test]
fn test_core_error_configuration() {
    let error = CoreError::configuration("missing tariff key");

    match error {
        CoreError::Configuration(msg) => assert_eq!(msg, "missing tariff key"),
        _ => panic!("Expected Configuration error"),
    }
}

#[test]
fn test_core_error_display() {
    let error = CoreError::validation("Test error");
    assert!(format!("{}", error).contains("Validation error"));
}
