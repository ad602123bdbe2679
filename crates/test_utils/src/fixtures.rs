//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for contracts and bills. These fixtures
//! are consistent and predictable for unit tests.

use chrono::NaiveDate;
use core_kernel::{BillingMonth, Money};
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use rust_decimal_macros::dec;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Prepaid signup credit well above the top-up threshold
    pub fn generous_credit() -> Money {
        Money::new(dec!(100.00))
    }

    /// Prepaid signup credit below the top-up threshold
    pub fn low_credit() -> Money {
        Money::new(dec!(5.00))
    }

    /// Prepaid signup credit exactly at the top-up threshold
    pub fn threshold_credit() -> Money {
        Money::new(dec!(10.00))
    }
}

/// Fixture for contract dates
pub struct DateFixtures;

impl DateFixtures {
    /// Standard signup date (Dec 17, 2018)
    pub fn signup() -> NaiveDate {
        NaiveDate::from_ymd_opt(2018, 12, 17).unwrap()
    }

    /// End of a six-month term signed on `signup()` (Jun 17, 2019)
    pub fn term_end() -> NaiveDate {
        NaiveDate::from_ymd_opt(2019, 6, 17).unwrap()
    }

    /// The billing month containing `signup()`
    pub fn signup_month() -> BillingMonth {
        BillingMonth::of_date(Self::signup())
    }

    /// The billing month containing `term_end()`
    pub fn term_end_month() -> BillingMonth {
        BillingMonth::of_date(Self::term_end())
    }

    /// A month in the given year
    pub fn month(month: u32, year: i32) -> BillingMonth {
        BillingMonth::new(month, year).unwrap()
    }
}

/// Fixture for phone numbers
pub struct NumberFixtures;

impl NumberFixtures {
    /// The line most tests bill against
    pub fn line() -> &'static str {
        "867-5309"
    }

    /// A number the line calls
    pub fn callee() -> &'static str {
        "555-0100"
    }

    /// A random number for tests that need a fresh line
    pub fn random() -> String {
        PhoneNumber().fake()
    }
}
