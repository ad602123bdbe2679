//! Billing month handling
//!
//! Bills are opened once per calendar month. A `BillingMonth` names that
//! period and converts to the first day of the month, which is how term
//! contracts measure how far a line has progressed.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid month {month} in year {year}")]
    InvalidMonth {
        month: u32,
        year: i32,
    },
}

/// A calendar month used to key a bill
///
/// Ordering is chronological: year first, then month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct BillingMonth {
    year: i32,
    month: u32,
}

impl<'de> Deserialize<'de> for BillingMonth {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            year: i32,
            month: u32,
        }

        let raw = Raw::deserialize(deserializer)?;
        BillingMonth::new(raw.month, raw.year).map_err(de::Error::custom)
    }
}

impl BillingMonth {
    /// Creates a billing month, validating that `month` is in 1..=12
    pub fn new(month: u32, year: i32) -> Result<Self, TemporalError> {
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(TemporalError::InvalidMonth { month, year });
        }
        Ok(Self { year, month })
    }

    /// The billing month containing the given date
    pub fn of_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The billing month containing the given timestamp
    pub fn of_datetime(timestamp: NaiveDateTime) -> Self {
        Self::of_date(timestamp.date())
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// First calendar day of the month
    pub fn first_day(&self) -> NaiveDate {
        // month is validated on every construction path
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Returns true if the given date falls inside this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        Self::of_date(date) == *self
    }

    /// The following billing month
    pub fn succ(&self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    /// Iterates over `count` consecutive months starting at this one
    pub fn iter_from(self, count: usize) -> impl Iterator<Item = BillingMonth> {
        std::iter::successors(Some(self), |m| Some(m.succ())).take(count)
    }
}

impl fmt::Display for BillingMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl From<NaiveDate> for BillingMonth {
    fn from(date: NaiveDate) -> Self {
        Self::of_date(date)
    }
}
