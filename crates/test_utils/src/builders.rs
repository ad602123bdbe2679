//! Test Data Builders
//!
//! Builders for calls and phone lines with sensible defaults, so tests only
//! spell out the fields they care about.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use core_kernel::{BillingMonth, Money};
use domain_billing::Call;
use domain_contract::{ContractTerms, PhoneLine, Tariff};

use crate::fixtures::{DateFixtures, MoneyFixtures, NumberFixtures};

/// Builder for call records
pub struct CallBuilder {
    src_number: String,
    dst_number: String,
    time: NaiveDateTime,
    duration_secs: u32,
}

impl Default for CallBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CallBuilder {
    /// A one-minute call from the standard line in the signup month
    pub fn new() -> Self {
        Self {
            src_number: NumberFixtures::line().to_string(),
            dst_number: NumberFixtures::callee().to_string(),
            time: DateFixtures::signup().and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap()),
            duration_secs: 60,
        }
    }

    pub fn from_number(mut self, number: impl Into<String>) -> Self {
        self.src_number = number.into();
        self
    }

    /// Places the call at noon on the 15th of `period`
    pub fn in_month(mut self, period: BillingMonth) -> Self {
        let day = NaiveDate::from_ymd_opt(period.year(), period.month(), 15).unwrap();
        self.time = day.and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap());
        self
    }

    pub fn at(mut self, time: NaiveDateTime) -> Self {
        self.time = time;
        self
    }

    pub fn lasting_secs(mut self, secs: u32) -> Self {
        self.duration_secs = secs;
        self
    }

    pub fn lasting_minutes(self, minutes: u32) -> Self {
        self.lasting_secs(minutes * 60)
    }

    pub fn build(self) -> Call {
        Call::new(self.src_number, self.dst_number, self.time, self.duration_secs)
    }
}

/// Builder for phone lines
pub struct LineBuilder {
    number: String,
    terms: ContractTerms,
    tariff: Tariff,
}

impl Default for LineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LineBuilder {
    /// The standard line on a month-to-month contract at default prices
    pub fn new() -> Self {
        Self {
            number: NumberFixtures::line().to_string(),
            terms: ContractTerms::MonthToMonth {
                start: DateFixtures::signup(),
            },
            tariff: Tariff::default(),
        }
    }

    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = number.into();
        self
    }

    pub fn month_to_month(mut self) -> Self {
        self.terms = ContractTerms::MonthToMonth {
            start: DateFixtures::signup(),
        };
        self
    }

    /// A term from the standard signup date to the standard end date
    pub fn term(mut self) -> Self {
        self.terms = ContractTerms::Term {
            start: DateFixtures::signup(),
            end: DateFixtures::term_end(),
        };
        self
    }

    /// A prepaid contract with the given signup credit
    pub fn prepaid(mut self, credit: Money) -> Self {
        self.terms = ContractTerms::Prepaid {
            start: DateFixtures::signup(),
            credit,
        };
        self
    }

    /// A prepaid contract with generous signup credit
    pub fn prepaid_default(self) -> Self {
        self.prepaid(MoneyFixtures::generous_credit())
    }

    pub fn with_tariff(mut self, tariff: Tariff) -> Self {
        self.tariff = tariff;
        self
    }

    /// Builds the line; panics on invalid terms
    pub fn build(self) -> PhoneLine {
        let contract = self
            .terms
            .into_contract(&self.tariff)
            .expect("test line terms should be valid");
        PhoneLine::new(self.number, contract)
    }
}
