//! Tariff configuration
//!
//! Fees, per-minute rates, allowances and thresholds for every plan. The
//! defaults are the published price list; deployments can override any
//! value through `TARIFF__*` environment variables, for example
//! `TARIFF__TERM__DEPOSIT=250.00` or `TARIFF__PREPAID__TOP_UP_AMOUNT=30`.

use config::{Config, Environment};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{CoreError, MinuteRate, Money};

/// Month-to-month plan pricing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthToMonthRates {
    pub monthly_fee: Money,
    pub minute_rate: MinuteRate,
}

impl Default for MonthToMonthRates {
    fn default() -> Self {
        Self {
            monthly_fee: Money::new(dec!(50.00)),
            minute_rate: MinuteRate::new(dec!(0.05)),
        }
    }
}

/// Term plan pricing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermRates {
    pub monthly_fee: Money,
    /// Charged in the contract's first month, refundable
    pub deposit: Money,
    /// Minutes per month billed at no charge
    pub free_minutes: u32,
    pub minute_rate: MinuteRate,
}

impl Default for TermRates {
    fn default() -> Self {
        Self {
            monthly_fee: Money::new(dec!(20.00)),
            deposit: Money::new(dec!(300.00)),
            free_minutes: 100,
            minute_rate: MinuteRate::new(dec!(0.10)),
        }
    }
}

/// Prepaid plan pricing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrepaidRates {
    pub minute_rate: MinuteRate,
    /// Balance above which the line is topped up at month start
    pub top_up_threshold: Money,
    /// Credit bought by each top-up
    pub top_up_amount: Money,
}

impl Default for PrepaidRates {
    fn default() -> Self {
        Self {
            minute_rate: MinuteRate::new(dec!(0.025)),
            top_up_threshold: Money::new(dec!(-10.00)),
            top_up_amount: Money::new(dec!(25.00)),
        }
    }
}

/// Complete price list for all plans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Tariff {
    pub month_to_month: MonthToMonthRates,
    pub term: TermRates,
    pub prepaid: PrepaidRates,
}

impl Tariff {
    /// Loads the tariff from `TARIFF__*` environment variables
    ///
    /// Keys that are not set keep their default value.
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_environment(Environment::with_prefix("TARIFF").separator("__"))
    }

    /// Loads the tariff from the given environment source over the defaults
    pub fn from_environment(environment: Environment) -> Result<Self, CoreError> {
        let defaults = Tariff::default();

        Config::builder()
            .set_default("month_to_month.monthly_fee", defaults.month_to_month.monthly_fee.to_string())
            .and_then(|b| b.set_default("month_to_month.minute_rate", defaults.month_to_month.minute_rate.as_decimal().to_string()))
            .and_then(|b| b.set_default("term.monthly_fee", defaults.term.monthly_fee.to_string()))
            .and_then(|b| b.set_default("term.deposit", defaults.term.deposit.to_string()))
            .and_then(|b| b.set_default("term.free_minutes", i64::from(defaults.term.free_minutes)))
            .and_then(|b| b.set_default("term.minute_rate", defaults.term.minute_rate.as_decimal().to_string()))
            .and_then(|b| b.set_default("prepaid.minute_rate", defaults.prepaid.minute_rate.as_decimal().to_string()))
            .and_then(|b| b.set_default("prepaid.top_up_threshold", defaults.prepaid.top_up_threshold.to_string()))
            .and_then(|b| b.set_default("prepaid.top_up_amount", defaults.prepaid.top_up_amount.to_string()))
            .map_err(|e| CoreError::configuration(e.to_string()))?
            .add_source(environment)
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| CoreError::configuration(e.to_string()))
    }
}
