//! Call records
//!
//! A call record carries what billing needs from a completed call: who
//! placed it, when, and for how long.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use core_kernel::{BillingMonth, CallId};

/// Seconds in one billed minute
const SECONDS_PER_MINUTE: u32 = 60;

/// Converts a call duration to billed minutes, rounding up
///
/// Any started minute is billed in full: 1..=60 seconds is one minute,
/// 61 seconds is two, and a zero-length call is free.
pub fn billed_minutes(duration_secs: u32) -> u32 {
    duration_secs.div_ceil(SECONDS_PER_MINUTE)
}

/// A completed call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Call {
    pub id: CallId,
    /// Number the call was placed from
    pub src_number: String,
    /// Number that was called
    pub dst_number: String,
    /// When the call started
    pub time: NaiveDateTime,
    /// Call length in seconds
    pub duration_secs: u32,
}

impl Call {
    pub fn new(
        src_number: impl Into<String>,
        dst_number: impl Into<String>,
        time: NaiveDateTime,
        duration_secs: u32,
    ) -> Self {
        Self {
            id: CallId::new(),
            src_number: src_number.into(),
            dst_number: dst_number.into(),
            time,
            duration_secs,
        }
    }

    /// Minutes this call is billed for
    pub fn billed_minutes(&self) -> u32 {
        billed_minutes(self.duration_secs)
    }

    /// The billing month the call belongs to
    pub fn period(&self) -> BillingMonth {
        BillingMonth::of_datetime(self.time)
    }
}
