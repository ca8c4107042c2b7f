//! Time utilities for Goldflake generation
//!
//! Goldflake time is counted in ticks of 10 msec since the Unix epoch

use std::time::Duration;

use chrono::{DateTime, Utc};

/// Length of one tick in nanoseconds
pub const TIME_UNIT_NANOS: i64 = 10_000_000;

/// Length of one tick
pub const TIME_UNIT: Duration = Duration::from_nanos(TIME_UNIT_NANOS as u64);

const TICKS_PER_SEC: i64 = 1_000_000_000 / TIME_UNIT_NANOS;

/// Convert an absolute time into ticks since the Unix epoch
#[inline]
pub fn to_ticks(t: DateTime<Utc>) -> i64 {
    t.timestamp() * TICKS_PER_SEC + i64::from(t.timestamp_subsec_nanos()) / TIME_UNIT_NANOS
}

/// Convert ticks since the Unix epoch back into an absolute time
#[inline]
pub fn from_ticks(ticks: i64) -> Option<DateTime<Utc>> {
    let millis = ticks.checked_mul(TIME_UNIT_NANOS / 1_000_000)?;
    DateTime::from_timestamp_millis(millis)
}

/// Current wall-clock time in ticks since the Unix epoch
#[inline(always)]
pub fn now_ticks() -> i64 {
    to_ticks(Utc::now())
}

/// Ticks elapsed between `start_ticks` and now
#[inline(always)]
pub fn current_elapsed_ticks(start_ticks: i64) -> i64 {
    now_ticks() - start_ticks
}

/// Time already spent inside the current tick
#[inline]
pub fn sub_tick_remainder(now: DateTime<Utc>) -> Duration {
    Duration::from_nanos(u64::from(now.timestamp_subsec_nanos()) % TIME_UNIT_NANOS as u64)
}
