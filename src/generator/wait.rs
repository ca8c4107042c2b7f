//! Stall applied when the sequence is exhausted within one tick
//!
//! The generator pushes its time one tick ahead of the clock and the calling
//! thread sleeps until the wall clock reaches that tick.

use std::thread;
use std::time::Duration;

use chrono::{DateTime, Utc};

use super::time::{sub_tick_remainder, TIME_UNIT};

/// Time left until `overtime` ticks past the start of the tick containing `now`
#[inline]
pub fn sleep_time(overtime: i64, now: DateTime<Utc>) -> Duration {
    let ticks = u32::try_from(overtime.max(0)).unwrap_or(u32::MAX);
    TIME_UNIT
        .saturating_mul(ticks)
        .saturating_sub(sub_tick_remainder(now))
}

/// Block the calling thread for `overtime` ticks, less the part of the
/// current tick that already passed
pub fn sleep_overtime(overtime: i64) {
    let wait = sleep_time(overtime, Utc::now());
    tracing::trace!(overtime, wait_us = wait.as_micros() as u64, "sequence exhausted, stalling");
    if !wait.is_zero() {
        thread::sleep(wait);
    }
}
