//! Core Goldflake generator implementation
//!
//! Split into modules for testability:
//! - `state` - Start time, last issued tick and sequence
//! - `time` - Tick conversions of wall-clock time
//! - `wait` - Stall on sequence exhaustion
//! - `generate` - ID generation logic

mod generate;
pub(crate) mod state;
pub(crate) mod time;
mod wait;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;

use crate::codec;
use crate::config::Settings;
use crate::error::GoldflakeError;

use state::State;
use time::to_ticks;

/// Distributed unique ID generator
///
/// All calls to [`Goldflake::next_id`] are serialized through one lock.
/// Share the generator between threads with an `Arc`.
#[derive(Debug)]
pub struct Goldflake {
    pub(crate) state: Mutex<State>,
    machine_id: u16,
    start_time: DateTime<Utc>,
}

impl Goldflake {
    /// Create a generator configured with the given settings
    ///
    /// Fails when the start time is ahead of the current time, when the
    /// machine id provider fails or yields an id that does not fit in 13
    /// bits, and when the machine id check rejects the machine id.
    pub fn new(settings: Settings) -> Result<Self, GoldflakeError> {
        let start_time = Self::validate_start_time(&settings)?;
        let machine_id = settings.resolve_machine_id().inspect_err(|err| {
            tracing::warn!(error = %err, "goldflake not created");
        })?;

        tracing::debug!(machine_id, %start_time, "goldflake created");
        Ok(Self::build(start_time, machine_id))
    }

    fn validate_start_time(settings: &Settings) -> Result<DateTime<Utc>, GoldflakeError> {
        let start_time = settings.resolved_start_time();
        if start_time > Utc::now() {
            tracing::warn!(%start_time, "goldflake not created: start time ahead of now");
            return Err(GoldflakeError::InvalidStartTime { start_time });
        }
        Ok(start_time)
    }

    fn build(start_time: DateTime<Utc>, machine_id: u16) -> Self {
        Self {
            state: Mutex::new(State::new(to_ticks(start_time))),
            machine_id,
            start_time,
        }
    }

    /// Machine id encoded into every ID
    #[inline(always)]
    pub fn machine_id(&self) -> u16 {
        self.machine_id
    }

    /// Time since which the Goldflake time is measured
    #[inline(always)]
    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    /// Absolute time encoded in an ID produced by this generator
    pub fn time_of(&self, id: u64) -> Option<DateTime<Utc>> {
        let elapsed = i64::try_from(codec::time(id)).ok()?;
        time::from_ticks(to_ticks(self.start_time).checked_add(elapsed)?)
    }
}
