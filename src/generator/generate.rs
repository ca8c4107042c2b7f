//! ID generation logic

use crate::codec::{encode, TIME_LIMIT};
use crate::error::GoldflakeError;

use super::state::{State, Step};
use super::time::current_elapsed_ticks;
use super::wait::sleep_overtime;
use super::Goldflake;

impl Goldflake {
    /// Generate the next unique ID
    ///
    /// When the sequence of the current 10 msec tick is exhausted, the call
    /// blocks until the wall clock reaches the next tick. The lock stays held
    /// while blocked, so concurrent callers wait as well.
    ///
    /// After the Goldflake time overflows 39 bits every call returns
    /// [`GoldflakeError::TimeOverflow`].
    pub fn next_id(&self) -> Result<u64, GoldflakeError> {
        let mut state = self.state.lock();

        let current = current_elapsed_ticks(state.start_ticks);
        if let Step::Stall { overtime } = state.advance(current) {
            sleep_overtime(overtime);
        }

        self.to_id(&state)
    }

    fn to_id(&self, state: &State) -> Result<u64, GoldflakeError> {
        if state.elapsed_ticks >= TIME_LIMIT {
            tracing::error!(elapsed_ticks = state.elapsed_ticks, "goldflake time limit exceeded");
            return Err(GoldflakeError::TimeOverflow {
                elapsed_ticks: state.elapsed_ticks,
            });
        }
        Ok(encode(
            state.elapsed_ticks as u64,
            state.sequence,
            self.machine_id(),
        ))
    }
}
