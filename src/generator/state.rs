//! Mutable generator state, guarded by the generator's mutex

use crate::codec::MAX_SEQUENCE;

/// Start time, last issued tick and sequence of a generator
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct State {
    /// Start time in ticks since the Unix epoch
    pub start_ticks: i64,
    /// Largest tick for which an ID has been issued
    pub elapsed_ticks: i64,
    /// Count of IDs issued within `elapsed_ticks`
    pub sequence: u16,
}

/// Outcome of advancing the state for one ID
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// The ID can be issued immediately
    Ready,
    /// The sequence wrapped; the ID is `overtime` ticks ahead of the clock
    Stall { overtime: i64 },
}

impl State {
    /// Fresh state; the sequence starts exhausted so the first ID reads the clock
    pub const fn new(start_ticks: i64) -> Self {
        Self {
            start_ticks,
            elapsed_ticks: 0,
            sequence: MAX_SEQUENCE,
        }
    }

    /// Advance to the next ID given the current elapsed ticks
    #[inline]
    pub fn advance(&mut self, current: i64) -> Step {
        if self.elapsed_ticks < current {
            self.elapsed_ticks = current;
            self.sequence = 0;
            return Step::Ready;
        }

        self.sequence = (self.sequence + 1) & MAX_SEQUENCE;
        if self.sequence != 0 {
            return Step::Ready;
        }

        self.elapsed_ticks += 1;
        Step::Stall {
            overtime: self.elapsed_ticks - current,
        }
    }
}
