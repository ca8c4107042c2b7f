//! Shared test utilities for Goldflake tests

use std::collections::HashSet;

use chrono::Utc;

use crate::generator::state::State;
use crate::generator::time::current_elapsed_ticks;
use crate::{Goldflake, Settings};

/// Generator whose start time is now, with the given machine id
pub fn generator_starting_now(machine_id: u16) -> Goldflake {
    let settings = Settings::builder()
        .start_time(Utc::now())
        .machine_id(move || Ok(machine_id))
        .build();
    Goldflake::new(settings).unwrap()
}

/// Elapsed ticks of the generator's clock right now
pub fn current_ticks(generator: &Goldflake) -> i64 {
    current_elapsed_ticks(generator.state.lock().start_ticks)
}

/// Overwrite the last issued tick and sequence of a generator
pub fn force_state(generator: &Goldflake, elapsed_ticks: i64, sequence: u16) {
    let mut state = generator.state.lock();
    *state = State {
        elapsed_ticks,
        sequence,
        ..*state
    };
}

/// Assert that all IDs in the collection are unique
pub fn assert_unique_ids(ids: &[u64], expected_count: usize) {
    let set: HashSet<_> = ids.iter().copied().collect();
    assert_eq!(
        set.len(),
        expected_count,
        "Expected {} unique IDs, but got {} (duplicates detected)",
        expected_count,
        set.len()
    );
}

/// Assert that IDs are strictly increasing in the order they were issued
pub fn assert_strictly_increasing(ids: &[u64]) {
    for (i, pair) in ids.windows(2).enumerate() {
        assert!(
            pair[1] > pair[0],
            "ID at position {} ({}) is not greater than previous ID ({})",
            i + 1,
            pair[1],
            pair[0]
        );
    }
}
