use std::thread;
use std::time::Duration;

use crate::tests::test_utils::{assert_strictly_increasing, generator_starting_now};
use crate::*;

#[test]
fn test_goldflake_once() {
    let generator = generator_starting_now(8191);
    let sleep_ticks = 5u64;
    thread::sleep(TIME_UNIT * sleep_ticks as u32);

    let id = generator.next_id().unwrap();
    let parts = decompose(id);

    assert_eq!(parts.id, id);
    assert_eq!(parts.msb, 0);
    assert!(
        parts.time >= sleep_ticks,
        "unexpected time {} < {}",
        parts.time,
        sleep_ticks
    );
    // generous upper bound for slow schedulers
    assert!(parts.time <= sleep_ticks + 20, "unexpected time {}", parts.time);
    assert_eq!(parts.sequence, 0);
    assert_eq!(parts.machine_id, 8191);
}

#[test]
fn test_first_id_takes_fresh_tick() {
    let generator = generator_starting_now(1);
    thread::sleep(TIME_UNIT);

    let parts = decompose(generator.next_id().unwrap());
    assert!(parts.time >= 1);
    assert_eq!(parts.sequence, 0);
}

#[test]
fn test_ids_strictly_increasing() {
    let generator = generator_starting_now(42);
    let ids: Vec<u64> = (0..10_000).map(|_| generator.next_id().unwrap()).collect();

    assert_strictly_increasing(&ids);
    assert!(ids.iter().all(|&id| decompose(id).machine_id == 42));
}

#[test]
fn test_ids_from_default_settings() {
    let generator = Goldflake::new(Settings::default()).unwrap();
    let id = generator.next_id().unwrap();
    let parts = decompose(id);

    assert_eq!(parts.machine_id, DEFAULT_MACHINE_ID as u64);
    // more than five years of ticks have passed since 2020-09-01
    assert!(parts.time > 5 * 365 * 24 * 3600 * 100);
}

#[test]
fn test_time_of() {
    let generator = generator_starting_now(7);
    thread::sleep(Duration::from_millis(30));

    let before = chrono::Utc::now();
    let id = generator.next_id().unwrap();
    let at = generator.time_of(id).unwrap();

    assert!(at >= generator.start_time() - chrono::Duration::milliseconds(10));
    assert!(at <= before + chrono::Duration::milliseconds(10));
}

#[test]
fn test_accessors() {
    let generator = generator_starting_now(1234);
    assert_eq!(generator.machine_id(), 1234);
    assert!(generator.start_time() <= chrono::Utc::now());
}
