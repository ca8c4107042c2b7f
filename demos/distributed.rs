use goldflake::{decompose, Goldflake, Settings};
use rand::{rng, Rng};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() {
    // One generator per process, shared by every thread
    let settings = Settings::builder().machine_id(|| Ok(7)).build();
    let generator = Arc::new(Goldflake::new(settings).unwrap());
    let mut handles = vec![];

    for thread_id in 0..4 {
        let gen = Arc::clone(&generator);
        handles.push(thread::spawn(move || {
            let mut ids = HashSet::new();
            let mut rng = rng();

            // Generate some IDs with random delays
            for i in 0..5 {
                let id = gen.next_id().unwrap();
                let parts = decompose(id);

                println!(
                    "Thread {} generated ID {} (time={}, machine={}, seq={})",
                    thread_id, i, parts.time, parts.machine_id, parts.sequence
                );

                assert!(ids.insert(id), "Duplicate ID generated!");

                // Random delay to simulate work
                let delay = rng.random_range(0..=19);
                thread::sleep(Duration::from_millis(delay));
            }
            ids
        }));
    }

    let mut all_ids = HashSet::new();
    for handle in handles {
        all_ids.extend(handle.join().unwrap());
    }

    println!("\nTotal unique IDs generated: {}", all_ids.len());
    assert_eq!(all_ids.len(), 20);
    println!("All IDs are unique!");
}
