use std::collections::HashSet;

use chrono::{TimeZone, Utc};
use goldflake::{decompose, Goldflake, GoldflakeError, Settings, MAX_MACHINE_ID, MAX_SEQUENCE};

fn main() {
    // Machine ids already taken by other instances
    let registry: HashSet<u16> = [1, 2, 3].into_iter().collect();

    let settings = Settings::builder()
        .start_time(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
        .machine_id(|| {
            let raw = std::env::var("GOLDFLAKE_MACHINE_ID").unwrap_or_else(|_| "42".into());
            Ok(raw.parse::<u16>()?)
        })
        .check_machine_id(move |id| !registry.contains(&id))
        .build();

    let generator = match Goldflake::new(settings) {
        Ok(generator) => generator,
        Err(GoldflakeError::MachineIdRejected { machine_id }) => {
            eprintln!("Machine ID {machine_id} is already in use");
            return;
        }
        Err(err) => {
            eprintln!("Goldflake not created: {err}");
            return;
        }
    };

    println!("Generator configuration:");
    println!("  Start time: {}", generator.start_time());
    println!("  Machine ID: {} (of {})", generator.machine_id(), MAX_MACHINE_ID);
    println!("  IDs per 10ms: {}", MAX_SEQUENCE as u32 + 1);

    // Generate and analyze an ID
    let id = generator.next_id().unwrap();
    let parts = decompose(id);

    println!("\nGenerated ID: {}", id);
    println!("Components:");
    println!("  Time: {} x 10ms since start", parts.time);
    println!("  Machine ID: {}", parts.machine_id);
    println!("  Sequence: {} (of {})", parts.sequence, MAX_SEQUENCE);
}
