use goldflake::{decompose, Goldflake, Settings};

fn main() {
    // Create a generator with machine ID 1
    let settings = Settings::builder().machine_id(|| Ok(1)).build();
    let generator = Goldflake::new(settings).unwrap();

    // Generate some IDs
    let id1 = generator.next_id().unwrap();
    let id2 = generator.next_id().unwrap();
    let id3 = generator.next_id().unwrap();

    println!("Generated IDs (guaranteed to be increasing):");
    print_id(id1, &generator);
    print_id(id2, &generator);
    print_id(id3, &generator);

    // Or extract components individually
    println!("\nComponents of ID2 (extracted individually):");
    println!("  Time: {} x 10ms since start", goldflake::codec::time(id2));
    println!("  Machine ID: {}", goldflake::codec::machine_id(id2));
    println!("  Sequence: {}", goldflake::codec::sequence(id2));
}

fn print_id(id: u64, generator: &Goldflake) {
    let parts = decompose(id);
    let datetime = generator
        .time_of(id)
        .map(|t| t.to_string())
        .unwrap_or_default();

    println!(
        "  ID: {id}, Time: {}, Human date: {datetime}, Machine ID: {}, Sequence: {}",
        parts.time, parts.machine_id, parts.sequence
    );
}
