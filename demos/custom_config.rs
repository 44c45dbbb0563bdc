use chrono::{TimeZone, Utc};
use flakeid::{FlakeId, IdConfig, IdGenerator, SequenceMode};

fn main() {
    // Start the clock at the project's launch and count sequences instead of drawing them
    let epoch = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let config = IdConfig::builder()
        .epoch_datetime(epoch)
        .unwrap()
        .sequence_mode(SequenceMode::Counter)
        .build();

    let generator = IdGenerator::with_config(config);

    println!("Generator configuration:");
    println!("  Epoch: {} ({})", config.epoch(), epoch);
    println!("  Sequence mode: {:?}", config.sequence_mode());
    println!("  Machine IDs: {}..={}", FlakeId::MIN_MACHINE_ID, FlakeId::MAX_MACHINE_ID);
    println!("  Max sequence per ms: {}", FlakeId::MAX_SEQUENCE);

    let id = generator.generate_id(42).unwrap();
    let (ts, machine_id, seq) = generator.extract.decompose(id);

    println!("\nGenerated ID: {}", id);
    println!("Components:");
    println!("  Timestamp: {} ms since epoch", ts);
    println!("  Machine ID: {}", machine_id);
    println!("  Sequence: {}", seq);

    match generator.generate(0) {
        Ok(id) => println!("\nUnexpected ID for machine 0: {id}"),
        Err(err) => println!("\nMachine 0 rejected: {err}"),
    }
}
