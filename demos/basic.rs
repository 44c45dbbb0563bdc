use flakeid::{FlakeId, IdGenerator};

fn main() {
    // The generator holds no machine ID; pass the one assigned to this process
    let generator = IdGenerator::new();
    let machine_id = 1;

    println!("Generated IDs:");
    for _ in 0..3 {
        let id = generator.generate(machine_id).unwrap();
        print_id(&id, &generator);
    }

    // The process-wide default generator works the same way
    let id = flakeid::generate(machine_id).unwrap();
    println!("\nFrom the default generator: {id}");

    // Or extract components individually
    let parsed: FlakeId = id.parse().unwrap();
    println!("  Timestamp: {} ms since epoch", generator.extract.timestamp(parsed));
    println!("  Machine ID: {}", generator.extract.machine_id(parsed));
    println!("  Sequence: {}", generator.extract.sequence(parsed));
}

fn print_id(id: &str, generator: &IdGenerator) {
    let parsed: FlakeId = id.parse().unwrap();
    let (_, machine_id, sequence) = generator.extract.decompose(parsed);
    let datetime = generator.extract.datetime(parsed).unwrap();

    let unix_ms = generator.extract.unix_millis(parsed).unwrap();

    println!("  ID: {id}, Unix ms: {unix_ms}, Human date: {datetime}, Machine ID: {machine_id}, Sequence: {sequence}");
}
