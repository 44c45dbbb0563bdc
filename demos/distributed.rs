use flakeid::{FlakeId, IdGenerator};
use rand::{rng, Rng};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() {
    // One shared generator, no lock: each simulated node brings its own machine ID
    let generator = Arc::new(IdGenerator::new());
    let mut handles = vec![];

    for machine_id in 1..=4u16 {
        let generator = Arc::clone(&generator);
        handles.push(thread::spawn(move || {
            let mut ids = HashSet::new();
            let mut rng = rng();

            for i in 0..5 {
                let id: FlakeId = generator.generate_id(machine_id).unwrap();
                let (ts, machine, seq) = generator.extract.decompose(id);

                println!(
                    "Machine {} generated ID #{} = {} (ts={}, machine={}, seq={})",
                    machine_id, i, id, ts, machine, seq
                );

                ids.insert(id);

                // Random delay to simulate work
                let delay = rng.random_range(0..=9);
                thread::sleep(Duration::from_millis(delay));
            }
            ids
        }));
    }

    let per_machine: Vec<HashSet<FlakeId>> =
        handles.into_iter().map(|h| h.join().unwrap()).collect();

    for (i, a) in per_machine.iter().enumerate() {
        for b in &per_machine[i + 1..] {
            assert!(a.is_disjoint(b), "IDs collided across machines!");
        }
    }

    let total: usize = per_machine.iter().map(HashSet::len).sum();
    println!("\nTotal distinct IDs generated: {total}");
    println!("No identifier is shared between machines.");
}
