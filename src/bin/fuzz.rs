use std::collections::HashSet;

use gameroll::{entry::Entry, games::GameList, picker};
use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};

fn rand_exp_size(rng: &mut dyn RngCore) -> u64 {
    match rng.next_u64() % 9 {
        0 => 0,
        v => 1 << (v - 1),
    }
}

/// Random-case spelling of a path, so lists carry case-only duplicates.
fn respell(path: &str, rng: &mut dyn RngCore) -> String {
    path.chars()
        .map(|c| {
            if rng.next_u64() % 2 == 0 {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}

fn generate_entries(rng: &mut StdRng) -> Vec<Entry> {
    let size = rand_exp_size(rng);
    let distinct = size / 2 + 1;
    (0..size)
        .map(|i| {
            let id = rng.next_u64() % distinct;
            let path = respell(&format!("c:/games/game{id}.exe"), rng);
            Entry::new(format!("game {i}"), path.into(), rng.gen_bool(0.5))
        })
        .collect()
}

fn run(seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let entries = generate_entries(&mut rng);
    let list = GameList::new(entries.clone());

    let keys: HashSet<String> = entries.iter().map(Entry::key).collect();
    assert_eq!(list.len(), keys.len(), "seed {seed}");
    let listed: HashSet<String> = list.entries().iter().map(Entry::key).collect();
    assert_eq!(listed, keys, "seed {seed}");

    let any_included = list.entries().iter().any(|e| e.included);
    match picker::pick(list.entries(), &mut rng) {
        Some(picked) => assert!(picked.included && any_included, "seed {seed}"),
        None => assert!(!any_included, "seed {seed}"),
    }
}

fn main() {
    println!("running fuzz testing");
    for i in 1..64200 {
        run(i);
    }
    println!("completed!")
}
