use rand::{seq::SliceRandom, Rng};

use crate::entry::Entry;

/// One included entry chosen uniformly from `rng`, or `None` when nothing is
/// included. Every call is independent, so repeats are expected.
pub fn pick<'a, R: Rng + ?Sized>(entries: &'a [Entry], rng: &mut R) -> Option<&'a Entry> {
    let pool: Vec<&Entry> = entries.iter().filter(|e| e.included).collect();
    pool.choose(rng).copied()
}
