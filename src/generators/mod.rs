use rand::Rng;

mod wilson;

pub use wilson::{PathItem, Wilson};

/// Draws a fresh seed for runs that were not given one. Log it to make the run
/// reproducible.
pub fn random_seed() -> u64 {
    rand::rng().random()
}
