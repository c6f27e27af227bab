//! Synthetic input generation

use rand::distributions::Uniform;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::constants::{MAX_ELEMENT_VALUE, MIN_ELEMENT_VALUE};

/// Element type of the benchmark datasets
pub type DataType = i64;

/// Generates `size` uniform integers in `[1, 10]` from a seeded generator.
///
/// The same `(size, seed)` pair always yields the same sequence.
pub fn generate_data(size: usize, seed: u64) -> Vec<DataType> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let dist = Uniform::new_inclusive(MIN_ELEMENT_VALUE, MAX_ELEMENT_VALUE);
    (0..size).map(|_| rng.sample(dist)).collect()
}
