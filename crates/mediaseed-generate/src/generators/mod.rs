//! Record generators for the three datasets.
//!
//! Every generator takes an explicit RNG so runs are reproducible from a
//! seed. The engine derives one RNG per dataset with [`dataset_rng`].

pub mod content;
pub mod engagement;
pub mod viewing;

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use mediaseed_core::Dataset;

pub use content::ContentGenerator;
pub use engagement::EngagementGenerator;
pub use viewing::{ViewingGenerator, completion_percentage};

/// Independent RNG stream for one dataset of a run.
pub fn dataset_rng(seed: u64, dataset: Dataset) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(hash_seed(seed, dataset.name()))
}

fn hash_seed(seed: u64, key: &str) -> u64 {
    let mut hash = seed ^ 0xcbf29ce484222325;
    for byte in key.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}

/// Uniform pick from a non-empty reference table.
fn pick<T: Copy>(values: &[T], rng: &mut dyn RngCore) -> T {
    values[rng.random_range(0..values.len())]
}

/// Uniform pick from `true`, `false` and unknown.
fn pick_tri_state(rng: &mut dyn RngCore) -> Option<bool> {
    pick(&[Some(true), Some(false), None], rng)
}

/// Version 4 UUID drawn from the run RNG.
fn random_uuid(rng: &mut dyn RngCore) -> String {
    let mut bytes = [0_u8; 16];
    rng.fill_bytes(&mut bytes);
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
    uuid::Uuid::from_bytes(bytes).to_string()
}
