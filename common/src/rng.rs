use rand::prelude::{SeedableRng, StdRng};

/// Builds the process's random source. A fixed seed makes every
/// tie-break reproducible; without one the rng is seeded from the OS.
pub fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
