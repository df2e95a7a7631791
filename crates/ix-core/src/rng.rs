//! Deterministic run-level RNG.
//!
//! The only randomness in a run is the spawn-point shuffle used when no
//! explicit spawn indices are given.  Seeding it from `SimConfig::seed` keeps
//! whole runs reproducible.

use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Simulation-level RNG for global operations.
///
/// Used only in single-threaded contexts.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }
}
