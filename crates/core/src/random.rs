//! Random Selection Sources
//!
//! The content store never touches a global generator directly. It draws
//! indices through a [`RandomSource`] handed to it at construction, which
//! lets tests force exact selections and lets deployments pick a seeded
//! generator for reproducible sessions.

use rand::{Rng, SeedableRng, rngs::StdRng};
use std::sync::Mutex;

/// Uniform index sampler shared by every request the skill serves.
#[cfg_attr(test, mockall::automock)]
pub trait RandomSource: Send + Sync {
    /// Returns an index in `0..len`. `len` is always non-zero.
    fn pick(&self, len: usize) -> usize;
}

/// Draws from the calling thread's generator, so concurrent requests never
/// contend on shared state.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// A single seeded generator guarded by a mutex.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn pick(&self, len: usize) -> usize {
        // A poisoned lock only means another draw panicked; the generator
        // state itself is still usable.
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.random_range(0..len)
    }
}
