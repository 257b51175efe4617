//! Simulated telematics device producing speed samples.
//!
//! The sample source is a trait so callers can swap the random device
//! for a scripted one in tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Upper bound (inclusive) for simulated speed samples, km/h
pub const MAX_SIMULATED_SPEED_KMH: u32 = 100;

/// A source of speed samples in `[0, MAX_SIMULATED_SPEED_KMH]`
pub trait SpeedSampler {
    /// Produce the next speed sample (km/h)
    fn sample(&mut self) -> u32;
}

/// Pseudo-random sampler backed by a seedable RNG.
///
/// Not cryptographically sound and not intended to be.
pub struct RandomSampler {
    rng: StdRng,
}

impl RandomSampler {
    /// Sampler seeded from OS entropy
    pub fn new() -> Self {
        log::debug!("Starting random speed sampler");
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Sampler with a fixed seed, for reproducible runs
    pub fn with_seed(seed: u64) -> Self {
        log::debug!("Starting random speed sampler with seed {seed}");
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl SpeedSampler for RandomSampler {
    fn sample(&mut self) -> u32 {
        self.rng.random_range(0..=MAX_SIMULATED_SPEED_KMH)
    }
}

/// Replays a fixed sequence of samples, cycling when exhausted.
///
/// An empty script yields 0 forever.
pub struct ScriptedSampler {
    script: Vec<u32>,
    position: usize,
}

impl ScriptedSampler {
    pub fn new(script: Vec<u32>) -> Self {
        Self {
            script,
            position: 0,
        }
    }
}

impl SpeedSampler for ScriptedSampler {
    fn sample(&mut self) -> u32 {
        if self.script.is_empty() {
            return 0;
        }
        let value = self.script[self.position % self.script.len()];
        self.position += 1;
        value
    }
}
