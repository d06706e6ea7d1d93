//! Thread-local RNG adapter for estimation jitter.

use rand::Rng;

use crate::domain::inference::RandomSource;

/// Unseeded uniform source backed by the thread-local generator.
///
/// Each call draws fresh; estimates deliberately vary between turns.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl ThreadRngSource {
    /// Creates a new source.
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for ThreadRngSource {
    fn uniform(&self, low: f64, high: f64) -> f64 {
        rand::thread_rng().gen_range(low..=high)
    }
}

/// Source returning a fixed multiplier, for tests and diagnostics.
#[derive(Debug, Clone, Copy)]
pub struct FixedSource(pub f64);

impl RandomSource for FixedSource {
    fn uniform(&self, _low: f64, _high: f64) -> f64 {
        self.0
    }
}
