//! Level generator: samples the height of each new node.
//!
//! Heights follow a geometric distribution truncated at a cap: a node reaches
//! level `k` with probability `P^k`. With `P = 0.5` the expected tower has two
//! links and about `log2(n)` levels are occupied, which keeps the multi-level
//! descent logarithmic in expectation.

use crate::node::MAX_LEVEL;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Probability of promoting a node one more level.
pub const P: f64 = 0.5;

/// Source of node heights. Owned by the container and advanced on every insert.
pub trait LevelGenerator {
    /// Largest level this generator returns.
    fn max_level(&self) -> usize;

    /// Sample a level in `0..=self.max_level()`.
    fn next_level(&mut self) -> usize;
}

/// Geometric level generator backed by a seedable `StdRng`.
#[derive(Debug, Clone)]
pub struct GeometricLevelGenerator {
    p: f64,
    max_level: usize,
    rng: StdRng,
}

impl GeometricLevelGenerator {
    /// Generator with `P` and `MAX_LEVEL`, seeded from OS entropy.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy(), P, MAX_LEVEL)
    }

    /// Reproducible generator: the same seed yields the same level sequence.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed), P, MAX_LEVEL)
    }

    /// Generator with a custom promotion probability and cap.
    ///
    /// # Panics
    /// If `p` is not in `(0, 1)` or `max_level` exceeds `MAX_LEVEL`.
    pub fn with_probability(p: f64, max_level: usize) -> Self {
        Self::from_rng(StdRng::from_entropy(), p, max_level)
    }

    /// Seeded generator with a custom probability and cap.
    pub fn with_seed_and_probability(seed: u64, p: f64, max_level: usize) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed), p, max_level)
    }

    fn from_rng(rng: StdRng, p: f64, max_level: usize) -> Self {
        assert!(p > 0.0 && p < 1.0, "p must be in (0, 1), got {p}");
        assert!(
            max_level <= MAX_LEVEL,
            "max_level {max_level} exceeds MAX_LEVEL {MAX_LEVEL}"
        );
        Self { p, max_level, rng }
    }

    pub fn probability(&self) -> f64 {
        self.p
    }
}

impl Default for GeometricLevelGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl LevelGenerator for GeometricLevelGenerator {
    fn max_level(&self) -> usize {
        self.max_level
    }

    fn next_level(&mut self) -> usize {
        let mut level = 0;
        while self.rng.gen::<f64>() < self.p && level < self.max_level {
            level += 1;
        }
        level
    }
}
