//! Randomness capability — every random decision in the engine draws from a
//! caller-supplied [`RandomSource`].
//!
//! Any `rand::Rng` is a source (production code seeds a `ChaCha8Rng`), and
//! [`ScriptedSource`] replays fixed draws so tests can steer each branch.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A uniform random source.
pub trait RandomSource {
    /// Uniform `f64` in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform integer in `[low, high)`.
    ///
    /// Panics if `low >= high`.
    fn range_usize(&mut self, low: usize, high: usize) -> usize;

    /// One Bernoulli draw: `true` with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Unbiased in-place Fisher–Yates shuffle.
    fn shuffle<T>(&mut self, items: &mut [T])
    where
        Self: Sized,
    {
        for i in (1..items.len()).rev() {
            let j = self.range_usize(0, i + 1);
            items.swap(i, j);
        }
    }
}

impl<R: Rng> RandomSource for R {
    fn next_f64(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn range_usize(&mut self, low: usize, high: usize) -> usize {
        assert!(low < high, "range_usize: low must be less than high");
        self.gen_range(low..high)
    }
}

/// A reproducible source for a given seed.
pub fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// A source seeded from OS entropy.
pub fn from_entropy() -> ChaCha8Rng {
    ChaCha8Rng::from_entropy()
}

/// Replays a fixed list of unit-interval draws, cycling when exhausted.
///
/// Integer ranges map a draw `x` to `low + floor(x * (high - low))`, so `0.0`
/// always picks the lowest value and `0.99` the highest.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    draws: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    /// Create a source from draws in `[0, 1)`.
    ///
    /// Panics if `draws` is empty or any draw is outside `[0, 1)`.
    pub fn new(draws: impl Into<Vec<f64>>) -> Self {
        let draws = draws.into();
        assert!(!draws.is_empty(), "ScriptedSource needs at least one draw");
        assert!(
            draws.iter().all(|d| (0.0..1.0).contains(d)),
            "ScriptedSource draws must lie in [0, 1)"
        );
        Self { draws, cursor: 0 }
    }

    /// A source that returns the same draw forever.
    pub fn constant(draw: f64) -> Self {
        Self::new(vec![draw])
    }

    /// Number of draws consumed so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn next_f64(&mut self) -> f64 {
        let draw = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        draw
    }

    fn range_usize(&mut self, low: usize, high: usize) -> usize {
        assert!(low < high, "range_usize: low must be less than high");
        let span = high - low;
        let offset = (self.next_f64() * span as f64) as usize;
        low + offset.min(span - 1)
    }
}
