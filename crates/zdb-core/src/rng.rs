//! Deterministic RNG wrapper for request streams and sweeps.
//!
//! # Determinism strategy
//!
//! Every simulation run owns exactly one `StreamRng`, seeded from the sweep's
//! global seed and the run's index:
//!
//!   seed = global_seed XOR (run_index * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive run indices uniformly across the seed space.
//! Runs therefore never share RNG state, and adding rate parameters at the
//! end of a sweep does not disturb the streams of existing ones.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Deterministic per-run RNG.
pub struct StreamRng(SmallRng);

impl StreamRng {
    pub fn new(seed: u64) -> Self {
        StreamRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed deterministically from a global seed and a run index.
    pub fn for_run(global_seed: u64, run_index: u64) -> Self {
        Self::new(global_seed ^ run_index.wrapping_mul(MIXING_CONSTANT))
    }

    /// Uniform `f64` in `[0, 1)`.
    #[inline]
    pub fn uniform(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Sample an exponentially distributed waiting time with the given rate
    /// (inverse-transform: `-ln(1 - U) / rate`).
    ///
    /// Returns `f64::INFINITY` for non-positive rates.
    #[inline]
    pub fn exponential(&mut self, rate: f64) -> f64 {
        if rate <= 0.0 {
            return f64::INFINITY;
        }
        let u: f64 = self.0.r#gen();
        -(1.0 - u).ln() / rate
    }

    /// Two distinct indices drawn uniformly from `0..n`.  `n` must be ≥ 2.
    pub fn distinct_pair(&mut self, n: u32) -> (u32, u32) {
        debug_assert!(n >= 2);
        let a = self.0.gen_range(0..n);
        let mut b = self.0.gen_range(0..n - 1);
        if b >= a {
            b += 1;
        }
        (a, b)
    }
}
