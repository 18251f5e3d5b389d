//! Deterministic random number generation for game setup.
//!
//! Rule resolution never draws random numbers; the only randomness in a game
//! is the opening deal. `GameRng` makes that deal reproducible:
//!
//! - **Deterministic**: Same seed produces an identical deal
//! - **Context streams**: Each seat draws from its own stream, so one
//!   player's deal does not shift the other's
//!
//! ```
//! use marketmon::core::GameRng;
//!
//! let rng = GameRng::new(42);
//! let mut you = rng.for_context("you");
//! let mut again = GameRng::new(42).for_context("you");
//!
//! assert_eq!(you.sample_indices(20, 5), again.sample_indices(20, 5));
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    /// Uses `FxHasher`, which is stable across runs and platforms.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = FxHasher::default();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Pick `amount` distinct indices from `0..length`, in random order.
    ///
    /// Panics if `amount > length`.
    pub fn sample_indices(&mut self, length: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.inner, length, amount).into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..20 {
            assert_eq!(rng1.sample_indices(100, 8), rng2.sample_indices(100, 8));
        }
    }

    #[test]
    fn test_different_seeds() {
        let seq1 = GameRng::new(1).sample_indices(1000, 10);
        let seq2 = GameRng::new(2).sample_indices(1000, 10);

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_context_produces_different_sequence() {
        let rng = GameRng::new(42);
        let seq1 = rng.for_context("you").sample_indices(1000, 10);
        let seq2 = rng.for_context("opponent").sample_indices(1000, 10);

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_context_is_deterministic() {
        let ctx1 = GameRng::new(42).for_context("you");
        let ctx2 = GameRng::new(42).for_context("you");

        assert_eq!(ctx1.seed(), ctx2.seed());
    }

    #[test]
    fn test_sample_indices_distinct_and_in_range() {
        let mut rng = GameRng::new(7);
        let mut picked = rng.sample_indices(12, 8);

        assert_eq!(picked.len(), 8);
        assert!(picked.iter().all(|&i| i < 12));

        picked.sort_unstable();
        picked.dedup();
        assert_eq!(picked.len(), 8);
    }

    #[test]
    fn test_sample_everything() {
        let mut rng = GameRng::new(7);
        let mut picked = rng.sample_indices(5, 5);
        picked.sort_unstable();
        assert_eq!(picked, vec![0, 1, 2, 3, 4]);
    }
}
