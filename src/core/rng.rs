//! Deterministic random number generation for combat.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Serializable**: O(1) state capture and restore, so a `GameState`
//!   carries its own generator across requests
//! - **Weighted choice**: Integer weights for enemy intent tables
//!
//! ```
//! use deck_duel::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let snapshot = rng.state();
//!
//! let first = rng.gen_range(0..100);
//! let mut restored = GameRng::from_state(&snapshot);
//! assert_eq!(first, restored.gen_range(0..100));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG owned by a single game.
///
/// Uses ChaCha8 for speed while maintaining good statistical quality.
/// Serializes as a [`GameRngState`] snapshot.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "GameRngState", into = "GameRngState")]
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

    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this generator was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random integer in the given range.
    pub fn gen_range(&mut self, range: std::ops::Range<u32>) -> u32 {
        self.inner.gen_range(range)
    }

    /// Derive a fresh seed, e.g. for a new session.
    pub fn next_seed(&mut self) -> u64 {
        self.inner.gen()
    }

    /// Shuffle a slice in place (Fisher–Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Choose an index with weighted probability.
    ///
    /// Draws uniformly from `[0, total)` and walks the weights, subtracting
    /// each until the draw falls inside one. Zero weights are never chosen.
    ///
    /// Returns `None` if weights are empty, all zero, or their total
    /// overflows `u32`.
    pub fn choose_weighted(&mut self, weights: &[u32]) -> Option<usize> {
        let total = weights.iter().try_fold(0u32, |acc, &w| acc.checked_add(w))?;
        if total == 0 {
            return None;
        }

        let mut draw = self.inner.gen_range(0..total);

        for (i, &weight) in weights.iter().enumerate() {
            if draw < weight {
                return Some(i);
            }
            draw -= weight;
        }

        None
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl PartialEq for GameRng {
    fn eq(&self, other: &Self) -> bool {
        self.state() == other.state()
    }
}

impl Eq for GameRng {}

impl From<GameRngState> for GameRng {
    fn from(state: GameRngState) -> Self {
        Self::from_state(&state)
    }
}

impl From<GameRng> for GameRngState {
    fn from(rng: GameRng) -> Self {
        rng.state()
    }
}

/// Serializable RNG state.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_range(0..1000), rng2.gen_range(0..1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_range(0..1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_range(0..1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = GameRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);

        assert_ne!(data, original);
        data.sort();
        assert_eq!(data, original);
    }

    #[test]
    fn test_choose_weighted_skips_zero_weights() {
        let mut rng = GameRng::new(7);

        for _ in 0..200 {
            let idx = rng.choose_weighted(&[0, 3, 0, 1, 0]).unwrap();
            assert!(idx == 1 || idx == 3);
        }

        assert_eq!(rng.choose_weighted(&[]), None);
        assert_eq!(rng.choose_weighted(&[0, 0]), None);
    }

    #[test]
    fn test_choose_weighted_overflowing_total() {
        let mut rng = GameRng::new(9);
        assert_eq!(rng.choose_weighted(&[u32::MAX, 1]), None);
        assert_eq!(rng.choose_weighted(&[u32::MAX - 1, 1]).map(|i| i < 2), Some(true));
    }

    #[test]
    fn test_choose_weighted_single_entry() {
        let mut rng = GameRng::new(3);
        for _ in 0..10 {
            assert_eq!(rng.choose_weighted(&[0, 0, 5]), Some(2));
        }
    }

    #[test]
    fn test_choose_weighted_covers_all_entries() {
        let mut rng = GameRng::new(11);
        let mut seen = [false; 3];
        for _ in 0..500 {
            seen[rng.choose_weighted(&[1, 1, 1]).unwrap()] = true;
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn test_state_restore() {
        let mut rng = GameRng::new(42);

        for _ in 0..100 {
            rng.gen_range(0..1000);
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.gen_range(0..1000)).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.gen_range(0..1000)).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_serde_roundtrip_continues_sequence() {
        let mut rng = GameRng::new(9);
        rng.gen_range(0..10);

        let json = serde_json::to_string(&rng).unwrap();
        let mut restored: GameRng = serde_json::from_str(&json).unwrap();

        assert_eq!(rng.seed(), restored.seed());
        assert_eq!(rng.gen_range(0..1000), restored.gen_range(0..1000));
    }
}
