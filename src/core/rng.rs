//! Seeded randomness for computer players.
//!
//! ```
//! use sim_game::core::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.gen_index(15), b.gen_index(15));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// ChaCha8 stream; one seed always yields the same picks.
#[derive(Clone, Debug)]
pub struct GameRng(ChaCha8Rng);

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    pub fn gen_index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }

    /// Uniform pick from `items`, `None` when it is empty.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let i = self.gen_index(items.len());
        items.get(i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(a.gen_index(1000), b.gen_index(1000));
        }
    }

    #[test]
    fn test_seeds_diverge() {
        let mut a = GameRng::new(1);
        let mut b = GameRng::new(2);

        let first: Vec<_> = (0..10).map(|_| a.gen_index(1000)).collect();
        let second: Vec<_> = (0..10).map(|_| b.gen_index(1000)).collect();

        assert_ne!(first, second);
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let moves = [(0, 1), (1, 2), (2, 3)];

        for _ in 0..20 {
            assert!(moves.contains(rng.choose(&moves).unwrap()));
        }
        assert!(rng.choose::<u8>(&[]).is_none());
    }
}
