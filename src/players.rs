//! Computer players.
//!
//! `RandomPlayer` picks uniformly among the legal moves of any
//! `RulesEngine`. It is the CLI's opponent and the driver for playout
//! tests and benches.

use crate::core::{GameRng, Move};
use crate::rules::{GameResult, RulesEngine};

/// Uniform random move selection from a seeded stream.
#[derive(Clone, Debug)]
pub struct RandomPlayer {
    rng: GameRng,
}

impl RandomPlayer {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Pick a legal move, or `None` if the game is decided or the board is full.
    pub fn choose<E: RulesEngine>(&mut self, engine: &E) -> Option<Move> {
        let moves = engine.legal_moves();
        self.rng.choose(&moves).copied()
    }

    /// Play random moves for both colors until the game is decided.
    ///
    /// Returns the result and the number of moves played.
    pub fn play_out<E: RulesEngine>(&mut self, engine: &mut E) -> (GameResult, usize) {
        let mut played = 0;
        loop {
            if let Some(result) = engine.is_terminal() {
                return (result, played);
            }
            let Some(mv) = self.choose(engine) else {
                return (GameResult::Draw, played);
            };
            let result = engine.apply_move(mv);
            debug_assert!(result.is_applied(), "legal move {:?} was rejected", mv);
            played += 1;
        }
    }
}
