//! # sim-game
//!
//! Rules engine for Sim, the edge-coloring game on a complete graph.
//!
//! Two players, Red and Blue, alternately color the edges between N points
//! on a circle. The first to complete a triangle in their own color is
//! declared the winner.
//!
//! ## Design Principles
//!
//! 1. **One owned engine**: `SimGame` holds every piece of mutable state.
//!    Games are independent values; there is nothing global.
//!
//! 2. **Rejections are results**: illegal requests come back as
//!    `MoveResult::Rejected`, never as errors or panics. `SimError` is kept
//!    for configuration and snapshot failures.
//!
//! 3. **Atomic updates**: edges, history and flags change together inside
//!    one call, so undo is an exact inverse of the last move.
//!
//! ## Modules
//!
//! - `core`: colors, vertices and edges, configuration, moves, state, RNG
//! - `rules`: `RulesEngine` trait, outcomes, triangle detection
//! - `game`: `SimGame`, the engine
//! - `input`: circle layout, hit testing, pick buffering, feedback cues
//! - `players`: computer players
//!
//! ## Example
//!
//! ```
//! use sim_game::{Color, MoveResult, RulesEngine, SimGame};
//!
//! let mut game = SimGame::new(6).unwrap();
//! assert!(matches!(game.play(0, 1), MoveResult::Accepted { next: Color::Blue, .. }));
//! assert!(game.undo().is_applied());
//! assert_eq!(game.current_color(), Color::Red);
//! ```

pub mod core;
pub mod error;
pub mod rules;
pub mod game;
pub mod input;
pub mod players;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, BoardState, Color, ColorMap, Edge, EdgeKey, GameRng, GameSnapshot, Move,
    MoveRecord, Phase, Triangle, VertexId,
};

pub use crate::error::{ConfigError, SimError};

pub use crate::rules::{find_triangle, GameResult, MoveResult, RejectReason, RulesEngine, UndoResult};

pub use crate::game::SimGame;

pub use crate::input::{CircleLayout, ClickOutcome, Cue, Feedback, Point, Session};

pub use crate::players::RandomPlayer;
