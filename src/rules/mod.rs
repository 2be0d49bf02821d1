//! Rules: the engine trait and triangle detection.
//!
//! `RulesEngine` is the seam between the board and anything that drives it
//! (computer players, the CLI, benches). `triangle` holds the win check.

pub mod engine;
pub mod triangle;

pub use engine::{GameResult, MoveResult, RejectReason, RulesEngine, UndoResult};
pub use triangle::find_triangle;
