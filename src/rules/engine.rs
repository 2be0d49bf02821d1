//! Rules engine trait and move outcomes.
//!
//! Implementations own their `BoardState` and define:
//! - How a move request changes the board
//! - How undo rewinds it
//! - When the game is decided
//!
//! Rejections are ordinary results, never errors.

use serde::{Deserialize, Serialize};

use crate::core::{edge_capacity, BoardState, Color, Edge, EdgeKey, Move, Triangle, VertexId};

/// Why a move or undo left the board unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectReason {
    /// The game has been decided; only a reset accepts moves again.
    GameOver,
    /// A vertex index is not on the board.
    VertexOutOfRange,
    /// Both endpoints are the same vertex.
    SelfLoop,
    /// The edge is already colored.
    EdgeTaken,
    /// History is empty, or the game is over.
    NothingToUndo,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            RejectReason::GameOver => "game already over",
            RejectReason::VertexOutOfRange => "vertex out of range",
            RejectReason::SelfLoop => "an edge needs two different vertices",
            RejectReason::EdgeTaken => "edge already taken",
            RejectReason::NothingToUndo => "nothing to undo",
        };
        f.write_str(text)
    }
}

/// Outcome of `apply_move`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveResult {
    /// The edge was drawn and the turn passed to `next`.
    Accepted { edge: Edge, next: Color },
    /// The edge completed a triangle of `color`; the game is over.
    Win { color: Color, triangle: Triangle },
    /// Nothing changed.
    Rejected(RejectReason),
}

impl MoveResult {
    /// Check if the board changed.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        !matches!(self, MoveResult::Rejected(_))
    }

    /// The rejection reason, if any.
    #[must_use]
    pub fn rejection(&self) -> Option<RejectReason> {
        match self {
            MoveResult::Rejected(reason) => Some(*reason),
            _ => None,
        }
    }
}

/// Outcome of `undo`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UndoResult {
    /// `removed` was taken back; `next` is to move again.
    Applied { removed: Edge, next: Color },
    /// Nothing changed.
    Rejected(RejectReason),
}

impl UndoResult {
    /// Check if the board changed.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, UndoResult::Applied { .. })
    }
}

/// Result of a decided game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// `color` completed `triangle`.
    Winner { color: Color, triangle: Triangle },
    /// Every edge is drawn and neither color has a triangle.
    Draw,
}

impl GameResult {
    /// Check if a color won.
    #[must_use]
    pub fn is_winner(&self, color: Color) -> bool {
        matches!(self, GameResult::Winner { color: c, .. } if *c == color)
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `apply_move` and `undo` must update edges, history and flags together
/// - `apply_move` must be deterministic so playouts can be replayed
/// - `is_terminal` returns `None` while the game continues
pub trait RulesEngine {
    /// The board being played.
    fn state(&self) -> &BoardState;

    /// Draw the edge between `mv.a` and `mv.b` for the color to move.
    fn apply_move(&mut self, mv: Move) -> MoveResult;

    /// Take back the most recent move.
    fn undo(&mut self) -> UndoResult;

    // === Convenience Methods ===

    /// Number of vertices on the board.
    fn vertex_count(&self) -> usize {
        self.state().vertex_count()
    }

    /// Check if an edge is still uncolored.
    fn is_open(&self, key: EdgeKey) -> bool {
        self.state().owner(key).is_none()
    }

    /// Check if the game is decided.
    fn is_terminal(&self) -> Option<GameResult> {
        let state = self.state();
        if let Some(triangle) = state.winning_triangle() {
            return Some(GameResult::Winner {
                color: state.current_color(),
                triangle,
            });
        }
        state.is_full().then_some(GameResult::Draw)
    }

    /// Enumerate all moves that would be accepted, in ascending edge order.
    fn legal_moves(&self) -> Vec<Move> {
        if self.state().is_game_over() {
            return Vec::new();
        }

        let n = self.vertex_count();
        let mut moves = Vec::with_capacity(edge_capacity(n) - self.state().edge_count());
        for a in VertexId::all(n) {
            for b in VertexId::all(n).skip(a.index() + 1) {
                if let Some(key) = EdgeKey::new(a, b) {
                    if self.is_open(key) {
                        moves.push(Move::between(a, b));
                    }
                }
            }
        }
        moves
    }
}
