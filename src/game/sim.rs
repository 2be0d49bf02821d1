//! Sim game implementation.

use crate::core::{BoardConfig, BoardState, Color, Edge, GameSnapshot, Move, Triangle};
use crate::error::SimError;
use crate::rules::{find_triangle, MoveResult, RejectReason, RulesEngine, UndoResult};

/// One Sim game: its configuration and board.
///
/// Each instance is independent; hosts that share one across threads wrap
/// it in a single `Mutex`.
#[derive(Clone, Debug)]
pub struct SimGame {
    config: BoardConfig,
    state: BoardState,
}

impl Default for SimGame {
    fn default() -> Self {
        let config = BoardConfig::default();
        let state = BoardState::new(config.vertex_count, config.starting_color);
        Self { config, state }
    }
}

impl SimGame {
    /// Create a game on `vertex_count` vertices with default limits.
    pub fn new(vertex_count: usize) -> Result<Self, SimError> {
        Self::with_config(BoardConfig::new(vertex_count))
    }

    /// Create a game from a full configuration.
    pub fn with_config(config: BoardConfig) -> Result<Self, SimError> {
        config.validate()?;
        let state = BoardState::new(config.vertex_count, config.starting_color);
        Ok(Self { config, state })
    }

    /// Restore a game from a snapshot.
    ///
    /// The snapshot's history is replayed under `config`'s limits, so the
    /// result is only accepted if those moves are a legal game that ends in
    /// exactly the recorded edges, turn color and outcome.
    pub fn from_snapshot(config: BoardConfig, snapshot: &GameSnapshot) -> Result<Self, SimError> {
        let expected = BoardState::from_snapshot(snapshot)?;
        let starting_color = snapshot
            .history
            .first()
            .map_or(snapshot.current_color, |record| record.color);
        let mut game = Self::with_config(
            config
                .with_vertex_count(snapshot.vertex_count)
                .with_starting_color(starting_color),
        )?;

        for record in &snapshot.history {
            if game.state.current_color() != record.color {
                return Err(SimError::Snapshot(format!(
                    "move {} was drawn out of turn by {}",
                    record.sequence, record.color
                )));
            }
            if let MoveResult::Rejected(reason) = game.apply_move(Move::from(record.key)) {
                return Err(SimError::Snapshot(format!(
                    "move {} replays as rejected: {}",
                    record.sequence, reason
                )));
            }
        }

        if game.state != expected {
            return Err(SimError::Snapshot("replayed game does not match snapshot".to_string()));
        }
        Ok(game)
    }

    // === Configuration ===

    /// Get the current configuration.
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Change the vertex count and start a fresh game.
    ///
    /// On error the current game is left untouched.
    pub fn configure(&mut self, vertex_count: usize) -> Result<(), SimError> {
        let config = self.config.clone().with_vertex_count(vertex_count);
        config.validate()?;
        log::info!("configured board with {} vertices", vertex_count);
        self.config = config;
        self.reset();
        Ok(())
    }

    /// Start a fresh game on the current board size.
    pub fn reset(&mut self) {
        self.state = BoardState::new(self.config.vertex_count, self.config.starting_color);
    }

    // === Queries ===

    /// All drawn edges in ascending key order.
    #[must_use]
    pub fn edges(&self) -> Vec<Edge> {
        self.state.edges()
    }

    /// Color to move (the winner once the game is over).
    #[must_use]
    pub fn current_color(&self) -> Color {
        self.state.current_color()
    }

    /// Check if a triangle has ended the game.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    /// The triangle that ended the game.
    #[must_use]
    pub fn winning_triangle(&self) -> Option<Triangle> {
        self.state.winning_triangle()
    }

    /// Serializable copy of the whole game state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    /// Shorthand for `apply_move(Move::new(a, b))`.
    pub fn play(&mut self, a: u8, b: u8) -> MoveResult {
        self.apply_move(Move::new(a, b))
    }

    /// Take back moves until `color` is to move again, at least one.
    ///
    /// Against a computer opponent this removes its reply together with the
    /// move that prompted it. Returns the removed edges, newest first; empty
    /// when nothing could be undone.
    pub fn undo_turn(&mut self, color: Color) -> Vec<Edge> {
        let mut removed = Vec::new();
        while let UndoResult::Applied { removed: edge, next } = self.undo() {
            removed.push(edge);
            if next == color {
                break;
            }
        }
        removed
    }
}

impl RulesEngine for SimGame {
    fn state(&self) -> &BoardState {
        &self.state
    }

    fn apply_move(&mut self, mv: Move) -> MoveResult {
        let n = self.state.vertex_count();

        let reason = if self.state.is_game_over() {
            Some(RejectReason::GameOver)
        } else if !mv.a.is_on_board(n) || !mv.b.is_on_board(n) {
            Some(RejectReason::VertexOutOfRange)
        } else {
            None
        };
        if let Some(reason) = reason {
            log::debug!("rejected {}-{}: {}", mv.a, mv.b, reason);
            return MoveResult::Rejected(reason);
        }

        let Some(key) = mv.key() else {
            log::debug!("rejected {}-{}: {}", mv.a, mv.b, RejectReason::SelfLoop);
            return MoveResult::Rejected(RejectReason::SelfLoop);
        };
        if let Some(owner) = self.state.owner(key) {
            log::debug!("rejected {}: already {}", key, owner);
            return MoveResult::Rejected(RejectReason::EdgeTaken);
        }

        let record = self.state.insert_edge(key);
        if let Some(triangle) = find_triangle(&self.state, record.color) {
            self.state.finish(triangle);
            log::info!("{} completed triangle {} with {}", record.color, triangle, key);
            return MoveResult::Win {
                color: record.color,
                triangle,
            };
        }

        let next = self.state.toggle_turn();
        log::debug!("{} drew {}, {} to move", record.color, key, next);
        MoveResult::Accepted {
            edge: Edge::new(key, record.color),
            next,
        }
    }

    fn undo(&mut self) -> UndoResult {
        if self.state.is_game_over() {
            return UndoResult::Rejected(RejectReason::NothingToUndo);
        }
        let Some(record) = self.state.pop_edge() else {
            return UndoResult::Rejected(RejectReason::NothingToUndo);
        };

        let next = self.state.toggle_turn();
        log::debug!("undid {} by {}, {} to move", record.key, record.color, next);
        UndoResult::Applied {
            removed: Edge::new(record.key, record.color),
            next,
        }
    }
}
