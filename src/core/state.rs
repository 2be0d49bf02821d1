//! Board state and its public snapshot.
//!
//! ## BoardState
//!
//! Everything the rules mutate:
//! - Edge ownership, keyed by canonical `EdgeKey`
//! - Move history (LIFO, for undo)
//! - Turn color, phase and the winning triangle
//!
//! The mutators are crate-private; only `SimGame` drives them, so edges,
//! history and flags always change together.
//!
//! ## GameSnapshot
//!
//! A plain, serializable copy of the state for renderers, persistence and
//! replay. Edges are listed in ascending key order.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::action::MoveRecord;
use super::color::{Color, ColorMap};
use super::config::{edge_capacity, MIN_VERTICES, VERTEX_LIMIT};
use super::vertex::{Edge, EdgeKey, Triangle};
use crate::error::SimError;

/// Lifecycle phase of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Moves are accepted.
    #[default]
    Playing,
    /// A triangle was completed; only a reset leaves this phase.
    GameOver,
}

/// Mutable rule state of one game.
///
/// `history` is an `im::Vector` so cloning a game for playouts stays cheap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardState {
    vertex_count: usize,
    edges: FxHashMap<EdgeKey, Color>,
    history: Vector<MoveRecord>,
    edge_counts: ColorMap<u32>,
    current_color: Color,
    phase: Phase,
    winning_triangle: Option<Triangle>,
}

impl BoardState {
    /// Create an empty board.
    #[must_use]
    pub fn new(vertex_count: usize, starting_color: Color) -> Self {
        Self {
            vertex_count,
            edges: FxHashMap::default(),
            history: Vector::new(),
            edge_counts: ColorMap::with_value(0),
            current_color: starting_color,
            phase: Phase::Playing,
            winning_triangle: None,
        }
    }

    // === Queries ===

    /// Number of vertices on the board.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Owner of an edge, if it has been drawn.
    #[must_use]
    pub fn owner(&self, key: EdgeKey) -> Option<Color> {
        self.edges.get(&key).copied()
    }

    /// Check if `key` is drawn in `color`.
    #[must_use]
    pub fn has_edge(&self, key: EdgeKey, color: Color) -> bool {
        self.owner(key) == Some(color)
    }

    /// All drawn edges in ascending key order.
    #[must_use]
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges: Vec<Edge> = self
            .edges
            .iter()
            .map(|(&key, &color)| Edge::new(key, color))
            .collect();
        edges.sort_unstable_by_key(|e| e.key);
        edges
    }

    /// Number of drawn edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of edges drawn by `color`.
    #[must_use]
    pub fn edge_count_for(&self, color: Color) -> usize {
        self.edge_counts[color] as usize
    }

    /// Check if every pair of vertices is connected.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.edges.len() == edge_capacity(self.vertex_count)
    }

    /// Moves in play order.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// The most recent move, if any.
    #[must_use]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.back()
    }

    /// Color expected to move next (or the winner once the game is over).
    #[must_use]
    pub fn current_color(&self) -> Color {
        self.current_color
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Check if a triangle has ended the game.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// The triangle that ended the game.
    #[must_use]
    pub fn winning_triangle(&self) -> Option<Triangle> {
        self.winning_triangle
    }

    // === Mutation ===

    /// Draw `key` in the current color and append it to history.
    ///
    /// The caller has already checked that the edge is free.
    pub(crate) fn insert_edge(&mut self, key: EdgeKey) -> MoveRecord {
        debug_assert!(!self.edges.contains_key(&key), "edge {} already drawn", key);
        let record = MoveRecord::new(key, self.current_color, self.history.len() as u32);
        self.edges.insert(key, record.color);
        self.edge_counts[record.color] += 1;
        self.history.push_back(record);
        record
    }

    /// Remove the most recent edge. Does not touch the turn color.
    pub(crate) fn pop_edge(&mut self) -> Option<MoveRecord> {
        let record = self.history.pop_back()?;
        self.edges.remove(&record.key);
        self.edge_counts[record.color] -= 1;
        Some(record)
    }

    /// Pass the turn to the other color.
    pub(crate) fn toggle_turn(&mut self) -> Color {
        self.current_color = self.current_color.other();
        self.current_color
    }

    /// Enter `GameOver` with the given triangle.
    pub(crate) fn finish(&mut self, triangle: Triangle) {
        self.phase = Phase::GameOver;
        self.winning_triangle = Some(triangle);
    }

    // === Snapshots ===

    /// Copy the state into a serializable snapshot.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            vertex_count: self.vertex_count,
            edges: self.edges(),
            history: self.history.iter().copied().collect(),
            current_color: self.current_color,
            game_over: self.is_game_over(),
            winning_triangle: self.winning_triangle,
        }
    }

    /// Rebuild a state from a snapshot, checking that edges and history agree.
    ///
    /// Rule-level checks (triangle presence) are done by the game.
    pub(crate) fn from_snapshot(snapshot: &GameSnapshot) -> Result<Self, SimError> {
        let n = snapshot.vertex_count;
        if !(MIN_VERTICES..=VERTEX_LIMIT).contains(&n) {
            return Err(SimError::Snapshot(format!("unsupported vertex count {}", n)));
        }
        let mut state = Self::new(n, snapshot.current_color);

        for (index, record) in snapshot.history.iter().enumerate() {
            let (low, high) = record.key.endpoints();
            if low >= high || !high.is_on_board(n) {
                return Err(SimError::Snapshot(format!("edge {} is not on a {}-vertex board", record.key, n)));
            }
            if record.sequence as usize != index {
                return Err(SimError::Snapshot(format!(
                    "move {} has sequence {}",
                    index, record.sequence
                )));
            }
            if state.edges.contains_key(&record.key) {
                return Err(SimError::Snapshot(format!("edge {} played twice", record.key)));
            }
            state.current_color = record.color;
            state.insert_edge(record.key);
        }

        if state.edges() != snapshot.edges {
            return Err(SimError::Snapshot("edge list does not match history".to_string()));
        }

        state.current_color = snapshot.current_color;
        match (snapshot.game_over, snapshot.winning_triangle) {
            (true, Some(triangle)) => state.finish(triangle),
            (false, None) => {}
            _ => {
                return Err(SimError::Snapshot(
                    "game-over flag and winning triangle disagree".to_string(),
                ))
            }
        }
        Ok(state)
    }
}

/// Serializable view of a game, as handed to renderers and storage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Number of vertices on the board.
    pub vertex_count: usize,

    /// Drawn edges in ascending key order.
    pub edges: Vec<Edge>,

    /// Moves in play order.
    pub history: Vec<MoveRecord>,

    /// Color to move (the winner once the game is over).
    pub current_color: Color,

    /// Whether a triangle has ended the game.
    pub game_over: bool,

    /// The triangle that ended the game.
    pub winning_triangle: Option<Triangle>,
}

impl GameSnapshot {
    /// Check if an edge belongs to the winning triangle.
    ///
    /// Renderers use this to highlight the triangle.
    #[must_use]
    pub fn is_winning_edge(&self, key: EdgeKey) -> bool {
        self.winning_triangle.is_some_and(|t| t.contains(key))
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SimError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SimError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
