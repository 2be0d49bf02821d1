//! Move requests and history records.
//!
//! A `Move` is what the input side asks for: two vertices in whatever order
//! they were picked. The engine canonicalizes it into an `EdgeKey`. Every
//! accepted move leaves a `MoveRecord` in the history, which is what undo
//! pops.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::vertex::{EdgeKey, VertexId};

/// A request to draw the edge between two vertices.
///
/// ## Example
///
/// ```
/// use sim_game::core::{Move, VertexId};
///
/// let mv = Move::new(3, 1);
/// assert_eq!(mv.a, VertexId(3));
/// assert_eq!(mv.key().unwrap().low(), VertexId(1));
///
/// assert!(Move::new(2, 2).key().is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// First vertex picked.
    pub a: VertexId,

    /// Second vertex picked.
    pub b: VertexId,
}

impl Move {
    /// Create a move from raw vertex indices.
    #[must_use]
    pub const fn new(a: u8, b: u8) -> Self {
        Self {
            a: VertexId(a),
            b: VertexId(b),
        }
    }

    /// Create a move from vertex ids.
    #[must_use]
    pub const fn between(a: VertexId, b: VertexId) -> Self {
        Self { a, b }
    }

    /// The canonical edge key, or `None` for a self-loop.
    #[must_use]
    pub fn key(&self) -> Option<EdgeKey> {
        EdgeKey::new(self.a, self.b)
    }
}

impl From<EdgeKey> for Move {
    fn from(key: EdgeKey) -> Self {
        let (a, b) = key.endpoints();
        Self { a, b }
    }
}

/// A recorded move, kept in play order for undo and replay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The edge that was drawn.
    pub key: EdgeKey,

    /// The color that drew it.
    pub color: Color,

    /// Zero-based position of this move since the last reset.
    pub sequence: u32,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub const fn new(key: EdgeKey, color: Color, sequence: u32) -> Self {
        Self { key, color, sequence }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_key_is_order_independent() {
        assert_eq!(Move::new(0, 4).key(), Move::new(4, 0).key());
    }

    #[test]
    fn test_move_self_loop_has_no_key() {
        assert_eq!(Move::new(1, 1).key(), None);
    }

    #[test]
    fn test_move_from_key() {
        let key = EdgeKey::new(VertexId(5), VertexId(2)).unwrap();
        let mv = Move::from(key);

        assert_eq!(mv, Move::new(2, 5));
        assert_eq!(mv.key(), Some(key));
    }

    #[test]
    fn test_move_record() {
        let key = EdgeKey::new(VertexId(0), VertexId(1)).unwrap();
        let record = MoveRecord::new(key, Color::Blue, 7);

        assert_eq!(record.key, key);
        assert_eq!(record.color, Color::Blue);
        assert_eq!(record.sequence, 7);
    }

    #[test]
    fn test_move_record_serialization() {
        let key = EdgeKey::new(VertexId(2), VertexId(3)).unwrap();
        let record = MoveRecord::new(key, Color::Red, 0);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: MoveRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
