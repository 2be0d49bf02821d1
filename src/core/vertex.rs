//! Vertex, edge and triangle identification.
//!
//! Vertices are indices `0..vertex_count` around the circle. Every edge is
//! stored under its canonical `EdgeKey`, the ordered pair `(low, high)`, so
//! `(a, b)` and `(b, a)` always name the same edge.
//!
//! ## Usage
//!
//! ```
//! use sim_game::core::{EdgeKey, VertexId};
//!
//! let key = EdgeKey::new(VertexId(4), VertexId(1)).unwrap();
//! assert_eq!(key.low(), VertexId(1));
//! assert_eq!(key.high(), VertexId(4));
//!
//! // A self-loop is not an edge.
//! assert!(EdgeKey::new(VertexId(2), VertexId(2)).is_none());
//! ```

use serde::{Deserialize, Serialize};

use super::color::Color;

/// Index of a vertex on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VertexId(pub u8);

impl VertexId {
    /// Get the raw vertex index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check if this vertex exists on a board with `vertex_count` vertices.
    #[must_use]
    pub const fn is_on_board(self, vertex_count: usize) -> bool {
        (self.0 as usize) < vertex_count
    }

    /// Iterate over all vertices of a board with `vertex_count` vertices.
    pub fn all(vertex_count: usize) -> impl Iterator<Item = VertexId> {
        (0..vertex_count.min(u8::MAX as usize + 1)).map(|i| VertexId(i as u8))
    }
}

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Canonical key of an undirected edge, with `low < high`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeKey {
    low: VertexId,
    high: VertexId,
}

impl EdgeKey {
    /// Canonicalize a vertex pair.
    ///
    /// Returns `None` when both endpoints are the same vertex.
    #[must_use]
    pub fn new(a: VertexId, b: VertexId) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self { low: a, high: b }),
            std::cmp::Ordering::Greater => Some(Self { low: b, high: a }),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// The smaller endpoint.
    #[must_use]
    pub const fn low(self) -> VertexId {
        self.low
    }

    /// The larger endpoint.
    #[must_use]
    pub const fn high(self) -> VertexId {
        self.high
    }

    /// Both endpoints, smaller first.
    #[must_use]
    pub const fn endpoints(self) -> (VertexId, VertexId) {
        (self.low, self.high)
    }
}

impl std::fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.low, self.high)
    }
}

/// A colored edge on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Canonical endpoints.
    pub key: EdgeKey,

    /// Owner of the edge.
    pub color: Color,
}

impl Edge {
    /// Create a new edge.
    #[must_use]
    pub const fn new(key: EdgeKey, color: Color) -> Self {
        Self { key, color }
    }
}

/// Three vertices `i < j < k` whose connecting edges share one color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triangle {
    vertices: [VertexId; 3],
}

impl Triangle {
    /// Create a triangle from three distinct vertices, in any order.
    ///
    /// Returns `None` if any two vertices coincide.
    #[must_use]
    pub fn new(a: VertexId, b: VertexId, c: VertexId) -> Option<Self> {
        let mut vertices = [a, b, c];
        vertices.sort_unstable();
        if vertices[0] == vertices[1] || vertices[1] == vertices[2] {
            return None;
        }
        Some(Self { vertices })
    }

    /// The vertices in ascending order.
    #[must_use]
    pub const fn vertices(&self) -> [VertexId; 3] {
        self.vertices
    }

    /// The three edges in `(i, j), (j, k), (i, k)` order.
    #[must_use]
    pub fn edges(&self) -> [EdgeKey; 3] {
        let [i, j, k] = self.vertices;
        [
            EdgeKey { low: i, high: j },
            EdgeKey { low: j, high: k },
            EdgeKey { low: i, high: k },
        ]
    }

    /// Check if `key` is one of the triangle's edges.
    #[must_use]
    pub fn contains(&self, key: EdgeKey) -> bool {
        self.edges().contains(&key)
    }
}

impl std::fmt::Display for Triangle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [i, j, k] = self.vertices;
        write!(f, "{}-{}-{}", i, j, k)
    }
}
