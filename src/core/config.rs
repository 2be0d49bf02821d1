//! Board configuration.
//!
//! A `BoardConfig` fixes how many vertices sit on the circle, the largest
//! board the host allows, and which color opens the game. The engine reads
//! it on every (re)configuration and never mutates it behind the caller's
//! back.

use serde::{Deserialize, Serialize};

use super::color::Color;
use crate::error::ConfigError;

/// Smallest board on which a triangle exists.
pub const MIN_VERTICES: usize = 3;

/// The classic Sim board.
pub const DEFAULT_VERTICES: usize = 6;

/// Default upper bound on the vertex count.
pub const DEFAULT_MAX_VERTICES: usize = 10;

/// Hard upper bound imposed by `VertexId`'s width and the O(N³) detection.
pub const VERTEX_LIMIT: usize = 64;

/// Number of edges on a full `vertex_count` board, `C(N, 2)`.
#[must_use]
pub const fn edge_capacity(vertex_count: usize) -> usize {
    vertex_count * vertex_count.saturating_sub(1) / 2
}

/// Complete board configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of vertices on the circle.
    pub vertex_count: usize,

    /// Largest vertex count accepted by `validate`.
    pub max_vertices: usize,

    /// Color that moves first after every reset.
    pub starting_color: Color,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            vertex_count: DEFAULT_VERTICES,
            max_vertices: DEFAULT_MAX_VERTICES,
            starting_color: Color::Red,
        }
    }
}

impl BoardConfig {
    /// Create a configuration for `vertex_count` vertices with default limits.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            ..Self::default()
        }
    }

    /// Set the vertex count.
    #[must_use]
    pub fn with_vertex_count(mut self, vertex_count: usize) -> Self {
        self.vertex_count = vertex_count;
        self
    }

    /// Set the largest accepted vertex count.
    #[must_use]
    pub fn with_max_vertices(mut self, max_vertices: usize) -> Self {
        self.max_vertices = max_vertices;
        self
    }

    /// Set the opening color.
    #[must_use]
    pub fn with_starting_color(mut self, color: Color) -> Self {
        self.starting_color = color;
        self
    }

    /// Check that the vertex count lies in `[MIN_VERTICES, max_vertices]`
    /// and that `max_vertices` does not exceed `VERTEX_LIMIT`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_vertices > VERTEX_LIMIT {
            return Err(ConfigError::MaxVerticesTooLarge {
                value: self.max_vertices,
                limit: VERTEX_LIMIT,
            });
        }
        if !(MIN_VERTICES..=self.max_vertices).contains(&self.vertex_count) {
            return Err(ConfigError::VertexCountOutOfRange {
                value: self.vertex_count,
                min: MIN_VERTICES,
                max: self.max_vertices,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BoardConfig::default();

        assert_eq!(config.vertex_count, 6);
        assert_eq!(config.max_vertices, 10);
        assert_eq!(config.starting_color, Color::Red);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_config_builder() {
        let config = BoardConfig::new(8)
            .with_max_vertices(12)
            .with_starting_color(Color::Blue);

        assert_eq!(config.vertex_count, 8);
        assert_eq!(config.max_vertices, 12);
        assert_eq!(config.starting_color, Color::Blue);
    }

    #[test]
    fn test_edge_capacity() {
        assert_eq!(edge_capacity(0), 0);
        assert_eq!(edge_capacity(3), 3);
        assert_eq!(edge_capacity(6), 15);
        assert_eq!(edge_capacity(10), 45);
    }

    #[test]
    fn test_validate_too_small() {
        assert_eq!(
            BoardConfig::new(2).validate(),
            Err(ConfigError::VertexCountOutOfRange { value: 2, min: 3, max: 10 })
        );
    }

    #[test]
    fn test_validate_above_max() {
        assert!(BoardConfig::new(11).validate().is_err());
        assert!(BoardConfig::new(11).with_max_vertices(11).validate().is_ok());
    }

    #[test]
    fn test_validate_limit() {
        let config = BoardConfig::new(6).with_max_vertices(VERTEX_LIMIT + 1);
        assert_eq!(
            config.validate(),
            Err(ConfigError::MaxVerticesTooLarge { value: 65, limit: 64 })
        );
    }
}
