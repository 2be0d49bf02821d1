//! Circle layout of the vertices.
//!
//! Vertex `i` of `n` sits at angle `i / n · 2π − π/2` on a circle, so
//! vertex 0 is at the top and the rest follow clockwise in screen
//! coordinates (y grows downward).

use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, TAU};

use crate::core::VertexId;

/// A point in screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Geometry of the board on screen.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CircleLayout {
    /// Center of the circle.
    pub center: Point,

    /// Radius of the circle the vertices sit on.
    pub radius: f64,

    /// A pointer strictly closer than this to a vertex selects it.
    pub hit_radius: f64,
}

impl Default for CircleLayout {
    fn default() -> Self {
        Self {
            center: Point::new(250.0, 250.0),
            radius: 200.0,
            hit_radius: 10.0,
        }
    }
}

impl CircleLayout {
    /// Position of `vertex` on a board with `vertex_count` vertices.
    #[must_use]
    pub fn position(&self, vertex: VertexId, vertex_count: usize) -> Point {
        let angle = vertex.index() as f64 / vertex_count as f64 * TAU - FRAC_PI_2;
        Point::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }

    /// Positions of all vertices, by index.
    #[must_use]
    pub fn positions(&self, vertex_count: usize) -> Vec<Point> {
        VertexId::all(vertex_count)
            .map(|v| self.position(v, vertex_count))
            .collect()
    }

    /// The lowest-indexed vertex within `hit_radius` of `point`.
    #[must_use]
    pub fn hit_test(&self, vertex_count: usize, point: Point) -> Option<VertexId> {
        VertexId::all(vertex_count)
            .find(|&v| self.position(v, vertex_count).distance(point) < self.hit_radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        a.distance(b) < 1e-9
    }

    #[test]
    fn test_first_vertex_at_top() {
        let layout = CircleLayout::default();
        assert!(close(layout.position(VertexId(0), 6), Point::new(250.0, 50.0)));
    }

    #[test]
    fn test_square_positions() {
        let layout = CircleLayout::default();
        let positions = layout.positions(4);

        assert_eq!(positions.len(), 4);
        assert!(close(positions[0], Point::new(250.0, 50.0)));
        assert!(close(positions[1], Point::new(450.0, 250.0)));
        assert!(close(positions[2], Point::new(250.0, 450.0)));
        assert!(close(positions[3], Point::new(50.0, 250.0)));
    }

    #[test]
    fn test_vertices_on_circle() {
        let layout = CircleLayout::default();
        for p in layout.positions(7) {
            assert!((p.distance(layout.center) - 200.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_hit_test() {
        let layout = CircleLayout::default();

        assert_eq!(layout.hit_test(4, Point::new(255.0, 52.0)), Some(VertexId(0)));
        assert_eq!(layout.hit_test(4, Point::new(445.0, 250.0)), Some(VertexId(1)));
        assert_eq!(layout.hit_test(4, Point::new(250.0, 250.0)), None);
    }

    #[test]
    fn test_hit_radius_is_strict() {
        let layout = CircleLayout::default();

        assert_eq!(layout.hit_test(4, Point::new(440.0, 250.0)), None);
        assert_eq!(layout.hit_test(4, Point::new(440.5, 250.0)), Some(VertexId(1)));
    }
}
