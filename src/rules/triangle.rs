//! Monochromatic triangle detection.
//!
//! Enumerates vertex triples `i < j < k` in ascending lexicographic order
//! and reports the first one whose three edges are all owned by the given
//! color. O(N³) per call, which is fine for boards of at most
//! `VERTEX_LIMIT` vertices.

use crate::core::{BoardState, Color, EdgeKey, Triangle, VertexId};

/// Find the first triangle of `color` on the board, if any.
///
/// ```
/// use sim_game::core::{Color, Move};
/// use sim_game::game::SimGame;
/// use sim_game::rules::{find_triangle, RulesEngine};
///
/// let mut game = SimGame::new(5).unwrap();
/// for (a, b) in [(0, 1), (3, 4), (1, 2), (2, 3)] {
///     game.apply_move(Move::new(a, b));
/// }
/// assert!(find_triangle(game.state(), Color::Red).is_none());
/// ```
#[must_use]
pub fn find_triangle(state: &BoardState, color: Color) -> Option<Triangle> {
    let n = state.vertex_count();
    let owned = |a: VertexId, b: VertexId| {
        EdgeKey::new(a, b).is_some_and(|key| state.has_edge(key, color))
    };

    for i in VertexId::all(n) {
        for j in VertexId::all(n).skip(i.index() + 1) {
            if !owned(i, j) {
                continue;
            }
            for k in VertexId::all(n).skip(j.index() + 1) {
                if owned(j, k) && owned(i, k) {
                    return Triangle::new(i, j, k);
                }
            }
        }
    }
    None
}
