//! The Sim game.
//!
//! Two players take turns coloring edges of the complete graph on N
//! vertices, Red in one color and Blue in the other. Whoever closes a
//! triangle whose three edges all carry their own color is declared the
//! winner, and the board freezes until it is reset or reconfigured.
//!
//! Supports 3 to `VERTEX_LIMIT` vertices; 6 is the classic board.

mod sim;

pub use sim::SimGame;
