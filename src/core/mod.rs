//! Core board types: colors, vertices and edges, configuration, moves, state, RNG.
//!
//! Nothing here knows the win condition; `rules` and `game` build on these
//! types.

pub mod color;
pub mod vertex;
pub mod config;
pub mod action;
pub mod state;
pub mod rng;

pub use color::{Color, ColorMap};
pub use vertex::{Edge, EdgeKey, Triangle, VertexId};
pub use config::{edge_capacity, BoardConfig, DEFAULT_MAX_VERTICES, DEFAULT_VERTICES, MIN_VERTICES, VERTEX_LIMIT};
pub use action::{Move, MoveRecord};
pub use state::{BoardState, GameSnapshot, Phase};
pub use rng::GameRng;
