//! Player colors and per-color data storage.
//!
//! ## Color
//!
//! Sim is strictly a two-player game, so players are identified by the
//! color they draw with rather than by index.
//!
//! ## ColorMap
//!
//! Fixed two-slot storage indexed by `Color` for O(1) access.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two player colors.
///
/// `Red` moves first on a fresh board unless the configuration says otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    #[default]
    Red,
    Blue,
}

impl Color {
    /// Both colors in turn order starting from `Red`.
    pub const ALL: [Color; 2] = [Color::Red, Color::Blue];

    /// The opposing color.
    ///
    /// ```
    /// use sim_game::core::Color;
    ///
    /// assert_eq!(Color::Red.other(), Color::Blue);
    /// assert_eq!(Color::Blue.other(), Color::Red);
    /// ```
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Color::Red => Color::Blue,
            Color::Blue => Color::Red,
        }
    }

    /// Slot index used by `ColorMap`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Blue => 1,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Red => write!(f, "Red"),
            Color::Blue => write!(f, "Blue"),
        }
    }
}

/// Per-color data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use sim_game::core::{Color, ColorMap};
///
/// let mut edges: ColorMap<u32> = ColorMap::with_value(0);
/// edges[Color::Blue] += 2;
///
/// assert_eq!(edges[Color::Red], 0);
/// assert_eq!(edges[Color::Blue], 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    data: [T; 2],
}

impl<T> ColorMap<T> {
    /// Create a new ColorMap with values from a factory function.
    pub fn new(factory: impl Fn(Color) -> T) -> Self {
        Self {
            data: Color::ALL.map(factory),
        }
    }

    /// Create a new ColorMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        &self.data[color.index()]
    }
}

impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        &mut self.data[color.index()]
    }
}
