//! Disc colors.
//!
//! Stack Othello has exactly two sides. An empty cell has no color, which the
//! board expresses as `Option<Color>` rather than a third variant.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the two sides. Black always moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// Both colors in turn order.
    pub const ALL: [Color; 2] = [Color::Black, Color::White];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Black => "Black",
            Color::White => "White",
        }
    }

    /// Layout character for a stack of this color.
    ///
    /// Lowercase for a single disc, uppercase for a taller stack.
    #[must_use]
    pub(crate) const fn symbol(self, height: u8) -> char {
        match (self, height > 1) {
            (Color::Black, false) => 'b',
            (Color::Black, true) => 'B',
            (Color::White, false) => 'w',
            (Color::White, true) => 'W',
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "black" | "b" => Ok(Color::Black),
            "white" | "w" => Ok(Color::White),
            other => Err(format!("unknown color '{other}' (expected black or white)")),
        }
    }
}
