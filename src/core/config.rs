//! Session configuration.
//!
//! A session is configured once, up front, by a `GameConfig` value:
//! - `BoardSize`: 4x4, 6x6 or 8x8
//! - maximum stack height (default 2)
//! - which color, if any, the computer plays
//! - the computer's `Difficulty`
//!
//! There is no process-wide settings object; front ends build a config and
//! hand it to `StackOthello::new`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::color::Color;
use super::error::ConfigError;

/// Default maximum stack height.
pub const DEFAULT_MAX_STACK_HEIGHT: u8 = 2;

/// Supported board dimensions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardSize {
    Four,
    Six,
    #[default]
    Eight,
}

impl BoardSize {
    /// Number of cells along one side.
    #[must_use]
    pub const fn side(self) -> usize {
        match self {
            BoardSize::Four => 4,
            BoardSize::Six => 6,
            BoardSize::Eight => 8,
        }
    }

    /// Total number of cells.
    #[must_use]
    pub const fn cells(self) -> usize {
        self.side() * self.side()
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = ConfigError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        match n {
            4 => Ok(BoardSize::Four),
            6 => Ok(BoardSize::Six),
            8 => Ok(BoardSize::Eight),
            other => Err(ConfigError::UnsupportedBoardSize(other)),
        }
    }
}

impl std::fmt::Display for BoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{0}x{0}", self.side())
    }
}

/// Computer player strength.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Uniformly random legal move.
    Easy,
    /// Best-scoring move most of the time, random otherwise.
    #[default]
    Medium,
    /// Always the best-scoring move.
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!(
                "unknown difficulty '{other}' (expected easy, medium or hard)"
            )),
        }
    }
}

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board dimensions.
    pub board_size: BoardSize,

    /// Tallest stack a cell may hold (at least 1).
    pub max_stack_height: u8,

    /// Color played by the computer. `None` for human vs human.
    pub cpu_color: Option<Color>,

    /// Strength of the computer player.
    pub difficulty: Difficulty,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}

impl GameConfig {
    /// Create a human vs human configuration for the given board.
    #[must_use]
    pub fn new(board_size: BoardSize) -> Self {
        Self {
            board_size,
            max_stack_height: DEFAULT_MAX_STACK_HEIGHT,
            cpu_color: None,
            difficulty: Difficulty::default(),
        }
    }

    /// Set the maximum stack height.
    #[must_use]
    pub fn with_max_stack_height(mut self, height: u8) -> Self {
        self.max_stack_height = height;
        self
    }

    /// Let the computer play `color`.
    #[must_use]
    pub fn with_cpu(mut self, color: Color) -> Self {
        self.cpu_color = Some(color);
        self
    }

    /// Set the computer's difficulty.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Check the configuration for values the engine cannot play with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_stack_height == 0 {
            return Err(ConfigError::InvalidStackHeight(self.max_stack_height));
        }
        Ok(())
    }

    /// Whether the computer controls `color`.
    #[must_use]
    pub fn is_cpu(&self, color: Color) -> bool {
        self.cpu_color == Some(color)
    }
}
