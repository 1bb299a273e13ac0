//! Board data model: colors, board, moves, state, configuration, RNG, errors.
//!
//! Everything here is plain data. The rules that move a game forward live in
//! `rules`; the computer player lives in `selector`.

pub mod board;
pub mod color;
pub mod config;
pub mod error;
pub mod moves;
pub mod rng;
pub mod state;

pub use board::{Board, Position, Stack, StackInfo};
pub use color::Color;
pub use config::{BoardSize, Difficulty, GameConfig, DEFAULT_MAX_STACK_HEIGHT};
pub use error::{ConfigError, IllegalMove, LayoutError, PassError};
pub use moves::{Captures, Move, MoveKind, MoveRecord, TurnOutcome};
pub use rng::{GameRng, GameRngState};
pub use state::{GameResult, GameState};
