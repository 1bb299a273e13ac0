//! # stack-othello
//!
//! Rules engine and computer opponent for Stack Othello, an Othello variant
//! where a player may drop a disc onto one of their own stacks instead of
//! an empty cell.
//!
//! ## Rules in Brief
//!
//! 1. **Placement**: a disc goes on an empty cell, or on top of an own stack
//!    below the maximum stack height.
//!
//! 2. **Captures**: as in Othello, every straight run of opponent stacks
//!    closed off by an own stack changes owner. A captured stack keeps its
//!    height; only its color changes.
//!
//! 3. **Passing**: a side with no legal placement passes automatically.
//!    When neither side can place, the game ends and the side owning more
//!    discs (stack heights summed) wins.
//!
//! ## Architecture
//!
//! - **Single Mutator**: `StackOthello` owns the `GameState` and is the only
//!   thing that changes it. The computer player only reads state and hands
//!   back a coordinate that goes through the same `place` call a human uses.
//!
//! - **Reproducible Randomness**: every random choice draws from a seeded
//!   `GameRng` passed in by the caller.
//!
//! ## Modules
//!
//! - `core`: Colors, board, moves, state, configuration, RNG, errors
//! - `rules`: Legality, captures, turn advancement, the `StackOthello` session
//! - `selector`: Move evaluation and difficulty-tiered move selection

pub mod core;
pub mod rules;
pub mod selector;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardSize, Captures, Color, ConfigError, Difficulty, GameConfig, GameResult, GameRng,
    GameRngState, GameState, IllegalMove, LayoutError, Move, MoveKind, MoveRecord, PassError,
    Position, Stack, StackInfo, TurnOutcome, DEFAULT_MAX_STACK_HEIGHT,
};

pub use crate::rules::StackOthello;

pub use crate::selector::{
    Evaluator, MoveSelector, PositionWeights, ScoredMove, SelectionPolicy, WeightTable,
};
