//! Computer opponent.
//!
//! ## Overview
//!
//! The selector scores every legal move and then lets a difficulty-specific
//! policy pick one:
//!
//! - **Easy**: uniformly random legal move
//! - **Medium**: best move 70% of the time, random otherwise
//! - **Hard**: always the best move (first in row-major order on ties)
//!
//! It only reads game state. The caller submits the chosen move through
//! `StackOthello::place`, exactly like a human move.
//!
//! ## Usage
//!
//! ```rust
//! use stack_othello::core::{Color, Difficulty, GameConfig, GameRng};
//! use stack_othello::rules::StackOthello;
//! use stack_othello::selector::MoveSelector;
//!
//! let mut game = StackOthello::new(GameConfig::default()).unwrap();
//! let selector = MoveSelector::new();
//! let mut rng = GameRng::new(42);
//!
//! if let Some(pos) = selector.select_move(game.state(), Color::Black, Difficulty::Hard, &mut rng) {
//!     game.place(pos.x as i32, pos.y as i32, Color::Black).unwrap();
//! }
//! assert_eq!(game.current_turn(), Color::White);
//! ```
//!
//! ## Custom Weights
//!
//! Positional weights are pluggable through `PositionWeights`:
//!
//! ```rust
//! use stack_othello::selector::{MoveSelector, WeightTable};
//!
//! let selector = MoveSelector::with_weights(WeightTable::classic());
//! ```

pub mod eval;
pub mod move_selector;
pub mod policy;
pub mod weights;

pub use eval::Evaluator;
pub use move_selector::MoveSelector;
pub use policy::{policy_for, Greedy, MixedGreedy, ScoredMove, SelectionPolicy, UniformRandom};
pub use weights::{EdgeDistanceWeights, PositionWeights, WeightTable, CLASSIC_8X8};
