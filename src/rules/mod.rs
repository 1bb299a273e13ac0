//! Rules engine: legality, captures, turn order, passes and game end.
//!
//! - `capture`: read-only legality and capture detection on a `Board`
//! - `engine`: `StackOthello`, the session that owns and mutates `GameState`

pub mod capture;
pub mod engine;

pub use capture::{check_placement, has_legal_move, is_legal, legal_moves, DIRECTIONS};
pub use engine::StackOthello;
