//! Game state: board, side to move, game-over flag and history.
//!
//! `GameState` is plain data. Only the rules engine mutates it; everything
//! else (the move selector, front ends) reads it through a shared borrow or
//! works on a clone.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::color::Color;
use super::config::BoardSize;
use super::moves::MoveRecord;

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Strictly more discs than the opponent.
    Winner(Color),
    /// Equal disc counts.
    Draw,
}

impl GameResult {
    /// Decide the result from the two disc totals.
    #[must_use]
    pub fn from_counts(black: u32, white: u32) -> Self {
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => GameResult::Winner(Color::Black),
            std::cmp::Ordering::Less => GameResult::Winner(Color::White),
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }

    /// Check if `color` won.
    #[must_use]
    pub fn is_winner(&self, color: Color) -> bool {
        *self == GameResult::Winner(color)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(color) => write!(f, "{color} wins"),
            GameResult::Draw => f.write_str("draw"),
        }
    }
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) turn: Color,
    pub(crate) over: bool,
    pub(crate) history: Vec<MoveRecord>,
}

impl GameState {
    /// Opening position: four center discs, Black to move. A stack limit of
    /// 0 is raised to 1.
    #[must_use]
    pub fn new(size: BoardSize, max_stack_height: u8) -> Self {
        Self::from_board(Board::opening(size, max_stack_height), Color::Black)
    }

    /// Start from an arbitrary board with `turn` to move.
    #[must_use]
    pub fn from_board(board: Board, turn: Color) -> Self {
        Self {
            board,
            turn,
            over: false,
            history: Vec::new(),
        }
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Color to move. After the game ends this is the side that would have
    /// moved next.
    #[must_use]
    pub fn current_turn(&self) -> Color {
        self.turn
    }

    /// Whether neither side can move any more.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Discs owned by `color`, counting every disc in every owned stack.
    #[must_use]
    pub fn count_discs(&self, color: Color) -> u32 {
        self.board.count_discs(color)
    }

    /// Final result, `None` while the game is still in progress.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.over.then(|| {
            GameResult::from_counts(
                self.board.count_discs(Color::Black),
                self.board.count_discs(Color::White),
            )
        })
    }

    /// Accepted placements, oldest first.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Number of accepted placements so far.
    #[must_use]
    pub fn ply(&self) -> u32 {
        self.history.len() as u32
    }
}
