//! Move evaluation.
//!
//! A candidate's score is the sum of three terms:
//! - the positional weight of the target cell,
//! - twice the number of discs captured (whole stacks count, so flipping a
//!   tall stack is worth more than a single disc),
//! - a bonus for stacking onto an own stack, larger on a corner.

use crate::core::{Board, Color, Position};
use crate::rules::capture;

use super::weights::{EdgeDistanceWeights, PositionWeights};

/// Score per captured disc.
pub const CAPTURE_WEIGHT: i32 = 2;

/// Bonus for stacking onto an own corner.
pub const CORNER_STACK_BONUS: i32 = 50;

/// Bonus for stacking anywhere else.
pub const STACK_BONUS: i32 = 10;

/// Scores candidate placements with a given weight scheme.
#[derive(Clone, Debug)]
pub struct Evaluator<W = EdgeDistanceWeights> {
    weights: W,
}

impl Evaluator {
    /// Evaluator using `EdgeDistanceWeights`.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(EdgeDistanceWeights)
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::standard()
    }
}

impl<W: PositionWeights> Evaluator<W> {
    /// Create an evaluator with custom positional weights.
    pub fn new(weights: W) -> Self {
        Self { weights }
    }

    /// The positional weight scheme.
    pub fn weights(&self) -> &W {
        &self.weights
    }

    /// Score a placement of `color` at `pos`.
    ///
    /// Illegal targets still get their positional and stacking terms; the
    /// capture term is then zero. Off-board positions score zero.
    pub fn evaluate(&self, board: &Board, pos: Position, color: Color) -> i32 {
        if !board.contains(pos) {
            return 0;
        }
        let positional = self.weights.weight(pos, board.side());

        let captured_discs: i32 = capture::captures_from(board, pos, color)
            .iter()
            .map(|&cell| i32::from(board.height(cell)))
            .sum();

        let stacking = match board.height(pos) {
            0 => 0,
            _ if board.is_corner(pos) => CORNER_STACK_BONUS,
            _ => STACK_BONUS,
        };

        positional + CAPTURE_WEIGHT * captured_discs + stacking
    }
}
