//! The computer player.

use log::debug;

use crate::core::{Board, Color, Difficulty, GameRng, GameState, Position};
use crate::rules::capture;

use super::eval::Evaluator;
use super::policy::{policy_for, ScoredMove};
use super::weights::{EdgeDistanceWeights, PositionWeights};

/// Chooses moves for a computer-controlled color.
///
/// Holds only its evaluator; randomness comes in with every call, so the
/// same state, difficulty and RNG state always give the same move.
#[derive(Clone, Debug)]
pub struct MoveSelector<W = EdgeDistanceWeights> {
    evaluator: Evaluator<W>,
}

impl MoveSelector {
    /// Selector with the default positional weights.
    #[must_use]
    pub fn new() -> Self {
        Self::with_weights(EdgeDistanceWeights)
    }
}

impl Default for MoveSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: PositionWeights> MoveSelector<W> {
    /// Selector with custom positional weights.
    pub fn with_weights(weights: W) -> Self {
        Self {
            evaluator: Evaluator::new(weights),
        }
    }

    /// The evaluator in use.
    pub fn evaluator(&self) -> &Evaluator<W> {
        &self.evaluator
    }

    /// Every legal move for `color` with its score, in row-major order.
    pub fn scored_moves(&self, board: &Board, color: Color) -> Vec<ScoredMove> {
        capture::legal_moves(board, color)
            .into_iter()
            .map(|mv| ScoredMove {
                mv,
                score: self.evaluator.evaluate(board, mv.position, color),
            })
            .collect()
    }

    /// Pick a move for `color`. `None` means `color` has to pass.
    pub fn select_move(
        &self,
        state: &GameState,
        color: Color,
        difficulty: Difficulty,
        rng: &mut GameRng,
    ) -> Option<Position> {
        let candidates = self.scored_moves(state.board(), color);
        let idx = policy_for(difficulty).choose(&candidates, rng)?;
        let chosen = candidates[idx];
        debug!(
            "{color} ({difficulty}) picks {} score {} from {} candidates",
            chosen.mv.position,
            chosen.score,
            candidates.len()
        );
        Some(chosen.mv.position)
    }
}
