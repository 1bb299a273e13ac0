//! Move representation and placement records.
//!
//! A `Move` is a target cell plus its kind: a *normal* move drops the first
//! disc on an empty cell, a *stacking* move puts another disc on a stack the
//! mover already owns. Every accepted placement produces a `MoveRecord`,
//! which is also what the game history stores.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::board::Position;
use super::color::Color;
use super::state::GameResult;

/// Cells captured by one placement.
///
/// Sized so that typical captures stay off the heap.
pub type Captures = SmallVec<[Position; 16]>;

/// Whether a placement starts a new stack or grows an existing one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// Target cell is empty.
    Normal,
    /// Target cell is already owned by the mover and below the stack limit.
    Stacking,
}

/// A legal placement target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: Position,
    pub kind: MoveKind,
}

impl Move {
    #[must_use]
    pub const fn new(position: Position, kind: MoveKind) -> Self {
        Self { position, kind }
    }

    #[must_use]
    pub fn is_stacking(&self) -> bool {
        self.kind == MoveKind::Stacking
    }
}

/// What happened to the turn after a placement (or pass).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// Play passes to `next` as usual.
    Continue { next: Color },
    /// `passed` had no legal move, so `next` (the player who just acted)
    /// moves again.
    Pass { passed: Color, next: Color },
    /// Neither side can move.
    GameOver(GameResult),
}

impl TurnOutcome {
    /// Color to move next, `None` once the game is over.
    #[must_use]
    pub fn next(&self) -> Option<Color> {
        match *self {
            TurnOutcome::Continue { next } | TurnOutcome::Pass { next, .. } => Some(next),
            TurnOutcome::GameOver(_) => None,
        }
    }
}

/// An accepted placement with its effects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Placement number, starting at 1.
    pub ply: u32,

    /// The color that placed.
    pub color: Color,

    /// Target and kind.
    pub mv: Move,

    /// Stacks that changed owner.
    pub captured: Captures,

    /// Turn state after the placement.
    pub outcome: TurnOutcome,
}
