//! Positional weights.
//!
//! Corners can never be captured, so they are worth a lot; the cells that
//! hand a corner to the opponent are worth less than nothing. The classic
//! weight table only exists for 8x8:
//!
//! ```text
//! 100 -20  10   5   5  10 -20 100
//! -20 -30  -5  -5  -5  -5 -30 -20
//!  10  -5   1   1   1   1  -5  10
//!   5  -5   1   1   1   1  -5   5
//!   5  -5   1   1   1   1  -5   5
//!  10  -5   1   1   1   1  -5  10
//! -20 -30  -5  -5  -5  -5 -30 -20
//! 100 -20  10   5   5  10 -20 100
//! ```
//!
//! `EdgeDistanceWeights` derives the same numbers from each cell's distance
//! to the nearest edge along both axes, which also gives 4x4 and 6x6 boards a
//! consistent corner/edge/interior scheme. Other schemes plug in through
//! `PositionWeights`.

use crate::core::Position;

/// Source of positional weights for move evaluation.
pub trait PositionWeights: Send + Sync {
    /// Weight of `pos` on a board with `side` cells per side. Positions off
    /// the board weigh nothing.
    fn weight(&self, pos: Position, side: usize) -> i32;
}

/// Weights from the distance to the nearest edge on each axis.
///
/// With `near`/`far` the smaller/larger of the two distances:
///
/// | near | far | weight | |
/// |---|---|---|---|
/// | 0 | 0 | 100 | corner |
/// | 0 | 1 | -20 | edge cell next to a corner |
/// | 1 | 1 | -30 | diagonal to a corner |
/// | 0 | 2 | 10 | edge, two from a corner |
/// | 0 | 3+ | 5 | other edge cells |
/// | 1 | 2+ | -5 | second ring |
/// | 2+ | 2+ | 1 | interior |
#[derive(Clone, Copy, Debug, Default)]
pub struct EdgeDistanceWeights;

impl PositionWeights for EdgeDistanceWeights {
    fn weight(&self, pos: Position, side: usize) -> i32 {
        if pos.x >= side || pos.y >= side {
            return 0;
        }
        let last = side - 1;
        let dx = pos.x.min(last - pos.x);
        let dy = pos.y.min(last - pos.y);

        match (dx.min(dy), dx.max(dy)) {
            (0, 0) => 100,
            (0, 1) => -20,
            (1, 1) => -30,
            (0, 2) => 10,
            (0, _) => 5,
            (1, _) => -5,
            _ => 1,
        }
    }
}

/// The classic 8x8 table, indexed `[y][x]`.
pub const CLASSIC_8X8: [[i32; 8]; 8] = [
    [100, -20, 10, 5, 5, 10, -20, 100],
    [-20, -30, -5, -5, -5, -5, -30, -20],
    [10, -5, 1, 1, 1, 1, -5, 10],
    [5, -5, 1, 1, 1, 1, -5, 5],
    [5, -5, 1, 1, 1, 1, -5, 5],
    [10, -5, 1, 1, 1, 1, -5, 10],
    [-20, -30, -5, -5, -5, -5, -30, -20],
    [100, -20, 10, 5, 5, 10, -20, 100],
];

/// An explicit weight table for one board size.
///
/// Boards of any other size fall back to `EdgeDistanceWeights`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeightTable {
    side: usize,
    weights: Vec<i32>,
}

impl WeightTable {
    /// Build a table from rows, top row first. Returns `None` unless the
    /// rows form a square.
    #[must_use]
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> Option<Self> {
        let side = rows.len();
        if side == 0 || rows.iter().any(|r| r.as_ref().len() != side) {
            return None;
        }
        let weights = rows.iter().flat_map(|r| r.as_ref().iter().copied()).collect();
        Some(Self { side, weights })
    }

    /// The classic 8x8 table.
    #[must_use]
    pub fn classic() -> Self {
        Self {
            side: 8,
            weights: CLASSIC_8X8.iter().flatten().copied().collect(),
        }
    }

    /// Side length the table covers.
    #[must_use]
    pub fn side(&self) -> usize {
        self.side
    }
}

impl PositionWeights for WeightTable {
    fn weight(&self, pos: Position, side: usize) -> i32 {
        if side != self.side {
            return EdgeDistanceWeights.weight(pos, side);
        }
        if pos.x >= side || pos.y >= side {
            return 0;
        }
        self.weights[pos.y * side + pos.x]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_distance_matches_classic_table() {
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(
                    EdgeDistanceWeights.weight(Position::new(x, y), 8),
                    CLASSIC_8X8[y][x],
                    "mismatch at ({x},{y})"
                );
            }
        }
    }

    #[test]
    fn test_edge_distance_small_boards() {
        let w = EdgeDistanceWeights;

        // 4x4: corners, corner-adjacent edges, and a center of X-squares
        assert_eq!(w.weight(Position::new(0, 0), 4), 100);
        assert_eq!(w.weight(Position::new(3, 3), 4), 100);
        assert_eq!(w.weight(Position::new(1, 0), 4), -20);
        assert_eq!(w.weight(Position::new(2, 2), 4), -30);

        // 6x6
        assert_eq!(w.weight(Position::new(5, 0), 6), 100);
        assert_eq!(w.weight(Position::new(2, 0), 6), 10);
        assert_eq!(w.weight(Position::new(1, 2), 6), -5);
        assert_eq!(w.weight(Position::new(2, 3), 6), 1);
    }

    #[test]
    fn test_edge_distance_is_symmetric() {
        let w = EdgeDistanceWeights;
        for side in [4, 6, 8] {
            for y in 0..side {
                for x in 0..side {
                    let v = w.weight(Position::new(x, y), side);
                    assert_eq!(v, w.weight(Position::new(y, x), side));
                    assert_eq!(v, w.weight(Position::new(side - 1 - x, y), side));
                    assert_eq!(v, w.weight(Position::new(x, side - 1 - y), side));
                }
            }
        }
    }

    #[test]
    fn test_weight_table() {
        let table = WeightTable::classic();
        assert_eq!(table.side(), 8);
        assert_eq!(table.weight(Position::new(0, 0), 8), 100);
        assert_eq!(table.weight(Position::new(1, 1), 8), -30);
        assert_eq!(table.weight(Position::new(2, 0), 8), 10);

        // Other sizes use the classifier
        assert_eq!(table.weight(Position::new(1, 1), 4), -30);
        assert_eq!(table.weight(Position::new(2, 3), 6), 1);
    }

    #[test]
    fn test_off_board_weighs_nothing() {
        assert_eq!(EdgeDistanceWeights.weight(Position::new(8, 8), 8), 0);
        assert_eq!(EdgeDistanceWeights.weight(Position::new(0, 4), 4), 0);
        assert_eq!(WeightTable::classic().weight(Position::new(9, 0), 8), 0);
    }

    #[test]
    fn test_weight_table_from_rows() {
        let table = WeightTable::from_rows(&[[9, 0], [0, 9]]).unwrap();
        assert_eq!(table.weight(Position::new(1, 1), 2), 9);
        assert_eq!(table.weight(Position::new(1, 0), 2), 0);

        assert!(WeightTable::from_rows(&[vec![1, 2], vec![3]]).is_none());
        assert!(WeightTable::from_rows::<[i32; 0]>(&[]).is_none());
    }
}
