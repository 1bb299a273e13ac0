//! Legality and capture detection.
//!
//! These functions only read a `Board`, so both the engine and the move
//! selector can use them without touching game state.
//!
//! A placement at `pos` by `color` is legal when:
//! 1. `pos` is empty, or owned by `color` with room for another disc, and
//! 2. in at least one of the 8 directions, a run of opponent stacks starting
//!    next to `pos` ends on a stack owned by `color`.
//!
//! Every stack in such a run is captured.

use crate::core::{Board, Captures, Color, IllegalMove, Move, MoveKind, Position};

/// The 8 compass directions as `(dx, dy)`.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Kind of placement `color` could make at `pos`, ignoring captures.
///
/// `None` when the cell is off the board, owned by the opponent or already
/// at the limit.
#[must_use]
pub fn occupancy(board: &Board, pos: Position, color: Color) -> Option<MoveKind> {
    if !board.contains(pos) {
        return None;
    }
    match board.stack(pos) {
        None => Some(MoveKind::Normal),
        Some(s) if s.color == color && s.height < board.max_stack_height() => {
            Some(MoveKind::Stacking)
        }
        Some(_) => None,
    }
}

/// Stacks captured by a placement at `pos`, ignoring occupancy. Empty for
/// off-board positions.
#[must_use]
pub fn captures_from(board: &Board, pos: Position, color: Color) -> Captures {
    let opponent = color.opponent();
    let mut captured = Captures::new();
    if !board.contains(pos) {
        return captured;
    }

    for &(dx, dy) in &DIRECTIONS {
        let run_start = captured.len();
        let mut cursor = board.offset(pos, dx, dy);

        while let Some(cell) = cursor {
            if board.top_color(cell) != Some(opponent) {
                break;
            }
            captured.push(cell);
            cursor = board.offset(cell, dx, dy);
        }

        let closed = cursor.is_some_and(|cell| board.top_color(cell) == Some(color));
        if !closed {
            captured.truncate(run_start);
        }
    }

    captured
}

/// Check a placement and report exactly why it fails.
///
/// Does not consider whose turn it is or whether the game is over.
pub fn check_placement(
    board: &Board,
    x: i32,
    y: i32,
    color: Color,
) -> Result<(Move, Captures), IllegalMove> {
    let pos = board.position(x, y).ok_or(IllegalMove::OutOfBounds)?;
    let kind = occupancy(board, pos, color).ok_or(IllegalMove::CannotOccupy)?;
    let captured = captures_from(board, pos, color);
    if captured.is_empty() {
        return Err(IllegalMove::NoCaptures);
    }
    Ok((Move::new(pos, kind), captured))
}

/// Captures for a legal placement, `None` if the placement is illegal.
#[must_use]
pub fn is_legal(board: &Board, x: i32, y: i32, color: Color) -> Option<Captures> {
    check_placement(board, x, y, color).ok().map(|(_, captured)| captured)
}

/// The legal move at `pos` with its captures, `None` if illegal.
#[must_use]
pub fn legal_at(board: &Board, pos: Position, color: Color) -> Option<(Move, Captures)> {
    let kind = occupancy(board, pos, color)?;
    let captured = captures_from(board, pos, color);
    (!captured.is_empty()).then(|| (Move::new(pos, kind), captured))
}

/// All legal moves for `color` in row-major order.
#[must_use]
pub fn legal_moves(board: &Board, color: Color) -> Vec<Move> {
    board
        .positions()
        .filter_map(|pos| legal_at(board, pos, color).map(|(mv, _)| mv))
        .collect()
}

/// Whether `color` has at least one legal move.
#[must_use]
pub fn has_legal_move(board: &Board, color: Color) -> bool {
    board
        .positions()
        .any(|pos| legal_at(board, pos, color).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BoardSize;

    fn opening() -> Board {
        Board::opening(BoardSize::Eight, 2)
    }

    #[test]
    fn test_opening_captures() {
        let board = opening();
        let captured = is_legal(&board, 2, 3, Color::Black).unwrap();
        assert_eq!(captured.as_slice(), &[Position::new(3, 3)]);
    }

    #[test]
    fn test_check_placement_reasons() {
        let board = opening();

        assert_eq!(
            check_placement(&board, -1, 0, Color::Black),
            Err(IllegalMove::OutOfBounds)
        );
        assert_eq!(
            check_placement(&board, 8, 3, Color::Black),
            Err(IllegalMove::OutOfBounds)
        );
        // White-owned center cell
        assert_eq!(
            check_placement(&board, 3, 3, Color::Black),
            Err(IllegalMove::CannotOccupy)
        );
        // Own cell that flanks nothing
        assert_eq!(
            check_placement(&board, 3, 4, Color::Black),
            Err(IllegalMove::NoCaptures)
        );
        assert_eq!(
            check_placement(&board, 0, 0, Color::Black),
            Err(IllegalMove::NoCaptures)
        );
    }

    #[test]
    fn test_open_run_is_not_captured() {
        // White run reaches the edge without a closing black stack
        let board = Board::from_rows(2, &["..ww", "....", "....", "b..."]).unwrap();
        assert!(is_legal(&board, 1, 0, Color::Black).is_none());
        assert_eq!(
            check_placement(&board, 1, 0, Color::Black),
            Err(IllegalMove::NoCaptures)
        );
    }

    #[test]
    fn test_multi_direction_union() {
        let board = Board::from_rows(
            2,
            &[
                "b.b.",
                "ww..",
                ".w..",
                ".b..",
            ],
        )
        .unwrap();

        // From (0,2): up through (0,1) to (0,0); up-right through (1,1) to (2,0)
        let captured = is_legal(&board, 0, 2, Color::Black).unwrap();
        assert_eq!(captured.len(), 2);
        assert!(captured.contains(&Position::new(0, 1)));
        assert!(captured.contains(&Position::new(1, 1)));

        // From (1,0): down through (1,1),(1,2) to (1,3)
        let captured = is_legal(&board, 1, 0, Color::Black).unwrap();
        assert_eq!(
            captured.as_slice(),
            &[Position::new(1, 1), Position::new(1, 2)]
        );
    }

    #[test]
    fn test_stacking_occupancy() {
        let board = Board::from_rows(2, &["bwb.", "Bw..", "b...", "...."]).unwrap();

        assert_eq!(
            occupancy(&board, Position::new(0, 0), Color::Black),
            Some(MoveKind::Stacking)
        );
        // Full stack
        assert_eq!(occupancy(&board, Position::new(0, 1), Color::Black), None);
        // Opponent stack
        assert_eq!(occupancy(&board, Position::new(1, 0), Color::Black), None);
        assert_eq!(
            occupancy(&board, Position::new(3, 3), Color::White),
            Some(MoveKind::Normal)
        );

        let (mv, captured) = check_placement(&board, 0, 0, Color::Black).unwrap();
        assert_eq!(mv.kind, MoveKind::Stacking);
        assert_eq!(captured.as_slice(), &[Position::new(1, 0)]);
    }

    #[test]
    fn test_opening_legal_moves() {
        let moves = legal_moves(&opening(), Color::Black);
        let positions: Vec<_> = moves.iter().map(|m| m.position).collect();

        assert_eq!(
            positions,
            vec![
                Position::new(3, 2),
                Position::new(2, 3),
                Position::new(5, 4),
                Position::new(4, 5),
            ]
        );
        assert!(moves.iter().all(|m| m.kind == MoveKind::Normal));
        assert!(has_legal_move(&opening(), Color::White));
    }

    #[test]
    fn test_off_board_position_is_never_legal() {
        let board = opening();

        // (8,3) is one step east of (7,3) and must not scan from there
        for pos in [Position::new(8, 3), Position::new(11, 3), Position::new(2, 9)] {
            assert_eq!(occupancy(&board, pos, Color::Black), None);
            assert!(captures_from(&board, pos, Color::Black).is_empty());
            assert!(legal_at(&board, pos, Color::Black).is_none());
        }
    }

    #[test]
    fn test_no_moves_without_opponent() {
        let board = Board::from_rows(2, &["bb..", "....", "....", "...."]).unwrap();
        assert!(legal_moves(&board, Color::Black).is_empty());
        assert!(!has_legal_move(&board, Color::White));
    }
}
