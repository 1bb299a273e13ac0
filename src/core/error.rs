//! Error types.
//!
//! None of these are fatal: a rejected placement or pass leaves the game
//! untouched and the caller may simply try again.

/// Why a placement was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum IllegalMove {
    #[error("it is not this color's turn")]
    OutOfTurn,

    #[error("coordinates are outside the board")]
    OutOfBounds,

    #[error("cell is neither empty nor a stackable stack of the mover's color")]
    CannotOccupy,

    #[error("placement would not capture anything")]
    NoCaptures,

    #[error("the game is over")]
    GameOver,
}

/// Why an explicit pass was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum PassError {
    #[error("the game is over")]
    GameOver,

    #[error("it is not this color's turn")]
    OutOfTurn,

    #[error("cannot pass while a legal move is available")]
    MovesAvailable,
}

/// Errors from parsing a text board layout.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("unsupported board size {0} (expected 4, 6 or 8 rows)")]
    UnsupportedSize(usize),

    #[error("row {row} has {actual} cells, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("invalid cell '{ch}' at row {row}, column {col}")]
    InvalidCell { row: usize, col: usize, ch: char },

    #[error("stack of height {height} at row {row}, column {col} exceeds the limit of {max}")]
    StackTooTall {
        row: usize,
        col: usize,
        height: u8,
        max: u8,
    },
}

/// Errors from building or validating a game configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unsupported board size {0} (expected 4, 6 or 8)")]
    UnsupportedBoardSize(usize),

    #[error("maximum stack height must be at least 1, got {0}")]
    InvalidStackHeight(u8),

    #[error("board is {actual}x{actual} but the configuration expects {expected}x{expected}")]
    BoardSizeMismatch { expected: usize, actual: usize },

    #[error("invalid board layout: {0}")]
    Layout(#[from] LayoutError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_illegal_move_display() {
        assert_eq!(IllegalMove::NoCaptures.to_string(), "placement would not capture anything");
        assert_eq!(IllegalMove::GameOver.to_string(), "the game is over");
    }

    #[test]
    fn test_layout_error_display() {
        let err = LayoutError::RowLength {
            row: 2,
            expected: 8,
            actual: 7,
        };
        assert_eq!(err.to_string(), "row 2 has 7 cells, expected 8");
    }

    #[test]
    fn test_config_error_wraps_layout() {
        let err: ConfigError = LayoutError::UnsupportedSize(5).into();
        assert_eq!(
            err.to_string(),
            "invalid board layout: unsupported board size 5 (expected 4, 6 or 8 rows)"
        );
    }
}
