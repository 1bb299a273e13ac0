//! Board data model: positions, stacks and the grid.
//!
//! ## Cells
//!
//! Each cell is either empty or holds a `Stack`: one or more discs whose
//! top disc decides who owns the cell. Only the height and the top color are
//! tracked. An empty cell is `None`, so "no color" and "height zero" can
//! never disagree.
//!
//! ## Layouts
//!
//! Boards can be written as text, one row per line, top row first:
//!
//! ```
//! use stack_othello::core::{Board, Color};
//!
//! let board = Board::from_rows(2, &["....", ".wb.", ".Bw.", "...."]).unwrap();
//! let pos = board.position(1, 2).unwrap();
//! assert_eq!(board.height(pos), 2);
//! assert_eq!(board.top_color(pos), Some(Color::Black));
//! ```
//!
//! `.` is empty, `b`/`w` a single disc, `B`/`W` a stack of two.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::config::BoardSize;
use super::error::LayoutError;

/// An in-bounds cell coordinate. `x` is the column, `y` the row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// A non-empty pile of discs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stack {
    /// Owner of the cell (color of the top disc).
    pub color: Color,
    /// Discs in the pile, at least 1.
    pub height: u8,
}

/// Height and owner of a cell as seen by collaborators.
///
/// Out-of-bounds queries and empty cells both report `(0, None)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StackInfo {
    pub height: u8,
    pub top: Option<Color>,
}

impl From<Option<Stack>> for StackInfo {
    fn from(stack: Option<Stack>) -> Self {
        match stack {
            Some(s) => StackInfo {
                height: s.height,
                top: Some(s.color),
            },
            None => StackInfo::default(),
        }
    }
}

/// An N x N Stack Othello board.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    size: BoardSize,
    max_stack_height: u8,
    cells: Vec<Option<Stack>>,
}

impl Board {
    /// Create an empty board. A stack limit of 0 is raised to 1.
    #[must_use]
    pub fn empty(size: BoardSize, max_stack_height: u8) -> Self {
        Self {
            size,
            max_stack_height: max_stack_height.max(1),
            cells: vec![None; size.cells()],
        }
    }

    /// Create a board in the opening position.
    ///
    /// The center 2x2 block holds one disc per cell: White on the main
    /// diagonal, Black on the other.
    #[must_use]
    pub fn opening(size: BoardSize, max_stack_height: u8) -> Self {
        let mut board = Self::empty(size, max_stack_height);
        let c = size.side() / 2;
        board.drop_disc(Position::new(c - 1, c - 1), Color::White);
        board.drop_disc(Position::new(c, c), Color::White);
        board.drop_disc(Position::new(c - 1, c), Color::Black);
        board.drop_disc(Position::new(c, c - 1), Color::Black);
        board
    }

    /// Parse a text layout (see module docs).
    pub fn from_rows(max_stack_height: u8, rows: &[&str]) -> Result<Self, LayoutError> {
        let size = BoardSize::try_from(rows.len())
            .map_err(|_| LayoutError::UnsupportedSize(rows.len()))?;
        let side = size.side();
        let mut board = Self::empty(size, max_stack_height);

        for (y, row) in rows.iter().enumerate() {
            let cells: Vec<char> = row.chars().collect();
            if cells.len() != side {
                return Err(LayoutError::RowLength {
                    row: y,
                    expected: side,
                    actual: cells.len(),
                });
            }

            for (x, &ch) in cells.iter().enumerate() {
                let (color, height) = match ch {
                    '.' => continue,
                    'b' => (Color::Black, 1),
                    'B' => (Color::Black, 2),
                    'w' => (Color::White, 1),
                    'W' => (Color::White, 2),
                    _ => return Err(LayoutError::InvalidCell { row: y, col: x, ch }),
                };
                let stack = Stack { color, height };
                if stack.height > board.max_stack_height {
                    return Err(LayoutError::StackTooTall {
                        row: y,
                        col: x,
                        height: stack.height,
                        max: board.max_stack_height,
                    });
                }
                board.cells[y * side + x] = Some(stack);
            }
        }

        Ok(board)
    }

    /// The same stacks under a different stack limit.
    ///
    /// Fails if an existing stack is taller than the new limit. A limit of 0
    /// is raised to 1.
    pub fn with_max_stack_height(mut self, max_stack_height: u8) -> Result<Self, LayoutError> {
        let max_stack_height = max_stack_height.max(1);
        let side = self.side();
        for (idx, stack) in self.cells.iter().enumerate() {
            if let Some(s) = stack {
                if s.height > max_stack_height {
                    return Err(LayoutError::StackTooTall {
                        row: idx / side,
                        col: idx % side,
                        height: s.height,
                        max: max_stack_height,
                    });
                }
            }
        }
        self.max_stack_height = max_stack_height;
        Ok(self)
    }

    /// Board dimensions.
    #[must_use]
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Cells along one side.
    #[must_use]
    pub fn side(&self) -> usize {
        self.size.side()
    }

    /// Tallest stack a cell may hold.
    #[must_use]
    pub fn max_stack_height(&self) -> u8 {
        self.max_stack_height
    }

    /// Convert signed coordinates to a position, `None` if off the board.
    #[must_use]
    pub fn position(&self, x: i32, y: i32) -> Option<Position> {
        let side = self.side() as i32;
        if (0..side).contains(&x) && (0..side).contains(&y) {
            Some(Position::new(x as usize, y as usize))
        } else {
            None
        }
    }

    /// Step from `pos` by `(dx, dy)`, `None` if that leaves the board.
    #[must_use]
    pub fn offset(&self, pos: Position, dx: i32, dy: i32) -> Option<Position> {
        self.position(pos.x as i32 + dx, pos.y as i32 + dy)
    }

    /// All positions in row-major order (row by row, left to right).
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let side = self.side();
        (0..side).flat_map(move |y| (0..side).map(move |x| Position::new(x, y)))
    }

    /// Whether `pos` lies on the board.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.side() && pos.y < self.side()
    }

    /// The stack at `pos`, if any. Off-board positions are empty.
    #[must_use]
    pub fn stack(&self, pos: Position) -> Option<Stack> {
        self.index(pos).and_then(|idx| self.cells[idx])
    }

    /// Owner of `pos`, `None` if empty.
    #[must_use]
    pub fn top_color(&self, pos: Position) -> Option<Color> {
        self.stack(pos).map(|s| s.color)
    }

    /// Number of discs at `pos`.
    #[must_use]
    pub fn height(&self, pos: Position) -> u8 {
        self.stack(pos).map_or(0, |s| s.height)
    }

    /// Whether `pos` is one of the four corners.
    #[must_use]
    pub fn is_corner(&self, pos: Position) -> bool {
        let last = self.side() - 1;
        self.contains(pos) && (pos.x == 0 || pos.x == last) && (pos.y == 0 || pos.y == last)
    }

    /// Total discs in stacks owned by `color`.
    #[must_use]
    pub fn count_discs(&self, color: Color) -> u32 {
        self.cells
            .iter()
            .flatten()
            .filter(|s| s.color == color)
            .map(|s| u32::from(s.height))
            .sum()
    }

    /// Total discs on the board.
    #[must_use]
    pub fn total_discs(&self) -> u32 {
        self.cells.iter().flatten().map(|s| u32::from(s.height)).sum()
    }

    /// Put one disc of `color` on top of `pos`.
    ///
    /// Callers check bounds and the stack limit beforehand.
    pub(crate) fn drop_disc(&mut self, pos: Position, color: Color) {
        let Some(idx) = self.index(pos) else {
            return;
        };
        let height = self.cells[idx].map_or(0, |s| s.height);
        debug_assert!(height < self.max_stack_height);
        self.cells[idx] = Some(Stack {
            color,
            height: height + 1,
        });
    }

    /// Hand the whole stack at `pos` to `color`. Height is unchanged.
    pub(crate) fn flip(&mut self, pos: Position, color: Color) {
        if let Some(stack) = self.index(pos).and_then(|idx| self.cells[idx].as_mut()) {
            stack.color = color;
        }
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.contains(pos).then(|| pos.y * self.side() + pos.x)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..self.side() {
            for x in 0..self.side() {
                let ch = match self.stack(Position::new(x, y)) {
                    Some(s) => s.color.symbol(s.height),
                    None => '.',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
