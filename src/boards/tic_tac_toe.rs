use crate::board::{Board, Mark};
use crate::error::{Error, Result};
use std::fmt;

/// Width and height of the board, and the line sum magnitude that means "three in a row".
pub const BOARD_SIZE: usize = 3;

const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// An implementation of the `Board` trait for the game of Tic-Tac-Toe.
///
/// The board is a 3×3 grid of marks. A move is a `u8` cell index `row * 3 + col`, so moves
/// are generated in row-major order. The mark to move is never stored independently: it is
/// derived from the number of filled cells (odd count means `O`, even count means `X`), which
/// makes `X` the side that moves first.
///
/// Boards built from raw values are validated for shape, cell values and mark balance. Grids
/// with two completed lines are accepted as given; the detector then reports the first line
/// in scan order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeBoard {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
    current_mark: Mark,
}

impl TicTacToeBoard {
    /// Builds a board from typed cells, deriving the mark to move from the fill count.
    ///
    /// Since `X` moves first, a reachable board has as many `X` marks as `O` marks or exactly
    /// one more; anything else is rejected.
    pub fn from_cells(cells: [[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Result<Self> {
        let x_count = count_marks(&cells, Mark::X);
        let o_count = count_marks(&cells, Mark::O);
        if o_count > x_count || x_count > o_count + 1 {
            return Err(Error::InvalidMarkCount { x_count, o_count });
        }

        let current_mark = match (x_count + o_count) % 2 {
            1 => Mark::O,
            _ => Mark::X,
        };
        Ok(Self {
            cells,
            current_mark,
        })
    }

    /// Builds a board from rows of raw values (-1 for `X`, 0 for empty, 1 for `O`).
    pub fn from_marks<R: AsRef<[i8]>>(rows: &[R]) -> Result<Self> {
        if rows.len() != BOARD_SIZE {
            return Err(Error::InvalidRowCount { rows: rows.len() });
        }

        let mut cells = [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != BOARD_SIZE {
                return Err(Error::InvalidRowLength {
                    row,
                    len: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                cells[row][col] =
                    Mark::from_value(value).ok_or(Error::InvalidMark { value, row, col })?;
            }
        }

        Self::from_cells(cells)
    }

    /// Returns the mark at the given cell.
    pub fn get_cell(&self, row: usize, col: usize) -> Mark {
        self.cells[row][col]
    }

    pub fn get_cells(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Returns the grid as raw values, the inverse of `from_marks`.
    pub fn to_marks(&self) -> [[i8; BOARD_SIZE]; BOARD_SIZE] {
        self.cells.map(|row| row.map(|mark| mark as i8))
    }

    /// Returns the number of non-empty cells.
    pub fn filled_count(&self) -> usize {
        CELL_COUNT - count_marks(&self.cells, Mark::Empty)
    }

    /// Converts a move into its `(row, col)` cell.
    pub fn move_to_cell(b_move: u8) -> (usize, usize) {
        let index = b_move as usize;
        (index / BOARD_SIZE, index % BOARD_SIZE)
    }

    fn line_winner(line_sum: i32) -> Option<Mark> {
        match line_sum {
            s if s == BOARD_SIZE as i32 => Some(Mark::O),
            s if s == -(BOARD_SIZE as i32) => Some(Mark::X),
            _ => None,
        }
    }
}

impl Default for TicTacToeBoard {
    /// Creates an empty board with `X` to move.
    fn default() -> Self {
        Self {
            cells: [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE],
            current_mark: Mark::X,
        }
    }
}

impl TryFrom<[[i8; BOARD_SIZE]; BOARD_SIZE]> for TicTacToeBoard {
    type Error = Error;

    fn try_from(marks: [[i8; BOARD_SIZE]; BOARD_SIZE]) -> Result<Self> {
        Self::from_marks(&marks[..])
    }
}

impl Board for TicTacToeBoard {
    type Move = u8;

    fn get_current_mark(&self) -> Mark {
        self.current_mark
    }

    /// Sums rows, then columns, then the main diagonal, then the anti-diagonal, and reports
    /// the first line whose sum reaches the board size in magnitude.
    fn get_winner(&self) -> Mark {
        let cells = &self.cells;

        for row in cells {
            let line_sum: i32 = row.iter().map(|mark| mark.value()).sum();
            if let Some(winner) = Self::line_winner(line_sum) {
                return winner;
            }
        }

        for col in 0..BOARD_SIZE {
            let line_sum: i32 = (0..BOARD_SIZE).map(|row| cells[row][col].value()).sum();
            if let Some(winner) = Self::line_winner(line_sum) {
                return winner;
            }
        }

        let diagonal_sum: i32 = (0..BOARD_SIZE).map(|i| cells[i][i].value()).sum();
        if let Some(winner) = Self::line_winner(diagonal_sum) {
            return winner;
        }

        let anti_diagonal_sum: i32 = (0..BOARD_SIZE)
            .map(|i| cells[i][BOARD_SIZE - 1 - i].value())
            .sum();
        Self::line_winner(anti_diagonal_sum).unwrap_or(Mark::Empty)
    }

    fn get_available_moves(&self) -> Vec<Self::Move> {
        if self.get_winner() != Mark::Empty {
            return Vec::new();
        }

        self.cells
            .iter()
            .flatten()
            .enumerate()
            .filter(|(_, mark)| **mark == Mark::Empty)
            .map(|(i, _)| i as u8)
            .collect()
    }

    /// # Panics
    ///
    /// Panics if `b_move` is not a cell index below 9 or if the cell is already taken. Moves
    /// from `get_available_moves` never do either.
    fn perform_move(&mut self, b_move: &Self::Move) {
        assert!((*b_move as usize) < CELL_COUNT, "cell {b_move} is off the board");
        let (row, col) = Self::move_to_cell(*b_move);
        assert_eq!(self.cells[row][col], Mark::Empty, "cell {b_move} is taken");
        self.cells[row][col] = self.current_mark;
        self.current_mark = self.current_mark.opponent();
    }

    fn get_hash(&self) -> u128 {
        let mut hash = 0;
        for (i, &cell) in self.cells.iter().flatten().enumerate() {
            let cell_value = match cell {
                Mark::Empty => 0,
                Mark::X => 1,
                Mark::O => 2,
            };
            hash += cell_value * 3u128.pow(i as u32);
        }
        hash
    }
}

impl fmt::Display for TicTacToeBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: String = row.iter().map(|mark| mark.to_char()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

fn count_marks(cells: &[[Mark; BOARD_SIZE]; BOARD_SIZE], mark: Mark) -> usize {
    cells.iter().flatten().filter(|&&cell| cell == mark).count()
}
