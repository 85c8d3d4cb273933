use thiserror::Error;

/// Errors raised while turning loose input into a board.
///
/// Tree construction itself never fails once a board exists.
#[derive(Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("grid must have 3 rows, got {rows}")]
    InvalidRowCount { rows: usize },

    #[error("row {row} must have 3 cells, got {len}")]
    InvalidRowLength { row: usize, len: usize },

    #[error("invalid mark {value} at row {row}, col {col} (expected -1, 0 or 1)")]
    InvalidMark { value: i8, row: usize, col: usize },

    #[error("invalid mark counts: X={x_count}, O={o_count} (X must equal O or lead by 1)")]
    InvalidMarkCount { x_count: usize, o_count: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
