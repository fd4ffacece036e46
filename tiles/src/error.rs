//! Error types for level construction.

use std::fmt;

/// Result type for tile and level operations.
pub type TilesResult<T> = Result<T, TilesError>;

/// Errors that can occur while building grids and levels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TilesError {
    /// Rows of a grid do not all have the same length.
    RaggedRows { row: usize, len: usize, width: usize },

    /// Grid has zero cells.
    EmptyGrid,

    /// Flat cell buffer does not match `width * height`.
    CellCountMismatch { expected: usize, actual: usize },

    /// Start position lies outside the grid.
    StartOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Tile code is outside the alphabet.
    CodeOutOfRange { value: u8 },
}

impl fmt::Display for TilesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RaggedRows { row, len, width } => {
                write!(f, "row {row} has {len} cells, expected {width}")
            }
            Self::EmptyGrid => write!(f, "grid must contain at least one cell"),
            Self::CellCountMismatch { expected, actual } => {
                write!(f, "expected {expected} cells, got {actual}")
            }
            Self::StartOutOfBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(f, "start ({x},{y}) outside {width}x{height} grid")
            }
            Self::CodeOutOfRange { value } => {
                write!(f, "tile code {value} outside 0..=15")
            }
        }
    }
}

impl std::error::Error for TilesError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_ragged_rows() {
        let err = TilesError::RaggedRows {
            row: 2,
            len: 3,
            width: 5,
        };
        let msg = err.to_string();
        assert!(msg.contains("row 2"));
        assert!(msg.contains('5'));
    }

    #[test]
    fn display_start_out_of_bounds() {
        let err = TilesError::StartOutOfBounds {
            x: 9,
            y: 0,
            width: 3,
            height: 3,
        };
        assert!(err.to_string().contains("(9,0)"));
    }

    #[test]
    fn error_is_std_error() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<TilesError>();
    }
}
