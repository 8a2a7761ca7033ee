//! Grid validation errors.

use thiserror::Error;

/// Reasons a map cannot become a [`Grid`](super::Grid).
///
/// Raised synchronously at construction time; a grid is never silently
/// repaired.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// No rows, or rows with no cells
    #[error("Map is empty")]
    Empty,

    /// Row length differs from the first row
    #[error("Non-rectangular map at row {row}: expected {expected} cells, found {found}")]
    RaggedRow {
        /// Offending row index
        row: usize,
        /// Width of the first row
        expected: usize,
        /// Width of the offending row
        found: usize,
    },

    /// Symbol outside `{0, 1, S, G}`
    #[error("Invalid symbol '{symbol}' at ({row},{col})")]
    InvalidSymbol {
        /// The symbol as read
        symbol: String,
        /// Row index
        row: usize,
        /// Column index
        col: usize,
    },

    /// Not exactly one start cell
    #[error("Expected exactly one 'S', found {0}")]
    StartCount(usize),

    /// Not exactly one goal cell
    #[error("Expected exactly one 'G', found {0}")]
    GoalCount(usize),
}
