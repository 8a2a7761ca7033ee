//! Grid coordinate type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Grid coordinates (row, column) of a maze cell.
///
/// Field order makes the derived ordering row-major (row first, then
/// column), which is the tie-break used wherever candidates are ranked.
///
/// Storage is signed so that the neighbours of an edge cell can be formed
/// and then rejected by bounds checks. Valid cells are never negative.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct GridCoord {
    /// Row index (0 = top)
    pub row: i32,
    /// Column index (0 = left)
    pub col: i32,
}

impl GridCoord {
    /// Create a new grid coordinate
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to another coordinate
    #[inline]
    pub fn manhattan_distance(&self, other: &GridCoord) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// The 4 cardinal neighbours in fixed order: up, down, left, right.
    ///
    /// No bounds filtering happens here; see `Grid::neighbors4`.
    #[inline]
    pub fn neighbors_4(&self) -> [GridCoord; 4] {
        [
            GridCoord::new(self.row - 1, self.col), // Up
            GridCoord::new(self.row + 1, self.col), // Down
            GridCoord::new(self.row, self.col - 1), // Left
            GridCoord::new(self.row, self.col + 1), // Right
        ]
    }

    /// True if `other` differs by exactly one unit along exactly one axis
    #[inline]
    pub fn is_adjacent_4(&self, other: &GridCoord) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

impl Add for GridCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        GridCoord::new(self.row + other.row, self.col + other.col)
    }
}

impl Sub for GridCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        GridCoord::new(self.row - other.row, self.col - other.col)
    }
}
