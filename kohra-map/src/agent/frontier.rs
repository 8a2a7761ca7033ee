//! Frontier detection on the fogged grid.
//!
//! A frontier cell is a revealed, passable cell with at least one in-bounds
//! neighbour that has not been revealed yet. Walking onto it is guaranteed
//! to reveal something new.

use crate::core::GridCoord;
use crate::grid::Grid;

/// Is `coord` a frontier cell?
pub fn is_frontier(grid: &Grid, coord: GridCoord) -> bool {
    grid.is_visible(coord)
        && grid.passable(coord)
        && grid
            .neighbors4(coord)
            .into_iter()
            .any(|n| !grid.is_visible(n))
}

/// All frontier cells, row-major
pub fn find_frontiers(grid: &Grid) -> Vec<GridCoord> {
    grid.coords().filter(|c| is_frontier(grid, *c)).collect()
}

/// Order frontier candidates for selection from `from`:
/// nearest by Manhattan distance, then by row, then by column.
pub fn rank_frontiers(frontiers: &mut [GridCoord], from: GridCoord) {
    frontiers.sort_by_key(|f| (f.manhattan_distance(&from), *f));
}
