//! Grid storage with a fog-of-war visibility mask.
//!
//! Tiles and visibility are stored as two flat row-major arrays of the same
//! shape. The tile array is fixed at construction; the visibility array only
//! ever transitions `false -> true`.

use crate::core::{GridCoord, Tile};
use log::trace;

use super::error::GridError;

/// Static maze topology plus the agent's accumulated visibility.
///
/// ## Layout
///
/// ```text
///          col 0   col 1   col 2
/// row 0  [  S   |   0   |   1  ]     tiles[row * width + col]
/// row 1  [  0   |   1   |   G  ]     visible[row * width + col]
/// ```
///
/// A `Grid` is the single owner of its visibility state. Search code only
/// reads it through neighbour functions; only `reveal_from` and
/// `reveal_all` mutate it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    tiles: Vec<Tile>,
    visible: Vec<bool>,
    width: usize,
    height: usize,
    start: GridCoord,
    goal: GridCoord,
}

impl Grid {
    /// Build a grid from rows of tiles.
    ///
    /// Fails if the table is empty, ragged, or does not hold exactly one
    /// start and one goal.
    pub fn new(rows: Vec<Vec<Tile>>) -> Result<Self, GridError> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if width == 0 {
            return Err(GridError::Empty);
        }

        let height = rows.len();
        let mut tiles = Vec::with_capacity(width * height);
        let mut starts = Vec::new();
        let mut goals = Vec::new();

        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(GridError::RaggedRow {
                    row: r,
                    expected: width,
                    found: row.len(),
                });
            }
            for (c, tile) in row.into_iter().enumerate() {
                let coord = GridCoord::new(r as i32, c as i32);
                match tile {
                    Tile::Start => starts.push(coord),
                    Tile::Goal => goals.push(coord),
                    Tile::Free | Tile::Wall => {}
                }
                tiles.push(tile);
            }
        }

        let start = match starts.as_slice() {
            [only] => *only,
            other => return Err(GridError::StartCount(other.len())),
        };
        let goal = match goals.as_slice() {
            [only] => *only,
            other => return Err(GridError::GoalCount(other.len())),
        };

        Ok(Self {
            visible: vec![false; tiles.len()],
            tiles,
            width,
            height,
            start,
            goal,
        })
    }

    /// Build a grid from rows of map symbols (`0`, `1`, `S`, `G`).
    ///
    /// Rows are checked in order; the first problem found is reported with
    /// its row (and column for bad symbols).
    pub fn from_symbols<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Self, GridError> {
        let expected = rows.first().map(Vec::len).unwrap_or(0);
        if expected == 0 {
            return Err(GridError::Empty);
        }

        let mut parsed = Vec::with_capacity(rows.len());
        for (r, row) in rows.iter().enumerate() {
            if row.len() != expected {
                return Err(GridError::RaggedRow {
                    row: r,
                    expected,
                    found: row.len(),
                });
            }
            let tiles = row
                .iter()
                .enumerate()
                .map(|(c, symbol)| {
                    let symbol = symbol.as_ref();
                    Tile::from_symbol(symbol).ok_or_else(|| GridError::InvalidSymbol {
                        symbol: symbol.to_string(),
                        row: r,
                        col: c,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            parsed.push(tiles);
        }

        Self::new(parsed)
    }

    // =========================================================================
    // TOPOLOGY
    // =========================================================================

    /// Width in cells (number of columns)
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in cells (number of rows)
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.tiles.len()
    }

    /// Mission start cell
    #[inline]
    pub fn start(&self) -> GridCoord {
        self.start
    }

    /// Mission goal cell
    #[inline]
    pub fn goal(&self) -> GridCoord {
        self.goal
    }

    /// Is the coordinate inside the table?
    #[inline]
    pub fn in_bounds(&self, coord: GridCoord) -> bool {
        coord.row >= 0
            && coord.col >= 0
            && (coord.row as usize) < self.height
            && (coord.col as usize) < self.width
    }

    /// Flat array index for a coordinate
    #[inline]
    fn coord_to_index(&self, coord: GridCoord) -> Option<usize> {
        if self.in_bounds(coord) {
            Some(coord.row as usize * self.width + coord.col as usize)
        } else {
            None
        }
    }

    #[inline]
    fn index_to_coord(&self, index: usize) -> GridCoord {
        GridCoord::new((index / self.width) as i32, (index % self.width) as i32)
    }

    /// Tile at a coordinate (None if out of bounds)
    #[inline]
    pub fn tile_at(&self, coord: GridCoord) -> Option<Tile> {
        self.coord_to_index(coord).map(|i| self.tiles[i])
    }

    /// Tiles of one row, left to right
    pub fn row(&self, row: usize) -> Option<&[Tile]> {
        if row < self.height {
            Some(&self.tiles[row * self.width..(row + 1) * self.width])
        } else {
            None
        }
    }

    /// Is this cell a wall? Out-of-bounds cells are not walls.
    #[inline]
    pub fn is_wall(&self, coord: GridCoord) -> bool {
        self.tile_at(coord) == Some(Tile::Wall)
    }

    /// Can the agent stand here? False for walls and out-of-bounds cells.
    #[inline]
    pub fn passable(&self, coord: GridCoord) -> bool {
        self.tile_at(coord).is_some_and(Tile::is_passable)
    }

    /// In-bounds 4-adjacent cells, ignoring passability and visibility.
    ///
    /// Order is fixed (up, down, left, right) so search tie-breaking is
    /// reproducible.
    pub fn neighbors4(&self, coord: GridCoord) -> Vec<GridCoord> {
        if !self.in_bounds(coord) {
            return Vec::new();
        }
        coord
            .neighbors_4()
            .into_iter()
            .filter(|n| self.in_bounds(*n))
            .collect()
    }

    /// 4-adjacent passable cells regardless of visibility (full knowledge).
    pub fn passable_neighbors(&self, coord: GridCoord) -> Vec<GridCoord> {
        self.neighbors4(coord)
            .into_iter()
            .filter(|n| self.passable(*n))
            .collect()
    }

    /// Check that a path is non-empty, 4-connected and fully passable.
    pub fn is_valid_path(&self, path: &[GridCoord]) -> bool {
        !path.is_empty()
            && path.iter().all(|c| self.passable(*c))
            && path.windows(2).all(|w| w[0].is_adjacent_4(&w[1]))
    }

    /// Iterate every coordinate in row-major order
    pub fn coords(&self) -> impl Iterator<Item = GridCoord> + '_ {
        (0..self.tiles.len()).map(move |i| self.index_to_coord(i))
    }

    // =========================================================================
    // FOG OF WAR
    // =========================================================================

    /// Has this cell been revealed? Out-of-bounds cells never are.
    #[inline]
    pub fn is_visible(&self, coord: GridCoord) -> bool {
        self.coord_to_index(coord).is_some_and(|i| self.visible[i])
    }

    /// Mark one cell visible. Returns true if it was hidden before.
    fn mark_visible(&mut self, coord: GridCoord) -> bool {
        match self.coord_to_index(coord) {
            Some(i) if !self.visible[i] => {
                self.visible[i] = true;
                true
            }
            _ => false,
        }
    }

    /// Reveal `coord` and its in-bounds 4-neighbours (sensing radius 1).
    ///
    /// Adjacent walls are revealed too, but nothing beyond them. Returns
    /// only the cells that were hidden before this call, in the order
    /// `coord`, up, down, left, right. Calling it again from the same
    /// place returns an empty vector.
    pub fn reveal_from(&mut self, coord: GridCoord) -> Vec<GridCoord> {
        let mut revealed = Vec::with_capacity(5);
        if !self.in_bounds(coord) {
            return revealed;
        }

        if self.mark_visible(coord) {
            revealed.push(coord);
        }
        for neighbor in self.neighbors4(coord) {
            if self.mark_visible(neighbor) {
                revealed.push(neighbor);
            }
        }

        if !revealed.is_empty() {
            trace!("[Fog] reveal_from {}: {} new cells", coord, revealed.len());
        }
        revealed
    }

    /// Reveal the whole grid (full-map mode). Returns the newly revealed cells.
    pub fn reveal_all(&mut self) -> Vec<GridCoord> {
        let hidden: Vec<GridCoord> = self
            .visible
            .iter()
            .enumerate()
            .filter(|(_, v)| !**v)
            .map(|(i, _)| self.index_to_coord(i))
            .collect();
        self.visible.fill(true);
        hidden
    }

    /// Neighbours that are both revealed and passable.
    ///
    /// This is the adjacency of the *known* subgraph, and the neighbour
    /// function searches use while the map is fogged.
    pub fn get_visible_neighbors(&self, coord: GridCoord) -> Vec<GridCoord> {
        self.neighbors4(coord)
            .into_iter()
            .filter(|n| self.is_visible(*n) && self.passable(*n))
            .collect()
    }

    /// All revealed cells in row-major order
    pub fn visible_tiles(&self) -> Vec<GridCoord> {
        self.visible
            .iter()
            .enumerate()
            .filter(|(_, v)| **v)
            .map(|(i, _)| self.index_to_coord(i))
            .collect()
    }

    /// Number of revealed cells
    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|v| **v).count()
    }

    /// Fraction of cells revealed (0.0 - 1.0)
    pub fn coverage(&self) -> f32 {
        self.visible_count() as f32 / self.cell_count() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&str]) -> Grid {
        let symbols: Vec<Vec<String>> = rows
            .iter()
            .map(|r| r.chars().map(|c| c.to_string()).collect())
            .collect();
        Grid::from_symbols(&symbols).unwrap()
    }

    #[test]
    fn test_construction() {
        let g = grid(&["S01", "00G"]);
        assert_eq!(g.width(), 3);
        assert_eq!(g.height(), 2);
        assert_eq!(g.start(), GridCoord::new(0, 0));
        assert_eq!(g.goal(), GridCoord::new(1, 2));
        assert!(g.visible_tiles().is_empty());
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let rows = vec![vec!["S", "0"], vec!["0"], vec!["G", "0"]];
        let err = Grid::from_symbols(&rows).unwrap_err();
        assert_eq!(
            err,
            GridError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            }
        );
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn test_invalid_symbol_rejected() {
        let rows = vec![vec!["S", "0"], vec!["x", "G"]];
        let err = Grid::from_symbols(&rows).unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidSymbol {
                symbol: "x".to_string(),
                row: 1,
                col: 0
            }
        );
        assert!(err.to_string().contains("'x'"));
        assert!(err.to_string().contains("(1,0)"));
    }

    #[test]
    fn test_start_goal_counts() {
        let rows = vec![vec!["0", "0"], vec!["0", "G"]];
        assert_eq!(Grid::from_symbols(&rows), Err(GridError::StartCount(0)));

        let rows = vec![vec!["S", "S"], vec!["0", "G"]];
        assert_eq!(Grid::from_symbols(&rows), Err(GridError::StartCount(2)));

        let rows = vec![vec!["S", "G"], vec!["G", "0"]];
        assert_eq!(Grid::from_symbols(&rows), Err(GridError::GoalCount(2)));
    }

    #[test]
    fn test_empty_rejected() {
        let rows: Vec<Vec<&str>> = Vec::new();
        assert_eq!(Grid::from_symbols(&rows), Err(GridError::Empty));
        assert_eq!(Grid::new(vec![vec![]]), Err(GridError::Empty));
    }

    #[test]
    fn test_passable_and_bounds() {
        let g = grid(&["S1", "0G"]);
        assert!(g.passable(GridCoord::new(0, 0)));
        assert!(!g.passable(GridCoord::new(0, 1)));
        assert!(g.is_wall(GridCoord::new(0, 1)));
        assert!(g.passable(GridCoord::new(1, 1)));
        assert!(!g.passable(GridCoord::new(-1, 0)));
        assert!(!g.passable(GridCoord::new(2, 0)));
        assert!(!g.in_bounds(GridCoord::new(0, 2)));
        assert_eq!(g.tile_at(GridCoord::new(5, 5)), None);
    }

    #[test]
    fn test_neighbors4_corner_and_center() {
        let g = grid(&["S00", "000", "00G"]);
        assert_eq!(
            g.neighbors4(GridCoord::new(0, 0)),
            vec![GridCoord::new(1, 0), GridCoord::new(0, 1)]
        );
        assert_eq!(g.neighbors4(GridCoord::new(1, 1)).len(), 4);
        assert!(g.neighbors4(GridCoord::new(3, 3)).is_empty());
    }

    #[test]
    fn test_reveal_includes_walls_and_is_idempotent() {
        let mut g = grid(&["010", "1S0", "00G"]);
        let s = g.start();
        let revealed = g.reveal_from(s);
        assert_eq!(
            revealed,
            vec![
                GridCoord::new(1, 1),
                GridCoord::new(0, 1),
                GridCoord::new(2, 1),
                GridCoord::new(1, 0),
                GridCoord::new(1, 2),
            ]
        );
        // Walls are visible but not part of the known subgraph
        assert!(g.is_visible(GridCoord::new(0, 1)));
        assert!(!g.get_visible_neighbors(s).contains(&GridCoord::new(0, 1)));
        // Diagonals stay hidden
        assert!(!g.is_visible(GridCoord::new(0, 0)));
        assert!(!g.is_visible(GridCoord::new(2, 2)));

        assert!(g.reveal_from(s).is_empty());
        assert_eq!(g.visible_count(), 5);
    }

    #[test]
    fn test_reveal_out_of_bounds_is_noop() {
        let mut g = grid(&["SG"]);
        assert!(g.reveal_from(GridCoord::new(4, 4)).is_empty());
        assert_eq!(g.visible_count(), 0);
    }

    #[test]
    fn test_visible_neighbors_need_reveal() {
        let mut g = grid(&["S0G"]);
        let s = g.start();
        assert!(g.get_visible_neighbors(s).is_empty());
        g.reveal_from(s);
        assert_eq!(g.get_visible_neighbors(s), vec![GridCoord::new(0, 1)]);
    }

    #[test]
    fn test_reveal_all() {
        let mut g = grid(&["S1", "0G"]);
        g.reveal_from(g.start());
        let newly = g.reveal_all();
        assert_eq!(newly, vec![GridCoord::new(1, 1)]);
        assert_eq!(g.coverage(), 1.0);
        assert!(g.reveal_all().is_empty());
    }

    #[test]
    fn test_is_valid_path() {
        let g = grid(&["S0", "1G"]);
        let ok = [
            GridCoord::new(0, 0),
            GridCoord::new(0, 1),
            GridCoord::new(1, 1),
        ];
        assert!(g.is_valid_path(&ok));
        assert!(!g.is_valid_path(&[]));
        // Through a wall
        assert!(!g.is_valid_path(&[GridCoord::new(0, 0), GridCoord::new(1, 0)]));
        // Diagonal jump
        assert!(!g.is_valid_path(&[GridCoord::new(0, 0), GridCoord::new(1, 1)]));
    }
}
