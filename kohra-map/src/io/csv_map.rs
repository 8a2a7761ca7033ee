//! CSV map format.
//!
//! One grid row per line, cells separated by commas, each cell one of
//! `0` (free), `1` (wall), `S` (start) or `G` (goal):
//!
//! ```text
//! S,0,1
//! 1,0,1
//! 1,0,G
//! ```
//!
//! Whitespace around a cell is ignored, as are blank lines.

use log::debug;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

use crate::grid::{Grid, GridError};

/// Error type for map loading
#[derive(Error, Debug)]
pub enum MapLoadError {
    /// File could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File contents are not a valid map
    #[error("Invalid map: {0}")]
    Grid(#[from] GridError),
}

/// Parse CSV text into a grid
pub fn parse_map(text: &str) -> Result<Grid, GridError> {
    let rows: Vec<Vec<&str>> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.split(',').map(str::trim).collect())
        .collect();
    Grid::from_symbols(&rows)
}

/// Load a grid from a CSV file
pub fn load_map(path: &Path) -> Result<Grid, MapLoadError> {
    let text = std::fs::read_to_string(path)?;
    let grid = parse_map(&text)?;
    debug!(
        "[Map] loaded {} ({}x{})",
        path.display(),
        grid.height(),
        grid.width()
    );
    Ok(grid)
}

/// Serialise a grid's tiles to CSV text (visibility is not stored)
pub fn to_csv(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.cell_count() * 2);
    for r in 0..grid.height() {
        if let Some(row) = grid.row(r) {
            for (c, tile) in row.iter().enumerate() {
                if c > 0 {
                    out.push(',');
                }
                out.push(tile.symbol());
            }
        }
        out.push('\n');
    }
    out
}

/// Write a grid as CSV to any writer
pub fn write_map<W: Write>(grid: &Grid, writer: &mut W) -> Result<(), MapLoadError> {
    writer.write_all(to_csv(grid).as_bytes())?;
    Ok(())
}

/// Save a grid to a CSV file
pub fn save_map(grid: &Grid, path: &Path) -> Result<(), MapLoadError> {
    let mut file = std::fs::File::create(path)?;
    write_map(grid, &mut file)
}
