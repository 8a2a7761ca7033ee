//! Test utilities for Kohra integration tests.
//!
//! Helpers for building grids from compact row strings and generated mazes.

#![allow(dead_code)]

use kohra_map::{Grid, GridCoord, MazeConfig, generate_maze, parse_map};

/// Build a grid from comma separated rows, e.g. `&["S,0", "1,G"]`.
pub fn grid(rows: &[&str]) -> Grid {
    parse_map(&rows.join("\n")).expect("test grid must be valid")
}

/// Open corridor `S,0,...,0,G` of the given length (at least 2)
pub fn corridor(len: usize) -> Grid {
    let mut cells = vec!["0"; len];
    cells[0] = "S";
    cells[len - 1] = "G";
    grid(&[&cells.join(",")])
}

/// Start boxed in by walls on three sides; the only exit is to the right
/// and the goal is reached by going around.
pub fn boxed_start() -> Grid {
    grid(&[
        "1,1,1,1,1",
        "1,S,0,0,1",
        "1,1,1,0,1",
        "1,G,0,0,1",
        "1,1,1,1,1",
    ])
}

/// Top corridor with a dead-end branch on the left. The goal sits under
/// the corridor and is only seen from (1, 3), which lies on the way back
/// from the dead end to the frontier at (3, 4) next to the start.
pub fn hidden_goal() -> Grid {
    grid(&[
        "1,1,0,0,0,0",
        "1,0,0,0,0,0",
        "1,0,1,G,1,0",
        "1,0,1,0,0,S",
    ])
}

/// Goal sealed off behind a wall column
pub fn walled_goal() -> Grid {
    grid(&["S,0,0,1,0", "0,0,0,1,0", "0,0,0,1,G"])
}

/// Seeded maze with a little braiding
pub fn maze(side: usize, seed: u64) -> Grid {
    generate_maze(&MazeConfig::square(side, seed).with_braid(0.1)).expect("generated maze")
}

/// Offline optimal cost (edges) from start to goal, if reachable
pub fn optimal_cost(grid: &Grid) -> Option<usize> {
    let path = kohra_map::search::bfs(grid.start(), grid.goal(), |c| grid.passable_neighbors(c));
    (!path.is_empty()).then(|| path.len() - 1)
}

/// Shorthand for `GridCoord::new`
pub fn at(row: i32, col: i32) -> GridCoord {
    GridCoord::new(row, col)
}

/// Route `log` output through the test harness (`RUST_LOG=trace` to see it)
pub fn init_logging() {
    env_logger::try_init().ok();
}
