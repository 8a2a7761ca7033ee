//! Seeded maze generation.
//!
//! Perfect mazes are carved with an iterative randomized depth-first
//! backtracker over the odd cells of an all-wall table. An optional braid
//! pass then knocks out one wall next to a fraction of the dead ends so the
//! maze gains loops, which is where the search algorithms start to differ.
//!
//! ```text
//! 1 1 1 1 1 1 1        S sits at (1, 1)
//! 1 S 0 0 0 0 1        G sits at (height - 2, width - 2)
//! 1 1 1 0 1 0 1
//! 1 0 0 0 1 0 1        Odd (row, col) cells are rooms, even cells between
//! 1 0 1 1 1 0 1        two rooms are the walls that get carved.
//! 1 0 0 0 1 G 1
//! 1 1 1 1 1 1 1
//! ```

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::core::{GridCoord, Tile};

use super::error::GridError;
use super::storage::Grid;

/// Smallest maze side that still has an interior
const MIN_SIDE: usize = 5;

/// Maze generation parameters
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MazeConfig {
    /// Width in cells (coerced to odd, at least 5)
    #[serde(default = "default_side")]
    pub width: usize,

    /// Height in cells (coerced to odd, at least 5)
    #[serde(default = "default_side")]
    pub height: usize,

    /// RNG seed; the same seed always yields the same maze
    #[serde(default)]
    pub seed: u64,

    /// Fraction of dead ends to open up into loops (0.0 - 1.0)
    #[serde(default)]
    pub braid: f32,
}

fn default_side() -> usize {
    21
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: default_side(),
            height: default_side(),
            seed: 0,
            braid: 0.0,
        }
    }
}

impl MazeConfig {
    /// Square maze with the given side and seed
    pub fn square(side: usize, seed: u64) -> Self {
        Self {
            width: side,
            height: side,
            seed,
            ..Default::default()
        }
    }

    /// Set the braid fraction
    pub fn with_braid(mut self, braid: f32) -> Self {
        self.braid = braid;
        self
    }

    /// Effective (width, height) after clamping and odd coercion
    pub fn dimensions(&self) -> (usize, usize) {
        (odd_side(self.width), odd_side(self.height))
    }
}

fn odd_side(n: usize) -> usize {
    let n = n.max(MIN_SIDE);
    if n % 2 == 1 { n } else { n + 1 }
}

/// Generate a maze grid.
///
/// The result always holds exactly one start and one goal connected by at
/// least one path, so construction errors cannot occur in practice; the
/// `Result` mirrors [`Grid::new`].
pub fn generate_maze(config: &MazeConfig) -> Result<Grid, GridError> {
    let (width, height) = config.dimensions();
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut cells = vec![vec![Tile::Wall; width]; height];

    carve(&mut cells, &mut rng);

    let braid = config.braid.clamp(0.0, 1.0);
    if braid > 0.0 {
        let opened = braid_dead_ends(&mut cells, braid, &mut rng);
        debug!("[Maze] braided {} dead ends", opened);
    }

    cells[1][1] = Tile::Start;
    cells[height - 2][width - 2] = Tile::Goal;

    debug!(
        "[Maze] generated {}x{} seed={} braid={:.2}",
        height, width, config.seed, braid
    );
    Grid::new(cells)
}

fn get(cells: &[Vec<Tile>], c: GridCoord) -> Option<Tile> {
    if c.row < 0 || c.col < 0 {
        return None;
    }
    cells
        .get(c.row as usize)
        .and_then(|row| row.get(c.col as usize))
        .copied()
}

fn set(cells: &mut [Vec<Tile>], c: GridCoord, tile: Tile) {
    cells[c.row as usize][c.col as usize] = tile;
}

/// Iterative recursive-backtracker over odd cells.
fn carve(cells: &mut [Vec<Tile>], rng: &mut StdRng) {
    let height = cells.len() as i32;
    let width = cells[0].len() as i32;
    let interior = |c: GridCoord| c.row >= 1 && c.row < height - 1 && c.col >= 1 && c.col < width - 1;

    let start = GridCoord::new(1, 1);
    set(cells, start, Tile::Free);
    let mut stack = vec![start];

    while let Some(&current) = stack.last() {
        // (room two steps away, wall in between)
        let mut options: Vec<(GridCoord, GridCoord)> = current
            .neighbors_4()
            .into_iter()
            .map(|n| {
                let step = n - current;
                (n + step, n)
            })
            .filter(|(room, _)| interior(*room) && get(cells, *room) == Some(Tile::Wall))
            .collect();

        if options.is_empty() {
            stack.pop();
            continue;
        }

        options.shuffle(rng);
        let (room, wall) = options[0];
        set(cells, wall, Tile::Free);
        set(cells, room, Tile::Free);
        stack.push(room);
    }
}

/// Open one separating wall next to a `braid` fraction of the dead ends.
/// Returns how many walls were removed.
fn braid_dead_ends(cells: &mut [Vec<Tile>], braid: f32, rng: &mut StdRng) -> usize {
    let height = cells.len() as i32;
    let width = cells[0].len() as i32;

    let open_neighbors = |cells: &[Vec<Tile>], c: GridCoord| {
        c.neighbors_4()
            .into_iter()
            .filter(|n| get(cells, *n) == Some(Tile::Free))
            .count()
    };

    let mut dead_ends: Vec<GridCoord> = (1..height - 1)
        .flat_map(|r| (1..width - 1).map(move |c| GridCoord::new(r, c)))
        .filter(|c| get(cells, *c) == Some(Tile::Free) && open_neighbors(cells, *c) == 1)
        .collect();
    dead_ends.shuffle(rng);

    let target = (dead_ends.len() as f32 * braid) as usize;
    let mut opened = 0;

    for cell in dead_ends {
        if opened >= target {
            break;
        }
        let candidates: Vec<GridCoord> = cell
            .neighbors_4()
            .into_iter()
            .filter(|wall| {
                let beyond = *wall + (*wall - cell);
                get(cells, *wall) == Some(Tile::Wall) && get(cells, beyond) == Some(Tile::Free)
            })
            .collect();
        if candidates.is_empty() {
            continue;
        }
        let wall = candidates[rng.random_range(0..candidates.len())];
        set(cells, wall, Tile::Free);
        opened += 1;
    }

    opened
}
