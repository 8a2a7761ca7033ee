//! Graph search over an abstract neighbour function.
//!
//! Search code knows nothing about grids, fog or files. Every algorithm
//! takes a start, a goal and a neighbour function
//! `Fn(GridCoord) -> impl IntoIterator<Item = GridCoord>` and returns a path
//! (start and goal inclusive). An empty path means "no path", which is a
//! normal outcome and never an error.
//!
//! - **BFS**: FIFO frontier, shortest path by edge count
//! - **DFS**: LIFO frontier, any path (for contrast)
//! - **UCS**: cost-ordered frontier, optimal for any non-negative costs
//! - **A\***: cost + Manhattan heuristic, optimal with fewer expansions
//!
//! ## Registry
//!
//! ```rust
//! use kohra_map::core::GridCoord;
//! use kohra_map::search::Algorithm;
//!
//! let algo: Algorithm = "astar".parse().unwrap();
//! let neighbors = |c: GridCoord| {
//!     c.neighbors_4()
//!         .into_iter()
//!         .filter(|n| (0..3).contains(&n.row) && (0..3).contains(&n.col))
//! };
//! let result = algo.search_with_stats(GridCoord::new(0, 0), GridCoord::new(2, 2), neighbors);
//! assert_eq!(result.cost, 4);
//! ```

mod astar;
mod bfs;
mod dfs;
mod ucs;

pub use astar::{astar, astar_with_stats};
pub use bfs::{bfs, bfs_with_stats};
pub use dfs::{dfs, dfs_with_stats};
pub use ucs::{ucs, ucs_with_stats};

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};
use thiserror::Error;

use crate::core::GridCoord;

/// Result of a search with performance statistics
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult {
    /// Path from start to goal inclusive (empty if no path found)
    pub path: Vec<GridCoord>,
    /// Number of nodes dequeued and expanded
    pub nodes_expanded: usize,
    /// Wall-clock time spent searching
    pub elapsed: Duration,
    /// Path cost in edges (`path.len() - 1`), 0 when no path was found
    pub cost: usize,
}

impl SearchResult {
    /// Create a result, deriving the cost from the path
    pub fn new(path: Vec<GridCoord>, nodes_expanded: usize, elapsed: Duration) -> Self {
        let cost = path.len().saturating_sub(1);
        Self {
            path,
            nodes_expanded,
            elapsed,
            cost,
        }
    }

    /// Whether a path was found
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Run a search body and wrap its (path, expansions) output with timing.
fn timed<F>(search: F) -> SearchResult
where
    F: FnOnce() -> (Vec<GridCoord>, usize),
{
    let started = Instant::now();
    let (path, nodes_expanded) = search();
    SearchResult::new(path, nodes_expanded, started.elapsed())
}

/// Manhattan distance heuristic (admissible and consistent on 4-connected
/// unit-cost grids)
#[inline]
pub fn manhattan(a: GridCoord, b: GridCoord) -> u32 {
    a.manhattan_distance(&b)
}

/// Rebuild the path from `start` to `goal` out of a parent map.
///
/// Returns an empty path when the parent chain never reaches `start`.
pub fn reconstruct_path(
    came_from: &HashMap<GridCoord, GridCoord>,
    start: GridCoord,
    goal: GridCoord,
) -> Vec<GridCoord> {
    let mut path = vec![goal];
    let mut current = goal;

    while current != start {
        match came_from.get(&current) {
            Some(&prev) => {
                path.push(prev);
                current = prev;
            }
            None => return Vec::new(),
        }
        // A cycle in the parent map would otherwise never terminate
        if path.len() > came_from.len() + 1 {
            return Vec::new();
        }
    }

    path.reverse();
    path
}

/// Priority-queue entry shared by UCS and A*.
///
/// Ordering is reversed so `BinaryHeap` pops the smallest priority first;
/// equal priorities pop in ascending coordinate order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct QueueNode {
    priority: u32,
    cost: u32,
    coord: GridCoord,
}

impl Ord for QueueNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.coord.cmp(&self.coord))
            .then_with(|| other.cost.cmp(&self.cost))
    }
}

impl PartialOrd for QueueNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Algorithm registry
// ─────────────────────────────────────────────────────────────────────────────

/// Lookup failure for an algorithm name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown algorithm '{0}' (expected one of: bfs, dfs, ucs, astar)")]
pub struct UnknownAlgorithm(pub String);

/// The closed set of search algorithms, selectable by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Breadth-first search
    Bfs,
    /// Depth-first search
    Dfs,
    /// Uniform-cost search
    Ucs,
    /// A* with Manhattan heuristic
    #[default]
    AStar,
}

impl Algorithm {
    /// Every algorithm, in registry order
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Ucs,
        Algorithm::AStar,
    ];

    /// Registry name (`bfs`, `dfs`, `ucs`, `astar`)
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Ucs => "ucs",
            Algorithm::AStar => "astar",
        }
    }

    /// Does this algorithm guarantee a shortest path?
    pub fn is_optimal(self) -> bool {
        !matches!(self, Algorithm::Dfs)
    }

    /// Plain registry entry: returns only the path
    pub fn search<F, I>(self, start: GridCoord, goal: GridCoord, neighbors: F) -> Vec<GridCoord>
    where
        F: Fn(GridCoord) -> I,
        I: IntoIterator<Item = GridCoord>,
    {
        match self {
            Algorithm::Bfs => bfs(start, goal, neighbors),
            Algorithm::Dfs => dfs(start, goal, neighbors),
            Algorithm::Ucs => ucs(start, goal, neighbors),
            Algorithm::AStar => astar(start, goal, neighbors),
        }
    }

    /// With-stats registry entry
    pub fn search_with_stats<F, I>(
        self,
        start: GridCoord,
        goal: GridCoord,
        neighbors: F,
    ) -> SearchResult
    where
        F: Fn(GridCoord) -> I,
        I: IntoIterator<Item = GridCoord>,
    {
        match self {
            Algorithm::Bfs => bfs_with_stats(start, goal, neighbors),
            Algorithm::Dfs => dfs_with_stats(start, goal, neighbors),
            Algorithm::Ucs => ucs_with_stats(start, goal, neighbors),
            Algorithm::AStar => astar_with_stats(start, goal, neighbors),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "ucs" => Ok(Algorithm::Ucs),
            "astar" | "a*" => Ok(Algorithm::AStar),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}
