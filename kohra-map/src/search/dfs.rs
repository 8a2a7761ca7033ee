//! Depth-first search.
//!
//! Finds *a* path, not necessarily a short one. Kept for contrast in
//! benchmarks; the agent should prefer one of the optimal algorithms.

use log::trace;
use std::collections::{HashMap, HashSet};

use super::{SearchResult, reconstruct_path, timed};
use crate::core::GridCoord;

/// Depth-first search. Any valid path, or empty if none.
pub fn dfs<F, I>(start: GridCoord, goal: GridCoord, neighbors: F) -> Vec<GridCoord>
where
    F: Fn(GridCoord) -> I,
    I: IntoIterator<Item = GridCoord>,
{
    run(start, goal, neighbors).0
}

/// [`dfs`] with expansion count and timing.
pub fn dfs_with_stats<F, I>(start: GridCoord, goal: GridCoord, neighbors: F) -> SearchResult
where
    F: Fn(GridCoord) -> I,
    I: IntoIterator<Item = GridCoord>,
{
    timed(|| run(start, goal, neighbors))
}

fn run<F, I>(start: GridCoord, goal: GridCoord, neighbors: F) -> (Vec<GridCoord>, usize)
where
    F: Fn(GridCoord) -> I,
    I: IntoIterator<Item = GridCoord>,
{
    if start == goal {
        return (vec![start], 0);
    }

    let mut stack = vec![start];
    let mut visited = HashSet::from([start]);
    let mut came_from: HashMap<GridCoord, GridCoord> = HashMap::new();
    let mut nodes_expanded = 0;

    while let Some(current) = stack.pop() {
        nodes_expanded += 1;

        if current == goal {
            let path = reconstruct_path(&came_from, start, goal);
            trace!(
                "[DFS] SUCCESS: {} -> {} length={} expanded={}",
                start,
                goal,
                path.len(),
                nodes_expanded
            );
            return (path, nodes_expanded);
        }

        for neighbor in neighbors(current) {
            if visited.insert(neighbor) {
                came_from.insert(neighbor, current);
                stack.push(neighbor);
            }
        }
    }

    trace!(
        "[DFS] NoPath {} -> {} after expanding {} nodes",
        start, goal, nodes_expanded
    );
    (Vec::new(), nodes_expanded)
}
