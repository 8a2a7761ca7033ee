//! Breadth-first search.

use log::trace;
use std::collections::{HashMap, HashSet, VecDeque};

use super::{SearchResult, reconstruct_path, timed};
use crate::core::GridCoord;

/// Breadth-first search. Shortest path by edge count, or empty if none.
pub fn bfs<F, I>(start: GridCoord, goal: GridCoord, neighbors: F) -> Vec<GridCoord>
where
    F: Fn(GridCoord) -> I,
    I: IntoIterator<Item = GridCoord>,
{
    run(start, goal, neighbors).0
}

/// [`bfs`] with expansion count and timing.
pub fn bfs_with_stats<F, I>(start: GridCoord, goal: GridCoord, neighbors: F) -> SearchResult
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

    let mut queue = VecDeque::from([start]);
    let mut visited = HashSet::from([start]);
    let mut came_from: HashMap<GridCoord, GridCoord> = HashMap::new();
    let mut nodes_expanded = 0;

    while let Some(current) = queue.pop_front() {
        nodes_expanded += 1;

        if current == goal {
            let path = reconstruct_path(&came_from, start, goal);
            trace!(
                "[BFS] SUCCESS: {} -> {} length={} expanded={}",
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
                queue.push_back(neighbor);
            }
        }
    }

    trace!(
        "[BFS] NoPath {} -> {} after expanding {} nodes",
        start, goal, nodes_expanded
    );
    (Vec::new(), nodes_expanded)
}
