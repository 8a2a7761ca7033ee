//! A* search with the Manhattan heuristic.
//!
//! The heuristic is admissible and consistent on 4-connected unit-cost
//! grids, so the first time the goal is popped its path is optimal.

use log::trace;
use std::collections::{BinaryHeap, HashMap};

use super::{QueueNode, SearchResult, manhattan, reconstruct_path, timed};
use crate::core::GridCoord;

/// Edge cost between 4-adjacent cells
const STEP_COST: u32 = 1;

/// A* search. Shortest path, or empty if none.
pub fn astar<F, I>(start: GridCoord, goal: GridCoord, neighbors: F) -> Vec<GridCoord>
where
    F: Fn(GridCoord) -> I,
    I: IntoIterator<Item = GridCoord>,
{
    run(start, goal, neighbors).0
}

/// [`astar`] with expansion count and timing.
pub fn astar_with_stats<F, I>(start: GridCoord, goal: GridCoord, neighbors: F) -> SearchResult
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

    let mut open_set = BinaryHeap::from([QueueNode {
        priority: manhattan(start, goal),
        cost: 0,
        coord: start,
    }]);
    let mut g_scores: HashMap<GridCoord, u32> = HashMap::from([(start, 0)]);
    let mut came_from: HashMap<GridCoord, GridCoord> = HashMap::new();
    let mut nodes_expanded = 0;

    while let Some(current) = open_set.pop() {
        if g_scores.get(&current.coord).is_some_and(|&g| current.cost > g) {
            continue;
        }
        nodes_expanded += 1;

        if current.coord == goal {
            let path = reconstruct_path(&came_from, start, goal);
            trace!(
                "[AStar] SUCCESS: {} -> {} cost={} expanded={}",
                start, goal, current.cost, nodes_expanded
            );
            return (path, nodes_expanded);
        }

        for neighbor in neighbors(current.coord) {
            let tentative_g = current.cost + STEP_COST;
            if g_scores.get(&neighbor).is_none_or(|&g| tentative_g < g) {
                g_scores.insert(neighbor, tentative_g);
                came_from.insert(neighbor, current.coord);
                open_set.push(QueueNode {
                    priority: tentative_g + manhattan(neighbor, goal),
                    cost: tentative_g,
                    coord: neighbor,
                });
            }
        }
    }

    trace!(
        "[AStar] NoPath {} -> {} after expanding {} nodes",
        start, goal, nodes_expanded
    );
    (Vec::new(), nodes_expanded)
}
