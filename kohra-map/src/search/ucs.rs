//! Uniform-cost search.
//!
//! Every edge costs 1 here, so the result matches BFS in length; the
//! priority queue keeps the algorithm correct for weighted edges too.

use log::trace;
use std::collections::{BinaryHeap, HashMap};

use super::{QueueNode, SearchResult, reconstruct_path, timed};
use crate::core::GridCoord;

/// Edge cost between 4-adjacent cells
const STEP_COST: u32 = 1;

/// Uniform-cost search. Cheapest path, or empty if none.
pub fn ucs<F, I>(start: GridCoord, goal: GridCoord, neighbors: F) -> Vec<GridCoord>
where
    F: Fn(GridCoord) -> I,
    I: IntoIterator<Item = GridCoord>,
{
    run(start, goal, neighbors).0
}

/// [`ucs`] with expansion count and timing.
pub fn ucs_with_stats<F, I>(start: GridCoord, goal: GridCoord, neighbors: F) -> SearchResult
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

    let mut frontier = BinaryHeap::from([QueueNode {
        priority: 0,
        cost: 0,
        coord: start,
    }]);
    let mut cost_so_far: HashMap<GridCoord, u32> = HashMap::from([(start, 0)]);
    let mut came_from: HashMap<GridCoord, GridCoord> = HashMap::new();
    let mut nodes_expanded = 0;

    while let Some(node) = frontier.pop() {
        // Stale entry superseded by a cheaper one
        if cost_so_far.get(&node.coord).is_some_and(|&c| node.cost > c) {
            continue;
        }
        nodes_expanded += 1;

        if node.coord == goal {
            let path = reconstruct_path(&came_from, start, goal);
            trace!(
                "[UCS] SUCCESS: {} -> {} cost={} expanded={}",
                start, goal, node.cost, nodes_expanded
            );
            return (path, nodes_expanded);
        }

        for neighbor in neighbors(node.coord) {
            let new_cost = node.cost + STEP_COST;
            if cost_so_far.get(&neighbor).is_none_or(|&c| new_cost < c) {
                cost_so_far.insert(neighbor, new_cost);
                came_from.insert(neighbor, node.coord);
                frontier.push(QueueNode {
                    priority: new_cost,
                    cost: new_cost,
                    coord: neighbor,
                });
            }
        }
    }

    trace!(
        "[UCS] NoPath {} -> {} after expanding {} nodes",
        start, goal, nodes_expanded
    );
    (Vec::new(), nodes_expanded)
}
