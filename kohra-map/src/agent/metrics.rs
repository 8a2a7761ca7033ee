//! Mission statistics.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::core::GridCoord;
use crate::search::SearchResult;

/// Accumulated statistics for one mission
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Moves made
    pub steps: usize,
    /// Nodes expanded across every search, including failed frontier searches
    pub nodes_expanded: usize,
    /// Plans that abandoned an unfinished course
    pub replans: usize,
    /// Plans committed, the initial one included
    pub plans: usize,
    /// Wall time spent setting up the mission and inside `step`
    pub elapsed: Duration,
    /// Wall time spent searching
    pub search_time: Duration,
    /// Edges walked
    pub cost: usize,
    /// Did the agent stand on the goal at the end?
    pub reached_goal: bool,
    /// Did the mission stop on the step budget?
    pub budget_exhausted: bool,
    /// Every cell occupied, starting with the start cell
    pub path_taken: Vec<GridCoord>,
}

impl Metrics {
    /// Fresh metrics for a mission beginning at `start`
    pub fn new(start: GridCoord) -> Self {
        Self {
            path_taken: vec![start],
            ..Default::default()
        }
    }

    /// Fold one search into the totals
    pub fn record_search(&mut self, result: &SearchResult) {
        self.nodes_expanded += result.nodes_expanded;
        self.search_time += result.elapsed;
    }

    /// Record a single move onto `cell`
    pub fn record_move(&mut self, cell: GridCoord) {
        self.steps += 1;
        self.cost += 1;
        self.path_taken.push(cell);
    }

    /// Average expansions per committed plan
    pub fn nodes_per_plan(&self) -> f64 {
        if self.plans == 0 {
            0.0
        } else {
            self.nodes_expanded as f64 / self.plans as f64
        }
    }
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "reached_goal:     {}", self.reached_goal)?;
        writeln!(f, "steps:            {}", self.steps)?;
        writeln!(f, "cost:             {}", self.cost)?;
        writeln!(f, "plans:            {}", self.plans)?;
        writeln!(f, "replans:          {}", self.replans)?;
        writeln!(f, "nodes_expanded:   {}", self.nodes_expanded)?;
        writeln!(
            f,
            "search_time:      {:.3} ms",
            self.search_time.as_secs_f64() * 1000.0
        )?;
        writeln!(
            f,
            "elapsed:          {:.3} ms",
            self.elapsed.as_secs_f64() * 1000.0
        )?;
        write!(f, "budget_exhausted: {}", self.budget_exhausted)
    }
}
