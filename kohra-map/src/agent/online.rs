//! Online agent: plan, move one cell, sense, re-plan.

use log::{debug, info, trace, warn};
use std::time::Instant;

use crate::core::GridCoord;
use crate::grid::Grid;
use crate::search::SearchResult;

use super::config::AgentConfig;
use super::frontier::{find_frontiers, rank_frontiers};
use super::metrics::Metrics;
use super::state::AgentState;

/// What the current plan leads to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlanTarget {
    /// The mission goal
    Goal(GridCoord),
    /// A frontier cell, to uncover more of the map
    Frontier(GridCoord),
}

impl PlanTarget {
    /// Target cell
    pub fn coord(&self) -> GridCoord {
        match self {
            PlanTarget::Goal(c) | PlanTarget::Frontier(c) => *c,
        }
    }
}

/// Agent navigating a grid it can only partially see.
///
/// The agent holds the only mutable borrow of the grid for the mission, so
/// visibility can only grow through its own sensing. The plan always starts
/// at the current cell.
#[derive(Debug)]
pub struct OnlineAgent<'g> {
    grid: &'g mut Grid,
    config: AgentConfig,
    current: GridCoord,
    plan: Vec<GridCoord>,
    target: Option<PlanTarget>,
    state: AgentState,
    metrics: Metrics,
}

impl<'g> OnlineAgent<'g> {
    /// Start a mission on `grid`: sense (or reveal everything when fog is
    /// off) and commit the initial plan. The setup counts toward `elapsed`.
    pub fn new(grid: &'g mut Grid, config: AgentConfig) -> Self {
        let started = Instant::now();
        let start = grid.start();
        if config.fog {
            grid.reveal_from(start);
        } else {
            grid.reveal_all();
        }

        let mut agent = Self {
            grid,
            config,
            current: start,
            plan: Vec::new(),
            target: None,
            state: AgentState::Exploring,
            metrics: Metrics::new(start),
        };

        if start == agent.grid.goal() {
            agent.plan = vec![start];
            agent.target = Some(PlanTarget::Goal(start));
            agent.finish(AgentState::Done);
        } else {
            agent.replan();
        }
        agent.metrics.elapsed += started.elapsed();

        debug!(
            "[Agent] start {} goal {} algo={} fog={} state={}",
            start,
            agent.grid.goal(),
            agent.config.algorithm,
            agent.config.fog,
            agent.state
        );
        agent
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// Cell the agent stands on
    pub fn current(&self) -> GridCoord {
        self.current
    }

    /// Current state
    pub fn state(&self) -> AgentState {
        self.state
    }

    /// Remaining plan, starting at the current cell (empty when stuck)
    pub fn plan(&self) -> &[GridCoord] {
        &self.plan
    }

    /// What the plan leads to, if anything
    pub fn target(&self) -> Option<PlanTarget> {
        self.target
    }

    /// Mission goal
    pub fn goal(&self) -> GridCoord {
        self.grid.goal()
    }

    /// Metrics accumulated so far
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// The grid with the agent's visibility
    pub fn grid(&self) -> &Grid {
        &*self.grid
    }

    /// Configuration
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    // =========================================================================
    // MISSION LOOP
    // =========================================================================

    /// Advance by at most one cell.
    ///
    /// Returns `true` if the agent moved and the mission continues, `false`
    /// once it is done or stuck.
    pub fn step(&mut self) -> bool {
        let started = Instant::now();
        let moved = self.advance();
        self.metrics.elapsed += started.elapsed();
        moved
    }

    /// Step until terminal or until `max_steps` moves have been made.
    ///
    /// Running out of budget leaves the agent `Stuck` with
    /// `budget_exhausted` set.
    pub fn run(&mut self, max_steps: usize) -> Metrics {
        self.run_with(max_steps, |_| {})
    }

    /// [`run`](Self::run) with the configured step budget
    pub fn run_configured(&mut self) -> Metrics {
        self.run(self.config.max_steps)
    }

    /// [`run`](Self::run), calling `on_step` after every move.
    pub fn run_with<F>(&mut self, max_steps: usize, mut on_step: F) -> Metrics
    where
        F: FnMut(&OnlineAgent<'g>),
    {
        while self.metrics.steps < max_steps && self.step() {
            on_step(self);
        }

        if self.state.is_active() {
            warn!(
                "[Agent] step budget of {} exhausted at {}",
                max_steps, self.current
            );
            self.metrics.budget_exhausted = true;
            self.plan.clear();
            self.target = None;
            self.finish(AgentState::Stuck);
        }

        self.metrics.clone()
    }

    fn advance(&mut self) -> bool {
        if self.state.is_terminal() {
            return false;
        }

        let revealed = if self.config.fog {
            self.grid.reveal_from(self.current).len()
        } else {
            0
        };

        if self.current == self.grid.goal() {
            self.finish(AgentState::Done);
            return false;
        }

        if revealed > 0 || self.needs_replan() {
            trace!(
                "[Agent] re-planning at {} ({} cells revealed)",
                self.current, revealed
            );
            if !self.replan() {
                return false;
            }
        }

        let Some(&next) = self.plan.get(1) else {
            self.finish(AgentState::Stuck);
            return false;
        };
        if !self.grid.passable(next) {
            warn!("[Agent] refusing move onto wall {}", next);
            self.plan.clear();
            self.finish(AgentState::Stuck);
            return false;
        }

        self.plan.remove(0);
        self.current = next;
        self.metrics.record_move(next);

        if self.current == self.grid.goal() {
            self.finish(AgentState::Done);
            return false;
        }
        true
    }

    /// Plan consumed, or its next cell is no longer known to be open
    fn needs_replan(&self) -> bool {
        self.plan
            .get(1)
            .is_none_or(|n| !(self.grid.is_visible(*n) && self.grid.passable(*n)))
    }

    /// Plan toward the goal, or else the nearest reachable frontier.
    ///
    /// Returns false (and leaves the agent `Stuck`) when neither exists.
    fn replan(&mut self) -> bool {
        let goal = self.grid.goal();
        let result = self.search_known(goal);
        if result.found() {
            self.commit(result.path, PlanTarget::Goal(goal), AgentState::PathFollowing);
            return true;
        }

        if let Some((frontier, path)) = self.select_frontier() {
            self.commit(path, PlanTarget::Frontier(frontier), AgentState::Exploring);
            return true;
        }

        debug!(
            "[Agent] no goal path and no reachable frontier from {}",
            self.current
        );
        self.plan.clear();
        self.target = None;
        self.finish(AgentState::Stuck);
        false
    }

    /// Nearest frontier (by Manhattan distance, then coordinate) that the
    /// known map can actually reach, with the path to it.
    fn select_frontier(&mut self) -> Option<(GridCoord, Vec<GridCoord>)> {
        let mut frontiers = find_frontiers(&*self.grid);
        frontiers.retain(|f| *f != self.current);
        rank_frontiers(&mut frontiers, self.current);

        for frontier in frontiers {
            let result = self.search_known(frontier);
            if result.found() {
                return Some((frontier, result.path));
            }
            trace!("[Agent] frontier {} unreachable", frontier);
        }
        None
    }

    /// Search the revealed, passable subgraph from the current cell.
    fn search_known(&mut self, target: GridCoord) -> SearchResult {
        let grid: &Grid = &*self.grid;
        let result = self
            .config
            .algorithm
            .search_with_stats(self.current, target, |c| grid.get_visible_neighbors(c));
        self.metrics.record_search(&result);
        result
    }

    fn commit(&mut self, path: Vec<GridCoord>, target: PlanTarget, state: AgentState) {
        let abandoned = self.plan.len() >= 2 && self.plan != path;
        if abandoned {
            self.metrics.replans += 1;
            debug!(
                "[Agent] replan #{} at {}: {:?} -> {}",
                self.metrics.replans,
                self.current,
                self.target.map(|t| t.coord()),
                target.coord()
            );
        }
        self.metrics.plans += 1;

        if self.state != state {
            debug!("[Agent] {} -> {}", self.state, state);
        }
        self.plan = path;
        self.target = Some(target);
        self.state = state;
    }

    fn finish(&mut self, state: AgentState) {
        self.state = state;
        self.metrics.reached_goal = state == AgentState::Done;
        info!(
            "[Agent] mission {} at {} after {} steps ({} plans, {} replans, {} nodes)",
            state,
            self.current,
            self.metrics.steps,
            self.metrics.plans,
            self.metrics.replans,
            self.metrics.nodes_expanded
        );
    }
}

/// Run one complete mission on `grid` with `config`'s step budget.
pub fn run_mission(grid: &mut Grid, config: AgentConfig) -> Metrics {
    OnlineAgent::new(grid, config).run_configured()
}
