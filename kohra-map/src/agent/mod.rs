//! Online fog-of-war navigation.
//!
//! The agent only knows what it has sensed. Each step it reveals its
//! 4-neighbourhood, re-plans over the known subgraph when the map changed
//! or the plan ran out, then moves one cell.
//!
//! ## State Machine
//!
//! ```text
//!              goal path found
//!   Exploring ─────────────────> PathFollowing ──> Done
//!       │                              │
//!       │ no frontier left             │ step budget spent
//!       └──────────────────────────────┴─────────> Stuck
//! ```
//!
//! ## Example
//!
//! ```rust
//! use kohra_map::agent::{AgentConfig, AgentState, OnlineAgent};
//! use kohra_map::grid::Grid;
//!
//! let mut grid = Grid::from_symbols(&[vec!["S", "0", "0", "0", "G"]]).unwrap();
//! let mut agent = OnlineAgent::new(&mut grid, AgentConfig::default());
//! let metrics = agent.run(100);
//!
//! assert_eq!(agent.state(), AgentState::Done);
//! assert_eq!(metrics.steps, 4);
//! ```

mod config;
mod frontier;
mod metrics;
mod online;
mod state;

pub use config::AgentConfig;
pub use frontier::{find_frontiers, is_frontier, rank_frontiers};
pub use metrics::Metrics;
pub use online::{OnlineAgent, PlanTarget, run_mission};
pub use state::AgentState;
