//! # Kohra
//!
//! Fog-of-war grid navigation: an agent that starts out blind on a maze,
//! senses one cell around itself, and searches its way to the goal.
//!
//! ## Overview
//!
//! - **Grid**: rectangular tile table (`0` free, `1` wall, `S`, `G`) with a
//!   monotonic visibility mask
//! - **Search**: BFS, DFS, UCS and A* over any neighbour function
//! - **Agent**: online plan / move / sense / re-plan loop with metrics
//! - **I/O**: CSV maps and text frames
//!
//! ## Quick Start
//!
//! ```rust
//! use kohra_map::{AgentConfig, Algorithm, MazeConfig, OnlineAgent, generate_maze};
//!
//! let mut grid = generate_maze(&MazeConfig::square(15, 7)).unwrap();
//! let config = AgentConfig::with_algorithm(Algorithm::AStar);
//! let mut agent = OnlineAgent::new(&mut grid, config);
//! let metrics = agent.run(1_000);
//!
//! assert!(metrics.reached_goal);
//! ```
//!
//! ## Coordinate System
//!
//! Cells are addressed `(row, col)` with `(0, 0)` at the top-left. Rows grow
//! downward. Neighbours are always listed up, down, left, right.

#![warn(missing_docs)]

// Coordinates and tiles
pub mod core;

// Grid storage, fog, maze generation
pub mod grid;

// Search algorithms
pub mod search;

// Online agent
pub mod agent;

// CSV maps and text rendering
pub mod io;

pub use agent::{AgentConfig, AgentState, Metrics, OnlineAgent, PlanTarget, run_mission};
pub use core::{GridCoord, Tile};
pub use grid::{Grid, GridError, MazeConfig, generate_maze};
pub use io::{MapLoadError, load_map, parse_map, render_full, render_masked};
pub use search::{Algorithm, SearchResult, UnknownAlgorithm};
