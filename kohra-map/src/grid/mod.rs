//! Maze grid with fog-of-war.
//!
//! This module owns map topology and the agent's accumulated visibility:
//!
//! - **Storage**: [`Grid`] holds the static tile table plus a visibility mask
//! - **Validation**: construction rejects malformed maps with [`GridError`]
//! - **Generation**: [`generate_maze`] builds seeded test mazes
//!
//! ## Fog Model
//!
//! Sensing radius is exactly one cell in the four cardinal directions.
//! Walls inside that radius are revealed (and stop nothing further, since the
//! radius ends there). Revelation is monotonic: no cell is ever re-fogged.
//!
//! ```text
//!   ? ? ? ? ?        ? ? ? ? ?
//!   ? ? ? ? ?        ? ? # ? ?
//!   ? ? S ? ?   ->   ? . S . ?      reveal_from(S)
//!   ? ? ? ? ?        ? ? . ? ?
//! ```

mod error;
pub mod maze;
mod storage;

pub use error::GridError;
pub use maze::{MazeConfig, generate_maze};
pub use storage::Grid;
