//! Core types shared by every module.

mod cell;
mod coord;

pub use cell::Tile;
pub use coord::GridCoord;
