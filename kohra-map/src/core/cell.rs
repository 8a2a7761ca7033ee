//! Tile types for the maze grid.
//!
//! Maps use four symbols: `0` free, `1` wall, `S` start, `G` goal.

use serde::{Deserialize, Serialize};

/// Semantic tile type of a maze cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Tile {
    /// Open floor
    #[default]
    Free = 0,

    /// Impassable wall
    Wall = 1,

    /// Mission start cell (passable)
    Start = 2,

    /// Mission goal cell (passable)
    Goal = 3,
}

impl Tile {
    /// Parse a map symbol. Returns `None` for anything outside `{0, 1, S, G}`.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "0" => Some(Tile::Free),
            "1" => Some(Tile::Wall),
            "S" => Some(Tile::Start),
            "G" => Some(Tile::Goal),
            _ => None,
        }
    }

    /// Map symbol as written in CSV files
    pub fn symbol(self) -> char {
        match self {
            Tile::Free => '0',
            Tile::Wall => '1',
            Tile::Start => 'S',
            Tile::Goal => 'G',
        }
    }

    /// Can the agent stand on this tile?
    #[inline]
    pub fn is_passable(self) -> bool {
        !matches!(self, Tile::Wall)
    }

    /// Single character representation for text views
    pub fn as_char(self) -> char {
        match self {
            Tile::Free => '.',
            Tile::Wall => '#',
            Tile::Start => 'S',
            Tile::Goal => 'G',
        }
    }
}
