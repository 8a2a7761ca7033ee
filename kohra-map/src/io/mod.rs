//! Map files and text rendering.

pub mod csv_map;
pub mod text;

pub use csv_map::{MapLoadError, load_map, parse_map, save_map, to_csv, write_map};
pub use text::{render_full, render_masked};
