//! Batch maze generation: a geometric ladder of sizes, several seeds each,
//! written as CSV files into one directory.

use crate::error::Result;
use kohra_map::io::save_map;
use kohra_map::{Grid, MazeConfig, generate_maze};
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Sizes `start, start * factor, ...` up to and including `max`.
///
/// The factor is raised to at least 1.01 and every rung grows by at least
/// one, so the ladder always terminates.
pub fn size_ladder(start: usize, factor: f32, max: usize) -> Vec<usize> {
    let factor = f64::from(factor).max(1.01);
    let mut sizes = Vec::new();
    let mut n = start.max(1);
    while n <= max {
        sizes.push(n);
        let next = (n as f64 * factor) as usize;
        n = next.max(n + 1);
    }
    sizes
}

/// Name of a generated maze without its seed: `maze_<w>x<h>_b<braid%>`
pub fn maze_name(grid: &Grid, braid: f32) -> String {
    format!(
        "maze_{}x{}_b{}",
        grid.width(),
        grid.height(),
        (braid.clamp(0.0, 1.0) * 100.0).round() as u32
    )
}

/// Generate seeds `0..seeds` for every size and save them into `dir`.
///
/// Files are named `<maze_name>_s<seed>.csv` after the actual (odd) grid
/// size, so sizes that coerce to the same side are written once. Returns the
/// paths written, in generation order.
pub fn write_maze_set(dir: &Path, sizes: &[usize], seeds: u64, braid: f32) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;

    let mut written: Vec<PathBuf> = Vec::new();
    for &size in sizes {
        for seed in 0..seeds {
            let grid = generate_maze(&MazeConfig::square(size, seed).with_braid(braid))?;
            let path = dir.join(format!("{}_s{}.csv", maze_name(&grid, braid), seed));
            if written.contains(&path) {
                continue;
            }
            save_map(&grid, &path)?;
            debug!("[Gen] wrote {}", path.display());
            written.push(path);
        }
    }

    info!("[Gen] {} mazes written to {}", written.len(), dir.display());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kohra_map::load_map;
    use tempfile::tempdir;

    #[test]
    fn test_size_ladder_doubles() {
        assert_eq!(size_ladder(5, 2.0, 40), vec![5, 10, 20, 40]);
        assert_eq!(size_ladder(5, 2.0, 39), vec![5, 10, 20]);
        assert_eq!(size_ladder(11, 1.5, 30), vec![11, 16, 24]);
    }

    #[test]
    fn test_size_ladder_always_grows() {
        assert_eq!(size_ladder(3, 1.0, 6), vec![3, 4, 5, 6]);
        assert_eq!(size_ladder(0, 2.0, 4), vec![1, 2, 4]);
        assert!(size_ladder(10, 2.0, 5).is_empty());
    }

    #[test]
    fn test_write_maze_set() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("set");
        let written = write_maze_set(&out, &[5, 10], 2, 0.3).unwrap();

        let names: Vec<_> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec![
                "maze_5x5_b30_s0.csv",
                "maze_5x5_b30_s1.csv",
                "maze_11x11_b30_s0.csv",
                "maze_11x11_b30_s1.csv",
            ]
        );

        let grid = load_map(&written[3]).unwrap();
        assert_eq!((grid.width(), grid.height()), (11, 11));
        let regenerated = generate_maze(&MazeConfig::square(10, 1).with_braid(0.3)).unwrap();
        assert_eq!(grid, regenerated);
    }

    #[test]
    fn test_write_maze_set_skips_coerced_duplicates() {
        let dir = tempdir().unwrap();
        let written = write_maze_set(dir.path(), &[3, 4, 5], 1, 0.0).unwrap();
        assert_eq!(written.len(), 1);
        assert!(written[0].ends_with("maze_5x5_b0_s0.csv"));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
