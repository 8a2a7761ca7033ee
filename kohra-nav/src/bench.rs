//! Benchmark runner: every (algorithm, mode) trial on a set of maps.
//!
//! Maps are either seeded mazes generated on the fly or every `.csv` file in
//! a directory. Trials for one map run in parallel, one scoped thread each,
//! on their own clone of the grid.

use crate::error::{NavError, Result};
use crate::mazes::maze_name;
use clap::ValueEnum;
use kohra_map::search::bfs;
use kohra_map::{
    AgentConfig, Algorithm, Grid, MazeConfig, Metrics, OnlineAgent, generate_maze, load_map,
};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Knowledge mode of a trial
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Progressive reveal
    Fog,
    /// Whole map known from the start
    NoFog,
}

impl Mode {
    pub fn fog(self) -> bool {
        matches!(self, Mode::Fog)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Fog => write!(f, "fog"),
            Mode::NoFog => write!(f, "no-fog"),
        }
    }
}

/// What to benchmark
#[derive(Clone, Debug)]
pub struct BenchSettings {
    /// Maze sides to generate
    pub sizes: Vec<usize>,
    /// Seeds `0..seeds` per size
    pub seeds: u64,
    /// Braid fraction for every maze
    pub braid: f32,
    pub algorithms: Vec<Algorithm>,
    pub modes: Vec<Mode>,
    /// Step budget per mission, as a multiple of the map's cell count
    pub max_steps_factor: f32,
}

impl BenchSettings {
    /// Sizes `min, min + step, ...` up to and including `max`
    pub fn size_range(min: usize, max: usize, step: usize) -> Vec<usize> {
        (min..=max).step_by(step.max(1)).collect()
    }

    /// Step budget for one mission on `grid`
    pub fn step_budget(&self, grid: &Grid) -> usize {
        (grid.cell_count() as f64 * f64::from(self.max_steps_factor)).ceil() as usize
    }

    fn trials(&self) -> Vec<(Algorithm, Mode)> {
        self.algorithms
            .iter()
            .flat_map(|a| self.modes.iter().map(move |m| (*a, *m)))
            .collect()
    }
}

/// Benchmark result for a single trial
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Map name: file stem, or `maze_<w>x<h>_b<braid%>` for generated mazes
    pub map: String,
    /// Maze width
    pub size: usize,
    /// Generator seed (generated mazes only)
    pub seed: Option<u64>,
    pub algorithm: Algorithm,
    pub mode: Mode,
    /// Step budget the mission ran with
    pub max_steps: usize,
    pub reached_goal: bool,
    pub budget_exhausted: bool,
    pub steps: usize,
    /// Edges walked
    pub cost: usize,
    /// Shortest possible cost with the whole map known
    pub optimal_cost: Option<usize>,
    pub plans: usize,
    pub replans: usize,
    pub nodes_expanded: usize,
    pub nodes_per_plan: f64,
    pub search_time_ms: f64,
    pub elapsed_ms: f64,
    /// Fraction of the map revealed at the end
    pub coverage: f32,
}

/// Run every configured trial on freshly generated mazes
pub fn run_benchmark(settings: &BenchSettings) -> Result<Vec<BenchmarkResult>> {
    let mut results = Vec::new();
    for &size in &settings.sizes {
        for seed in 0..settings.seeds {
            let grid = generate_maze(&MazeConfig::square(size, seed).with_braid(settings.braid))?;
            let name = maze_name(&grid, settings.braid);
            results.extend(run_map(&name, Some(seed), &grid, settings)?);
        }
    }

    info!("[Bench] {} trials complete", results.len());
    Ok(results)
}

/// `.csv` files in `dir`, sorted by path
pub fn map_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = std::fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    files.retain(|p| {
        p.is_file()
            && p
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
    });
    files.sort();
    Ok(files)
}

/// Run every configured trial on each CSV map in `dir`.
///
/// Sizes, seeds and braid are ignored; the maps are used as they are.
pub fn run_map_benchmark(dir: &Path, settings: &BenchSettings) -> Result<Vec<BenchmarkResult>> {
    let files = map_files(dir)?;
    if files.is_empty() {
        return Err(NavError::NoMaps(dir.to_path_buf()));
    }
    info!("[Bench] {} maps in {}", files.len(), dir.display());

    let mut results = Vec::new();
    for path in &files {
        let grid = load_map(path)?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        results.extend(run_map(&name, None, &grid, settings)?);
    }

    info!("[Bench] {} trials complete", results.len());
    Ok(results)
}

fn run_map(
    name: &str,
    seed: Option<u64>,
    grid: &Grid,
    settings: &BenchSettings,
) -> Result<Vec<BenchmarkResult>> {
    let optimal_cost = offline_optimal(grid);
    let max_steps = settings.step_budget(grid);
    debug!(
        "[Bench] {} ({}x{}) optimal {:?} budget {}",
        name,
        grid.height(),
        grid.width(),
        optimal_cost,
        max_steps
    );

    let trials = settings.trials();
    let batch = std::thread::scope(|s| {
        let handles: Vec<_> = trials
            .iter()
            .map(|&(algorithm, mode)| s.spawn(move || run_trial(grid, algorithm, mode, max_steps)))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join())
            .collect::<Vec<_>>()
    });

    let mut results = Vec::with_capacity(trials.len());
    for (&(algorithm, mode), outcome) in trials.iter().zip(batch) {
        let (metrics, coverage) = outcome.map_err(|_| {
            NavError::Worker(format!("{algorithm}/{mode} trial panicked on {name}"))
        })?;
        results.push(BenchmarkResult {
            map: name.to_string(),
            size: grid.width(),
            seed,
            algorithm,
            mode,
            max_steps,
            reached_goal: metrics.reached_goal,
            budget_exhausted: metrics.budget_exhausted,
            steps: metrics.steps,
            cost: metrics.cost,
            optimal_cost,
            plans: metrics.plans,
            replans: metrics.replans,
            nodes_expanded: metrics.nodes_expanded,
            nodes_per_plan: metrics.nodes_per_plan(),
            search_time_ms: metrics.search_time.as_secs_f64() * 1000.0,
            elapsed_ms: metrics.elapsed.as_secs_f64() * 1000.0,
            coverage,
        });
    }
    Ok(results)
}

fn offline_optimal(grid: &Grid) -> Option<usize> {
    let path = bfs(grid.start(), grid.goal(), |c| grid.passable_neighbors(c));
    (!path.is_empty()).then(|| path.len() - 1)
}

/// One mission on a private copy of `template`; metrics and final coverage
fn run_trial(template: &Grid, algorithm: Algorithm, mode: Mode, max_steps: usize) -> (Metrics, f32) {
    let mut grid = template.clone();
    let config = AgentConfig::with_algorithm(algorithm)
        .fog(mode.fog())
        .max_steps(max_steps);
    let mut agent = OnlineAgent::new(&mut grid, config);
    let metrics = agent.run_configured();
    (metrics, agent.grid().coverage())
}

/// Markdown summary, one row per (map, algorithm, mode) averaged over seeds
pub fn markdown_table(results: &[BenchmarkResult]) -> String {
    let mut groups: BTreeMap<(usize, &str, &'static str, Mode), Vec<&BenchmarkResult>> =
        BTreeMap::new();
    for r in results {
        groups
            .entry((r.size, r.map.as_str(), r.algorithm.name(), r.mode))
            .or_default()
            .push(r);
    }

    let mut out = String::new();
    out.push_str(
        "| Map | Algorithm | Mode | Success | Steps | Cost / Optimal | Replans | Nodes | Nodes / Plan | Search (ms) |\n",
    );
    out.push_str(
        "|-----|-----------|------|---------|-------|----------------|---------|-------|--------------|-------------|\n",
    );

    for ((_, map, algo, mode), rows) in groups {
        let n = rows.len() as f64;
        let mean = |f: fn(&BenchmarkResult) -> f64| rows.iter().map(|r| f(r)).sum::<f64>() / n;
        let successes = rows.iter().filter(|r| r.reached_goal).count();
        let ratios: Vec<f64> = rows
            .iter()
            .filter(|r| r.reached_goal)
            .filter_map(|r| match r.optimal_cost {
                Some(opt) if opt > 0 => Some(r.cost as f64 / opt as f64),
                _ => None,
            })
            .collect();
        let ratio = if ratios.is_empty() {
            "-".to_string()
        } else {
            format!("{:.2}", ratios.iter().sum::<f64>() / ratios.len() as f64)
        };

        let row = format!(
            "| {} | {} | {} | {}/{} | {:.1} | {} | {:.1} | {:.0} | {:.1} | {:.3} |\n",
            map,
            algo,
            mode,
            successes,
            rows.len(),
            mean(|r| r.steps as f64),
            ratio,
            mean(|r| r.replans as f64),
            mean(|r| r.nodes_expanded as f64),
            mean(|r| r.nodes_per_plan),
            mean(|r| r.search_time_ms),
        );
        out.push_str(&row);
    }
    out
}

/// Write results as a pretty JSON array
pub fn write_results(path: &Path, results: &[BenchmarkResult]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(results)?;
    std::fs::write(path, json)?;
    info!("[Bench] results written to {}", path.display());
    Ok(())
}
