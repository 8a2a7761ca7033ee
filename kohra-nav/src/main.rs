//! KohraNav - command line front end for Kohra maze missions
//!
//! Runs a single fog-of-war mission on a CSV map, benchmarks every
//! algorithm on generated mazes or a directory of CSV maps, or writes
//! generated mazes to disk.
//!
//! ## Configuration
//!
//! Settings come from `kohra.toml` in the working directory (or
//! `--config <file>`), sections `[agent]`, `[maze]` and `[output]`. Command
//! line flags override file values.

mod bench;
mod config;
mod error;
mod mazes;

use bench::{
    BenchSettings, Mode, markdown_table, run_benchmark, run_map_benchmark, write_results,
};
use clap::{Args, Parser, Subcommand};
use config::NavConfig;
use error::Result;
use kohra_map::io::{save_map, to_csv};
use kohra_map::{Algorithm, OnlineAgent, generate_maze, load_map, render_masked};
use log::{info, warn};
use mazes::{size_ladder, write_maze_set};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "kohra-nav")]
#[command(about = "Fog-of-war maze navigation missions and benchmarks")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (default: ./kohra.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run one mission on a CSV map
    Run(RunArgs),
    /// Benchmark algorithms on generated mazes or a directory of maps
    Bench(BenchArgs),
    /// Generate a maze, or a ladder of maze sizes, as CSV
    Gen(GenArgs),
}

#[derive(Args, Debug)]
struct RunArgs {
    /// CSV map file
    #[arg(short, long)]
    map: PathBuf,

    /// Search algorithm (bfs, dfs, ucs, astar)
    #[arg(short, long, value_parser = clap::value_parser!(Algorithm))]
    algo: Option<Algorithm>,

    /// Reveal the whole map at start
    #[arg(long)]
    no_fog: bool,

    /// Step budget
    #[arg(long)]
    max_steps: Option<usize>,

    /// Print the agent's view after every step
    #[arg(long)]
    frames: bool,
}

#[derive(Args, Debug)]
struct BenchArgs {
    /// Smallest maze side
    #[arg(long, default_value_t = 11)]
    min: usize,

    /// Largest maze side
    #[arg(long, default_value_t = 31)]
    max: usize,

    /// Side increment
    #[arg(long, default_value_t = 10)]
    step: usize,

    /// Seeds per size
    #[arg(long, default_value_t = 3)]
    seeds: u64,

    /// Fraction of dead ends opened into loops
    #[arg(long, default_value_t = 0.1)]
    braid: f32,

    /// Algorithms to compare (default: all)
    #[arg(long, value_delimiter = ',', value_parser = clap::value_parser!(Algorithm))]
    algos: Vec<Algorithm>,

    /// Knowledge modes
    #[arg(long, value_enum, value_delimiter = ',', default_values_t = [Mode::Fog, Mode::NoFog])]
    modes: Vec<Mode>,

    /// Step budget per mission as a multiple of the map's cell count
    #[arg(long, default_value_t = 4.0)]
    max_steps_factor: f32,

    /// Benchmark every .csv map in this directory instead of generated mazes
    #[arg(long)]
    maps_dir: Option<PathBuf>,

    /// JSON results file (default from [output] results_path)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct GenArgs {
    #[arg(long)]
    width: Option<usize>,

    #[arg(long)]
    height: Option<usize>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    braid: Option<f32>,

    /// Output CSV (stdout if omitted)
    #[arg(short, long, conflicts_with = "out_dir")]
    out: Option<PathBuf>,

    /// Write a ladder of sizes into this directory instead of one maze
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// First side of the ladder
    #[arg(long, default_value_t = 5)]
    start: usize,

    /// Growth factor between ladder sizes
    #[arg(long, default_value_t = 2.0)]
    factor: f32,

    /// Largest side of the ladder
    #[arg(long, default_value_t = 320)]
    max_size: usize,

    /// Seeds `0..seeds` per ladder size
    #[arg(long, default_value_t = 5)]
    seeds: u64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = NavConfig::discover(cli.config.as_deref(), Path::new("."))?;

    match cli.command {
        Commands::Run(args) => mission_command(args, config),
        Commands::Bench(args) => bench_command(args, config),
        Commands::Gen(args) => gen_command(args, config),
    }
}

fn mission_command(args: RunArgs, config: NavConfig) -> Result<()> {
    let mut agent_config = config.agent;
    if let Some(algo) = args.algo {
        agent_config.algorithm = algo;
    }
    if args.no_fog {
        agent_config.fog = false;
    }
    if let Some(max_steps) = args.max_steps {
        agent_config.max_steps = max_steps;
    }
    let frames = args.frames || config.output.frames;

    let mut grid = load_map(&args.map)?;
    info!(
        "Loaded {} ({}x{}), algorithm={} fog={}",
        args.map.display(),
        grid.height(),
        grid.width(),
        agent_config.algorithm,
        agent_config.fog
    );

    let max_steps = agent_config.max_steps;
    let mut agent = OnlineAgent::new(&mut grid, agent_config);
    if frames {
        print_frame("step 0", &agent);
    }

    let metrics = agent.run_with(max_steps, |a| {
        if frames {
            print_frame(&format!("step {}", a.metrics().steps), a);
        }
    });

    print_frame("final", &agent);
    println!("{}", metrics);

    if metrics.reached_goal {
        info!("Goal reached in {} steps", metrics.steps);
    } else {
        warn!("Goal not reached ({})", agent.state());
    }
    Ok(())
}

fn print_frame(label: &str, agent: &OnlineAgent<'_>) {
    match agent.target() {
        Some(target) => println!("{} [{}] target {}", label, agent.state(), target.coord()),
        None => println!("{} [{}]", label, agent.state()),
    }
    println!("{}", render_masked(agent.grid(), Some(agent.current()), agent.plan()));
}

fn bench_command(args: BenchArgs, config: NavConfig) -> Result<()> {
    let algorithms = if args.algos.is_empty() {
        Algorithm::ALL.to_vec()
    } else {
        args.algos
    };

    let settings = BenchSettings {
        sizes: BenchSettings::size_range(args.min, args.max, args.step),
        seeds: args.seeds,
        braid: args.braid,
        algorithms,
        modes: args.modes,
        max_steps_factor: args.max_steps_factor,
    };

    let results = match &args.maps_dir {
        Some(dir) => {
            info!(
                "Benchmarking maps in {}, {} algorithms, modes {:?}",
                dir.display(),
                settings.algorithms.len(),
                settings.modes
            );
            run_map_benchmark(dir, &settings)?
        }
        None => {
            info!(
                "Benchmarking sizes {:?} x {} seeds, {} algorithms, modes {:?}",
                settings.sizes,
                settings.seeds,
                settings.algorithms.len(),
                settings.modes
            );
            run_benchmark(&settings)?
        }
    };
    println!("{}", markdown_table(&results));

    let output = args.output.unwrap_or(config.output.results_path);
    write_results(&output, &results)
}

fn gen_command(args: GenArgs, config: NavConfig) -> Result<()> {
    let mut maze = config.maze;
    if let Some(width) = args.width {
        maze.width = width;
    }
    if let Some(height) = args.height {
        maze.height = height;
    }
    if let Some(seed) = args.seed {
        maze.seed = seed;
    }
    if let Some(braid) = args.braid {
        maze.braid = braid;
    }

    if let Some(dir) = &args.out_dir {
        let sizes = size_ladder(args.start, args.factor, args.max_size);
        info!("Generating sizes {:?} x {} seeds into {}", sizes, args.seeds, dir.display());
        for path in write_maze_set(dir, &sizes, args.seeds, maze.braid)? {
            println!("Wrote {}", path.display());
        }
        return Ok(());
    }

    let grid = generate_maze(&maze)?;
    match args.out {
        Some(path) => {
            save_map(&grid, &path)?;
            info!(
                "Wrote {}x{} maze (seed {}) to {}",
                grid.height(),
                grid.width(),
                maze.seed,
                path.display()
            );
        }
        None => print!("{}", to_csv(&grid)),
    }
    Ok(())
}
