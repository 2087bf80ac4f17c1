//! Command-line driver for the Game of Life engine.
//!
//! Streams each generation as a gnuplot frame; view the simulation with
//! `cgol | gnuplot --persist`.

mod pattern;
mod plot;
mod telemetry;

use anyhow::{Context, Result};
use cgol_core::{EngineConfig, RunConfig, WorldConfig};
use cgol_engine::{Engine, World};
use clap::Parser;
use plot::PlotWriter;
use std::io::{self, BufWriter};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "cgol")]
#[command(about = "Conway's Game of Life on an unbounded grid, streamed as gnuplot frames")]
struct Cli {
    /// Number of generations to simulate
    #[arg(long, default_value_t = 10)]
    ticks: u64,

    /// Extent of the visible world in the x and y directions
    #[arg(long, default_value_t = 50)]
    size: i64,

    /// Semicolon-separated list of live-cell coordinates, e.g. "0,0;1,0;2,0"
    #[arg(long, default_value = pattern::DEFAULT_PATTERN)]
    coordinates: String,

    /// Start from a random pattern instead of --coordinates
    #[arg(long)]
    random: bool,

    /// Live-cell density of the random pattern (0.0 to 1.0)
    #[arg(long, default_value_t = 0.2)]
    density: f32,

    /// Seed for the random pattern generator
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Worker threads used to evaluate each generation
    #[arg(long, default_value_t = 1)]
    workers: usize,
}

impl Cli {
    fn run_config(&self) -> RunConfig {
        RunConfig {
            ticks: self.ticks,
            seed: self.seed,
            world: WorldConfig {
                size: self.size,
                density: self.density,
            },
            engine: EngineConfig {
                workers: self.workers,
            },
        }
    }
}

fn main() -> Result<()> {
    telemetry::init_telemetry();

    let cli = Cli::parse();
    let config = cli.run_config();

    let cells = if cli.random {
        pattern::random_pattern(&config.world, config.seed)
    } else {
        pattern::parse_coordinates(&cli.coordinates)
            .with_context(|| format!("invalid --coordinates {:?}", cli.coordinates))?
    };

    let mut world: World = cells.into_iter().collect();
    let engine = Engine::new(config.engine.clone());
    info!(
        "Starting simulation: {} live cells, {} ticks",
        world.len(),
        config.ticks
    );

    let stdout = io::stdout().lock();
    let mut plot = PlotWriter::new(BufWriter::new(stdout));
    plot.header(config.world.size)?;
    plot.frame(&world)?;

    for generation in 1..=config.ticks {
        world = engine.tick(&world);
        plot.frame(&world)?;
        debug!("Generation {}: {} live cells", generation, world.len());
    }
    plot.flush()?;

    info!("Simulation complete: {} live cells", world.len());
    Ok(())
}
