use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

use maze_chase::app::App;
use maze_chase::clock::SystemClock;
use maze_chase::config::{Config, DEFAULT_DIFFICULTY};
use maze_chase::constants::RAW_BOARD;
use maze_chase::formatter::TickFormatter;
use maze_chase::game::Session;
use maze_chase::input::Autopilot;
use maze_chase::record::TracingScoreSink;

/// Motion ticks between two autopilot presses.
const AUTOPILOT_INTERVAL: u32 = 45;

/// Runs a headless maze-chase session driven by a random autopilot.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Difficulty; higher values raise the frame-rate ceiling.
    #[arg(long, env = "MAZE_DIFFICULTY", default_value_t = DEFAULT_DIFFICULTY)]
    difficulty: u32,
    /// Seed for the pursuer and autopilot randomness.
    #[arg(long)]
    seed: Option<u64>,
    /// Stop after this many seconds even if the session is still running.
    #[arg(long)]
    max_seconds: Option<f64>,
}

fn init_tracing() -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .event_format(TickFormatter)
        .finish()
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(subscriber).context("Could not set global default subscriber")
}

fn rng_from(seed: Option<u64>, stream: u64) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(stream)),
        None => SmallRng::from_os_rng(),
    }
}

pub fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing()?;

    let config = Config::new(cli.difficulty);
    let session = Session::new(&RAW_BOARD, SystemClock::new(), rng_from(cli.seed, 0)).context("Invalid board layout")?;
    let autopilot = Autopilot::new(rng_from(cli.seed, 1), AUTOPILOT_INTERVAL);

    let mut app = App::new(session, config, autopilot, TracingScoreSink);
    if let Some(seconds) = cli.max_seconds {
        let limit = Duration::try_from_secs_f64(seconds).context("Invalid --max-seconds")?;
        app = app.with_time_limit(limit);
    }

    match app.run() {
        Some(record) => info!(score = record.score, outcome = record.outcome.as_ref(), "Finished"),
        None => info!(score = app.session.score(), lives = app.session.lives(), "Stopped before the end"),
    }
    Ok(())
}
