//! Play one round of stone-paper-scissor from the terminal.

use std::io;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use roshambo::core::source::RandomMoves;
use roshambo::exit_codes;
use roshambo::io::config::{Settings, load_settings};
use roshambo::logging;
use roshambo::round::play_round;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "roshambo",
    version,
    about = "Play one round of stone-paper-scissor against the computer"
)]
struct Cli {
    /// Seed for the computer's move (defaults to the current time).
    #[arg(long)]
    seed: Option<u64>,

    /// TOML settings file (`seed`, `log_level`).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::for_error(&err));
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let settings = match &cli.config {
        Some(path) => {
            load_settings(path).with_context(|| format!("load settings {}", path.display()))?
        }
        None => Settings::default(),
    };
    logging::init(&settings.log_level);

    let seed = resolve_seed(cli.seed, settings.seed, clock_seed);
    debug!(seed, "seeded computer move");
    let mut source = RandomMoves::seeded(seed);

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    play_round(&mut input, &mut output, &mut source)?;
    Ok(())
}

/// Flag, then settings file, then the clock.
fn resolve_seed(flag: Option<u64>, configured: Option<u64>, clock: impl FnOnce() -> u64) -> u64 {
    flag.or(configured).unwrap_or_else(clock)
}

fn clock_seed() -> u64 {
    // Clock before the epoch seeds with zero.
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos())
        .unwrap_or_default();
    (nanos as u64) ^ ((nanos >> 64) as u64)
}
