use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;

use train_yard::session::Session;
use train_yard::simulation::{TripSimulator, COUPLING_SEPARATION_HOURS};

#[derive(Parser)]
#[command(name = "train_yard")]
#[command(about = "Simulates a train unloading cars along a route of stations")]
struct Cli {
    /// Read commands from this file instead of standard input
    #[arg(long)]
    script: Option<PathBuf>,

    /// Initial train speed
    #[arg(long)]
    speed: Option<f64>,

    /// Hours spent separating cars at each station
    #[arg(long, default_value_t = COUPLING_SEPARATION_HOURS)]
    separation_hours: f64,

    /// Never print the input prompt
    #[arg(long)]
    no_prompt: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if !cli.separation_hours.is_finite() || cli.separation_hours < 0.0 {
        anyhow::bail!("--separation-hours must be a non-negative number");
    }

    let mut session = Session::new(TripSimulator::new(cli.separation_hours));
    if let Some(speed) = cli.speed {
        session
            .train_mut()
            .set_speed(speed)
            .context("Invalid --speed")?;
    }

    let stdout = io::stdout();
    match cli.script {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            session.run(BufReader::new(file), stdout.lock())
        }
        None => {
            let stdin = io::stdin();
            let interactive = !cli.no_prompt && stdin.is_terminal();
            session
                .with_prompt(interactive)
                .run(stdin.lock(), stdout.lock())
        }
    }
}
