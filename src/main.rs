use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use rust_rounds::core::{ConsoleReporter, LogReporter, Reporter, TournamentConfig};
use rust_rounds::tournament::run_configured;

/// Run a multi-stage elimination tournament.
#[derive(Parser, Debug)]
#[command(name = "rounds", version, about)]
struct Cli {
    /// Number of entrants (overrides the config file)
    #[arg(short, long)]
    entrants: Option<u32>,

    /// RNG seed (overrides the config file)
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the final report as JSON instead of the summary table
    #[arg(long)]
    json: bool,

    /// Send narration to the log instead of stdout
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => TournamentConfig::from_json_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => TournamentConfig::default(),
    };
    if let Some(entrants) = cli.entrants {
        config.entrants = entrants;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }

    let mut reporter: Box<dyn Reporter> = if cli.quiet || cli.json {
        Box::new(LogReporter)
    } else {
        Box::new(ConsoleReporter)
    };

    let report = run_configured(&config, reporter.as_mut())?;
    log::info!("seed {:?}", report.seed);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
