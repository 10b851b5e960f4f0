// src/main.rs

//! herald CLI
//!
//! Unattended poller announcing new board threads to a Discord webhook.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use herald::error::Result;
use herald::models::Config;
use herald::pipeline::{CycleOutcome, Poller};

/// herald - Fandom board → Discord announcer
#[derive(Parser, Debug)]
#[command(name = "herald", version, about = "Announces new board threads to Discord")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "herald.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Poll the board on a fixed interval until interrupted
    Run,

    /// Execute a single poll cycle and exit
    Once,

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load_or_default(&cli.config);
    config.validate()?;

    match cli.command {
        Command::Validate => {
            log::info!("configuration OK ({})", cli.config.display());
        }
        Command::Once => {
            let poller = Poller::new(config)?;
            match poller.run_cycle().await? {
                CycleOutcome::Announced(id) => log::info!("announced thread {id}"),
                CycleOutcome::UpToDate => log::info!("no new threads"),
            }
        }
        Command::Run => {
            let poller = Poller::new(config)?;
            poller.run().await;
        }
    }

    Ok(())
}
