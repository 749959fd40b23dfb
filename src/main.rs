//! War CLI - play a two-player conquest game in the terminal.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;

use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::process::ExitCode;

/// War - a two-player territory conquest game
#[derive(Parser, Debug)]
#[command(name = "war")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play a game on this terminal
    Play {
        /// Random seed (default: from the system clock)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Load territories from a JSON map file instead of asking for them
        #[arg(short, long)]
        map: Option<std::path::PathBuf>,

        /// Final summary format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        #[command(flatten)]
        missions: cli::MissionArgs,
    },

    /// List the mission catalog
    Missions {
        #[command(flatten)]
        missions: cli::MissionArgs,
    },
}

/// Route `log` output to stderr at the level picked by `-v`.
///
/// `RUST_LOG` overrides the flag.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let result = match args.command {
        Commands::Play {
            seed,
            map,
            format,
            missions,
        } => cli::play::execute(&cli::GameConfig {
            seed,
            map,
            format,
            missions: missions.into(),
        }),

        Commands::Missions { missions } => cli::missions::execute(&missions.into()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
