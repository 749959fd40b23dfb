//! CLI command implementations for War.

pub(crate) mod missions;
pub(crate) mod play;

mod output;

use clap::ValueEnum;
use std::error::Error;
use std::fmt;
use std::path::PathBuf;
use war::MissionParams;

/// Output format for the final summary of `play`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Banner only.
    Text,
    /// Banner followed by a machine-readable JSON summary.
    Json,
}

/// Mission tuning flags shared by every command.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct MissionArgs {
    /// Territories needed for the conquest mission
    #[arg(long, default_value_t = 4)]
    conquest_target: usize,

    /// Total troops needed for the troop mission
    #[arg(long, default_value_t = 15)]
    troop_threshold: u64,

    /// Territory to hold for the named-territory mission
    #[arg(long, default_value = "Brasil")]
    target_territory: String,
}

impl From<MissionArgs> for MissionParams {
    fn from(args: MissionArgs) -> Self {
        Self {
            conquest_target: args.conquest_target,
            troop_threshold: args.troop_threshold,
            target_territory: args.target_territory,
        }
    }
}

/// Everything `play` needs, resolved from flags.
#[derive(Debug, Clone)]
pub(crate) struct GameConfig {
    /// Fixed seed, or `None` to seed from the clock.
    pub(crate) seed: Option<u64>,
    /// Map file, or `None` to register territories interactively.
    pub(crate) map: Option<PathBuf>,
    /// Final summary format.
    pub(crate) format: OutputFormat,
    /// Mission catalog parameters.
    pub(crate) missions: MissionParams,
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<war::setup::SetupError> for CliError {
    fn from(e: war::setup::SetupError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<war::console::ConsoleError> for CliError {
    fn from(e: war::console::ConsoleError) -> Self {
        Self::new(e.to_string())
    }
}
