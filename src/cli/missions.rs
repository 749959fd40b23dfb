//! Missions command implementation.

use super::output::format_catalog;
use super::CliError;
use war::{MissionCatalog, MissionParams};

/// Execute the missions command.
///
/// # Errors
///
/// Never fails; returns `Result` to match the other commands.
#[allow(clippy::unnecessary_wraps)]
pub(crate) fn execute(params: &MissionParams) -> Result<(), CliError> {
    print!("{}", format_catalog(&MissionCatalog::new(params)));
    Ok(())
}
