//! Output formatting utilities for CLI.

use serde::Serialize;
use war::{GameState, MissionCatalog, Territory};

/// JSON-serializable game summary.
#[derive(Debug, Serialize)]
pub(super) struct JsonGameSummary {
    /// Random seed used.
    pub(super) seed: u64,
    /// Winning color (null if the game did not finish).
    pub(super) winner: Option<String>,
    /// The winner's mission text.
    pub(super) mission: Option<String>,
    /// Turns played, including the winning one.
    pub(super) turns: u32,
    /// Final map in id order.
    pub(super) territories: Vec<Territory>,
}

impl JsonGameSummary {
    /// Create from a finished game.
    pub(super) fn from_state(seed: u64, state: &GameState) -> Self {
        let winner = state.winner_player();
        Self {
            seed,
            winner: winner.map(|p| p.color.clone()),
            mission: winner.map(|p| p.mission_text()),
            turns: state.turn() + u32::from(state.is_game_over()),
            territories: state.store().territories().to_vec(),
        }
    }
}

/// Format the mission catalog as a numbered list.
pub(super) fn format_catalog(catalog: &MissionCatalog) -> String {
    let mut output = String::new();

    output.push_str("Mission catalog:\n");
    for (i, mission) in catalog.entries().iter().enumerate() {
        output.push_str(&format!("  {}. {mission}\n", i + 1));
    }

    output
}
