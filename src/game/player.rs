//! Player state.

use serde::Serialize;

use crate::game::Mission;

/// Color of player 1.
pub const AZUL: &str = "Azul";

/// Color of player 2.
pub const VERMELHO: &str = "Vermelho";

/// Player colors in turn order.
pub const PLAYER_COLORS: [&str; 2] = [AZUL, VERMELHO];

/// A player: a color and a secret mission.
///
/// Territory ownership is not stored here; a territory belongs to the player
/// whose color it carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    /// Ownership tag and player identity.
    pub color: String,
    /// Objective drawn at setup.
    pub mission: Mission,
}

impl Player {
    /// Create a player with the given color and mission.
    #[must_use]
    pub fn new(color: &str, mission: Mission) -> Self {
        Self {
            color: color.to_string(),
            mission,
        }
    }

    /// The mission as shown to the player.
    #[must_use]
    pub fn mission_text(&self) -> String {
        self.mission.to_string()
    }
}
