//! Plain-text rendering of the map, battles and results.

use crate::game::{BattleOutcome, GameState, Player, TerritoryStore, COLOR_MAX_LEN, NAME_MAX_LEN};

/// Horizontal rule used around section titles.
const RULE: &str = "======================================";

/// Render the territory listing with 1-based ids.
#[must_use]
pub fn format_map(store: &TerritoryStore) -> String {
    let mut output = String::new();

    output.push_str(&format!("{RULE}\n        MAP OF THE WORLD\n{RULE}\n"));
    for (index, territory) in store.iter() {
        output.push_str(&format!(
            "{:>3}. {:<name_w$} | {:<color_w$} | {:>4} troops\n",
            index + 1,
            territory.name,
            territory.color,
            territory.troops,
            name_w = NAME_MAX_LEN,
            color_w = COLOR_MAX_LEN,
        ));
    }
    output.push_str(RULE);
    output.push('\n');

    output
}

/// Render the narration of one battle.
///
/// `attacker_name` and `defender_name` are the territories' names as they
/// were before the battle.
#[must_use]
pub fn format_battle(attacker_name: &str, defender_name: &str, outcome: &BattleOutcome) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "\n--- BATTLE: {attacker_name} attacks {defender_name} ---\n"
    ));
    output.push_str(&format!(
        "Attack roll: {} | Defense roll: {}\n",
        outcome.attack_roll, outcome.defense_roll
    ));
    if outcome.attacker_won() {
        output.push_str(&format!(
            "Victory! {defender_name} now belongs to {} ({} troops moved in).\n",
            outcome.defender_color, outcome.moved
        ));
    } else if outcome.attack_roll == outcome.defense_roll {
        output.push_str("Tie: the defender holds.\n");
    } else {
        output.push_str("Defeat: the defender holds.\n");
    }
    output.push_str(&format!(
        "{attacker_name}: {} troops | {defender_name}: {} troops\n",
        outcome.attacker_troops, outcome.defender_troops
    ));

    output
}

/// Render a player's secret mission.
#[must_use]
pub fn format_mission(player: &Player) -> String {
    format!("Mission for {}: {}\n", player.color, player.mission)
}

/// Render the end-of-game banner, or an empty string while the game runs.
#[must_use]
pub fn format_banner(state: &GameState) -> String {
    let Some(winner) = state.winner_player() else {
        return String::new();
    };

    let mut output = String::new();
    output.push_str(&format!("\n{RULE}\n"));
    output.push_str(&format!("   {} WINS on turn {}!\n", winner.color, state.turn() + 1));
    output.push_str(&format!("   Mission: {}\n", winner.mission));
    output.push_str(RULE);
    output.push('\n');
    output
}
