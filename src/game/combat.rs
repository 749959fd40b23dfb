//! Combat resolution.
//!
//! One attack is one pair of dice: the attacker rolls, the defender rolls,
//! and the higher roll wins. Ties go to the defender.

use serde::Serialize;

use crate::game::{Dice, Territory};

/// Which side won a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BattleResult {
    /// The attacker rolled higher and took the territory.
    AttackerWon,
    /// The defender rolled higher or tied.
    AttackerLost,
}

/// Everything needed to narrate a resolved battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BattleOutcome {
    /// The attacker's die.
    pub attack_roll: u8,
    /// The defender's die.
    pub defense_roll: u8,
    /// Who won.
    pub result: BattleResult,
    /// Troops that moved into the defender's territory (0 on a loss).
    pub moved: u32,
    /// Attacker troops after the battle.
    pub attacker_troops: u32,
    /// Defender troops after the battle.
    pub defender_troops: u32,
    /// Defender color after the battle.
    pub defender_color: String,
}

impl BattleOutcome {
    /// Check if the attacker captured the territory.
    #[must_use]
    pub const fn attacker_won(&self) -> bool {
        matches!(self.result, BattleResult::AttackerWon)
    }
}

/// Roll the dice and resolve one battle.
///
/// The attack roll is drawn first, then the defense roll.
pub fn resolve<D: Dice + ?Sized>(
    attacker: &mut Territory,
    defender: &mut Territory,
    dice: &mut D,
) -> BattleOutcome {
    let attack_roll = dice.roll();
    let defense_roll = dice.roll();
    resolve_rolls(attacker, defender, attack_roll, defense_roll)
}

/// Resolve one battle with known rolls.
///
/// Callers guarantee the attacker has more than one troop, the two
/// territories are distinct and their colors differ.
///
/// On a win, half the attacker's troops (at least one) move in and the
/// defender takes the attacker's color. On a loss the attacker gives up one
/// troop but never drops below one.
pub fn resolve_rolls(
    attacker: &mut Territory,
    defender: &mut Territory,
    attack_roll: u8,
    defense_roll: u8,
) -> BattleOutcome {
    let (result, moved) = if attack_roll > defense_roll {
        let moved = (attacker.troops / 2).max(1);
        defender.troops = moved;
        defender.color.clone_from(&attacker.color);
        defender.captured = true;
        attacker.troops = attacker.troops.saturating_sub(moved);
        log::info!(
            "{} ({}) captured {} with {moved} troops ({attack_roll} vs {defense_roll})",
            attacker.name,
            attacker.color,
            defender.name
        );
        (BattleResult::AttackerWon, moved)
    } else {
        if attacker.troops > 1 {
            attacker.troops -= 1;
        }
        log::debug!(
            "{} held against {} ({attack_roll} vs {defense_roll})",
            defender.name,
            attacker.name
        );
        (BattleResult::AttackerLost, 0)
    };

    BattleOutcome {
        attack_roll,
        defense_roll,
        result,
        moved,
        attacker_troops: attacker.troops,
        defender_troops: defender.troops,
        defender_color: defender.color.clone(),
    }
}
