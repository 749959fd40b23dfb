#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use war::game::{resolve_rolls, BattleResult, Territory, AZUL, VERMELHO};

/// Structured input for combat fuzzing.
#[derive(Arbitrary, Debug)]
struct CombatInput {
    /// Attacker troops.
    attacker_troops: u32,
    /// Defender troops.
    defender_troops: u32,
    /// Raw attack die (folded into 1-6).
    attack_roll: u8,
    /// Raw defense die (folded into 1-6).
    defense_roll: u8,
}

fuzz_target!(|input: CombatInput| {
    // Callers only ever attack with more than one troop
    if input.attacker_troops < 2 {
        return;
    }

    let attack_roll = input.attack_roll % 6 + 1;
    let defense_roll = input.defense_roll % 6 + 1;

    let mut attacker = Territory::new("Attacker", AZUL, input.attacker_troops);
    let mut defender = Territory::new("Defender", VERMELHO, input.defender_troops);

    // Must not panic
    let outcome = resolve_rolls(&mut attacker, &mut defender, attack_roll, defense_roll);

    assert!(attacker.troops >= 1, "Attacker emptied: {outcome:?}");

    match outcome.result {
        BattleResult::AttackerWon => {
            assert!(attack_roll > defense_roll);
            assert!(outcome.moved >= 1);
            assert_eq!(
                attacker.troops + defender.troops,
                input.attacker_troops,
                "Troops not conserved"
            );
            assert_eq!(defender.color, AZUL);
            assert!(defender.captured);
        }
        BattleResult::AttackerLost => {
            assert!(attack_roll <= defense_roll);
            assert_eq!(attacker.troops, input.attacker_troops - 1);
            assert_eq!(defender.troops, input.defender_troops);
            assert_eq!(defender.color, VERMELHO);
        }
    }
});
