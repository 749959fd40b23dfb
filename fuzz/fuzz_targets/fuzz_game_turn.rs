#![no_main]

//! Full game turn fuzzer.
//!
//! Plays arbitrary sequences of attacks and skips against an arbitrary map
//! with forced dice, checking the game invariants after every turn.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use war::game::{check_invariants, AZUL, VERMELHO};
use war::{
    GameError, GameState, Mission, Player, ScriptedDice, Territory, TerritoryStore, TurnAction,
};

/// A fuzzer-generated territory.
#[derive(Arbitrary, Debug)]
struct FuzzTerritory {
    /// Owned by Azul when true.
    azul: bool,
    /// Starting troops.
    troops: u16,
}

/// Structured input for full game turn fuzzing.
#[derive(Arbitrary, Debug)]
struct GameTurnInput {
    /// Starting map.
    territories: Vec<FuzzTerritory>,
    /// Raw (attacker, defender) ids, 0 meaning skip.
    actions: Vec<(u8, u8)>,
    /// Dice script.
    rolls: Vec<u8>,
    /// Mission picks for both players.
    missions: [u8; 2],
}

fn mission(pick: u8, other: &str) -> Mission {
    match pick % 5 {
        0 => Mission::ConquerTerritories(4),
        1 => Mission::EliminateColor(other.to_string()),
        2 => Mission::TroopThreshold(15),
        3 => Mission::ConquerNamed("T0".to_string()),
        _ => Mission::EliminateColor(AZUL.to_string()),
    }
}

fuzz_target!(|input: GameTurnInput| {
    // Cap sizes to avoid excessive runtime
    let territories: Vec<Territory> = input
        .territories
        .iter()
        .take(32)
        .enumerate()
        .map(|(i, t)| {
            let color = if t.azul { AZUL } else { VERMELHO };
            Territory::new(&format!("T{i}"), color, u32::from(t.troops))
        })
        .collect();
    let Ok(store) = TerritoryStore::from_territories(territories) else {
        return;
    };
    let len = store.len();

    let players = [
        Player::new(AZUL, mission(input.missions[0], VERMELHO)),
        Player::new(VERMELHO, mission(input.missions[1], AZUL)),
    ];
    let mut game = GameState::new(store, players);
    let mut dice = ScriptedDice::new(input.rolls);
    let before: u64 = game.store().territories().iter().map(|t| u64::from(t.troops)).sum();

    for (attacker, defender) in input.actions.into_iter().take(64) {
        let action = TurnAction::from_ids(
            usize::from(attacker) % (len + 2),
            usize::from(defender) % (len + 2),
        );
        let turn = game.turn();

        match game.play_turn(action, &mut dice) {
            Ok(report) => {
                assert_eq!(report.winner, game.winner());
                assert!(game.is_game_over() || game.turn() == turn + 1);
            }
            Err(GameError::GameOver) => assert!(game.is_game_over()),
            Err(err) => {
                // Rejected attacks leave the turn with the same player
                assert!(err.is_retryable(), "unexpected error: {err}");
                assert_eq!(game.turn(), turn);
            }
        }

        let violations = check_invariants(&game);
        assert!(violations.is_empty(), "Invariant violations: {violations:?}");
    }

    // Battles only ever cost troops, never create them
    let after: u64 = game.store().territories().iter().map(|t| u64::from(t.troops)).sum();
    assert!(after <= before);
});
