//! Game layer.
//!
//! Implements the rules of a two-player conquest game:
//! - Territory store (the map)
//! - Dice and combat resolution
//! - Secret missions
//! - Turn coordination and winner detection

mod combat;
mod dice;
mod invariants;
mod mission;
mod player;
mod state;
mod store;
mod territory;
mod turn;

pub use combat::{resolve, resolve_rolls, BattleOutcome, BattleResult};
pub use dice::{seed_from_clock, Dice, GameRng, ScriptedDice, DIE_FACES};
pub use invariants::{assert_invariants, check_invariants, InvariantViolation};
pub use mission::{Mission, MissionCatalog, MissionParams, CATALOG_SIZE};
pub use player::{Player, AZUL, PLAYER_COLORS, VERMELHO};
pub use state::{GameState, TurnReport, PLAYER_COUNT};
pub use store::TerritoryStore;
pub use territory::{Territory, COLOR_MAX_LEN, NAME_MAX_LEN};
pub use turn::{TurnAction, TurnPhase};
