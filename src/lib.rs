// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! War: a two-player territory conquest game.
//!
//! Players take turns attacking neighbouring colors with a single pair of
//! dice. Each player holds a secret mission; the first completed mission
//! wins the game.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Console session / CLI             │
//! ├─────────────────────────────────────┤
//! │   Turn coordinator (GameState)      │
//! ├──────────────────┬──────────────────┤
//! │  Combat + Dice   │  Missions        │
//! ├──────────────────┴──────────────────┤
//! │   Territory store                   │
//! └─────────────────────────────────────┘
//! ```

pub mod console;
pub mod error;
pub mod game;
pub mod render;
pub mod setup;

pub use error::{GameError, GameResult, ValidationError};

// Re-export key game types at crate root for convenience
pub use game::{
    BattleOutcome, BattleResult, Dice, GameRng, GameState, Mission, MissionCatalog,
    MissionParams, Player, ScriptedDice, Territory, TerritoryStore, TurnAction, TurnPhase,
    TurnReport,
};
