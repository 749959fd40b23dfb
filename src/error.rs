//! Error types for the game core.

use thiserror::Error;

/// Reasons an attack is rejected before any dice are rolled.
///
/// Every variant is retryable: the game state is untouched and the same
/// player is asked again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A territory id outside `[1, max]`.
    #[error("territory {id} does not exist (choose 1-{max})")]
    OutOfRange {
        /// The offending 1-based id.
        id: usize,
        /// Number of territories on the map.
        max: usize,
    },
    /// Attacker and defender are the same territory.
    #[error("a territory cannot attack itself")]
    SelfAttack,
    /// The attacking territory belongs to someone else.
    #[error("territory {id} is not yours")]
    NotOwner {
        /// The attacking territory's 1-based id.
        id: usize,
    },
    /// The target already carries the attacker's color.
    #[error("territory {id} is already under your color")]
    FriendlyTarget {
        /// The defending territory's 1-based id.
        id: usize,
    },
    /// The attacker needs more than one troop to attack.
    #[error("territory {id} needs more than 1 troop to attack (has {troops})")]
    InsufficientTroops {
        /// The attacking territory's 1-based id.
        id: usize,
        /// Troops currently stationed there.
        troops: u32,
    },
}

/// Errors raised by the game core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// The territory store could not be created.
    ///
    /// Fatal: the caller reports it and terminates.
    #[error("cannot allocate a map of {count} territories")]
    Allocation {
        /// Requested number of territories.
        count: usize,
    },
    /// A 0-based store index past the end of the map.
    #[error("territory index {index} out of range (map has {len})")]
    Index {
        /// The offending index.
        index: usize,
        /// Number of territories on the map.
        len: usize,
    },
    /// A proposed attack broke a game rule.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The game already has a winner.
    #[error("the game is already over")]
    GameOver,
}

impl GameError {
    /// Whether the caller should re-prompt instead of aborting.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Result alias for game operations.
pub type GameResult<T> = Result<T, GameError>;
