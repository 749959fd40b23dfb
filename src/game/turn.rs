//! Turn phases and player actions.

/// What a player chose to do with their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnAction {
    /// Attack-id 0: no attack, go straight to mission checks.
    Skip,
    /// Attack `defender` from `attacker` (1-based ids).
    Attack {
        /// Attacking territory id.
        attacker: usize,
        /// Defending territory id.
        defender: usize,
    },
}

impl TurnAction {
    /// Id typed by a player to skip the attack.
    pub const SKIP_ID: usize = 0;

    /// Build an action from the raw ids typed by a player.
    #[must_use]
    pub const fn from_ids(attacker: usize, defender: usize) -> Self {
        if attacker == Self::SKIP_ID {
            Self::Skip
        } else {
            Self::Attack { attacker, defender }
        }
    }
}

/// Where a turn currently stands.
///
/// Phases cycle from `AwaitingAttackerSelection` to `EvaluatingMissions` and
/// then either start the next turn or end the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    /// Waiting for an attacker id (0 skips).
    AwaitingAttackerSelection,
    /// Waiting for the defender id.
    AwaitingDefenderSelection {
        /// Attacker id already chosen.
        attacker: usize,
    },
    /// Checking the attack against the rules.
    Validating {
        /// Attacker id.
        attacker: usize,
        /// Defender id.
        defender: usize,
    },
    /// Rolling dice for a validated attack.
    Resolving {
        /// Attacker id.
        attacker: usize,
        /// Defender id.
        defender: usize,
    },
    /// Checking both missions, current player first.
    EvaluatingMissions,
    /// No winner: hand the turn over.
    NextTurn,
    /// A mission was completed.
    GameOver {
        /// Index of the winning player.
        winner: usize,
    },
}

impl TurnPhase {
    /// Check if the game has ended.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::GameOver { .. })
    }
}
