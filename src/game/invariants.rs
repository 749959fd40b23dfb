//! Game invariants - sanity checks that detect bugs.
//!
//! The rules never produce these states on their own. A violation means a
//! rule was implemented wrong or the state was edited behind the rules'
//! back.

use crate::game::GameState;

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all game invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(state: &GameState) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    // Captured territories always keep a garrison
    for (index, territory) in state.store().iter() {
        if territory.captured && territory.troops == 0 {
            violations.push(InvariantViolation {
                message: format!(
                    "Captured territory {} ({}) has no troops",
                    index + 1,
                    territory.name
                ),
            });
        }
    }

    // Players are told apart by color
    let [first, second] = state.players();
    if first.color == second.color {
        violations.push(InvariantViolation {
            message: format!("Both players share the color {}", first.color),
        });
    }

    // The map cannot lose a winning mission after the game ends
    if let Some(winner) = state
        .winner_player()
        .filter(|w| !w.mission.is_completed(state.store(), &w.color))
    {
        violations.push(InvariantViolation {
            message: format!(
                "Winner {} has an incomplete mission: {}",
                winner.color, winner.mission
            ),
        });
    }

    violations
}

/// Assert all game invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants(state: &GameState) {
    let violations = check_invariants(state);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Game invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants(_state: &GameState) {}
