//! Territory type.

use serde::{Deserialize, Serialize};

/// Longest territory name kept at registration, in characters.
pub const NAME_MAX_LEN: usize = 29;

/// Longest color kept at registration, in characters.
pub const COLOR_MAX_LEN: usize = 9;

/// A named map unit owned by one color and garrisoned with troops.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Territory {
    /// Display name, unique by convention but not enforced.
    pub name: String,
    /// Owning color. Doubles as player identity.
    pub color: String,
    /// Troops stationed here.
    pub troops: u32,
    /// Set once the territory changed hands through an attack.
    #[serde(default)]
    pub captured: bool,
}

impl Territory {
    /// Create a territory, truncating `name` and `color` to their bounds.
    #[must_use]
    pub fn new(name: &str, color: &str, troops: u32) -> Self {
        Self {
            name: bounded(name, NAME_MAX_LEN),
            color: bounded(color, COLOR_MAX_LEN),
            troops,
            captured: false,
        }
    }

    /// Check if this territory belongs to `color`.
    #[must_use]
    pub fn is_owned_by(&self, color: &str) -> bool {
        self.color == color
    }

    /// Re-apply the length bounds, e.g. after deserializing.
    pub(crate) fn clamp_fields(&mut self) {
        if self.name.chars().count() > NAME_MAX_LEN {
            self.name = bounded(&self.name, NAME_MAX_LEN);
        }
        if self.color.chars().count() > COLOR_MAX_LEN {
            self.color = bounded(&self.color, COLOR_MAX_LEN);
        }
    }
}

/// Trim line endings and keep at most `max` characters.
fn bounded(value: &str, max: usize) -> String {
    value
        .trim_end_matches(['\r', '\n'])
        .chars()
        .take(max)
        .collect()
}
