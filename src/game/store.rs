//! Territory store: the fixed-size, ordered map.

use crate::error::{GameError, GameResult};
use crate::game::Territory;

/// The ordered collection of territories.
///
/// Indices are 0-based and stable for the whole game. The store never grows
/// or shrinks after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerritoryStore {
    /// Territories in registration order.
    territories: Vec<Territory>,
}

impl TerritoryStore {
    /// Allocate `count` blank territory slots.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Allocation`] if `count` is zero or the memory
    /// cannot be reserved.
    pub fn create(count: usize) -> GameResult<Self> {
        if count == 0 {
            return Err(GameError::Allocation { count });
        }

        let mut territories = Vec::new();
        territories
            .try_reserve_exact(count)
            .map_err(|_| GameError::Allocation { count })?;
        territories.resize_with(count, Territory::default);

        Ok(Self { territories })
    }

    /// Build a store from already registered territories.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Allocation`] if `territories` is empty.
    pub fn from_territories(territories: Vec<Territory>) -> GameResult<Self> {
        if territories.is_empty() {
            return Err(GameError::Allocation { count: 0 });
        }
        Ok(Self { territories })
    }

    /// Number of territories on the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.territories.len()
    }

    /// Always `false` for a store built through [`create`](Self::create).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.territories.is_empty()
    }

    /// Get a reference to the raw territory slice.
    #[must_use]
    pub fn territories(&self) -> &[Territory] {
        &self.territories
    }

    /// Get the territory at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Index`] if `index` is past the end.
    pub fn get(&self, index: usize) -> GameResult<&Territory> {
        let len = self.territories.len();
        self.territories
            .get(index)
            .ok_or(GameError::Index { index, len })
    }

    /// Get a mutable reference to the territory at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Index`] if `index` is past the end.
    pub fn get_mut(&mut self, index: usize) -> GameResult<&mut Territory> {
        let len = self.territories.len();
        self.territories
            .get_mut(index)
            .ok_or(GameError::Index { index, len })
    }

    /// Replace the territory at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Index`] if `index` is past the end.
    pub fn set(&mut self, index: usize, territory: Territory) -> GameResult<()> {
        *self.get_mut(index)? = territory;
        Ok(())
    }

    /// Borrow two distinct territories mutably, attacker first.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Index`] if either index is past the end or both
    /// indices are equal.
    pub fn pair_mut(&mut self, a: usize, b: usize) -> GameResult<(&mut Territory, &mut Territory)> {
        let len = self.territories.len();
        if a >= len || a == b {
            return Err(GameError::Index { index: a, len });
        }
        if b >= len {
            return Err(GameError::Index { index: b, len });
        }

        if a < b {
            let (left, right) = self.territories.split_at_mut(b);
            Ok((&mut left[a], &mut right[0]))
        } else {
            let (left, right) = self.territories.split_at_mut(a);
            Ok((&mut right[0], &mut left[b]))
        }
    }

    /// Iterate over `(index, territory)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Territory)> {
        self.territories.iter().enumerate()
    }

    /// Iterate over the territories owned by `color`.
    pub fn owned_by<'a>(&'a self, color: &'a str) -> impl Iterator<Item = &'a Territory> {
        self.territories.iter().filter(move |t| t.is_owned_by(color))
    }

    /// Count territories owned by `color`.
    #[must_use]
    pub fn count_by_color(&self, color: &str) -> usize {
        self.owned_by(color).count()
    }

    /// Sum troops across all territories owned by `color`.
    #[must_use]
    pub fn troop_sum_by_color(&self, color: &str) -> u64 {
        self.owned_by(color).map(|t| u64::from(t.troops)).sum()
    }

    /// Find a territory by exact name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Territory> {
        self.territories.iter().find(|t| t.name == name)
    }
}
