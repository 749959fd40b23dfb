//! Dice: the only source of randomness in a game.
//!
//! Live games use [`GameRng`], seeded once per process. Tests and replays
//! inject [`ScriptedDice`] to force specific rolls.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Number of faces on a die.
pub const DIE_FACES: u8 = 6;

/// A source of six-sided die rolls.
pub trait Dice {
    /// Roll one die, returning a value in `[1, 6]`.
    fn roll(&mut self) -> u8;
}

/// Seeded random source for dice and mission draws.
#[derive(Debug, Clone)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a generator from a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this generator started from.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in `0..len`.
    ///
    /// Returns 0 when `len` is 0.
    pub fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.inner.gen_range(0..len)
    }
}

impl Dice for GameRng {
    fn roll(&mut self) -> u8 {
        self.inner.gen_range(1..=DIE_FACES)
    }
}

/// Derive a seed from the system clock.
#[must_use]
pub fn seed_from_clock() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs().wrapping_mul(1_000_000_000) ^ u64::from(d.subsec_nanos()))
        .unwrap_or(42)
}

/// Dice that replay a fixed sequence of rolls, cycling when exhausted.
///
/// Values are clamped into `[1, 6]`. An empty script always rolls 1.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    rolls: Vec<u8>,
    next: usize,
}

impl ScriptedDice {
    /// Create dice that return `rolls` in order.
    #[must_use]
    pub fn new(rolls: impl Into<Vec<u8>>) -> Self {
        Self {
            rolls: rolls.into(),
            next: 0,
        }
    }

    /// Number of rolls drawn so far.
    #[must_use]
    pub const fn drawn(&self) -> usize {
        self.next
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self) -> u8 {
        if self.rolls.is_empty() {
            return 1;
        }
        let value = self.rolls[self.next % self.rolls.len()];
        self.next += 1;
        value.clamp(1, DIE_FACES)
    }
}
