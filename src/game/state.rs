//! Game state and turn coordination.

use crate::error::{GameError, GameResult, ValidationError};
use crate::game::{
    combat, BattleOutcome, Dice, GameRng, MissionCatalog, Player, TerritoryStore, TurnAction,
    PLAYER_COLORS,
};

/// Number of players in a game.
pub const PLAYER_COUNT: usize = 2;

/// What happened during one completed turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    /// Index of the player who took the turn.
    pub player: usize,
    /// The battle fought, if the player attacked.
    pub battle: Option<BattleOutcome>,
    /// Index of the winner, if the turn ended the game.
    pub winner: Option<usize>,
}

/// Complete game state.
#[derive(Debug, Clone)]
pub struct GameState {
    /// The map.
    store: TerritoryStore,
    /// Both players, in turn order.
    players: [Player; PLAYER_COUNT],
    /// Index of the player whose turn it is.
    current: usize,
    /// Set exactly once, when a mission is completed.
    winner: Option<usize>,
    /// Completed turns.
    turn: u32,
}

impl GameState {
    /// Create a game with the given map and players. Player 0 moves first.
    #[must_use]
    pub fn new(store: TerritoryStore, players: [Player; PLAYER_COUNT]) -> Self {
        Self {
            store,
            players,
            current: 0,
            winner: None,
            turn: 0,
        }
    }

    /// Create a game with the standard colors and a mission drawn for each
    /// player, Azul first.
    #[must_use]
    pub fn setup(store: TerritoryStore, catalog: &MissionCatalog, rng: &mut GameRng) -> Self {
        let players = PLAYER_COLORS.map(|color| Player::new(color, catalog.assign(rng)));
        for player in &players {
            log::debug!("{} drew mission {:?}", player.color, player.mission);
        }
        Self::new(store, players)
    }

    /// The map.
    #[must_use]
    pub const fn store(&self) -> &TerritoryStore {
        &self.store
    }

    /// Both players, in turn order.
    #[must_use]
    pub const fn players(&self) -> &[Player; PLAYER_COUNT] {
        &self.players
    }

    /// Get a player by index.
    #[must_use]
    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Index of the player whose turn it is.
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current
    }

    /// The player whose turn it is.
    #[must_use]
    pub const fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Index of the player waiting for their turn.
    #[must_use]
    pub const fn other_index(&self) -> usize {
        (self.current + 1) % PLAYER_COUNT
    }

    /// Index of the winner, once there is one.
    #[must_use]
    pub const fn winner(&self) -> Option<usize> {
        self.winner
    }

    /// The winning player, once there is one.
    #[must_use]
    pub fn winner_player(&self) -> Option<&Player> {
        self.winner.and_then(|w| self.players.get(w))
    }

    /// Check if the game is over.
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Number of completed turns.
    #[must_use]
    pub const fn turn(&self) -> u32 {
        self.turn
    }

    /// Check a proposed attack for the current player.
    ///
    /// Ids are 1-based. Rules are checked in a fixed order and the first
    /// violation is reported. On success the 0-based indices are returned.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found.
    pub fn validate_attack(
        &self,
        attacker_id: usize,
        defender_id: usize,
    ) -> Result<(usize, usize), ValidationError> {
        let max = self.store.len();
        for id in [attacker_id, defender_id] {
            if id == 0 || id > max {
                return Err(ValidationError::OutOfRange { id, max });
            }
        }

        if attacker_id == defender_id {
            return Err(ValidationError::SelfAttack);
        }

        let territories = self.store.territories();
        let attacker = &territories[attacker_id - 1];
        let defender = &territories[defender_id - 1];

        if !attacker.is_owned_by(&self.current_player().color) {
            return Err(ValidationError::NotOwner { id: attacker_id });
        }

        if attacker.color == defender.color {
            return Err(ValidationError::FriendlyTarget { id: defender_id });
        }

        if attacker.troops <= 1 {
            return Err(ValidationError::InsufficientTroops {
                id: attacker_id,
                troops: attacker.troops,
            });
        }

        Ok((attacker_id - 1, defender_id - 1))
    }

    /// Validate and resolve an attack by the current player.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameOver`] if the game has ended and
    /// [`GameError::Validation`] if the attack breaks a rule. The state is
    /// unchanged in both cases.
    pub fn attack<D: Dice + ?Sized>(
        &mut self,
        attacker_id: usize,
        defender_id: usize,
        dice: &mut D,
    ) -> GameResult<BattleOutcome> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }

        let (attacker, defender) = self.validate_attack(attacker_id, defender_id)?;
        let (attacker, defender) = self.store.pair_mut(attacker, defender)?;
        Ok(combat::resolve(attacker, defender, dice))
    }

    /// Check both missions, current player first, and record the winner.
    ///
    /// If both missions are complete the current player wins. Once a winner
    /// is recorded it is returned unchanged.
    pub fn evaluate_missions(&mut self) -> Option<usize> {
        if self.winner.is_some() {
            return self.winner;
        }

        for index in [self.current, self.other_index()] {
            let player = &self.players[index];
            if player.mission.is_completed(&self.store, &player.color) {
                log::info!("{} completed mission: {}", player.color, player.mission);
                self.winner = Some(index);
                break;
            }
        }

        self.winner
    }

    /// Hand the turn to the other player.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameOver`] if the game has ended.
    pub fn end_turn(&mut self) -> GameResult<()> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }

        self.turn = self.turn.saturating_add(1);
        self.current = self.other_index();
        log::debug!(
            "turn {} goes to {}",
            self.turn + 1,
            self.current_player().color
        );
        Ok(())
    }

    /// Play one full turn: optional attack, mission checks, then hand-over.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameOver`] if the game has ended and
    /// [`GameError::Validation`] for an illegal attack. Validation errors
    /// leave the state untouched so the same player can try again.
    pub fn play_turn<D: Dice + ?Sized>(
        &mut self,
        action: TurnAction,
        dice: &mut D,
    ) -> GameResult<TurnReport> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }

        let player = self.current;
        let battle = match action {
            TurnAction::Skip => None,
            TurnAction::Attack { attacker, defender } => {
                Some(self.attack(attacker, defender, dice)?)
            }
        };

        let winner = self.evaluate_missions();
        if winner.is_none() {
            self.end_turn()?;
        }

        Ok(TurnReport {
            player,
            battle,
            winner,
        })
    }
}
