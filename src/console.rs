//! Line-oriented console play.
//!
//! [`Console`] wraps any reader/writer pair so the same code serves stdin and
//! scripted test input. [`run_session`] drives a game through [`TurnPhase`]
//! until a mission is completed.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use thiserror::Error;

use crate::error::GameError;
use crate::game::{assert_invariants, Dice, GameState, Territory, TerritoryStore, TurnPhase};
use crate::render::{format_banner, format_battle, format_map, format_mission};

/// Errors that end a console game early.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Reading input or writing output failed, including end of input.
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
    /// A non-retryable game error.
    #[error(transparent)]
    Game(#[from] GameError),
}

/// A prompt/response channel over a reader and a writer.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console over the given reader and writer.
    #[must_use]
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Take back the reader and writer.
    #[must_use]
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Write text as-is and flush.
    ///
    /// # Errors
    ///
    /// Returns the underlying write error.
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    /// Show `prompt` and read one line without its line ending.
    ///
    /// # Errors
    ///
    /// Returns [`io::ErrorKind::UnexpectedEof`] when input is exhausted.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        self.say(prompt)?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before the game finished",
            ));
        }

        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Show `prompt` until the reply parses as a number.
    ///
    /// # Errors
    ///
    /// Returns [`io::ErrorKind::UnexpectedEof`] when input is exhausted.
    pub fn read_number<T: FromStr>(&mut self, prompt: &str) -> io::Result<T> {
        loop {
            let line = self.read_line(prompt)?;
            match line.trim().parse() {
                Ok(value) => return Ok(value),
                Err(_) => self.say("Please enter a whole number.\n")?,
            }
        }
    }
}

/// Ask for the territory count and each territory's fields.
///
/// # Errors
///
/// Returns [`ConsoleError::Io`] if input ends and [`ConsoleError::Game`] if
/// the map cannot be allocated.
pub fn register_territories<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<TerritoryStore, ConsoleError> {
    console.say("--- TERRITORY REGISTRATION ---\n")?;

    let count = loop {
        let count: usize = console.read_number("How many territories? ")?;
        if count > 0 {
            break count;
        }
        console.say("The map needs at least one territory.\n")?;
    };

    let mut store = TerritoryStore::create(count)?;
    for index in 0..count {
        console.say(&format!("\n--- Territory {} ---\n", index + 1))?;
        let name = console.read_line("Name: ")?;
        let color = console.read_line("Color: ")?;
        let troops: u32 = console.read_number("Troops: ")?;
        store.set(index, Territory::new(&name, color.trim(), troops))?;
    }

    log::info!("registered {count} territories");
    Ok(store)
}

/// Play `state` to the end over `console`, returning the winner's index.
///
/// Illegal attacks are reported and the same player is asked again.
///
/// # Errors
///
/// Returns [`ConsoleError::Io`] if input ends before a mission is completed.
pub fn run_session<R, W, D>(
    console: &mut Console<R, W>,
    state: &mut GameState,
    dice: &mut D,
) -> Result<usize, ConsoleError>
where
    R: BufRead,
    W: Write,
    D: Dice + ?Sized,
{
    console.say(&format_map(state.store()))?;

    let mut phase = match state.winner() {
        Some(winner) => TurnPhase::GameOver { winner },
        None => TurnPhase::AwaitingAttackerSelection,
    };
    let mut announce = true;

    loop {
        phase = match phase {
            TurnPhase::AwaitingAttackerSelection => {
                if announce {
                    let player = state.current_player();
                    let header = format!("\n>>> Turn {}: {} <<<\n", state.turn() + 1, player.color);
                    console.say(&header)?;
                    console.say(&format_mission(player))?;
                    announce = false;
                }
                let attacker: usize =
                    console.read_number("Attack from territory (0 to skip): ")?;
                if attacker == 0 {
                    TurnPhase::EvaluatingMissions
                } else {
                    TurnPhase::AwaitingDefenderSelection { attacker }
                }
            }
            TurnPhase::AwaitingDefenderSelection { attacker } => {
                let defender: usize = console.read_number("Attack territory: ")?;
                TurnPhase::Validating { attacker, defender }
            }
            TurnPhase::Validating { attacker, defender } => {
                match state.validate_attack(attacker, defender) {
                    Ok(_) => TurnPhase::Resolving { attacker, defender },
                    Err(err) => {
                        log::debug!("rejected attack {attacker} -> {defender}: {err}");
                        console.say(&format!("Invalid attack: {err}. Try again.\n"))?;
                        TurnPhase::AwaitingAttackerSelection
                    }
                }
            }
            TurnPhase::Resolving { attacker, defender } => {
                let attacker_name = state.store().get(attacker - 1)?.name.clone();
                let defender_name = state.store().get(defender - 1)?.name.clone();
                let outcome = state.attack(attacker, defender, dice)?;
                assert_invariants(state);

                console.say(&format_battle(&attacker_name, &defender_name, &outcome))?;
                console.say(&format_map(state.store()))?;
                TurnPhase::EvaluatingMissions
            }
            TurnPhase::EvaluatingMissions => match state.evaluate_missions() {
                Some(winner) => TurnPhase::GameOver { winner },
                None => TurnPhase::NextTurn,
            },
            TurnPhase::NextTurn => {
                state.end_turn()?;
                announce = true;
                TurnPhase::AwaitingAttackerSelection
            }
            TurnPhase::GameOver { winner } => {
                console.say(&format_banner(state))?;
                return Ok(winner);
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Mission, Player, ScriptedDice, AZUL, VERMELHO};
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn transcript(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_inner().1).unwrap()
    }

    #[test]
    fn test_read_line_trims_newline_only() {
        let mut c = console("  America do Sul \r\nnext\n");
        assert_eq!(c.read_line("> ").unwrap(), "  America do Sul ");
        assert_eq!(c.read_line("> ").unwrap(), "next");
        let err = c.read_line("> ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_read_number_reprompts() {
        let mut c = console("abc\n-3\n 7 \n");
        let value: usize = c.read_number("n? ").unwrap();
        assert_eq!(value, 7);
        let out = transcript(c);
        assert_eq!(out.matches("n? ").count(), 3);
        assert_eq!(out.matches("whole number").count(), 2);
    }

    #[test]
    fn test_register_territories() {
        let mut c = console("0\n2\nAmerica do Sul\nAzul\n5\nArgentina\n Vermelho \n1\n");
        let store = register_territories(&mut c).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(0).unwrap(), &Territory::new("America do Sul", "Azul", 5));
        assert_eq!(store.get(1).unwrap().color, "Vermelho");
        assert!(transcript(c).contains("at least one territory"));
    }

    #[test]
    fn test_register_truncated_input_fails() {
        let mut c = console("2\nBrasil\nAzul\n");
        assert!(matches!(
            register_territories(&mut c),
            Err(ConsoleError::Io(_))
        ));
    }

    #[test]
    fn test_session_invalid_attack_reprompts_same_player() {
        let store = TerritoryStore::from_territories(vec![
            Territory::new("Brasil", AZUL, 5),
            Territory::new("Argentina", VERMELHO, 1),
        ])
        .unwrap();
        let players = [
            Player::new(AZUL, Mission::EliminateColor(VERMELHO.to_string())),
            Player::new(VERMELHO, Mission::ConquerTerritories(4)),
        ];
        let mut state = GameState::new(store, players);
        let mut dice = ScriptedDice::new([6, 1]);

        // 2 -> 1 is Vermelho's territory: rejected, Azul tries again.
        let mut c = console("2\n1\n1\n2\n");
        let winner = run_session(&mut c, &mut state, &mut dice).unwrap();
        assert_eq!(winner, 0);

        let out = transcript(c);
        assert!(out.contains("Invalid attack: territory 2 is not yours"));
        assert_eq!(out.matches(">>> Turn 1: Azul <<<").count(), 1);
        assert!(out.contains("Azul WINS on turn 1!"));
    }
}
