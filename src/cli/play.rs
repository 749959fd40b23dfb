//! Play command implementation.

use super::output::JsonGameSummary;
use super::{CliError, GameConfig, OutputFormat};
use std::io::{self, BufRead, Write};
use war::console::{register_territories, run_session, Console};
use war::game::seed_from_clock;
use war::setup::load_map;
use war::{GameRng, GameState, MissionCatalog};

/// Execute the play command on this terminal.
///
/// # Errors
///
/// Returns an error if the map cannot be built or input ends mid-game.
pub(crate) fn execute(config: &GameConfig) -> Result<(), CliError> {
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    play(config, &mut console)
}

/// Build the map, play to the end and print the requested summary.
fn play<R: BufRead, W: Write>(
    config: &GameConfig,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    let seed = config.seed.unwrap_or_else(seed_from_clock);
    let mut rng = GameRng::new(seed);
    log::info!("starting game with seed {seed}");

    let store = match &config.map {
        Some(path) => load_map(path)?,
        None => register_territories(console)?,
    };

    let catalog = MissionCatalog::new(&config.missions);
    let mut state = GameState::setup(store, &catalog, &mut rng);

    run_session(console, &mut state, &mut rng)?;

    if config.format == OutputFormat::Json {
        let summary = JsonGameSummary::from_state(seed, &state);
        let json = serde_json::to_string_pretty(&summary)
            .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
        console.say(&format!("{json}\n"))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::path::Path;
    use tempfile::NamedTempFile;
    use war::{Mission, MissionParams};

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn map_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn config(seed: u64, map: &Path, format: OutputFormat, missions: MissionParams) -> GameConfig {
        GameConfig {
            seed: Some(seed),
            map: Some(map.to_path_buf()),
            format,
            missions,
        }
    }

    #[test]
    fn test_empty_map_is_fatal() {
        let file = map_file(r#"{"territories": []}"#);
        let config = config(1, file.path(), OutputFormat::Text, MissionParams::default());

        let mut c = console("");
        let err = play(&config, &mut c).unwrap_err();
        assert_eq!(err.to_string(), "cannot allocate a map of 0 territories");
        assert!(c.into_inner().1.is_empty());
    }

    #[test]
    fn test_missing_map_is_fatal() {
        let config = config(
            1,
            Path::new("/nonexistent/war-map.json"),
            OutputFormat::Text,
            MissionParams::default(),
        );
        let err = play(&config, &mut console("")).unwrap_err();
        assert!(err.to_string().contains("war-map.json"));
    }

    #[test]
    fn test_json_summary_follows_banner() {
        let file = map_file(
            r#"{"territories": [
                {"name": "Brasil", "color": "Azul", "troops": 20},
                {"name": "Argentina", "color": "Vermelho", "troops": 20}
            ]}"#,
        );
        // Every mission except the two eliminations is already complete for
        // Azul on this map.
        let params = MissionParams {
            conquest_target: 1,
            troop_threshold: 1,
            target_territory: "Brasil".to_string(),
        };
        let catalog = MissionCatalog::new(&params);
        let seed = (0..)
            .find(|seed| {
                let mission = catalog.assign(&mut GameRng::new(*seed));
                !matches!(mission, Mission::EliminateColor(_))
            })
            .unwrap();

        let config = config(seed, file.path(), OutputFormat::Json, params);
        let mut c = console("0\n");
        play(&config, &mut c).unwrap();

        let out = String::from_utf8(c.into_inner().1).unwrap();
        let banner = out.find("Azul WINS on turn 1!").unwrap();
        let json_start = out.find('{').unwrap();
        assert!(banner < json_start);

        let summary: serde_json::Value = serde_json::from_str(&out[json_start..]).unwrap();
        assert_eq!(summary["seed"], seed);
        assert_eq!(summary["winner"], "Azul");
        assert_eq!(summary["turns"], 1);
        assert_eq!(summary["territories"][1]["name"], "Argentina");
    }
}
