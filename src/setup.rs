//! Map setup from JSON files.
//!
//! A map file lists territories in id order:
//!
//! ```json
//! { "territories": [ { "name": "Brasil", "color": "Azul", "troops": 5 } ] }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::GameError;
use crate::game::{Territory, TerritoryStore};

/// Errors raised while building the map.
#[derive(Debug, Error)]
pub enum SetupError {
    /// The map file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The map file is not valid JSON for a map.
    #[error("invalid map file: {0}")]
    Parse(#[from] serde_json::Error),
    /// The map could not be allocated.
    #[error(transparent)]
    Game(#[from] GameError),
}

/// On-disk map layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapFile {
    /// Territories in id order.
    pub territories: Vec<Territory>,
}

impl MapFile {
    /// Turn the file contents into a store, applying registration bounds.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::Game`] if the map has no territories.
    pub fn into_store(self) -> Result<TerritoryStore, SetupError> {
        let territories = self
            .territories
            .into_iter()
            .map(|mut t| {
                t.clamp_fields();
                // A fresh map has no capture history.
                t.captured = false;
                t
            })
            .collect();
        Ok(TerritoryStore::from_territories(territories)?)
    }
}

/// Parse a map from JSON text.
///
/// # Errors
///
/// Returns [`SetupError::Parse`] for malformed JSON and
/// [`SetupError::Game`] for an empty map.
pub fn parse_map(json: &str) -> Result<TerritoryStore, SetupError> {
    let file: MapFile = serde_json::from_str(json)?;
    file.into_store()
}

/// Load a map from a JSON file.
///
/// # Errors
///
/// Returns [`SetupError::Read`] if the file cannot be read, otherwise the
/// same errors as [`parse_map`].
pub fn load_map(path: &Path) -> Result<TerritoryStore, SetupError> {
    let json = fs::read_to_string(path).map_err(|source| SetupError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let store = parse_map(&json)?;
    log::info!("loaded {} territories from {}", store.len(), path.display());
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_map() {
        let store = parse_map(
            r#"{"territories": [
                {"name": "Brasil", "color": "Azul", "troops": 5},
                {"name": "Argentina", "color": "Vermelho", "troops": 1}
            ]}"#,
        )
        .unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(0).unwrap(), &Territory::new("Brasil", "Azul", 5));
        assert_eq!(store.get(1).unwrap().troops, 1);
    }

    #[test]
    fn test_parse_map_clamps_and_resets_capture() {
        let store = parse_map(
            r#"{"territories": [
                {"name": "Brasil", "color": "Azul-marinho-escuro", "troops": 5, "captured": true}
            ]}"#,
        )
        .unwrap();
        let t = store.get(0).unwrap();
        assert_eq!(t.color, "Azul-mari");
        assert!(!t.captured);
    }

    #[test]
    fn test_parse_empty_map_fails() {
        let err = parse_map(r#"{"territories": []}"#).unwrap_err();
        assert!(matches!(err, SetupError::Game(GameError::Allocation { count: 0 })));
    }

    #[test]
    fn test_parse_malformed_fails() {
        assert!(matches!(
            parse_map(r#"{"territories": [{"name": "Brasil"}]}"#),
            Err(SetupError::Parse(_))
        ));
        assert!(matches!(
            parse_map(r#"{"territories": [{"name": "X", "color": "Azul", "troops": -1}]}"#),
            Err(SetupError::Parse(_))
        ));
        assert!(matches!(parse_map("not json"), Err(SetupError::Parse(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_map(Path::new("/nonexistent/war-map.json")).unwrap_err();
        assert!(matches!(err, SetupError::Read { .. }));
        assert!(err.to_string().contains("war-map.json"));
    }
}
