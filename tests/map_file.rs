//! Map file loading from disk.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::io::Write;

use tempfile::NamedTempFile;
use war::setup::{load_map, MapFile, SetupError};
use war::{GameError, Territory};

fn write_map(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_map_file() {
    let file = write_map(
        r#"{
            "territories": [
                {"name": "America do Sul", "color": "Azul", "troops": 5},
                {"name": "Argentina", "color": "Vermelho", "troops": 1},
                {"name": "Chile", "color": "Vermelho", "troops": 0}
            ]
        }"#,
    );

    let store = load_map(file.path()).unwrap();
    assert_eq!(store.len(), 3);
    assert_eq!(store.get(0).unwrap().name, "America do Sul");
    assert_eq!(store.count_by_color("Vermelho"), 2);
    assert_eq!(store.troop_sum_by_color("Vermelho"), 1);
}

#[test]
fn test_saved_map_loads_back() {
    let map = MapFile {
        territories: vec![
            Territory::new("Brasil", "Azul", 5),
            Territory::new("Argentina", "Vermelho", 1),
        ],
    };
    let file = write_map(&serde_json::to_string(&map).unwrap());

    let store = load_map(file.path()).unwrap();
    assert_eq!(store.territories(), map.territories.as_slice());
}

#[test]
fn test_empty_map_file_is_fatal() {
    let file = write_map(r#"{"territories": []}"#);
    let err = load_map(file.path()).unwrap_err();
    assert!(matches!(err, SetupError::Game(GameError::Allocation { count: 0 })));
    assert_eq!(err.to_string(), "cannot allocate a map of 0 territories");
}

#[test]
fn test_malformed_map_file() {
    let file = write_map("{ territories: oops }");
    let err = load_map(file.path()).unwrap_err();
    assert!(matches!(err, SetupError::Parse(_)));
    assert!(err.to_string().starts_with("invalid map file"));
}
