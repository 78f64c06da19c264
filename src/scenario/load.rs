//! Scenario decoding and result encoding.
//!
//! Reads a scenario tile tree from JSON and writes a flattened map back out.
//! This is the only fallible layer; the flattening engine itself never fails.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::types::Scenario;

#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid scenario: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("failed to encode output: {0}")]
    Encode(#[source] serde_json::Error),
}

impl Scenario {
    pub fn from_json_str(json: &str) -> Result<Self, ScenarioError> {
        serde_json::from_str(json).map_err(ScenarioError::Parse)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, ScenarioError> {
        serde_json::from_reader(reader).map_err(ScenarioError::Parse)
    }
}

/// Load a scenario from a JSON file.
pub fn load_scenario(path: &Path) -> Result<Scenario, ScenarioError> {
    let json = fs::read_to_string(path).map_err(|source| ScenarioError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Scenario::from_json_str(&json)
}

/// Encode any serializable result as JSON.
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, ScenarioError> {
    let encoded = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    encoded.map_err(ScenarioError::Encode)
}

/// Encode a result as JSON and write it to a file.
pub fn write_json<T: Serialize>(value: &T, path: &Path, pretty: bool) -> Result<(), ScenarioError> {
    let json = to_json(value, pretty)?;
    fs::write(path, json).map_err(|source| ScenarioError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::HexCoord;
    use crate::scenario::types::{OverlayCategory, Orientation};

    const SAMPLE: &str = r#"{
        "name": "Black Barrow",
        "root": {
            "ref": "g1a",
            "overlays": [
                { "category": "obstacle", "subtype": "boulder", "cells": [{ "x": 2, "y": 1 }] },
                { "category": "pressure-plate", "cells": [{ "col": 0, "row": 0 }] }
            ],
            "doors": [
                {
                    "subtype": "stone",
                    "direction": "vertical",
                    "room1": { "col": 7, "row": 0 },
                    "room2": { "col": 0, "row": 0 },
                    "tile": { "ref": "b1a", "turns": 3 }
                }
            ]
        }
    }"#;

    #[test]
    fn test_decode_with_defaults_and_aliases() {
        let scenario = Scenario::from_json_str(SAMPLE).unwrap();
        assert_eq!(scenario.name.as_deref(), Some("Black Barrow"));

        let root = &scenario.root;
        assert_eq!(root.template_ref, "g1a");
        assert_eq!(root.turns, 0);
        assert_eq!(root.overlays.len(), 2);
        assert_eq!(root.overlays[0].category, OverlayCategory::Obstacle);
        assert_eq!(root.overlays[0].orientation, Orientation::Horizontal);
        assert_eq!(root.overlays[0].cells, vec![HexCoord::new(2, 1)]);
        assert_eq!(
            root.overlays[1].category,
            OverlayCategory::Other("pressure-plate".to_string())
        );

        let door = &root.doors[0];
        assert_eq!(door.subtype.as_deref(), Some("stone"));
        assert_eq!(door.orientation, Orientation::Vertical);
        assert_eq!(door.room1, HexCoord::new(7, 0));
        assert_eq!(door.tile.template_ref, "b1a");
        assert_eq!(door.tile.turns, 3);
        assert!(door.tile.doors.is_empty());
    }

    #[test]
    fn test_encode_then_decode_keeps_tree() {
        let scenario = Scenario::from_json_str(SAMPLE).unwrap();
        let json = to_json(&scenario, false).unwrap();
        assert_eq!(Scenario::from_json_str(&json).unwrap(), scenario);
    }

    #[test]
    fn test_missing_ref_is_parse_error() {
        let err = Scenario::from_json_str(r#"{ "root": { "turns": 1 } }"#).unwrap_err();
        assert!(matches!(err, ScenarioError::Parse(_)));
        assert!(err.to_string().starts_with("invalid scenario"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("scenario_tiles_does_not_exist.json");
        let err = load_scenario(&path).unwrap_err();
        assert!(matches!(err, ScenarioError::Io { .. }));
    }

    #[test]
    fn test_write_and_load_file() {
        let scenario = Scenario::from_json_str(SAMPLE).unwrap();
        let path = std::env::temp_dir().join(format!("scenario_tiles_roundtrip_{}.json", std::process::id()));

        write_json(&scenario, &path, true).expect("write failed");
        let loaded = load_scenario(&path).expect("load failed");
        assert_eq!(loaded, scenario);

        let _ = fs::remove_file(&path);
    }
}
