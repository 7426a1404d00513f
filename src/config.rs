// Scenario configuration
//
// Every value the walkthrough plays with can be overridden from a TOML file.
// Missing sections and fields fall back to the canonical scenario, so an empty
// file behaves exactly like no file at all.

use crate::demo::Demo;
use crate::error::{DemoError, Result};
use crate::record::Player;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Scenario {
    pub color: bool,
    pub demos: Vec<Demo>,
    pub scalars: ScalarScenario,
    pub sequence: SequenceScenario,
    pub mapping: MappingScenario,
    pub player: PlayerScenario,
    pub pointer: PointerScenario,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScalarScenario {
    pub left: i64,
    pub right: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SequenceScenario {
    pub values: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MappingScenario {
    pub entries: BTreeMap<String, i64>,
    pub first: String,
    pub second: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlayerScenario {
    pub name: String,
    pub level: i32,
    pub delta: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PointerScenario {
    pub message: String,
    pub replacement: String,
    pub via_pointer: String,
    pub number: i64,
}

impl Default for Scenario {
    fn default() -> Self {
        Scenario {
            color: true,
            demos: Demo::ALL.to_vec(),
            scalars: ScalarScenario::default(),
            sequence: SequenceScenario::default(),
            mapping: MappingScenario::default(),
            player: PlayerScenario::default(),
            pointer: PointerScenario::default(),
        }
    }
}

impl Default for ScalarScenario {
    fn default() -> Self {
        ScalarScenario { left: 1, right: 2 }
    }
}

impl Default for SequenceScenario {
    fn default() -> Self {
        SequenceScenario {
            values: vec![10, 20],
        }
    }
}

impl Default for MappingScenario {
    fn default() -> Self {
        MappingScenario {
            entries: BTreeMap::from([("apple".to_string(), 10), ("banana".to_string(), 20)]),
            first: "apple".to_string(),
            second: "banana".to_string(),
        }
    }
}

impl Default for PlayerScenario {
    fn default() -> Self {
        let player = Player::default();
        PlayerScenario {
            name: player.name,
            level: player.level,
            delta: 2,
        }
    }
}

impl PlayerScenario {
    pub fn player(&self) -> Player {
        Player::new(self.name.clone(), self.level)
    }
}

impl Default for PointerScenario {
    fn default() -> Self {
        PointerScenario {
            message: "Hello world!".to_string(),
            replacement: "Banana banana!".to_string(),
            via_pointer: "Grapefruit!".to_string(),
            number: 42,
        }
    }
}

impl Scenario {
    pub fn from_toml(path: &Path, source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|source| DemoError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|source| DemoError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(path, &source)
    }

    /// Loads `path` when given, otherwise the canonical scenario.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
