//! Simulation configuration
//!
//! A JSON document describing which world to build and how long to run it.
//! Every field is optional and falls back to the demo world.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::components::{RuleSet, Topology};
use crate::error::{ConfigError, WorldError};
use crate::grid::{Grid, DEFAULT_WORLD_SIZE};
use crate::patterns::find_pattern;
use crate::world::{World, DEFAULT_WORLD_NAME};

/// Seeds the grid with a random soup instead of a named pattern.
pub const RANDOM_PATTERN: &str = "random";
/// Leaves the grid empty.
pub const EMPTY_PATTERN: &str = "empty";

/// Name-keyed rule overrides, e.g. `{"birth": [3, 6]}`.
pub type RuleConfig = BTreeMap<String, Vec<u8>>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub name: String,
    pub size: usize,
    pub topology: String,
    pub rules: RuleConfig,
    pub generations: u32,
    pub pattern: String,
    pub seed: u64,
    pub density: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_WORLD_NAME.to_string(),
            size: DEFAULT_WORLD_SIZE,
            topology: Topology::Flat.to_string(),
            rules: RuleConfig::new(),
            generations: 10,
            pattern: "glider".to_string(),
            seed: 12345,
            density: 0.3,
        }
    }
}

impl SimulationConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn topology(&self) -> Result<Topology, WorldError> {
        self.topology.parse()
    }

    pub fn rule_set(&self) -> Result<RuleSet, WorldError> {
        RuleSet::from_named(self.rules.iter().map(|(key, counts)| (key, counts.iter().copied())))
    }

    /// Initial grid: a random soup, an empty grid, or a named pattern
    /// centred on the grid.
    pub fn initial_grid(&self) -> Result<Grid, WorldError> {
        let pattern = self.pattern.trim();
        if pattern.eq_ignore_ascii_case(RANDOM_PATTERN) {
            return Grid::random(self.size, self.density, self.seed);
        }

        let mut grid = Grid::new(self.size)?;
        if pattern.is_empty() || pattern.eq_ignore_ascii_case(EMPTY_PATTERN) {
            return Ok(grid);
        }

        let seed = find_pattern(pattern)
            .ok_or_else(|| WorldError::InvalidGrid(format!("unknown pattern '{}'", pattern)))?;
        let origin = seed.centered_origin(self.size).ok_or_else(|| {
            WorldError::InvalidGrid(format!(
                "pattern '{}' does not fit a {}x{} grid",
                seed.name, self.size, self.size
            ))
        })?;
        seed.place(&mut grid, origin)?;
        Ok(grid)
    }

    pub fn build_world(&self) -> Result<World, WorldError> {
        Ok(World::new(
            self.name.clone(),
            self.initial_grid()?,
            self.topology()?,
            self.rule_set()?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_builds_demo_world() {
        let world = SimulationConfig::default().build_world().unwrap();
        assert_eq!(world.name(), "Demo1");
        assert_eq!(world.size(), 18);
        assert_eq!(world.topology(), Topology::Flat);
        assert_eq!(world.population(), 5);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SimulationConfig::from_json_str(
            r#"{ "size": 10, "topology": "toroidal", "rules": { "birth": [3, 6] } }"#,
        )
        .unwrap();
        assert_eq!(config.generations, 10);

        let world = config.build_world().unwrap();
        assert_eq!(world.size(), 10);
        assert_eq!(world.topology(), Topology::Spherical);
        assert_eq!(world.rules().to_string(), "B36/S23");
    }

    #[test]
    fn test_invalid_entries() {
        let bad_topology = SimulationConfig {
            topology: "hexagonal".into(),
            ..SimulationConfig::default()
        };
        assert!(matches!(
            bad_topology.build_world(),
            Err(WorldError::InvalidTopology(_))
        ));

        let mut bad_rules = SimulationConfig::default();
        bad_rules.rules.insert("survive".into(), Vec::new());
        assert!(matches!(
            bad_rules.build_world(),
            Err(WorldError::InvalidRuleSet(_))
        ));

        let bad_pattern = SimulationConfig {
            pattern: "gosper".into(),
            ..SimulationConfig::default()
        };
        assert!(matches!(
            bad_pattern.build_world(),
            Err(WorldError::InvalidGrid(_))
        ));

        assert!(SimulationConfig::from_json_str("{ size: }").is_err());
    }

    #[test]
    fn test_random_and_empty_patterns() {
        let random = SimulationConfig {
            pattern: "random".into(),
            density: 1.0,
            size: 4,
            ..SimulationConfig::default()
        };
        assert_eq!(random.initial_grid().unwrap().population(), 16);

        let empty = SimulationConfig {
            pattern: "empty".into(),
            ..SimulationConfig::default()
        };
        assert_eq!(empty.initial_grid().unwrap().population(), 0);
    }
}
