//! Persistence module for export/import of world state
//!
//! Worlds are exported as JSON for interchange and saved as bincode for
//! files. Both carry every field needed to rebuild the world; nothing
//! derived is stored.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::components::{RuleSet, Topology};
use crate::error::{PersistenceError, WorldError};
use crate::grid::Grid;
use crate::world::World;

/// Current schema version.
pub const EXPORT_VERSION: u8 = 1;

// ============================================================================
// Export Data Structures
// ============================================================================

/// Complete world state for persistence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportData {
    pub version: u8, // Schema version for forward compatibility
    pub name: String,
    pub size: usize,
    pub topology: Topology,
    pub rules: ExportedRules,
    pub generation: u64,
    /// Row-major cell values, 0 or 1
    pub rows: Vec<Vec<u8>>,
    pub exported_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedRules {
    pub survive: Vec<u8>,
    pub birth: Vec<u8>,
}

impl From<&RuleSet> for ExportedRules {
    fn from(rules: &RuleSet) -> Self {
        Self {
            survive: rules.survive_counts().iter().copied().collect(),
            birth: rules.birth_counts().iter().copied().collect(),
        }
    }
}

impl TryFrom<ExportedRules> for RuleSet {
    type Error = WorldError;

    fn try_from(rules: ExportedRules) -> Result<Self, Self::Error> {
        RuleSet::new(rules.survive, rules.birth)
    }
}

/// Result of import operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportResult {
    pub name: String,
    pub size: usize,
    pub population: usize,
    pub generation: u64,
}

/// Result of saving to a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveStats {
    pub population: usize,
    pub generation: u64,
    pub file_bytes: u64,
}

/// Result of loading from a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFileResult {
    pub import_result: ImportResult,
    pub exported_at: DateTime<Utc>,
}

// ============================================================================
// Export / Import Implementation
// ============================================================================

impl ExportData {
    /// Rebuild a world, re-validating every field.
    pub fn into_world(self) -> Result<World, PersistenceError> {
        if self.version != EXPORT_VERSION {
            return Err(PersistenceError::UnsupportedVersion(self.version));
        }

        let grid = Grid::from_rows(self.rows)?;
        if grid.size() != self.size {
            return Err(WorldError::InvalidGrid(format!(
                "stored size {} does not match a {}x{} grid",
                self.size,
                grid.size(),
                grid.size()
            ))
            .into());
        }
        let rules = RuleSet::try_from(self.rules)?;

        Ok(World::restore(self.name, grid, self.topology, rules, self.generation))
    }
}

impl World {
    pub fn to_export_data(&self) -> ExportData {
        ExportData {
            version: EXPORT_VERSION,
            name: self.name().to_string(),
            size: self.size(),
            topology: self.topology(),
            rules: ExportedRules::from(self.rules()),
            generation: self.generation(),
            rows: self.grid().to_rows(),
            exported_at: Utc::now(),
        }
    }

    /// Export entire world state to a JSON string
    pub fn export_world(&self) -> Result<String, PersistenceError> {
        Ok(serde_json::to_string(&self.to_export_data())?)
    }

    /// Import world state from a JSON string, replacing current state.
    /// On error the current state is left untouched.
    pub fn import_world(&mut self, json: &str) -> Result<ImportResult, PersistenceError> {
        let data: ExportData = serde_json::from_str(json)?;
        *self = data.into_world()?;
        Ok(self.import_result())
    }

    /// Save world state to a binary file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<SaveStats, PersistenceError> {
        let path = path.as_ref();
        let bytes = bincode::serialize(&self.to_export_data())?;
        std::fs::write(path, &bytes)?;

        let stats = SaveStats {
            population: self.population(),
            generation: self.generation(),
            file_bytes: bytes.len() as u64,
        };
        info!(
            world = %self.name(),
            path = %path.display(),
            bytes = stats.file_bytes,
            "world saved"
        );
        Ok(stats)
    }

    /// Load world state from a binary file, replacing current state
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<LoadFileResult, PersistenceError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let data: ExportData = bincode::deserialize(&bytes)?;
        let exported_at = data.exported_at;

        *self = data.into_world()?;
        info!(
            world = %self.name(),
            path = %path.display(),
            generation = self.generation(),
            "world loaded"
        );

        Ok(LoadFileResult {
            import_result: self.import_result(),
            exported_at,
        })
    }

    fn import_result(&self) -> ImportResult {
        ImportResult {
            name: self.name().to_string(),
            size: self.size(),
            population: self.population(),
            generation: self.generation(),
        }
    }
}
