//! Life World Simulation Engine
//!
//! Generation-stepped Game of Life on a fixed-size square grid, with a
//! bounded flat topology and a wrapping toroidal one.

pub mod components;
pub mod config;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod persistence;
pub mod systems;
pub mod world;

pub use components::{RuleSet, Topology};
pub use config::SimulationConfig;
pub use error::{ConfigError, PersistenceError, WorldError};
pub use grid::{Grid, DEFAULT_WORLD_SIZE};
pub use persistence::{ExportData, ImportResult, LoadFileResult, SaveStats};
pub use systems::next_generation;
pub use world::{StepReport, World};
