//! Life World - owns the live grid and advances it one generation at a time

use std::sync::Arc;

use tracing::debug;

use crate::components::{RuleSet, Topology};
use crate::error::WorldError;
use crate::grid::Grid;
use crate::systems;

/// Name given to default-constructed worlds.
pub const DEFAULT_WORLD_NAME: &str = "Demo1";

/// Outcome of one or more generation steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepReport {
    /// Generation number after the step.
    pub generation: u64,
    /// Cells that went from dead to alive.
    pub births: usize,
    /// Cells that went from alive to dead.
    pub deaths: usize,
    /// Live cells after the step.
    pub population: usize,
}

/// A named Game of Life world.
///
/// Cloning copies the grid and shares the rule set, which is never mutated.
#[derive(Debug, Clone)]
pub struct World {
    name: String,
    grid: Grid,
    topology: Topology,
    rules: Arc<RuleSet>,
    generation: u64,
}

impl World {
    /// Create a world that takes ownership of `grid`. The world size is the
    /// grid's side.
    pub fn new(name: impl Into<String>, grid: Grid, topology: Topology, rules: RuleSet) -> Self {
        Self {
            name: name.into(),
            grid,
            topology,
            rules: Arc::new(rules),
            generation: 0,
        }
    }

    /// Create a world from raw rows, rejecting non-square input.
    pub fn from_rows(
        name: impl Into<String>,
        rows: Vec<Vec<u8>>,
        topology: Topology,
        rules: RuleSet,
    ) -> Result<Self, WorldError> {
        Ok(Self::new(name, Grid::from_rows(rows)?, topology, rules))
    }

    /// Create a world of the given side with only the listed cells alive.
    pub fn from_live_cells(
        name: impl Into<String>,
        size: usize,
        live: &[(usize, usize)],
        topology: Topology,
        rules: RuleSet,
    ) -> Result<Self, WorldError> {
        Ok(Self::new(name, Grid::from_live_cells(size, live)?, topology, rules))
    }

    /// Empty world of the given side.
    pub fn empty(name: impl Into<String>, size: usize, topology: Topology) -> Result<Self, WorldError> {
        Ok(Self::new(name, Grid::new(size)?, topology, RuleSet::default()))
    }

    /// Rebuild a world from every persisted field.
    pub fn restore(
        name: impl Into<String>,
        grid: Grid,
        topology: Topology,
        rules: RuleSet,
        generation: u64,
    ) -> Self {
        Self {
            generation,
            ..Self::new(name, grid, topology, rules)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Side length, fixed for the lifetime of the world.
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    pub fn is_extinct(&self) -> bool {
        self.population() == 0
    }

    /// Replace the whole grid. The replacement must keep the world's side.
    pub fn set_grid(&mut self, grid: Grid) -> Result<(), WorldError> {
        if grid.size() != self.size() {
            return Err(WorldError::InvalidGrid(format!(
                "replacement grid is {0}x{0}, world is {1}x{1}",
                grid.size(),
                self.size()
            )));
        }
        self.grid = grid;
        Ok(())
    }

    /// Advance one generation, swapping in a freshly computed grid.
    pub fn step(&mut self) -> StepReport {
        let next = systems::next_generation(&self.grid, self.topology, &self.rules);

        let (births, deaths) = self
            .grid
            .rows()
            .flatten()
            .zip(next.rows().flatten())
            .fold((0usize, 0usize), |(b, d), (&before, &after)| match (before, after) {
                (0, 1) => (b + 1, d),
                (1, 0) => (b, d + 1),
                _ => (b, d),
            });

        self.grid = next;
        self.generation += 1;

        let report = StepReport {
            generation: self.generation,
            births,
            deaths,
            population: self.grid.population(),
        };
        debug!(
            world = %self.name,
            generation = report.generation,
            births = report.births,
            deaths = report.deaths,
            population = report.population,
            "generation stepped"
        );
        report
    }

    /// Advance `count` generations and total the births and deaths.
    pub fn advance(&mut self, count: u32) -> StepReport {
        let mut total = StepReport {
            generation: self.generation,
            population: self.population(),
            ..StepReport::default()
        };
        for _ in 0..count {
            let r = self.step();
            total.births += r.births;
            total.deaths += r.deaths;
            total.generation = r.generation;
            total.population = r.population;
        }
        total
    }

    /// Text rendering of the current generation.
    pub fn render(&self) -> String {
        self.grid.render()
    }
}

impl Default for World {
    /// "Demo1": an empty 18x18 flat world with the classic rules.
    fn default() -> Self {
        Self::new(DEFAULT_WORLD_NAME, Grid::default(), Topology::Flat, RuleSet::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_world() {
        let world = World::default();
        assert_eq!(world.name(), "Demo1");
        assert_eq!(world.size(), 18);
        assert_eq!(world.topology(), Topology::Flat);
        assert_eq!(world.rules(), &RuleSet::default());
        assert_eq!(world.generation(), 0);
        assert!(world.is_extinct());
    }

    #[test]
    fn test_copy_is_independent() {
        let mut original =
            World::from_live_cells("copy", 6, &[(2, 1), (2, 2), (2, 3)], Topology::Flat, RuleSet::default())
                .unwrap();
        let copy = original.clone();

        original.step();
        assert_ne!(original.grid(), copy.grid());
        assert_eq!(copy.generation(), 0);
        assert_eq!(copy.topology(), original.topology());
        assert_eq!(copy.size(), original.size());
        assert!(Arc::ptr_eq(&original.rules, &copy.rules));
    }

    #[test]
    fn test_set_grid_keeps_size() {
        let mut world = World::empty("fixed", 6, Topology::Spherical).unwrap();

        let wrong = Grid::new(7).unwrap();
        assert!(matches!(world.set_grid(wrong), Err(WorldError::InvalidGrid(_))));
        assert_eq!(world.size(), 6);

        let right = Grid::from_live_cells(6, &[(0, 0)]).unwrap();
        world.set_grid(right.clone()).unwrap();
        assert_eq!(world.grid(), &right);
    }

    #[test]
    fn test_step_report_counts() {
        // Blinker: two ends die, two new ends are born
        let mut world =
            World::from_live_cells("blink", 6, &[(2, 1), (2, 2), (2, 3)], Topology::Flat, RuleSet::default())
                .unwrap();
        let report = world.step();
        assert_eq!(
            report,
            StepReport {
                generation: 1,
                births: 2,
                deaths: 2,
                population: 3,
            }
        );
    }

    #[test]
    fn test_advance_totals() {
        let mut world =
            World::from_live_cells("blink", 6, &[(2, 1), (2, 2), (2, 3)], Topology::Flat, RuleSet::default())
                .unwrap();
        let report = world.advance(4);
        assert_eq!(report.generation, 4);
        assert_eq!(report.births, 8);
        assert_eq!(report.deaths, 8);
        assert_eq!(report.population, 3);
        assert_eq!(world.generation(), 4);
    }

    #[test]
    fn test_render_delegates_to_grid() {
        let world = World::from_live_cells("r", 2, &[(1, 1)], Topology::Flat, RuleSet::default()).unwrap();
        assert_eq!(world.render(), "| | |\n| |o|\n");
    }
}
