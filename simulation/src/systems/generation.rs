//! Generation Stepper
//!
//! Builds the next generation from a snapshot of the current one.

use crate::components::{RuleSet, Topology};
use crate::grid::Grid;

use super::neighbors::count_live_neighbors;
use super::rules::next_cell_state;

/// Compute the next grid. The input is only read; the result is a fresh
/// grid of the same side, so no cell ever sees an already-updated neighbor.
pub fn next_generation(grid: &Grid, topology: Topology, rules: &RuleSet) -> Grid {
    let size = grid.size();
    let mut next = grid.clone();
    let cells = next.cells_mut();

    for row in 0..size {
        for col in 0..size {
            let live_neighbors = count_live_neighbors(grid, topology, row, col);
            cells[row * size + col] = next_cell_state(rules, grid.cell(row, col), live_neighbors);
        }
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lonely_cell_dies() {
        let grid = Grid::from_live_cells(5, &[(2, 2)]).unwrap();
        for topology in Topology::ALL {
            let next = next_generation(&grid, topology, &RuleSet::default());
            assert_eq!(next.population(), 0);
        }
    }

    #[test]
    fn test_corner_birth_only_on_torus() {
        // Three cells around the (0, 0) corner reach it only by wrapping
        let grid = Grid::from_live_cells(6, &[(5, 5), (5, 0), (0, 5)]).unwrap();
        let rules = RuleSet::default();

        let flat = next_generation(&grid, Topology::Flat, &rules);
        assert!(!flat.is_alive(0, 0));

        let torus = next_generation(&grid, Topology::Spherical, &rules);
        assert!(torus.is_alive(0, 0));
    }

    #[test]
    fn test_input_untouched() {
        let grid = Grid::random(10, 0.35, 42).unwrap();
        let snapshot = grid.clone();
        let _ = next_generation(&grid, Topology::Spherical, &RuleSet::default());
        assert_eq!(grid, snapshot);
    }
}
