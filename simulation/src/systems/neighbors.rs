//! Neighbor Resolution
//!
//! Maps the eight compass neighbors of a cell onto grid coordinates.
//! Flat grids drop anything past the edge; spherical grids wrap it.

use crate::components::Topology;
use crate::grid::Grid;

/// Row/column offsets in N, NE, E, SE, S, SW, W, NW order.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, 0),  // N      NW | N | NE
    (-1, 1),  // NE     -----------
    (0, 1),   // E       W | * | E
    (1, 1),   // SE     -----------
    (1, 0),   // S      SW | S | SE
    (1, -1),  // SW
    (0, -1),  // W
    (-1, -1), // NW
];

/// Resolve one offset from `(row, col)` on a `size`-wide grid.
/// Returns `None` when a flat grid has no cell there.
pub fn resolve_neighbor(
    topology: Topology,
    size: usize,
    row: usize,
    col: usize,
    (d_row, d_col): (isize, isize),
) -> Option<(usize, usize)> {
    let n = size as isize;
    let r = row as isize + d_row;
    let c = col as isize + d_col;

    match topology {
        Topology::Flat => {
            if (0..n).contains(&r) && (0..n).contains(&c) {
                Some((r as usize, c as usize))
            } else {
                None
            }
        }
        Topology::Spherical => Some((r.rem_euclid(n) as usize, c.rem_euclid(n) as usize)),
    }
}

/// All eight neighbor coordinates of a cell, in `NEIGHBOR_OFFSETS` order.
pub fn neighbor_coords(
    topology: Topology,
    size: usize,
    row: usize,
    col: usize,
) -> [Option<(usize, usize)>; 8] {
    NEIGHBOR_OFFSETS.map(|offset| resolve_neighbor(topology, size, row, col, offset))
}

/// Sum of the neighbor values of `(row, col)`.
pub fn count_live_neighbors(grid: &Grid, topology: Topology, row: usize, col: usize) -> u8 {
    neighbor_coords(topology, grid.size(), row, col)
        .iter()
        .flatten()
        .map(|&(r, c)| grid.cell(r, c))
        .sum()
}
