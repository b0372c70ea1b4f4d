//! Square cell grid
//!
//! Cells are stored row-major as `u8` values (0 dead, 1 alive) so neighbor
//! values can be summed directly.

use std::fmt;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Bernoulli, Distribution};

use crate::error::WorldError;

pub const DEAD: u8 = 0;
pub const ALIVE: u8 = 1;

/// Side length used by default-constructed worlds.
pub const DEFAULT_WORLD_SIZE: usize = 18;

/// Smaller grids make every neighbor alias the cell itself on a torus.
pub const MIN_WORLD_SIZE: usize = 2;

const LIVE_GLYPH: &str = "|o";
const DEAD_GLYPH: &str = "| ";
const ROW_END: &str = "|\n";

/// An N×N grid of binary cells, indexed `(row, col)` with row 0 on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// All-dead grid of the given side.
    pub fn new(size: usize) -> Result<Self, WorldError> {
        let cell_count = check_size(size)?;
        Ok(Self {
            size,
            cells: vec![DEAD; cell_count],
        })
    }

    /// Build from explicit rows. Rows must form a square of 0/1 values.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, WorldError> {
        let size = rows.len();
        let cell_count = check_size(size)?;

        let mut cells = Vec::with_capacity(cell_count);
        for (row_index, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(WorldError::InvalidGrid(format!(
                    "row {} has {} cells, expected {} for a square grid",
                    row_index,
                    row.len(),
                    size
                )));
            }
            if let Some(col) = row.iter().position(|&v| v > ALIVE) {
                return Err(WorldError::InvalidGrid(format!(
                    "cell ({}, {}) holds {}, expected 0 or 1",
                    row_index, col, row[col]
                )));
            }
            cells.extend(row);
        }

        Ok(Self { size, cells })
    }

    /// Rasterize a live-cell coordinate list; every other cell is dead.
    pub fn from_live_cells(size: usize, live: &[(usize, usize)]) -> Result<Self, WorldError> {
        let mut grid = Self::new(size)?;
        for &(row, col) in live {
            grid.set(row, col, true)?;
        }
        Ok(grid)
    }

    /// Random soup where each cell is alive with probability `density`.
    /// The same seed always yields the same grid.
    pub fn random(size: usize, density: f64, seed: u64) -> Result<Self, WorldError> {
        let cell_count = check_size(size)?;
        let alive = Bernoulli::new(density).map_err(|_| {
            WorldError::InvalidGrid(format!("density {} is outside [0, 1]", density))
        })?;

        let mut rng = StdRng::seed_from_u64(seed);
        let cells = (0..cell_count)
            .map(|_| if alive.sample(&mut rng) { ALIVE } else { DEAD })
            .collect();

        Ok(Self { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.index(row, col).map(|i| self.cells[i])
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Some(ALIVE)
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<(), WorldError> {
        let i = self.index(row, col).ok_or_else(|| {
            WorldError::InvalidGrid(format!(
                "cell ({}, {}) is outside a {}x{} grid",
                row, col, self.size, self.size
            ))
        })?;
        self.cells[i] = if alive { ALIVE } else { DEAD };
        Ok(())
    }

    /// Unchecked read for callers that already resolved in-range coordinates.
    pub(crate) fn cell(&self, row: usize, col: usize) -> u8 {
        self.cells[row * self.size + col]
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [u8] {
        &mut self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(self.size)
    }

    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.rows().map(<[u8]>::to_vec).collect()
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&v| v == ALIVE).count()
    }

    /// Coordinates of every live cell in row-major order.
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, v)| **v == ALIVE)
            .map(|(i, _)| (i / self.size, i % self.size))
            .collect()
    }

    /// Text rendering: `|o` per live cell, `| ` per dead cell, `|` and a
    /// newline closing every row.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.size * (self.size * 2 + 2));
        for row in self.rows() {
            for &cell in row {
                out.push_str(if cell == ALIVE { LIVE_GLYPH } else { DEAD_GLYPH });
            }
            out.push_str(ROW_END);
        }
        out
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }
}

impl Default for Grid {
    /// Empty grid of `DEFAULT_WORLD_SIZE`.
    fn default() -> Self {
        Self {
            size: DEFAULT_WORLD_SIZE,
            cells: vec![DEAD; DEFAULT_WORLD_SIZE * DEFAULT_WORLD_SIZE],
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Validate a side length and return the number of cells it holds.
fn check_size(size: usize) -> Result<usize, WorldError> {
    if size < MIN_WORLD_SIZE {
        return Err(WorldError::InvalidGrid(format!(
            "side {} is below the minimum of {}",
            size, MIN_WORLD_SIZE
        )));
    }
    size.checked_mul(size).ok_or_else(|| {
        WorldError::InvalidGrid(format!("side {} overflows the cell count", size))
    })
}
