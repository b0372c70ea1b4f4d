//! Seed Patterns
//!
//! Well-known starting shapes as live-cell offsets from their top-left
//! corner, with case-insensitive lookup by name.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::WorldError;
use crate::grid::Grid;

/// A named set of live cells, as `(row, col)` offsets.
#[derive(Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "block",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "r-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
    Pattern {
        name: "lwss",
        cells: &[(0, 1), (0, 4), (1, 0), (2, 0), (2, 4), (3, 0), (3, 1), (3, 2), (3, 3)],
    },
];

static BY_NAME: Lazy<HashMap<&'static str, &'static Pattern>> =
    Lazy::new(|| PATTERNS.iter().map(|p| (p.name, p)).collect());

/// Find a pattern by name, ignoring case and surrounding whitespace.
pub fn find_pattern(name: &str) -> Option<&'static Pattern> {
    BY_NAME.get(name.trim().to_ascii_lowercase().as_str()).copied()
}

impl Pattern {
    /// `(height, width)` of the smallest box holding every cell.
    pub fn bounding_box(&self) -> (usize, usize) {
        let height = self.cells.iter().map(|&(r, _)| r + 1).max().unwrap_or(0);
        let width = self.cells.iter().map(|&(_, c)| c + 1).max().unwrap_or(0);
        (height, width)
    }

    /// Top-left origin that centres the pattern on a grid of side `size`,
    /// or `None` if it does not fit.
    pub fn centered_origin(&self, size: usize) -> Option<(usize, usize)> {
        let (height, width) = self.bounding_box();
        (height <= size && width <= size).then(|| ((size - height) / 2, (size - width) / 2))
    }

    /// Set the pattern's cells alive with its top-left corner at `origin`.
    /// Nothing is written unless the whole pattern fits.
    pub fn place(&self, grid: &mut Grid, (row, col): (usize, usize)) -> Result<(), WorldError> {
        let (height, width) = self.bounding_box();
        let fits = |start: usize, extent: usize| {
            start
                .checked_add(extent)
                .map_or(false, |end| end <= grid.size())
        };
        if !fits(row, height) || !fits(col, width) {
            return Err(WorldError::InvalidGrid(format!(
                "pattern '{}' ({}x{}) does not fit at ({}, {}) on a {}x{} grid",
                self.name,
                height,
                width,
                row,
                col,
                grid.size(),
                grid.size()
            )));
        }
        for &(dr, dc) in self.cells {
            grid.set(row + dr, col + dc, true)?;
        }
        Ok(())
    }
}
