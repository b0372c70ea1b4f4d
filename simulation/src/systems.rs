//! Generation systems - compute the next grid each step

pub mod neighbors;
pub mod rules;
pub mod generation;

pub use generation::next_generation;
pub use neighbors::{count_live_neighbors, neighbor_coords};
pub use rules::next_cell_state;
