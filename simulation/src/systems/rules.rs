//! Rule Application
//!
//! Decides a single cell's next state from its neighbor count.

use crate::components::RuleSet;
use crate::grid::{ALIVE, DEAD};

/// Next value of a cell given its current value and live neighbor count.
///
/// Birth counts win first regardless of the prior state; survive counts
/// only apply to a cell that is currently alive.
pub fn next_cell_state(rules: &RuleSet, current: u8, live_neighbors: u8) -> u8 {
    if rules.is_birth(live_neighbors) {
        return ALIVE;
    }
    if current == ALIVE && rules.is_survival(live_neighbors) {
        return ALIVE;
    }
    DEAD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_rules() {
        let rules = RuleSet::default();
        for count in 0..=8u8 {
            let born = next_cell_state(&rules, DEAD, count);
            let kept = next_cell_state(&rules, ALIVE, count);
            assert_eq!(born == ALIVE, count == 3, "dead cell with {} neighbors", count);
            assert_eq!(kept == ALIVE, count == 2 || count == 3, "live cell with {} neighbors", count);
        }
    }

    #[test]
    fn test_birth_overrides_prior_state() {
        let rules = RuleSet::new([3], [3]).unwrap();
        assert_eq!(next_cell_state(&rules, DEAD, 3), ALIVE);
        assert_eq!(next_cell_state(&rules, ALIVE, 3), ALIVE);
        assert_eq!(next_cell_state(&rules, ALIVE, 2), DEAD);
    }
}
