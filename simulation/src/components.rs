//! Value types shared by the world and the generation stepper
//!
//! Topology selects how neighbors are resolved at the edges; the rule set
//! holds the neighbor counts that keep or bring cells to life.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WorldError;

// ============================================================================
// Topology
// ============================================================================

/// Shape of the space the grid lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topology {
    /// Bounded plane: cells past the edge are permanently dead.
    #[default]
    Flat,
    /// Torus: rows and columns wrap to the opposite edge.
    Spherical,
}

impl Topology {
    pub const ALL: [Topology; 2] = [Topology::Flat, Topology::Spherical];

    pub fn as_str(&self) -> &'static str {
        match self {
            Topology::Flat => "flat",
            Topology::Spherical => "spherical",
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Topology {
    type Err = WorldError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "flat" | "plano" => Ok(Topology::Flat),
            "spherical" | "toroidal" | "torus" | "esferico" => Ok(Topology::Spherical),
            other => Err(WorldError::InvalidTopology(format!(
                "unrecognized topology tag '{}'",
                other
            ))),
        }
    }
}

// ============================================================================
// Rule Set
// ============================================================================

/// Name of the survival entry in name-keyed rule configuration.
pub const SURVIVE_KEY: &str = "survive";
/// Name of the birth entry in name-keyed rule configuration.
pub const BIRTH_KEY: &str = "birth";

/// A cell has at most eight neighbors, so larger counts can never match.
pub const MAX_NEIGHBORS: u8 = 8;

const DEFAULT_SURVIVE: [u8; 2] = [2, 3];
const DEFAULT_BIRTH: [u8; 1] = [3];

/// Neighbor counts driving the cell update.
///
/// `birth_counts` is checked before `survive_counts` and yields a live cell
/// whatever the prior state. `survive_counts` only keeps an already-live
/// cell alive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRuleSet")]
pub struct RuleSet {
    survive_counts: BTreeSet<u8>,
    birth_counts: BTreeSet<u8>,
}

impl RuleSet {
    pub fn new(
        survive_counts: impl IntoIterator<Item = u8>,
        birth_counts: impl IntoIterator<Item = u8>,
    ) -> Result<Self, WorldError> {
        Ok(Self {
            survive_counts: validate_counts(SURVIVE_KEY, survive_counts)?,
            birth_counts: validate_counts(BIRTH_KEY, birth_counts)?,
        })
    }

    /// Build a rule set from name-keyed entries (`"survive"`, `"birth"`).
    ///
    /// Missing entries fall back to the classic values. An unknown key or
    /// an entry with no values is rejected.
    pub fn from_named<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Result<Self, WorldError>
    where
        K: AsRef<str>,
        V: IntoIterator<Item = u8>,
    {
        let mut rules = Self::default();
        for (key, values) in entries {
            let key = key.as_ref();
            match key {
                SURVIVE_KEY => rules.survive_counts = validate_counts(key, values)?,
                BIRTH_KEY => rules.birth_counts = validate_counts(key, values)?,
                _ => {
                    return Err(WorldError::InvalidRuleSet(format!(
                        "unrecognized rule key '{}'",
                        key
                    )))
                }
            }
        }
        Ok(rules)
    }

    /// Look up an entry by name.
    pub fn named(&self, key: &str) -> Result<&BTreeSet<u8>, WorldError> {
        match key {
            SURVIVE_KEY => Ok(&self.survive_counts),
            BIRTH_KEY => Ok(&self.birth_counts),
            _ => Err(WorldError::InvalidRuleSet(format!(
                "unrecognized rule key '{}'",
                key
            ))),
        }
    }

    pub fn survive_counts(&self) -> &BTreeSet<u8> {
        &self.survive_counts
    }

    pub fn birth_counts(&self) -> &BTreeSet<u8> {
        &self.birth_counts
    }

    pub fn is_birth(&self, live_neighbors: u8) -> bool {
        self.birth_counts.contains(&live_neighbors)
    }

    pub fn is_survival(&self, live_neighbors: u8) -> bool {
        self.survive_counts.contains(&live_neighbors)
    }

    /// Counts present in both sets.
    pub fn overlapping_counts(&self) -> Vec<u8> {
        self.birth_counts
            .intersection(&self.survive_counts)
            .copied()
            .collect()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            survive_counts: DEFAULT_SURVIVE.into_iter().collect(),
            birth_counts: DEFAULT_BIRTH.into_iter().collect(),
        }
    }
}

/// Rulestring notation, e.g. `B3/S23`.
impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("B")?;
        for count in &self.birth_counts {
            write!(f, "{}", count)?;
        }
        f.write_str("/S")?;
        for count in &self.survive_counts {
            write!(f, "{}", count)?;
        }
        Ok(())
    }
}

/// Unvalidated wire form; deserializing a `RuleSet` goes through `RuleSet::new`.
#[derive(Deserialize)]
struct RawRuleSet {
    survive_counts: Vec<u8>,
    birth_counts: Vec<u8>,
}

impl TryFrom<RawRuleSet> for RuleSet {
    type Error = WorldError;

    fn try_from(raw: RawRuleSet) -> Result<Self, Self::Error> {
        RuleSet::new(raw.survive_counts, raw.birth_counts)
    }
}

fn validate_counts(
    key: &str,
    values: impl IntoIterator<Item = u8>,
) -> Result<BTreeSet<u8>, WorldError> {
    let counts: BTreeSet<u8> = values.into_iter().collect();
    if counts.is_empty() {
        return Err(WorldError::InvalidRuleSet(format!(
            "rule '{}' has no values",
            key
        )));
    }
    if let Some(&count) = counts.iter().find(|&&c| c > MAX_NEIGHBORS) {
        return Err(WorldError::InvalidRuleSet(format!(
            "rule '{}' count {} exceeds {} neighbors",
            key, count, MAX_NEIGHBORS
        )));
    }
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topology_tags() {
        assert_eq!("flat".parse::<Topology>(), Ok(Topology::Flat));
        assert_eq!(" Toroidal ".parse::<Topology>(), Ok(Topology::Spherical));
        assert_eq!("ESFERICO".parse::<Topology>(), Ok(Topology::Spherical));
        assert!(matches!(
            "hexagonal".parse::<Topology>(),
            Err(WorldError::InvalidTopology(_))
        ));

        for topology in Topology::ALL {
            assert_eq!(topology.as_str().parse::<Topology>(), Ok(topology));
        }
    }

    #[test]
    fn test_default_rules() {
        let rules = RuleSet::default();
        assert!(rules.is_birth(3));
        assert!(!rules.is_birth(2));
        assert!(rules.is_survival(2));
        assert!(rules.is_survival(3));
        assert!(!rules.is_survival(4));
        // 3 both births and keeps a cell; birth answers first either way
        assert_eq!(rules.overlapping_counts(), vec![3]);
        assert_eq!(rules.to_string(), "B3/S23");
    }

    #[test]
    fn test_named_rules_fill_missing_entries() {
        let rules = RuleSet::from_named([(BIRTH_KEY, vec![3, 6])]).unwrap();
        assert_eq!(rules.to_string(), "B36/S23");
        assert_eq!(rules.named(SURVIVE_KEY).unwrap().len(), 2);
    }

    #[test]
    fn test_named_rules_reject_bad_entries() {
        let empty = RuleSet::from_named([(SURVIVE_KEY, Vec::<u8>::new())]);
        assert!(matches!(empty, Err(WorldError::InvalidRuleSet(_))));

        let unknown = RuleSet::from_named([("decay", vec![1])]);
        assert!(matches!(unknown, Err(WorldError::InvalidRuleSet(_))));

        let too_many = RuleSet::new([2, 9], [3]);
        assert!(matches!(too_many, Err(WorldError::InvalidRuleSet(_))));

        assert!(matches!(
            RuleSet::default().named("ValoresRenacer"),
            Err(WorldError::InvalidRuleSet(_))
        ));
    }

    #[test]
    fn test_deserialize_validates_counts() {
        let bad = serde_json::from_str::<RuleSet>(r#"{"survive_counts":[],"birth_counts":[9]}"#);
        assert!(bad.is_err());

        let over = serde_json::from_str::<RuleSet>(r#"{"survive_counts":[2,3],"birth_counts":[9]}"#);
        assert!(over.is_err());

        let rules = RuleSet::new([1, 5], [3, 6]).unwrap();
        let json = serde_json::to_string(&rules).unwrap();
        assert_eq!(serde_json::from_str::<RuleSet>(&json).unwrap(), rules);
    }

    #[test]
    fn test_overlap_is_legal() {
        let rules = RuleSet::new([3], [3]).unwrap();
        assert_eq!(rules.overlapping_counts(), vec![3]);
    }
}
