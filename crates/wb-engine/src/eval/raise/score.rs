//! Scored dice: raw faces with lash / joie de vivre remapping.

use serde::{Deserialize, Serialize};

/// Value remapping applied when scoring raw faces.
///
/// Lash is checked first: a face below the floor scores zero even when
/// joie de vivre would have promoted it.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScoreRules {
    /// Faces below this floor score zero (0 disables the rule).
    pub lash_floor: u32,
    /// Faces at or below this rank score ten (0 disables the rule).
    pub joie_target: u32,
}

/// One ten-sided die with its scored value and explosion pedigree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredDie {
    /// The face actually rolled.
    pub raw: u32,
    /// The value it scores after remapping.
    pub value: u32,
    /// Explosion generations that produced this die (0 = original roll).
    pub explode_depth: u32,
}

impl ScoredDie {
    /// Score a raw face under the given rules.
    pub fn score(raw: u32, explode_depth: u32, rules: ScoreRules) -> Self {
        let value = if raw < rules.lash_floor {
            0
        } else if raw <= rules.joie_target {
            10
        } else {
            raw
        };
        Self {
            raw,
            value,
            explode_depth,
        }
    }
}

impl std::fmt::Display for ScoredDie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.raw == self.value {
            write!(f, "{}", self.raw)
        } else {
            write!(f, "{} [{}]", self.value, self.raw)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_faces_keep_their_value() {
        let die = ScoredDie::score(7, 0, ScoreRules::default());
        assert_eq!(die.value, 7);
        assert_eq!(die.to_string(), "7");
    }

    #[test]
    fn lash_zeroes_low_faces() {
        let rules = ScoreRules {
            lash_floor: 3,
            joie_target: 0,
        };
        assert_eq!(ScoredDie::score(2, 0, rules).value, 0);
        assert_eq!(ScoredDie::score(3, 0, rules).value, 3);
        assert_eq!(ScoredDie::score(2, 0, rules).to_string(), "0 [2]");
    }

    #[test]
    fn joie_de_vivre_promotes_low_faces() {
        let rules = ScoreRules {
            lash_floor: 0,
            joie_target: 2,
        };
        assert_eq!(ScoredDie::score(1, 0, rules).value, 10);
        assert_eq!(ScoredDie::score(2, 0, rules).to_string(), "10 [2]");
        assert_eq!(ScoredDie::score(3, 0, rules).value, 3);
    }

    #[test]
    fn lash_wins_over_joie_de_vivre() {
        let rules = ScoreRules {
            lash_floor: 3,
            joie_target: 4,
        };
        assert_eq!(ScoredDie::score(2, 0, rules).value, 0);
        assert_eq!(ScoredDie::score(4, 0, rules).value, 10);
    }
}
