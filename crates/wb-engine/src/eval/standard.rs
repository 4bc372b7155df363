//! Standard and repeated d-notation rolls.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::format::{format_mod, join_comma};
use crate::limits::{MAX_DICE, MAX_ROLLS, MAX_SIDES, MIN_SIDES};
use crate::source::RandomSource;

/// Outcome of `2d6+3` or `3#2d6+3`: one sum per repetition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardOutcome {
    /// Dice per roll.
    pub dice: u32,
    /// Sides per die.
    pub sides: u32,
    /// Modifier added to each sum.
    pub modifier: i32,
    /// The sums, one per repetition.
    pub sums: Vec<i64>,
}

impl std::fmt::Display for StandardOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}d{}{}] {}",
            self.dice,
            self.sides,
            format_mod(self.modifier),
            join_comma(&self.sums)
        )
    }
}

/// Roll `dice` × d`sides` once, adding the modifier.
pub fn single(
    dice: u32,
    sides: u32,
    modifier: i32,
    source: &mut dyn RandomSource,
) -> Option<StandardOutcome> {
    repeated(1, dice, sides, modifier, source)
}

/// Roll the same combination `repeats` times, one independent sum each.
pub fn repeated(
    repeats: u32,
    dice: u32,
    sides: u32,
    modifier: i32,
    source: &mut dyn RandomSource,
) -> Option<StandardOutcome> {
    if !(1..=MAX_ROLLS).contains(&repeats)
        || !(1..=MAX_DICE).contains(&dice)
        || !(MIN_SIDES..=MAX_SIDES).contains(&sides)
    {
        return None;
    }
    let sums = (0..repeats)
        .map(|_| roll_sum(dice, sides, modifier, source))
        .collect();
    Some(StandardOutcome {
        dice,
        sides,
        modifier,
        sums,
    })
}

/// Sum of one roll of `dice` × d`sides`, plus the modifier.
pub(crate) fn roll_sum(dice: u32, sides: u32, modifier: i32, source: &mut dyn RandomSource) -> i64 {
    let faces = source.draw(dice as usize, sides);
    debug!(?faces, "rolled");
    i64::from(modifier) + faces.into_iter().map(i64::from).sum::<i64>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ScriptedSource;

    #[test]
    fn sums_draws_and_modifier() {
        let mut source = ScriptedSource::new([4, 5]);
        let outcome = single(2, 6, 3, &mut source).unwrap();
        assert_eq!(outcome.to_string(), "[2d6+3] 12");
    }

    #[test]
    fn omitted_count_rolls_one_die() {
        let mut source = ScriptedSource::new([17]);
        let outcome = single(1, 20, 0, &mut source).unwrap();
        assert_eq!(outcome.to_string(), "[1d20] 17");
    }

    #[test]
    fn negative_modifier_keeps_its_sign() {
        let mut source = ScriptedSource::new([2, 2]);
        let outcome = single(2, 10, -3, &mut source).unwrap();
        assert_eq!(outcome.to_string(), "[2d10-3] 1");
    }

    #[test]
    fn repeated_rolls_are_independent_sums() {
        let mut source = ScriptedSource::new([4, 5, 1, 1, 6, 6]);
        let outcome = repeated(3, 2, 6, 2, &mut source).unwrap();
        assert_eq!(outcome.to_string(), "[2d6+2] 11, 4, 14");
    }

    #[test]
    fn out_of_range_yields_nothing() {
        let mut source = ScriptedSource::new([]);
        assert!(single(2000, 6, 0, &mut source).is_none());
        assert!(single(0, 6, 0, &mut source).is_none());
        assert!(single(2, 1, 0, &mut source).is_none());
        assert!(single(2, 101, 0, &mut source).is_none());
        assert!(repeated(31, 2, 6, 0, &mut source).is_none());
        assert!(repeated(0, 2, 6, 0, &mut source).is_none());
    }

    proptest::proptest! {
        #[test]
        fn sum_stays_within_bounds(
            dice in 1u32..=50,
            sides in 2u32..=100,
            modifier in -20i32..=20,
            seed in proptest::arbitrary::any::<u64>(),
        ) {
            let mut source = crate::source::DefaultSource::seeded(seed);
            let outcome = single(dice, sides, modifier, &mut source).unwrap();
            let sum = outcome.sums[0];
            let low = i64::from(dice) + i64::from(modifier);
            let high = i64::from(dice) * i64::from(sides) + i64::from(modifier);
            proptest::prop_assert!((low..=high).contains(&sum));
        }
    }
}
