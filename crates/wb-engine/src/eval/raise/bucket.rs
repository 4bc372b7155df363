//! The mutable bucket of dice the aggregator draws from.

use super::score::ScoredDie;

/// Dice stacked by scored value (0–10).
///
/// Equal-valued dice come back most-recently-inserted first, so a fixed
/// random sequence always yields the same partition. Zero-valued (lashed)
/// dice are never picked; they only surface when the bucket is drained.
#[derive(Debug, Default)]
pub(super) struct DiceBucket {
    stacks: [Vec<ScoredDie>; 11],
}

impl DiceBucket {
    pub(super) fn new(dice: Vec<ScoredDie>) -> Self {
        let mut bucket = Self::default();
        for die in dice {
            bucket.put(die);
        }
        bucket
    }

    pub(super) fn put(&mut self, die: ScoredDie) {
        self.stacks[die.value as usize].push(die);
    }

    /// The largest die whose value is at most `cap`.
    pub(super) fn take_at_most(&mut self, cap: u32) -> Option<ScoredDie> {
        (1..=cap.min(10))
            .rev()
            .find_map(|value| self.stacks[value as usize].pop())
    }

    /// The smallest die whose value is above `floor`.
    pub(super) fn take_smallest_above(&mut self, floor: u32) -> Option<ScoredDie> {
        ((floor + 1)..=10).find_map(|value| self.stacks[value as usize].pop())
    }

    /// Remaining dice, zero-valued included, highest value first.
    pub(super) fn drain_descending(&mut self) -> Vec<ScoredDie> {
        let mut dice = Vec::new();
        for stack in self.stacks.iter_mut().rev() {
            dice.append(stack);
        }
        dice
    }
}
