//! The 2nd-edition raise roll: exploding d10s greedily partitioned into
//! raises against a target sum.
//!
//! Skill rank drives the configuration: rank 3 rerolls the lowest die
//! once, rank 4 lifts the target to 15 but doubles each raise, rank 5
//! always explodes. A raise is assembled largest-die-first; when the pool
//! cannot complete the full target but has already accumulated ten, the
//! "ten still counts" rule closes the raise at multiplier one.

mod bucket;
mod score;

pub use score::{ScoreRules, ScoredDie};

use serde::{Deserialize, Serialize};
use tracing::debug;

use bucket::DiceBucket;

use crate::error::{EngineError, EngineResult};
use crate::format::{count_noun, join_comma};
use crate::limits::{MAX_EXPLOSION_GENERATIONS, MAX_ROLLS};
use crate::source::RandomSource;

/// Default sum a raise must reach.
const DEFAULT_TARGET: u32 = 10;

/// Target for skill rank 4 and above.
const HIGH_SKILL_TARGET: u32 = 15;

/// Full configuration of one raise roll.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RaiseConfig {
    /// Sum a raise must reach.
    pub raise_target: u32,
    /// Raises a completed target is worth.
    pub raises_per_target: u32,
    /// Whether tens explode into extra dice.
    pub explode: bool,
    /// Whether the lowest die is rerolled once.
    pub reroll_lowest: bool,
    /// Value remapping applied to every rolled face.
    pub rules: ScoreRules,
}

impl RaiseConfig {
    /// Derive the configuration for a skill rank (0–5) and token flags.
    pub fn for_skill(skill: u32, explode: bool, lash_floor: u32, joie_de_vivre: bool) -> Self {
        Self {
            raise_target: if skill >= 4 {
                HIGH_SKILL_TARGET
            } else {
                DEFAULT_TARGET
            },
            raises_per_target: if skill >= 4 { 2 } else { 1 },
            explode: explode || skill >= 5,
            reroll_lowest: skill >= 3,
            rules: ScoreRules {
                lash_floor,
                joie_target: if joie_de_vivre { skill } else { 0 },
            },
        }
    }

    /// Whether an accumulated sum of ten still closes a raise at
    /// multiplier one when the pool cannot complete the full target.
    fn ten_still_raises(&self) -> bool {
        self.raise_target == 10 || self.raises_per_target != 1
    }
}

/// One assembled raise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Raise {
    /// Raises this group is worth.
    pub multiplier: u32,
    /// Member dice in pick order.
    pub members: Vec<ScoredDie>,
}

impl Raise {
    /// Sum of member values.
    pub fn sum(&self) -> u32 {
        self.members.iter().map(|die| die.value).sum()
    }
}

impl std::fmt::Display for Raise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let members = self
            .members
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" + ");
        if self.multiplier == 1 {
            write!(f, "({members})")
        } else {
            write!(f, "{}({members})", "*".repeat(self.multiplier as usize))
        }
    }
}

/// Outcome of a raise roll: a partition of every die actually rolled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaiseOutcome {
    /// Raises in discovery order (highest-value first by construction).
    pub raises: Vec<Raise>,
    /// Dice left over, highest value first.
    pub unused: Vec<ScoredDie>,
    /// Dice spent by the reroll rule, highest value first.
    pub discarded: Vec<ScoredDie>,
}

impl RaiseOutcome {
    /// Total raises scored: the sum of each raise's multiplier.
    pub fn total(&self) -> u32 {
        self.raises.iter().map(|raise| raise.multiplier).sum()
    }
}

impl std::fmt::Display for RaiseOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let total = self.total();
        if total == 0 {
            write!(f, "0 raises")?;
        } else {
            let raises = self
                .raises
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            write!(f, "{}: {raises}", count_noun(total, "raise", "raises"))?;
        }
        if !self.unused.is_empty() {
            write!(f, ", unused: {}", join_comma(&self.unused))?;
        }
        if !self.discarded.is_empty() {
            write!(f, ", discarded: {}", join_comma(&self.discarded))?;
        }
        Ok(())
    }
}

/// Evaluate a raise-roll token.
pub fn evaluate(
    dice: u32,
    skill: u32,
    explode: bool,
    lash: u32,
    joie_de_vivre: bool,
    source: &mut dyn RandomSource,
) -> EngineResult<Option<RaiseOutcome>> {
    if !(1..=MAX_ROLLS).contains(&dice) || skill > 5 {
        return Ok(None);
    }
    let config = RaiseConfig::for_skill(skill, explode, lash, joie_de_vivre);
    roll_and_count(dice, &config, source).map(Some)
}

/// Roll `dice` d10s under the configuration and assemble raises.
pub fn roll_and_count(
    dice: u32,
    config: &RaiseConfig,
    source: &mut dyn RandomSource,
) -> EngineResult<RaiseOutcome> {
    let mut pool = roll_scored(dice as usize, config, source)?;
    debug!(?pool, "scored dice");
    let mut discarded = if config.reroll_lowest {
        reroll_lowest(&mut pool, config, source)?
    } else {
        Vec::new()
    };
    discarded.sort_by(|a, b| b.value.cmp(&a.value));
    let (raises, unused) = aggregate(pool, config);
    Ok(RaiseOutcome {
        raises,
        unused,
        discarded,
    })
}

/// Roll with generational explosion: every 10 in a generation buys one
/// die in the next, tagged with an incremented depth.
fn roll_scored(
    count: usize,
    config: &RaiseConfig,
    source: &mut dyn RandomSource,
) -> EngineResult<Vec<ScoredDie>> {
    let mut dice = Vec::new();
    let mut pending = count;
    let mut depth = 0;
    while pending > 0 {
        if depth > MAX_EXPLOSION_GENERATIONS {
            return Err(EngineError::ExplosionOverflow);
        }
        let faces = source.draw(pending, 10);
        pending = if config.explode {
            faces.iter().filter(|&&face| face == 10).count()
        } else {
            0
        };
        dice.extend(
            faces
                .into_iter()
                .map(|raw| ScoredDie::score(raw, depth, config.rules)),
        );
        depth += 1;
    }
    Ok(dice)
}

/// The reroll rule: one replacement chain competes with the first-rolled
/// lowest-valued die. Whichever loses is returned as discarded — both
/// candidates are always spent, never silently dropped.
fn reroll_lowest(
    pool: &mut Vec<ScoredDie>,
    config: &RaiseConfig,
    source: &mut dyn RandomSource,
) -> EngineResult<Vec<ScoredDie>> {
    let replacement = roll_scored(1, config, source)?;
    debug!(?replacement, "reroll candidate");
    let replacement_value: u32 = replacement.iter().map(|die| die.value).sum();
    let Some(lowest) = pool
        .iter()
        .enumerate()
        .min_by_key(|(_, die)| die.value)
        .map(|(index, _)| index)
    else {
        return Ok(replacement);
    };
    if replacement_value > pool[lowest].value {
        let spent = pool.remove(lowest);
        pool.extend(replacement);
        Ok(vec![spent])
    } else {
        Ok(replacement)
    }
}

/// Greedy partition: assemble one raise at a time, always requesting the
/// largest die that fits the remaining gap and falling back to the
/// smallest die that overshoots it. A raise that cannot be completed is
/// returned to the pool whole and ends the aggregation.
fn aggregate(pool: Vec<ScoredDie>, config: &RaiseConfig) -> (Vec<Raise>, Vec<ScoredDie>) {
    let mut bucket = DiceBucket::new(pool);
    let mut raises = Vec::new();
    'raises: loop {
        let mut members: Vec<ScoredDie> = Vec::new();
        let mut sum = 0;
        let mut multiplier = config.raises_per_target;
        loop {
            let gap = config.raise_target - sum;
            let pick = bucket
                .take_at_most(gap)
                .or_else(|| bucket.take_smallest_above(gap));
            match pick {
                Some(die) => {
                    sum += die.value;
                    members.push(die);
                    if sum >= config.raise_target {
                        break;
                    }
                }
                None if config.ten_still_raises() && sum >= 10 => {
                    multiplier = 1;
                    break;
                }
                None => {
                    for die in members {
                        bucket.put(die);
                    }
                    break 'raises;
                }
            }
        }
        raises.push(Raise { multiplier, members });
    }
    (raises, bucket.drain_descending())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ScriptedSource;

    fn plain_config() -> RaiseConfig {
        RaiseConfig::for_skill(0, false, 0, false)
    }

    #[test]
    fn skill_rank_drives_the_configuration() {
        let base = RaiseConfig::for_skill(0, false, 0, false);
        assert_eq!(base.raise_target, 10);
        assert_eq!(base.raises_per_target, 1);
        assert!(!base.explode);
        assert!(!base.reroll_lowest);

        assert!(RaiseConfig::for_skill(3, false, 0, false).reroll_lowest);

        let master = RaiseConfig::for_skill(4, false, 0, false);
        assert_eq!(master.raise_target, 15);
        assert_eq!(master.raises_per_target, 2);
        assert!(!master.explode);

        assert!(RaiseConfig::for_skill(5, false, 0, false).explode);
        assert!(RaiseConfig::for_skill(0, true, 0, false).explode);
    }

    #[test]
    fn exploding_ten_leaves_the_extra_die_unused() {
        let config = RaiseConfig::for_skill(0, true, 0, false);
        let mut source = ScriptedSource::new([10, 5]);
        let outcome = roll_and_count(1, &config, &mut source).unwrap();
        assert_eq!(outcome.to_string(), "1 raise: (10), unused: 5");
        assert_eq!(outcome.raises[0].members[0].explode_depth, 0);
        assert_eq!(outcome.unused[0].explode_depth, 1);
    }

    #[test]
    fn raises_pair_large_and_small_dice() {
        let mut source = ScriptedSource::new([4, 6, 9, 1]);
        let outcome = roll_and_count(4, &plain_config(), &mut source).unwrap();
        // 9+1 and 6+4 both reach ten exactly.
        assert_eq!(outcome.to_string(), "2 raises: (9 + 1), (6 + 4)");
    }

    #[test]
    fn overflow_pick_takes_the_smallest_die_above_the_gap() {
        // After the 9 the gap is 1: nothing fits, so the smallest die
        // above the gap (7, not 8) overshoots and closes the raise.
        let mut source = ScriptedSource::new([9, 8, 7]);
        let outcome = roll_and_count(3, &plain_config(), &mut source).unwrap();
        assert_eq!(outcome.to_string(), "1 raise: (9 + 7), unused: 8");
    }

    #[test]
    fn incomplete_raise_returns_its_dice_unused() {
        let mut source = ScriptedSource::new([4, 3]);
        let outcome = roll_and_count(2, &plain_config(), &mut source).unwrap();
        assert_eq!(outcome.total(), 0);
        assert_eq!(outcome.to_string(), "0 raises, unused: 4, 3");
    }

    #[test]
    fn lash_zeroes_are_reported_unused() {
        let config = RaiseConfig::for_skill(0, false, 3, false);
        let mut source = ScriptedSource::new([8, 2, 2]);
        let outcome = roll_and_count(3, &config, &mut source).unwrap();
        assert_eq!(outcome.to_string(), "0 raises, unused: 8, 0 [2], 0 [2]");
    }

    #[test]
    fn joie_de_vivre_promotes_and_shows_the_raw_face() {
        let config = RaiseConfig::for_skill(2, false, 0, true);
        let mut source = ScriptedSource::new([2, 7]);
        let outcome = roll_and_count(2, &config, &mut source).unwrap();
        assert_eq!(outcome.to_string(), "1 raise: (10 [2]), unused: 7");
    }

    #[test]
    fn high_skill_doubles_raises_against_fifteen() {
        let config = RaiseConfig::for_skill(4, false, 0, false);
        // Rank 4 also rerolls: the replacement 1 loses to the lowest die.
        let mut source = ScriptedSource::new([10, 8, 7, 1]);
        let outcome = roll_and_count(3, &config, &mut source).unwrap();
        assert_eq!(outcome.to_string(), "2 raises: **(10 + 7), unused: 8, discarded: 1");
    }

    #[test]
    fn ten_fallback_closes_a_short_raise_at_multiplier_one() {
        let config = RaiseConfig {
            raise_target: 15,
            raises_per_target: 2,
            explode: false,
            reroll_lowest: false,
            rules: ScoreRules::default(),
        };
        let mut source = ScriptedSource::new([10, 4]);
        let outcome = roll_and_count(2, &config, &mut source).unwrap();
        assert_eq!(outcome.to_string(), "1 raise: (10 + 4)");
    }

    #[test]
    fn reroll_keeps_the_better_die() {
        let config = RaiseConfig::for_skill(3, false, 0, false);
        // Pool [9, 2]; replacement 6 beats the 2.
        let mut source = ScriptedSource::new([9, 2, 6]);
        let outcome = roll_and_count(2, &config, &mut source).unwrap();
        assert_eq!(outcome.to_string(), "1 raise: (9 + 6), discarded: 2");
    }

    #[test]
    fn reroll_that_loses_is_discarded() {
        let config = RaiseConfig::for_skill(3, false, 0, false);
        // Pool [9, 5]; replacement 3 loses to the 5.
        let mut source = ScriptedSource::new([9, 5, 3]);
        let outcome = roll_and_count(2, &config, &mut source).unwrap();
        assert_eq!(outcome.to_string(), "1 raise: (9 + 5), discarded: 3");
    }

    #[test]
    fn out_of_range_yields_nothing() {
        let mut source = ScriptedSource::new([]);
        assert!(evaluate(0, 0, false, 0, false, &mut source).unwrap().is_none());
        assert!(evaluate(31, 0, false, 0, false, &mut source).unwrap().is_none());
        assert!(evaluate(5, 6, false, 0, false, &mut source).unwrap().is_none());
    }

    #[test]
    fn runaway_explosion_is_fatal() {
        let config = RaiseConfig::for_skill(0, true, 0, false);
        let mut source = ScriptedSource::new(vec![10; 100]);
        assert!(matches!(
            roll_and_count(1, &config, &mut source),
            Err(EngineError::ExplosionOverflow)
        ));
    }

    proptest::proptest! {
        #[test]
        fn partition_accounts_for_every_die(
            faces in proptest::collection::vec(1u32..=10, 1..=20),
            skill in 0u32..=5,
            lash in 0u32..=5,
            joie in proptest::bool::ANY,
        ) {
            // Explosion off so the script is exactly the pool; the reroll
            // candidate gets one extra face.
            let config = RaiseConfig {
                explode: false,
                ..RaiseConfig::for_skill(skill, false, lash, joie)
            };
            let mut script = faces.clone();
            if config.reroll_lowest {
                script.push(4);
            }
            let mut source = ScriptedSource::new(script.clone());
            let outcome = roll_and_count(faces.len() as u32, &config, &mut source).unwrap();

            let mut seen: Vec<u32> = outcome
                .raises
                .iter()
                .flat_map(|raise| raise.members.iter())
                .chain(outcome.unused.iter())
                .chain(outcome.discarded.iter())
                .map(|die| die.raw)
                .collect();
            seen.sort_unstable();
            let mut rolled = script;
            rolled.sort_unstable();
            proptest::prop_assert_eq!(seen, rolled);

            for raise in &outcome.raises {
                if raise.multiplier == config.raises_per_target {
                    proptest::prop_assert!(raise.sum() >= config.raise_target);
                } else {
                    proptest::prop_assert!(raise.sum() >= 10);
                }
            }
        }
    }
}
