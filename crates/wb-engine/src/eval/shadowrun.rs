//! Shadowrun-family pools: basic, exploding, and extended tests.
//!
//! Six-sided pools. A die showing 5 or 6 is a hit; the roll glitches when
//! at least half the pool (rounded up) shows 1s; a glitch with no hits at
//! all is a critical glitch.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::format::count_noun;
use crate::limits::{MAX_DICE, MAX_EXPLOSION_GENERATIONS, MAX_EXTENDED_PASSES, MAX_ROLLS};
use crate::source::RandomSource;

/// Outcome of a basic or exploding pool roll.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolOutcome {
    /// Dice in the pool.
    pub pool: u32,
    /// Whether sixes exploded into extra dice.
    pub exploding: bool,
    /// Hits scored.
    pub hits: u32,
    /// Whether the roll glitched.
    pub glitch: bool,
}

impl std::fmt::Display for PoolOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let exploding = if self.exploding { ", exploding" } else { "" };
        if self.hits > 0 {
            let glitch = if self.glitch { ", glitch" } else { "" };
            write!(
                f,
                "(pool {}{}) {}{}",
                self.pool,
                exploding,
                count_noun(self.hits, "hit", "hits"),
                glitch
            )
        } else if self.glitch {
            write!(f, "(pool {}{}) critical glitch!", self.pool, exploding)
        } else {
            write!(f, "(pool {}{}) 0 hits", self.pool, exploding)
        }
    }
}

/// Outcome of an extended test: passes accumulate hits until a threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtendedOutcome {
    /// Dice rolled per pass.
    pub pool: u32,
    /// Accumulated hits required.
    pub threshold: u32,
    /// Hits accumulated when the test ended.
    pub hits: u32,
    /// Passes rolled.
    pub passes: u32,
    /// Pass on which a zero-hit glitch ended the test early, if any.
    pub critical_glitch: Option<u32>,
}

impl std::fmt::Display for ExtendedOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.critical_glitch {
            Some(pass) => write!(
                f,
                "(pool {}, threshold {}) critical glitch on pass {}, {}",
                self.pool,
                self.threshold,
                pass,
                count_noun(self.hits, "hit", "hits")
            ),
            None => write!(
                f,
                "(pool {}, threshold {}) {} in {}",
                self.pool,
                self.threshold,
                count_noun(self.hits, "hit", "hits"),
                count_noun(self.passes, "pass", "passes")
            ),
        }
    }
}

/// Roll a basic pool.
pub fn basic(pool: u32, source: &mut dyn RandomSource) -> Option<PoolOutcome> {
    if !(1..=MAX_ROLLS).contains(&pool) {
        return None;
    }
    let faces = source.draw(pool as usize, 6);
    debug!(?faces, "pool");
    Some(score(pool, &faces, false))
}

/// Roll an exploding pool: every 6 buys one more die. New dice showing 5
/// or 6 join the displayed pool (so explosion 1s never count toward the
/// glitch), and new 6s explode again.
pub fn exploding(pool: u32, source: &mut dyn RandomSource) -> EngineResult<Option<PoolOutcome>> {
    if !(1..=MAX_ROLLS).contains(&pool) {
        return Ok(None);
    }
    let mut faces = source.draw(pool as usize, 6);
    debug!(?faces, "pool");
    let mut sixes = count(&faces, 6);
    let mut generations = 0;
    while sixes > 0 {
        generations += 1;
        if generations > MAX_EXPLOSION_GENERATIONS {
            return Err(EngineError::ExplosionOverflow);
        }
        let extra = source.draw(sixes as usize, 6);
        debug!(?extra, "exploded");
        sixes = count(&extra, 6);
        faces.extend(extra.into_iter().filter(|&face| face >= 5));
    }
    Ok(Some(score(pool, &faces, true)))
}

/// Run an extended test: roll passes until the accumulated hits reach the
/// threshold. A pass that glitches with zero hits is a critical glitch
/// and ends the test early with partial progress.
pub fn extended(
    pool: u32,
    threshold: u32,
    source: &mut dyn RandomSource,
) -> EngineResult<Option<ExtendedOutcome>> {
    if !(1..=MAX_DICE).contains(&pool) || !(1..=MAX_DICE).contains(&threshold) {
        return Ok(None);
    }
    let mut hits = 0;
    let mut passes = 0;
    loop {
        if passes >= MAX_EXTENDED_PASSES {
            return Err(EngineError::PassOverflow);
        }
        passes += 1;
        let faces = source.draw(pool as usize, 6);
        debug!(pass = passes, ?faces, "extended pass");
        let pass_hits = faces.iter().filter(|&&face| face >= 5).count() as u32;
        let glitch = count(&faces, 1) >= pool.div_ceil(2);
        hits += pass_hits;
        if glitch && pass_hits == 0 {
            return Ok(Some(ExtendedOutcome {
                pool,
                threshold,
                hits,
                passes,
                critical_glitch: Some(passes),
            }));
        }
        if hits >= threshold {
            return Ok(Some(ExtendedOutcome {
                pool,
                threshold,
                hits,
                passes,
                critical_glitch: None,
            }));
        }
    }
}

fn count(faces: &[u32], value: u32) -> u32 {
    faces.iter().filter(|&&face| face == value).count() as u32
}

fn score(pool: u32, faces: &[u32], exploding: bool) -> PoolOutcome {
    let hits = faces.iter().filter(|&&face| face >= 5).count() as u32;
    PoolOutcome {
        pool,
        exploding,
        hits,
        glitch: count(faces, 1) >= pool.div_ceil(2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ScriptedSource;

    #[test]
    fn hits_without_glitch() {
        let mut source = ScriptedSource::new([6, 6, 1]);
        let outcome = basic(3, &mut source).unwrap();
        assert_eq!(outcome.to_string(), "(pool 3) 2 hits");
    }

    #[test]
    fn single_hit_is_singular() {
        let mut source = ScriptedSource::new([5, 2, 3]);
        let outcome = basic(3, &mut source).unwrap();
        assert_eq!(outcome.to_string(), "(pool 3) 1 hit");
    }

    #[test]
    fn glitch_alongside_hits() {
        let mut source = ScriptedSource::new([1, 1, 6, 3]);
        let outcome = basic(4, &mut source).unwrap();
        assert_eq!(outcome.to_string(), "(pool 4) 1 hit, glitch");
    }

    #[test]
    fn critical_glitch_when_no_hits() {
        let mut source = ScriptedSource::new([1, 1]);
        let outcome = basic(2, &mut source).unwrap();
        assert_eq!(outcome.to_string(), "(pool 2) critical glitch!");
    }

    #[test]
    fn zero_hits_without_glitch() {
        let mut source = ScriptedSource::new([2, 3, 4]);
        let outcome = basic(3, &mut source).unwrap();
        assert_eq!(outcome.to_string(), "(pool 3) 0 hits");
    }

    #[test]
    fn pool_out_of_range_yields_nothing() {
        let mut source = ScriptedSource::new([]);
        assert!(basic(0, &mut source).is_none());
        assert!(basic(31, &mut source).is_none());
    }

    #[test]
    fn exploding_sixes_chain() {
        // 6 explodes into 6, which explodes into 3 (dropped, below 5).
        let mut source = ScriptedSource::new([6, 4, 6, 3]);
        let outcome = exploding(2, &mut source).unwrap().unwrap();
        assert_eq!(outcome.to_string(), "(pool 2, exploding) 2 hits");
    }

    #[test]
    fn explosion_ones_do_not_glitch() {
        // Two rolled 1s would glitch a pool of 3; the exploded 1 is
        // dropped and must not.
        let mut source = ScriptedSource::new([6, 2, 1, 1]);
        let outcome = exploding(3, &mut source).unwrap().unwrap();
        assert_eq!(outcome.to_string(), "(pool 3, exploding) 1 hit");
    }

    #[test]
    fn runaway_explosion_is_fatal() {
        let mut source = ScriptedSource::new(vec![6; 100]);
        assert!(matches!(
            exploding(1, &mut source),
            Err(EngineError::ExplosionOverflow)
        ));
    }

    #[test]
    fn extended_accumulates_until_threshold() {
        let mut source = ScriptedSource::new([6, 5, 3, 6]);
        let outcome = extended(2, 3, &mut source).unwrap().unwrap();
        assert_eq!(
            outcome.to_string(),
            "(pool 2, threshold 3) 3 hits in 2 passes"
        );
    }

    #[test]
    fn extended_single_pass() {
        let mut source = ScriptedSource::new([6, 5]);
        let outcome = extended(2, 2, &mut source).unwrap().unwrap();
        assert_eq!(
            outcome.to_string(),
            "(pool 2, threshold 2) 2 hits in 1 pass"
        );
    }

    #[test]
    fn extended_critical_glitch_stops_early() {
        let mut source = ScriptedSource::new([6, 5, 1, 1]);
        let outcome = extended(2, 5, &mut source).unwrap().unwrap();
        assert_eq!(
            outcome.to_string(),
            "(pool 2, threshold 5) critical glitch on pass 2, 2 hits"
        );
    }

    #[test]
    fn extended_out_of_range_yields_nothing() {
        let mut source = ScriptedSource::new([]);
        assert!(extended(0, 5, &mut source).unwrap().is_none());
        assert!(extended(1001, 5, &mut source).unwrap().is_none());
        assert!(extended(5, 0, &mut source).unwrap().is_none());
    }

    #[test]
    fn extended_pass_cap_is_fatal() {
        let faces = vec![2; MAX_EXTENDED_PASSES as usize];
        let mut source = ScriptedSource::new(faces);
        assert!(matches!(
            extended(1, 5, &mut source),
            Err(EngineError::PassOverflow)
        ));
    }
}
