//! New World of Darkness pools: d10s, successes on 8+, n-again explosion.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::format::count_noun;
use crate::limits::{MAX_EXPLOSION_GENERATIONS, MAX_ROLLS};
use crate::source::RandomSource;

/// Outcome of `6w`, `6w9`, or `6w-`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WodOutcome {
    /// Dice in the pool.
    pub pool: u32,
    /// Explosion threshold after normalization (8, 9, or 10); `None` when
    /// explosion is off.
    pub again: Option<u32>,
    /// Successes scored.
    pub successes: u32,
}

impl std::fmt::Display for WodOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}", self.pool)?;
        match self.again {
            None => write!(f, ", not exploding")?,
            Some(threshold) if threshold != 10 => write!(f, ", {threshold}-again")?,
            Some(_) => {}
        }
        write!(f, ") ")?;
        if self.successes > 0 {
            write!(f, "{}", count_noun(self.successes, "success", "successes"))
        } else {
            write!(f, "FAIL")
        }
    }
}

/// Evaluate a World of Darkness pool. Explosion thresholds outside 8–10
/// fall back to ten-again.
pub fn evaluate(
    pool: u32,
    again: Option<u32>,
    source: &mut dyn RandomSource,
) -> EngineResult<Option<WodOutcome>> {
    if !(1..=MAX_ROLLS).contains(&pool) {
        return Ok(None);
    }
    let again = again.map(|threshold| {
        if (8..=10).contains(&threshold) {
            threshold
        } else {
            10
        }
    });
    let faces = source.draw(pool as usize, 10);
    debug!(?faces, "pool");
    let mut successes = faces.iter().filter(|&&face| face >= 8).count() as u32;
    if let Some(threshold) = again {
        for &face in &faces {
            if face >= threshold {
                successes += explode_chain(threshold, source)?;
            }
        }
    }
    Ok(Some(WodOutcome {
        pool,
        again,
        successes,
    }))
}

/// Successes scored by one exploding die: keep drawing while the new face
/// meets the explosion threshold, counting each 8+ along the way.
fn explode_chain(threshold: u32, source: &mut dyn RandomSource) -> EngineResult<u32> {
    let mut successes = 0;
    let mut generations = 0;
    loop {
        generations += 1;
        if generations > MAX_EXPLOSION_GENERATIONS {
            return Err(EngineError::ExplosionOverflow);
        }
        let face = source.draw(1, 10)[0];
        debug!(face, "again");
        if face >= 8 {
            successes += 1;
        }
        if face < threshold {
            return Ok(successes);
        }
    }
}
