//! Classic 7th Sea keep-rolls: roll ten-sided dice, keep the highest few.
//!
//! A die showing 10 keeps rolling and accumulates its total until a lower
//! face comes up (unless a leading `-` suppressed explosion). Oversized
//! requests are folded down: rolling more than ten dice converts the
//! excess into kept dice, and keeping more than ten converts each excess
//! keep into a flat +10.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::format::{format_mod, join_comma};
use crate::limits::{MAX_EXPLOSION_GENERATIONS, MAX_ROLLS};
use crate::source::RandomSource;

/// One repetition of a keep-roll.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeepRound {
    /// Kept die totals, highest first.
    pub kept: Vec<u32>,
    /// Unkept die totals, highest first.
    pub unkept: Vec<u32>,
    /// Sum of kept dice plus modifier.
    pub total: i64,
}

/// Outcome of `4k2+1`, optionally repeated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeepOutcome {
    /// Dice rolled per round, after normalization.
    pub rolls: u32,
    /// Dice kept per round, after normalization.
    pub keep: u32,
    /// Modifier, after normalization.
    pub modifier: i32,
    /// Whether tens exploded.
    pub explode: bool,
    /// Whether unkept dice are shown.
    pub show_unkept: bool,
    /// One entry per repetition.
    pub rounds: Vec<KeepRound>,
}

impl std::fmt::Display for KeepOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let exploding = if self.explode { "" } else { ", not exploding" };
        write!(
            f,
            "[{}k{}{}{}] ",
            self.rolls,
            self.keep,
            format_mod(self.modifier),
            exploding
        )?;
        let rounds: Vec<String> = self
            .rounds
            .iter()
            .map(|round| {
                let mut rendered = format!("({}) {}", round.total, join_comma(&round.kept));
                if self.show_unkept {
                    rendered.push_str(&format!(" | {}", join_comma(&round.unkept)));
                }
                rendered
            })
            .collect();
        write!(f, "{}", rounds.join("; "))
    }
}

/// Evaluate a keep-roll: `repeats` independent rounds of rolling `rolls`
/// d10s and keeping the top `keep`.
pub fn evaluate(
    repeats: u32,
    rolls: u32,
    keep: u32,
    modifier: i32,
    explode: bool,
    unkept_marker: bool,
    source: &mut dyn RandomSource,
) -> EngineResult<Option<KeepOutcome>> {
    if !(1..=MAX_ROLLS).contains(&repeats)
        || !(1..=MAX_ROLLS).contains(&rolls)
        || !(1..=MAX_ROLLS).contains(&keep)
    {
        return Ok(None);
    }
    let mut rolls = rolls;
    let mut keep = keep.min(rolls);
    let mut modifier = modifier;
    if rolls > 10 {
        keep += rolls - 10;
        rolls = 10;
    }
    if keep > 10 {
        modifier += ((keep - 10) * 10) as i32;
        keep = 10;
    }
    let show_unkept = unkept_marker && keep < rolls;

    let mut rounds = Vec::with_capacity(repeats as usize);
    for _ in 0..repeats {
        rounds.push(round(rolls, keep, modifier, explode, source)?);
    }
    Ok(Some(KeepOutcome {
        rolls,
        keep,
        modifier,
        explode,
        show_unkept,
        rounds,
    }))
}

fn round(
    rolls: u32,
    keep: u32,
    modifier: i32,
    explode: bool,
    source: &mut dyn RandomSource,
) -> EngineResult<KeepRound> {
    let mut totals = source.draw(rolls as usize, 10);
    if explode {
        for total in &mut totals {
            if *total == 10 {
                *total += explode_chain(source)?;
            }
        }
    }
    debug!(?totals, "keep-roll dice");
    totals.sort_unstable_by(|a, b| b.cmp(a));
    let unkept = totals.split_off(keep as usize);
    let kept = totals;
    let total = i64::from(modifier) + kept.iter().copied().map(i64::from).sum::<i64>();
    Ok(KeepRound {
        kept,
        unkept,
        total,
    })
}

/// Extra value accumulated by a die that showed 10: keep drawing while
/// the new face is itself a 10.
fn explode_chain(source: &mut dyn RandomSource) -> EngineResult<u32> {
    let mut extra = 0;
    let mut generations = 0;
    loop {
        generations += 1;
        if generations > MAX_EXPLOSION_GENERATIONS {
            return Err(EngineError::ExplosionOverflow);
        }
        let face = source.draw(1, 10)[0];
        extra += face;
        if face < 10 {
            return Ok(extra);
        }
    }
}
