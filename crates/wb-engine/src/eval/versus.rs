//! Percentile rolls against an arithmetic threshold.

use serde::{Deserialize, Serialize};
use tracing::debug;
use wb_notation::threshold;

use crate::format::join_comma;
use crate::limits::MAX_ROLLS;
use crate::source::RandomSource;

/// Outcome of `vs(20+30-10)`, optionally repeated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersusOutcome {
    /// The evaluated threshold.
    pub threshold: i64,
    /// Raw d100 faces.
    pub rolls: Vec<u32>,
    /// `threshold - roll`, one margin per roll.
    pub margins: Vec<i64>,
}

impl std::fmt::Display for VersusOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({} vs {})",
            join_comma(&self.margins),
            join_comma(&self.rolls),
            self.threshold
        )
    }
}

/// Evaluate a versus roll. Malformed threshold expressions and
/// out-of-range repeat counts yield no result.
pub fn evaluate(repeats: u32, expr: &str, source: &mut dyn RandomSource) -> Option<VersusOutcome> {
    if !(1..=MAX_ROLLS).contains(&repeats) {
        return None;
    }
    let threshold = threshold::evaluate(expr)?;
    let rolls = source.draw(repeats as usize, 100);
    debug!(?rolls, threshold, "percentile");
    let margins = rolls.iter().map(|&roll| threshold - i64::from(roll)).collect();
    Some(VersusOutcome {
        threshold,
        rolls,
        margins,
    })
}
