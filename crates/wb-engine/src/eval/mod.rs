//! Evaluators, one per grammar family.
//!
//! Each evaluator validates its own range bounds and returns no result
//! for a token that asks too much — the dispatcher moves on silently.
//! Only the defensive caps (explosion generations, extended-test passes)
//! surface as errors.

pub mod keep;
pub mod raise;
pub mod shadowrun;
pub mod standard;
pub mod versus;
pub mod wod;

use serde::{Deserialize, Serialize};
use wb_notation::RollSpec;

use crate::error::EngineResult;
use crate::source::RandomSource;

/// A structured evaluation outcome.
///
/// The reply string is the `Display` form; rendering is a pure function
/// of the data, so a stored outcome always re-renders identically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Evaluation {
    /// Standard or repeated d-notation roll.
    Standard(standard::StandardOutcome),
    /// Shadowrun basic or exploding pool.
    Shadowrun(shadowrun::PoolOutcome),
    /// Shadowrun extended test.
    ShadowrunExtended(shadowrun::ExtendedOutcome),
    /// Classic keep-roll.
    Keep(keep::KeepOutcome),
    /// 2nd-edition raise roll.
    Raise(raise::RaiseOutcome),
    /// World of Darkness pool.
    WorldOfDarkness(wod::WodOutcome),
    /// Percentile versus roll.
    Versus(versus::VersusOutcome),
}

impl std::fmt::Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Standard(outcome) => outcome.fmt(f),
            Self::Shadowrun(outcome) => outcome.fmt(f),
            Self::ShadowrunExtended(outcome) => outcome.fmt(f),
            Self::Keep(outcome) => outcome.fmt(f),
            Self::Raise(outcome) => outcome.fmt(f),
            Self::WorldOfDarkness(outcome) => outcome.fmt(f),
            Self::Versus(outcome) => outcome.fmt(f),
        }
    }
}

/// Evaluate one parsed spec against the random source.
///
/// `Ok(None)` when the parameters violate the configured bounds.
pub fn evaluate_spec(
    spec: &RollSpec,
    source: &mut dyn RandomSource,
) -> EngineResult<Option<Evaluation>> {
    match spec {
        RollSpec::Standard {
            dice,
            sides,
            modifier,
        } => Ok(standard::single(*dice, *sides, *modifier, source).map(Evaluation::Standard)),
        RollSpec::Multiple {
            repeats,
            dice,
            sides,
            modifier,
        } => Ok(
            standard::repeated(*repeats, *dice, *sides, *modifier, source)
                .map(Evaluation::Standard),
        ),
        RollSpec::Shadowrun { pool } => {
            Ok(shadowrun::basic(*pool, source).map(Evaluation::Shadowrun))
        }
        RollSpec::ShadowrunExploding { pool } => {
            Ok(shadowrun::exploding(*pool, source)?.map(Evaluation::Shadowrun))
        }
        RollSpec::ShadowrunExtended { pool, threshold } => Ok(shadowrun::extended(
            *pool, *threshold, source,
        )?
        .map(Evaluation::ShadowrunExtended)),
        RollSpec::Keep {
            repeats,
            rolls,
            keep,
            modifier,
            explode,
            show_unkept,
        } => Ok(keep::evaluate(
            *repeats,
            *rolls,
            *keep,
            *modifier,
            *explode,
            *show_unkept,
            source,
        )?
        .map(Evaluation::Keep)),
        RollSpec::Raise {
            dice,
            skill,
            explode,
            lash,
            joie_de_vivre,
        } => Ok(
            raise::evaluate(*dice, *skill, *explode, *lash, *joie_de_vivre, source)?
                .map(Evaluation::Raise),
        ),
        RollSpec::WorldOfDarkness { pool, again } => {
            Ok(wod::evaluate(*pool, *again, source)?.map(Evaluation::WorldOfDarkness))
        }
        RollSpec::Versus { repeats, expr } => {
            Ok(versus::evaluate(*repeats, expr, source).map(Evaluation::Versus))
        }
    }
}
