//! Error types for the evaluation engine.
//!
//! Range violations are not errors: evaluators report them by returning no
//! result, and the dispatcher simply moves on to the next token. An
//! `EngineError` always signals a defect — a loop that should have
//! terminated long ago kept going.

use crate::limits;

/// Defect-class failures during evaluation.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// An exploding roll produced maximum faces past the defensive cap.
    #[error(
        "exploding roll exceeded {} generations (broken random source?)",
        limits::MAX_EXPLOSION_GENERATIONS
    )]
    ExplosionOverflow,

    /// An extended test did not reach its threshold within the pass cap.
    #[error(
        "extended test exceeded {} passes without reaching its threshold",
        limits::MAX_EXTENDED_PASSES
    )]
    PassOverflow,
}

/// Convenience result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
