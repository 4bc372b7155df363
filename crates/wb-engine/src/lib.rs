//! Dice-notation evaluation engine for Würfelbecher.
//!
//! Scans free-form chat text for dice expressions in several game-system
//! grammars and computes their outcome from a pluggable [`RandomSource`].
//! The entry point is [`Dispatcher`]: it splits text into tokens, routes
//! each recognized token to its evaluator, and joins the rendered results
//! into a reply. Every call is self-contained — no state survives between
//! evaluations except the random source itself.

pub mod dispatch;
pub mod error;
pub mod eval;
pub mod format;
pub mod limits;
pub mod source;

pub use dispatch::{Dispatcher, EvalPolicy, MessageOrigin};
pub use error::{EngineError, EngineResult};
pub use eval::Evaluation;
pub use source::{DefaultSource, RandomSource, RngSource, ScriptedSource};
