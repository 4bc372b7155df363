//! Dice-notation grammars for Würfelbecher.
//!
//! Chat messages are split into whitespace-delimited tokens; each token is
//! checked against a fixed, ordered set of game-system grammars (standard
//! d-notation, the Shadowrun family, 7th Sea keep and raise rolls, World
//! of Darkness pools, percentile versus rolls). Recognition is purely
//! lexical — this crate extracts typed parameters and leaves range
//! validation to the evaluators.

pub mod matcher;
pub mod spec;
pub mod threshold;

pub use matcher::parse_token;
pub use spec::RollSpec;
