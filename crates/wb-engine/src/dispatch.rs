//! Splitting chat text into tokens and routing them to evaluators.

use tracing::debug;
use wb_notation::parse_token;

use crate::error::EngineResult;
use crate::eval::{self, Evaluation};
use crate::source::RandomSource;

/// Where a chat message came from, as far as the engine cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageOrigin {
    /// A named channel.
    Channel(String),
    /// A direct (private) message.
    Direct,
}

/// Host-supplied configuration: should messages from an origin be scanned
/// at all? The engine consults this but never implements it — the chat
/// host owns its per-channel and per-query toggles.
pub trait EvalPolicy {
    /// Whether automatic evaluation is enabled for this origin.
    fn auto_eval_enabled(&self, origin: &MessageOrigin) -> bool;
}

/// The engine entry point: recognizes dice expressions in free-form text
/// and evaluates them against the owned random source.
#[derive(Debug)]
pub struct Dispatcher<S> {
    source: S,
}

impl<S: RandomSource> Dispatcher<S> {
    /// Build a dispatcher around a random source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Evaluate every recognized token in `text`.
    ///
    /// Tokens are tried against the grammars in priority order; the first
    /// grammar that matches claims the token. A claimed token whose
    /// parameters are out of bounds contributes nothing, and the rest of
    /// the text is still processed.
    pub fn evaluate(&mut self, text: &str) -> EngineResult<Vec<Evaluation>> {
        let mut results = Vec::new();
        for token in text.split_whitespace() {
            let Some(spec) = parse_token(token) else {
                continue;
            };
            debug!(token, ?spec, "matched");
            if let Some(outcome) = eval::evaluate_spec(&spec, &mut self.source)? {
                results.push(outcome);
            }
        }
        Ok(results)
    }

    /// Render one reply line, or `None` when no token produced a result —
    /// "nothing to say" is not an error.
    pub fn reply(&mut self, text: &str) -> EngineResult<Option<String>> {
        let results = self.evaluate(text)?;
        if results.is_empty() {
            return Ok(None);
        }
        Ok(Some(
            results
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; "),
        ))
    }

    /// Reply to a message only when the host policy allows its origin.
    pub fn process_message(
        &mut self,
        origin: &MessageOrigin,
        text: &str,
        policy: &dyn EvalPolicy,
    ) -> EngineResult<Option<String>> {
        if !policy.auto_eval_enabled(origin) {
            return Ok(None);
        }
        self.reply(text)
    }
}
