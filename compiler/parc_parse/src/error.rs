//! Recognizer errors.
//!
//! Only conditions that stop the engine from producing a verdict are errors.
//! Input that fails to derive is a [`Verdict::Rejected`](crate::Verdict),
//! never one of these.

use parc_grammar::{GrammarError, NonTerminal};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RecognizeError {
    /// The grammar cannot be run safely.
    #[error("invalid grammar: {0}")]
    Grammar(#[from] GrammarError),

    /// The stream is longer than the configured ceiling.
    #[error("{len} tokens exceed the limit of {limit}")]
    TooManyTokens { len: usize, limit: usize },

    /// Rule nesting passed the configured ceiling.
    #[error("rule nesting passed the limit of {limit} at token {position}")]
    RecursionLimit { limit: usize, position: usize },

    /// The requested start symbol has no rule in this grammar.
    #[error("{rule} has no rule to start from")]
    UndefinedRule { rule: NonTerminal },
}
