//! Backtracking recognizer for the paradigm grammar.
//!
//! Given a [`TokenStream`] of scanner categories, decides whether it derives
//! from the start symbol of a [`Grammar`] and, if so, which paradigm the
//! derivation classifies it as.
//!
//! # Architecture
//!
//! - [`Cursor`]: `Copy` read position; advanced only by terminal matches
//! - [`Outcome`]: `Matched` with the new cursor, or `Failed`
//! - [`Recognizer`]: ordered-choice evaluator over a validated grammar
//! - [`Verdict`]: acceptance with a paradigm, or rejection with the
//!   farthest failure, the expected tags there and a best-guess paradigm
//!
//! # Usage
//!
//! ```ignore
//! let tokens = TokenStream::from_codes(&[9, 1, 0, 8, 0])?;
//! match parc_parse::recognize(&tokens)? {
//!     Verdict::Accepted(acceptance) => println!("{acceptance}"),
//!     Verdict::Rejected(rejection) => println!("{rejection}"),
//! }
//! ```

mod config;
mod cursor;
mod error;
mod farthest;
mod outcome;
mod recognizer;
mod trace;
mod verdict;

use std::sync::{Once, OnceLock};

pub use config::{RecognizerConfig, MAX_DEPTH_VAR, MAX_TOKENS_VAR};
pub use cursor::Cursor;
pub use error::RecognizeError;
pub use outcome::Outcome;
pub use recognizer::Recognizer;
pub use trace::{NoTrace, Tracer};
pub use verdict::{Acceptance, Rejection, Verdict};

pub use parc_grammar::{Grammar, GrammarError, NonTerminal};
pub use parc_ir::{Family, Paradigm, Syntax, Tag, TagSet, TokenStream};

/// The standard paradigm grammar, built on first use.
pub fn standard_grammar() -> &'static Grammar {
    static STANDARD: OnceLock<Grammar> = OnceLock::new();
    STANDARD.get_or_init(Grammar::standard)
}

/// The standard grammar validated once, with limits from
/// [`RecognizerConfig::from_env`] read on first use.
pub fn standard_recognizer() -> Result<&'static Recognizer<'static>, RecognizeError> {
    static STANDARD: OnceLock<Result<Recognizer<'static>, GrammarError>> = OnceLock::new();
    STANDARD
        .get_or_init(|| Recognizer::new(standard_grammar(), RecognizerConfig::from_env()))
        .as_ref()
        .map_err(|err| RecognizeError::Grammar(err.clone()))
}

/// Recognize `tokens` with the [`standard_recognizer`].
pub fn recognize(tokens: &TokenStream) -> Result<Verdict, RecognizeError> {
    standard_recognizer()?.recognize(tokens)
}

/// Recognize independent streams in parallel with the [`standard_recognizer`].
///
/// Results are in input order.
pub fn recognize_all(
    streams: &[TokenStream],
) -> Result<Vec<Result<Verdict, RecognizeError>>, RecognizeError> {
    Ok(standard_recognizer()?.recognize_all(streams))
}

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber driven by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set. With `PARC_LOG_TREE` also set,
/// spans are printed as an indented tree that follows the derivation.
/// Safe to call more than once; a subscriber installed by the host wins.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        let registry = tracing_subscriber::registry().with(filter);
        let installed = if std::env::var_os("PARC_LOG_TREE").is_some() {
            registry
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_indent_lines(true),
                )
                .try_init()
        } else {
            registry
                .with(fmt::layer().with_target(true).with_level(true))
                .try_init()
        };
        if installed.is_err() {
            tracing::debug!("tracing subscriber already installed");
        }
    });
}
