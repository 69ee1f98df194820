//! Resource ceilings for a recognizer.

use std::str::FromStr;

use tracing::warn;

/// Environment variable overriding [`RecognizerConfig::max_depth`].
pub const MAX_DEPTH_VAR: &str = "PARC_MAX_DEPTH";

/// Environment variable overriding [`RecognizerConfig::max_tokens`].
pub const MAX_TOKENS_VAR: &str = "PARC_MAX_TOKENS";

/// Limits applied to every run.
///
/// Nesting grows with input length for the standard grammar (statement
/// lists recurse once per statement), so the depth ceiling is set well above
/// what `max_tokens` tokens can need.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecognizerConfig {
    /// Maximum number of nested rule evaluations.
    pub max_depth: usize,
    /// Maximum stream length accepted for recognition.
    pub max_tokens: usize,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        RecognizerConfig {
            max_depth: 262_144,
            max_tokens: 65_536,
        }
    }
}

impl RecognizerConfig {
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Defaults, overridden by `PARC_MAX_DEPTH` and `PARC_MAX_TOKENS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults, overridden by whatever `lookup` returns for the two
    /// variable names. Values that do not parse are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = RecognizerConfig::default();
        if let Some(max_depth) = parse_var(&lookup, MAX_DEPTH_VAR) {
            config.max_depth = max_depth;
        }
        if let Some(max_tokens) = parse_var(&lookup, MAX_TOKENS_VAR) {
            config.max_tokens = max_tokens;
        }
        config
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(variable = key, value = %raw, "ignoring unparsable limit");
            None
        }
    }
}
