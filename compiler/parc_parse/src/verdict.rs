//! Final answer of one recognition run.

use std::fmt;

use parc_ir::{Paradigm, TagSet};

/// Whether the whole stream derives from the start symbol.
///
/// Rejection is an ordinary value, not an error: it is the expected answer
/// for most fragments that are not programs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Accepted(Acceptance),
    Rejected(Rejection),
}

/// A complete derivation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Acceptance {
    /// Label of the labelled alternative that classified the fragment.
    /// `None` when the start symbol derives it without one.
    pub paradigm: Option<Paradigm>,
    /// Tokens consumed; always the stream length.
    pub consumed: usize,
}

/// No complete derivation, with what is known about why.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rejection {
    /// Farthest offset a terminal was tested at. Equal to the stream length
    /// when the input ran out.
    pub furthest: usize,
    /// Tags tested and not found at `furthest`.
    pub expected: TagSet,
    /// Labelled paradigm whose alternatives matched the farthest token.
    pub best_guess: Option<Paradigm>,
    /// Tokens covered when the start symbol matched but input remained.
    pub matched_prefix: Option<usize>,
}

impl Verdict {
    #[inline]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted(_))
    }

    #[inline]
    pub fn is_rejected(&self) -> bool {
        matches!(self, Verdict::Rejected(_))
    }

    /// Classification of an accepted stream.
    pub fn paradigm(&self) -> Option<Paradigm> {
        match self {
            Verdict::Accepted(acceptance) => acceptance.paradigm,
            Verdict::Rejected(_) => None,
        }
    }

    pub fn acceptance(&self) -> Option<&Acceptance> {
        match self {
            Verdict::Accepted(acceptance) => Some(acceptance),
            Verdict::Rejected(_) => None,
        }
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Verdict::Accepted(_) => None,
            Verdict::Rejected(rejection) => Some(rejection),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Accepted(acceptance) => acceptance.fmt(f),
            Verdict::Rejected(rejection) => rejection.fmt(f),
        }
    }
}

impl fmt::Display for Acceptance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.paradigm {
            Some(paradigm) => write!(f, "accepted as {paradigm}"),
            None => write!(f, "accepted without a paradigm"),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rejected at token {}: expected {}",
            self.furthest, self.expected
        )?;
        if let Some(paradigm) = self.best_guess {
            write!(f, "; the best guess is {paradigm}")?;
        }
        if let Some(prefix) = self.matched_prefix {
            write!(f, "; the first {prefix} tokens form a complete fragment")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
