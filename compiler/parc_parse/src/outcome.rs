//! Two-way result of evaluating a grammar symbol.
//!
//! | Variant | Meaning |
//! |---------|---------|
//! | `Matched` | Symbol derived a prefix; carries the cursor after it |
//! | `Failed` | No derivation; the caller still holds its own cursor |
//!
//! `Failed` carries no position. The caller never handed its cursor away,
//! so there is nothing to roll back and no way to forget to.

use parc_ir::Paradigm;

use crate::Cursor;

/// Result of one rule, alternative or terminal attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome<'a> {
    /// Derivation succeeded.
    Matched {
        /// Where the next symbol starts reading.
        cursor: Cursor<'a>,
        /// Label of the outermost labelled alternative in the derivation.
        paradigm: Option<Paradigm>,
    },
    /// No alternative matched.
    Failed,
}

impl<'a> Outcome<'a> {
    /// An unlabelled match ending at `cursor`.
    #[inline]
    pub fn matched(cursor: Cursor<'a>) -> Self {
        Outcome::Matched {
            cursor,
            paradigm: None,
        }
    }

    #[inline]
    pub fn is_matched(&self) -> bool {
        matches!(self, Outcome::Matched { .. })
    }

    #[inline]
    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed)
    }

    /// Cursor after the match, if any.
    #[inline]
    pub fn cursor(&self) -> Option<Cursor<'a>> {
        match self {
            Outcome::Matched { cursor, .. } => Some(*cursor),
            Outcome::Failed => None,
        }
    }

    /// Offset after the match, if any.
    #[inline]
    pub fn position(&self) -> Option<usize> {
        self.cursor().map(|cursor| cursor.position())
    }

    #[inline]
    pub fn paradigm(&self) -> Option<Paradigm> {
        match self {
            Outcome::Matched { paradigm, .. } => *paradigm,
            Outcome::Failed => None,
        }
    }

    /// Attach an alternative's label.
    ///
    /// An outer label wins over anything found inside the derivation.
    #[inline]
    #[must_use]
    pub fn labeled(self, label: Option<Paradigm>) -> Self {
        match (self, label) {
            (Outcome::Matched { cursor, paradigm }, label) => Outcome::Matched {
                cursor,
                paradigm: label.or(paradigm),
            },
            (Outcome::Failed, _) => Outcome::Failed,
        }
    }

    /// Sequence `step` after this match.
    ///
    /// Keeps the first paradigm seen left to right. A failed step fails the
    /// whole sequence.
    #[inline]
    #[must_use]
    pub fn followed_by(self, step: Outcome<'a>) -> Self {
        match (self, step) {
            (
                Outcome::Matched { paradigm, .. },
                Outcome::Matched {
                    cursor,
                    paradigm: next,
                },
            ) => Outcome::Matched {
                cursor,
                paradigm: paradigm.or(next),
            },
            _ => Outcome::Failed,
        }
    }
}
