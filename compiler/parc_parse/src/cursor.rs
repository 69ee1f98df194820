//! Read position over a token stream.
//!
//! A `Cursor` is a plain value. Rule evaluation takes the cursor it starts
//! from and returns the cursor it ends at, so backtracking is just reusing
//! the value held before the failed attempt; nothing has to be restored.

use std::fmt;

use parc_ir::{Tag, TokenStream};

/// A position in a borrowed [`TokenStream`].
#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    tokens: &'a TokenStream,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a TokenStream) -> Self {
        Cursor { tokens, pos: 0 }
    }

    /// Get the total number of tokens in the stream.
    #[inline]
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Offset of the next token to read.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Tokens left before the end.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.token_count().saturating_sub(self.pos)
    }

    /// The token under the cursor; `Tag::Eof` once the stream is exhausted.
    #[inline]
    pub fn current(&self) -> Tag {
        self.tokens.get(self.pos)
    }

    /// Check if at end of token stream.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.token_count()
    }

    /// Check if the current token matches the given tag.
    #[inline]
    pub fn check(&self, tag: Tag) -> bool {
        self.current() == tag
    }

    /// Match one terminal.
    ///
    /// Returns the cursor one token further on if the current token is
    /// `tag`, `None` otherwise. This is the only way input is consumed.
    /// Expecting `Tag::Eof` at the end succeeds without moving.
    #[inline]
    #[must_use]
    pub fn expect(self, tag: Tag) -> Option<Self> {
        if !self.check(tag) {
            return None;
        }
        if self.is_at_end() {
            return Some(self);
        }
        Some(Cursor {
            tokens: self.tokens,
            pos: self.pos + 1,
        })
    }
}

/// Cursors are equal when they point at the same offset of the same stream.
impl PartialEq for Cursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tokens, other.tokens) && self.pos == other.pos
    }
}

impl Eq for Cursor<'_> {}

impl fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cursor({}/{})", self.pos, self.token_count())
    }
}
