//! The immutable token stream a recognition run reads.

use std::ops::Index;

use crate::Tag;

/// A scanner code outside the `0..=9` alphabet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("token code {code} at offset {offset} is not a category in 0..=9")]
pub struct InvalidTokenCode {
    /// The offending code.
    pub code: u8,
    /// Its zero-based offset in the input.
    pub offset: usize,
}

/// An ordered, finite sequence of token categories.
///
/// Length is fixed once built. Reads at or past the end yield
/// [`Tag::Eof`] rather than failing, so the stream never needs an explicit
/// terminator.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TokenStream {
    tags: Vec<Tag>,
}

impl TokenStream {
    /// Build a stream from already-decoded tags.
    ///
    /// `Tag::Eof` entries are dropped: end of stream is implied by length.
    pub fn new(tags: Vec<Tag>) -> Self {
        let mut tags = tags;
        tags.retain(|tag| *tag != Tag::Eof);
        TokenStream { tags }
    }

    /// Decode raw scanner codes, rejecting the first code outside `0..=9`.
    pub fn from_codes(codes: &[u8]) -> Result<Self, InvalidTokenCode> {
        let tags = codes
            .iter()
            .enumerate()
            .map(|(offset, &code)| Tag::from_code(code).ok_or(InvalidTokenCode { code, offset }))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(TokenStream { tags })
    }

    /// Number of tokens (the end marker is not counted).
    #[inline]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Tag at `pos`, or `Tag::Eof` at or past the end.
    #[inline]
    pub fn get(&self, pos: usize) -> Tag {
        self.tags.get(pos).copied().unwrap_or(Tag::Eof)
    }

    /// The tags as a slice.
    #[inline]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }
}

impl FromIterator<Tag> for TokenStream {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        TokenStream::new(iter.into_iter().collect())
    }
}

/// Indexing past the end yields `Tag::Eof`, like [`TokenStream::get`].
impl Index<usize> for TokenStream {
    type Output = Tag;

    fn index(&self, pos: usize) -> &Tag {
        self.tags.get(pos).unwrap_or(&Tag::Eof)
    }
}
