//! Bitset of token categories.

use std::fmt;

use crate::Tag;

/// A set of tags using bitset representation for O(1) membership testing.
///
/// Each bit in the `u16` corresponds to a [`Tag`] code. With eleven tags
/// (including `Eof`) a `u16` covers the whole alphabet.
///
/// # Example
/// ```ignore
/// const HEADER_START: TagSet = TagSet::new()
///     .with(Tag::Prefix)
///     .with(Tag::Indent);
///
/// if HEADER_START.contains(Tag::Prefix) {
///     // O(1) lookup
/// }
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TagSet(u16);

impl TagSet {
    /// Create an empty tag set.
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Create a tag set containing a single tag.
    #[inline]
    pub const fn single(tag: Tag) -> Self {
        Self(1u16 << tag.code())
    }

    /// Add a tag to this set (builder pattern for const contexts).
    #[inline]
    #[must_use]
    pub const fn with(self, tag: Tag) -> Self {
        Self(self.0 | (1u16 << tag.code()))
    }

    /// Check if this set contains a tag.
    #[inline]
    pub const fn contains(&self, tag: Tag) -> bool {
        (self.0 & (1u16 << tag.code())) != 0
    }

    /// Check if this set is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Count the number of tags in this set.
    #[inline]
    pub const fn count(&self) -> u32 {
        self.0.count_ones()
    }

    /// Iterate over the tags in code order.
    pub fn iter(&self) -> impl Iterator<Item = Tag> + '_ {
        Tag::ALL.into_iter().filter(|tag| self.contains(*tag))
    }
}

impl FromIterator<Tag> for TagSet {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        iter.into_iter().fold(TagSet::new(), TagSet::with)
    }
}

impl fmt::Debug for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Renders as an English list: "`(`", "`(` or `{`", "`(`, `{` or `}`".
impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.count() as usize;
        if count == 0 {
            return f.write_str("nothing");
        }
        for (i, tag) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(if i + 1 == count { " or " } else { ", " })?;
            }
            f.write_str(tag.display_name())?;
        }
        Ok(())
    }
}
