//! Farthest-failure bookkeeping.
//!
//! A failed rule says nothing about where it failed, so diagnostics are
//! collected on the side: every terminal test is reported here, and the
//! tests at the greatest offset make up the "expected" set of a rejection.

use parc_ir::{Paradigm, Tag, TagSet};

use crate::Rejection;

#[derive(Clone, Debug)]
pub(crate) struct Farthest {
    position: usize,
    expected: TagSet,
    /// Farthest offset reached by a terminal matched inside each paradigm's
    /// labelled alternative, indexed by `Paradigm::index`.
    reach: [Option<usize>; Paradigm::COUNT],
}

impl Farthest {
    pub(crate) fn new() -> Self {
        Farthest {
            position: 0,
            expected: TagSet::new(),
            reach: [None; Paradigm::COUNT],
        }
    }

    /// Note one terminal test at `at`.
    ///
    /// `after` is the offset past the token when it matched. `within` is the
    /// innermost labelled alternative being evaluated.
    pub(crate) fn record(
        &mut self,
        at: usize,
        tag: Tag,
        after: Option<usize>,
        within: Option<Paradigm>,
    ) {
        if at > self.position {
            self.position = at;
            self.expected = TagSet::new();
        }
        match after {
            Some(after) => {
                if let Some(paradigm) = within {
                    let slot = &mut self.reach[paradigm.index()];
                    *slot = Some(slot.map_or(after, |reach| reach.max(after)));
                }
            }
            None if at == self.position => self.expected = self.expected.with(tag),
            None => {}
        }
    }

    #[cfg(test)]
    pub(crate) fn position(&self) -> usize {
        self.position
    }

    /// Labelled paradigm that got farthest; ties go to the earlier one in
    /// [`Paradigm::ALL`].
    pub(crate) fn best_guess(&self) -> Option<Paradigm> {
        let mut best: Option<(Paradigm, usize)> = None;
        for paradigm in Paradigm::ALL {
            if let Some(reach) = self.reach[paradigm.index()] {
                match best {
                    Some((_, top)) if reach <= top => {}
                    _ => best = Some((paradigm, reach)),
                }
            }
        }
        best.map(|(paradigm, _)| paradigm)
    }

    /// Build the rejection.
    ///
    /// When the start symbol matched a prefix, end of input was the other
    /// thing expected at the offset where it stopped.
    pub(crate) fn into_rejection(mut self, matched_prefix: Option<usize>) -> Rejection {
        if let Some(prefix) = matched_prefix {
            if prefix > self.position {
                self.position = prefix;
                self.expected = TagSet::single(Tag::Eof);
            } else if prefix == self.position {
                self.expected = self.expected.with(Tag::Eof);
            }
        }
        Rejection {
            furthest: self.position,
            expected: self.expected,
            best_guess: self.best_guess(),
            matched_prefix,
        }
    }
}
