//! Paradigm classification.

use std::fmt;

/// Coarse programming-paradigm family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    ObjectOriented,
    Procedural,
    Mixed,
}

/// Surface syntax: blocks opened by indentation or by braces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Syntax {
    Indented,
    Braced,
}

/// What a successful derivation says the fragment is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Paradigm {
    pub family: Family,
    pub syntax: Syntax,
}

impl Paradigm {
    /// Number of paradigms.
    pub const COUNT: usize = 6;

    /// Every paradigm in grammar declaration order.
    ///
    /// This order breaks ties when ranking best guesses.
    pub const ALL: [Paradigm; Paradigm::COUNT] = [
        Paradigm::new(Family::ObjectOriented, Syntax::Indented),
        Paradigm::new(Family::ObjectOriented, Syntax::Braced),
        Paradigm::new(Family::Procedural, Syntax::Indented),
        Paradigm::new(Family::Procedural, Syntax::Braced),
        Paradigm::new(Family::Mixed, Syntax::Indented),
        Paradigm::new(Family::Mixed, Syntax::Braced),
    ];

    #[inline]
    pub const fn new(family: Family, syntax: Syntax) -> Self {
        Paradigm { family, syntax }
    }

    /// Position in [`Paradigm::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        let family = match self.family {
            Family::ObjectOriented => 0,
            Family::Procedural => 1,
            Family::Mixed => 2,
        };
        let syntax = match self.syntax {
            Syntax::Indented => 0,
            Syntax::Braced => 1,
        };
        family * 2 + syntax
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Family::ObjectOriented => "object-oriented",
            Family::Procedural => "procedural",
            Family::Mixed => "mixed",
        })
    }
}

impl fmt::Display for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Syntax::Indented => "indented",
            Syntax::Braced => "braced",
        })
    }
}

impl fmt::Display for Paradigm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.syntax, self.family)
    }
}

#[cfg(test)]
mod tests;
