//! Grammar symbols and alternatives.

use std::fmt;

use parc_ir::{Paradigm, Tag};

use crate::NonTerminal;

/// One position in an alternative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Match one token of this category.
    T(Tag),
    /// Expand this rule.
    N(NonTerminal),
}

/// Grammar-legend spelling of a terminal.
fn legend(tag: Tag) -> &'static str {
    match tag {
        Tag::Ident => "ID",
        Tag::Inherit => "INHERIT",
        Tag::Def => "DEF",
        Tag::Main => "MAIN_KW",
        Tag::LParen => "LP",
        Tag::RParen => "RP",
        Tag::LBrace => "LB",
        Tag::RBrace => "RB",
        Tag::Indent => "INDENT",
        Tag::Prefix => "MODIFIER",
        Tag::Eof => "$",
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::T(tag) => f.write_str(legend(*tag)),
            Symbol::N(rule) => f.write_str(rule.name()),
        }
    }
}

/// An ordered sequence of symbols; empty means ε.
///
/// A label marks the alternative as the point where a derivation commits to
/// a paradigm. Labels never change what is accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alternative {
    symbols: Vec<Symbol>,
    label: Option<Paradigm>,
}

impl Alternative {
    pub fn new(symbols: impl Into<Vec<Symbol>>) -> Self {
        Alternative {
            symbols: symbols.into(),
            label: None,
        }
    }

    /// The ε-alternative: always matches, consumes nothing.
    pub fn epsilon() -> Self {
        Alternative::new(Vec::new())
    }

    #[must_use]
    pub fn labeled(mut self, paradigm: Paradigm) -> Self {
        self.label = Some(paradigm);
        self
    }

    #[inline]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    #[inline]
    pub fn label(&self) -> Option<Paradigm> {
        self.label
    }

    #[inline]
    pub fn is_epsilon(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl fmt::Display for Alternative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.symbols.is_empty() {
            return f.write_str("ε");
        }
        for (i, symbol) in self.symbols.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}
