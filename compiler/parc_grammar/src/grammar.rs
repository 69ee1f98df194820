//! Grammar tables.

use std::fmt;

use crate::{Alternative, NonTerminal};

/// All alternatives of one nonterminal, in try order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    lhs: NonTerminal,
    alternatives: Vec<Alternative>,
}

impl Rule {
    #[inline]
    pub fn lhs(&self) -> NonTerminal {
        self.lhs
    }

    #[inline]
    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ->", self.lhs)?;
        for (i, alt) in self.alternatives.iter().enumerate() {
            if i > 0 {
                f.write_str(" |")?;
            }
            write!(f, " {alt}")?;
        }
        Ok(())
    }
}

/// A nonterminal-indexed rule table.
///
/// Read-only once built. A table may leave nonterminals undefined; the
/// engine only needs the ones reachable from its start symbol, and
/// [`validate`](Grammar::validate) reports references to missing rules.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grammar {
    rules: Vec<Option<Rule>>,
}

impl Grammar {
    pub fn builder() -> GrammarBuilder {
        GrammarBuilder::new()
    }

    /// The rule for `nt`, if defined.
    #[inline]
    pub fn rule(&self, nt: NonTerminal) -> Option<&Rule> {
        self.rules.get(nt.index()).and_then(Option::as_ref)
    }

    /// Defined rules in nonterminal declaration order.
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter().flatten()
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rule in self.rules() {
            writeln!(f, "{rule}")?;
        }
        Ok(())
    }
}

/// Incrementally assembles a [`Grammar`].
///
/// Defining the same nonterminal twice replaces the earlier rule.
#[derive(Clone, Debug)]
pub struct GrammarBuilder {
    rules: Vec<Option<Rule>>,
}

impl GrammarBuilder {
    pub fn new() -> Self {
        GrammarBuilder {
            rules: vec![None; NonTerminal::COUNT],
        }
    }

    #[must_use]
    pub fn rule(mut self, lhs: NonTerminal, alternatives: impl Into<Vec<Alternative>>) -> Self {
        self.rules[lhs.index()] = Some(Rule {
            lhs,
            alternatives: alternatives.into(),
        });
        self
    }

    pub fn build(self) -> Grammar {
        Grammar { rules: self.rules }
    }
}

impl Default for GrammarBuilder {
    fn default() -> Self {
        Self::new()
    }
}
