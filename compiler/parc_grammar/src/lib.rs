//! The paradigm grammar as data.
//!
//! A [`Grammar`] maps each [`NonTerminal`] to a [`Rule`]: an ordered list of
//! [`Alternative`]s, each an ordered list of [`Symbol`]s. The recognizer in
//! `parc_parse` interprets any grammar of this shape; the fixed paradigm
//! table lives in [`Grammar::standard`].
//!
//! Editing the grammar never touches the engine. [`Grammar::validate`]
//! checks the properties the engine relies on to terminate.

mod grammar;
mod nonterminal;
mod standard;
mod symbol;
mod validate;

pub use grammar::{Grammar, GrammarBuilder, Rule};
pub use nonterminal::NonTerminal;
pub use symbol::{Alternative, Symbol};
pub use validate::GrammarError;
