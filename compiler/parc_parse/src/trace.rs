//! Observation hooks for rule evaluation.

use parc_grammar::NonTerminal;
use parc_ir::Tag;

use crate::Outcome;

/// Receives every step the engine takes.
///
/// All methods default to doing nothing. Offsets are token offsets into the
/// stream being recognized.
pub trait Tracer {
    /// A rule is about to be evaluated at `at`.
    fn enter_rule(&mut self, _rule: NonTerminal, _at: usize) {}

    /// Alternative `index` of `rule` is about to be tried at `at`.
    fn try_alternative(&mut self, _rule: NonTerminal, _index: usize, _at: usize) {}

    /// A rule evaluation started at `at` finished with `outcome`.
    fn exit_rule(&mut self, _rule: NonTerminal, _at: usize, _outcome: &Outcome<'_>) {}

    /// A terminal was tested at `at`.
    fn terminal(&mut self, _tag: Tag, _at: usize, _matched: bool) {}
}

/// Tracer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTrace;

impl Tracer for NoTrace {}
