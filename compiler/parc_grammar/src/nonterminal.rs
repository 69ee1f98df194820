//! Nonterminal names.

use std::fmt;

/// A grammar rule name.
///
/// Primed rules (`S'`, `PYCLASS''`, ...) are the tails left behind by
/// left-factoring. Their Rust names describe what they match; their
/// [`Display`](fmt::Display) form is the grammar notation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NonTerminal {
    Start,
    StartTail,
    Paradigm,
    Oop,
    Class,
    ClassBody,
    ClassTail,
    Main,
    PyClass,
    PyClassHeader,
    PyClassTail,
    Procedural,
    Func,
    FuncTail,
    PyFunc,
    PyFuncTail,
    Mixed,
    MixedBraced,
    MixedTail,
    PyMixed,
    PyMixedTail,
    IndentedBlock,
    IndentedLine,
    IndentedBlockTail,
    PyStatements,
    PyStatementsTail,
    PyStatement,
    PyStatementTail,
    PyParenBody,
    PyBraceBody,
    PyParenClose,
    PyBraceClose,
    Statements,
    StatementsTail,
    Statement,
    StatementTail,
    StatementClose,
    Prefix,
    Ids,
}

impl NonTerminal {
    pub const COUNT: usize = 39;

    /// Every nonterminal in declaration order (`ALL[nt.index()] == nt`).
    pub const ALL: [NonTerminal; NonTerminal::COUNT] = [
        NonTerminal::Start,
        NonTerminal::StartTail,
        NonTerminal::Paradigm,
        NonTerminal::Oop,
        NonTerminal::Class,
        NonTerminal::ClassBody,
        NonTerminal::ClassTail,
        NonTerminal::Main,
        NonTerminal::PyClass,
        NonTerminal::PyClassHeader,
        NonTerminal::PyClassTail,
        NonTerminal::Procedural,
        NonTerminal::Func,
        NonTerminal::FuncTail,
        NonTerminal::PyFunc,
        NonTerminal::PyFuncTail,
        NonTerminal::Mixed,
        NonTerminal::MixedBraced,
        NonTerminal::MixedTail,
        NonTerminal::PyMixed,
        NonTerminal::PyMixedTail,
        NonTerminal::IndentedBlock,
        NonTerminal::IndentedLine,
        NonTerminal::IndentedBlockTail,
        NonTerminal::PyStatements,
        NonTerminal::PyStatementsTail,
        NonTerminal::PyStatement,
        NonTerminal::PyStatementTail,
        NonTerminal::PyParenBody,
        NonTerminal::PyBraceBody,
        NonTerminal::PyParenClose,
        NonTerminal::PyBraceClose,
        NonTerminal::Statements,
        NonTerminal::StatementsTail,
        NonTerminal::Statement,
        NonTerminal::StatementTail,
        NonTerminal::StatementClose,
        NonTerminal::Prefix,
        NonTerminal::Ids,
    ];

    /// Dense index for per-rule tables.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Name in grammar notation.
    pub const fn name(self) -> &'static str {
        match self {
            NonTerminal::Start => "S",
            NonTerminal::StartTail => "S'",
            NonTerminal::Paradigm => "PARADIGM",
            NonTerminal::Oop => "OOP",
            NonTerminal::Class => "CLASS",
            NonTerminal::ClassBody => "CLASSCOMPLEMENT",
            NonTerminal::ClassTail => "CLASSCOMPLEMENT'",
            NonTerminal::Main => "MAIN",
            NonTerminal::PyClass => "PYCLASS",
            NonTerminal::PyClassHeader => "PYCLASS'",
            NonTerminal::PyClassTail => "PYCLASS''",
            NonTerminal::Procedural => "PP",
            NonTerminal::Func => "FUNC",
            NonTerminal::FuncTail => "FUNC'",
            NonTerminal::PyFunc => "PYFUNC",
            NonTerminal::PyFuncTail => "PYFUNC'",
            NonTerminal::Mixed => "MIXED",
            NonTerminal::MixedBraced => "MIXEDN",
            NonTerminal::MixedTail => "MIXEDCOMPLEMENT",
            NonTerminal::PyMixed => "PYMIXED",
            NonTerminal::PyMixedTail => "PYMIXEDCOMPLEMENT",
            NonTerminal::IndentedBlock => "INDENTEDBLOCK",
            NonTerminal::IndentedLine => "INDENTEDBLOCK'",
            NonTerminal::IndentedBlockTail => "INDENTEDBLOCK''",
            NonTerminal::PyStatements => "PYSTATEMENTS",
            NonTerminal::PyStatementsTail => "PYSTATEMENTS'",
            NonTerminal::PyStatement => "PYSTATEMENT",
            NonTerminal::PyStatementTail => "PYSTATEMENT'",
            NonTerminal::PyParenBody => "PYSTATEMENT''",
            NonTerminal::PyBraceBody => "PYSTATEMENT'''",
            NonTerminal::PyParenClose => "PYSTATEMENT''''",
            NonTerminal::PyBraceClose => "PYSTATEMENT'''''",
            NonTerminal::Statements => "STATEMENTS",
            NonTerminal::StatementsTail => "STATEMENTS'",
            NonTerminal::Statement => "STATEMENT",
            NonTerminal::StatementTail => "STATEMENT'",
            NonTerminal::StatementClose => "STATEMENT''",
            NonTerminal::Prefix => "PREFIX",
            NonTerminal::Ids => "IDS",
        }
    }
}

impl fmt::Display for NonTerminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
