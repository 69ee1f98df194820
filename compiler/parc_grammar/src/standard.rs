//! The paradigm grammar.
//!
//! One rule per nonterminal, alternatives in try order. Where a rule has
//! both consuming alternatives and ε, ε is last: the engine prefers
//! consuming input.
//!
//! The two alternatives of `OOP`, `PP` and `MIXED` are labelled with the
//! paradigm they commit to. Python-style (indentation) alternatives come
//! first in each.

use parc_ir::Tag::{Def, Ident, Indent, Inherit, LBrace, LParen, Main, Prefix, RBrace, RParen};
use parc_ir::{Family, Paradigm, Syntax};

use crate::Symbol::{N, T};
use crate::{Alternative, Grammar, NonTerminal as Nt, Symbol};

fn alt(symbols: &[Symbol]) -> Alternative {
    Alternative::new(symbols)
}

fn eps() -> Alternative {
    Alternative::epsilon()
}

fn labeled(symbols: &[Symbol], family: Family, syntax: Syntax) -> Alternative {
    Alternative::new(symbols).labeled(Paradigm::new(family, syntax))
}

impl Grammar {
    /// The fixed paradigm-classification grammar.
    pub fn standard() -> Grammar {
        use Family::{Mixed, ObjectOriented, Procedural};
        use Syntax::{Braced, Indented};

        Grammar::builder()
            // === Top level ===
            .rule(
                Nt::Start,
                [
                    alt(&[N(Nt::Paradigm), N(Nt::StartTail)]),
                    alt(&[N(Nt::Statements), N(Nt::Paradigm), N(Nt::StartTail)]),
                    alt(&[N(Nt::PyStatements), N(Nt::Paradigm), N(Nt::StartTail)]),
                ],
            )
            .rule(
                Nt::StartTail,
                [alt(&[N(Nt::Statements)]), alt(&[N(Nt::PyStatements)]), eps()],
            )
            .rule(
                Nt::Paradigm,
                [alt(&[N(Nt::Oop)]), alt(&[N(Nt::Procedural)]), alt(&[N(Nt::Mixed)])],
            )
            // === Object-oriented ===
            .rule(
                Nt::Oop,
                [
                    labeled(&[N(Nt::PyClass)], ObjectOriented, Indented),
                    labeled(&[N(Nt::Class)], ObjectOriented, Braced),
                ],
            )
            .rule(
                Nt::Class,
                [alt(&[N(Nt::Prefix), N(Nt::ClassBody)]), alt(&[N(Nt::ClassBody)])],
            )
            .rule(
                Nt::ClassBody,
                [alt(&[
                    N(Nt::Ids),
                    T(Inherit),
                    N(Nt::Ids),
                    T(LBrace),
                    N(Nt::Statements),
                    T(RBrace),
                    N(Nt::ClassTail),
                ])],
            )
            .rule(
                Nt::ClassTail,
                [
                    alt(&[N(Nt::Main)]),
                    alt(&[N(Nt::Statements), N(Nt::Class)]),
                    eps(),
                ],
            )
            .rule(
                Nt::Main,
                [
                    alt(&[N(Nt::Prefix), N(Nt::Ids), N(Nt::Main)]),
                    alt(&[
                        N(Nt::Ids),
                        T(Main),
                        T(LParen),
                        N(Nt::Ids),
                        T(RParen),
                        T(LBrace),
                        N(Nt::Statements),
                        T(RBrace),
                    ]),
                ],
            )
            .rule(
                Nt::PyClass,
                [
                    alt(&[
                        N(Nt::Prefix),
                        T(Inherit),
                        N(Nt::Ids),
                        N(Nt::PyClassHeader),
                        N(Nt::PyClassTail),
                    ]),
                    alt(&[
                        T(Inherit),
                        N(Nt::Ids),
                        N(Nt::PyClassHeader),
                        N(Nt::PyClassTail),
                    ]),
                ],
            )
            .rule(
                Nt::PyClassHeader,
                [
                    alt(&[N(Nt::IndentedBlock)]),
                    alt(&[T(LParen), N(Nt::Ids), T(RParen), N(Nt::IndentedBlock)]),
                ],
            )
            .rule(
                Nt::PyClassTail,
                [alt(&[N(Nt::PyStatements), N(Nt::PyClass)]), eps()],
            )
            // === Procedural ===
            .rule(
                Nt::Procedural,
                [
                    labeled(&[N(Nt::PyFunc)], Procedural, Indented),
                    labeled(&[N(Nt::Func)], Procedural, Braced),
                ],
            )
            .rule(
                Nt::Func,
                [
                    alt(&[
                        T(Ident),
                        N(Nt::Ids),
                        T(LParen),
                        N(Nt::Ids),
                        T(RParen),
                        T(LBrace),
                        N(Nt::Statements),
                        T(RBrace),
                        N(Nt::FuncTail),
                    ]),
                    alt(&[
                        N(Nt::Prefix),
                        T(Ident),
                        N(Nt::Ids),
                        T(LParen),
                        N(Nt::Ids),
                        T(RParen),
                        T(LBrace),
                        N(Nt::Statements),
                        T(RBrace),
                        N(Nt::FuncTail),
                    ]),
                ],
            )
            .rule(
                Nt::FuncTail,
                [alt(&[N(Nt::Statements), N(Nt::Func)]), eps()],
            )
            .rule(
                Nt::PyFunc,
                [
                    alt(&[
                        T(Def),
                        N(Nt::Ids),
                        T(LParen),
                        N(Nt::Ids),
                        T(RParen),
                        N(Nt::IndentedBlock),
                        N(Nt::PyFuncTail),
                    ]),
                    alt(&[
                        N(Nt::Prefix),
                        T(Def),
                        T(Main),
                        T(LParen),
                        N(Nt::Ids),
                        T(RParen),
                        N(Nt::IndentedBlock),
                        N(Nt::PyFuncTail),
                    ]),
                ],
            )
            .rule(
                Nt::PyFuncTail,
                [alt(&[N(Nt::PyStatements), N(Nt::PyFunc)]), eps()],
            )
            // === Mixed ===
            .rule(
                Nt::Mixed,
                [
                    labeled(&[N(Nt::PyMixed)], Mixed, Indented),
                    labeled(&[N(Nt::MixedBraced)], Mixed, Braced),
                ],
            )
            .rule(
                Nt::MixedBraced,
                [
                    alt(&[N(Nt::Class), N(Nt::Func), N(Nt::MixedTail)]),
                    alt(&[N(Nt::Func), N(Nt::Class), N(Nt::MixedTail)]),
                ],
            )
            .rule(
                Nt::MixedTail,
                [
                    alt(&[N(Nt::Class)]),
                    alt(&[N(Nt::Func)]),
                    alt(&[N(Nt::MixedBraced)]),
                    alt(&[N(Nt::Main)]),
                    eps(),
                ],
            )
            .rule(
                Nt::PyMixed,
                [
                    alt(&[N(Nt::PyClass), N(Nt::PyFunc), N(Nt::PyMixedTail)]),
                    alt(&[N(Nt::PyFunc), N(Nt::PyClass), N(Nt::PyMixedTail)]),
                ],
            )
            .rule(
                Nt::PyMixedTail,
                [
                    alt(&[N(Nt::PyClass)]),
                    alt(&[N(Nt::PyFunc)]),
                    alt(&[N(Nt::PyMixed)]),
                    eps(),
                ],
            )
            // === Indentation blocks ===
            .rule(
                Nt::IndentedBlock,
                [alt(&[
                    T(Indent),
                    N(Nt::IndentedLine),
                    N(Nt::IndentedBlockTail),
                ])],
            )
            .rule(
                Nt::IndentedLine,
                [alt(&[N(Nt::PyStatement)]), alt(&[T(RParen)])],
            )
            .rule(
                Nt::IndentedBlockTail,
                [alt(&[N(Nt::IndentedBlock)]), eps()],
            )
            // === Python-style statements ===
            .rule(
                Nt::PyStatements,
                [
                    alt(&[N(Nt::PyStatement), N(Nt::PyStatementsTail)]),
                    alt(&[N(Nt::Prefix), N(Nt::PyStatement), N(Nt::PyStatementsTail)]),
                ],
            )
            .rule(
                Nt::PyStatementsTail,
                [
                    alt(&[N(Nt::PyStatements)]),
                    alt(&[N(Nt::IndentedBlock)]),
                    eps(),
                ],
            )
            .rule(
                Nt::PyStatement,
                [alt(&[T(Ident), N(Nt::Ids), N(Nt::PyStatementTail)])],
            )
            .rule(
                Nt::PyStatementTail,
                [
                    alt(&[T(LParen), N(Nt::PyParenBody)]),
                    alt(&[T(LBrace), N(Nt::PyBraceBody)]),
                    eps(),
                ],
            )
            .rule(
                Nt::PyParenBody,
                [
                    alt(&[T(RParen)]),
                    alt(&[N(Nt::IndentedBlock), N(Nt::PyParenClose)]),
                ],
            )
            .rule(
                Nt::PyBraceBody,
                [
                    alt(&[T(RBrace)]),
                    alt(&[N(Nt::IndentedBlock), N(Nt::PyBraceClose)]),
                ],
            )
            .rule(
                Nt::PyParenClose,
                [alt(&[T(RParen)]), alt(&[T(Indent), T(RParen)])],
            )
            .rule(
                Nt::PyBraceClose,
                [alt(&[T(RBrace)]), alt(&[T(Indent), T(RBrace)])],
            )
            // === Brace-style statements ===
            .rule(
                Nt::Statements,
                [alt(&[N(Nt::Statement), N(Nt::StatementsTail)])],
            )
            .rule(Nt::StatementsTail, [alt(&[N(Nt::Statements)]), eps()])
            .rule(
                Nt::Statement,
                [alt(&[N(Nt::Prefix), N(Nt::Ids), N(Nt::StatementTail)])],
            )
            .rule(
                Nt::StatementTail,
                [
                    alt(&[
                        T(LBrace),
                        N(Nt::Statements),
                        T(RBrace),
                        N(Nt::StatementClose),
                    ]),
                    alt(&[T(RBrace)]),
                    eps(),
                ],
            )
            .rule(Nt::StatementClose, [alt(&[T(RBrace)]), eps()])
            // === Leaves ===
            .rule(Nt::Prefix, [alt(&[T(Indent)]), alt(&[T(Prefix)])])
            .rule(Nt::Ids, [alt(&[T(Ident), N(Nt::Ids)]), eps()])
            .build()
    }
}
