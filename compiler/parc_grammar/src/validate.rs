//! Static checks the engine relies on.
//!
//! The recognizer tries alternatives in order and recurses freely, so it
//! terminates only if no rule can re-enter itself before consuming a
//! token. `validate` proves that for a table, and pins the ε-last
//! tie-break.

use crate::{Grammar, NonTerminal, Symbol};

/// A grammar the engine must refuse to run.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GrammarError {
    /// A rule refers to a nonterminal with no rule of its own.
    #[error("{referenced_by} refers to {rule}, which has no rule")]
    MissingRule {
        rule: NonTerminal,
        referenced_by: NonTerminal,
    },

    /// An ε-alternative shadows the alternatives after it.
    #[error("alternative {index} of {rule} is ε but is not the last alternative")]
    EpsilonNotLast { rule: NonTerminal, index: usize },

    /// A rule can reach itself without consuming input.
    ///
    /// `cycle` starts and ends with the same nonterminal.
    #[error("left recursion: {}", render_cycle(.cycle))]
    LeftRecursion { cycle: Vec<NonTerminal> },
}

fn render_cycle(cycle: &[NonTerminal]) -> String {
    cycle
        .iter()
        .map(|nt| nt.name())
        .collect::<Vec<_>>()
        .join(" -> ")
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnStack,
    Done,
}

impl Grammar {
    /// Check that the engine can run this grammar.
    ///
    /// Errors are reported in nonterminal declaration order: missing rules
    /// first, then misplaced ε, then left recursion.
    pub fn validate(&self) -> Result<(), GrammarError> {
        self.check_references()?;
        self.check_epsilon_last()?;
        self.check_left_recursion()
    }

    /// Whether `nt` can derive the empty string.
    ///
    /// Undefined nonterminals are not nullable.
    pub fn nullable(&self, nt: NonTerminal) -> bool {
        self.nullable_set()[nt.index()]
    }

    fn check_references(&self) -> Result<(), GrammarError> {
        for rule in self.rules() {
            for alt in rule.alternatives() {
                for symbol in alt.symbols() {
                    if let Symbol::N(target) = *symbol {
                        if self.rule(target).is_none() {
                            return Err(GrammarError::MissingRule {
                                rule: target,
                                referenced_by: rule.lhs(),
                            });
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn check_epsilon_last(&self) -> Result<(), GrammarError> {
        for rule in self.rules() {
            let last = rule.alternatives().len().saturating_sub(1);
            if let Some(index) = rule
                .alternatives()
                .iter()
                .position(crate::Alternative::is_epsilon)
                .filter(|&index| index < last)
            {
                return Err(GrammarError::EpsilonNotLast {
                    rule: rule.lhs(),
                    index,
                });
            }
        }
        Ok(())
    }

    /// Least fixpoint: a rule is nullable once any alternative is made of
    /// nullable nonterminals only.
    fn nullable_set(&self) -> [bool; NonTerminal::COUNT] {
        let mut nullable = [false; NonTerminal::COUNT];
        let mut changed = true;
        while changed {
            changed = false;
            for rule in self.rules() {
                if nullable[rule.lhs().index()] {
                    continue;
                }
                let derives_empty = rule.alternatives().iter().any(|alt| {
                    alt.symbols().iter().all(|symbol| match *symbol {
                        Symbol::T(_) => false,
                        Symbol::N(nt) => nullable[nt.index()],
                    })
                });
                if derives_empty {
                    nullable[rule.lhs().index()] = true;
                    changed = true;
                }
            }
        }
        nullable
    }

    /// Nonterminals `nt` can call before consuming anything: the leading
    /// symbols of each alternative up to and including the first one that
    /// is not nullable.
    fn leading_calls(&self, nt: NonTerminal, nullable: &[bool]) -> Vec<NonTerminal> {
        let mut calls = Vec::new();
        let Some(rule) = self.rule(nt) else {
            return calls;
        };
        for alt in rule.alternatives() {
            for symbol in alt.symbols() {
                match *symbol {
                    Symbol::T(_) => break,
                    Symbol::N(callee) => {
                        calls.push(callee);
                        if !nullable[callee.index()] {
                            break;
                        }
                    }
                }
            }
        }
        calls
    }

    fn check_left_recursion(&self) -> Result<(), GrammarError> {
        let nullable = self.nullable_set();
        let mut marks = [Mark::Unvisited; NonTerminal::COUNT];
        let mut path = Vec::new();
        for rule in self.rules() {
            if marks[rule.lhs().index()] == Mark::Unvisited {
                self.visit(rule.lhs(), &nullable, &mut marks, &mut path)?;
            }
        }
        Ok(())
    }

    fn visit(
        &self,
        nt: NonTerminal,
        nullable: &[bool],
        marks: &mut [Mark; NonTerminal::COUNT],
        path: &mut Vec<NonTerminal>,
    ) -> Result<(), GrammarError> {
        marks[nt.index()] = Mark::OnStack;
        path.push(nt);
        for callee in self.leading_calls(nt, nullable) {
            match marks[callee.index()] {
                Mark::OnStack => {
                    let start = path.iter().rposition(|&p| p == callee).unwrap_or(0);
                    let mut cycle = path[start..].to_vec();
                    cycle.push(callee);
                    return Err(GrammarError::LeftRecursion { cycle });
                }
                Mark::Unvisited => self.visit(callee, nullable, marks, path)?,
                Mark::Done => {}
            }
        }
        path.pop();
        marks[nt.index()] = Mark::Done;
        Ok(())
    }
}
