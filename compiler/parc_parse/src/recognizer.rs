//! The backtracking engine.
//!
//! One generic evaluator interprets any validated [`Grammar`]:
//!
//! - a rule tries its alternatives in declaration order and takes the first
//!   that matches (ordered choice);
//! - an alternative matches its symbols left to right and stops at the
//!   first failure;
//! - a terminal matches exactly one token.
//!
//! Every step receives the cursor it starts from and returns the cursor it
//! ends at inside [`Outcome::Matched`]. A failing alternative returns
//! [`Outcome::Failed`] and the rule simply tries the next alternative from
//! its own, unchanged cursor.

use parc_grammar::{Alternative, Grammar, GrammarError, NonTerminal, Symbol};
use parc_ir::{Paradigm, Tag, TokenStream};
use parc_stack::{ensure_sufficient_stack, DepthBudget};
use rayon::prelude::*;
use tracing::{debug, trace_span, warn};

use crate::farthest::Farthest;
use crate::{
    Acceptance, Cursor, NoTrace, Outcome, RecognizeError, RecognizerConfig, Tracer, Verdict,
};

/// A validated grammar paired with resource limits.
///
/// Holds no per-run state, so one recognizer can serve any number of
/// streams, including from several threads at once.
#[derive(Clone, Copy, Debug)]
pub struct Recognizer<'g> {
    grammar: &'g Grammar,
    config: RecognizerConfig,
}

impl<'g> Recognizer<'g> {
    /// Validate `grammar` and build a recognizer for it.
    pub fn new(grammar: &'g Grammar, config: RecognizerConfig) -> Result<Self, GrammarError> {
        grammar.validate()?;
        Ok(Recognizer { grammar, config })
    }

    #[inline]
    pub fn grammar(&self) -> &'g Grammar {
        self.grammar
    }

    #[inline]
    pub fn config(&self) -> RecognizerConfig {
        self.config
    }

    /// Recognize `tokens` from the start symbol `S`.
    pub fn recognize(&self, tokens: &TokenStream) -> Result<Verdict, RecognizeError> {
        self.recognize_from(NonTerminal::Start, tokens, &mut NoTrace)
    }

    /// Like [`recognize`](Self::recognize), reporting every step to `tracer`.
    pub fn recognize_traced<T: Tracer + ?Sized>(
        &self,
        tokens: &TokenStream,
        tracer: &mut T,
    ) -> Result<Verdict, RecognizeError> {
        self.recognize_from(NonTerminal::Start, tokens, tracer)
    }

    /// Recognize `tokens` as a derivation of `start`.
    ///
    /// The whole stream must be consumed; a match of a proper prefix is a
    /// rejection with [`Rejection::matched_prefix`](crate::Rejection) set.
    #[tracing::instrument(level = "debug", skip_all, fields(start = %start, tokens = tokens.len()))]
    pub fn recognize_from<T: Tracer + ?Sized>(
        &self,
        start: NonTerminal,
        tokens: &TokenStream,
        tracer: &mut T,
    ) -> Result<Verdict, RecognizeError> {
        if tokens.len() > self.config.max_tokens {
            warn!(limit = self.config.max_tokens, "token stream too long");
            return Err(RecognizeError::TooManyTokens {
                len: tokens.len(),
                limit: self.config.max_tokens,
            });
        }
        if self.grammar.rule(start).is_none() {
            return Err(RecognizeError::UndefinedRule { rule: start });
        }

        let mut run = Run {
            grammar: self.grammar,
            budget: DepthBudget::new(self.config.max_depth),
            farthest: Farthest::new(),
            within: None,
            tracer,
        };
        let outcome = run.rule(start, Cursor::new(tokens)).inspect_err(|err| {
            debug!(%err, "recognition aborted");
        })?;

        let verdict = match outcome {
            Outcome::Matched { cursor, paradigm } if cursor.is_at_end() => {
                Verdict::Accepted(Acceptance {
                    paradigm,
                    consumed: cursor.position(),
                })
            }
            _ => Verdict::Rejected(run.farthest.into_rejection(outcome.position())),
        };
        debug!(%verdict, "recognition finished");
        Ok(verdict)
    }

    /// Recognize independent streams in parallel.
    ///
    /// Results are in the order of `streams`.
    pub fn recognize_all(&self, streams: &[TokenStream]) -> Vec<Result<Verdict, RecognizeError>> {
        streams
            .par_iter()
            .map(|tokens| self.recognize(tokens))
            .collect()
    }
}

/// State of one run: everything that is not the cursor.
struct Run<'g, 'r, T: Tracer + ?Sized> {
    grammar: &'g Grammar,
    budget: DepthBudget,
    farthest: Farthest,
    /// Label of the innermost labelled alternative being evaluated.
    within: Option<Paradigm>,
    tracer: &'r mut T,
}

impl<T: Tracer + ?Sized> Run<'_, '_, T> {
    fn rule<'a>(
        &mut self,
        rule: NonTerminal,
        at: Cursor<'a>,
    ) -> Result<Outcome<'a>, RecognizeError> {
        let limit = self.budget.limit();
        self.budget
            .descend()
            .map_err(|_| RecognizeError::RecursionLimit {
                limit,
                position: at.position(),
            })?;
        let outcome = ensure_sufficient_stack(|| self.alternatives(rule, at));
        self.budget.ascend();
        outcome
    }

    fn alternatives<'a>(
        &mut self,
        rule: NonTerminal,
        at: Cursor<'a>,
    ) -> Result<Outcome<'a>, RecognizeError> {
        let _span = trace_span!(
            "rule",
            %rule,
            at = at.position(),
            depth = self.budget.depth()
        )
        .entered();
        let grammar = self.grammar;
        let Some(definition) = grammar.rule(rule) else {
            return Err(RecognizeError::UndefinedRule { rule });
        };

        self.tracer.enter_rule(rule, at.position());
        let mut outcome = Outcome::Failed;
        for (index, alternative) in definition.alternatives().iter().enumerate() {
            self.tracer.try_alternative(rule, index, at.position());
            outcome = self.alternative(alternative, at)?;
            if outcome.is_matched() {
                break;
            }
        }
        self.tracer.exit_rule(rule, at.position(), &outcome);
        Ok(outcome)
    }

    fn alternative<'a>(
        &mut self,
        alternative: &Alternative,
        at: Cursor<'a>,
    ) -> Result<Outcome<'a>, RecognizeError> {
        let label = alternative.label();
        let outer = self.within;
        if label.is_some() {
            self.within = label;
        }
        let outcome = self.sequence(alternative.symbols(), at);
        self.within = outer;
        Ok(outcome?.labeled(label))
    }

    fn sequence<'a>(
        &mut self,
        symbols: &[Symbol],
        at: Cursor<'a>,
    ) -> Result<Outcome<'a>, RecognizeError> {
        let mut outcome = Outcome::matched(at);
        for symbol in symbols {
            let Some(cursor) = outcome.cursor() else {
                break;
            };
            let step = match *symbol {
                Symbol::T(tag) => self.terminal(tag, cursor),
                Symbol::N(rule) => self.rule(rule, cursor)?,
            };
            outcome = outcome.followed_by(step);
        }
        Ok(outcome)
    }

    fn terminal<'a>(&mut self, tag: Tag, at: Cursor<'a>) -> Outcome<'a> {
        let next = at.expect(tag);
        self.farthest.record(
            at.position(),
            tag,
            next.map(|cursor| cursor.position()),
            self.within,
        );
        self.tracer.terminal(tag, at.position(), next.is_some());
        next.map_or(Outcome::Failed, Outcome::matched)
    }
}

#[cfg(test)]
mod tests;
