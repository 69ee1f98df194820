//! Engine behaviour observed through a recording tracer.

use parc_parse::{
    NonTerminal, Outcome, Recognizer, RecognizerConfig, Tag, TokenStream, Tracer, Verdict,
};
use pretty_assertions::assert_eq;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

/// Checks that every alternative of a rule invocation starts where the
/// invocation started, and collects each rule's result.
#[derive(Default)]
struct Recorder {
    open: Vec<(NonTerminal, usize)>,
    violations: Vec<String>,
    exits: Vec<(NonTerminal, usize, Option<usize>)>,
    alternatives: Vec<(NonTerminal, usize, usize)>,
}

impl Tracer for Recorder {
    fn enter_rule(&mut self, rule: NonTerminal, at: usize) {
        self.open.push((rule, at));
    }

    fn try_alternative(&mut self, rule: NonTerminal, index: usize, at: usize) {
        self.alternatives.push((rule, index, at));
        if self.open.last() != Some(&(rule, at)) {
            self.violations
                .push(format!("{rule} alternative {index} tried at {at}, entered at {:?}", self.open.last()));
        }
    }

    fn exit_rule(&mut self, rule: NonTerminal, at: usize, outcome: &Outcome<'_>) {
        if self.open.pop() != Some((rule, at)) {
            self.violations.push(format!("{rule} exited at {at} out of order"));
        }
        if let Some(end) = outcome.position() {
            if end < at {
                self.violations.push(format!("{rule} moved backwards from {at} to {end}"));
            }
        }
        self.exits.push((rule, at, outcome.position()));
    }

    fn terminal(&mut self, tag: Tag, at: usize, _matched: bool) {
        if let Some(&(rule, entered)) = self.open.last() {
            if at < entered {
                self.violations
                    .push(format!("{tag:?} tested at {at} inside {rule} entered at {entered}"));
            }
        }
    }
}

fn recognizer() -> Recognizer<'static> {
    Recognizer::new(parc_parse::standard_grammar(), RecognizerConfig::default()).unwrap()
}

fn traced(codes: &[u8]) -> (Verdict, Recorder) {
    let tokens = TokenStream::from_codes(codes).unwrap();
    let mut recorder = Recorder::default();
    let verdict = recognizer().recognize_traced(&tokens, &mut recorder).unwrap();
    (verdict, recorder)
}

#[test]
fn alternatives_restart_from_rule_entry() {
    let samples: &[&[u8]] = &[
        &[9, 1, 0, 8, 0],
        &[2, 0, 4, 0, 5, 6, 0, 7],
        &[1, 0, 1, 0, 6, 0, 7],
        &[0, 0, 4, 0, 5, 6, 9, 0, 7, 7, 0, 1, 0, 6, 9, 0, 7, 7],
        &[6, 7],
        &[],
    ];
    for codes in samples {
        let (_, recorder) = traced(codes);
        assert_eq!(recorder.violations, Vec::<String>::new(), "{codes:?}");
        assert!(recorder.open.is_empty(), "{codes:?}");
    }
}

#[test]
fn later_alternatives_run_after_partial_failure() {
    // PYCLASS alternative 0 needs PREFIX; `class` starts alternative 1 at
    // the same offset.
    let (verdict, recorder) = traced(&[1, 0, 8, 0]);
    assert!(verdict.is_accepted());
    let pyclass: Vec<_> = recorder
        .alternatives
        .iter()
        .filter(|(rule, _, _)| *rule == NonTerminal::PyClass)
        .map(|&(_, index, at)| (index, at))
        .collect();
    assert_eq!(pyclass, vec![(0, 0), (1, 0)]);
}

#[test]
fn consuming_alternative_beats_epsilon() {
    // After the class, S' could match nothing; it takes the statement.
    let (verdict, recorder) = traced(&[9, 1, 0, 8, 0, 9, 0]);
    assert_eq!(verdict.acceptance().map(|a| a.consumed), Some(7));
    let tail: Vec<_> = recorder
        .exits
        .iter()
        .filter(|(rule, _, _)| *rule == NonTerminal::StartTail)
        .map(|&(_, at, end)| (at, end))
        .collect();
    assert_eq!(tail, vec![(5, Some(7))]);
}

#[test]
fn failed_rules_report_no_position() {
    let (verdict, recorder) = traced(&[6, 7]);
    assert!(verdict.is_rejected());
    let start = recorder
        .exits
        .iter()
        .find(|(rule, _, _)| *rule == NonTerminal::Start)
        .copied();
    assert_eq!(start, Some((NonTerminal::Start, 0, None)));
}

#[test]
fn recognition_is_idempotent() {
    let recognizer = recognizer();
    for codes in [&[2u8, 0, 4, 0, 5, 6, 0, 7][..], &[9, 1, 0, 8, 0], &[0]] {
        let tokens = TokenStream::from_codes(codes).unwrap();
        let first = recognizer.recognize(&tokens).unwrap();
        let second = recognizer.recognize(&tokens).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn batch_results_keep_input_order() {
    let streams: Vec<TokenStream> = [
        &[9u8, 1, 0, 8, 0][..],
        &[6, 7],
        &[2, 0, 4, 0, 5, 8, 0],
        &[],
        &[0, 1, 0, 6, 9, 0, 7, 7],
    ]
    .iter()
    .map(|codes| TokenStream::from_codes(codes).unwrap())
    .collect();

    let recognizer = recognizer();
    let batch = recognizer.recognize_all(&streams);
    let one_by_one: Vec<_> = streams.iter().map(|t| recognizer.recognize(t)).collect();
    assert_eq!(batch, one_by_one);

    let accepted: Vec<bool> = batch
        .iter()
        .map(|verdict| verdict.as_ref().is_ok_and(Verdict::is_accepted))
        .collect();
    assert_eq!(accepted, vec![true, false, true, false, true]);

    assert_eq!(parc_parse::recognize_all(&streams).unwrap().len(), streams.len());
}

#[test]
fn standard_recognizer_is_built_once() {
    let first = parc_parse::standard_recognizer().unwrap();
    let second = parc_parse::standard_recognizer().unwrap();
    assert!(std::ptr::eq(first, second));
    assert!(std::ptr::eq(first.grammar(), parc_parse::standard_grammar()));
}

/// Counts every event dispatched to it.
struct CountEvents(Arc<AtomicUsize>);

impl<S: tracing::Subscriber> Layer<S> for CountEvents {
    fn on_event(&self, _event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn init_tracing_keeps_host_subscriber() {
    let count = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry().with(CountEvents(Arc::clone(&count)));
    let _guard = tracing::subscriber::set_default(subscriber);

    parc_parse::init_tracing();
    parc_parse::init_tracing();

    let before = count.load(Ordering::SeqCst);
    tracing::info!("host event");
    assert_eq!(count.load(Ordering::SeqCst), before + 1);

    // The recognizer's own events land on the host subscriber too.
    let tokens = TokenStream::from_codes(&[9, 1, 0, 8, 0]).unwrap();
    assert!(parc_parse::recognize(&tokens).unwrap().is_accepted());
    assert!(count.load(Ordering::SeqCst) > before + 1);
}
