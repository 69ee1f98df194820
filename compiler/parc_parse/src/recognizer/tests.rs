use super::*;
use crate::Rejection;
use parc_grammar::Symbol::{N, T};
use parc_ir::{Family, Syntax, TagSet};
use pretty_assertions::assert_eq;

fn stream(codes: &[u8]) -> TokenStream {
    TokenStream::from_codes(codes).unwrap()
}

fn standard() -> Grammar {
    Grammar::standard()
}

#[test]
fn test_new_validates_grammar() {
    let looping = Grammar::builder()
        .rule(
            NonTerminal::Ids,
            [Alternative::new([N(NonTerminal::Ids)]), Alternative::epsilon()],
        )
        .build();
    let err = Recognizer::new(&looping, RecognizerConfig::default()).unwrap_err();
    assert_eq!(
        RecognizeError::from(err).to_string(),
        "invalid grammar: left recursion: IDS -> IDS"
    );
}

#[test]
fn test_recognize_from_nested_rule() {
    let grammar = standard();
    let recognizer = Recognizer::new(&grammar, RecognizerConfig::default()).unwrap();

    let verdict = recognizer
        .recognize_from(NonTerminal::Ids, &stream(&[0, 0, 0]), &mut NoTrace)
        .unwrap();
    assert_eq!(
        verdict,
        Verdict::Accepted(Acceptance {
            paradigm: None,
            consumed: 3,
        })
    );

    let verdict = recognizer
        .recognize_from(NonTerminal::Ids, &stream(&[0, 0, 1]), &mut NoTrace)
        .unwrap();
    assert_eq!(
        verdict,
        Verdict::Rejected(Rejection {
            furthest: 2,
            expected: TagSet::new().with(Tag::Ident).with(Tag::Eof),
            best_guess: None,
            matched_prefix: Some(2),
        })
    );
}

#[test]
fn test_leftover_after_complete_match() {
    let grammar = standard();
    let recognizer = Recognizer::new(&grammar, RecognizerConfig::default()).unwrap();
    let verdict = recognizer
        .recognize_from(NonTerminal::Prefix, &stream(&[8, 8]), &mut NoTrace)
        .unwrap();
    assert_eq!(
        verdict,
        Verdict::Rejected(Rejection {
            furthest: 1,
            expected: TagSet::single(Tag::Eof),
            best_guess: None,
            matched_prefix: Some(1),
        })
    );
}

#[test]
fn test_undefined_start_rule() {
    let grammar = Grammar::builder()
        .rule(NonTerminal::Prefix, [Alternative::new([T(Tag::Prefix)])])
        .build();
    let recognizer = Recognizer::new(&grammar, RecognizerConfig::default()).unwrap();
    assert_eq!(
        recognizer.recognize(&stream(&[9])),
        Err(RecognizeError::UndefinedRule {
            rule: NonTerminal::Start,
        })
    );
    assert!(recognizer
        .recognize_from(NonTerminal::Prefix, &stream(&[9]), &mut NoTrace)
        .unwrap()
        .is_accepted());
}

#[test]
fn test_token_ceiling() {
    let grammar = standard();
    let config = RecognizerConfig::default().with_max_tokens(4);
    let recognizer = Recognizer::new(&grammar, config).unwrap();
    assert_eq!(
        recognizer.recognize(&stream(&[9, 1, 0, 8, 0])),
        Err(RecognizeError::TooManyTokens { len: 5, limit: 4 })
    );
    assert!(recognizer.recognize(&stream(&[1, 0, 8, 0])).unwrap().is_accepted());
}

#[test]
fn test_depth_ceiling_reports_position() {
    let grammar = standard();
    let tokens = stream(&[9, 1, 0, 8, 0]);

    // S, PARADIGM, OOP, PYCLASS and IDS fit; the IDS nested after the class
    // name is the sixth level.
    let recognizer =
        Recognizer::new(&grammar, RecognizerConfig::default().with_max_depth(5)).unwrap();
    assert_eq!(
        recognizer.recognize(&tokens),
        Err(RecognizeError::RecursionLimit {
            limit: 5,
            position: 3,
        })
    );

    let recognizer =
        Recognizer::new(&grammar, RecognizerConfig::default().with_max_depth(3)).unwrap();
    assert_eq!(
        recognizer.recognize(&tokens),
        Err(RecognizeError::RecursionLimit {
            limit: 3,
            position: 0,
        })
    );
    assert_eq!(
        recognizer.recognize(&tokens).unwrap_err().to_string(),
        "rule nesting passed the limit of 3 at token 0"
    );
}

#[test]
fn test_zero_depth_refuses_start_rule() {
    let grammar = standard();
    let recognizer =
        Recognizer::new(&grammar, RecognizerConfig::default().with_max_depth(0)).unwrap();
    assert_eq!(
        recognizer.recognize(&stream(&[])),
        Err(RecognizeError::RecursionLimit {
            limit: 0,
            position: 0,
        })
    );
}

#[test]
fn test_labels_classify_custom_grammar() {
    let indented = Paradigm::new(Family::Mixed, Syntax::Indented);
    let braced = Paradigm::new(Family::Mixed, Syntax::Braced);
    let grammar = Grammar::builder()
        .rule(
            NonTerminal::Start,
            [
                Alternative::new([T(Tag::Indent), N(NonTerminal::Ids)]).labeled(indented),
                Alternative::new([T(Tag::LBrace), N(NonTerminal::Ids), T(Tag::RBrace)])
                    .labeled(braced),
            ],
        )
        .rule(
            NonTerminal::Ids,
            [
                Alternative::new([T(Tag::Ident), N(NonTerminal::Ids)]),
                Alternative::epsilon(),
            ],
        )
        .build();
    let recognizer = Recognizer::new(&grammar, RecognizerConfig::default()).unwrap();

    assert_eq!(
        recognizer.recognize(&stream(&[8, 0, 0])).unwrap().paradigm(),
        Some(indented)
    );
    assert_eq!(
        recognizer.recognize(&stream(&[6, 0, 7])).unwrap().paradigm(),
        Some(braced)
    );

    let verdict = recognizer.recognize(&stream(&[6, 0, 0])).unwrap();
    let rejection = verdict.rejection().unwrap();
    assert_eq!(rejection.furthest, 3);
    assert_eq!(rejection.expected, TagSet::new().with(Tag::Ident).with(Tag::RBrace));
    assert_eq!(rejection.best_guess, Some(braced));
}

#[derive(Default)]
struct Counter {
    rules: usize,
    terminals: usize,
}

impl Tracer for Counter {
    fn enter_rule(&mut self, _rule: NonTerminal, _at: usize) {
        self.rules += 1;
    }

    fn terminal(&mut self, _tag: Tag, _at: usize, _matched: bool) {
        self.terminals += 1;
    }
}

#[test]
fn test_trait_object_tracer() {
    let grammar = standard();
    let recognizer = Recognizer::new(&grammar, RecognizerConfig::default()).unwrap();
    let mut counter = Counter::default();
    let tracer: &mut dyn Tracer = &mut counter;
    let verdict = recognizer
        .recognize_traced(&stream(&[9, 1, 0, 8, 0]), tracer)
        .unwrap();
    assert!(verdict.is_accepted());
    assert!(counter.rules > 0);
    assert!(counter.terminals >= 5);
}
