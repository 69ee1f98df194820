use super::*;
use parc_ir::{Family, Syntax, Tag};
use pretty_assertions::assert_eq;

fn rejection() -> Rejection {
    Rejection {
        furthest: 5,
        expected: TagSet::single(Tag::Indent),
        best_guess: Some(Paradigm::new(Family::Procedural, Syntax::Indented)),
        matched_prefix: None,
    }
}

#[test]
fn test_accessors() {
    let paradigm = Paradigm::new(Family::ObjectOriented, Syntax::Braced);
    let accepted = Verdict::Accepted(Acceptance {
        paradigm: Some(paradigm),
        consumed: 8,
    });
    assert!(accepted.is_accepted());
    assert_eq!(accepted.paradigm(), Some(paradigm));
    assert_eq!(accepted.acceptance().map(|a| a.consumed), Some(8));
    assert_eq!(accepted.rejection(), None);

    let rejected = Verdict::Rejected(rejection());
    assert!(rejected.is_rejected());
    assert_eq!(rejected.paradigm(), None);
    assert_eq!(rejected.rejection().map(|r| r.furthest), Some(5));
}

#[test]
fn test_display_accepted() {
    let verdict = Verdict::Accepted(Acceptance {
        paradigm: Some(Paradigm::new(Family::ObjectOriented, Syntax::Indented)),
        consumed: 5,
    });
    assert_eq!(verdict.to_string(), "accepted as indented object-oriented");

    let verdict = Verdict::Accepted(Acceptance {
        paradigm: None,
        consumed: 3,
    });
    assert_eq!(verdict.to_string(), "accepted without a paradigm");
}

#[test]
fn test_display_rejected() {
    assert_eq!(
        Verdict::Rejected(rejection()).to_string(),
        "rejected at token 5: expected indentation; the best guess is indented procedural"
    );

    let bare = Rejection {
        furthest: 0,
        expected: TagSet::new().with(Tag::Ident).with(Tag::Prefix),
        best_guess: None,
        matched_prefix: None,
    };
    assert_eq!(
        bare.to_string(),
        "rejected at token 0: expected identifier or access modifier"
    );

    let leftover = Rejection {
        furthest: 4,
        expected: TagSet::single(Tag::Eof),
        best_guess: None,
        matched_prefix: Some(4),
    };
    assert_eq!(
        leftover.to_string(),
        "rejected at token 4: expected end of input; the first 4 tokens form a complete fragment"
    );
}
