use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_index_matches_declaration_order() {
    for (i, paradigm) in Paradigm::ALL.iter().enumerate() {
        assert_eq!(paradigm.index(), i);
    }
}

#[test]
fn test_display() {
    let p = Paradigm::new(Family::ObjectOriented, Syntax::Braced);
    assert_eq!(p.to_string(), "braced object-oriented");
    let p = Paradigm::new(Family::Mixed, Syntax::Indented);
    assert_eq!(p.to_string(), "indented mixed");
}
