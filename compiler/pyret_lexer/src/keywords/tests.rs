use super::*;
use pretty_assertions::assert_eq;

#[test]
fn every_fixed_text_keyword_round_trips() {
    // Every kind whose display name is a single word resolves back to itself.
    for &kind in TokenKind::ALL {
        let name = kind.name();
        let is_word = name.len() >= 2
            && name.as_bytes()[0].is_ascii_lowercase()
            && !kind.has_variable_text();
        if is_word {
            assert_eq!(lookup(name), Some(kind), "keyword {name:?} not resolved");
        }
    }
}

#[test]
fn plain_names_are_not_keywords() {
    for text in ["x", "fact", "ends", "is-equal", "row", "where", "elsewhere", "lamb"] {
        assert_eq!(lookup(text), None, "{text:?} should be a name");
    }
}

#[test]
fn check_operators() {
    assert_eq!(lookup("is"), Some(TokenKind::Is));
    assert_eq!(lookup("is-not<=>"), Some(TokenKind::IsNotSpaceship));
    assert_eq!(lookup("raises-other-than"), Some(TokenKind::RaisesOtherThan));
    assert_eq!(lookup("does-not-raise"), Some(TokenKind::DoesNotRaise));
}

#[test]
fn colon_keywords_include_the_colon() {
    assert_eq!(lookup("where:"), Some(TokenKind::WhereColon));
    assert_eq!(lookup("otherwise:"), Some(TokenKind::OtherwiseColon));
    assert_eq!(lookup("ask:"), None);
}

#[test]
fn soft_keywords_stay_names() {
    for kw in SoftKeyword::ALL {
        assert_eq!(lookup(kw.as_str()), None);
        assert_eq!(SoftKeyword::from_text(kw.as_str()), Some(kw));
    }
    assert_eq!(SoftKeyword::from_text("hide"), None);
    assert_eq!(SoftKeyword::Ascending.to_string(), "ascending");
}
