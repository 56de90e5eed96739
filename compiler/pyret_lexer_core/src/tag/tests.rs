use super::*;

#[test]
fn repr_u8_semantic_ranges() {
    assert_eq!(RawTag::Ident as u8, 0);
    assert_eq!(RawTag::StringOpen as u8, 16);
    assert_eq!(RawTag::Plus as u8, 32);
    assert_eq!(RawTag::LeftParen as u8, 80);
    assert_eq!(RawTag::Whitespace as u8, 112);
    assert_eq!(RawTag::Invalid as u8, 240);
    assert_eq!(RawTag::Eof as u8, 255);
}

#[test]
fn lexemes() {
    assert_eq!(RawTag::Spaceship.lexeme(), Some("<=>"));
    assert_eq!(RawTag::ColonEquals.lexeme(), Some(":="));
    assert_eq!(RawTag::DotDotDot.lexeme(), Some("..."));
    assert_eq!(RawTag::LeftParen.lexeme(), Some("("));
    assert_eq!(RawTag::Ident.lexeme(), None);
    assert_eq!(RawTag::StringContent.lexeme(), None);
}

#[test]
fn trivia_and_fatal() {
    assert!(RawTag::BlockComment.is_trivia());
    assert!(!RawTag::Invalid.is_trivia());
    assert!(RawTag::UnterminatedBlockComment.is_fatal());
    assert!(RawTag::InvalidEscape.is_fatal());
    assert!(!RawTag::Invalid.is_fatal());
}

#[test]
fn string_kind_escapes() {
    assert!(StringKind::Double.is_simple_escape(b'"'));
    assert!(StringKind::Single.is_simple_escape(b'"'));
    assert!(StringKind::Triple.is_simple_escape(b'`'));
    assert!(!StringKind::Double.is_simple_escape(b'`'));
    assert!(!StringKind::Double.is_simple_escape(b'q'));
    assert_eq!(StringKind::Triple.delimiter_len(), 3);
    assert!(!StringKind::Single.allows_newlines());
}
