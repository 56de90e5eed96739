#![allow(clippy::unwrap_used)]

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_cursor_skips_trivia() {
    let tokens = pyret_lexer::lex("x  # note\n = 1").unwrap();
    let mut cursor = Cursor::new(&tokens);

    assert_eq!(cursor.current_kind(), TokenKind::Name);
    assert_eq!(cursor.nth_kind(1), TokenKind::Equals);
    assert_eq!(cursor.nth_kind(2), TokenKind::Number);
    assert_eq!(cursor.nth_kind(3), TokenKind::Eof);

    cursor.advance();
    assert_eq!(cursor.current_kind(), TokenKind::Equals);
    assert_eq!(cursor.previous_span(), Span::new(0, 1));
    assert!(cursor.current().flags.has_newline_before());
}

#[test]
fn test_cursor_stops_at_eof() {
    let tokens = pyret_lexer::lex("end").unwrap();
    let mut cursor = Cursor::new(&tokens);
    cursor.advance();
    assert!(cursor.is_at_end());
    cursor.advance();
    cursor.advance();
    assert!(cursor.is_at_end());
    assert_eq!(cursor.position(), 1);
    assert_eq!(cursor.current_span(), Span::point(3));
    assert_eq!(cursor.nth_kind(7), TokenKind::Eof);
}

#[test]
fn test_previous_at_start() {
    let tokens = pyret_lexer::lex("  x").unwrap();
    let cursor = Cursor::new(&tokens);
    assert_eq!(cursor.previous(), None);
    assert_eq!(cursor.previous_span(), Span::point(2));
}

#[test]
fn test_set_position_rewinds() {
    let tokens = pyret_lexer::lex("a b c").unwrap();
    let mut cursor = Cursor::new(&tokens);
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.current_span(), Span::new(4, 5));
    cursor.set_position(0);
    assert_eq!(cursor.current_span(), Span::new(0, 1));
}

#[test]
fn test_empty_token_list_is_eof() {
    let tokens = TokenList::new();
    let cursor = Cursor::new(&tokens);
    assert!(cursor.is_at_end());
    assert_eq!(cursor.current_span(), Span::point(0));
}
