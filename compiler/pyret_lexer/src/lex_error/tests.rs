use super::*;
use pretty_assertions::assert_eq;

#[test]
fn unterminated_string_records_start() {
    let err = LexError::unterminated_string(Span::new(4, 8), "\"");
    assert_eq!(err.context, LexErrorContext::InsideString { start: 4 });
    assert_eq!(
        err.to_string(),
        "unterminated string literal, expected closing `\"` at 4..8"
    );
    assert_eq!(err.help().as_deref(), Some("add a closing `\"`"));
}

#[test]
fn invalid_escape_message() {
    let err = LexError::invalid_escape(Span::new(3, 5), 'q', 0);
    assert_eq!(err.kind.to_string(), "invalid escape sequence `\\q`");
    assert_eq!(err.context, LexErrorContext::InsideString { start: 0 });
}

#[test]
fn unterminated_block_comment_context() {
    let err = LexError::unterminated_block_comment(Span::new(2, 20));
    assert_eq!(err.kind, LexErrorKind::UnterminatedBlockComment);
    assert_eq!(err.context, LexErrorContext::InsideBlockComment { start: 2 });
    assert!(err.help().is_some());
}

#[test]
fn source_too_large_has_no_help() {
    let err = LexError::source_too_large(usize::MAX);
    assert_eq!(err.help(), None);
    assert_eq!(err.span, Span::DUMMY);
}
