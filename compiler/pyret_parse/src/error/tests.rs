#![allow(clippy::unwrap_used)]

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_codes_match_kinds() {
    let span = Span::new(0, 1);
    let cases = [
        (
            ParseErrorKind::UnexpectedToken {
                found: TokenKind::Comma,
                expected: "`)`".to_string(),
            },
            ErrorCode::E1001,
        ),
        (
            ParseErrorKind::ExpectedExpression {
                found: TokenKind::End,
            },
            ErrorCode::E1002,
        ),
        (
            ParseErrorKind::UnclosedBlock {
                opener: TokenKind::Fun,
                closer: TokenKind::End,
                open_span: span,
            },
            ErrorCode::E1003,
        ),
        (
            ParseErrorKind::ExpectedName {
                found: TokenKind::Number,
            },
            ErrorCode::E1004,
        ),
        (
            ParseErrorKind::ExpectedAnnotation {
                found: TokenKind::Star,
            },
            ErrorCode::E1005,
        ),
        (ParseErrorKind::InvalidCharacter, ErrorCode::E0004),
    ];
    for (kind, code) in cases {
        assert_eq!(ParseError::new(span, kind, ErrorContext::Module).code(), code);
    }
}

#[test]
fn test_messages() {
    let err = ParseError::new(
        Span::new(4, 5),
        ParseErrorKind::UnexpectedToken {
            found: TokenKind::Name,
            expected: "`,` or `)`".to_string(),
        },
        ErrorContext::FunctionHeader,
    );
    assert_eq!(err.to_string(), "expected `,` or `)`, found name");

    let err = ParseError::new(
        Span::point(20),
        ParseErrorKind::UnclosedBlock {
            opener: TokenKind::Fun,
            closer: TokenKind::End,
            open_span: Span::new(0, 3),
        },
        ErrorContext::FunctionDef,
    );
    assert_eq!(err.to_string(), "missing `end` to close `fun`");
}

#[test]
fn test_unclosed_block_diagnostic_points_at_opener() {
    let err = ParseError::new(
        Span::point(20),
        ParseErrorKind::UnclosedBlock {
            opener: TokenKind::Fun,
            closer: TokenKind::End,
            open_span: Span::new(0, 3),
        },
        ErrorContext::FunctionDef,
    );
    let diag = err.to_diagnostic();

    assert_eq!(diag.code, ErrorCode::E1003);
    assert_eq!(diag.span(), Some(Span::point(20)));
    assert_eq!(diag.opener.as_ref().map(|label| label.span), Some(Span::new(0, 3)));
    assert_eq!(diag.context.as_deref(), Some("a function definition"));
    assert_eq!(diag.help.as_deref(), Some("add `end`"));
}

#[test]
fn test_lex_error_diagnostics() {
    let err = pyret_lexer::lex("x = \"abc").unwrap_err();
    let diag = lex_error_to_diagnostic(&err);
    assert_eq!(diag.code, ErrorCode::E0001);
    assert_eq!(diag.span(), Some(Span::new(4, 8)));
    assert_eq!(diag.help.as_deref(), Some("add a closing `\"`"));

    let err = pyret_lexer::lex("#| open").unwrap_err();
    assert_eq!(lex_error_to_diagnostic(&err).code, ErrorCode::E0002);

    let err = pyret_lexer::lex("'a\\qb'").unwrap_err();
    assert_eq!(lex_error_to_diagnostic(&err).code, ErrorCode::E0003);
}

#[test]
fn test_source_too_large_has_no_label() {
    let diag = lex_error_to_diagnostic(&LexError::source_too_large(usize::MAX));
    assert_eq!(diag.code, ErrorCode::E0005);
    assert_eq!(diag.span(), None);
}

#[test]
fn test_context_descriptions() {
    assert_eq!(ErrorContext::default(), ErrorContext::Module);
    assert_eq!(ErrorContext::CasesExpression.description(), "a cases expression");
    assert_eq!(ErrorContext::TypeAnnotation.description(), "a type annotation");
}
