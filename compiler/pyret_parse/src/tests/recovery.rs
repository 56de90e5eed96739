#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;
use pyret_diagnostic::ErrorCode;
use pyret_ir::TokenKind;
use pyret_lexer::LexErrorKind;

use super::{parse_ok, shape};
use crate::{parse, ErrorContext, ParseErrorKind};

#[test]
fn test_broken_statement_becomes_one_error_node() {
    let source = "fun f(x\n  x + 1\nend\n\ny = 2\n";
    let output = parse_ok(source);

    assert_eq!(
        shape(&output.syntax()),
        "SourceFile(Block(Error LetExpr(ToplevelBinding(Binding(NameBinding)) PrimExpr(NumExpr))))"
    );
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].code(), ErrorCode::E1001);
    assert_eq!(output.errors[0].context, ErrorContext::FunctionHeader);

    let error = output.error_nodes().next().unwrap();
    assert_eq!(error.to_string().trim_end(), "fun f(x\n  x + 1\nend");
    assert_eq!(output.syntax().to_string(), source);
}

#[test]
fn test_missing_end_at_eof_closes_construct() {
    let output = parse_ok("fun f(x):\n  x");

    assert_eq!(
        shape(&output.syntax()),
        "SourceFile(Block(FunExpr(FunHeader(Args(Binding(NameBinding))) Block(IdExpr) Error)))"
    );
    assert_eq!(output.errors.len(), 1);
    match &output.errors[0].kind {
        ParseErrorKind::UnclosedBlock {
            opener,
            closer,
            open_span,
        } => {
            assert_eq!(*opener, TokenKind::Fun);
            assert_eq!(*closer, TokenKind::End);
            assert_eq!(open_span.start, 0);
        }
        other => panic!("expected an unclosed block, got {other:?}"),
    }

    let diagnostic = &output.diagnostics()[0];
    assert_eq!(diagnostic.code, ErrorCode::E1003);
    assert_eq!(diagnostic.opener.as_ref().map(|label| label.span.start), Some(0));
    assert_eq!(diagnostic.help.as_deref(), Some("add `end`"));
}

#[test]
fn test_error_inside_block_keeps_enclosing_function() {
    let output = parse_ok("fun f():\n  x = = 1\n  y\nend");

    assert_eq!(
        shape(&output.syntax()),
        "SourceFile(Block(FunExpr(FunHeader(Args) Block(Error IdExpr))))"
    );
    assert_eq!(output.errors.len(), 1);
    assert_eq!(
        output.errors[0].kind,
        ParseErrorKind::ExpectedExpression {
            found: TokenKind::Equals
        }
    );
    assert_eq!(output.error_nodes().next().unwrap().to_string().trim(), "x = = 1");
}

#[test]
fn test_stray_end_at_top_level() {
    let output = parse_ok("x\nend\ny");

    assert_eq!(shape(&output.syntax()), "SourceFile(Block(IdExpr Error IdExpr))");
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].code(), ErrorCode::E1001);
}

#[test]
fn test_invalid_character_is_an_error_leaf() {
    let output = parse_ok("x = @ 1");

    assert_eq!(
        shape(&output.syntax()),
        "SourceFile(Block(LetExpr(ToplevelBinding(Binding(NameBinding)) Error) PrimExpr(NumExpr)))"
    );
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].kind, ParseErrorKind::InvalidCharacter);
    assert_eq!(output.errors[0].code(), ErrorCode::E0004);
}

#[test]
fn test_broken_header_recovers_before_program() {
    let output = parse_ok("import\nx = 1");

    assert_eq!(
        shape(&output.syntax()),
        "SourceFile(Error Block(LetExpr(ToplevelBinding(Binding(NameBinding)) PrimExpr(NumExpr))))"
    );
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].context, ErrorContext::ModuleHeader);
}

#[test]
fn test_every_error_has_a_diagnostic_with_context() {
    let output = parse_ok("x = \nfun g(:\n  1\nend\ny");

    assert!(output.has_errors());
    let diagnostics = output.diagnostics();
    assert_eq!(diagnostics.len(), output.errors.len());
    for diagnostic in &diagnostics {
        assert!(diagnostic.context.is_some(), "{diagnostic:?}");
    }
    assert_eq!(output.syntax().to_string(), "x = \nfun g(:\n  1\nend\ny");
}

#[test]
fn test_unterminated_string_is_fatal() {
    let err = parse("\"abc").unwrap_err();
    assert!(matches!(
        err.kind,
        LexErrorKind::UnterminatedString { delimiter: "\"" }
    ));
}
