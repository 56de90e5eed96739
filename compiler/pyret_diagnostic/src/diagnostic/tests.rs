use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_unclosed_block_parts() {
    let diag = Diagnostic::new(ErrorCode::E1003, "missing `end`")
        .at(Span::point(10), "`end` expected here")
        .opened_at(Span::new(0, 3), "`fun` opened here")
        .while_parsing("a function definition")
        .with_help("add `end`");

    assert_eq!(diag.span(), Some(Span::point(10)));
    assert_eq!(diag.opener.map(|label| label.span), Some(Span::new(0, 3)));
    assert_eq!(diag.context.as_deref(), Some("a function definition"));
    assert_eq!(diag.help.as_deref(), Some("add `end`"));
}

#[test]
fn test_whole_file_error_has_no_span() {
    let diag = Diagnostic::new(ErrorCode::E0005, "source too large");
    assert_eq!(diag.span(), None);
    assert_eq!(diag.opener, None);
}
