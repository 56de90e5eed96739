#![allow(clippy::unwrap_used)]

use super::*;
use crate::ErrorCode;
use pretty_assertions::assert_eq;
use pyret_ir::Span;

fn unclosed_fun() -> Diagnostic {
    Diagnostic::new(ErrorCode::E1003, "missing `end` for `fun`")
        .at(Span::point(20), "`end` expected here")
        .opened_at(Span::new(0, 3), "`fun` opened here")
        .while_parsing("a function definition")
        .with_help("add `end`")
}

/// Run `f` against an emitter writing to a buffer, returning the output.
fn render(
    mode: ColorMode,
    source: Option<(&str, &str)>,
    f: impl FnOnce(&mut TerminalEmitter<&mut Vec<u8>>),
) -> String {
    let mut out = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut out, mode, false);
    if let Some((path, text)) = source {
        emitter.set_source(path, text);
    }
    f(&mut emitter);
    emitter.flush();
    drop(emitter);
    String::from_utf8(out).unwrap()
}

#[test]
fn test_terminal_emitter_no_color() {
    let text = render(ColorMode::Never, None, |e| e.emit(&unclosed_fun()));

    assert!(text.starts_with("error[E1003]: missing `end` for `fun`\n"));
    assert!(text.contains("  --> 20..20: `end` expected here\n"));
    assert!(text.contains("      0..3: `fun` opened here\n"));
    assert!(text.contains("  = note: while parsing a function definition\n"));
    assert!(text.contains("  = help: add `end`\n"));
    assert!(!text.contains("\x1b["));
}

#[test]
fn test_terminal_emitter_with_color() {
    let text = render(ColorMode::Always, None, |e| e.emit(&unclosed_fun()));
    assert!(text.contains("\x1b["));
    assert!(text.contains("E1003"));
}

#[test]
fn test_snippet_with_source() {
    let source = "x = 1\nfun f(y):\n  y\n";
    let text = render(ColorMode::Never, Some(("demo.arr", source)), |e| {
        e.emit(&Diagnostic::new(ErrorCode::E1001, "unexpected `:`").at(Span::new(6, 9), "here"));
    });

    assert_eq!(
        text,
        "error[E1001]: unexpected `:`\n  --> demo.arr:2:1\n   |\n 2 | fun f(y):\n   | ^^^ here\n\n"
    );
}

#[test]
fn test_opener_is_underlined_with_dashes() {
    let source = "fun f(y):\n  y\n";
    let text = render(ColorMode::Never, Some(("demo.arr", source)), |e| {
        e.emit(
            &Diagnostic::new(ErrorCode::E1003, "missing `end`")
                .at(Span::point(14), "")
                .opened_at(Span::new(0, 3), "opened here"),
        );
    });

    assert!(text.contains("      demo.arr:1:1\n   |\n 1 | fun f(y):\n   | --- opened here\n"));
    assert!(text.contains("  --> demo.arr:3:1\n"));
}

#[test]
fn test_zero_width_label_gets_one_caret() {
    let text = render(ColorMode::Never, Some(("a.arr", "f(")), |e| {
        e.emit(&Diagnostic::new(ErrorCode::E1003, "unclosed `(`").at(Span::point(2), ""));
    });

    assert!(text.contains("a.arr:1:3"));
    assert!(text.contains(" 1 | f(\n   |   ^\n"));
}

#[test]
fn test_whole_file_error_has_no_location() {
    let text = render(ColorMode::Never, Some(("big.arr", "")), |e| {
        e.emit(&Diagnostic::new(ErrorCode::E0005, "source too large"));
    });
    assert_eq!(text, "error[E0005]: source too large\n\n");
}

#[test]
fn test_emit_all() {
    let text = render(ColorMode::Never, None, |e| {
        e.emit_all(&[
            Diagnostic::new(ErrorCode::E1001, "error 1"),
            Diagnostic::new(ErrorCode::E1002, "error 2"),
        ]);
    });
    assert!(text.contains("error 1"));
    assert!(text.contains("error 2"));
}

#[test]
fn test_emit_summary() {
    assert_eq!(
        render(ColorMode::Never, None, |e| e.emit_summary(2)),
        "error: aborting due to 2 previous errors\n"
    );
    assert_eq!(
        render(ColorMode::Never, None, |e| e.emit_summary(1)),
        "error: aborting due to previous error\n"
    );
    assert_eq!(render(ColorMode::Never, None, |e| e.emit_summary(0)), "");
}

#[test]
fn test_color_mode() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
    assert_eq!(ColorMode::default(), ColorMode::Auto);
    assert_eq!(ColorMode::from_flag("never"), Some(ColorMode::Never));
    assert_eq!(ColorMode::from_flag("sometimes"), None);
}
