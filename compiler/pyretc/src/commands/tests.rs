#![allow(clippy::unwrap_used)]

use std::path::Path;

use pretty_assertions::assert_eq;
use pyret_diagnostic::emitter::ColorMode;
use tempfile::tempdir;

use super::*;

/// Write `text` to `name` under `dir`, returning the path as the CLI sees it.
fn write_source(dir: &Path, name: &str, text: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, text).unwrap();
    path.to_string_lossy().into_owned()
}

fn plain(paths: &[String]) -> Options {
    Options {
        color: ColorMode::Never,
        paths: paths.to_vec(),
        ..Options::default()
    }
}

fn text(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).unwrap()
}

#[test]
fn test_lex_prints_every_token() {
    let dir = tempdir().unwrap();
    let file = write_source(dir.path(), "lex.arr", "x = 1");
    let (mut out, mut err) = (Vec::new(), Vec::new());

    let outcome = lex_file(&file, &plain(&[]), &mut out, &mut err).unwrap();

    assert_eq!(outcome, Outcome::Clean);
    let out = text(out);
    assert!(out.contains("(6 tokens)"), "{out}");
    assert!(out.contains("  Name @ 0..1 \"x\"\n"));
    assert!(out.contains("  Whitespace @ 1..2 \" \"\n"));
    assert!(out.contains("  Number @ 4..5 \"1\"\n"));
    assert!(err.is_empty());
}

#[test]
fn test_lex_error_is_reported_not_returned() {
    let dir = tempdir().unwrap();
    let file = write_source(dir.path(), "lex_error.arr", "'open");
    let (mut out, mut err) = (Vec::new(), Vec::new());

    let outcome = lex_file(&file, &plain(&[]), &mut out, &mut err).unwrap();

    assert_eq!(outcome, Outcome::HasErrors);
    assert!(out.is_empty());
    assert!(text(err).contains("error[E0001]"));
}

#[test]
fn test_parse_prints_tree_and_diagnostics() {
    let dir = tempdir().unwrap();
    let file = write_source(dir.path(), "parse.arr", "fun f(x):\n  x");
    let (mut out, mut err) = (Vec::new(), Vec::new());

    let outcome = parse_file(&file, &plain(&[]), &mut out, &mut err).unwrap();

    assert_eq!(outcome, Outcome::HasErrors);
    let out = text(out);
    assert!(out.starts_with("SourceFile@0..13\n"), "{out}");
    assert!(out.contains("FunExpr@0..13"));
    let err = text(err);
    assert!(err.contains("error[E1003]"), "{err}");
    assert!(err.contains(":1:1"), "{err}");
    assert!(err.contains("add `end`"));
}

#[test]
fn test_parse_with_tokens_flag() {
    let dir = tempdir().unwrap();
    let file = write_source(dir.path(), "tokens.arr", "x");
    let options = Options {
        tokens: true,
        ..plain(&[])
    };
    let (mut out, mut err) = (Vec::new(), Vec::new());

    let outcome = parse_file(&file, &options, &mut out, &mut err).unwrap();

    assert_eq!(outcome, Outcome::Clean);
    let out = text(out);
    let tree_at = out.find("SourceFile@").unwrap();
    assert!(out[..tree_at].contains("Name @ 0..1 \"x\""));
}

#[test]
fn test_check_reports_in_argument_order() {
    let dir = tempdir().unwrap();
    let paths = [
        write_source(dir.path(), "good.arr", "x = 1\ny = x + 1\n"),
        write_source(dir.path(), "bad.arr", "x = = 1\n"),
        write_source(dir.path(), "also_good.arr", "print(1)\n"),
    ];

    for parallel in [true, false] {
        let options = Options {
            parallel,
            ..plain(&paths)
        };
        let (mut out, mut err) = (Vec::new(), Vec::new());

        let outcome = check_files(&options, &mut out, &mut err).unwrap();

        assert_eq!(outcome, Outcome::HasErrors);
        let lines: Vec<String> = text(out).lines().map(str::to_string).collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(&format!("OK: {}", paths[0])));
        assert!(lines[1].starts_with(&format!("OK: {}", paths[2])));
        assert!(text(err).contains("error[E1002]"));
    }
}

#[test]
fn test_check_needs_paths_and_readable_files() {
    let (mut out, mut err) = (Vec::new(), Vec::new());
    assert!(matches!(
        check_files(&plain(&[]), &mut out, &mut err),
        Err(CliError::Usage(_))
    ));

    let missing = vec!["/nonexistent/pyretc/missing.arr".to_string()];
    assert!(matches!(
        check_files(&plain(&missing), &mut out, &mut err),
        Err(CliError::Read { .. })
    ));
}

#[test]
fn test_explain() {
    let mut out = Vec::new();
    assert_eq!(explain_error("e1003", &mut out).unwrap(), Outcome::Clean);
    assert!(text(out).starts_with("E1003: unclosed block\n"));

    let mut out = Vec::new();
    assert!(matches!(
        explain_error("E9999", &mut out),
        Err(CliError::UnknownCode(code)) if code == "E9999"
    ));
}
