#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::SourceBuffer;
use pretty_assertions::assert_eq;

/// Scan a source string and collect `(tag, text)` pairs, excluding `Eof`.
fn scan(source: &str) -> Vec<(RawTag, &str)> {
    let mut pos = 0usize;
    tokenize(source)
        .into_iter()
        .map(|tok| {
            let end = pos + tok.len as usize;
            let text = &source[pos..end];
            pos = end;
            (tok.tag, text)
        })
        .collect()
}

fn scan_tags(source: &str) -> Vec<RawTag> {
    tokenize(source).iter().map(|t| t.tag).collect()
}

/// Tags with whitespace removed.
fn significant_tags(source: &str) -> Vec<RawTag> {
    scan_tags(source)
        .into_iter()
        .filter(|t| !t.is_trivia())
        .collect()
}

// ─── Coverage ───────────────────────────────────────────────────

#[test]
fn total_len_equals_source_len() {
    let sources = [
        "",
        "x",
        "fun f(x): x + 1 end",
        "data D: | a | b(x :: Number) end",
        "\"hello\\n\" 'single' ```multi\nline```",
        "#| block |# # line\n",
        "lst.get<Number>(0)",
        "~-1/2 3/4 1.5e-3",
        "@@@ $ x",
        "\u{00A0}λ x",
    ];
    for source in sources {
        let total: u32 = tokenize(source).iter().map(|t| t.len).sum();
        assert_eq!(total as usize, source.len(), "coverage mismatch for {source:?}");
    }
}

#[test]
fn every_token_has_positive_length() {
    for source in ["fun f(x): x end", "\"a\\tb\"", "```a`b``c```", "#|x|#"] {
        for tok in tokenize(source) {
            assert!(tok.len > 0, "zero-length token {tok:?} in {source:?}");
        }
    }
}

#[test]
fn repeated_eof_returns_eof() {
    let buf = SourceBuffer::new("");
    let mut scanner = RawScanner::new(buf.cursor());
    for _ in 0..3 {
        assert_eq!(
            scanner.next_token(),
            RawToken {
                tag: RawTag::Eof,
                len: 0
            }
        );
    }
}

// ─── Trivia ─────────────────────────────────────────────────────

#[test]
fn whitespace_run_includes_newlines() {
    assert_eq!(scan(" \t\n\r\n x"), vec![
        (RawTag::Whitespace, " \t\n\r\n "),
        (RawTag::Ident, "x"),
    ]);
}

#[test]
fn unicode_whitespace_is_trivia() {
    assert_eq!(scan("a\u{2003}b"), vec![
        (RawTag::Ident, "a"),
        (RawTag::Whitespace, "\u{2003}"),
        (RawTag::Ident, "b"),
    ]);
}

#[test]
fn line_comment_stops_before_newline() {
    assert_eq!(scan("# hi\nx"), vec![
        (RawTag::LineComment, "# hi"),
        (RawTag::Whitespace, "\n"),
        (RawTag::Ident, "x"),
    ]);
}

#[test]
fn block_comment_does_not_nest() {
    assert_eq!(scan("#| outer #| inner |# still-inner |#"), vec![
        (RawTag::BlockComment, "#| outer #| inner |#"),
        (RawTag::Whitespace, " "),
        (RawTag::Ident, "still-inner"),
        (RawTag::Whitespace, " "),
        (RawTag::Pipe, "|"),
        (RawTag::LineComment, "#"),
    ]);
}

#[test]
fn unterminated_block_comment_runs_to_eof() {
    assert_eq!(scan("x #| never closed"), vec![
        (RawTag::Ident, "x"),
        (RawTag::Whitespace, " "),
        (RawTag::UnterminatedBlockComment, "#| never closed"),
    ]);
}

// ─── Names ──────────────────────────────────────────────────────

#[test]
fn hyphenated_names() {
    assert_eq!(scan("is-roughly x-1 a--b"), vec![
        (RawTag::Ident, "is-roughly"),
        (RawTag::Whitespace, " "),
        (RawTag::Ident, "x-1"),
        (RawTag::Whitespace, " "),
        (RawTag::Ident, "a--b"),
    ]);
}

#[test]
fn trailing_hyphen_is_not_part_of_name() {
    assert_eq!(scan("x- y"), vec![
        (RawTag::Ident, "x"),
        (RawTag::Minus, "-"),
        (RawTag::Whitespace, " "),
        (RawTag::Ident, "y"),
    ]);
    assert_eq!(significant_tags("x - 1"), vec![
        RawTag::Ident,
        RawTag::Minus,
        RawTag::Number
    ]);
}

#[test]
fn check_operators_absorb_comparison_suffix() {
    assert_eq!(scan("is==").first().map(|t| t.1), Some("is=="));
    assert_eq!(scan("is-not<=>").first().map(|t| t.1), Some("is-not<=>"));
    assert_eq!(scan("is=~ x"), vec![
        (RawTag::Ident, "is=~"),
        (RawTag::Whitespace, " "),
        (RawTag::Ident, "x"),
    ]);
    assert_eq!(scan("x==y"), vec![
        (RawTag::Ident, "x"),
        (RawTag::EqualEqual, "=="),
        (RawTag::Ident, "y"),
    ]);
}

#[test]
fn colon_keywords() {
    assert_eq!(scan("where:"), vec![(RawTag::Ident, "where:")]);
    assert_eq!(scan("block: x"), vec![
        (RawTag::Ident, "block:"),
        (RawTag::Whitespace, " "),
        (RawTag::Ident, "x"),
    ]);
    assert_eq!(scan("x: 1").first(), Some(&(RawTag::Ident, "x")));
    assert_eq!(scan("check :"), vec![
        (RawTag::Ident, "check"),
        (RawTag::Whitespace, " "),
        (RawTag::Colon, ":"),
    ]);
    assert_eq!(scan("row::"), vec![
        (RawTag::Ident, "row"),
        (RawTag::ColonColon, "::"),
    ]);
    assert_eq!(scan("with:=")[0], (RawTag::Ident, "with"));
}

#[test]
fn else_if_is_one_token() {
    assert_eq!(scan("else  if x"), vec![
        (RawTag::ElseIf, "else  if"),
        (RawTag::Whitespace, " "),
        (RawTag::Ident, "x"),
    ]);
    assert_eq!(scan("else iffy")[0], (RawTag::Ident, "else"));
    assert_eq!(scan("else\nif")[0], (RawTag::Ident, "else"));
    assert_eq!(scan("else:")[0], (RawTag::Ident, "else:"));
}

// ─── Numbers ────────────────────────────────────────────────────

#[test]
fn numbers() {
    assert_eq!(scan("42 3.14 1e10 2.5E-3"), vec![
        (RawTag::Number, "42"),
        (RawTag::Whitespace, " "),
        (RawTag::Number, "3.14"),
        (RawTag::Whitespace, " "),
        (RawTag::Number, "1e10"),
        (RawTag::Whitespace, " "),
        (RawTag::Number, "2.5E-3"),
    ]);
}

#[test]
fn number_without_fraction_digits_stops_at_dot() {
    assert_eq!(scan("1.x"), vec![
        (RawTag::Number, "1"),
        (RawTag::Dot, "."),
        (RawTag::Ident, "x"),
    ]);
    assert_eq!(scan("1e"), vec![(RawTag::Number, "1"), (RawTag::Ident, "e")]);
}

#[test]
fn fractions() {
    assert_eq!(scan("1/2"), vec![(RawTag::Frac, "1/2")]);
    assert_eq!(scan("1 / 2"), vec![
        (RawTag::Number, "1"),
        (RawTag::Whitespace, " "),
        (RawTag::Slash, "/"),
        (RawTag::Whitespace, " "),
        (RawTag::Number, "2"),
    ]);
    assert_eq!(scan("~1/3"), vec![(RawTag::RoughFrac, "~1/3")]);
    assert_eq!(scan("~-10/3"), vec![(RawTag::RoughFrac, "~-10/3")]);
}

#[test]
fn signs_are_separate_tokens() {
    assert_eq!(scan("-1"), vec![(RawTag::Minus, "-"), (RawTag::Number, "1")]);
    assert_eq!(scan("+2/3"), vec![(RawTag::Plus, "+"), (RawTag::Frac, "2/3")]);
}

#[test]
fn lone_tilde_is_invalid() {
    assert_eq!(scan("~x"), vec![(RawTag::Invalid, "~"), (RawTag::Ident, "x")]);
    assert_eq!(scan("~1.5"), vec![
        (RawTag::Invalid, "~"),
        (RawTag::Number, "1.5"),
    ]);
}

// ─── Operators ──────────────────────────────────────────────────

#[test]
fn compound_operators() {
    assert_eq!(
        significant_tags(":: := == =~ => <=> <= <> >= -> ..."),
        vec![
            RawTag::ColonColon,
            RawTag::ColonEquals,
            RawTag::EqualEqual,
            RawTag::EqualTilde,
            RawTag::FatArrow,
            RawTag::Spaceship,
            RawTag::LessEqual,
            RawTag::NotEqual,
            RawTag::GreaterEqual,
            RawTag::Arrow,
            RawTag::DotDotDot,
        ]
    );
}

#[test]
fn instantiation_angle_brackets_are_single() {
    assert_eq!(scan_tags("List<List<A>>"), vec![
        RawTag::Ident,
        RawTag::Less,
        RawTag::Ident,
        RawTag::Less,
        RawTag::Ident,
        RawTag::Greater,
        RawTag::Greater,
    ]);
}

#[test]
fn parens_are_unclassified_here() {
    assert_eq!(scan_tags("f(x) (y) {(z)}"), vec![
        RawTag::Ident,
        RawTag::LeftParen,
        RawTag::Ident,
        RawTag::RightParen,
        RawTag::Whitespace,
        RawTag::LeftParen,
        RawTag::Ident,
        RawTag::RightParen,
        RawTag::Whitespace,
        RawTag::LeftBrace,
        RawTag::LeftParen,
        RawTag::Ident,
        RawTag::RightParen,
        RawTag::RightBrace,
    ]);
}

// ─── Strings ────────────────────────────────────────────────────

#[test]
fn double_quoted_string_pieces() {
    assert_eq!(scan(r#""ab\ncd""#), vec![
        (RawTag::StringOpen, "\""),
        (RawTag::StringContent, "ab"),
        (RawTag::Escape, "\\n"),
        (RawTag::StringContent, "cd"),
        (RawTag::StringClose, "\""),
    ]);
}

#[test]
fn other_quote_is_content() {
    assert_eq!(scan(r#"'say "hi"'"#), vec![
        (RawTag::StringOpen, "'"),
        (RawTag::StringContent, "say \"hi\""),
        (RawTag::StringClose, "'"),
    ]);
}

#[test]
fn empty_string() {
    assert_eq!(scan("\"\""), vec![
        (RawTag::StringOpen, "\""),
        (RawTag::StringClose, "\""),
    ]);
}

#[test]
fn numeric_escapes() {
    assert_eq!(scan(r#""\101\x4a\u03bb\7""#), vec![
        (RawTag::StringOpen, "\""),
        (RawTag::Escape, "\\101"),
        (RawTag::Escape, "\\x4a"),
        (RawTag::Escape, "\\u03bb"),
        (RawTag::Escape, "\\7"),
        (RawTag::StringClose, "\""),
    ]);
    // Octal escapes take at most three digits.
    assert_eq!(scan(r#""\1234""#)[1..3], [
        (RawTag::Escape, "\\123"),
        (RawTag::StringContent, "4"),
    ]);
}

#[test]
fn triple_backtick_string_spans_lines() {
    assert_eq!(scan("```a\n`b``c```"), vec![
        (RawTag::StringOpen, "```"),
        (RawTag::StringContent, "a\n`b``c"),
        (RawTag::StringClose, "```"),
    ]);
}

#[test]
fn backtick_escape_only_in_triple_strings() {
    assert_eq!(scan("```\\````")[1], (RawTag::Escape, "\\`"));
    assert_eq!(scan("\"\\`\"")[1], (RawTag::InvalidEscape, "\\`"));
}

#[test]
fn invalid_escape() {
    assert_eq!(scan(r#""a\qb""#)[2], (RawTag::InvalidEscape, "\\q"));
    assert_eq!(scan(r#""\x""#)[1], (RawTag::InvalidEscape, "\\x"));
}

#[test]
fn unterminated_string_at_eof() {
    assert_eq!(scan_tags("\"abc"), vec![
        RawTag::StringOpen,
        RawTag::StringContent,
        RawTag::UnterminatedString,
    ]);
}

#[test]
fn newline_ends_single_line_string() {
    assert_eq!(scan("'ab\nx"), vec![
        (RawTag::StringOpen, "'"),
        (RawTag::StringContent, "ab"),
        (RawTag::UnterminatedString, ""),
        (RawTag::Whitespace, "\n"),
        (RawTag::Ident, "x"),
    ]);
}

#[test]
fn backslash_at_eof_is_unterminated() {
    assert_eq!(scan("\"a\\"), vec![
        (RawTag::StringOpen, "\""),
        (RawTag::StringContent, "a"),
        (RawTag::UnterminatedString, "\\"),
    ]);
}

// ─── Invalid input ──────────────────────────────────────────────

#[test]
fn invalid_run_is_one_token() {
    assert_eq!(scan("x @$& y"), vec![
        (RawTag::Ident, "x"),
        (RawTag::Whitespace, " "),
        (RawTag::Invalid, "@$&"),
        (RawTag::Whitespace, " "),
        (RawTag::Ident, "y"),
    ]);
}

#[test]
fn non_ascii_letters_are_invalid() {
    assert_eq!(scan("λx"), vec![(RawTag::Invalid, "λ"), (RawTag::Ident, "x")]);
}

#[test]
fn lone_backticks_are_invalid() {
    assert_eq!(scan("`x"), vec![(RawTag::Invalid, "`"), (RawTag::Ident, "x")]);
}

#[test]
fn interior_nul_is_invalid() {
    assert_eq!(scan("a\0b"), vec![
        (RawTag::Ident, "a"),
        (RawTag::Invalid, "\0"),
        (RawTag::Ident, "b"),
    ]);
}

// ─── Property tests ─────────────────────────────────────────────

mod proptest_coverage {
    use super::super::tokenize;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn tokens_partition_arbitrary_input(source in "\\PC{0,64}") {
            let total: usize = tokenize(&source).iter().map(|t| t.len as usize).sum();
            prop_assert_eq!(total, source.len());
        }

        #[test]
        fn tokens_partition_pyret_like_input(
            source in "[a-z(){}\\[\\]<>=:;,.\"'`#|~+\\-*/ \n0-9\\\\]{0,80}"
        ) {
            let total: usize = tokenize(&source).iter().map(|t| t.len as usize).sum();
            prop_assert_eq!(total, source.len());
        }
    }
}
