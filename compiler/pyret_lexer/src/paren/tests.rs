use super::*;

#[test]
fn start_of_input_is_space() {
    assert_eq!(classify_open_paren(None), TokenKind::ParenSpace);
}

#[test]
fn after_trivia_is_space() {
    for trivia in [
        TokenKind::Whitespace,
        TokenKind::LineComment,
        TokenKind::BlockComment,
    ] {
        assert_eq!(classify_open_paren(Some(trivia)), TokenKind::ParenSpace);
    }
}

#[test]
fn after_brace_is_lambda_header() {
    assert_eq!(
        classify_open_paren(Some(TokenKind::LBrace)),
        TokenKind::ParenAfterBrace
    );
}

#[test]
fn adjacent_to_anything_else_is_call() {
    for prev in [
        TokenKind::Name,
        TokenKind::RParen,
        TokenKind::ParenNoSpace,
        TokenKind::Lam,
        TokenKind::Comma,
        TokenKind::DoubleQuote,
    ] {
        assert_eq!(classify_open_paren(Some(prev)), TokenKind::ParenNoSpace);
    }
}
