use super::*;
use pretty_assertions::assert_eq;
use pyret_ir::{Span, TokenFlags};

fn token(kind: TokenKind) -> Token {
    Token::new(kind, Span::DUMMY, TokenFlags::default())
}

fn all_kinds() -> impl Iterator<Item = TokenKind> {
    (0..=u8::MAX).filter_map(TokenKind::from_index)
}

#[test]
fn test_token_set_operations() {
    let a = TokenSet::new().with(TokenKind::End).with(TokenKind::Comma);
    let b = TokenSet::new().with(TokenKind::Comma).with(TokenKind::Colon);
    let both = a.union(b);

    assert_eq!(all_kinds().filter(|&kind| both.contains(kind)).count(), 3);
    assert!(both.contains(TokenKind::Colon));
    assert!(!both.contains(TokenKind::Fun));
    assert_eq!(TokenSet::default(), TokenSet::new());
}

#[test]
fn test_statement_starts_include_expression_starts() {
    assert_eq!(STMT_START.union(EXPR_START), STMT_START);
    assert!(STMT_START.contains(TokenKind::Fun));
    assert!(!EXPR_START.contains(TokenKind::Fun));
    assert!(!STMT_START.contains(TokenKind::End));
    assert!(all_kinds().all(|kind| !(STMT_START.contains(kind) && BLOCK_FOLLOW.contains(kind))));
}

#[test]
fn test_block_colon_opens_only_as_user_block() {
    // `block:` after a header is the body of that header's construct.
    assert!(!opens_block(TokenKind::BlockColon, Some(TokenKind::RParen), TokenKind::Name));
    assert!(!opens_block(TokenKind::BlockColon, Some(TokenKind::Name), TokenKind::Name));
    // `x = block: ... end`
    assert!(opens_block(TokenKind::BlockColon, Some(TokenKind::Equals), TokenKind::Name));
    assert!(opens_block(TokenKind::BlockColon, None, TokenKind::Name));
}

#[test]
fn test_provide_and_include_forms() {
    assert!(!opens_block(TokenKind::Provide, None, TokenKind::Star));
    assert!(opens_block(TokenKind::Provide, None, TokenKind::LBrace));
    assert!(opens_block(TokenKind::Include, None, TokenKind::From));
    assert!(!opens_block(TokenKind::Include, None, TokenKind::Name));
}

#[test]
fn test_end_closes_brackets_left_open_inside_block() {
    let mut stack = Vec::new();
    for kind in [TokenKind::Fun, TokenKind::ParenNoSpace, TokenKind::LBracket] {
        track_nesting(&mut stack, token(kind), None, TokenKind::Name);
    }
    assert_eq!(stack, vec![Open::Block, Open::Paren, Open::Bracket]);

    track_nesting(&mut stack, token(TokenKind::End), None, TokenKind::Eof);
    assert!(stack.is_empty());
}

#[test]
fn test_closer_does_not_cross_block() {
    let mut stack = Vec::new();
    for kind in [TokenKind::ParenSpace, TokenKind::Lam] {
        track_nesting(&mut stack, token(kind), None, TokenKind::Name);
    }
    track_nesting(&mut stack, token(TokenKind::RParen), None, TokenKind::Eof);
    assert_eq!(stack, vec![Open::Paren, Open::Block]);

    // A mismatched closer is skipped without popping.
    track_nesting(&mut stack, token(TokenKind::RBrace), None, TokenKind::Eof);
    assert_eq!(stack, vec![Open::Paren, Open::Block]);
}
