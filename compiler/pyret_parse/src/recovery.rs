//! Error recovery for the parser.
//!
//! Token sets and the skipping routine that turns a malformed statement
//! into a single `Error` node. Uses bitset-based O(1) membership testing.

use pyret_ir::{NodeKind, Token, TokenKind};
use tracing::debug;

use crate::Parser;

/// A set of token kinds using bitset representation for O(1) membership testing.
///
/// Each bit in the u128 corresponds to a `TokenKind` discriminant index.
/// Token kinds are kept below 128 so one word covers them all.
///
/// # Example
/// ```
/// use pyret_ir::TokenKind;
/// use pyret_parse::TokenSet;
///
/// const CLOSERS: TokenSet = TokenSet::new()
///     .with(TokenKind::End)
///     .with(TokenKind::RBrace);
///
/// assert!(CLOSERS.contains(TokenKind::End));
/// assert!(!CLOSERS.contains(TokenKind::Fun));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenSet(u128);

impl TokenSet {
    /// Create an empty token set.
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Add a token kind to this set (builder pattern for const contexts).
    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u128 << kind.index()))
    }

    /// Union of two token sets.
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Check if this set contains a token kind.
    #[inline]
    pub const fn contains(self, kind: TokenKind) -> bool {
        (self.0 & (1u128 << kind.index())) != 0
    }
}

impl Default for TokenSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Tokens that can begin an expression.
pub(crate) const EXPR_START: TokenSet = TokenSet::new()
    .with(TokenKind::Name)
    .with(TokenKind::Number)
    .with(TokenKind::Frac)
    .with(TokenKind::RoughFrac)
    .with(TokenKind::True)
    .with(TokenKind::False)
    .with(TokenKind::DoubleQuote)
    .with(TokenKind::SingleQuote)
    .with(TokenKind::TripleBacktick)
    .with(TokenKind::ParenSpace)
    .with(TokenKind::ParenNoSpace)
    .with(TokenKind::ParenAfterBrace)
    .with(TokenKind::LBrace)
    .with(TokenKind::LBracket)
    .with(TokenKind::DotDotDot)
    .with(TokenKind::Lam)
    .with(TokenKind::Method)
    .with(TokenKind::If)
    .with(TokenKind::Ask)
    .with(TokenKind::Cases)
    .with(TokenKind::For)
    .with(TokenKind::BlockColon)
    .with(TokenKind::Let)
    .with(TokenKind::Letrec)
    .with(TokenKind::TypeLet)
    .with(TokenKind::TableColon)
    .with(TokenKind::Select)
    .with(TokenKind::Sieve)
    .with(TokenKind::Order)
    .with(TokenKind::Extract)
    .with(TokenKind::Transform)
    .with(TokenKind::Extend)
    .with(TokenKind::LoadTable)
    .with(TokenKind::Reactor)
    .with(TokenKind::Error);

/// Tokens that can begin a statement.
pub(crate) const STMT_START: TokenSet = EXPR_START
    .with(TokenKind::Type)
    .with(TokenKind::Newtype)
    .with(TokenKind::Spy)
    .with(TokenKind::Fun)
    .with(TokenKind::Data)
    .with(TokenKind::When)
    .with(TokenKind::Var)
    .with(TokenKind::Rec)
    .with(TokenKind::Shadow)
    .with(TokenKind::Check)
    .with(TokenKind::Examples)
    .with(TokenKind::CheckColon)
    .with(TokenKind::ExamplesColon);

/// Tokens that begin a module header statement.
pub(crate) const HEADER_START: TokenSet = TokenSet::new()
    .with(TokenKind::Import)
    .with(TokenKind::Include)
    .with(TokenKind::Provide)
    .with(TokenKind::ProvideTypes)
    .with(TokenKind::ProvideColon);

/// Tokens that close a block or separate two blocks of one construct.
pub(crate) const BLOCK_FOLLOW: TokenSet = TokenSet::new()
    .with(TokenKind::End)
    .with(TokenKind::RParen)
    .with(TokenKind::RBracket)
    .with(TokenKind::RBrace)
    .with(TokenKind::Pipe)
    .with(TokenKind::ElseColon)
    .with(TokenKind::ElseIf)
    .with(TokenKind::WhereColon)
    .with(TokenKind::SharingColon)
    .with(TokenKind::Eof);

/// Binary check operators (`is`, `raises`, ...). `does-not-raise` takes
/// no right operand and is handled on its own.
pub(crate) const CHECK_OPS: TokenSet = TokenSet::new()
    .with(TokenKind::Is)
    .with(TokenKind::IsEqualEqual)
    .with(TokenKind::IsEqualTilde)
    .with(TokenKind::IsSpaceship)
    .with(TokenKind::IsRoughly)
    .with(TokenKind::IsNotRoughly)
    .with(TokenKind::IsNot)
    .with(TokenKind::IsNotEqualEqual)
    .with(TokenKind::IsNotEqualTilde)
    .with(TokenKind::IsNotSpaceship)
    .with(TokenKind::Raises)
    .with(TokenKind::RaisesOtherThan)
    .with(TokenKind::Satisfies)
    .with(TokenKind::Violates)
    .with(TokenKind::RaisesSatisfies)
    .with(TokenKind::RaisesViolates);

/// Keywords that always open a construct closed by `end`.
const BLOCK_KEYWORDS: TokenSet = TokenSet::new()
    .with(TokenKind::Fun)
    .with(TokenKind::Lam)
    .with(TokenKind::Method)
    .with(TokenKind::If)
    .with(TokenKind::Ask)
    .with(TokenKind::Cases)
    .with(TokenKind::For)
    .with(TokenKind::When)
    .with(TokenKind::Data)
    .with(TokenKind::Check)
    .with(TokenKind::Examples)
    .with(TokenKind::CheckColon)
    .with(TokenKind::ExamplesColon)
    .with(TokenKind::Spy)
    .with(TokenKind::Let)
    .with(TokenKind::Letrec)
    .with(TokenKind::TypeLet)
    .with(TokenKind::TableColon)
    .with(TokenKind::LoadTable)
    .with(TokenKind::Reactor)
    .with(TokenKind::Select)
    .with(TokenKind::Sieve)
    .with(TokenKind::Order)
    .with(TokenKind::Extract)
    .with(TokenKind::Transform)
    .with(TokenKind::Extend)
    .with(TokenKind::ProvideColon);

/// Tokens that can end the header before a `block:` body
/// (`fun f() block:`, `when x block:`, `ask block:`).
const HEADER_END: TokenSet = TokenSet::new()
    .with(TokenKind::Name)
    .with(TokenKind::Number)
    .with(TokenKind::Frac)
    .with(TokenKind::RoughFrac)
    .with(TokenKind::True)
    .with(TokenKind::False)
    .with(TokenKind::RParen)
    .with(TokenKind::RBracket)
    .with(TokenKind::RBrace)
    .with(TokenKind::Gt)
    .with(TokenKind::End)
    .with(TokenKind::DoubleQuote)
    .with(TokenKind::SingleQuote)
    .with(TokenKind::TripleBacktick)
    .with(TokenKind::Ask);

/// An unclosed construct seen while skipping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Open {
    Paren,
    Bracket,
    Brace,
    Block,
}

/// Whether `kind` opens a construct closed by `end`.
fn opens_block(kind: TokenKind, prev: Option<TokenKind>, next: TokenKind) -> bool {
    match kind {
        TokenKind::Provide => next != TokenKind::Star,
        TokenKind::Include => next == TokenKind::From,
        TokenKind::BlockColon => !matches!(prev, Some(prev) if HEADER_END.contains(prev)),
        _ => BLOCK_KEYWORDS.contains(kind),
    }
}

/// Pop the innermost `target` if no block opener sits above it.
fn close_bracket(stack: &mut Vec<Open>, target: Open) {
    if let Some(idx) = stack.iter().rposition(|&open| open == target || open == Open::Block) {
        if stack[idx] == target {
            stack.truncate(idx);
        }
    }
}

/// Update the nesting stack for the token about to be skipped.
fn track_nesting(stack: &mut Vec<Open>, token: Token, prev: Option<TokenKind>, next: TokenKind) {
    match token.kind {
        TokenKind::ParenNoSpace | TokenKind::ParenSpace | TokenKind::ParenAfterBrace => {
            stack.push(Open::Paren);
        }
        TokenKind::LBracket => stack.push(Open::Bracket),
        TokenKind::LBrace => stack.push(Open::Brace),
        TokenKind::RParen => close_bracket(stack, Open::Paren),
        TokenKind::RBracket => close_bracket(stack, Open::Bracket),
        TokenKind::RBrace => close_bracket(stack, Open::Brace),
        TokenKind::End => {
            // `end` also closes any bracket left open inside the block.
            if let Some(idx) = stack.iter().rposition(|&open| open == Open::Block) {
                stack.truncate(idx);
            }
        }
        kind if opens_block(kind, prev, next) => stack.push(Open::Block),
        _ => {}
    }
}

impl Parser<'_> {
    /// Skip a malformed region into one `Error` node.
    ///
    /// At least one token is consumed. Skipping stops at end of input, or,
    /// once every construct opened during the skip is closed again, at a
    /// token in [`BLOCK_FOLLOW`] or at a token in `resync` that starts a
    /// new line.
    pub(crate) fn recover_into_error_node(&mut self, resync: TokenSet) {
        let m = self.start();
        let start = self.current_span();
        let mut stack: Vec<Open> = Vec::new();
        let mut skipped = 0usize;

        while !self.is_at_end() {
            let token = self.current();
            if skipped > 0
                && stack.is_empty()
                && (BLOCK_FOLLOW.contains(token.kind)
                    || (resync.contains(token.kind) && token.flags.has_newline_before()))
            {
                break;
            }
            let prev = self.cursor.previous().map(|t| t.kind);
            track_nesting(&mut stack, token, prev, self.nth_kind(1));
            self.bump();
            skipped += 1;
        }

        m.complete(self, NodeKind::Error);
        debug!(skipped, from = %start, "recovered");
    }
}

#[cfg(test)]
mod tests;
