//! Pyret lexer.
//!
//! Turns source text into a lossless [`TokenList`]: every byte of input is
//! covered by exactly one token, whitespace and comments included.
//!
//! # Architecture
//!
//! ```text
//! source → RawScanner (pyret_lexer_core) → TokenCooker → lex() driver → TokenList
//! ```
//!
//! The raw scanner knows only characters. The cooker resolves keywords and
//! classifies opening parentheses from the previous token. The driver
//! merges signs into numeric literals, computes per-token [`TokenFlags`]
//! from the trivia in between, and appends the `Eof` token.
//!
//! Lexing stops at the first [`LexError`]. Characters that cannot begin a
//! token are not fatal: they become [`TokenKind::Error`] tokens.

mod cooker;
mod keywords;
mod lex_error;
mod paren;

use pyret_ir::{Span, Token, TokenFlags, TokenKind, TokenList};
use pyret_lexer_core::{RawScanner, RawTag, RawToken, SourceBuffer};

use crate::cooker::{ends_expression, TokenCooker};

pub use keywords::SoftKeyword;
pub use lex_error::{LexError, LexErrorContext, LexErrorKind};
pub use paren::classify_open_paren;

/// Lex a complete source file.
///
/// The returned list ends with a single zero-width [`TokenKind::Eof`].
/// Concatenating the text of every token reproduces `source` exactly.
pub fn lex(source: &str) -> Result<TokenList, LexError> {
    if u32::try_from(source.len()).is_err() {
        return Err(LexError::source_too_large(source.len()));
    }

    let buf = SourceBuffer::new(source);
    let mut scanner = RawScanner::new(buf.cursor());
    let mut cooker = TokenCooker::new(source);
    let mut tokens = TokenList::with_capacity(source.len() / 2 + 1);

    let mut trivia = TriviaRun::default();
    let mut prev_ends_expr = false;
    let mut seen_significant = false;
    let mut lookahead: Option<RawToken> = None;
    let mut offset = 0u32;

    loop {
        let raw = lookahead.take().unwrap_or_else(|| scanner.next_token());
        if raw.tag == RawTag::Eof {
            break;
        }

        if matches!(raw.tag, RawTag::Plus | RawTag::Minus) && !prev_ends_expr {
            let next = scanner.next_token();
            if let Some(kind) = signed_literal(next.tag) {
                let span = Span::new(offset, offset + raw.len + next.len);
                cooker.set_prev(kind);
                tokens.push(Token::new(kind, span, trivia.flags(seen_significant)));
                trivia = TriviaRun::default();
                seen_significant = true;
                prev_ends_expr = true;
                offset = span.end;
                continue;
            }
            lookahead = Some(next);
        }

        let kind = cooker.cook(raw.tag, offset, raw.len)?;
        let span = Span::new(offset, offset + raw.len);
        offset = span.end;

        if kind.is_trivia() {
            trivia.note(kind, span.text(source));
            tokens.push(Token::new(kind, span, TokenFlags::empty()));
        } else {
            tokens.push(Token::new(kind, span, trivia.flags(seen_significant)));
            trivia = TriviaRun::default();
            seen_significant = true;
            prev_ends_expr = ends_expression(kind) || raw.tag == RawTag::StringClose;
        }
    }

    tokens.push(Token::new(
        TokenKind::Eof,
        Span::point(offset),
        trivia.flags(seen_significant),
    ));

    tracing::debug!(
        tokens = tokens.len(),
        significant = tokens.significant().len(),
        "lexed source"
    );
    Ok(tokens)
}

/// The literal kind a sign merges into, if `next` is an unsigned literal.
fn signed_literal(next: RawTag) -> Option<TokenKind> {
    match next {
        RawTag::Number => Some(TokenKind::Number),
        RawTag::Frac => Some(TokenKind::Frac),
        _ => None,
    }
}

/// Trivia seen since the last significant token.
#[derive(Default)]
struct TriviaRun {
    any: bool,
    space: bool,
    newline: bool,
    comment: bool,
}

impl TriviaRun {
    fn note(&mut self, kind: TokenKind, text: &str) {
        self.any = true;
        if memchr::memchr2(b'\n', b'\r', text.as_bytes()).is_some() {
            self.newline = true;
        }
        match kind {
            TokenKind::Whitespace => {
                if text.bytes().any(|b| b != b'\n' && b != b'\r') {
                    self.space = true;
                }
            }
            _ => self.comment = true,
        }
    }

    fn flags(&self, seen_significant: bool) -> TokenFlags {
        let mut flags = TokenFlags::empty();
        flags.set(TokenFlags::SPACE_BEFORE, self.space);
        flags.set(TokenFlags::NEWLINE_BEFORE, self.newline);
        flags.set(TokenFlags::TRIVIA_BEFORE, self.comment);
        flags.set(TokenFlags::LINE_START, self.newline || !seen_significant);
        flags.set(TokenFlags::ADJACENT, !self.any && seen_significant);
        flags
    }
}
