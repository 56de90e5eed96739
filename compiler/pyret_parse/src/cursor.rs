//! Token cursor over the significant token stream.
//!
//! The parser never sees trivia: the cursor walks the significant-token
//! index of a [`TokenList`]. Trivia is reattached by the tree sink.

use pyret_ir::{Span, Token, TokenFlags, TokenKind, TokenList};

/// Position-tracking view of a token list's significant tokens.
#[derive(Clone)]
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    significant: &'a [u32],
    pos: usize,
    /// Returned for every position at or past the end of the stream.
    eof: Token,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the first significant token.
    pub fn new(tokens: &'a TokenList) -> Self {
        let end = tokens.as_slice().last().map_or(0, |t| t.span.end);
        Cursor {
            tokens,
            significant: tokens.significant(),
            pos: 0,
            eof: Token::new(TokenKind::Eof, Span::point(end), TokenFlags::empty()),
        }
    }

    /// Index of the current token among the significant tokens.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Rewind or fast-forward. Used by snapshot restore.
    #[inline]
    pub fn set_position(&mut self, pos: usize) {
        self.pos = pos;
    }

    /// The token `n` significant positions ahead of the current one.
    #[inline]
    pub fn nth(&self, n: usize) -> Token {
        self.significant
            .get(self.pos + n)
            .and_then(|&raw| self.tokens.get(raw as usize))
            .copied()
            .unwrap_or(self.eof)
    }

    #[inline]
    pub fn current(&self) -> Token {
        self.nth(0)
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    #[inline]
    pub fn nth_kind(&self, n: usize) -> TokenKind {
        self.nth(n).kind
    }

    /// The significant token before the current one, if any.
    pub fn previous(&self) -> Option<Token> {
        let prev = self.pos.checked_sub(1)?;
        self.significant
            .get(prev)
            .and_then(|&raw| self.tokens.get(raw as usize))
            .copied()
    }

    /// Span of the previous significant token, or an empty span at the
    /// current position at the start of input.
    pub fn previous_span(&self) -> Span {
        self.previous()
            .map_or_else(|| Span::point(self.current_span().start), |t| t.span)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Move past the current token. Never moves past `Eof`.
    #[inline]
    pub fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }
}

#[cfg(test)]
mod tests;
