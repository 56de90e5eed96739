//! Lossless token stream.

use super::{Token, TokenKind};

/// Every token of a file, trivia included, in source order.
///
/// A parallel index of significant (non-trivia) positions is maintained on
/// push so the parser can walk the grammar-visible stream without skipping
/// trivia itself, while the tree builder still sees every token.
///
/// A well-formed list produced by the lexer ends with exactly one
/// [`TokenKind::Eof`] token of zero width.
#[derive(Clone, Default, PartialEq, Eq, Hash, Debug)]
pub struct TokenList {
    tokens: Vec<Token>,
    /// Indices into `tokens` of every non-trivia token, `Eof` included.
    significant: Vec<u32>,
}

impl TokenList {
    /// Create a new empty token list.
    #[inline]
    pub fn new() -> Self {
        TokenList {
            tokens: Vec::new(),
            significant: Vec::new(),
        }
    }

    /// Create a new token list with pre-allocated capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
            significant: Vec::with_capacity(capacity / 2),
        }
    }

    /// Append a token.
    #[inline]
    pub fn push(&mut self, token: Token) {
        if !token.kind.is_trivia() {
            // Token counts are bounded by source length, which spans keep
            // below `u32::MAX`.
            #[allow(clippy::cast_possible_truncation)]
            self.significant.push(self.tokens.len() as u32);
        }
        self.tokens.push(token);
    }

    /// Number of tokens, trivia included.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Get token at index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Kind of the token at `index`, or `Eof` past the end.
    #[inline]
    pub fn kind(&self, index: usize) -> TokenKind {
        self.tokens.get(index).map_or(TokenKind::Eof, |t| t.kind)
    }

    /// Get a slice of all tokens.
    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Iterate over tokens.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    /// Positions of the non-trivia tokens, in order.
    #[inline]
    pub fn significant(&self) -> &[u32] {
        &self.significant
    }

    /// Iterate over the non-trivia tokens only.
    pub fn iter_significant(&self) -> impl Iterator<Item = &Token> {
        self.significant
            .iter()
            .filter_map(|&i| self.tokens.get(i as usize))
    }

    /// Consume the list, returning the underlying vector.
    #[inline]
    pub fn into_vec(self) -> Vec<Token> {
        self.tokens
    }
}

impl std::ops::Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
