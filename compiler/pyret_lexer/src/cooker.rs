//! Token cooking layer.
//!
//! Transforms `(RawTag, len)` pairs from the raw scanner into the parser's
//! `TokenKind` values.
//!
//! ```text
//! source → RawScanner → (RawTag, len) → TokenCooker → TokenKind
//! ```
//!
//! Each `RawTag` category has a dedicated cooking path:
//! - **Operators/delimiters**: direct 1:1 mapping
//! - **Identifiers**: reserved-word lookup, else `Name`
//! - **Open parens**: classified by the previous token
//! - **String delimiters**: kind chosen by the delimiter byte
//! - **Fatal errors**: returned as `LexError`, ending the lex

use pyret_ir::{Span, TokenKind};
use pyret_lexer_core::{RawTag, StringKind};

use crate::keywords;
use crate::lex_error::LexError;
use crate::paren::classify_open_paren;

/// Cooks raw tokens into parser-ready `TokenKind` values.
///
/// Remembers the previous cooked kind (trivia included) for paren
/// classification, and where the open string literal started for error
/// spans.
pub(crate) struct TokenCooker<'src> {
    source: &'src str,
    prev: Option<TokenKind>,
    open_string: Option<(u32, StringKind)>,
}

impl<'src> TokenCooker<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        TokenCooker {
            source,
            prev: None,
            open_string: None,
        }
    }

    /// Cook a single raw token.
    ///
    /// `offset` is the byte position of the token in source.
    pub(crate) fn cook(&mut self, tag: RawTag, offset: u32, len: u32) -> Result<TokenKind, LexError> {
        let kind = match tag {
            RawTag::Ident => {
                keywords::lookup(self.text(offset, len)).unwrap_or(TokenKind::Name)
            }
            RawTag::ElseIf => TokenKind::ElseIf,
            RawTag::Number => TokenKind::Number,
            RawTag::Frac => TokenKind::Frac,
            RawTag::RoughFrac => TokenKind::RoughFrac,

            RawTag::StringOpen => {
                let kind = self.delimiter_kind(offset);
                self.open_string = Some((offset, string_kind(kind)));
                kind
            }
            RawTag::StringClose => {
                self.open_string = None;
                self.delimiter_kind(offset)
            }
            RawTag::StringContent => TokenKind::StringContent,
            RawTag::Escape => TokenKind::EscapeSequence,

            // Operators
            RawTag::Plus => TokenKind::Plus,
            RawTag::Minus => TokenKind::Minus,
            RawTag::Star => TokenKind::Star,
            RawTag::Slash => TokenKind::Slash,
            RawTag::Caret => TokenKind::Caret,
            RawTag::Percent => TokenKind::Percent,
            RawTag::Bang => TokenKind::Bang,
            RawTag::Pipe => TokenKind::Pipe,
            RawTag::Equal => TokenKind::Equals,
            RawTag::EqualEqual => TokenKind::EqualEqual,
            RawTag::EqualTilde => TokenKind::EqualTilde,
            RawTag::Less => TokenKind::Lt,
            RawTag::LessEqual => TokenKind::Le,
            RawTag::Spaceship => TokenKind::Spaceship,
            RawTag::NotEqual => TokenKind::NotEqual,
            RawTag::Greater => TokenKind::Gt,
            RawTag::GreaterEqual => TokenKind::Ge,
            RawTag::Arrow => TokenKind::ThinArrow,
            RawTag::FatArrow => TokenKind::ThickArrow,
            RawTag::Dot => TokenKind::Dot,
            RawTag::DotDotDot => TokenKind::DotDotDot,
            RawTag::Comma => TokenKind::Comma,
            RawTag::Semicolon => TokenKind::Semicolon,
            RawTag::Colon => TokenKind::Colon,
            RawTag::ColonColon => TokenKind::ColonColon,
            RawTag::ColonEquals => TokenKind::ColonEquals,

            // Delimiters
            RawTag::LeftParen => classify_open_paren(self.prev),
            RawTag::RightParen => TokenKind::RParen,
            RawTag::LeftBracket => TokenKind::LBracket,
            RawTag::RightBracket => TokenKind::RBracket,
            RawTag::LeftBrace => TokenKind::LBrace,
            RawTag::RightBrace => TokenKind::RBrace,

            // Trivia
            RawTag::Whitespace => TokenKind::Whitespace,
            RawTag::LineComment => TokenKind::LineComment,
            RawTag::BlockComment => TokenKind::BlockComment,

            RawTag::Invalid => TokenKind::Error,
            RawTag::InvalidEscape => return Err(self.invalid_escape(offset, len)),
            RawTag::UnterminatedString => return Err(self.unterminated_string(offset, len)),
            RawTag::UnterminatedBlockComment => {
                return Err(LexError::unterminated_block_comment(Span::new(
                    offset,
                    offset + len,
                )))
            }
            RawTag::Eof => TokenKind::Eof,
        };
        self.prev = Some(kind);
        Ok(kind)
    }

    /// Record a kind the driver produced without going through [`cook`],
    /// such as a sign merged into its number.
    ///
    /// [`cook`]: TokenCooker::cook
    pub(crate) fn set_prev(&mut self, kind: TokenKind) {
        self.prev = Some(kind);
    }

    fn text(&self, offset: u32, len: u32) -> &'src str {
        Span::new(offset, offset + len).text(self.source)
    }

    fn delimiter_kind(&self, offset: u32) -> TokenKind {
        match self.source.as_bytes().get(offset as usize) {
            Some(b'\'') => TokenKind::SingleQuote,
            Some(b'`') => TokenKind::TripleBacktick,
            _ => TokenKind::DoubleQuote,
        }
    }

    #[cold]
    fn unterminated_string(&self, offset: u32, len: u32) -> LexError {
        let (start, kind) = self.open_string.unwrap_or((offset, StringKind::Double));
        LexError::unterminated_string(Span::new(start, offset + len), delimiter_text(kind))
    }

    #[cold]
    fn invalid_escape(&self, offset: u32, len: u32) -> LexError {
        let escape_char = self
            .text(offset, len)
            .chars()
            .nth(1)
            .unwrap_or('\\');
        let string_start = self.open_string.map_or(offset, |(start, _)| start);
        LexError::invalid_escape(Span::new(offset, offset + len), escape_char, string_start)
    }
}

fn string_kind(delimiter: TokenKind) -> StringKind {
    match delimiter {
        TokenKind::SingleQuote => StringKind::Single,
        TokenKind::TripleBacktick => StringKind::Triple,
        _ => StringKind::Double,
    }
}

fn delimiter_text(kind: StringKind) -> &'static str {
    match kind {
        StringKind::Double => "\"",
        StringKind::Single => "'",
        StringKind::Triple => "```",
    }
}

/// Whether a token of this kind can end an expression.
///
/// A `+` or `-` directly before a number is a sign only when the previous
/// significant token cannot end an expression; otherwise it is a binary
/// operator (`x -1` subtracts).
pub(crate) fn ends_expression(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Name
            | TokenKind::Number
            | TokenKind::Frac
            | TokenKind::RoughFrac
            | TokenKind::RParen
            | TokenKind::RBracket
            | TokenKind::RBrace
            | TokenKind::End
            | TokenKind::True
            | TokenKind::False
    )
}
