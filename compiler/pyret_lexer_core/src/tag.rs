//! Raw token tags produced by the scanner.

/// Which delimiter opened (and will close) a string literal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StringKind {
    /// `"..."`
    Double,
    /// `'...'`
    Single,
    /// ```` ```...``` ````
    Triple,
}

impl StringKind {
    /// Byte length of the delimiter.
    #[inline]
    pub const fn delimiter_len(self) -> u32 {
        match self {
            StringKind::Double | StringKind::Single => 1,
            StringKind::Triple => 3,
        }
    }

    /// Whether a raw newline may appear in the literal.
    #[inline]
    pub const fn allows_newlines(self) -> bool {
        matches!(self, StringKind::Triple)
    }

    /// Whether `c` is a recognised single-character escape in this kind.
    #[inline]
    pub const fn is_simple_escape(self, c: u8) -> bool {
        match c {
            b'\\' | b'n' | b'r' | b't' | b'"' | b'\'' => true,
            b'`' => matches!(self, StringKind::Triple),
            _ => false,
        }
    }
}

/// Raw token tag.
///
/// Discriminants are grouped into semantic ranges:
/// - `0..16`: names and literals
/// - `16..32`: string pieces
/// - `32..80`: operators and punctuation
/// - `80..96`: delimiters
/// - `112..120`: trivia
/// - `240..255`: errors
/// - `255`: end of input
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RawTag {
    // === Names & literals ===
    /// A name, keyword, check operator, or colon keyword such as `where:`.
    Ident = 0,
    /// `else`, one or more spaces or tabs, then `if`.
    ElseIf = 1,
    /// Decimal number with optional fraction and exponent. Never signed:
    /// sign absorption is decided by the cooking layer.
    Number = 2,
    /// `n/d`.
    Frac = 3,
    /// `~n/d`, with an optional sign after the tilde.
    RoughFrac = 4,

    // === String pieces ===
    /// Opening delimiter of a string.
    StringOpen = 16,
    /// Closing delimiter of a string.
    StringClose = 17,
    /// A maximal run of unescaped string text.
    StringContent = 18,
    /// A well-formed backslash escape.
    Escape = 19,

    // === Operators & punctuation ===
    Plus = 32,
    Minus = 33,
    Star = 34,
    Slash = 35,
    Caret = 36,
    Percent = 37,
    Bang = 38,
    Pipe = 39,
    Equal = 40,
    EqualEqual = 41,
    EqualTilde = 42,
    Less = 43,
    LessEqual = 44,
    Spaceship = 45,
    NotEqual = 46,
    Greater = 47,
    GreaterEqual = 48,
    Arrow = 49,
    FatArrow = 50,
    Dot = 51,
    DotDotDot = 52,
    Comma = 53,
    Semicolon = 54,
    Colon = 55,
    ColonColon = 56,
    ColonEquals = 57,

    // === Delimiters ===
    LeftParen = 80,
    RightParen = 81,
    LeftBracket = 82,
    RightBracket = 83,
    LeftBrace = 84,
    RightBrace = 85,

    // === Trivia ===
    Whitespace = 112,
    LineComment = 113,
    BlockComment = 114,

    // === Errors ===
    /// A maximal run of characters that cannot begin any token.
    Invalid = 240,
    /// A backslash followed by something that is not an escape. Covers the
    /// backslash and the offending character.
    InvalidEscape = 241,
    /// End of input, or a raw newline in a single-line string, before the
    /// closing delimiter. Zero length.
    UnterminatedString = 242,
    /// `#|` with no following `|#`. Runs to end of input.
    UnterminatedBlockComment = 243,

    // === Control ===
    Eof = 255,
}

impl RawTag {
    /// Whitespace or a comment.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(
            self,
            RawTag::Whitespace | RawTag::LineComment | RawTag::BlockComment
        )
    }

    /// One of the fatal error tags that abort lexing.
    #[inline]
    pub const fn is_fatal(self) -> bool {
        matches!(
            self,
            RawTag::InvalidEscape | RawTag::UnterminatedString | RawTag::UnterminatedBlockComment
        )
    }

    /// Fixed text of operator and delimiter tags.
    pub const fn lexeme(self) -> Option<&'static str> {
        Some(match self {
            RawTag::Plus => "+",
            RawTag::Minus => "-",
            RawTag::Star => "*",
            RawTag::Slash => "/",
            RawTag::Caret => "^",
            RawTag::Percent => "%",
            RawTag::Bang => "!",
            RawTag::Pipe => "|",
            RawTag::Equal => "=",
            RawTag::EqualEqual => "==",
            RawTag::EqualTilde => "=~",
            RawTag::Less => "<",
            RawTag::LessEqual => "<=",
            RawTag::Spaceship => "<=>",
            RawTag::NotEqual => "<>",
            RawTag::Greater => ">",
            RawTag::GreaterEqual => ">=",
            RawTag::Arrow => "->",
            RawTag::FatArrow => "=>",
            RawTag::Dot => ".",
            RawTag::DotDotDot => "...",
            RawTag::Comma => ",",
            RawTag::Semicolon => ";",
            RawTag::Colon => ":",
            RawTag::ColonColon => "::",
            RawTag::ColonEquals => ":=",
            RawTag::LeftParen => "(",
            RawTag::RightParen => ")",
            RawTag::LeftBracket => "[",
            RawTag::RightBracket => "]",
            RawTag::LeftBrace => "{",
            RawTag::RightBrace => "}",
            _ => return None,
        })
    }
}

/// A raw token: tag plus byte length.
///
/// Positions are implicit. The token starts where the previous one ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}

const _: () = assert!(std::mem::size_of::<RawTag>() == 1);

#[cfg(test)]
mod tests;
