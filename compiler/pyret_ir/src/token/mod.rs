//! Token types for the Pyret lexer.
//!
//! A [`Token`] is a kind, a span and a byte of [`TokenFlags`]. Token text is
//! never copied: it is recovered by slicing the source with the span.
//!
//! Opening parentheses never appear as a plain `(` kind. The lexer classifies
//! every `(` by what immediately precedes it, producing one of
//! [`TokenKind::ParenNoSpace`], [`TokenKind::ParenSpace`] or
//! [`TokenKind::ParenAfterBrace`]. The classification is fixed at lex time.

mod flags;
mod list;

pub use flags::TokenFlags;
pub use list::TokenList;

use crate::Span;

define_kinds! {
    /// Token kinds.
    ///
    /// Discriminants are dense and below 128 so a token set fits in a
    /// single `u128` bitset.
    pub enum TokenKind {
        // === Trivia ===
        Whitespace => "whitespace",
        LineComment => "line comment",
        BlockComment => "block comment",

        // === Literals ===
        Name => "name",
        Number => "number",
        Frac => "fraction",
        RoughFrac => "rough fraction",

        // === String pieces ===
        /// `"` opening or closing a double-quoted string.
        DoubleQuote => "\"",
        /// `'` opening or closing a single-quoted string.
        SingleQuote => "'",
        /// ```` ``` ```` opening or closing a raw block string.
        TripleBacktick => "```",
        /// A maximal run of unescaped string text.
        StringContent => "string content",
        /// A recognised backslash escape.
        EscapeSequence => "escape sequence",

        // === Delimiters ===
        /// `(` with no whitespace or comment before it.
        ParenNoSpace => "(",
        /// `(` after whitespace, a comment, or at the start of input.
        ParenSpace => "(",
        /// `(` immediately after `{`.
        ParenAfterBrace => "(",
        RParen => ")",
        LBrace => "{",
        RBrace => "}",
        LBracket => "[",
        RBracket => "]",

        // === Punctuation ===
        Comma => ",",
        Semicolon => ";",
        Dot => ".",
        DotDotDot => "...",
        Colon => ":",
        ColonColon => "::",
        ColonEquals => ":=",
        Equals => "=",
        EqualEqual => "==",
        EqualTilde => "=~",
        Spaceship => "<=>",
        NotEqual => "<>",
        Lt => "<",
        Le => "<=",
        Gt => ">",
        Ge => ">=",
        Plus => "+",
        Minus => "-",
        Star => "*",
        Slash => "/",
        Caret => "^",
        Percent => "%",
        Bang => "!",
        Pipe => "|",
        ThinArrow => "->",
        ThickArrow => "=>",

        // === Keywords ===
        Use => "use",
        Include => "include",
        Import => "import",
        From => "from",
        As => "as",
        End => "end",
        Provide => "provide",
        ProvideTypes => "provide-types",
        Type => "type",
        Data => "data",
        Spy => "spy",
        Newtype => "newtype",
        Shadow => "shadow",
        Let => "let",
        Letrec => "letrec",
        TypeLet => "type-let",
        Fun => "fun",
        Check => "check",
        Examples => "examples",
        Because => "because",
        Ref => "ref",
        Var => "var",
        Rec => "rec",
        When => "when",
        And => "and",
        Or => "or",
        True => "true",
        False => "false",
        Lam => "lam",
        Method => "method",
        Reactor => "reactor",
        If => "if",
        Else => "else",
        /// `else if`, one token regardless of the spacing between the words.
        ElseIf => "else if",
        Ask => "ask",
        Cases => "cases",
        For => "for",
        Select => "select",
        Sieve => "sieve",
        Order => "order",
        Extract => "extract",
        Transform => "transform",
        Extend => "extend",
        LoadTable => "load-table",

        // === Check operators ===
        Is => "is",
        IsEqualEqual => "is==",
        IsEqualTilde => "is=~",
        IsSpaceship => "is<=>",
        IsRoughly => "is-roughly",
        IsNotRoughly => "is-not-roughly",
        IsNot => "is-not",
        IsNotEqualEqual => "is-not==",
        IsNotEqualTilde => "is-not=~",
        IsNotSpaceship => "is-not<=>",
        Raises => "raises",
        RaisesOtherThan => "raises-other-than",
        Satisfies => "satisfies",
        Violates => "violates",
        RaisesSatisfies => "raises-satisfies",
        RaisesViolates => "raises-violates",
        DoesNotRaise => "does-not-raise",

        // === Colon keywords ===
        BlockColon => "block:",
        ProvideColon => "provide:",
        DocColon => "doc:",
        WhereColon => "where:",
        CheckColon => "check:",
        ExamplesColon => "examples:",
        WithColon => "with:",
        SharingColon => "sharing:",
        TableColon => "table:",
        RowColon => "row:",
        ElseColon => "else:",
        ThenColon => "then:",
        OtherwiseColon => "otherwise:",
        SourceColon => "source:",

        // === Special ===
        /// A run of characters that cannot begin any token.
        Error => "invalid character",
        Eof => "end of file",
    }
}

const _: () = assert!(TokenKind::ALL.len() <= 128);

impl TokenKind {
    /// Whitespace or a comment: present in the CST, invisible to grammar rules.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::LineComment | TokenKind::BlockComment
        )
    }

    /// Any of the three classified opening parentheses.
    #[inline]
    pub const fn is_open_paren(self) -> bool {
        self.paren_class().is_some()
    }

    /// Lex-time classification of an opening parenthesis.
    #[inline]
    pub const fn paren_class(self) -> Option<ParenClass> {
        match self {
            TokenKind::ParenNoSpace => Some(ParenClass::NoSpace),
            TokenKind::ParenSpace => Some(ParenClass::Space),
            TokenKind::ParenAfterBrace => Some(ParenClass::AfterBrace),
            _ => None,
        }
    }

    /// A string delimiter (`"`, `'` or ```` ``` ````).
    #[inline]
    pub const fn is_string_delimiter(self) -> bool {
        matches!(
            self,
            TokenKind::DoubleQuote | TokenKind::SingleQuote | TokenKind::TripleBacktick
        )
    }

    /// Kinds whose text is not fixed by the kind itself.
    #[inline]
    pub const fn has_variable_text(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace
                | TokenKind::LineComment
                | TokenKind::BlockComment
                | TokenKind::Name
                | TokenKind::Number
                | TokenKind::Frac
                | TokenKind::RoughFrac
                | TokenKind::StringContent
                | TokenKind::EscapeSequence
                | TokenKind::ElseIf
                | TokenKind::Error
                | TokenKind::Eof
        )
    }

    /// Description for diagnostics: `` `end` `` for fixed-text kinds,
    /// a plain noun otherwise.
    pub fn describe(self) -> String {
        if self.has_variable_text() {
            self.name().to_string()
        } else {
            format!("`{}`", self.name())
        }
    }
}

/// The grammatical role an opening parenthesis was assigned at lex time.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ParenClass {
    /// Directly adjacent to the previous token: call arguments.
    NoSpace,
    /// Preceded by whitespace or a comment: grouping or binders.
    Space,
    /// Directly after `{`: a lambda header.
    AfterBrace,
}

/// A lexed token: kind, location and whitespace context.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub flags: TokenFlags,
}

impl Token {
    /// Create a new token.
    #[inline]
    pub const fn new(kind: TokenKind, span: Span, flags: TokenFlags) -> Self {
        Token { kind, span, flags }
    }

    /// Slice this token's raw text out of the source it was lexed from.
    #[inline]
    pub fn text(self, source: &str) -> &str {
        self.span.text(source)
    }
}
