//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner works on a sentinel-terminated [`Cursor`] and never
//! allocates. It resolves everything that depends only on the characters
//! themselves: compound operators, hyphenated names, check operators such
//! as `is-not==`, colon keywords such as `where:`, `else if`, numbers and
//! fractions, string pieces and escapes, and comments.
//!
//! Everything that depends on the previous token (paren classification,
//! sign absorption, keyword kinds) is left to the cooking layer.
//!
//! # Design
//!
//! Main dispatch covers all 256 byte values. Inside a string literal the
//! dispatch is replaced by [`RawScanner::string_piece`], which emits
//! content runs, escapes and the closing delimiter.

use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken, StringKind};

/// Words that absorb an immediately following `:` into one token.
const COLON_WORDS: &[&str] = &[
    "block",
    "provide",
    "doc",
    "where",
    "check",
    "examples",
    "with",
    "sharing",
    "table",
    "row",
    "else",
    "then",
    "otherwise",
    "source",
];

/// Suffixes that `is` and `is-not` absorb when directly adjacent.
const CHECK_OP_SUFFIXES: &[&[u8]] = &[b"==", b"=~", b"<=>"];

/// Allocation-free scanner.
///
/// Produces one token at a time as a `(tag, length)` pair. Error conditions
/// are encoded as `RawTag` variants, not as `Result::Err`.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
    /// The delimiter of the string literal being scanned, if any.
    string: Option<StringKind>,
}

impl<'a> RawScanner<'a> {
    /// Create a new scanner from a cursor.
    pub fn new(cursor: Cursor<'a>) -> Self {
        RawScanner {
            cursor,
            string: None,
        }
    }

    /// Whether the scanner is inside a string literal.
    pub fn in_string(&self) -> Option<StringKind> {
        self.string
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the source is exhausted.
    /// Subsequent calls after EOF continue to return `Eof`.
    pub fn next_token(&mut self) -> RawToken {
        if let Some(kind) = self.string {
            return self.string_piece(kind);
        }

        let start = self.cursor.pos();
        match self.cursor.current() {
            0 if self.cursor.is_eof() => self.eof(),
            b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C => self.whitespace(start),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start),
            b'0'..=b'9' => self.number(start),
            b'"' => self.string_open(start, StringKind::Double),
            b'\'' => self.string_open(start, StringKind::Single),
            b'`' if self.cursor.starts_with(b"```") => self.string_open(start, StringKind::Triple),
            b'#' => self.hash(start),
            b'~' if self.at_rough_frac() => self.rough_frac(start),
            b'+' => self.single(start, RawTag::Plus),
            b'-' => self.minus_or_arrow(start),
            b'*' => self.single(start, RawTag::Star),
            b'/' => self.single(start, RawTag::Slash),
            b'^' => self.single(start, RawTag::Caret),
            b'%' => self.single(start, RawTag::Percent),
            b'!' => self.single(start, RawTag::Bang),
            b'|' => self.single(start, RawTag::Pipe),
            b'=' => self.equal(start),
            b'<' => self.less(start),
            b'>' => self.greater(start),
            b'.' => self.dot(start),
            b',' => self.single(start, RawTag::Comma),
            b';' => self.single(start, RawTag::Semicolon),
            b':' => self.colon(start),
            b'(' => self.single(start, RawTag::LeftParen),
            b')' => self.single(start, RawTag::RightParen),
            b'[' => self.single(start, RawTag::LeftBracket),
            b']' => self.single(start, RawTag::RightBracket),
            b'{' => self.single(start, RawTag::LeftBrace),
            b'}' => self.single(start, RawTag::RightBrace),
            0x80..=0xFF if self.at_unicode_whitespace() => self.whitespace(start),
            _ => self.invalid(start),
        }
    }

    #[inline]
    fn token(&self, tag: RawTag, start: u32) -> RawToken {
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    fn eof(&mut self) -> RawToken {
        RawToken {
            tag: RawTag::Eof,
            len: 0,
        }
    }

    // ─── Trivia ─────────────────────────────────────────────────────

    fn whitespace(&mut self, start: u32) -> RawToken {
        self.cursor.eat_whitespace();
        self.token(RawTag::Whitespace, start)
    }

    fn at_unicode_whitespace(&self) -> bool {
        self.cursor.current_char().is_some_and(char::is_whitespace)
    }

    /// `#|` opens a block comment closed by the first `|#`; nested openers
    /// are ordinary comment text. Any other `#` starts a line comment.
    fn hash(&mut self, start: u32) -> RawToken {
        if self.cursor.peek() == b'|' {
            self.cursor.advance_n(2);
            if self.cursor.eat_through(b"|#") {
                self.token(RawTag::BlockComment, start)
            } else {
                self.token(RawTag::UnterminatedBlockComment, start)
            }
        } else {
            self.cursor.eat_until_newline_or_eof();
            self.token(RawTag::LineComment, start)
        }
    }

    // ─── Names ──────────────────────────────────────────────────────

    fn identifier(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        self.eat_name_rest();

        let text = self.cursor.slice_from(start);
        if (text == "is" || text == "is-not") && self.eat_check_op_suffix() {
            return self.token(RawTag::Ident, start);
        }
        if self.cursor.current() == b':'
            && !matches!(self.cursor.peek(), b':' | b'=')
            && COLON_WORDS.contains(&text)
        {
            self.cursor.advance();
            return self.token(RawTag::Ident, start);
        }
        if text == "else" && self.eat_if_after_else() {
            return self.token(RawTag::ElseIf, start);
        }
        self.token(RawTag::Ident, start)
    }

    /// Continue a name: identifier bytes, plus hyphen runs that are
    /// followed by another identifier byte (`a-b`, `a--b`, but not `a-`).
    fn eat_name_rest(&mut self) {
        loop {
            self.cursor.eat_while(is_ident_continue);
            if self.cursor.current() != b'-' {
                return;
            }
            let mut hyphens = 1;
            while self.cursor.peek_at(hyphens) == b'-' {
                hyphens += 1;
            }
            if !is_ident_continue(self.cursor.peek_at(hyphens)) {
                return;
            }
            self.cursor.advance_n(hyphens);
        }
    }

    fn eat_check_op_suffix(&mut self) -> bool {
        for suffix in CHECK_OP_SUFFIXES {
            if self.cursor.starts_with(suffix) {
                // Suffixes are at most 3 bytes.
                #[allow(clippy::cast_possible_truncation)]
                self.cursor.advance_n(suffix.len() as u32);
                return true;
            }
        }
        false
    }

    /// After `else`: one or more spaces or tabs, then `if` as a whole word.
    fn eat_if_after_else(&mut self) -> bool {
        let mut probe = self.cursor;
        if !matches!(probe.current(), b' ' | b'\t') {
            return false;
        }
        probe.eat_while(|b| b == b' ' || b == b'\t');
        if !probe.starts_with(b"if") {
            return false;
        }
        probe.advance_n(2);
        if is_ident_continue(probe.current()) || probe.current() == b'-' {
            return false;
        }
        self.cursor = probe;
        true
    }

    // ─── Numbers ────────────────────────────────────────────────────

    /// `[0-9]+(\.[0-9]+)?([eE][-+]?[0-9]+)?`, or `[0-9]+/[0-9]+`.
    fn number(&mut self, start: u32) -> RawToken {
        self.cursor.eat_while(|b| b.is_ascii_digit());

        if self.cursor.current() == b'/' && self.cursor.peek().is_ascii_digit() {
            self.cursor.advance();
            self.cursor.eat_while(|b| b.is_ascii_digit());
            return self.token(RawTag::Frac, start);
        }

        if self.cursor.current() == b'.' && self.cursor.peek().is_ascii_digit() {
            self.cursor.advance();
            self.cursor.eat_while(|b| b.is_ascii_digit());
        }

        if matches!(self.cursor.current(), b'e' | b'E') {
            let digits_at = if matches!(self.cursor.peek(), b'+' | b'-') { 2 } else { 1 };
            if self.cursor.peek_at(digits_at).is_ascii_digit() {
                self.cursor.advance_n(digits_at);
                self.cursor.eat_while(|b| b.is_ascii_digit());
            }
        }

        self.token(RawTag::Number, start)
    }

    /// `~[-+]?[0-9]+/[0-9]+` starts here.
    fn at_rough_frac(&self) -> bool {
        let mut offset = 1;
        if matches!(self.cursor.peek_at(offset), b'+' | b'-') {
            offset += 1;
        }
        if !self.cursor.peek_at(offset).is_ascii_digit() {
            return false;
        }
        while self.cursor.peek_at(offset).is_ascii_digit() {
            offset += 1;
        }
        self.cursor.peek_at(offset) == b'/' && self.cursor.peek_at(offset + 1).is_ascii_digit()
    }

    fn rough_frac(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        if matches!(self.cursor.current(), b'+' | b'-') {
            self.cursor.advance();
        }
        self.cursor.eat_while(|b| b.is_ascii_digit());
        self.cursor.advance();
        self.cursor.eat_while(|b| b.is_ascii_digit());
        self.token(RawTag::RoughFrac, start)
    }

    // ─── Operators ──────────────────────────────────────────────────

    /// Single-byte token: advance one byte and emit the given tag.
    fn single(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.advance();
        self.token(tag, start)
    }

    /// Emit `tag` covering `len` bytes from `start`.
    fn fixed(&mut self, start: u32, len: u32, tag: RawTag) -> RawToken {
        self.cursor.advance_n(len);
        self.token(tag, start)
    }

    fn minus_or_arrow(&mut self, start: u32) -> RawToken {
        match self.cursor.peek() {
            b'>' => self.fixed(start, 2, RawTag::Arrow),
            _ => self.single(start, RawTag::Minus),
        }
    }

    fn equal(&mut self, start: u32) -> RawToken {
        match self.cursor.peek() {
            b'=' => self.fixed(start, 2, RawTag::EqualEqual),
            b'~' => self.fixed(start, 2, RawTag::EqualTilde),
            b'>' => self.fixed(start, 2, RawTag::FatArrow),
            _ => self.single(start, RawTag::Equal),
        }
    }

    fn less(&mut self, start: u32) -> RawToken {
        match (self.cursor.peek(), self.cursor.peek2()) {
            (b'=', b'>') => self.fixed(start, 3, RawTag::Spaceship),
            (b'=', _) => self.fixed(start, 2, RawTag::LessEqual),
            (b'>', _) => self.fixed(start, 2, RawTag::NotEqual),
            _ => self.single(start, RawTag::Less),
        }
    }

    fn greater(&mut self, start: u32) -> RawToken {
        match self.cursor.peek() {
            b'=' => self.fixed(start, 2, RawTag::GreaterEqual),
            _ => self.single(start, RawTag::Greater),
        }
    }

    fn dot(&mut self, start: u32) -> RawToken {
        if self.cursor.starts_with(b"...") {
            self.fixed(start, 3, RawTag::DotDotDot)
        } else {
            self.single(start, RawTag::Dot)
        }
    }

    fn colon(&mut self, start: u32) -> RawToken {
        match self.cursor.peek() {
            b':' => self.fixed(start, 2, RawTag::ColonColon),
            b'=' => self.fixed(start, 2, RawTag::ColonEquals),
            _ => self.single(start, RawTag::Colon),
        }
    }

    // ─── Strings ────────────────────────────────────────────────────

    fn string_open(&mut self, start: u32, kind: StringKind) -> RawToken {
        self.cursor.advance_n(kind.delimiter_len());
        self.string = Some(kind);
        self.token(RawTag::StringOpen, start)
    }

    fn at_string_close(&self, kind: StringKind) -> bool {
        match kind {
            StringKind::Double => self.cursor.current() == b'"',
            StringKind::Single => self.cursor.current() == b'\'',
            StringKind::Triple => self.cursor.starts_with(b"```"),
        }
    }

    /// One piece of string literal: content run, escape, or closer.
    fn string_piece(&mut self, kind: StringKind) -> RawToken {
        let start = self.cursor.pos();

        if self.cursor.is_eof() {
            self.string = None;
            return self.token(RawTag::UnterminatedString, start);
        }
        if self.at_string_close(kind) {
            self.cursor.advance_n(kind.delimiter_len());
            self.string = None;
            return self.token(RawTag::StringClose, start);
        }
        match self.cursor.current() {
            b'\\' => self.escape(start, kind),
            b'\n' | b'\r' if !kind.allows_newlines() => {
                self.string = None;
                self.token(RawTag::UnterminatedString, start)
            }
            _ => self.string_content(start, kind),
        }
    }

    fn string_content(&mut self, start: u32, kind: StringKind) -> RawToken {
        loop {
            match self.cursor.skip_to_string_delim(kind) {
                b'`' if !self.at_string_close(kind) => self.cursor.advance(),
                _ => break,
            }
        }
        self.token(RawTag::StringContent, start)
    }

    /// A backslash escape. The cursor is on the `\`.
    fn escape(&mut self, start: u32, kind: StringKind) -> RawToken {
        let next = self.cursor.peek();
        match next {
            b'0'..=b'7' => {
                self.cursor.advance_n(2);
                self.eat_up_to(2, |b| matches!(b, b'0'..=b'7'));
            }
            b'x' if self.cursor.peek2().is_ascii_hexdigit() => {
                self.cursor.advance_n(2);
                self.eat_up_to(2, |b| b.is_ascii_hexdigit());
            }
            b'u' if self.cursor.peek2().is_ascii_hexdigit() => {
                self.cursor.advance_n(2);
                self.eat_up_to(4, |b| b.is_ascii_hexdigit());
            }
            _ if kind.is_simple_escape(next) => self.cursor.advance_n(2),
            0 if self.cursor.pos() + 1 >= self.cursor.source_len() => {
                self.cursor.advance();
                self.string = None;
                return self.token(RawTag::UnterminatedString, start);
            }
            _ => {
                self.cursor.advance();
                self.cursor.advance_char();
                return self.token(RawTag::InvalidEscape, start);
            }
        }
        self.token(RawTag::Escape, start)
    }

    fn eat_up_to(&mut self, max: u32, pred: impl Fn(u8) -> bool) {
        let mut eaten = 0;
        while eaten < max && pred(self.cursor.current()) {
            self.cursor.advance();
            eaten += 1;
        }
    }

    // ─── Errors ─────────────────────────────────────────────────────

    /// A maximal run of characters that cannot begin a token.
    fn invalid(&mut self, start: u32) -> RawToken {
        self.cursor.advance_char();
        while !self.cursor.is_eof() && !self.at_token_start() {
            self.cursor.advance_char();
        }
        self.token(RawTag::Invalid, start)
    }

    fn at_token_start(&self) -> bool {
        match self.cursor.current() {
            b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C => true,
            b'a'..=b'z' | b'A'..=b'Z' | b'_' | b'0'..=b'9' => true,
            b'"' | b'\'' | b'#' => true,
            b'`' => self.cursor.starts_with(b"```"),
            b'~' => self.at_rough_frac(),
            b'+' | b'-' | b'*' | b'/' | b'^' | b'%' | b'!' | b'|' | b'=' | b'<' | b'>' => true,
            b'.' | b',' | b';' | b':' | b'(' | b')' | b'[' | b']' | b'{' | b'}' => true,
            0x80..=0xFF => self.at_unicode_whitespace(),
            _ => false,
        }
    }
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    fn next(&mut self) -> Option<RawToken> {
        let tok = self.next_token();
        if tok.tag == RawTag::Eof {
            None
        } else {
            Some(tok)
        }
    }
}

/// 256-byte lookup table for identifier continuation bytes.
/// `true` for a-z, A-Z, 0-9, and underscore. The sentinel maps to `false`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_'
        );
        i += 1;
    }
    table
};

#[inline]
fn is_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}

/// Tokenize a source string and collect all raw tokens except the final
/// `Eof`.
pub fn tokenize(source: &str) -> Vec<RawToken> {
    let buf = crate::SourceBuffer::new(source);
    RawScanner::new(buf.cursor()).collect()
}

#[cfg(test)]
mod tests;
