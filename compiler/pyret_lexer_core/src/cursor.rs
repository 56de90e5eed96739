//! Cursor over a sentinel-terminated buffer.
//!
//! The cursor advances byte by byte. EOF is the sentinel `0x00` at or past
//! the source length; an interior NUL before that is ordinary (invalid)
//! input, distinguished by position.

use memchr::memmem;

use crate::StringKind;

/// Returns the earliest of two optional positions.
fn earliest_of(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

/// Cursor over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], so saving and restoring a position is a plain
/// assignment.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// The same bytes as UTF-8 text, without padding.
    src: &'a str,
    pos: u32,
    source_len: u32,
}

impl<'a> Cursor<'a> {
    /// `buf[source_len]` must be the `0x00` sentinel, followed only by zero
    /// padding. `SourceBuffer::new` guarantees this.
    pub(crate) fn new(buf: &'a [u8], src: &'a str, source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        Cursor {
            buf,
            src,
            pos: 0,
            source_len,
        }
    }

    /// Byte at the current position, `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Byte one position ahead.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    /// Byte two positions ahead.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.byte_at(self.pos + 2)
    }

    /// Byte `n` positions ahead, `0x00` past the padding.
    #[inline]
    pub fn peek_at(&self, n: u32) -> u8 {
        self.byte_at(self.pos + n)
    }

    #[inline]
    fn byte_at(&self, pos: u32) -> u8 {
        self.buf.get(pos as usize).copied().unwrap_or(0)
    }

    /// Whether the bytes at the current position start with `prefix`.
    #[inline]
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.buf
            .get(self.pos as usize..)
            .is_some_and(|rest| rest.starts_with(prefix))
    }

    /// Decode the full character at the current position.
    ///
    /// Returns `None` at EOF.
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        self.src
            .get(self.pos as usize..)
            .and_then(|rest| rest.chars().next())
    }

    /// Advance by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Advance past the full character at the current position.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = self.current_char().map_or(1, char::len_utf8);
        // A char is at most 4 bytes.
        #[allow(clippy::cast_possible_truncation)]
        self.advance_n(width as u32);
    }

    /// `true` once the cursor has consumed the whole source.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the source content.
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Source text between two offsets.
    ///
    /// Returns `""` if the range is out of bounds or splits a character;
    /// offsets produced by the scanner never do.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        self.src.get(start as usize..end as usize).unwrap_or("")
    }

    /// Source text from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` holds for the current byte.
    ///
    /// `pred(0)` must be `false` so the sentinel stops the loop.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Advance past any whitespace, ASCII or Unicode.
    pub fn eat_whitespace(&mut self) {
        loop {
            match self.current() {
                b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C => self.advance(),
                b if b.is_ascii() => break,
                _ => match self.current_char() {
                    Some(c) if c.is_whitespace() => self.advance_char(),
                    _ => break,
                },
            }
        }
    }

    /// Advance to the next `\n` or EOF.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < source_len which fits in u32"
    )]
    pub fn eat_until_newline_or_eof(&mut self) {
        let remaining = self.remaining();
        if let Some(offset) = memchr::memchr(b'\n', remaining) {
            self.pos += offset as u32;
        } else {
            self.pos = self.source_len;
        }
    }

    /// Advance past the first occurrence of `needle`.
    ///
    /// Returns `false` and moves to EOF if there is none.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset + needle.len() <= source_len which fits in u32"
    )]
    pub fn eat_through(&mut self, needle: &[u8]) -> bool {
        if let Some(offset) = memmem::find(self.remaining(), needle) {
            self.pos += (offset + needle.len()) as u32;
            true
        } else {
            self.pos = self.source_len;
            false
        }
    }

    /// Advance past ordinary string content to the next byte that might end
    /// a content run. Returns that byte, or `0` at EOF.
    ///
    /// For `"` and `'` strings these are the quote, `\`, `\n` and `\r`. For
    /// triple-backtick strings they are `` ` `` and `\`; the caller decides
    /// whether a backtick starts the closing delimiter.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < source_len which fits in u32"
    )]
    pub fn skip_to_string_delim(&mut self, kind: StringKind) -> u8 {
        let remaining = self.remaining();
        let offset = match kind {
            StringKind::Double => earliest_of(
                memchr::memchr3(b'"', b'\\', b'\n', remaining),
                memchr::memchr(b'\r', remaining),
            ),
            StringKind::Single => earliest_of(
                memchr::memchr3(b'\'', b'\\', b'\n', remaining),
                memchr::memchr(b'\r', remaining),
            ),
            StringKind::Triple => memchr::memchr2(b'`', b'\\', remaining),
        };
        if let Some(off) = offset {
            self.pos += off as u32;
            self.current()
        } else {
            self.pos = self.source_len;
            0
        }
    }

    fn remaining(&self) -> &'a [u8] {
        self.buf
            .get(self.pos as usize..self.source_len as usize)
            .unwrap_or(&[])
    }
}
