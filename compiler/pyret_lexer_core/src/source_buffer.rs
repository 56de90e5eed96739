//! Sentinel-terminated source buffer.
//!
//! The buffer copies the source into a zero-padded vector so the scanner can
//! read one or two bytes past the current position without bounds checks
//! failing near the end of input. The byte at `len()` is always `0x00`.

use crate::Cursor;

/// Padding granularity. The buffer length is rounded up to a multiple.
const CACHE_LINE: usize = 64;

/// Sentinel-terminated copy of a source file.
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
///
/// The original `&str` is kept alongside so the cursor can decode full
/// characters and slice text without re-validating UTF-8.
#[derive(Clone, Debug)]
pub struct SourceBuffer<'src> {
    source: &'src str,
    buf: Vec<u8>,
    source_len: u32,
}

impl<'src> SourceBuffer<'src> {
    /// Copy `source` into a padded buffer.
    ///
    /// Sources longer than `u32::MAX` bytes are truncated to the first
    /// `u32::MAX` bytes for scanning purposes; the lexer rejects them before
    /// building spans.
    pub fn new(source: &'src str) -> Self {
        let bytes = source.as_bytes();
        let source_len = u32::try_from(bytes.len()).unwrap_or(u32::MAX);
        let len = source_len as usize;

        let padded_len = (len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);
        let mut buf = vec![0u8; padded_len];
        buf[..len].copy_from_slice(&bytes[..len]);

        SourceBuffer {
            source,
            buf,
            source_len,
        }
    }

    /// Source bytes, without sentinel or padding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// The full buffer including sentinel and padding.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// The original source text.
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source, self.source_len)
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}
