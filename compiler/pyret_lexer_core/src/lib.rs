//! Low-level scanner for Pyret source text.
//!
//! This crate splits source text into `(RawTag, len)` pairs and nothing
//! more. It does not resolve keywords, classify parentheses, or decide
//! whether a sign belongs to a number: those need the previous cooked token
//! and live in `pyret_lexer`.
//!
//! The only state the scanner keeps between tokens is whether it is inside
//! a string literal, and if so which delimiter closes it.
//!
//! ```text
//! let buf = SourceBuffer::new("f(x)");
//! let mut scanner = RawScanner::new(buf.cursor());
//! while let Some(token) = scanner.next() { ... }
//! ```

mod cursor;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use cursor::Cursor;
pub use raw_scanner::{tokenize, RawScanner};
pub use source_buffer::SourceBuffer;
pub use tag::{RawTag, RawToken, StringKind};
