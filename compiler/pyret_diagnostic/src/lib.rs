//! Diagnostic system for syntax error reporting.
//!
//! Every diagnostic carries:
//! - An error code for searchability
//! - A message (what went wrong)
//! - The span where it went wrong, and the opener for unclosed constructs
//! - The production being parsed and an optional help line
//!
//! Lexer and parser errors convert into [`Diagnostic`]s; emitters render
//! them. Line and column numbers are computed at render time from a
//! [`LineOffsetTable`], so diagnostics themselves stay byte-offset based.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
pub use span_utils::LineOffsetTable;
