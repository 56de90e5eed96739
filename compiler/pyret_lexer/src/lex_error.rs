//! Lexer error types.
//!
//! Lex errors are fatal: the first one aborts tokenization and is returned
//! to the caller instead of a token list. Characters that merely cannot
//! begin a token are not errors here; they become `Error` tokens and the
//! parser wraps them in error nodes.
//!
//! Errors follow a WHERE + WHAT + WHY shape:
//! - WHERE: `span` locating the error in source
//! - WHAT: `kind` describing what went wrong
//! - WHY: `context` describing what the lexer was inside of

use pyret_ir::Span;

/// A fatal lexer error.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind} at {span}")]
pub struct LexError {
    /// WHERE the error occurred.
    pub span: Span,
    /// WHAT went wrong.
    pub kind: LexErrorKind,
    /// WHY: what the lexer was scanning at the time.
    pub context: LexErrorContext,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// End of input (or a raw newline in a `"`/`'` string) before the
    /// closing delimiter.
    #[error("unterminated string literal, expected closing `{delimiter}`")]
    UnterminatedString { delimiter: &'static str },
    /// A backslash followed by a character that starts no escape.
    #[error("invalid escape sequence `\\{escape_char}`")]
    InvalidEscape { escape_char: char },
    /// `#|` with no closing `|#`.
    #[error("unterminated block comment, expected closing `|#`")]
    UnterminatedBlockComment,
    /// Source longer than spans can address.
    #[error("source file too large ({len} bytes)")]
    SourceTooLarge { len: usize },
}

/// Lexing context at the point of error.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum LexErrorContext {
    /// Not inside any literal or comment.
    #[default]
    TopLevel,
    /// Inside a string literal opened at `start`.
    InsideString { start: u32 },
    /// Inside a block comment opened at `start`.
    InsideBlockComment { start: u32 },
}

impl LexError {
    /// Create an unterminated string error spanning from the opening
    /// delimiter to where scanning stopped.
    #[cold]
    pub fn unterminated_string(span: Span, delimiter: &'static str) -> Self {
        LexError {
            span,
            kind: LexErrorKind::UnterminatedString { delimiter },
            context: LexErrorContext::InsideString { start: span.start },
        }
    }

    /// Create an invalid escape error. `span` covers the backslash and the
    /// offending character; `string_start` is the opening delimiter.
    #[cold]
    pub fn invalid_escape(span: Span, escape_char: char, string_start: u32) -> Self {
        LexError {
            span,
            kind: LexErrorKind::InvalidEscape { escape_char },
            context: LexErrorContext::InsideString {
                start: string_start,
            },
        }
    }

    /// Create an unterminated block comment error.
    #[cold]
    pub fn unterminated_block_comment(span: Span) -> Self {
        LexError {
            span,
            kind: LexErrorKind::UnterminatedBlockComment,
            context: LexErrorContext::InsideBlockComment { start: span.start },
        }
    }

    /// Create a source-too-large error.
    #[cold]
    pub fn source_too_large(len: usize) -> Self {
        LexError {
            span: Span::DUMMY,
            kind: LexErrorKind::SourceTooLarge { len },
            context: LexErrorContext::TopLevel,
        }
    }

    /// Short hint for fixing the error, if there is an obvious one.
    pub fn help(&self) -> Option<String> {
        match &self.kind {
            LexErrorKind::UnterminatedString { delimiter } => {
                Some(format!("add a closing `{delimiter}`"))
            }
            LexErrorKind::InvalidEscape { .. } => Some(
                r#"valid escapes are \n, \r, \t, \\, \", \', octal \NNN, \xHH and \uHHHH"#
                    .to_string(),
            ),
            LexErrorKind::UnterminatedBlockComment => {
                Some("block comments do not nest; the first `|#` closes them".to_string())
            }
            LexErrorKind::SourceTooLarge { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests;
