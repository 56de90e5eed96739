//! Parse error types.
//!
//! A [`ParseError`] never aborts a parse. Each one is recorded next to the
//! `Error` node it produced, so callers get both a renderable tree and a
//! list of diagnostics. Errors follow a WHERE + WHAT + WHY shape:
//! - WHERE: `span` locating the error in source
//! - WHAT: `kind` describing what went wrong
//! - WHY: `context` describing what was being parsed

mod context;

#[cfg(test)]
mod tests;

use pyret_diagnostic::{Diagnostic, ErrorCode};
use pyret_ir::{Span, TokenKind};
use pyret_lexer::{LexError, LexErrorKind};

pub use context::ErrorContext;

/// A recoverable syntax error.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind}")]
pub struct ParseError {
    pub span: Span,
    pub kind: ParseErrorKind,
    pub context: ErrorContext,
}

/// What kind of syntax error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("expected {expected}, found {}", .found.describe())]
    UnexpectedToken { found: TokenKind, expected: String },
    #[error("expected an expression, found {}", .found.describe())]
    ExpectedExpression { found: TokenKind },
    /// A closer is missing. `open_span` is the token that opened the
    /// construct.
    #[error("missing {} to close {}", .closer.describe(), .opener.describe())]
    UnclosedBlock {
        opener: TokenKind,
        closer: TokenKind,
        open_span: Span,
    },
    #[error("expected a name, found {}", .found.describe())]
    ExpectedName { found: TokenKind },
    #[error("expected an annotation, found {}", .found.describe())]
    ExpectedAnnotation { found: TokenKind },
    /// An `Error` token from the lexer, placed where an expression was
    /// expected.
    #[error("invalid character in source")]
    InvalidCharacter,
}

impl ParseError {
    #[cold]
    pub fn new(span: Span, kind: ParseErrorKind, context: ErrorContext) -> Self {
        ParseError {
            span,
            kind,
            context,
        }
    }

    /// Stable diagnostic code.
    pub fn code(&self) -> ErrorCode {
        match self.kind {
            ParseErrorKind::UnexpectedToken { .. } => ErrorCode::E1001,
            ParseErrorKind::ExpectedExpression { .. } => ErrorCode::E1002,
            ParseErrorKind::UnclosedBlock { .. } => ErrorCode::E1003,
            ParseErrorKind::ExpectedName { .. } => ErrorCode::E1004,
            ParseErrorKind::ExpectedAnnotation { .. } => ErrorCode::E1005,
            ParseErrorKind::InvalidCharacter => ErrorCode::E0004,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::new(self.code(), self.kind.to_string())
            .at(self.span, self.label())
            .while_parsing(self.context.description());

        match &self.kind {
            ParseErrorKind::UnclosedBlock {
                opener,
                closer,
                open_span,
            } => diag
                .opened_at(*open_span, format!("{} opened here", opener.describe()))
                .with_help(format!("add {}", closer.describe())),
            _ => diag,
        }
    }

    fn label(&self) -> String {
        match &self.kind {
            ParseErrorKind::UnexpectedToken { expected, .. } => format!("expected {expected}"),
            ParseErrorKind::ExpectedExpression { .. } => "expected an expression".to_string(),
            ParseErrorKind::UnclosedBlock { closer, .. } => {
                format!("{} expected here", closer.describe())
            }
            ParseErrorKind::ExpectedName { .. } => "expected a name".to_string(),
            ParseErrorKind::ExpectedAnnotation { .. } => "expected an annotation".to_string(),
            ParseErrorKind::InvalidCharacter => "no token starts with this".to_string(),
        }
    }
}

/// Render a fatal lexer error as a diagnostic.
pub fn lex_error_to_diagnostic(error: &LexError) -> Diagnostic {
    let code = match error.kind {
        LexErrorKind::UnterminatedString { .. } => ErrorCode::E0001,
        LexErrorKind::UnterminatedBlockComment => ErrorCode::E0002,
        LexErrorKind::InvalidEscape { .. } => ErrorCode::E0003,
        LexErrorKind::SourceTooLarge { .. } => ErrorCode::E0005,
    };
    let label = match error.kind {
        LexErrorKind::UnterminatedString { .. } => "string starts here",
        LexErrorKind::UnterminatedBlockComment => "comment starts here",
        LexErrorKind::InvalidEscape { .. } => "unknown escape",
        LexErrorKind::SourceTooLarge { .. } => "",
    };

    let mut diag = Diagnostic::new(code, error.kind.to_string());
    if !matches!(error.kind, LexErrorKind::SourceTooLarge { .. }) {
        diag = diag.at(error.span, label);
    }
    if let Some(help) = error.help() {
        diag = diag.with_help(help);
    }
    diag
}
