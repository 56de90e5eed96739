//! Syntax diagnostics.
//!
//! Every front-end error has the same shape: a code, a one-line message,
//! the place the error was found and, for a construct left open, the place
//! it was opened. The production being parsed is kept as structured
//! context so emitters decide how to phrase it.

use pyret_ir::Span;

use crate::ErrorCode;

/// A span with a message.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub span: Span,
    pub message: String,
}

impl Label {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Label {
            span,
            message: message.into(),
        }
    }
}

/// A syntax error ready to render.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    /// Where the error was found. Whole-file errors have none.
    pub location: Option<Label>,
    /// Where the unclosed construct was opened.
    pub opener: Option<Label>,
    /// The production being parsed, as in "a function definition".
    pub context: Option<String>,
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Diagnostic {
            code,
            message: message.into(),
            location: None,
            opener: None,
            context: None,
            help: None,
        }
    }

    /// Point at the error.
    pub fn at(mut self, span: Span, message: impl Into<String>) -> Self {
        self.location = Some(Label::new(span, message));
        self
    }

    /// Point at the opener of a construct that was never closed.
    pub fn opened_at(mut self, span: Span, message: impl Into<String>) -> Self {
        self.opener = Some(Label::new(span, message));
        self
    }

    pub fn while_parsing(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn span(&self) -> Option<Span> {
        self.location.as_ref().map(|label| label.span)
    }
}

#[cfg(test)]
mod tests;
