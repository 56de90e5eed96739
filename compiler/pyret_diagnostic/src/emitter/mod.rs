//! Diagnostic emitters.
//!
//! Each emitter implements [`DiagnosticEmitter`]. Only the terminal format
//! exists today: colored, human-readable output with source snippets.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// Trait for emitting diagnostics in various formats.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Emit multiple diagnostics.
    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    /// Flush any buffered output.
    fn flush(&mut self);

    /// Emit a closing line counting the errors reported.
    fn emit_summary(&mut self, error_count: usize);
}
