//! Command handlers for the `pyretc` CLI.
//!
//! Each handler takes the parsed [`Options`], a writer for its results and
//! a writer for diagnostics. Shared helpers for reading input and
//! rendering diagnostics live here in the module root.

mod check;
mod debug;
mod explain;

#[cfg(test)]
mod tests;

use std::io::Write;

use pyret_diagnostic::emitter::{DiagnosticEmitter, TerminalEmitter};
use pyret_diagnostic::Diagnostic;

use crate::{CliError, Options, Outcome};

pub use check::check_files;
pub use debug::{lex_file, parse_file};
pub use explain::explain_error;

pub(crate) fn read_file(path: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.into(),
        source,
    })
}

/// Render `diagnostics` against `source`, followed by a summary line.
fn report(
    diagnostics: &[Diagnostic],
    path: &str,
    source: &str,
    options: &Options,
    err: &mut impl Write,
) -> Outcome {
    if diagnostics.is_empty() {
        return Outcome::Clean;
    }
    let mut emitter = TerminalEmitter::with_color_mode(err, options.color, options.diagnostics_tty);
    emitter.set_source(path, source);
    emitter.emit_all(diagnostics);
    emitter.emit_summary(diagnostics.len());
    emitter.flush();
    Outcome::HasErrors
}
