//! The `check` command: syntax-check several files at once.

use std::io::Write;

use pyret_diagnostic::Diagnostic;
use pyret_parse::lex_error_to_diagnostic;
use rayon::prelude::*;
use tracing::debug;

use super::{read_file, report};
use crate::{CliError, Options, Outcome};

/// One checked file, ready to report.
struct FileReport<'a> {
    path: &'a str,
    source: String,
    diagnostics: Vec<Diagnostic>,
    nodes: usize,
}

fn check_one(path: &str) -> Result<FileReport<'_>, CliError> {
    let source = read_file(path)?;
    let (diagnostics, nodes) = match pyret_parse::parse(&source) {
        Ok(output) => (output.diagnostics(), output.syntax().descendants().count()),
        Err(error) => (vec![lex_error_to_diagnostic(&error)], 0),
    };
    debug!(path, nodes, errors = diagnostics.len(), "checked");
    Ok(FileReport {
        path,
        source,
        diagnostics,
        nodes,
    })
}

/// Parse every file, in parallel unless `--no-parallel` was given, and
/// report the results in argument order.
///
/// A file that cannot be read stops the command before anything is
/// reported.
pub fn check_files(
    options: &Options,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<Outcome, CliError> {
    if options.paths.is_empty() {
        return Err(CliError::Usage("pyretc check <file.arr>...".to_string()));
    }

    let reports: Vec<FileReport<'_>> = if options.parallel {
        options
            .paths
            .par_iter()
            .map(|path| check_one(path))
            .collect::<Result<_, _>>()?
    } else {
        options
            .paths
            .iter()
            .map(|path| check_one(path))
            .collect::<Result<_, _>>()?
    };

    let mut outcome = Outcome::Clean;
    for file in &reports {
        if file.diagnostics.is_empty() {
            writeln!(out, "OK: {} ({} nodes)", file.path, file.nodes)?;
        } else {
            outcome = outcome.and(report(
                &file.diagnostics,
                file.path,
                &file.source,
                options,
                err,
            ));
        }
    }
    Ok(outcome)
}
