//! The `explain` command: describe a diagnostic code.

use std::io::Write;

use pyret_diagnostic::ErrorCode;

use crate::{CliError, Outcome};

/// Print the summary of a code such as `E1003`. Case-insensitive.
pub fn explain_error(code: &str, out: &mut impl Write) -> Result<Outcome, CliError> {
    let parsed = ErrorCode::parse(&code.to_ascii_uppercase())
        .ok_or_else(|| CliError::UnknownCode(code.to_string()))?;

    let phase = if parsed.is_lexer_error() {
        "Reported by the lexer; the file is not parsed."
    } else {
        "Reported by the parser; the tree marks the spot with an `Error` node."
    };
    writeln!(out, "{parsed}: {}", parsed.description())?;
    writeln!(out, "{phase}")?;
    Ok(Outcome::Clean)
}
