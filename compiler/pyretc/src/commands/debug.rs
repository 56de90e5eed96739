//! Debug commands: `lex` and `parse` for inspecting the front-end.

use std::io::{self, Write};

use pyret_ir::TokenList;
use pyret_parse::{lex_error_to_diagnostic, parse_tokens};
use tracing::debug;

use super::{read_file, report};
use crate::{CliError, Options, Outcome};

/// Lex a file and print every token, trivia included.
pub fn lex_file(
    path: &str,
    options: &Options,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<Outcome, CliError> {
    let source = read_file(path)?;
    match pyret_lexer::lex(&source) {
        Ok(tokens) => {
            write_tokens(out, path, &source, &tokens)?;
            Ok(Outcome::Clean)
        }
        Err(error) => {
            let diagnostic = lex_error_to_diagnostic(&error);
            Ok(report(&[diagnostic], path, &source, options, err))
        }
    }
}

/// Parse a file and print its concrete syntax tree, then any syntax errors.
///
/// The tree is printed even when it contains `Error` nodes.
pub fn parse_file(
    path: &str,
    options: &Options,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<Outcome, CliError> {
    let source = read_file(path)?;
    let tokens = match pyret_lexer::lex(&source) {
        Ok(tokens) => tokens,
        Err(error) => {
            let diagnostic = lex_error_to_diagnostic(&error);
            return Ok(report(&[diagnostic], path, &source, options, err));
        }
    };

    if options.tokens {
        write_tokens(out, path, &source, &tokens)?;
        writeln!(out)?;
    }

    let output = parse_tokens(&source, &tokens);
    debug!(path, errors = output.errors.len(), "parse command");
    write!(out, "{}", output.debug_tree())?;
    Ok(report(&output.diagnostics(), path, &source, options, err))
}

fn write_tokens(out: &mut impl Write, path: &str, source: &str, tokens: &TokenList) -> io::Result<()> {
    writeln!(out, "Tokens for '{path}' ({} tokens):", tokens.len())?;
    for token in tokens {
        writeln!(
            out,
            "  {:?} @ {} {:?}",
            token.kind,
            token.span,
            token.text(source)
        )?;
    }
    Ok(())
}
