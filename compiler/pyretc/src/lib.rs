//! Pyret front-end driver.
//!
//! ```text
//! pyretc lex <file.arr>              token stream, trivia included
//! pyretc parse [--tokens] <file.arr> concrete syntax tree dump
//! pyretc check <file.arr>...         syntax check, files parsed in parallel
//! pyretc explain <CODE>              describe a diagnostic code
//! ```
//!
//! Commands write their results to one writer and diagnostics to another,
//! and return an [`Outcome`] that the binary turns into an exit code.

pub mod commands;
mod error;
mod options;

use std::sync::Once;

pub use error::CliError;
pub use options::{Options, Outcome};

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber. Safe to call more than once.
///
/// Does nothing unless `RUST_LOG` is set, e.g. `RUST_LOG=pyret_parse=trace`.
/// With `PYRET_LOG_TREE=1`, events are printed nested under their spans.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        if std::env::var("PYRET_LOG_TREE").is_ok_and(|value| value == "1") {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_indent_lines(true),
                )
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
