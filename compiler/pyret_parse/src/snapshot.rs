//! Parser snapshots for speculative parsing.
//!
//! A snapshot is the cursor position plus the lengths of the event and
//! error lists. Restoring truncates both lists, so anything a speculative
//! parse recorded disappears without a trace.
//!
//! # When to Use Each Approach
//!
//! - Token checks (`at`, `nth_kind`) when one or two tokens decide.
//! - [`Parser::look_ahead`] to run a predicate that consumes tokens but
//!   must not affect state.
//! - [`Parser::parses_cleanly`] to ask whether a rule would succeed here
//!   without recording any error.
//! - `snapshot()` / `restore()` for statement-level recovery, where the
//!   failed attempt is replaced by an `Error` node.

use tracing::trace;

use crate::{ErrorContext, PResult, Parser};

/// Saved parser state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ParserSnapshot {
    cursor_pos: usize,
    events_len: usize,
    errors_len: usize,
    context: ErrorContext,
}

impl Parser<'_> {
    pub(crate) fn snapshot(&self) -> ParserSnapshot {
        ParserSnapshot {
            cursor_pos: self.cursor.position(),
            events_len: self.events.len(),
            errors_len: self.errors.len(),
            context: self.context,
        }
    }

    pub(crate) fn restore(&mut self, snapshot: ParserSnapshot) {
        self.cursor.set_position(snapshot.cursor_pos);
        self.events.truncate(snapshot.events_len);
        self.errors.truncate(snapshot.errors_len);
        self.context = snapshot.context;
    }

    /// Run `f` and rewind, keeping only its return value.
    pub(crate) fn look_ahead<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let snapshot = self.snapshot();
        let result = f(self);
        self.restore(snapshot);
        result
    }

    /// Whether `rule` parses here with no error, recovered or not.
    pub(crate) fn parses_cleanly<T>(&mut self, rule: impl FnOnce(&mut Self) -> PResult<T>) -> bool {
        let start = self.cursor.position();
        let clean = self.look_ahead(|p| {
            let errors = p.errors.len();
            rule(p).is_ok() && p.errors.len() == errors
        });
        trace!(start, clean, "speculative parse");
        clean
    }
}
