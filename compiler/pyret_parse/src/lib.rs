//! Error-tolerant recursive descent parser for Pyret.
//!
//! Produces a lossless concrete syntax tree (a `rowan` green tree) in which
//! every byte of input, trivia included, is reachable through leaf tokens.
//!
//! # Architecture
//!
//! ```text
//! TokenList → Parser (events) → sink → GreenNode
//! ```
//!
//! The parser walks the significant tokens and records start/token/finish
//! events. Ambiguous spots are resolved with bounded speculation: the
//! parser snapshots its position and event count, tries one reading and
//! rewinds. The only construct that needs real scoring is `e<...>`, which
//! may be a generic instantiation or two chained comparisons; see
//! [`GrammarTable`] for the precedences involved.
//!
//! Syntax errors never abort. The failing statement is rewound and its
//! tokens are wrapped in a single `Error` node, then parsing resumes at the
//! next statement.

mod cursor;
mod error;
mod event;
mod grammar;
mod grammar_table;
mod output;
mod recovery;
mod sink;
mod snapshot;

#[cfg(test)]
mod tests;

use pyret_ir::{NodeKind, Span, Token, TokenKind, TokenList};
use pyret_lexer::SoftKeyword;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::event::{CompletedMarker, Event, Marker};

pub use cursor::Cursor;
pub use error::{lex_error_to_diagnostic, ErrorContext, ParseError, ParseErrorKind};
pub use grammar_table::{grammar_table, prec, GrammarTable};
pub use output::ParseOutput;
pub use pyret_lexer::LexError;
pub use recovery::TokenSet;

/// Result of a grammar rule: the completed node, or the error that makes
/// the enclosing statement unparseable.
pub(crate) type PResult<T = CompletedMarker> = Result<T, ParseError>;

/// Lex and parse a complete source file.
///
/// Only lexer errors are fatal. Syntax errors are reported through
/// [`ParseOutput::errors`] and `Error` nodes in the tree.
pub fn parse(source: &str) -> Result<ParseOutput, LexError> {
    let tokens = pyret_lexer::lex(source)?;
    Ok(parse_tokens(source, &tokens))
}

/// Parse an already lexed token list.
///
/// `tokens` must have been produced from `source`.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn parse_tokens(source: &str, tokens: &TokenList) -> ParseOutput {
    let mut parser = Parser::new(source, tokens);
    parser.parse_source_file();

    let Parser { events, errors, .. } = parser;
    debug!(events = events.len(), errors = errors.len(), "parsed");
    let green = sink::build_tree(source, tokens, events);
    ParseOutput::new(green, errors)
}

/// Parser state.
pub(crate) struct Parser<'a> {
    source: &'a str,
    cursor: Cursor<'a>,
    pub(crate) events: Vec<Event>,
    errors: Vec<ParseError>,
    context: ErrorContext,
    table: &'static GrammarTable,
    /// Memoized inst-vs-comparison decisions, keyed by the position of `<`.
    inst_decisions: FxHashMap<usize, bool>,
    /// Memoized spaced-call decisions, keyed by the position of `(`.
    spaced_call_decisions: FxHashMap<usize, bool>,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str, tokens: &'a TokenList) -> Self {
        Parser {
            source,
            cursor: Cursor::new(tokens),
            events: Vec::with_capacity(tokens.len() * 2),
            errors: Vec::new(),
            context: ErrorContext::Module,
            table: grammar_table(),
            inst_decisions: FxHashMap::default(),
            spaced_call_decisions: FxHashMap::default(),
        }
    }

    // --- Cursor delegation ---

    #[inline]
    fn current(&self) -> Token {
        self.cursor.current()
    }

    #[inline]
    fn current_kind(&self) -> TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn current_span(&self) -> Span {
        self.cursor.current_span()
    }

    #[inline]
    fn nth_kind(&self, n: usize) -> TokenKind {
        self.cursor.nth_kind(n)
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    #[inline]
    fn at(&self, kind: TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn at_set(&self, set: TokenSet) -> bool {
        set.contains(self.current_kind())
    }

    /// The current token is a name spelling `keyword`.
    fn at_soft(&self, keyword: SoftKeyword) -> bool {
        self.nth_at_soft(0, keyword)
    }

    fn nth_at_soft(&self, n: usize, keyword: SoftKeyword) -> bool {
        let token = self.cursor.nth(n);
        token.kind == TokenKind::Name && token.text(self.source) == keyword.as_str()
    }

    /// The current token is one of the three opening parentheses.
    #[inline]
    fn at_open_paren(&self) -> bool {
        self.current_kind().is_open_paren()
    }

    // --- Events ---

    /// Open a node whose kind is chosen on completion.
    fn start(&mut self) -> Marker {
        // Event counts are bounded by twice the token count, itself below
        // `u32::MAX`.
        #[allow(clippy::cast_possible_truncation)]
        let pos = self.events.len() as u32;
        self.events.push(Event::Tombstone);
        Marker::new(pos)
    }

    /// Consume the current token into the open node.
    fn bump(&mut self) {
        if self.is_at_end() {
            return;
        }
        trace!(kind = ?self.current_kind(), span = %self.current_span(), "bump");
        self.events.push(Event::Token);
        self.cursor.advance();
    }

    /// Consume the current token as the only child of a `kind` node.
    fn bump_node(&mut self, kind: NodeKind) -> CompletedMarker {
        let m = self.start();
        self.bump();
        m.complete(self, kind)
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind) -> PResult<()> {
        if self.eat(kind) {
            Ok(())
        } else {
            Err(self.unexpected(&kind.describe()))
        }
    }

    /// Consume a `NAME` token.
    fn expect_name(&mut self) -> PResult<()> {
        if self.eat(TokenKind::Name) {
            Ok(())
        } else {
            Err(self.error_here(ParseErrorKind::ExpectedName {
                found: self.current_kind(),
            }))
        }
    }

    /// Consume the closer of a construct opened by `opener` at `open_span`.
    ///
    /// At end of input the construct is closed in place with a zero-width
    /// `Error` node and the error is recorded; the caller carries on as if
    /// the closer had been there.
    fn expect_closer(&mut self, closer: TokenKind, opener: TokenKind, open_span: Span) -> PResult<()> {
        if self.eat(closer) {
            return Ok(());
        }
        if !self.is_at_end() {
            return Err(self.unexpected(&closer.describe()));
        }

        let err = self.error_here(ParseErrorKind::UnclosedBlock {
            opener,
            closer,
            open_span,
        });
        debug!(%open_span, ?closer, "closing construct at end of input");
        self.record(err);
        let m = self.start();
        m.complete(self, NodeKind::Error);
        Ok(())
    }

    // --- Errors ---

    fn error_here(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(self.current_span(), kind, self.context)
    }

    fn unexpected(&self, expected: &str) -> ParseError {
        self.error_here(ParseErrorKind::UnexpectedToken {
            found: self.current_kind(),
            expected: expected.to_string(),
        })
    }

    fn record(&mut self, error: ParseError) {
        trace!(%error, span = %error.span, "syntax error");
        self.errors.push(error);
    }

    /// Run `f` with `context` as the "while parsing" context of any error.
    fn in_error_context<T>(&mut self, context: ErrorContext, f: impl FnOnce(&mut Self) -> T) -> T {
        let outer = std::mem::replace(&mut self.context, context);
        let result = f(self);
        self.context = outer;
        result
    }
}
