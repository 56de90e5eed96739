//! Grammar productions.
//!
//! One file per family of productions, each adding methods to [`Parser`]:
//!
//! - `module`: the program root and `use` / `import` / `include` /
//!   `provide` headers
//! - `stmt`: statement dispatch, bindings with `=`, checks, contracts
//! - `binding`: name and tuple bindings, `let`-style grouped bindings
//! - `function`: `fun`, `lam`, `method`, and their shared header and body
//! - `data`: `data` declarations
//! - `expr`: binary chains, primary and postfix expressions, control flow,
//!   objects, and table forms
//! - `ann`: annotations
//!
//! Every rule returns `Err` on the first token it cannot place. The error
//! unwinds to the nearest statement loop, which rewinds and replaces the
//! whole statement with an `Error` node.

mod ann;
mod binding;
mod data;
mod expr;
mod function;
mod module;
mod stmt;

use pyret_ir::{NodeKind, Token, TokenKind};
use tracing::trace;

use crate::event::CompletedMarker;
use crate::recovery::STMT_START;
use crate::{PResult, ParseErrorKind, Parser};

impl Parser<'_> {
    /// `Block := Stmt+`, if at least one statement starts here.
    pub(crate) fn parse_block_opt(&mut self) -> Option<CompletedMarker> {
        let m = self.start();
        let mut stmts = 0usize;
        while self.at_set(STMT_START) {
            self.parse_stmt_recovering();
            stmts += 1;
        }
        if stmts == 0 {
            m.abandon(self);
            return None;
        }
        Some(m.complete(self, NodeKind::Block))
    }

    /// Parse one statement. On failure, rewind to where it started and
    /// skip it into a single `Error` node.
    pub(crate) fn parse_stmt_recovering(&mut self) {
        let snapshot = self.snapshot();
        match self.parse_stmt() {
            Ok(stmt) => trace!(kind = %stmt.kind(), "statement"),
            Err(err) => {
                self.restore(snapshot);
                self.record(err);
                self.recover_into_error_node(STMT_START);
            }
        }
    }

    /// Consume an opening token, returning it for closer diagnostics.
    pub(crate) fn bump_opener(&mut self) -> Token {
        let token = self.current();
        self.bump();
        token
    }

    /// `(block: | :)`
    pub(crate) fn expect_block_colon(&mut self) -> PResult<()> {
        if self.eat(TokenKind::BlockColon) || self.eat(TokenKind::Colon) {
            Ok(())
        } else {
            Err(self.unexpected("`:` or `block:`"))
        }
    }

    /// `end`, closing the construct that `opener` started.
    pub(crate) fn expect_end(&mut self, opener: Token) -> PResult<()> {
        self.expect_closer(TokenKind::End, opener.kind, opener.span)
    }

    /// `)`, closing the parenthesis `opener`.
    pub(crate) fn expect_rparen(&mut self, opener: Token) -> PResult<()> {
        self.expect_closer(TokenKind::RParen, opener.kind, opener.span)
    }

    /// Any of the three opening parentheses.
    pub(crate) fn expect_any_paren(&mut self) -> PResult<Token> {
        if self.at_open_paren() {
            Ok(self.bump_opener())
        } else {
            Err(self.unexpected("`(`"))
        }
    }

    /// `CommaNames := NAME (, NAME)*`
    pub(crate) fn parse_comma_names(&mut self) -> PResult {
        let m = self.start();
        self.expect_name()?;
        while self.eat(TokenKind::Comma) {
            self.expect_name()?;
        }
        Ok(m.complete(self, NodeKind::CommaNames))
    }

    /// `TyParams := < CommaNames >`, if present.
    pub(crate) fn parse_ty_params_opt(&mut self) -> PResult<()> {
        if self.at(TokenKind::Lt) {
            let m = self.start();
            self.bump();
            self.parse_comma_names()?;
            self.expect(TokenKind::Gt)?;
            m.complete(self, NodeKind::TyParams);
        }
        Ok(())
    }

    /// A string literal: delimiter, content and escapes, delimiter.
    pub(crate) fn parse_string(&mut self) -> PResult {
        let open = self.current();
        if !open.kind.is_string_delimiter() {
            return Err(self.unexpected("a string"));
        }
        let m = self.start();
        self.bump();
        while self.at(TokenKind::StringContent) || self.at(TokenKind::EscapeSequence) {
            self.bump();
        }
        self.expect_closer(open.kind, open.kind, open.span)?;
        Ok(m.complete(self, NodeKind::String))
    }

    /// `IdExpr := NAME`
    pub(crate) fn parse_id_expr(&mut self) -> PResult {
        if self.at(TokenKind::Name) {
            Ok(self.bump_node(NodeKind::IdExpr))
        } else {
            Err(self.error_here(ParseErrorKind::ExpectedName {
                found: self.current_kind(),
            }))
        }
    }
}
