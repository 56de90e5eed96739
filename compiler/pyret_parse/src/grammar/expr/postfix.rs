//! Postfix Expression Parsing
//!
//! Application, indexing, field access, tuple projection, object
//! extension and update, and instantiation.
//!
//! `e<A>` and `e < a > b` share a prefix. Both readings are tried on a
//! snapshot and scored with the grammar table's precedences; see
//! [`Parser::inst_wins`].

use pyret_ir::{NodeKind, TokenKind};
use tracing::trace;

use crate::event::CompletedMarker;
use crate::{ErrorContext, PResult, Parser};

/// Score of one reading of an ambiguous `<`. Dynamic precedence is
/// compared first, then static precedence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
struct Score {
    dynamic: i32,
    fixed: i32,
}

impl Parser<'_> {
    /// Apply postfix forms to `lhs` until none applies.
    pub(crate) fn parse_postfix(
        &mut self,
        mut lhs: CompletedMarker,
        stop_at_call: bool,
    ) -> PResult {
        loop {
            let applies = match self.current_kind() {
                TokenKind::ParenNoSpace | TokenKind::ParenSpace if stop_at_call => false,
                TokenKind::Lt => self.inst_wins(),
                _ => self.at_call_follower(),
            };
            if !applies {
                return Ok(lhs);
            }
            lhs = self.parse_postfix_form(lhs)?;
        }
    }

    /// Whether an application, index or field form starts at the cursor.
    fn at_call_follower(&mut self) -> bool {
        match self.current_kind() {
            TokenKind::ParenNoSpace | TokenKind::Dot | TokenKind::Bang => true,
            TokenKind::ParenSpace => self.spaced_call_follows(),
            TokenKind::LBracket => !self.current().flags.has_newline_before(),
            _ => false,
        }
    }

    /// Parse the postfix form the current token opens.
    fn parse_postfix_form(&mut self, lhs: CompletedMarker) -> PResult {
        match self.current_kind() {
            TokenKind::ParenNoSpace => self.parse_app_expr(lhs),
            TokenKind::ParenSpace => self.parse_spaced_app_expr(lhs),
            TokenKind::LBracket => self.parse_bracket_expr(lhs),
            TokenKind::Dot => self.parse_dot_postfix(lhs),
            TokenKind::Bang => self.parse_bang_postfix(lhs),
            TokenKind::Lt => self.parse_inst_expr(lhs),
            _ => Ok(lhs),
        }
    }

    /// `AppExpr := Expr AppArgs`, `AppArgs := ( CommaBinops? )`
    fn parse_app_expr(&mut self, callee: CompletedMarker) -> PResult {
        self.in_error_context(ErrorContext::FunctionCall, |p| {
            let m = callee.precede(p);
            let args = p.start();
            let paren = p.bump_opener();
            if !p.at(TokenKind::RParen) {
                let list = p.start();
                p.parse_binop_expr()?;
                while p.eat(TokenKind::Comma) {
                    p.parse_binop_expr()?;
                }
                list.complete(p, NodeKind::CommaBinops);
            }
            p.expect_rparen(paren)?;
            args.complete(p, NodeKind::AppArgs);
            Ok(m.complete(p, NodeKind::AppExpr))
        })
    }

    /// A space before `(` makes an application only for `f ()` and for two
    /// or more arguments; `f (x)` is `f` followed by a parenthesised
    /// expression.
    ///
    /// Decisions are memoized by paren position, so each paren is decided
    /// once however deeply spaced calls nest.
    fn spaced_call_follows(&mut self) -> bool {
        if self.nth_kind(1) == TokenKind::RParen {
            return true;
        }
        let pos = self.cursor.position();
        if let Some(&follows) = self.spaced_call_decisions.get(&pos) {
            return follows;
        }

        let follows = self.look_ahead(|p| {
            p.bump();
            p.parse_binop_expr().is_ok() && p.at(TokenKind::Comma)
        });
        trace!(pos, follows, "spaced_call");
        self.spaced_call_decisions.insert(pos, follows);
        follows
    }

    /// `AppExpr := Expr ( ) | Expr ( BinopExpr (, BinopExpr)+ )`, with a
    /// space-classified paren.
    fn parse_spaced_app_expr(&mut self, callee: CompletedMarker) -> PResult {
        let m = callee.precede(self);
        let paren = self.bump_opener();
        if !self.at(TokenKind::RParen) {
            self.parse_binop_expr()?;
            while self.eat(TokenKind::Comma) {
                self.parse_binop_expr()?;
            }
        }
        self.expect_rparen(paren)?;
        Ok(m.complete(self, NodeKind::AppExpr))
    }

    /// `BracketExpr := Expr [ BinopExpr ]`
    fn parse_bracket_expr(&mut self, lhs: CompletedMarker) -> PResult {
        let m = lhs.precede(self);
        let bracket = self.bump_opener();
        self.parse_binop_expr()?;
        self.expect_closer(TokenKind::RBracket, bracket.kind, bracket.span)?;
        Ok(m.complete(self, NodeKind::BracketExpr))
    }

    /// ```text
    /// TupleGet   := Expr . { NUMBER }
    /// ExtendExpr := Expr . { Fields }
    /// DotExpr    := Expr . NAME
    /// ```
    fn parse_dot_postfix(&mut self, lhs: CompletedMarker) -> PResult {
        let m = lhs.precede(self);
        self.bump();
        if !self.at(TokenKind::LBrace) {
            self.expect_name()?;
            return Ok(m.complete(self, NodeKind::DotExpr));
        }

        let brace = self.bump_opener();
        let kind = if self.at(TokenKind::Number) && self.nth_kind(1) == TokenKind::RBrace {
            self.bump();
            NodeKind::TupleGet
        } else {
            self.parse_fields()?;
            NodeKind::ExtendExpr
        };
        self.expect_closer(TokenKind::RBrace, brace.kind, brace.span)?;
        Ok(m.complete(self, kind))
    }

    /// ```text
    /// UpdateExpr  := Expr ! { Fields }
    /// GetBangExpr := Expr ! NAME
    /// ```
    fn parse_bang_postfix(&mut self, lhs: CompletedMarker) -> PResult {
        let m = lhs.precede(self);
        self.bump();
        if !self.at(TokenKind::LBrace) {
            self.expect_name()?;
            return Ok(m.complete(self, NodeKind::GetBangExpr));
        }

        let brace = self.bump_opener();
        self.parse_fields()?;
        self.expect_closer(TokenKind::RBrace, brace.kind, brace.span)?;
        Ok(m.complete(self, NodeKind::UpdateExpr))
    }

    /// `InstExpr := Expr < Ann (, Ann)* >`
    fn parse_inst_expr(&mut self, lhs: CompletedMarker) -> PResult {
        let m = lhs.precede(self);
        self.parse_inst_args()?;
        Ok(m.complete(self, NodeKind::InstExpr))
    }

    fn parse_inst_args(&mut self) -> PResult<()> {
        self.bump();
        self.parse_ann()?;
        while self.eat(TokenKind::Comma) {
            self.parse_ann()?;
        }
        self.expect(TokenKind::Gt)
    }

    /// Decide whether the `<` at the cursor starts an instantiation.
    ///
    /// The instantiation reading must close with `>` without any error. It
    /// earns `InstExpr`'s dynamic precedence when a call, index or field
    /// form follows the `>` and that form parses cleanly, and its static
    /// precedence otherwise. The comparison reading `< Expr > Expr` earns
    /// the binary band when it parses cleanly, and nothing when it does
    /// not. Ties go to the comparison.
    fn inst_wins(&mut self) -> bool {
        let table = self.table;
        if !table.is_declared_conflict(NodeKind::InstExpr, NodeKind::BinopExpr) {
            return false;
        }
        let pos = self.cursor.position();
        if let Some(&wins) = self.inst_decisions.get(&pos) {
            return wins;
        }

        let inst = self.look_ahead(|p| {
            let errors = p.errors.len();
            let m = p.start();
            if p.parse_inst_args().is_err() || p.errors.len() != errors {
                return None;
            }
            let inst = m.complete(p, NodeKind::InstExpr);
            let followed = p.at_call_follower()
                && p.parse_postfix_form(inst).is_ok()
                && p.errors.len() == errors;
            Some(Score {
                dynamic: if followed {
                    table.dynamic_precedence(NodeKind::InstExpr)
                } else {
                    0
                },
                fixed: table.static_precedence(NodeKind::InstExpr),
            })
        });

        let binary = table.binop_band(TokenKind::Lt).unwrap_or_default();
        let wins = match inst {
            None => false,
            // No comparison can score above the binary band.
            Some(inst) if inst.dynamic > binary => true,
            Some(inst) => {
                let comparison_parses = self.parses_cleanly(|p| {
                    p.bump();
                    p.parse_expr()?;
                    p.expect(TokenKind::Gt)?;
                    p.parse_expr()
                });
                let comparison = if comparison_parses {
                    Score {
                        dynamic: binary,
                        fixed: table.static_precedence(NodeKind::BinopExpr),
                    }
                } else {
                    Score::default()
                };
                inst > comparison
            }
        };

        trace!(pos, ?inst, wins, "inst_vs_binop");
        self.inst_decisions.insert(pos, wins);
        wins
    }
}
