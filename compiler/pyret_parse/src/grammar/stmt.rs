//! Statement Parsing
//!
//! Dispatch on the first one or two tokens. The only statements that need
//! speculation are those starting with `NAME ::` (a typed binding or a
//! contract) and `{` (a tuple binding or an expression).

use pyret_ir::{NodeKind, TokenKind};

use crate::recovery::CHECK_OPS;
use crate::{ErrorContext, PResult, Parser};

impl Parser<'_> {
    /// Parse a single statement.
    pub(crate) fn parse_stmt(&mut self) -> PResult {
        self.in_error_context(ErrorContext::Statement, |p| match p.current_kind() {
            TokenKind::Type => p.parse_type_expr(),
            TokenKind::Newtype => p.parse_newtype_expr(),
            TokenKind::Spy => p.parse_spy_stmt(),
            TokenKind::Fun => p.parse_fun_expr(),
            TokenKind::Data => p.parse_data_expr(),
            TokenKind::When => p.parse_when_expr(),
            TokenKind::Var => p.parse_var_expr(NodeKind::VarExpr),
            TokenKind::Rec => p.parse_var_expr(NodeKind::RecExpr),
            TokenKind::Check
            | TokenKind::Examples
            | TokenKind::CheckColon
            | TokenKind::ExamplesColon => p.parse_check_expr(),
            TokenKind::Shadow => p.parse_let_expr(),
            TokenKind::Name => match p.nth_kind(1) {
                TokenKind::ColonEquals => p.parse_assign_expr(),
                TokenKind::Equals => p.parse_let_expr(),
                TokenKind::ColonColon if p.binding_then_equals() => p.parse_let_expr(),
                TokenKind::ColonColon => p.parse_contract_stmt(),
                _ => p.parse_check_test_or_expr(),
            },
            TokenKind::LBrace if p.binding_then_equals() => p.parse_let_expr(),
            _ => p.parse_check_test_or_expr(),
        })
    }

    /// Whether a binding followed by `=` starts here.
    fn binding_then_equals(&mut self) -> bool {
        self.look_ahead(|p| p.parse_binding().is_ok() && p.at(TokenKind::Equals))
    }

    /// `LetExpr := ToplevelBinding = BinopExpr`
    pub(crate) fn parse_let_expr(&mut self) -> PResult {
        self.in_error_context(ErrorContext::LetBinding, |p| {
            let m = p.start();
            p.parse_toplevel_binding()?;
            p.expect(TokenKind::Equals)?;
            p.parse_binop_expr()?;
            Ok(m.complete(p, NodeKind::LetExpr))
        })
    }

    /// `VarExpr := var ToplevelBinding = BinopExpr`, and the same shape
    /// for `rec`.
    pub(crate) fn parse_var_expr(&mut self, kind: NodeKind) -> PResult {
        let m = self.start();
        self.bump();
        self.parse_toplevel_binding()?;
        self.expect(TokenKind::Equals)?;
        self.parse_binop_expr()?;
        Ok(m.complete(self, kind))
    }

    /// `AssignExpr := NAME := BinopExpr`
    fn parse_assign_expr(&mut self) -> PResult {
        let m = self.start();
        self.bump();
        self.expect(TokenKind::ColonEquals)?;
        self.parse_binop_expr()?;
        Ok(m.complete(self, NodeKind::AssignExpr))
    }

    /// `TypeExpr := type NAME TyParams? = Ann`
    fn parse_type_expr(&mut self) -> PResult {
        self.in_error_context(ErrorContext::TypeDef, |p| {
            let m = p.start();
            p.bump();
            p.expect_name()?;
            p.parse_ty_params_opt()?;
            p.expect(TokenKind::Equals)?;
            p.parse_ann()?;
            Ok(m.complete(p, NodeKind::TypeExpr))
        })
    }

    /// `NewtypeExpr := newtype NAME as NAME`
    fn parse_newtype_expr(&mut self) -> PResult {
        let m = self.start();
        self.bump();
        self.expect_name()?;
        self.expect(TokenKind::As)?;
        self.expect_name()?;
        Ok(m.complete(self, NodeKind::NewtypeExpr))
    }

    /// ```text
    /// ContractStmt := NAME :: TyParams? (Ann | NoparenArrowAnn)
    /// ```
    fn parse_contract_stmt(&mut self) -> PResult {
        self.in_error_context(ErrorContext::Contract, |p| {
            let m = p.start();
            p.bump();
            p.expect(TokenKind::ColonColon)?;
            p.parse_ty_params_opt()?;
            p.parse_contract_ann()?;
            Ok(m.complete(p, NodeKind::ContractStmt))
        })
    }

    /// `SpyStmt := spy BinopExpr? : SpyContents? end`
    fn parse_spy_stmt(&mut self) -> PResult {
        let m = self.start();
        let opener = self.bump_opener();
        if !self.at(TokenKind::Colon) {
            self.parse_binop_expr()?;
        }
        self.expect(TokenKind::Colon)?;

        if self.at(TokenKind::Name) {
            let contents = self.start();
            self.parse_spy_field()?;
            while self.eat(TokenKind::Comma) {
                self.parse_spy_field()?;
            }
            contents.complete(self, NodeKind::SpyContents);
        }

        self.expect_end(opener)?;
        Ok(m.complete(self, NodeKind::SpyStmt))
    }

    /// `SpyField := IdExpr | NAME : BinopExpr`
    fn parse_spy_field(&mut self) -> PResult {
        let m = self.start();
        if self.nth_kind(1) == TokenKind::Colon {
            self.expect_name()?;
            self.bump();
            self.parse_binop_expr()?;
        } else {
            self.parse_id_expr()?;
        }
        Ok(m.complete(self, NodeKind::SpyField))
    }

    /// `WhenExpr := when BinopExpr (block: | :) Block? end`
    fn parse_when_expr(&mut self) -> PResult {
        let m = self.start();
        let opener = self.bump_opener();
        self.parse_binop_expr()?;
        self.expect_block_colon()?;
        self.parse_block_opt();
        self.expect_end(opener)?;
        Ok(m.complete(self, NodeKind::WhenExpr))
    }

    /// ```text
    /// CheckExpr := (check | examples) STRING : Block? end
    ///            | (check: | examples:) Block? end
    /// ```
    fn parse_check_expr(&mut self) -> PResult {
        self.in_error_context(ErrorContext::CheckBlock, |p| {
            let m = p.start();
            let opener = p.bump_opener();
            if matches!(opener.kind, TokenKind::Check | TokenKind::Examples) {
                p.parse_string()?;
                p.expect(TokenKind::Colon)?;
            }
            p.parse_block_opt();
            p.expect_end(opener)?;
            Ok(m.complete(p, NodeKind::CheckExpr))
        })
    }

    /// ```text
    /// CheckTest := BinopExpr CheckOp (% ( BinopExpr ))? BinopExpr (because BinopExpr)?
    ///            | BinopExpr CheckOpPostfix (because BinopExpr)?
    /// ```
    ///
    /// A bare expression statement when no check operator follows.
    fn parse_check_test_or_expr(&mut self) -> PResult {
        let lhs = self.parse_binop_expr()?;

        if self.at_set(CHECK_OPS) {
            let m = lhs.precede(self);
            self.bump_node(NodeKind::CheckOp);
            if self.eat(TokenKind::Percent) {
                let paren = self.expect_any_paren()?;
                self.parse_binop_expr()?;
                self.expect_rparen(paren)?;
            }
            self.parse_binop_expr()?;
            self.parse_because_opt()?;
            Ok(m.complete(self, NodeKind::CheckTest))
        } else if self.at(TokenKind::DoesNotRaise) {
            let m = lhs.precede(self);
            self.bump_node(NodeKind::CheckOpPostfix);
            self.parse_because_opt()?;
            Ok(m.complete(self, NodeKind::CheckTest))
        } else {
            Ok(lhs)
        }
    }

    fn parse_because_opt(&mut self) -> PResult<()> {
        if self.eat(TokenKind::Because) {
            self.parse_binop_expr()?;
        }
        Ok(())
    }
}
