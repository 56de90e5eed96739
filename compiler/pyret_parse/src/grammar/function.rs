//! Function Parsing
//!
//! `fun` declarations, `lam` and `method` expressions, and the header and
//! body shared with brace lambdas and object methods.

use pyret_ir::{NodeKind, Token, TokenKind};

use crate::{ErrorContext, PResult, Parser};

impl Parser<'_> {
    /// `FunExpr := fun NAME FunHeader (block: | :) FunBody end`
    pub(crate) fn parse_fun_expr(&mut self) -> PResult {
        self.in_error_context(ErrorContext::FunctionDef, |p| {
            let m = p.start();
            let opener = p.bump_opener();
            p.expect_name()?;
            p.parse_fun_header()?;
            p.expect_block_colon()?;
            p.parse_fun_body(opener, TokenKind::End)?;
            Ok(m.complete(p, NodeKind::FunExpr))
        })
    }

    /// `LambdaExpr := lam FunHeader (block: | :) FunBody end`
    pub(crate) fn parse_lambda_expr(&mut self) -> PResult {
        self.in_error_context(ErrorContext::Lambda, |p| {
            let m = p.start();
            let opener = p.bump_opener();
            p.parse_fun_header()?;
            p.expect_block_colon()?;
            p.parse_fun_body(opener, TokenKind::End)?;
            Ok(m.complete(p, NodeKind::LambdaExpr))
        })
    }

    /// `MethodExpr := method FunHeader (block: | :) FunBody end`
    pub(crate) fn parse_method_expr(&mut self) -> PResult {
        let m = self.start();
        let opener = self.bump_opener();
        self.parse_fun_header()?;
        self.expect_block_colon()?;
        self.parse_fun_body(opener, TokenKind::End)?;
        Ok(m.complete(self, NodeKind::MethodExpr))
    }

    /// `FunHeader := TyParams? Args ReturnAnn?`
    pub(crate) fn parse_fun_header(&mut self) -> PResult {
        self.in_error_context(ErrorContext::FunctionHeader, |p| {
            let m = p.start();
            p.parse_ty_params_opt()?;
            p.parse_args()?;
            p.parse_return_ann_opt()?;
            Ok(m.complete(p, NodeKind::FunHeader))
        })
    }

    /// `Args := ( (Binding (, Binding)*)? )`, where `(` touches the
    /// preceding token or follows `{`.
    fn parse_args(&mut self) -> PResult {
        if !matches!(
            self.current_kind(),
            TokenKind::ParenNoSpace | TokenKind::ParenAfterBrace
        ) {
            return Err(self.unexpected("`(` directly after the name"));
        }
        let m = self.start();
        let paren = self.bump_opener();
        if !self.at(TokenKind::RParen) {
            self.parse_comma_bindings()?;
        }
        self.expect_rparen(paren)?;
        Ok(m.complete(self, NodeKind::Args))
    }

    /// `ReturnAnn := -> Ann`, if present.
    pub(crate) fn parse_return_ann_opt(&mut self) -> PResult<()> {
        if self.at(TokenKind::ThinArrow) {
            let m = self.start();
            self.bump();
            self.parse_ann()?;
            m.complete(self, NodeKind::ReturnAnn);
        }
        Ok(())
    }

    /// `FunBody := DocString? Block? WhereClause?`, then `closer`.
    ///
    /// ```text
    /// DocString   := doc: STRING
    /// WhereClause := where: Block?
    /// ```
    pub(crate) fn parse_fun_body(&mut self, opener: Token, closer: TokenKind) -> PResult<()> {
        if self.at(TokenKind::DocColon) {
            let m = self.start();
            self.bump();
            self.parse_string()?;
            m.complete(self, NodeKind::DocString);
        }
        self.parse_block_opt();
        if self.at(TokenKind::WhereColon) {
            let m = self.start();
            self.bump();
            self.parse_block_opt();
            m.complete(self, NodeKind::WhereClause);
        }
        self.expect_closer(closer, opener.kind, opener.span)
    }
}
