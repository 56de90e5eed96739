//! Control Flow Parsing
//!
//! `if`, `ask`, `cases`, `for`, and user blocks.

use pyret_ir::{NodeKind, TokenKind};

use crate::{ErrorContext, PResult, Parser};

impl Parser<'_> {
    /// ```text
    /// IfExpr := if BinopExpr (block: | :) Block? ElseIf* (else: Block?)? end
    /// ElseIf := else if BinopExpr : Block?
    /// ```
    pub(crate) fn parse_if_expr(&mut self) -> PResult {
        self.in_error_context(ErrorContext::IfExpression, |p| {
            let m = p.start();
            let opener = p.bump_opener();
            p.parse_binop_expr()?;
            p.expect_block_colon()?;
            p.parse_block_opt();

            while p.at(TokenKind::ElseIf) {
                let branch = p.start();
                p.bump();
                p.parse_binop_expr()?;
                p.expect(TokenKind::Colon)?;
                p.parse_block_opt();
                branch.complete(p, NodeKind::ElseIf);
            }
            if p.eat(TokenKind::ElseColon) {
                p.parse_block_opt();
            }

            p.expect_end(opener)?;
            Ok(m.complete(p, NodeKind::IfExpr))
        })
    }

    /// ```text
    /// IfPipeExpr   := ask (block: | :) IfPipeBranch* (| otherwise: Block?)? end
    /// IfPipeBranch := | BinopExpr then: Block?
    /// ```
    pub(crate) fn parse_if_pipe_expr(&mut self) -> PResult {
        self.in_error_context(ErrorContext::AskExpression, |p| {
            let m = p.start();
            let opener = p.bump_opener();
            p.expect_block_colon()?;

            while p.at(TokenKind::Pipe) {
                if p.nth_kind(1) == TokenKind::OtherwiseColon {
                    p.bump();
                    p.bump();
                    p.parse_block_opt();
                    break;
                }
                let branch = p.start();
                p.bump();
                p.parse_binop_expr()?;
                p.expect(TokenKind::ThenColon)?;
                p.parse_block_opt();
                branch.complete(p, NodeKind::IfPipeBranch);
            }

            p.expect_end(opener)?;
            Ok(m.complete(p, NodeKind::IfPipeExpr))
        })
    }

    /// ```text
    /// CasesExpr   := cases ( Ann ) BinopExpr (block: | :) CasesBranch*
    ///                (| else => Block?)? end
    /// CasesBranch := | NAME CasesArgs? => Block?
    /// ```
    pub(crate) fn parse_cases_expr(&mut self) -> PResult {
        self.in_error_context(ErrorContext::CasesExpression, |p| {
            let m = p.start();
            let opener = p.bump_opener();
            if !matches!(p.current_kind(), TokenKind::ParenNoSpace | TokenKind::ParenSpace) {
                return Err(p.unexpected("`(`"));
            }
            let paren = p.bump_opener();
            p.parse_ann()?;
            p.expect_rparen(paren)?;
            p.parse_binop_expr()?;
            p.expect_block_colon()?;

            while p.at(TokenKind::Pipe) {
                if p.nth_kind(1) == TokenKind::Else {
                    p.bump();
                    p.bump();
                    p.expect(TokenKind::ThickArrow)?;
                    p.parse_block_opt();
                    break;
                }
                p.parse_cases_branch()?;
            }

            p.expect_end(opener)?;
            Ok(m.complete(p, NodeKind::CasesExpr))
        })
    }

    fn parse_cases_branch(&mut self) -> PResult {
        let m = self.start();
        self.bump();
        self.expect_name()?;
        if self.at(TokenKind::ParenNoSpace) {
            self.parse_cases_args()?;
        }
        self.expect(TokenKind::ThickArrow)?;
        self.parse_block_opt();
        Ok(m.complete(self, NodeKind::CasesBranch))
    }

    /// `CasesArgs := ( (CasesBinding (, CasesBinding)*)? )`
    ///
    /// `CasesBinding := ref? Binding`
    fn parse_cases_args(&mut self) -> PResult {
        let m = self.start();
        let paren = self.bump_opener();
        if !self.at(TokenKind::RParen) {
            loop {
                let binding = self.start();
                self.eat(TokenKind::Ref);
                self.parse_binding()?;
                binding.complete(self, NodeKind::CasesBinding);
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect_rparen(paren)?;
        Ok(m.complete(self, NodeKind::CasesArgs))
    }

    /// ```text
    /// ForExpr := for Expr ( (ForBind (, ForBind)*)? ) ReturnAnn? (block: | :) Block? end
    /// ForBind := Binding from BinopExpr
    /// ```
    pub(crate) fn parse_for_expr(&mut self) -> PResult {
        self.in_error_context(ErrorContext::ForExpression, |p| {
            let m = p.start();
            let opener = p.bump_opener();
            p.parse_expr_no_call()?;

            if !p.at(TokenKind::ParenNoSpace) {
                return Err(p.unexpected("`(` directly after the iterator"));
            }
            let paren = p.bump_opener();
            if !p.at(TokenKind::RParen) {
                loop {
                    let bind = p.start();
                    p.parse_binding()?;
                    p.expect(TokenKind::From)?;
                    p.parse_binop_expr()?;
                    bind.complete(p, NodeKind::ForBind);
                    if !p.eat(TokenKind::Comma) {
                        break;
                    }
                }
            }
            p.expect_rparen(paren)?;

            p.parse_return_ann_opt()?;
            p.expect_block_colon()?;
            p.parse_block_opt();
            p.expect_end(opener)?;
            Ok(m.complete(p, NodeKind::ForExpr))
        })
    }

    /// `UserBlockExpr := block: Block? end`
    pub(crate) fn parse_user_block_expr(&mut self) -> PResult {
        let m = self.start();
        let opener = self.bump_opener();
        self.parse_block_opt();
        self.expect_end(opener)?;
        Ok(m.complete(self, NodeKind::UserBlockExpr))
    }
}
