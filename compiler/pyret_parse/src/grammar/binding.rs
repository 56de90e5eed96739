//! Binding Parsing
//!
//! Name and tuple bindings, plus the grouped bindings of `let`, `letrec`
//! and `type-let`.

use pyret_ir::{NodeKind, TokenKind};
use pyret_stack::ensure_sufficient_stack;

use crate::{PResult, Parser};

impl Parser<'_> {
    /// `Binding := NameBinding | TupleBinding`
    pub(crate) fn parse_binding(&mut self) -> PResult {
        ensure_sufficient_stack(|| {
            let m = self.start();
            if self.at(TokenKind::LBrace) {
                self.parse_tuple_binding()?;
            } else {
                self.parse_name_binding()?;
            }
            Ok(m.complete(self, NodeKind::Binding))
        })
    }

    /// `NameBinding := shadow? NAME (:: Ann)?`
    pub(crate) fn parse_name_binding(&mut self) -> PResult {
        let m = self.start();
        self.eat(TokenKind::Shadow);
        self.expect_name()?;
        if self.eat(TokenKind::ColonColon) {
            self.parse_ann()?;
        }
        Ok(m.complete(self, NodeKind::NameBinding))
    }

    /// `TupleBinding := { (Binding ;)* Binding ;? } (as NameBinding)?`
    fn parse_tuple_binding(&mut self) -> PResult {
        let m = self.start();
        let brace = self.bump_opener();
        loop {
            self.parse_binding()?;
            if !self.eat(TokenKind::Semicolon) || self.at(TokenKind::RBrace) {
                break;
            }
        }
        self.expect_closer(TokenKind::RBrace, brace.kind, brace.span)?;
        if self.eat(TokenKind::As) {
            self.parse_name_binding()?;
        }
        Ok(m.complete(self, NodeKind::TupleBinding))
    }

    /// `ToplevelBinding := Binding`
    pub(crate) fn parse_toplevel_binding(&mut self) -> PResult {
        let m = self.start();
        self.parse_binding()?;
        Ok(m.complete(self, NodeKind::ToplevelBinding))
    }

    /// `Binding (, Binding)*`
    pub(crate) fn parse_comma_bindings(&mut self) -> PResult<()> {
        self.parse_binding()?;
        while self.eat(TokenKind::Comma) {
            self.parse_binding()?;
        }
        Ok(())
    }

    /// `MultiLetExpr := let LetBinding (, LetBinding)* (block: | :) Block? end`
    ///
    /// `LetBinding := LetExpr | VarExpr`
    pub(crate) fn parse_multi_let_expr(&mut self) -> PResult {
        self.parse_grouped_bindings(NodeKind::MultiLetExpr, |p| {
            let m = p.start();
            if p.at(TokenKind::Var) {
                p.parse_var_expr(NodeKind::VarExpr)?;
            } else {
                p.parse_let_expr()?;
            }
            Ok(m.complete(p, NodeKind::LetBinding))
        })
    }

    /// `LetrecExpr := letrec LetExpr (, LetExpr)* (block: | :) Block? end`
    pub(crate) fn parse_letrec_expr(&mut self) -> PResult {
        self.parse_grouped_bindings(NodeKind::LetrecExpr, Self::parse_let_expr)
    }

    /// `TypeLetExpr := type-let TypeLetBind (, TypeLetBind)* (block: | :) Block? end`
    pub(crate) fn parse_type_let_expr(&mut self) -> PResult {
        self.parse_grouped_bindings(NodeKind::TypeLetExpr, Self::parse_type_let_bind)
    }

    fn parse_grouped_bindings(
        &mut self,
        kind: NodeKind,
        mut bind: impl FnMut(&mut Self) -> PResult,
    ) -> PResult {
        let m = self.start();
        let opener = self.bump_opener();
        bind(self)?;
        while self.eat(TokenKind::Comma) {
            bind(self)?;
        }
        self.expect_block_colon()?;
        self.parse_block_opt();
        self.expect_end(opener)?;
        Ok(m.complete(self, kind))
    }

    /// ```text
    /// TypeLetBind := TypeBind | NewtypeBind
    /// TypeBind    := NAME TyParams? = Ann
    /// NewtypeBind := newtype NAME as NAME
    /// ```
    fn parse_type_let_bind(&mut self) -> PResult {
        let m = self.start();
        let inner = self.start();
        let kind = if self.eat(TokenKind::Newtype) {
            self.expect_name()?;
            self.expect(TokenKind::As)?;
            self.expect_name()?;
            NodeKind::NewtypeBind
        } else {
            self.expect_name()?;
            self.parse_ty_params_opt()?;
            self.expect(TokenKind::Equals)?;
            self.parse_ann()?;
            NodeKind::TypeBind
        };
        inner.complete(self, kind);
        Ok(m.complete(self, NodeKind::TypeLetBind))
    }
}
