//! Data Declaration Parsing

use pyret_ir::{NodeKind, TokenKind};

use crate::{ErrorContext, PResult, Parser};

impl Parser<'_> {
    /// ```text
    /// DataExpr := data NAME TyParams? : FirstDataVariant? DataVariant*
    ///             DataSharing? WhereClause? end
    /// ```
    pub(crate) fn parse_data_expr(&mut self) -> PResult {
        self.in_error_context(ErrorContext::DataDef, |p| {
            let m = p.start();
            let opener = p.bump_opener();
            p.expect_name()?;
            p.parse_ty_params_opt()?;
            p.expect(TokenKind::Colon)?;

            if p.at(TokenKind::Name) {
                let first = p.start();
                p.parse_variant_body()?;
                first.complete(p, NodeKind::FirstDataVariant);
            }
            while p.at(TokenKind::Pipe) {
                let variant = p.start();
                p.bump();
                p.parse_variant_body()?;
                variant.complete(p, NodeKind::DataVariant);
            }

            if p.at(TokenKind::SharingColon) {
                let sharing = p.start();
                p.bump();
                p.parse_fields()?;
                sharing.complete(p, NodeKind::DataSharing);
            }
            if p.at(TokenKind::WhereColon) {
                let clause = p.start();
                p.bump();
                p.parse_block_opt();
                clause.complete(p, NodeKind::WhereClause);
            }

            p.expect_end(opener)?;
            Ok(m.complete(p, NodeKind::DataExpr))
        })
    }

    /// `(VariantConstructor | NAME) DataWith?`
    ///
    /// ```text
    /// VariantConstructor := NAME VariantMembers
    /// DataWith           := with: Fields
    /// ```
    fn parse_variant_body(&mut self) -> PResult<()> {
        if self.at(TokenKind::Name) && self.nth_kind(1) == TokenKind::ParenNoSpace {
            let ctor = self.start();
            self.bump();
            self.parse_variant_members()?;
            ctor.complete(self, NodeKind::VariantConstructor);
        } else {
            self.expect_name()?;
        }

        if self.at(TokenKind::WithColon) {
            let with = self.start();
            self.bump();
            self.parse_fields()?;
            with.complete(self, NodeKind::DataWith);
        }
        Ok(())
    }

    /// `VariantMembers := ( (VariantMember (, VariantMember)*)? )`
    fn parse_variant_members(&mut self) -> PResult {
        let m = self.start();
        let paren = self.bump_opener();
        if !self.at(TokenKind::RParen) {
            self.parse_variant_member()?;
            while self.eat(TokenKind::Comma) {
                self.parse_variant_member()?;
            }
        }
        self.expect_rparen(paren)?;
        Ok(m.complete(self, NodeKind::VariantMembers))
    }

    /// `VariantMember := ref? Binding`
    fn parse_variant_member(&mut self) -> PResult {
        let m = self.start();
        self.eat(TokenKind::Ref);
        self.parse_binding()?;
        Ok(m.complete(self, NodeKind::VariantMember))
    }
}
