//! Annotation Parsing
//!
//! ```text
//! Ann := NameAnn | DotAnn | AppAnn | RecordAnn | TupleAnn | ArrowAnn | PredAnn
//! ```
//!
//! Annotations are wrapped in an `Ann` node, so a predicate annotation is
//! `Ann(PredAnn(Ann(...) % ( IdExpr )))`.

use pyret_ir::{NodeKind, TokenKind};
use pyret_stack::ensure_sufficient_stack;

use crate::event::{CompletedMarker, Marker};
use crate::{ErrorContext, PResult, ParseErrorKind, Parser};

impl Parser<'_> {
    /// Parse an annotation.
    pub(crate) fn parse_ann(&mut self) -> PResult {
        ensure_sufficient_stack(|| {
            self.in_error_context(ErrorContext::TypeAnnotation, |p| {
                let m = p.start();
                p.parse_ann_atom()?;
                let mut ann = m.complete(p, NodeKind::Ann);

                while p.at(TokenKind::Percent) {
                    let pred = ann.precede(p);
                    p.bump();
                    let paren = p.expect_any_paren()?;
                    p.parse_id_expr()?;
                    p.expect_rparen(paren)?;
                    ann = pred
                        .complete(p, NodeKind::PredAnn)
                        .precede(p)
                        .complete(p, NodeKind::Ann);
                }
                Ok(ann)
            })
        })
    }

    fn parse_ann_atom(&mut self) -> PResult {
        match self.current_kind() {
            TokenKind::Name => {
                let dotted =
                    self.nth_kind(1) == TokenKind::Dot && self.nth_kind(2) == TokenKind::Name;
                let base = if dotted {
                    let m = self.start();
                    self.bump();
                    self.bump();
                    self.bump();
                    m.complete(self, NodeKind::DotAnn)
                } else {
                    self.bump_node(NodeKind::NameAnn)
                };
                if self.at(TokenKind::Lt) {
                    self.parse_app_ann(base)
                } else {
                    Ok(base)
                }
            }
            TokenKind::LBrace => {
                let record = self.nth_kind(1) == TokenKind::RBrace
                    || (self.nth_kind(1) == TokenKind::Name
                        && self.nth_kind(2) == TokenKind::ColonColon);
                if record {
                    self.parse_record_ann()
                } else {
                    self.parse_tuple_ann()
                }
            }
            TokenKind::ParenNoSpace | TokenKind::ParenSpace | TokenKind::ParenAfterBrace => {
                self.parse_arrow_ann()
            }
            found => Err(self.error_here(ParseErrorKind::ExpectedAnnotation { found })),
        }
    }

    /// `AppAnn := (NameAnn | DotAnn) < CommaAnns >`
    fn parse_app_ann(&mut self, base: CompletedMarker) -> PResult {
        let m = base.precede(self);
        self.bump();
        self.parse_comma_anns()?;
        self.expect(TokenKind::Gt)?;
        Ok(m.complete(self, NodeKind::AppAnn))
    }

    /// `RecordAnn := { TrailingCommaAnnField? }`
    pub(crate) fn parse_record_ann(&mut self) -> PResult {
        if !self.at(TokenKind::LBrace) {
            return Err(self.error_here(ParseErrorKind::ExpectedAnnotation {
                found: self.current_kind(),
            }));
        }
        let m = self.start();
        let brace = self.bump_opener();
        if !self.at(TokenKind::RBrace) {
            let trailing = self.start();
            self.parse_comma_ann_field()?;
            self.eat(TokenKind::Comma);
            trailing.complete(self, NodeKind::TrailingCommaAnnField);
        }
        self.expect_closer(TokenKind::RBrace, brace.kind, brace.span)?;
        Ok(m.complete(self, NodeKind::RecordAnn))
    }

    /// `CommaAnnField := AnnField (, AnnField)*`, leaving a trailing comma
    /// to the caller.
    fn parse_comma_ann_field(&mut self) -> PResult {
        let m = self.start();
        self.parse_ann_field()?;
        while self.at(TokenKind::Comma) && self.nth_kind(1) == TokenKind::Name {
            self.bump();
            self.parse_ann_field()?;
        }
        Ok(m.complete(self, NodeKind::CommaAnnField))
    }

    /// `AnnField := NAME :: Ann`
    fn parse_ann_field(&mut self) -> PResult {
        let m = self.start();
        self.expect_name()?;
        self.expect(TokenKind::ColonColon)?;
        self.parse_ann()?;
        Ok(m.complete(self, NodeKind::AnnField))
    }

    /// `TupleAnn := { Ann (; Ann)* ;? }`
    fn parse_tuple_ann(&mut self) -> PResult {
        let m = self.start();
        let brace = self.bump_opener();
        loop {
            self.parse_ann()?;
            if !self.eat(TokenKind::Semicolon) || self.at(TokenKind::RBrace) {
                break;
            }
        }
        self.expect_closer(TokenKind::RBrace, brace.kind, brace.span)?;
        Ok(m.complete(self, NodeKind::TupleAnn))
    }

    /// `ArrowAnn := ( ArrowAnnArgs? -> Ann )`
    fn parse_arrow_ann(&mut self) -> PResult {
        let m = self.start();
        let paren = self.bump_opener();
        if !self.at(TokenKind::ThinArrow) {
            self.parse_arrow_ann_args()?;
        }
        self.expect(TokenKind::ThinArrow)?;
        self.parse_ann()?;
        self.expect_rparen(paren)?;
        Ok(m.complete(self, NodeKind::ArrowAnn))
    }

    /// `ArrowAnnArgs := CommaAnns | ( CommaAnnField )`
    fn parse_arrow_ann_args(&mut self) -> PResult {
        let m = self.start();
        if self.at_named_arrow_args() {
            let paren = self.bump_opener();
            self.parse_comma_ann_field()?;
            self.expect_rparen(paren)?;
        } else {
            self.parse_comma_anns()?;
        }
        Ok(m.complete(self, NodeKind::ArrowAnnArgs))
    }

    /// `( NAME ::` can only open named arrow arguments: no annotation
    /// starts with `NAME ::`.
    fn at_named_arrow_args(&self) -> bool {
        self.at_open_paren()
            && self.nth_kind(1) == TokenKind::Name
            && self.nth_kind(2) == TokenKind::ColonColon
    }

    /// `CommaAnns := Ann (, Ann)*`
    fn parse_comma_anns(&mut self) -> PResult {
        let m = self.start();
        self.parse_ann()?;
        while self.eat(TokenKind::Comma) {
            self.parse_ann()?;
        }
        Ok(m.complete(self, NodeKind::CommaAnns))
    }

    /// The annotation of a contract: an `Ann`, or an arrow without the
    /// enclosing parentheses.
    ///
    /// ```text
    /// NoparenArrowAnn := ArrowAnnArgs? -> Ann
    /// ```
    pub(crate) fn parse_contract_ann(&mut self) -> PResult {
        if self.at(TokenKind::ThinArrow) {
            let m = self.start();
            self.bump();
            self.parse_ann()?;
            return Ok(m.complete(self, NodeKind::NoparenArrowAnn));
        }
        if self.at_named_arrow_args() {
            let m = self.start();
            self.parse_arrow_ann_args()?;
            return self.finish_noparen_arrow(m);
        }

        let first = self.parse_ann()?;
        if !self.at(TokenKind::Comma) && !self.at(TokenKind::ThinArrow) {
            return Ok(first);
        }

        let anns = first.precede(self);
        while self.eat(TokenKind::Comma) {
            self.parse_ann()?;
        }
        let args = anns
            .complete(self, NodeKind::CommaAnns)
            .precede(self)
            .complete(self, NodeKind::ArrowAnnArgs);
        let m = args.precede(self);
        self.finish_noparen_arrow(m)
    }

    fn finish_noparen_arrow(&mut self, m: Marker) -> PResult {
        self.expect(TokenKind::ThinArrow)?;
        self.parse_ann()?;
        Ok(m.complete(self, NodeKind::NoparenArrowAnn))
    }
}
