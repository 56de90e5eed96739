//! Brace Expression Parsing
//!
//! `{` opens an object, a tuple, or a brace lambda:
//!
//! ```text
//! ObjExpr     := { ObjFields } | { }
//! TupleExpr   := { TupleFields }
//! LambdaExpr  := { FunHeader (block: | :) FunBody }
//! ```
//!
//! Object fields, and the plain `Fields` of extensions, updates, `data`
//! members and reactors, live here too.

use pyret_ir::{NodeKind, TokenKind};

use crate::recovery::TokenSet;
use crate::{ErrorContext, PResult, Parser};

/// Colon keywords that double as field keys: `{ source: s }` lexes
/// `source:` as one token.
const COLON_KEYS: TokenSet = TokenSet::new()
    .with(TokenKind::BlockColon)
    .with(TokenKind::ProvideColon)
    .with(TokenKind::DocColon)
    .with(TokenKind::WhereColon)
    .with(TokenKind::CheckColon)
    .with(TokenKind::ExamplesColon)
    .with(TokenKind::WithColon)
    .with(TokenKind::SharingColon)
    .with(TokenKind::TableColon)
    .with(TokenKind::RowColon)
    .with(TokenKind::ElseColon)
    .with(TokenKind::ThenColon)
    .with(TokenKind::OtherwiseColon)
    .with(TokenKind::SourceColon);

impl Parser<'_> {
    pub(crate) fn parse_brace_expr(&mut self) -> PResult {
        if matches!(self.nth_kind(1), TokenKind::ParenAfterBrace | TokenKind::Lt)
            && self.look_ahead(|p| {
                p.bump();
                p.parse_fun_header().is_ok()
                    && matches!(p.current_kind(), TokenKind::Colon | TokenKind::BlockColon)
            })
        {
            return self.parse_brace_lambda();
        }

        let after = self.nth_kind(1);
        let is_object = after == TokenKind::RBrace
            || COLON_KEYS.contains(after)
            || matches!(after, TokenKind::Ref | TokenKind::Method)
            || (after == TokenKind::Name && self.nth_kind(2) == TokenKind::Colon);
        if is_object {
            self.parse_obj_expr()
        } else {
            self.parse_tuple_expr()
        }
    }

    fn parse_brace_lambda(&mut self) -> PResult {
        self.in_error_context(ErrorContext::Lambda, |p| {
            let m = p.start();
            let brace = p.bump_opener();
            p.parse_fun_header()?;
            p.expect_block_colon()?;
            p.parse_fun_body(brace, TokenKind::RBrace)?;
            Ok(m.complete(p, NodeKind::LambdaExpr))
        })
    }

    fn parse_obj_expr(&mut self) -> PResult {
        self.in_error_context(ErrorContext::ObjectLiteral, |p| {
            let m = p.start();
            let brace = p.bump_opener();
            if !p.at(TokenKind::RBrace) {
                p.parse_obj_fields()?;
            }
            p.expect_closer(TokenKind::RBrace, brace.kind, brace.span)?;
            Ok(m.complete(p, NodeKind::ObjExpr))
        })
    }

    /// `TupleFields := BinopExpr (; BinopExpr)* ;?`
    fn parse_tuple_expr(&mut self) -> PResult {
        let m = self.start();
        let brace = self.bump_opener();
        let fields = self.start();
        loop {
            self.parse_binop_expr()?;
            if !self.eat(TokenKind::Semicolon) || self.at(TokenKind::RBrace) {
                break;
            }
        }
        fields.complete(self, NodeKind::TupleFields);
        self.expect_closer(TokenKind::RBrace, brace.kind, brace.span)?;
        Ok(m.complete(self, NodeKind::TupleExpr))
    }

    /// `ObjFields := ObjField (, ObjField)* ,?`
    pub(crate) fn parse_obj_fields(&mut self) -> PResult {
        let m = self.start();
        self.parse_field_list(Self::parse_obj_field)?;
        Ok(m.complete(self, NodeKind::ObjFields))
    }

    /// `Fields := Field (, Field)* ,?`
    pub(crate) fn parse_fields(&mut self) -> PResult {
        let m = self.start();
        self.parse_field_list(Self::parse_field)?;
        Ok(m.complete(self, NodeKind::Fields))
    }

    fn parse_field_list(&mut self, field: fn(&mut Self) -> PResult) -> PResult<()> {
        field(self)?;
        while self.eat(TokenKind::Comma) {
            if !self.at_field_start() {
                break;
            }
            field(self)?;
        }
        Ok(())
    }

    fn at_field_start(&self) -> bool {
        matches!(
            self.current_kind(),
            TokenKind::Name | TokenKind::Ref | TokenKind::Method
        ) || self.at_set(COLON_KEYS)
    }

    /// ```text
    /// ObjField := Key : BinopExpr
    ///           | ref Key (:: Ann)? : BinopExpr
    ///           | method Key FunHeader (block: | :) FunBody end
    /// ```
    fn parse_obj_field(&mut self) -> PResult {
        let m = self.start();
        if self.at(TokenKind::Method) {
            self.parse_method_field_rest()?;
        } else {
            let is_ref = self.eat(TokenKind::Ref);
            self.parse_key_and_colon(is_ref)?;
            self.parse_binop_expr()?;
        }
        Ok(m.complete(self, NodeKind::ObjField))
    }

    /// ```text
    /// Field := Key : BinopExpr
    ///        | method Key FunHeader (block: | :) FunBody end
    /// ```
    fn parse_field(&mut self) -> PResult {
        let m = self.start();
        if self.at(TokenKind::Method) {
            self.parse_method_field_rest()?;
        } else {
            self.parse_key_and_colon(false)?;
            self.parse_binop_expr()?;
        }
        Ok(m.complete(self, NodeKind::Field))
    }

    fn parse_method_field_rest(&mut self) -> PResult<()> {
        let opener = self.bump_opener();
        let key = self.start();
        self.expect_name()?;
        key.complete(self, NodeKind::Key);
        self.parse_fun_header()?;
        self.expect_block_colon()?;
        self.parse_fun_body(opener, TokenKind::End)
    }

    /// `Key (:: Ann)? :`. A colon keyword is a key with its colon attached,
    /// and takes no annotation.
    pub(crate) fn parse_key_and_colon(&mut self, allow_ann: bool) -> PResult<()> {
        if self.at_set(COLON_KEYS) {
            self.bump_node(NodeKind::Key);
            return Ok(());
        }
        if !self.at(TokenKind::Name) {
            return Err(self.unexpected("a field name"));
        }
        self.bump_node(NodeKind::Key);
        if allow_ann && self.eat(TokenKind::ColonColon) {
            self.parse_ann()?;
        }
        self.expect(TokenKind::Colon)
    }
}
