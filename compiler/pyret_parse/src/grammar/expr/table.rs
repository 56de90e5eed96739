//! Table Expression Parsing
//!
//! Table literals, the `select` / `sieve` / `order` / `extract` /
//! `transform` / `extend` operations, `load-table`, and `reactor`.

use pyret_ir::{NodeKind, Token, TokenKind};
use pyret_lexer::SoftKeyword;

use crate::event::Marker;
use crate::recovery::EXPR_START;
use crate::{ErrorContext, PResult, Parser};

impl Parser<'_> {
    /// ```text
    /// TableExpr := table: TableHeaders? TableRows? end
    /// TableRows := TableRow+
    /// TableRow  := row: TableItems?
    /// ```
    pub(crate) fn parse_table_expr(&mut self) -> PResult {
        self.in_error_context(ErrorContext::TableExpression, |p| {
            let m = p.start();
            let opener = p.bump_opener();
            if p.at(TokenKind::Name) {
                p.parse_table_headers()?;
            }
            if p.at(TokenKind::RowColon) {
                let rows = p.start();
                while p.at(TokenKind::RowColon) {
                    p.parse_table_row()?;
                }
                rows.complete(p, NodeKind::TableRows);
            }
            p.expect_end(opener)?;
            Ok(m.complete(p, NodeKind::TableExpr))
        })
    }

    /// `TableHeaders := ListTableHeader* TableHeader`, where
    /// `ListTableHeader := TableHeader ,`.
    fn parse_table_headers(&mut self) -> PResult {
        let m = self.start();
        loop {
            let header = self.parse_table_header()?;
            if !self.at(TokenKind::Comma) {
                break;
            }
            let list = header.precede(self);
            self.bump();
            list.complete(self, NodeKind::ListTableHeader);
        }
        Ok(m.complete(self, NodeKind::TableHeaders))
    }

    /// `TableHeader := NAME (:: Ann)?`
    fn parse_table_header(&mut self) -> PResult {
        let m = self.start();
        self.expect_name()?;
        if self.eat(TokenKind::ColonColon) {
            self.parse_ann()?;
        }
        Ok(m.complete(self, NodeKind::TableHeader))
    }

    fn parse_table_row(&mut self) -> PResult {
        let m = self.start();
        self.bump();
        if self.at_set(EXPR_START) {
            let items = self.start();
            loop {
                let item = self.parse_binop_expr()?;
                if !self.at(TokenKind::Comma) {
                    break;
                }
                let list = item.precede(self);
                self.bump();
                list.complete(self, NodeKind::ListTableItem);
            }
            items.complete(self, NodeKind::TableItems);
        }
        Ok(m.complete(self, NodeKind::TableRow))
    }

    /// `TableSelect := select NAME (, NAME)* from Expr end`
    pub(crate) fn parse_table_select(&mut self) -> PResult {
        let m = self.start();
        let opener = self.bump_opener();
        self.expect_name()?;
        while self.eat(TokenKind::Comma) {
            self.expect_name()?;
        }
        self.expect(TokenKind::From)?;
        self.parse_expr()?;
        self.expect_end(opener)?;
        Ok(m.complete(self, NodeKind::TableSelect))
    }

    /// `TableExtract := extract NAME from Expr end`
    pub(crate) fn parse_table_extract(&mut self) -> PResult {
        let m = self.start();
        let opener = self.bump_opener();
        self.expect_name()?;
        self.expect(TokenKind::From)?;
        self.parse_expr()?;
        self.expect_end(opener)?;
        Ok(m.complete(self, NodeKind::TableExtract))
    }

    /// `TableFilter := sieve Expr Using? : BinopExpr end`
    pub(crate) fn parse_table_filter(&mut self) -> PResult {
        let (m, opener) = self.parse_table_op_head()?;
        self.parse_binop_expr()?;
        self.expect_end(opener)?;
        Ok(m.complete(self, NodeKind::TableFilter))
    }

    /// `TableUpdate := transform Expr Using? : ObjFields end`
    pub(crate) fn parse_table_update(&mut self) -> PResult {
        let (m, opener) = self.parse_table_op_head()?;
        self.parse_obj_fields()?;
        self.expect_end(opener)?;
        Ok(m.complete(self, NodeKind::TableUpdate))
    }

    /// `TableExtend := extend Expr Using? : TableExtendFields end`
    pub(crate) fn parse_table_extend(&mut self) -> PResult {
        let (m, opener) = self.parse_table_op_head()?;
        self.parse_table_extend_fields()?;
        self.expect_end(opener)?;
        Ok(m.complete(self, NodeKind::TableExtend))
    }

    /// `keyword Expr (using Binding (, Binding)*)? :`
    fn parse_table_op_head(&mut self) -> PResult<(Marker, Token)> {
        let m = self.start();
        let opener = self.bump_opener();
        self.parse_expr()?;
        if self.at_soft(SoftKeyword::Using) {
            self.bump();
            self.parse_comma_bindings()?;
        }
        self.expect(TokenKind::Colon)?;
        Ok((m, opener))
    }

    /// `TableOrder := order Expr : ColumnOrder (, ColumnOrder)* end`
    ///
    /// `ColumnOrder := NAME (ascending | descending)`
    pub(crate) fn parse_table_order(&mut self) -> PResult {
        let m = self.start();
        let opener = self.bump_opener();
        self.parse_expr()?;
        self.expect(TokenKind::Colon)?;
        loop {
            let column = self.start();
            self.expect_name()?;
            if !self.at_soft(SoftKeyword::Ascending) && !self.at_soft(SoftKeyword::Descending) {
                return Err(self.unexpected("`ascending` or `descending`"));
            }
            self.bump();
            column.complete(self, NodeKind::ColumnOrder);
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect_end(opener)?;
        Ok(m.complete(self, NodeKind::TableOrder))
    }

    /// `TableExtendFields := ListTableExtendField* TableExtendField ,?`
    fn parse_table_extend_fields(&mut self) -> PResult {
        let m = self.start();
        loop {
            let field = self.parse_table_extend_field()?;
            if !self.at(TokenKind::Comma) {
                break;
            }
            if self.nth_kind(1) != TokenKind::Name {
                self.bump();
                break;
            }
            let list = field.precede(self);
            self.bump();
            list.complete(self, NodeKind::ListTableExtendField);
        }
        Ok(m.complete(self, NodeKind::TableExtendFields))
    }

    /// ```text
    /// TableExtendField := Key (:: Ann)? : BinopExpr
    ///                   | Key (:: Ann)? : Expr of NAME
    /// ```
    fn parse_table_extend_field(&mut self) -> PResult {
        let m = self.start();
        self.parse_key_and_colon(true)?;
        let value = self.parse_expr()?;
        if self.at_soft(SoftKeyword::Of) {
            self.bump();
            self.expect_name()?;
        } else {
            self.parse_binop_rest(value)?;
        }
        Ok(m.complete(self, NodeKind::TableExtendField))
    }

    /// ```text
    /// LoadTableExpr := load-table : TableHeaders LoadTableSpecs? end
    /// LoadTableSpec := source: Expr | sanitize NAME using Expr
    /// ```
    pub(crate) fn parse_load_table_expr(&mut self) -> PResult {
        self.in_error_context(ErrorContext::TableExpression, |p| {
            let m = p.start();
            let opener = p.bump_opener();
            p.expect(TokenKind::Colon)?;
            p.parse_table_headers()?;
            if p.at_load_table_spec() {
                let specs = p.start();
                while p.at_load_table_spec() {
                    p.parse_load_table_spec()?;
                }
                specs.complete(p, NodeKind::LoadTableSpecs);
            }
            p.expect_end(opener)?;
            Ok(m.complete(p, NodeKind::LoadTableExpr))
        })
    }

    fn at_load_table_spec(&self) -> bool {
        self.at(TokenKind::SourceColon)
            || (self.at_soft(SoftKeyword::Sanitize) && self.nth_kind(1) == TokenKind::Name)
    }

    fn parse_load_table_spec(&mut self) -> PResult {
        let m = self.start();
        if !self.eat(TokenKind::SourceColon) {
            self.bump();
            self.expect_name()?;
            if !self.at_soft(SoftKeyword::Using) {
                return Err(self.unexpected("`using`"));
            }
            self.bump();
        }
        self.parse_expr()?;
        Ok(m.complete(self, NodeKind::LoadTableSpec))
    }

    /// `ReactorExpr := reactor : Fields end`
    pub(crate) fn parse_reactor_expr(&mut self) -> PResult {
        let m = self.start();
        let opener = self.bump_opener();
        self.expect(TokenKind::Colon)?;
        self.parse_fields()?;
        self.expect_end(opener)?;
        Ok(m.complete(self, NodeKind::ReactorExpr))
    }
}
