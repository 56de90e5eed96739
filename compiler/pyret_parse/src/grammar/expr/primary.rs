//! Primary Expression Parsing
//!
//! Literals, identifiers, parenthesised expressions, and dispatch to the
//! keyword-led expression forms.

use pyret_ir::{NodeKind, TokenKind};
use pyret_lexer::SoftKeyword;

use crate::event::CompletedMarker;
use crate::{ErrorContext, PResult, ParseErrorKind, Parser};

impl Parser<'_> {
    pub(crate) fn parse_primary(&mut self) -> PResult {
        match self.current_kind() {
            TokenKind::Name => Ok(self.bump_node(NodeKind::IdExpr)),
            TokenKind::Number => Ok(self.parse_literal(NodeKind::NumExpr)),
            TokenKind::Frac => Ok(self.parse_literal(NodeKind::FracExpr)),
            TokenKind::RoughFrac => Ok(self.parse_literal(NodeKind::RfracExpr)),
            TokenKind::True | TokenKind::False => Ok(self.parse_literal(NodeKind::BoolExpr)),
            TokenKind::DoubleQuote | TokenKind::SingleQuote | TokenKind::TripleBacktick => {
                let m = self.start();
                let string = self.start();
                self.parse_string()?;
                string.complete(self, NodeKind::StringExpr);
                Ok(m.complete(self, NodeKind::PrimExpr))
            }
            TokenKind::ParenNoSpace | TokenKind::ParenSpace | TokenKind::ParenAfterBrace => {
                self.parse_paren_expr()
            }
            TokenKind::DotDotDot => Ok(self.bump_node(NodeKind::TemplateExpr)),
            TokenKind::Lam => self.parse_lambda_expr(),
            TokenKind::Method => self.parse_method_expr(),
            TokenKind::LBrace => self.parse_brace_expr(),
            TokenKind::LBracket => self.parse_construct_expr(),
            TokenKind::If => self.parse_if_expr(),
            TokenKind::Ask => self.parse_if_pipe_expr(),
            TokenKind::Cases => self.parse_cases_expr(),
            TokenKind::For => self.parse_for_expr(),
            TokenKind::BlockColon => self.parse_user_block_expr(),
            TokenKind::Let => self.parse_multi_let_expr(),
            TokenKind::Letrec => self.parse_letrec_expr(),
            TokenKind::TypeLet => self.parse_type_let_expr(),
            TokenKind::TableColon => self.parse_table_expr(),
            TokenKind::Select => self.parse_table_select(),
            TokenKind::Sieve => self.parse_table_filter(),
            TokenKind::Order => self.parse_table_order(),
            TokenKind::Extract => self.parse_table_extract(),
            TokenKind::Transform => self.parse_table_update(),
            TokenKind::Extend => self.parse_table_extend(),
            TokenKind::LoadTable => self.parse_load_table_expr(),
            TokenKind::Reactor => self.parse_reactor_expr(),
            TokenKind::Error => {
                let err = self.error_here(ParseErrorKind::InvalidCharacter);
                self.record(err);
                Ok(self.bump_node(NodeKind::Error))
            }
            found => Err(self.error_here(ParseErrorKind::ExpectedExpression { found })),
        }
    }

    /// `PrimExpr(kind(token))`
    fn parse_literal(&mut self, kind: NodeKind) -> CompletedMarker {
        let m = self.start();
        self.bump_node(kind);
        m.complete(self, NodeKind::PrimExpr)
    }

    /// `ParenExpr := ( BinopExpr )`
    fn parse_paren_expr(&mut self) -> PResult {
        let m = self.start();
        let paren = self.bump_opener();
        self.parse_binop_expr()?;
        self.expect_rparen(paren)?;
        Ok(m.complete(self, NodeKind::ParenExpr))
    }

    /// `ConstructExpr := [ ConstructModifier? BinopExpr : (BinopExpr (, BinopExpr)* ,?)? ]`
    fn parse_construct_expr(&mut self) -> PResult {
        self.in_error_context(ErrorContext::ConstructExpression, |p| {
            let m = p.start();
            let bracket = p.bump_opener();
            if p.at_soft(SoftKeyword::Lazy) && p.nth_kind(1) != TokenKind::Colon {
                p.bump_node(NodeKind::ConstructModifier);
            }
            p.parse_binop_expr()?;
            p.expect(TokenKind::Colon)?;
            while !p.at(TokenKind::RBracket) && !p.is_at_end() {
                p.parse_binop_expr()?;
                if !p.eat(TokenKind::Comma) {
                    break;
                }
            }
            p.expect_closer(TokenKind::RBracket, bracket.kind, bracket.span)?;
            Ok(m.complete(p, NodeKind::ConstructExpr))
        })
    }
}
