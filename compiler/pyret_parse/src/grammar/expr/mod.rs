//! Expression Parsing
//!
//! ```text
//! BinopExpr := Expr (Binop Expr)*
//! Expr      := Primary Postfix*
//! ```
//!
//! Every binary operator shares one left-associative band, so the chain is
//! a flat loop that nests each new operator around everything before it.

mod control_flow;
mod object;
mod postfix;
mod primary;
mod table;

use pyret_ir::NodeKind;
use pyret_stack::ensure_sufficient_stack;

use crate::event::CompletedMarker;
use crate::{ErrorContext, PResult, Parser};

impl Parser<'_> {
    /// Parse a chain of binary operators.
    pub(crate) fn parse_binop_expr(&mut self) -> PResult {
        ensure_sufficient_stack(|| {
            self.in_error_context(ErrorContext::Expression, |p| {
                let lhs = p.parse_expr()?;
                p.parse_binop_rest(lhs)
            })
        })
    }

    /// Continue a binary chain whose first operand is already parsed.
    pub(crate) fn parse_binop_rest(&mut self, mut lhs: CompletedMarker) -> PResult {
        while self.table.is_binop(self.current_kind()) {
            let m = lhs.precede(self);
            self.bump_node(NodeKind::Binop);
            self.parse_expr()?;
            lhs = m.complete(self, NodeKind::BinopExpr);
        }
        Ok(lhs)
    }

    /// Parse a primary expression and its postfix forms.
    pub(crate) fn parse_expr(&mut self) -> PResult {
        ensure_sufficient_stack(|| {
            let primary = self.parse_primary()?;
            self.parse_postfix(primary, false)
        })
    }

    /// Like [`Parser::parse_expr`], but a no-space `(` ends the expression
    /// instead of applying it. Used for the iterator of `for`.
    pub(crate) fn parse_expr_no_call(&mut self) -> PResult {
        let primary = self.parse_primary()?;
        self.parse_postfix(primary, true)
    }
}
