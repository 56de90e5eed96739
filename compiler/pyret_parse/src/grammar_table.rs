//! The grammar and precedence table.
//!
//! Built once per process and shared read-only by every parse. It answers
//! three questions: is this token a binary operator,
//! what static precedence does a production carry, and what dynamic
//! precedence does it add when two readings of the same tokens survive.
//!
//! All binary operators share one left-associative band. Pyret has no
//! relative precedence between them: `a + b * c` is `(a + b) * c`.

use std::sync::OnceLock;

use pyret_ir::{NodeKind, TokenKind};
use rustc_hash::FxHashMap;

use crate::recovery::TokenSet;

/// Precedence constants.
pub mod prec {
    /// Binary operator chains.
    pub const BINARY: i32 = 10;
    /// Postfix forms: application, indexing, field access, instantiation.
    pub const CALL: i32 = 15;
    /// `name_binding` wins over expression readings of the same name.
    pub const NAME_BINDING: i32 = 1;
    /// Extra score of an instantiation used as a callee.
    pub const INST_DYNAMIC: i32 = CALL + 1;
}

/// Binary operators.
const BINOPS: TokenSet = TokenSet::new()
    .with(TokenKind::Plus)
    .with(TokenKind::Minus)
    .with(TokenKind::Star)
    .with(TokenKind::Slash)
    .with(TokenKind::Caret)
    .with(TokenKind::Le)
    .with(TokenKind::Ge)
    .with(TokenKind::EqualEqual)
    .with(TokenKind::Spaceship)
    .with(TokenKind::EqualTilde)
    .with(TokenKind::NotEqual)
    .with(TokenKind::Lt)
    .with(TokenKind::Gt)
    .with(TokenKind::And)
    .with(TokenKind::Or);

/// Immutable grammar configuration.
#[derive(Debug)]
pub struct GrammarTable {
    static_precedence: FxHashMap<NodeKind, i32>,
    dynamic_precedence: FxHashMap<NodeKind, i32>,
    conflicts: Vec<[NodeKind; 2]>,
}

/// The process-wide grammar table.
pub fn grammar_table() -> &'static GrammarTable {
    static TABLE: OnceLock<GrammarTable> = OnceLock::new();
    TABLE.get_or_init(GrammarTable::build)
}

impl GrammarTable {
    fn build() -> Self {
        let static_precedence = [
            (NodeKind::BinopExpr, prec::BINARY),
            (NodeKind::AppExpr, prec::CALL),
            (NodeKind::BracketExpr, prec::CALL),
            (NodeKind::DotExpr, prec::CALL),
            (NodeKind::GetBangExpr, prec::CALL),
            (NodeKind::ExtendExpr, prec::CALL),
            (NodeKind::UpdateExpr, prec::CALL),
            (NodeKind::TupleGet, prec::CALL),
            (NodeKind::InstExpr, prec::CALL),
            (NodeKind::NameBinding, prec::NAME_BINDING),
        ]
        .into_iter()
        .collect();

        let dynamic_precedence = [(NodeKind::InstExpr, prec::INST_DYNAMIC)]
            .into_iter()
            .collect();

        GrammarTable {
            static_precedence,
            dynamic_precedence,
            conflicts: vec![
                [NodeKind::Binop, NodeKind::InstExpr],
                [NodeKind::BinopExpr, NodeKind::InstExpr],
            ],
        }
    }

    #[inline]
    pub fn is_binop(&self, kind: TokenKind) -> bool {
        BINOPS.contains(kind)
    }

    /// Precedence band of a binary operator. Every operator shares
    /// [`prec::BINARY`].
    pub fn binop_band(&self, kind: TokenKind) -> Option<i32> {
        self.is_binop(kind).then_some(prec::BINARY)
    }

    /// Static precedence of a production, 0 when it declares none.
    pub fn static_precedence(&self, kind: NodeKind) -> i32 {
        self.static_precedence.get(&kind).copied().unwrap_or(0)
    }

    /// Dynamic precedence of a production, 0 when it declares none.
    pub fn dynamic_precedence(&self, kind: NodeKind) -> i32 {
        self.dynamic_precedence.get(&kind).copied().unwrap_or(0)
    }

    /// Whether `a` and `b` form a declared conflict, in either order.
    pub fn is_declared_conflict(&self, a: NodeKind, b: NodeKind) -> bool {
        self.conflicts
            .iter()
            .any(|&[x, y]| (x == a && y == b) || (x == b && y == a))
    }
}

#[cfg(test)]
mod tests;
