//! The result of a parse.

use std::fmt::Write;

use pyret_diagnostic::Diagnostic;
use pyret_ir::{NodeKind, SyntaxKind, SyntaxNode};
use rowan::{GreenNode, NodeOrToken, WalkEvent};

use crate::ParseError;

/// A concrete syntax tree plus the syntax errors found while building it.
///
/// The tree always covers the whole input, byte for byte. Every error in
/// `errors` corresponds to an `Error` node in the tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOutput {
    pub green: GreenNode,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub(crate) fn new(green: GreenNode, errors: Vec<ParseError>) -> Self {
        ParseOutput { green, errors }
    }

    /// The root node, of kind `SourceFile`.
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }

    /// Whether the parse needed recovery anywhere.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty() || self.error_nodes().next().is_some()
    }

    /// Whether the input parsed without recovery.
    pub fn is_exact(&self) -> bool {
        !self.has_errors()
    }

    /// Every `Error` node, in document order.
    pub fn error_nodes(&self) -> impl Iterator<Item = SyntaxNode> {
        self.syntax()
            .descendants()
            .filter(|node| node.kind() == SyntaxKind::Node(NodeKind::Error))
    }

    /// The recorded syntax errors as renderable diagnostics.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.errors.iter().map(ParseError::to_diagnostic).collect()
    }

    /// Indented dump of the tree: one line per node or token, with its
    /// kind and byte range, and the text of each token.
    ///
    /// ```text
    /// SourceFile@0..5
    ///   Block@0..5
    ///     LetExpr@0..5
    /// ```
    pub fn debug_tree(&self) -> String {
        let mut out = String::new();
        let mut depth = 0usize;
        for event in self.syntax().preorder_with_tokens() {
            let element = match event {
                WalkEvent::Enter(element) => element,
                WalkEvent::Leave(NodeOrToken::Node(_)) => {
                    depth = depth.saturating_sub(1);
                    continue;
                }
                WalkEvent::Leave(NodeOrToken::Token(_)) => continue,
            };

            let range = element.text_range();
            let indent = "  ".repeat(depth);
            let _ = write!(
                out,
                "{indent}{}@{}..{}",
                kind_label(element.kind()),
                u32::from(range.start()),
                u32::from(range.end()),
            );
            match &element {
                NodeOrToken::Node(_) => depth += 1,
                NodeOrToken::Token(token) => {
                    let _ = write!(out, " {:?}", token.text());
                }
            }
            out.push('\n');
        }
        out
    }
}

fn kind_label(kind: SyntaxKind) -> String {
    match kind {
        SyntaxKind::Token(kind) => format!("{kind:?}"),
        SyntaxKind::Node(kind) => format!("{kind:?}"),
    }
}
