//! Replays parse events into a lossless `rowan` green tree.
//!
//! Trivia is attached as the tree is built: whitespace and comments before
//! a token go into the innermost node that is open when the token arrives,
//! and are flushed before a new non-root node starts. Leading and trailing
//! trivia of the file therefore belong to the root. The zero-width `Eof`
//! token is never emitted.

use std::mem;

use pyret_ir::{NodeKind, SyntaxKind, TokenList};
use rowan::{GreenNode, GreenNodeBuilder};

use crate::event::Event;

struct TreeSink<'a> {
    source: &'a str,
    tokens: &'a TokenList,
    /// Next raw token index to emit.
    pos: usize,
    depth: usize,
    builder: GreenNodeBuilder<'static>,
}

impl TreeSink<'_> {
    fn start_node(&mut self, kind: NodeKind) {
        if self.depth > 0 {
            self.flush_trivia();
        }
        self.builder.start_node(SyntaxKind::Node(kind).to_raw());
        self.depth += 1;
    }

    fn finish_node(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        if self.depth == 0 {
            self.flush_trivia();
        }
        self.builder.finish_node();
    }

    fn token(&mut self) {
        self.flush_trivia();
        if let Some(token) = self.tokens.get(self.pos) {
            self.builder.token(
                SyntaxKind::Token(token.kind).to_raw(),
                token.text(self.source),
            );
            self.pos += 1;
        }
    }

    fn flush_trivia(&mut self) {
        while let Some(token) = self.tokens.get(self.pos) {
            if !token.kind.is_trivia() {
                break;
            }
            self.builder.token(
                SyntaxKind::Token(token.kind).to_raw(),
                token.text(self.source),
            );
            self.pos += 1;
        }
    }
}

/// Build the green tree for `events`.
///
/// `events` must describe exactly one root node and consume every
/// significant token except `Eof`.
pub(crate) fn build_tree(source: &str, tokens: &TokenList, mut events: Vec<Event>) -> GreenNode {
    let mut sink = TreeSink {
        source,
        tokens,
        pos: 0,
        depth: 0,
        builder: GreenNodeBuilder::new(),
    };
    let mut parents: Vec<NodeKind> = Vec::new();

    for i in 0..events.len() {
        match mem::replace(&mut events[i], Event::Tombstone) {
            Event::Start {
                kind,
                forward_parent,
            } => {
                // Collect the chain of forward parents, outermost last.
                parents.push(kind);
                let mut idx = i;
                let mut next = forward_parent;
                while let Some(distance) = next {
                    idx += distance as usize;
                    next = match events.get_mut(idx).map(|e| mem::replace(e, Event::Tombstone)) {
                        Some(Event::Start {
                            kind,
                            forward_parent,
                        }) => {
                            parents.push(kind);
                            forward_parent
                        }
                        _ => None,
                    };
                }
                for kind in parents.drain(..).rev() {
                    sink.start_node(kind);
                }
            }
            Event::Finish => sink.finish_node(),
            Event::Token => sink.token(),
            Event::Tombstone => {}
        }
    }

    sink.builder.finish()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use pretty_assertions::assert_eq;
    use pyret_ir::{SyntaxNode, TokenKind};

    #[test]
    fn test_trivia_goes_to_root_edges() {
        let source = "  x \n";
        let tokens = pyret_lexer::lex(source).unwrap();
        let events = vec![
            Event::Start {
                kind: NodeKind::SourceFile,
                forward_parent: None,
            },
            Event::Start {
                kind: NodeKind::IdExpr,
                forward_parent: None,
            },
            Event::Token,
            Event::Finish,
            Event::Finish,
        ];
        let root = SyntaxNode::new_root(build_tree(source, &tokens, events));
        assert_eq!(root.text().to_string(), source);

        let kinds: Vec<_> = root.children_with_tokens().map(|e| e.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                SyntaxKind::Token(TokenKind::Whitespace),
                SyntaxKind::Node(NodeKind::IdExpr),
                SyntaxKind::Token(TokenKind::Whitespace),
            ]
        );
    }

    #[test]
    fn test_forward_parent_wraps_completed_node() {
        // `a.b`: DotExpr is started after IdExpr but must enclose it.
        let source = "a.b";
        let tokens = pyret_lexer::lex(source).unwrap();
        let events = vec![
            Event::Start {
                kind: NodeKind::SourceFile,
                forward_parent: None,
            },
            Event::Start {
                kind: NodeKind::IdExpr,
                forward_parent: Some(3),
            },
            Event::Token,
            Event::Finish,
            Event::Start {
                kind: NodeKind::DotExpr,
                forward_parent: None,
            },
            Event::Token,
            Event::Token,
            Event::Finish,
            Event::Finish,
        ];
        let root = SyntaxNode::new_root(build_tree(source, &tokens, events));
        let dot = root.first_child().unwrap();
        assert_eq!(dot.kind(), SyntaxKind::Node(NodeKind::DotExpr));
        assert_eq!(
            dot.first_child().unwrap().kind(),
            SyntaxKind::Node(NodeKind::IdExpr)
        );
        assert_eq!(dot.text().to_string(), "a.b");
    }
}
