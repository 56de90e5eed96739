//! Parser tests.
//!
//! - `parser`: tree shapes for each production family
//! - `recovery`: `Error` node placement and recorded errors
//! - `properties`: round-trip and coverage properties over generated input

mod properties;
mod recovery;

use pyret_ir::{SyntaxKind, SyntaxNode};

use crate::{parse, ParseOutput};

/// Node kinds of a tree as `Kind(child child)`, tokens omitted.
fn shape(node: &SyntaxNode) -> String {
    let kind = match node.kind() {
        SyntaxKind::Node(kind) => format!("{kind:?}"),
        SyntaxKind::Token(kind) => format!("{kind:?}"),
    };
    let children: Vec<String> = node.children().map(|child| shape(&child)).collect();
    if children.is_empty() {
        kind
    } else {
        format!("{kind}({})", children.join(" "))
    }
}

#[allow(clippy::expect_used)]
fn parse_ok(source: &str) -> ParseOutput {
    parse(source).expect("source should lex")
}

/// Shape of a parse that must not need recovery.
fn exact_shape(source: &str) -> String {
    let output = parse_ok(source);
    assert!(
        output.is_exact(),
        "unexpected errors {:?}\n{}",
        output.errors,
        output.debug_tree()
    );
    shape(&output.syntax())
}
