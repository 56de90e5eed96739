#![allow(clippy::unwrap_used)]

use std::time::{Duration, Instant};

use proptest::prelude::*;
use pyret_ir::{NodeKind, SyntaxKind};

use super::parse_ok;
use crate::parse;

/// Statements that parse without recovery on their own and after any
/// other statement on the next line.
const SNIPPETS: &[&str] = &[
    "x = 1",
    "var y :: Number = 2",
    "f(x, y)",
    "lst.get<Number>(0)",
    "a < b",
    "fun f(n): n * 2 end",
    "data D: | a | b(x) end",
    "check: f(1) is 2 end",
    "if c: 1 else: 2 end",
    "cases(List) l: | empty => 0 | link(h, t) => h end",
    "for each(i from r): print(i) end",
    "{a: 1, b: 2}",
    "{1; 2}",
    "[list: 1, 2, 3]",
    "o.{a: 1}!{b: 2}.c",
    "table: a row: 1 end",
    "block: x end",
    "f :: Number -> Number",
    "x :: List<String> = empty",
    "'str' + \"ing\"",
];

proptest! {
    #[test]
    fn tree_text_is_the_input(source in "[a-z0-9 ()\\[\\]{}+\\-*/<>=:;,.#|!%\n\"'@~]{0,48}") {
        if let Ok(output) = parse(&source) {
            let root = output.syntax();
            prop_assert_eq!(root.to_string(), source.clone());
            prop_assert_eq!(usize::from(root.text_range().end()), source.len());
        }
    }

    #[test]
    fn errors_and_error_nodes_agree(source in "[a-z0-9 ():=+<>,\n@]{0,32}") {
        if let Ok(output) = parse(&source) {
            prop_assert_eq!(output.errors.is_empty(), output.error_nodes().next().is_none());
        }
    }

    #[test]
    fn valid_programs_parse_exactly(
        stmts in prop::collection::vec(prop::sample::select(SNIPPETS), 1..6)
    ) {
        let source = stmts.join("\n");
        let output = parse_ok(&source);
        prop_assert!(output.is_exact(), "{:?}\n{}", output.errors, output.debug_tree());
    }
}

#[test]
fn deep_nesting_does_not_overflow() {
    let depth = 1000;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    let output = parse_ok(&source);
    assert!(output.is_exact());
    assert_eq!(output.syntax().to_string(), source);
}

#[test]
fn nested_spaced_calls_parse_in_bounded_time() {
    let depth = 40;
    let mut args = "x, y".to_string();
    for _ in 1..depth {
        args = format!("f ({args}), y");
    }
    let source = format!("f ({args})");

    let start = Instant::now();
    let output = parse_ok(&source);
    let elapsed = start.elapsed();

    assert!(output.is_exact(), "{:?}", output.errors);
    let calls = output
        .syntax()
        .descendants()
        .filter(|node| node.kind() == SyntaxKind::Node(NodeKind::AppExpr))
        .count();
    assert_eq!(calls, depth);
    assert!(elapsed < Duration::from_secs(5), "took {elapsed:?}");
}
