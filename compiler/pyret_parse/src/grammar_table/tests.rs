use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_table_is_a_singleton() {
    assert!(std::ptr::eq(grammar_table(), grammar_table()));
}

#[test]
fn test_binop_set() {
    let table = grammar_table();
    for kind in [
        TokenKind::Plus,
        TokenKind::Caret,
        TokenKind::Lt,
        TokenKind::Spaceship,
        TokenKind::EqualTilde,
        TokenKind::And,
        TokenKind::Or,
    ] {
        assert_eq!(table.binop_band(kind), Some(prec::BINARY), "{kind:?}");
    }

    // `%` only appears in refinements and predicate annotations.
    assert!(!table.is_binop(TokenKind::Percent));
    assert!(!table.is_binop(TokenKind::Is));
    assert_eq!(table.binop_band(TokenKind::Comma), None);
}

#[test]
fn test_precedences() {
    let table = grammar_table();
    assert_eq!(table.static_precedence(NodeKind::BinopExpr), 10);
    assert_eq!(table.static_precedence(NodeKind::InstExpr), 15);
    assert_eq!(table.static_precedence(NodeKind::NameBinding), 1);
    assert_eq!(table.static_precedence(NodeKind::IfExpr), 0);
    assert_eq!(table.dynamic_precedence(NodeKind::InstExpr), 16);
    assert_eq!(table.dynamic_precedence(NodeKind::AppExpr), 0);
}

#[test]
fn test_declared_conflicts() {
    let table = grammar_table();
    assert!(table.is_declared_conflict(NodeKind::InstExpr, NodeKind::Binop));
    assert!(table.is_declared_conflict(NodeKind::BinopExpr, NodeKind::InstExpr));
    assert!(!table.is_declared_conflict(NodeKind::AppExpr, NodeKind::InstExpr));
}

#[test]
fn test_table_is_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| grammar_table() as *const GrammarTable as usize))
        .collect();
    let addresses: Vec<usize> = handles
        .into_iter()
        .map(|h| h.join().unwrap_or_default())
        .collect();
    assert!(addresses.windows(2).all(|w| w[0] == w[1]));
}
