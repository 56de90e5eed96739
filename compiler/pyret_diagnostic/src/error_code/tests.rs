use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::E1003.to_string(), "E1003");
    assert_eq!(format!("{}", ErrorCode::E0001), "E0001");
}

#[test]
fn test_phases_partition_codes() {
    for code in ErrorCode::ALL {
        assert_ne!(code.is_lexer_error(), code.is_parser_error(), "{code}");
    }
    assert!(ErrorCode::E0004.is_lexer_error());
    assert!(ErrorCode::E1005.is_parser_error());
}

#[test]
fn test_parse_round_trips() {
    for code in ErrorCode::ALL {
        assert_eq!(ErrorCode::parse(code.as_str()), Some(code));
    }
    assert_eq!(ErrorCode::parse("E9999"), None);
}

#[test]
fn test_descriptions_are_distinct() {
    let mut seen: Vec<&str> = ErrorCode::ALL.iter().map(ErrorCode::description).collect();
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), ErrorCode::ALL.len());
}
