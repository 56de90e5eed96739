//! Lex-time classification of opening parentheses.
//!
//! Pyret gives `(` three grammatical roles depending only on what touches
//! it on the left:
//!
//! | Preceded by               | Kind              | Role               |
//! |---------------------------|-------------------|--------------------|
//! | start of input, trivia    | `ParenSpace`      | grouping, binders  |
//! | `{`                       | `ParenAfterBrace` | lambda header      |
//! | anything else             | `ParenNoSpace`    | call arguments     |
//!
//! The decision looks at exactly one token, so re-lexing an edited region
//! never needs more than the token before it.

use pyret_ir::TokenKind;

/// Classify a `(` given the token immediately before it, trivia included.
///
/// `prev` is `None` at the start of input.
pub fn classify_open_paren(prev: Option<TokenKind>) -> TokenKind {
    match prev {
        None => TokenKind::ParenSpace,
        Some(kind) if kind.is_trivia() => TokenKind::ParenSpace,
        Some(TokenKind::LBrace) => TokenKind::ParenAfterBrace,
        Some(_) => TokenKind::ParenNoSpace,
    }
}

#[cfg(test)]
mod tests;
