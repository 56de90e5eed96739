//! Keyword resolution for the cooking layer.
//!
//! Two tables:
//! 1. **Reserved words**: keywords, check operators and colon keywords.
//!    Length-bucketed lookup, always resolved to a dedicated kind.
//! 2. **Soft keywords**: words the grammar matches by text in a few
//!    positions only (`hiding`, `ascending`, ...). They stay `Name` tokens
//!    everywhere, so they remain usable as identifiers.

use std::fmt;

use pyret_ir::TokenKind;

/// Look up a reserved word by its exact text.
///
/// The raw scanner has already glued check-operator suffixes (`is==`) and
/// colon keywords (`where:`) onto the word, so those arrive here whole.
/// Returns `None` for ordinary names, soft keywords included.
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    let len = text.len();
    if !(2..=17).contains(&len) {
        return None;
    }

    let kind = match len {
        2 => match text {
            "as" => TokenKind::As,
            "if" => TokenKind::If,
            "is" => TokenKind::Is,
            "or" => TokenKind::Or,
            _ => return None,
        },
        3 => match text {
            "and" => TokenKind::And,
            "ask" => TokenKind::Ask,
            "end" => TokenKind::End,
            "for" => TokenKind::For,
            "fun" => TokenKind::Fun,
            "lam" => TokenKind::Lam,
            "let" => TokenKind::Let,
            "rec" => TokenKind::Rec,
            "ref" => TokenKind::Ref,
            "spy" => TokenKind::Spy,
            "use" => TokenKind::Use,
            "var" => TokenKind::Var,
            _ => return None,
        },
        4 => match text {
            "data" => TokenKind::Data,
            "else" => TokenKind::Else,
            "from" => TokenKind::From,
            "doc:" => TokenKind::DocColon,
            "is==" => TokenKind::IsEqualEqual,
            "is=~" => TokenKind::IsEqualTilde,
            "row:" => TokenKind::RowColon,
            "true" => TokenKind::True,
            "type" => TokenKind::Type,
            "when" => TokenKind::When,
            _ => return None,
        },
        5 => match text {
            "cases" => TokenKind::Cases,
            "check" => TokenKind::Check,
            "else:" => TokenKind::ElseColon,
            "false" => TokenKind::False,
            "is<=>" => TokenKind::IsSpaceship,
            "order" => TokenKind::Order,
            "sieve" => TokenKind::Sieve,
            "then:" => TokenKind::ThenColon,
            "with:" => TokenKind::WithColon,
            _ => return None,
        },
        6 => match text {
            "block:" => TokenKind::BlockColon,
            "check:" => TokenKind::CheckColon,
            "extend" => TokenKind::Extend,
            "import" => TokenKind::Import,
            "is-not" => TokenKind::IsNot,
            "letrec" => TokenKind::Letrec,
            "method" => TokenKind::Method,
            "raises" => TokenKind::Raises,
            "select" => TokenKind::Select,
            "shadow" => TokenKind::Shadow,
            "table:" => TokenKind::TableColon,
            "where:" => TokenKind::WhereColon,
            _ => return None,
        },
        7 => match text {
            "because" => TokenKind::Because,
            "extract" => TokenKind::Extract,
            "include" => TokenKind::Include,
            "newtype" => TokenKind::Newtype,
            "provide" => TokenKind::Provide,
            "reactor" => TokenKind::Reactor,
            "source:" => TokenKind::SourceColon,
            _ => return None,
        },
        8 => match text {
            "examples" => TokenKind::Examples,
            "is-not==" => TokenKind::IsNotEqualEqual,
            "is-not=~" => TokenKind::IsNotEqualTilde,
            "provide:" => TokenKind::ProvideColon,
            "sharing:" => TokenKind::SharingColon,
            "type-let" => TokenKind::TypeLet,
            "violates" => TokenKind::Violates,
            _ => return None,
        },
        9 => match text {
            "examples:" => TokenKind::ExamplesColon,
            "is-not<=>" => TokenKind::IsNotSpaceship,
            "satisfies" => TokenKind::Satisfies,
            "transform" => TokenKind::Transform,
            _ => return None,
        },
        10 => match text {
            "is-roughly" => TokenKind::IsRoughly,
            "load-table" => TokenKind::LoadTable,
            "otherwise:" => TokenKind::OtherwiseColon,
            _ => return None,
        },
        13 => match text {
            "provide-types" => TokenKind::ProvideTypes,
            _ => return None,
        },
        14 => match text {
            "does-not-raise" => TokenKind::DoesNotRaise,
            "is-not-roughly" => TokenKind::IsNotRoughly,
            _ => return None,
        },
        15 => match text {
            "raises-violates" => TokenKind::RaisesViolates,
            _ => return None,
        },
        16 => match text {
            "raises-satisfies" => TokenKind::RaisesSatisfies,
            _ => return None,
        },
        17 => match text {
            "raises-other-than" => TokenKind::RaisesOtherThan,
            _ => return None,
        },
        _ => return None,
    };
    Some(kind)
}

/// Words with grammatical meaning in specific positions only.
///
/// These lex as [`TokenKind::Name`]; the parser compares token text against
/// [`SoftKeyword::as_str`] where the grammar calls for one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SoftKeyword {
    /// `hiding (...)` in provide and include specs.
    Hiding,
    /// `module` in provide and include specs.
    Module,
    /// `[lazy ctor: ...]` construct expressions.
    Lazy,
    /// `order t: col ascending end`.
    Ascending,
    /// `order t: col descending end`.
    Descending,
    /// `extend t using a, b: ... end`.
    Using,
    /// `col :: Ann of expr` in table extensions.
    Of,
    /// `sanitize col using fn` in load-table specs.
    Sanitize,
}

impl SoftKeyword {
    pub const ALL: [SoftKeyword; 8] = [
        SoftKeyword::Hiding,
        SoftKeyword::Module,
        SoftKeyword::Lazy,
        SoftKeyword::Ascending,
        SoftKeyword::Descending,
        SoftKeyword::Using,
        SoftKeyword::Of,
        SoftKeyword::Sanitize,
    ];

    /// The word as written in source.
    pub const fn as_str(self) -> &'static str {
        match self {
            SoftKeyword::Hiding => "hiding",
            SoftKeyword::Module => "module",
            SoftKeyword::Lazy => "lazy",
            SoftKeyword::Ascending => "ascending",
            SoftKeyword::Descending => "descending",
            SoftKeyword::Using => "using",
            SoftKeyword::Of => "of",
            SoftKeyword::Sanitize => "sanitize",
        }
    }

    /// Resolve a name's text to a soft keyword.
    pub fn from_text(text: &str) -> Option<SoftKeyword> {
        Self::ALL.into_iter().find(|kw| kw.as_str() == text)
    }
}

impl fmt::Display for SoftKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests;
