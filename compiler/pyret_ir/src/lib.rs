//! Pyret IR - shared front-end data model.
//!
//! This crate contains the types every front-end phase agrees on:
//! - Spans for source locations
//! - Tokens, token flags and `TokenList` for lexer output
//! - Node kinds naming the grammar's productions
//! - The `rowan` language binding used for the concrete syntax tree
//!
//! The CST is lossless: every byte of input, whitespace and comments
//! included, is reachable from the root through leaf tokens.

/// Declare a fieldless kind enum with a dense `u8` discriminant, an `ALL`
/// table indexed by discriminant, and a static display name per variant.
macro_rules! define_kinds {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal, )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
        #[repr(u8)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )*
        }

        impl $name {
            /// Every variant, in discriminant order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)*];

            /// Human-readable name used in diagnostics and tree dumps.
            pub const fn name(self) -> &'static str {
                match self {
                    $( $name::$variant => $text, )*
                }
            }

            /// Dense discriminant index.
            #[inline]
            pub const fn index(self) -> u8 {
                self as u8
            }

            /// Inverse of [`index`](Self::index).
            #[inline]
            pub fn from_index(index: u8) -> Option<$name> {
                Self::ALL.get(index as usize).copied()
            }
        }
    };
}

mod span;
mod syntax;
mod token;

pub use span::{Span, SpanError};
pub use syntax::{
    NodeKind, PyretLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxNodeChildren,
    SyntaxToken,
};
pub use token::{ParenClass, Token, TokenFlags, TokenKind, TokenList};
