//! Per-token whitespace context.

use bitflags::bitflags;

bitflags! {
    /// What separated a significant token from the one before it.
    ///
    /// Computed once by the lexer from the trivia between the two tokens.
    /// The parser consults these instead of re-scanning trivia.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct TokenFlags: u8 {
        /// Spaces or tabs preceded this token.
        const SPACE_BEFORE = 1 << 0;
        /// A newline preceded this token.
        const NEWLINE_BEFORE = 1 << 1;
        /// A comment preceded this token.
        const TRIVIA_BEFORE = 1 << 2;
        /// First significant token on its line.
        const LINE_START = 1 << 3;
        /// Nothing at all separates this token from the previous one.
        const ADJACENT = 1 << 4;
    }
}

const _: () = assert!(size_of::<TokenFlags>() == 1);

impl TokenFlags {
    /// Whether a newline appeared in the trivia before this token.
    #[inline]
    pub const fn has_newline_before(self) -> bool {
        self.contains(TokenFlags::NEWLINE_BEFORE)
    }

    /// Whether the token directly abuts the previous one.
    #[inline]
    pub const fn is_adjacent(self) -> bool {
        self.contains(TokenFlags::ADJACENT)
    }
}
