//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! Parentheses and braces share the `BracketOpen` / `BracketClose` kinds, so telling them apart means looking at
//! the text. These helpers keep that check in one place.

use crate::lexer::{Token, TokenKind};

/// Which pair of brackets a token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    /// `(` `)`
    Paren,
    /// `{` `}`
    Brace,
}

impl Bracket {
    pub fn open(self) -> &'static str {
        match self {
            Bracket::Paren => "(",
            Bracket::Brace => "{",
        }
    }

    pub fn close(self) -> &'static str {
        match self {
            Bracket::Paren => ")",
            Bracket::Brace => "}",
        }
    }
}

impl Token {
    /// Return `true` if this token opens `bracket`.
    pub fn is_open(&self, bracket: Bracket) -> bool {
        self.kind == TokenKind::BracketOpen && self.text == bracket.open()
    }

    /// Return `true` if this token closes `bracket`.
    pub fn is_close(&self, bracket: Bracket) -> bool {
        self.kind == TokenKind::BracketClose && self.text == bracket.close()
    }

    /// Return `true` if this is the single-rune punctuation `p`.
    pub fn is_literal(&self, p: &str) -> bool {
        self.kind == TokenKind::Literal && self.text == p
    }

    /// Tokens the grammar never looks at: whitespace, line breaks, comments.
    pub fn is_ignorable(&self) -> bool {
        self.kind.is_trivia() || self.kind == TokenKind::Comment
    }
}
