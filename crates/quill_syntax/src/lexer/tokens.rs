//! Token types for the Quill scanner.
//!
//! Token kinds form a closed, ordered set. Every reserved-word kind sits above [`KEYWORD_BOUNDARY`], so asking
//! "is this a keyword" is one ordinal comparison instead of a set lookup.
//!
//! ## Notes
//! - Reserved-word spellings live in `quill_core::lang::keywords`; this module only maps their categories onto kinds.
//! - Use `crate::token_helpers` for bracket matching at call sites.

use std::fmt;

use crate::ast::Span;
use quill_core::lang::keywords::{self, KeywordCategory};

#[cfg(feature = "serde")]
use serde::Serialize;

// ============================================================================
// TOKEN KINDS
// ============================================================================

/// Ordinal separating ordinary kinds (below) from reserved-word kinds (above).
pub const KEYWORD_BOUNDARY: u8 = 14;

/// Kind of token produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[repr(u8)]
pub enum TokenKind {
    /// Lexical error; the text is the message and no token follows it.
    Error = 0,
    /// Single printable punctuation rune.
    Literal = 1,
    Bool = 2,
    Char = 3,
    /// Emitted when a delimited scan overruns the input.
    EndMarker = 4,
    EndOfLine = 5,
    BracketOpen = 6,
    BracketClose = 7,
    Number = 8,
    Space = 9,
    Identifier = 10,
    /// Backtick-quoted raw text.
    Quote = 11,
    String = 12,
    Comment = 13,

    // ========== Reserved words (> KEYWORD_BOUNDARY) ==========
    TypeKeyword = 15,
    FuncKeyword = 16,
    LetKeyword = 17,
    SetKeyword = 18,
    IfKeyword = 19,
}

impl TokenKind {
    /// Return `true` for reserved-word kinds.
    pub fn is_keyword(self) -> bool {
        self as u8 > KEYWORD_BOUNDARY
    }

    /// Return `true` for whitespace and line breaks.
    pub fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Space | TokenKind::EndOfLine)
    }

    /// Short lowercase name used in diagnostics.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::Error => "error",
            TokenKind::Literal => "literal",
            TokenKind::Bool => "boolean",
            TokenKind::Char => "character",
            TokenKind::EndMarker => "end marker",
            TokenKind::EndOfLine => "end of line",
            TokenKind::BracketOpen => "opening bracket",
            TokenKind::BracketClose => "closing bracket",
            TokenKind::Number => "number",
            TokenKind::Space => "whitespace",
            TokenKind::Identifier => "identifier",
            TokenKind::Quote => "quoted literal",
            TokenKind::String => "string",
            TokenKind::Comment => "comment",
            TokenKind::TypeKeyword => "type name",
            TokenKind::FuncKeyword | TokenKind::IfKeyword => "keyword",
            TokenKind::LetKeyword | TokenKind::SetKeyword => "assignment",
        }
    }
}

impl From<KeywordCategory> for TokenKind {
    fn from(category: KeywordCategory) -> Self {
        match category {
            KeywordCategory::Type => TokenKind::TypeKeyword,
            KeywordCategory::Func => TokenKind::FuncKeyword,
            KeywordCategory::Let => TokenKind::LetKeyword,
            KeywordCategory::Set => TokenKind::SetKeyword,
            KeywordCategory::If => TokenKind::IfKeyword,
        }
    }
}

// ============================================================================
// TOKENS
// ============================================================================

/// A scanned lexeme.
///
/// `text` is the exact source slice, except that string and backtick quotes are stripped and error tokens carry
/// the formatted message.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?}", self.kind, self.text)
    }
}

/// Classify a completed identifier-shaped word.
///
/// Reserved spellings win, then the boolean literals, then plain identifiers.
pub fn classify_word(word: &str) -> TokenKind {
    match keywords::from_str(word) {
        Some(category) => TokenKind::from(category),
        None if word == "true" || word == "false" => TokenKind::Bool,
        None => TokenKind::Identifier,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_boundary_splits_kinds() {
        assert!(!TokenKind::Comment.is_keyword());
        assert!(!TokenKind::Identifier.is_keyword());
        assert!(TokenKind::TypeKeyword.is_keyword());
        assert!(TokenKind::IfKeyword.is_keyword());
        assert!((TokenKind::Comment as u8) < KEYWORD_BOUNDARY);
        assert!((TokenKind::TypeKeyword as u8) > KEYWORD_BOUNDARY);
    }

    #[test]
    fn test_every_registry_category_maps_to_a_keyword_kind() {
        for info in keywords::KEYWORDS {
            assert!(TokenKind::from(info.category).is_keyword(), "{}", info.spelling);
        }
    }

    #[test]
    fn test_classify_word() {
        assert_eq!(classify_word("func"), TokenKind::FuncKeyword);
        assert_eq!(classify_word("int64"), TokenKind::TypeKeyword);
        assert_eq!(classify_word("true"), TokenKind::Bool);
        assert_eq!(classify_word("false"), TokenKind::Bool);
        assert_eq!(classify_word("fmt.Println"), TokenKind::Identifier);
    }

    #[test]
    fn test_display() {
        let tok = Token::new(TokenKind::Identifier, "Add", Span::new(5, 8));
        assert_eq!(tok.to_string(), r#"Identifier "Add""#);
    }
}
