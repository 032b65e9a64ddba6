//! Define the reserved-word vocabulary for the Quill language.
//!
//! This module is the single source of truth for reserved words: a stable category ([`KeywordCategory`]) plus a
//! const table ([`KEYWORDS`]) mapping every exact spelling to its category.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** and exact; there are no aliases.
//! - Several spellings share one category: every builtin type name maps to [`KeywordCategory::Type`].
//! - The table is a `const` slice, so it is built at compile time and never mutated.
//!
//! ## Examples
//! ```rust
//! use quill_core::lang::keywords::{self, KeywordCategory};
//!
//! assert_eq!(keywords::from_str("if"), Some(KeywordCategory::If));
//! assert_eq!(keywords::from_str("If"), None);
//! assert!(keywords::spellings(KeywordCategory::Type).any(|t| t == "currency"));
//! ```

/// Category a reserved spelling resolves to.
///
/// The lexer turns each category into a keyword-class token kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    /// `:=` (declare-and-assign)
    Let,
    /// `=` (assign)
    Set,
    If,
    Func,
    /// Builtin type names (`int16`, `string`, ...).
    Type,
}

/// High-level grouping for documentation and tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordGroup {
    Assignment,
    Statement,
    Type,
}

/// Metadata for one reserved spelling.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub spelling: &'static str,
    pub category: KeywordCategory,
    pub group: KeywordGroup,
}

const fn info(spelling: &'static str, category: KeywordCategory, group: KeywordGroup) -> KeywordInfo {
    KeywordInfo {
        spelling,
        category,
        group,
    }
}

const fn ty(spelling: &'static str) -> KeywordInfo {
    info(spelling, KeywordCategory::Type, KeywordGroup::Type)
}

/// Registry of all reserved spellings.
///
/// ## Notes
/// - The ordering is not semantically meaningful, but is grouped for readability.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Assignment
    info(":=", KeywordCategory::Let, KeywordGroup::Assignment),
    info("=", KeywordCategory::Set, KeywordGroup::Assignment),
    // Statements
    info("if", KeywordCategory::If, KeywordGroup::Statement),
    info("func", KeywordCategory::Func, KeywordGroup::Statement),
    // Types
    ty("byte"),
    ty("int16"),
    ty("int32"),
    ty("int64"),
    ty("decimal"),
    ty("currency"),
    ty("date"),
    ty("string"),
    ty("charset"),
    ty("object"),
    ty("bool"),
];

/// Lookup by exact spelling.
///
/// ## Parameters
/// - `s`: Candidate word, exactly as it appears in source.
///
/// ## Returns
/// - `Some(KeywordCategory)` if `s` is reserved.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordCategory> {
    KEYWORDS.iter().find(|k| k.spelling == s).map(|k| k.category)
}

/// All spellings that resolve to `category`, in registry order.
pub fn spellings(category: KeywordCategory) -> impl Iterator<Item = &'static str> {
    KEYWORDS
        .iter()
        .filter(move |k| k.category == category)
        .map(|k| k.spelling)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_keywords_resolve() {
        assert_eq!(from_str("func"), Some(KeywordCategory::Func));
        assert_eq!(from_str("if"), Some(KeywordCategory::If));
        assert_eq!(from_str(":="), Some(KeywordCategory::Let));
        assert_eq!(from_str("="), Some(KeywordCategory::Set));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(from_str("Func"), None);
        assert_eq!(from_str("INT16"), None);
        assert_eq!(from_str("true"), None);
    }

    #[test]
    fn test_type_spellings() {
        let types: Vec<_> = spellings(KeywordCategory::Type).collect();
        assert_eq!(types.len(), 11);
        assert!(types.contains(&"decimal"));
        assert!(types.iter().all(|t| from_str(t) == Some(KeywordCategory::Type)));
        assert!(!types.contains(&"func"));
    }
}
