//! Quill language vocabulary registries.
//!
//! Today the only registry is the reserved-word table. Callers work with the stable [`keywords::KeywordCategory`]
//! instead of comparing spellings at call sites.
//!
//! ## Examples
//! ```rust
//! use quill_core::lang::keywords::{self, KeywordCategory};
//!
//! assert_eq!(keywords::from_str("func"), Some(KeywordCategory::Func));
//! assert_eq!(keywords::from_str("int16"), Some(KeywordCategory::Type));
//! ```

pub mod keywords;
