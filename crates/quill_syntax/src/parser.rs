//! Parser for the Quill language
//!
//! Builds a statement tree from a token stream, one scope at a time. Statement kinds are parsed by dedicated
//! sub-parsers written as continuation chains: each step consumes a few tokens, fills in the node, and names the
//! next step. Only function declarations have a sub-parser today.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use quill_syntax::parser;
//!
//! let tree = parser::parse_source("func Add(x int16, y int16) { }").unwrap();
//! assert_eq!(tree.body.len(), 1);
//! ```

use crate::ast::*;
use crate::diagnostics::{SyntaxError, describe};
use crate::lexer::{ScanConfig, Token, TokenKind};
use crate::stream;
use crate::token_helpers::Bracket;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/scope.rs");
include!("parser/decl.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
