//! Syntax frontend for the Quill language: rune cursor, scanner, token stream, parser, AST, diagnostics.
//!
//! The scanner and parser are connected by a token stream: the scanner can run on its own thread, handing over one
//! token at a time, while the parser consumes them lazily and builds the statement tree.
//!
//! ## Notes
//! - This crate is "syntax-only": it checks declaration shape and nothing else. There is no name resolution, type
//!   checking, or evaluation.
//! - Reserved-word spellings come from `quill_core::lang::keywords`.
//!
//! ## Examples
//! ```rust,no_run
//! use quill_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("func Add(x int16, y int16) { }\n");
//! let tree = parser::parse(tokens).unwrap();
//! assert_eq!(tree.body.len(), 1);
//! ```
//!
//! ## See also
//! - [`stream::TokenStream`] for scanning on a background thread.

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod stream;
pub mod token_helpers;
