#![forbid(unsafe_code)]
//! Quill syntax tooling
//!
//! Quill is a small declaration language. This crate bundles its frontend (rune cursor, scanner, token stream,
//! declaration parser) and the `quill` command-line tool that dumps tokens and statement trees.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;

pub use quill_core::lang::keywords;
pub use quill_syntax::{ast, diagnostics, lexer, parser, stream, token_helpers};

pub use quill_syntax::diagnostics::SyntaxError;
pub use quill_syntax::lexer::{ScanConfig, Token, TokenKind};
pub use quill_syntax::parser::{parse, parse_source};
