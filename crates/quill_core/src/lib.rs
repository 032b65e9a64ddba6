//! Provide the canonical language vocabulary for the Quill syntax frontend and tooling.
//!
//! This crate is intentionally small and dependency-free. The scanner consults it to classify words, and tooling can
//! use it to list reserved spellings without pulling in the lexer.
//!
//! ## Notes
//!
//! - This is a "vocabulary" crate: **no IO**, no mutable global state, and no syntax types.

pub mod lang;
