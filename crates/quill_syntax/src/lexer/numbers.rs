//! Number scanning for the Quill scanner
//!
//! Handles signed integers, `0x`/`0o`/`0b` prefixes, fractions, exponents, and the trailing `i` imaginary marker.
//! The scanned text is kept verbatim; no value is computed here.

use super::tokens::TokenKind;
use super::{ScanState, Scanner, is_alphanumeric};
use crate::stream::TokenSink;

const DECIMAL_DIGITS: &str = "0123456789";
const HEX_DIGITS: &str = "0123456789abcdefABCDEF";
// Octal and binary admit `_` as a digit separator.
const OCTAL_DIGITS: &str = "01234567_";
const BINARY_DIGITS: &str = "01_";

impl<'a, S: TokenSink> Scanner<'a, S> {
    pub(super) fn lex_number(&mut self) -> Option<ScanState> {
        if self.cursor.accept("+-") && !self.cursor.peek().is_some_and(|c| c == '.' || is_alphanumeric(c)) {
            // A sign standing alone is punctuation. Anything word-like after it stays in the number scan, so `-x`
            // fails the trailing check below instead of splitting.
            self.emit(TokenKind::Literal)?;
            return Some(ScanState::Dispatch);
        }

        let mut digits = DECIMAL_DIGITS;
        if self.cursor.accept("0") {
            if self.cursor.accept("xX") {
                digits = HEX_DIGITS;
            } else if self.cursor.accept("oO") {
                digits = OCTAL_DIGITS;
            } else if self.cursor.accept("bB") {
                digits = BINARY_DIGITS;
            }
        }
        self.cursor.skip(digits);
        if self.cursor.accept(".") {
            self.cursor.skip(digits);
        }
        if self.cursor.accept("eE") {
            self.cursor.accept("+-");
            self.cursor.skip(DECIMAL_DIGITS);
        }
        self.cursor.accept("i");

        // `1a` must not split into a number and an identifier.
        if self.cursor.peek().is_some_and(is_alphanumeric) {
            self.cursor.forward();
            let span = self.cursor.pending_span();
            let message = format!("bad number syntax: {:?}", self.cursor.pending());
            return self.errorf(message, span);
        }

        self.emit(TokenKind::Number)?;
        Some(ScanState::Dispatch)
    }
}
