//! Rune cursor underlying the scanner.
//!
//! The cursor walks UTF-8 input one `char` at a time and remembers two positions: `start`, where the pending
//! (not yet emitted) span begins, and `pos`, the current read position. Running past the end of the input is not
//! an error; `forward` keeps returning `None`.

use crate::ast::Span;

#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
    start: usize,
    /// Byte width of the last rune returned by `forward` (0 after end of input or an undo).
    width: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
            width: 0,
        }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Unread input from the current position.
    pub fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Span between the emit-start marker and the current position.
    pub fn pending(&self) -> &'a str {
        &self.input[self.start..self.pos]
    }

    pub fn pending_span(&self) -> Span {
        Span::new(self.start, self.pos)
    }

    pub fn has_pending(&self) -> bool {
        self.pos > self.start
    }

    /// Consume and return the next rune, or `None` at end of input.
    pub fn forward(&mut self) -> Option<char> {
        match self.rest().chars().next() {
            Some(c) => {
                self.width = c.len_utf8();
                self.pos += self.width;
                Some(c)
            }
            None => {
                self.width = 0;
                None
            }
        }
    }

    /// Undo the last `forward`. Only one step of undo is kept.
    pub fn backward(&mut self) {
        self.pos -= self.width;
        self.width = 0;
    }

    pub fn peek(&mut self) -> Option<char> {
        let r = self.forward();
        self.backward();
        r
    }

    /// Consume one rune if it is in `valid`.
    pub fn accept(&mut self, valid: &str) -> bool {
        match self.forward() {
            Some(c) if valid.contains(c) => true,
            _ => {
                self.backward();
                false
            }
        }
    }

    /// Consume a maximal run of runes in `valid`.
    pub fn skip(&mut self, valid: &str) {
        self.skip_while(|c| valid.contains(c));
    }

    /// Consume a maximal run of runes matching `predicate`, returning how many were consumed.
    pub fn skip_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> usize {
        let mut count = 0;
        while let Some(c) = self.forward() {
            if !predicate(c) {
                self.backward();
                break;
            }
            count += 1;
        }
        count
    }

    /// Advance past `n` bytes that are known to sit on a char boundary (a matched delimiter).
    pub fn advance_bytes(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.input.len());
        self.width = 0;
    }

    /// Discard the pending span without emitting it.
    pub fn ignore(&mut self) {
        self.start = self.pos;
    }

    /// Return the pending span and move the emit-start marker to the current position.
    pub fn take_pending(&mut self) -> (&'a str, Span) {
        let text = self.pending();
        let span = self.pending_span();
        self.ignore();
        (text, span)
    }
}
