//! Scanner for the Quill language
//!
//! The scanner is a chain of named states. Each state reads runes through the [`Cursor`], then emits a token,
//! discards trivia, or hands over to another state. The driver loop in [`Scanner::run`] steps states until one
//! returns `None`.
//!
//! ## Module Structure
//!
//! - `cursor` - Rune cursor (forward/backward/accept/skip/ignore)
//! - `tokens` - Token types (TokenKind, Token) and word classification
//! - `strings` - Delimited states: strings, backtick quotes, chars, comments
//! - `numbers` - Numeric literal state
//! - `config` - ScanConfig
//!
//! ## Errors
//!
//! Lexical errors are reported in-band: the scanner emits one [`TokenKind::Error`] token whose text is the message
//! and then halts. Nothing follows an error token.

mod config;
pub mod cursor;
mod numbers;
mod strings;
pub mod tokens;

pub use config::ScanConfig;
pub use cursor::Cursor;
pub use tokens::{KEYWORD_BOUNDARY, Token, TokenKind, classify_word};

use crate::ast::Span;
use crate::stream::TokenSink;

// ============================================================================
// SCANNER STATE
// ----------------------------------------------------------------------------
// State diagram (simplified):
//
//              ┌──── space / eol runs (discarded) ────┐
//              │                                      │
// [Dispatch] ──┼── '"' '`' '\'' '//' '/*' → [delimited] ──→ [Dispatch]
//              ├── sign / digit → [Number] ───────────────→ [Dispatch]
//              ├── letter / '_' → [Identifier] ───────────→ [Dispatch]
//              └── bracket / punctuation (emitted inline) → [Dispatch]
//
// Any state may halt: end of input, a lexical error, or a disconnected consumer.
// ============================================================================

/// Named scanner states. Each one consumes some input and picks the next state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Dispatch,
    Space,
    EndOfLine,
    String,
    Quote,
    Char,
    LineComment,
    BlockComment,
    Number,
    Identifier,
}

/// Scanner over one source unit, writing tokens into a [`TokenSink`].
pub struct Scanner<'a, S: TokenSink> {
    cursor: Cursor<'a>,
    sink: S,
    config: ScanConfig,
    /// Open `(` not yet closed
    paren_depth: usize,
    /// Open `{` not yet closed
    brace_depth: usize,
}

impl<'a, S: TokenSink> Scanner<'a, S> {
    /// Create a scanner with the default configuration.
    pub fn new(source: &'a str, sink: S) -> Self {
        Self::with_config(source, sink, ScanConfig::default())
    }

    pub fn with_config(source: &'a str, sink: S, config: ScanConfig) -> Self {
        Self {
            cursor: Cursor::new(source),
            sink,
            config,
            paren_depth: 0,
            brace_depth: 0,
        }
    }

    /// Drive the state chain to completion and give the sink back.
    pub fn run(mut self) -> S {
        let mut state = Some(ScanState::Dispatch);
        while let Some(current) = state {
            tracing::trace!(state = ?current, pos = self.cursor.pos(), "scan");
            state = self.step(current);
        }
        self.sink
    }

    /// Execute one state and return the next one (`None` halts the scanner).
    pub fn step(&mut self, state: ScanState) -> Option<ScanState> {
        match state {
            ScanState::Dispatch => self.lex_dispatch(),
            ScanState::Space => self.lex_trivia(TokenKind::Space, is_space),
            ScanState::EndOfLine => self.lex_trivia(TokenKind::EndOfLine, is_end_of_line),
            ScanState::String => self.lex_delimited(TokenKind::String, "\"", false, true),
            ScanState::Quote => self.lex_delimited(TokenKind::Quote, "`", false, false),
            ScanState::Char => self.lex_char(),
            ScanState::LineComment => self.lex_delimited(TokenKind::Comment, "\n", false, false),
            ScanState::BlockComment => self.lex_delimited(TokenKind::Comment, "*/", true, false),
            ScanState::Number => self.lex_number(),
            ScanState::Identifier => self.lex_identifier(),
        }
    }

    // ========================================================================
    // Emission
    // ========================================================================

    /// Emit the pending span as a token of `kind`.
    ///
    /// Returns `None` if the consumer is gone, so states can bail out with `?`.
    fn emit(&mut self, kind: TokenKind) -> Option<()> {
        let (text, span) = self.cursor.take_pending();
        self.send(Token::new(kind, text, span))
    }

    fn send(&mut self, token: Token) -> Option<()> {
        tracing::trace!(kind = ?token.kind, text = %token.text, "emit");
        match self.sink.send(token) {
            Ok(()) => Some(()),
            Err(err) => {
                tracing::warn!(pos = self.cursor.pos(), "{err}; stopping scanner");
                None
            }
        }
    }

    /// Emit the end marker that closes an overrun delimited scan.
    fn emit_end_marker(&mut self) -> Option<()> {
        let span = Span::point(self.cursor.pos());
        self.send(Token::new(TokenKind::EndMarker, "", span))
    }

    /// Emit an error token carrying `message` and halt.
    fn errorf(&mut self, message: String, span: Span) -> Option<ScanState> {
        tracing::debug!(%message, start = span.start, "lexical error");
        self.send(Token::new(TokenKind::Error, message, span));
        None
    }

    // ========================================================================
    // States
    // ========================================================================

    fn lex_dispatch(&mut self) -> Option<ScanState> {
        let at = self.cursor.pos();
        let Some(r) = self.cursor.forward() else {
            if self.paren_depth != 0 || self.brace_depth != 0 {
                return self.errorf("unclosed bracket".to_string(), Span::point(at));
            }
            tracing::debug!(end = at, "scanner reached end of input");
            return None;
        };

        match r {
            _ if is_end_of_line(r) => {
                self.cursor.backward();
                Some(ScanState::EndOfLine)
            }
            _ if is_space(r) => {
                self.cursor.backward();
                Some(ScanState::Space)
            }

            '"' => {
                self.cursor.ignore();
                Some(ScanState::String)
            }
            '`' => {
                self.cursor.ignore();
                Some(ScanState::Quote)
            }
            '\'' => Some(ScanState::Char),

            '/' => {
                if self.cursor.accept("/") {
                    Some(ScanState::LineComment)
                } else if self.cursor.accept("*") {
                    Some(ScanState::BlockComment)
                } else {
                    self.emit(TokenKind::Literal)?;
                    Some(ScanState::Dispatch)
                }
            }

            '+' | '-' | '0'..='9' => {
                self.cursor.backward();
                Some(ScanState::Number)
            }
            _ if is_alphanumeric(r) => {
                self.cursor.backward();
                Some(ScanState::Identifier)
            }

            '(' => {
                self.paren_depth += 1;
                self.emit(TokenKind::BracketOpen)?;
                Some(ScanState::Dispatch)
            }
            '{' => {
                self.brace_depth += 1;
                self.emit(TokenKind::BracketOpen)?;
                Some(ScanState::Dispatch)
            }
            ')' | '}' => {
                let depth = if r == ')' {
                    &mut self.paren_depth
                } else {
                    &mut self.brace_depth
                };
                if *depth == 0 {
                    let span = self.cursor.pending_span();
                    return self.errorf(format!("unexpected character {}", describe_rune(r)), span);
                }
                *depth -= 1;
                self.emit(TokenKind::BracketClose)?;
                Some(ScanState::Dispatch)
            }

            _ if r.is_ascii_graphic() => {
                self.emit(TokenKind::Literal)?;
                Some(ScanState::Dispatch)
            }

            _ => {
                let span = self.cursor.pending_span();
                self.errorf(format!("unrecognized character {}", describe_rune(r)), span)
            }
        }
    }

    /// Consume a run of whitespace or line breaks; discard it unless trivia is kept.
    fn lex_trivia(&mut self, kind: TokenKind, matches: fn(char) -> bool) -> Option<ScanState> {
        self.cursor.skip_while(matches);
        if self.config.keep_trivia {
            self.emit(kind)?;
        } else {
            self.cursor.ignore();
        }
        Some(ScanState::Dispatch)
    }

    /// Identifiers, including dotted names like `fmt.Println`, and the reserved words.
    fn lex_identifier(&mut self) -> Option<ScanState> {
        self.cursor.skip_while(|c| is_alphanumeric(c) || c == '.');

        if !self.at_terminator() {
            let at = self.cursor.pos();
            let r = self.cursor.peek().unwrap_or('\0');
            let span = Span::new(at, at + r.len_utf8());
            return self.errorf(format!("unexpected character {}", describe_rune(r)), span);
        }

        let kind = classify_word(self.cursor.pending());
        self.emit(kind)?;
        Some(ScanState::Dispatch)
    }

    /// Whether the next rune may legally follow a word.
    fn at_terminator(&mut self) -> bool {
        match self.cursor.peek() {
            None => true,
            Some(r) if is_space(r) || is_end_of_line(r) => true,
            Some('.' | ',' | '|' | ':' | ')' | '(') => true,
            Some(_) => false,
        }
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Spaces and tabs.
fn is_space(r: char) -> bool {
    r == ' ' || r == '\t'
}

fn is_end_of_line(r: char) -> bool {
    r == '\r' || r == '\n'
}

/// Letters, decimal digits, and underscore.
///
/// Other numeric runes such as `½` or `Ⅻ` do not continue a word.
fn is_alphanumeric(r: char) -> bool {
    r == '_' || r.is_ascii_digit() || (r.is_alphabetic() && !r.is_numeric())
}

/// `U+0029 ')'` style rendering used in error messages.
fn describe_rune(r: char) -> String {
    format!("U+{:04X} {:?}", r as u32, r)
}

/// Scan a whole source string into a token list.
///
/// The list ends at the first error token, if any.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Vec<Token> {
    lex_with(source, ScanConfig::default())
}

/// Like [`lex`], with explicit options.
pub fn lex_with(source: &str, config: ScanConfig) -> Vec<Token> {
    Scanner::with_config(source, Vec::new(), config).run()
}

// ============================================================================
// TESTS
// ============================================================================
