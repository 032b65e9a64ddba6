//! Delimited states for the Quill scanner
//!
//! Handles double-quoted strings, backtick quotes, character constants, and both comment forms.

use super::tokens::TokenKind;
use super::{ScanState, Scanner};
use crate::stream::TokenSink;

impl<'a, S: TokenSink> Scanner<'a, S> {
    /// Scan up to `delim`, emitting everything before it as `kind`.
    ///
    /// - `include_delim`: the closing delimiter is part of the token text (block comments); otherwise it is skipped.
    /// - `escapes`: a `\` hides the rune after it from the delimiter match (strings).
    ///
    /// Running out of input before the delimiter emits whatever was scanned, then an end marker, and halts.
    pub(super) fn lex_delimited(
        &mut self,
        kind: TokenKind,
        delim: &str,
        include_delim: bool,
        escapes: bool,
    ) -> Option<ScanState> {
        loop {
            if self.cursor.rest().starts_with(delim) {
                if include_delim {
                    self.cursor.advance_bytes(delim.len());
                }
                self.emit(kind)?;
                if !include_delim {
                    self.cursor.advance_bytes(delim.len());
                    self.cursor.ignore();
                }
                return Some(ScanState::Dispatch);
            }
            match self.cursor.forward() {
                None => break,
                Some('\\') if escapes => {
                    self.cursor.forward();
                }
                Some(_) => {}
            }
        }

        tracing::debug!(kind = ?kind, delim, "input ended inside delimited token");
        if self.cursor.has_pending() {
            self.emit(kind)?;
        }
        self.emit_end_marker()?;
        None
    }

    /// Character constant; the token keeps both quotes.
    pub(super) fn lex_char(&mut self) -> Option<ScanState> {
        loop {
            match self.cursor.forward() {
                Some('\\') => {
                    if matches!(self.cursor.forward(), None | Some('\n')) {
                        break;
                    }
                }
                None | Some('\n') => break,
                Some('\'') => {
                    self.emit(TokenKind::Char)?;
                    return Some(ScanState::Dispatch);
                }
                Some(_) => {}
            }
        }
        let span = self.cursor.pending_span();
        self.errorf("unterminated character constant".to_string(), span)
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::Span;
    use crate::lexer::{Token, TokenKind, lex};

    fn pairs(tokens: &[Token]) -> Vec<(TokenKind, &str)> {
        tokens.iter().map(|t| (t.kind, t.text.as_str())).collect()
    }

    #[test]
    fn test_string_strips_quotes() {
        let tokens = lex(r#"MySub("hi there")"#);
        assert_eq!(
            pairs(&tokens),
            vec![
                (TokenKind::Identifier, "MySub"),
                (TokenKind::BracketOpen, "("),
                (TokenKind::String, "hi there"),
                (TokenKind::BracketClose, ")"),
            ]
        );
        assert_eq!(tokens[2].span, Span::new(7, 15));
    }

    #[test]
    fn test_string_honours_escaped_quote() {
        let tokens = lex(r#""say \"hi\"" x"#);
        assert_eq!(
            pairs(&tokens),
            vec![(TokenKind::String, r#"say \"hi\""#), (TokenKind::Identifier, "x")]
        );
    }

    #[test]
    fn test_empty_string_still_emits() {
        assert_eq!(pairs(&lex(r#""""#)), vec![(TokenKind::String, "")]);
    }

    #[test]
    fn test_backtick_quote_is_raw() {
        let tokens = lex(r"`C:\path\` y");
        assert_eq!(
            pairs(&tokens),
            vec![(TokenKind::Quote, r"C:\path\"), (TokenKind::Identifier, "y")]
        );
    }

    #[test]
    fn test_unterminated_string_emits_end_marker() {
        let tokens = lex(r#"x "abc"#);
        assert_eq!(
            pairs(&tokens),
            vec![
                (TokenKind::Identifier, "x"),
                (TokenKind::String, "abc"),
                (TokenKind::EndMarker, ""),
            ]
        );
    }

    #[test]
    fn test_unterminated_empty_string_emits_only_end_marker() {
        assert_eq!(pairs(&lex("\"")), vec![(TokenKind::EndMarker, "")]);
    }

    #[test]
    fn test_end_marker_skips_bracket_check() {
        // The scanner halts at the overrun; the open `(` is never reported.
        let kinds: Vec<_> = lex("( \"abc").into_iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![TokenKind::BracketOpen, TokenKind::String, TokenKind::EndMarker]);
    }

    #[test]
    fn test_char_keeps_quotes() {
        assert_eq!(pairs(&lex(r"'a' '\''")), vec![(TokenKind::Char, "'a'"), (TokenKind::Char, r"'\''")]);
    }

    #[test]
    fn test_unterminated_char() {
        for source in ["'a", "'a\n'", "'\\", "'\\\n'"] {
            let tokens = lex(source);
            assert_eq!(
                pairs(&tokens),
                vec![(TokenKind::Error, "unterminated character constant")],
                "source {:?}",
                source
            );
        }
    }

    #[test]
    fn test_line_comment_excludes_newline() {
        let tokens = lex("// hello\nx");
        assert_eq!(
            pairs(&tokens),
            vec![(TokenKind::Comment, "// hello"), (TokenKind::Identifier, "x")]
        );
    }

    #[test]
    fn test_line_comment_at_end_of_input() {
        let tokens = lex("x // trailing");
        assert_eq!(
            pairs(&tokens),
            vec![
                (TokenKind::Identifier, "x"),
                (TokenKind::Comment, "// trailing"),
                (TokenKind::EndMarker, ""),
            ]
        );
    }

    #[test]
    fn test_block_comment_includes_delimiter() {
        let tokens = lex("a /* b\n c */ d");
        assert_eq!(
            pairs(&tokens),
            vec![
                (TokenKind::Identifier, "a"),
                (TokenKind::Comment, "/* b\n c */"),
                (TokenKind::Identifier, "d"),
            ]
        );
    }
}
