//! Diagnostics for the Quill syntax frontend.
//!
//! Lexical errors travel in-band as error tokens; the parser turns them (and its own failures) into a
//! [`SyntaxError`]. Every variant carries the span it points at, so a `miette::Report` can render it against the
//! source.

use miette::Diagnostic;
use thiserror::Error;

use crate::ast::Span;
use crate::lexer::{Token, TokenKind};

/// The first failure met while turning source text into a statement tree.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum SyntaxError {
    #[error("expected keyword `func`, found {found}")]
    #[diagnostic(code(quill::syntax::expected_keyword))]
    ExpectedKeyword {
        found: String,
        #[label("expected `func` here")]
        span: Span,
    },

    #[error("expected identifier, found {found}")]
    #[diagnostic(code(quill::syntax::expected_identifier))]
    ExpectedIdentifier {
        found: String,
        #[label("expected a name here")]
        span: Span,
    },

    #[error("expected opening bracket `{expected}`, found {found}")]
    #[diagnostic(code(quill::syntax::expected_opening_bracket))]
    ExpectedOpeningBracket {
        expected: &'static str,
        found: String,
        #[label("expected `{expected}`")]
        span: Span,
    },

    #[error("expected closing bracket `{expected}`, found {found}")]
    #[diagnostic(code(quill::syntax::expected_closing_bracket))]
    ExpectedClosingBracket {
        expected: &'static str,
        found: String,
        #[label("expected `{expected}`")]
        span: Span,
    },

    #[error("expected arguments, found {found}")]
    #[diagnostic(
        code(quill::syntax::expected_arguments),
        help("the argument list ends with `)`")
    )]
    ExpectedArguments {
        found: String,
        #[label("argument list cut off here")]
        span: Span,
    },

    #[error("expected argument name, found {found}")]
    #[diagnostic(code(quill::syntax::expected_argument))]
    ExpectedArgument {
        found: String,
        #[label("expected an argument name")]
        span: Span,
    },

    #[error("expected type, found {found}")]
    #[diagnostic(
        code(quill::syntax::expected_type),
        help("argument types are builtin type names such as `int16` or `string`")
    )]
    ExpectedType {
        found: String,
        #[label("expected a type name")]
        span: Span,
    },

    #[error("expected `,` or `)` after argument, found {found}")]
    #[diagnostic(code(quill::syntax::expected_delimiter))]
    ExpectedDelimiter {
        found: String,
        #[label("expected a delimiter")]
        span: Span,
    },

    #[error("unexpected end of input")]
    #[diagnostic(code(quill::syntax::unexpected_end))]
    UnexpectedEnd {
        #[label("input ends here")]
        span: Span,
    },

    #[error("unsupported statement starting with {found}")]
    #[diagnostic(
        code(quill::syntax::unsupported_statement),
        help("only `func` declarations are supported")
    )]
    UnsupportedStatement {
        found: String,
        #[label("statement starts here")]
        span: Span,
    },

    #[error("function bodies nested deeper than {limit} levels")]
    #[diagnostic(code(quill::syntax::nesting_too_deep))]
    NestingTooDeep {
        limit: usize,
        #[label("this body is one level too deep")]
        span: Span,
    },

    #[error("{message}")]
    #[diagnostic(code(quill::syntax::lexical))]
    Lexical {
        message: String,
        #[label("here")]
        span: Span,
    },
}

impl SyntaxError {
    /// Location the error points at.
    pub fn span(&self) -> Span {
        match self {
            SyntaxError::ExpectedKeyword { span, .. }
            | SyntaxError::ExpectedIdentifier { span, .. }
            | SyntaxError::ExpectedOpeningBracket { span, .. }
            | SyntaxError::ExpectedClosingBracket { span, .. }
            | SyntaxError::ExpectedArguments { span, .. }
            | SyntaxError::ExpectedArgument { span, .. }
            | SyntaxError::ExpectedType { span, .. }
            | SyntaxError::ExpectedDelimiter { span, .. }
            | SyntaxError::UnexpectedEnd { span }
            | SyntaxError::UnsupportedStatement { span, .. }
            | SyntaxError::NestingTooDeep { span, .. }
            | SyntaxError::Lexical { span, .. } => *span,
        }
    }

    /// Wrap a lexical error token.
    pub fn lexical(token: &Token) -> Self {
        SyntaxError::Lexical {
            message: token.text.clone(),
            span: token.span,
        }
    }
}

/// Describe what the parser found, for the `found` field of an error.
pub fn describe(token: Option<&Token>) -> String {
    match token {
        None => "end of input".to_string(),
        Some(tok) if tok.kind == TokenKind::Error => format!("lexical error: {}", tok.text),
        Some(tok) if tok.kind == TokenKind::EndMarker => "end of input".to_string(),
        Some(tok) => format!("{} `{}`", tok.kind.describe(), tok.text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = SyntaxError::ExpectedType {
            found: "identifier `int`".to_string(),
            span: Span::new(10, 13),
        };
        assert_eq!(err.to_string(), "expected type, found identifier `int`");
        assert_eq!(err.span(), Span::new(10, 13));

        let err = SyntaxError::ExpectedClosingBracket {
            expected: "}",
            found: "end of input".to_string(),
            span: Span::point(4),
        };
        assert_eq!(err.to_string(), "expected closing bracket `}`, found end of input");
    }

    #[test]
    fn test_diagnostic_code() {
        let err = SyntaxError::UnexpectedEnd { span: Span::point(0) };
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("quill::syntax::unexpected_end"));
    }

    #[test]
    fn test_describe() {
        let tok = Token::new(TokenKind::Identifier, "y", Span::new(0, 1));
        assert_eq!(describe(Some(&tok)), "identifier `y`");
        assert_eq!(describe(None), "end of input");
        let err = Token::new(TokenKind::Error, "unclosed bracket", Span::point(7));
        assert_eq!(describe(Some(&err)), "lexical error: unclosed bracket");
    }

    #[test]
    fn test_lexical_wraps_token() {
        let tok = Token::new(TokenKind::Error, "unclosed bracket", Span::point(7));
        let err = SyntaxError::lexical(&tok);
        assert_eq!(err.to_string(), "unclosed bracket");
        assert_eq!(err.span(), Span::point(7));
    }
}
