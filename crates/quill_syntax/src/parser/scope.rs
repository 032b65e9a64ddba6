// Scope parsing and statement dispatch.
//
// This file is `include!`'d into `crate::parser`.

/// Where a scope sits, which decides how it may end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScopeLevel {
    /// The whole source unit; ends when the stream closes.
    TopLevel,
    /// A function body; ends at its `}`.
    Body,
}

/// Sub-parser for one statement kind. Returns the finished statement.
type StatementParser<I> = fn(&mut Parser<I>) -> Result<Statement, SyntaxError>;

impl<I: Iterator<Item = Token>> Parser<I> {
    /// Registered sub-parser for statements led by `kind`.
    fn statement_parser(kind: TokenKind) -> Option<StatementParser<I>> {
        match kind {
            TokenKind::FuncKeyword => Some(Self::parse_function_statement),
            _ => None,
        }
    }

    /// Parse statements until the scope ends.
    ///
    /// - The stream closing ends the top-level scope; inside a body it is [`SyntaxError::UnexpectedEnd`].
    /// - An end marker ends the scope as-is.
    /// - A `}` ends a body scope and is left for the caller to consume.
    fn parse_scope(&mut self, level: ScopeLevel) -> Result<Scope, SyntaxError> {
        let mut scope = Scope::new();
        loop {
            let Some(token) = self.next_token() else {
                return match level {
                    ScopeLevel::TopLevel => {
                        tracing::debug!(statements = scope.body.len(), "top-level scope complete");
                        Ok(scope)
                    }
                    ScopeLevel::Body => Err(SyntaxError::UnexpectedEnd {
                        span: self.span_of(None),
                    }),
                };
            };

            match token.kind {
                TokenKind::EndMarker => {
                    tracing::debug!(?level, statements = scope.body.len(), "scope ended by end marker");
                    return Ok(scope);
                }
                TokenKind::Error => return Err(SyntaxError::lexical(&token)),
                TokenKind::BracketClose if level == ScopeLevel::Body && token.is_close(Bracket::Brace) => {
                    self.push_back(token);
                    tracing::debug!(statements = scope.body.len(), "body scope complete");
                    return Ok(scope);
                }
                kind => {
                    let Some(sub_parser) = Self::statement_parser(kind) else {
                        return Err(SyntaxError::UnsupportedStatement {
                            found: describe(Some(&token)),
                            span: token.span,
                        });
                    };
                    self.push_back(token);
                    let statement = sub_parser(self)?;
                    scope.body.push(statement);
                }
            }
        }
    }
}
