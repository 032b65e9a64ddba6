// Function declaration parsing, as a continuation chain.
//
// This file is `include!`'d into `crate::parser`.

/// Steps of the function-declaration sub-parser, in source order:
///
/// `func` → name → `(` → { argument type [`,`] } → `)` → `{` body → `}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclState {
    Keyword,
    Name,
    OpenParams,
    Parameter,
    Delimiter,
    CloseParams,
    Body,
    CloseBody,
}

impl<I: Iterator<Item = Token>> Parser<I> {
    /// Drive the declaration chain from `Keyword` until a step returns no successor.
    ///
    /// The declaration is only wrapped into a [`Statement`] once every step has succeeded.
    fn parse_function_statement(&mut self) -> Result<Statement, SyntaxError> {
        let mut decl = FunctionDecl::new(String::new());
        let mut state = Some(DeclState::Keyword);
        while let Some(current) = state {
            tracing::trace!(state = ?current, "function declaration");
            state = self.step_function(current, &mut decl)?;
        }
        Ok(Statement::Function(decl))
    }

    /// Run one step of the declaration chain against `decl`, returning the next step.
    ///
    /// ## Errors
    /// Each step reports the construct it expected. Where the stream stops early (exhaustion, an end marker, or a
    /// lexical error) inside the argument list, the error is [`SyntaxError::ExpectedArguments`]. A body opened
    /// past [`MAX_DEPTH`] levels is [`SyntaxError::NestingTooDeep`].
    pub fn step_function(
        &mut self,
        state: DeclState,
        decl: &mut FunctionDecl,
    ) -> Result<Option<DeclState>, SyntaxError> {
        let token = self.next_token();
        match state {
            DeclState::Keyword => match token {
                Some(tok) if tok.kind == TokenKind::FuncKeyword => {
                    decl.keyword = tok.kind;
                    Ok(Some(DeclState::Name))
                }
                other => Err(SyntaxError::ExpectedKeyword {
                    found: describe(other.as_ref()),
                    span: self.span_of(other.as_ref()),
                }),
            },

            DeclState::Name => match token {
                Some(tok) if tok.kind == TokenKind::Identifier => {
                    decl.name = tok.text;
                    Ok(Some(DeclState::OpenParams))
                }
                other => Err(SyntaxError::ExpectedIdentifier {
                    found: describe(other.as_ref()),
                    span: self.span_of(other.as_ref()),
                }),
            },

            DeclState::OpenParams => match token {
                Some(tok) if tok.is_open(Bracket::Paren) => Ok(Some(DeclState::Parameter)),
                other => Err(self.expected_open(Bracket::Paren, other.as_ref())),
            },

            DeclState::Parameter => match token {
                Some(tok) if tok.is_close(Bracket::Paren) => {
                    self.push_back(tok);
                    Ok(Some(DeclState::CloseParams))
                }
                Some(tok) if tok.kind == TokenKind::Identifier => {
                    let ty = self.next_token();
                    match ty {
                        Some(ty) if ty.kind == TokenKind::TypeKeyword => {
                            decl.arguments.push(Parameter::new(tok.text, ty.text));
                            Ok(Some(DeclState::Delimiter))
                        }
                        other if is_cut_off(other.as_ref()) => Err(self.cut_off_arguments(other.as_ref())),
                        other => Err(SyntaxError::ExpectedType {
                            found: describe(other.as_ref()),
                            span: self.span_of(other.as_ref()),
                        }),
                    }
                }
                other if is_cut_off(other.as_ref()) => Err(self.cut_off_arguments(other.as_ref())),
                other => Err(SyntaxError::ExpectedArgument {
                    found: describe(other.as_ref()),
                    span: self.span_of(other.as_ref()),
                }),
            },

            DeclState::Delimiter => match token {
                Some(tok) if tok.is_literal(",") => Ok(Some(DeclState::Parameter)),
                Some(tok) if tok.is_close(Bracket::Paren) => {
                    self.push_back(tok);
                    Ok(Some(DeclState::CloseParams))
                }
                other if is_cut_off(other.as_ref()) => Err(self.cut_off_arguments(other.as_ref())),
                other => Err(SyntaxError::ExpectedDelimiter {
                    found: describe(other.as_ref()),
                    span: self.span_of(other.as_ref()),
                }),
            },

            DeclState::CloseParams => match token {
                Some(tok) if tok.is_close(Bracket::Paren) => Ok(Some(DeclState::Body)),
                other => Err(self.expected_close(Bracket::Paren, other.as_ref())),
            },

            DeclState::Body => match token {
                Some(tok) if tok.is_open(Bracket::Brace) => {
                    if self.depth >= MAX_DEPTH {
                        return Err(SyntaxError::NestingTooDeep {
                            limit: MAX_DEPTH,
                            span: tok.span,
                        });
                    }
                    self.depth += 1;
                    let body = self.parse_scope(ScopeLevel::Body);
                    self.depth -= 1;
                    decl.body = body?;
                    Ok(Some(DeclState::CloseBody))
                }
                other => Err(self.expected_open(Bracket::Brace, other.as_ref())),
            },

            DeclState::CloseBody => match token {
                Some(tok) if tok.is_close(Bracket::Brace) => Ok(None),
                other => Err(self.expected_close(Bracket::Brace, other.as_ref())),
            },
        }
    }

    fn expected_open(&self, bracket: Bracket, found: Option<&Token>) -> SyntaxError {
        SyntaxError::ExpectedOpeningBracket {
            expected: bracket.open(),
            found: describe(found),
            span: self.span_of(found),
        }
    }

    fn expected_close(&self, bracket: Bracket, found: Option<&Token>) -> SyntaxError {
        SyntaxError::ExpectedClosingBracket {
            expected: bracket.close(),
            found: describe(found),
            span: self.span_of(found),
        }
    }

    fn cut_off_arguments(&self, found: Option<&Token>) -> SyntaxError {
        SyntaxError::ExpectedArguments {
            found: describe(found),
            span: self.span_of(found),
        }
    }
}
