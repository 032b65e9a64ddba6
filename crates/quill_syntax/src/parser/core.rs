// Parser core: the `Parser` type, token access with pushback, and the top-level entrypoint.
//
// This file is `include!`'d into `crate::parser`.

/// Deepest function body nesting accepted before the parse fails.
pub const MAX_DEPTH: usize = 128;

/// Parser state.
///
/// ## Notes
/// - Tokens are pulled lazily from any iterator, so the parser can run against a live scanner thread.
/// - `backlog` holds tokens handed back with [`Parser::push_back`]; they are re-read last-in, first-out, to any depth.
/// - There is no error recovery: the first failure aborts the whole parse.
pub struct Parser<I: Iterator<Item = Token>> {
    tokens: I,
    backlog: Vec<Token>,
    /// End offset of the furthest token read, used to place end-of-input errors.
    last_end: usize,
    /// Function bodies currently open.
    depth: usize,
}

impl<I: Iterator<Item = Token>> Parser<I> {
    /// Create a new parser over a token stream.
    pub fn new(tokens: I) -> Self {
        Self {
            tokens,
            backlog: Vec::new(),
            last_end: 0,
            depth: 0,
        }
    }

    /// Parse the whole stream into the top-level scope.
    ///
    /// ## Errors
    /// Returns the first [`SyntaxError`] met; no partial tree is produced.
    pub fn parse(mut self) -> Result<Scope, SyntaxError> {
        self.parse_scope(ScopeLevel::TopLevel)
    }

    // ========================================================================
    // Token access
    // ========================================================================

    /// Read the next meaningful token, preferring pushed-back tokens.
    ///
    /// Whitespace, line breaks, and comments are skipped.
    pub fn next_token(&mut self) -> Option<Token> {
        loop {
            let token = match self.backlog.pop() {
                Some(token) => token,
                None => self.tokens.next()?,
            };
            if token.is_ignorable() {
                continue;
            }
            self.last_end = self.last_end.max(token.span.end);
            return Some(token);
        }
    }

    /// Return a token to the front of the stream.
    pub fn push_back(&mut self, token: Token) {
        self.backlog.push(token);
    }

    /// Look at the next meaningful token without consuming it.
    pub fn peek_token(&mut self) -> Option<&Token> {
        let token = self.next_token()?;
        self.backlog.push(token);
        self.backlog.last()
    }

    /// Span for an error about `token`, or the end of input if there is none.
    fn span_of(&self, token: Option<&Token>) -> Span {
        match token {
            Some(token) => token.span,
            None => Span::point(self.last_end),
        }
    }
}

/// A token that means "the stream stopped here": real exhaustion, an end marker, or a lexical error.
fn is_cut_off(token: Option<&Token>) -> bool {
    match token {
        None => true,
        Some(token) => matches!(token.kind, TokenKind::EndMarker | TokenKind::Error),
    }
}
