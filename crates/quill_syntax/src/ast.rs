//! Statement tree produced by the Quill parser.
//!
//! The tree is a pure ownership tree: every node is owned by its parent scope and nodes are never shared or
//! cross-referenced. A node is only attached to its parent once its sub-parser has fully populated it, so callers
//! never observe a half-built statement.

use crate::lexer::TokenKind;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Byte range into the scanned source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Empty span positioned at `offset`.
    pub fn point(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.len()).into()
    }
}

/// A statement inside a [`Scope`].
///
/// ## Notes
/// - `Function` is a function declaration; its body is a nested [`Scope`].
/// - Scopes are not statements themselves: the grammar only opens one as a function body, and the root of the
///   tree is a [`Scope`].
/// - Parameters are leaves and only ever appear in [`FunctionDecl::arguments`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Statement {
    Function(FunctionDecl),
}

/// A bracketed block, or the whole source unit: an ordered sequence of child statements.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Scope {
    pub body: Vec<Statement>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterate over the function declarations directly inside this scope.
    pub fn functions(&self) -> impl Iterator<Item = &FunctionDecl> {
        self.body.iter().map(|stmt| match stmt {
            Statement::Function(func) => func,
        })
    }
}

/// `func Name(arg type, ...) { ... }`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FunctionDecl {
    /// Always [`TokenKind::FuncKeyword`] today; kept so future declaration keywords share the node.
    pub keyword: TokenKind,
    pub name: String,
    pub arguments: Vec<Parameter>,
    pub body: Scope,
}

impl FunctionDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            keyword: TokenKind::FuncKeyword,
            name: name.into(),
            arguments: Vec::new(),
            body: Scope::new(),
        }
    }

    pub fn with_argument(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.arguments.push(Parameter::new(name, ty));
        self
    }

    pub fn with_body(mut self, body: Scope) -> Self {
        self.body = body;
        self
    }
}

/// One declared argument: a name and a builtin type name.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Parameter {
    pub name: String,
    pub ty: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

impl Statement {
    /// Keyword that introduced the statement.
    pub fn keyword(&self) -> TokenKind {
        match self {
            Statement::Function(func) => func.keyword,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Statement::Function(func) => &func.name,
        }
    }

    pub fn arguments(&self) -> &[Parameter] {
        match self {
            Statement::Function(func) => &func.arguments,
        }
    }

    /// Child statements of the nested scope.
    pub fn body(&self) -> &[Statement] {
        match self {
            Statement::Function(func) => &func.body.body,
        }
    }
}
