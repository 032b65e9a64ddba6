// Public parse entrypoints.
//
// This file is `include!`'d into `crate::parser`.

/// Parse a token sequence into the top-level scope.
///
/// ## Errors
/// Returns the first [`SyntaxError`] met. Lexical error tokens in the sequence surface as errors too.
#[tracing::instrument(skip_all)]
pub fn parse(tokens: impl IntoIterator<Item = Token>) -> Result<Scope, SyntaxError> {
    Parser::new(tokens.into_iter()).parse()
}

/// Scan `source` on a background thread and parse the tokens as they arrive.
///
/// The scanner stops as soon as parsing ends, whether it succeeded or not.
///
/// ## Errors
/// Returns the first lexical or syntax error in `source`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse_source(source: &str) -> Result<Scope, SyntaxError> {
    stream::scoped(source, ScanConfig::default(), |tokens| parse(tokens))
}
