//! `lex`, `parse` and `check`
//!
//! Syntax errors are rendered with miette against the file's source and returned as the command's error.

use std::fs;

use miette::{NamedSource, Report};
use quill_syntax::ast::Scope;
use quill_syntax::diagnostics::SyntaxError;
use quill_syntax::lexer::{self, ScanConfig, Token, TokenKind};
use quill_syntax::parser;

use super::{CliError, CliResult, ExitCode};

/// Largest source file accepted (100 MB).
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read a source file with size validation.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be accessed
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(file_path: &str) -> CliResult<String> {
    // Check file size before reading
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path, e)))
}

/// Render a syntax error against its source, with the offending span labelled.
pub fn format_error(file_path: &str, source: &str, err: SyntaxError) -> String {
    let report = Report::new(err).with_source_code(NamedSource::new(file_path, source.to_string()));
    format!("{:?}", report)
}

fn syntax_failure(file_path: &str, source: &str, err: SyntaxError) -> CliError {
    tracing::debug!(file = file_path, error = %err, "syntax error");
    CliError::failure(format_error(file_path, source, err).trim_end())
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> CliResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| CliError::failure(format!("Error serializing output: {}", e)))
}

// ============================================================================
// Commands
// ============================================================================

/// Tokenize a file and print one token per line.
///
/// A trailing error token is printed like any other, then reported as a diagnostic.
pub fn lex_file(file_path: &str, trivia: bool, json: bool) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let tokens = lex_tokens(&source, trivia);

    if json {
        println!("{}", to_json(&tokens)?);
    } else {
        for tok in &tokens {
            println!("{}", tok);
        }
    }

    match tokens.last() {
        Some(tok) if tok.kind == TokenKind::Error => Err(syntax_failure(file_path, &source, SyntaxError::lexical(tok))),
        _ => Ok(ExitCode::SUCCESS),
    }
}

/// Parse a file and print the statement tree.
pub fn parse_file(file_path: &str, json: bool) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let tree = parse_tree(file_path, &source)?;

    if json {
        println!("{}", to_json(&tree)?);
    } else {
        println!("{:#?}", tree);
    }
    Ok(ExitCode::SUCCESS)
}

/// Check that a file parses.
pub fn check_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let tree = parse_tree(file_path, &source)?;
    println!("✓ {} parsed: {} declaration(s)", file_path, tree.functions().count());
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// Helpers
// ============================================================================

/// Scan `source` up front; `trivia` keeps whitespace and end-of-line tokens.
pub fn lex_tokens(source: &str, trivia: bool) -> Vec<Token> {
    lexer::lex_with(source, ScanConfig::new().with_trivia(trivia))
}

/// Scan and parse concurrently, rendering any failure against the source.
pub fn parse_tree(file_path: &str, source: &str) -> CliResult<Scope> {
    parser::parse_source(source).map_err(|err| syntax_failure(file_path, source, err))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_lex_tokens_trivia_toggle() {
        let plain = lex_tokens("func F", false);
        assert_eq!(plain.len(), 2);
        let kept = lex_tokens("func F", true);
        assert_eq!(kept.iter().filter(|t| t.kind == TokenKind::Space).count(), 1);
    }

    #[test]
    fn test_parse_tree_renders_diagnostic() {
        let err = parse_tree("bad.ql", "func Add(x int16 y int16) { }").unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("expected `,` or `)` after argument"), "{}", err.message);
        assert!(err.message.contains("bad.ql"), "{}", err.message);
    }

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source("definitely/not/here.ql").unwrap_err();
        assert!(err.message.starts_with("Cannot access file"));
    }

    #[test]
    fn test_tree_serializes_to_json() {
        let tree = parse_tree("ok.ql", "func Add(x int16) { }").unwrap();
        let json = to_json(&tree).unwrap();
        assert!(json.contains("\"name\": \"Add\""), "{json}");
        assert!(json.contains("\"ty\": \"int16\""), "{json}");
    }
}
