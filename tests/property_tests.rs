//! Property-based tests for the Quill frontend
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use proptest::prelude::*;

use quill::ast::Parameter;
use quill::keywords::{self, KeywordCategory};
use quill::lexer::{self, Token, TokenKind};
use quill::parser::{self, Parser};
use quill::ScanConfig;

// =============================================================================
// Strategies
// =============================================================================

// Strategy for argument names that the scanner will classify as identifiers
fn ident_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,6}".prop_filter("Not a reserved word", |s| {
        keywords::from_str(s).is_none() && s != "true" && s != "false"
    })
}

fn type_strategy() -> impl Strategy<Value = &'static str> {
    let types: Vec<&'static str> = keywords::spellings(KeywordCategory::Type).collect();
    proptest::sample::select(types)
}

fn params_strategy() -> impl Strategy<Value = Vec<(String, &'static str)>> {
    proptest::collection::vec((ident_strategy(), type_strategy()), 0..5)
}

// Whitespace and comments that may separate any two tokens
fn trivia_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(" ".to_string()),
        Just("\n".to_string()),
        Just("\t \r\n  ".to_string()),
        Just(" /* note */ ".to_string()),
        Just(" // note\n".to_string()),
    ]
}

fn render_declaration(name: &str, params: &[(String, &'static str)], sep: &str) -> String {
    let mut parts = vec!["func".to_string(), name.to_string(), "(".to_string()];
    for (i, (arg, ty)) in params.iter().enumerate() {
        if i > 0 {
            parts.push(",".to_string());
        }
        parts.push(arg.clone());
        parts.push(ty.to_string());
    }
    parts.extend([")".to_string(), "{".to_string(), "}".to_string()]);
    parts.join(sep)
}

/// Independent paren/brace counters, matching how the scanner balances brackets.
fn brackets_balanced(source: &str) -> bool {
    let (mut parens, mut braces) = (0i64, 0i64);
    for c in source.chars() {
        match c {
            '(' => parens += 1,
            ')' => parens -= 1,
            '{' => braces += 1,
            '}' => braces -= 1,
            _ => {}
        }
        if parens < 0 || braces < 0 {
            return false;
        }
    }
    parens == 0 && braces == 0
}

proptest! {
    /// Property: generated declarations parse into exactly the declared parameters
    #[test]
    fn generated_declarations_parse(name in "[A-Z][A-Za-z0-9]{0,8}", params in params_strategy()) {
        let source = render_declaration(&name, &params, " ");
        let tree = parser::parse_source(&source).unwrap();
        prop_assert_eq!(tree.body.len(), 1);
        let func = tree.functions().next().unwrap();
        prop_assert_eq!(&func.name, &name);
        let expected: Vec<Parameter> = params.iter().map(|(a, t)| Parameter::new(a.clone(), *t)).collect();
        prop_assert_eq!(&func.arguments, &expected);
    }

    /// Property: whitespace and comments between tokens never change the tree
    #[test]
    fn trivia_does_not_change_the_tree(
        name in "[A-Z][a-z]{0,6}",
        params in params_strategy(),
        sep in trivia_strategy(),
    ) {
        let compact = render_declaration(&name, &params, " ");
        let spaced = render_declaration(&name, &params, &sep);
        prop_assert_eq!(parser::parse_source(&compact), parser::parse_source(&spaced));
    }

    /// Property: the scanner reports an unbalanced bracket sequence, and only that
    #[test]
    fn bracket_balance_is_enforced(source in "[(){} ]{0,40}") {
        let tokens = lexer::lex(&source);
        let failed = tokens.last().is_some_and(|t| t.kind == TokenKind::Error);
        prop_assert_eq!(failed, !brackets_balanced(&source));
    }

    /// Property: with trivia kept, token texts reassemble the source exactly
    #[test]
    fn trivia_scan_is_lossless(source in "[a-z ,.:|\n\t]{0,40}") {
        let tokens = lexer::lex_with(&source, ScanConfig::new().with_trivia(true));
        prop_assert!(tokens.iter().all(|t| t.kind != TokenKind::Error));
        let rebuilt: String = tokens.iter().map(|t| t.text.as_str()).collect();
        prop_assert_eq!(rebuilt, source);
    }

    /// Property: re-scanning the emitted texts, space separated, yields the same kinds
    #[test]
    fn rescanning_emitted_text_is_idempotent(
        name in "[A-Z][a-z]{0,6}",
        params in params_strategy(),
        sep in trivia_strategy(),
    ) {
        let source = render_declaration(&name, &params, &sep);
        let first: Vec<Token> = lexer::lex(&source)
            .into_iter()
            .filter(|t| t.kind != TokenKind::Comment)
            .collect();
        let rebuilt = first.iter().map(|t| t.text.as_str()).collect::<Vec<_>>().join(" ");
        let kinds = |tokens: &[Token]| tokens.iter().map(|t| t.kind).collect::<Vec<_>>();
        prop_assert_eq!(kinds(&lexer::lex(&rebuilt)), kinds(&first));
    }

    /// Property: pushing back k tokens (in reverse) replays them before the rest
    #[test]
    fn pushback_is_transparent(words in proptest::collection::vec(ident_strategy(), 1..12), k in 0usize..12) {
        let source = words.join(" ");
        let scanned = lexer::lex(&source);
        let k = k.min(scanned.len());

        let mut parser = Parser::new(scanned.clone().into_iter());
        let taken: Vec<Token> = (0..k).map(|_| parser.next_token().unwrap()).collect();
        for tok in taken.into_iter().rev() {
            parser.push_back(tok);
        }
        let replayed: Vec<Token> = std::iter::from_fn(|| parser.next_token()).collect();
        prop_assert_eq!(replayed, scanned);
    }

    /// Property: the live pipeline agrees with parsing a drained token list, on any input
    #[test]
    fn streamed_parse_matches_drained(source in "\\PC{0,60}") {
        let drained = parser::parse(lexer::lex(&source));
        prop_assert_eq!(parser::parse_source(&source), drained);
    }
}
