#![no_main]

use libfuzzer_sys::fuzz_target;
use quill::{lexer, parser};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Drained scan, then the same source through the live scanner thread
        let tokens = lexer::lex(s);
        let drained = parser::parse(tokens);
        let streamed = parser::parse_source(s);
        assert_eq!(drained, streamed);
    }
});
