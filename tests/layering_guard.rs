//! Layering guardrails for the workspace crates.
//!
//! - `quill_core` is a vocabulary crate and must stay dependency-free.
//! - `quill_syntax` may depend on `quill_core` but never on the `quill` tool crate above it.

/// Dependency names listed in a manifest's `[dependencies]` table.
fn main_dependencies(manifest: &str) -> Vec<String> {
    let mut in_dependencies = false;
    let mut names = Vec::new();

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Strip inline comments for robustness.
        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        if let Some((name, _)) = line_no_comment.split_once('=') {
            names.push(name.trim().to_string());
        }
    }
    names
}

#[test]
fn core_crate_has_no_dependencies() {
    let manifest = include_str!("../crates/quill_core/Cargo.toml");
    let deps = main_dependencies(manifest);
    assert!(deps.is_empty(), "`quill_core` must not have [dependencies], found {deps:?}");
}

#[test]
fn syntax_crate_does_not_depend_on_tool_crate() {
    let manifest = include_str!("../crates/quill_syntax/Cargo.toml");
    let deps = main_dependencies(manifest);
    assert!(deps.iter().any(|d| d == "quill_core"), "{deps:?}");
    assert!(!deps.iter().any(|d| d == "quill"), "`quill_syntax` must not depend on `quill`");
}

#[test]
fn tool_crate_reaches_frontend_through_path_dependencies() {
    let manifest = include_str!("../Cargo.toml");
    let deps = main_dependencies(manifest);
    for name in ["quill_core", "quill_syntax"] {
        assert!(deps.iter().any(|d| d == name), "missing `{name}` in [dependencies]: {deps:?}");
    }
}
