//! Layering guardrails for the workspace crates.
//!
//! `tal_core` is pure vocabulary and must stay dependency-free. `tal_syntax` is shared by every tool, so it must
//! not pull in the editor transport (`tower-lsp`, `tokio`) or the CLI stack (`clap`). These tests scan the
//! member manifests and fail if a forbidden crate appears in `[dependencies]`.

/// Crate names listed in the `[dependencies]` table of a manifest.
fn dependency_names(manifest: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut in_dependencies = false;

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
fn core_vocabulary_has_no_dependencies() {
    let deps = dependency_names(include_str!("../crates/tal_core/Cargo.toml"));
    assert!(deps.is_empty(), "`tal_core` must stay dependency-free, found {deps:?}");
}

#[test]
fn syntax_crate_does_not_depend_on_tooling() {
    let deps = dependency_names(include_str!("../crates/tal_syntax/Cargo.toml"));
    for forbidden in ["tower-lsp", "tokio", "clap", "serde_json"] {
        assert!(
            !deps.iter().any(|d| d == forbidden),
            "`{forbidden}` must not appear in tal_syntax [dependencies]; keep it in the root crate"
        );
    }
    assert!(deps.iter().any(|d| d == "tal_core"));
}

#[test]
fn root_crate_keeps_test_tooling_out_of_main_dependencies() {
    let deps = dependency_names(include_str!("../Cargo.toml"));
    for dev_only in ["insta", "proptest"] {
        assert!(
            !deps.iter().any(|d| d == dev_only),
            "`{dev_only}` must not appear in [dependencies]; use [dev-dependencies] instead"
        );
    }
}
