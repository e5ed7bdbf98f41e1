#![forbid(unsafe_code)]
//! TAL language tooling
//!
//! Editor and command-line tooling for TAL (Transaction Application Language) source. The analytic core lives
//! in the workspace crates: `tal_core` holds the language vocabulary and `tal_syntax` the tokenizer and symbol
//! parser. This crate wires them into a CLI and a Language Server.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **Malformed source is not an error**: the tokenizer and symbol parser never fail. Recoveries surface as
//!   diagnostics, which the CLI and the LSP report as warnings.

pub mod cli;
pub mod lsp;
pub mod version;

pub use tal_core::lang;
pub use tal_syntax as syntax;
pub use tal_syntax::{Analysis, analyze, diagnostics, lexer, symbols};
