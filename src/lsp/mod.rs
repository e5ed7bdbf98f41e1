//! TAL Language Server Protocol (LSP) implementation
//!
//! Provides IDE features:
//! - Real-time diagnostics (tokenizer and symbol parser recoveries)
//! - Document outline
//! - Hover information (declarations, standard functions, vocabulary)
//! - Go-to-definition
//! - Completions

pub mod backend;
pub mod diagnostics;
pub mod symbols;

pub use backend::TalLanguageServer;
