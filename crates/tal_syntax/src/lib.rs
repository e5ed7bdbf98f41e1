//! Shared syntax frontend for TAL: tokenizer, symbol parser, spans, diagnostics.
//!
//! This crate is dependency-light and intended for reuse across the CLI, the language server, and any other
//! tooling that needs to look at TAL source without compiling it.
//!
//! ## Notes
//! - This crate is “syntax-only”: it extracts declarations into a flat symbol table but builds no syntax tree and
//!   does no type checking or cross-file resolution.
//! - Every entrypoint is total. Malformed input yields a best-effort result plus [`diagnostics::SyntaxDiagnostic`]s
//!   describing what was recovered from.
//! - Vocabulary identity (keywords/data types/operators/delimiters) comes from `tal_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use tal_syntax::{lexer, symbols};
//!
//! let lexed = lexer::lex("LITERAL max = 10;\n");
//! let parsed = symbols::parse(&lexed.tokens);
//! let entry = parsed.symbols.get_by_name("max").unwrap();
//! assert_eq!(entry.value.as_text(), Some("10"));
//! ```
//!
//! ## See also
//! - `tal_core::lang` for registry-backed language vocabulary.

pub mod diagnostics;
pub mod lexer;
pub mod span;
pub mod symbols;
pub mod token_helpers;

use diagnostics::SyntaxDiagnostic;
use lexer::{LexOptions, Token};
use symbols::SymbolTable;

/// Result of one full tokenize + parse pass over a document.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub tokens: Vec<Token>,
    pub symbols: SymbolTable,
    /// Tokenizer diagnostics followed by symbol-parser diagnostics.
    pub diagnostics: Vec<SyntaxDiagnostic>,
}

/// Tokenize and parse `source` in one pass.
///
/// ## Parameters
/// - `source`: Full document text.
/// - `options`: Tokenizer options (comment retention).
pub fn analyze(source: &str, options: LexOptions) -> Analysis {
    let lexed = lexer::Lexer::with_options(source, options).tokenize();
    let parsed = symbols::parse(&lexed.tokens);

    let mut diagnostics = lexed.diagnostics;
    diagnostics.extend(parsed.diagnostics);

    Analysis {
        tokens: lexed.tokens,
        symbols: parsed.symbols,
        diagnostics,
    }
}
