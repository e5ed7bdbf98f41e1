//! Symbol parser for TAL.
//!
//! Walks a token stream and extracts declarations into a flat, context-scoped [`SymbolTable`]: LITERALs, DEFINEs
//! (with parameters and bodies), compiler directives, procedures, structures and typed variables. It builds no
//! syntax tree; everything it does not recognise is stepped over one token at a time.
//!
//! ## Examples
//!
//! ```rust
//! use tal_syntax::{lexer, symbols};
//!
//! let source = "PROC p;\nBEGIN\n  INT count;\nEND;\n";
//! let tokens = lexer::tokenize(source);
//! let parsed = symbols::parse(&tokens);
//! let count = parsed.symbols.get_by_name("count").unwrap();
//! assert_eq!(count.context, "p");
//! ```

pub mod table;

pub use table::{
    GLOBAL_CONTEXT, KeySuffix, SymbolEntry, SymbolKey, SymbolKind, SymbolTable, SymbolType, SymbolValue,
    join_token_text,
};

use crate::diagnostics::{SyntaxDiagnostic, errors};
use crate::lexer::{Token, TokenKind};
use tal_core::lang::data_types::{self, DataTypeId};
use tal_core::lang::delimiters::DelimiterId;
use tal_core::lang::directives::{self, DirectiveForm, DirectiveId};
use tal_core::lang::keywords::{self, KeywordId};
use tal_core::lang::operators::OperatorId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("symbols/core.rs");
include!("symbols/helpers.rs");
include!("symbols/scope.rs");
include!("symbols/decl.rs");
include!("symbols/directive.rs");
include!("symbols/api.rs");
include!("symbols/tests.rs");
