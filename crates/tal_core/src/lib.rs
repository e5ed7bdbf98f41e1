//! Provide the canonical TAL language vocabulary shared by the tokenizer, the symbol parser, and editor tooling.
//!
//! This crate is intentionally small and dependency-free. It holds pure lookup data: reserved words, data-type
//! names, compiler directives, operator/delimiter/indirection symbols, standard-function names, and numeric
//! base/suffix markers.
//!
//! ## Notes
//!
//! - This is a “vocabulary” crate: **no IO**, no global mutable state, and no token or AST types.
//! - TAL is case-insensitive for words; word lookups here compare ASCII case-insensitively.

pub mod lang;
