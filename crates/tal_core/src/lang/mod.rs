//! TAL language vocabulary registries.
//!
//! This module is the “front door” for language-level vocabulary: reserved keywords, data types, operators,
//! delimiters, indirection symbols, compiler directives, and standard functions.
//!
//! Callers work with **stable IDs** (e.g. `KeywordId`, `DirectiveId`) and look up spellings/metadata via
//! registry tables instead of comparing strings at every call site.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no token types, no IO, no side effects.
//! - The tokenizer and symbol parser own syntax; registries provide spellings and metadata for shared use
//!   (classification, completion, hover text).
//!
//! ## Examples
//! ```rust
//! use tal_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("proc"), Some(KeywordId::Proc));
//! assert_eq!(keywords::as_str(KeywordId::Proc), "PROC");
//! ```

pub mod data_types;
pub mod delimiters;
pub mod directives;
pub mod indirection;
pub mod keywords;
pub mod numeric;
pub mod operators;
pub mod registry;
pub mod std_functions;
pub mod symbols;
