//! Indirection and base-address vocabulary.
//!
//! TAL marks pointers in declarations with an indirection symbol (`.` standard, `.EXT` extended, `.SG`/`.SGX`
//! system-global) and takes addresses with `@`. Base-address symbols (`'P'`, `'G'`, `'L'`, `'S'`, `'SG'`)
//! anchor equivalenced declarations to a memory area.
//!
//! ## Notes
//! - The bare `.` is deliberately absent from [`INDIRECTIONS`]: it is a delimiter by default and only becomes
//!   [`IndirectionId::Standard`] right after a data-type word, which is the tokenizer's decision.
//! - Spellings containing letters compare **case-insensitively**.
//!
//! ## Examples
//! ```rust
//! use tal_core::lang::indirection::{self, IndirectionId};
//!
//! assert_eq!(indirection::from_str(".ext"), Some(IndirectionId::Extended));
//! assert_eq!(indirection::as_str(IndirectionId::Standard), ".");
//! ```

use super::registry::spelling_eq;

/// Stable identifier for indirection and base-address symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndirectionId {
    Standard,
    Extended,
    SystemGlobal,
    SystemGlobalExtended,
    AddressOf,
    BaseProcedure,
    BaseGlobal,
    BaseLocal,
    BaseSublocal,
    BaseSystemGlobal,
}

/// Grouping for indirection symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndirectionCategory {
    Pointer,
    Address,
    BaseAddress,
}

/// Metadata for an indirection symbol.
#[derive(Debug, Clone, Copy)]
pub struct IndirectionInfo {
    pub id: IndirectionId,
    pub spelling: &'static str,
    pub category: IndirectionCategory,
}

/// Symbols the tokenizer matches directly.
pub const INDIRECTIONS: &[IndirectionInfo] = &[
    info(IndirectionId::Extended, ".EXT", IndirectionCategory::Pointer),
    info(IndirectionId::SystemGlobal, ".SG", IndirectionCategory::Pointer),
    info(IndirectionId::SystemGlobalExtended, ".SGX", IndirectionCategory::Pointer),
    info(IndirectionId::AddressOf, "@", IndirectionCategory::Address),
    info(IndirectionId::BaseProcedure, "'P'", IndirectionCategory::BaseAddress),
    info(IndirectionId::BaseGlobal, "'G'", IndirectionCategory::BaseAddress),
    info(IndirectionId::BaseLocal, "'L'", IndirectionCategory::BaseAddress),
    info(IndirectionId::BaseSublocal, "'S'", IndirectionCategory::BaseAddress),
    info(IndirectionId::BaseSystemGlobal, "'SG'", IndirectionCategory::BaseAddress),
];

/// Standard indirection (the reclassified `.`).
const STANDARD: IndirectionInfo = info(IndirectionId::Standard, ".", IndirectionCategory::Pointer);

/// Spelling.
pub fn as_str(id: IndirectionId) -> &'static str {
    info_for(id).spelling
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: IndirectionId) -> &'static IndirectionInfo {
    if id == IndirectionId::Standard {
        return &STANDARD;
    }
    INDIRECTIONS
        .iter()
        .find(|i| i.id == id)
        .expect("indirection info missing")
}

/// Lookup by spelling (letters compare case-insensitively).
pub fn from_str(s: &str) -> Option<IndirectionId> {
    if s == STANDARD.spelling {
        return Some(IndirectionId::Standard);
    }
    INDIRECTIONS.iter().find(|i| spelling_eq(s, i.spelling)).map(|i| i.id)
}

const fn info(id: IndirectionId, spelling: &'static str, category: IndirectionCategory) -> IndirectionInfo {
    IndirectionInfo { id, spelling, category }
}
