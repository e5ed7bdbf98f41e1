//! Shareable metadata for `tal_core::lang` registries.
//!
//! Every vocabulary module (keywords, directives, operators, …) is a `const` table of small `Copy` records.
//! This submodule provides the metadata types reused across those tables, plus the case-insensitive
//! comparison every word lookup goes through.
//!
//! ## Notes
//! - Metadata is meant for tooling (completion, hover, docs); enforcement of syntax still lives in the
//!   tokenizer and symbol parser.

/// Identify which compiler dialect accepts a vocabulary item.
///
/// ## Notes
/// - `Tal` items are accepted by both the classic TAL compiler and the native pTAL compiler.
/// - `PTal` items (address types, a few directives) only exist in pTAL sources.
///
/// ## Examples
/// ```rust
/// use tal_core::lang::registry::Dialect;
///
/// assert_eq!(Dialect::PTal.label(), "pTAL");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    Tal,
    PTal,
}

impl Dialect {
    /// Human-readable dialect name for hover text.
    pub const fn label(self) -> &'static str {
        match self {
            Dialect::Tal => "TAL",
            Dialect::PTal => "pTAL",
        }
    }
}

/// Describe the lifecycle status of a vocabulary item.
///
/// ## Notes
/// - Obsolete items still lex and classify normally; tooling may flag them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Stable,
    Obsolete,
}

/// Compare a candidate spelling against a registry spelling, ignoring ASCII case.
///
/// ## Examples
/// ```rust
/// use tal_core::lang::registry::spelling_eq;
///
/// assert!(spelling_eq("Begin", "BEGIN"));
/// assert!(!spelling_eq("BEGINS", "BEGIN"));
/// ```
pub fn spelling_eq(candidate: &str, canonical: &str) -> bool {
    candidate.eq_ignore_ascii_case(canonical)
}

/// Return `true` if `rest` starts with `spelling`, ignoring ASCII case.
///
/// ## Notes
/// - Used by symbol matching, where spellings such as `.EXT` or `'SG'` contain letters.
pub fn starts_with_spelling(rest: &str, spelling: &str) -> bool {
    rest.len() >= spelling.len()
        && rest.is_char_boundary(spelling.len())
        && rest[..spelling.len()].eq_ignore_ascii_case(spelling)
}

/// Return `true` if `c` may continue a TAL identifier (`A-Z`, `a-z`, `0-9`, `_`, `^`).
///
/// ## Notes
/// - Alphabetic symbol spellings (`.EXT`, `.SG`) only match when the next character fails this test, so
///   `.EXTRA` is `.` followed by the name `EXTRA`.
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '^'
}

/// Return `true` if `c` may start a TAL identifier (letters, `_`, `^`, and `$` for standard functions).
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '^' || c == '$'
}
