//! Delimiter vocabulary.
//!
//! Brackets, separators, statement terminators and the structural markers TAL reuses heavily: `.` (field
//! access, also the standard indirection marker), `#` (DEFINE body terminator), `(*)` (template structure)
//! and `.<` (bit-field extraction). Line terminators live here too; the tokenizer emits them as `NewLine`.
//!
//! ## Examples
//! ```rust
//! use tal_core::lang::delimiters::{self, DelimiterId};
//!
//! assert_eq!(delimiters::from_str(";"), Some(DelimiterId::Semicolon));
//! assert_eq!(delimiters::as_str(DelimiterId::Hash), "#");
//! assert!(delimiters::is_line_terminator("\r\n"));
//! ```

/// Stable identifier for delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DelimiterId {
    LParen,
    RParen,
    LBracket,
    RBracket,
    Comma,
    Semicolon,
    Colon,
    Dot,
    Equal,
    Hash,
    TemplateStar,
    BitFieldOpen,
}

/// Broad grouping for delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DelimiterCategory {
    Bracket,
    Separator,
    Terminator,
    Structure,
}

/// Metadata for a delimiter.
#[derive(Debug, Clone, Copy)]
pub struct DelimiterInfo {
    pub id: DelimiterId,
    pub spelling: &'static str,
    pub category: DelimiterCategory,
}

/// Registry of all delimiters.
pub const DELIMITERS: &[DelimiterInfo] = &[
    info(DelimiterId::LParen, "(", DelimiterCategory::Bracket),
    info(DelimiterId::RParen, ")", DelimiterCategory::Bracket),
    info(DelimiterId::LBracket, "[", DelimiterCategory::Bracket),
    info(DelimiterId::RBracket, "]", DelimiterCategory::Bracket),
    info(DelimiterId::Comma, ",", DelimiterCategory::Separator),
    info(DelimiterId::Colon, ":", DelimiterCategory::Separator),
    info(DelimiterId::Equal, "=", DelimiterCategory::Separator),
    info(DelimiterId::Semicolon, ";", DelimiterCategory::Terminator),
    info(DelimiterId::Hash, "#", DelimiterCategory::Terminator),
    info(DelimiterId::Dot, ".", DelimiterCategory::Structure),
    info(DelimiterId::TemplateStar, "(*)", DelimiterCategory::Structure),
    info(DelimiterId::BitFieldOpen, ".<", DelimiterCategory::Structure),
];

/// Line terminator spellings, longest first.
pub const LINE_TERMINATORS: &[&str] = &["\r\n", "\n", "\r"];

/// Spelling.
pub fn as_str(id: DelimiterId) -> &'static str {
    info_for(id).spelling
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: DelimiterId) -> &'static DelimiterInfo {
    DELIMITERS.iter().find(|d| d.id == id).expect("delimiter info missing")
}

/// Lookup by exact spelling.
pub fn from_str(s: &str) -> Option<DelimiterId> {
    DELIMITERS.iter().find(|d| d.spelling == s).map(|d| d.id)
}

/// Return `true` if `s` is exactly one line terminator.
pub fn is_line_terminator(s: &str) -> bool {
    LINE_TERMINATORS.contains(&s)
}

const fn info(id: DelimiterId, spelling: &'static str, category: DelimiterCategory) -> DelimiterInfo {
    DelimiterInfo { id, spelling, category }
}
