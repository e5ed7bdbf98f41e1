//! Define the reserved keyword vocabulary for TAL.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a
//! const metadata table ([`KEYWORDS`]) recording canonical spellings, categories, and dialect.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-insensitive ASCII** (`begin`, `Begin` and `BEGIN` are the same word).
//! - Data-type names and word operators are reserved words too. The tokenizer refines them using
//!   [`crate::lang::data_types`] and [`crate::lang::operators`].
//!
//! ## Examples
//! ```rust
//! use tal_core::lang::keywords::{self, KeywordCategory, KeywordId};
//!
//! assert_eq!(keywords::from_str("literal"), Some(KeywordId::Literal));
//! assert_eq!(keywords::category(KeywordId::Begin), KeywordCategory::Block);
//! ```

use super::registry::{Dialect, Stability, spelling_eq};

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Declarations
    Define,
    Literal,
    Proc,
    Subproc,
    Struct,
    Label,
    Entry,
    Block,
    Name,

    // Block structure
    Begin,
    End,

    // Procedure attributes
    Forward,
    External,
    Main,
    Interrupt,
    Resident,
    Callable,
    Priv,
    Variable,
    Extensible,

    // Control flow / statements
    If,
    Then,
    Else,
    Case,
    Of,
    Otherwise,
    While,
    Do,
    Until,
    For,
    To,
    Downto,
    By,
    Goto,
    Return,
    Call,
    Scan,
    Rscan,
    Assert,
    Code,
    Drop,
    Stack,
    Store,
    Use,

    // Data types
    String,
    Int,
    Unsigned,
    Fixed,
    Real,
    ExtAddr,
    SgAddr,
    SgbAddr,
    SgwAddr,
    BAddr,
    WAddr,
    CbAddr,
    CwAddr,
    ProcAddr,

    // Word operators
    And,
    Or,
    Not,
    Land,
    Lor,
    Xor,
}

/// High-level grouping for tooling.
///
/// ## Notes
/// - Categories are metadata only; they do not enforce parsing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Declaration,
    Block,
    Attribute,
    ControlFlow,
    Statement,
    DataType,
    Operator,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
    pub dialect: Dialect,
    pub stability: Stability,
}

/// Registry of all keywords.
///
/// ## Notes
/// - The ordering is not semantically meaningful, but is grouped for readability.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Declarations
    info(KeywordId::Define, "DEFINE", KeywordCategory::Declaration),
    info(KeywordId::Literal, "LITERAL", KeywordCategory::Declaration),
    info(KeywordId::Proc, "PROC", KeywordCategory::Declaration),
    info(KeywordId::Subproc, "SUBPROC", KeywordCategory::Declaration),
    info(KeywordId::Struct, "STRUCT", KeywordCategory::Declaration),
    info(KeywordId::Label, "LABEL", KeywordCategory::Declaration),
    info(KeywordId::Entry, "ENTRY", KeywordCategory::Declaration),
    info(KeywordId::Block, "BLOCK", KeywordCategory::Declaration),
    info(KeywordId::Name, "NAME", KeywordCategory::Declaration),
    // Block structure
    info(KeywordId::Begin, "BEGIN", KeywordCategory::Block),
    info(KeywordId::End, "END", KeywordCategory::Block),
    // Procedure attributes
    info(KeywordId::Forward, "FORWARD", KeywordCategory::Attribute),
    info(KeywordId::External, "EXTERNAL", KeywordCategory::Attribute),
    info(KeywordId::Main, "MAIN", KeywordCategory::Attribute),
    info(KeywordId::Interrupt, "INTERRUPT", KeywordCategory::Attribute),
    info(KeywordId::Resident, "RESIDENT", KeywordCategory::Attribute),
    info(KeywordId::Callable, "CALLABLE", KeywordCategory::Attribute),
    info(KeywordId::Priv, "PRIV", KeywordCategory::Attribute),
    info(KeywordId::Variable, "VARIABLE", KeywordCategory::Attribute),
    info(KeywordId::Extensible, "EXTENSIBLE", KeywordCategory::Attribute),
    // Control flow / statements
    info(KeywordId::If, "IF", KeywordCategory::ControlFlow),
    info(KeywordId::Then, "THEN", KeywordCategory::ControlFlow),
    info(KeywordId::Else, "ELSE", KeywordCategory::ControlFlow),
    info(KeywordId::Case, "CASE", KeywordCategory::ControlFlow),
    info(KeywordId::Of, "OF", KeywordCategory::ControlFlow),
    info(KeywordId::Otherwise, "OTHERWISE", KeywordCategory::ControlFlow),
    info(KeywordId::While, "WHILE", KeywordCategory::ControlFlow),
    info(KeywordId::Do, "DO", KeywordCategory::ControlFlow),
    info(KeywordId::Until, "UNTIL", KeywordCategory::ControlFlow),
    info(KeywordId::For, "FOR", KeywordCategory::ControlFlow),
    info(KeywordId::To, "TO", KeywordCategory::ControlFlow),
    info(KeywordId::Downto, "DOWNTO", KeywordCategory::ControlFlow),
    info(KeywordId::By, "BY", KeywordCategory::ControlFlow),
    info(KeywordId::Goto, "GOTO", KeywordCategory::ControlFlow),
    info(KeywordId::Return, "RETURN", KeywordCategory::ControlFlow),
    info(KeywordId::Call, "CALL", KeywordCategory::ControlFlow),
    info(KeywordId::Scan, "SCAN", KeywordCategory::Statement),
    info(KeywordId::Rscan, "RSCAN", KeywordCategory::Statement),
    info(KeywordId::Assert, "ASSERT", KeywordCategory::Statement),
    info(KeywordId::Code, "CODE", KeywordCategory::Statement),
    info(KeywordId::Drop, "DROP", KeywordCategory::Statement),
    info(KeywordId::Stack, "STACK", KeywordCategory::Statement),
    info(KeywordId::Store, "STORE", KeywordCategory::Statement),
    info(KeywordId::Use, "USE", KeywordCategory::Statement),
    // Data types
    info(KeywordId::String, "STRING", KeywordCategory::DataType),
    info(KeywordId::Int, "INT", KeywordCategory::DataType),
    info(KeywordId::Unsigned, "UNSIGNED", KeywordCategory::DataType),
    info(KeywordId::Fixed, "FIXED", KeywordCategory::DataType),
    info(KeywordId::Real, "REAL", KeywordCategory::DataType),
    ptal(KeywordId::ExtAddr, "EXTADDR", KeywordCategory::DataType),
    ptal(KeywordId::SgAddr, "SGADDR", KeywordCategory::DataType),
    ptal(KeywordId::SgbAddr, "SGBADDR", KeywordCategory::DataType),
    ptal(KeywordId::SgwAddr, "SGWADDR", KeywordCategory::DataType),
    ptal(KeywordId::BAddr, "BADDR", KeywordCategory::DataType),
    ptal(KeywordId::WAddr, "WADDR", KeywordCategory::DataType),
    ptal(KeywordId::CbAddr, "CBADDR", KeywordCategory::DataType),
    ptal(KeywordId::CwAddr, "CWADDR", KeywordCategory::DataType),
    ptal(KeywordId::ProcAddr, "PROCADDR", KeywordCategory::DataType),
    // Word operators
    info(KeywordId::And, "AND", KeywordCategory::Operator),
    info(KeywordId::Or, "OR", KeywordCategory::Operator),
    info(KeywordId::Not, "NOT", KeywordCategory::Operator),
    info(KeywordId::Land, "LAND", KeywordCategory::Operator),
    info(KeywordId::Lor, "LOR", KeywordCategory::Operator),
    info(KeywordId::Xor, "XOR", KeywordCategory::Operator),
];

/// Canonical (upper-case) spelling.
///
/// ## Parameters
/// - `id`: Keyword identifier.
///
/// ## Returns
/// - The canonical spelling for `id`.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by spelling.
///
/// ## Parameters
/// - `s`: Candidate word, any case.
///
/// ## Returns
/// - `Some(KeywordId)` if the word is reserved.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| spelling_eq(s, k.canonical)).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
        dialect: Dialect::Tal,
        stability: Stability::Stable,
    }
}

const fn ptal(id: KeywordId, canonical: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo {
        dialect: Dialect::PTal,
        ..info(id, canonical, category)
    }
}
