//! Operator vocabulary.
//!
//! This module defines the TAL operator set: symbolic operators (`+`, `<=`, `':='`, `<<`, …) and word operators
//! (`AND`, `LOR`, …), grouped by the symbol table they come from.
//!
//! ## Notes
//! - Symbolic spellings match exactly; quoted forms such as `'<'` are the unsigned variants.
//! - Word spellings match **case-insensitively** and are also reserved keywords
//!   ([`OperatorInfo::is_keyword_spelling`]).
//! - `=` is listed here (relational) and in [`crate::lang::delimiters`]; the tokenizer prefers the delimiter.
//!
//! ## Examples
//! ```rust
//! use tal_core::lang::operators::{self, OperatorCategory, OperatorId};
//!
//! assert_eq!(operators::from_str("<="), Some(OperatorId::LessEq));
//! assert_eq!(operators::from_word("lor"), Some(OperatorId::Lor));
//! assert_eq!(operators::category(OperatorId::ShiftLeft), OperatorCategory::BitShift);
//! ```

use super::keywords::KeywordId;
use super::registry::spelling_eq;

/// Symbol table an operator belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorCategory {
    Arithmetic,
    Relational,
    Boolean,
    Logical,
    BitShift,
    Assignment,
    Move,
    LabelCase,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Arithmetic (signed / unsigned)
    Plus,
    Minus,
    Star,
    Slash,
    UnsignedPlus,
    UnsignedMinus,
    UnsignedStar,
    UnsignedSlash,
    UnsignedModulo,

    // Relational (signed / unsigned)
    Less,
    Greater,
    Equal,
    LessEq,
    GreaterEq,
    NotEqual,
    UnsignedLess,
    UnsignedGreater,
    UnsignedEqual,
    UnsignedLessEq,
    UnsignedGreaterEq,
    UnsignedNotEqual,

    // Bit shift
    ShiftLeft,
    ShiftRight,
    UnsignedShiftLeft,
    UnsignedShiftRight,

    // Assignment / move
    Assign,
    MoveLeft,
    MoveRight,
    Concat,

    // Next-address / label case
    Arrow,

    // Word operators
    And,
    Or,
    Not,
    Land,
    Lor,
    Xor,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub category: OperatorCategory,
    pub is_keyword_spelling: bool,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    // Arithmetic
    sym(OperatorId::Plus, "+", OperatorCategory::Arithmetic),
    sym(OperatorId::Minus, "-", OperatorCategory::Arithmetic),
    sym(OperatorId::Star, "*", OperatorCategory::Arithmetic),
    sym(OperatorId::Slash, "/", OperatorCategory::Arithmetic),
    sym(OperatorId::UnsignedPlus, "'+'", OperatorCategory::Arithmetic),
    sym(OperatorId::UnsignedMinus, "'-'", OperatorCategory::Arithmetic),
    sym(OperatorId::UnsignedStar, "'*'", OperatorCategory::Arithmetic),
    sym(OperatorId::UnsignedSlash, "'/'", OperatorCategory::Arithmetic),
    sym(OperatorId::UnsignedModulo, "'\\'", OperatorCategory::Arithmetic),
    // Relational
    sym(OperatorId::Less, "<", OperatorCategory::Relational),
    sym(OperatorId::Greater, ">", OperatorCategory::Relational),
    sym(OperatorId::Equal, "=", OperatorCategory::Relational),
    sym(OperatorId::LessEq, "<=", OperatorCategory::Relational),
    sym(OperatorId::GreaterEq, ">=", OperatorCategory::Relational),
    sym(OperatorId::NotEqual, "<>", OperatorCategory::Relational),
    sym(OperatorId::UnsignedLess, "'<'", OperatorCategory::Relational),
    sym(OperatorId::UnsignedGreater, "'>'", OperatorCategory::Relational),
    sym(OperatorId::UnsignedEqual, "'='", OperatorCategory::Relational),
    sym(OperatorId::UnsignedLessEq, "'<='", OperatorCategory::Relational),
    sym(OperatorId::UnsignedGreaterEq, "'>='", OperatorCategory::Relational),
    sym(OperatorId::UnsignedNotEqual, "'<>'", OperatorCategory::Relational),
    // Bit shift
    sym(OperatorId::ShiftLeft, "<<", OperatorCategory::BitShift),
    sym(OperatorId::ShiftRight, ">>", OperatorCategory::BitShift),
    sym(OperatorId::UnsignedShiftLeft, "'<<'", OperatorCategory::BitShift),
    sym(OperatorId::UnsignedShiftRight, "'>>'", OperatorCategory::BitShift),
    // Assignment / move
    sym(OperatorId::Assign, ":=", OperatorCategory::Assignment),
    sym(OperatorId::MoveLeft, "':='", OperatorCategory::Move),
    sym(OperatorId::MoveRight, "'=:'", OperatorCategory::Move),
    sym(OperatorId::Concat, "&", OperatorCategory::Move),
    // Label case
    sym(OperatorId::Arrow, "->", OperatorCategory::LabelCase),
    // Word operators
    word(OperatorId::And, "AND", OperatorCategory::Boolean),
    word(OperatorId::Or, "OR", OperatorCategory::Boolean),
    word(OperatorId::Not, "NOT", OperatorCategory::Boolean),
    word(OperatorId::Land, "LAND", OperatorCategory::Logical),
    word(OperatorId::Lor, "LOR", OperatorCategory::Logical),
    word(OperatorId::Xor, "XOR", OperatorCategory::Logical),
];

/// Spelling.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Category.
pub fn category(id: OperatorId) -> OperatorCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Lookup a symbolic operator by exact spelling.
pub fn from_str(s: &str) -> Option<OperatorId> {
    OPERATORS
        .iter()
        .find(|o| !o.is_keyword_spelling && o.spelling == s)
        .map(|o| o.id)
}

/// Lookup a word operator (`AND`, `lor`, …), ignoring case.
pub fn from_word(s: &str) -> Option<OperatorId> {
    OPERATORS
        .iter()
        .find(|o| o.is_keyword_spelling && spelling_eq(s, o.spelling))
        .map(|o| o.id)
}

/// Map a reserved keyword to its word operator, if the keyword spells one.
pub fn from_keyword(id: KeywordId) -> Option<OperatorId> {
    match id {
        KeywordId::And => Some(OperatorId::And),
        KeywordId::Or => Some(OperatorId::Or),
        KeywordId::Not => Some(OperatorId::Not),
        KeywordId::Land => Some(OperatorId::Land),
        KeywordId::Lor => Some(OperatorId::Lor),
        KeywordId::Xor => Some(OperatorId::Xor),
        _ => None,
    }
}

/// Symbolic operators only (the tokenizer's symbol union draws from this).
pub fn symbolic() -> impl Iterator<Item = &'static OperatorInfo> {
    OPERATORS.iter().filter(|o| !o.is_keyword_spelling)
}

// --- helpers -----------------------------------------------------------------

const fn sym(id: OperatorId, spelling: &'static str, category: OperatorCategory) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        category,
        is_keyword_spelling: false,
    }
}

const fn word(id: OperatorId, spelling: &'static str, category: OperatorCategory) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        category,
        is_keyword_spelling: true,
    }
}
