//! Data-type vocabulary.
//!
//! TAL declares variables, procedure results and formal parameters with one of a fixed set of type words.
//! Each type word is also a reserved keyword; this registry maps between the two and carries the metadata
//! tooling needs (storage width, whether the type takes a `(width)` qualifier).
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-insensitive ASCII**.
//!
//! ## Examples
//! ```rust
//! use tal_core::lang::data_types::{self, DataTypeId};
//! use tal_core::lang::keywords::KeywordId;
//!
//! assert_eq!(data_types::from_str("int"), Some(DataTypeId::Int));
//! assert_eq!(data_types::from_keyword(KeywordId::Real), Some(DataTypeId::Real));
//! assert_eq!(data_types::from_keyword(KeywordId::Begin), None);
//! ```

use super::keywords::KeywordId;
use super::registry::{Dialect, spelling_eq};

/// Stable identifier for data types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataTypeId {
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
}

/// Metadata for a data type.
#[derive(Debug, Clone, Copy)]
pub struct DataTypeInfo {
    pub id: DataTypeId,
    pub keyword: KeywordId,
    pub canonical: &'static str,
    /// Default storage width in bits.
    pub default_bits: u8,
    /// `INT(32)`, `REAL(64)`, `FIXED(3)` and `UNSIGNED(5)` accept a parenthesised qualifier.
    pub takes_qualifier: bool,
    pub dialect: Dialect,
    pub description: &'static str,
}

/// Registry of all data types.
pub const DATA_TYPES: &[DataTypeInfo] = &[
    ty(DataTypeId::String, KeywordId::String, "STRING", 8, false, "Byte (character) data."),
    ty(DataTypeId::Int, KeywordId::Int, "INT", 16, true, "Signed integer; INT(32) and INT(64) widen it."),
    ty(DataTypeId::Unsigned, KeywordId::Unsigned, "UNSIGNED", 16, true, "Unsigned bit field of 1-31 bits."),
    ty(DataTypeId::Fixed, KeywordId::Fixed, "FIXED", 64, true, "64-bit scaled fixed-point value."),
    ty(DataTypeId::Real, KeywordId::Real, "REAL", 32, true, "Floating point; REAL(64) is double precision."),
    addr(DataTypeId::ExtAddr, KeywordId::ExtAddr, "EXTADDR", 32, "Extended (32-bit) byte address."),
    addr(DataTypeId::SgAddr, KeywordId::SgAddr, "SGADDR", 16, "System-global address."),
    addr(DataTypeId::SgbAddr, KeywordId::SgbAddr, "SGBADDR", 16, "System-global byte address."),
    addr(DataTypeId::SgwAddr, KeywordId::SgwAddr, "SGWADDR", 16, "System-global word address."),
    addr(DataTypeId::BAddr, KeywordId::BAddr, "BADDR", 16, "16-bit byte address."),
    addr(DataTypeId::WAddr, KeywordId::WAddr, "WADDR", 16, "16-bit word address."),
    addr(DataTypeId::CbAddr, KeywordId::CbAddr, "CBADDR", 16, "Code-space byte address."),
    addr(DataTypeId::CwAddr, KeywordId::CwAddr, "CWADDR", 16, "Code-space word address."),
    addr(DataTypeId::ProcAddr, KeywordId::ProcAddr, "PROCADDR", 32, "Procedure address."),
];

/// Canonical spelling.
pub fn as_str(id: DataTypeId) -> &'static str {
    info_for(id).canonical
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: DataTypeId) -> &'static DataTypeInfo {
    DATA_TYPES.iter().find(|t| t.id == id).expect("data type info missing")
}

/// Lookup by spelling (any case).
pub fn from_str(s: &str) -> Option<DataTypeId> {
    DATA_TYPES.iter().find(|t| spelling_eq(s, t.canonical)).map(|t| t.id)
}

/// Map a reserved keyword to its data type, if the keyword names one.
pub fn from_keyword(id: KeywordId) -> Option<DataTypeId> {
    DATA_TYPES.iter().find(|t| t.keyword == id).map(|t| t.id)
}

// --- helpers -----------------------------------------------------------------

const fn ty(
    id: DataTypeId,
    keyword: KeywordId,
    canonical: &'static str,
    default_bits: u8,
    takes_qualifier: bool,
    description: &'static str,
) -> DataTypeInfo {
    DataTypeInfo {
        id,
        keyword,
        canonical,
        default_bits,
        takes_qualifier,
        dialect: Dialect::Tal,
        description,
    }
}

const fn addr(
    id: DataTypeId,
    keyword: KeywordId,
    canonical: &'static str,
    default_bits: u8,
    description: &'static str,
) -> DataTypeInfo {
    DataTypeInfo {
        id,
        keyword,
        canonical,
        default_bits,
        takes_qualifier: false,
        dialect: Dialect::PTal,
        description,
    }
}
