//! Numeric literal markers.
//!
//! TAL integer literals may carry a base prefix and a storage-size suffix:
//!
//! ```text
//! 255      %377      %B11111111      %HFF      %D255
//! 100000D  %H186A0%D  3F  3%F
//! ```
//!
//! ## Notes
//! - A base prefix only counts when a valid digit for that base follows it; `%HZ` is not a hex literal.
//! - Hex literals use only the `%D`/`%F` suffix forms, since `D` and `F` are hex digits.
//!
//! ## Examples
//! ```rust
//! use tal_core::lang::numeric::{self, NumericBase, NumericSuffix};
//!
//! assert_eq!(numeric::match_base_prefix("%HFF"), Some((NumericBase::Hex, 2)));
//! assert_eq!(numeric::match_base_prefix("%9"), None);
//! assert_eq!(numeric::match_suffix("D;", NumericBase::Decimal), Some((NumericSuffix::Int32, 1)));
//! ```

use super::registry::{is_ident_continue, starts_with_spelling};

/// Integer literal base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericBase {
    Decimal,
    Octal,
    Binary,
    Hex,
}

impl NumericBase {
    pub const fn radix(self) -> u32 {
        match self {
            NumericBase::Decimal => 10,
            NumericBase::Octal => 8,
            NumericBase::Binary => 2,
            NumericBase::Hex => 16,
        }
    }

    /// Return `true` if `c` is a digit in this base.
    pub fn is_digit(self, c: char) -> bool {
        c.is_digit(self.radix())
    }
}

/// Storage-size suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericSuffix {
    /// `D` / `%D`: INT(32).
    Int32,
    /// `F` / `%F`: FIXED.
    Fixed,
}

/// Base prefixes, longest first so `%B`/`%H`/`%D` win over the bare octal `%`.
pub const BASE_PREFIXES: &[(&str, NumericBase)] = &[
    ("%B", NumericBase::Binary),
    ("%H", NumericBase::Hex),
    ("%D", NumericBase::Decimal),
    ("%", NumericBase::Octal),
];

/// Suffix spellings, longest first.
pub const SUFFIXES: &[(&str, NumericSuffix)] = &[
    ("%D", NumericSuffix::Int32),
    ("%F", NumericSuffix::Fixed),
    ("D", NumericSuffix::Int32),
    ("F", NumericSuffix::Fixed),
];

/// Match a base prefix at the start of `rest`.
///
/// ## Returns
/// - `Some((base, prefix_len))` when a prefix is immediately followed by a digit valid in that base.
/// - `None` otherwise (including plain decimal digits, which need no prefix).
pub fn match_base_prefix(rest: &str) -> Option<(NumericBase, usize)> {
    BASE_PREFIXES.iter().find_map(|&(spelling, base)| {
        if !starts_with_spelling(rest, spelling) {
            return None;
        }
        let next = rest[spelling.len()..].chars().next()?;
        base.is_digit(next).then_some((base, spelling.len()))
    })
}

/// Match a suffix at the start of `rest` (the text right after a digit run).
///
/// ## Notes
/// - A suffix only counts when no identifier character follows it, so `12DAYS` is not `12D` + `AYS`.
pub fn match_suffix(rest: &str, base: NumericBase) -> Option<(NumericSuffix, usize)> {
    SUFFIXES.iter().find_map(|&(spelling, suffix)| {
        if base == NumericBase::Hex && !spelling.starts_with('%') {
            return None;
        }
        if !starts_with_spelling(rest, spelling) {
            return None;
        }
        let bounded = rest[spelling.len()..].chars().next().is_none_or(|c| !is_ident_continue(c));
        bounded.then_some((suffix, spelling.len()))
    })
}
