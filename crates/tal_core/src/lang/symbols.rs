//! Longest-match lookup over every symbolic spelling.
//!
//! The tokenizer's symbol step tries indirection, delimiter and operator spellings plus line terminators at
//! once and keeps the longest candidate, so `<=` beats `<`, `':='` beats `'='`, and `(*)` beats `(`.
//!
//! ## Notes
//! - Ties (same spelling in two tables, such as `=`) go to the first table in the order
//!   Indirection → Delimiter → Operator → line terminator.
//! - The bare `.` resolves to [`SymbolClass::Delimiter`]; promoting it to standard indirection after a data
//!   type depends on the previous token and is the tokenizer's call.
//!
//! ## Examples
//! ```rust
//! use tal_core::lang::delimiters::DelimiterId;
//! use tal_core::lang::operators::OperatorId;
//! use tal_core::lang::symbols::{self, SymbolClass};
//!
//! let m = symbols::longest_match("<= 3").unwrap();
//! assert_eq!((m.class, m.len), (SymbolClass::Operator(OperatorId::LessEq), 2));
//!
//! let m = symbols::longest_match("= 3").unwrap();
//! assert_eq!(m.class, SymbolClass::Delimiter(DelimiterId::Equal));
//! ```

use super::delimiters::{self, DelimiterId};
use super::indirection::{self, IndirectionId};
use super::operators::{self, OperatorId};
use super::registry::{is_ident_continue, starts_with_spelling};

/// Which table a matched spelling came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolClass {
    Indirection(IndirectionId),
    Delimiter(DelimiterId),
    Operator(OperatorId),
    LineTerminator,
}

/// Result of [`longest_match`]: the class and the byte length matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolMatch {
    pub class: SymbolClass,
    pub len: usize,
}

/// Find the longest symbol spelling at the start of `rest`.
///
/// ## Returns
/// - `Some(SymbolMatch)` for the longest candidate.
/// - `None` if no table spelling starts `rest`.
pub fn longest_match(rest: &str) -> Option<SymbolMatch> {
    let mut best: Option<SymbolMatch> = None;
    let mut consider = |spelling: &str, class: SymbolClass| {
        if !matches_at(rest, spelling) {
            return;
        }
        if best.is_none_or(|b| spelling.len() > b.len) {
            best = Some(SymbolMatch {
                class,
                len: spelling.len(),
            });
        }
    };

    for info in indirection::INDIRECTIONS {
        consider(info.spelling, SymbolClass::Indirection(info.id));
    }
    for info in delimiters::DELIMITERS {
        consider(info.spelling, SymbolClass::Delimiter(info.id));
    }
    for info in operators::symbolic() {
        consider(info.spelling, SymbolClass::Operator(info.id));
    }
    for terminator in delimiters::LINE_TERMINATORS {
        consider(terminator, SymbolClass::LineTerminator);
    }

    best
}

/// Every spelling `longest_match` can return, for registry guardrails and completion.
pub fn all_spellings() -> impl Iterator<Item = &'static str> {
    indirection::INDIRECTIONS
        .iter()
        .map(|i| i.spelling)
        .chain(delimiters::DELIMITERS.iter().map(|d| d.spelling))
        .chain(operators::symbolic().map(|o| o.spelling))
        .chain(delimiters::LINE_TERMINATORS.iter().copied())
}

fn matches_at(rest: &str, spelling: &str) -> bool {
    if !starts_with_spelling(rest, spelling) {
        return false;
    }
    // `.EXT` must not swallow the start of `.EXTRA`.
    let wordy = spelling.chars().last().is_some_and(|c| c.is_ascii_alphabetic());
    !wordy || rest[spelling.len()..].chars().next().is_none_or(|c| !is_ident_continue(c))
}
