//! Standard function vocabulary.
//!
//! TAL's built-in functions are spelled with a leading `$` (`$LEN`, `$OCCURS`, `$DBL`). The tokenizer treats
//! `$` as an identifier start, so these arrive as ordinary names; this registry lets tooling recognise them
//! for completion and hover.
//!
//! ## Examples
//! ```rust
//! use tal_core::lang::std_functions;
//!
//! assert!(std_functions::is_std_function("$len"));
//! assert!(!std_functions::is_std_function("LEN"));
//! ```

use super::registry::spelling_eq;

/// Metadata for a standard function.
#[derive(Debug, Clone, Copy)]
pub struct StdFunctionInfo {
    pub name: &'static str,
    pub summary: &'static str,
}

/// Registry of all standard functions.
pub const STD_FUNCTIONS: &[StdFunctionInfo] = &[
    f("$ABS", "Absolute value of an expression."),
    f("$ALPHA", "Test whether a character is alphabetic."),
    f("$AXADR", "Absolute extended address of a variable."),
    f("$BITLENGTH", "Length in bits of a variable."),
    f("$BITOFFSET", "Bit offset of a structure item."),
    f("$CARRY", "State of the carry indicator."),
    f("$COMP", "One's complement of an INT expression."),
    f("$DBL", "Convert to INT(32)."),
    f("$DBLL", "Combine two INT values into an INT(32)."),
    f("$DBLR", "Convert to INT(32), rounding."),
    f("$DFIX", "Convert INT(32) to FIXED with a scale."),
    f("$EFLT", "Convert to REAL(64)."),
    f("$EFLTR", "Convert to REAL(64), rounding."),
    f("$EXTADDR", "Convert an address to EXTADDR."),
    f("$FIX", "Convert to FIXED."),
    f("$FIXD", "Convert FIXED to INT(32)."),
    f("$FIXI", "Convert FIXED to INT."),
    f("$FIXL", "Convert FIXED to unsigned INT."),
    f("$FIXR", "Convert to FIXED, rounding."),
    f("$FLT", "Convert to REAL."),
    f("$FLTR", "Convert to REAL, rounding."),
    f("$HIGH", "High-order word of an INT(32)."),
    f("$IFIX", "Convert INT to FIXED with a scale."),
    f("$INT", "Low-order word of an expression as INT."),
    f("$INTR", "Convert to INT, rounding."),
    f("$LADR", "Standard address of a variable."),
    f("$LEN", "Length in bytes of one occurrence of a variable."),
    f("$LFIX", "Convert unsigned INT to FIXED with a scale."),
    f("$LMAX", "Maximum of two unsigned values."),
    f("$LMIN", "Minimum of two unsigned values."),
    f("$MAX", "Maximum of two signed values."),
    f("$MIN", "Minimum of two signed values."),
    f("$NUMERIC", "Test whether a character is a digit."),
    f("$OCCURS", "Number of occurrences of an array or structure."),
    f("$OFFSET", "Byte offset of a structure item."),
    f("$OPTIONAL", "Pass an optional parameter conditionally."),
    f("$OVERFLOW", "State of the overflow indicator."),
    f("$PARAM", "Test whether an actual parameter was passed."),
    f("$POINT", "Fixed-point scale of an expression."),
    f("$READCLOCK", "Current processor time stamp."),
    f("$RP", "Current register stack pointer."),
    f("$SCALE", "Change the scale of a FIXED value."),
    f("$SPECIAL", "Test whether a character is a special character."),
    f("$TYPE", "Data type code of a variable."),
    f("$UDBL", "Convert unsigned INT to INT(32)."),
    f("$USERCODE", "Read a word from the user code segment."),
    f("$XADR", "Extended address of a variable."),
];

/// Full metadata for `name` (any case), if it is a standard function.
pub fn lookup(name: &str) -> Option<&'static StdFunctionInfo> {
    STD_FUNCTIONS.iter().find(|info| spelling_eq(name, info.name))
}

/// Return `true` if `name` spells a standard function.
pub fn is_std_function(name: &str) -> bool {
    lookup(name).is_some()
}

const fn f(name: &'static str, summary: &'static str) -> StdFunctionInfo {
    StdFunctionInfo { name, summary }
}
