//! Compiler directive vocabulary.
//!
//! A directive line starts with `?` and names one or more directives, separated by commas:
//!
//! ```text
//! ?NOLIST, NOCODE
//! ?SOURCE $SYSTEM.SYSTEM.EXTDECS (FILE_OPEN_, FILE_CLOSE_)
//! ```
//!
//! Directives come in two forms:
//! - [`DirectiveForm::Simple`]: a bare name (`NOLIST`, `INSPECT`).
//! - [`DirectiveForm::Complex`]: a name followed by arguments (`SOURCE file (sections)`, `TARGET TNS_R`).
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-insensitive ASCII**.
//! - Some directive names (`IF`, `CODE`) are also reserved keywords; callers look them up by spelling.
//!
//! ## Examples
//! ```rust
//! use tal_core::lang::directives::{self, DirectiveForm, DirectiveId};
//!
//! assert_eq!(directives::from_str("source"), Some(DirectiveId::Source));
//! assert_eq!(directives::form(DirectiveId::NoList), DirectiveForm::Simple);
//! assert_eq!(directives::form(DirectiveId::Target), DirectiveForm::Complex);
//! ```

use super::registry::{Dialect, spelling_eq};

/// Stable identifier for compiler directives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveId {
    // Listing control
    List,
    NoList,
    Page,
    Lines,
    Columns,
    Code,
    NoCode,
    Icode,
    NoIcode,
    InnerList,
    NoInnerList,
    Map,
    NoMap,
    Gmap,
    NoGmap,
    Lmap,
    NoLmap,
    Fmap,
    NoFmap,
    CrossRef,
    NoCrossRef,
    DefExpand,
    NoDefExpand,
    Suppress,
    NoSuppress,
    Warn,
    NoWarn,

    // Source inclusion / conditional compilation
    Source,
    Section,
    If,
    IfNot,
    EndIf,
    SetTog,
    ResetTog,
    DefineTog,
    Assertion,

    // Object file / run-time environment
    Target,
    Env,
    Cpu,
    Heap,
    ExtendStack,
    LargeStack,
    DataPages,
    SymbolPages,
    Symbols,
    NoSymbols,
    Inspect,
    NoInspect,
    SaveAbend,
    NoSaveAbend,
    Check,
    NoCheck,
    Optimize,
    Compact,
    NoCompact,
    Fixup,
    NoFixup,
    Abort,
    NoAbort,
    Errors,
    ErrorFile,
    Syntax,
    Runnable,
    Library,
    Search,
    SaveGlobals,
    UseGlobals,
    BeginCompilation,
    Round,
    Int32Index,
    NoInt32Index,
    Sql,
    SqlMem,
    Subtype,
    HighPin,
    HighRequesters,
    Pep,
    Rp,
    Relocate,
    CallShared,
    PrintSym,
    NoPrintSym,
    AbsList,
    NoAbsList,
    Dumpcons,
}

/// How a directive takes its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveForm {
    /// Bare name, optionally followed by a comma.
    Simple,
    /// Name followed by arguments (parenthesised list, file name, or value).
    Complex,
}

/// Metadata for a directive.
#[derive(Debug, Clone, Copy)]
pub struct DirectiveInfo {
    pub id: DirectiveId,
    pub canonical: &'static str,
    pub form: DirectiveForm,
    pub dialect: Dialect,
    pub description: &'static str,
}

/// Registry of all compiler directives.
pub const DIRECTIVES: &[DirectiveInfo] = &[
    // Listing control
    simple(DirectiveId::List, "LIST", "Enable the compiler listing."),
    simple(DirectiveId::NoList, "NOLIST", "Suppress the compiler listing."),
    complex(DirectiveId::Page, "PAGE", "Start a new listing page, optionally with a heading."),
    complex(DirectiveId::Lines, "LINES", "Set the number of lines per listing page."),
    complex(DirectiveId::Columns, "COLUMNS", "Set the rightmost source column the compiler reads."),
    simple(DirectiveId::Code, "CODE", "List instruction codes."),
    simple(DirectiveId::NoCode, "NOCODE", "Do not list instruction codes."),
    simple(DirectiveId::Icode, "ICODE", "List instruction mnemonics."),
    simple(DirectiveId::NoIcode, "NOICODE", "Do not list instruction mnemonics."),
    simple(DirectiveId::InnerList, "INNERLIST", "List mnemonics after each statement."),
    simple(DirectiveId::NoInnerList, "NOINNERLIST", "Stop listing mnemonics after each statement."),
    simple(DirectiveId::Map, "MAP", "List identifier maps."),
    simple(DirectiveId::NoMap, "NOMAP", "Do not list identifier maps."),
    simple(DirectiveId::Gmap, "GMAP", "List the global map."),
    simple(DirectiveId::NoGmap, "NOGMAP", "Do not list the global map."),
    simple(DirectiveId::Lmap, "LMAP", "List load maps."),
    simple(DirectiveId::NoLmap, "NOLMAP", "Do not list load maps."),
    simple(DirectiveId::Fmap, "FMAP", "List the file map."),
    simple(DirectiveId::NoFmap, "NOFMAP", "Do not list the file map."),
    complex(DirectiveId::CrossRef, "CROSSREF", "Collect cross-reference information for the listed classes."),
    complex(DirectiveId::NoCrossRef, "NOCROSSREF", "Stop collecting cross-reference information."),
    simple(DirectiveId::DefExpand, "DEFEXPAND", "List expanded DEFINE bodies."),
    simple(DirectiveId::NoDefExpand, "NODEFEXPAND", "Do not list expanded DEFINE bodies."),
    simple(DirectiveId::Suppress, "SUPPRESS", "Suppress all listing output except diagnostics."),
    simple(DirectiveId::NoSuppress, "NOSUPPRESS", "Resume normal listing output."),
    complex(DirectiveId::Warn, "WARN", "Enable warnings, optionally a single warning number."),
    complex(DirectiveId::NoWarn, "NOWARN", "Suppress warnings, optionally a single warning number."),
    // Source inclusion / conditional compilation
    complex(DirectiveId::Source, "SOURCE", "Read source text, optionally only the listed sections, from a file."),
    complex(DirectiveId::Section, "SECTION", "Name the following source text as a section."),
    complex(DirectiveId::If, "IF", "Compile the following text if the toggle is on."),
    complex(DirectiveId::IfNot, "IFNOT", "Compile the following text if the toggle is off."),
    complex(DirectiveId::EndIf, "ENDIF", "End a conditional compilation region."),
    complex(DirectiveId::SetTog, "SETTOG", "Turn toggles on."),
    complex(DirectiveId::ResetTog, "RESETTOG", "Turn toggles off."),
    complex(DirectiveId::DefineTog, "DEFINETOG", "Declare toggles without changing their state."),
    complex(DirectiveId::Assertion, "ASSERTION", "Set the assertion level and the procedure called on failure."),
    // Object file / run-time environment
    complex(DirectiveId::Target, "TARGET", "Select the target system for the object file."),
    complex(DirectiveId::Env, "ENV", "Select the run-time environment (COMMON, OLD, NEUTRAL)."),
    complex(DirectiveId::Cpu, "CPU", "Select the processor the object file runs on."),
    complex(DirectiveId::Heap, "HEAP", "Set the heap size in pages."),
    complex(DirectiveId::ExtendStack, "EXTENDSTACK", "Extend the data stack by a number of pages."),
    complex(DirectiveId::LargeStack, "LARGESTACK", "Set the size of the extended stack."),
    complex(DirectiveId::DataPages, "DATAPAGES", "Set the size of the data area in pages."),
    complex(DirectiveId::SymbolPages, "SYMBOLPAGES", "Set the size of the compiler symbol table."),
    simple(DirectiveId::Symbols, "SYMBOLS", "Save symbols for the symbolic debugger."),
    simple(DirectiveId::NoSymbols, "NOSYMBOLS", "Do not save debugger symbols."),
    simple(DirectiveId::Inspect, "INSPECT", "Select the symbolic debugger."),
    simple(DirectiveId::NoInspect, "NOINSPECT", "Select the low-level debugger."),
    simple(DirectiveId::SaveAbend, "SAVEABEND", "Save a process dump on abnormal termination."),
    simple(DirectiveId::NoSaveAbend, "NOSAVEABEND", "Do not save a process dump."),
    simple(DirectiveId::Check, "CHECK", "Generate range checks."),
    simple(DirectiveId::NoCheck, "NOCHECK", "Do not generate range checks."),
    complex(DirectiveId::Optimize, "OPTIMIZE", "Set the optimization level."),
    simple(DirectiveId::Compact, "COMPACT", "Move procedures to fill gaps in the code area."),
    simple(DirectiveId::NoCompact, "NOCOMPACT", "Do not compact the code area."),
    simple(DirectiveId::Fixup, "FIXUP", "Run the fixup pass."),
    simple(DirectiveId::NoFixup, "NOFIXUP", "Skip the fixup pass."),
    simple(DirectiveId::Abort, "ABORT", "Abort compilation when a source file cannot be opened."),
    simple(DirectiveId::NoAbort, "NOABORT", "Prompt instead of aborting on a missing source file."),
    complex(DirectiveId::Errors, "ERRORS", "Stop after the given number of errors."),
    complex(DirectiveId::ErrorFile, "ERRORFILE", "Write diagnostics to the named file."),
    simple(DirectiveId::Syntax, "SYNTAX", "Check syntax only; produce no object file."),
    simple(DirectiveId::Runnable, "RUNNABLE", "Produce a runnable object file."),
    complex(DirectiveId::Library, "LIBRARY", "Name the user run-time library."),
    complex(DirectiveId::Search, "SEARCH", "List object files searched for external references."),
    complex(DirectiveId::SaveGlobals, "SAVEGLOBALS", "Save global declarations to a file."),
    complex(DirectiveId::UseGlobals, "USEGLOBALS", "Read global declarations saved by SAVEGLOBALS."),
    simple(DirectiveId::BeginCompilation, "BEGINCOMPILATION", "Mark where compilation begins after USEGLOBALS."),
    simple(DirectiveId::Round, "ROUND", "Round FIXED results instead of truncating."),
    ptal(DirectiveId::Int32Index, "INT32INDEX", "Generate 32-bit indexes."),
    ptal(DirectiveId::NoInt32Index, "NOINT32INDEX", "Generate 16-bit indexes."),
    complex(DirectiveId::Sql, "SQL", "Enable embedded SQL, optionally with options."),
    complex(DirectiveId::SqlMem, "SQLMEM", "Select where SQL data structures are allocated."),
    complex(DirectiveId::Subtype, "SUBTYPE", "Set the process subtype."),
    simple(DirectiveId::HighPin, "HIGHPIN", "Run the process at a high PIN."),
    simple(DirectiveId::HighRequesters, "HIGHREQUESTERS", "Accept openers with high PINs."),
    complex(DirectiveId::Pep, "PEP", "Set the size of the procedure entry-point table."),
    complex(DirectiveId::Rp, "RP", "Set the register stack pointer value."),
    simple(DirectiveId::Relocate, "RELOCATE", "Warn about non-relocatable global data."),
    ptal(DirectiveId::CallShared, "CALL_SHARED", "Generate shared code."),
    simple(DirectiveId::PrintSym, "PRINTSYM", "List symbols."),
    simple(DirectiveId::NoPrintSym, "NOPRINTSYM", "Do not list symbols."),
    simple(DirectiveId::AbsList, "ABSLIST", "List code addresses relative to the code area."),
    simple(DirectiveId::NoAbsList, "NOABSLIST", "List code addresses relative to each procedure."),
    simple(DirectiveId::Dumpcons, "DUMPCONS", "Flush the constant pool after the current procedure."),
];

/// Canonical (upper-case) spelling.
pub fn as_str(id: DirectiveId) -> &'static str {
    info_for(id).canonical
}

/// Operand form.
pub fn form(id: DirectiveId) -> DirectiveForm {
    info_for(id).form
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: DirectiveId) -> &'static DirectiveInfo {
    DIRECTIVES.iter().find(|d| d.id == id).expect("directive info missing")
}

/// Lookup by spelling (any case).
pub fn from_str(s: &str) -> Option<DirectiveId> {
    DIRECTIVES.iter().find(|d| spelling_eq(s, d.canonical)).map(|d| d.id)
}

// --- helpers -----------------------------------------------------------------

const fn simple(id: DirectiveId, canonical: &'static str, description: &'static str) -> DirectiveInfo {
    DirectiveInfo {
        id,
        canonical,
        form: DirectiveForm::Simple,
        dialect: Dialect::Tal,
        description,
    }
}

const fn complex(id: DirectiveId, canonical: &'static str, description: &'static str) -> DirectiveInfo {
    DirectiveInfo {
        form: DirectiveForm::Complex,
        ..simple(id, canonical, description)
    }
}

const fn ptal(id: DirectiveId, canonical: &'static str, description: &'static str) -> DirectiveInfo {
    DirectiveInfo {
        dialect: Dialect::PTal,
        ..simple(id, canonical, description)
    }
}
