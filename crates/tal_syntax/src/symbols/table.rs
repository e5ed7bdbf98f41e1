//! Symbol table types.
//!
//! The table is flat: every entry is keyed by the label of the scope it was declared in plus its name, so
//! `p.count` and `Global.count` are distinct entries. DEFINE parameters and bodies get compound keys
//! (`Global.swap.a`, `Global.swap.Body`).
//!
//! ## Notes
//! - Keys are unique within one parse. Inserting an existing key replaces the entry **in place**: the later
//!   declaration wins, and iteration order stays the order of first declaration.

use std::collections::HashMap;
use std::fmt;

use crate::lexer::Token;
use crate::span::Span;
use tal_core::lang::data_types::{self, DataTypeId};

/// Scope label of top-level declarations.
pub const GLOBAL_CONTEXT: &str = "Global";

/// Broad category of a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Directive,
    Function,
    Variable,
    Constant,
    Keyword,
    Identifier,
    Literal,
    Define,
}

/// Finer classification of a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolType {
    /// The name entry of a DEFINE.
    Identifier,
    /// A DEFINE or procedure formal parameter.
    Parameter,
    /// A DEFINE body.
    Body,
    /// A LITERAL value.
    Value,
    Directive,
    /// A procedure named in a `?SOURCE` section list.
    External,
    Procedure,
    Subprocedure,
    Struct,
    /// A variable of the given data type.
    Typed(DataTypeId),
}

impl fmt::Display for SymbolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolType::Identifier => write!(f, "Identifier"),
            SymbolType::Parameter => write!(f, "Parameter"),
            SymbolType::Body => write!(f, "Body"),
            SymbolType::Value => write!(f, "Value"),
            SymbolType::Directive => write!(f, "Directive"),
            SymbolType::External => write!(f, "External"),
            SymbolType::Procedure => write!(f, "Procedure"),
            SymbolType::Subprocedure => write!(f, "Subprocedure"),
            SymbolType::Struct => write!(f, "Struct"),
            SymbolType::Typed(id) => write!(f, "{}", data_types::as_str(*id)),
        }
    }
}

/// Payload attached to a symbol.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SymbolValue {
    #[default]
    None,
    Text(String),
    /// DEFINE bodies keep their tokens verbatim.
    Tokens(Vec<Token>),
}

impl SymbolValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            SymbolValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_tokens(&self) -> Option<&[Token]> {
        match self {
            SymbolValue::Tokens(tokens) => Some(tokens),
            _ => None,
        }
    }

    /// Render the value as source-like text (`Tokens` are joined the same way LITERAL values are).
    pub fn render(&self) -> String {
        match self {
            SymbolValue::None => String::new(),
            SymbolValue::Text(text) => text.clone(),
            SymbolValue::Tokens(tokens) => join_token_text(tokens),
        }
    }
}

/// Compound key suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeySuffix {
    None,
    Parameter(String),
    Body,
}

/// Identity of a symbol within one parse: `context.name[.suffix]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SymbolKey {
    pub context: String,
    pub name: String,
    pub suffix: KeySuffix,
}

impl SymbolKey {
    pub fn new(context: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            name: name.into(),
            suffix: KeySuffix::None,
        }
    }

    pub fn with_suffix(mut self, suffix: KeySuffix) -> Self {
        self.suffix = suffix;
        self
    }
}

impl fmt::Display for SymbolKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.context, self.name)?;
        match &self.suffix {
            KeySuffix::None => Ok(()),
            KeySuffix::Parameter(p) => write!(f, ".{p}"),
            KeySuffix::Body => write!(f, ".Body"),
        }
    }
}

/// One extracted declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
    pub key: SymbolKey,
    pub kind: SymbolKind,
    pub ty: SymbolType,
    pub name: String,
    pub value: SymbolValue,
    pub context: String,
    pub line: usize,
    pub start_char: usize,
    pub end_char: usize,
    pub span: Span,
}

impl SymbolEntry {
    /// Build an entry positioned at `token`, keyed `context.name`.
    pub fn at(token: &Token, kind: SymbolKind, ty: SymbolType, context: &str) -> Self {
        Self {
            key: SymbolKey::new(context, token.text.as_str()),
            kind,
            ty,
            name: token.text.clone(),
            value: SymbolValue::None,
            context: context.to_string(),
            line: token.line,
            start_char: token.start_char,
            end_char: token.end_char,
            span: token.span,
        }
    }

    pub fn with_key(mut self, key: SymbolKey) -> Self {
        self.key = key;
        self
    }

    pub fn with_value(mut self, value: SymbolValue) -> Self {
        self.value = value;
        self
    }
}

/// Flat, ordered symbol table with last-wins keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    entries: Vec<SymbolEntry>,
    index: HashMap<SymbolKey, usize>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `entry`, replacing any entry with the same key in place.
    ///
    /// ## Returns
    /// - The replaced entry, if the key was already present.
    pub fn insert(&mut self, entry: SymbolEntry) -> Option<SymbolEntry> {
        match self.index.get(&entry.key) {
            Some(&slot) => Some(std::mem::replace(&mut self.entries[slot], entry)),
            None => {
                self.index.insert(entry.key.clone(), self.entries.len());
                self.entries.push(entry);
                None
            }
        }
    }

    pub fn get(&self, key: &SymbolKey) -> Option<&SymbolEntry> {
        self.index.get(key).map(|&slot| &self.entries[slot])
    }

    /// First entry whose name matches `name`, ignoring ASCII case.
    pub fn get_by_name(&self, name: &str) -> Option<&SymbolEntry> {
        self.entries.iter().find(|e| e.name.eq_ignore_ascii_case(name))
    }

    /// All entries whose name matches `name`, ignoring ASCII case.
    pub fn find_by_name<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a SymbolEntry> + 'a {
        self.entries.iter().filter(move |e| e.name.eq_ignore_ascii_case(name))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SymbolEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[SymbolEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<SymbolEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }
}

impl<'a> IntoIterator for &'a SymbolTable {
    type Item = &'a SymbolEntry;
    type IntoIter = std::slice::Iter<'a, SymbolEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Join token spellings the way they read in source.
///
/// ## Notes
/// - Tokens that touch in the source are concatenated (`$SYSTEM.SYSTEM.X`); tokens separated by whitespace are
///   joined with a single space (`%H10 + 2`).
/// - Newlines and comments are dropped.
pub fn join_token_text(tokens: &[Token]) -> String {
    let mut out = String::new();
    let mut prev_end: Option<usize> = None;
    for token in tokens.iter().filter(|t| !t.kind.is_layout()) {
        if prev_end.is_some_and(|end| end < token.span.start) {
            out.push(' ');
        }
        out.push_str(&token.text);
        prev_end = Some(token.span.end);
    }
    out
}
