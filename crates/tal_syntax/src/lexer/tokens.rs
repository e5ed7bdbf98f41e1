//! Token types for the TAL tokenizer.
//!
//! The tokenizer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `DataType(DataTypeId)` for type words (`INT`, `STRING`, …)
//! - `Operator(OperatorId)` for operators, including word operators like `LAND`
//! - `Delimiter(DelimiterId)` and `Indirection(IndirectionId)` for the remaining symbols
//!
//! ## Notes
//! - ID-bearing tokens avoid stringly-typed checks in the symbol parser and the editor tooling.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use std::fmt;

use crate::span::Span;
use tal_core::lang::data_types::{self, DataTypeId};
use tal_core::lang::delimiters::{self, DelimiterId};
use tal_core::lang::indirection::{self, IndirectionId};
use tal_core::lang::keywords::{self, KeywordId};
use tal_core::lang::operators::{self, OperatorId};

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Vocabulary (ID-based) ==========
    Keyword(KeywordId),
    DataType(DataTypeId),
    Operator(OperatorId),
    Indirection(IndirectionId),
    Delimiter(DelimiterId),

    // ========== Identifiers and literals ==========
    Name(String),
    Number(i64),
    /// Unquoted string contents.
    String(String),

    // ========== Directives ==========
    /// The `?` marker. The directive name follows as its own token.
    Directive,
    /// A `?` that opens its line (only produced when comments are kept).
    DirectiveLine,

    // ========== Layout / trivia ==========
    NewLine,
    /// `! ... !` comment (only produced when comments are kept).
    Comment,
    /// `-- ...` comment (only produced when comments are kept).
    CommentLine,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword(id) => write!(f, "keyword {}", keywords::as_str(*id)),
            TokenKind::DataType(id) => write!(f, "type {}", data_types::as_str(*id)),
            TokenKind::Operator(id) => write!(f, "operator {}", operators::as_str(*id)),
            TokenKind::Indirection(id) => write!(f, "indirection {}", indirection::as_str(*id)),
            TokenKind::Delimiter(id) => write!(f, "delimiter {}", delimiters::as_str(*id)),
            TokenKind::Name(name) => write!(f, "name {name}"),
            TokenKind::Number(value) => write!(f, "number {value}"),
            TokenKind::String(s) => write!(f, "string {s:?}"),
            TokenKind::Directive => write!(f, "directive"),
            TokenKind::DirectiveLine => write!(f, "directive line"),
            TokenKind::NewLine => write!(f, "newline"),
            TokenKind::Comment => write!(f, "comment"),
            TokenKind::CommentLine => write!(f, "line comment"),
        }
    }
}

/// A token with its kind, exact source spelling, and position.
///
/// ## Notes
/// - `text` is always `source[span.start..span.end]`.
/// - `line` is 0-based; `start_char`/`end_char` are 0-based character columns on that line. A token that
///   crosses a line break (a multi-line string) ends its column range at the break.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
    pub line: usize,
    pub start_char: usize,
    pub end_char: usize,
}

impl Token {
    /// Construct a token from its spelling; `end_char` is derived from `text`.
    pub fn new(kind: TokenKind, text: &str, span: Span, line: usize, start_char: usize) -> Self {
        Self {
            kind,
            text: text.to_string(),
            span,
            line,
            start_char,
            end_char: start_char + first_line_width(text),
        }
    }
}

/// Characters up to and including the first line break.
fn first_line_width(text: &str) -> usize {
    match text.find(['\n', '\r']) {
        Some(i) => {
            let terminator = if text[i..].starts_with("\r\n") { 2 } else { 1 };
            text[..i].chars().count() + terminator
        }
        None => text.chars().count(),
    }
}
