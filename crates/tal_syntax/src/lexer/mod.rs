//! Tokenizer for TAL source text.
//!
//! Handles tokenization including:
//! - Reserved words, data-type words and word operators (case-insensitive)
//! - Names, including `$`-prefixed standard functions and `^` in identifiers
//! - Integer literals with base prefixes (`%`, `%B`, `%H`) and size suffixes (`D`, `F`)
//! - `"` strings, `--` and `! ... !` comments, `?` directive markers
//! - Longest-match symbols (indirection, delimiters, operators, line terminators)
//!
//! The tokenizer is total: every input produces a token stream, and every best-effort recovery is reported as a
//! [`SyntaxDiagnostic`] instead of an error.
//!
//! ## Module Structure
//!
//! - `cursor` - Character cursor (position, lookahead, consumption)
//! - `tokens` - Token types (TokenKind, Token)
//! - `numbers` - Numeric literal scanning
//! - `strings` - String and comment scanning

pub mod cursor;
mod numbers;
mod strings;
pub mod tokens;

pub use cursor::Cursor;
pub use tokens::{Token, TokenKind};

use crate::diagnostics::{SyntaxDiagnostic, errors};
use crate::span::Span;
use tal_core::lang::data_types;
use tal_core::lang::delimiters::DelimiterId;
use tal_core::lang::indirection::IndirectionId;
use tal_core::lang::keywords;
use tal_core::lang::numeric;
use tal_core::lang::operators;
use tal_core::lang::registry::{is_ident_continue, is_ident_start};
use tal_core::lang::symbols::{self, SymbolClass};

/// Tokenizer configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexOptions {
    /// Emit `Comment`/`CommentLine` tokens and mark line-leading `?` as `DirectiveLine`.
    pub keep_comments: bool,
    /// Let a name run on across single blanks (`my var`) for multi-word legacy identifiers. The run never
    /// swallows a reserved word, data type or word operator.
    pub multi_word_names: bool,
}

/// Output of one tokenizer pass.
#[derive(Debug, Clone, Default)]
pub struct Lexed {
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<SyntaxDiagnostic>,
}

// ============================================================================
// LEXER STATE
// ----------------------------------------------------------------------------
// Priority at each position:
//
//   whitespace → `--` comment → `!` comment → `?` → number → word → `"` string
//              → longest-match symbol → drop one character
// ============================================================================

/// Tokenizer for TAL source text.
///
/// Each instance owns its own cursor, so concurrent passes over different documents never share state.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    options: LexOptions,
    tokens: Vec<Token>,
    diagnostics: Vec<SyntaxDiagnostic>,
}

impl<'a> Lexer<'a> {
    /// Create a tokenizer with default options (comments dropped).
    pub fn new(source: &'a str) -> Self {
        Self::with_options(source, LexOptions::default())
    }

    pub fn with_options(source: &'a str, options: LexOptions) -> Self {
        Self {
            cursor: Cursor::new(source),
            options,
            tokens: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Tokenize the entire input.
    ///
    /// Never fails; recoveries are listed in [`Lexed::diagnostics`].
    pub fn tokenize(mut self) -> Lexed {
        while !self.cursor.is_at_end() {
            self.scan_token();
        }
        tracing::debug!(
            tokens = self.tokens.len(),
            diagnostics = self.diagnostics.len(),
            "tokenized"
        );
        Lexed {
            tokens: self.tokens,
            diagnostics: self.diagnostics,
        }
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) {
        let start = self.mark();
        let Some(c) = self.cursor.peek() else {
            return;
        };

        match c {
            ' ' | '\t' | '\x0c' => {
                self.cursor.skip_while(|c| matches!(c, ' ' | '\t' | '\x0c'));
            }

            '-' if self.cursor.peek_at(1) == Some('-') => self.scan_line_comment(start),
            '!' => self.scan_bang_comment(start),

            '?' => {
                let line_leading = self.cursor.line_prefix().trim().is_empty();
                self.cursor.consume();
                let kind = if self.options.keep_comments && line_leading {
                    TokenKind::DirectiveLine
                } else {
                    TokenKind::Directive
                };
                self.add_token(kind, start);
            }

            '0'..='9' => self.scan_number(start),
            '%' if numeric::match_base_prefix(self.cursor.rest()).is_some() => self.scan_number(start),

            _ if is_ident_start(c) => self.scan_word(start),

            '"' => self.scan_string(start),

            _ => self.scan_symbol(start, c),
        }
    }

    // ========================================================================
    // Token helpers
    // ========================================================================

    fn mark(&self) -> Mark {
        Mark {
            offset: self.cursor.offset(),
            line: self.cursor.line(),
            column: self.cursor.column(),
        }
    }

    fn span_from(&self, start: Mark) -> Span {
        Span::new(start.offset, self.cursor.offset())
    }

    fn add_token(&mut self, kind: TokenKind, start: Mark) {
        let span = self.span_from(start);
        let text = self.cursor.slice(span.start, span.end);
        tracing::trace!(%kind, start = span.start, end = span.end, "token");
        self.tokens
            .push(Token::new(kind, text, span, start.line, start.column));
    }

    fn diagnose(&mut self, diagnostic: SyntaxDiagnostic) {
        tracing::debug!(code = diagnostic.kind.code(), message = %diagnostic.message, "recovered");
        self.diagnostics.push(diagnostic);
    }

    /// Last token that is not a comment.
    fn previous_significant(&self) -> Option<&TokenKind> {
        self.tokens
            .iter()
            .rev()
            .map(|t| &t.kind)
            .find(|k| !matches!(k, TokenKind::Comment | TokenKind::CommentLine))
    }

    // ========================================================================
    // Words
    // ========================================================================

    fn scan_word(&mut self, start: Mark) {
        self.cursor.consume();
        self.cursor.skip_while(is_ident_continue);
        let mut spelling = self.cursor.slice(start.offset, self.cursor.offset());

        if self.options.multi_word_names && !self.follows_directive_marker() {
            while matches!(classify_word(spelling), TokenKind::Name(_)) {
                let Some(len) = next_name_after_blank(self.cursor.rest()) else {
                    break;
                };
                self.cursor.consume_bytes(len);
                spelling = self.cursor.slice(start.offset, self.cursor.offset());
            }
        }

        let kind = classify_word(spelling);
        self.add_token(kind, start);
    }

    /// Directive names (`?SOURCE file`) are never joined with their arguments.
    fn follows_directive_marker(&self) -> bool {
        self.previous_significant().is_some_and(TokenKind::is_directive_marker)
    }

    // ========================================================================
    // Symbols
    // ========================================================================

    fn scan_symbol(&mut self, start: Mark, c: char) {
        let Some(m) = symbols::longest_match(self.cursor.rest()) else {
            self.cursor.consume();
            let span = self.span_from(start);
            self.diagnose(errors::unknown_character(c, span));
            return;
        };

        self.cursor.consume_bytes(m.len);
        let kind = match m.class {
            SymbolClass::Indirection(id) => TokenKind::Indirection(id),
            SymbolClass::Delimiter(DelimiterId::Dot)
                if matches!(self.previous_significant(), Some(TokenKind::DataType(_))) =>
            {
                tracing::debug!(offset = start.offset, "'.' after data type is standard indirection");
                TokenKind::Indirection(IndirectionId::Standard)
            }
            SymbolClass::Delimiter(id) => TokenKind::Delimiter(id),
            SymbolClass::Operator(id) => TokenKind::Operator(id),
            SymbolClass::LineTerminator => TokenKind::NewLine,
        };
        self.add_token(kind, start);
    }
}

/// Start position of the token being scanned.
#[derive(Debug, Clone, Copy)]
struct Mark {
    offset: usize,
    line: usize,
    column: usize,
}

// ============================================================================
// Helper functions
// ============================================================================

/// Byte length of ` word` when `rest` is one blank followed by a plain name.
fn next_name_after_blank(rest: &str) -> Option<usize> {
    let word = rest.strip_prefix(' ')?;
    if !word.chars().next().is_some_and(is_ident_start) {
        return None;
    }
    let len = word.find(|c: char| !is_ident_continue(c)).unwrap_or(word.len());
    matches!(classify_word(&word[..len]), TokenKind::Name(_)).then_some(1 + len)
}

/// Classify a scanned word: data type, then word operator, then keyword, then plain name.
pub fn classify_word(spelling: &str) -> TokenKind {
    if let Some(id) = data_types::from_str(spelling) {
        TokenKind::DataType(id)
    } else if let Some(id) = operators::from_word(spelling) {
        TokenKind::Operator(id)
    } else if let Some(id) = keywords::from_str(spelling) {
        TokenKind::Keyword(id)
    } else {
        TokenKind::Name(spelling.to_string())
    }
}

/// Tokenize `source` with default options, keeping the diagnostics.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Lexed {
    Lexer::new(source).tokenize()
}

/// Tokenize `source` with default options and return only the tokens.
pub fn tokenize(source: &str) -> Vec<Token> {
    lex(source).tokens
}

#[cfg(test)]
mod tests;
