//! Recovery diagnostics for the tokenizer and symbol parser.
//!
//! Neither stage ever fails: unterminated strings, stray `END`s and unknown characters are all recovered from.
//! Each recovery is recorded as a [`SyntaxDiagnostic`] so callers can tell a clean pass from a best-effort one,
//! and so the editor can underline the spot.
//!
//! ## Notes
//! - `SyntaxDiagnostic` implements [`miette::Diagnostic`], so the CLI renders it with source context.

use std::fmt;

use miette::{LabeledSpan, Severity as MietteSeverity};

use crate::span::Span;

/// What was recovered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// A character no token rule accepts; it was dropped.
    UnknownCharacter,
    /// A `"` string with no closing quote; it runs to end of input.
    UnterminatedString,
    /// A `!` comment with no closing `!`; it ends at the line terminator.
    UnterminatedComment,
    /// An integer literal that does not fit in 64 bits; its value saturates.
    IntegerOutOfRange,
    /// A DEFINE body with no `#`; it runs to end of input.
    UnterminatedDefine,
    /// A declaration keyword not followed by a name.
    MissingDeclarationName,
    /// An `END` with no open `BEGIN`.
    UnbalancedEnd,
}

impl DiagnosticKind {
    /// Stable diagnostic code shown by the CLI and sent to the editor.
    pub const fn code(self) -> &'static str {
        match self {
            DiagnosticKind::UnknownCharacter => "tal::lex::unknown-character",
            DiagnosticKind::UnterminatedString => "tal::lex::unterminated-string",
            DiagnosticKind::UnterminatedComment => "tal::lex::unterminated-comment",
            DiagnosticKind::IntegerOutOfRange => "tal::lex::integer-out-of-range",
            DiagnosticKind::UnterminatedDefine => "tal::symbols::unterminated-define",
            DiagnosticKind::MissingDeclarationName => "tal::symbols::missing-name",
            DiagnosticKind::UnbalancedEnd => "tal::symbols::unbalanced-end",
        }
    }

    pub const fn severity(self) -> Severity {
        match self {
            DiagnosticKind::UnterminatedComment => Severity::Hint,
            _ => Severity::Warning,
        }
    }
}

/// How loudly a diagnostic should be surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Warning,
    Hint,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Hint => write!(f, "hint"),
        }
    }
}

/// A best-effort recovery made while tokenizing or parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct SyntaxDiagnostic {
    pub kind: DiagnosticKind,
    pub severity: Severity,
    pub message: String,
    pub span: Span,
    pub label: Option<String>,
    pub hints: Vec<String>,
}

impl SyntaxDiagnostic {
    pub fn new(kind: DiagnosticKind, message: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            severity: kind.severity(),
            message: message.into(),
            span,
            label: None,
            hints: Vec::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }
}

impl miette::Diagnostic for SyntaxDiagnostic {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.kind.code()))
    }

    fn severity(&self) -> Option<MietteSeverity> {
        Some(match self.severity {
            Severity::Warning => MietteSeverity::Warning,
            Severity::Hint => MietteSeverity::Advice,
        })
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        if self.hints.is_empty() {
            None
        } else {
            Some(Box::new(self.hints.join("\n")))
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = LabeledSpan::new_with_span(self.label.clone(), self.span);
        Some(Box::new(std::iter::once(label)))
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// Constructors for every recovery the frontend performs, so messages stay consistent.
pub mod errors {
    use super::*;

    pub fn unknown_character(c: char, span: Span) -> SyntaxDiagnostic {
        SyntaxDiagnostic::new(
            DiagnosticKind::UnknownCharacter,
            format!("Unexpected character '{}'", c.escape_default()),
            span,
        )
        .with_label("skipped")
    }

    pub fn unterminated_string(span: Span) -> SyntaxDiagnostic {
        SyntaxDiagnostic::new(DiagnosticKind::UnterminatedString, "Unterminated string literal", span)
            .with_label("string starts here")
            .with_hint("Close the string with '\"'")
    }

    pub fn unterminated_comment(span: Span) -> SyntaxDiagnostic {
        SyntaxDiagnostic::new(DiagnosticKind::UnterminatedComment, "Comment is not closed with '!'", span)
            .with_label("comment ends at the end of the line")
    }

    pub fn integer_out_of_range(text: &str, span: Span) -> SyntaxDiagnostic {
        SyntaxDiagnostic::new(
            DiagnosticKind::IntegerOutOfRange,
            format!("Integer literal '{text}' does not fit in 64 bits"),
            span,
        )
        .with_label("value saturated")
    }

    pub fn unterminated_define(name: &str, span: Span) -> SyntaxDiagnostic {
        SyntaxDiagnostic::new(
            DiagnosticKind::UnterminatedDefine,
            format!("DEFINE '{name}' has no terminating '#'"),
            span,
        )
        .with_label("body runs to the end of the file")
        .with_hint("End the DEFINE body with '#'")
    }

    pub fn missing_declaration_name(keyword: &str, span: Span) -> SyntaxDiagnostic {
        SyntaxDiagnostic::new(
            DiagnosticKind::MissingDeclarationName,
            format!("Expected a name after {keyword}"),
            span,
        )
    }

    pub fn unbalanced_end(span: Span) -> SyntaxDiagnostic {
        SyntaxDiagnostic::new(DiagnosticKind::UnbalancedEnd, "END without a matching BEGIN", span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use miette::Diagnostic;

    #[test]
    fn severity_follows_kind() {
        let d = errors::unterminated_comment(Span::new(0, 3));
        assert_eq!(d.severity, Severity::Hint);
        assert_eq!(Diagnostic::severity(&d), Some(MietteSeverity::Advice));

        let d = errors::unbalanced_end(Span::new(0, 3));
        assert_eq!(d.severity, Severity::Warning);
    }

    #[test]
    fn miette_view_carries_code_label_and_help() {
        let d = errors::unterminated_string(Span::new(2, 7));
        assert_eq!(d.to_string(), "Unterminated string literal");
        assert_eq!(
            d.code().map(|c| c.to_string()).as_deref(),
            Some("tal::lex::unterminated-string")
        );
        assert!(d.help().is_some());

        let labels: Vec<LabeledSpan> = d.labels().into_iter().flatten().collect();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].offset(), 2);
        assert_eq!(labels[0].len(), 5);
    }
}
