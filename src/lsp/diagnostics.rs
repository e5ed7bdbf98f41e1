//! Convert TAL syntax diagnostics and spans to LSP types

use tal_syntax::diagnostics::{Severity, SyntaxDiagnostic};
use tal_syntax::span::Span;
use tower_lsp::lsp_types::{
    Diagnostic, DiagnosticRelatedInformation, DiagnosticSeverity, Location, NumberOrString, Position, Range, Url,
};

/// Convert a byte offset to LSP Position (0-based line and character)
///
/// `\r\n` and a lone `\r` each end one line, matching the tokenizer. Characters are counted in UTF-16 code
/// units, the protocol's default position encoding.
pub fn offset_to_position(source: &str, offset: usize) -> Position {
    let offset = offset.min(source.len());
    let mut line = 0u32;
    let mut col = 0u32;
    let mut chars = source.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if i >= offset {
            break;
        }
        match c {
            '\r' if chars.peek().is_some_and(|&(_, next)| next == '\n') => {}
            '\n' | '\r' => {
                line += 1;
                col = 0;
            }
            _ => col += c.len_utf16() as u32,
        }
    }

    Position::new(line, col)
}

/// Convert an LSP Position back to a byte offset.
///
/// ## Returns
/// - `None` if the line does not exist. A character past the end of its line clamps to the line end.
pub fn position_to_offset(source: &str, position: Position) -> Option<usize> {
    let mut line = 0u32;
    let mut col = 0u32;
    let mut chars = source.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        let is_break = c == '\n' || c == '\r';
        // A column inside a surrogate pair resolves to the pair's start.
        if line == position.line && (col + c.len_utf16() as u32 > position.character || is_break) {
            return Some(i);
        }
        match c {
            '\r' if chars.peek().is_some_and(|&(_, next)| next == '\n') => {}
            '\n' | '\r' => {
                line += 1;
                col = 0;
            }
            _ => col += c.len_utf16() as u32,
        }
    }

    (line == position.line).then_some(source.len())
}

/// Convert a span to LSP Range
///
/// Empty spans are widened to one character so editors still draw them.
pub fn span_to_range(source: &str, span: Span) -> Range {
    let start_pos = offset_to_position(source, span.start);
    let end_pos = offset_to_position(source, span.end.max(span.start + 1));
    Range::new(start_pos, end_pos)
}

fn severity_to_lsp(severity: Severity) -> DiagnosticSeverity {
    match severity {
        Severity::Warning => DiagnosticSeverity::WARNING,
        Severity::Hint => DiagnosticSeverity::HINT,
    }
}

/// Convert a SyntaxDiagnostic to LSP Diagnostic
pub fn syntax_diagnostic_to_lsp(diagnostic: &SyntaxDiagnostic, source: &str, uri: &Url) -> Diagnostic {
    let range = span_to_range(source, diagnostic.span);

    let mut message = diagnostic.message.clone();
    for hint in &diagnostic.hints {
        message.push_str("\n\nhint: ");
        message.push_str(hint);
    }

    // Hints also go to related information (shows in Problems panel)
    let related_information: Vec<DiagnosticRelatedInformation> = diagnostic
        .hints
        .iter()
        .map(|hint| DiagnosticRelatedInformation {
            location: Location {
                uri: uri.clone(),
                range,
            },
            message: format!("hint: {}", hint),
        })
        .collect();

    Diagnostic {
        range,
        severity: Some(severity_to_lsp(diagnostic.severity)),
        code: Some(NumberOrString::String(diagnostic.kind.code().to_string())),
        code_description: None,
        source: Some("tal".to_string()),
        message,
        related_information: if related_information.is_empty() {
            None
        } else {
            Some(related_information)
        },
        tags: None,
        data: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tal_syntax::lexer::LexOptions;

    #[test]
    fn test_offset_to_position() {
        let source = "line 1\nline 2\nline 3";

        let pos = offset_to_position(source, 0);
        assert_eq!(pos.line, 0);
        assert_eq!(pos.character, 0);

        let pos = offset_to_position(source, 7); // Start of "line 2"
        assert_eq!(pos.line, 1);
        assert_eq!(pos.character, 0);

        let pos = offset_to_position(source, 10); // "e 2"
        assert_eq!(pos.line, 1);
        assert_eq!(pos.character, 3);
    }

    #[test]
    fn test_offset_to_position_crlf_and_multibyte() {
        let source = "é\r\nab\rc";
        assert_eq!(offset_to_position(source, 2), Position::new(0, 1));
        assert_eq!(offset_to_position(source, 4), Position::new(1, 0));
        assert_eq!(offset_to_position(source, 7), Position::new(2, 0));
        assert_eq!(offset_to_position(source, 99), Position::new(2, 1));
    }

    #[test]
    fn test_position_to_offset() {
        let source = "INT a;\r\nINT bb;\n";
        assert_eq!(position_to_offset(source, Position::new(0, 4)), Some(4));
        assert_eq!(position_to_offset(source, Position::new(1, 4)), Some(12));
        // Past the end of a line clamps to its terminator.
        assert_eq!(position_to_offset(source, Position::new(0, 40)), Some(6));
        assert_eq!(position_to_offset(source, Position::new(2, 0)), Some(source.len()));
        assert_eq!(position_to_offset(source, Position::new(5, 0)), None);
    }

    #[test]
    fn test_positions_count_utf16_code_units() {
        // U+1F600 is one char but two UTF-16 code units.
        let source = "s := \"\u{1F600}\"; x";
        let x = source.find('x').unwrap();
        assert_eq!(offset_to_position(source, x), Position::new(0, 11));
        assert_eq!(position_to_offset(source, Position::new(0, 11)), Some(x));
        // A column between the two units of the pair resolves to the character's start.
        assert_eq!(position_to_offset(source, Position::new(0, 7)), Some(6));
    }

    #[test]
    fn test_span_to_range_widens_empty_spans() {
        let range = span_to_range("abc", Span::new(1, 1));
        assert_eq!(range, Range::new(Position::new(0, 1), Position::new(0, 2)));
    }

    #[test]
    fn test_syntax_diagnostic_to_lsp() {
        let source = "INT x;\nEND;";
        let analysis = tal_syntax::analyze(source, LexOptions::default());
        let uri = Url::parse("file:///tmp/prog.tal").unwrap();

        assert_eq!(analysis.diagnostics.len(), 1);
        let diag = syntax_diagnostic_to_lsp(&analysis.diagnostics[0], source, &uri);
        assert_eq!(diag.severity, Some(DiagnosticSeverity::WARNING));
        assert_eq!(diag.range, Range::new(Position::new(1, 0), Position::new(1, 3)));
        assert_eq!(
            diag.code,
            Some(NumberOrString::String("tal::symbols::unbalanced-end".to_string()))
        );
        assert_eq!(diag.source.as_deref(), Some("tal"));
    }
}
