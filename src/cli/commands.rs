//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.
//!
//! The dump formats are produced by plain `format_*` functions so tests can snapshot them without touching the
//! file system.

use std::fmt::Write as _;
use std::fs;

use miette::{NamedSource, Report};
use tal_syntax::diagnostics::{Severity, SyntaxDiagnostic};
use tal_syntax::lexer::{self, LexOptions, Token};
use tal_syntax::symbols::{SymbolEntry, SymbolValue};

use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (100 MB)
///
/// Files larger than this are rejected to prevent out-of-memory conditions
/// while tokenizing.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read source file contents.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(file_path: &str) -> CliResult<String> {
    // Check file size before reading
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path, e)))
}

// ============================================================================
// Commands
// ============================================================================

/// Tokenize a file and print one token per line.
///
/// Recovery warnings go to stderr; they never fail the dump.
pub fn lex_file(file_path: &str, keep_comments: bool) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let options = LexOptions {
        keep_comments,
        ..LexOptions::default()
    };
    let lexed = lexer::Lexer::with_options(&source, options).tokenize();

    print!("{}", format_tokens(&lexed.tokens));
    if !lexed.diagnostics.is_empty() {
        eprint!("{}", render_diagnostics(file_path, &source, &lexed.diagnostics));
    }
    Ok(ExitCode::SUCCESS)
}

/// Tokenize and parse a file and print the symbol table.
pub fn symbols_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let analysis = tal_syntax::analyze(&source, LexOptions::default());

    print!("{}", format_symbols(analysis.symbols.entries()));
    if !analysis.diagnostics.is_empty() {
        eprint!("{}", render_diagnostics(file_path, &source, &analysis.diagnostics));
    }
    Ok(ExitCode::SUCCESS)
}

/// Report every recovery the tokenizer and symbol parser made.
///
/// ## Returns
/// - `Ok(ExitCode::SUCCESS)` when nothing was reported.
/// - `Err(CliError)` carrying the rendered reports otherwise. Hints only count in `strict` mode.
pub fn check_file(file_path: &str, strict: bool) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let analysis = tal_syntax::analyze(&source, LexOptions::default());

    let reported: Vec<SyntaxDiagnostic> = analysis
        .diagnostics
        .into_iter()
        .filter(|d| strict || d.severity == Severity::Warning)
        .collect();

    if reported.is_empty() {
        println!("✓ {}: {} symbols, no issues", file_path, analysis.symbols.len());
        return Ok(ExitCode::SUCCESS);
    }

    tracing::debug!(file = file_path, count = reported.len(), "check reported diagnostics");
    let mut msg = render_diagnostics(file_path, &source, &reported);
    let _ = write!(msg, "{} issue(s) in {}", reported.len(), file_path);
    Err(CliError::failure(msg))
}

// ============================================================================
// Formatting
// ============================================================================

/// One line per token: `line:start-end  kind  text`.
///
/// Positions are 0-based, as stored on the token. Line breaks in the spelling are escaped so each token stays
/// on one line.
pub fn format_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for tok in tokens {
        let _ = writeln!(
            out,
            "{}:{}-{}\t{}\t{:?}",
            tok.line, tok.start_char, tok.end_char, tok.kind, tok.text
        );
    }
    out
}

/// One line per symbol: `key  kind  type  line:start-end  [= value]`.
pub fn format_symbols(entries: &[SymbolEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        let _ = write!(
            out,
            "{}\t{:?}\t{}\t{}:{}-{}",
            entry.key, entry.kind, entry.ty, entry.line, entry.start_char, entry.end_char
        );
        if !matches!(entry.value, SymbolValue::None) {
            let _ = write!(out, "\t= {}", entry.value.render());
        }
        out.push('\n');
    }
    out
}

/// Render diagnostics as miette reports with the offending source underlined.
pub fn render_diagnostics(file_path: &str, source: &str, diagnostics: &[SyntaxDiagnostic]) -> String {
    let mut out = String::new();
    for diagnostic in diagnostics {
        let report = Report::new(diagnostic.clone()).with_source_code(NamedSource::new(file_path, source.to_string()));
        let _ = writeln!(out, "{:?}", report);
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_format_tokens_one_line_each() {
        let tokens = lexer::tokenize("INT x;\n");
        let dump = format_tokens(&tokens);
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines.len(), tokens.len());
        assert_eq!(lines[0], "0:0-3\ttype INT\t\"INT\"");
        assert_eq!(lines[3], "0:6-7\tnewline\t\"\\n\"");
    }

    #[test]
    fn test_format_symbols_includes_values() {
        let analysis = tal_syntax::analyze("LITERAL max = 10;\nINT x;\n", LexOptions::default());
        let dump = format_symbols(analysis.symbols.entries());
        assert_eq!(
            dump,
            "Global.max\tLiteral\tValue\t0:8-11\t= 10\nGlobal.x\tVariable\tINT\t1:4-5\n"
        );
    }

    #[test]
    fn test_render_diagnostics_mentions_code_and_file() {
        let analysis = tal_syntax::analyze("INT x ~;", LexOptions::default());
        let rendered = render_diagnostics("prog.tal", "INT x ~;", &analysis.diagnostics);
        assert!(rendered.contains("tal::lex::unknown-character"), "{rendered}");
        assert!(rendered.contains("prog.tal"), "{rendered}");
    }

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source("definitely/not/here.tal").unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("Cannot access file"));
    }
}
