//! Symbol-table views for the editor: outline, hover text, completion items and definition lookup.
//!
//! Everything here is a pure function of the source text and its [`Analysis`], so the backend only has to find
//! the document and forward the result.

use std::collections::HashSet;

use tal_core::lang::{data_types, directives, keywords, std_functions};
use tal_syntax::Analysis;
use tal_syntax::lexer::{Token, TokenKind};
use tal_syntax::symbols::{GLOBAL_CONTEXT, KeySuffix, SymbolEntry, SymbolKind, SymbolTable, SymbolType, SymbolValue};
use tower_lsp::lsp_types::{CompletionItem, CompletionItemKind, DocumentSymbol, Position, SymbolKind as LspSymbolKind};

use crate::lsp::diagnostics::{position_to_offset, span_to_range};

/// Hover/goto information resolved for a cursor position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolInfo {
    /// One-line declaration, rendered as a TAL code block.
    pub detail: String,
    /// Short category shown under the code block.
    pub kind: String,
}

/// The word token under `position`, if any.
///
/// A cursor just past the end of a word still counts as on it.
pub fn word_at<'a>(tokens: &'a [Token], source: &str, position: Position) -> Option<&'a Token> {
    let offset = position_to_offset(source, position)?;
    tokens
        .iter()
        .filter(|t| t.kind.is_word())
        .find(|t| t.span.touches(offset))
}

// ============================================================================
// Outline
// ============================================================================

/// Build the document outline.
///
/// Top-level declarations come first; declarations scoped to a procedure or structure nest under it, DEFINE
/// parameters nest under their DEFINE, and procedures named by a `?SOURCE` directive nest under that directive.
pub fn document_symbols(source: &str, table: &SymbolTable) -> Vec<DocumentSymbol> {
    let mut expanded = HashSet::new();
    symbols_in_context(source, table, GLOBAL_CONTEXT, &mut expanded)
}

fn symbols_in_context(
    source: &str,
    table: &SymbolTable,
    context: &str,
    expanded: &mut HashSet<String>,
) -> Vec<DocumentSymbol> {
    if !expanded.insert(context.to_string()) {
        return Vec::new();
    }

    let mut out = Vec::new();
    for entry in table.iter().filter(|e| e.context == context && e.key.suffix == KeySuffix::None) {
        let children = match (entry.kind, entry.ty) {
            (SymbolKind::Function, SymbolType::Procedure | SymbolType::Subprocedure)
            | (SymbolKind::Variable, SymbolType::Struct) => symbols_in_context(source, table, &entry.name, expanded),
            (SymbolKind::Define, SymbolType::Identifier) => table
                .iter()
                .filter(|p| {
                    p.context == context && p.key.name == entry.name && matches!(p.key.suffix, KeySuffix::Parameter(_))
                })
                .map(|p| leaf_symbol(source, p, Vec::new()))
                .collect(),
            (SymbolKind::Directive, _) if directives::from_str(&entry.name) == Some(directives::DirectiveId::Source) => {
                match entry.value.as_text() {
                    Some(file) => symbols_in_context(source, table, file, expanded),
                    None => Vec::new(),
                }
            }
            _ => Vec::new(),
        };
        out.push(leaf_symbol(source, entry, children));
    }
    out
}

#[allow(deprecated)] // `DocumentSymbol::deprecated` has to be spelled out
fn leaf_symbol(source: &str, entry: &SymbolEntry, children: Vec<DocumentSymbol>) -> DocumentSymbol {
    let range = span_to_range(source, entry.span);
    DocumentSymbol {
        name: entry.name.clone(),
        detail: Some(entry.ty.to_string()),
        kind: outline_kind(entry),
        tags: None,
        deprecated: None,
        range,
        selection_range: range,
        children: if children.is_empty() { None } else { Some(children) },
    }
}

fn outline_kind(entry: &SymbolEntry) -> LspSymbolKind {
    match (entry.kind, entry.ty) {
        (SymbolKind::Function, _) => LspSymbolKind::FUNCTION,
        (_, SymbolType::Struct) => LspSymbolKind::STRUCT,
        (_, SymbolType::Parameter) => LspSymbolKind::TYPE_PARAMETER,
        (SymbolKind::Literal | SymbolKind::Constant, _) => LspSymbolKind::CONSTANT,
        (SymbolKind::Define | SymbolKind::Identifier, _) => LspSymbolKind::CONSTANT,
        (SymbolKind::Directive, _) => LspSymbolKind::KEY,
        (SymbolKind::Keyword, _) => LspSymbolKind::KEY,
        (SymbolKind::Variable, _) => LspSymbolKind::VARIABLE,
    }
}

// ============================================================================
// Hover
// ============================================================================

/// Resolve hover information for `token`.
///
/// ## Notes
/// - Declared symbols win over vocabulary: a procedure named like a directive shows its declaration.
/// - Standard functions, keywords and data types fall back to their registry descriptions.
pub fn hover_info(token: &Token, analysis: &Analysis) -> Option<SymbolInfo> {
    if let Some(entry) = definition_of(&token.text, token.span.start, &analysis.symbols) {
        return Some(SymbolInfo {
            detail: symbol_detail(entry, &analysis.symbols),
            kind: symbol_kind_label(entry),
        });
    }

    if let Some(info) = std_functions::lookup(&token.text) {
        return Some(SymbolInfo {
            detail: info.name.to_string(),
            kind: format!("standard function: {}", info.summary),
        });
    }

    match &token.kind {
        TokenKind::DataType(id) => {
            let info = data_types::info_for(*id);
            Some(SymbolInfo {
                detail: info.canonical.to_string(),
                kind: format!("data type: {}", info.description),
            })
        }
        TokenKind::Keyword(id) => Some(SymbolInfo {
            detail: keywords::as_str(*id).to_string(),
            kind: format!("keyword ({:?})", keywords::category(*id)).to_lowercase(),
        }),
        TokenKind::Name(name) => directives::from_str(name).map(|id| {
            let info = directives::info_for(id);
            SymbolInfo {
                detail: format!("?{}", info.canonical),
                kind: format!("directive: {}", info.description),
            }
        }),
        _ => None,
    }
}

/// Render an entry as a one-line declaration.
pub fn symbol_detail(entry: &SymbolEntry, table: &SymbolTable) -> String {
    match (entry.kind, entry.ty) {
        (SymbolKind::Function, SymbolType::External) => format!("PROC {}  ! from ?SOURCE {}", entry.name, entry.context),
        (SymbolKind::Function, ty) => {
            let keyword = if ty == SymbolType::Subprocedure { "SUBPROC" } else { "PROC" };
            let params: Vec<&str> = table
                .iter()
                .filter(|p| p.context == entry.name && p.ty == SymbolType::Parameter && p.kind == SymbolKind::Variable)
                .map(|p| p.name.as_str())
                .collect();
            let mut sig = String::new();
            if let Some(ret) = entry.value.as_text() {
                sig.push_str(ret);
                sig.push(' ');
            }
            sig.push_str(keyword);
            sig.push(' ');
            sig.push_str(&entry.name);
            if !params.is_empty() {
                sig.push('(');
                sig.push_str(&params.join(", "));
                sig.push(')');
            }
            sig
        }
        (SymbolKind::Literal, _) => format!("LITERAL {} = {}", entry.name, entry.value.render()),
        (SymbolKind::Define, SymbolType::Identifier) => {
            let params: Vec<&str> = table
                .iter()
                .filter(|p| {
                    p.context == entry.context
                        && p.key.name == entry.name
                        && matches!(p.key.suffix, KeySuffix::Parameter(_))
                })
                .map(|p| p.name.as_str())
                .collect();
            let body = table
                .iter()
                .find(|b| b.context == entry.context && b.key.name == entry.name && b.key.suffix == KeySuffix::Body)
                .map(|b| b.value.render())
                .unwrap_or_default();
            if params.is_empty() {
                format!("DEFINE {} = {} #", entry.name, body)
            } else {
                format!("DEFINE {}({}) = {} #", entry.name, params.join(", "), body)
            }
        }
        (SymbolKind::Define, SymbolType::Parameter) => format!("{}  ! parameter of DEFINE {}", entry.name, entry.key.name),
        (SymbolKind::Variable, SymbolType::Parameter) => format!("{}  ! parameter of {}", entry.name, entry.context),
        (SymbolKind::Variable, SymbolType::Struct) => format!("STRUCT {}", entry.name),
        (SymbolKind::Variable, ty) => match &entry.value {
            SymbolValue::None => format!("{} {}", ty, entry.name),
            value => format!("{} {} := {}", ty, entry.name, value.render()),
        },
        (SymbolKind::Directive, _) => match &entry.value {
            SymbolValue::None => format!("?{}", entry.name),
            value => format!("?{} {}", entry.name, value.render()),
        },
        _ => entry.name.clone(),
    }
}

fn symbol_kind_label(entry: &SymbolEntry) -> String {
    let scope = if entry.context == GLOBAL_CONTEXT {
        String::from("global")
    } else {
        format!("in {}", entry.context)
    };
    format!("{:?} ({})", entry.kind, scope).to_lowercase()
}

// ============================================================================
// Definition
// ============================================================================

/// Find the declaration `name` most likely refers to from `offset`.
///
/// ## Notes
/// - Names match ignoring ASCII case.
/// - The closest declaration at or before `offset` wins; otherwise the first one in the file.
/// - DEFINE bodies are skipped; they share the DEFINE's name but are not declarations.
pub fn definition_of<'a>(name: &'a str, offset: usize, table: &'a SymbolTable) -> Option<&'a SymbolEntry> {
    let candidates = || table.find_by_name(name).filter(|e| e.key.suffix != KeySuffix::Body);
    candidates()
        .filter(|e| e.span.start <= offset)
        .max_by_key(|e| e.span.start)
        .or_else(|| candidates().min_by_key(|e| e.span.start))
}

// ============================================================================
// Completion
// ============================================================================

/// Return `true` if the cursor sits on a directive line (`?` is the first non-blank character).
pub fn on_directive_line(source: &str, offset: usize) -> bool {
    let offset = offset.min(source.len());
    let line_start = source[..offset].rfind(['\n', '\r']).map_or(0, |i| i + 1);
    source[line_start..offset].trim_start().starts_with('?')
}

/// Completion items for a cursor position.
///
/// On a directive line this is the directive vocabulary; elsewhere it is keywords, data types, standard
/// functions and the document's own declarations.
pub fn completion_items(source: &str, analysis: &Analysis, position: Position) -> Vec<CompletionItem> {
    let offset = position_to_offset(source, position).unwrap_or(source.len());

    if on_directive_line(source, offset) {
        return directives::DIRECTIVES
            .iter()
            .map(|info| CompletionItem {
                label: info.canonical.to_string(),
                kind: Some(CompletionItemKind::PROPERTY),
                detail: Some(info.description.to_string()),
                ..Default::default()
            })
            .collect();
    }

    let mut items = Vec::new();

    for info in keywords::KEYWORDS {
        items.push(CompletionItem {
            label: info.canonical.to_string(),
            kind: Some(CompletionItemKind::KEYWORD),
            ..Default::default()
        });
    }

    for info in std_functions::STD_FUNCTIONS {
        items.push(CompletionItem {
            label: info.name.to_string(),
            kind: Some(CompletionItemKind::FUNCTION),
            detail: Some(info.summary.to_string()),
            ..Default::default()
        });
    }

    // Add symbols from the current document
    let mut seen = HashSet::new();
    for entry in analysis.symbols.iter() {
        let kind = match (entry.kind, entry.ty) {
            (SymbolKind::Directive, _) | (_, SymbolType::Body) => continue,
            (SymbolKind::Define, SymbolType::Parameter) => continue,
            (SymbolKind::Function, _) => CompletionItemKind::FUNCTION,
            (_, SymbolType::Struct) => CompletionItemKind::STRUCT,
            (SymbolKind::Literal | SymbolKind::Constant | SymbolKind::Define, _) => CompletionItemKind::CONSTANT,
            _ => CompletionItemKind::VARIABLE,
        };
        if !seen.insert(entry.name.to_ascii_uppercase()) {
            continue;
        }
        items.push(CompletionItem {
            label: entry.name.clone(),
            kind: Some(kind),
            detail: Some(symbol_detail(entry, &analysis.symbols)),
            ..Default::default()
        });
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use tal_syntax::lexer::LexOptions;

    const PROGRAM: &str = "\
?SOURCE $SYSTEM.SYSTEM.EXTDECS (FILE_OPEN_)
LITERAL max = 10;
DEFINE swap(a, b) = a := b #;
INT PROC sum(x);
  INT x;
BEGIN
  INT acc := 0;
  acc := x + max;
END;
";

    fn analysis() -> Analysis {
        tal_syntax::analyze(PROGRAM, LexOptions::default())
    }

    #[test]
    fn test_document_symbols_nest_by_scope() {
        let analysis = analysis();
        let outline = document_symbols(PROGRAM, &analysis.symbols);
        let names: Vec<&str> = outline.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["SOURCE", "max", "swap", "sum"]);

        let source_children = outline[0].children.as_ref().unwrap();
        assert_eq!(source_children[0].name, "FILE_OPEN_");
        assert_eq!(source_children[0].kind, LspSymbolKind::FUNCTION);

        let swap_params: Vec<&str> = outline[2].children.as_ref().unwrap().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(swap_params, ["a", "b"]);

        let sum = &outline[3];
        assert_eq!(sum.kind, LspSymbolKind::FUNCTION);
        let locals: Vec<&str> = sum.children.as_ref().unwrap().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(locals, ["x", "acc"]);
    }

    #[test]
    fn test_document_symbols_survive_self_named_scopes() {
        let source = "PROC p;\nBEGIN\n  SUBPROC p;\n  BEGIN\n    INT q;\n  END;\nEND;";
        let analysis = tal_syntax::analyze(source, LexOptions::default());
        let outline = document_symbols(source, &analysis.symbols);
        assert_eq!(outline.len(), 1);
    }

    #[test]
    fn test_hover_on_declared_symbols() {
        let analysis = analysis();
        let token = analysis.tokens.iter().rev().find(|t| t.text == "max").unwrap();
        let info = hover_info(token, &analysis).unwrap();
        assert_eq!(info.detail, "LITERAL max = 10");
        assert_eq!(info.kind, "literal (global)");

        // `INT x;` redeclares the formal, so only the signature head remains.
        let token = analysis.tokens.iter().find(|t| t.text == "sum").unwrap();
        let info = hover_info(token, &analysis).unwrap();
        assert_eq!(info.detail, "INT PROC sum");

        let token = analysis.tokens.iter().find(|t| t.text == "swap").unwrap();
        assert_eq!(hover_info(token, &analysis).unwrap().detail, "DEFINE swap(a, b) = a := b #");

        let token = analysis.tokens.iter().rev().find(|t| t.text == "acc").unwrap();
        let info = hover_info(token, &analysis).unwrap();
        assert_eq!(info.detail, "INT acc := 0");
        assert_eq!(info.kind, "variable (in sum)");
    }

    #[test]
    fn test_hover_on_forward_declaration_lists_formals() {
        let source = "PROC later(a, b); FORWARD;";
        let analysis = tal_syntax::analyze(source, LexOptions::default());
        let token = analysis.tokens.iter().find(|t| t.text == "later").unwrap();
        assert_eq!(hover_info(token, &analysis).unwrap().detail, "PROC later(a, b)");
    }

    #[test]
    fn test_hover_on_vocabulary() {
        let source = "INT n := $LEN(buf);";
        let analysis = tal_syntax::analyze(source, LexOptions::default());

        let len = analysis.tokens.iter().find(|t| t.text == "$LEN").unwrap();
        assert!(hover_info(len, &analysis).unwrap().kind.starts_with("standard function"));

        let int = &analysis.tokens[0];
        assert!(hover_info(int, &analysis).unwrap().kind.starts_with("data type"));

        let buf = analysis.tokens.iter().find(|t| t.text == "buf").unwrap();
        assert_eq!(hover_info(buf, &analysis), None);
    }

    #[test]
    fn test_word_at_position() {
        let source = "INT alpha;\nalpha := 1;";
        let tokens = tal_syntax::lexer::tokenize(source);
        let token = word_at(&tokens, source, Position::new(1, 2)).unwrap();
        assert_eq!((token.text.as_str(), token.line), ("alpha", 1));
        // Just past the end of the word.
        assert_eq!(word_at(&tokens, source, Position::new(0, 9)).unwrap().text, "alpha");
        assert!(word_at(&tokens, source, Position::new(1, 7)).is_none());
    }

    #[test]
    fn test_definition_prefers_closest_preceding_declaration() {
        let source = "INT n;\nPROC p;\nBEGIN\n  INT n;\n  n := 1;\nEND;\nn := 2;";
        let analysis = tal_syntax::analyze(source, LexOptions::default());
        let local_use = source.find("n := 1").unwrap();
        let def = definition_of("n", local_use, &analysis.symbols).unwrap();
        assert_eq!(def.context, "p");

        let def = definition_of("N", 0, &analysis.symbols).unwrap();
        assert_eq!(def.context, "Global");
        assert!(definition_of("missing", 0, &analysis.symbols).is_none());
    }

    #[test]
    fn test_completion_on_directive_line() {
        let source = "?NOL";
        let analysis = tal_syntax::analyze(source, LexOptions::default());
        let items = completion_items(source, &analysis, Position::new(0, 4));
        assert!(items.iter().all(|i| i.kind == Some(CompletionItemKind::PROPERTY)));
        assert!(items.iter().any(|i| i.label == "NOLIST"));
    }

    #[test]
    fn test_completion_includes_document_symbols_once() {
        let analysis = analysis();
        let items = completion_items(PROGRAM, &analysis, Position::new(9, 0));
        let acc: Vec<_> = items.iter().filter(|i| i.label == "acc").collect();
        assert_eq!(acc.len(), 1);
        assert_eq!(acc[0].kind, Some(CompletionItemKind::VARIABLE));
        assert!(items.iter().any(|i| i.label == "BEGIN" && i.kind == Some(CompletionItemKind::KEYWORD)));
        assert!(items.iter().any(|i| i.label == "$OCCURS"));
        assert!(!items.iter().any(|i| i.label == "SOURCE"));
    }
}
