//! LSP (Language Server Protocol) backend implementation for TAL

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};

use tal_syntax::diagnostics::Severity;
use tal_syntax::lexer::LexOptions;
use tal_syntax::{Analysis, analyze};

use crate::lsp::diagnostics::{span_to_range, syntax_diagnostic_to_lsp};
use crate::lsp::symbols::{completion_items, definition_of, document_symbols, hover_info, word_at};
use crate::version::TAL_VERSION;

/// Document state stored by the LSP
#[derive(Debug, Clone)]
pub struct DocumentState {
    pub source: String,
    pub version: i32,
    /// Tokens, symbols and diagnostics of the latest full pass over `source`.
    pub analysis: Analysis,
}

/// Server settings taken from `initializationOptions`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServerOptions {
    /// Keep comment and directive-line tokens in the analysis.
    pub keep_comments: bool,
    /// Join blank-separated plain names into one identifier.
    pub multi_word_names: bool,
}

impl ServerOptions {
    /// Read `{ "keepComments": bool, "multiWordNames": bool }`; anything missing or malformed falls back to
    /// the default.
    pub fn from_init_options(value: Option<&serde_json::Value>) -> Self {
        let flag = |name: &str| {
            value
                .and_then(|v| v.get(name))
                .and_then(serde_json::Value::as_bool)
                .unwrap_or(false)
        };
        Self {
            keep_comments: flag("keepComments"),
            multi_word_names: flag("multiWordNames"),
        }
    }

    fn lex_options(self) -> LexOptions {
        LexOptions {
            keep_comments: self.keep_comments,
            multi_word_names: self.multi_word_names,
        }
    }
}

/// TAL Language Server
pub struct TalLanguageServer {
    client: Client,
    documents: Arc<RwLock<HashMap<Url, DocumentState>>>,
    options: Arc<RwLock<ServerOptions>>,
}

impl TalLanguageServer {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            documents: Arc::new(RwLock::new(HashMap::new())),
            options: Arc::new(RwLock::new(ServerOptions::default())),
        }
    }

    /// Analyze a document and publish diagnostics
    async fn analyze_document(&self, uri: &Url, source: &str, version: i32) {
        let options = *self.options.read().await;
        let analysis = analyze(source, options.lex_options());

        let diagnostics: Vec<Diagnostic> = analysis
            .diagnostics
            .iter()
            .map(|d| syntax_diagnostic_to_lsp(d, source, uri))
            .collect();

        let warnings = analysis
            .diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count();
        tracing::debug!(
            %uri,
            version,
            tokens = analysis.tokens.len(),
            symbols = analysis.symbols.len(),
            warnings,
            "analyzed document"
        );
        if warnings > 0 {
            self.client
                .log_message(
                    MessageType::WARNING,
                    format!("{}: {} recovery warning(s)", uri, warnings),
                )
                .await;
        }

        // Store analysis for hover/goto/symbols
        {
            let mut docs = self.documents.write().await;
            docs.insert(
                uri.clone(),
                DocumentState {
                    source: source.to_string(),
                    version,
                    analysis,
                },
            );
        }

        // Publish diagnostics (even if empty, to clear old ones)
        self.client
            .publish_diagnostics(uri.clone(), diagnostics, Some(version))
            .await;
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for TalLanguageServer {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        let options = ServerOptions::from_init_options(params.initialization_options.as_ref());
        tracing::info!(
            keep_comments = options.keep_comments,
            multi_word_names = options.multi_word_names,
            "initializing"
        );
        *self.options.write().await = options;

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                // Real-time diagnostics via text sync
                text_document_sync: Some(TextDocumentSyncCapability::Kind(TextDocumentSyncKind::FULL)),
                // Hover support
                hover_provider: Some(HoverProviderCapability::Simple(true)),
                // Go-to-definition
                definition_provider: Some(OneOf::Left(true)),
                // Outline
                document_symbol_provider: Some(OneOf::Left(true)),
                // Completions
                completion_provider: Some(CompletionOptions {
                    trigger_characters: Some(vec!["?".to_string(), "$".to_string()]),
                    ..Default::default()
                }),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: "tal-lsp".to_string(),
                version: Some(TAL_VERSION.to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        self.client
            .log_message(MessageType::INFO, "TAL LSP initialized")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let uri = params.text_document.uri;
        let source = params.text_document.text;
        let version = params.text_document.version;

        self.analyze_document(&uri, &source, version).await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;
        let version = params.text_document.version;

        // We use FULL sync, so the last change carries the full content
        if let Some(change) = params.content_changes.into_iter().last() {
            self.analyze_document(&uri, &change.text, version).await;
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;

        // Remove document from cache
        let mut docs = self.documents.write().await;
        docs.remove(&uri);

        // Clear diagnostics
        self.client.publish_diagnostics(uri, vec![], None).await;
    }

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        let uri = &params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;

        let docs = self.documents.read().await;
        let Some(doc) = docs.get(uri) else {
            return Ok(None);
        };

        let Some(token) = word_at(&doc.analysis.tokens, &doc.source, position) else {
            return Ok(None);
        };
        let Some(info) = hover_info(token, &doc.analysis) else {
            return Ok(None);
        };

        let markdown = format!("```tal\n{}\n```\n\n*{}*", info.detail, info.kind);
        Ok(Some(Hover {
            contents: HoverContents::Markup(MarkupContent {
                kind: MarkupKind::Markdown,
                value: markdown,
            }),
            range: Some(span_to_range(&doc.source, token.span)),
        }))
    }

    async fn goto_definition(&self, params: GotoDefinitionParams) -> Result<Option<GotoDefinitionResponse>> {
        let uri = &params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;

        let docs = self.documents.read().await;
        let Some(doc) = docs.get(uri) else {
            return Ok(None);
        };

        // Find what word the cursor is on, then the declaration it refers to
        let Some(token) = word_at(&doc.analysis.tokens, &doc.source, position) else {
            return Ok(None);
        };
        let Some(entry) = definition_of(&token.text, token.span.start, &doc.analysis.symbols) else {
            return Ok(None);
        };

        Ok(Some(GotoDefinitionResponse::Scalar(Location {
            uri: uri.clone(),
            range: span_to_range(&doc.source, entry.span),
        })))
    }

    async fn document_symbol(&self, params: DocumentSymbolParams) -> Result<Option<DocumentSymbolResponse>> {
        let docs = self.documents.read().await;
        let Some(doc) = docs.get(&params.text_document.uri) else {
            return Ok(None);
        };

        let outline = document_symbols(&doc.source, &doc.analysis.symbols);
        Ok(Some(DocumentSymbolResponse::Nested(outline)))
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        let uri = &params.text_document_position.text_document.uri;
        let position = params.text_document_position.position;

        let docs = self.documents.read().await;
        let Some(doc) = docs.get(uri) else {
            return Ok(None);
        };

        let items = completion_items(&doc.source, &doc.analysis, position);
        Ok(Some(CompletionResponse::Array(items)))
    }
}
