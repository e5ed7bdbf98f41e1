//! TAL Language Server binary entry point
//!
//! Run with: tal-lsp
//!
//! The LSP communicates via stdin/stdout using the Language Server Protocol.

use tal::lsp::TalLanguageServer;
use tower_lsp::{LspService, Server};

#[tokio::main]
async fn main() {
    // Logs go to stderr: stdout is the protocol channel
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(TalLanguageServer::new);

    // Run server
    Server::new(stdin, stdout, socket).serve(service).await;
}
