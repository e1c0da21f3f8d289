//! LSP backend implementation.
//!
//! Implements the Language Server Protocol handler using tower-lsp. The
//! server advertises a single capability (completion, triggered on `.`)
//! and answers every completion request with the same precomputed item
//! list. Filtering against the cursor context is left to the client.

use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer, LspService, Server};

/// Snippet completion language server.
pub struct SnippetServer {
    /// The LSP client connection.
    client: Client,
    /// Completion items, built once at startup and never mutated.
    items: Vec<CompletionItem>,
}

impl SnippetServer {
    /// Create a new server serving the given precomputed items.
    pub fn new(client: Client, items: Vec<CompletionItem>) -> Self {
        Self { client, items }
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for SnippetServer {
    async fn initialize(&self, _: InitializeParams) -> Result<InitializeResult> {
        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                completion_provider: Some(CompletionOptions {
                    trigger_characters: Some(vec![".".to_string()]),
                    resolve_provider: Some(false),
                    ..Default::default()
                }),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: "snippets-ls".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        self.client
            .log_message(
                MessageType::INFO,
                format!("snippets-ls serving {} completion items", self.items.len()),
            )
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        // Diagnostic only; the request fields do not affect the response.
        log::debug!(
            "completion request at {}:{:?}",
            params.text_document_position.text_document.uri,
            params.text_document_position.position
        );

        Ok(Some(CompletionResponse::Array(self.items.clone())))
    }
}

/// Run the LSP server over stdio.
///
/// This function blocks until the client disconnects.
pub async fn run_server(items: Vec<CompletionItem>) -> anyhow::Result<()> {
    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(move |client| SnippetServer::new(client, items));
    Server::new(stdin, stdout, socket).serve(service).await;

    Ok(())
}
