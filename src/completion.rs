//! Projection of snippets into LSP completion items.

use tower_lsp::lsp_types::{CompletionItem, CompletionItemKind, InsertTextFormat};

use crate::snippets::SnippetSet;

/// Build the completion item list for a snippet set.
///
/// Emits one item per prefix string per snippet: the label is the prefix
/// and the insert text is the rendered body. Bodies are inserted as plain
/// text, not expanded as LSP snippet syntax. Items are ordered by snippet
/// name, then by declared prefix order within a snippet.
///
/// The list is computed once at startup; the completion handler serves it
/// unchanged for the lifetime of the process.
pub fn completion_items(snippets: &SnippetSet) -> Vec<CompletionItem> {
    let mut items = Vec::new();

    for snippet in snippets.values() {
        let insert_text = snippet.body.render();

        for prefix in snippet.prefix.as_slice() {
            items.push(CompletionItem {
                label: prefix.clone(),
                kind: Some(CompletionItemKind::SNIPPET),
                detail: (!snippet.description.is_empty())
                    .then(|| snippet.description.clone()),
                insert_text: Some(insert_text.clone()),
                insert_text_format: Some(InsertTextFormat::PLAIN_TEXT),
                ..Default::default()
            });
        }
    }

    items
}
