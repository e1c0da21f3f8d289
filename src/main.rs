//! snippets-ls CLI - the `snippets-ls` command.
//!
//! Loads the VS Code user-snippets file for the selected language and
//! serves its snippets as LSP completion items over stdio.

use anyhow::{Context, Result};
use clap::Parser;

use snippets_ls::{completion, paths, snippets};

/// A language server that serves VS Code user snippets as completions
#[derive(Parser, Debug)]
#[command(name = "snippets-ls")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Serve VS Code user snippets as LSP completion items", long_about = None)]
struct Args {
    /// Language identifier used in the VS Code snippets path
    #[arg(long, default_value = "go", value_name = "LANG")]
    lang: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the LSP transport.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let path = paths::snippets_path(&args.lang)?;
    log::info!("Loading snippets from {}", path.display());

    let set = snippets::load_snippets_file(&path)
        .with_context(|| format!("Failed to load snippets for language '{}'", args.lang))?;

    let items = completion::completion_items(&set);
    log::info!(
        "Serving {} completion items from {} snippets",
        items.len(),
        set.len()
    );

    snippets_ls::run_server(items).await
}
