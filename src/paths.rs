//! Snippets file location.

use std::path::PathBuf;

use crate::error::SnippetError;

/// Resolve the VS Code user-snippets file for a language identifier.
///
/// VS Code keeps user snippets under `Code/User/snippets/<lang>.json`
/// inside the platform configuration directory: `~/Library/Application
/// Support` on macOS, `~/.config` on Linux, `%APPDATA%` on Windows.
pub fn snippets_path(lang: &str) -> Result<PathBuf, SnippetError> {
    let config_dir = dirs::config_dir().ok_or(SnippetError::NoConfigDir)?;

    Ok(config_dir
        .join("Code")
        .join("User")
        .join("snippets")
        .join(format!("{lang}.json")))
}
