//! Error types for snippet loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while locating, reading, or decoding a snippets file.
///
/// All of these are fatal at startup; once the server is running the
/// completion path cannot fail.
#[derive(Debug, Error)]
pub enum SnippetError {
    /// The platform configuration directory could not be resolved.
    #[error("could not resolve the user configuration directory")]
    NoConfigDir,

    /// The snippets file is missing or unreadable.
    #[error("failed to read snippets file {path}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The snippets file content does not match the expected shape.
    #[error("failed to decode snippets file: {0}")]
    Decode(String),
}
