//! snippets-ls: a language server that serves VS Code user snippets as
//! completion items.
//!
//! The server loads one snippets file at startup (JSONC, the VS Code
//! user-snippets format), flattens every snippet prefix into a completion
//! item, and answers every completion request with that static list. It
//! performs no document tracking and no filtering; matching items against
//! the cursor context is the editor's job.

pub mod backend;
pub mod completion;
pub mod error;
pub mod paths;
pub mod snippets;

pub use backend::{run_server, SnippetServer};
pub use error::SnippetError;
