//! Document-storage connector contract
//!
//! An external storage provider addresses either a single document or a
//! folder by an opaque identifier. The response is modeled as a tagged
//! variant so resolution logic can match exhaustively instead of
//! inferring the shape from collection size.

pub mod http;

use thiserror::Error;

/// A file fetched from document storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedFile {
    /// File name without any directory components
    pub name: String,
    /// Raw file content
    pub content: Vec<u8>,
}

impl NamedFile {
    /// Create a named file from name and raw content
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Connector response shape
///
/// A single-document identifier yields `File`; a folder identifier
/// yields `Folder` with the folder's immediate children (no recursion).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEntry {
    File(NamedFile),
    Folder(Vec<NamedFile>),
}

/// Blocking document-storage connector
///
/// `fetch` may block on network I/O. No retry is performed here;
/// callers wanting timeout or retry semantics wrap the call externally.
pub trait DocumentStore {
    /// Fetch the document or folder listing addressed by `id`
    fn fetch(&self, id: &str) -> Result<StoreEntry, StoreError>;
}

/// Connector failure modes
#[derive(Debug, Error)]
pub enum StoreError {
    /// Identifier does not address any stored document or folder
    #[error("document '{id}' not found")]
    NotFound { id: String },

    /// Provider refused access to the addressed item
    #[error("access to document '{id}' denied")]
    AccessDenied { id: String },

    /// Request could not complete or the response was malformed
    #[error("transport failure fetching '{id}': {reason}")]
    Transport { id: String, reason: String },
}

impl StoreError {
    /// Identifier the failed fetch was addressing
    pub fn id(&self) -> &str {
        match self {
            StoreError::NotFound { id }
            | StoreError::AccessDenied { id }
            | StoreError::Transport { id, .. } => id,
        }
    }
}
