//! Resolve operations
//!
//! Resolution order is the caller's choice, not a fallback chain: an
//! invocation uses exactly one of the three operations depending on
//! whether an identifier was supplied and its form. Any resolution
//! failure aborts the request; no partial context is ever returned.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use super::builtin;
use super::model::{Context, MAIN_FILE_NAME};
use crate::error::{Result, TexdraftError};
use crate::store::{DocumentStore, StoreEntry};

/// Resolve the builtin default context
///
/// Deterministic, no external calls: the embedded default template and
/// an empty auxiliary file set.
pub fn resolve_default() -> Context {
    Context::new(builtin::default_template().to_string(), BTreeMap::new())
}

/// Resolve a context from a local template file
///
/// The full file content becomes the template; auxiliary files are
/// empty.
///
/// # Errors
///
/// Returns error if:
/// - the path does not exist or is unreadable (`ResourceUnavailable`)
/// - the content is not valid UTF-8 (`DecodeError`)
pub fn resolve_from_local_template(path: &Path) -> Result<Context> {
    let resource = path.display().to_string();
    let bytes = std::fs::read(path).map_err(|e| TexdraftError::ResourceUnavailable {
        resource: resource.clone(),
        reason: e.to_string(),
    })?;
    let template = decode_template(&resource, bytes)?;

    debug!(path = resource.as_str(), "resolved context from local template");
    Ok(Context::new(template, BTreeMap::new()))
}

/// Resolve a context from external document storage
///
/// A single-document identifier yields that document's text as the
/// template with no auxiliary files, whatever the document is named. A
/// folder identifier is partitioned by exact name match: the child
/// named `main.tex` (if any) becomes the template, every other child
/// becomes an auxiliary file; without a `main.tex` child the builtin
/// default template applies.
///
/// # Errors
///
/// Returns error if:
/// - the store fetch fails (`ResourceUnavailable`)
/// - the candidate template is not valid UTF-8 (`DecodeError`)
pub fn resolve_from_store(store: &dyn DocumentStore, id: &str) -> Result<Context> {
    match store.fetch(id)? {
        StoreEntry::File(file) => {
            let template = decode_template(&file.name, file.content)?;
            debug!(id, name = file.name.as_str(), "resolved context from single document");
            Ok(Context::new(template, BTreeMap::new()))
        }
        StoreEntry::Folder(entries) => {
            let mut template = None;
            let mut files = BTreeMap::new();

            for entry in entries {
                if entry.name == MAIN_FILE_NAME {
                    template = Some(decode_template(&entry.name, entry.content)?);
                } else {
                    files.insert(entry.name, entry.content);
                }
            }

            let found = template.is_some();
            let template =
                template.unwrap_or_else(|| builtin::default_template().to_string());

            debug!(
                id,
                aux_files = files.len(),
                template_from_folder = found,
                "resolved context from folder listing"
            );
            Ok(Context::new(template, files))
        }
    }
}

fn decode_template(resource: &str, bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| TexdraftError::DecodeError {
        resource: resource.to_string(),
        reason: e.to_string(),
    })
}
