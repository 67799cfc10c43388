//! Payload and output value types

use std::collections::BTreeMap;

use crate::context::MAIN_FILE_NAME;

/// Content to inject into the template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPayload {
    /// Document title, also copied verbatim into the output
    pub title: String,
    /// Abstract text (`abstract` is reserved in Rust)
    pub abstract_text: String,
    /// Main body text
    pub body: String,
}

impl DocumentPayload {
    /// Create a payload from its three fields
    pub fn new(
        title: impl Into<String>,
        abstract_text: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            abstract_text: abstract_text.into(),
            body: body.into(),
        }
    }
}

/// Final renderable file set
///
/// Always contains exactly one entry under [`MAIN_FILE_NAME`] (the
/// substituted template as UTF-8 bytes) plus every auxiliary file
/// inherited unchanged from the source context. Terminal artifact;
/// ownership passes to the caller for packaging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOutput {
    title: String,
    files: BTreeMap<String, Vec<u8>>,
}

impl RenderedOutput {
    pub(crate) fn new(title: String, files: BTreeMap<String, Vec<u8>>) -> Self {
        debug_assert!(files.contains_key(MAIN_FILE_NAME));
        Self { title, files }
    }

    /// Document title, as supplied in the payload
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Complete output file map, keyed by name
    pub fn files(&self) -> &BTreeMap<String, Vec<u8>> {
        &self.files
    }

    /// Bytes of the generated main file
    pub fn main_file(&self) -> &[u8] {
        self.files
            .get(MAIN_FILE_NAME)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
