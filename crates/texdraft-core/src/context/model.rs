//! Resolved context value type

use std::collections::BTreeMap;

/// Reserved name of the generated main file in every rendered output
pub const MAIN_FILE_NAME: &str = "main.tex";

/// Resolved template text plus auxiliary files
///
/// The file map is flat (no subdirectories) and never contains
/// [`MAIN_FILE_NAME`]; that key is reserved for the rendered output and
/// excluded during resolution. Constructed once by resolution and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    template: String,
    files: BTreeMap<String, Vec<u8>>,
}

impl Context {
    /// Callers go through the resolve operations, which uphold the
    /// main-file exclusion invariant.
    pub(crate) fn new(template: String, files: BTreeMap<String, Vec<u8>>) -> Self {
        debug_assert!(!files.contains_key(MAIN_FILE_NAME));
        Self { template, files }
    }

    /// Template text with placeholder tokens still in place
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Auxiliary files keyed by name
    pub fn files(&self) -> &BTreeMap<String, Vec<u8>> {
        &self.files
    }
}
