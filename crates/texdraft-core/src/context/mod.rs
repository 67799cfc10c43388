//! Context resolution - deciding template text and auxiliary files
//!
//! A `Context` pairs the template text with the auxiliary files needed
//! to build a document. It is produced by exactly one of three resolve
//! operations (builtin default, local template file, external document
//! storage); which one applies is the caller's selection.

pub mod builtin;
pub mod model;
pub mod resolve;

pub use builtin::default_template;
pub use model::{Context, MAIN_FILE_NAME};
pub use resolve::{resolve_default, resolve_from_local_template, resolve_from_store};
