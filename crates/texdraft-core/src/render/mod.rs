//! Rendering - placeholder substitution and output file set assembly
//!
//! Pure text substitution: the three fixed placeholder tokens are
//! replaced with the payload's raw field values, with no LaTeX escaping
//! of payload text. Payload strings containing LaTeX specials (`\`,
//! `%`, `_`, `&`, ...) are inserted verbatim.

pub mod engine;
pub mod model;

pub use engine::{ABSTRACT_TOKEN, CONTENT_TOKEN, TITLE_TOKEN};
pub use model::{DocumentPayload, RenderedOutput};

use crate::context::{Context, MAIN_FILE_NAME};

/// Render a resolved context with a document payload
///
/// Produces the final renderable file set: every auxiliary file of the
/// context unchanged, plus the substituted template under
/// [`MAIN_FILE_NAME`]. The output title is the payload title verbatim.
///
/// Total over well-formed inputs; rendering defines no error
/// conditions.
pub fn render(context: &Context, doc: &DocumentPayload) -> RenderedOutput {
    let main = engine::substitute(context.template(), doc);

    let mut files = context.files().clone();
    // The context invariant keeps this key free; inserting last makes
    // the new entry win either way.
    files.insert(MAIN_FILE_NAME.to_string(), main.into_bytes());

    RenderedOutput::new(doc.title.clone(), files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::resolve_default;

    fn payload() -> DocumentPayload {
        DocumentPayload::new("T", "A", "B")
    }

    #[test]
    fn test_render_default_context_substitutes_all_tokens() {
        let context = resolve_default();
        let output = render(&context, &payload());

        let main = String::from_utf8(output.main_file().to_vec()).unwrap();
        assert!(main.contains("T"));
        assert!(main.contains("A"));
        assert!(main.contains("B"));
        assert!(!main.contains(TITLE_TOKEN));
        assert!(!main.contains(ABSTRACT_TOKEN));
        assert!(!main.contains(CONTENT_TOKEN));
    }

    #[test]
    fn test_render_title_copied_verbatim() {
        let context = resolve_default();
        let doc = DocumentPayload::new("My Title: 100% \\done", "a", "b");
        let output = render(&context, &doc);

        assert_eq!(output.title(), "My Title: 100% \\done");
    }

    #[test]
    fn test_render_always_contains_main_file() {
        let context = resolve_default();
        let output = render(&context, &payload());

        assert!(output.files().contains_key(MAIN_FILE_NAME));
    }

    #[test]
    fn test_render_deterministic() {
        let context = resolve_default();
        let a = render(&context, &payload());
        let b = render(&context, &payload());

        assert_eq!(a, b);
    }

    #[test]
    fn test_render_does_not_consume_context() {
        let context = resolve_default();
        let _ = render(&context, &payload());

        // Context is untouched; a second render sees the same input.
        assert_eq!(context.template(), resolve_default().template());
    }
}
