//! Builtin default template

/// Default LaTeX template, embedded at compile time
const DEFAULT_TEMPLATE: &str = include_str!("../../builtin_templates/default/main.tex");

/// Get the builtin default template text
///
/// The asset is packaged into the binary, so the template is available
/// for the whole process lifetime without any I/O or locking.
pub fn default_template() -> &'static str {
    DEFAULT_TEMPLATE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{ABSTRACT_TOKEN, CONTENT_TOKEN, TITLE_TOKEN};

    #[test]
    fn test_default_template_not_empty() {
        assert!(!default_template().is_empty());
    }

    #[test]
    fn test_default_template_contains_all_tokens() {
        let template = default_template();
        assert!(template.contains(TITLE_TOKEN));
        assert!(template.contains(ABSTRACT_TOKEN));
        assert!(template.contains(CONTENT_TOKEN));
    }

    #[test]
    fn test_default_template_is_document() {
        let template = default_template();
        assert!(template.contains(r"\begin{document}"));
        assert!(template.contains(r"\end{document}"));
    }
}
