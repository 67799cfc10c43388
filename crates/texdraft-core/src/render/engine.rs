//! Placeholder substitution engine

use super::model::DocumentPayload;

/// Placeholder token replaced with the payload title
pub const TITLE_TOKEN: &str = r"\TITLE";

/// Placeholder token replaced with the payload abstract
pub const ABSTRACT_TOKEN: &str = r"\ABSTRACT";

/// Placeholder token replaced with the payload body
pub const CONTENT_TOKEN: &str = r"\CONTENT";

/// Substitute all placeholder tokens in a single pass
///
/// The template is scanned left to right; at each step the earliest
/// token occurrence is replaced and scanning resumes after it, so
/// replacement text is never rescanned. A payload value that itself
/// contains a token is therefore inserted verbatim without cascading
/// into a second substitution.
pub(crate) fn substitute(template: &str, doc: &DocumentPayload) -> String {
    let mut output = String::with_capacity(template.len());
    let mut pos = 0;

    while pos < template.len() {
        let remaining = &template[pos..];

        match next_token(remaining, doc) {
            Some((offset, token, replacement)) => {
                output.push_str(&remaining[..offset]);
                output.push_str(replacement);
                pos += offset + token.len();
            }
            None => {
                output.push_str(remaining);
                break;
            }
        }
    }

    output
}

/// Find the earliest token occurrence in `text`
///
/// Returns (byte offset, matched token, replacement text). The three
/// tokens are distinct and none is a prefix of another, so at most one
/// can match at a given offset.
fn next_token<'a>(
    text: &str,
    doc: &'a DocumentPayload,
) -> Option<(usize, &'static str, &'a str)> {
    let candidates = [
        (TITLE_TOKEN, doc.title.as_str()),
        (ABSTRACT_TOKEN, doc.abstract_text.as_str()),
        (CONTENT_TOKEN, doc.body.as_str()),
    ];

    candidates
        .iter()
        .filter_map(|(token, replacement)| {
            text.find(token).map(|offset| (offset, *token, *replacement))
        })
        .min_by_key(|(offset, _, _)| *offset)
}
