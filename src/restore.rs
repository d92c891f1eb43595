//! Restore path: recover the originally submitted text from generated markup.
//!
//! The description paragraph is the only block whose content came from the
//! submitter, so the restore helper anchors on its placeholder-annotated
//! comment tokens. This is intentionally not a parser: a single first/last
//! anchor pair, and any input without both anchors is returned unchanged —
//! callers depend on that failure mode.

use memchr::memmem;

use crate::markup;
use crate::writer::BlockWriter;

/// Extract the submitted text from previously generated block markup.
///
/// Returns the substring strictly between the first
/// `<!-- wp:paragraph {"placeholder":"Add Description..."} -->` token and the
/// last `<!-- /wp:paragraph -->` token. If either anchor is missing, or the
/// anchors overlap, the input is returned unchanged.
///
/// # Example
/// ```
/// let markup = "<!-- wp:paragraph {\"placeholder\":\"Add Description...\"} -->\
///               <p>Hi</p><!-- /wp:paragraph -->";
/// assert_eq!(gutenmark::extract_original(markup), "<p>Hi</p>");
/// assert_eq!(gutenmark::extract_original("no anchors"), "no anchors");
/// ```
pub fn extract_original(text: &str) -> &str {
    let haystack = text.as_bytes();
    let Some(open) = memmem::find(haystack, markup::DESCRIPTION_OPEN.as_bytes()) else {
        return text;
    };
    let Some(close) = memmem::rfind(haystack, markup::DESCRIPTION_CLOSE.as_bytes()) else {
        return text;
    };

    let start = open + markup::DESCRIPTION_OPEN.len();
    if start > close {
        return text;
    }
    &text[start..close]
}

/// Wrap submitted text in the placeholder-annotated description paragraph:
///
/// ```text
/// <!-- wp:paragraph {"placeholder":"Add Description..."} -->
/// <p>…</p>
/// <!-- /wp:paragraph -->
/// ```
///
/// [`extract_original`] recovers the `\n<p>…</p>\n` body from this layout.
pub fn annotated_description(text: &str) -> String {
    let mut writer = BlockWriter::with_capacity_for(text.len());
    writer.write_str(markup::DESCRIPTION_OPEN);
    writer.newline();
    writer.write_str("<p>");
    writer.write_string(text);
    writer.write_str("</p>");
    writer.newline();
    writer.write_str(markup::DESCRIPTION_CLOSE);
    writer.into_string()
}
