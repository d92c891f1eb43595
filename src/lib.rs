//! gutenmark: classic HTML to WordPress block-editor markup.
//!
//! Converts event submissions written in classic-editor HTML into block
//! markup (`<!-- wp:... -->` comments), assembles full event documents from
//! a submitted-event record, and recovers the originally submitted text from
//! previously generated markup.
//!
//! # Design Principles
//! - Fixed tag vocabulary: only `p`, `ul`, `ol`, `li`, `h1`-`h6`,
//!   `blockquote`, `code` are recognized, by exact literal
//! - No DOM: pure byte-level scanning, zero-copy segments
//! - Never fails: malformed or unknown markup degrades to implicit
//!   paragraphs, missing restore anchors return the input unchanged
//! - Deterministic: identical input yields byte-identical output
//!
//! # Example
//! ```
//! let blocks = gutenmark::to_blocks("<p>Hello</p>");
//! assert_eq!(blocks, "<!-- wp:paragraph --><p>Hello</p><!-- /wp:paragraph -->");
//! ```

pub mod assemble;
pub mod markup;
pub mod restore;
pub mod segment;
pub mod tag;
pub mod writer;

// Re-export primary types
pub use assemble::{
    BlockFragment, CustomField, SubmittedEvent, assemble, assemble_fragments,
    assemble_with_options,
};
pub use restore::{annotated_description, extract_original};
pub use tag::Tag;
pub use writer::BlockWriter;

/// Conversion options.
#[derive(Debug, Clone, Copy)]
pub struct Options {
    /// Substitute bare `\n` hard breaks in paragraph content like `\r\n`.
    /// Disable to reproduce the strict CRLF-only behavior of browser form
    /// submissions.
    pub normalize_line_endings: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            normalize_line_endings: true,
        }
    }
}

/// Convert an HTML fragment to block markup.
///
/// This is the primary API for simple use cases.
///
/// # Example
/// ```
/// let blocks = gutenmark::to_blocks("<ul><li>One</li></ul>");
/// assert!(blocks.starts_with("<!-- wp:list -->"));
/// assert!(blocks.contains("<!-- wp:list-item --><li>One</li><!-- /wp:list-item -->"));
/// ```
pub fn to_blocks(html: &str) -> String {
    to_blocks_with_options(html, &Options::default())
}

/// Convert an HTML fragment to block markup with options.
pub fn to_blocks_with_options(html: &str, options: &Options) -> String {
    let mut writer = BlockWriter::with_capacity_for(html.len());
    segment::to_blocks_into(html, options, &mut writer);
    writer.into_string()
}
