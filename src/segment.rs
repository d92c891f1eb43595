//! Content segmentation and wrapping.
//!
//! Splits submitted HTML into top-level segments delimited by the recognized
//! tag set and wraps each in block-comment markup. The split is a single
//! boundary scan over the input: a boundary falls immediately before every
//! recognized opening literal and immediately after every recognized closing
//! literal. Anything between boundaries that matches no tag degrades to an
//! implicit paragraph — there is no error path.

use memchr::memchr_iter;
use smallvec::SmallVec;

use crate::Options;
use crate::markup;
use crate::tag::{self, Tag};
use crate::writer::BlockWriter;

/// A trimmed, non-empty segment with its classified edge tags.
///
/// Created during segmentation and consumed immediately into the output
/// buffer; never stored.
struct Element<'a> {
    open: Option<Tag>,
    close: Option<Tag>,
    raw: &'a str,
}

/// Wrap `html` into block markup, appending to `out`.
pub(crate) fn to_blocks_into(html: &str, options: &Options, out: &mut BlockWriter) {
    let mut first = true;
    for raw in split_segments(html) {
        if !first {
            out.newline();
        }
        first = false;
        wrap_element(classify(raw), options, out);
    }
}

/// Split the input at tag boundaries into trimmed, non-empty segments.
fn split_segments(html: &str) -> SmallVec<[&str; 8]> {
    let bytes = html.as_bytes();
    let mut bounds: SmallVec<[usize; 16]> = SmallVec::new();
    for pos in memchr_iter(b'<', bytes) {
        if tag::open_at(html, pos).is_some() {
            bounds.push(pos);
        } else if let Some(t) = tag::close_at(html, pos) {
            bounds.push(pos + t.close_text().len());
        }
    }

    let mut segments: SmallVec<[&str; 8]> = SmallVec::new();
    let mut start = 0;
    for bound in bounds {
        push_trimmed(&mut segments, &html[start..bound]);
        start = bound;
    }
    push_trimmed(&mut segments, &html[start..]);
    segments
}

#[inline]
fn push_trimmed<'a>(segments: &mut SmallVec<[&'a str; 8]>, piece: &'a str) {
    let trimmed = piece.trim();
    if !trimmed.is_empty() {
        segments.push(trimmed);
    }
}

#[inline]
fn classify(raw: &str) -> Element<'_> {
    Element {
        open: tag::leading(raw),
        close: tag::trailing(raw),
        raw,
    }
}

/// Wrap one segment. The opening and closing literals (when recognized) are
/// replaced with their block-comment forms; content of paragraphs and quotes
/// gets line-break substitution; anything unrecognized that does not already
/// carry block markers becomes an implicit paragraph.
fn wrap_element(element: Element<'_>, options: &Options, out: &mut BlockWriter) {
    let Element { open, close, raw } = element;

    if open.is_none() && close.is_none() {
        if raw.starts_with(markup::BLOCK_PREFIX) || raw.ends_with(markup::COMMENT_SUFFIX) {
            // Already-wrapped markup passes through untouched.
            out.write_string(raw);
        } else {
            out.paragraph_block_start();
            out.write_paragraph_content(raw, options.normalize_line_endings);
            out.paragraph_block_end();
        }
        return;
    }

    let mut body = raw;
    if let Some(t) = open {
        body = &body[t.open_text().len()..];
    }
    if let Some(t) = close {
        body = &body[..body.len() - t.close_text().len()];
    }

    if let Some(t) = open {
        out.block_open(t);
    }
    if open.is_some_and(Tag::splits_paragraphs) {
        out.write_paragraph_content(body, options.normalize_line_endings);
    } else {
        out.write_string(body);
    }
    if let Some(t) = close {
        out.block_close(t);
    }
}
