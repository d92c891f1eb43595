//! The recognized top-level HTML tag set.
//!
//! Matching is purely textual: exact attribute-less tag literals at segment
//! edges. Tags with attributes, nested tags of the same kind, and unterminated
//! tags are outside the contract and fall through to best-effort handling.

/// A recognized top-level element tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tag {
    /// `<p>`
    Paragraph,
    /// `<ul>`
    List,
    /// `<ol>`
    OrderedList,
    /// `<li>`
    ListItem,
    /// `<h1>`..`<h6>`; the payload is the level (1-6).
    Heading(u8),
    /// `<blockquote>`
    Quote,
    /// `<code>`
    Code,
}

const HEADING_OPEN: [&str; 6] = ["<h1>", "<h2>", "<h3>", "<h4>", "<h5>", "<h6>"];
const HEADING_CLOSE: [&str; 6] = ["</h1>", "</h2>", "</h3>", "</h4>", "</h5>", "</h6>"];

/// All recognized tags, in match order.
pub const ALL: [Tag; 12] = [
    Tag::List,
    Tag::OrderedList,
    Tag::ListItem,
    Tag::Paragraph,
    Tag::Heading(1),
    Tag::Heading(2),
    Tag::Heading(3),
    Tag::Heading(4),
    Tag::Heading(5),
    Tag::Heading(6),
    Tag::Quote,
    Tag::Code,
];

impl Tag {
    /// The exact opening literal, e.g. `<ul>`.
    #[inline]
    pub fn open_text(self) -> &'static str {
        match self {
            Tag::Paragraph => "<p>",
            Tag::List => "<ul>",
            Tag::OrderedList => "<ol>",
            Tag::ListItem => "<li>",
            Tag::Heading(level) => HEADING_OPEN[(level - 1) as usize],
            Tag::Quote => "<blockquote>",
            Tag::Code => "<code>",
        }
    }

    /// The exact closing literal, e.g. `</ul>`.
    #[inline]
    pub fn close_text(self) -> &'static str {
        match self {
            Tag::Paragraph => "</p>",
            Tag::List => "</ul>",
            Tag::OrderedList => "</ol>",
            Tag::ListItem => "</li>",
            Tag::Heading(level) => HEADING_CLOSE[(level - 1) as usize],
            Tag::Quote => "</blockquote>",
            Tag::Code => "</code>",
        }
    }

    /// Whether hard line breaks inside this element's content are substituted
    /// (double break splits the paragraph block, single break becomes `<br>`).
    #[inline]
    pub fn splits_paragraphs(self) -> bool {
        matches!(self, Tag::Paragraph | Tag::Quote)
    }
}

/// Classify the recognized opening tag a segment starts with, if any.
#[inline]
pub fn leading(segment: &str) -> Option<Tag> {
    ALL.iter().copied().find(|t| segment.starts_with(t.open_text()))
}

/// Classify the recognized closing tag a segment ends with, if any.
#[inline]
pub fn trailing(segment: &str) -> Option<Tag> {
    ALL.iter().copied().find(|t| segment.ends_with(t.close_text()))
}

/// Match a recognized opening literal starting at `pos` (a `<` byte).
#[inline]
pub fn open_at(input: &str, pos: usize) -> Option<Tag> {
    leading(&input[pos..])
}

/// Match a recognized closing literal starting at `pos` (a `<` byte).
#[inline]
pub fn close_at(input: &str, pos: usize) -> Option<Tag> {
    let rest = &input[pos..];
    ALL.iter().copied().find(|t| rest.starts_with(t.close_text()))
}
