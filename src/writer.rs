//! Block markup output writer.
//!
//! Append-only byte buffer with one method per markup token, so every caller
//! emits the exact vocabulary from [`crate::markup`].

use memchr::memchr2;

use crate::markup;
use crate::tag::Tag;

/// Output writer with a pre-allocated, reusable buffer.
///
/// # Example
/// ```
/// use gutenmark::BlockWriter;
/// use gutenmark::tag::Tag;
///
/// let mut writer = BlockWriter::new();
/// writer.block_open(Tag::ListItem);
/// writer.write_string("One");
/// writer.block_close(Tag::ListItem);
///
/// assert_eq!(
///     writer.into_string(),
///     "<!-- wp:list-item --><li>One</li><!-- /wp:list-item -->"
/// );
/// ```
pub struct BlockWriter {
    out: Vec<u8>,
}

impl BlockWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self {
            out: Vec::with_capacity(256),
        }
    }

    /// Create with explicit capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            out: Vec::with_capacity(capacity),
        }
    }

    /// Create with pre-allocated capacity based on expected input size.
    ///
    /// Block comments inflate the input noticeably; reserve half again.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self {
            out: Vec::with_capacity(input_len + input_len / 2 + 64),
        }
    }

    /// Write a static string (compile-time known).
    #[inline]
    pub fn write_str(&mut self, s: &'static str) {
        self.out.extend_from_slice(s.as_bytes());
    }

    /// Write a dynamic string verbatim.
    #[inline]
    pub fn write_string(&mut self, s: &str) {
        self.out.extend_from_slice(s.as_bytes());
    }

    /// Write a single byte.
    #[inline]
    pub fn write_byte(&mut self, b: u8) {
        self.out.push(b);
    }

    /// Write a newline.
    #[inline]
    pub fn newline(&mut self) {
        self.out.push(b'\n');
    }

    /// Current output length.
    #[inline]
    pub fn len(&self) -> usize {
        self.out.len()
    }

    /// Check if output is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Clear output for reuse (keeps capacity).
    #[inline]
    pub fn clear(&mut self) {
        self.out.clear();
    }

    /// Get output as str.
    #[inline]
    pub fn as_str(&self) -> &str {
        // SAFETY: every write appends whole &str slices or ASCII bytes
        unsafe { std::str::from_utf8_unchecked(&self.out) }
    }

    /// Take ownership as String.
    #[inline]
    pub fn into_string(self) -> String {
        // SAFETY: every write appends whole &str slices or ASCII bytes
        unsafe { String::from_utf8_unchecked(self.out) }
    }

    // --- Segmenter wrappers ---

    /// Write the full opening replacement for a recognized tag: the block
    /// comment, the original tag literal, and (for quotes) the nested
    /// paragraph opener.
    pub fn block_open(&mut self, tag: Tag) {
        match tag {
            Tag::Paragraph => self.write_str(markup::PARAGRAPH),
            Tag::List => self.write_str(markup::LIST),
            Tag::OrderedList => self.write_str(markup::LIST_ORDERED),
            Tag::ListItem => self.write_str(markup::LIST_ITEM),
            Tag::Heading(level) => {
                debug_assert!((1..=6).contains(&level));
                self.write_str(markup::HEADING_PREFIX);
                self.write_byte(b'0' + level);
                self.write_str(markup::HEADING_SUFFIX);
            }
            Tag::Quote => self.write_str(markup::QUOTE),
            Tag::Code => self.write_str(markup::CODE),
        }
        self.write_str(tag.open_text());
        if tag == Tag::Quote {
            // Quote blocks nest their content in a paragraph block.
            self.write_str(markup::PARAGRAPH);
            self.write_str("<p>");
        }
    }

    /// Write the full closing replacement for a recognized tag.
    pub fn block_close(&mut self, tag: Tag) {
        if tag == Tag::Quote {
            self.write_str("</p>");
            self.write_str(markup::PARAGRAPH_END);
        }
        self.write_str(tag.close_text());
        match tag {
            Tag::Paragraph => self.write_str(markup::PARAGRAPH_END),
            Tag::List | Tag::OrderedList => self.write_str(markup::LIST_END),
            Tag::ListItem => self.write_str(markup::LIST_ITEM_END),
            Tag::Heading(_) => self.write_str(markup::HEADING_END),
            Tag::Quote => self.write_str(markup::QUOTE_END),
            Tag::Code => self.write_str(markup::CODE_END),
        }
    }

    /// Open an implicit paragraph block: `<!-- wp:paragraph --><p>`.
    #[inline]
    pub fn paragraph_block_start(&mut self) {
        self.write_str(markup::PARAGRAPH);
        self.write_str("<p>");
    }

    /// Close an implicit paragraph block: `</p><!-- /wp:paragraph -->`.
    #[inline]
    pub fn paragraph_block_end(&mut self) {
        self.write_str("</p>");
        self.write_str(markup::PARAGRAPH_END);
    }

    /// Write paragraph content, substituting hard line breaks: a double break
    /// closes the paragraph block and opens a new one, a single break becomes
    /// `<br>`. With `normalize_line_endings`, bare `\n` counts as a break;
    /// otherwise only `\r\n` does (lone `\r` always passes through).
    pub fn write_paragraph_content(&mut self, text: &str, normalize_line_endings: bool) {
        let bytes = text.as_bytes();
        let mut copied = 0;
        let mut pos = 0;
        while pos < bytes.len() {
            let Some(step) = memchr2(b'\r', b'\n', &bytes[pos..]) else {
                break;
            };
            pos += step;
            let first = break_len(bytes, pos, normalize_line_endings);
            if first == 0 {
                pos += 1;
                continue;
            }
            self.write_string(&text[copied..pos]);
            let second = break_len(bytes, pos + first, normalize_line_endings);
            if second > 0 {
                self.write_str(markup::PARAGRAPH_SPLIT);
                pos += first + second;
            } else {
                self.write_str(markup::LINE_BREAK);
                pos += first;
            }
            copied = pos;
        }
        self.write_string(&text[copied..]);
    }

    // --- Interpolated assembler blocks ---

    /// Organizer block with interpolated entity id.
    #[inline]
    pub fn organizer(&mut self, id: u64) {
        self.write_str(markup::ORGANIZER_PREFIX);
        self.write_u64(id);
        self.write_str(markup::ID_SUFFIX);
    }

    /// Venue block with interpolated entity id.
    #[inline]
    pub fn venue(&mut self, id: u64) {
        self.write_str(markup::VENUE_PREFIX);
        self.write_u64(id);
        self.write_str(markup::ID_SUFFIX);
    }

    /// Custom-field block; `name` must already have underscores stripped.
    #[inline]
    pub fn custom_field(&mut self, name: &str) {
        self.write_str(markup::FIELD_PREFIX);
        self.write_string(name);
        self.write_str(markup::FIELD_SUFFIX);
    }

    /// Open the tickets wrapper block.
    #[inline]
    pub fn tickets_start(&mut self) {
        self.write_str(markup::TICKETS);
    }

    /// One nested ticket item with interpolated ticket id.
    #[inline]
    pub fn ticket_item(&mut self, id: u64) {
        self.write_str(markup::TICKET_ITEM_PREFIX);
        self.write_u64(id);
        self.write_str(markup::TICKET_ITEM_SUFFIX);
    }

    /// Close the tickets wrapper block.
    #[inline]
    pub fn tickets_end(&mut self) {
        self.write_str(markup::TICKETS_END);
    }

    /// Write a u64 as decimal.
    fn write_u64(&mut self, mut n: u64) {
        if n == 0 {
            self.write_byte(b'0');
            return;
        }

        let mut buf = [0u8; 20]; // Max digits for u64
        let mut i = buf.len();

        while n > 0 {
            i -= 1;
            buf[i] = b'0' + (n % 10) as u8;
            n /= 10;
        }

        self.out.extend_from_slice(&buf[i..]);
    }
}

/// Length of the hard break starting at `pos`, or 0 if none starts there.
#[inline]
fn break_len(bytes: &[u8], pos: usize, normalize_line_endings: bool) -> usize {
    if bytes[pos..].starts_with(b"\r\n") {
        2
    } else if normalize_line_endings && bytes.get(pos) == Some(&b'\n') {
        1
    } else {
        0
    }
}

impl Default for BlockWriter {
    fn default() -> Self {
        Self::new()
    }
}
