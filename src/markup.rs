//! Block-editor markup vocabulary.
//!
//! Every literal comment token the converter emits lives here. The downstream
//! block renderer matches these byte-for-byte, so they are single-sourced and
//! never rebuilt from parts at runtime.

/// Opening marker shared by all block comments. A segment that already starts
/// with this is treated as pre-wrapped markup and passed through.
pub const BLOCK_PREFIX: &str = "<!-- wp:";

/// Closing delimiter of any block comment. A segment ending with this is
/// likewise considered already wrapped.
pub const COMMENT_SUFFIX: &str = "-->";

// --- Segmenter wrappers ---

pub const PARAGRAPH: &str = "<!-- wp:paragraph -->";
pub const PARAGRAPH_END: &str = "<!-- /wp:paragraph -->";
pub const LIST: &str = "<!-- wp:list -->";
pub const LIST_ORDERED: &str = "<!-- wp:list {\"ordered\":true} -->";
pub const LIST_END: &str = "<!-- /wp:list -->";
pub const LIST_ITEM: &str = "<!-- wp:list-item -->";
pub const LIST_ITEM_END: &str = "<!-- /wp:list-item -->";
pub const QUOTE: &str = "<!-- wp:quote -->";
pub const QUOTE_END: &str = "<!-- /wp:quote -->";
pub const CODE: &str = "<!-- wp:code -->";
pub const CODE_END: &str = "<!-- /wp:code -->";

/// Heading comments carry the level: `<!-- wp:heading {"level":N} -->`.
/// The writer interpolates the digit between prefix and suffix.
pub const HEADING_PREFIX: &str = "<!-- wp:heading {\"level\":";
pub const HEADING_SUFFIX: &str = "} -->";
pub const HEADING_END: &str = "<!-- /wp:heading -->";

// --- Line-break substitution inside paragraph content ---

/// A double hard break closes the current paragraph block and opens a new one.
pub const PARAGRAPH_SPLIT: &str = "</p><!-- /wp:paragraph --><!-- wp:paragraph --><p>";

/// A single hard break becomes a line-break tag.
pub const LINE_BREAK: &str = "<br>";

// --- Assembler placeholders ---

pub const DATETIME: &str = "<!-- wp:tribe/event-datetime /-->";
pub const FEATURED_IMAGE: &str = "<!-- wp:tribe/featured-image /-->";
pub const COST: &str = "<!-- wp:tribe/event-price {\"costDescription\":\"This is the price\"} /-->";
pub const EVENT_WEBSITE: &str = "<!-- wp:tribe/event-website {\"urlLabel\":\"Button text\"} /-->";
pub const RSVP: &str = "<!-- wp:tribe/rsvp /-->";
pub const SHARING: &str = "<!-- wp:tribe/event-links /-->";
pub const RELATED: &str = "<!-- wp:tribe/related-events /-->";
pub const COMMENTS: &str = "<!-- wp:post-comments-form /-->";

/// Organizer and venue blocks interpolate the entity id:
/// `<!-- wp:tribe/event-organizer {"organizer":<id>} /-->`.
pub const ORGANIZER_PREFIX: &str = "<!-- wp:tribe/event-organizer {\"organizer\":";
pub const VENUE_PREFIX: &str = "<!-- wp:tribe/event-venue {\"venue\":";
pub const ID_SUFFIX: &str = "} /-->";

/// Custom-field blocks interpolate the field name (underscores stripped):
/// `<!-- wp:tribe/field-<name> /-->`.
pub const FIELD_PREFIX: &str = "<!-- wp:tribe/field-";
pub const FIELD_SUFFIX: &str = " /-->";

// --- Tickets ---

pub const TICKETS: &str = "<!-- wp:tribe/tickets -->\n<div class=\"wp-block-tribe-tickets\">";
pub const TICKETS_END: &str = "</div>\n<!-- /wp:tribe/tickets -->";
pub const TICKET_ITEM_PREFIX: &str = "<!-- wp:tribe/tickets-item {\"hasBeenCreated\":true,\"ticketId\":";
pub const TICKET_ITEM_SUFFIX: &str =
    "} -->\n<div class=\"wp-block-tribe-tickets-item\"></div>\n<!-- /wp:tribe/tickets-item -->";

// --- Restore anchors ---

/// Opening token of the placeholder-annotated description paragraph. The
/// restore path anchors on the first occurrence of this exact literal.
pub const DESCRIPTION_OPEN: &str = "<!-- wp:paragraph {\"placeholder\":\"Add Description...\"} -->";

/// Closing anchor of the description paragraph (last occurrence wins).
pub const DESCRIPTION_CLOSE: &str = PARAGRAPH_END;
