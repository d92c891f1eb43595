//! Event-document assembly.
//!
//! Builds the full block-editor document for a submitted event: fixed
//! placeholders, the segmented free-text body, and one block per referenced
//! side entity (organizers, venues, custom fields, tickets), all in a fixed
//! order and joined by newlines.

use rustc_hash::FxHashMap;

use crate::Options;
use crate::markup;
use crate::writer::BlockWriter;

/// A custom field configured for event submissions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomField {
    pub name: String,
}

/// A submitted event: the free-text body plus the side-entity identifiers
/// known at submission time. Immutable input to [`assemble`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmittedEvent {
    pub id: u64,
    pub post_content: String,
    pub cost_value: Option<String>,
    pub organizer_ids: Vec<u64>,
    pub venue_ids: Vec<u64>,
    pub custom_fields: Vec<CustomField>,
    pub ticket_ids: Vec<u64>,
    pub has_rsvp: bool,
    pub has_tickets_feature: bool,
}

/// One named piece of block markup contributed to the final document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockFragment {
    /// Unique within one assembly run; inserting an existing key overwrites
    /// the markup in place, keeping the fragment's original position.
    pub key: String,
    pub markup: String,
}

/// Insertion-ordered fragment collection with overwrite-by-key semantics.
struct FragmentList {
    fragments: Vec<BlockFragment>,
    index: FxHashMap<String, usize>,
}

impl FragmentList {
    fn new() -> Self {
        Self {
            fragments: Vec::with_capacity(16),
            index: FxHashMap::default(),
        }
    }

    fn insert(&mut self, key: impl Into<String>, markup: String) {
        let key = key.into();
        match self.index.get(&key) {
            Some(&at) => self.fragments[at].markup = markup,
            None => {
                self.index.insert(key.clone(), self.fragments.len());
                self.fragments.push(BlockFragment { key, markup });
            }
        }
    }

    fn into_vec(self) -> Vec<BlockFragment> {
        self.fragments
    }
}

/// Assemble the block document for a submitted event with default options.
pub fn assemble(event: &SubmittedEvent) -> String {
    assemble_with_options(event, &Options::default())
}

/// Assemble the block document for a submitted event.
///
/// Never fails: empty optional fields simply omit their fragments.
pub fn assemble_with_options(event: &SubmittedEvent, options: &Options) -> String {
    let fragments = assemble_fragments(event, options);
    let total: usize = fragments.iter().map(|f| f.markup.len() + 1).sum();
    let mut out = String::with_capacity(total);
    for (i, fragment) in fragments.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&fragment.markup);
    }
    out
}

/// Produce the ordered fragment sequence for a submitted event.
///
/// Order is fixed and stable across calls: datetime, featured image, content,
/// cost (if priced), website, organizers, venues, custom fields, RSVP (if
/// enabled), tickets (if the feature is on and ids exist), sharing, related,
/// comments.
pub fn assemble_fragments(event: &SubmittedEvent, options: &Options) -> Vec<BlockFragment> {
    let mut list = FragmentList::new();

    list.insert("datetime", markup::DATETIME.to_owned());
    list.insert("featured_image", markup::FEATURED_IMAGE.to_owned());
    list.insert(
        "content",
        crate::to_blocks_with_options(&event.post_content, options),
    );

    if event.cost_value.as_deref().is_some_and(|cost| !cost.is_empty()) {
        list.insert("cost", markup::COST.to_owned());
    }

    list.insert("event_website", markup::EVENT_WEBSITE.to_owned());

    for &id in &event.organizer_ids {
        let mut writer = BlockWriter::with_capacity(64);
        writer.organizer(id);
        list.insert(format!("organizer_{id}"), writer.into_string());
    }

    for &id in &event.venue_ids {
        let mut writer = BlockWriter::with_capacity(64);
        writer.venue(id);
        list.insert(format!("venue_{id}"), writer.into_string());
    }

    for field in &event.custom_fields {
        let stripped: String = field.name.chars().filter(|&c| c != '_').collect();
        let mut writer = BlockWriter::with_capacity(64);
        writer.custom_field(&stripped);
        list.insert(stripped, writer.into_string());
    }

    if event.has_rsvp {
        list.insert("rsvp", markup::RSVP.to_owned());
    }

    if event.has_tickets_feature && !event.ticket_ids.is_empty() {
        let mut writer = BlockWriter::with_capacity(256);
        writer.tickets_start();
        for &id in &event.ticket_ids {
            writer.ticket_item(id);
        }
        writer.tickets_end();
        list.insert("tickets", writer.into_string());
    }

    list.insert("sharing", markup::SHARING.to_owned());
    list.insert("related", markup::RELATED.to_owned());
    list.insert("comments", markup::COMMENTS.to_owned());

    list.into_vec()
}
