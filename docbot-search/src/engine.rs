//! Lookup service: weighted case-insensitive substring scoring over the store.
//!
//! Weights follow the bot's established ranking: title 10, signature 9, library 7,
//! description 5, section/member/property names 4, types and values 3, item
//! descriptions 2. An exact title match adds a large boost so it always ranks first.
//! Ties break toward the shorter title.

use crate::model::{DocEntry, DocItem, Library};
use crate::store::DocStore;

/// Score added for an exact (case-insensitive) title match, on top of the
/// substring weights. Large enough to dominate any combination of them.
const EXACT_TITLE_BOOST: u32 = 100;

/// A user query: trimmed free text plus an optional library filter.
#[derive(Debug, Clone)]
pub struct Query {
    text: String,
    library: Option<Library>,
}

impl Query {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            library: None,
        }
    }

    /// Restricts results to a single library.
    pub fn with_library(mut self, library: Library) -> Self {
        self.library = Some(library);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn library(&self) -> Option<Library> {
        self.library
    }
}

/// One scored match. Entries are borrowed from the store; reconstructed per request.
#[derive(Debug, Clone)]
pub struct SearchHit<'a> {
    pub score: u32,
    pub entry: &'a DocEntry,
}

impl DocStore {
    /// Searches the store. An empty or whitespace-only query yields an empty
    /// result, as does no match; neither is an error. Results are ordered by
    /// score descending, then shorter title first, and truncated to `limit`.
    pub fn search(&self, query: &Query, limit: usize) -> Vec<SearchHit<'_>> {
        let q = query.text().trim().to_lowercase();
        if q.is_empty() {
            return Vec::new();
        }

        let mut hits: Vec<SearchHit<'_>> = self
            .entries()
            .iter()
            .filter(|e| query.library().map_or(true, |lib| e.lib == lib))
            .filter_map(|e| {
                let score = score_entry(e, &q);
                (score > 0).then_some(SearchHit { score, entry: e })
            })
            .collect();

        hits.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then(a.entry.title.len().cmp(&b.entry.title.len()))
        });
        hits.truncate(limit);
        hits
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Scores one item on the (name, type-or-value, description) axes.
fn score_item(item: &DocItem, q: &str, extra: Option<&str>) -> u32 {
    let mut score = 0;
    if contains_ci(&item.name, q) {
        score += 4;
    }
    if let Some(t) = &item.item_type {
        if contains_ci(t, q) {
            score += 3;
        }
    }
    if let Some(extra) = extra {
        if contains_ci(extra, q) {
            score += 3;
        }
    }
    if contains_ci(&item.description, q) {
        score += 2;
    }
    score
}

fn score_entry(entry: &DocEntry, q: &str) -> u32 {
    let mut score = 0;

    // title / signature
    let title = entry.title.to_lowercase();
    if title == q {
        score += EXACT_TITLE_BOOST;
    }
    if title.contains(q) {
        score += 10;
    }
    if let Some(sig) = &entry.details.signature {
        if contains_ci(sig, q) {
            score += 9;
        }
    }

    // library
    if contains_ci(&entry.lib.to_string(), q) {
        score += 7;
    }

    // description
    if contains_ci(&entry.description, q) {
        score += 5;
    }

    // sections (PARAMETERS, RAISES, ...)
    for section in &entry.details.sections {
        if contains_ci(&section.title, q) {
            score += 4;
        }
        for item in &section.items {
            score += score_item(item, q, None);
        }
    }

    // enum members (value counts like a type)
    for member in &entry.details.members {
        score += score_item(member, q, member.value.as_deref());
    }

    // type properties and constructor parameters
    for prop in &entry.details.properties {
        score += score_item(prop, q, None);
    }
    for param in &entry.details.parameters {
        score += score_item(param, q, None);
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Details, DocItem, EntryKind, Example, Section};

    fn entry(title: &str, lib: Library, description: &str) -> DocEntry {
        DocEntry {
            title: title.to_string(),
            lib,
            kind: EntryKind::Method,
            description: description.to_string(),
            example: Example::default(),
            details: Details::default(),
            doc_url: format!("https://pytgcalls.github.io/{lib}/{title}"),
        }
    }

    fn store() -> DocStore {
        let mut playout = entry("playout_delay", Library::NTgCalls, "Playout delay hint");
        playout.details.signature = Some("playout_delay: int".to_string());

        let mut mute = entry("mute", Library::PyTgCalls, "Mutes the userbot in a call");
        mute.details.sections = vec![Section {
            title: "PARAMETERS".to_string(),
            items: vec![DocItem {
                name: "chat_id".to_string(),
                item_type: Some("int".to_string()),
                description: "Target chat".to_string(),
                ..DocItem::default()
            }],
        }];

        DocStore::from_entries(vec![
            entry("play", Library::PyTgCalls, "Starts audio playback"),
            playout,
            mute,
        ])
    }

    #[test]
    fn test_empty_query_returns_empty() {
        let store = store();
        assert!(store.search(&Query::new(""), 10).is_empty());
        assert!(store.search(&Query::new("   "), 10).is_empty());
    }

    #[test]
    fn test_no_match_returns_empty() {
        let store = store();
        assert!(store.search(&Query::new("xyz"), 10).is_empty());
    }

    #[test]
    fn test_exact_title_ranks_first() {
        let store = store();
        // "play" is a substring of "playout_delay" too; exact match must win.
        let hits = store.search(&Query::new("play"), 10);
        assert_eq!(hits[0].entry.title, "play");
        assert!(hits[0].score >= EXACT_TITLE_BOOST);
    }

    #[test]
    fn test_library_filter_excludes_other_library() {
        let store = store();
        let hits = store.search(&Query::new("play").with_library(Library::NTgCalls), 10);
        assert!(!hits.is_empty());
        assert!(hits.iter().all(|h| h.entry.lib == Library::NTgCalls));
    }

    #[test]
    fn test_parameter_name_matches() {
        let store = store();
        let hits = store.search(&Query::new("chat_id"), 10);
        assert_eq!(hits[0].entry.title, "mute");
    }

    #[test]
    fn test_limit_truncates() {
        let store = store();
        let hits = store.search(&Query::new("play"), 1);
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let store = store();
        let hits = store.search(&Query::new("PLAY"), 10);
        assert_eq!(hits[0].entry.title, "play");
    }

    #[test]
    fn test_description_match_scores_lower_than_title() {
        let store = store();
        // "playback" appears only in play's description.
        let hits = store.search(&Query::new("playback"), 10);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].score, 5);
    }
}
