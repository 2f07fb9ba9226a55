//! The catalog itself: topic lookup and page addressing.

use mentor_models::Topic;

use crate::error::{CatalogError, Result};
use crate::lessons;
use crate::page::Page;

/// One topic's worth of content.
#[derive(Debug, Clone)]
pub struct TopicEntry {
    pub topic: Topic,
    pub title: &'static str,
    pub pages: Vec<Page>,
}

/// The immutable, in-memory lesson catalog.
///
/// Built once from the embedded definition; read-only and thread-safe by
/// construction after that.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<TopicEntry>,
}

impl Catalog {
    /// Builds the catalog from the embedded lesson definition.
    ///
    /// Panics if the definition is incomplete (a missing topic or an empty
    /// page list is a build-time authoring mistake, not a runtime
    /// condition).
    pub fn new() -> Self {
        let entries = lessons::build();
        for topic in Topic::ALL {
            let entry = entries
                .iter()
                .find(|e| e.topic == topic)
                .unwrap_or_else(|| panic!("catalog definition missing topic '{}'", topic));
            assert!(
                !entry.pages.is_empty(),
                "catalog topic '{}' has no pages",
                topic
            );
        }
        Self { entries }
    }

    fn entry(&self, topic: Topic) -> Result<&TopicEntry> {
        self.entries
            .iter()
            .find(|e| e.topic == topic)
            .ok_or_else(|| CatalogError::UnknownTopic(topic.to_string()))
    }

    /// Display title for a topic.
    pub fn title(&self, topic: Topic) -> Result<&'static str> {
        Ok(self.entry(topic)?.title)
    }

    /// Number of pages in a topic. Always >= 1 for a built catalog.
    pub fn page_count(&self, topic: Topic) -> Result<usize> {
        Ok(self.entry(topic)?.pages.len())
    }

    /// Looks up a page by coordinate.
    pub fn page(&self, topic: Topic, index: usize) -> Result<&Page> {
        let entry = self.entry(topic)?;
        entry
            .pages
            .get(index)
            .ok_or_else(|| CatalogError::PageOutOfRange {
                topic: topic.to_string(),
                page: index,
                page_count: entry.pages.len(),
            })
    }

    /// All topics with their titles, in menu order.
    pub fn topics(&self) -> impl Iterator<Item = (Topic, &'static str)> + '_ {
        self.entries.iter().map(|e| (e.topic, e.title))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
