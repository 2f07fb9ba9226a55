//! Error types for catalog lookups.

use thiserror::Error;

/// Errors that can occur when resolving catalog coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A topic string from external input did not resolve to a catalog
    /// entry. Unreachable for the `Topic` enum itself, reachable for
    /// malformed callback payloads parsed upstream.
    #[error("unknown topic: {0}")]
    UnknownTopic(String),

    /// An explicit page index outside `[0, page_count)`.
    #[error("page {page} out of range for topic '{topic}' ({page_count} pages)")]
    PageOutOfRange {
        topic: String,
        page: usize,
        page_count: usize,
    },
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
