//! Immutable lesson catalog for Mentor Bot.
//!
//! The catalog is a read-only tree of topics, each holding an ordered
//! sequence of pages, each holding an explanation and zero or more
//! role-tagged content blocks. It is built once at process start from an
//! embedded definition and is freely shared after that; nothing mutates it
//! at runtime.

pub mod catalog;
pub mod error;
mod lessons;
pub mod page;

pub use catalog::Catalog;
pub use error::{CatalogError, Result};
pub use page::{BlockRole, ContentBlock, Page};
