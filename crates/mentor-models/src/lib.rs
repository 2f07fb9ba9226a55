//! Core data models for Mentor Bot.
//!
//! This crate provides the fundamental data types used throughout the
//! system: user and question identifiers, the closed set of lesson topics,
//! and the two persisted record shapes (progress and questions).

pub mod ids;
pub mod progress;
pub mod question;
pub mod topic;

// Re-export main types
pub use ids::{QuestionId, UserId};
pub use progress::UserProgress;
pub use question::QuestionRecord;
pub use topic::Topic;
