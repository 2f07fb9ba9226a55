//! Persistence layer for Mentor Bot.
//!
//! Two independent collections backed by JSON files with atomic writes
//! (write to temp file, then rename): `progress/` holds one record per user
//! keyed by user id, `questions/` is an append-only log keyed by generated
//! question id.
//!
//! # Example
//!
//! ```no_run
//! use mentor_persistence::{ProgressStore, QuestionStore};
//! use mentor_models::{Topic, UserId, UserProgress};
//!
//! let store = ProgressStore::new("/home/user/.mentor-bot");
//!
//! let record = UserProgress::new(UserId(42), None, Topic::Basics);
//! store.save_progress(&record).unwrap();
//!
//! let loaded = store.load_progress(UserId(42)).unwrap();
//! assert_eq!(loaded.as_ref(), Some(&record));
//! ```

pub mod atomic;
pub mod error;
pub mod progress_store;
pub mod question_store;

pub use error::{PersistenceError, Result};
pub use progress_store::ProgressStore;
pub use question_store::QuestionStore;
