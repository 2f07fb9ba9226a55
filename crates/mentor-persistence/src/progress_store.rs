//! Progress store: one JSON file per user.

use std::path::PathBuf;

use mentor_models::{UserId, UserProgress};

use crate::atomic::{atomic_write_json, read_json_optional};
use crate::error::Result;

/// Persists one progress record per user.
///
/// Records are stored as individual JSON files:
/// ```text
/// base_path/
/// └── progress/
///     ├── 42.json
///     └── 1337.json
/// ```
///
/// `save_progress` is create-or-replace with no merge; concurrent saves for
/// distinct users touch distinct files and are safe. Concurrent saves for
/// the same user are last-write-wins — the transport serializes a single
/// user's interactions in practice, and the contract deliberately does not
/// add locking on top of that.
pub struct ProgressStore {
    base_path: PathBuf,
}

impl ProgressStore {
    /// Creates a new ProgressStore rooted at the given base path.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn progress_path(&self, user_id: UserId) -> PathBuf {
        self.base_path
            .join("progress")
            .join(format!("{}.json", user_id))
    }

    /// Loads the progress record for a user, or `None` for an unseen user.
    pub fn load_progress(&self, user_id: UserId) -> Result<Option<UserProgress>> {
        read_json_optional(&self.progress_path(user_id))
    }

    /// Upserts a progress record (create-or-replace by user id).
    pub fn save_progress(&self, record: &UserProgress) -> Result<()> {
        atomic_write_json(&self.progress_path(record.user_id), record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mentor_models::Topic;
    use tempfile::tempdir;

    #[test]
    fn unseen_user_loads_as_none() {
        let dir = tempdir().unwrap();
        let store = ProgressStore::new(dir.path());

        assert!(store.load_progress(UserId(42)).unwrap().is_none());
    }

    #[test]
    fn save_then_load_roundtrips() {
        let dir = tempdir().unwrap();
        let store = ProgressStore::new(dir.path());

        let record = UserProgress::new(UserId(42), Some("alice".into()), Topic::Basics);
        store.save_progress(&record).unwrap();

        let loaded = store.load_progress(UserId(42)).unwrap().unwrap();
        assert_eq!(loaded.topic, record.topic);
        assert_eq!(loaded.page, record.page);
        assert_eq!(loaded.username, record.username);
    }

    #[test]
    fn save_replaces_whole_record() {
        let dir = tempdir().unwrap();
        let store = ProgressStore::new(dir.path());

        let first = UserProgress::new(UserId(7), Some("bob".into()), Topic::Basics);
        store.save_progress(&first).unwrap();

        let moved = first.at(Topic::Async, 0, None);
        store.save_progress(&moved).unwrap();

        let loaded = store.load_progress(UserId(7)).unwrap().unwrap();
        assert_eq!(loaded.topic, Topic::Async);
        assert_eq!(loaded.created_at, first.created_at);
    }

    #[test]
    fn records_for_distinct_users_are_independent() {
        let dir = tempdir().unwrap();
        let store = ProgressStore::new(dir.path());

        store
            .save_progress(&UserProgress::new(UserId(1), None, Topic::Basics))
            .unwrap();
        store
            .save_progress(&UserProgress::new(UserId(2), None, Topic::Oop))
            .unwrap();

        assert_eq!(
            store.load_progress(UserId(1)).unwrap().unwrap().topic,
            Topic::Basics
        );
        assert_eq!(
            store.load_progress(UserId(2)).unwrap().unwrap().topic,
            Topic::Oop
        );
    }
}
