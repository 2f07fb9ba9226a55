//! Append-only question log.

use std::fs;
use std::path::PathBuf;

use mentor_models::{QuestionId, QuestionRecord, UserId};

use crate::atomic::{atomic_write_json, read_json};
use crate::error::{PersistenceError, Result};

/// Append-only store for logged questions.
///
/// Questions are stored as individual JSON files organized by user:
/// ```text
/// base_path/
/// └── questions/
///     └── {user_id}/
///         ├── {question_id}.json
///         └── {question_id}.json
/// ```
///
/// There are no update or delete operations: the log is write-once.
pub struct QuestionStore {
    base_path: PathBuf,
}

impl QuestionStore {
    /// Creates a new QuestionStore rooted at the given base path.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn questions_dir(&self, user_id: UserId) -> PathBuf {
        self.base_path.join("questions").join(user_id.to_string())
    }

    fn question_path(&self, user_id: UserId, id: &QuestionId) -> PathBuf {
        self.questions_dir(user_id).join(format!("{}.json", id))
    }

    /// Appends a question and returns the generated record id.
    pub fn log_question(&self, user_id: UserId, question: &str) -> Result<QuestionId> {
        let record = QuestionRecord::new(user_id, question);
        let path = self.question_path(user_id, &record.id);
        atomic_write_json(&path, &record)?;
        Ok(record.id)
    }

    /// Loads a single question by id.
    pub fn load_question(&self, user_id: UserId, id: &QuestionId) -> Result<QuestionRecord> {
        let path = self.question_path(user_id, id);
        if !path.exists() {
            return Err(PersistenceError::NotFound {
                kind: "question".to_string(),
                id: id.to_string(),
            });
        }
        read_json(&path)
    }

    /// Lists all questions for a user, ordered by creation time (oldest
    /// first). Unreadable entries are skipped with a warning.
    pub fn list_questions(&self, user_id: UserId) -> Result<Vec<QuestionRecord>> {
        let dir = self.questions_dir(user_id);
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut records = Vec::new();
        let entries = fs::read_dir(&dir).map_err(|source| PersistenceError::ReadError {
            path: dir.clone(),
            source,
        })?;

        for entry in entries {
            let entry = entry.map_err(|source| PersistenceError::ReadError {
                path: dir.clone(),
                source,
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                match read_json::<QuestionRecord>(&path) {
                    Ok(record) => records.push(record),
                    Err(e) => {
                        eprintln!("Warning: failed to load question {:?}: {}", path, e);
                    }
                }
            }
        }

        // Creation time is the append order; id breaks the (sub-second) ties.
        records.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.to_string().cmp(&b.id.to_string()))
        });

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn two_questions_get_distinct_retrievable_ids() {
        let dir = tempdir().unwrap();
        let store = QuestionStore::new(dir.path());

        let user = UserId(42);
        let first = store.log_question(user, "what is a generator?").unwrap();
        let second = store.log_question(user, "how do I read a file?").unwrap();

        assert_ne!(first, second);
        assert_eq!(
            store.load_question(user, &first).unwrap().question,
            "what is a generator?"
        );
        assert_eq!(
            store.load_question(user, &second).unwrap().question,
            "how do I read a file?"
        );
    }

    #[test]
    fn listing_preserves_creation_order() {
        let dir = tempdir().unwrap();
        let store = QuestionStore::new(dir.path());

        let user = UserId(42);
        store.log_question(user, "first").unwrap();
        std::thread::sleep(std::time::Duration::from_millis(5));
        store.log_question(user, "second").unwrap();

        let listed = store.list_questions(user).unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].question, "first");
        assert_eq!(listed[1].question, "second");
    }

    #[test]
    fn listing_for_user_without_questions_is_empty() {
        let dir = tempdir().unwrap();
        let store = QuestionStore::new(dir.path());

        assert!(store.list_questions(UserId(99)).unwrap().is_empty());
    }

    #[test]
    fn missing_question_is_not_found() {
        let dir = tempdir().unwrap();
        let store = QuestionStore::new(dir.path());

        let result = store.load_question(UserId(1), &QuestionId::new());
        assert!(matches!(result, Err(PersistenceError::NotFound { .. })));
    }

    #[test]
    fn answers_start_empty() {
        let dir = tempdir().unwrap();
        let store = QuestionStore::new(dir.path());

        let user = UserId(5);
        let id = store.log_question(user, "why?").unwrap();
        assert!(store.load_question(user, &id).unwrap().answer.is_empty());
    }
}
