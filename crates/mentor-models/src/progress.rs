//! The per-user progress record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::UserId;
use crate::topic::Topic;

/// One persisted record per user: where they currently are in the catalog.
///
/// The `(topic, page)` pair must always resolve to an existing page; the
/// navigation layer is the only writer and never constructs an invalid
/// coordinate. Records are replaced whole on save, never field-patched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProgress {
    /// Platform-assigned user id (unique key).
    pub user_id: UserId,

    /// Display name, if the transport provided one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Current topic.
    pub topic: Topic,

    /// Current page index within the topic (0-based).
    pub page: usize,

    /// When the record was first created. Preserved across saves.
    pub created_at: DateTime<Utc>,
}

impl UserProgress {
    /// Creates a fresh record for a previously-unseen user, positioned at
    /// page 0 of the given default topic.
    pub fn new(user_id: UserId, username: Option<String>, default_topic: Topic) -> Self {
        Self {
            user_id,
            username,
            topic: default_topic,
            page: 0,
            created_at: Utc::now(),
        }
    }

    /// Returns a copy of this record moved to a new coordinate, with the
    /// display name refreshed if the transport supplied a newer one.
    /// `created_at` is carried over unchanged.
    pub fn at(&self, topic: Topic, page: usize, username: Option<String>) -> Self {
        Self {
            user_id: self.user_id,
            username: username.or_else(|| self.username.clone()),
            topic,
            page,
            created_at: self.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_starts_at_page_zero() {
        let p = UserProgress::new(UserId(1), None, Topic::Basics);
        assert_eq!(p.topic, Topic::Basics);
        assert_eq!(p.page, 0);
    }

    #[test]
    fn at_preserves_creation_time_and_refreshes_name() {
        let p = UserProgress::new(UserId(1), Some("old".into()), Topic::Basics);
        let moved = p.at(Topic::Oop, 1, Some("new".into()));
        assert_eq!(moved.created_at, p.created_at);
        assert_eq!(moved.username.as_deref(), Some("new"));
        assert_eq!(moved.topic, Topic::Oop);
        assert_eq!(moved.page, 1);
    }

    #[test]
    fn at_keeps_old_name_when_none_supplied() {
        let p = UserProgress::new(UserId(1), Some("kept".into()), Topic::Basics);
        let moved = p.at(Topic::Files, 0, None);
        assert_eq!(moved.username.as_deref(), Some("kept"));
    }
}
