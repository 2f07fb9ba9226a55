//! Append-only question log records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{QuestionId, UserId};

/// A free-text question logged for later review. Write-once: there are no
/// update or delete operations on these records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    /// Generated identifier.
    pub id: QuestionId,

    /// Who asked.
    pub user_id: UserId,

    /// The question text as received.
    pub question: String,

    /// Answer text. Empty at creation; filled by an external review
    /// process, never by the bot.
    #[serde(default)]
    pub answer: String,

    /// When the question was logged.
    pub created_at: DateTime<Utc>,
}

impl QuestionRecord {
    /// Creates a new record with a generated id and an empty answer.
    pub fn new(user_id: UserId, question: impl Into<String>) -> Self {
        Self {
            id: QuestionId::new(),
            user_id,
            question: question.into(),
            answer: String::new(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_question_has_empty_answer() {
        let q = QuestionRecord::new(UserId(7), "how do decorators work?");
        assert!(q.answer.is_empty());
        assert_eq!(q.question, "how do decorators work?");
    }

    #[test]
    fn two_questions_get_distinct_ids() {
        let a = QuestionRecord::new(UserId(7), "first");
        let b = QuestionRecord::new(UserId(7), "second");
        assert_ne!(a.id, b.id);
    }
}
