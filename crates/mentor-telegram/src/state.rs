//! Shared state for the Telegram bot.
//!
//! `BotState` owns the catalog, the stores, and the configuration, and
//! exposes the interaction-level operations the handlers call. It never
//! touches the Telegram API, so the whole interaction flow is testable with
//! a temp directory and no network.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use mentor_catalog::{Catalog, Page};
use mentor_core::{navigate, BotConfig, Coordinate, NavAction};
use mentor_models::{QuestionId, Topic, UserId, UserProgress};
use mentor_persistence::{ProgressStore, QuestionStore};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::error::Result;

/// Everything the handlers need to render one lesson page.
#[derive(Debug, Clone)]
pub struct LessonView {
    pub topic: Topic,
    pub topic_title: &'static str,
    pub page: Page,
    pub page_index: usize,
    pub page_count: usize,
}

/// Shared state for the Telegram bot, accessible across all handlers.
pub struct BotState {
    /// Immutable lesson catalog.
    catalog: Catalog,
    /// Per-user progress records.
    progress: ProgressStore,
    /// Append-only question log.
    questions: QuestionStore,
    /// Configuration read once at start.
    config: BotConfig,
    /// Users currently in the "ask a question" flow.
    awaiting_question: RwLock<HashSet<i64>>,
}

impl BotState {
    /// Creates state rooted at the given directory.
    pub fn new(state_dir: &Path, config: BotConfig) -> Self {
        Self {
            catalog: Catalog::new(),
            progress: ProgressStore::new(state_dir),
            questions: QuestionStore::new(state_dir),
            config,
            awaiting_question: RwLock::new(HashSet::new()),
        }
    }

    /// The lesson catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Whether the user is on the admin allow-list.
    pub fn is_admin(&self, user_id: UserId) -> bool {
        self.config.is_admin(user_id)
    }

    /// Loads the user's progress, creating and persisting the default
    /// record on first contact.
    pub fn ensure_progress(
        &self,
        user_id: UserId,
        username: Option<String>,
    ) -> Result<UserProgress> {
        if let Some(existing) = self.progress.load_progress(user_id)? {
            return Ok(existing);
        }
        let record = UserProgress::new(user_id, username, self.config.default_topic);
        self.progress.save_progress(&record)?;
        info!(user_id = %user_id, topic = %record.topic, "Created progress record for new user");
        Ok(record)
    }

    /// Loads the user's progress without creating a record.
    pub fn get_progress(&self, user_id: UserId) -> Result<Option<UserProgress>> {
        Ok(self.progress.load_progress(user_id)?)
    }

    /// Applies one navigation action for a user: resolve the new
    /// coordinate, look up the page, then persist the moved record with
    /// exactly one save. Fails before the save on any resolution error, so
    /// stored progress is untouched unless the whole interaction succeeds.
    pub fn navigate(
        &self,
        user_id: UserId,
        username: Option<String>,
        action: NavAction,
    ) -> Result<LessonView> {
        // For an unseen user the base record exists only in memory until
        // the action resolves; a failed interaction leaves no trace.
        let base = match self.progress.load_progress(user_id)? {
            Some(record) => record,
            None => UserProgress::new(user_id, username.clone(), self.config.default_topic),
        };

        let current = Coordinate::new(base.topic, base.page);
        let target = navigate::resolve(&self.catalog, current, action)?;

        let view = self.view(target)?;

        let moved = base.at(target.topic, target.page, username);
        self.progress.save_progress(&moved)?;
        debug!(
            user_id = %user_id,
            topic = %target.topic,
            page = target.page,
            "Progress updated"
        );

        Ok(view)
    }

    /// Renders a coordinate to a view without touching progress. Used for
    /// the code-only display, which re-shows an already-visited page.
    pub fn view(&self, coordinate: Coordinate) -> Result<LessonView> {
        let page = self.catalog.page(coordinate.topic, coordinate.page)?.clone();
        Ok(LessonView {
            topic: coordinate.topic,
            topic_title: self.catalog.title(coordinate.topic)?,
            page,
            page_index: coordinate.page,
            page_count: self.catalog.page_count(coordinate.topic)?,
        })
    }

    /// Marks a user as waiting to send a free-text question.
    pub async fn begin_question(&self, user_id: i64) {
        self.awaiting_question.write().await.insert(user_id);
    }

    /// Consumes the waiting flag for a user. Returns whether it was set.
    pub async fn take_pending_question(&self, user_id: i64) -> bool {
        self.awaiting_question.write().await.remove(&user_id)
    }

    /// Logs a free-text question and returns the generated id.
    pub fn log_question(&self, user_id: UserId, text: &str) -> Result<QuestionId> {
        let id = self.questions.log_question(user_id, text)?;
        info!(user_id = %user_id, question_id = %id, "Question logged");
        Ok(id)
    }
}

/// Create shared state wrapped in an Arc for the dispatcher.
pub fn create_shared_state(state_dir: &Path, config: BotConfig) -> Arc<BotState> {
    Arc::new(BotState::new(state_dir, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BotError;
    use mentor_catalog::CatalogError;
    use mentor_core::NavError;
    use tempfile::tempdir;

    fn state(dir: &Path) -> BotState {
        BotState::new(dir, BotConfig::default())
    }

    #[test]
    fn unseen_user_selecting_a_topic_lands_on_page_zero() {
        let dir = tempdir().unwrap();
        let state = state(dir.path());
        let user = UserId(42);

        let view = state
            .navigate(user, None, NavAction::SelectTopic(Topic::Basics))
            .unwrap();
        assert_eq!(view.topic, Topic::Basics);
        assert_eq!(view.page_index, 0);

        let stored = state.get_progress(user).unwrap().unwrap();
        assert_eq!(stored.topic, Topic::Basics);
        assert_eq!(stored.page, 0);
    }

    #[test]
    fn step_forward_advances_stored_progress() {
        let dir = tempdir().unwrap();
        let state = state(dir.path());
        let user = UserId(42);

        state
            .navigate(user, None, NavAction::SelectTopic(Topic::Basics))
            .unwrap();
        let view = state.navigate(user, None, NavAction::NextPage).unwrap();

        assert!(view.page_count > 1);
        assert_eq!(view.page_index, 1);
        assert_eq!(state.get_progress(user).unwrap().unwrap().page, 1);
    }

    #[test]
    fn out_of_range_jump_leaves_stored_progress_unchanged() {
        let dir = tempdir().unwrap();
        let state = state(dir.path());
        let user = UserId(7);

        state
            .navigate(user, None, NavAction::SelectTopic(Topic::Oop))
            .unwrap();
        let before = state.get_progress(user).unwrap().unwrap();

        let count = state.catalog().page_count(Topic::Oop).unwrap();
        let err = state
            .navigate(user, None, NavAction::GoToPage(Topic::Oop, count))
            .unwrap_err();
        assert!(matches!(
            err,
            BotError::Nav(NavError::Catalog(CatalogError::PageOutOfRange { .. }))
        ));

        let after = state.get_progress(user).unwrap().unwrap();
        assert_eq!(after, before);
    }

    #[test]
    fn failed_interaction_creates_no_record_for_unseen_user() {
        let dir = tempdir().unwrap();
        let state = state(dir.path());
        let user = UserId(99);

        let count = state.catalog().page_count(Topic::Basics).unwrap();
        state
            .navigate(user, None, NavAction::GoToPage(Topic::Basics, count))
            .unwrap_err();

        assert!(state.get_progress(user).unwrap().is_none());
    }

    #[test]
    fn navigation_refreshes_display_name() {
        let dir = tempdir().unwrap();
        let state = state(dir.path());
        let user = UserId(5);

        state
            .navigate(
                user,
                Some("old_name".into()),
                NavAction::SelectTopic(Topic::Files),
            )
            .unwrap();
        state
            .navigate(user, Some("new_name".into()), NavAction::NextPage)
            .unwrap();

        let stored = state.get_progress(user).unwrap().unwrap();
        assert_eq!(stored.username.as_deref(), Some("new_name"));
    }

    #[test]
    fn ensure_progress_is_idempotent() {
        let dir = tempdir().unwrap();
        let state = state(dir.path());
        let user = UserId(11);

        let first = state.ensure_progress(user, Some("alice".into())).unwrap();
        let second = state.ensure_progress(user, Some("renamed".into())).unwrap();

        // Second call loads the stored record; it does not recreate it.
        assert_eq!(second.created_at, first.created_at);
        assert_eq!(second.username.as_deref(), Some("alice"));
    }

    #[test]
    fn creation_timestamp_survives_navigation() {
        let dir = tempdir().unwrap();
        let state = state(dir.path());
        let user = UserId(12);

        let created = state.ensure_progress(user, None).unwrap().created_at;
        state
            .navigate(user, None, NavAction::SelectTopic(Topic::Async))
            .unwrap();

        let stored = state.get_progress(user).unwrap().unwrap();
        assert_eq!(stored.created_at, created);
    }

    #[tokio::test]
    async fn question_flag_is_consumed_once() {
        let dir = tempdir().unwrap();
        let state = state(dir.path());

        state.begin_question(42).await;
        assert!(state.take_pending_question(42).await);
        assert!(!state.take_pending_question(42).await);
    }

    #[test]
    fn logged_questions_get_distinct_ids() {
        let dir = tempdir().unwrap();
        let state = state(dir.path());
        let user = UserId(42);

        let a = state.log_question(user, "what is self?").unwrap();
        let b = state.log_question(user, "what is cls?").unwrap();
        assert_ne!(a, b);
    }
}
