//! Shared configuration for Mentor Bot.
//!
//! # Storage Structure
//!
//! All application data is stored under `~/.mentor-bot/`:
//!
//! ```text
//! ~/.mentor-bot/
//! ├── progress/     # One JSON file per user
//! └── questions/    # Append-only question log, one directory per user
//! ```
//!
//! # Environment Variables
//!
//! - `MENTOR_STATE_DIR`: Override the base state directory
//! - `MENTOR_DEFAULT_TOPIC`: Topic shown to previously-unseen users
//! - `MENTOR_ADMIN_IDS`: Comma-separated allow-listed admin user ids

use std::path::PathBuf;
use std::sync::OnceLock;

use mentor_models::{Topic, UserId};
use tracing::warn;

/// Environment variable for custom state directory.
pub const STATE_DIR_ENV: &str = "MENTOR_STATE_DIR";

/// Environment variable for the default topic.
pub const DEFAULT_TOPIC_ENV: &str = "MENTOR_DEFAULT_TOPIC";

/// Environment variable for the admin allow-list.
pub const ADMIN_IDS_ENV: &str = "MENTOR_ADMIN_IDS";

/// Default state directory name under home.
const DEFAULT_STATE_DIR: &str = ".mentor-bot";

static STATE_DIR_CACHE: OnceLock<PathBuf> = OnceLock::new();

/// Get the Mentor Bot state directory.
///
/// The state directory is determined by:
/// 1. `MENTOR_STATE_DIR` environment variable if set
/// 2. `~/.mentor-bot` if home directory is available
/// 3. `.mentor-bot` in current directory as fallback
pub fn state_dir() -> PathBuf {
    STATE_DIR_CACHE
        .get_or_init(|| {
            std::env::var(STATE_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|_| {
                    dirs::home_dir()
                        .map(|h| h.join(DEFAULT_STATE_DIR))
                        .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_DIR))
                })
        })
        .clone()
}

/// Runtime configuration, read once at process start.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Topic a previously-unseen user starts on.
    pub default_topic: Topic,
    /// Allow-listed administrator ids.
    pub admin_ids: Vec<UserId>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            default_topic: Topic::Basics,
            admin_ids: Vec::new(),
        }
    }
}

impl BotConfig {
    /// Reads configuration from the environment. Malformed values are
    /// logged and skipped rather than failing startup.
    pub fn from_env() -> Self {
        let default_topic = match std::env::var(DEFAULT_TOPIC_ENV) {
            Ok(value) => match value.parse::<Topic>() {
                Ok(topic) => topic,
                Err(e) => {
                    warn!(error = %e, "Invalid {}, falling back to basics", DEFAULT_TOPIC_ENV);
                    Topic::Basics
                }
            },
            Err(_) => Topic::Basics,
        };

        let admin_ids = std::env::var(ADMIN_IDS_ENV)
            .map(|value| parse_admin_ids(&value))
            .unwrap_or_default();

        Self {
            default_topic,
            admin_ids,
        }
    }

    /// Whether the given user is on the admin allow-list.
    pub fn is_admin(&self, user_id: UserId) -> bool {
        self.admin_ids.contains(&user_id)
    }
}

fn parse_admin_ids(value: &str) -> Vec<UserId> {
    value
        .split(',')
        .filter_map(|part| {
            let part = part.trim();
            if part.is_empty() {
                return None;
            }
            match part.parse::<i64>() {
                Ok(id) => Some(UserId::from(id)),
                Err(_) => {
                    warn!(value = %part, "Skipping non-numeric admin id");
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_admin_id_list() {
        let ids = parse_admin_ids("1, 42,  , 99");
        assert_eq!(ids, vec![UserId(1), UserId(42), UserId(99)]);
    }

    #[test]
    fn skips_garbage_admin_ids() {
        let ids = parse_admin_ids("7,abc,8");
        assert_eq!(ids, vec![UserId(7), UserId(8)]);
    }

    #[test]
    fn default_config_starts_on_basics() {
        let config = BotConfig::default();
        assert_eq!(config.default_topic, Topic::Basics);
        assert!(!config.is_admin(UserId(5)));
    }
}
