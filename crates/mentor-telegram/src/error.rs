//! Error types for the Telegram bot.

use thiserror::Error;

/// Errors that can occur in the Telegram bot.
#[derive(Debug, Error)]
pub enum BotError {
    /// Bot token not provided or invalid.
    #[error("Telegram bot token not set. Set TELEGRAM_BOT_TOKEN environment variable.")]
    NoToken,

    /// Failed to start the bot.
    #[error("Failed to start bot: {0}")]
    BotStartFailed(String),

    /// A callback payload that could not be parsed into a known action.
    #[error("Malformed callback payload: {0}")]
    MalformedCallback(String),

    /// Unknown topic or page reference from external input.
    #[error(transparent)]
    Catalog(#[from] mentor_catalog::CatalogError),

    /// Navigation failure (out-of-range explicit jump).
    #[error(transparent)]
    Nav(#[from] mentor_core::NavError),

    /// Persistence failure. The interaction fails without a content update
    /// and no progress mutation is attempted.
    #[error("Storage unavailable: {0}")]
    Persistence(#[from] mentor_persistence::PersistenceError),

    /// IO error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl BotError {
    /// Whether this error is recoverable at the interaction boundary: the
    /// user gets a short notice and the bot keeps serving. Storage failures
    /// are reported differently because the "resume where I left off"
    /// guarantee is at stake.
    pub fn is_user_recoverable(&self) -> bool {
        matches!(
            self,
            BotError::MalformedCallback(_) | BotError::Catalog(_) | BotError::Nav(_)
        )
    }

    /// Short human-readable notice for the interaction boundary.
    pub fn user_notice(&self) -> String {
        match self {
            BotError::MalformedCallback(_) => "That button is no longer valid.".to_string(),
            BotError::Catalog(mentor_catalog::CatalogError::UnknownTopic(_)) => {
                "Unknown topic.".to_string()
            }
            BotError::Catalog(mentor_catalog::CatalogError::PageOutOfRange { .. })
            | BotError::Nav(_) => "That page does not exist.".to_string(),
            BotError::Persistence(_) => {
                "Storage is temporarily unavailable, please try again.".to_string()
            }
            other => format!("Error: {}", other),
        }
    }
}

/// Result type for bot operations.
pub type Result<T> = std::result::Result<T, BotError>;
