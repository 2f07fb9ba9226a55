//! Telegram bot interface for Mentor Bot.
//!
//! This crate provides a Telegram bot that serves pre-authored programming
//! lessons through an inline-keyboard menu, remembers each user's lesson
//! position across restarts, and logs free-text questions for later review.
//!
//! # Environment Variables
//!
//! Required:
//! - `TELEGRAM_BOT_TOKEN`: Bot token from @BotFather
//!
//! Optional:
//! - `MENTOR_STATE_DIR`: State directory (default: `~/.mentor-bot`)
//! - `MENTOR_DEFAULT_TOPIC`: Topic for previously-unseen users
//! - `MENTOR_ADMIN_IDS`: Comma-separated admin user ids
//!
//! # Example
//!
//! ```no_run
//! use mentor_telegram::MentorBot;
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let state_dir = Path::new("/path/to/state");
//!     let bot = MentorBot::new(state_dir)?;
//!     bot.start_polling().await?;
//!     Ok(())
//! }
//! ```
//!
//! # Commands
//!
//! - `/start` - Welcome message and main menu
//! - `/help` - Show available commands
//! - `/topics` - Pick a lesson topic
//! - `/progress` - Show your current lesson position
//! - `/install` - Python installation guide
//! - `/ask` - Log a free-text question

pub mod bot;
pub mod callback;
pub mod error;
pub mod handlers;
pub mod keyboards;
pub mod render;
pub mod state;

pub use bot::MentorBot;
pub use error::{BotError, Result};
pub use state::{create_shared_state, BotState, LessonView};
