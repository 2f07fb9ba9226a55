//! Configuration and navigation rules for Mentor Bot.
//!
//! Navigation is a pure function from `(current coordinate, action)` to a
//! new coordinate; it knows nothing about Telegram or storage, so the rules
//! are unit-testable on their own.

pub mod config;
pub mod navigate;

pub use config::BotConfig;
pub use navigate::{resolve, Coordinate, NavAction, NavError};
