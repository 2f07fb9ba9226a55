//! Callback payload grammar.
//!
//! Inline buttons carry small string payloads; this module is the single
//! place that builds and parses them. Anything that does not parse is a
//! `MalformedCallback` and must not mutate progress.

use std::str::FromStr;

use mentor_models::Topic;

use crate::error::BotError;

/// An action encoded in an inline-button callback payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackAction {
    /// `topic:<t>` — open a topic at page 0.
    Topic(Topic),
    /// `page:<t>:<p>` — jump to an explicit page.
    Page(Topic, usize),
    /// `code:<t>:<p>` — show only the code example of a page.
    Code(Topic, usize),
    /// `show_topics` — show the topic picker.
    ShowTopics,
    /// `main_menu` — back to the main menu.
    MainMenu,
    /// `ask` — start the question flow.
    Ask,
    /// `progress` — show the user's position.
    Progress,
    /// `noop` — the inert page-indicator button.
    Noop,
}

impl CallbackAction {
    /// The payload string to put on a button.
    pub fn payload(&self) -> String {
        match self {
            CallbackAction::Topic(t) => format!("topic:{}", t),
            CallbackAction::Page(t, p) => format!("page:{}:{}", t, p),
            CallbackAction::Code(t, p) => format!("code:{}:{}", t, p),
            CallbackAction::ShowTopics => "show_topics".to_string(),
            CallbackAction::MainMenu => "main_menu".to_string(),
            CallbackAction::Ask => "ask".to_string(),
            CallbackAction::Progress => "progress".to_string(),
            CallbackAction::Noop => "noop".to_string(),
        }
    }
}

fn parse_topic(s: &str, full: &str) -> Result<Topic, BotError> {
    s.parse::<Topic>()
        .map_err(|_| BotError::MalformedCallback(full.to_string()))
}

fn parse_page(s: &str, full: &str) -> Result<usize, BotError> {
    s.parse::<usize>()
        .map_err(|_| BotError::MalformedCallback(full.to_string()))
}

impl FromStr for CallbackAction {
    type Err = BotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "show_topics" => return Ok(CallbackAction::ShowTopics),
            "main_menu" => return Ok(CallbackAction::MainMenu),
            "ask" => return Ok(CallbackAction::Ask),
            "progress" => return Ok(CallbackAction::Progress),
            "noop" => return Ok(CallbackAction::Noop),
            _ => {}
        }

        let mut parts = s.split(':');
        let action = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some("topic"), Some(t), None, _) => CallbackAction::Topic(parse_topic(t, s)?),
            (Some("page"), Some(t), Some(p), None) => {
                CallbackAction::Page(parse_topic(t, s)?, parse_page(p, s)?)
            }
            (Some("code"), Some(t), Some(p), None) => {
                CallbackAction::Code(parse_topic(t, s)?, parse_page(p, s)?)
            }
            _ => return Err(BotError::MalformedCallback(s.to_string())),
        };
        Ok(action)
    }
}
