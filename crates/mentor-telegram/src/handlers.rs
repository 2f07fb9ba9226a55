//! Command and callback handlers for the Telegram bot.

use std::sync::Arc;

use mentor_core::{Coordinate, NavAction};
use mentor_models::{Topic, UserId};
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardMarkup, ParseMode};
use teloxide::utils::command::BotCommands;
use tracing::{debug, error, info, warn};

use crate::callback::CallbackAction;
use crate::error::BotError;
use crate::keyboards;
use crate::render;
use crate::state::BotState;

/// Bot commands that can be invoked with /.
#[derive(BotCommands, Clone, Debug)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum Command {
    #[command(description = "Start the bot and show the main menu")]
    Start,

    #[command(description = "Show help message")]
    Help,

    #[command(description = "Pick a lesson topic")]
    Topics,

    #[command(description = "Show your current lesson position")]
    Progress,

    #[command(description = "Python installation guide")]
    Install,

    #[command(description = "Ask a question (it will be logged for review)")]
    Ask,
}

/// Extract the acting user's id and display name from a message.
///
/// Falls back to the chat id for channel-style updates without a sender;
/// for the private chats this bot serves the two are the same.
fn identity(msg: &Message) -> (UserId, Option<String>) {
    match msg.from.as_ref() {
        Some(user) => (UserId::from(user.id.0 as i64), user.username.clone()),
        None => (UserId::from(msg.chat.id.0), None),
    }
}

/// Handle the /start command.
pub async fn handle_start(bot: Bot, msg: Message, state: Arc<BotState>) -> ResponseResult<()> {
    let (user_id, username) = identity(&msg);

    if let Err(e) = state.ensure_progress(user_id, username) {
        error!(user_id = %user_id, error = %e, "Failed to create progress record");
        bot.send_message(msg.chat.id, e.user_notice()).await?;
        return Ok(());
    }

    bot.send_message(msg.chat.id, render::welcome_text())
        .parse_mode(ParseMode::Html)
        .reply_markup(keyboards::main_menu())
        .await?;

    info!(chat_id = %msg.chat.id, user_id = %user_id, "User started bot");
    Ok(())
}

/// Handle the /help command.
pub async fn handle_help(bot: Bot, msg: Message) -> ResponseResult<()> {
    let help_text = Command::descriptions().to_string();
    bot.send_message(msg.chat.id, help_text).await?;
    Ok(())
}

/// Handle the /topics command.
pub async fn handle_topics(bot: Bot, msg: Message, state: Arc<BotState>) -> ResponseResult<()> {
    bot.send_message(msg.chat.id, "<b>📚 Pick a topic to study:</b>")
        .parse_mode(ParseMode::Html)
        .reply_markup(keyboards::topics(state.catalog()))
        .await?;
    Ok(())
}

/// Handle the /progress command.
pub async fn handle_progress(bot: Bot, msg: Message, state: Arc<BotState>) -> ResponseResult<()> {
    let (user_id, username) = identity(&msg);

    match state.ensure_progress(user_id, username) {
        Ok(progress) => {
            let title = state
                .catalog()
                .title(progress.topic)
                .unwrap_or("unknown topic");
            bot.send_message(msg.chat.id, render::format_progress(&progress, title))
                .parse_mode(ParseMode::Html)
                .reply_markup(keyboards::main_menu())
                .await?;
        }
        Err(e) => {
            error!(user_id = %user_id, error = %e, "Failed to load progress");
            bot.send_message(msg.chat.id, e.user_notice()).await?;
        }
    }

    Ok(())
}

/// Handle the /install command - open the installation guide as a regular
/// lesson (it participates in progress tracking like any other topic).
pub async fn handle_install(bot: Bot, msg: Message, state: Arc<BotState>) -> ResponseResult<()> {
    let (user_id, username) = identity(&msg);

    match state.navigate(user_id, username, NavAction::SelectTopic(Topic::Install)) {
        Ok(view) => {
            bot.send_message(msg.chat.id, render::format_page(&view))
                .parse_mode(ParseMode::Html)
                .reply_markup(keyboards::lesson_navigation(&view))
                .await?;
        }
        Err(e) => {
            error!(user_id = %user_id, error = %e, "Install guide failed");
            bot.send_message(msg.chat.id, e.user_notice()).await?;
        }
    }

    Ok(())
}

/// Handle the /ask command - start the question flow.
pub async fn handle_ask(bot: Bot, msg: Message, state: Arc<BotState>) -> ResponseResult<()> {
    let (user_id, _) = identity(&msg);
    state.begin_question(user_id.as_i64()).await;
    bot.send_message(msg.chat.id, render::ask_prompt())
        .parse_mode(ParseMode::Html)
        .await?;
    Ok(())
}

/// Handle regular text messages: either the pending question flow or the
/// fixed reply table.
pub async fn handle_message(bot: Bot, msg: Message, state: Arc<BotState>) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    let (user_id, _) = identity(&msg);
    if state.take_pending_question(user_id.as_i64()).await {
        match state.log_question(user_id, text) {
            Ok(question_id) => {
                debug!(user_id = %user_id, question_id = %question_id, "Question stored");
                bot.send_message(msg.chat.id, render::question_ack())
                    .parse_mode(ParseMode::Html)
                    .reply_markup(keyboards::main_menu())
                    .await?;
            }
            Err(e) => {
                error!(user_id = %user_id, error = %e, "Failed to store question");
                bot.send_message(msg.chat.id, e.user_notice()).await?;
            }
        }
        return Ok(());
    }

    let reply = render::fixed_reply(text).unwrap_or_else(render::fallback_reply);
    bot.send_message(msg.chat.id, reply)
        .parse_mode(ParseMode::Html)
        .await?;

    Ok(())
}

/// What a callback interaction resolved to.
enum CallbackOutcome {
    /// Replace the message text (and keyboard, if any).
    Edit {
        text: String,
        keyboard: Option<InlineKeyboardMarkup>,
    },
    /// Show a short notice in the callback toast, leave the message alone.
    Notice(String),
    /// Acknowledge silently.
    Nothing,
}

/// Resolve a parsed callback action against the state. All recoverable
/// errors collapse into a `Notice`; stored progress is only touched on the
/// successful navigation paths.
async fn apply_callback(
    state: &BotState,
    user_id: UserId,
    username: Option<String>,
    action: CallbackAction,
) -> CallbackOutcome {
    let nav_action = match action {
        CallbackAction::Topic(topic) => Some(NavAction::SelectTopic(topic)),
        CallbackAction::Page(topic, page) => Some(NavAction::GoToPage(topic, page)),
        _ => None,
    };

    if let Some(nav_action) = nav_action {
        return match state.navigate(user_id, username, nav_action) {
            Ok(view) => CallbackOutcome::Edit {
                text: render::format_page(&view),
                keyboard: Some(keyboards::lesson_navigation(&view)),
            },
            Err(e) => notice_for(user_id, e),
        };
    }

    match action {
        CallbackAction::Code(topic, page) => {
            // Re-shows an already-visited page, so progress stays as is.
            match state.view(Coordinate::new(topic, page)) {
                Ok(view) => match render::format_code_only(&view.page) {
                    Some(text) => CallbackOutcome::Edit {
                        text,
                        keyboard: Some(keyboards::code_view(topic, page)),
                    },
                    None => {
                        CallbackOutcome::Notice("No code example on this page.".to_string())
                    }
                },
                Err(e) => notice_for(user_id, e),
            }
        }
        CallbackAction::ShowTopics => CallbackOutcome::Edit {
            text: "<b>📚 Pick a topic to study:</b>".to_string(),
            keyboard: Some(keyboards::topics(state.catalog())),
        },
        CallbackAction::MainMenu => CallbackOutcome::Edit {
            text: "<b>🏠 Main menu</b>\n\nPick an action:".to_string(),
            keyboard: Some(keyboards::main_menu()),
        },
        CallbackAction::Progress => match state.ensure_progress(user_id, username) {
            Ok(progress) => {
                let title = state
                    .catalog()
                    .title(progress.topic)
                    .unwrap_or("unknown topic");
                CallbackOutcome::Edit {
                    text: render::format_progress(&progress, title),
                    keyboard: Some(keyboards::main_menu()),
                }
            }
            Err(e) => notice_for(user_id, e),
        },
        CallbackAction::Ask => {
            state.begin_question(user_id.as_i64()).await;
            CallbackOutcome::Edit {
                text: render::ask_prompt().to_string(),
                keyboard: None,
            }
        }
        CallbackAction::Noop => CallbackOutcome::Nothing,
        // Handled above.
        CallbackAction::Topic(_) | CallbackAction::Page(_, _) => CallbackOutcome::Nothing,
    }
}

fn notice_for(user_id: UserId, e: BotError) -> CallbackOutcome {
    if e.is_user_recoverable() {
        debug!(user_id = %user_id, error = %e, "Recoverable interaction error");
    } else {
        error!(user_id = %user_id, error = %e, "Interaction failed");
    }
    CallbackOutcome::Notice(e.user_notice())
}

/// Handle an inline-button callback.
pub async fn handle_callback(
    bot: Bot,
    q: CallbackQuery,
    state: Arc<BotState>,
) -> ResponseResult<()> {
    let user_id = UserId::from(q.from.id.0 as i64);
    let username = q.from.username.clone();

    let outcome = match q.data.as_deref() {
        Some(data) => match data.parse::<CallbackAction>() {
            Ok(action) => apply_callback(&state, user_id, username, action).await,
            Err(e) => {
                warn!(user_id = %user_id, payload = %data, "Malformed callback payload");
                CallbackOutcome::Notice(e.user_notice())
            }
        },
        None => CallbackOutcome::Nothing,
    };

    match outcome {
        CallbackOutcome::Edit { text, keyboard } => {
            if let Some(message) = q.message.as_ref() {
                let mut req = bot
                    .edit_message_text(message.chat().id, message.id(), text)
                    .parse_mode(ParseMode::Html);
                if let Some(kb) = keyboard {
                    req = req.reply_markup(kb);
                }
                // Editing to identical content is rejected by Telegram;
                // harmless, so ignore edit failures.
                let _ = req.await;
            }
            bot.answer_callback_query(q.id).await?;
        }
        CallbackOutcome::Notice(notice) => {
            bot.answer_callback_query(q.id).text(notice).await?;
        }
        CallbackOutcome::Nothing => {
            bot.answer_callback_query(q.id).await?;
        }
    }

    Ok(())
}

/// Dispatch commands to appropriate handlers.
pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    state: Arc<BotState>,
) -> ResponseResult<()> {
    match cmd {
        Command::Start => handle_start(bot, msg, state).await,
        Command::Help => handle_help(bot, msg).await,
        Command::Topics => handle_topics(bot, msg, state).await,
        Command::Progress => handle_progress(bot, msg, state).await,
        Command::Install => handle_install(bot, msg, state).await,
        Command::Ask => handle_ask(bot, msg, state).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mentor_core::BotConfig;
    use tempfile::tempdir;

    fn state(dir: &std::path::Path) -> BotState {
        BotState::new(dir, BotConfig::default())
    }

    #[tokio::test]
    async fn topic_callback_renders_page_and_saves_progress() {
        let dir = tempdir().unwrap();
        let state = state(dir.path());
        let user = UserId(42);

        let outcome = apply_callback(
            &state,
            user,
            None,
            CallbackAction::Topic(Topic::Basics),
        )
        .await;

        match outcome {
            CallbackOutcome::Edit { text, keyboard } => {
                assert!(text.contains("Python Basics"));
                assert!(keyboard.is_some());
            }
            _ => panic!("expected an edit"),
        }
        let stored = state.get_progress(user).unwrap().unwrap();
        assert_eq!((stored.topic, stored.page), (Topic::Basics, 0));
    }

    #[tokio::test]
    async fn out_of_range_page_callback_is_a_notice() {
        let dir = tempdir().unwrap();
        let state = state(dir.path());
        let user = UserId(42);

        let count = state.catalog().page_count(Topic::Basics).unwrap();
        let outcome = apply_callback(
            &state,
            user,
            None,
            CallbackAction::Page(Topic::Basics, count),
        )
        .await;

        assert!(matches!(outcome, CallbackOutcome::Notice(_)));
        assert!(state.get_progress(user).unwrap().is_none());
    }

    #[tokio::test]
    async fn code_callback_does_not_touch_progress() {
        let dir = tempdir().unwrap();
        let state = state(dir.path());
        let user = UserId(7);

        let outcome =
            apply_callback(&state, user, None, CallbackAction::Code(Topic::Basics, 0)).await;
        assert!(matches!(outcome, CallbackOutcome::Edit { .. }));
        assert!(state.get_progress(user).unwrap().is_none());
    }

    #[tokio::test]
    async fn code_callback_without_example_is_a_notice() {
        let dir = tempdir().unwrap();
        let state = state(dir.path());

        // Install pages are step lists without a code example.
        let outcome = apply_callback(
            &state,
            UserId(7),
            None,
            CallbackAction::Code(Topic::Install, 0),
        )
        .await;
        assert!(matches!(outcome, CallbackOutcome::Notice(_)));
    }

    #[tokio::test]
    async fn ask_callback_arms_the_question_flow() {
        let dir = tempdir().unwrap();
        let state = state(dir.path());
        let user = UserId(9);

        apply_callback(&state, user, None, CallbackAction::Ask).await;
        assert!(state.take_pending_question(user.as_i64()).await);
    }

    #[tokio::test]
    async fn noop_callback_does_nothing() {
        let dir = tempdir().unwrap();
        let state = state(dir.path());

        let outcome = apply_callback(&state, UserId(1), None, CallbackAction::Noop).await;
        assert!(matches!(outcome, CallbackOutcome::Nothing));
        assert!(state.get_progress(UserId(1)).unwrap().is_none());
    }
}
