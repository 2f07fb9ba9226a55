//! Main Telegram bot implementation.

use std::sync::Arc;

use teloxide::dispatching::UpdateFilterExt;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::{debug, info, warn};

use crate::error::{BotError, Result};
use crate::handlers::{handle_callback, handle_command, handle_message, Command};
use crate::state::{create_shared_state, BotState};

/// The Mentor Telegram bot.
pub struct MentorBot {
    /// The teloxide bot instance.
    bot: Bot,
    /// Shared state across handlers.
    state: Arc<BotState>,
}

impl MentorBot {
    /// Create a new bot instance.
    ///
    /// Requires `TELEGRAM_BOT_TOKEN` environment variable to be set.
    pub fn new(state_dir: &std::path::Path) -> Result<Self> {
        let token = std::env::var("TELEGRAM_BOT_TOKEN").map_err(|_| BotError::NoToken)?;

        let config = mentor_core::BotConfig::from_env();
        let bot = Bot::new(token);
        let state = create_shared_state(state_dir, config);

        Ok(Self { bot, state })
    }

    /// Create a bot with custom state (for testing).
    pub fn with_state(state: Arc<BotState>) -> Result<Self> {
        let token = std::env::var("TELEGRAM_BOT_TOKEN").map_err(|_| BotError::NoToken)?;
        Ok(Self {
            bot: Bot::new(token),
            state,
        })
    }

    /// Get the bot's username.
    pub async fn get_me(&self) -> Result<String> {
        let me = self
            .bot
            .get_me()
            .await
            .map_err(|e| BotError::BotStartFailed(e.to_string()))?;
        Ok(me.username().to_string())
    }

    /// Register the command list with Telegram so clients show the / menu.
    pub async fn set_commands(&self) -> Result<()> {
        self.bot
            .set_my_commands(Command::bot_commands())
            .await
            .map_err(|e| BotError::BotStartFailed(e.to_string()))?;
        Ok(())
    }

    /// Start the bot in long-polling mode.
    pub async fn start_polling(&self) -> Result<()> {
        info!("Starting Mentor Bot in polling mode...");

        if let Err(e) = self.set_commands().await {
            warn!(error = %e, "Could not register command menu");
        }

        let bot = self.bot.clone();

        let state_for_commands = Arc::clone(&self.state);
        let state_for_messages = Arc::clone(&self.state);
        let state_for_callbacks = Arc::clone(&self.state);

        let handler = dptree::entry()
            .branch(Update::filter_callback_query().endpoint(
                move |bot: Bot, q: teloxide::types::CallbackQuery| {
                    let state = Arc::clone(&state_for_callbacks);
                    async move { handle_callback(bot, q, state).await }
                },
            ))
            .branch(
                Update::filter_message()
                    .filter_command::<Command>()
                    .endpoint(move |bot: Bot, msg: Message, cmd: Command| {
                        let state = Arc::clone(&state_for_commands);
                        debug!(chat_id = %msg.chat.id, "Command matched: {:?}", cmd);
                        async move { handle_command(bot, msg, cmd, state).await }
                    }),
            )
            .branch(
                Update::filter_message()
                    .filter(|msg: Message| {
                        // Commands that start with / but did not parse.
                        msg.text().map(|t| t.starts_with('/')).unwrap_or(false)
                    })
                    .endpoint(move |bot: Bot, msg: Message| async move {
                        if let Some(text) = msg.text() {
                            info!(cmd = %text, "Unrecognized command");
                            bot.send_message(
                                msg.chat.id,
                                format!(
                                    "Unknown command: {}\n\nUse /help to see available commands.",
                                    text.split_whitespace().next().unwrap_or(text)
                                ),
                            )
                            .await?;
                        }
                        Ok(())
                    }),
            )
            .branch(
                Update::filter_message()
                    .filter(|msg: Message| {
                        msg.text().map(|t| !t.starts_with('/')).unwrap_or(false)
                    })
                    .endpoint(move |bot: Bot, msg: Message| {
                        let state = Arc::clone(&state_for_messages);
                        async move { handle_message(bot, msg, state).await }
                    }),
            );

        info!("Bot is running! Send /start to begin.");

        Dispatcher::builder(bot, handler)
            .default_handler(|upd| async move {
                warn!("Unhandled update: {:?}", upd);
            })
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;

        Ok(())
    }
}
