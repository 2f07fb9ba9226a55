//! Mentor Bot binary.
//!
//! Start the bot with:
//! ```bash
//! TELEGRAM_BOT_TOKEN=xxx cargo run -p mentor-telegram
//! ```

use clap::Parser;
use mentor_core::config;
use mentor_telegram::MentorBot;
use tracing_subscriber::EnvFilter;

/// Mentor Bot - a Telegram tutor for learning Python
#[derive(Parser, Debug)]
#[command(name = "mentor-telegram")]
#[command(about = "Telegram bot serving Python lessons with per-user progress")]
struct Args {
    /// Verbose logging (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load environment variables from .env.local or .env if present
    let _ = dotenvy::from_filename(".env.local").or_else(|_| dotenvy::dotenv());

    // Initialize logging based on verbosity
    let filter = match args.verbose {
        0 => "mentor_telegram=info,teloxide=warn",
        1 => "mentor_telegram=debug,mentor_persistence=debug,teloxide=info",
        2 => "mentor_telegram=trace,mentor_persistence=trace,teloxide=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let state_dir = config::state_dir();

    let bot = MentorBot::new(&state_dir)?;

    match bot.get_me().await {
        Ok(username) => {
            tracing::info!(username = %username, "Bot initialized successfully");
            println!("\n🤖 Mentor Bot");
            println!("   Bot: @{}", username);
            println!("   State: {}", state_dir.display());
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to get bot info");
            return Err(e.into());
        }
    }

    println!("\n📱 Open Telegram and send /start to begin");
    println!("   Press Ctrl+C to stop\n");

    bot.start_polling().await?;

    Ok(())
}
