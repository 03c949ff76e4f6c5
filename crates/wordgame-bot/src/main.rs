//! Reads one game result from stdin and prints the storage row it produces.
//!
//! Usage: `wordgame-intake [USER_ID] [W|Q|O]`. Without a game code the game
//! is detected from the text.

use std::io::Read;

use chrono::Utc;
use tracing::info;
use wordgame_bot::{game_from_code, BotConfig, Submission};
use wordgame_core::{parse_any, parse_as};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = BotConfig::from_env()?;
    let clock = config.clock()?;

    let mut content = String::new();
    std::io::stdin().read_to_string(&mut content)?;

    let mut args = std::env::args().skip(1);
    let user_id = args
        .next()
        .map(|id| id.parse::<u64>())
        .transpose()?
        .unwrap_or_default();
    let game = args.next().map(|code| game_from_code(&code)).transpose()?;

    let attempt = match game {
        Some(mode) => parse_as(mode, &content, clock)?,
        None => parse_any(&content, clock)?,
    };
    info!(mode = attempt.mode().code(), day = attempt.day(), "Parsed submission");

    let submission = Submission::new(&attempt, user_id, Utc::now());
    println!("{}", serde_json::to_string_pretty(&submission)?);
    Ok(())
}
