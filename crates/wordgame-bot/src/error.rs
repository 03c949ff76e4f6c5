//! Bot error types

use thiserror::Error;
use wordgame_core::{GameMode, ParsingError};

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown game code: {0}")]
    UnknownGame(String),

    #[error(transparent)]
    Parsing(#[from] ParsingError),

    #[error("User {user_id} already submitted {mode} day {day}")]
    Duplicate {
        user_id: u64,
        mode: GameMode,
        day: i64,
    },
}
