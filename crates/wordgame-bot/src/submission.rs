//! Shapes handed to the storage and display collaborators.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use wordgame_core::{Attempt, GameMode};

/// One row in the attempts table, keyed by (user_id, mode, day).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub user_id: u64,
    pub mode: GameMode,
    pub day: i64,
    /// Guess total less the bonus, as the header declared it.
    pub raw_score: i64,
    pub score: u32,
    pub submitted_at: DateTime<Utc>,
}

impl Submission {
    pub fn new(attempt: &Attempt, user_id: u64, submitted_at: DateTime<Utc>) -> Self {
        Self {
            user_id,
            mode: attempt.mode(),
            day: attempt.day(),
            raw_score: attempt.raw_score(),
            score: attempt.score(),
            submitted_at,
        }
    }

    pub fn key(&self) -> (u64, GameMode, i64) {
        (self.user_id, self.mode, self.day)
    }
}

/// What the chat reply shows for an accepted attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultCard {
    pub username: String,
    pub mode: GameMode,
    pub day: i64,
    pub score: u32,
    pub max_score: u32,
}

impl ResultCard {
    pub fn new(attempt: &Attempt, username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            mode: attempt.mode(),
            day: attempt.day(),
            score: attempt.score(),
            max_score: attempt.max_score(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            GameMode::Wordle => "🤠 Wordle Submission 🤠",
            GameMode::Quordle => "🧠 Quordle Submission 🧠",
            GameMode::Octordle => "🤓 Octordle Submission 🤓",
        }
    }

    /// Scores above this get the congratulatory card.
    pub fn threshold(&self) -> u32 {
        match self.mode {
            GameMode::Wordle => 6,
            GameMode::Quordle => 25,
            GameMode::Octordle => 51,
        }
    }

    pub fn is_success(&self) -> bool {
        self.score > self.threshold()
    }
}

impl std::fmt::Display for ResultCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "User: {}\nDay: {}\nScore: {}/{}\n",
            self.username, self.day, self.score, self.max_score
        )
    }
}
