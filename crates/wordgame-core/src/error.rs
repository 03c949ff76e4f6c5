//! Parsing error types

use thiserror::Error;

/// Every way a shared result can be rejected. Each variant carries the
/// offending text so the rejection can be shown back to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParsingError {
    #[error("User input incorrectly formatted: {0}")]
    InvalidFormat(String),

    #[error("{}", describe_day(.day, .valid_days))]
    InvalidDay {
        day: String,
        valid_days: Option<(i64, i64)>,
    },

    #[error("Invalid score provided: {0}")]
    InvalidScore(String),

    #[error("Incorrect tile format: {0}")]
    InvalidTiles(String),
}

/// Error category, for callers that branch on the kind of rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParsingErrorKind {
    Format,
    Day,
    Score,
    Tiles,
}

impl ParsingError {
    pub fn format(input: impl Into<String>) -> Self {
        Self::InvalidFormat(input.into())
    }

    pub fn score(score: impl ToString) -> Self {
        Self::InvalidScore(score.to_string())
    }

    pub fn tiles(tiles: impl Into<String>) -> Self {
        Self::InvalidTiles(tiles.into())
    }

    /// Day that isn't a number at all.
    pub fn unreadable_day(day: impl Into<String>) -> Self {
        Self::InvalidDay {
            day: day.into(),
            valid_days: None,
        }
    }

    /// Day that parsed but isn't today's or yesterday's puzzle.
    pub fn day_out_of_window(day: i64, valid_days: (i64, i64)) -> Self {
        Self::InvalidDay {
            day: day.to_string(),
            valid_days: Some(valid_days),
        }
    }

    pub fn kind(&self) -> ParsingErrorKind {
        match self {
            ParsingError::InvalidFormat(_) => ParsingErrorKind::Format,
            ParsingError::InvalidDay { .. } => ParsingErrorKind::Day,
            ParsingError::InvalidScore(_) => ParsingErrorKind::Score,
            ParsingError::InvalidTiles(_) => ParsingErrorKind::Tiles,
        }
    }
}

fn describe_day(day: &str, valid_days: &Option<(i64, i64)>) -> String {
    match valid_days {
        Some(valid) => format!("Day - {day} - is not in valid puzzle days: {valid:?}"),
        None => format!("Invalid day provided: {day}"),
    }
}
