//! Routes an incoming chat message through parsing and storage.

use chrono::{DateTime, Utc};
use tracing::{debug, info};
use wordgame_core::{parse_any, Clock, GameMode, OffsetClock};

use crate::config::BotConfig;
use crate::error::BotError;
use crate::store::SubmissionStore;
use crate::submission::{ResultCard, Submission};

/// Game named by its stored single-letter tag.
pub fn game_from_code(code: &str) -> Result<GameMode, BotError> {
    let code = code.trim().to_ascii_uppercase();
    GameMode::from_code(&code).ok_or(BotError::UnknownGame(code))
}

pub struct Intake<S, C = OffsetClock> {
    config: BotConfig,
    clock: C,
    store: S,
}

impl<S: SubmissionStore> Intake<S> {
    /// Intake whose "today" follows the configured UTC offset.
    pub fn new(config: BotConfig, store: S) -> Result<Self, BotError> {
        let clock = config.clock()?;
        Ok(Self::with_clock(config, store, clock))
    }
}

impl<S: SubmissionStore, C: Clock> Intake<S, C> {
    pub fn with_clock(config: BotConfig, store: S, clock: C) -> Self {
        Self {
            config,
            clock,
            store,
        }
    }

    /// `Ok(None)` when the message is not for us: wrong channel or not a
    /// game result at all. Anything that looks like a result but fails to
    /// parse or is already stored is an error.
    pub fn handle(
        &mut self,
        channel_id: u64,
        user_id: u64,
        username: &str,
        content: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<ResultCard>, BotError> {
        if !self.config.accepts_channel(channel_id) {
            debug!(channel_id, "Ignoring message from unwatched channel");
            return Ok(None);
        }
        if GameMode::detect(content).is_none() {
            return Ok(None);
        }

        let attempt = parse_any(content, &self.clock)?;
        let submission = Submission::new(&attempt, user_id, now);
        self.store.insert(&submission)?;
        info!(
            user_id,
            mode = submission.mode.code(),
            day = submission.day,
            score = submission.score,
            "Recorded submission"
        );
        Ok(Some(ResultCard::new(&attempt, username)))
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
