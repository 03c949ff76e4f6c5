//! Bot configuration from environment variables

use std::env;

use wordgame_core::OffsetClock;

use crate::error::BotError;

#[derive(Clone, Debug, Default)]
pub struct BotConfig {
    /// Channels submissions are accepted from; empty accepts every channel.
    pub channels: Vec<u64>,

    /// Offset from UTC of the midnight that starts a new puzzle day.
    pub utc_offset_minutes: i32,
}

impl BotConfig {
    /// Load from `WORDGAME_CHANNELS` and `WORDGAME_UTC_OFFSET_MINUTES`.
    pub fn from_env() -> Result<Self, BotError> {
        let channels = env::var("WORDGAME_CHANNELS").unwrap_or_default();
        let offset = env::var("WORDGAME_UTC_OFFSET_MINUTES").ok();
        Self::from_values(&channels, offset.as_deref())
    }

    pub fn from_values(channels: &str, utc_offset_minutes: Option<&str>) -> Result<Self, BotError> {
        let channels = channels
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(|id| {
                id.parse()
                    .map_err(|_| BotError::Config(format!("invalid channel id: {id}")))
            })
            .collect::<Result<Vec<u64>, _>>()?;

        let utc_offset_minutes = match utc_offset_minutes.map(str::trim) {
            None | Some("") => 0,
            Some(value) => value
                .parse()
                .map_err(|_| BotError::Config(format!("invalid UTC offset: {value}")))?,
        };

        let config = Self {
            channels,
            utc_offset_minutes,
        };
        config.clock()?;
        Ok(config)
    }

    pub fn accepts_channel(&self, channel_id: u64) -> bool {
        self.channels.is_empty() || self.channels.contains(&channel_id)
    }

    pub fn clock(&self) -> Result<OffsetClock, BotError> {
        OffsetClock::from_minutes(self.utc_offset_minutes).ok_or_else(|| {
            BotError::Config(format!(
                "UTC offset out of range: {} minutes",
                self.utc_offset_minutes
            ))
        })
    }
}
