//! Quordle: four words, scores printed two per line under the title.

use std::sync::LazyLock;

use regex::Regex;

use crate::attempt::AttemptFormat;
use crate::error::ParsingError;
use crate::game::GameRules;
use crate::header::GuessInfoFormat;
use crate::paired;
use crate::tiles::TileGrid;

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    paired::header_pattern(&GameRules::QUORDLE).expect("valid Quordle header pattern")
});

#[derive(Debug, Clone, Copy, Default)]
pub struct Quordle;

impl GuessInfoFormat for Quordle {
    fn rules(&self) -> &'static GameRules {
        &GameRules::QUORDLE
    }

    fn validate_format(&self, header: &str) -> Result<(), ParsingError> {
        if !HEADER_RE.is_match(header) {
            return Err(ParsingError::format(header));
        }
        Ok(())
    }

    fn extract_day_and_score<'a>(
        &self,
        header: &'a str,
    ) -> Result<(&'a str, Vec<&'a str>), ParsingError> {
        paired::split_day_and_scores(header)
    }
}

impl AttemptFormat for Quordle {
    fn extract_lines<'a>(&self, text: &'a str) -> Result<Vec<&'a str>, ParsingError> {
        paired::extract_lines(self.rules(), text)
    }

    fn decode_words(&self, body: &[&str]) -> Result<Vec<TileGrid>, ParsingError> {
        paired::decode_pairs(self.rules(), body)
    }
}
