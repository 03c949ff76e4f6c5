//! Wordle: `Wordle <day> <score>/6` followed by up to six tile rows.

use std::sync::LazyLock;

use regex::Regex;

use crate::attempt::AttemptFormat;
use crate::error::ParsingError;
use crate::game::GameRules;
use crate::header::GuessInfoFormat;
use crate::tiles::TileGrid;

/// One score character before `/6`; out-of-range digits get past here and
/// are rejected by score parsing.
static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Wordle ([0-9]+) ([0-9X])/6$").expect("valid Wordle header pattern"));

#[derive(Debug, Clone, Copy, Default)]
pub struct Wordle;

impl GuessInfoFormat for Wordle {
    fn rules(&self) -> &'static GameRules {
        &GameRules::WORDLE
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
        let mut parts = header.split(' ').skip(1);
        let day = parts.next().ok_or_else(|| ParsingError::format(header))?;
        let score = parts
            .next()
            .and_then(|part| part.split('/').next())
            .ok_or_else(|| ParsingError::format(header))?;
        Ok((day, vec![score]))
    }
}

impl AttemptFormat for Wordle {
    /// Non-blank lines: the header plus one to six rows.
    fn extract_lines<'a>(&self, text: &'a str) -> Result<Vec<&'a str>, ParsingError> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let (min, max) = self.rules().line_window();
        if lines.len() < min || lines.len() > max {
            return Err(ParsingError::format(text));
        }
        Ok(lines)
    }

    fn decode_words(&self, body: &[&str]) -> Result<Vec<TileGrid>, ParsingError> {
        let grid = TileGrid::new(body, self.rules().incorrect_score)?;
        Ok(vec![grid])
    }
}
