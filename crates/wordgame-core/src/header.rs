//! Header parsing: puzzle day and declared per-word scores.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::Serialize;

use crate::clock::Clock;
use crate::error::ParsingError;
use crate::game::GameRules;

/// Emoji presentation selector and combining keycap that chat clients attach
/// to digits ("5️⃣" is '5' + U+FE0F + U+20E3).
const DECORATIONS: [char; 2] = ['\u{fe0f}', '\u{20e3}'];

/// What a submission's header declares. Only built by
/// [`GuessInfoFormat::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuessInfo {
    /// Sanitised header text.
    header: String,
    day: i64,
    /// Guess count per word, in grid order; unsolved words hold the game's
    /// incorrect sentinel.
    scores: Vec<u32>,
    #[serde(skip)]
    rules: &'static GameRules,
}

impl GuessInfo {
    pub(crate) fn new(
        header: String,
        day: i64,
        scores: Vec<u32>,
        rules: &'static GameRules,
    ) -> Self {
        Self {
            header,
            day,
            scores,
            rules,
        }
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn day(&self) -> i64 {
        self.day
    }

    pub fn scores(&self) -> &[u32] {
        &self.scores
    }

    pub fn rules(&self) -> &'static GameRules {
        self.rules
    }

    pub fn all_solved(&self) -> bool {
        self.scores
            .iter()
            .all(|&score| score != self.rules.incorrect_score)
    }

    /// Extra point for a multi-word run with nothing failed.
    pub fn bonus_points(&self) -> u32 {
        if self.all_solved() {
            self.rules.solve_all_bonus
        } else {
            0
        }
    }

    pub fn guess_total(&self) -> u32 {
        self.scores.iter().sum()
    }

    /// Guess total with the bonus taken off: lower is better.
    pub fn raw_score(&self) -> i64 {
        i64::from(self.guess_total()) - i64::from(self.bonus_points())
    }
}

/// Trim and drop the decorations chat clients add to emoji digits.
pub fn sanitize(header: &str) -> String {
    header
        .trim()
        .chars()
        .filter(|c| !DECORATIONS.contains(c))
        .collect()
}

/// Per-game header format. The provided [`GuessInfoFormat::parse`] runs the
/// shared pipeline; games supply the pattern and how to slice it.
pub trait GuessInfoFormat {
    fn rules(&self) -> &'static GameRules;

    /// Reject anything that doesn't look like this game's header.
    fn validate_format(&self, header: &str) -> Result<(), ParsingError>;

    /// Split an already-validated header into the day token and the raw
    /// score tokens, in word order.
    fn extract_day_and_score<'a>(
        &self,
        header: &'a str,
    ) -> Result<(&'a str, Vec<&'a str>), ParsingError>;

    fn parse_day(&self, day: &str, today: NaiveDate) -> Result<i64, ParsingError> {
        parse_day(self.rules(), day, today)
    }

    fn parse_score(&self, tokens: &[&str]) -> Result<Vec<u32>, ParsingError> {
        parse_tokens(self.rules(), tokens)
    }

    fn parse(&self, header: &str, clock: &dyn Clock) -> Result<GuessInfo, ParsingError> {
        let header = sanitize(header);
        self.validate_format(&header)?;
        let (day, tokens) = self.extract_day_and_score(&header)?;
        let day = self.parse_day(day, clock.today())?;
        let scores = self.parse_score(&tokens)?;
        Ok(GuessInfo::new(header, day, scores, self.rules()))
    }
}

/// Accept only today's or yesterday's puzzle.
pub fn parse_day(rules: &GameRules, day: &str, today: NaiveDate) -> Result<i64, ParsingError> {
    let day: i64 = day
        .trim()
        .parse()
        .map_err(|_| ParsingError::unreadable_day(day))?;
    let valid_days = rules.valid_days(today);
    if day != valid_days.0 && day != valid_days.1 {
        return Err(ParsingError::day_out_of_window(day, valid_days));
    }
    Ok(day)
}

/// Map score glyphs to guess counts. Exactly one token per word; no two
/// solved words may claim the same round.
pub fn parse_tokens(rules: &GameRules, tokens: &[&str]) -> Result<Vec<u32>, ParsingError> {
    if tokens.len() != rules.word_count {
        return Err(ParsingError::score(format!(
            "expected {} scores, got {}",
            rules.word_count,
            tokens.len()
        )));
    }

    let mut claimed = HashSet::new();
    tokens
        .iter()
        .map(|&token| {
            let value = rules
                .token_value(token)
                .ok_or_else(|| ParsingError::score(token))?;
            if value != rules.incorrect_score && !claimed.insert(value) {
                return Err(ParsingError::score(token));
            }
            Ok(value)
        })
        .collect()
}
