//! Per-game rules. Every constant that differs between the three games lives
//! here so the parsing pipeline itself stays game-agnostic.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Single-letter game tag stored alongside every submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    #[serde(rename = "W")]
    Wordle,
    #[serde(rename = "Q")]
    Quordle,
    #[serde(rename = "O")]
    Octordle,
}

impl GameMode {
    pub const ALL: [GameMode; 3] = [GameMode::Wordle, GameMode::Quordle, GameMode::Octordle];

    pub fn code(self) -> &'static str {
        match self {
            GameMode::Wordle => "W",
            GameMode::Quordle => "Q",
            GameMode::Octordle => "O",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.code() == code)
    }

    pub fn rules(self) -> &'static GameRules {
        match self {
            GameMode::Wordle => &GameRules::WORDLE,
            GameMode::Quordle => &GameRules::QUORDLE,
            GameMode::Octordle => &GameRules::OCTORDLE,
        }
    }

    /// Guess which game a chat message is a result for, from its first line.
    pub fn detect(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.starts_with(GameRules::WORDLE.title) && text.contains("/6") {
            Some(GameMode::Wordle)
        } else if text.starts_with(GameRules::QUORDLE.title) {
            Some(GameMode::Quordle)
        } else if text.starts_with(GameRules::OCTORDLE.title) {
            Some(GameMode::Octordle)
        } else {
            None
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GameMode::Wordle => "Wordle",
            GameMode::Quordle => "Quordle",
            GameMode::Octordle => "Octordle",
        };
        f.write_str(name)
    }
}

/// Static description of one game's share format and scoring.
#[derive(Debug, PartialEq, Eq)]
pub struct GameRules {
    pub mode: GameMode,
    /// Literal the header starts with, up to the day number.
    pub title: &'static str,
    /// (year, month, day) of puzzle #0.
    pub epoch: (i32, u32, u32),
    pub word_count: usize,
    pub max_rows: usize,
    pub header_lines: usize,
    /// Raw guess count recorded for a word that was never solved.
    pub incorrect_score: u32,
    pub max_score: u32,
    /// Points added to the public score when every word is solved.
    pub solve_all_bonus: u32,
    /// Domain line some clients paste between header and grid.
    pub footer: Option<&'static str>,
    pub score_glyphs: &'static [(&'static str, u32)],
}

pub const FAILED_GLYPH: &str = "🟥";

const DIGITS: [(&str, u32); 9] = [
    ("1", 1),
    ("2", 2),
    ("3", 3),
    ("4", 4),
    ("5", 5),
    ("6", 6),
    ("7", 7),
    ("8", 8),
    ("9", 9),
];

impl GameRules {
    pub const WORDLE: GameRules = GameRules {
        mode: GameMode::Wordle,
        title: "Wordle ",
        epoch: (2021, 6, 19),
        word_count: 1,
        max_rows: 6,
        header_lines: 1,
        incorrect_score: 8,
        max_score: 10,
        solve_all_bonus: 0,
        footer: None,
        score_glyphs: &[
            ("1", 1),
            ("2", 2),
            ("3", 3),
            ("4", 4),
            ("5", 5),
            ("6", 6),
            ("X", 8),
        ],
    };

    pub const QUORDLE: GameRules = GameRules {
        mode: GameMode::Quordle,
        title: "Daily Quordle #",
        epoch: (2022, 1, 24),
        word_count: 4,
        max_rows: 9,
        header_lines: 3,
        incorrect_score: 12,
        max_score: 50,
        solve_all_bonus: 1,
        footer: Some("quordle.com"),
        score_glyphs: &[
            DIGITS[0],
            DIGITS[1],
            DIGITS[2],
            DIGITS[3],
            DIGITS[4],
            DIGITS[5],
            DIGITS[6],
            DIGITS[7],
            DIGITS[8],
            (FAILED_GLYPH, 12),
        ],
    };

    pub const OCTORDLE: GameRules = GameRules {
        mode: GameMode::Octordle,
        title: "Daily Octordle #",
        epoch: (2022, 1, 24),
        word_count: 8,
        max_rows: 13,
        header_lines: 5,
        incorrect_score: 15,
        max_score: 120,
        solve_all_bonus: 1,
        footer: Some("octordle.com"),
        score_glyphs: &[
            DIGITS[0],
            DIGITS[1],
            DIGITS[2],
            DIGITS[3],
            DIGITS[4],
            DIGITS[5],
            DIGITS[6],
            DIGITS[7],
            DIGITS[8],
            ("🔟", 10),
            ("🕚", 11),
            ("🕛", 12),
            ("🕐", 13),
            (FAILED_GLYPH, 15),
        ],
    };

    pub fn epoch_date(&self) -> NaiveDate {
        let (year, month, day) = self.epoch;
        NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
    }

    /// Puzzle numbers accepted on `today`: today's and yesterday's.
    pub fn valid_days(&self, today: NaiveDate) -> (i64, i64) {
        let todays_puzzle = (today - self.epoch_date()).num_days();
        (todays_puzzle, todays_puzzle - 1)
    }

    /// Word grids in a multi-word share are printed two abreast.
    pub fn pair_count(&self) -> usize {
        self.word_count.div_ceil(2)
    }

    /// Inclusive bounds on the number of lines a submission may have once
    /// the footer is gone.
    pub fn line_window(&self) -> (usize, usize) {
        if self.word_count == 1 {
            return (self.header_lines + 1, self.header_lines + self.max_rows);
        }
        let pairs = self.pair_count();
        let separators = pairs - 1;
        (
            self.header_lines + separators + pairs,
            self.header_lines + separators + pairs * self.max_rows,
        )
    }

    pub fn token_value(&self, glyph: &str) -> Option<u32> {
        self.score_glyphs
            .iter()
            .find(|(candidate, _)| *candidate == glyph)
            .map(|(_, value)| *value)
    }

    /// Glyphs, in declaration order, for building header patterns.
    pub fn glyphs(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.score_glyphs.iter().map(|(glyph, _)| *glyph)
    }
}
