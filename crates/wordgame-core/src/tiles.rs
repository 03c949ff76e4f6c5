//! Tile rows: the coloured squares a share shows for each guess of a word.

use serde::Serialize;

use crate::error::ParsingError;

pub const TILES_PER_GUESS: usize = 5;

/// The row a word shows once it has been guessed.
pub const SOLVED_ROW: &str = "🟩🟩🟩🟩🟩";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    /// 🟩 right letter, right place
    Correct,
    /// 🟨 right letter, wrong place
    Present,
    /// ⬜ letter not in the word
    Absent,
    /// ⬛ absent in dark mode; a row that was never played in multi-word games
    Dark,
}

impl Tile {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '🟩' => Some(Tile::Correct),
            '🟨' => Some(Tile::Present),
            '⬜' => Some(Tile::Absent),
            '⬛' => Some(Tile::Dark),
            _ => None,
        }
    }
}

/// Check one row: exactly five recognised tiles.
pub fn validate_row(row: &str) -> Result<(), ParsingError> {
    let mut count = 0;
    for c in row.chars() {
        if Tile::from_char(c).is_none() {
            return Err(ParsingError::tiles(row));
        }
        count += 1;
    }
    if count != TILES_PER_GUESS {
        return Err(ParsingError::tiles(row));
    }
    Ok(())
}

/// Every row played for one word, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileGrid {
    rows: Vec<String>,
    incorrect_score: u32,
}

impl TileGrid {
    /// Validate `rows` and build the grid. `incorrect_score` is what
    /// [`TileGrid::correct_guess`] reports when no row is solved.
    pub fn new<I, S>(rows: I, incorrect_score: u32) -> Result<Self, ParsingError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows = rows
            .into_iter()
            .map(|row| {
                let row = row.as_ref().trim();
                validate_row(row).map(|()| row.to_string())
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            rows,
            incorrect_score,
        })
    }

    /// 1-based row at which the word was solved.
    pub fn correct_guess(&self) -> u32 {
        self.rows
            .iter()
            .position(|row| row == SOLVED_ROW)
            .map(|index| index as u32 + 1)
            .unwrap_or(self.incorrect_score)
    }

    pub fn is_solved(&self) -> bool {
        self.rows.iter().any(|row| row == SOLVED_ROW)
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
