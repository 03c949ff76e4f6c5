//! Shared handling for the multi-word games, whose shares print two word
//! grids side by side:
//!
//! ```text
//! Daily Quordle #17
//! 5️⃣6️⃣
//! 8️⃣7️⃣
//! quordle.com
//! 🟩🟨⬜⬜🟨 ⬜⬜🟨⬜🟨
//! ...
//!
//! ⬜⬜⬜⬜🟨 ⬜⬜⬜⬜⬜
//! ...
//! ```

use regex::Regex;

use crate::error::ParsingError;
use crate::game::GameRules;
use crate::tiles::TileGrid;

/// Anchored header pattern: title and day, then one line of two score
/// glyphs per word pair.
pub fn header_pattern(rules: &GameRules) -> Result<Regex, regex::Error> {
    let glyphs = rules
        .glyphs()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|");
    let token = format!("(?:{glyphs})");
    let score_line = format!(r"\n{token}{token}");
    let pattern = format!(
        "^{}[0-9]+{}$",
        regex::escape(rules.title),
        score_line.repeat(rules.pair_count())
    );
    Regex::new(&pattern)
}

/// Day digits after `#`, then each score glyph in reading order.
pub fn split_day_and_scores(header: &str) -> Result<(&str, Vec<&str>), ParsingError> {
    let mut lines = header.lines();
    let day = lines
        .next()
        .and_then(|title| title.split_once('#'))
        .map(|(_, day)| day)
        .ok_or_else(|| ParsingError::format(header))?;
    let tokens = lines.flat_map(glyphs).collect();
    Ok((day, tokens))
}

/// Each char of `line` as its own slice.
fn glyphs(line: &str) -> impl Iterator<Item = &str> {
    line.char_indices()
        .map(move |(start, c)| &line[start..start + c.len_utf8()])
}

/// Trimmed lines with the footer dropped and the count checked. Blank lines
/// are kept; they separate word pairs.
pub fn extract_lines<'a>(rules: &GameRules, text: &'a str) -> Result<Vec<&'a str>, ParsingError> {
    let mut lines: Vec<&str> = text.trim().lines().map(str::trim).collect();
    if let Some(footer) = rules.footer {
        if let Some(index) = lines.iter().position(|line| *line == footer) {
            lines.remove(index);
        }
    }
    let (min, max) = rules.line_window();
    if lines.len() < min || lines.len() > max {
        return Err(ParsingError::format(text));
    }
    Ok(lines)
}

/// Split the body into blank-separated pair blocks and each block into a
/// left and a right grid.
pub fn decode_pairs(rules: &GameRules, body: &[&str]) -> Result<Vec<TileGrid>, ParsingError> {
    let blocks: Vec<&[&str]> = body
        .split(|line| line.is_empty())
        .filter(|block| !block.is_empty())
        .collect();
    if blocks.len() != rules.pair_count() {
        return Err(ParsingError::format(body.join("\n")));
    }

    let mut words = Vec::with_capacity(rules.word_count);
    for block in blocks {
        if block.len() > rules.max_rows {
            return Err(ParsingError::format(block.join("\n")));
        }
        let mut left = Vec::with_capacity(block.len());
        let mut right = Vec::with_capacity(block.len());
        for line in block {
            let (l, r) = line
                .split_once(' ')
                .ok_or_else(|| ParsingError::format(*line))?;
            left.push(l);
            right.push(r);
        }
        words.push(TileGrid::new(left, rules.incorrect_score)?);
        words.push(TileGrid::new(right, rules.incorrect_score)?);
    }
    Ok(words)
}
