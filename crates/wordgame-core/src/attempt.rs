//! Attempt assembly: header + grids, cross-checked, into a scored result.

use serde::Serialize;
use tracing::{debug, warn};

use crate::clock::{Clock, SystemClock};
use crate::error::ParsingError;
use crate::game::{GameMode, GameRules};
use crate::header::{GuessInfo, GuessInfoFormat};
use crate::octordle::Octordle;
use crate::quordle::Quordle;
use crate::tiles::TileGrid;
use crate::wordle::Wordle;

/// A validated submission. Only [`AttemptFormat::assemble`] builds one, so
/// the header always agrees with the grids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attempt {
    info: GuessInfo,
    /// One grid per word, in the order the header lists their scores.
    guesses: Vec<TileGrid>,
}

impl Attempt {
    pub fn info(&self) -> &GuessInfo {
        &self.info
    }

    pub fn rules(&self) -> &'static GameRules {
        self.info.rules()
    }

    pub fn mode(&self) -> GameMode {
        self.rules().mode
    }

    pub fn day(&self) -> i64 {
        self.info.day()
    }

    pub fn max_score(&self) -> u32 {
        self.rules().max_score
    }

    /// Guess total less the bonus; lower is better.
    pub fn raw_score(&self) -> i64 {
        self.info.raw_score()
    }

    /// Public score: fewer guesses is better, plus the solve-all bonus.
    pub fn score(&self) -> u32 {
        (self.max_score() + self.info.bonus_points()).saturating_sub(self.info.guess_total())
    }

    pub fn words(&self) -> &[TileGrid] {
        &self.guesses
    }
}

/// Per-game body handling on top of the header format.
pub trait AttemptFormat: GuessInfoFormat {
    /// Clean lines of the submission, with the line count checked.
    fn extract_lines<'a>(&self, text: &'a str) -> Result<Vec<&'a str>, ParsingError>;

    /// One grid per word from the lines after the header.
    fn decode_words(&self, body: &[&str]) -> Result<Vec<TileGrid>, ParsingError>;

    fn split_header<'a, 'b>(&self, lines: &'b [&'a str]) -> (String, &'b [&'a str]) {
        let split = self.rules().header_lines.min(lines.len());
        let (header, body) = lines.split_at(split);
        (header.join("\n"), body)
    }

    fn assemble(&self, text: &str, clock: &dyn Clock) -> Result<Attempt, ParsingError> {
        let lines = self.extract_lines(text)?;
        let (header, body) = self.split_header(&lines);
        let info = self.parse(&header, clock)?;
        let guesses = self.decode_words(body)?;
        if guesses.len() != info.scores().len() {
            return Err(ParsingError::format(text));
        }
        for (declared, grid) in info.scores().iter().zip(&guesses) {
            if *declared != grid.correct_guess() {
                return Err(ParsingError::score(declared));
            }
        }
        Ok(Attempt { info, guesses })
    }
}

/// Single-shot parse of one submission. Failures are logged and kept on
/// the parser before being handed back.
pub struct AttemptParser<F, C = SystemClock> {
    format: F,
    clock: C,
    errors: Vec<String>,
}

impl<F: AttemptFormat> AttemptParser<F> {
    pub fn new(format: F) -> Self {
        Self::with_clock(format, SystemClock)
    }
}

impl<F: AttemptFormat, C: Clock> AttemptParser<F, C> {
    pub fn with_clock(format: F, clock: C) -> Self {
        Self {
            format,
            clock,
            errors: Vec::new(),
        }
    }

    pub fn parse(&mut self, text: &str) -> Result<Attempt, ParsingError> {
        match self.format.assemble(text, &self.clock) {
            Ok(attempt) => {
                debug!(
                    mode = attempt.mode().code(),
                    day = attempt.day(),
                    score = attempt.score(),
                    "Parsed attempt"
                );
                Ok(attempt)
            }
            Err(e) => Err(self.handle_error(e)),
        }
    }

    fn handle_error(&mut self, error: ParsingError) -> ParsingError {
        warn!(
            mode = self.format.rules().mode.code(),
            kind = ?error.kind(),
            "{error:?}"
        );
        self.errors.push(error.to_string());
        error
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn error_message(&self) -> String {
        format!("Invalid Attempt: {:?}", self.errors)
    }
}

/// Work out which game `text` is from and parse it.
pub fn parse_any<C: Clock>(text: &str, clock: C) -> Result<Attempt, ParsingError> {
    let Some(mode) = GameMode::detect(text) else {
        warn!("Unrecognised submission");
        return Err(ParsingError::format(text));
    };
    parse_as(mode, text, clock)
}

/// Parse `text` as a result for `mode`, skipping detection.
pub fn parse_as<C: Clock>(
    mode: GameMode,
    text: &str,
    clock: C,
) -> Result<Attempt, ParsingError> {
    match mode {
        GameMode::Wordle => AttemptParser::with_clock(Wordle, clock).parse(text),
        GameMode::Quordle => AttemptParser::with_clock(Quordle, clock).parse(text),
        GameMode::Octordle => AttemptParser::with_clock(Octordle, clock).parse(text),
    }
}
