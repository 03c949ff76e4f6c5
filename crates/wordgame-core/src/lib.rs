//! Parsing of shared results from Wordle, Quordle and Octordle into scored
//! attempts.

pub mod attempt;
pub mod clock;
pub mod error;
pub mod game;
pub mod header;
pub mod octordle;
pub mod paired;
pub mod quordle;
pub mod tiles;
pub mod wordle;

pub use attempt::{parse_any, parse_as, Attempt, AttemptFormat, AttemptParser};
pub use clock::{Clock, FixedClock, OffsetClock, SystemClock};
pub use error::{ParsingError, ParsingErrorKind};
pub use game::{GameMode, GameRules};
pub use header::{GuessInfo, GuessInfoFormat};
pub use octordle::Octordle;
pub use quordle::Quordle;
pub use tiles::{Tile, TileGrid};
pub use wordle::Wordle;
