pub mod config;
pub mod error;
pub mod intake;
pub mod store;
pub mod submission;

pub use config::BotConfig;
pub use error::BotError;
pub use intake::{game_from_code, Intake};
pub use store::{MemoryStore, SubmissionStore};
pub use submission::{ResultCard, Submission};
