//! Persistence boundary.

use std::collections::HashMap;

use wordgame_core::GameMode;

use crate::error::BotError;
use crate::submission::Submission;

pub trait SubmissionStore {
    /// Record a submission. A second submission for the same user, game and
    /// day is a [`BotError::Duplicate`].
    fn insert(&mut self, submission: &Submission) -> Result<(), BotError>;
}

/// Map-backed store for the intake harness and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: HashMap<(u64, GameMode, i64), Submission>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, user_id: u64, mode: GameMode, day: i64) -> Option<&Submission> {
        self.rows.get(&(user_id, mode, day))
    }

    /// Summed score per user for one game, best first.
    pub fn totals(&self, mode: GameMode) -> Vec<(u64, u32)> {
        let mut totals: HashMap<u64, u32> = HashMap::new();
        for row in self.rows.values().filter(|row| row.mode == mode) {
            *totals.entry(row.user_id).or_default() += row.score;
        }
        let mut totals: Vec<(u64, u32)> = totals.into_iter().collect();
        totals.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        totals
    }
}

impl SubmissionStore for MemoryStore {
    fn insert(&mut self, submission: &Submission) -> Result<(), BotError> {
        let key = submission.key();
        if self.rows.contains_key(&key) {
            return Err(BotError::Duplicate {
                user_id: submission.user_id,
                mode: submission.mode,
                day: submission.day,
            });
        }
        self.rows.insert(key, submission.clone());
        Ok(())
    }
}
