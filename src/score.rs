//! Persistent score ledger
//!
//! A single integer score, stored as `{"score": N}` in a JSON file. Reads
//! fall back to the starting score on any failure; writes are best-effort
//! and never roll back the in-memory value. Both happen synchronously on
//! the frame thread.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Score granted when no save file exists (or it cannot be read)
pub const STARTING_SCORE: i64 = 100;

/// Default save file path, relative to the working directory
pub const SCORE_FILE: &str = "score.json";

#[derive(Debug, Serialize, Deserialize)]
struct ScoreFile {
    score: i64,
}

/// The player's persistent score
#[derive(Debug)]
pub struct ScoreLedger {
    value: i64,
    path: PathBuf,
}

impl ScoreLedger {
    /// Load the saved score from `path`, defaulting to [`STARTING_SCORE`]
    /// if the file is missing or unreadable.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let value = Self::read_value(&path).unwrap_or_else(|e| {
            log::warn!("could not load score from {}: {e}, starting at {STARTING_SCORE}", path.display());
            STARTING_SCORE
        });
        Self { value, path }
    }

    fn read_value(path: &Path) -> Result<i64, Box<dyn std::error::Error>> {
        let text = fs::read_to_string(path)?;
        let file: ScoreFile = serde_json::from_str(&text)?;
        Ok(file.score)
    }

    /// Current in-memory score
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Apply a score delta and immediately persist. Returns the new value.
    pub fn change(&mut self, delta: i64) -> i64 {
        self.value += delta;
        self.save();
        self.value
    }

    /// Best-effort write of the current score. A failed write is logged and
    /// the in-memory value stands, so the displayed score can diverge from
    /// disk until the next successful save.
    pub fn save(&self) {
        let file = ScoreFile { score: self.value };
        let result = serde_json::to_string(&file)
            .map_err(std::io::Error::other)
            .and_then(|json| fs::write(&self.path, json));
        if let Err(e) = result {
            log::error!("could not save score to {}: {e}", self.path.display());
        }
    }
}
