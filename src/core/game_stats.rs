use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::{MAX_SCORE, RECENT_SCORES_LIMIT};
use crate::error::AppError;

/// Aggregate statistics for the clicker game
///
/// Lives for the whole process and is never persisted; a restart starts from zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStats {
    /// Sum of every accepted score
    pub total_clicks: u64,
    /// Highest score ever accepted
    pub high_score: u32,
    /// Number of accepted submissions
    pub player_count: u64,
    /// Most recent scores, oldest first, at most `RECENT_SCORES_LIMIT` entries
    pub recent_scores: VecDeque<u32>,
}

/// Result of an accepted score submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreSubmission {
    pub score: u32,
    /// True when the score now equals the high score (ties included)
    pub is_new_high_score: bool,
}

/// Read-only copy of the leaderboard counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leaderboard {
    pub high_score: u32,
    pub total_clicks: u64,
    pub player_count: u64,
    pub recent_scores: Vec<u32>,
}

impl GameStats {
    /// Create empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished round
    ///
    /// # Arguments
    ///
    /// * `score` - Clicks counted by the client during the round
    ///
    /// # Returns
    ///
    /// The accepted submission
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidScore` when the score exceeds `MAX_SCORE`.
    /// Nothing is modified in that case.
    pub fn submit_score(&mut self, score: u32) -> Result<ScoreSubmission, AppError> {
        if score > MAX_SCORE {
            return Err(AppError::InvalidScore);
        }

        self.total_clicks += u64::from(score);
        self.player_count += 1;

        self.recent_scores.push_back(score);
        while self.recent_scores.len() > RECENT_SCORES_LIMIT {
            self.recent_scores.pop_front();
        }

        if score > self.high_score {
            self.high_score = score;
        }

        Ok(ScoreSubmission {
            score,
            is_new_high_score: score == self.high_score,
        })
    }

    /// Snapshot of the leaderboard
    ///
    /// The returned scores are an owned copy, so callers can sort or trim them freely.
    pub fn leaderboard(&self) -> Leaderboard {
        Leaderboard {
            high_score: self.high_score,
            total_clicks: self.total_clicks,
            player_count: self.player_count,
            recent_scores: self.recent_scores.iter().copied().collect(),
        }
    }

    /// Full copy of the statistics, as reported by the health check
    pub fn snapshot(&self) -> GameStats {
        self.clone()
    }

    /// Up to `limit` of the best recent scores, highest first
    pub fn top_recent_scores(&self, limit: usize) -> Vec<u32> {
        let mut scores: Vec<u32> = self.recent_scores.iter().copied().collect();
        scores.sort_unstable_by(|a, b| b.cmp(a));
        scores.truncate(limit);
        scores
    }
}
