use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::core::{FrameGameState, GameStats};

/// Body returned for an accepted score
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitScoreResponse {
    pub success: bool,
    pub new_high_score: bool,
}

/// Health check of the clicker server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "healthy" while the process serves requests
    pub status: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub stats: GameStats,
}

impl HealthResponse {
    pub fn healthy(stats: GameStats) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: OffsetDateTime::now_utc(),
            stats,
        }
    }
}

/// Health check of the frame server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameHealthResponse {
    pub status: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub game_state: FrameGameState,
}

impl FrameHealthResponse {
    pub fn healthy(game_state: FrameGameState) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: OffsetDateTime::now_utc(),
            game_state,
        }
    }
}

/// Body returned after the frame game was reset
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetResponse {
    pub message: String,
    pub game_state: FrameGameState,
}

/// JSON error body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
