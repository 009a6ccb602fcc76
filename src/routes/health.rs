use axum::{extract::State, Json};

use crate::{
    models::{FrameHealthResponse, HealthResponse},
    state::{ClickerState, FrameState},
};

/// Health check of the clicker server
///
/// # Returns
///
/// JSON with status, timestamp and the full game statistics
pub async fn clicker_health(State(state): State<ClickerState>) -> Json<HealthResponse> {
    let stats = state.stats.read().await.snapshot();
    Json(HealthResponse::healthy(stats))
}

/// Health check of the frame server
///
/// # Returns
///
/// JSON with status, timestamp and the current frame game state
pub async fn frame_health(State(state): State<FrameState>) -> Json<FrameHealthResponse> {
    let game_state = state.game.read().await.state();
    Json(FrameHealthResponse::healthy(game_state))
}
