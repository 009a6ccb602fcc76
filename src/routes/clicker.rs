use askama::Template;
use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};

use crate::{
    core::{GameStats, Leaderboard, APP_NAME, MAX_SCORE, ROUND_SECONDS, TOP_SCORES_SHOWN},
    error::AppError,
    models::{SubmitScoreRequest, SubmitScoreResponse},
    services::{BaseUrl, MiniAppEmbed},
    state::ClickerState,
};

/// Template for the shareable landing page carrying the embed meta tags
#[derive(Template)]
#[template(path = "clicker_index.html")]
pub struct ClickerIndexTemplate {
    pub app_name: &'static str,
    pub embed_json: String,
    pub image_url: String,
    pub stats: GameStats,
    /// Best recent scores, highest first
    pub top_scores: Vec<u32>,
    pub round_seconds: u32,
}

/// Template for the playable game page
#[derive(Template)]
#[template(path = "clicker_app.html")]
pub struct ClickerAppTemplate {
    pub app_name: &'static str,
    pub round_seconds: u32,
    pub max_score: u32,
    pub top_scores: usize,
}

/// Show the landing page with the mini-app embed
///
/// # Arguments
///
/// * `state` - Clicker server state
/// * `base` - Public origin derived from the request
///
/// # Returns
///
/// Rendered landing page with current stats
pub async fn show_index(State(state): State<ClickerState>, base: BaseUrl) -> impl IntoResponse {
    let embed = MiniAppEmbed::for_base(&base);
    let (stats, top_scores) = {
        let stats = state.stats.read().await;
        (stats.clone(), stats.top_recent_scores(TOP_SCORES_SHOWN))
    };

    ClickerIndexTemplate {
        app_name: APP_NAME,
        embed_json: embed.to_json(),
        image_url: embed.image_url,
        stats,
        top_scores,
        round_seconds: ROUND_SECONDS,
    }
}

/// Show the game page opened by the launch button
pub async fn show_app() -> impl IntoResponse {
    ClickerAppTemplate {
        app_name: APP_NAME,
        round_seconds: ROUND_SECONDS,
        max_score: MAX_SCORE,
        top_scores: TOP_SCORES_SHOWN,
    }
}

/// Record the score of a finished round
///
/// # Arguments
///
/// * `state` - Clicker server state
/// * `payload` - JSON body `{ "score": number }`
///
/// # Returns
///
/// `{ success, newHighScore }`, or 400 `{ error: "Invalid score" }` when the
/// body is malformed or the score is outside 0-1000
pub async fn submit_score(
    State(state): State<ClickerState>,
    payload: Result<Json<SubmitScoreRequest>, JsonRejection>,
) -> Result<Json<SubmitScoreResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!("Malformed score payload: {}", rejection);
        AppError::InvalidScore
    })?;
    let score = request.validated_score()?;

    let submission = state.stats.write().await.submit_score(score)?;

    tracing::info!(
        "Score {} accepted (new high score: {})",
        submission.score,
        submission.is_new_high_score
    );

    Ok(Json(SubmitScoreResponse {
        success: true,
        new_high_score: submission.is_new_high_score,
    }))
}

/// Current leaderboard snapshot
pub async fn get_leaderboard(State(state): State<ClickerState>) -> Json<Leaderboard> {
    Json(state.stats.read().await.leaderboard())
}
