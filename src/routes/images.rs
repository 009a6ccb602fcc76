use askama::Template;
use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::{
    core::{FrameGameState, APP_NAME, SPLASH_BACKGROUND_COLOR},
    error::AppError,
    state::{ClickerState, FrameState},
};

const SVG_CONTENT_TYPE: &str = "image/svg+xml";

/// Preview image for cast embeds (600x315)
#[derive(Template)]
#[template(path = "preview.svg", escape = "html")]
pub struct PreviewImage {
    pub app_name: &'static str,
    pub high_score: u32,
}

/// Splash and icon image (400x400)
#[derive(Template)]
#[template(path = "splash.svg", escape = "html")]
pub struct SplashImage {
    pub background: &'static str,
}

#[derive(Template)]
#[template(path = "frame_start.svg", escape = "html")]
pub struct FrameStartImage {
    pub app_name: &'static str,
    pub state: FrameGameState,
}

#[derive(Template)]
#[template(path = "frame_result.svg", escape = "html")]
pub struct FrameResultImage {
    pub state: FrameGameState,
}

#[derive(Template)]
#[template(path = "frame_stats.svg", escape = "html")]
pub struct FrameStatsImage {
    pub state: FrameGameState,
    /// Points per click, one decimal
    pub average: String,
}

/// Render an SVG template with the given cache policy
fn svg_response<T: Template>(image: &T, cache_control: &'static str) -> Result<Response, AppError> {
    let body = image.render()?;
    Ok((
        [
            (header::CONTENT_TYPE, SVG_CONTENT_TYPE),
            (header::CACHE_CONTROL, cache_control),
        ],
        body,
    )
        .into_response())
}

/// Points per click formatted for display
pub fn average_per_click(state: &FrameGameState) -> String {
    if state.clicks == 0 {
        return "0.0".to_string();
    }
    format!("{:.1}", state.score as f64 / state.clicks as f64)
}

/// Preview image showing the current high score
pub async fn preview_image(State(state): State<ClickerState>) -> Result<Response, AppError> {
    let high_score = state.stats.read().await.high_score;
    svg_response(
        &PreviewImage {
            app_name: APP_NAME,
            high_score,
        },
        "public, max-age=300",
    )
}

/// Splash screen image
pub async fn splash_image() -> Result<Response, AppError> {
    svg_response(
        &SplashImage {
            background: SPLASH_BACKGROUND_COLOR,
        },
        "public, max-age=300",
    )
}

// Frame images reflect live state and must not be cached

pub async fn frame_start_image(State(state): State<FrameState>) -> Result<Response, AppError> {
    let game_state = state.game.read().await.state();
    svg_response(
        &FrameStartImage {
            app_name: APP_NAME,
            state: game_state,
        },
        "no-cache",
    )
}

pub async fn frame_result_image(State(state): State<FrameState>) -> Result<Response, AppError> {
    let game_state = state.game.read().await.state();
    svg_response(&FrameResultImage { state: game_state }, "no-cache")
}

pub async fn frame_stats_image(State(state): State<FrameState>) -> Result<Response, AppError> {
    let game_state = state.game.read().await.state();
    svg_response(
        &FrameStatsImage {
            average: average_per_click(&game_state),
            state: game_state,
        },
        "no-cache",
    )
}
