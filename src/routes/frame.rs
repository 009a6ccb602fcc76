use askama::Template;
use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};

use crate::{
    core::{FrameGameState, APP_NAME},
    error::AppError,
    models::{FrameActionRequest, ResetResponse},
    services::{BaseUrl, FrameView},
    state::FrameState,
};

/// Template for a frame page
#[derive(Template)]
#[template(path = "frame.html")]
pub struct FrameTemplate {
    pub app_name: &'static str,
    pub view: FrameView,
    pub state: FrameGameState,
}

impl FrameTemplate {
    fn for_state(base: &BaseUrl, state: FrameGameState) -> Self {
        Self {
            app_name: APP_NAME,
            view: FrameView::for_state(base, &state),
            state,
        }
    }
}

/// Show the frame for the current game state
pub async fn show_frame(State(state): State<FrameState>, base: BaseUrl) -> impl IntoResponse {
    let game_state = state.game.read().await.state();
    FrameTemplate::for_state(&base, game_state)
}

/// Handle a button press posted by a Farcaster client
///
/// # Arguments
///
/// * `state` - Frame server state
/// * `base` - Public origin derived from the request
/// * `payload` - Frame action with `untrustedData` and `trustedData`
///
/// # Returns
///
/// The re-rendered frame, or 400 when the message is incomplete or the
/// button index is unknown. The hub signature is not verified.
pub async fn handle_frame_action(
    State(state): State<FrameState>,
    base: BaseUrl,
    payload: Result<Json<FrameActionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!("Malformed frame payload: {}", rejection);
        AppError::InvalidFrameMessage
    })?;
    let interaction = request.validate()?;

    let outcome = state
        .game
        .write()
        .await
        .apply_interaction(interaction.button);

    tracing::info!(
        "Frame action {} from fid {:?}: +{} (score {}, clicks {})",
        outcome.state.last_action.as_str(),
        interaction.fid,
        outcome.gained,
        outcome.state.score,
        outcome.state.clicks
    );

    Ok(FrameTemplate::for_state(&base, outcome.state))
}

/// Reset the frame game to zero
pub async fn reset_game(State(state): State<FrameState>) -> Json<ResetResponse> {
    let game_state = state.game.write().await.reset();

    tracing::warn!("Frame game state reset");

    Json(ResetResponse {
        message: "Game state reset".to_string(),
        game_state,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::Config,
        core::{FrameAction, FrameButton},
    };

    fn base() -> BaseUrl {
        BaseUrl("https://frame.example".to_string())
    }

    #[test]
    fn test_frame_template_renders_meta_tags() {
        let html = FrameTemplate::for_state(&base(), FrameGameState::default())
            .render()
            .unwrap();

        assert!(html.contains(r#"<meta property="fc:frame" content="vNext" />"#));
        assert!(html.contains("fc:frame:image"));
        assert!(html.contains("fc:frame:post_url"));
        assert!(html.contains("fc:frame:button:1"));
        assert!(html.contains("fc:frame:button:2"));
        assert!(!html.contains("fc:frame:button:3"));
    }

    #[test]
    fn test_frame_template_after_play_has_home_button() {
        let state = FrameGameState {
            score: 4,
            clicks: 1,
            last_action: FrameAction::Play,
        };
        let html = FrameTemplate::for_state(&base(), state).render().unwrap();

        assert!(html.contains("fc:frame:button:3"));
        assert!(html.contains("Score: 4"));
    }

    #[tokio::test]
    async fn test_reset_game() {
        let state = FrameState::new(Config {
            frame_rng_seed: Some(1),
            ..Config::default()
        });
        state
            .game
            .write()
            .await
            .apply_interaction(FrameButton::Play);

        let Json(response) = reset_game(State(state.clone())).await;

        assert_eq!(response.game_state, FrameGameState::default());
        assert_eq!(state.game.read().await.state().clicks, 0);
    }
}
