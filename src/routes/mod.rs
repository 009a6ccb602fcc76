pub mod clicker;
pub mod frame;
pub mod health;
pub mod images;
pub mod manifest;

use axum::{
    http::{header, Method, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::{any::Any, sync::Arc};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::{
    config::Config,
    middleware::security_headers,
    models::ErrorResponse,
    state::{ClickerState, FrameState},
};

/// Directory served for paths no route matches
pub const PUBLIC_DIR: &str = "public";

/// Router of the mini-app clicker server
pub fn clicker_app(state: ClickerState) -> Router {
    let config = state.config.clone();
    let router = Router::new()
        // Pages
        .route("/", get(clicker::show_index))
        .route("/app", get(clicker::show_app))
        // Score API
        .route("/api/submit-score", post(clicker::submit_score))
        .route("/api/leaderboard", get(clicker::get_leaderboard))
        // Images
        .route("/api/image/preview", get(images::preview_image))
        .route("/api/image/splash", get(images::splash_image))
        // Manifest, at the advertised path and the legacy one
        .route(
            "/.well-known/farcaster.json",
            get(manifest::farcaster_manifest),
        )
        .route(
            "/well-known/farcaster.json",
            get(manifest::farcaster_manifest),
        )
        .route("/health", get(health::clicker_health))
        .fallback_service(ServeDir::new(PUBLIC_DIR))
        .with_state(state);

    with_common_layers(router, config)
}

/// Router of the button-driven frame server
pub fn frame_app(state: FrameState) -> Router {
    let config = state.config.clone();
    let router = Router::new()
        .route("/", get(frame::show_frame))
        .route("/frame", post(frame::handle_frame_action))
        .route("/image/start", get(images::frame_start_image))
        .route("/image/result", get(images::frame_result_image))
        .route("/image/stats", get(images::frame_stats_image))
        .route("/health", get(health::frame_health))
        .route("/reset", post(frame::reset_game))
        .with_state(state);

    with_common_layers(router, config)
}

/// Middleware shared by both servers (applied in reverse order)
fn with_common_layers(router: Router, config: Arc<Config>) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CatchPanicLayer::custom(panic_response))
            .layer(CompressionLayer::new())
            .layer(middleware::from_fn_with_state(
                config,
                security_headers::security_headers_middleware,
            ))
            .layer(cors_layer()),
    )
}

/// Open CORS policy; embeds and frame posts arrive from any client origin
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

/// Turn a handler panic into a generic JSON 500
fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = err.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = err.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    tracing::error!("Handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "Internal server error".to_string(),
        }),
    )
        .into_response()
}
