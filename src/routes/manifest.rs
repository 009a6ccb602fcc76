use axum::{http::header, response::IntoResponse, Json};

use crate::services::{BaseUrl, Manifest};

/// Mini-app manifest read by Farcaster clients
///
/// # Returns
///
/// JSON manifest with absolute URLs for the requesting host, cacheable for five minutes
pub async fn farcaster_manifest(base: BaseUrl) -> impl IntoResponse {
    (
        [(header::CACHE_CONTROL, "public, max-age=300")],
        Json(Manifest::for_base(&base)),
    )
}
