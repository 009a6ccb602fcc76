use axum::{
    extract::{Request, State},
    http::{header, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::{config::Config, services::BaseUrl};

/// Middleware to add security headers to all responses
///
/// Pages are meant to be embedded by Farcaster clients, so framing is allowed
/// from any ancestor instead of being denied.
///
/// # Security Headers
///
/// - **Content-Security-Policy**: Restrict scripts to this origin and the mini-app SDK CDN
/// - **X-Content-Type-Options**: Prevent MIME type sniffing
/// - **Strict-Transport-Security**: Force HTTPS, only sent when the request
///   reached us over https (forwarded proto or `PUBLIC_SCHEME`)
/// - **Referrer-Policy**: Limit referrer information
/// - **Permissions-Policy**: Disable unnecessary browser features
pub async fn security_headers_middleware(
    State(config): State<Arc<Config>>,
    req: Request,
    next: Next,
) -> Response {
    let secure = BaseUrl::from_request(req.headers(), req.uri(), &config)
        .as_str()
        .starts_with("https://");

    let mut response = next.run(req).await;

    let headers = response.headers_mut();

    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(
            "default-src 'self'; \
             script-src 'self' 'unsafe-inline' https://esm.sh; \
             style-src 'self' 'unsafe-inline'; \
             connect-src 'self' https://esm.sh; \
             img-src 'self' data: https:; \
             frame-ancestors *",
        ),
    );

    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );

    if secure {
        headers.insert(
            header::STRICT_TRANSPORT_SECURITY,
            HeaderValue::from_static("max-age=31536000; includeSubDomains"),
        );
    }

    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );

    headers.insert(
        header::HeaderName::from_static("permissions-policy"),
        HeaderValue::from_static("geolocation=(), microphone=(), camera=(), payment=()"),
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        middleware,
        response::IntoResponse,
        routing::get,
        Router,
    };
    use tower::ServiceExt;

    async fn test_handler() -> impl IntoResponse {
        (StatusCode::OK, "test")
    }

    async fn headers_for(config: Config, forwarded_proto: Option<&str>) -> axum::http::HeaderMap {
        let app = Router::new()
            .route("/test", get(test_handler))
            .layer(middleware::from_fn_with_state(
                Arc::new(config),
                security_headers_middleware,
            ));

        let mut request = Request::builder().uri("/test");
        if let Some(proto) = forwarded_proto {
            request = request.header("x-forwarded-proto", proto);
        }
        let response = app
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap();
        response.headers().clone()
    }

    async fn headers_for_test_route() -> axum::http::HeaderMap {
        headers_for(Config::default(), Some("https")).await
    }

    #[tokio::test]
    async fn test_security_headers_added() {
        let headers = headers_for_test_route().await;

        let csp = headers.get(header::CONTENT_SECURITY_POLICY).unwrap();
        assert!(csp.to_str().unwrap().contains("default-src 'self'"));

        assert_eq!(
            headers.get(header::X_CONTENT_TYPE_OPTIONS).unwrap(),
            "nosniff"
        );

        let hsts = headers.get(header::STRICT_TRANSPORT_SECURITY).unwrap();
        assert!(hsts.to_str().unwrap().contains("max-age=31536000"));

        assert_eq!(
            headers.get(header::REFERRER_POLICY).unwrap(),
            "strict-origin-when-cross-origin"
        );

        let perms = headers.get("permissions-policy").unwrap();
        assert!(perms.to_str().unwrap().contains("geolocation=()"));
    }

    #[tokio::test]
    async fn test_no_hsts_over_plain_http() {
        let headers = headers_for(Config::default(), None).await;

        assert!(!headers.contains_key(header::STRICT_TRANSPORT_SECURITY));
        assert_eq!(
            headers.get(header::X_CONTENT_TYPE_OPTIONS).unwrap(),
            "nosniff"
        );

        let forwarded_http = headers_for(Config::default(), Some("http")).await;
        assert!(!forwarded_http.contains_key(header::STRICT_TRANSPORT_SECURITY));
    }

    #[tokio::test]
    async fn test_hsts_when_public_scheme_is_https() {
        let config = Config {
            scheme: "https".to_string(),
            ..Config::default()
        };

        let headers = headers_for(config, None).await;

        assert!(headers.contains_key(header::STRICT_TRANSPORT_SECURITY));
    }

    #[tokio::test]
    async fn test_pages_can_be_embedded() {
        let headers = headers_for_test_route().await;

        // Farcaster clients render the app inside a frame
        assert!(!headers.contains_key(header::X_FRAME_OPTIONS));
        let csp = headers
            .get(header::CONTENT_SECURITY_POLICY)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(csp.contains("frame-ancestors *"));
        assert!(csp.contains("https://esm.sh"));
    }
}
