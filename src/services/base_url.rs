use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts, HeaderMap, Uri},
};
use std::{convert::Infallible, fmt, sync::Arc};

use crate::config::Config;

const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Public origin of the server as seen by the client, e.g. `https://clicker.example`
///
/// Used to build absolute image, launch and post URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl(pub String);

impl BaseUrl {
    /// Derive the base URL from request headers
    ///
    /// The scheme comes from the first `x-forwarded-proto` value when a proxy
    /// sets one, otherwise from the configured scheme. The host comes from the
    /// `Host` header, then the request URI authority, then `localhost:<port>`.
    pub fn from_request(headers: &HeaderMap, uri: &Uri, config: &Config) -> Self {
        let scheme = headers
            .get(FORWARDED_PROTO)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(',').next())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(config.scheme.as_str());

        let host = headers
            .get(header::HOST)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
            .or_else(|| uri.authority().map(|authority| authority.to_string()))
            .unwrap_or_else(|| format!("localhost:{}", config.port));

        tracing::debug!("Protocol: {}://{}", scheme, host);

        Self(format!("{}://{}", scheme, host))
    }

    /// Absolute URL for a path on this server
    pub fn join(&self, path: &str) -> String {
        format!("{}{}", self.0, path)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for BaseUrl
where
    S: Send + Sync,
    Arc<Config>: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let config = Arc::<Config>::from_ref(state);
        Ok(Self::from_request(&parts.headers, &parts.uri, &config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_static(value));
        }
        map
    }

    #[test]
    fn test_host_with_default_scheme() {
        let base = BaseUrl::from_request(
            &headers(&[("host", "clicker.example")]),
            &Uri::from_static("/"),
            &Config::default(),
        );
        assert_eq!(base.as_str(), "http://clicker.example");
    }

    #[test]
    fn test_forwarded_proto_wins() {
        let base = BaseUrl::from_request(
            &headers(&[("host", "clicker.example"), ("x-forwarded-proto", "https")]),
            &Uri::from_static("/"),
            &Config::default(),
        );
        assert_eq!(base.as_str(), "https://clicker.example");
    }

    #[test]
    fn test_forwarded_proto_chain_uses_first() {
        let base = BaseUrl::from_request(
            &headers(&[("host", "a.example"), ("x-forwarded-proto", "https, http")]),
            &Uri::from_static("/"),
            &Config::default(),
        );
        assert_eq!(base.as_str(), "https://a.example");
    }

    #[test]
    fn test_missing_host_falls_back_to_uri_then_port() {
        let from_uri = BaseUrl::from_request(
            &HeaderMap::new(),
            &Uri::from_static("http://uri.example:9000/app"),
            &Config::default(),
        );
        assert_eq!(from_uri.as_str(), "http://uri.example:9000");

        let config = Config {
            port: 4321,
            ..Config::default()
        };
        let fallback = BaseUrl::from_request(&HeaderMap::new(), &Uri::from_static("/"), &config);
        assert_eq!(fallback.as_str(), "http://localhost:4321");
    }

    #[test]
    fn test_join() {
        let base = BaseUrl("https://clicker.example".to_string());
        assert_eq!(
            base.join("/api/image/preview"),
            "https://clicker.example/api/image/preview"
        );
        assert_eq!(base.to_string(), "https://clicker.example");
    }
}
