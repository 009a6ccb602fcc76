use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

pub const DEFAULT_PORT: u16 = 3000;

/// Runtime settings read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Listening port (`PORT`)
    pub port: u16,
    /// Deployment environment (`ENVIRONMENT`)
    pub environment: String,
    /// Scheme used for absolute URLs when no `x-forwarded-proto` header is sent (`PUBLIC_SCHEME`)
    pub scheme: String,
    /// Seed for the frame game's random source (`FRAME_RNG_SEED`)
    pub frame_rng_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: try_load("PORT", DEFAULT_PORT),
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()),
            scheme: env::var("PUBLIC_SCHEME").unwrap_or_else(|_| "http".to_string()),
            frame_rng_seed: try_load_optional("FRAME_RNG_SEED"),
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self.environment.as_str(), "development" | "dev")
    }

    /// Address the server binds to
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            environment: "production".to_string(),
            scheme: "http".to_string(),
            frame_rng_seed: None,
        }
    }
}

fn try_load<T: FromStr + Display>(key: &str, default: T) -> T
where
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => parse_or_default(key, &raw, default),
        Err(_) => {
            info!("{key} not set, using default: {default}");
            default
        }
    }
}

fn try_load_optional<T: FromStr>(key: &str) -> Option<T>
where
    T::Err: Display,
{
    let raw = env::var(key).ok()?;
    raw.trim()
        .parse()
        .map_err(|e| warn!("Invalid {key} value {raw:?}: {e}, ignoring"))
        .ok()
}

fn parse_or_default<T: FromStr + Display>(key: &str, raw: &str, default: T) -> T
where
    T::Err: Display,
{
    raw.trim().parse().unwrap_or_else(|e| {
        warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
        default
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_or_default_valid() {
        assert_eq!(parse_or_default("PORT", "8080", DEFAULT_PORT), 8080);
        assert_eq!(parse_or_default("PORT", " 4000 ", DEFAULT_PORT), 4000);
    }

    #[test]
    fn test_parse_or_default_invalid() {
        assert_eq!(parse_or_default("PORT", "abc", DEFAULT_PORT), DEFAULT_PORT);
        assert_eq!(parse_or_default("PORT", "70000", DEFAULT_PORT), DEFAULT_PORT);
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.scheme, "http");
        assert_eq!(config.frame_rng_seed, None);
        assert!(!config.is_development());
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_is_development() {
        let config = Config {
            environment: "dev".to_string(),
            ..Config::default()
        };
        assert!(config.is_development());
    }
}
