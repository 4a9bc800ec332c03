//! Idea source configuration.
//!
//! # Responsibility
//! - Hold the endpoint and request timeout used by [`crate::source::http`].
//! - Resolve overrides from the process environment and explicit values
//!   (explicit > environment > defaults).
//!
//! # Invariants
//! - A validated config always has an `http(s)` endpoint and non-zero timeout.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

/// Spreadsheet API that backs the public idea board.
pub const DEFAULT_IDEAS_ENDPOINT: &str = "https://sheetdb.io/api/v1/2wu9a6ss452zk";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

pub const ENDPOINT_ENV: &str = "IDEABOARD_ENDPOINT";
pub const TIMEOUT_ENV: &str = "IDEABOARD_TIMEOUT_MS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidEndpoint(String),
    InvalidTimeout(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEndpoint(value) => {
                write!(f, "ideas endpoint must be an http(s) URL, got `{value}`")
            }
            Self::InvalidTimeout(value) => {
                write!(f, "timeout must be a positive number of milliseconds, got `{value}`")
            }
        }
    }
}

impl Error for ConfigError {}

/// Runtime settings for fetching ideas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_IDEAS_ENDPOINT.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl BoardConfig {
    /// Defaults overridden by `IDEABOARD_ENDPOINT` / `IDEABOARD_TIMEOUT_MS`.
    ///
    /// Blank variables are ignored.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// [`BoardConfig::from_env`] with explicit values layered on top.
    pub fn from_env_with(
        endpoint: Option<String>,
        timeout_ms: Option<u64>,
    ) -> Result<Self, ConfigError> {
        Self::resolve(|key| std::env::var(key).ok(), endpoint, timeout_ms)
    }

    /// Same as [`BoardConfig::from_env`] with an injectable variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Self::resolve(lookup, None, None)
    }

    /// Layers explicit overrides over the environment over the defaults.
    ///
    /// An explicit value shadows its variable entirely, so a malformed
    /// variable is never parsed when a flag replaces it. Validation runs
    /// once, on the merged result.
    pub fn resolve(
        lookup: impl Fn(&str) -> Option<String>,
        endpoint: Option<String>,
        timeout_ms: Option<u64>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(endpoint) = non_blank(endpoint).or_else(|| non_blank(lookup(ENDPOINT_ENV))) {
            config.endpoint = endpoint;
        }

        match timeout_ms {
            Some(ms) => config.timeout = Duration::from_millis(ms),
            None => {
                if let Some(raw) = non_blank(lookup(TIMEOUT_ENV)) {
                    config.timeout = parse_timeout_ms(&raw)?;
                }
            }
        }

        config.validate()?;
        Ok(config)
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = self.endpoint.trim();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(ConfigError::InvalidEndpoint(self.endpoint.clone()));
        }
        if self.timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout("0".to_string()));
        }
        Ok(())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}

fn parse_timeout_ms(value: &str) -> Result<Duration, ConfigError> {
    match value.parse::<u64>() {
        Ok(ms) if ms > 0 => Ok(Duration::from_millis(ms)),
        _ => Err(ConfigError::InvalidTimeout(value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        BoardConfig, ConfigError, DEFAULT_IDEAS_ENDPOINT, DEFAULT_TIMEOUT_MS, ENDPOINT_ENV,
        TIMEOUT_ENV,
    };
    use std::collections::HashMap;
    use std::time::Duration;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_without_overrides() {
        let config = BoardConfig::from_lookup(lookup(&[])).expect("defaults are valid");
        assert_eq!(config.endpoint, DEFAULT_IDEAS_ENDPOINT);
        assert_eq!(config.timeout, Duration::from_millis(DEFAULT_TIMEOUT_MS));
    }

    #[test]
    fn env_overrides_are_trimmed() {
        let config = BoardConfig::from_lookup(lookup(&[
            (ENDPOINT_ENV, " http://127.0.0.1:9000/ideas "),
            (TIMEOUT_ENV, "250"),
        ]))
        .expect("overrides are valid");
        assert_eq!(config.endpoint, "http://127.0.0.1:9000/ideas");
        assert_eq!(config.timeout, Duration::from_millis(250));
    }

    #[test]
    fn blank_overrides_are_ignored() {
        let config = BoardConfig::from_lookup(lookup(&[(ENDPOINT_ENV, "  "), (TIMEOUT_ENV, "")]))
            .expect("blank overrides fall back to defaults");
        assert_eq!(config, BoardConfig::default());
    }

    #[test]
    fn rejects_non_http_endpoint() {
        let err = BoardConfig::from_lookup(lookup(&[(ENDPOINT_ENV, "ftp://nope")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidEndpoint("ftp://nope".to_string()));
    }

    #[test]
    fn rejects_zero_or_garbage_timeout() {
        let err = BoardConfig::from_lookup(lookup(&[(TIMEOUT_ENV, "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTimeout(_)));

        let err = BoardConfig::from_lookup(lookup(&[(TIMEOUT_ENV, "soon")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidTimeout("soon".to_string()));
    }

    #[test]
    fn explicit_values_shadow_malformed_env() {
        let env = lookup(&[(ENDPOINT_ENV, "ftp://bad"), (TIMEOUT_ENV, "soon")]);
        let config = BoardConfig::resolve(env, Some("http://127.0.0.1:9/".to_string()), Some(200))
            .expect("explicit values replace the bad variables");
        assert_eq!(config.endpoint, "http://127.0.0.1:9/");
        assert_eq!(config.timeout, Duration::from_millis(200));
    }

    #[test]
    fn explicit_values_beat_valid_env() {
        let env = lookup(&[
            (ENDPOINT_ENV, "http://env.example/ideas"),
            (TIMEOUT_ENV, "900"),
        ]);
        let config = BoardConfig::resolve(env, Some(" https://flag.example/ideas ".to_string()), Some(50))
            .expect("valid overrides");
        assert_eq!(config.endpoint, "https://flag.example/ideas");
        assert_eq!(config.timeout, Duration::from_millis(50));
    }

    #[test]
    fn env_fills_gaps_left_by_explicit_values() {
        let env = lookup(&[(TIMEOUT_ENV, "300")]);
        let config = BoardConfig::resolve(env, Some("http://flag.example/".to_string()), None)
            .expect("mixed sources");
        assert_eq!(config.endpoint, "http://flag.example/");
        assert_eq!(config.timeout, Duration::from_millis(300));

        let env = lookup(&[(ENDPOINT_ENV, "http://env.example/")]);
        let config = BoardConfig::resolve(env, Some("   ".to_string()), Some(75)).expect("blank flag");
        assert_eq!(config.endpoint, "http://env.example/");
        assert_eq!(config.timeout, Duration::from_millis(75));
    }

    #[test]
    fn merged_result_is_still_validated() {
        let err = BoardConfig::resolve(lookup(&[(TIMEOUT_ENV, "500")]), None, Some(0)).unwrap_err();
        assert_eq!(err, ConfigError::InvalidTimeout("0".to_string()));

        let err = BoardConfig::resolve(
            lookup(&[(ENDPOINT_ENV, "http://env.example/")]),
            Some("file:///tmp/ideas.json".to_string()),
            None,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidEndpoint("file:///tmp/ideas.json".to_string())
        );
    }
}
