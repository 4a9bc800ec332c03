//! Idea source contracts and adapters.
//!
//! # Responsibility
//! - Define the [`IdeaSource`] seam used by the board.
//! - Provide HTTP and JSON-snapshot implementations.
//!
//! # Invariants
//! - A source returns ideas in the order the upstream delivered them.
//! - Sources never retry and never cache.

use crate::config::ConfigError;
use crate::model::idea::IdeaRecord;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod file;
pub mod http;

pub use file::FileIdeaSource;
pub use http::HttpIdeaSource;

pub type SourceResult<T> = Result<T, SourceError>;

/// Failure while fetching or decoding the idea list.
#[derive(Debug)]
pub enum SourceError {
    /// Source was built from an unusable config.
    Config(ConfigError),
    /// Transport failure: DNS, connect, TLS, timeout.
    Http(reqwest::Error),
    /// Upstream answered with a non-success status.
    Status { status: u16, body: String },
    /// Body is not a JSON array of idea records.
    Decode(serde_json::Error),
    Io(std::io::Error),
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid ideas source config: {err}"),
            Self::Http(err) => write!(f, "ideas request failed: {err}"),
            Self::Status { status, body } => {
                write!(f, "ideas endpoint returned HTTP {status}: {body}")
            }
            Self::Decode(err) => write!(f, "invalid ideas payload: {err}"),
            Self::Io(err) => write!(f, "failed to read ideas snapshot: {err}"),
        }
    }
}

impl Error for SourceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Http(err) => Some(err),
            Self::Status { .. } => None,
            Self::Decode(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<ConfigError> for SourceError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<reqwest::Error> for SourceError {
    fn from(value: reqwest::Error) -> Self {
        Self::Http(value)
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value)
    }
}

impl From<std::io::Error> for SourceError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Read-only provider of the full idea list.
pub trait IdeaSource {
    /// Short identifier used in log events.
    fn source_name(&self) -> &str;

    /// Fetches every idea in upstream order.
    fn fetch_ideas(&self) -> SourceResult<Vec<IdeaRecord>>;
}

/// Decodes a JSON array of idea records.
pub fn decode_ideas(payload: &str) -> SourceResult<Vec<IdeaRecord>> {
    Ok(serde_json::from_str::<Vec<IdeaRecord>>(payload)?)
}
