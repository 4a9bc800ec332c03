//! HTTP idea source backed by the spreadsheet API.

use crate::config::BoardConfig;
use crate::model::idea::IdeaRecord;
use crate::source::{decode_ideas, IdeaSource, SourceError, SourceResult};
use log::info;

const MAX_ERROR_BODY_CHARS: usize = 200;

/// Fetches ideas with one blocking GET per call.
pub struct HttpIdeaSource {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl HttpIdeaSource {
    /// Builds a source after validating `config`.
    pub fn try_new(config: &BoardConfig) -> SourceResult<Self> {
        config.validate()?;
        let endpoint = config.endpoint.trim().to_string();
        let mut builder = reqwest::blocking::Client::builder().timeout(config.timeout);
        if is_loopback(&endpoint) {
            builder = builder.no_proxy();
        }
        Ok(Self {
            endpoint,
            client: builder.build()?,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl IdeaSource for HttpIdeaSource {
    fn source_name(&self) -> &str {
        "http"
    }

    fn fetch_ideas(&self) -> SourceResult<Vec<IdeaRecord>> {
        let response = self
            .client
            .get(self.endpoint.as_str())
            .header("Accept", "application/json")
            .send()?;

        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                body: truncate(&body, MAX_ERROR_BODY_CHARS),
            });
        }

        let ideas = decode_ideas(&body)?;
        info!(
            "event=ideas_fetch module=source status=ok source=http count={}",
            ideas.len()
        );
        Ok(ideas)
    }
}

/// Loopback endpoints bypass any system proxy.
fn is_loopback(endpoint: &str) -> bool {
    let host = endpoint
        .split_once("://")
        .map_or(endpoint, |(_, rest)| rest);
    ["localhost", "127.0.0.1", "[::1]"]
        .iter()
        .any(|loopback| {
            host.strip_prefix(loopback)
                .is_some_and(|tail| tail.is_empty() || tail.starts_with([':', '/']))
        })
}

fn truncate(value: &str, max_chars: usize) -> String {
    let mut out = value.chars().take(max_chars).collect::<String>();
    if value.chars().count() > max_chars {
        out.push_str("...");
    }
    out
}
