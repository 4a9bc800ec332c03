//! Best-effort URL extraction over free text.
//!
//! # Responsibility
//! - Find an absolute URL, or failing that a bare domain, in reference notes.
//!
//! # Invariants
//! - Extraction never fails; absence is reported as [`NO_LINK_PLACEHOLDER`].
//! - Bare domains are always upgraded to `https://`.
//! - This is a heuristic, not a URL parser. Any dotted token that ends in two
//!   or more letters is treated as a domain.

use once_cell::sync::Lazy;
use regex::Regex;

/// Sentinel href meaning "no link available".
pub const NO_LINK_PLACEHOLDER: &str = "#";

static ABSOLUTE_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://[^\s]+").expect("valid absolute url regex"));
static BARE_DOMAIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|\s)((?:[a-zA-Z0-9-]+\.)+[a-zA-Z]{2,})").expect("valid bare domain regex")
});

/// Outcome of scanning one reference field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceLink {
    Url(String),
    Unavailable,
}

impl ReferenceLink {
    /// Scans `text` for the first openable link.
    pub fn resolve(text: &str) -> Self {
        if let Some(found) = ABSOLUTE_URL_RE.find(text) {
            return Self::Url(found.as_str().to_string());
        }

        if let Some(domain) = BARE_DOMAIN_RE
            .captures(text)
            .and_then(|caps| caps.get(1))
        {
            return Self::Url(format!("https://{}", domain.as_str()));
        }

        Self::Unavailable
    }

    /// Returns the link target, or the placeholder sentinel.
    pub fn href(&self) -> &str {
        match self {
            Self::Url(url) => url.as_str(),
            Self::Unavailable => NO_LINK_PLACEHOLDER,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Url(_))
    }
}

/// Returns the first URL found in `text`, or [`NO_LINK_PLACEHOLDER`].
pub fn extract_url(text: &str) -> String {
    ReferenceLink::resolve(text).href().to_string()
}
