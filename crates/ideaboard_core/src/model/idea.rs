//! Idea record model.
//!
//! # Responsibility
//! - Decode one idea row from the spreadsheet-backed API.
//! - Provide display helpers shared by CLI and FFI front ends.
//!
//! # Invariants
//! - Every field is free text; missing keys and `null` decode to `""`.
//! - Wire names match the spreadsheet column headers verbatim.

use serde::{Deserialize, Deserializer, Serialize};

/// Contributor label shown when the sheet leaves the column blank.
pub const ANONYMOUS_CONTRIBUTOR: &str = "Anonymous";

/// One submitted hackathon idea.
///
/// Field names on the wire are the spreadsheet column headers, including
/// the word-limit hints the sheet authors put in them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaRecord {
    #[serde(
        rename = "Idea Header (10 words max)",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub header: String,
    #[serde(
        rename = "Idea Description (120 words max)",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub description: String,
    /// Free-text category label. Matched loosely against tracks.
    #[serde(rename = "Theme", default, deserialize_with = "null_as_empty")]
    pub theme: String,
    #[serde(rename = "Platform", default, deserialize_with = "null_as_empty")]
    pub platform: String,
    /// Human-entered notes that may embed a URL or bare domain.
    #[serde(
        rename = "Reference Links and Examples",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub references: String,
    #[serde(rename = "Idea Contributor", default, deserialize_with = "null_as_empty")]
    pub contributor: String,
    #[serde(rename = "Idea Reviewer", default, deserialize_with = "null_as_empty")]
    pub reviewer: String,
}

/// Visual accent derived from an idea theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAccent {
    DeFi,
    Social,
    General,
}

impl IdeaRecord {
    /// Creates a record with header and theme set, other fields blank.
    pub fn new(header: impl Into<String>, theme: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            theme: theme.into(),
            ..Self::default()
        }
    }

    /// Returns the contributor name, or [`ANONYMOUS_CONTRIBUTOR`] when blank.
    pub fn contributor_or_anonymous(&self) -> &str {
        let trimmed = self.contributor.trim();
        if trimmed.is_empty() {
            ANONYMOUS_CONTRIBUTOR
        } else {
            trimmed
        }
    }

    /// Whether the reference column carries any text worth opening.
    pub fn has_references(&self) -> bool {
        !self.references.trim().is_empty()
    }

    pub fn has_platform(&self) -> bool {
        !self.platform.trim().is_empty()
    }

    /// Classifies the theme for icon/colour selection.
    ///
    /// `defi` wins over `social` when a theme mentions both.
    pub fn accent(&self) -> ThemeAccent {
        let theme = self.theme.to_lowercase();
        if theme.contains("defi") {
            ThemeAccent::DeFi
        } else if theme.contains("social") {
            ThemeAccent::Social
        } else {
            ThemeAccent::General
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
