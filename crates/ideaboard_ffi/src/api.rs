//! FFI use-case API for a Flutter shell.
//!
//! # Responsibility
//! - Expose idea board use-cases to Dart via FRB as plain data.
//! - Keep error semantics simple: messages inside response envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Idea lists preserve fetch order.

use ideaboard_core::{
    core_version as core_version_inner, extract_url, filter_sponsors,
    init_logging as init_logging_inner, ping as ping_inner, BoardConfig, BootScript,
    FileIdeaSource, HttpIdeaSource, IdeaBoard, IdeaRecord, IdeaSource, ReferenceLink, Sponsor,
    ThemeAccent, Track,
};
use log::warn;

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Track labels in display order.
#[flutter_rust_bridge::frb(sync)]
pub fn list_tracks() -> Vec<String> {
    Track::ALL
        .iter()
        .map(|track| track.label().to_string())
        .collect()
}

/// One idea card as rendered by the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeaCard {
    pub header: String,
    pub description: String,
    pub theme: String,
    pub platform: String,
    /// `defi|social|general`, selects the card icon.
    pub accent: String,
    pub contributor: String,
    pub reviewer: String,
    /// Raw reference notes; empty when the idea has none.
    pub references: String,
    /// Extracted link, or `#` when nothing openable was found.
    pub reference_url: String,
}

/// Idea list response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeasResponse {
    pub items: Vec<IdeaCard>,
    /// Ideas fetched before filtering.
    pub total: u32,
    /// Applied track label; `None` means all tracks.
    pub applied_track: Option<String>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Fetches ideas from the configured endpoint and filters by track.
///
/// # FFI contract
/// - Blocking network call; run off the UI thread.
/// - Fetch failures yield an empty list, never an error.
/// - Unknown track labels are reported in `message` and nothing is shown.
pub fn ideas_fetch(track: Option<String>) -> IdeasResponse {
    let source = BoardConfig::from_env()
        .map_err(|err| err.to_string())
        .and_then(|config| HttpIdeaSource::try_new(&config).map_err(|err| err.to_string()));
    match source {
        Ok(source) => load_and_filter(&source, track),
        Err(err) => {
            warn!("event=ideas_fetch module=ffi status=error error={err}");
            IdeasResponse::failure(format!("ideas_fetch failed: {err}"), None)
        }
    }
}

/// Same as [`ideas_fetch`] over a JSON snapshot file.
#[flutter_rust_bridge::frb(sync)]
pub fn ideas_load_file(path: String, track: Option<String>) -> IdeasResponse {
    let source = FileIdeaSource::new(path.trim());
    load_and_filter(&source, track)
}

/// Extracts an openable URL from free-text reference notes.
///
/// Returns `#` when no link is found.
#[flutter_rust_bridge::frb(sync)]
pub fn extract_reference_url(text: String) -> String {
    extract_url(&text)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SponsorResourceItem {
    pub title: String,
    pub url: String,
    /// `docs|repo|support|other`.
    pub kind: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SponsorEntry {
    pub name: String,
    pub logo: Option<String>,
    pub website: Option<String>,
    pub resources: Vec<SponsorResourceItem>,
}

/// Lists sponsors, optionally narrowed to one exact sponsor name.
#[flutter_rust_bridge::frb(sync)]
pub fn list_sponsor_resources(sponsor: Option<String>) -> Vec<SponsorEntry> {
    filter_sponsors(sponsor.as_deref().map(str::trim))
        .into_iter()
        .map(to_sponsor_entry)
        .collect()
}

/// Boot screen log lines. `seed` makes the sequence reproducible.
#[flutter_rust_bridge::frb(sync)]
pub fn boot_log_lines(seed: Option<u64>) -> Vec<String> {
    let script = match seed {
        Some(seed) => BootScript::seeded(seed),
        None => BootScript::from_entropy(),
    };
    script
        .run_to_end()
        .into_iter()
        .map(str::to_string)
        .collect()
}

impl IdeasResponse {
    fn failure(message: String, applied_track: Option<String>) -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            applied_track,
            message,
        }
    }
}

fn load_and_filter(source: &dyn IdeaSource, track: Option<String>) -> IdeasResponse {
    let selected = match parse_track(track) {
        Ok(selected) => selected,
        Err(message) => return IdeasResponse::failure(message, None),
    };

    let mut board = IdeaBoard::new();
    let total = board.load(source);
    board.select_track(selected);

    let items = board
        .visible_ideas()
        .into_iter()
        .map(to_idea_card)
        .collect::<Vec<_>>();
    let message = if total == 0 {
        "No ideas available.".to_string()
    } else {
        format!("Showing {} of {} idea(s).", items.len(), total)
    };

    IdeasResponse {
        items,
        total: u32::try_from(total).unwrap_or(u32::MAX),
        applied_track: selected.map(|track| track.label().to_string()),
        message,
    }
}

fn parse_track(track: Option<String>) -> Result<Option<Track>, String> {
    match track {
        Some(raw) if !raw.trim().is_empty() => raw
            .parse::<Track>()
            .map(Some)
            .map_err(|err| err.to_string()),
        _ => Ok(None),
    }
}

fn to_idea_card(idea: &IdeaRecord) -> IdeaCard {
    IdeaCard {
        header: idea.header.clone(),
        description: idea.description.clone(),
        theme: idea.theme.clone(),
        platform: idea.platform.clone(),
        accent: accent_label(idea.accent()).to_string(),
        contributor: idea.contributor_or_anonymous().to_string(),
        reviewer: idea.reviewer.clone(),
        references: idea.references.clone(),
        reference_url: ReferenceLink::resolve(&idea.references).href().to_string(),
    }
}

fn accent_label(accent: ThemeAccent) -> &'static str {
    match accent {
        ThemeAccent::DeFi => "defi",
        ThemeAccent::Social => "social",
        ThemeAccent::General => "general",
    }
}

fn to_sponsor_entry(sponsor: &Sponsor) -> SponsorEntry {
    SponsorEntry {
        name: sponsor.name.to_string(),
        logo: sponsor.logo.map(str::to_string),
        website: sponsor.website.map(str::to_string),
        resources: sponsor
            .resources()
            .map(|resource| SponsorResourceItem {
                title: resource.title.to_string(),
                url: resource.url.to_string(),
                kind: resource.kind.as_str().to_string(),
                description: resource.description.map(str::to_string),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        boot_log_lines, core_version, extract_reference_url, ideas_load_file, init_logging,
        list_sponsor_resources, list_tracks, ping,
    };

    const SNAPSHOT: &str = r#"[
        {"Idea Header (10 words max)": "Vault agent", "Theme": "DeFi Agents",
         "Reference Links and Examples": "see example.org", "Idea Contributor": "alice"},
        {"Idea Header (10 words max)": "Arena bot", "Theme": "Gaming"},
        {"Idea Header (10 words max)": "Yield scout", "Theme": "defi"}
    ]"#;

    fn write_snapshot(contents: &str) -> (tempfile::TempDir, String) {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("ideas.json");
        std::fs::write(&path, contents).expect("write snapshot");
        let path = path.to_str().expect("utf-8 temp path").to_string();
        (dir, path)
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(error.contains("unsupported log level"));
    }

    #[test]
    fn tracks_are_listed_in_display_order() {
        assert_eq!(
            list_tracks(),
            ["Social Agents", "DeFi Agents", "Agent Infra", "Agent Aggregators"]
        );
    }

    #[test]
    fn ideas_load_file_filters_by_track_slug() {
        let (_dir, path) = write_snapshot(SNAPSHOT);
        let response = ideas_load_file(path, Some("defi-agents".to_string()));

        assert_eq!(response.total, 3);
        assert_eq!(response.applied_track.as_deref(), Some("DeFi Agents"));
        let headers = response
            .items
            .iter()
            .map(|card| card.header.as_str())
            .collect::<Vec<_>>();
        assert_eq!(headers, ["Vault agent", "Yield scout"]);
        assert_eq!(response.items[0].reference_url, "https://example.org");
        assert_eq!(response.items[0].accent, "defi");
        assert_eq!(response.items[1].contributor, "Anonymous");
        assert_eq!(response.items[1].reference_url, "#");
    }

    #[test]
    fn ideas_load_file_without_track_returns_all() {
        let (_dir, path) = write_snapshot(SNAPSHOT);
        let response = ideas_load_file(path, None);
        assert_eq!(response.items.len(), 3);
        assert_eq!(response.applied_track, None);
        assert_eq!(response.message, "Showing 3 of 3 idea(s).");
    }

    #[test]
    fn ideas_load_file_missing_snapshot_is_empty_not_error() {
        let (_dir, path) = write_snapshot(SNAPSHOT);
        let response = ideas_load_file(format!("{path}.missing"), None);
        assert!(response.items.is_empty());
        assert_eq!(response.message, "No ideas available.");
    }

    #[test]
    fn ideas_load_file_rejects_unknown_track() {
        let (_dir, path) = write_snapshot(SNAPSHOT);
        let response = ideas_load_file(path, Some("gaming".to_string()));
        assert!(response.items.is_empty());
        assert!(response.message.contains("unknown track"));
    }

    #[test]
    fn extract_reference_url_returns_placeholder_without_link() {
        assert_eq!(
            extract_reference_url("check out https://example.com/page for more".to_string()),
            "https://example.com/page"
        );
        assert_eq!(extract_reference_url("no link here".to_string()), "#");
    }

    #[test]
    fn sponsor_resources_can_be_narrowed() {
        assert_eq!(list_sponsor_resources(None).len(), 2);
        let lit = list_sponsor_resources(Some("Lit Protocol".to_string()));
        assert_eq!(lit.len(), 1);
        assert_eq!(lit[0].resources.len(), 4);
        assert_eq!(lit[0].resources[2].kind, "repo");
    }

    #[test]
    fn boot_log_lines_are_reproducible_with_seed() {
        let first = boot_log_lines(Some(11));
        assert_eq!(first.len(), 5);
        assert_eq!(first, boot_log_lines(Some(11)));
    }
}
