//! Core logic for the hackathon idea board.
//! Front ends (CLI, FFI) hold no filtering or extraction rules of their own.

pub mod boot;
pub mod config;
pub mod filter;
pub mod logging;
pub mod model;
pub mod reference;
pub mod resources;
pub mod service;
pub mod site;
pub mod source;

pub use boot::{BootScript, BootStep};
pub use config::{BoardConfig, ConfigError};
pub use filter::track_filter::{filter_ideas, theme_matches_track, TrackSelection};
pub use logging::{
    default_log_level, init_logging, init_stderr_logging, logging_status, LogTarget, LoggingError,
};
pub use model::idea::{IdeaRecord, ThemeAccent};
pub use model::track::{Track, UnknownTrack};
pub use reference::extract::{extract_url, ReferenceLink, NO_LINK_PLACEHOLDER};
pub use resources::directory::{filter_sponsors, sponsors, Resource, ResourceKind, Sponsor};
pub use service::board_service::{IdeaBoard, ReferenceView};
pub use source::{FileIdeaSource, HttpIdeaSource, IdeaSource, SourceError, SourceResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
