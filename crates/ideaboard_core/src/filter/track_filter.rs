//! Track-based idea filter.
//!
//! # Responsibility
//! - Match free-text idea themes against a selected track label.
//! - Return visible ideas in their original order.
//!
//! # Invariants
//! - Matching is case-insensitive and ignores surrounding whitespace.
//! - A theme matches when either string contains the other. The sheet is
//!   labelled inconsistently, so this must not be tightened to equality.
//! - No selection means no filtering.
//! - Output order equals input order.

use crate::model::idea::IdeaRecord;
use crate::model::track::Track;
use log::debug;

/// Current track choice on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackSelection {
    /// "All Tracks": nothing filtered.
    #[default]
    All,
    Track(Track),
}

impl TrackSelection {
    /// Returns the label to match against, `None` for [`TrackSelection::All`].
    pub fn label(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Track(track) => Some(track.label()),
        }
    }
}

impl From<Option<Track>> for TrackSelection {
    fn from(value: Option<Track>) -> Self {
        value.map_or(Self::All, Self::Track)
    }
}

/// Bidirectional, case-insensitive substring test between theme and label.
///
/// A blank theme is contained in every label and therefore always matches.
pub fn theme_matches_track(theme: &str, track_label: &str) -> bool {
    let theme = theme.trim().to_lowercase();
    let label = track_label.trim().to_lowercase();
    theme.contains(label.as_str()) || label.contains(theme.as_str())
}

/// Filters ideas by an optional track label.
pub fn filter_ideas<'a>(ideas: &'a [IdeaRecord], track_label: Option<&str>) -> Vec<&'a IdeaRecord> {
    let visible = match track_label {
        Some(label) => ideas
            .iter()
            .filter(|idea| theme_matches_track(&idea.theme, label))
            .collect::<Vec<_>>(),
        None => ideas.iter().collect(),
    };

    debug!(
        "event=ideas_filter module=filter status=ok track={} total={} visible={}",
        track_label.unwrap_or("all"),
        ideas.len(),
        visible.len()
    );
    visible
}

/// Same as [`filter_ideas`], driven by a typed selection.
pub fn filter_by_selection(ideas: &[IdeaRecord], selection: TrackSelection) -> Vec<&IdeaRecord> {
    filter_ideas(ideas, selection.label())
}
