//! Idea board view state.
//!
//! # Responsibility
//! - Load the idea list once per board and remember it.
//! - Apply the selected track and expose the visible ideas.
//! - Track which idea's references are open.
//!
//! # Invariants
//! - Fetch failures are logged and leave the list empty; they are never
//!   returned to the caller.
//! - `is_loading()` is false after `load` returns, success or not.
//! - `open_reference` indexes into the visible list, not the full list.

use crate::filter::track_filter::{filter_by_selection, TrackSelection};
use crate::model::idea::IdeaRecord;
use crate::model::track::Track;
use crate::reference::extract::ReferenceLink;
use crate::source::IdeaSource;
use log::{debug, error, info};

/// Skeleton cards shown while the first fetch is in flight.
pub const LOADING_PLACEHOLDER_CARDS: usize = 6;

/// Open reference dialog content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceView {
    /// Raw reference notes as entered in the sheet.
    pub text: String,
    pub link: ReferenceLink,
}

/// State of one idea board page.
#[derive(Debug, Clone)]
pub struct IdeaBoard {
    ideas: Vec<IdeaRecord>,
    loading: bool,
    selection: TrackSelection,
    open_reference: Option<ReferenceView>,
}

impl Default for IdeaBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl IdeaBoard {
    /// Creates an empty board in loading state.
    pub fn new() -> Self {
        Self {
            ideas: Vec::new(),
            loading: true,
            selection: TrackSelection::All,
            open_reference: None,
        }
    }

    /// Creates a loaded board from already fetched ideas.
    pub fn with_ideas(ideas: Vec<IdeaRecord>) -> Self {
        Self {
            ideas,
            loading: false,
            ..Self::new()
        }
    }

    /// Fetches ideas from `source`, replacing the current list.
    ///
    /// Returns the number of ideas loaded (zero on failure).
    pub fn load<S: IdeaSource + ?Sized>(&mut self, source: &S) -> usize {
        self.loading = true;
        match source.fetch_ideas() {
            Ok(ideas) => {
                debug!(
                    "event=ideas_loaded module=service themes={:?}",
                    ideas.iter().map(|idea| idea.theme.as_str()).collect::<Vec<_>>()
                );
                self.ideas = ideas;
            }
            Err(err) => {
                error!(
                    "event=ideas_fetch module=service status=error source={} error={}",
                    source.source_name(),
                    err
                );
                self.ideas = Vec::new();
            }
        }
        self.loading = false;
        self.open_reference = None;
        info!(
            "event=board_ready module=service status=ok count={}",
            self.ideas.len()
        );
        self.ideas.len()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Number of skeleton cards to draw in place of ideas.
    pub fn placeholder_count(&self) -> usize {
        if self.loading {
            LOADING_PLACEHOLDER_CARDS
        } else {
            0
        }
    }

    /// All fetched ideas, unfiltered.
    pub fn ideas(&self) -> &[IdeaRecord] {
        &self.ideas
    }

    /// Selects a track; `None` shows every track.
    pub fn select_track(&mut self, track: Option<Track>) {
        self.selection = TrackSelection::from(track);
        debug!(
            "event=track_select module=service track={}",
            self.selection.label().unwrap_or("all")
        );
    }

    pub fn selected_track(&self) -> Option<Track> {
        match self.selection {
            TrackSelection::All => None,
            TrackSelection::Track(track) => Some(track),
        }
    }

    /// Ideas matching the current selection, in fetch order.
    pub fn visible_ideas(&self) -> Vec<&IdeaRecord> {
        filter_by_selection(&self.ideas, self.selection)
    }

    /// Opens the reference dialog for the visible idea at `index`.
    ///
    /// Returns `None` when the index is out of range or the idea has no
    /// reference text.
    pub fn open_reference(&mut self, index: usize) -> Option<&ReferenceView> {
        let idea = self.visible_ideas().get(index).copied()?;
        if !idea.has_references() {
            return None;
        }

        let view = ReferenceView {
            text: idea.references.clone(),
            link: ReferenceLink::resolve(&idea.references),
        };
        self.open_reference = Some(view);
        self.open_reference.as_ref()
    }

    pub fn opened_reference(&self) -> Option<&ReferenceView> {
        self.open_reference.as_ref()
    }

    pub fn close_reference(&mut self) {
        self.open_reference = None;
    }
}
