//! Idea filtering entry points.
//!
//! # Responsibility
//! - Decide which ideas are visible for a track selection.
//! - Keep the loose theme matching rule in one place.

pub mod track_filter;
