//! Domain model for the idea board.
//!
//! # Responsibility
//! - Define the idea record exactly as the spreadsheet API delivers it.
//! - Define the fixed track enumeration used by the filter engine.
//!
//! # Invariants
//! - Idea records are never mutated after decoding.
//! - Identity of an idea is its position in the fetched list.

pub mod idea;
pub mod track;
