//! Sponsor resource directory.
//!
//! # Responsibility
//! - Hold the static sponsor/resource links shown on the resources page.
//! - Filter the directory by sponsor.
//!
//! # Invariants
//! - Directory data is compiled in and immutable.
//! - Declaration order is display order.

pub mod directory;
