//! Reference link extraction.
//!
//! # Responsibility
//! - Pull one openable URL out of human-entered reference notes.

pub mod extract;
