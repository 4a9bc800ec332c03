//! Board use-case services.
//!
//! # Responsibility
//! - Orchestrate source fetches, filtering and reference lookup.
//! - Keep CLI/FFI layers free of fetch error policy.

pub mod board_service;
