//! Flutter bridge surface for the idea board core.

pub mod api;
