//! Shared test helpers

pub mod analysis_helpers;
pub mod source_fixtures;
