//! IDE tests
//!
//! Tests for:
//! - Completion triggers and item order
//! - Go-to-definition
//! - Import path suggestions on disk

pub mod tests_completion;
pub mod tests_goto;
pub mod tests_import_paths;
