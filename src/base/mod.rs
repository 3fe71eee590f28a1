//! Foundation types shared by every layer.
//!
//! - [`FileId`] - Handle for a source file loaded during one request
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`LineCol`], [`LineIndex`] - Line/column conversion
//! - Domain constants (file extension, default directories)
//!
//! This module has NO dependencies on other modules of the crate.

pub mod constants;
mod file_id;
mod span;

pub use file_id::FileId;
pub use span::{LineCol, LineIndex, TextRange, TextSize};

// Re-export text-size types for convenience
pub use text_size;
