//! IDE features: High-level APIs for editor requests.
//!
//! This module sits between the semantic model (HIR) and an editor protocol
//! server. Each function corresponds to one request.
//!
//! ## Design Principles
//!
//! 1. **Request scoped**: every request builds its own symbol table
//! 2. **No LSP types**: uses our own types, converted at the protocol boundary
//! 3. **Never fails**: problems only mean fewer results
//!
//! ## Usage
//!
//! The recommended way to use this module is through `AnalysisHost`:
//!
//! ```ignore
//! use solidity_assist::ide::AnalysisHost;
//!
//! let host = AnalysisHost::new(ProjectConfig::new("/project"));
//! let analysis = host.analysis("/project/src/Token.sol", text);
//! let items = analysis.completions(LineCol::new(12, 9));
//! ```

mod analysis;
mod catalog;
mod completion;
mod goto;
mod import_paths;
pub mod text_utils;

pub use analysis::{Analysis, AnalysisHost};
pub use catalog::{
    elementary_types, global_function_items, global_variable_items, keyword_items, static_items,
    type_items, unit_items,
};
pub use completion::{
    CompletionItem, CompletionKind, InsertTextFormat, Trigger, classify_trigger, completions,
    document_completion_items, member_item,
};
pub use goto::{GotoResult, GotoTarget, goto_definition};
pub use import_paths::import_path_completions;
pub use text_utils::{dot_trigger_column, word_at, word_before_trimming_spaces};
