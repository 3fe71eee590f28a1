//! # solidity-assist
//!
//! Editor intelligence for Solidity: member and variable completion and
//! go-to-definition, computed from statically parsed source text.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → Completion front door, catalogs, goto-definition
//!   ↓
//! hir       → Symbol table, scopes, dot-chain resolution
//!   ↓
//! project   → Configuration, remappings, import resolution, loaders
//!   ↓
//! parser    → Logos lexer, declaration parser, dot-chain parser
//!   ↓
//! base      → Primitives (FileId, TextRange, LineIndex)
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → project → hir → ide)
// ============================================================================

/// Foundation types: FileId, TextRange, line/column conversion
pub mod base;

/// Parser: Logos lexer, recursive-descent declaration parser, dot chains
pub mod parser;

/// Project management: configuration, remappings, import resolution
pub mod project;

/// High-level IR: symbol table and resolution cascade
pub mod hir;

/// IDE features: completion, goto-definition
pub mod ide;

// Re-export foundation types
pub use base::{FileId, LineCol, LineIndex, TextRange, TextSize};

// Re-export the request entry points
pub use ide::{Analysis, AnalysisHost, CompletionItem, CompletionKind, GotoResult, GotoTarget};
pub use project::{FsLoader, MemoryLoader, ProjectConfig, SourceLoader};
