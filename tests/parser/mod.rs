//! Parser tests
//!
//! Tests for:
//! - Declaration parsing and error recovery
//! - Dot-chain parsing

pub mod tests_declarations;
pub mod tests_dot_chain;
