//! HIR tests
//!
//! Tests for:
//! - Symbol table building across imports
//! - Inheritance flattening
//! - Scope resolution
//! - Dot-chain resolution

pub mod tests_resolution;
pub mod tests_symbol_table;
