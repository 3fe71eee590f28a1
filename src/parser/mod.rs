//! Declaration-level parser for Solidity
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with SyntaxKind
//!     ↓
//! Parser → SourceUnit (contracts, structs, enums, imports)
//!     ↓
//! HIR → Symbol table
//! ```
//!
//! The dot-chain parser works on a single line of raw text instead of tokens,
//! since the text before the cursor is usually an incomplete statement.

#[allow(clippy::module_inception)]
mod parser;

pub mod ast;
pub mod dot_chain;
mod lexer;
mod syntax_kind;

pub use ast::*;
pub use dot_chain::{ChainCursor, ChainNode, DotChain, parse_dot_chain};
pub use lexer::{Lexer, Token, tokenize};
pub use parser::{Parse, ParseError, SyntaxError, parse};
pub use syntax_kind::SyntaxKind;
