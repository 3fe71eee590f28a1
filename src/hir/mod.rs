//! High-level IR (HIR): the per-request semantic model.
//!
//! A [`SymbolTable`] is built from scratch for every completion or
//! definition request and is read-only afterwards. Nothing is cached across
//! requests.
//!
//! ## Key Types
//!
//! - [`TypeReference`] - A declared type (scalar, array or mapping)
//! - [`ContractSymbol`] and friends - Declarations lowered from the AST
//! - [`SymbolTable`] - Contracts, inheritance and file-level types
//! - [`Scope`] - Variables visible at an offset inside a function
//! - [`Resolver`] - Evaluates dot chains into [`Member`]s
//!
//! ## Layers
//!
//! ```text
//! document text + imports
//!     │
//!     ▼
//! SymbolTableBuilder        ← parse and lower every reachable file
//!     │
//!     ▼
//! SymbolTable               ← lineages flattened on demand
//!     │
//!     ▼
//! scope_at(function, off)   ← locals before the offset
//!     │
//!     ▼
//! Resolver::resolve(chain)  ← root lookup, member descent
//! ```

mod builder;
mod builtins;
mod resolve;
mod scope;
mod source;
mod symbols;
mod table;
mod types;

pub use builder::SymbolTableBuilder;
pub use builtins::{
    ABI_MEMBERS, ADDRESS_MEMBERS, ARRAY_MEMBERS, BLOCK_MEMBERS, BuiltinKind, BuiltinMember,
    GLOBAL_NAMESPACES, MSG_MEMBERS, TX_MEMBERS, global_namespace,
};
pub use resolve::{Member, Resolver, Target};
pub use scope::{Scope, scope_at};
pub use source::SourceFile;
pub use symbols::{
    ContractSymbol, EnumSymbol, EnumValue, EventSymbol, FunctionSymbol, StructSymbol,
    UsingSymbol, VariableKind, VariableSymbol,
};
pub use table::{ContractId, ResolvedImport, SymbolTable};
pub use types::TypeReference;
