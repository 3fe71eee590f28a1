//! Project configuration, source loading and import resolution.

mod config;
mod error;
mod import_resolver;
mod loader;
pub mod paths;
mod remapping;

pub use config::ProjectConfig;
pub use error::ProjectError;
pub use import_resolver::ImportResolver;
pub use loader::{FsLoader, MemoryLoader, OverlayLoader, SourceLoader};
pub use remapping::{Remapping, parse_remappings};
