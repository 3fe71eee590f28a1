//! Error types for project configuration and source loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while configuring a project or reading its sources.
#[derive(Debug, Error)]
pub enum ProjectError {
    /// IO error while reading a source or configuration file.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error while walking a directory tree.
    #[error("failed to walk {}: {source}", .root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// The project root does not exist or is not a directory.
    #[error("project root {} is not a directory", .0.display())]
    MissingRoot(PathBuf),

    /// A remapping that is not `prefix=target` or `context:prefix=target`.
    #[error("invalid remapping `{0}`: expected `prefix=target`")]
    InvalidRemapping(String),

    /// Editor settings that are not valid JSON for the expected shape.
    #[cfg(feature = "serde")]
    #[error("invalid settings: {0}")]
    Settings(#[from] serde_json::Error),
}

impl ProjectError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// A file the loader has no entry for.
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::io(
            path,
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such source"),
        )
    }
}
