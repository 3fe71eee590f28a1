//! Project configuration threaded into every request.

use super::remapping::Remapping;
use crate::base::constants::{DEFAULT_CONTRACTS_DIR, DEFAULT_DEPENDENCIES_DIR};
use std::path::{Path, PathBuf};

#[cfg(feature = "serde")]
use super::error::ProjectError;

/// Where sources live and how imports are rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    /// Project root; may be empty when the editor opened a single file
    pub root: PathBuf,
    /// Workspace folders that can stand in for the root
    pub workspace_folders: Vec<PathBuf>,
    /// Directory under the root holding dependency packages
    pub dependencies_dir: String,
    /// Directory inside a package holding its sources
    pub contracts_dir: String,
    /// Configured remappings, in priority order
    pub remappings: Vec<Remapping>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::new(),
            workspace_folders: Vec::new(),
            dependencies_dir: DEFAULT_DEPENDENCIES_DIR.to_string(),
            contracts_dir: DEFAULT_CONTRACTS_DIR.to_string(),
            remappings: Vec::new(),
        }
    }
}

impl ProjectConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn with_dependencies_dir(mut self, dir: impl Into<String>) -> Self {
        self.dependencies_dir = dir.into();
        self
    }

    pub fn with_contracts_dir(mut self, dir: impl Into<String>) -> Self {
        self.contracts_dir = dir.into();
        self
    }

    pub fn with_remapping(mut self, remapping: Remapping) -> Self {
        self.remappings.push(remapping);
        self
    }

    pub fn with_workspace_folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.workspace_folders.push(folder.into());
        self
    }

    /// The root used for a request on `document`.
    ///
    /// A document outside the configured root is served by the first
    /// workspace folder containing it. Failing that, the configured root is
    /// kept, or the document's own directory when no root is configured.
    pub fn effective_root(&self, document: &Path) -> PathBuf {
        let has_root = !self.root.as_os_str().is_empty();
        if has_root && document.starts_with(&self.root) {
            return self.root.clone();
        }
        if let Some(folder) = self
            .workspace_folders
            .iter()
            .find(|folder| document.starts_with(folder))
        {
            return folder.clone();
        }
        if has_root {
            return self.root.clone();
        }
        document
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default()
    }

    /// Build a configuration from the editor's `solidity` settings object.
    ///
    /// Accepts either the full settings (`{"solidity": {...}}`) or the inner
    /// object. Missing keys keep their defaults.
    #[cfg(feature = "serde")]
    pub fn from_settings_json(root: impl Into<PathBuf>, json: &str) -> Result<Self, ProjectError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let inner = value.get("solidity").cloned().unwrap_or(value);
        let settings: settings::SoliditySettings = serde_json::from_value(inner)?;

        let mut config = Self::new(root);
        if let Some(dir) = settings.package_default_dependencies_directory {
            config.dependencies_dir = dir;
        }
        if let Some(dir) = settings.package_default_dependencies_contracts_directory {
            config.contracts_dir = dir;
        }
        for remapping in &settings.remappings {
            config.remappings.push(Remapping::parse(remapping)?);
        }
        Ok(config)
    }
}

#[cfg(feature = "serde")]
mod settings {
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub(super) struct SoliditySettings {
        pub package_default_dependencies_directory: Option<String>,
        pub package_default_dependencies_contracts_directory: Option<String>,
        #[serde(default)]
        pub remappings: Vec<String>,
    }
}
