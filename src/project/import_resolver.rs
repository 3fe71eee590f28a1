//! Import path resolution in both directions.
//!
//! Forward: an import string from a source file becomes an absolute path.
//! Reverse: an absolute path becomes the import string a document would use.
//! Both apply the same rules in the same order:
//!
//! 1. dependency packages under `<root>/<dependencies_dir>`
//! 2. remappings (configured first, then `remappings.txt`)
//! 3. paths relative to the importing document

use super::config::ProjectConfig;
use super::loader::SourceLoader;
use super::paths::{normalize, relative_path, to_slash};
use super::remapping::{Remapping, parse_remappings};
use crate::base::constants::REMAPPINGS_FILE;
use std::path::{Path, PathBuf};

/// Resolves imports for one request.
pub struct ImportResolver<'a> {
    root: PathBuf,
    dependencies_dir: PathBuf,
    contracts_dir: String,
    remappings: Vec<Remapping>,
    loader: &'a dyn SourceLoader,
}

impl<'a> ImportResolver<'a> {
    /// Create a resolver for requests on `document`.
    pub fn new(config: &ProjectConfig, document: &Path, loader: &'a dyn SourceLoader) -> Self {
        let root = normalize(&config.effective_root(document));
        let mut remappings = config.remappings.clone();

        let remappings_file = root.join(REMAPPINGS_FILE);
        if loader.is_file(&remappings_file) {
            match loader.read_to_string(&remappings_file) {
                Ok(text) => remappings.extend(parse_remappings(&text)),
                Err(err) => tracing::debug!("ignoring remappings file: {}", err),
            }
        }

        Self {
            dependencies_dir: normalize(&root.join(&config.dependencies_dir)),
            contracts_dir: config.contracts_dir.clone(),
            root,
            remappings,
            loader,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn remappings(&self) -> &[Remapping] {
        &self.remappings
    }

    pub fn loader(&self) -> &'a dyn SourceLoader {
        self.loader
    }

    /// Resolve an import string written in `importer`.
    pub fn resolve(&self, import: &str, importer: &Path) -> Option<PathBuf> {
        let resolved = self
            .resolve_dependency(import)
            .or_else(|| self.resolve_remapping(import, importer))
            .or_else(|| self.resolve_relative(import, importer));
        tracing::trace!(import, resolved = ?resolved, "resolved import");
        resolved
    }

    /// `pkg/rest.sol` where `<dependencies_dir>/pkg` exists. The package's
    /// contracts directory is preferred when the file exists there.
    fn resolve_dependency(&self, import: &str) -> Option<PathBuf> {
        if import.starts_with('.') {
            return None;
        }
        let (package, rest) = import.split_once('/')?;
        let package_dir = self.dependencies_dir.join(package);
        if !self.loader.is_dir(&package_dir) {
            return None;
        }

        if !self.contracts_dir.is_empty() {
            let preferred = normalize(&package_dir.join(&self.contracts_dir).join(rest));
            if self.loader.is_file(&preferred) {
                return Some(preferred);
            }
        }
        Some(normalize(&package_dir.join(rest)))
    }

    fn resolve_remapping(&self, import: &str, importer: &Path) -> Option<PathBuf> {
        self.remappings
            .iter()
            .filter(|remapping| remapping.applies_in(importer, &self.root))
            .find_map(|remapping| remapping.resolve(import, &self.root))
    }

    /// `./` and `../` imports resolve against the importer's directory.
    /// Other paths try the importer's directory, then the root.
    fn resolve_relative(&self, import: &str, importer: &Path) -> Option<PathBuf> {
        let importer_dir = importer.parent().unwrap_or(&self.root);
        let beside = normalize(&importer_dir.join(import));
        if import.starts_with("./") || import.starts_with("../") || self.loader.is_file(&beside) {
            return Some(beside);
        }
        Some(normalize(&self.root.join(import)))
    }

    /// The import string `document` would use to import `file`.
    pub fn import_path_for(&self, file: &Path, document: &Path) -> String {
        if let Ok(rest) = file.strip_prefix(&self.dependencies_dir) {
            return to_slash(rest);
        }

        if let Some(import) = self
            .remappings
            .iter()
            .filter(|remapping| remapping.applies_in(document, &self.root))
            .find_map(|remapping| remapping.import_for(file, &self.root))
        {
            return import;
        }

        let document_dir = document.parent().unwrap_or(&self.root);
        let relative = to_slash(&relative_path(document_dir, file));
        if relative.starts_with("../") {
            relative
        } else {
            format!("./{relative}")
        }
    }
}
