//! Source loading.
//!
//! The engine never touches the file system directly; everything goes
//! through a [`SourceLoader`]. [`FsLoader`] reads from disk and
//! [`MemoryLoader`] serves a fixed set of in-memory files.

use super::error::ProjectError;
use crate::base::constants::SOLIDITY_EXT;
use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Read access to Solidity sources.
pub trait SourceLoader {
    fn read_to_string(&self, path: &Path) -> Result<String, ProjectError>;

    fn is_file(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    /// All `.sol` files under `root`, sorted.
    fn list_sources(&self, root: &Path) -> Result<Vec<PathBuf>, ProjectError>;
}

fn is_solidity_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == SOLIDITY_EXT)
}

/// Loads sources from the local file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLoader;

impl SourceLoader for FsLoader {
    fn read_to_string(&self, path: &Path) -> Result<String, ProjectError> {
        std::fs::read_to_string(path).map_err(|err| ProjectError::io(path, err))
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_sources(&self, root: &Path) -> Result<Vec<PathBuf>, ProjectError> {
        if !root.is_dir() {
            return Err(ProjectError::MissingRoot(root.to_path_buf()));
        }

        let mut paths = Vec::new();
        for entry in WalkDir::new(root).follow_links(true) {
            match entry {
                Ok(entry) => {
                    if entry.file_type().is_file() && is_solidity_file(entry.path()) {
                        paths.push(entry.into_path());
                    }
                }
                Err(err) => {
                    let err = ProjectError::Walk {
                        root: root.to_path_buf(),
                        source: err,
                    };
                    tracing::warn!("{}", err);
                }
            }
        }
        paths.sort();
        Ok(paths)
    }
}

/// Serves sources from memory. Paths are compared as given.
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    files: FxHashMap<PathBuf, String>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, text: impl Into<String>) {
        self.files.insert(path.into(), text.into());
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        self.insert(path, text);
        self
    }

    pub fn remove(&mut self, path: &Path) -> Option<String> {
        self.files.remove(path)
    }

    pub fn get(&self, path: &Path) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl SourceLoader for MemoryLoader {
    fn read_to_string(&self, path: &Path) -> Result<String, ProjectError> {
        self.get(path)
            .map(str::to_string)
            .ok_or_else(|| ProjectError::not_found(path))
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.files
            .keys()
            .any(|file| file != path && file.starts_with(path))
    }

    fn list_sources(&self, root: &Path) -> Result<Vec<PathBuf>, ProjectError> {
        let mut paths: Vec<_> = self
            .files
            .keys()
            .filter(|path| path.starts_with(root) && is_solidity_file(path))
            .cloned()
            .collect();
        paths.sort();
        Ok(paths)
    }
}

/// Open editor buffers layered over another loader.
pub struct OverlayLoader<'a> {
    overlay: &'a FxHashMap<PathBuf, String>,
    base: &'a dyn SourceLoader,
}

impl<'a> OverlayLoader<'a> {
    pub fn new(overlay: &'a FxHashMap<PathBuf, String>, base: &'a dyn SourceLoader) -> Self {
        Self { overlay, base }
    }
}

impl SourceLoader for OverlayLoader<'_> {
    fn read_to_string(&self, path: &Path) -> Result<String, ProjectError> {
        match self.overlay.get(path) {
            Some(text) => Ok(text.clone()),
            None => self.base.read_to_string(path),
        }
    }

    fn is_file(&self, path: &Path) -> bool {
        self.overlay.contains_key(path) || self.base.is_file(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.base.is_dir(path)
            || self
                .overlay
                .keys()
                .any(|file| file != path && file.starts_with(path))
    }

    fn list_sources(&self, root: &Path) -> Result<Vec<PathBuf>, ProjectError> {
        let mut paths = self.base.list_sources(root).unwrap_or_else(|err| {
            tracing::debug!("listing {} failed: {}", root.display(), err);
            Vec::new()
        });
        paths.extend(
            self.overlay
                .keys()
                .filter(|path| path.starts_with(root) && is_solidity_file(path))
                .cloned(),
        );
        paths.sort();
        paths.dedup();
        Ok(paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_loader() {
        let loader = MemoryLoader::new()
            .with_file("/p/src/A.sol", "contract A {}")
            .with_file("/p/lib/x/B.sol", "contract B {}")
            .with_file("/p/README.md", "");

        assert!(loader.is_file(Path::new("/p/src/A.sol")));
        assert!(loader.is_dir(Path::new("/p/lib/x")));
        assert!(!loader.is_dir(Path::new("/p/src/A.sol")));
        assert_eq!(
            loader.list_sources(Path::new("/p")).unwrap(),
            vec![PathBuf::from("/p/lib/x/B.sol"), PathBuf::from("/p/src/A.sol")]
        );
        assert!(matches!(
            loader.read_to_string(Path::new("/p/missing.sol")),
            Err(ProjectError::Io { .. })
        ));
    }

    #[test]
    fn test_overlay_prefers_open_buffers() {
        let base = MemoryLoader::new().with_file("/p/A.sol", "old");
        let mut overlay = FxHashMap::default();
        overlay.insert(PathBuf::from("/p/A.sol"), "new".to_string());
        overlay.insert(PathBuf::from("/p/B.sol"), "unsaved".to_string());

        let loader = OverlayLoader::new(&overlay, &base);
        assert_eq!(loader.read_to_string(Path::new("/p/A.sol")).unwrap(), "new");
        assert_eq!(loader.list_sources(Path::new("/p")).unwrap().len(), 2);
    }

    #[test]
    fn test_fs_loader_lists_sources() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("src/nested")).unwrap();
        std::fs::write(dir.path().join("src/A.sol"), "contract A {}").unwrap();
        std::fs::write(dir.path().join("src/nested/B.sol"), "contract B {}").unwrap();
        std::fs::write(dir.path().join("src/notes.txt"), "").unwrap();

        let sources = FsLoader.list_sources(dir.path()).unwrap();
        assert_eq!(sources.len(), 2);
        assert!(sources.iter().all(|p| p.extension().unwrap() == "sol"));
        assert!(FsLoader.list_sources(&dir.path().join("missing")).is_err());
    }
}
