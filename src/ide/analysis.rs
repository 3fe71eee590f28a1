//! AnalysisHost and Analysis: entry points for editor requests.
//!
//! The `AnalysisHost` owns the project configuration, the source loader and
//! the open editor buffers. Every request gets its own `Analysis`, built
//! from scratch for one document; nothing is shared between requests.
//!
//! ## Usage
//!
//! ```ignore
//! let mut host = AnalysisHost::new(ProjectConfig::new("/project"));
//!
//! // Open buffers shadow the files on disk
//! host.set_file_content("/project/src/Token.sol", text);
//!
//! let analysis = host.analysis("/project/src/Token.sol", text);
//! let items = analysis.completions(LineCol::new(10, 12));
//! let targets = analysis.goto_definition(LineCol::new(4, 8));
//! ```

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

use crate::base::LineCol;
use crate::hir::{SymbolTable, SymbolTableBuilder};
use crate::project::{FsLoader, ImportResolver, OverlayLoader, ProjectConfig, SourceLoader};

use super::catalog::static_items;
use super::completion::{self, CompletionItem, Trigger, classify_trigger};
use super::goto::{self, GotoResult};
use super::import_paths::import_path_completions;

/// Owns the state shared by every request.
pub struct AnalysisHost {
    config: ProjectConfig,
    loader: Box<dyn SourceLoader>,
    /// Open editor buffers, by absolute path
    overlay: FxHashMap<PathBuf, String>,
}

impl AnalysisHost {
    /// A host reading sources from disk.
    pub fn new(config: ProjectConfig) -> Self {
        Self::with_loader(config, FsLoader)
    }

    pub fn with_loader(config: ProjectConfig, loader: impl SourceLoader + 'static) -> Self {
        Self {
            config,
            loader: Box::new(loader),
            overlay: FxHashMap::default(),
        }
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ProjectConfig) {
        self.config = config;
    }

    /// Record the current text of an open buffer.
    pub fn set_file_content(&mut self, path: impl Into<PathBuf>, text: impl Into<String>) {
        self.overlay.insert(path.into(), text.into());
    }

    /// Forget an open buffer; the loader's copy is used again.
    pub fn remove_file(&mut self, path: &Path) {
        self.overlay.remove(path);
    }

    pub fn has_file(&self, path: &Path) -> bool {
        self.overlay.contains_key(path)
    }

    fn sources(&self) -> OverlayLoader<'_> {
        OverlayLoader::new(&self.overlay, self.loader.as_ref())
    }

    /// Build the request state for `path`, whose current text is `text`.
    pub fn analysis(&self, path: impl Into<PathBuf>, text: &str) -> Analysis<'_> {
        let path = path.into();
        let sources = self.sources();
        let resolver = ImportResolver::new(&self.config, &path, &sources);
        let table = SymbolTableBuilder::new(&resolver).build(&path, text);
        Analysis {
            host: self,
            path,
            table,
        }
    }
}

/// Request-scoped view of one document and everything it imports.
pub struct Analysis<'a> {
    host: &'a AnalysisHost,
    path: PathBuf,
    table: SymbolTable,
}

impl Analysis<'_> {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn table(&self) -> &SymbolTable {
        &self.table
    }

    /// Contextual suggestions followed by the static catalogs.
    ///
    /// Never fails: a broken document or an unresolvable chain only reduces
    /// the contextual part.
    pub fn completions(&self, position: LineCol) -> Vec<CompletionItem> {
        let mut items = if self.is_import_trigger(position) {
            let sources = self.host.sources();
            let resolver = ImportResolver::new(&self.host.config, &self.path, &sources);
            import_path_completions(&resolver, &self.path)
        } else {
            completion::completions(&self.table, position)
        };
        items.extend(static_items());
        items
    }

    fn is_import_trigger(&self, position: LineCol) -> bool {
        self.table
            .entry()
            .and_then(|entry| entry.line(position.line))
            .is_some_and(|line| classify_trigger(line, position.col as usize) == Trigger::Import)
    }

    pub fn goto_definition(&self, position: LineCol) -> GotoResult {
        goto::goto_definition(&self.table, position)
    }

    /// Declarations of this document alone; see
    /// [`completion::document_completion_items`].
    pub fn document_completion_items(&self) -> Vec<CompletionItem> {
        self.table
            .entry()
            .map(|entry| completion::document_completion_items(entry.text()))
            .unwrap_or_default()
    }
}
