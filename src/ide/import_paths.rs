//! Import path suggestions.

use std::path::Path;

use crate::project::ImportResolver;
use crate::project::paths::to_slash;

use super::completion::{CompletionItem, CompletionKind};

/// One suggestion per source file under the project root, written the way
/// `document` would import it.
pub fn import_path_completions(resolver: &ImportResolver<'_>, document: &Path) -> Vec<CompletionItem> {
    let mut files = match resolver.loader().list_sources(resolver.root()) {
        Ok(files) => files,
        Err(err) => {
            tracing::debug!("no import suggestions: {}", err);
            return Vec::new();
        }
    };
    files.dedup();

    files
        .iter()
        .map(|file| {
            let import = resolver.import_path_for(file, document);
            CompletionItem::new(import.as_str(), CompletionKind::Reference)
                .with_detail(to_slash(file))
                .with_insert_text(format!("\"{import}\";"))
        })
        .collect()
}
