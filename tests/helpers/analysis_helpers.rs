//! Helpers for running requests against in-memory projects.

#![allow(dead_code)]

use solidity_assist::ide::static_items;
use solidity_assist::{AnalysisHost, CompletionItem, GotoResult, LineCol, MemoryLoader, ProjectConfig};

pub const ROOT: &str = "/project";
pub const MAIN: &str = "/project/src/Main.sol";

/// Cursor marker inside fixtures.
pub const CURSOR: &str = "$0";

/// Remove the `$0` marker and return the text and the marker's position.
pub fn extract_cursor(source: &str) -> (String, LineCol) {
    let offset = source.find(CURSOR).expect("fixture has no $0 marker");
    let before = &source[..offset];
    let line = before.matches('\n').count() as u32;
    let col = before.rsplit('\n').next().unwrap_or("").chars().count() as u32;
    (source.replacen(CURSOR, "", 1), LineCol::new(line, col))
}

/// A host whose loader serves `files`.
pub fn host(files: &[(&str, &str)]) -> AnalysisHost {
    let mut loader = MemoryLoader::new();
    for (path, text) in files {
        loader.insert(*path, *text);
    }
    AnalysisHost::with_loader(ProjectConfig::new(ROOT), loader)
}

/// Complete at the marker of `source`, opened as [`MAIN`], with `files`
/// available to imports.
pub fn completions_with(files: &[(&str, &str)], source: &str) -> Vec<CompletionItem> {
    let (text, position) = extract_cursor(source);
    host(files).analysis(MAIN, &text).completions(position)
}

pub fn completions(source: &str) -> Vec<CompletionItem> {
    completions_with(&[], source)
}

pub fn goto_with(files: &[(&str, &str)], source: &str) -> GotoResult {
    let (text, position) = extract_cursor(source);
    host(files).analysis(MAIN, &text).goto_definition(position)
}

pub fn goto(source: &str) -> GotoResult {
    goto_with(&[], source)
}

/// The items before the static catalogs. Fails if the catalogs are not the
/// exact tail of the response.
pub fn contextual(items: &[CompletionItem]) -> Vec<CompletionItem> {
    let catalog = static_items();
    assert!(items.len() >= catalog.len(), "static catalogs missing");
    let split = items.len() - catalog.len();
    assert_eq!(&items[split..], catalog.as_slice(), "static catalogs must come last");
    items[..split].to_vec()
}

pub fn labels(items: &[CompletionItem]) -> Vec<String> {
    items.iter().map(|item| item.label.to_string()).collect()
}

pub fn contextual_labels(items: &[CompletionItem]) -> Vec<String> {
    labels(&contextual(items))
}

pub fn find<'a>(items: &'a [CompletionItem], label: &str) -> &'a CompletionItem {
    items
        .iter()
        .find(|item| &*item.label == label)
        .unwrap_or_else(|| panic!("no item labelled {label}"))
}
