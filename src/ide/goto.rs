//! Go-to-definition implementation.

use std::path::PathBuf;
use std::sync::Arc;

use crate::base::{FileId, LineCol, TextRange, TextSize};
use crate::hir::{Resolver, SymbolTable};
use crate::parser::parse_dot_chain;

use super::text_utils::word_at;

/// Result of a go-to-definition request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GotoResult {
    /// The targets to jump to.
    pub targets: Vec<GotoTarget>,
}

impl GotoResult {
    /// Create an empty result (no targets found).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a result with a single target.
    pub fn single(target: GotoTarget) -> Self {
        Self {
            targets: vec![target],
        }
    }

    /// Create a result with multiple targets.
    pub fn multiple(targets: Vec<GotoTarget>) -> Self {
        Self { targets }
    }

    /// Check if any targets were found.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// A target location for go-to-definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GotoTarget {
    /// The file containing the target.
    pub file: FileId,
    pub path: PathBuf,
    /// Byte range of the declared name.
    pub range: TextRange,
    pub start: LineCol,
    pub end: LineCol,
    /// The symbol name, or the path for imported files.
    pub name: Arc<str>,
}

impl GotoTarget {
    fn new(table: &SymbolTable, file: FileId, range: TextRange, name: &str) -> Option<Self> {
        let source = table.file(file)?;
        let (start, end) = source.range_line_cols(range);
        Some(Self {
            file,
            path: source.path().to_path_buf(),
            range,
            start,
            end,
            name: Arc::from(name),
        })
    }
}

/// Find the definition of the symbol at `position` in the entry document.
///
/// Matching is by name only, so every overload (or shadowed declaration) in
/// the first category that matches is returned.
pub fn goto_definition(table: &SymbolTable, position: LineCol) -> GotoResult {
    let Some(entry) = table.entry() else {
        return GotoResult::empty();
    };
    let (Some(line), Some(offset)) = (entry.line(position.line), entry.offset(position)) else {
        return GotoResult::empty();
    };

    if let Some(result) = goto_import(table, offset) {
        return result;
    }

    let Some((word, start, _)) = word_at(line, position.col as usize) else {
        return GotoResult::empty();
    };

    let before_word = start.checked_sub(1).and_then(|idx| line.chars().nth(idx));
    let locations = if before_word == Some('.') {
        member_locations(table, offset, line, start - 1, &word)
    } else {
        root_locations(table, offset, &word)
    };

    tracing::debug!(word = %word, targets = locations.len(), "goto definition");
    GotoResult::multiple(
        locations
            .into_iter()
            .filter_map(|(file, range)| GotoTarget::new(table, file, range, &word))
            .collect(),
    )
}

/// The cursor is inside the path of an import directive.
fn goto_import(table: &SymbolTable, offset: TextSize) -> Option<GotoResult> {
    let import = table
        .imports()
        .iter()
        .find(|import| import.file == FileId::ENTRY && import.path_range.contains_inclusive(offset))?;

    let target = import
        .target
        .as_deref()
        .and_then(|path| table.file_by_path(path))
        .and_then(|file| {
            let name = file.path().display().to_string();
            GotoTarget::new(table, file.id(), TextRange::empty(TextSize::from(0)), &name)
        });
    Some(target.map(GotoResult::single).unwrap_or_default())
}

/// `parent.word`: resolve the parent chain and pick its members named `word`.
fn member_locations(
    table: &SymbolTable,
    offset: TextSize,
    line: &str,
    dot: usize,
    word: &str,
) -> Vec<(FileId, TextRange)> {
    let chain = parse_dot_chain(line, dot);
    let resolver = Resolver::new(table, offset);
    let Some(target) = resolver.resolve(&chain) else {
        return Vec::new();
    };
    resolver
        .members(&target)
        .iter()
        .filter(|member| member.name() == word)
        .filter_map(|member| member.location())
        .collect()
}

/// A bare name: variables in scope, members of the contract lineage,
/// contracts, then file-level types.
fn root_locations(table: &SymbolTable, offset: TextSize, word: &str) -> Vec<(FileId, TextRange)> {
    let resolver = Resolver::new(table, offset);

    if let Some(scope) = resolver.scope() {
        let found: Vec<_> = scope
            .variables()
            .filter(|v| v.name == word)
            .map(|v| (v.file, v.name_range))
            .collect();
        if !found.is_empty() {
            return found;
        }
    }

    if let Some(id) = resolver.selected_contract() {
        let mut found: Vec<_> = table
            .all_functions(id)
            .filter(|f| f.name == word)
            .map(|f| (f.file, f.name_range))
            .collect();
        found.extend(table.all_events(id).filter(|e| e.name == word).map(|e| (e.file, e.name_range)));
        found.extend(
            table
                .all_state_variables(id)
                .filter(|v| v.name == word)
                .map(|v| (v.file, v.name_range)),
        );
        found.extend(table.all_structs(id).filter(|s| s.name == word).map(|s| (s.file, s.name_range)));
        found.extend(table.all_enums(id).filter(|e| e.name == word).map(|e| (e.file, e.name_range)));
        if !found.is_empty() {
            return found;
        }
    }

    let contracts: Vec<_> = table
        .contracts()
        .filter(|(_, c)| c.name == word)
        .map(|(_, c)| (c.file, c.name_range))
        .collect();
    if !contracts.is_empty() {
        return contracts;
    }

    let structs = table
        .file_structs()
        .iter()
        .filter(|s| s.name == word)
        .map(|s| (s.file, s.name_range));
    let enums = table
        .file_enums()
        .iter()
        .filter(|e| e.name == word)
        .map(|e| (e.file, e.name_range));
    structs.chain(enums).collect()
}
