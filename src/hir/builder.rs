//! Builds a [`SymbolTable`] from a document and everything it imports.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;

use super::source::SourceFile;
use super::symbols::{ContractSymbol, EnumSymbol, StructSymbol};
use super::table::{ResolvedImport, SymbolTable};
use crate::base::FileId;
use crate::parser::{SourceItem, parse};
use crate::project::ImportResolver;

/// Walks the entry document first, then its imports breadth-first. Each
/// file is visited once, so import cycles are harmless.
pub struct SymbolTableBuilder<'a> {
    resolver: &'a ImportResolver<'a>,
}

impl<'a> SymbolTableBuilder<'a> {
    pub fn new(resolver: &'a ImportResolver<'a>) -> Self {
        Self { resolver }
    }

    /// Build the table for `path`, whose current text is `text` (the editor
    /// buffer may differ from what is on disk).
    pub fn build(&self, path: &Path, text: &str) -> SymbolTable {
        let mut table = SymbolTable::default();
        let mut visited: FxHashSet<PathBuf> = FxHashSet::default();
        let mut queue: VecDeque<(PathBuf, String)> = VecDeque::new();

        visited.insert(path.to_path_buf());
        queue.push_back((path.to_path_buf(), text.to_string()));

        while let Some((path, text)) = queue.pop_front() {
            let id = FileId::new(table.files.len() as u32);
            for target in self.lower_file(&mut table, id, &path, &text) {
                if !visited.insert(target.clone()) {
                    continue;
                }
                match self.resolver.loader().read_to_string(&target) {
                    Ok(text) => queue.push_back((target, text)),
                    Err(err) => tracing::debug!("skipping import: {}", err),
                }
            }
            table.files.push(SourceFile::new(id, path, text));
        }

        tracing::debug!(
            files = table.files.len(),
            contracts = table.contracts.len(),
            "built symbol table"
        );
        table
    }

    /// Add one file's declarations and return the paths it imports.
    fn lower_file(&self, table: &mut SymbolTable, file: FileId, path: &Path, text: &str) -> Vec<PathBuf> {
        let parse = parse(text);
        if !parse.ok() {
            tracing::debug!(
                path = %path.display(),
                errors = parse.errors.len(),
                "recovered from syntax errors"
            );
        }

        let mut targets = Vec::new();
        for item in &parse.unit.items {
            match item {
                SourceItem::Import(import) => {
                    let target = self.resolver.resolve(&import.path, path);
                    if target.is_none() {
                        tracing::debug!(import = %import.path, "unresolvable import");
                    }
                    targets.extend(target.clone());
                    table.imports.push(ResolvedImport {
                        file,
                        path_range: import.path_range,
                        target,
                    });
                }
                SourceItem::Contract(decl) => {
                    table.add_contract(ContractSymbol::lower(decl, file));
                }
                SourceItem::Struct(decl) => table.structs.push(StructSymbol::lower(decl, None, file)),
                SourceItem::Enum(decl) => table.enums.push(EnumSymbol::lower(decl, None, file)),
            }
        }
        targets
    }
}
