//! The per-request symbol table.
//!
//! Contracts are nodes of an inheritance graph keyed by name. Flattened
//! lineages are computed on first use and cached per contract; the walk
//! keeps a visited set so inheritance cycles terminate.

use std::cell::OnceCell;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use super::source::SourceFile;
use super::symbols::{
    ContractSymbol, EnumSymbol, EventSymbol, FunctionSymbol, StructSymbol, UsingSymbol,
    VariableSymbol,
};
use crate::base::{FileId, TextRange, TextSize};

/// Index of a contract inside a [`SymbolTable`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContractId(u32);

impl ContractId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// An import directive of a loaded file and where it led.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedImport {
    pub file: FileId,
    /// The string literal, quotes included
    pub path_range: TextRange,
    pub target: Option<PathBuf>,
}

/// Everything visible from one document: its own declarations and those of
/// every file reachable through imports.
#[derive(Debug, Default)]
pub struct SymbolTable {
    pub(super) files: Vec<SourceFile>,
    pub(super) contracts: Vec<ContractSymbol>,
    /// First declaration of a name wins
    pub(super) by_name: IndexMap<SmolStr, ContractId>,
    pub(super) structs: Vec<StructSymbol>,
    pub(super) enums: Vec<EnumSymbol>,
    pub(super) imports: Vec<ResolvedImport>,
    pub(super) lineages: Vec<OnceCell<Vec<ContractId>>>,
}

impl SymbolTable {
    pub(super) fn add_contract(&mut self, contract: ContractSymbol) -> ContractId {
        let id = ContractId(self.contracts.len() as u32);
        self.by_name.entry(contract.name.clone()).or_insert(id);
        self.contracts.push(contract);
        self.lineages.push(OnceCell::new());
        id
    }

    // ========================================================================
    // FILES
    // ========================================================================

    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    pub fn file(&self, id: FileId) -> Option<&SourceFile> {
        self.files.get(id.index())
    }

    /// The document the table was built for.
    pub fn entry(&self) -> Option<&SourceFile> {
        self.file(FileId::ENTRY)
    }

    pub fn file_by_path(&self, path: &Path) -> Option<&SourceFile> {
        self.files.iter().find(|file| file.path() == path)
    }

    pub fn imports(&self) -> &[ResolvedImport] {
        &self.imports
    }

    // ========================================================================
    // CONTRACTS
    // ========================================================================

    pub fn contracts(&self) -> impl Iterator<Item = (ContractId, &ContractSymbol)> {
        self.contracts
            .iter()
            .enumerate()
            .map(|(idx, contract)| (ContractId(idx as u32), contract))
    }

    pub fn contract(&self, id: ContractId) -> &ContractSymbol {
        &self.contracts[id.index()]
    }

    pub fn contract_id(&self, name: &str) -> Option<ContractId> {
        self.by_name.get(name).copied()
    }

    pub fn contract_by_name(&self, name: &str) -> Option<&ContractSymbol> {
        self.contract_id(name).map(|id| self.contract(id))
    }

    /// The entry-document contract whose range contains `offset`.
    pub fn selected_contract(&self, offset: TextSize) -> Option<ContractId> {
        self.contracts()
            .find(|(_, contract)| contract.file == FileId::ENTRY && contract.contains(offset))
            .map(|(id, _)| id)
    }

    /// File-level structs of every loaded file.
    pub fn file_structs(&self) -> &[StructSymbol] {
        &self.structs
    }

    /// File-level enums of every loaded file.
    pub fn file_enums(&self) -> &[EnumSymbol] {
        &self.enums
    }

    // ========================================================================
    // INHERITANCE
    // ========================================================================

    /// The contract followed by everything it inherits from, depth first in
    /// declaration order of the base lists. Each contract appears once even
    /// in diamonds or cycles. Unknown base names are skipped.
    pub fn lineage(&self, id: ContractId) -> &[ContractId] {
        self.lineages[id.index()].get_or_init(|| self.flatten(id))
    }

    fn flatten(&self, id: ContractId) -> Vec<ContractId> {
        let mut order = Vec::new();
        let mut visited = FxHashSet::default();
        let mut stack = vec![id];

        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            order.push(current);
            let bases = &self.contract(current).base_contracts;
            for base in bases.iter().rev() {
                match self.contract_id(base) {
                    Some(base_id) if !visited.contains(&base_id) => stack.push(base_id),
                    Some(_) => {}
                    None => tracing::trace!(contract = %self.contract(current).name, base = %base, "unknown base contract"),
                }
            }
        }

        order
    }

    fn lineage_contracts(&self, id: ContractId) -> impl Iterator<Item = &ContractSymbol> {
        self.lineage(id).iter().map(|&id| self.contract(id))
    }

    /// Functions of the contract and its bases. Same-named functions from
    /// different contracts are all kept, closest contract first.
    pub fn all_functions(&self, id: ContractId) -> impl Iterator<Item = &FunctionSymbol> {
        self.lineage_contracts(id).flat_map(|c| c.functions.iter())
    }

    pub fn all_events(&self, id: ContractId) -> impl Iterator<Item = &EventSymbol> {
        self.lineage_contracts(id).flat_map(|c| c.events.iter())
    }

    pub fn all_state_variables(&self, id: ContractId) -> impl Iterator<Item = &VariableSymbol> {
        self.lineage_contracts(id).flat_map(|c| c.state_variables.iter())
    }

    pub fn all_structs(&self, id: ContractId) -> impl Iterator<Item = &StructSymbol> {
        self.lineage_contracts(id).flat_map(|c| c.structs.iter())
    }

    pub fn all_enums(&self, id: ContractId) -> impl Iterator<Item = &EnumSymbol> {
        self.lineage_contracts(id).flat_map(|c| c.enums.iter())
    }

    pub fn all_using(&self, id: ContractId) -> impl Iterator<Item = &UsingSymbol> {
        self.lineage_contracts(id).flat_map(|c| c.using.iter())
    }
}
