//! Symbol table tests.

use std::path::Path;

use solidity_assist::hir::{SymbolTable, SymbolTableBuilder, VariableKind, scope_at};
use solidity_assist::project::{ImportResolver, MemoryLoader, ProjectConfig};
use solidity_assist::{FileId, TextSize};

use crate::helpers::analysis_helpers::{MAIN, ROOT};
use crate::helpers::source_fixtures::{IMPORTS, library_files};

fn build(files: &[(&str, &str)], text: &str) -> SymbolTable {
    let mut loader = MemoryLoader::new();
    for (path, source) in files {
        loader.insert(*path, *source);
    }
    let config = ProjectConfig::new(ROOT);
    let resolver = ImportResolver::new(&config, Path::new(MAIN), &loader);
    SymbolTableBuilder::new(&resolver).build(Path::new(MAIN), text)
}

fn function_names(table: &SymbolTable, contract: &str) -> Vec<String> {
    let id = table.contract_id(contract).unwrap();
    table.all_functions(id).map(|f| f.name.to_string()).collect()
}

#[test]
fn test_imports_through_every_tier() {
    let text = format!("{IMPORTS}\ncontract Main is Ownable {{}}");
    let table = build(&library_files(), &text);

    assert_eq!(table.files().len(), 4);
    assert_eq!(table.entry().unwrap().id(), FileId::ENTRY);
    for name in ["Main", "Ownable", "SafeMath", "IERC20"] {
        assert!(table.contract_by_name(name).is_some(), "{name} not loaded");
    }
    assert!(table.imports().iter().all(|import| import.target.is_some()));
}

#[test]
fn test_inherited_function_is_visible() {
    let text = "contract A { function f() public {} }\ncontract B is A {}";
    let table = build(&[], text);
    assert_eq!(function_names(&table, "B"), vec!["f"]);
}

#[test]
fn test_inheritance_across_files() {
    let text = format!("{IMPORTS}\ncontract Main is Ownable {{ function mint() public {{}} }}");
    let table = build(&library_files(), &text);
    assert_eq!(function_names(&table, "Main"), vec!["mint", "transferOwnership"]);

    let main = table.contract_id("Main").unwrap();
    let owner = table.all_state_variables(main).next().unwrap();
    assert_eq!(owner.name, "owner");
    assert_ne!(owner.file, FileId::ENTRY);
}

#[test]
fn test_duplicate_bases_are_preserved_but_flattened_once() {
    let text = "contract A { uint a; } contract B is A, A { }";
    let table = build(&[], text);
    let b = table.contract_by_name("B").unwrap();
    assert_eq!(b.base_contracts.len(), 2);
    let id = table.contract_id("B").unwrap();
    assert_eq!(table.lineage(id).len(), 2);
    assert_eq!(table.all_state_variables(id).count(), 1);
}

#[test]
fn test_cyclic_inheritance_terminates() {
    let text = "contract A is C { function a() public {} }
contract B is A { function b() public {} }
contract C is B { function c() public {} }";
    let table = build(&[], text);
    assert_eq!(function_names(&table, "A"), vec!["a", "c", "b"]);
}

#[test]
fn test_scope_sees_only_earlier_locals() {
    let text = "contract C {
    function f(uint a) public returns (uint r) {
        uint first = 1;
        // here
        uint second = 2;
    }
}";
    let table = build(&[], text);
    let offset = TextSize::from(text.find("// here").unwrap() as u32);
    let contract = table.contract(table.selected_contract(offset).unwrap());
    let function = contract.function_at(offset).unwrap();
    let scope = scope_at(function, offset).unwrap();

    let visible: Vec<_> = scope.variables().map(|v| (v.name.to_string(), v.kind)).collect();
    assert_eq!(
        visible,
        vec![
            ("first".to_string(), VariableKind::Local),
            ("a".to_string(), VariableKind::Parameter),
            ("r".to_string(), VariableKind::ReturnParameter),
        ]
    );
}

#[test]
fn test_selected_contract_only_from_entry_file() {
    let text = format!("{IMPORTS}\ncontract Main {{\n}}");
    let table = build(&library_files(), &text);
    let inside = TextSize::from(text.rfind('}').unwrap() as u32);
    let selected = table.selected_contract(inside).unwrap();
    assert_eq!(table.contract(selected).name, "Main");
    assert!(table.selected_contract(TextSize::from(0)).is_none());
}
