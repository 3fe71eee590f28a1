//! Declaration parser tests.

use rstest::rstest;
use solidity_assist::parser::{
    ContractKind, ContractMember, FunctionKind, SourceItem, TypeName, parse, tokenize,
};

use crate::helpers::source_fixtures::{IERC20, OWNABLE, SAFE_MATH};

#[rstest]
#[case(OWNABLE, "Ownable", ContractKind::Contract)]
#[case(SAFE_MATH, "SafeMath", ContractKind::Library)]
#[case(IERC20, "IERC20", ContractKind::Interface)]
fn test_fixtures_parse_cleanly(#[case] source: &str, #[case] name: &str, #[case] kind: ContractKind) {
    let parse = parse(source);
    assert!(parse.ok(), "{:?}", parse.errors);
    let contract = parse.unit.contracts().next().unwrap();
    assert_eq!(contract.name, name);
    assert_eq!(contract.kind, kind);
}

#[test]
fn test_abstract_contract_and_modifier() {
    let parse = parse(OWNABLE);
    let contract = parse.unit.contracts().next().unwrap();
    assert!(contract.is_abstract);

    let functions: Vec<_> = contract
        .members
        .iter()
        .filter_map(|m| match m {
            ContractMember::Function(f) => Some(f.name.as_str()),
            _ => None,
        })
        .collect();
    // the modifier is skipped
    assert_eq!(functions, vec!["transferOwnership"]);
}

#[test]
fn test_mapping_and_array_types() {
    let source = "contract C {
        mapping(address => mapping(uint => bool[])) approvals;
        uint[][3] grid;
    }";
    let parse = parse(source);
    assert!(parse.ok(), "{:?}", parse.errors);
    let contract = parse.unit.contracts().next().unwrap();
    let types: Vec<_> = contract
        .members
        .iter()
        .filter_map(|m| match m {
            ContractMember::StateVariable(v) => Some(&v.type_name),
            _ => None,
        })
        .collect();
    assert!(matches!(types[0], TypeName::Mapping(_)));
    assert!(matches!(types[1], TypeName::Array(_)));
}

#[test]
fn test_using_directives() {
    let source = "contract C {
        using SafeMath for uint256;
        using Strings for *;
    }";
    let parse = parse(source);
    assert!(parse.ok(), "{:?}", parse.errors);
    let usings: Vec<_> = parse
        .unit
        .contracts()
        .next()
        .unwrap()
        .members
        .iter()
        .filter_map(|m| match m {
            ContractMember::Using(u) => Some(u),
            _ => None,
        })
        .collect();
    assert_eq!(usings.len(), 2);
    assert_eq!(usings[0].library, "SafeMath");
    assert_eq!(usings[0].target, Some(TypeName::Named("uint256".into())));
    assert_eq!(usings[1].target, None);
}

#[test]
fn test_constructor_kind() {
    let parse = parse("contract C { constructor(uint x) {} function f() public {} }");
    let kinds: Vec<_> = parse
        .unit
        .contracts()
        .next()
        .unwrap()
        .members
        .iter()
        .filter_map(|m| match m {
            ContractMember::Function(f) => Some(f.kind),
            _ => None,
        })
        .collect();
    assert_eq!(kinds, vec![FunctionKind::Constructor, FunctionKind::Function]);
}

#[test]
fn test_incomplete_statement_keeps_declarations() {
    let source = "contract C {
        uint total;
        function f(uint amount) public {
            total.
        }
        function g() public {}
    }";
    let parse = parse(source);
    let contract = parse.unit.contracts().next().unwrap();
    assert_eq!(contract.members.len(), 3);
}

#[test]
fn test_garbage_does_not_panic() {
    for source in ["", "}", "contract", "contract {", "import", "struct S { uint", "\u{0}\u{feff}??"] {
        let parse = parse(source);
        let _ = parse.unit.items.len();
    }
}

#[test]
fn test_file_level_items_in_order() {
    let source = "import \"./A.sol\"; struct P { uint x; } enum E { A } contract C {}";
    let parse = parse(source);
    assert!(parse.ok(), "{:?}", parse.errors);
    let kinds: Vec<_> = parse
        .unit
        .items
        .iter()
        .map(|item| match item {
            SourceItem::Import(_) => "import",
            SourceItem::Struct(_) => "struct",
            SourceItem::Enum(_) => "enum",
            SourceItem::Contract(_) => "contract",
        })
        .collect();
    assert_eq!(kinds, vec!["import", "struct", "enum", "contract"]);
}

#[test]
fn test_tokenize_skips_trivia() {
    let tokens: Vec<_> = tokenize("uint /* c */ x; // done")
        .into_iter()
        .filter(|token| !token.kind.is_trivia())
        .map(|token| token.text)
        .collect();
    assert_eq!(tokens, vec!["uint", "x", ";"]);
}
