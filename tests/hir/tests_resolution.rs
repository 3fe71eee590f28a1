//! Dot-chain resolution across imported files.

use solidity_assist::hir::{Member, Resolver, Target, TypeReference};
use solidity_assist::parser::parse_dot_chain;

use crate::helpers::analysis_helpers::{MAIN, extract_cursor, host};
use crate::helpers::source_fixtures::{IMPORTS, library_files};

/// Names of the members offered after the `.` just before `$0`.
fn member_names(source: &str) -> Vec<String> {
    let (text, position) = extract_cursor(source);
    let host = host(&library_files());
    let analysis = host.analysis(MAIN, &text);
    let table = analysis.table();
    let entry = table.entry().unwrap();
    let line = entry.line(position.line).unwrap();
    let offset = entry.offset(position).unwrap();

    let chain = parse_dot_chain(line, position.col as usize - 1);
    Resolver::new(table, offset)
        .complete(&chain)
        .iter()
        .map(|member| member.name().to_string())
        .collect()
}

fn main_with(body: &str) -> String {
    format!(
        "{IMPORTS}
enum Color {{ Red, Blue }}

contract Main is Ownable {{
    using SafeMath for uint;
    using SafeMath for uint[];

    struct Order {{ address buyer; uint amount; }}

    uint[] values;
    mapping(address => Order) orders;
    IERC20 token;

    function run(uint amount) public {{
        {body}
    }}
}}"
    )
}

#[test]
fn test_imported_library_binds_to_scalar() {
    assert_eq!(member_names(&main_with("amount.$0")), vec!["add", "sub"]);
}

#[test]
fn test_imported_library_binds_to_array() {
    assert_eq!(
        member_names(&main_with("values.$0")),
        vec!["length", "push", "pop", "sum"]
    );
}

#[test]
fn test_element_of_array_uses_scalar_bindings() {
    assert_eq!(member_names(&main_with("values[0].$0")), vec!["add", "sub"]);
}

#[test]
fn test_extension_call_result_continues() {
    assert_eq!(member_names(&main_with("amount.add(1).$0")), vec!["add", "sub"]);
}

#[test]
fn test_mapping_value_struct_fields() {
    assert_eq!(member_names(&main_with("orders[msg.sender].$0")), vec!["buyer", "amount"]);
}

#[test]
fn test_imported_interface_members() {
    assert_eq!(member_names(&main_with("token.$0")), vec!["balanceOf", "transfer"]);
}

#[test]
fn test_interface_cast() {
    assert_eq!(
        member_names(&main_with("IERC20(address(this)).$0")),
        vec!["balanceOf", "transfer"]
    );
}

#[test]
fn test_interface_value_only_offers_its_own_members() {
    assert!(member_names(&main_with("token.SafeMath.$0")).is_empty());
    assert!(member_names(&main_with("token.Color.$0")).is_empty());
    assert_eq!(member_names(&main_with("Color.$0")), vec!["Red", "Blue"]);
}

#[test]
fn test_else_branch_assignment_keeps_state_variable() {
    let body = "if (amount > 0) values.pop(); else values = new uint[](0);\n        values.$0";
    assert_eq!(
        member_names(&main_with(body)),
        vec!["length", "push", "pop", "sum"]
    );
}

#[test]
fn test_this_includes_inherited_members() {
    let names = member_names(&main_with("this.$0"));
    assert!(names.contains(&"run".to_string()));
    assert!(names.contains(&"transferOwnership".to_string()));
    assert!(names.contains(&"owner".to_string()));
}

#[test]
fn test_inherited_state_variable_is_an_address() {
    let names = member_names(&main_with("owner.$0"));
    assert!(names.contains(&"balance".to_string()));
    assert!(names.contains(&"transfer".to_string()));
}

#[test]
fn test_unknown_root_has_no_members() {
    assert!(member_names(&main_with("missing.$0")).is_empty());
}

#[test]
fn test_resolve_reports_target_kind() {
    let (text, position) = extract_cursor(&main_with("token.$0"));
    let host = host(&library_files());
    let analysis = host.analysis(MAIN, &text);
    let table = analysis.table();
    let entry = table.entry().unwrap();
    let offset = entry.offset(position).unwrap();
    let chain = parse_dot_chain(entry.line(position.line).unwrap(), position.col as usize - 1);

    let resolver = Resolver::new(table, offset);
    assert_eq!(resolver.resolve(&chain), Some(Target::Value(TypeReference::named("IERC20"))));

    let members = resolver.complete(&chain);
    let Member::Function { function, extension } = members[0] else {
        panic!("expected a function, got {:?}", members[0]);
    };
    assert_eq!(function.contract, "IERC20");
    assert!(!extension);
}
