//! Dot-chain parsing tests.

use rstest::rstest;
use solidity_assist::parser::parse_dot_chain;

fn names(line: &str, end: usize) -> Vec<String> {
    parse_dot_chain(line, end)
        .nodes()
        .iter()
        .map(|node| node.name.clone())
        .collect()
}

#[test]
fn test_variable_chain_links_parent_and_child() {
    let line = "foo.bar";
    let chain = parse_dot_chain(line, line.len());

    let root = chain.root();
    assert_eq!(root.name(), "foo");
    assert!(root.is_variable());
    assert!(root.parent().is_none());

    let child = root.child().unwrap();
    assert_eq!(child.name(), "bar");
    assert!(child.child().is_none());
    assert_eq!(child.parent().map(|p| p.name()), Some("foo"));
}

#[test]
fn test_index_then_call() {
    let line = "list[0].push()";
    let chain = parse_dot_chain(line, line.len());

    let terminal = chain.terminal();
    assert_eq!(terminal.name(), "push");
    assert!(terminal.is_method());
    assert!(!terminal.is_variable());

    let parent = terminal.parent().unwrap();
    assert_eq!(parent.name(), "list");
    assert!(parent.is_array());
    assert!(parent.is_variable());
    assert_eq!(parent.indexes(), 1);
}

#[rstest]
#[case("        uint x = token.owner", &["token", "owner"])]
#[case("return balances[msg.sender].amount", &["balances", "amount"])]
#[case("a.b.c.d", &["a", "b", "c", "d"])]
#[case("f(g(1), h[2]).x", &["f", "x"])]
#[case("m[a][b[c]].y", &["m", "y"])]
#[case("$weird_name.value", &["$weird_name", "value"])]
#[case("emit Log(x", &["x"])]
fn test_chain_names(#[case] line: &str, #[case] expected: &[&str]) {
    assert_eq!(names(line, line.chars().count()), expected);
}

#[test]
fn test_chain_before_dot_trigger() {
    // the editor reports the column of the `.` that was just typed
    let line = "        token.";
    let dot = line.rfind('.').unwrap();
    assert_eq!(names(line, dot), vec!["token"]);
}

#[test]
fn test_nothing_before_cursor_is_blank() {
    let chain = parse_dot_chain("    ", 4);
    assert_eq!(chain.len(), 1);
    assert!(chain.is_blank());
}

#[test]
fn test_parse_is_deterministic() {
    let line = "accounts[id].holder.history[3].length";
    let first = parse_dot_chain(line, line.len());
    let second = parse_dot_chain(line, line.len());
    assert_eq!(first, second);
}
