//! Go-to-definition across files.

use std::path::Path;

use solidity_assist::LineCol;

use crate::helpers::analysis_helpers::{MAIN, goto, goto_with};
use crate::helpers::source_fixtures::{IMPORTS, library_files};

const MAIN_BODY: &str = "
contract Main is Ownable {
    using SafeMath for uint;
    IERC20 token;

    function f(uint a) public {}
    function f(bool b) public {}

    function run(uint amount) public {
        uint fee = amount.add(1);
        BODY
    }
}";

/// `IMPORTS` occupies the first lines; `MAIN_BODY` starts after them.
fn source(body: &str) -> String {
    format!("{IMPORTS}{}", MAIN_BODY.replace("BODY", body))
}

fn import_lines() -> u32 {
    IMPORTS.matches('\n').count() as u32
}

#[test]
fn test_goto_local_variable() {
    let result = goto_with(&library_files(), &source("fee$0;"));
    assert_eq!(result.targets.len(), 1);
    let target = &result.targets[0];
    assert_eq!(target.path, Path::new(MAIN));
    assert_eq!(&*target.name, "fee");
    assert_eq!(target.start, LineCol::new(import_lines() + 9, 13));
    assert_eq!(target.end, LineCol::new(import_lines() + 9, 16));
}

#[test]
fn test_goto_parameter() {
    let result = goto_with(&library_files(), &source("am$0ount;"));
    assert_eq!(result.targets.len(), 1);
    assert_eq!(result.targets[0].start.line, import_lines() + 8);
}

#[test]
fn test_goto_inherited_function() {
    let result = goto_with(&library_files(), &source("transferOwnership$0(msg.sender);"));
    assert_eq!(result.targets.len(), 1);
    let target = &result.targets[0];
    assert_eq!(target.path, Path::new("/project/src/access/Ownable.sol"));
    assert_eq!(target.start, LineCol::new(13, 13));
}

#[test]
fn test_goto_member_of_imported_interface() {
    let result = goto_with(&library_files(), &source("token.balance$0Of(address(this));"));
    assert_eq!(result.targets.len(), 1);
    let target = &result.targets[0];
    assert_eq!(target.path, Path::new("/project/lib/token/src/IERC20.sol"));
    assert_eq!(target.start.line, 3);
}

#[test]
fn test_goto_extension_function() {
    let result = goto_with(&library_files(), &source("amount.sub$0(1);"));
    assert_eq!(result.targets.len(), 1);
    assert_eq!(result.targets[0].path, Path::new("/project/src/math/SafeMath.sol"));
}

#[test]
fn test_goto_overloads_returns_all() {
    let result = goto_with(&library_files(), &source("f$0(true);"));
    assert_eq!(result.targets.len(), 2);
    assert!(result.targets.iter().all(|t| t.path == Path::new(MAIN)));
}

#[test]
fn test_goto_contract_name() {
    let source = format!("{IMPORTS}\ncontract Main {{\n    IERC$020 token;\n}}");
    let result = goto_with(&library_files(), &source);
    assert_eq!(result.targets.len(), 1);
    assert_eq!(result.targets[0].path, Path::new("/project/lib/token/src/IERC20.sol"));
}

#[test]
fn test_goto_import_path_opens_file() {
    let source = "import \"./access/Own$0able.sol\";\ncontract Main is Ownable {}";
    let result = goto_with(&library_files(), source);
    assert_eq!(result.targets.len(), 1);
    let target = &result.targets[0];
    assert_eq!(target.path, Path::new("/project/src/access/Ownable.sol"));
    assert_eq!(target.start, LineCol::new(0, 0));
    assert!(target.range.is_empty());
}

#[test]
fn test_goto_missing_import_is_empty() {
    let result = goto("import \"./Gone$0.sol\";");
    assert!(result.is_empty());
}

#[test]
fn test_goto_unknown_name_is_empty() {
    assert!(goto_with(&library_files(), &source("missing$0();")).is_empty());
    assert!(goto("contract A {}\n   $0").is_empty());
}
