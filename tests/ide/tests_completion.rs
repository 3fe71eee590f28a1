//! Completion requests against a project with imports.

use solidity_assist::CompletionKind;
use solidity_assist::ide::{InsertTextFormat, elementary_types, static_items};

use crate::helpers::analysis_helpers::{
    MAIN, completions, completions_with, contextual, contextual_labels, extract_cursor, find, host,
};
use crate::helpers::source_fixtures::{IMPORTS, library_files};

fn main_with(body: &str) -> String {
    format!(
        "{IMPORTS}
contract Main is Ownable {{
    using SafeMath for uint;

    enum Phase {{ Open, Closed }}
    struct Order {{ address buyer; uint amount; }}

    uint total;
    IERC20 token;
    mapping(address => Order) orders;

    event Minted(address to, uint amount);

    function mint(address to, uint amount) public returns (bool ok) {{
        uint fee = 1;
        {body}
    }}
}}"
    )
}

fn complete(body: &str) -> Vec<solidity_assist::CompletionItem> {
    completions_with(&library_files(), &main_with(body))
}

// ============================================================================
// PLAIN
// ============================================================================

#[test]
fn test_plain_completion_order() {
    let items = complete("$0");
    assert_eq!(
        contextual_labels(&items),
        vec![
            "mint",
            "transferOwnership",
            "Minted",
            "OwnershipTransferred",
            "total",
            "token",
            "orders",
            "owner",
            "Order",
            "Phase",
            "to",
            "amount",
            "ok",
            "fee",
            "Main",
            "Ownable",
            "SafeMath",
            "IERC20",
        ]
    );
}

#[test]
fn test_plain_item_details() {
    let items = complete("$0");

    let mint = find(&items, "mint");
    assert_eq!(mint.kind, CompletionKind::Function);
    assert_eq!(
        mint.detail.as_deref(),
        Some("(function in Main) mint(address to, uint amount) returns (bool ok)")
    );
    assert_eq!(mint.insert_text.as_deref(), Some("mint(${1:to}, ${2:amount});"));
    assert_eq!(mint.insert_text_format, Some(InsertTextFormat::Snippet));

    let owner = find(&items, "owner");
    assert_eq!(owner.kind, CompletionKind::Field);
    assert_eq!(owner.detail.as_deref(), Some("(state variable in Ownable) address owner"));

    let to = find(&items, "to");
    assert_eq!(to.kind, CompletionKind::Variable);
    assert_eq!(to.detail.as_deref(), Some("(function parameter in Main) address to"));

    let fee = find(&items, "fee");
    assert_eq!(fee.detail.as_deref(), Some("(function variable in Main) uint fee"));

    let erc20 = find(&items, "IERC20");
    assert_eq!(erc20.kind, CompletionKind::Interface);
    assert_eq!(erc20.detail.as_deref(), Some("( Interface : IERC20) "));

    let math = find(&items, "SafeMath");
    assert_eq!(math.kind, CompletionKind::Class);
    assert_eq!(math.detail.as_deref(), Some("(Library : SafeMath) "));
}

#[test]
fn test_documented_members_are_offered() {
    let source = "contract C {
    /**
     * @dev Current owner.
     */
    function owner() public view returns (address) {}

    /// @notice Runs.
    function g() public {
        $0
    }
}";
    assert_eq!(contextual_labels(&completions(source)), vec!["owner", "g", "C"]);

    let host = host(&[]);
    let (text, _) = extract_cursor(source);
    let items = host.analysis(MAIN, &text).document_completion_items();
    assert_eq!(items.len(), 2);
}

#[test]
fn test_later_locals_are_not_offered() {
    let items = complete("$0\n        uint later = 2;");
    assert!(!contextual_labels(&items).contains(&"later".to_string()));
}

#[test]
fn test_outside_any_contract_offers_types_only() {
    let source = format!("{IMPORTS}\n$0\ncontract Main {{}}");
    let items = completions_with(&library_files(), &source);
    assert_eq!(
        contextual_labels(&items),
        vec!["Main", "Ownable", "SafeMath", "IERC20"]
    );
}

// ============================================================================
// DOT
// ============================================================================

#[test]
fn test_dot_on_interface_variable() {
    let items = complete("token.$0");
    assert_eq!(contextual_labels(&items), vec!["balanceOf", "transfer"]);
    let balance = find(&items, "balanceOf");
    assert_eq!(
        balance.detail.as_deref(),
        Some("(function in IERC20) balanceOf(address account) returns (uint256)")
    );
}

#[test]
fn test_dot_with_partial_member_name() {
    let items = complete("token.bal$0");
    assert_eq!(contextual_labels(&items), vec!["balanceOf", "transfer"]);
}

#[test]
fn test_dot_extension_snippet_skips_receiver() {
    let items = complete("amount.$0");
    assert_eq!(contextual_labels(&items), vec!["add", "sub"]);
    assert_eq!(find(&items, "add").insert_text.as_deref(), Some("add(${1:b});"));
}

#[test]
fn test_dot_struct_fields() {
    let items = complete("orders[to].$0");
    let fields = contextual(&items);
    assert_eq!(fields.len(), 2);
    assert_eq!(&*fields[0].label, "buyer");
    assert_eq!(
        fields[0].detail.as_deref(),
        Some("(struct field in Order) address buyer")
    );
}

#[test]
fn test_dot_enum_values() {
    let items = complete("Phase.$0");
    let values = contextual(&items);
    assert_eq!(values.len(), 2);
    assert_eq!(values[0].kind, CompletionKind::EnumMember);
    assert_eq!(values[1].detail.as_deref(), Some("Phase.Closed"));
}

#[test]
fn test_dot_global_namespace() {
    let items = complete("msg.$0");
    let labels = contextual_labels(&items);
    assert!(labels.contains(&"sender".to_string()));
    assert!(labels.contains(&"value".to_string()));
    assert_eq!(find(&items, "sender").kind, CompletionKind::Property);
}

#[test]
fn test_dot_on_unknown_root_still_returns_catalogs() {
    let items = complete("nothing.$0");
    assert!(contextual(&items).is_empty());
}

// ============================================================================
// EMIT AND IMPORT
// ============================================================================

#[test]
fn test_emit_offers_lineage_events() {
    let items = complete("emit $0");
    assert_eq!(contextual_labels(&items), vec!["Minted", "OwnershipTransferred"]);
    assert_eq!(find(&items, "Minted").kind, CompletionKind::Event);
    assert_eq!(
        find(&items, "Minted").insert_text.as_deref(),
        Some("Minted(${1:to}, ${2:amount});")
    );
}

#[test]
fn test_import_offers_project_files() {
    let mut files = library_files();
    files.push((MAIN, ""));
    let items = completions_with(&files, "import $0");
    assert_eq!(
        contextual_labels(&items),
        vec!["token/src/IERC20.sol", "./Main.sol", "./access/Ownable.sol", "./math/SafeMath.sol"]
    );
    let ownable = find(&items, "./access/Ownable.sol");
    assert_eq!(ownable.kind, CompletionKind::Reference);
    assert_eq!(ownable.insert_text.as_deref(), Some("\"./access/Ownable.sol\";"));
    assert_eq!(ownable.detail.as_deref(), Some("/project/src/access/Ownable.sol"));
}

// ============================================================================
// ROBUSTNESS
// ============================================================================

#[test]
fn test_broken_document_keeps_contextual_items() {
    let source = "contract Main {\n    address owner;\n    function f() public {\n        owner.$0";
    let labels = contextual_labels(&completions(source));
    assert!(labels.contains(&"balance".to_string()));
    assert!(labels.contains(&"transfer".to_string()));
}

#[test]
fn test_garbage_document_returns_catalogs() {
    let items = completions("}}}{{ (( $0");
    assert!(contextual(&items).is_empty());
}

#[test]
fn test_position_past_end_returns_catalogs() {
    let (text, _) = extract_cursor("contract A {}$0");
    let items = host(&[]).analysis(MAIN, &text).completions(solidity_assist::LineCol::new(40, 2));
    assert_eq!(items, static_items());
}

#[test]
fn test_completions_are_deterministic() {
    let first = complete("$0");
    let second = complete("$0");
    assert_eq!(first, second);
}

#[test]
fn test_catalog_sizes() {
    assert_eq!(elementary_types().len(), 104);
    let items = static_items();
    assert_eq!(&*items[0].label, "address");
    assert!(items.iter().any(|item| item.kind == CompletionKind::Keyword));
    assert!(items.iter().any(|item| item.kind == CompletionKind::Unit));
}

// ============================================================================
// DOCUMENT ITEMS
// ============================================================================

#[test]
fn test_document_completion_items() {
    let text = "contract A {\n    uint x;\n    event E(uint v);\n    function f() public {}\n}";
    let host = host(&[]);
    let analysis = host.analysis(MAIN, text);
    let labels: Vec<_> = analysis
        .document_completion_items()
        .iter()
        .map(|item| item.label.to_string())
        .collect();
    assert_eq!(labels, vec!["f", "E", "x"]);

    let broken = host.analysis(MAIN, "contract A {\n    uint x;\n");
    assert!(broken.document_completion_items().is_empty());
}
