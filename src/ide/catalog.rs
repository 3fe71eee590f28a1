//! Static completion catalogs appended to every completion response.

use super::completion::{CompletionItem, CompletionKind};

/// Every static catalog in response order: types, keywords, units, global
/// functions, global variables.
pub fn static_items() -> Vec<CompletionItem> {
    let mut items = type_items();
    items.extend(keyword_items());
    items.extend(unit_items());
    items.extend(global_function_items());
    items.extend(global_variable_items());
    items
}

/// Elementary type names: the unsized base names, then `intN`, `uintN` and
/// `bytesN/8` for every N in 8..=256 step 8.
pub fn elementary_types() -> Vec<String> {
    let mut types: Vec<String> = ["address", "string", "bytes", "byte", "int", "uint", "bool", "hash"]
        .iter()
        .map(|name| name.to_string())
        .collect();
    for bits in (8..=256).step_by(8) {
        types.push(format!("int{bits}"));
        types.push(format!("uint{bits}"));
        types.push(format!("bytes{}", bits / 8));
    }
    types
}

pub fn type_items() -> Vec<CompletionItem> {
    elementary_types()
        .into_iter()
        .map(|name| {
            let detail = format!("{name} type");
            CompletionItem::new(name, CompletionKind::Keyword).with_detail(detail)
        })
        .collect()
}

const KEYWORDS: &[&str] = &[
    "modifier", "mapping", "break", "continue", "delete", "else", "for", "if", "new", "return",
    "returns", "while", "using", "private", "public", "external", "internal", "payable",
    "nonpayable", "view", "pure", "case", "do", "else", "finally", "in", "instanceof", "return",
    "throw", "try", "catch", "typeof", "yield", "void", "virtual", "override",
];

/// Keywords that complete as a more specific kind.
const KIND_KEYWORDS: &[(&str, CompletionKind)] = &[
    ("contract", CompletionKind::Class),
    ("library", CompletionKind::Class),
    ("storage", CompletionKind::Field),
    ("memory", CompletionKind::Field),
    ("var", CompletionKind::Field),
    ("constant", CompletionKind::Constant),
    ("immutable", CompletionKind::Keyword),
    ("constructor", CompletionKind::Constructor),
    ("event", CompletionKind::Event),
    ("import", CompletionKind::Module),
    ("enum", CompletionKind::Enum),
    ("struct", CompletionKind::Struct),
    ("function", CompletionKind::Function),
];

pub fn keyword_items() -> Vec<CompletionItem> {
    KEYWORDS
        .iter()
        .map(|keyword| CompletionItem::new(*keyword, CompletionKind::Keyword))
        .chain(
            KIND_KEYWORDS
                .iter()
                .map(|(keyword, kind)| CompletionItem::new(*keyword, *kind)),
        )
        .collect()
}

const ETHER_UNITS: &[&str] = &["wei", "gwei", "finney", "szabo", "ether"];
const TIME_UNITS: &[&str] = &["seconds", "minutes", "hours", "days", "weeks", "years"];

pub fn unit_items() -> Vec<CompletionItem> {
    let ether = ETHER_UNITS.iter().map(|unit| {
        CompletionItem::new(*unit, CompletionKind::Unit).with_detail(format!("{unit}: ether unit"))
    });
    let time = TIME_UNITS.iter().map(|unit| {
        let detail = if *unit == "years" {
            format!("DEPRECATED: {unit}: time unit")
        } else {
            format!("{unit}: time unit")
        };
        CompletionItem::new(*unit, CompletionKind::Unit).with_detail(detail)
    });
    ether.chain(time).collect()
}

/// (label, kind, detail, snippet)
const GLOBAL_FUNCTIONS: &[(&str, CompletionKind, &str, &str)] = &[
    (
        "assert",
        CompletionKind::Function,
        "assert(bool condition): throws if the condition is not met - to be used for internal errors.",
        "assert(${1:condition});",
    ),
    (
        "gasleft",
        CompletionKind::Function,
        "gasleft(): returns the remaining gas",
        "gasleft();",
    ),
    (
        "unicode",
        CompletionKind::Function,
        "unicode: converts string into unicode",
        "unicode\"${1:text}\"",
    ),
    (
        "blockhash",
        CompletionKind::Function,
        "blockhash(uint blockNumber): hash of the given block - only works for 256 most recent, excluding current, blocks",
        "blockhash(${1:blockNumber});",
    ),
    (
        "require",
        CompletionKind::Method,
        "require(bool condition): reverts if the condition is not met - to be used for errors in inputs or external components.",
        "require(${1:condition});",
    ),
    (
        "require",
        CompletionKind::Method,
        "require(bool condition, string message): reverts if the condition is not met - to be used for errors in inputs or external components. Also provides an error message.",
        "require(${1:condition}, ${2:message});",
    ),
    (
        "revert",
        CompletionKind::Method,
        "revert(): abort execution and revert state changes",
        "revert();",
    ),
    (
        "addmod",
        CompletionKind::Method,
        "addmod(uint x, uint y, uint k) returns (uint): compute (x + y) % k where the addition is performed with arbitrary precision and does not wrap around at 2**256",
        "addmod(${1:x}, ${2:y}, ${3:k})",
    ),
    (
        "mulmod",
        CompletionKind::Method,
        "mulmod(uint x, uint y, uint k) returns (uint): compute (x * y) % k where the multiplication is performed with arbitrary precision and does not wrap around at 2**256",
        "mulmod(${1:x}, ${2:y}, ${3:k})",
    ),
    (
        "keccak256",
        CompletionKind::Method,
        "keccak256(...) returns (bytes32): compute the Ethereum-SHA-3 (Keccak-256) hash of the (tightly packed) arguments",
        "keccak256(${1:x})",
    ),
    (
        "sha256",
        CompletionKind::Method,
        "sha256(...) returns (bytes32): compute the SHA-256 hash of the (tightly packed) arguments",
        "sha256(${1:x})",
    ),
    (
        "sha3",
        CompletionKind::Method,
        "sha3(...) returns (bytes32): alias to keccak256",
        "sha3(${1:x})",
    ),
    (
        "ripemd160",
        CompletionKind::Method,
        "ripemd160(...) returns (bytes20): compute RIPEMD-160 hash of the (tightly packed) arguments",
        "ripemd160(${1:x})",
    ),
    (
        "ecrecover",
        CompletionKind::Method,
        "ecrecover(bytes32 hash, uint8 v, bytes32 r, bytes32 s) returns (address): recover the address associated with the public key from elliptic curve signature or return zero on error",
        "ecrecover(${1:hash}, ${2:v}, ${3:r}, ${4:s})",
    ),
];

pub fn global_function_items() -> Vec<CompletionItem> {
    GLOBAL_FUNCTIONS
        .iter()
        .map(|(label, kind, detail, snippet)| {
            CompletionItem::new(*label, *kind)
                .with_detail(*detail)
                .with_snippet(*snippet)
        })
        .collect()
}

const GLOBAL_VARIABLES: &[(&str, &str)] = &[
    ("block", "Current block"),
    ("msg", "Current Message"),
    ("now", "(uint): current block timestamp (alias for block.timestamp)"),
    ("tx", "Current transaction"),
    ("abi", "ABI encoding / decoding"),
];

pub fn global_variable_items() -> Vec<CompletionItem> {
    GLOBAL_VARIABLES
        .iter()
        .map(|(label, detail)| CompletionItem::new(*label, CompletionKind::Variable).with_detail(*detail))
        .collect()
}
