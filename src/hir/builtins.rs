//! Members the language provides without a declaration.

/// Whether a builtin member is read or called.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuiltinKind {
    Property,
    Method,
}

/// A member of a global namespace or an intrinsic member of a type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuiltinMember {
    pub name: &'static str,
    pub kind: BuiltinKind,
    pub detail: &'static str,
    /// Snippet inserted for methods
    pub snippet: Option<&'static str>,
}

const fn property(name: &'static str, detail: &'static str) -> BuiltinMember {
    BuiltinMember {
        name,
        kind: BuiltinKind::Property,
        detail,
        snippet: None,
    }
}

const fn method(name: &'static str, detail: &'static str, snippet: &'static str) -> BuiltinMember {
    BuiltinMember {
        name,
        kind: BuiltinKind::Method,
        detail,
        snippet: Some(snippet),
    }
}

// ============================================================================
// GLOBAL NAMESPACES
// ============================================================================

pub const BLOCK_MEMBERS: &[BuiltinMember] = &[
    property("coinbase", "(address): Current block miner's address"),
    method(
        "blockhash",
        "(bytes32): DEPRECATED in 0.4.22, use blockhash(uint) instead. Hash of the given block, only works for the 256 most recent blocks excluding current",
        "blockhash(${1:blockNumber});",
    ),
    property("difficulty", "(uint): current block difficulty"),
    property("gaslimit", "(uint): current block gaslimit"),
    property("number", "(uint): current block number"),
    property("timestamp", "(uint): current block timestamp as seconds since unix epoch"),
];

pub const MSG_MEMBERS: &[BuiltinMember] = &[
    property("data", "(bytes): complete calldata"),
    property("gas", "(uint): remaining gas DEPRECATED in 0.4.21, use gasleft()"),
    property("sender", "(address): sender of the message (current call)"),
    property("sig", "(bytes4): first four bytes of the calldata (i.e. function identifier)"),
    property("value", "(uint): number of wei sent with the message"),
];

pub const TX_MEMBERS: &[BuiltinMember] = &[
    property("gas", "(uint): gas price of the transaction"),
    property("origin", "(address): sender of the transaction (full call chain)"),
];

pub const ABI_MEMBERS: &[BuiltinMember] = &[
    method(
        "encode",
        "encode(..) returns (bytes): ABI-encodes the given arguments",
        "encode(${1:arg});",
    ),
    method(
        "encodePacked",
        "encodePacked(..) returns (bytes): Performs packed encoding of the given arguments",
        "encodePacked(${1:arg});",
    ),
    method(
        "encodeWithSelector",
        "encodeWithSelector(bytes4,...) returns (bytes): ABI-encodes the given arguments starting from the second and prepends the given four-byte selector",
        "encodeWithSelector(${1:bytes4}, ${2:arg});",
    ),
    method(
        "encodeWithSignature",
        "encodeWithSignature(string,...) returns (bytes): Equivalent to abi.encodeWithSelector(bytes4(keccak256(signature), ...)",
        "encodeWithSignature(${1:signatureString}, ${2:arg});",
    ),
];

/// Namespaces recognised by the trailing letters of an identifier, in
/// matching order.
pub const GLOBAL_NAMESPACES: &[(&str, &[BuiltinMember])] = &[
    ("block", BLOCK_MEMBERS),
    ("msg", MSG_MEMBERS),
    ("tx", TX_MEMBERS),
    ("abi", ABI_MEMBERS),
];

/// Members of the global namespace `name` ends with.
///
/// This is a suffix match, so `myblock` matches `block` too.
// TODO: require a token boundary once completions on variables such as
// `myblock` are confirmed to be unwanted.
pub fn global_namespace(name: &str) -> Option<&'static [BuiltinMember]> {
    GLOBAL_NAMESPACES
        .iter()
        .find(|(namespace, _)| name.ends_with(namespace))
        .map(|(_, members)| *members)
}

// ============================================================================
// TYPE INTRINSICS
// ============================================================================

pub const ARRAY_MEMBERS: &[BuiltinMember] = &[
    property("length", "(uint): number of elements"),
    method("push", "push(value): appends an element (storage arrays)", "push(${1:value});"),
    method("pop", "pop(): removes the last element (storage arrays)", "pop();"),
];

pub const ADDRESS_MEMBERS: &[BuiltinMember] = &[
    property("balance", "(uint256): balance of the address in wei"),
    property("code", "(bytes): code at the address"),
    property("codehash", "(bytes32): code hash of the address"),
    method(
        "transfer",
        "transfer(uint256 amount): sends amount wei, reverts on failure",
        "transfer(${1:amount});",
    ),
    method(
        "send",
        "send(uint256 amount) returns (bool): sends amount wei, returns false on failure",
        "send(${1:amount});",
    ),
    method(
        "call",
        "call(bytes memory) returns (bool, bytes memory): low-level CALL",
        "call(${1:data});",
    ),
    method(
        "delegatecall",
        "delegatecall(bytes memory) returns (bool, bytes memory): low-level DELEGATECALL",
        "delegatecall(${1:data});",
    ),
    method(
        "staticcall",
        "staticcall(bytes memory) returns (bool, bytes memory): low-level STATICCALL",
        "staticcall(${1:data});",
    ),
];
