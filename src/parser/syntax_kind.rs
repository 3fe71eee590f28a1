//! Token kinds produced by the lexer.
//!
//! Only the keywords the declaration parser branches on get their own kind;
//! every other word (including elementary type names and contextual keywords
//! such as `error` or `indexed`) is an `IDENT`.

/// All token kinds in Solidity source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (whitespace and comments - dropped before parsing)
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,
    BLOCK_COMMENT,

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,  // identifier, `$` allowed
    NUMBER, // 42, 0xff, 1e18, 1.5
    STRING, // "hello" or 'hello'

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_BRACE,   // {
    R_BRACE,   // }
    L_BRACKET, // [
    R_BRACKET, // ]
    L_PAREN,   // (
    R_PAREN,   // )
    SEMICOLON, // ;
    COMMA,     // ,
    DOT,       // .
    EQ,        // =
    FAT_ARROW, // =>
    STAR,      // *
    OPERATOR,  // every other operator: == != <= >= + - ! && ...

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    ABSTRACT_KW,
    AS_KW,
    CALLDATA_KW,
    CONSTRUCTOR_KW,
    CONTRACT_KW,
    DELETE_KW,
    EMIT_KW,
    ENUM_KW,
    EVENT_KW,
    FALLBACK_KW,
    FOR_KW,
    FROM_KW,
    FUNCTION_KW,
    IMPORT_KW,
    INTERFACE_KW,
    IS_KW,
    LIBRARY_KW,
    MAPPING_KW,
    MEMORY_KW,
    MODIFIER_KW,
    NEW_KW,
    PRAGMA_KW,
    RECEIVE_KW,
    RETURN_KW,
    RETURNS_KW,
    STORAGE_KW,
    STRUCT_KW,
    USING_KW,

    /// Unrecognised character
    ERROR,
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace or comment).
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::LINE_COMMENT | Self::BLOCK_COMMENT)
    }

    /// Check if this is a keyword token.
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::ABSTRACT_KW as u16) && (self as u16) <= (Self::USING_KW as u16)
    }

    /// Keywords that remain valid identifiers outside their own construct
    /// (`address from`, a state variable called `receive`).
    pub fn is_contextual_keyword(self) -> bool {
        matches!(self, Self::FROM_KW | Self::FALLBACK_KW | Self::RECEIVE_KW)
    }

    /// Check if this is a data location keyword (`memory`, `storage`, `calldata`).
    pub fn is_data_location(self) -> bool {
        matches!(self, Self::MEMORY_KW | Self::STORAGE_KW | Self::CALLDATA_KW)
    }
}
