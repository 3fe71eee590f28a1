//! Logos-based lexer for Solidity
//!
//! Fast tokenization using the logos crate.

use super::syntax_kind::SyntaxKind;
use logos::Logos;
use text_size::{TextRange, TextSize};

/// A token with its kind, text, and position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub range: TextRange,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let span = self.inner.span();
        let range = TextRange::new(
            TextSize::from(span.start as u32),
            TextSize::from(span.end as u32),
        );

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => SyntaxKind::ERROR,
        };

        Some(Token { kind, text, range })
    }
}

/// Consume a block comment through its closing `*/`. An unterminated comment
/// runs to the end of the input.
fn block_comment(lex: &mut logos::Lexer<LogosToken>) {
    let rest = lex.remainder();
    let len = rest.find("*/").map_or(rest.len(), |end| end + 2);
    lex.bump(len);
}

/// Tokenize an entire string into a Vec, trivia included
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("/*", block_comment)]
    BlockComment,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_$]*")]
    Ident,

    #[regex(r"0[xX][0-9a-fA-F_]+")]
    #[regex(r"[0-9][0-9_]*(\.[0-9_]+)?([eE]-?[0-9_]+)?")]
    Number,

    #[regex(r#""([^"\\\r\n]|\\.)*""#)]
    #[regex(r#"'([^'\\\r\n]|\\.)*'"#)]
    String,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("=")]
    Eq,
    #[token("=>")]
    FatArrow,
    #[token("*")]
    Star,

    #[token("==")]
    #[token("!=")]
    #[token("<=")]
    #[token(">=")]
    #[token("&&")]
    #[token("||")]
    #[token("++")]
    #[token("--")]
    #[token("+=")]
    #[token("-=")]
    #[token("*=")]
    #[token("/=")]
    #[token("%=")]
    #[token("|=")]
    #[token("&=")]
    #[token("^=")]
    #[token("**")]
    #[token("<<")]
    #[token(">>")]
    #[token("<<=")]
    #[token(">>=")]
    #[token("->")]
    #[token(":=")]
    #[token("+")]
    #[token("-")]
    #[token("/")]
    #[token("%")]
    #[token("!")]
    #[token("~")]
    #[token("^")]
    #[token("&")]
    #[token("|")]
    #[token("<")]
    #[token(">")]
    #[token("?")]
    #[token(":")]
    #[token("@")]
    Operator,

    // =========================================================================
    // KEYWORDS (longest match wins in logos, so `contracts` stays an Ident)
    // =========================================================================
    #[token("abstract")]
    AbstractKw,
    #[token("as")]
    AsKw,
    #[token("calldata")]
    CalldataKw,
    #[token("constructor")]
    ConstructorKw,
    #[token("contract")]
    ContractKw,
    #[token("delete")]
    DeleteKw,
    #[token("emit")]
    EmitKw,
    #[token("enum")]
    EnumKw,
    #[token("event")]
    EventKw,
    #[token("fallback")]
    FallbackKw,
    #[token("for")]
    ForKw,
    #[token("from")]
    FromKw,
    #[token("function")]
    FunctionKw,
    #[token("import")]
    ImportKw,
    #[token("interface")]
    InterfaceKw,
    #[token("is")]
    IsKw,
    #[token("library")]
    LibraryKw,
    #[token("mapping")]
    MappingKw,
    #[token("memory")]
    MemoryKw,
    #[token("modifier")]
    ModifierKw,
    #[token("new")]
    NewKw,
    #[token("pragma")]
    PragmaKw,
    #[token("receive")]
    ReceiveKw,
    #[token("return")]
    ReturnKw,
    #[token("returns")]
    ReturnsKw,
    #[token("storage")]
    StorageKw,
    #[token("struct")]
    StructKw,
    #[token("using")]
    UsingKw,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        use LogosToken::*;
        match token {
            // Trivia
            Whitespace => SyntaxKind::WHITESPACE,
            LineComment => SyntaxKind::LINE_COMMENT,
            BlockComment => SyntaxKind::BLOCK_COMMENT,

            // Literals
            Ident => SyntaxKind::IDENT,
            Number => SyntaxKind::NUMBER,
            String => SyntaxKind::STRING,

            // Punctuation
            LBrace => SyntaxKind::L_BRACE,
            RBrace => SyntaxKind::R_BRACE,
            LBracket => SyntaxKind::L_BRACKET,
            RBracket => SyntaxKind::R_BRACKET,
            LParen => SyntaxKind::L_PAREN,
            RParen => SyntaxKind::R_PAREN,
            Semicolon => SyntaxKind::SEMICOLON,
            Comma => SyntaxKind::COMMA,
            Dot => SyntaxKind::DOT,
            Eq => SyntaxKind::EQ,
            FatArrow => SyntaxKind::FAT_ARROW,
            Star => SyntaxKind::STAR,
            Operator => SyntaxKind::OPERATOR,

            // Keywords
            AbstractKw => SyntaxKind::ABSTRACT_KW,
            AsKw => SyntaxKind::AS_KW,
            CalldataKw => SyntaxKind::CALLDATA_KW,
            ConstructorKw => SyntaxKind::CONSTRUCTOR_KW,
            ContractKw => SyntaxKind::CONTRACT_KW,
            DeleteKw => SyntaxKind::DELETE_KW,
            EmitKw => SyntaxKind::EMIT_KW,
            EnumKw => SyntaxKind::ENUM_KW,
            EventKw => SyntaxKind::EVENT_KW,
            FallbackKw => SyntaxKind::FALLBACK_KW,
            ForKw => SyntaxKind::FOR_KW,
            FromKw => SyntaxKind::FROM_KW,
            FunctionKw => SyntaxKind::FUNCTION_KW,
            ImportKw => SyntaxKind::IMPORT_KW,
            InterfaceKw => SyntaxKind::INTERFACE_KW,
            IsKw => SyntaxKind::IS_KW,
            LibraryKw => SyntaxKind::LIBRARY_KW,
            MappingKw => SyntaxKind::MAPPING_KW,
            MemoryKw => SyntaxKind::MEMORY_KW,
            ModifierKw => SyntaxKind::MODIFIER_KW,
            NewKw => SyntaxKind::NEW_KW,
            PragmaKw => SyntaxKind::PRAGMA_KW,
            ReceiveKw => SyntaxKind::RECEIVE_KW,
            ReturnKw => SyntaxKind::RETURN_KW,
            ReturnsKw => SyntaxKind::RETURNS_KW,
            StorageKw => SyntaxKind::STORAGE_KW,
            StructKw => SyntaxKind::STRUCT_KW,
            UsingKw => SyntaxKind::USING_KW,
        }
    }
}
