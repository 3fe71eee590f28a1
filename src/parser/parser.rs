//! Recursive descent parser for Solidity declarations
//!
//! Builds a [`SourceUnit`] from tokens. Parsing is tolerant: every syntax
//! error is recorded and the parser resynchronises at the next `;` or
//! balanced block, so a half-typed document still yields its contracts.

use super::ast::*;
use super::lexer::{Lexer, Token};
use super::syntax_kind::SyntaxKind;
use smol_str::SmolStr;
use std::fmt;
use text_size::{TextRange, TextSize};
use thiserror::Error;

/// Statement keywords the lexer leaves as identifiers. None of them can
/// start a variable declaration.
const STATEMENT_WORDS: &[&str] = &[
    "assembly", "break", "catch", "continue", "do", "else", "if", "revert", "throw", "try",
    "unchecked", "while",
];

/// Parse result containing the source unit and any errors
#[derive(Debug, Clone)]
pub struct Parse {
    pub unit: SourceUnit,
    pub errors: Vec<SyntaxError>,
}

impl Parse {
    /// Check if parsing succeeded without errors
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Strict view of the parse: any recorded error fails the whole unit.
    pub fn into_result(self) -> Result<SourceUnit, ParseError> {
        if self.errors.is_empty() {
            Ok(self.unit)
        } else {
            Err(ParseError {
                errors: self.errors,
            })
        }
    }
}

/// A syntax error with location and message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub range: TextRange,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, range: TextRange) -> Self {
        Self {
            message: message.into(),
            range,
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {}..{}",
            self.message,
            u32::from(self.range.start()),
            u32::from(self.range.end())
        )
    }
}

/// Strict parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("source has {} syntax error(s), first: {}", .errors.len(), first_error(.errors))]
pub struct ParseError {
    pub errors: Vec<SyntaxError>,
}

fn first_error(errors: &[SyntaxError]) -> String {
    errors
        .first()
        .map(ToString::to_string)
        .unwrap_or_default()
}

/// Parse Solidity source code into a [`SourceUnit`]
pub fn parse(input: &str) -> Parse {
    let mut errors = Vec::new();
    let tokens: Vec<_> = Lexer::new(input)
        .filter(|token| {
            if token.kind == SyntaxKind::ERROR {
                errors.push(SyntaxError::new("unexpected character", token.range));
            }
            !token.kind.is_trivia() && token.kind != SyntaxKind::ERROR
        })
        .collect();
    let mut parser = Parser::new(tokens, TextSize::of(input));
    parser.errors = errors;
    let unit = parser.parse_source_unit();
    parser.finish(unit)
}

/// The parser state
struct Parser<'a> {
    tokens: Vec<Token<'a>>,
    pos: usize,
    errors: Vec<SyntaxError>,
    text_len: TextSize,
}

impl<'a> Parser<'a> {
    fn new(tokens: Vec<Token<'a>>, text_len: TextSize) -> Self {
        Self {
            tokens,
            pos: 0,
            errors: Vec::new(),
            text_len,
        }
    }

    fn finish(self, unit: SourceUnit) -> Parse {
        Parse {
            unit,
            errors: self.errors,
        }
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    fn current(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos)
    }

    fn current_kind(&self) -> SyntaxKind {
        self.current().map(|t| t.kind).unwrap_or(SyntaxKind::ERROR)
    }

    fn current_text(&self) -> &'a str {
        self.current().map(|t| t.text).unwrap_or("")
    }

    fn current_range(&self) -> TextRange {
        self.current()
            .map(|t| t.range)
            .unwrap_or_else(|| TextRange::empty(self.text_len))
    }

    fn prev_end(&self) -> TextSize {
        self.pos
            .checked_sub(1)
            .and_then(|idx| self.tokens.get(idx))
            .map(|t| t.range.end())
            .unwrap_or_default()
    }

    fn nth(&self, n: usize) -> SyntaxKind {
        self.tokens
            .get(self.pos + n)
            .map(|t| t.kind)
            .unwrap_or(SyntaxKind::ERROR)
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        !self.at_eof() && self.current_kind() == kind
    }

    fn at_any(&self, kinds: &[SyntaxKind]) -> bool {
        !self.at_eof() && kinds.contains(&self.current_kind())
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// An identifier, or a keyword usable as one.
    fn at_name(&self) -> bool {
        let kind = self.current_kind();
        !self.at_eof() && (kind == SyntaxKind::IDENT || kind.is_contextual_keyword())
    }

    fn at_contextual(&self, text: &str) -> bool {
        self.at(SyntaxKind::IDENT) && self.current_text() == text
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    fn bump(&mut self) -> Option<Token<'a>> {
        let token = self.current().copied()?;
        self.pos += 1;
        Some(token)
    }

    fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: SyntaxKind) -> bool {
        if self.eat(kind) {
            true
        } else {
            self.error(format!("expected {:?}", kind));
            false
        }
    }

    fn eat_name(&mut self) -> Option<(SmolStr, TextRange)> {
        if !self.at_name() {
            return None;
        }
        self.bump().map(|t| (SmolStr::new(t.text), t.range))
    }

    fn expect_name(&mut self, what: &str) -> Option<(SmolStr, TextRange)> {
        let name = self.eat_name();
        if name.is_none() {
            self.error(format!("expected {what}"));
        }
        name
    }

    fn eat_data_location(&mut self) -> Option<DataLocation> {
        let location = match self.current_kind() {
            SyntaxKind::MEMORY_KW => DataLocation::Memory,
            SyntaxKind::STORAGE_KW => DataLocation::Storage,
            SyntaxKind::CALLDATA_KW => DataLocation::Calldata,
            _ => return None,
        };
        if self.at_eof() {
            return None;
        }
        self.pos += 1;
        Some(location)
    }

    /// Dotted identifier path such as `Lib.Struct`.
    fn parse_path(&mut self) -> Option<(SmolStr, TextRange)> {
        let (first, range) = self.eat_name()?;
        let mut path = first.to_string();
        let mut end = range.end();
        while self.at(SyntaxKind::DOT) && self.nth(1) == SyntaxKind::IDENT {
            self.pos += 1;
            if let Some(segment) = self.bump() {
                path.push('.');
                path.push_str(segment.text);
                end = segment.range.end();
            }
        }
        Some((SmolStr::new(path), TextRange::new(range.start(), end)))
    }

    /// Consume a balanced `(...)`, `[...]` or `{...}` group starting at the
    /// current token.
    fn skip_balanced(&mut self) -> bool {
        let (open, close) = match self.current_kind() {
            SyntaxKind::L_PAREN => (SyntaxKind::L_PAREN, SyntaxKind::R_PAREN),
            SyntaxKind::L_BRACKET => (SyntaxKind::L_BRACKET, SyntaxKind::R_BRACKET),
            SyntaxKind::L_BRACE => (SyntaxKind::L_BRACE, SyntaxKind::R_BRACE),
            _ => return false,
        };
        let mut depth = 0usize;
        while let Some(token) = self.bump() {
            if token.kind == open {
                depth += 1;
            } else if token.kind == close {
                depth -= 1;
                if depth == 0 {
                    return true;
                }
            }
        }
        false
    }

    /// Skip an item we don't model: up to a `;` or the end of its block.
    /// A `}` that closes the enclosing block is left in place.
    fn skip_item(&mut self) {
        let mut depth = 0usize;
        while !self.at_eof() {
            let kind = self.current_kind();
            if depth == 0 && kind == SyntaxKind::R_BRACE {
                return;
            }
            self.pos += 1;
            match kind {
                SyntaxKind::SEMICOLON if depth == 0 => return,
                SyntaxKind::L_BRACE | SyntaxKind::L_PAREN | SyntaxKind::L_BRACKET => depth += 1,
                SyntaxKind::R_BRACE | SyntaxKind::R_PAREN | SyntaxKind::R_BRACKET => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 && kind == SyntaxKind::R_BRACE {
                        return;
                    }
                }
                _ => {}
            }
        }
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    fn error(&mut self, message: impl Into<String>) {
        let range = self.current_range();
        self.errors.push(SyntaxError::new(message, range));
    }

    fn error_recover(&mut self, message: impl Into<String>) {
        self.error(message);
        self.skip_item();
    }

    // =========================================================================
    // Source unit
    // =========================================================================

    fn parse_source_unit(&mut self) -> SourceUnit {
        let mut items = Vec::new();
        while !self.at_eof() {
            match self.current_kind() {
                SyntaxKind::IMPORT_KW => {
                    if let Some(import) = self.parse_import() {
                        items.push(SourceItem::Import(import));
                    }
                }
                SyntaxKind::ABSTRACT_KW
                | SyntaxKind::CONTRACT_KW
                | SyntaxKind::LIBRARY_KW
                | SyntaxKind::INTERFACE_KW => {
                    if let Some(contract) = self.parse_contract() {
                        items.push(SourceItem::Contract(contract));
                    }
                }
                SyntaxKind::STRUCT_KW => {
                    if let Some(strukt) = self.parse_struct() {
                        items.push(SourceItem::Struct(strukt));
                    }
                }
                SyntaxKind::ENUM_KW => {
                    if let Some(enumeration) = self.parse_enum() {
                        items.push(SourceItem::Enum(enumeration));
                    }
                }
                SyntaxKind::R_BRACE => {
                    self.error("unexpected `}`");
                    self.pos += 1;
                }
                // pragma, free functions, errors, constants, file-level using
                _ => self.skip_item(),
            }
        }
        SourceUnit { items }
    }

    fn parse_import(&mut self) -> Option<ImportDirective> {
        let start = self.current_range().start();
        self.pos += 1;
        let mut path = None;
        while !self.at_eof() && !self.at(SyntaxKind::SEMICOLON) {
            if self.current_kind().is_keyword() && !self.at_any(&[SyntaxKind::AS_KW, SyntaxKind::FROM_KW]) {
                break;
            }
            if let Some(token) = self.bump() {
                if token.kind == SyntaxKind::STRING && path.is_none() {
                    path = Some((unquote(token.text), token.range));
                }
            }
        }
        let end = self.prev_end();
        self.expect(SyntaxKind::SEMICOLON);

        match path {
            Some((path, path_range)) => Some(ImportDirective {
                path,
                path_range,
                range: TextRange::new(start, end),
            }),
            None => {
                self.errors.push(SyntaxError::new(
                    "import without a path",
                    TextRange::new(start, end),
                ));
                None
            }
        }
    }

    // =========================================================================
    // Contracts
    // =========================================================================

    fn parse_contract(&mut self) -> Option<ContractDeclaration> {
        let start = self.current_range().start();
        let is_abstract = self.eat(SyntaxKind::ABSTRACT_KW);
        let kind = match self.current_kind() {
            SyntaxKind::CONTRACT_KW => ContractKind::Contract,
            SyntaxKind::LIBRARY_KW => ContractKind::Library,
            SyntaxKind::INTERFACE_KW => ContractKind::Interface,
            _ => {
                self.error_recover("expected `contract`");
                return None;
            }
        };
        self.pos += 1;

        let Some((name, name_range)) = self.expect_name("contract name") else {
            self.skip_item();
            return None;
        };

        let mut base_contracts = Vec::new();
        if self.eat(SyntaxKind::IS_KW) {
            loop {
                match self.parse_path() {
                    Some((base, _)) => base_contracts.push(base),
                    None => {
                        self.error("expected base contract name");
                        break;
                    }
                }
                if self.at(SyntaxKind::L_PAREN) {
                    self.skip_balanced();
                }
                if !self.eat(SyntaxKind::COMMA) {
                    break;
                }
            }
        }

        if !self.at(SyntaxKind::L_BRACE) {
            self.error("expected contract body");
            while !self.at_eof() && !self.at_any(&[SyntaxKind::L_BRACE, SyntaxKind::SEMICOLON]) {
                self.pos += 1;
            }
            if !self.eat(SyntaxKind::L_BRACE) {
                self.eat(SyntaxKind::SEMICOLON);
                return None;
            }
        } else {
            self.pos += 1;
        }

        let mut members = Vec::new();
        loop {
            if self.at_eof() {
                self.error("unterminated contract body");
                break;
            }
            if self.eat(SyntaxKind::R_BRACE) {
                break;
            }
            if let Some(member) = self.parse_contract_member() {
                members.push(member);
            }
        }

        Some(ContractDeclaration {
            kind,
            is_abstract,
            name,
            name_range,
            base_contracts,
            members,
            range: TextRange::new(start, self.prev_end()),
        })
    }

    fn parse_contract_member(&mut self) -> Option<ContractMember> {
        match self.current_kind() {
            SyntaxKind::FUNCTION_KW | SyntaxKind::CONSTRUCTOR_KW => {
                self.parse_function().map(ContractMember::Function)
            }
            SyntaxKind::FALLBACK_KW | SyntaxKind::RECEIVE_KW
                if self.nth(1) == SyntaxKind::L_PAREN =>
            {
                self.parse_function().map(ContractMember::Function)
            }
            SyntaxKind::EVENT_KW => self.parse_event().map(ContractMember::Event),
            SyntaxKind::STRUCT_KW => self.parse_struct().map(ContractMember::Struct),
            SyntaxKind::ENUM_KW => self.parse_enum().map(ContractMember::Enum),
            SyntaxKind::USING_KW => self.parse_using().map(ContractMember::Using),
            SyntaxKind::MODIFIER_KW => {
                self.skip_item();
                None
            }
            SyntaxKind::IDENT
                if self.current_text() == "error" && self.nth(1) == SyntaxKind::IDENT =>
            {
                self.skip_item();
                None
            }
            SyntaxKind::IDENT
                if self.current_text() == "type" && self.nth(2) == SyntaxKind::IS_KW =>
            {
                self.skip_item();
                None
            }
            SyntaxKind::SEMICOLON => {
                self.pos += 1;
                None
            }
            _ => self
                .parse_state_variable()
                .map(ContractMember::StateVariable),
        }
    }

    fn parse_state_variable(&mut self) -> Option<StateVariableDeclaration> {
        let start = self.current_range().start();
        let Some(type_name) = self.parse_type_name() else {
            self.error_recover("expected contract member");
            return None;
        };

        // visibility, `constant`, `immutable`, `override(A, B)`
        let (name, name_range) = loop {
            if self.at_name() && matches!(self.nth(1), SyntaxKind::SEMICOLON | SyntaxKind::EQ) {
                break self.eat_name()?;
            }
            if self.at(SyntaxKind::IDENT) {
                self.pos += 1;
                if self.at(SyntaxKind::L_PAREN) {
                    self.skip_balanced();
                }
                continue;
            }
            self.error_recover("expected state variable name");
            return None;
        };

        // initializer
        self.skip_item();

        Some(StateVariableDeclaration {
            type_name,
            name,
            name_range,
            range: TextRange::new(start, self.prev_end()),
        })
    }

    // =========================================================================
    // Functions
    // =========================================================================

    fn parse_function(&mut self) -> Option<FunctionDeclaration> {
        let keyword = self.bump()?;
        let start = keyword.range.start();
        let (kind, name, name_range) = match keyword.kind {
            SyntaxKind::CONSTRUCTOR_KW => (FunctionKind::Constructor, SmolStr::new_static("constructor"), keyword.range),
            SyntaxKind::FALLBACK_KW => (FunctionKind::Fallback, SmolStr::new_static("fallback"), keyword.range),
            SyntaxKind::RECEIVE_KW => (FunctionKind::Receive, SmolStr::new_static("receive"), keyword.range),
            // legacy unnamed fallback: `function () external { ... }`
            _ if self.at(SyntaxKind::L_PAREN) => {
                (FunctionKind::Fallback, SmolStr::new_static("fallback"), keyword.range)
            }
            _ => match self.expect_name("function name") {
                Some((name, range)) => (FunctionKind::Function, name, range),
                None => {
                    self.skip_item();
                    return None;
                }
            },
        };

        let Some(params) = self.parse_parameter_list() else {
            self.skip_item();
            return None;
        };

        // visibility, mutability, modifier invocations, return parameters
        let mut returns = Vec::new();
        loop {
            match self.current_kind() {
                _ if self.at_eof() => break,
                SyntaxKind::RETURNS_KW => {
                    self.pos += 1;
                    returns = self.parse_parameter_list().unwrap_or_default();
                }
                SyntaxKind::L_PAREN => {
                    self.skip_balanced();
                }
                SyntaxKind::SEMICOLON | SyntaxKind::L_BRACE | SyntaxKind::R_BRACE => break,
                kind if kind.is_keyword() => break,
                _ => self.pos += 1,
            }
        }

        let (body, locals) = if self.at(SyntaxKind::L_BRACE) {
            let (range, locals) = self.parse_function_body();
            (Some(range), locals)
        } else {
            self.expect(SyntaxKind::SEMICOLON);
            (None, Vec::new())
        };

        Some(FunctionDeclaration {
            kind,
            name,
            name_range,
            params,
            returns,
            body,
            locals,
            range: TextRange::new(start, self.prev_end()),
        })
    }

    fn parse_parameter_list(&mut self) -> Option<Vec<Parameter>> {
        if !self.expect(SyntaxKind::L_PAREN) {
            return None;
        }
        let mut params = Vec::new();
        while !self.at_eof() && !self.at(SyntaxKind::R_PAREN) {
            let start = self.current_range().start();
            match self.parse_type_name() {
                Some(type_name) => {
                    let location = self.eat_data_location();
                    while self.at_contextual("indexed") {
                        self.pos += 1;
                    }
                    let (name, name_range) = match self.eat_name() {
                        Some((name, range)) => (Some(name), Some(range)),
                        None => (None, None),
                    };
                    params.push(Parameter {
                        type_name,
                        location,
                        name,
                        name_range,
                        range: TextRange::new(start, self.prev_end()),
                    });
                }
                None => {
                    self.error("expected parameter type");
                    while !self.at_eof()
                        && !self.at_any(&[
                            SyntaxKind::COMMA,
                            SyntaxKind::R_PAREN,
                            SyntaxKind::L_BRACE,
                            SyntaxKind::R_BRACE,
                            SyntaxKind::SEMICOLON,
                        ])
                    {
                        self.pos += 1;
                    }
                }
            }
            if !self.eat(SyntaxKind::COMMA) {
                break;
            }
        }
        self.expect(SyntaxKind::R_PAREN);
        Some(params)
    }

    /// Walk a function body, collecting local variable declarations found at
    /// statement starts. Returns the body range, braces included.
    fn parse_function_body(&mut self) -> (TextRange, Vec<LocalDeclaration>) {
        let start = self.current_range().start();
        self.pos += 1;
        let mut depth = 1usize;
        let mut locals = Vec::new();
        let mut statement_start = true;

        while !self.at_eof() {
            if statement_start {
                if let Some(mut found) = self.try_local_declarations() {
                    locals.append(&mut found);
                }
            }
            let Some(token) = self.bump() else {
                break;
            };
            // `else` and `do` introduce a statement without a brace
            statement_start = token.kind == SyntaxKind::IDENT && matches!(token.text, "else" | "do");
            match token.kind {
                SyntaxKind::L_BRACE | SyntaxKind::SEMICOLON => statement_start = true,
                SyntaxKind::R_BRACE => {
                    depth -= 1;
                    if depth == 0 {
                        return (TextRange::new(start, token.range.end()), locals);
                    }
                    statement_start = true;
                }
                SyntaxKind::FOR_KW if self.at(SyntaxKind::L_PAREN) => {
                    self.pos += 1;
                    statement_start = true;
                }
                _ => {}
            }
            if token.kind == SyntaxKind::L_BRACE {
                depth += 1;
            }
        }

        self.errors.push(SyntaxError::new(
            "unterminated function body",
            TextRange::new(start, self.text_len),
        ));
        (TextRange::new(start, self.text_len), locals)
    }

    /// Speculatively parse `Type [location] name` (`=` or `;` follows) or a
    /// tuple declaration `(Type a, , Type b) =`. Rewinds on failure.
    fn try_local_declarations(&mut self) -> Option<Vec<LocalDeclaration>> {
        let checkpoint = self.pos;
        let result = if self.at(SyntaxKind::L_PAREN) {
            self.parse_tuple_declaration()
        } else {
            self.parse_declaration_head()
                .filter(|_| self.at_any(&[SyntaxKind::EQ, SyntaxKind::SEMICOLON]))
                .map(|decl| vec![decl])
        };
        if result.is_none() {
            self.pos = checkpoint;
        }
        result
    }

    fn parse_tuple_declaration(&mut self) -> Option<Vec<LocalDeclaration>> {
        self.pos += 1;
        let mut decls = Vec::new();
        loop {
            match self.current_kind() {
                SyntaxKind::COMMA if !self.at_eof() => self.pos += 1,
                SyntaxKind::R_PAREN if !self.at_eof() => {
                    self.pos += 1;
                    break;
                }
                _ => {
                    decls.push(self.parse_declaration_head()?);
                    if !self.at_any(&[SyntaxKind::COMMA, SyntaxKind::R_PAREN]) {
                        return None;
                    }
                }
            }
        }
        (!decls.is_empty() && self.at(SyntaxKind::EQ)).then_some(decls)
    }

    fn parse_declaration_head(&mut self) -> Option<LocalDeclaration> {
        if !(self.at_name() || self.at(SyntaxKind::MAPPING_KW)) {
            return None;
        }
        if self.at(SyntaxKind::IDENT) && STATEMENT_WORDS.contains(&self.current_text()) {
            return None;
        }
        let start = self.current_range().start();
        let type_name = self.parse_type_name()?;
        self.eat_data_location();
        let (name, name_range) = self.eat_name()?;
        Some(LocalDeclaration {
            type_name,
            name,
            name_range,
            range: TextRange::new(start, name_range.end()),
        })
    }

    // =========================================================================
    // Other declarations
    // =========================================================================

    fn parse_event(&mut self) -> Option<EventDeclaration> {
        let start = self.current_range().start();
        self.pos += 1;
        let Some((name, name_range)) = self.expect_name("event name") else {
            self.skip_item();
            return None;
        };
        let Some(params) = self.parse_parameter_list() else {
            self.skip_item();
            return None;
        };
        if self.at_contextual("anonymous") {
            self.pos += 1;
        }
        self.expect(SyntaxKind::SEMICOLON);
        Some(EventDeclaration {
            name,
            name_range,
            params,
            range: TextRange::new(start, self.prev_end()),
        })
    }

    fn parse_struct(&mut self) -> Option<StructDeclaration> {
        let start = self.current_range().start();
        self.pos += 1;
        let Some((name, name_range)) = self.expect_name("struct name") else {
            self.skip_item();
            return None;
        };
        if !self.expect(SyntaxKind::L_BRACE) {
            self.skip_item();
            return None;
        }

        let mut fields = Vec::new();
        loop {
            if self.at_eof() {
                self.error("unterminated struct");
                break;
            }
            if self.eat(SyntaxKind::R_BRACE) {
                break;
            }
            let Some(type_name) = self.parse_type_name() else {
                self.error_recover("expected struct field");
                continue;
            };
            match self.expect_name("field name") {
                Some((name, name_range)) => {
                    fields.push(StructField {
                        type_name,
                        name,
                        name_range,
                    });
                    self.expect(SyntaxKind::SEMICOLON);
                }
                None => self.skip_item(),
            }
        }

        Some(StructDeclaration {
            name,
            name_range,
            fields,
            range: TextRange::new(start, self.prev_end()),
        })
    }

    fn parse_enum(&mut self) -> Option<EnumDeclaration> {
        let start = self.current_range().start();
        self.pos += 1;
        let Some((name, name_range)) = self.expect_name("enum name") else {
            self.skip_item();
            return None;
        };
        if !self.expect(SyntaxKind::L_BRACE) {
            self.skip_item();
            return None;
        }

        let mut members = Vec::new();
        loop {
            if self.at_eof() {
                self.error("unterminated enum");
                break;
            }
            if self.eat(SyntaxKind::R_BRACE) {
                break;
            }
            match self.eat_name() {
                Some((name, range)) => members.push(EnumMember { name, range }),
                None => {
                    self.error("expected enum member");
                    self.pos += 1;
                }
            }
            if !self.eat(SyntaxKind::COMMA) {
                self.expect(SyntaxKind::R_BRACE);
                break;
            }
        }

        Some(EnumDeclaration {
            name,
            name_range,
            members,
            range: TextRange::new(start, self.prev_end()),
        })
    }

    fn parse_using(&mut self) -> Option<UsingDirective> {
        let start = self.current_range().start();
        self.pos += 1;

        // `using {f, g} for T;` binds free functions, which are not modelled
        if self.at(SyntaxKind::L_BRACE) {
            self.skip_balanced();
            self.skip_item();
            return None;
        }

        let Some((library, _)) = self.parse_path() else {
            self.error_recover("expected library name");
            return None;
        };
        if !self.eat(SyntaxKind::FOR_KW) {
            self.error_recover("expected `for`");
            return None;
        }
        let target = if self.eat(SyntaxKind::STAR) {
            None
        } else {
            match self.parse_type_name() {
                Some(target) => Some(target),
                None => {
                    self.error_recover("expected type after `for`");
                    return None;
                }
            }
        };
        if self.at_contextual("global") {
            self.pos += 1;
        }
        self.expect(SyntaxKind::SEMICOLON);

        Some(UsingDirective {
            library,
            target,
            range: TextRange::new(start, self.prev_end()),
        })
    }

    // =========================================================================
    // Types
    // =========================================================================

    /// Parse a type name. Never records errors: callers decide whether a
    /// missing type is an error or a failed speculation.
    fn parse_type_name(&mut self) -> Option<TypeName> {
        let mut type_name = match self.current_kind() {
            _ if self.at_eof() => return None,
            SyntaxKind::MAPPING_KW => self.parse_mapping()?,
            SyntaxKind::FUNCTION_KW => self.parse_function_type()?,
            _ if self.at_name() => {
                let (path, _) = self.parse_path()?;
                if path == "address" && self.at_contextual("payable") {
                    self.pos += 1;
                    TypeName::Named(SmolStr::new_static("address payable"))
                } else {
                    TypeName::Named(path)
                }
            }
            _ => return None,
        };

        while self.eat(SyntaxKind::L_BRACKET) {
            let mut length = String::new();
            while !self.at_eof() && !self.at(SyntaxKind::R_BRACKET) {
                if self.at_any(&[SyntaxKind::SEMICOLON, SyntaxKind::L_BRACE, SyntaxKind::R_BRACE]) {
                    return None;
                }
                length.push_str(self.current_text());
                self.pos += 1;
            }
            if !self.eat(SyntaxKind::R_BRACKET) {
                return None;
            }
            type_name = TypeName::Array(ArrayType {
                base: Box::new(type_name),
                length: (!length.is_empty()).then_some(length),
            });
        }

        Some(type_name)
    }

    fn parse_mapping(&mut self) -> Option<TypeName> {
        self.pos += 1;
        if !self.eat(SyntaxKind::L_PAREN) {
            return None;
        }
        let from = self.parse_type_name()?;
        if self.at_name() && self.nth(1) == SyntaxKind::FAT_ARROW {
            self.pos += 1;
        }
        if !self.eat(SyntaxKind::FAT_ARROW) {
            return None;
        }
        let to = self.parse_type_name()?;
        if self.at_name() && self.nth(1) == SyntaxKind::R_PAREN {
            self.pos += 1;
        }
        if !self.eat(SyntaxKind::R_PAREN) {
            return None;
        }
        Some(TypeName::Mapping(MappingExpression {
            from: Box::new(from),
            to: Box::new(to),
        }))
    }

    fn parse_function_type(&mut self) -> Option<TypeName> {
        self.pos += 1;
        if !self.skip_balanced() {
            return None;
        }
        while self.at(SyntaxKind::IDENT)
            && matches!(
                self.current_text(),
                "external" | "internal" | "pure" | "view" | "payable"
            )
        {
            self.pos += 1;
        }
        if self.eat(SyntaxKind::RETURNS_KW) && !self.skip_balanced() {
            return None;
        }
        Some(TypeName::Function)
    }
}

fn unquote(text: &str) -> String {
    let inner = text
        .strip_prefix(['"', '\''])
        .and_then(|rest| rest.strip_suffix(['"', '\'']))
        .unwrap_or(text);
    inner.to_string()
}
