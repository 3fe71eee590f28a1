//! Typed parse nodes for Solidity declarations.
//!
//! The parser only builds the declaration-level shape of a source unit.
//! Statements are not represented, except for the local variable
//! declarations found while scanning function bodies.

use smol_str::SmolStr;
use text_size::TextRange;

/// A whole `.sol` file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceUnit {
    pub items: Vec<SourceItem>,
}

impl SourceUnit {
    pub fn imports(&self) -> impl Iterator<Item = &ImportDirective> {
        self.items.iter().filter_map(|item| match item {
            SourceItem::Import(import) => Some(import),
            _ => None,
        })
    }

    pub fn contracts(&self) -> impl Iterator<Item = &ContractDeclaration> {
        self.items.iter().filter_map(|item| match item {
            SourceItem::Contract(contract) => Some(contract),
            _ => None,
        })
    }
}

/// Top-level items the engine cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceItem {
    Import(ImportDirective),
    Contract(ContractDeclaration),
    Struct(StructDeclaration),
    Enum(EnumDeclaration),
}

/// `import "path";` in any of its forms. `path` is the unquoted literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDirective {
    pub path: String,
    /// Range of the string literal, quotes included
    pub path_range: TextRange,
    pub range: TextRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractKind {
    Contract,
    Library,
    Interface,
}

impl ContractKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ContractKind::Contract => "contract",
            ContractKind::Library => "library",
            ContractKind::Interface => "interface",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractDeclaration {
    pub kind: ContractKind,
    pub is_abstract: bool,
    pub name: SmolStr,
    pub name_range: TextRange,
    /// Base contract names in declaration order, constructor arguments dropped
    pub base_contracts: Vec<SmolStr>,
    pub members: Vec<ContractMember>,
    pub range: TextRange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractMember {
    Function(FunctionDeclaration),
    Event(EventDeclaration),
    StateVariable(StateVariableDeclaration),
    Struct(StructDeclaration),
    Enum(EnumDeclaration),
    Using(UsingDirective),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionKind {
    Function,
    Constructor,
    Fallback,
    Receive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDeclaration {
    pub kind: FunctionKind,
    /// `constructor`, `fallback` and `receive` for the special kinds
    pub name: SmolStr,
    pub name_range: TextRange,
    pub params: Vec<Parameter>,
    pub returns: Vec<Parameter>,
    /// The `{ ... }` block, absent for declarations without a body
    pub body: Option<TextRange>,
    pub locals: Vec<LocalDeclaration>,
    pub range: TextRange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub type_name: TypeName,
    pub location: Option<DataLocation>,
    pub name: Option<SmolStr>,
    pub name_range: Option<TextRange>,
    pub range: TextRange,
}

/// A variable declared inside a function body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalDeclaration {
    pub type_name: TypeName,
    pub name: SmolStr,
    pub name_range: TextRange,
    /// Starts at the type name, ends at the variable name
    pub range: TextRange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDeclaration {
    pub name: SmolStr,
    pub name_range: TextRange,
    pub params: Vec<Parameter>,
    pub range: TextRange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateVariableDeclaration {
    pub type_name: TypeName,
    pub name: SmolStr,
    pub name_range: TextRange,
    pub range: TextRange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructDeclaration {
    pub name: SmolStr,
    pub name_range: TextRange,
    pub fields: Vec<StructField>,
    pub range: TextRange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructField {
    pub type_name: TypeName,
    pub name: SmolStr,
    pub name_range: TextRange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDeclaration {
    pub name: SmolStr,
    pub name_range: TextRange,
    pub members: Vec<EnumMember>,
    pub range: TextRange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMember {
    pub name: SmolStr,
    pub range: TextRange,
}

/// `using Library for Type;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsingDirective {
    pub library: SmolStr,
    /// `None` for `using L for *;`
    pub target: Option<TypeName>,
    pub range: TextRange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeName {
    /// Elementary or user-defined, possibly qualified (`Lib.Struct`)
    Named(SmolStr),
    Mapping(MappingExpression),
    Array(ArrayType),
    /// Function types are kept opaque
    Function,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingExpression {
    pub from: Box<TypeName>,
    pub to: Box<TypeName>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayType {
    pub base: Box<TypeName>,
    /// Length expression text for fixed-size arrays
    pub length: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataLocation {
    Memory,
    Storage,
    Calldata,
}

impl DataLocation {
    pub fn as_str(self) -> &'static str {
        match self {
            DataLocation::Memory => "memory",
            DataLocation::Storage => "storage",
            DataLocation::Calldata => "calldata",
        }
    }
}
