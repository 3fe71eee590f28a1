//! Symbols lowered from parse nodes.
//!
//! Every symbol remembers the file it came from and the range of its name so
//! that completion and go-to-definition can share one table.

use smol_str::SmolStr;

use super::types::TypeReference;
use crate::base::{FileId, TextRange, TextSize};
use crate::parser::{
    ContractDeclaration, ContractKind, ContractMember, EnumDeclaration, EventDeclaration,
    FunctionDeclaration, FunctionKind, LocalDeclaration, Parameter, StateVariableDeclaration,
    StructDeclaration, UsingDirective,
};

// ============================================================================
// VARIABLES
// ============================================================================

/// What declared a variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VariableKind {
    StateVariable,
    Parameter,
    ReturnParameter,
    Local,
    StructField,
    EventParameter,
}

impl VariableKind {
    /// Human-readable name used in completion details.
    pub fn display(&self) -> &'static str {
        match self {
            VariableKind::StateVariable => "state variable",
            VariableKind::Parameter => "function parameter",
            VariableKind::ReturnParameter => "return parameter",
            VariableKind::Local => "function variable",
            VariableKind::StructField => "struct field",
            VariableKind::EventParameter => "event parameter",
        }
    }
}

/// A named value of a declared type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariableSymbol {
    /// Empty for unnamed parameters
    pub name: SmolStr,
    pub ty: TypeReference,
    pub kind: VariableKind,
    /// Owning contract, struct or function name
    pub container: SmolStr,
    pub file: FileId,
    pub name_range: TextRange,
    /// Full declaration; for locals it ends at the name
    pub range: TextRange,
}

impl VariableSymbol {
    fn from_parameter(param: &Parameter, kind: VariableKind, container: &SmolStr, file: FileId) -> Self {
        Self {
            name: param.name.clone().unwrap_or_default(),
            ty: TypeReference::from_type_name(&param.type_name),
            kind,
            container: container.clone(),
            file,
            name_range: param.name_range.unwrap_or(param.range),
            range: param.range,
        }
    }

    fn from_local(local: &LocalDeclaration, container: &SmolStr, file: FileId) -> Self {
        Self {
            name: local.name.clone(),
            ty: TypeReference::from_type_name(&local.type_name),
            kind: VariableKind::Local,
            container: container.clone(),
            file,
            name_range: local.name_range,
            range: local.range,
        }
    }

    fn from_state_variable(decl: &StateVariableDeclaration, contract: &SmolStr, file: FileId) -> Self {
        Self {
            name: decl.name.clone(),
            ty: TypeReference::from_type_name(&decl.type_name),
            kind: VariableKind::StateVariable,
            container: contract.clone(),
            file,
            name_range: decl.name_range,
            range: decl.range,
        }
    }

    /// `uint256 amount`, or just the type when unnamed.
    pub fn signature(&self) -> String {
        if self.name.is_empty() {
            self.ty.to_string()
        } else {
            format!("{} {}", self.ty, self.name)
        }
    }
}

// ============================================================================
// FUNCTIONS AND EVENTS
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionSymbol {
    pub name: SmolStr,
    pub kind: FunctionKind,
    pub contract: SmolStr,
    pub file: FileId,
    pub name_range: TextRange,
    pub range: TextRange,
    pub body: Option<TextRange>,
    pub input: Vec<VariableSymbol>,
    pub output: Vec<VariableSymbol>,
    /// Every local declared in the body, in source order. Visibility at a
    /// given offset is decided by the scope resolver.
    pub locals: Vec<VariableSymbol>,
}

impl FunctionSymbol {
    fn lower(decl: &FunctionDeclaration, contract: &SmolStr, file: FileId) -> Self {
        Self {
            name: decl.name.clone(),
            kind: decl.kind,
            contract: contract.clone(),
            file,
            name_range: decl.name_range,
            range: decl.range,
            body: decl.body,
            input: decl
                .params
                .iter()
                .map(|p| VariableSymbol::from_parameter(p, VariableKind::Parameter, &decl.name, file))
                .collect(),
            output: decl
                .returns
                .iter()
                .map(|p| VariableSymbol::from_parameter(p, VariableKind::ReturnParameter, &decl.name, file))
                .collect(),
            locals: decl
                .locals
                .iter()
                .map(|local| VariableSymbol::from_local(local, &decl.name, file))
                .collect(),
        }
    }

    /// Constructors, `fallback` and `receive` are never offered as members.
    pub fn is_callable_member(&self) -> bool {
        self.kind == FunctionKind::Function
    }

    pub fn contains(&self, offset: TextSize) -> bool {
        self.range.contains_inclusive(offset)
    }

    /// The single return type, when there is exactly one.
    pub fn single_output(&self) -> Option<&TypeReference> {
        match self.output.as_slice() {
            [only] => Some(&only.ty),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventSymbol {
    pub name: SmolStr,
    pub contract: SmolStr,
    pub file: FileId,
    pub name_range: TextRange,
    pub params: Vec<VariableSymbol>,
}

impl EventSymbol {
    fn lower(decl: &EventDeclaration, contract: &SmolStr, file: FileId) -> Self {
        Self {
            name: decl.name.clone(),
            contract: contract.clone(),
            file,
            name_range: decl.name_range,
            params: decl
                .params
                .iter()
                .map(|p| VariableSymbol::from_parameter(p, VariableKind::EventParameter, &decl.name, file))
                .collect(),
        }
    }
}

// ============================================================================
// TYPES
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StructSymbol {
    pub name: SmolStr,
    /// `None` for file-level structs
    pub contract: Option<SmolStr>,
    pub file: FileId,
    pub name_range: TextRange,
    pub fields: Vec<VariableSymbol>,
}

impl StructSymbol {
    pub(crate) fn lower(decl: &StructDeclaration, contract: Option<&SmolStr>, file: FileId) -> Self {
        Self {
            name: decl.name.clone(),
            contract: contract.cloned(),
            file,
            name_range: decl.name_range,
            fields: decl
                .fields
                .iter()
                .map(|field| VariableSymbol {
                    name: field.name.clone(),
                    ty: TypeReference::from_type_name(&field.type_name),
                    kind: VariableKind::StructField,
                    container: decl.name.clone(),
                    file,
                    name_range: field.name_range,
                    range: field.name_range,
                })
                .collect(),
        }
    }

    pub fn field(&self, name: &str) -> Option<&VariableSymbol> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Contract name or `file` for file-level structs.
    pub fn owner(&self) -> &str {
        self.contract.as_deref().unwrap_or("file")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumValue {
    pub name: SmolStr,
    pub range: TextRange,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumSymbol {
    pub name: SmolStr,
    pub contract: Option<SmolStr>,
    pub file: FileId,
    pub name_range: TextRange,
    pub members: Vec<EnumValue>,
}

impl EnumSymbol {
    pub(crate) fn lower(decl: &EnumDeclaration, contract: Option<&SmolStr>, file: FileId) -> Self {
        Self {
            name: decl.name.clone(),
            contract: contract.cloned(),
            file,
            name_range: decl.name_range,
            members: decl
                .members
                .iter()
                .map(|member| EnumValue {
                    name: member.name.clone(),
                    range: member.range,
                })
                .collect(),
        }
    }

    pub fn owner(&self) -> &str {
        self.contract.as_deref().unwrap_or("file")
    }
}

/// `using Library for Type;`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UsingSymbol {
    pub library: SmolStr,
    /// `None` for `using L for *;`
    pub target: Option<TypeReference>,
}

impl UsingSymbol {
    fn lower(directive: &UsingDirective) -> Self {
        Self {
            library: directive.library.clone(),
            target: directive.target.as_ref().map(TypeReference::from_type_name),
        }
    }

    /// Whether values of `ty` get this library's functions.
    pub fn applies_to(&self, ty: &TypeReference) -> bool {
        match &self.target {
            Some(target) => target.structurally_matches(ty),
            None => true,
        }
    }
}

// ============================================================================
// CONTRACTS
// ============================================================================

/// A contract, library or interface with its own (not inherited) members.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractSymbol {
    pub name: SmolStr,
    pub kind: ContractKind,
    pub is_abstract: bool,
    pub file: FileId,
    pub name_range: TextRange,
    pub range: TextRange,
    /// Declaration order, duplicates kept
    pub base_contracts: Vec<SmolStr>,
    pub functions: Vec<FunctionSymbol>,
    pub events: Vec<EventSymbol>,
    pub state_variables: Vec<VariableSymbol>,
    pub structs: Vec<StructSymbol>,
    pub enums: Vec<EnumSymbol>,
    pub using: Vec<UsingSymbol>,
}

impl ContractSymbol {
    /// Classify a contract's member declarations by kind.
    pub fn lower(decl: &ContractDeclaration, file: FileId) -> Self {
        let name = &decl.name;
        let mut contract = Self {
            name: name.clone(),
            kind: decl.kind,
            is_abstract: decl.is_abstract,
            file,
            name_range: decl.name_range,
            range: decl.range,
            base_contracts: decl.base_contracts.clone(),
            functions: Vec::new(),
            events: Vec::new(),
            state_variables: Vec::new(),
            structs: Vec::new(),
            enums: Vec::new(),
            using: Vec::new(),
        };

        for member in &decl.members {
            match member {
                ContractMember::Function(f) => {
                    contract.functions.push(FunctionSymbol::lower(f, name, file));
                }
                ContractMember::Event(e) => contract.events.push(EventSymbol::lower(e, name, file)),
                ContractMember::StateVariable(v) => {
                    contract
                        .state_variables
                        .push(VariableSymbol::from_state_variable(v, name, file));
                }
                ContractMember::Struct(s) => {
                    contract.structs.push(StructSymbol::lower(s, Some(name), file));
                }
                ContractMember::Enum(e) => contract.enums.push(EnumSymbol::lower(e, Some(name), file)),
                ContractMember::Using(u) => contract.using.push(UsingSymbol::lower(u)),
            }
        }

        contract
    }

    pub fn contains(&self, offset: TextSize) -> bool {
        self.range.contains_inclusive(offset)
    }

    /// The function whose declaration contains `offset`.
    pub fn function_at(&self, offset: TextSize) -> Option<&FunctionSymbol> {
        self.functions.iter().find(|f| f.contains(offset))
    }

    /// Label used in completion details: `Contract`, `Library`, `Interface`.
    pub fn kind_label(&self) -> &'static str {
        match self.kind {
            ContractKind::Contract => "Contract",
            ContractKind::Library => "Library",
            ContractKind::Interface => "Interface",
        }
    }
}
