//! Dot-chain resolution.
//!
//! A [`DotChain`] is evaluated from its root node to its terminal node
//! against the symbol table. The result is a [`Target`], whose members are
//! what an editor offers after the final `.`.
//!
//! ## Root lookup
//!
//! - variables: locals and parameters in scope, state variables of the
//!   contract lineage, enum names, then contract names
//! - calls: functions of the lineage by name only, then casts such as
//!   `IERC20(token)` or `address(x)`
//!
//! ## Descent
//!
//! Struct values continue through their fields, contract values through the
//! contract's own members. Calls on any other value look for a library
//! function bound with `using L for T`.

use rustc_hash::FxHashSet;

use super::builtins::{ADDRESS_MEMBERS, ARRAY_MEMBERS, BuiltinMember, global_namespace};
use super::scope::{Scope, scope_at};
use super::symbols::{EnumSymbol, EnumValue, EventSymbol, FunctionSymbol, StructSymbol, VariableSymbol};
use super::table::{ContractId, SymbolTable};
use super::types::TypeReference;
use crate::base::{FileId, TextRange, TextSize};
use crate::parser::{ChainCursor, DotChain};

// ============================================================================
// RESULTS
// ============================================================================

/// What a chain prefix evaluates to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target<'a> {
    /// A value of a declared type. Contract and library names evaluate to a
    /// value of the contract type.
    Value(TypeReference),
    /// A specific contract, used for `this`
    Contract(ContractId),
    /// An enum type name
    Enum(&'a EnumSymbol),
    /// `block`, `msg`, `tx` or `abi`
    Namespace(&'static [BuiltinMember]),
}

/// Something that can follow a `.`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Member<'a> {
    /// `extension` marks a library function bound through `using ... for`;
    /// its first parameter is the receiver.
    Function {
        function: &'a FunctionSymbol,
        extension: bool,
    },
    Event(&'a EventSymbol),
    Variable(&'a VariableSymbol),
    EnumValue {
        enumeration: &'a EnumSymbol,
        value: &'a EnumValue,
    },
    Builtin(&'static BuiltinMember),
}

impl<'a> Member<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            Member::Function { function, .. } => &function.name,
            Member::Event(event) => &event.name,
            Member::Variable(variable) => &variable.name,
            Member::EnumValue { value, .. } => &value.name,
            Member::Builtin(builtin) => builtin.name,
        }
    }

    /// Where the member is declared; builtins have no location.
    pub fn location(&self) -> Option<(FileId, TextRange)> {
        match self {
            Member::Function { function, .. } => Some((function.file, function.name_range)),
            Member::Event(event) => Some((event.file, event.name_range)),
            Member::Variable(variable) => Some((variable.file, variable.name_range)),
            Member::EnumValue { enumeration, value } => Some((enumeration.file, value.range)),
            Member::Builtin(_) => None,
        }
    }
}

// ============================================================================
// RESOLVER
// ============================================================================

/// Resolves chains at one offset of the entry document.
pub struct Resolver<'a> {
    table: &'a SymbolTable,
    selected: Option<ContractId>,
    scope: Option<Scope<'a>>,
}

impl<'a> Resolver<'a> {
    pub fn new(table: &'a SymbolTable, offset: TextSize) -> Self {
        let selected = table.selected_contract(offset);
        let scope = selected
            .and_then(|id| table.contract(id).function_at(offset))
            .and_then(|function| scope_at(function, offset));
        Self {
            table,
            selected,
            scope,
        }
    }

    pub fn table(&self) -> &'a SymbolTable {
        self.table
    }

    /// The entry-document contract containing the offset.
    pub fn selected_contract(&self) -> Option<ContractId> {
        self.selected
    }

    /// Parameters and locals of the function containing the offset.
    pub fn scope(&self) -> Option<&Scope<'a>> {
        self.scope.as_ref()
    }

    /// Members offered after `chain.`.
    pub fn complete(&self, chain: &DotChain) -> Vec<Member<'a>> {
        match self.resolve(chain) {
            Some(target) => self.members(&target),
            None => Vec::new(),
        }
    }

    /// Evaluate a whole chain, root first.
    pub fn resolve(&self, chain: &DotChain) -> Option<Target<'a>> {
        if chain.is_blank() {
            return None;
        }

        let terminal = chain.terminal();
        if terminal.is_variable() && !terminal.is_array() {
            if let Some(members) = global_namespace(terminal.name()) {
                tracing::trace!(name = terminal.name(), "global namespace");
                return Some(Target::Namespace(members));
            }
        }

        let mut node = chain.root();
        if node.name() == "this" && node.is_variable() {
            match node.child() {
                None => return self.selected.map(Target::Contract),
                // `this.a.b` resolves like `a.b`
                Some(child) => node = child,
            }
        }

        let mut target = self.lookup_in(node, self.selected, self.scope.as_ref())?;
        while let Some(child) = node.child() {
            tracing::trace!(current = ?target, child = child.name(), "descending");
            target = self.descend(target, child)?;
            node = child;
        }
        Some(target)
    }

    /// Every member of a resolved target.
    pub fn members(&self, target: &Target<'a>) -> Vec<Member<'a>> {
        match target {
            Target::Namespace(members) => members.iter().map(Member::Builtin).collect(),
            Target::Enum(enumeration) => {
                let enumeration = *enumeration;
                enumeration
                    .members
                    .iter()
                    .map(|value| Member::EnumValue { enumeration, value })
                    .collect()
            }
            Target::Contract(id) => self.contract_members(*id),
            Target::Value(ty) => {
                let mut members = if let Some(strukt) = self.find_struct(ty) {
                    strukt.fields.iter().map(Member::Variable).collect()
                } else if let Some(id) = self.contract_for(ty) {
                    self.contract_members(id)
                } else {
                    Vec::new()
                };
                if ty.is_array {
                    members.extend(ARRAY_MEMBERS.iter().map(Member::Builtin));
                }
                if ty.is_address() {
                    members.extend(ADDRESS_MEMBERS.iter().map(Member::Builtin));
                }
                members.extend(self.extension_functions(ty).into_iter().map(|function| {
                    Member::Function {
                        function,
                        extension: true,
                    }
                }));
                members
            }
        }
    }

    // ========================================================================
    // LOOKUP
    // ========================================================================

    /// Look a node up inside `context`, applying its indexes.
    fn lookup_in(
        &self,
        node: ChainCursor<'_>,
        context: Option<ContractId>,
        scope: Option<&Scope<'a>>,
    ) -> Option<Target<'a>> {
        let target = if node.is_method() {
            self.lookup_call(node.name(), context)
        } else {
            self.lookup_name(node.name(), context, scope)
        };
        if target.is_none() {
            tracing::trace!(name = node.name(), "no match");
        }
        apply_indexes(target?, node.indexes())
    }

    fn lookup_name(
        &self,
        name: &str,
        context: Option<ContractId>,
        scope: Option<&Scope<'a>>,
    ) -> Option<Target<'a>> {
        if let Some(variable) = scope.and_then(|scope| scope.lookup(name)) {
            return Some(Target::Value(variable.ty.clone()));
        }
        if let Some(id) = context {
            if let Some(variable) = self.table.all_state_variables(id).find(|v| v.name == name) {
                return Some(Target::Value(variable.ty.clone()));
            }
            if let Some(enumeration) = self.table.all_enums(id).find(|e| e.name == name) {
                return Some(Target::Enum(enumeration));
            }
        }
        if let Some(enumeration) = self.table.file_enums().iter().find(|e| e.name == name) {
            return Some(Target::Enum(enumeration));
        }
        self.table
            .contract_id(name)
            .map(|_| Target::Value(TypeReference::named(name)))
    }

    /// Functions match by name only. The first overload with a single
    /// return value decides the result type; overloads returning zero or
    /// several values have no members.
    fn lookup_call(&self, name: &str, context: Option<ContractId>) -> Option<Target<'a>> {
        if let Some(id) = context {
            let mut found = false;
            for function in self.table.all_functions(id).filter(|f| f.name == name) {
                found = true;
                if let Some(ty) = function.single_output() {
                    return Some(Target::Value(ty.clone()));
                }
            }
            if found {
                return None;
            }
        }
        match name {
            "address" => Some(Target::Value(TypeReference::named("address"))),
            "payable" => Some(Target::Value(TypeReference::named("address payable"))),
            _ => self
                .table
                .contract_id(name)
                .map(|_| Target::Value(TypeReference::named(name))),
        }
    }

    /// A member of contract `id` and its bases. Unlike a root lookup this
    /// never falls back to file-level enums or contract names.
    fn lookup_member(&self, node: ChainCursor<'_>, id: ContractId) -> Option<Target<'a>> {
        let name = node.name();
        let target = if node.is_method() {
            self.table
                .all_functions(id)
                .filter(|f| f.name == name)
                .find_map(|f| f.single_output())
                .map(|ty| Target::Value(ty.clone()))
        } else {
            self.table
                .all_state_variables(id)
                .find(|v| v.name == name)
                .map(|v| Target::Value(v.ty.clone()))
                .or_else(|| self.table.all_enums(id).find(|e| e.name == name).map(Target::Enum))
        };
        if target.is_none() {
            tracing::trace!(name, "no member");
        }
        apply_indexes(target?, node.indexes())
    }

    fn descend(&self, target: Target<'a>, child: ChainCursor<'_>) -> Option<Target<'a>> {
        let ty = match target {
            Target::Contract(id) => return self.lookup_member(child, id),
            Target::Value(ty) => ty,
            Target::Enum(_) | Target::Namespace(_) => return None,
        };

        if let Some(strukt) = self.find_struct(&ty) {
            if child.is_method() {
                return None;
            }
            let field = strukt.field(child.name())?;
            return apply_indexes(Target::Value(field.ty.clone()), child.indexes());
        }

        if let Some(id) = self.contract_for(&ty) {
            if let Some(found) = self.lookup_member(child, id) {
                return Some(found);
            }
        }

        if child.is_method() {
            let function = self
                .extension_functions(&ty)
                .into_iter()
                .find(|f| f.name == child.name())?;
            let output = function.single_output()?.clone();
            return apply_indexes(Target::Value(output), child.indexes());
        }

        None
    }

    fn contract_members(&self, id: ContractId) -> Vec<Member<'a>> {
        let functions = self
            .table
            .all_functions(id)
            .filter(|f| f.is_callable_member())
            .map(|function| Member::Function {
                function,
                extension: false,
            });
        let variables = self.table.all_state_variables(id).map(Member::Variable);
        functions.chain(variables).collect()
    }

    /// A struct named by `ty`: qualified names look in their contract,
    /// others in the selected lineage, then file level, then any contract.
    pub fn find_struct(&self, ty: &TypeReference) -> Option<&'a StructSymbol> {
        if ty.is_array || ty.is_mapping {
            return None;
        }
        let name = ty.simple_name();
        let table = self.table;

        if let Some(qualifier) = ty.qualifier() {
            if let Some(id) = table.contract_id(qualifier) {
                return table.all_structs(id).find(|s| s.name == name);
            }
        }

        self.selected
            .and_then(|id| table.all_structs(id).find(|s| s.name == name))
            .or_else(|| table.file_structs().iter().find(|s| s.name == name))
            .or_else(|| {
                table
                    .contracts()
                    .flat_map(|(_, contract)| contract.structs.iter())
                    .find(|s| s.name == name)
            })
    }

    fn contract_for(&self, ty: &TypeReference) -> Option<ContractId> {
        if ty.is_array || ty.is_mapping {
            return None;
        }
        self.table.contract_id(ty.simple_name())
    }

    /// Library functions bound to `ty` in the selected contract whose first
    /// parameter matches `ty`. Each library is bound once.
    pub fn extension_functions(&self, ty: &TypeReference) -> Vec<&'a FunctionSymbol> {
        let Some(selected) = self.selected else {
            return Vec::new();
        };
        let table = self.table;
        let mut libraries = FxHashSet::default();
        let mut functions = Vec::new();

        for using in table.all_using(selected).filter(|u| u.applies_to(ty)) {
            if !libraries.insert(using.library.clone()) {
                continue;
            }
            let Some(library) = table.contract_id(&using.library) else {
                tracing::trace!(library = %using.library, "unknown library");
                continue;
            };
            functions.extend(table.all_functions(library).filter(|f| {
                f.is_callable_member()
                    && f.input.first().is_some_and(|first| first.ty.structurally_matches(ty))
            }));
        }

        functions
    }
}

fn apply_indexes(target: Target<'_>, indexes: usize) -> Option<Target<'_>> {
    if indexes == 0 {
        return Some(target);
    }
    let Target::Value(mut ty) = target else {
        return None;
    };
    for _ in 0..indexes {
        ty = ty.indexed()?;
    }
    Some(Target::Value(ty))
}
