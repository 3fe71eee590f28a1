//! Completion suggestions implementation.
//!
//! The front door classifies the text before the cursor into a [`Trigger`]
//! and gathers the contextual items for it. The static catalogs are appended
//! by the caller for every trigger.

use std::sync::Arc;

use crate::base::{FileId, LineCol, TextSize};
use crate::hir::{
    BuiltinKind, BuiltinMember, ContractSymbol, EnumSymbol, EventSymbol, FunctionSymbol, Member,
    Resolver, StructSymbol, SymbolTable, VariableSymbol,
};
use crate::parser::{ContractKind, parse, parse_dot_chain};

use super::text_utils::{dot_trigger_column, word_before_trimming_spaces};

/// Kind of completion item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CompletionKind {
    Method,
    Function,
    Constructor,
    Field,
    Variable,
    Class,
    Interface,
    Module,
    Property,
    Unit,
    Enum,
    Keyword,
    Reference,
    EnumMember,
    Constant,
    Struct,
    Event,
}

impl CompletionKind {
    /// Convert to LSP completion item kind number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            CompletionKind::Method => 2,
            CompletionKind::Function => 3,
            CompletionKind::Constructor => 4,
            CompletionKind::Field => 5,
            CompletionKind::Variable => 6,
            CompletionKind::Class => 7,
            CompletionKind::Interface => 8,
            CompletionKind::Module => 9,
            CompletionKind::Property => 10,
            CompletionKind::Unit => 11,
            CompletionKind::Enum => 13,
            CompletionKind::Keyword => 14,
            CompletionKind::Reference => 18,
            CompletionKind::EnumMember => 20,
            CompletionKind::Constant => 21,
            CompletionKind::Struct => 22,
            CompletionKind::Event => 23,
        }
    }
}

/// How `insert_text` is interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertTextFormat {
    PlainText,
    /// `${1:name}` placeholders, numbered in order
    Snippet,
}

impl InsertTextFormat {
    pub fn to_lsp(&self) -> u32 {
        match self {
            InsertTextFormat::PlainText => 1,
            InsertTextFormat::Snippet => 2,
        }
    }
}

/// A completion suggestion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionItem {
    /// The text shown in the list.
    pub label: Arc<str>,
    pub kind: CompletionKind,
    /// Detail text (shown after label).
    pub detail: Option<Arc<str>>,
    /// Documentation (shown in popup).
    pub documentation: Option<Arc<str>>,
    /// Text to insert (if different from label).
    pub insert_text: Option<Arc<str>>,
    pub insert_text_format: Option<InsertTextFormat>,
}

impl CompletionItem {
    pub fn new(label: impl Into<Arc<str>>, kind: CompletionKind) -> Self {
        Self {
            label: label.into(),
            kind,
            detail: None,
            documentation: None,
            insert_text: None,
            insert_text_format: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<Arc<str>>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_documentation(mut self, doc: impl Into<Arc<str>>) -> Self {
        self.documentation = Some(doc.into());
        self
    }

    /// Set plain insert text.
    pub fn with_insert_text(mut self, text: impl Into<Arc<str>>) -> Self {
        self.insert_text = Some(text.into());
        self.insert_text_format = Some(InsertTextFormat::PlainText);
        self
    }

    /// Set snippet insert text.
    pub fn with_snippet(mut self, snippet: impl Into<Arc<str>>) -> Self {
        self.insert_text = Some(snippet.into());
        self.insert_text_format = Some(InsertTextFormat::Snippet);
        self
    }

    pub fn is_snippet(&self) -> bool {
        self.insert_text_format == Some(InsertTextFormat::Snippet)
    }
}

// ============================================================================
// ITEM BUILDERS
// ============================================================================

/// `uint a, bytes32` for details.
fn params_info(params: &[VariableSymbol]) -> String {
    params
        .iter()
        .map(VariableSymbol::signature)
        .collect::<Vec<_>>()
        .join(", ")
}

/// `${1:a}, ${2:b}`; unnamed parameters use their type as placeholder.
fn params_snippet(params: &[VariableSymbol]) -> String {
    params
        .iter()
        .enumerate()
        .map(|(idx, param)| {
            let placeholder = if param.name.is_empty() {
                param.ty.to_string()
            } else {
                param.name.to_string()
            };
            format!("${{{}:{}}}", idx + 1, placeholder)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// A function as a call snippet. Extension functions are called on their
/// first argument, so that parameter is left out of the snippet.
pub fn function_item(function: &FunctionSymbol, extension: bool) -> CompletionItem {
    let mut info = format!(
        "(function in {}) {}({})",
        function.contract,
        function.name,
        params_info(&function.input)
    );
    if !function.output.is_empty() {
        info.push_str(&format!(" returns ({})", params_info(&function.output)));
    }

    let snippet_params = if extension {
        function.input.get(1..).unwrap_or_default()
    } else {
        &function.input
    };
    let snippet = format!("{}({});", function.name, params_snippet(snippet_params));

    CompletionItem::new(function.name.as_str(), CompletionKind::Function)
        .with_detail(info.clone())
        .with_documentation(info)
        .with_snippet(snippet)
}

pub fn event_item(event: &EventSymbol) -> CompletionItem {
    let info = format!("(event in {}) {}({})", event.contract, event.name, params_info(&event.params));
    let snippet = format!("{}({});", event.name, params_snippet(&event.params));
    CompletionItem::new(event.name.as_str(), CompletionKind::Event)
        .with_detail(info.clone())
        .with_documentation(info)
        .with_snippet(snippet)
}

/// State variables, locals and struct fields. `owner` names the contract
/// (or struct) shown in the detail.
pub fn variable_item(variable: &VariableSymbol, owner: &str) -> CompletionItem {
    CompletionItem::new(variable.name.as_str(), CompletionKind::Field).with_detail(format!(
        "({} in {}) {}",
        variable.kind.display(),
        owner,
        variable.signature()
    ))
}

pub fn parameter_item(variable: &VariableSymbol, owner: &str) -> CompletionItem {
    CompletionItem::new(variable.name.as_str(), CompletionKind::Variable).with_detail(format!(
        "({} in {}) {}",
        variable.kind.display(),
        owner,
        variable.signature()
    ))
}

pub fn struct_item(strukt: &StructSymbol) -> CompletionItem {
    CompletionItem::new(strukt.name.as_str(), CompletionKind::Struct)
        .with_detail(format!("(Struct in {}) {}", strukt.owner(), strukt.name))
        .with_insert_text(strukt.name.as_str())
}

pub fn enum_item(enumeration: &EnumSymbol) -> CompletionItem {
    CompletionItem::new(enumeration.name.as_str(), CompletionKind::Enum)
        .with_detail(format!("(Enum in {}) {}", enumeration.owner(), enumeration.name))
        .with_insert_text(enumeration.name.as_str())
}

pub fn contract_item(contract: &ContractSymbol) -> CompletionItem {
    match contract.kind {
        ContractKind::Interface => CompletionItem::new(contract.name.as_str(), CompletionKind::Interface)
            .with_detail(format!("( Interface : {}) ", contract.name))
            .with_insert_text(contract.name.as_str()),
        ContractKind::Contract | ContractKind::Library => {
            CompletionItem::new(contract.name.as_str(), CompletionKind::Class)
                .with_detail(format!("({} : {}) ", contract.kind_label(), contract.name))
                .with_insert_text(contract.name.as_str())
        }
    }
}

fn builtin_item(builtin: &BuiltinMember) -> CompletionItem {
    match (builtin.kind, builtin.snippet) {
        (BuiltinKind::Method, Some(snippet)) => CompletionItem::new(builtin.name, CompletionKind::Method)
            .with_detail(builtin.detail)
            .with_snippet(snippet),
        _ => CompletionItem::new(builtin.name, CompletionKind::Property).with_detail(builtin.detail),
    }
}

/// A resolved member as a completion item.
pub fn member_item(member: &Member<'_>) -> CompletionItem {
    match member {
        Member::Function { function, extension } => function_item(function, *extension),
        Member::Event(event) => event_item(event),
        Member::Variable(variable) => variable_item(variable, &variable.container),
        Member::EnumValue { enumeration, value } => {
            CompletionItem::new(value.name.as_str(), CompletionKind::EnumMember)
                .with_detail(format!("{}.{}", enumeration.name, value.name))
        }
        Member::Builtin(builtin) => builtin_item(builtin),
    }
}

// ============================================================================
// TRIGGERS
// ============================================================================

/// Why completion was requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// A plain identifier or an explicit request
    Plain,
    /// Member access; `dot` is the column of the `.`
    Dot { dot: usize },
    /// After `emit`
    Emit,
    /// After `import`
    Import,
}

/// Classify the text of `line` before the character column `col`.
pub fn classify_trigger(line: &str, col: usize) -> Trigger {
    if let Some(dot) = dot_trigger_column(line, col) {
        return Trigger::Dot { dot };
    }
    match word_before_trimming_spaces(line, col).as_str() {
        "emit" => Trigger::Emit,
        "import" => Trigger::Import,
        _ => Trigger::Plain,
    }
}

// ============================================================================
// CONTEXTUAL COMPLETIONS
// ============================================================================

/// Contextual items for the entry document of `table` at `position`.
///
/// Import suggestions need project access and are produced by the caller;
/// for [`Trigger::Import`] this returns nothing.
pub fn completions(table: &SymbolTable, position: LineCol) -> Vec<CompletionItem> {
    let Some(entry) = table.entry() else {
        return Vec::new();
    };
    let (Some(line), Some(offset)) = (entry.line(position.line), entry.offset(position)) else {
        tracing::debug!(%position, "completion outside the document");
        return Vec::new();
    };

    let trigger = classify_trigger(line, position.col as usize);
    tracing::debug!(?trigger, %position, "completion trigger");
    match trigger {
        Trigger::Dot { dot } => dot_completions(table, offset, line, dot),
        Trigger::Emit => emit_completions(table, offset),
        Trigger::Import => Vec::new(),
        Trigger::Plain => plain_completions(table, offset),
    }
}

fn dot_completions(table: &SymbolTable, offset: TextSize, line: &str, dot: usize) -> Vec<CompletionItem> {
    let chain = parse_dot_chain(line, dot);
    if chain.is_blank() {
        return Vec::new();
    }
    Resolver::new(table, offset)
        .complete(&chain)
        .iter()
        .map(member_item)
        .collect()
}

fn emit_completions(table: &SymbolTable, offset: TextSize) -> Vec<CompletionItem> {
    match table.selected_contract(offset) {
        Some(id) => table.all_events(id).map(event_item).collect(),
        None => Vec::new(),
    }
}

/// Members of the selected contract, the variables in scope, then every
/// known contract and file-level type.
fn plain_completions(table: &SymbolTable, offset: TextSize) -> Vec<CompletionItem> {
    let mut items = Vec::new();
    let resolver = Resolver::new(table, offset);

    if let Some(id) = resolver.selected_contract() {
        items.extend(
            table
                .all_functions(id)
                .filter(|f| f.is_callable_member())
                .map(|f| function_item(f, false)),
        );
        items.extend(table.all_events(id).map(event_item));
        items.extend(
            table
                .all_state_variables(id)
                .map(|v| variable_item(v, &v.container)),
        );
        items.extend(table.all_structs(id).map(struct_item));
        items.extend(table.all_enums(id).map(enum_item));

        if let Some(scope) = resolver.scope() {
            let owner = scope.function.contract.as_str();
            let params = scope.inputs.iter().chain(scope.outputs.iter());
            items.extend(
                params
                    .filter(|p| !p.name.is_empty())
                    .map(|p| parameter_item(p, owner)),
            );
            items.extend(scope.locals.iter().map(|local| variable_item(local, owner)));
        }
    }

    items.extend(table.contracts().map(|(_, contract)| contract_item(contract)));
    items.extend(table.file_structs().iter().map(struct_item));
    items.extend(table.file_enums().iter().map(enum_item));
    items
}

/// Items declared in a single document, without imports or context.
///
/// Uses the strict parse: a document with syntax errors gives no items.
pub fn document_completion_items(text: &str) -> Vec<CompletionItem> {
    let unit = match parse(text).into_result() {
        Ok(unit) => unit,
        Err(err) => {
            tracing::debug!("no document completions: {}", err);
            return Vec::new();
        }
    };

    let mut items = Vec::new();
    for decl in unit.contracts() {
        let contract = ContractSymbol::lower(decl, FileId::ENTRY);
        items.extend(
            contract
                .functions
                .iter()
                .filter(|f| f.is_callable_member())
                .map(|f| function_item(f, false)),
        );
        items.extend(contract.events.iter().map(event_item));
        items.extend(
            contract
                .state_variables
                .iter()
                .map(|v| variable_item(v, &contract.name)),
        );
        items.extend(contract.enums.iter().map(enum_item));
        items.extend(contract.structs.iter().map(struct_item));
    }
    items
}
