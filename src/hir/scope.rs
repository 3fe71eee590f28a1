//! Variables visible at an offset inside a function.
//!
//! Only declaration order is considered. A local declared in one branch is
//! still visible from a sibling branch that follows it textually.

use super::symbols::{FunctionSymbol, VariableSymbol};
use crate::base::TextSize;

/// Parameters and locals visible at one offset.
#[derive(Clone, Debug)]
pub struct Scope<'a> {
    pub function: &'a FunctionSymbol,
    pub inputs: &'a [VariableSymbol],
    pub outputs: &'a [VariableSymbol],
    /// Locals whose declaration ends before the offset, in source order
    pub locals: Vec<&'a VariableSymbol>,
}

impl<'a> Scope<'a> {
    /// Lookup order: locals (latest declaration first), then parameters,
    /// then return parameters. Unnamed parameters are skipped.
    pub fn variables(&self) -> impl Iterator<Item = &'a VariableSymbol> + '_ {
        self.locals
            .iter()
            .rev()
            .copied()
            .chain(self.inputs.iter())
            .chain(self.outputs.iter())
            .filter(|variable| !variable.name.is_empty())
    }

    pub fn lookup(&self, name: &str) -> Option<&'a VariableSymbol> {
        self.variables().find(|variable| variable.name == name)
    }
}

/// Scope of `function` at `offset`, `None` when the offset lies outside it.
pub fn scope_at(function: &FunctionSymbol, offset: TextSize) -> Option<Scope<'_>> {
    if !function.contains(offset) {
        return None;
    }
    let locals = function
        .locals
        .iter()
        .filter(|local| local.range.end() <= offset)
        .collect();
    Some(Scope {
        function,
        inputs: &function.input,
        outputs: &function.output,
        locals,
    })
}
