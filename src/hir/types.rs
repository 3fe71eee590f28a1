//! Declared type references.

use crate::parser::TypeName;
use smol_str::SmolStr;
use std::fmt;

/// A declared type: scalar, array or mapping.
///
/// Arrays keep the element name with `is_array` set, so `uint[][]` and
/// `uint[]` share one shape. A mapping's `name` is the synthesized
/// `mapping(K => V)` text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeReference {
    pub name: SmolStr,
    pub is_array: bool,
    pub is_mapping: bool,
    pub from: Option<Box<TypeReference>>,
    pub to: Option<Box<TypeReference>>,
}

impl TypeReference {
    pub fn named(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            is_array: false,
            is_mapping: false,
            from: None,
            to: None,
        }
    }

    pub fn mapping(from: TypeReference, to: TypeReference) -> Self {
        Self {
            name: SmolStr::new(format!("mapping({from} => {to})")),
            is_array: false,
            is_mapping: true,
            from: Some(Box::new(from)),
            to: Some(Box::new(to)),
        }
    }

    pub fn array(mut self) -> Self {
        self.is_array = true;
        self
    }

    pub fn from_type_name(type_name: &TypeName) -> Self {
        match type_name {
            TypeName::Named(name) => Self::named(name.clone()),
            TypeName::Mapping(mapping) => Self::mapping(
                Self::from_type_name(&mapping.from),
                Self::from_type_name(&mapping.to),
            ),
            TypeName::Array(array) => Self::from_type_name(&array.base).array(),
            TypeName::Function => Self::named("function"),
        }
    }

    /// Type produced by `value[...]`.
    pub fn indexed(&self) -> Option<TypeReference> {
        if self.is_array {
            let mut element = self.clone();
            element.is_array = false;
            Some(element)
        } else if self.is_mapping {
            self.to.as_deref().cloned()
        } else {
            None
        }
    }

    /// Last segment of a qualified name (`Lib.Point` gives `Point`).
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }

    /// Qualifier of a qualified name (`Lib.Point` gives `Lib`).
    pub fn qualifier(&self) -> Option<&str> {
        self.name.rsplit_once('.').map(|(qualifier, _)| qualifier)
    }

    pub fn is_address(&self) -> bool {
        !self.is_array && !self.is_mapping && is_address_name(&self.name)
    }

    /// Shape comparison used for `using ... for` bindings: same array and
    /// mapping flags and the same name, with `address` and
    /// `address payable` treated as equal.
    pub fn structurally_matches(&self, other: &TypeReference) -> bool {
        self.is_array == other.is_array
            && self.is_mapping == other.is_mapping
            && (self.name == other.name
                || (is_address_name(&self.name) && is_address_name(&other.name)))
    }
}

fn is_address_name(name: &str) -> bool {
    matches!(name, "address" | "address payable")
}

impl fmt::Display for TypeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if self.is_array {
            f.write_str("[]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{ArrayType, MappingExpression};

    fn named(name: &str) -> TypeName {
        TypeName::Named(name.into())
    }

    #[test]
    fn test_mapping_display() {
        let type_name = TypeName::Mapping(MappingExpression {
            from: Box::new(named("address")),
            to: Box::new(TypeName::Mapping(MappingExpression {
                from: Box::new(named("uint")),
                to: Box::new(TypeName::Array(ArrayType {
                    base: Box::new(named("bool")),
                    length: None,
                })),
            })),
        });
        let ty = TypeReference::from_type_name(&type_name);
        assert!(ty.is_mapping);
        assert_eq!(ty.to_string(), "mapping(address => mapping(uint => bool[]))");
    }

    #[test]
    fn test_array_display_and_index() {
        let ty = TypeReference::named("Point").array();
        assert_eq!(ty.to_string(), "Point[]");
        assert_eq!(ty.indexed(), Some(TypeReference::named("Point")));
        assert_eq!(TypeReference::named("uint").indexed(), None);
    }

    #[test]
    fn test_mapping_index_gives_value() {
        let ty = TypeReference::mapping(TypeReference::named("address"), TypeReference::named("Account"));
        assert_eq!(ty.indexed(), Some(TypeReference::named("Account")));
    }

    #[test]
    fn test_structural_match() {
        let address = TypeReference::named("address");
        let payable = TypeReference::named("address payable");
        assert!(address.structurally_matches(&payable));
        assert!(!address.structurally_matches(&address.clone().array()));
        assert!(!TypeReference::named("uint").structurally_matches(&TypeReference::named("uint256")));
    }

    #[test]
    fn test_qualified_names() {
        let ty = TypeReference::named("Lib.Point");
        assert_eq!(ty.simple_name(), "Point");
        assert_eq!(ty.qualifier(), Some("Lib"));
        assert_eq!(TypeReference::named("Point").qualifier(), None);
    }
}
