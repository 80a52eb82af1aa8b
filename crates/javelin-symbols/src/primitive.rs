//! Primitive type symbols.
//!
//! Primitives are type declarations too: `int[]` needs a component
//! symbol, and a field of type `int` needs something its type reference
//! resolves to. A primitive symbol has no members, no supertypes, and the
//! same binary, canonical, and simple name.

use std::sync::Arc;

use crate::class::{ClassSymbol, EnclosingScope, TypeDeclKind};
use crate::modifiers::Modifiers;

/// The primitive types, plus the `void` pseudo-type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Boolean,
    Byte,
    Short,
    Char,
    Int,
    Long,
    Float,
    Double,
    Void,
}

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 9] = [
        PrimitiveKind::Boolean,
        PrimitiveKind::Byte,
        PrimitiveKind::Short,
        PrimitiveKind::Char,
        PrimitiveKind::Int,
        PrimitiveKind::Long,
        PrimitiveKind::Float,
        PrimitiveKind::Double,
        PrimitiveKind::Void,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
            PrimitiveKind::Void => "void",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "boolean" => Some(PrimitiveKind::Boolean),
            "byte" => Some(PrimitiveKind::Byte),
            "short" => Some(PrimitiveKind::Short),
            "char" => Some(PrimitiveKind::Char),
            "int" => Some(PrimitiveKind::Int),
            "long" => Some(PrimitiveKind::Long),
            "float" => Some(PrimitiveKind::Float),
            "double" => Some(PrimitiveKind::Double),
            "void" => Some(PrimitiveKind::Void),
            _ => None,
        }
    }
}

/// Builds the class symbol for a primitive type.
///
/// Modifier set matches `Class#getModifiers()` on a primitive class
/// object: public, final, abstract.
pub(crate) fn primitive_symbol(kind: PrimitiveKind) -> ClassSymbol {
    let name: Arc<str> = Arc::from(kind.name());
    ClassSymbol {
        binary_name: name.clone(),
        canonical_name: Some(name.clone()),
        simple_name: name,
        kind: TypeDeclKind::Primitive,
        modifiers: Modifiers::PUBLIC | Modifiers::FINAL | Modifiers::ABSTRACT,
        unresolved: false,
        anonymous: false,
        scope: EnclosingScope::TopLevel,
        superclass: None,
        super_interfaces: Vec::new(),
        type_params: Vec::new(),
        declared_classes: Vec::new(),
        declared_fields: Vec::new(),
        declared_methods: Vec::new(),
        constructors: Vec::new(),
        array_component: None,
        syntax: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_round_trip() {
        for kind in PrimitiveKind::ALL {
            assert_eq!(PrimitiveKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(PrimitiveKind::from_name("java.lang.Integer"), None);
    }

    #[test]
    fn test_primitive_symbol_shape() {
        let sym = primitive_symbol(PrimitiveKind::Int);
        assert!(sym.is_primitive());
        assert!(!sym.is_class());
        assert_eq!(sym.binary_name(), "int");
        assert_eq!(sym.canonical_name(), Some("int"));
        assert!(sym.declared_fields().is_empty());
        assert!(sym.superclass_name().is_none());
    }
}
