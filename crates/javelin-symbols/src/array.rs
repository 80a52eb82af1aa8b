//! Synthetic array symbols.
//!
//! No array class is ever parsed or loaded, yet every array type must
//! answer member-lookup queries like an ordinary class. The synthesizer
//! builds the declaration the language implies: a `public final int
//! length` field, a `public final` covariant `clone()` method returning
//! the array type itself, and a single constructor taking the requested
//! length. Superclass is `java.lang.Object`; the direct super-interfaces
//! are `java.lang.Cloneable` and `java.io.Serializable`.
//!
//! Multi-dimensional arrays are built by recursive wrapping, so the
//! component of a `T[][]` symbol is the `T[]` symbol.

use std::sync::Arc;

use javelin_common::names;

use crate::class::{ClassSymbol, EnclosingScope, TypeDeclKind, TypeRef};
use crate::members::{ConstructorSymbol, FieldSymbol, MethodSymbol, ParamSymbol};
use crate::modifiers::Modifiers;
use crate::primitive::PrimitiveKind;

/// Synthesizes the array symbol over `component` with `dims` dimensions.
///
/// Panics if `dims` is zero or the component is the `void` primitive —
/// both are construction-time contract violations, not conditions a
/// caller is expected to handle.
pub fn array_symbol(component: Arc<ClassSymbol>, dims: usize) -> Arc<ClassSymbol> {
    assert!(dims >= 1, "array symbol needs at least one dimension");
    let mut current = component;
    for _ in 0..dims {
        current = Arc::new(wrap_once(current));
    }
    current
}

/// Wraps one array dimension around `component`.
pub(crate) fn wrap_once(component: Arc<ClassSymbol>) -> ClassSymbol {
    assert!(
        !(component.is_primitive() && component.binary_name() == PrimitiveKind::Void.name()),
        "no array of void"
    );

    let binary_name: Arc<str> = Arc::from(names::array_name(component.binary_name(), 1));
    let canonical_name = component
        .canonical_name()
        .map(|c| Arc::from(names::array_name(c, 1)));
    let simple_name: Arc<str> = Arc::from(names::array_name(component.simple_name(), 1));
    // Array types are final; they take their component's visibility.
    let modifiers = component.modifiers().visibility() | Modifiers::FINAL;

    let length = FieldSymbol::new(
        binary_name.clone(),
        "length",
        Modifiers::PUBLIC | Modifiers::FINAL,
        TypeRef::new(PrimitiveKind::Int.name()),
    );
    // T[] clone() - covariant return, no checked exceptions
    let clone = MethodSymbol::new(
        binary_name.clone(),
        "clone",
        Modifiers::PUBLIC | Modifiers::FINAL,
        [],
        TypeRef::new(binary_name.clone()),
    );
    let ctor = ConstructorSymbol::new(
        binary_name.clone(),
        modifiers,
        [ParamSymbol::new(
            Some("length"),
            TypeRef::new(PrimitiveKind::Int.name()),
        )],
    );

    ClassSymbol {
        binary_name,
        canonical_name,
        simple_name,
        kind: TypeDeclKind::Array,
        modifiers,
        unresolved: false,
        anonymous: false,
        scope: EnclosingScope::TopLevel,
        superclass: Some(TypeRef::new(names::OBJECT)),
        super_interfaces: vec![TypeRef::new(names::CLONEABLE), TypeRef::new(names::SERIALIZABLE)],
        type_params: Vec::new(),
        declared_classes: Vec::new(),
        declared_fields: vec![Arc::new(length)],
        declared_methods: vec![Arc::new(clone)],
        constructors: vec![Arc::new(ctor)],
        array_component: Some(component),
        syntax: None,
    }
}
