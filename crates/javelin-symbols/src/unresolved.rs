//! The unresolved symbol provider.
//!
//! When a referenced type cannot be located — not in any parsed source,
//! not supplied by the classpath loader — the resolution machinery still
//! has a qualified name for it (from an import, from a literal type
//! reference). That name is worth keeping: a rule asking
//! `matches_name("org.Bar")` can be answered with certainty, while every
//! structural query degrades to an empty answer instead of aborting the
//! analysis.
//!
//! Unresolved symbols are always created from a qualified *canonical*
//! name, so certain shapes can never be unresolved: arrays (structurally
//! resolvable from their component), local classes (lexically scoped, so
//! always resolvable), and anonymous classes (referenceable only at their
//! declaration site). The provider refuses those inputs rather than
//! construct a contradiction.

use std::sync::Arc;

use javelin_common::names;
use tracing::trace;

use crate::class::{ClassSymbol, EnclosingScope, TypeDeclKind};
use crate::modifiers::Modifiers;

/// Builds a degraded class symbol from a bare qualified name.
///
/// The result reports `is_unresolved() == true`, carries the input as
/// both binary and canonical name, and treats the reference as an
/// ordinary class: every other kind predicate is false, so "is-a" checks
/// degrade to false rather than failing.
///
/// Panics if the name is empty or names an array type.
pub fn unresolved_class(qualified_name: &str) -> ClassSymbol {
    assert!(
        !qualified_name.is_empty(),
        "unresolved symbol must have a name"
    );
    assert!(
        !names::is_array_name(qualified_name),
        "array types are never unresolved: {qualified_name}"
    );
    trace!(name = qualified_name, "constructing unresolved class symbol");

    let name: Arc<str> = Arc::from(qualified_name);
    ClassSymbol {
        binary_name: name.clone(),
        canonical_name: Some(name.clone()),
        simple_name: Arc::from(names::simple_name(qualified_name)),
        kind: TypeDeclKind::Class,
        modifiers: Modifiers::empty(),
        unresolved: true,
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
