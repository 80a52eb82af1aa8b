//! The class-symbol contract.
//!
//! A [`ClassSymbol`] is the declaration of anything referenceable as a
//! type: an ordinary class, an interface, an enum, an annotation type, an
//! array type, or a primitive. It is not a type — a symbol for a generic
//! class gives access to the formal type parameters but never represents a
//! particular parameterization.
//!
//! Symbols are immutable once constructed and may be queried concurrently.
//! Every structural query is total: relations that do not apply come back
//! as `None` or an empty slice, never as a failure. Unresolved symbols
//! (see [`crate::unresolved`]) answer every structural query with the
//! empty/default result.
//!
//! Cross-symbol references (superclass, super-interfaces, nested classes)
//! are name-based [`TypeRef`]s resolved through
//! [`SymbolStore`](crate::store::SymbolStore). Comparisons between symbols
//! are by binary name, never by instance identity: two independently
//! constructed unresolved symbols for the same name are interchangeable.

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use javelin_common::names;
use javelin_common::SyntaxRef;

use crate::members::{ConstructorSymbol, FieldSymbol, MethodSymbol};
use crate::modifiers::Modifiers;
use crate::type_params::TypeParamSymbol;
use crate::visitor::SymbolVisitor;

/// A name-based reference to another type declaration.
///
/// Holds the referent's binary name; resolving the referent symbol goes
/// through the [`SymbolStore`](crate::store::SymbolStore), which also
/// supplies the unresolved fallback when the name cannot be located.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeRef {
    name: Arc<str>,
}

impl TypeRef {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "type reference must have a name");
        Self { name }
    }

    pub fn binary_name(&self) -> &str {
        &self.name
    }

    /// Simple name of the referent, derived from the binary name.
    pub fn simple_name(&self) -> &str {
        names::simple_name(&self.name)
    }

    /// Whether the referent is an array type.
    pub fn is_array(&self) -> bool {
        names::is_array_name(&self.name)
    }

    pub(crate) fn name_arc(&self) -> Arc<str> {
        self.name.clone()
    }
}

impl From<&str> for TypeRef {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Kind tag of a type declaration. Exactly one kind per symbol.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeDeclKind {
    Class,
    Interface,
    Enum,
    Annotation,
    Array,
    Primitive,
}

/// Identifies the executable a local or anonymous class is declared in,
/// within its enclosing class.
///
/// Methods are identified by simple name plus position among same-named
/// overloads in declaration order; constructors by position in declaration
/// order. Both survive name-based symbol comparison (no instance identity
/// involved).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum EnclosingExec {
    Method { name: Arc<str>, overload: u32 },
    Constructor { index: u32 },
}

/// Lexical position of a type declaration.
///
/// Classes local to a static or instance initializer get their own
/// variant: they have an enclosing class but no enclosing method, and
/// collapsing them into `Member` would lose the fact that they are local.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum EnclosingScope {
    /// Declared at the top level of a compilation unit.
    TopLevel,
    /// Member type nested directly in `class`.
    Member { class: Arc<str> },
    /// Local or anonymous class declared in a method or constructor body.
    Executable { class: Arc<str>, exec: EnclosingExec },
    /// Local or anonymous class declared in an initializer block.
    Initializer { class: Arc<str>, static_init: bool },
}

impl EnclosingScope {
    /// Binary name of the enclosing class, if any.
    pub fn class_name(&self) -> Option<&str> {
        match self {
            EnclosingScope::TopLevel => None,
            EnclosingScope::Member { class }
            | EnclosingScope::Executable { class, .. }
            | EnclosingScope::Initializer { class, .. } => Some(class),
        }
    }

    /// Whether this scope makes the declaration lexically local.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            EnclosingScope::Executable { .. } | EnclosingScope::Initializer { .. }
        )
    }
}

/// Declaration symbol for a class, interface, enum, annotation, array, or
/// primitive type.
#[derive(Clone, Debug)]
pub struct ClassSymbol {
    pub(crate) binary_name: Arc<str>,
    pub(crate) canonical_name: Option<Arc<str>>,
    pub(crate) simple_name: Arc<str>,
    pub(crate) kind: TypeDeclKind,
    pub(crate) modifiers: Modifiers,
    pub(crate) unresolved: bool,
    pub(crate) anonymous: bool,
    pub(crate) scope: EnclosingScope,
    pub(crate) superclass: Option<TypeRef>,
    pub(crate) super_interfaces: Vec<TypeRef>,
    pub(crate) type_params: Vec<TypeParamSymbol>,
    pub(crate) declared_classes: Vec<TypeRef>,
    pub(crate) declared_fields: Vec<Arc<FieldSymbol>>,
    pub(crate) declared_methods: Vec<Arc<MethodSymbol>>,
    pub(crate) constructors: Vec<Arc<ConstructorSymbol>>,
    pub(crate) array_component: Option<Arc<ClassSymbol>>,
    pub(crate) syntax: Option<SyntaxRef>,
}

impl ClassSymbol {
    /// The JLS binary name. Never empty; for arrays this is the
    /// component's binary name followed by `[]`.
    pub fn binary_name(&self) -> &str {
        &self.binary_name
    }

    /// The canonical name, absent for local and anonymous classes.
    pub fn canonical_name(&self) -> Option<&str> {
        self.canonical_name.as_deref()
    }

    /// The simple name; empty for anonymous classes.
    pub fn simple_name(&self) -> &str {
        &self.simple_name
    }

    /// Package part of the binary name; empty for the unnamed package.
    pub fn package_name(&self) -> &str {
        names::package_name(&self.binary_name)
    }

    pub fn kind(&self) -> TypeDeclKind {
        self.kind
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// True for a symbolic reference to a type that could not be located.
    /// Only the name is known; every structural accessor returns its
    /// empty/default result.
    pub fn is_unresolved(&self) -> bool {
        self.unresolved
    }

    /// Name test usable with certainty even on unresolved symbols: true
    /// when `qualified` equals this symbol's binary or canonical name.
    pub fn matches_name(&self, qualified: &str) -> bool {
        *self.binary_name == *qualified || self.canonical_name.as_deref() == Some(qualified)
    }

    // Kind predicates. Exactly one of {interface, array, primitive, class}
    // holds; `is_class` is the derived negation of the other three, so
    // enums and annotations count as classes for that test.

    pub fn is_interface(&self) -> bool {
        self.kind == TypeDeclKind::Interface
    }

    pub fn is_enum(&self) -> bool {
        self.kind == TypeDeclKind::Enum
    }

    pub fn is_annotation(&self) -> bool {
        self.kind == TypeDeclKind::Annotation
    }

    pub fn is_array(&self) -> bool {
        self.kind == TypeDeclKind::Array
    }

    pub fn is_primitive(&self) -> bool {
        self.kind == TypeDeclKind::Primitive
    }

    pub fn is_class(&self) -> bool {
        !self.is_interface() && !self.is_array() && !self.is_primitive()
    }

    /// Whether this class is lexically local to an executable or an
    /// initializer. Anonymous classes are not local classes.
    pub fn is_local_class(&self) -> bool {
        self.scope.is_local() && !self.anonymous
    }

    pub fn is_anonymous_class(&self) -> bool {
        self.anonymous
    }

    pub fn is_abstract(&self) -> bool {
        self.modifiers.is_abstract()
    }

    pub fn is_final(&self) -> bool {
        self.modifiers.is_final()
    }

    pub fn is_static(&self) -> bool {
        self.modifiers.is_static()
    }

    /// Lexical position of this declaration.
    pub fn enclosing_scope(&self) -> &EnclosingScope {
        &self.scope
    }

    /// Binary name of the directly enclosing class, if any.
    pub fn enclosing_class_name(&self) -> Option<&str> {
        self.scope.class_name()
    }

    /// Reference to the superclass. `None` for interfaces, for
    /// `java.lang.Object`, for primitives, and for unresolved symbols.
    pub fn superclass_name(&self) -> Option<&TypeRef> {
        self.superclass.as_ref()
    }

    /// References to the direct super-interfaces, in declaration order.
    /// No transitive closure; empty for unresolved symbols.
    pub fn super_interface_names(&self) -> &[TypeRef] {
        &self.super_interfaces
    }

    /// Formal type parameters, in declaration order.
    pub fn type_params(&self) -> &[TypeParamSymbol] {
        &self.type_params
    }

    /// References to the member classes declared directly in this class.
    /// Excludes local and anonymous classes.
    pub fn declared_class_names(&self) -> &[TypeRef] {
        &self.declared_classes
    }

    /// First member-class reference with the given simple name.
    pub fn declared_class_ref(&self, name: &str) -> Option<&TypeRef> {
        self.declared_classes
            .iter()
            .find(|r| r.simple_name() == name)
    }

    /// Fields declared directly in this class, in declaration order.
    /// Compiler-synthesized fields are excluded, with one deliberate
    /// exception: the `length` field of an array symbol.
    pub fn declared_fields(&self) -> &[Arc<FieldSymbol>] {
        &self.declared_fields
    }

    /// First declared field with the given simple name.
    pub fn declared_field(&self, name: &str) -> Option<&Arc<FieldSymbol>> {
        self.declared_fields.iter().find(|f| f.simple_name() == name)
    }

    /// Methods declared directly in this class, in declaration order.
    /// Excludes bridges and other synthetics, except the `clone()` method
    /// of an array symbol.
    pub fn declared_methods(&self) -> &[Arc<MethodSymbol>] {
        &self.declared_methods
    }

    /// All declared methods with the given simple name, preserving
    /// declaration order. Overload resolution is a higher-layer concern.
    pub fn declared_methods_named<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a Arc<MethodSymbol>> + 'a {
        self.declared_methods
            .iter()
            .filter(move |m| m.simple_name() == name)
    }

    /// Constructors declared by this class, excluding synthetics. For an
    /// array symbol this is the single `int`-parameter constructor.
    pub fn constructors(&self) -> &[Arc<ConstructorSymbol>] {
        &self.constructors
    }

    /// The component symbol; `Some` if and only if this is an array.
    pub fn array_component(&self) -> Option<&Arc<ClassSymbol>> {
        self.array_component.as_ref()
    }

    /// The syntax node this symbol was derived from; present only for
    /// source-derived symbols, set once at construction.
    pub fn syntax_binding(&self) -> Option<SyntaxRef> {
        self.syntax
    }

    /// Double-dispatch entry point. Every kind of class symbol dispatches
    /// to the visitor's class operation; the visitor branches further via
    /// the kind predicates if it cares.
    pub fn accept<R, P, V>(&self, visitor: &mut V, param: P) -> R
    where
        V: SymbolVisitor<R, P> + ?Sized,
    {
        visitor.visit_class(self, param)
    }
}

// Symbols compare by binary name: within one symbol universe the binary
// name is unique, and unresolved symbols for the same name must be
// interchangeable regardless of instance.

impl PartialEq for ClassSymbol {
    fn eq(&self, other: &Self) -> bool {
        self.binary_name == other.binary_name
    }
}

impl Eq for ClassSymbol {}

impl Hash for ClassSymbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.binary_name.hash(state);
    }
}
