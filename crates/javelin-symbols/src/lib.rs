//! Declaration symbols for the javelin static analyzer.
//!
//! A declaration symbol models *what declares a type or member*,
//! independent of any parsed occurrence or generic instantiation. Symbols
//! come from three provenances and hide all of them behind one contract:
//!
//! - **source-derived**: built while binding a parsed declaration, via
//!   [`ClassSymbolBuilder`], and carrying a [`SyntaxRef`] back to the
//!   declaring node;
//! - **classpath-derived**: built lazily from a [`ClassStub`] supplied by
//!   a [`ClassStubLoader`], cached per binary name for the analysis run;
//! - **unresolved**: built from nothing but a qualified name when the
//!   referenced type cannot be located; preserves the name, degrades all
//!   structural queries to empty answers.
//!
//! The [`SymbolStore`] is the per-run symbol universe: it owns the
//! classpath cache, the primitive symbols, and the synthetic array
//! symbols, and it resolves the name-based references
//! ([`TypeRef`]) that symbols use to point at each other.
//!
//! [`SyntaxRef`]: javelin_common::SyntaxRef

// Java modifier bit-flags
pub mod modifiers;
pub use modifiers::Modifiers;

// The class-symbol contract: kinds, predicates, member accessors
pub mod class;
pub use class::{ClassSymbol, EnclosingExec, EnclosingScope, TypeDeclKind, TypeRef};

// Member declarations: fields, methods, constructors
pub mod members;
pub use members::{
    ConstructorSymbol, ExecutableSymbol, FieldSymbol, MethodSymbol, ParamSymbol, CTOR_NAME,
};

// Generic type parameters and their owners
pub mod type_params;
pub use type_params::{TypeParamSymbol, TypeParameterOwner, TypeParameterOwnerSymbol};

// Source-binding construction path
pub mod builder;
pub use builder::ClassSymbolBuilder;

// Unresolved symbol provider
pub mod unresolved;
pub use unresolved::unresolved_class;

// Synthetic array symbols
pub mod array;
pub use array::array_symbol;

// Primitive type symbols
pub mod primitive;
pub use primitive::PrimitiveKind;

// Classpath/metadata boundary
pub mod loader;
pub use loader::{
    ClassStub, ClassStubLoader, ConstructorStub, EnclosingStub, FieldStub, MapStubLoader,
    MethodStub, NoClasspath, ParamStub, TypeParamStub,
};

// The per-run symbol universe
pub mod store;
pub use store::{StoreOptions, SymbolStore};

// Double-dispatch over symbol kinds
pub mod visitor;
pub use visitor::{SymbolRef, SymbolVisitor};
