//! Generic type parameters and the declarations that own them.
//!
//! Classes and executables can declare type parameters. The ordered
//! parameter sequence exposed here is the sole extension point for the
//! generics/substitution layer built on top of the symbol model.

use std::sync::Arc;

use crate::class::{ClassSymbol, TypeRef};
use crate::members::{ConstructorSymbol, ExecutableSymbol, MethodSymbol};
use crate::visitor::SymbolVisitor;

/// Declaration symbol for a formal type parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeParamSymbol {
    name: Arc<str>,
    bounds: Vec<TypeRef>,
}

impl TypeParamSymbol {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "type parameter must have a name");
        Self {
            name,
            bounds: Vec::new(),
        }
    }

    pub fn with_bounds(mut self, bounds: Vec<TypeRef>) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn simple_name(&self) -> &str {
        &self.name
    }

    /// Upper bounds, in declaration order. Empty means the implicit
    /// `java.lang.Object` bound.
    pub fn bounds(&self) -> &[TypeRef] {
        &self.bounds
    }

    pub fn accept<R, P, V>(&self, visitor: &mut V, param: P) -> R
    where
        V: SymbolVisitor<R, P> + ?Sized,
    {
        visitor.visit_type_param(self, param)
    }
}

/// Capability of declaring formal type parameters.
pub trait TypeParameterOwner {
    /// The owned type parameters, in declaration order.
    fn type_parameters(&self) -> &[TypeParamSymbol];
}

impl TypeParameterOwner for ClassSymbol {
    fn type_parameters(&self) -> &[TypeParamSymbol] {
        self.type_params()
    }
}

impl TypeParameterOwner for MethodSymbol {
    fn type_parameters(&self) -> &[TypeParamSymbol] {
        &self.type_params
    }
}

impl TypeParameterOwner for ConstructorSymbol {
    fn type_parameters(&self) -> &[TypeParamSymbol] {
        &self.type_params
    }
}

/// A resolved type-parameter owner, as returned by
/// [`SymbolStore::enclosing_type_parameter_owner`](crate::store::SymbolStore::enclosing_type_parameter_owner):
/// the nearest enclosing class or executable.
#[derive(Clone, Debug)]
pub enum TypeParameterOwnerSymbol {
    Class(Arc<ClassSymbol>),
    Method(Arc<MethodSymbol>),
    Constructor(Arc<ConstructorSymbol>),
}

impl TypeParameterOwnerSymbol {
    pub fn type_parameters(&self) -> &[TypeParamSymbol] {
        match self {
            TypeParameterOwnerSymbol::Class(c) => c.type_params(),
            TypeParameterOwnerSymbol::Method(m) => &m.type_params,
            TypeParameterOwnerSymbol::Constructor(c) => &c.type_params,
        }
    }
}

impl From<ExecutableSymbol> for TypeParameterOwnerSymbol {
    fn from(exec: ExecutableSymbol) -> Self {
        match exec {
            ExecutableSymbol::Method(m) => TypeParameterOwnerSymbol::Method(m),
            ExecutableSymbol::Constructor(c) => TypeParameterOwnerSymbol::Constructor(c),
        }
    }
}
