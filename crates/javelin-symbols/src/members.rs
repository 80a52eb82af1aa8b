//! Member declaration symbols: fields, methods, constructors.
//!
//! Members are owned by their declaring [`ClassSymbol`] and carry a
//! name-based back-reference to it (the declaring class's binary name),
//! resolvable through the store. The "declared directly, no synthetics"
//! contract applies to all of them, with the array symbol's synthesized
//! members as the one exception.
//!
//! [`ClassSymbol`]: crate::class::ClassSymbol

use std::sync::Arc;

use javelin_common::SyntaxRef;
use smallvec::SmallVec;

use crate::class::TypeRef;
use crate::modifiers::Modifiers;
use crate::type_params::TypeParamSymbol;
use crate::visitor::SymbolVisitor;

/// Simple name reported by constructor symbols.
pub const CTOR_NAME: &str = "<init>";

/// A formal parameter of an executable.
///
/// Parameter names are optional: classfile metadata compiled without
/// `-parameters` does not record them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParamSymbol {
    name: Option<Arc<str>>,
    ty: TypeRef,
}

impl ParamSymbol {
    pub fn new(name: Option<&str>, ty: TypeRef) -> Self {
        Self {
            name: name.map(Arc::from),
            ty,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Declared type of the parameter.
    pub fn declared_type(&self) -> &TypeRef {
        &self.ty
    }
}

/// Declaration symbol for a field.
#[derive(Clone, Debug)]
pub struct FieldSymbol {
    pub(crate) declaring: Arc<str>,
    pub(crate) name: Arc<str>,
    pub(crate) modifiers: Modifiers,
    pub(crate) ty: TypeRef,
    pub(crate) syntax: Option<SyntaxRef>,
}

impl FieldSymbol {
    pub fn new(
        declaring: impl Into<Arc<str>>,
        name: impl Into<Arc<str>>,
        modifiers: Modifiers,
        ty: TypeRef,
    ) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "field must have a name");
        Self {
            declaring: declaring.into(),
            name,
            modifiers,
            ty,
            syntax: None,
        }
    }

    /// Attaches the declaring syntax node. May be called at most once.
    pub fn bound_to(mut self, syntax: SyntaxRef) -> Self {
        assert!(self.syntax.is_none(), "syntax binding is set exactly once");
        self.syntax = Some(syntax);
        self
    }

    pub fn simple_name(&self) -> &str {
        &self.name
    }

    /// Binary name of the declaring class.
    pub fn declaring_class_name(&self) -> &str {
        &self.declaring
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Declared type of the field.
    pub fn declared_type(&self) -> &TypeRef {
        &self.ty
    }

    pub fn is_static(&self) -> bool {
        self.modifiers.is_static()
    }

    pub fn is_final(&self) -> bool {
        self.modifiers.is_final()
    }

    pub fn syntax_binding(&self) -> Option<SyntaxRef> {
        self.syntax
    }

    pub fn accept<R, P, V>(&self, visitor: &mut V, param: P) -> R
    where
        V: SymbolVisitor<R, P> + ?Sized,
    {
        visitor.visit_field(self, param)
    }
}

/// Declaration symbol for a method.
#[derive(Clone, Debug)]
pub struct MethodSymbol {
    pub(crate) declaring: Arc<str>,
    pub(crate) name: Arc<str>,
    pub(crate) modifiers: Modifiers,
    pub(crate) type_params: Vec<TypeParamSymbol>,
    pub(crate) params: SmallVec<[ParamSymbol; 4]>,
    pub(crate) return_type: TypeRef,
    pub(crate) syntax: Option<SyntaxRef>,
}

impl MethodSymbol {
    pub fn new(
        declaring: impl Into<Arc<str>>,
        name: impl Into<Arc<str>>,
        modifiers: Modifiers,
        params: impl IntoIterator<Item = ParamSymbol>,
        return_type: TypeRef,
    ) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "method must have a name");
        Self {
            declaring: declaring.into(),
            name,
            modifiers,
            type_params: Vec::new(),
            params: params.into_iter().collect(),
            return_type,
            syntax: None,
        }
    }

    pub fn with_type_params(mut self, type_params: Vec<TypeParamSymbol>) -> Self {
        self.type_params = type_params;
        self
    }

    /// Attaches the declaring syntax node. May be called at most once.
    pub fn bound_to(mut self, syntax: SyntaxRef) -> Self {
        assert!(self.syntax.is_none(), "syntax binding is set exactly once");
        self.syntax = Some(syntax);
        self
    }

    pub fn simple_name(&self) -> &str {
        &self.name
    }

    pub fn declaring_class_name(&self) -> &str {
        &self.declaring
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Formal parameters, in declaration order.
    pub fn params(&self) -> &[ParamSymbol] {
        &self.params
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }

    pub fn return_type(&self) -> &TypeRef {
        &self.return_type
    }

    pub fn is_static(&self) -> bool {
        self.modifiers.is_static()
    }

    pub fn is_abstract(&self) -> bool {
        self.modifiers.is_abstract()
    }

    pub fn syntax_binding(&self) -> Option<SyntaxRef> {
        self.syntax
    }

    pub fn accept<R, P, V>(&self, visitor: &mut V, param: P) -> R
    where
        V: SymbolVisitor<R, P> + ?Sized,
    {
        visitor.visit_method(self, param)
    }
}

/// Declaration symbol for a constructor.
#[derive(Clone, Debug)]
pub struct ConstructorSymbol {
    pub(crate) declaring: Arc<str>,
    pub(crate) modifiers: Modifiers,
    pub(crate) type_params: Vec<TypeParamSymbol>,
    pub(crate) params: SmallVec<[ParamSymbol; 4]>,
    pub(crate) syntax: Option<SyntaxRef>,
}

impl ConstructorSymbol {
    pub fn new(
        declaring: impl Into<Arc<str>>,
        modifiers: Modifiers,
        params: impl IntoIterator<Item = ParamSymbol>,
    ) -> Self {
        Self {
            declaring: declaring.into(),
            modifiers,
            type_params: Vec::new(),
            params: params.into_iter().collect(),
            syntax: None,
        }
    }

    pub fn with_type_params(mut self, type_params: Vec<TypeParamSymbol>) -> Self {
        self.type_params = type_params;
        self
    }

    /// Attaches the declaring syntax node. May be called at most once.
    pub fn bound_to(mut self, syntax: SyntaxRef) -> Self {
        assert!(self.syntax.is_none(), "syntax binding is set exactly once");
        self.syntax = Some(syntax);
        self
    }

    pub fn simple_name(&self) -> &str {
        CTOR_NAME
    }

    pub fn declaring_class_name(&self) -> &str {
        &self.declaring
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn params(&self) -> &[ParamSymbol] {
        &self.params
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }

    pub fn syntax_binding(&self) -> Option<SyntaxRef> {
        self.syntax
    }

    pub fn accept<R, P, V>(&self, visitor: &mut V, param: P) -> R
    where
        V: SymbolVisitor<R, P> + ?Sized,
    {
        visitor.visit_constructor(self, param)
    }
}

/// Either kind of executable, as returned by store-level queries such as
/// [`SymbolStore::enclosing_method`](crate::store::SymbolStore::enclosing_method).
#[derive(Clone, Debug)]
pub enum ExecutableSymbol {
    Method(Arc<MethodSymbol>),
    Constructor(Arc<ConstructorSymbol>),
}

impl ExecutableSymbol {
    pub fn simple_name(&self) -> &str {
        match self {
            ExecutableSymbol::Method(m) => m.simple_name(),
            ExecutableSymbol::Constructor(c) => c.simple_name(),
        }
    }

    pub fn declaring_class_name(&self) -> &str {
        match self {
            ExecutableSymbol::Method(m) => m.declaring_class_name(),
            ExecutableSymbol::Constructor(c) => c.declaring_class_name(),
        }
    }

    pub fn modifiers(&self) -> Modifiers {
        match self {
            ExecutableSymbol::Method(m) => m.modifiers(),
            ExecutableSymbol::Constructor(c) => c.modifiers(),
        }
    }

    pub fn params(&self) -> &[ParamSymbol] {
        match self {
            ExecutableSymbol::Method(m) => m.params(),
            ExecutableSymbol::Constructor(c) => c.params(),
        }
    }
}
