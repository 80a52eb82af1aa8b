//! Construction path for source-derived class symbols.
//!
//! The binder that walks a parsed compilation unit builds one
//! [`ClassSymbol`] per type declaration through [`ClassSymbolBuilder`].
//! This is the only way to attach a syntax binding to a class symbol, and
//! the place where malformed declaration shapes are refused outright:
//! a shape the model cannot represent is a programming error in the
//! binder, not a runtime condition, so `build` fails fast instead of
//! producing a symbol that would confuse a consumer later.
//!
//! Array symbols come from [`crate::array`], primitives from
//! [`crate::primitive`], and unresolved symbols from [`crate::unresolved`];
//! none of those can be built here.

use std::sync::Arc;

use javelin_common::{names, SyntaxRef};

use crate::class::{ClassSymbol, EnclosingExec, EnclosingScope, TypeDeclKind, TypeRef};
use crate::members::{ConstructorSymbol, FieldSymbol, MethodSymbol};
use crate::modifiers::Modifiers;
use crate::type_params::TypeParamSymbol;

/// Builder for a source-derived class, interface, enum, or annotation
/// symbol.
pub struct ClassSymbolBuilder {
    binary_name: Arc<str>,
    canonical_name: Option<Arc<str>>,
    simple_name: Option<Arc<str>>,
    kind: TypeDeclKind,
    modifiers: Modifiers,
    anonymous: bool,
    scope: EnclosingScope,
    superclass: Option<TypeRef>,
    super_interfaces: Vec<TypeRef>,
    type_params: Vec<TypeParamSymbol>,
    declared_classes: Vec<TypeRef>,
    declared_fields: Vec<Arc<FieldSymbol>>,
    declared_methods: Vec<Arc<MethodSymbol>>,
    constructors: Vec<Arc<ConstructorSymbol>>,
    syntax: Option<SyntaxRef>,
}

impl ClassSymbolBuilder {
    /// Starts a builder for the given binary name and kind.
    ///
    /// Panics if the name is empty or names an array, or if the kind is
    /// one that source code cannot declare (array, primitive).
    pub fn new(binary_name: impl Into<Arc<str>>, kind: TypeDeclKind) -> Self {
        let binary_name = binary_name.into();
        assert!(!binary_name.is_empty(), "class symbol must have a binary name");
        assert!(
            !names::is_array_name(&binary_name),
            "array symbols are synthesized, not declared: {binary_name}"
        );
        assert!(
            !matches!(kind, TypeDeclKind::Array | TypeDeclKind::Primitive),
            "source declarations cannot have kind {kind:?}"
        );
        Self {
            binary_name,
            canonical_name: None,
            simple_name: None,
            kind,
            modifiers: Modifiers::empty(),
            anonymous: false,
            scope: EnclosingScope::TopLevel,
            superclass: None,
            super_interfaces: Vec::new(),
            type_params: Vec::new(),
            declared_classes: Vec::new(),
            declared_fields: Vec::new(),
            declared_methods: Vec::new(),
            constructors: Vec::new(),
            syntax: None,
        }
    }

    pub fn canonical_name(mut self, name: impl Into<Arc<str>>) -> Self {
        self.canonical_name = Some(name.into());
        self
    }

    /// Overrides the simple name derived from the binary name. Needed for
    /// local classes, whose binary names carry a compiler-assigned
    /// numbering segment.
    pub fn simple_name(mut self, name: impl Into<Arc<str>>) -> Self {
        self.simple_name = Some(name.into());
        self
    }

    pub fn modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn superclass(mut self, superclass: TypeRef) -> Self {
        assert!(
            !matches!(self.kind, TypeDeclKind::Interface | TypeDeclKind::Annotation),
            "interfaces have no superclass"
        );
        self.superclass = Some(superclass);
        self
    }

    pub fn super_interface(mut self, itf: TypeRef) -> Self {
        self.super_interfaces.push(itf);
        self
    }

    pub fn type_param(mut self, tp: TypeParamSymbol) -> Self {
        self.type_params.push(tp);
        self
    }

    /// Records a member class declared directly in this class.
    pub fn declared_class(mut self, member: TypeRef) -> Self {
        self.declared_classes.push(member);
        self
    }

    pub fn field(mut self, field: FieldSymbol) -> Self {
        debug_assert_eq!(field.declaring_class_name(), &*self.binary_name);
        self.declared_fields.push(Arc::new(field));
        self
    }

    pub fn method(mut self, method: MethodSymbol) -> Self {
        debug_assert_eq!(method.declaring_class_name(), &*self.binary_name);
        self.declared_methods.push(Arc::new(method));
        self
    }

    pub fn constructor(mut self, ctor: ConstructorSymbol) -> Self {
        debug_assert_eq!(ctor.declaring_class_name(), &*self.binary_name);
        self.constructors.push(Arc::new(ctor));
        self
    }

    /// Declares this type as a member nested directly in `class`.
    pub fn member_of(mut self, class: impl Into<Arc<str>>) -> Self {
        self.scope = EnclosingScope::Member {
            class: class.into(),
        };
        self
    }

    /// Declares this type as local to a method of `class`, identified by
    /// simple name and position among same-named overloads.
    pub fn local_in_method(
        mut self,
        class: impl Into<Arc<str>>,
        method: impl Into<Arc<str>>,
        overload: u32,
    ) -> Self {
        self.scope = EnclosingScope::Executable {
            class: class.into(),
            exec: EnclosingExec::Method {
                name: method.into(),
                overload,
            },
        };
        self
    }

    /// Declares this type as local to a constructor of `class`.
    pub fn local_in_constructor(mut self, class: impl Into<Arc<str>>, index: u32) -> Self {
        self.scope = EnclosingScope::Executable {
            class: class.into(),
            exec: EnclosingExec::Constructor { index },
        };
        self
    }

    /// Declares this type as local to an initializer block of `class`.
    /// Such a class has an enclosing class but no enclosing method.
    pub fn local_in_initializer(mut self, class: impl Into<Arc<str>>, static_init: bool) -> Self {
        self.scope = EnclosingScope::Initializer {
            class: class.into(),
            static_init,
        };
        self
    }

    /// Marks this type as an anonymous class.
    pub fn anonymous(mut self) -> Self {
        self.anonymous = true;
        self
    }

    /// Attaches the declaring syntax node. Source-derived symbols are the
    /// only ones that carry a binding; it is set exactly once, here.
    pub fn bound_to(mut self, syntax: SyntaxRef) -> Self {
        assert!(self.syntax.is_none(), "syntax binding is set exactly once");
        self.syntax = Some(syntax);
        self
    }

    /// Finishes the symbol, validating the construction invariants.
    ///
    /// Panics on shapes the model refuses to represent: a canonical name
    /// on a local or anonymous class, or an anonymous class outside an
    /// executable or initializer.
    pub fn build(self) -> ClassSymbol {
        let local_or_anon = self.scope.is_local() || self.anonymous;
        assert!(
            !(local_or_anon && self.canonical_name.is_some()),
            "local and anonymous classes have no canonical name: {}",
            self.binary_name
        );
        assert!(
            !self.anonymous || self.scope.is_local(),
            "anonymous class must be local to an executable or initializer: {}",
            self.binary_name
        );

        let simple_name = self
            .simple_name
            .unwrap_or_else(|| Arc::from(names::simple_name(&self.binary_name)));
        let canonical_name = if local_or_anon {
            None
        } else {
            self.canonical_name
                .or_else(|| Some(Arc::from(self.binary_name.replace('$', "."))))
        };

        // Implicit supertypes the declaration does not spell out
        let superclass = match self.kind {
            TypeDeclKind::Interface | TypeDeclKind::Annotation => None,
            TypeDeclKind::Enum => self
                .superclass
                .or_else(|| Some(TypeRef::new(names::ENUM))),
            _ => self.superclass.or_else(|| {
                if &*self.binary_name == names::OBJECT {
                    None
                } else {
                    Some(TypeRef::new(names::OBJECT))
                }
            }),
        };
        let mut super_interfaces = self.super_interfaces;
        if self.kind == TypeDeclKind::Annotation
            && !super_interfaces
                .iter()
                .any(|i| i.binary_name() == names::ANNOTATION)
        {
            super_interfaces.push(TypeRef::new(names::ANNOTATION));
        }

        ClassSymbol {
            binary_name: self.binary_name,
            canonical_name,
            simple_name,
            kind: self.kind,
            modifiers: self.modifiers,
            unresolved: false,
            anonymous: self.anonymous,
            scope: self.scope,
            superclass,
            super_interfaces,
            type_params: self.type_params,
            declared_classes: self.declared_classes,
            declared_fields: self.declared_fields,
            declared_methods: self.declared_methods,
            constructors: self.constructors,
            array_component: None,
            syntax: self.syntax,
        }
    }
}
