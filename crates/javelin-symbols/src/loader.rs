//! The classpath/metadata boundary.
//!
//! The symbol core never reads classfiles. Whatever loads them — a
//! classfile parser, a reflective bridge, a test fixture — implements
//! [`ClassStubLoader`] and hands back [`ClassStub`] records: plain
//! structural data (names, modifiers, member signatures) with no behavior
//! attached. The store turns a stub into a [`ClassSymbol`] exactly once
//! per binary name.
//!
//! Stubs are serde-serializable so a classpath snapshot can be kept as a
//! JSON fixture; [`MapStubLoader`] serves such a snapshot from memory.

use std::io;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use javelin_common::names;

use crate::class::{ClassSymbol, EnclosingExec, EnclosingScope, TypeDeclKind, TypeRef};
use crate::members::{ConstructorSymbol, FieldSymbol, MethodSymbol, ParamSymbol};
use crate::modifiers::Modifiers;
use crate::type_params::TypeParamSymbol;

/// Supplies structural declaration data for binary names.
///
/// Any I/O (classfile reading, archive scanning) happens behind this
/// trait, before data reaches the symbol core. `load` returning `None`
/// means "not found": the store falls back to an unresolved symbol and
/// never treats it as an error.
///
/// Implementations must not call back into the [`SymbolStore`] that is
/// querying them; resolution of the names a stub mentions is the store's
/// job and happens lazily, later.
///
/// [`SymbolStore`]: crate::store::SymbolStore
pub trait ClassStubLoader {
    fn load(&self, binary_name: &str) -> Option<ClassStub>;
}

/// A loader for source-only analyses: every lookup misses.
pub struct NoClasspath;

impl ClassStubLoader for NoClasspath {
    fn load(&self, _binary_name: &str) -> Option<ClassStub> {
        None
    }
}

fn default_kind() -> TypeDeclKind {
    TypeDeclKind::Class
}

fn default_return_type() -> String {
    "void".to_string()
}

/// Structural declaration data for one class, as recovered from
/// classpath metadata.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClassStub {
    pub binary_name: String,
    /// Canonical name; derived from the binary name when absent.
    #[serde(default)]
    pub canonical_name: Option<String>,
    #[serde(default = "default_kind")]
    pub kind: TypeDeclKind,
    /// Raw `java.lang.reflect.Modifier` bits.
    #[serde(default)]
    pub modifiers: u16,
    #[serde(default)]
    pub superclass: Option<String>,
    #[serde(default)]
    pub interfaces: Vec<String>,
    #[serde(default)]
    pub type_params: Vec<TypeParamStub>,
    /// Binary names of member classes (no local or anonymous classes).
    #[serde(default)]
    pub nested_classes: Vec<String>,
    #[serde(default)]
    pub fields: Vec<FieldStub>,
    #[serde(default)]
    pub methods: Vec<MethodStub>,
    #[serde(default)]
    pub constructors: Vec<ConstructorStub>,
    /// Lexical position, when this class is itself nested or local.
    #[serde(default)]
    pub enclosing: Option<EnclosingStub>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FieldStub {
    pub name: String,
    #[serde(default)]
    pub modifiers: u16,
    #[serde(rename = "type")]
    pub type_name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MethodStub {
    pub name: String,
    #[serde(default)]
    pub modifiers: u16,
    #[serde(default)]
    pub params: Vec<ParamStub>,
    #[serde(default = "default_return_type")]
    pub return_type: String,
    #[serde(default)]
    pub type_params: Vec<TypeParamStub>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConstructorStub {
    #[serde(default)]
    pub modifiers: u16,
    #[serde(default)]
    pub params: Vec<ParamStub>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ParamStub {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub type_name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TypeParamStub {
    pub name: String,
    #[serde(default)]
    pub bounds: Vec<String>,
}

/// Lexical position of a nested or local class, as recorded in classfile
/// metadata (`InnerClasses`/`EnclosingMethod` attributes).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "in", rename_all = "snake_case")]
pub enum EnclosingStub {
    Member { class: String },
    Method { class: String, name: String, overload: u32 },
    Constructor { class: String, index: u32 },
    Initializer { class: String, static_init: bool },
}

impl ClassStub {
    /// Converts this stub into a class symbol.
    ///
    /// Panics if the stub claims a kind the classpath cannot produce
    /// (arrays and primitives are synthesized, never loaded).
    pub(crate) fn into_symbol(self) -> ClassSymbol {
        assert!(
            !matches!(self.kind, TypeDeclKind::Array | TypeDeclKind::Primitive),
            "classpath metadata cannot declare kind {:?}: {}",
            self.kind,
            self.binary_name
        );

        let binary_name: Arc<str> = Arc::from(self.binary_name);
        let scope = match self.enclosing {
            None => EnclosingScope::TopLevel,
            Some(EnclosingStub::Member { class }) => EnclosingScope::Member {
                class: Arc::from(class),
            },
            Some(EnclosingStub::Method { class, name, overload }) => EnclosingScope::Executable {
                class: Arc::from(class),
                exec: EnclosingExec::Method {
                    name: Arc::from(name),
                    overload,
                },
            },
            Some(EnclosingStub::Constructor { class, index }) => EnclosingScope::Executable {
                class: Arc::from(class),
                exec: EnclosingExec::Constructor { index },
            },
            Some(EnclosingStub::Initializer { class, static_init }) => {
                EnclosingScope::Initializer {
                    class: Arc::from(class),
                    static_init,
                }
            }
        };
        let simple_name: Arc<str> = Arc::from(names::simple_name(&binary_name));
        let anonymous = scope.is_local() && simple_name.is_empty();
        let canonical_name = if scope.is_local() {
            None
        } else {
            match self.canonical_name {
                Some(c) => Some(Arc::from(c)),
                None => Some(Arc::from(binary_name.replace('$', "."))),
            }
        };

        let declared_fields = self
            .fields
            .into_iter()
            .map(|f| {
                Arc::new(FieldSymbol::new(
                    binary_name.clone(),
                    f.name,
                    Modifiers::from_reflect_bits(f.modifiers),
                    TypeRef::new(f.type_name),
                ))
            })
            .collect();
        let declared_methods = self
            .methods
            .into_iter()
            .map(|m| {
                Arc::new(
                    MethodSymbol::new(
                        binary_name.clone(),
                        m.name,
                        Modifiers::from_reflect_bits(m.modifiers),
                        m.params.into_iter().map(ParamStub::into_symbol),
                        TypeRef::new(m.return_type),
                    )
                    .with_type_params(type_params_from_stubs(m.type_params)),
                )
            })
            .collect();
        let constructors = self
            .constructors
            .into_iter()
            .map(|c| {
                Arc::new(ConstructorSymbol::new(
                    binary_name.clone(),
                    Modifiers::from_reflect_bits(c.modifiers),
                    c.params.into_iter().map(ParamStub::into_symbol),
                ))
            })
            .collect();

        // Interfaces and annotations have no superclass; classes and
        // enums fall back to their implicit one when metadata omits it.
        let superclass = match self.kind {
            TypeDeclKind::Interface | TypeDeclKind::Annotation => None,
            TypeDeclKind::Enum => self
                .superclass
                .map(TypeRef::new)
                .or_else(|| Some(TypeRef::new(names::ENUM))),
            _ => self.superclass.map(TypeRef::new).or_else(|| {
                if &*binary_name == names::OBJECT {
                    None
                } else {
                    Some(TypeRef::new(names::OBJECT))
                }
            }),
        };

        ClassSymbol {
            canonical_name,
            simple_name,
            kind: self.kind,
            modifiers: Modifiers::from_reflect_bits(self.modifiers),
            unresolved: false,
            anonymous,
            scope,
            superclass,
            super_interfaces: self.interfaces.into_iter().map(TypeRef::new).collect(),
            type_params: type_params_from_stubs(self.type_params),
            declared_classes: self.nested_classes.into_iter().map(TypeRef::new).collect(),
            declared_fields,
            declared_methods,
            constructors,
            array_component: None,
            syntax: None,
            binary_name,
        }
    }
}

impl ParamStub {
    fn into_symbol(self) -> ParamSymbol {
        ParamSymbol::new(self.name.as_deref(), TypeRef::new(self.type_name))
    }
}

fn type_params_from_stubs(stubs: Vec<TypeParamStub>) -> Vec<TypeParamSymbol> {
    stubs
        .into_iter()
        .map(|tp| {
            TypeParamSymbol::new(tp.name)
                .with_bounds(tp.bounds.into_iter().map(TypeRef::new).collect())
        })
        .collect()
}

/// In-memory loader over a fixed set of stubs, preserving insertion
/// order for deterministic iteration in tests and tooling.
#[derive(Default)]
pub struct MapStubLoader {
    classes: IndexMap<String, ClassStub>,
}

impl MapStubLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a stub, keyed by its binary name. Replacing an existing entry
    /// is flagged: a classpath has one definition per name.
    pub fn insert(&mut self, stub: ClassStub) {
        let previous = self.classes.insert(stub.binary_name.clone(), stub);
        if let Some(previous) = previous {
            warn!(
                name = previous.binary_name.as_str(),
                "replacing classpath stub"
            );
        }
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Loads a stub set from a JSON array of [`ClassStub`] objects.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        let stubs: Vec<ClassStub> = serde_json::from_str(json)?;
        let mut loader = Self::new();
        for stub in stubs {
            loader.insert(stub);
        }
        Ok(loader)
    }

    /// Loads a stub set from a reader yielding the same JSON shape as
    /// [`MapStubLoader::from_json_str`].
    pub fn from_json_reader(reader: impl io::Read) -> serde_json::Result<Self> {
        let stubs: Vec<ClassStub> = serde_json::from_reader(reader)?;
        let mut loader = Self::new();
        for stub in stubs {
            loader.insert(stub);
        }
        Ok(loader)
    }
}

impl ClassStubLoader for MapStubLoader {
    fn load(&self, binary_name: &str) -> Option<ClassStub> {
        self.classes.get(binary_name).cloned()
    }
}
