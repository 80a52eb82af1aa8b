//! The per-analysis-run symbol universe.
//!
//! A [`SymbolStore`] owns the shared symbol state of one analysis run:
//! the classpath symbol cache, the primitive symbols, the synthetic array
//! symbols, and the registry of source-derived symbols. It exists from
//! run start to run end; dropping it tears the universe down.
//!
//! Symbols are read-mostly and queried concurrently by independent rule
//! evaluations, so the store is `Sync` and every query is non-blocking
//! and free of I/O. The one coordination point is cache population:
//! concurrent first-references to the same binary name go through an
//! atomic insert-if-absent, so the backing loader is invoked at most once
//! per resolvable name and all consumers observe the same instance.
//! Unresolved symbols are the deliberate exception — they are cheap,
//! disposable, and constructed fresh per reference unless
//! [`StoreOptions::cache_unresolved`] turns on deduplication as a memory
//! optimization (never a correctness requirement; nothing may compare
//! symbols by identity).

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use rustc_hash::FxHashSet;
use tracing::{debug, trace, warn};

use javelin_common::names;

use crate::array;
use crate::class::{ClassSymbol, EnclosingExec, EnclosingScope, TypeRef};
use crate::loader::ClassStubLoader;
use crate::members::ExecutableSymbol;
use crate::primitive::{primitive_symbol, PrimitiveKind};
use crate::type_params::TypeParameterOwnerSymbol;
use crate::unresolved::unresolved_class;

/// Tuning knobs for a symbol store.
#[derive(Copy, Clone, Debug, Default)]
pub struct StoreOptions {
    /// Deduplicate unresolved symbols by name instead of constructing a
    /// fresh instance per unresolvable reference. Off by default.
    pub cache_unresolved: bool,
}

/// The symbol universe of one analysis run. Cheap to clone; clones share
/// the same underlying state.
#[derive(Clone)]
pub struct SymbolStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    loader: Box<dyn ClassStubLoader + Send + Sync>,
    options: StoreOptions,
    /// Resolvable symbols, keyed by binary name: classpath-derived,
    /// source-derived, and synthesized arrays. At most one entry per
    /// name for the lifetime of the run.
    classes: DashMap<Arc<str>, Arc<ClassSymbol>>,
    /// Unresolved symbols, used only with `cache_unresolved`.
    unresolved: DashMap<Arc<str>, Arc<ClassSymbol>>,
    primitives: [Arc<ClassSymbol>; 9],
}

impl SymbolStore {
    pub fn new(loader: impl ClassStubLoader + Send + Sync + 'static) -> Self {
        Self::with_options(loader, StoreOptions::default())
    }

    pub fn with_options(
        loader: impl ClassStubLoader + Send + Sync + 'static,
        options: StoreOptions,
    ) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                loader: Box::new(loader),
                options,
                classes: DashMap::new(),
                unresolved: DashMap::new(),
                primitives: PrimitiveKind::ALL.map(|k| Arc::new(primitive_symbol(k))),
            }),
        }
    }

    /// The symbol for a primitive type. Always the same instance per
    /// store.
    pub fn primitive(&self, kind: PrimitiveKind) -> Arc<ClassSymbol> {
        self.inner.primitives[kind as usize].clone()
    }

    /// Resolves a binary name to its symbol.
    ///
    /// Total: primitives and arrays are recognized syntactically, cached
    /// symbols are returned as-is, cache misses consult the loader, and a
    /// name nobody can supply comes back as an unresolved symbol rather
    /// than an error. The loader is invoked at most once per name.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn resolve(&self, binary_name: &str) -> Arc<ClassSymbol> {
        assert!(!binary_name.is_empty(), "cannot resolve an empty name");
        if let Some(component) = names::array_component(binary_name) {
            let component = self.resolve(component);
            return self.array_of(&component, 1);
        }
        if let Some(kind) = PrimitiveKind::from_name(binary_name) {
            return self.primitive(kind);
        }
        if let Some(existing) = self.inner.classes.get(binary_name) {
            trace!("cache hit");
            return existing.clone();
        }
        // First reference: the entry holds its shard locked, so two
        // racing resolutions of one name cannot both reach the loader.
        match self.inner.classes.entry(Arc::from(binary_name)) {
            Entry::Occupied(entry) => entry.get().clone(),
            Entry::Vacant(entry) => match self.inner.loader.load(binary_name) {
                Some(stub) => {
                    if stub.binary_name != binary_name {
                        warn!(
                            loaded = stub.binary_name.as_str(),
                            "loader returned a stub for a different name"
                        );
                    }
                    debug!("constructed classpath symbol");
                    let symbol = Arc::new(stub.into_symbol());
                    entry.insert(symbol.clone());
                    symbol
                }
                None => {
                    drop(entry);
                    debug!("not found, falling back to unresolved symbol");
                    self.unresolved_symbol(binary_name)
                }
            },
        }
    }

    /// Resolves a name-based reference held by another symbol.
    pub fn resolve_ref(&self, type_ref: &TypeRef) -> Arc<ClassSymbol> {
        self.resolve(type_ref.binary_name())
    }

    /// Builds an unresolved symbol for a name, honoring
    /// [`StoreOptions::cache_unresolved`].
    pub fn unresolved_symbol(&self, qualified_name: &str) -> Arc<ClassSymbol> {
        if !self.inner.options.cache_unresolved {
            return Arc::new(unresolved_class(qualified_name));
        }
        match self.inner.unresolved.entry(Arc::from(qualified_name)) {
            Entry::Occupied(entry) => entry.get().clone(),
            Entry::Vacant(entry) => {
                let symbol = Arc::new(unresolved_class(qualified_name));
                entry.insert(symbol.clone());
                symbol
            }
        }
    }

    /// The array symbol over `component` with `dims` dimensions, cached
    /// per dimension under its `[]`-suffixed binary name.
    pub fn array_of(&self, component: &Arc<ClassSymbol>, dims: usize) -> Arc<ClassSymbol> {
        assert!(dims >= 1, "array symbol needs at least one dimension");
        let mut current = component.clone();
        for _ in 0..dims {
            let name = names::array_name(current.binary_name(), 1);
            current = match self.inner.classes.entry(Arc::from(name)) {
                Entry::Occupied(entry) => entry.get().clone(),
                Entry::Vacant(entry) => {
                    let symbol = Arc::new(array::wrap_once(current));
                    entry.insert(symbol.clone());
                    symbol
                }
            };
        }
        current
    }

    /// Registers a source-derived symbol under its binary name.
    ///
    /// A binary name is bound at most once per run; on a duplicate
    /// registration the first symbol wins and the duplicate is dropped.
    pub fn insert_source(&self, symbol: ClassSymbol) -> Arc<ClassSymbol> {
        debug_assert!(!symbol.is_unresolved());
        let key = symbol.binary_name.clone();
        match self.inner.classes.entry(key) {
            Entry::Occupied(entry) => {
                warn!(
                    name = symbol.binary_name(),
                    "duplicate symbol registration, keeping the first"
                );
                entry.get().clone()
            }
            Entry::Vacant(entry) => {
                let symbol = Arc::new(symbol);
                entry.insert(symbol.clone());
                symbol
            }
        }
    }

    // Structural queries that cross from one symbol to another. The
    // symbol holds the referent's name; the store supplies the referent.

    /// The superclass symbol, if the class has one.
    pub fn superclass(&self, class: &ClassSymbol) -> Option<Arc<ClassSymbol>> {
        class
            .superclass_name()
            .map(|r| self.resolve(r.binary_name()))
    }

    /// The direct super-interface symbols, in declaration order.
    pub fn super_interfaces(&self, class: &ClassSymbol) -> Vec<Arc<ClassSymbol>> {
        class
            .super_interface_names()
            .iter()
            .map(|r| self.resolve(r.binary_name()))
            .collect()
    }

    /// The member class symbols declared directly in `class`.
    pub fn declared_classes(&self, class: &ClassSymbol) -> Vec<Arc<ClassSymbol>> {
        class
            .declared_class_names()
            .iter()
            .map(|r| self.resolve(r.binary_name()))
            .collect()
    }

    /// The first member class of `class` with the given simple name.
    pub fn declared_class(&self, class: &ClassSymbol, simple_name: &str) -> Option<Arc<ClassSymbol>> {
        class
            .declared_class_ref(simple_name)
            .map(|r| self.resolve(r.binary_name()))
    }

    /// The directly enclosing class symbol, if any.
    pub fn enclosing_class(&self, class: &ClassSymbol) -> Option<Arc<ClassSymbol>> {
        class.enclosing_class_name().map(|name| self.resolve(name))
    }

    /// The method or constructor a local class is declared in.
    ///
    /// `None` for everything else, including classes local to an
    /// initializer block — those have an enclosing class but no
    /// enclosing executable.
    pub fn enclosing_method(&self, class: &ClassSymbol) -> Option<ExecutableSymbol> {
        match class.enclosing_scope() {
            EnclosingScope::Executable { class: owner, exec } => {
                let owner = self.resolve(owner);
                match exec {
                    EnclosingExec::Method { name, overload } => owner
                        .declared_methods_named(name.as_ref())
                        .nth(*overload as usize)
                        .cloned()
                        .map(ExecutableSymbol::Method),
                    EnclosingExec::Constructor { index } => owner
                        .constructors()
                        .get(*index as usize)
                        .cloned()
                        .map(ExecutableSymbol::Constructor),
                }
            }
            _ => None,
        }
    }

    /// The nearest enclosing type-parameter owner: the enclosing method
    /// when there is one, otherwise the enclosing class.
    pub fn enclosing_type_parameter_owner(
        &self,
        class: &ClassSymbol,
    ) -> Option<TypeParameterOwnerSymbol> {
        if let Some(exec) = self.enclosing_method(class) {
            return Some(exec.into());
        }
        self.enclosing_class(class)
            .map(TypeParameterOwnerSymbol::Class)
    }

    /// Whether `class` is, or transitively extends/implements, a type
    /// with the given qualified name.
    ///
    /// Walks the declared supertype graph; unresolved symbols contribute
    /// no edges, so unknown ancestry conservatively answers false. Safe
    /// on malformed (cyclic) hierarchies.
    pub fn has_supertype_named(&self, class: &ClassSymbol, qualified: &str) -> bool {
        if class.matches_name(qualified) {
            return true;
        }
        let mut visited: FxHashSet<Arc<str>> = FxHashSet::default();
        visited.insert(class.binary_name.clone());
        let mut work: Vec<TypeRef> = Vec::new();
        work.extend(class.superclass_name().cloned());
        work.extend(class.super_interface_names().iter().cloned());
        while let Some(type_ref) = work.pop() {
            if !visited.insert(type_ref.name_arc()) {
                continue;
            }
            let symbol = self.resolve(type_ref.binary_name());
            if symbol.matches_name(qualified) {
                return true;
            }
            work.extend(symbol.superclass_name().cloned());
            work.extend(symbol.super_interface_names().iter().cloned());
        }
        false
    }
}
