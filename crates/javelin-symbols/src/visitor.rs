//! Double-dispatch over symbol kinds.
//!
//! Consumers that branch on symbol kind implement [`SymbolVisitor`] and
//! call `accept` on a symbol of unknown kind; the symbol dispatches to
//! the operation for its own kind. Per-kind operations default to the
//! required [`visit_symbol`](SymbolVisitor::visit_symbol) fallback, so a
//! consumer overrides only the kinds it cares about and never downcasts.
//!
//! The set of kinds is closed: [`SymbolRef`] enumerates it, and the
//! `accept` dispatch matches it exhaustively.

use crate::class::ClassSymbol;
use crate::members::{ConstructorSymbol, FieldSymbol, MethodSymbol};
use crate::type_params::TypeParamSymbol;

/// Borrowed view of a symbol of any kind.
#[derive(Copy, Clone, Debug)]
pub enum SymbolRef<'a> {
    Class(&'a ClassSymbol),
    Method(&'a MethodSymbol),
    Constructor(&'a ConstructorSymbol),
    Field(&'a FieldSymbol),
    TypeParam(&'a TypeParamSymbol),
}

impl<'a> SymbolRef<'a> {
    /// Dispatches to the visitor operation for this symbol's kind.
    pub fn accept<R, P, V>(self, visitor: &mut V, param: P) -> R
    where
        V: SymbolVisitor<R, P> + ?Sized,
    {
        match self {
            SymbolRef::Class(sym) => visitor.visit_class(sym, param),
            SymbolRef::Method(sym) => visitor.visit_method(sym, param),
            SymbolRef::Constructor(sym) => visitor.visit_constructor(sym, param),
            SymbolRef::Field(sym) => visitor.visit_field(sym, param),
            SymbolRef::TypeParam(sym) => visitor.visit_type_param(sym, param),
        }
    }

    pub fn simple_name(&self) -> &'a str {
        match self {
            SymbolRef::Class(sym) => sym.simple_name(),
            SymbolRef::Method(sym) => sym.simple_name(),
            SymbolRef::Constructor(sym) => sym.simple_name(),
            SymbolRef::Field(sym) => sym.simple_name(),
            SymbolRef::TypeParam(sym) => sym.simple_name(),
        }
    }
}

/// Visitor over the closed set of symbol kinds.
///
/// `R` is the result computed per symbol, `P` a parameter threaded
/// through the dispatch.
pub trait SymbolVisitor<R, P> {
    /// Fallback for kinds the visitor does not override.
    fn visit_symbol(&mut self, symbol: SymbolRef<'_>, param: P) -> R;

    fn visit_class(&mut self, symbol: &ClassSymbol, param: P) -> R {
        self.visit_symbol(SymbolRef::Class(symbol), param)
    }

    fn visit_method(&mut self, symbol: &MethodSymbol, param: P) -> R {
        self.visit_symbol(SymbolRef::Method(symbol), param)
    }

    fn visit_constructor(&mut self, symbol: &ConstructorSymbol, param: P) -> R {
        self.visit_symbol(SymbolRef::Constructor(symbol), param)
    }

    fn visit_field(&mut self, symbol: &FieldSymbol, param: P) -> R {
        self.visit_symbol(SymbolRef::Field(symbol), param)
    }

    fn visit_type_param(&mut self, symbol: &TypeParamSymbol, param: P) -> R {
        self.visit_symbol(SymbolRef::TypeParam(symbol), param)
    }
}
