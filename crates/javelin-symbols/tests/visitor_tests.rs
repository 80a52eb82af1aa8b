//! Tests for double-dispatch over symbol kinds.

use javelin_symbols::{
    ClassSymbol, ClassSymbolBuilder, ConstructorSymbol, FieldSymbol, MethodSymbol, Modifiers,
    NoClasspath, PrimitiveKind, SymbolRef, SymbolStore, SymbolVisitor, TypeDeclKind,
    TypeParamSymbol, TypeRef,
};

fn sample_class() -> ClassSymbol {
    ClassSymbolBuilder::new("com.example.Box", TypeDeclKind::Class)
        .modifiers(Modifiers::PUBLIC)
        .type_param(TypeParamSymbol::new("T"))
        .field(FieldSymbol::new(
            "com.example.Box",
            "value",
            Modifiers::PRIVATE,
            TypeRef::new("java.lang.Object"),
        ))
        .method(MethodSymbol::new(
            "com.example.Box",
            "get",
            Modifiers::PUBLIC,
            [],
            TypeRef::new("java.lang.Object"),
        ))
        .constructor(ConstructorSymbol::new("com.example.Box", Modifiers::PUBLIC, []))
        .build()
}

/// Counts classes and methods, sending everything else to the fallback.
#[derive(Default)]
struct KindTally {
    classes: usize,
    methods: usize,
    other: usize,
}

impl SymbolVisitor<(), ()> for KindTally {
    fn visit_symbol(&mut self, _symbol: SymbolRef<'_>, _param: ()) {
        self.other += 1;
    }

    fn visit_class(&mut self, _symbol: &ClassSymbol, _param: ()) {
        self.classes += 1;
    }

    fn visit_method(&mut self, _symbol: &MethodSymbol, _param: ()) {
        self.methods += 1;
    }
}

#[test]
fn test_dispatch_over_heterogeneous_symbols() {
    let class = sample_class();
    let mut refs: Vec<SymbolRef<'_>> = vec![SymbolRef::Class(&class)];
    refs.extend(class.declared_methods().iter().map(|m| SymbolRef::Method(m)));
    refs.extend(class.declared_fields().iter().map(|f| SymbolRef::Field(f)));
    refs.extend(class.constructors().iter().map(|c| SymbolRef::Constructor(c)));
    refs.extend(class.type_params().iter().map(SymbolRef::TypeParam));

    let mut tally = KindTally::default();
    for symbol in refs {
        symbol.accept(&mut tally, ());
    }
    assert_eq!(tally.classes, 1);
    assert_eq!(tally.methods, 1);
    // field, constructor, and type parameter land in the fallback
    assert_eq!(tally.other, 3);
}

/// A visitor that only implements the fallback.
struct NameOf;

impl SymbolVisitor<String, ()> for NameOf {
    fn visit_symbol(&mut self, symbol: SymbolRef<'_>, _param: ()) -> String {
        symbol.simple_name().to_string()
    }
}

#[test]
fn test_fallback_only_visitor_sees_every_kind() {
    let class = sample_class();
    let mut v = NameOf;
    assert_eq!(class.accept(&mut v, ()), "Box");
    assert_eq!(class.declared_methods()[0].accept(&mut v, ()), "get");
    assert_eq!(class.declared_fields()[0].accept(&mut v, ()), "value");
    assert_eq!(class.constructors()[0].accept(&mut v, ()), "<init>");
    assert_eq!(class.type_params()[0].accept(&mut v, ()), "T");
}

#[test]
fn test_every_class_kind_dispatches_to_visit_class() {
    let store = SymbolStore::new(NoClasspath);
    let mut tally = KindTally::default();

    store.primitive(PrimitiveKind::Int).accept(&mut tally, ());
    store.resolve("int[]").accept(&mut tally, ());
    store.resolve("ghost.Missing").accept(&mut tally, ());
    sample_class().accept(&mut tally, ());

    // primitives, arrays, unresolved, and source classes all go through
    // the class operation
    assert_eq!(tally.classes, 4);
    assert_eq!(tally.other, 0);
}

#[test]
fn test_param_threads_through_dispatch() {
    struct Grep;
    impl<'a> SymbolVisitor<bool, &'a str> for Grep {
        fn visit_symbol(&mut self, symbol: SymbolRef<'_>, needle: &'a str) -> bool {
            symbol.simple_name().contains(needle)
        }
    }

    let class = sample_class();
    let mut v = Grep;
    assert!(class.accept(&mut v, "Bo"));
    assert!(!class.accept(&mut v, "Nope"));
}
