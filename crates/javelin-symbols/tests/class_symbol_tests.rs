//! Tests for the class-symbol contract: kind predicates, member
//! accessors, and the source-binding construction path.

use javelin_common::{FileId, NodeIndex, SyntaxRef};
use javelin_symbols::{
    ClassSymbol, ClassSymbolBuilder, ConstructorSymbol, FieldSymbol, MethodSymbol, Modifiers,
    ParamSymbol, TypeDeclKind, TypeParamSymbol, TypeParameterOwner, TypeRef,
};

fn list_class() -> ClassSymbol {
    ClassSymbolBuilder::new("com.example.TaskList", TypeDeclKind::Class)
        .modifiers(Modifiers::PUBLIC)
        .super_interface(TypeRef::new("java.lang.Iterable"))
        .type_param(TypeParamSymbol::new("T"))
        .declared_class(TypeRef::new("com.example.TaskList$Node"))
        .field(FieldSymbol::new(
            "com.example.TaskList",
            "size",
            Modifiers::PRIVATE,
            TypeRef::new("int"),
        ))
        .field(FieldSymbol::new(
            "com.example.TaskList",
            "head",
            Modifiers::PRIVATE,
            TypeRef::new("com.example.TaskList$Node"),
        ))
        .method(MethodSymbol::new(
            "com.example.TaskList",
            "add",
            Modifiers::PUBLIC,
            [ParamSymbol::new(Some("task"), TypeRef::new("java.lang.Object"))],
            TypeRef::new("boolean"),
        ))
        .method(MethodSymbol::new(
            "com.example.TaskList",
            "add",
            Modifiers::PUBLIC,
            [
                ParamSymbol::new(Some("index"), TypeRef::new("int")),
                ParamSymbol::new(Some("task"), TypeRef::new("java.lang.Object")),
            ],
            TypeRef::new("boolean"),
        ))
        .method(MethodSymbol::new(
            "com.example.TaskList",
            "clear",
            Modifiers::PUBLIC,
            [],
            TypeRef::new("void"),
        ))
        .constructor(ConstructorSymbol::new(
            "com.example.TaskList",
            Modifiers::PUBLIC,
            [],
        ))
        .build()
}

#[test]
fn test_basic_names() {
    let sym = list_class();
    assert_eq!(sym.binary_name(), "com.example.TaskList");
    assert_eq!(sym.canonical_name(), Some("com.example.TaskList"));
    assert_eq!(sym.simple_name(), "TaskList");
    assert_eq!(sym.package_name(), "com.example");
    assert!(sym.matches_name("com.example.TaskList"));
    assert!(!sym.matches_name("com.example.Other"));
}

#[test]
fn test_kind_predicates_are_mutually_exclusive() {
    let class = list_class();
    let iface = ClassSymbolBuilder::new("com.example.Task", TypeDeclKind::Interface).build();
    let en = ClassSymbolBuilder::new("com.example.Priority", TypeDeclKind::Enum).build();
    let ann = ClassSymbolBuilder::new("com.example.Marker", TypeDeclKind::Annotation).build();

    for sym in [&class, &iface, &en, &ann] {
        let picks = [
            sym.is_interface(),
            sym.is_array(),
            sym.is_primitive(),
            sym.is_class(),
        ];
        assert_eq!(
            picks.iter().filter(|p| **p).count(),
            1,
            "exactly one of interface/array/primitive/class for {}",
            sym.binary_name()
        );
        assert_eq!(
            sym.is_class(),
            !sym.is_interface() && !sym.is_array() && !sym.is_primitive()
        );
    }
    assert!(class.is_class());
    assert!(iface.is_interface());
    // Enums and annotations have their own predicate but still count as
    // classes for the four-way split
    assert!(en.is_enum() && en.is_class());
    assert!(ann.is_annotation() && ann.is_class());
}

#[test]
fn test_declared_field_lookup_law() {
    let sym = list_class();
    assert_eq!(sym.declared_fields().len(), 2);
    let head = sym.declared_field("head").expect("head field");
    assert_eq!(head.simple_name(), "head");
    assert_eq!(
        head.declared_type().binary_name(),
        "com.example.TaskList$Node"
    );
    assert_eq!(head.declaring_class_name(), "com.example.TaskList");
    assert!(sym.declared_field("tail").is_none());
}

#[test]
fn test_declared_methods_named_preserves_order() {
    let sym = list_class();
    assert_eq!(sym.declared_methods().len(), 3);
    let adds: Vec<_> = sym.declared_methods_named("add").collect();
    assert_eq!(adds.len(), 2);
    assert_eq!(adds[0].arity(), 1);
    assert_eq!(adds[1].arity(), 2);
    assert_eq!(sym.declared_methods_named("remove").count(), 0);

    // the filtered sequence is exactly the matching subsequence
    let by_filter: Vec<_> = sym
        .declared_methods()
        .iter()
        .filter(|m| m.simple_name() == "add")
        .collect();
    let by_query: Vec<_> = sym.declared_methods_named("add").collect();
    assert_eq!(by_filter.len(), by_query.len());
    for (a, b) in by_filter.iter().zip(&by_query) {
        assert!(std::sync::Arc::ptr_eq(a, b));
    }
}

#[test]
fn test_implicit_supertypes() {
    let class = list_class();
    assert_eq!(
        class.superclass_name().map(TypeRef::binary_name),
        Some("java.lang.Object")
    );

    let object = ClassSymbolBuilder::new("java.lang.Object", TypeDeclKind::Class)
        .modifiers(Modifiers::PUBLIC)
        .build();
    assert!(object.superclass_name().is_none());

    let iface = ClassSymbolBuilder::new("com.example.Task", TypeDeclKind::Interface).build();
    assert!(iface.superclass_name().is_none());

    let en = ClassSymbolBuilder::new("com.example.Priority", TypeDeclKind::Enum).build();
    assert_eq!(
        en.superclass_name().map(TypeRef::binary_name),
        Some("java.lang.Enum")
    );

    let ann = ClassSymbolBuilder::new("com.example.Marker", TypeDeclKind::Annotation).build();
    assert!(ann
        .super_interface_names()
        .iter()
        .any(|i| i.binary_name() == "java.lang.annotation.Annotation"));
}

#[test]
fn test_member_class_scope() {
    let node = ClassSymbolBuilder::new("com.example.TaskList$Node", TypeDeclKind::Class)
        .member_of("com.example.TaskList")
        .modifiers(Modifiers::PRIVATE | Modifiers::STATIC)
        .build();
    assert_eq!(node.simple_name(), "Node");
    assert_eq!(node.canonical_name(), Some("com.example.TaskList.Node"));
    assert_eq!(node.enclosing_class_name(), Some("com.example.TaskList"));
    assert!(!node.is_local_class());
    assert!(!node.is_anonymous_class());
}

#[test]
fn test_local_class_has_no_canonical_name() {
    let local = ClassSymbolBuilder::new("com.example.TaskList$1Walker", TypeDeclKind::Class)
        .simple_name("Walker")
        .local_in_method("com.example.TaskList", "add", 0)
        .build();
    assert!(local.is_local_class());
    assert!(!local.is_anonymous_class());
    assert_eq!(local.canonical_name(), None);
    assert_eq!(local.simple_name(), "Walker");
    assert_eq!(local.enclosing_class_name(), Some("com.example.TaskList"));
}

#[test]
fn test_anonymous_class() {
    let anon = ClassSymbolBuilder::new("com.example.TaskList$1", TypeDeclKind::Class)
        .local_in_initializer("com.example.TaskList", false)
        .anonymous()
        .build();
    assert!(anon.is_anonymous_class());
    assert!(!anon.is_local_class());
    assert_eq!(anon.canonical_name(), None);
    assert_eq!(anon.simple_name(), "");
}

#[test]
fn test_syntax_binding_present_only_when_bound() {
    let bound = ClassSymbolBuilder::new("com.example.Bound", TypeDeclKind::Class)
        .bound_to(SyntaxRef::new(FileId(3), NodeIndex(41)))
        .build();
    assert_eq!(
        bound.syntax_binding(),
        Some(SyntaxRef::new(FileId(3), NodeIndex(41)))
    );

    let unbound = ClassSymbolBuilder::new("com.example.Unbound", TypeDeclKind::Class).build();
    assert_eq!(unbound.syntax_binding(), None);
}

#[test]
fn test_type_parameters_in_order() {
    let sym = ClassSymbolBuilder::new("com.example.Pair", TypeDeclKind::Class)
        .type_param(TypeParamSymbol::new("K"))
        .type_param(
            TypeParamSymbol::new("V").with_bounds(vec![TypeRef::new("java.lang.Comparable")]),
        )
        .build();
    let names: Vec<_> = sym
        .type_parameters()
        .iter()
        .map(TypeParamSymbol::simple_name)
        .collect();
    assert_eq!(names, ["K", "V"]);
    assert_eq!(
        sym.type_parameters()[1].bounds()[0].binary_name(),
        "java.lang.Comparable"
    );
}

#[test]
fn test_symbols_compare_by_binary_name() {
    let a = list_class();
    let b = list_class();
    assert_eq!(a, b);

    let other = ClassSymbolBuilder::new("com.example.Other", TypeDeclKind::Class).build();
    assert_ne!(a, other);
}

#[test]
fn test_queries_are_idempotent() {
    let sym = list_class();
    let first: Vec<_> = sym
        .declared_methods()
        .iter()
        .map(|m| m.simple_name().to_string())
        .collect();
    let second: Vec<_> = sym
        .declared_methods()
        .iter()
        .map(|m| m.simple_name().to_string())
        .collect();
    assert_eq!(first, second);
    assert_eq!(sym.declared_field("size").is_some(), sym.declared_field("size").is_some());
}

#[test]
#[should_panic(expected = "canonical name")]
fn test_builder_rejects_canonical_name_on_local_class() {
    let _ = ClassSymbolBuilder::new("com.example.A$1B", TypeDeclKind::Class)
        .canonical_name("com.example.A.B")
        .local_in_method("com.example.A", "run", 0)
        .build();
}

#[test]
#[should_panic(expected = "anonymous class must be local")]
fn test_builder_rejects_top_level_anonymous_class() {
    let _ = ClassSymbolBuilder::new("com.example.A$1", TypeDeclKind::Class)
        .anonymous()
        .build();
}

#[test]
#[should_panic(expected = "synthesized")]
fn test_builder_rejects_array_names() {
    let _ = ClassSymbolBuilder::new("com.example.A[]", TypeDeclKind::Class);
}

#[test]
#[should_panic(expected = "interfaces have no superclass")]
fn test_builder_rejects_interface_superclass() {
    let _ = ClassSymbolBuilder::new("com.example.Task", TypeDeclKind::Interface)
        .superclass(TypeRef::new("java.lang.Object"));
}

#[test]
#[should_panic(expected = "exactly once")]
fn test_syntax_binding_set_exactly_once() {
    let _ = ClassSymbolBuilder::new("com.example.Twice", TypeDeclKind::Class)
        .bound_to(SyntaxRef::new(FileId(0), NodeIndex(1)))
        .bound_to(SyntaxRef::new(FileId(0), NodeIndex(2)));
}
