//! Symbol store benchmarks.
//!
//! Measures the hot paths rule evaluations hit constantly: cached
//! resolution, member lookup by name, and array synthesis.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use javelin_symbols::{MapStubLoader, PrimitiveKind, SymbolStore};

const CLASSPATH_JSON: &str = r#"[
  {"binary_name": "java.lang.Object", "modifiers": 1},
  {"binary_name": "bench.Widget", "modifiers": 1,
   "superclass": "java.lang.Object",
   "fields": [
     {"name": "id", "modifiers": 18, "type": "long"},
     {"name": "label", "modifiers": 2, "type": "java.lang.String"}
   ],
   "methods": [
     {"name": "id", "modifiers": 1, "return_type": "long"},
     {"name": "label", "modifiers": 1, "return_type": "java.lang.String"},
     {"name": "resize", "modifiers": 1,
      "params": [{"name": "w", "type": "int"}, {"name": "h", "type": "int"}],
      "return_type": "void"},
     {"name": "resize", "modifiers": 1,
      "params": [{"name": "scale", "type": "double"}],
      "return_type": "void"}
   ]}
]"#;

fn bench_store() -> SymbolStore {
    let loader = MapStubLoader::from_json_str(CLASSPATH_JSON).expect("classpath parses");
    SymbolStore::new(loader)
}

fn bench_cached_resolution(c: &mut Criterion) {
    let store = bench_store();
    store.resolve("bench.Widget");
    c.bench_function("resolve_cached", |b| {
        b.iter(|| store.resolve(black_box("bench.Widget")))
    });
}

fn bench_unresolved_fallback(c: &mut Criterion) {
    let store = bench_store();
    c.bench_function("resolve_unresolved", |b| {
        b.iter(|| store.resolve(black_box("ghost.Missing")))
    });
}

fn bench_member_lookup(c: &mut Criterion) {
    let store = bench_store();
    let widget = store.resolve("bench.Widget");
    c.bench_function("declared_methods_named", |b| {
        b.iter(|| widget.declared_methods_named(black_box("resize")).count())
    });
}

fn bench_array_synthesis(c: &mut Criterion) {
    let store = bench_store();
    let int = store.primitive(PrimitiveKind::Int);
    c.bench_function("array_of_cached", |b| {
        b.iter(|| store.array_of(black_box(&int), 3))
    });

    // synthesis without the store cache, one fresh symbol per iteration
    c.bench_function("array_wrap_fresh", |b| {
        b.iter(|| javelin_symbols::array_symbol(black_box(int.clone()), 1))
    });
}

criterion_group!(
    benches,
    bench_cached_resolution,
    bench_unresolved_fallback,
    bench_member_lookup,
    bench_array_synthesis
);
criterion_main!(benches);
