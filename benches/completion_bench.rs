//! Completion pipeline benchmark
//!
//! Measures tokenizing a synthetic script, single completion requests at the
//! end of it, and re-scanning after an edit near the top of the buffer.

use acomp::{
    CompletionEngine, CompletionOptions, Document, FunctionValue, LineRange, SymbolEnvironment,
    Value,
};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

/// A script with `function_count` functions, each declaring a few locals.
fn generate_script(function_count: usize) -> String {
    let mut source = String::with_capacity(function_count * 160);
    source.push_str("var config = { debug: true, level: 3 };\n");
    for i in 0..function_count {
        source.push_str(&format!(
            "function handler{i}(event, options) {{\n  var count{i} = options.items.length;\n  \
             /* {i} */ return event.target.value + count{i};\n}}\n"
        ));
    }
    source.push_str("var result = hand");
    source
}

fn environment() -> SymbolEnvironment {
    let jquery = FunctionValue::returning(Value::object(
        ["addClass", "attr", "css", "find", "on", "removeClass"]
            .into_iter()
            .map(|name| (name, Value::Function(FunctionValue::new()))),
    ));
    SymbolEnvironment::new()
        .with_global("$", Value::Function(jquery))
        .with_global(
            "window",
            Value::object([(
                "location",
                Value::object([("href", Value::String(String::new()))]),
            )]),
        )
}

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");
    for count in [10, 100, 1_000] {
        let source = generate_script(count);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &source, |b, source| {
            b.iter(|| Document::new(black_box(source)));
        });
    }
    group.finish();
}

fn bench_complete(c: &mut Criterion) {
    let engine = CompletionEngine::new(CompletionOptions::default(), environment());
    let doc = Document::new(&generate_script(1_000));
    let row = doc.line_count() - 1;
    let column = doc.line(row).map_or(0, str::len) as u32;

    c.bench_function("complete_identifier", |b| {
        b.iter(|| engine.complete_at(black_box(&doc), row, column));
    });

    let member = Document::new("$(\"#main\").a");
    c.bench_function("complete_call_chain", |b| {
        b.iter(|| engine.complete_at(black_box(&member), 0, 12));
    });
}

fn bench_edit(c: &mut Criterion) {
    let doc = Document::new(&generate_script(200));
    c.bench_function("rescan_after_edit", |b| {
        b.iter_batched(
            || doc.clone(),
            |mut doc| doc.replace(LineRange::new(0, 4, 10), black_box("settings")),
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_tokenize, bench_complete, bench_edit);
criterion_main!(benches);
