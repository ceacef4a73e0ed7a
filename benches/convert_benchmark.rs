//! Benchmarks for json2pdf conversion performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic order documents of varying record counts.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::{json, Value};

/// Creates a synthetic order document with the given number of records.
fn create_test_document(record_count: usize) -> Value {
    let records: Vec<Value> = (0..record_count)
        .map(|i| {
            json!({
                "id": i,
                "sku": format!("item-{i:04}"),
                "quantity": (i % 7) + 1,
                "tags": ["alpha", "beta"],
                "dimensions": {"width": 4.2, "height": 9.0}
            })
        })
        .collect();

    json!({"order": {"records": records, "count": record_count}})
}

/// Benchmark the formatter in isolation.
fn bench_format(c: &mut Criterion) {
    let value = create_test_document(100);

    c.bench_function("format_100_records", |b| {
        b.iter(|| json2pdf::format_value(black_box(&value), true));
    });

    c.bench_function("format_100_records_no_keys", |b| {
        b.iter(|| json2pdf::format_value(black_box(&value), false));
    });
}

/// Benchmark the paginator in isolation.
fn bench_paginate(c: &mut Criterion) {
    let value = create_test_document(100);
    let lines = json2pdf::format_value(&value, true);
    let options = json2pdf::LayoutOptions::default();

    c.bench_function("paginate_100_records", |b| {
        b.iter(|| json2pdf::paginate(black_box(&lines), &options));
    });
}

/// Benchmark the full pipeline at various sizes.
fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");
    let options = json2pdf::ConvertOptions::default();

    for record_count in [10, 100, 1000].iter() {
        let data = serde_json::to_vec(&create_test_document(*record_count)).unwrap();

        group.bench_function(format!("{}_records", record_count), |b| {
            b.iter(|| json2pdf::convert_bytes(black_box(&data), &options).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_format, bench_paginate, bench_convert);
criterion_main!(benches);
