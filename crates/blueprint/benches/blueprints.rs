//! Micro-benchmarks for the hot parse paths.

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use forma_blueprint::prelude::*;

fn leaf_parsing(c: &mut Criterion) {
    let bp = integer();
    let textual = Value::text("123456");
    c.bench_function("integer_from_text", |b| {
        b.iter(|| bp.apply(black_box(&textual)))
    });

    let native = Value::integer(123_456);
    c.bench_function("integer_from_integer", |b| {
        b.iter(|| bp.apply(black_box(&native)))
    });
}

fn list_parsing(c: &mut Criterion) {
    let bp = list(integer());
    let input = Value::array((0..128).map(|i| Value::text(i.to_string())));
    c.bench_function("list_of_128_numeric_texts", |b| {
        b.iter(|| bp.apply(black_box(&input)))
    });
}

fn object_parsing(c: &mut Criterion) {
    let model = ObjectModel::builder()
        .field("host", text().boxed())
        .field("port", integer().boxed())
        .optional_field("retries", integer().boxed(), 3)
        .build()
        .unwrap();
    let bp = object(model);
    let input = Value::object([
        ("host".to_string(), Value::text("localhost")),
        ("port".to_string(), Value::text("8080")),
    ]);
    c.bench_function("object_with_default", |b| {
        b.iter(|| bp.apply(black_box(&input)))
    });
}

fn envelope_parsing(c: &mut Criterion) {
    let bp = json(list(integer()));
    let input = Value::text("[1, 2, 3, 4, 5, 6, 7, 8]");
    c.bench_function("json_envelope_list", |b| {
        b.iter(|| bp.apply(black_box(&input)))
    });
}

criterion_group!(
    benches,
    leaf_parsing,
    list_parsing,
    object_parsing,
    envelope_parsing
);
criterion_main!(benches);
