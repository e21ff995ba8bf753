use std::collections::HashMap;
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use rust_collection_generics::execution::Executor;
use rust_collection_generics::processing::{filter, map, map_keys, try_map};

fn numbers(n: i64) -> Vec<i64> {
    (0..n).collect()
}

fn bench_filter(c: &mut Criterion) {
    let xs = numbers(100_000);
    c.bench_function("filter_odd_100k", |b| {
        b.iter(|| filter(Some(black_box(xs.as_slice())), Some(|i: &i64| i % 2 == 1)))
    });
}

fn bench_map(c: &mut Criterion) {
    let xs: Vec<String> = numbers(100_000)
        .into_iter()
        .map(|i| if i % 10 == 0 { "bad".to_string() } else { i.to_string() })
        .collect();

    let mut group = c.benchmark_group("parse_100k");
    group.bench_function("map", |b| {
        b.iter(|| map(Some(black_box(xs.as_slice())), Some(|s: &String| s.parse::<i64>())))
    });
    group.bench_function("try_map_first_fails", |b| {
        b.iter(|| try_map(Some(black_box(xs.as_slice())), Some(|s: &String| s.parse::<i64>())))
    });
    let engine = Executor::default();
    group.bench_function("executor_map", |b| {
        b.iter(|| engine.map(Some(black_box(xs.as_slice())), Some(|s: &String| s.parse::<i64>())))
    });
    group.finish();
}

fn bench_map_keys(c: &mut Criterion) {
    let m: HashMap<i64, i64> = numbers(50_000).into_iter().map(|i| (i, i * 2)).collect();
    c.bench_function("map_keys_50k", |b| b.iter(|| map_keys(Some(black_box(&m)))));
}

criterion_group!(benches, bench_filter, bench_map, bench_map_keys);
criterion_main!(benches);
