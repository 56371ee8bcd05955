use criterion::{black_box, criterion_group, criterion_main, Criterion};

use abi_split_core::prelude::*;

fn bench_entry_points(c: &mut Criterion) {
    let value = [0xABu8; 34];
    let empty: &[u8] = &[];
    let packed = reencode(&value, &value);
    let mut group = c.benchmark_group("entry_points");

    group.bench_function("from_packed", |b| {
        let mut sink = MemorySink::new();
        b.iter(|| {
            from_packed(black_box(&packed), &mut sink).unwrap();
            sink.pop()
        })
    });
    group.bench_function("from_packed_optimized", |b| {
        let mut sink = MemorySink::new();
        b.iter(|| {
            from_packed_optimized(black_box(&packed), &mut sink).unwrap();
            sink.pop()
        })
    });
    group.bench_function("from_separate", |b| {
        let mut sink = MemorySink::new();
        b.iter(|| {
            from_separate(black_box(&value), black_box(&value), &mut sink);
            sink.pop()
        })
    });
    group.bench_function("from_packed_with_empty_skip/empty", |b| {
        let mut sink = MemorySink::new();
        b.iter(|| {
            from_packed_with_empty_skip(black_box(empty), &mut sink).unwrap();
            sink.pop()
        })
    });
    group.bench_function("from_separate_with_empty_skip/one_empty", |b| {
        let mut sink = MemorySink::new();
        b.iter(|| {
            from_separate_with_empty_skip(black_box(&value), black_box(empty), &mut sink);
            sink.pop()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_entry_points);
criterion_main!(benches);
