// Key generation benchmarks: appending, bisecting, bulk seeding, and jitter.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use orderkey::RngJitter;
use orderkey::codec::increment_integer;
use orderkey::key_between;
use orderkey::key_between_jitter;
use orderkey::n_keys_between;

// =============================================================================
// Benchmark Helpers
// =============================================================================

/// Bisect towards `a` `depth` times, producing ever longer keys.
fn deep_pair(depth: usize) -> (String, String) {
    let a = "a0".to_string();
    let mut b = "a1".to_string();
    for _ in 0..depth {
        b = key_between(&a, &b).unwrap();
    }
    return (a, b);
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_append(c: &mut Criterion) {
    c.bench_function("append_1000", |bench| {
        bench.iter(|| {
            let mut last = key_between("", "").unwrap();
            for _ in 0..1000 {
                last = key_between(&last, "").unwrap();
            }
            black_box(last)
        })
    });
}

fn bench_bisect(c: &mut Criterion) {
    let mut group = c.benchmark_group("bisect");
    for depth in [1, 10, 50, 200] {
        let (a, b) = deep_pair(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &(a, b), |bench, (a, b)| {
            bench.iter(|| black_box(key_between(a, b).unwrap()))
        });
    }
    group.finish();
}

fn bench_n_keys(c: &mut Criterion) {
    let mut group = c.benchmark_group("n_keys_between");
    for n in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, &n| {
            bench.iter(|| black_box(n_keys_between("a0", "a1", n).unwrap()))
        });
    }
    group.finish();
}

fn bench_jitter(c: &mut Criterion) {
    let mut jitter = RngJitter::seeded(42);
    c.bench_function("jitter_between", |bench| {
        bench.iter(|| black_box(key_between_jitter("a0", "a1", &mut jitter, 8).unwrap()))
    });
}

fn bench_increment(c: &mut Criterion) {
    c.bench_function("increment_carry", |bench| {
        bench.iter(|| black_box(increment_integer(black_box("bzz")).unwrap()))
    });
}

criterion_group!(
    benches,
    bench_append,
    bench_bisect,
    bench_n_keys,
    bench_jitter,
    bench_increment,
);
criterion_main!(benches);
