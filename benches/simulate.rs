//! Policy throughput over pseudo-random reference strings.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pagesim::{compare, simulate, Policy};

/// Deterministic reference string with some locality: mostly a sliding
/// window of hot pages, occasionally a cold one.
fn reference_string(len: usize) -> Vec<u32> {
    let mut state: u32 = 0x9E37_79B9;
    (0..len)
        .map(|i| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            let base = (i / 16) as u32;
            if state % 8 == 0 {
                state % 256
            } else {
                base + state % 6
            }
        })
        .collect()
}

fn bench_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate");
    for len in [64, 512, 2048] {
        let pages = reference_string(len);
        for policy in Policy::ALL {
            group.bench_with_input(BenchmarkId::new(policy.name(), len), &pages, |b, pages| {
                b.iter(|| simulate(policy, black_box(pages), 4).unwrap())
            });
        }
    }
    group.finish();
}

fn bench_compare(c: &mut Criterion) {
    let pages = reference_string(1024);
    c.bench_function("compare/1024", |b| {
        b.iter(|| compare(black_box(&pages), 8).unwrap())
    });
}

criterion_group!(benches, bench_policies, bench_compare);
criterion_main!(benches);
