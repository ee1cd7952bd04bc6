//! Traversal benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lazyseq::{GenerativeSequence, Sequence, TraversalConfig};

fn benchmark_stepped(c: &mut Criterion) {
    let seq = Sequence::new(0u64, 10_000);

    c.bench_function("stepped_successor_10k", |b| {
        b.iter(|| black_box(&seq).iter().sum::<u64>());
    });

    let config = TraversalConfig::new().with_step_budget(20_000);
    c.bench_function("stepped_checked_10k", |b| {
        b.iter(|| black_box(&seq).step_count(&config));
    });
}

fn benchmark_generative(c: &mut Criterion) {
    let mut next = 0u64;
    let seq = GenerativeSequence::new(10_000, move || {
        next = next.wrapping_add(1);
        next
    });

    c.bench_function("generative_counter_10k", |b| {
        b.iter(|| black_box(&seq).iter().fold(0u64, u64::wrapping_add));
    });
}

criterion_group!(benches, benchmark_stepped, benchmark_generative);
criterion_main!(benches);
