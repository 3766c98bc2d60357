use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use algotty::bench::run_fast_once;
use algotty::catalog::PatternKey;

fn bench_fast_variants(c: &mut Criterion) {
    let mut group = c.benchmark_group("fastpath");
    for &key in PatternKey::all() {
        for &size in &[1_000usize, 10_000] {
            group.throughput(Throughput::Elements(size as u64));
            group.bench_with_input(
                BenchmarkId::new(key.as_str(), size),
                &size,
                |b, &size| b.iter(|| run_fast_once(key, size)),
            );
        }
    }
    group.finish();
}

criterion_group!(fastpath, bench_fast_variants);
criterion_main!(fastpath);
