use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use bounded_select::select::BoundedSelector;
use helpers::{check::reference_top_k, streams::uniform_stream};
use rand::thread_rng;

fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = thread_rng();

    const NUM_VALUES: usize = 100_000;
    let values = uniform_stream(NUM_VALUES, 0, 1_000_000, &mut rng);

    let mut group = c.benchmark_group("top-k");
    for k in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("selector", k), &k, |b, &k| {
            b.iter(|| {
                let mut selector = BoundedSelector::largest(k).expect("valid capacity");
                selector.offer_all(values.iter().copied());
                selector.into_vec()
            })
        });
        group.bench_with_input(BenchmarkId::new("sort", k), &k, |b, &k| {
            b.iter(|| reference_top_k(&values, k))
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default().significance_level(0.1).sample_size(50);
    targets = criterion_benchmark
}
criterion_main!(benches);
