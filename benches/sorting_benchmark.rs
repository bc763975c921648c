use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::Rng;
use sortable::prelude::*;
use std::hint::black_box;

fn bench_random_ints(c: &mut Criterion) {
    let mut group = c.benchmark_group("Random i32");
    group.sample_size(10);

    // Quadratic sorts, keep the input small.
    let mut rng = rand::rng();
    let count = 2_000;
    let input: Vec<i32> = (0..count).map(|_| rng.random()).collect();

    for algorithm in Algorithm::ALL {
        group.bench_function(algorithm.name(), |b| {
            b.iter(|| algorithm.sort(black_box(&input)))
        });
    }

    for gaps in [GapSequence::Hibbard, GapSequence::Sedgewick] {
        group.bench_function(format!("shell ({gaps:?})"), |b| {
            b.iter(|| shell::sort_with_gaps(black_box(&input), gaps, |x, y| x.cmp(y)))
        });
    }

    // Std Sort (Stable)
    group.bench_function("slice::sort (stable)", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| data.sort(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_nearly_sorted(c: &mut Criterion) {
    let mut group = c.benchmark_group("Nearly Sorted i32");
    group.sample_size(10);

    // Ascending with a few random swaps, where the early exits pay off.
    let mut rng = rand::rng();
    let count = 2_000;
    let mut input: Vec<i32> = (0..count).collect();
    for _ in 0..10 {
        let a = rng.random_range(0..input.len());
        let b = rng.random_range(0..input.len());
        input.swap(a, b);
    }

    for algorithm in Algorithm::ALL {
        group.bench_function(algorithm.name(), |b| {
            b.iter(|| algorithm.sort(black_box(&input)))
        });
    }

    group.finish();
}

fn bench_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("String Sort");
    group.sample_size(10);

    let mut rng = rand::rng();
    let count = 1_000;

    let random_strings: Vec<String> = (0..count)
        .map(|_| {
            let len = rng.random_range(5..20);
            (0..len).map(|_| rng.random::<char>()).collect()
        })
        .collect();

    for algorithm in Algorithm::ALL {
        group.bench_function(algorithm.name(), |b| {
            b.iter(|| algorithm.sort(black_box(&random_strings)))
        });
    }

    group.bench_function("slice::sort (stable)", |b| {
        b.iter_batched(
            || random_strings.clone(),
            |mut data| data.sort(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_random_ints, bench_nearly_sorted, bench_strings);
criterion_main!(benches);
