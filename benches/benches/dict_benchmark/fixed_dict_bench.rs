use std::{collections::HashMap, hint::black_box, num::NonZeroUsize};

use chainkv::{FixedDict, DEFAULT_BUCKETS};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::SmallRng, Rng, SeedableRng};

const N: i64 = 10_000;

fn random_keys(count: usize) -> Vec<i64> {
    let mut rng = SmallRng::seed_from_u64(42);
    (0..count).map(|_| rng.gen()).collect()
}

fn bench_insert(c: &mut Criterion) {
    c.bench_function("insert 10_000 (FixedDict)", |b| {
        b.iter(|| {
            let mut d = FixedDict::new();
            for i in 0..N {
                d.insert(black_box(i), black_box(i));
            }
        });
    });

    c.bench_function("insert 10_000 (HashMap)", |b| {
        b.iter(|| {
            let mut d = HashMap::new();
            for i in 0..N {
                d.insert(black_box(i), black_box(i));
            }
        });
    });
}

fn bench_get(c: &mut Criterion) {
    let keys = random_keys(N as usize);

    let mut dict = FixedDict::new();
    let mut hashmap = HashMap::new();
    for &k in &keys {
        dict.insert(k, k);
        hashmap.insert(k, k);
    }

    c.bench_function("get 10_000 random (FixedDict)", |b| {
        b.iter(|| {
            for &k in &keys {
                black_box(dict.get(k));
            }
        });
    });

    c.bench_function("get 10_000 random (HashMap)", |b| {
        b.iter(|| {
            for k in &keys {
                black_box(hashmap.get(k));
            }
        });
    });
}

fn bench_remove(c: &mut Criterion) {
    c.bench_function("insert + remove 10_000 (FixedDict)", |b| {
        b.iter(|| {
            let mut d = FixedDict::new();
            for i in 0..N {
                d.insert(i, i);
            }
            for i in 0..N {
                black_box(d.remove(i));
            }
        });
    });

    c.bench_function("insert + remove 10_000 (HashMap)", |b| {
        b.iter(|| {
            let mut d = HashMap::new();
            for i in 0..N {
                d.insert(i, i);
            }
            for i in 0..N {
                black_box(d.remove(&i));
            }
        });
    });
}

/// Длина цепочек растёт при уменьшении числа бакетов.
fn bench_bucket_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("get 10_000 by bucket count");

    for buckets in [16usize, 1_024, DEFAULT_BUCKETS] {
        let mut dict = FixedDict::with_buckets(NonZeroUsize::new(buckets).unwrap());
        for i in 0..N {
            dict.insert(i, i);
        }

        group.bench_with_input(BenchmarkId::from_parameter(buckets), &dict, |b, dict| {
            b.iter(|| {
                for i in 0..N {
                    black_box(dict.get(i));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_get,
    bench_remove,
    bench_bucket_counts
);
criterion_main!(benches);
