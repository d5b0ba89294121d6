use std::collections::BTreeMap;
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use ordered_collections::OrderedMap;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const SIZES: [usize; 2] = [100, 10_000];

fn shuffled_keys(n: usize) -> Vec<usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(0xb7ee);
    (0..n).map(|_| rng.random_range(0..n * 8)).collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_rand");
    for n in SIZES {
        let keys = shuffled_keys(n);
        group.bench_with_input(BenchmarkId::new("ordered_map", n), &keys, |b, keys| {
            b.iter(|| {
                let mut map = OrderedMap::new();
                for &k in keys {
                    map.insert_or_assign(k, k);
                }
                black_box(map.len())
            })
        });
        group.bench_with_input(BenchmarkId::new("std_btreemap", n), &keys, |b, keys| {
            b.iter(|| {
                let mut map = BTreeMap::new();
                for &k in keys {
                    map.insert(k, k);
                }
                black_box(map.len())
            })
        });
    }
    group.finish();

    let mut group = c.benchmark_group("insert_seq");
    for n in SIZES {
        group.bench_with_input(BenchmarkId::new("ordered_map", n), &n, |b, &n| {
            b.iter(|| {
                let mut map = OrderedMap::new();
                for k in 0..n {
                    map.insert(k, k);
                }
                black_box(map.len())
            })
        });
        group.bench_with_input(BenchmarkId::new("std_btreemap", n), &n, |b, &n| {
            b.iter(|| {
                let mut map = BTreeMap::new();
                for k in 0..n {
                    map.insert(k, k);
                }
                black_box(map.len())
            })
        });
    }
    group.finish();
}

fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_rand");
    for n in SIZES {
        let keys = shuffled_keys(n);
        let map: OrderedMap<usize, usize> = keys.iter().map(|&k| (k, k)).collect();
        let std_map: BTreeMap<usize, usize> = keys.iter().map(|&k| (k, k)).collect();

        group.bench_with_input(BenchmarkId::new("ordered_map", n), &keys, |b, keys| {
            b.iter(|| {
                let mut hits = 0;
                for k in keys {
                    if map.contains_key(k) {
                        hits += 1;
                    }
                }
                black_box(hits)
            })
        });
        group.bench_with_input(BenchmarkId::new("std_btreemap", n), &keys, |b, keys| {
            b.iter(|| {
                let mut hits = 0;
                for k in keys {
                    if std_map.contains_key(k) {
                        hits += 1;
                    }
                }
                black_box(hits)
            })
        });
    }
    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_rand");
    for n in SIZES {
        let keys = shuffled_keys(n);
        let map: OrderedMap<usize, usize> = keys.iter().map(|&k| (k, k)).collect();

        group.bench_with_input(BenchmarkId::new("ordered_map", n), &keys, |b, keys| {
            b.iter_batched(
                || map.clone(),
                |mut map| {
                    for k in keys {
                        map.remove(k);
                    }
                    black_box(map.len())
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_iter(c: &mut Criterion) {
    let mut group = c.benchmark_group("iter");
    for n in SIZES {
        let map: OrderedMap<usize, usize> = shuffled_keys(n).into_iter().map(|k| (k, k)).collect();
        let std_map: BTreeMap<usize, usize> = shuffled_keys(n).into_iter().map(|k| (k, k)).collect();

        group.bench_with_input(BenchmarkId::new("ordered_map", n), &map, |b, map| {
            b.iter(|| {
                let mut sum = 0usize;
                for (_, v) in map.iter() {
                    sum = sum.wrapping_add(*v);
                }
                black_box(sum)
            })
        });
        group.bench_with_input(BenchmarkId::new("std_btreemap", n), &std_map, |b, map| {
            b.iter(|| {
                let mut sum = 0usize;
                for (_, v) in map.iter() {
                    sum = sum.wrapping_add(*v);
                }
                black_box(sum)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_find, bench_remove, bench_iter);
criterion_main!(benches);
