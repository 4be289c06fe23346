use std::hint::black_box;

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
type RandomState = hashbrown::DefaultHashBuilder;
type StrandMap<K, V> = strand_map::ordered_map::OrderedMap<K, V, RandomState>;

type HashLinkedMap<K, V> = hashlink::LinkedHashMap<K, V, RandomState>;
type IndexMap<K, V> = indexmap::IndexMap<K, V, RandomState>;

const SIZES: &[usize] = &[10000];

fn bench_insertion_at_end(c: &mut Criterion) {
    let mut group = c.benchmark_group("insertion_at_end");

    for &size in SIZES {
        group.throughput(criterion::Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("strand_map", size), &size, |b, &size| {
            b.iter(|| {
                let mut map: StrandMap<usize, usize> = StrandMap::default();
                for i in 0..size {
                    map.insert(black_box(i), black_box(i * 2));
                }
                map
            })
        });

        group.bench_with_input(
            BenchmarkId::new("strand_map_preallocated", size),
            &size,
            |b, &size| {
                b.iter(|| {
                    let mut map: StrandMap<usize, usize> =
                        StrandMap::with_capacity_and_hasher(size, RandomState::default());
                    for i in 0..size {
                        map.insert(black_box(i), black_box(i * 2));
                    }
                    map
                })
            },
        );

        group.bench_with_input(BenchmarkId::new("indexmap", size), &size, |b, &size| {
            b.iter(|| {
                let mut map = IndexMap::default();
                for i in 0..size {
                    map.insert(black_box(i), black_box(i * 2));
                }
                map
            })
        });

        group.bench_with_input(BenchmarkId::new("hashlinked", size), &size, |b, &size| {
            b.iter(|| {
                let mut map = HashLinkedMap::default();
                for i in 0..size {
                    map.insert(black_box(i), black_box(i * 2));
                }
                map
            })
        });
    }

    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");

    for &size in SIZES {
        group.throughput(criterion::Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("strand_map", size), &size, |b, &size| {
            let mut map: StrandMap<usize, usize> = StrandMap::default();
            for i in 0..size {
                map.insert(i, i * 2);
            }
            b.iter(|| {
                let mut total = 0;
                for i in 0..size {
                    total += map.get(&black_box(i)).copied().unwrap_or(0);
                }
                total
            })
        });

        group.bench_with_input(BenchmarkId::new("indexmap", size), &size, |b, &size| {
            let mut map = IndexMap::default();
            for i in 0..size {
                map.insert(i, i * 2);
            }
            b.iter(|| {
                let mut total = 0;
                for i in 0..size {
                    total += map.get(&black_box(i)).copied().unwrap_or(0);
                }
                total
            })
        });

        group.bench_with_input(BenchmarkId::new("hashlinked", size), &size, |b, &size| {
            let mut map = HashLinkedMap::default();
            for i in 0..size {
                map.insert(i, i * 2);
            }
            b.iter(|| {
                let mut total = 0;
                for i in 0..size {
                    total += map.get(&black_box(i)).copied().unwrap_or(0);
                }
                total
            })
        });
    }

    group.finish();
}

fn bench_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("iteration");

    for &size in SIZES {
        group.throughput(criterion::Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("strand_map", size), &size, |b, &size| {
            let mut map: StrandMap<usize, usize> = StrandMap::default();
            for i in 0..size {
                map.insert(i, i * 2);
            }
            b.iter(|| map.iter().map(|(_, &v)| v).sum::<usize>())
        });

        group.bench_with_input(BenchmarkId::new("indexmap", size), &size, |b, &size| {
            let mut map = IndexMap::default();
            for i in 0..size {
                map.insert(i, i * 2);
            }
            b.iter(|| map.iter().map(|(_, &v)| v).sum::<usize>())
        });

        group.bench_with_input(BenchmarkId::new("hashlinked", size), &size, |b, &size| {
            let mut map = HashLinkedMap::default();
            for i in 0..size {
                map.insert(i, i * 2);
            }
            b.iter(|| map.iter().map(|(_, &v)| v).sum::<usize>())
        });
    }

    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");

    for &size in SIZES {
        group.throughput(criterion::Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("strand_map", size), &size, |b, &size| {
            let mut map: StrandMap<usize, usize> = StrandMap::default();
            // Insert in a shuffled-ish order so the sort has work to do.
            for i in 0..size {
                map.insert((i * 7919) % size, i);
            }
            b.iter_batched(
                || map.clone(),
                |mut map| {
                    map.sort_keys();
                    map
                },
                criterion::BatchSize::LargeInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("indexmap", size), &size, |b, &size| {
            let mut map = IndexMap::default();
            for i in 0..size {
                map.insert((i * 7919) % size, i);
            }
            b.iter_batched(
                || map.clone(),
                |mut map| {
                    map.sort_keys();
                    map
                },
                criterion::BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_insertion_at_end,
    bench_lookup,
    bench_iteration,
    bench_sort
);
criterion_main!(benches);
