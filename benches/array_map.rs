use criterion::{Criterion, black_box, criterion_group, criterion_main};

use array_collections::ArrayMap;
use hashbrown::HashMap;
use std::collections::BTreeMap;

fn bench_array_map(c: &mut Criterion) {
    let n = 64;
    {
        let mut group = c.benchmark_group("BTreeMap vs ArrayMap (Insert 64)");
        group.bench_function("std::collections::BTreeMap", |b| {
            b.iter(|| {
                let mut m = BTreeMap::new();
                for i in 0..n {
                    m.insert(black_box(i as i32), black_box(i as i32));
                }
                m
            })
        });

        group.bench_function("hashbrown::HashMap", |b| {
            b.iter(|| {
                let mut m = HashMap::new();
                for i in 0..n {
                    m.insert(black_box(i as i32), black_box(i as i32));
                }
                m
            })
        });

        group.bench_function("ArrayMap<i32, i32>", |b| {
            b.iter(|| {
                let mut m: ArrayMap<i32, i32> = ArrayMap::new();
                for i in 0..n {
                    m.insert(black_box(i as i32), black_box(i as i32));
                }
                m
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("BTreeMap vs ArrayMap (Get 64)");
        let mut m_btree = BTreeMap::new();
        let mut m_hash = HashMap::new();
        let mut m_array: ArrayMap<i32, i32> = ArrayMap::new();
        for i in 0..n {
            m_btree.insert(i as i32, i as i32);
            m_hash.insert(i as i32, i as i32);
            m_array.insert(i as i32, i as i32);
        }

        group.bench_function("std::collections::BTreeMap", |b| {
            b.iter(|| {
                for i in 0..n {
                    black_box(m_btree.get(&black_box(i as i32)));
                }
            })
        });

        group.bench_function("hashbrown::HashMap", |b| {
            b.iter(|| {
                for i in 0..n {
                    black_box(m_hash.get(&black_box(i as i32)));
                }
            })
        });

        group.bench_function("ArrayMap<i32, i32>", |b| {
            b.iter(|| {
                for i in 0..n {
                    black_box(m_array.get_or(black_box(i as i32), 0));
                }
            })
        });
        group.finish();
    }
}

fn bench_append_fast_path(c: &mut Criterion) {
    let n = 64;
    let mut group = c.benchmark_group("ArrayMap ascending keys (64)");

    group.bench_function("insert", |b| {
        b.iter(|| {
            let mut m: ArrayMap<i32, i32> = ArrayMap::new();
            for i in 0..n {
                m.insert(black_box(i as i32), black_box(i as i32));
            }
            m
        })
    });

    group.bench_function("append", |b| {
        b.iter(|| {
            let mut m: ArrayMap<i32, i32> = ArrayMap::new();
            for i in 0..n {
                m.append(black_box(i as i32), black_box(i as i32));
            }
            m
        })
    });
    group.finish();
}

criterion_group!(benches, bench_array_map, bench_append_fast_path);
criterion_main!(benches);
