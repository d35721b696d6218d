use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use splay::SplayTree;
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 1_000;

fn values() -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(1);
    (0..NUM_OF_OPERATIONS).map(|_| rng.gen::<u32>()).collect()
}

fn bench_btreeset_insert(c: &mut Criterion) {
    let values = values();
    c.bench_function("bench btreeset insert", |b| {
        b.iter(|| {
            let mut set = BTreeSet::new();
            for value in &values {
                set.insert(*value);
            }
        })
    });
}

fn bench_btreeset_contains(c: &mut Criterion) {
    let values = values();
    let set: BTreeSet<u32> = values.iter().cloned().collect();
    c.bench_function("bench btreeset contains", |b| {
        b.iter(|| {
            for value in &values {
                black_box(set.contains(value));
            }
        })
    });
}

fn bench_splay_tree_insert(c: &mut Criterion) {
    let values = values();
    c.bench_function("bench splay_tree insert", |b| {
        b.iter(|| {
            let mut tree = SplayTree::with_capacity(NUM_OF_OPERATIONS);
            for value in &values {
                tree.insert(*value);
            }
        })
    });
}

fn bench_splay_tree_search(c: &mut Criterion) {
    let values = values();
    let mut tree = SplayTree::new();
    for value in &values {
        tree.insert(*value);
    }
    c.bench_function("bench splay_tree search", move |b| {
        b.iter(|| {
            for value in &values {
                black_box(tree.search(value));
            }
        })
    });
}

fn bench_splay_tree_search_hot(c: &mut Criterion) {
    let values = values();
    let mut tree = SplayTree::new();
    for value in &values {
        tree.insert(*value);
    }
    let hot = &values[..10];
    c.bench_function("bench splay_tree search hot", |b| {
        b.iter(|| {
            for value in hot {
                black_box(tree.search(value));
            }
        })
    });
}

fn bench_splay_tree_remove(c: &mut Criterion) {
    let values = values();
    c.bench_function("bench splay_tree remove", |b| {
        b.iter(|| {
            let mut tree = SplayTree::with_capacity(NUM_OF_OPERATIONS);
            for value in &values {
                tree.insert(*value);
            }
            for value in &values {
                black_box(tree.remove(value));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_btreeset_insert,
    bench_btreeset_contains,
    bench_splay_tree_insert,
    bench_splay_tree_search,
    bench_splay_tree_search_hot,
    bench_splay_tree_remove,
);
criterion_main!(benches);
