use avl_collections::avl_tree::AvlTree;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 100;

fn random_values() -> Vec<u32> {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    (0..NUM_OF_OPERATIONS).map(|_| rng.next_u32()).collect()
}

fn bench_btreeset_insert(c: &mut Criterion) {
    let values = random_values();
    c.bench_function("bench btreeset insert", move |b| {
        b.iter(|| {
            let mut set = BTreeSet::new();
            for value in &values {
                set.insert(*value);
            }
        })
    });
}

fn bench_btreeset_contains(c: &mut Criterion) {
    let values = random_values();
    let set = values.iter().cloned().collect::<BTreeSet<u32>>();
    c.bench_function("bench btreeset contains", move |b| {
        b.iter(|| {
            for value in &values {
                black_box(set.contains(value));
            }
        })
    });
}

fn bench_avl_tree_insert(c: &mut Criterion) {
    let values = random_values();
    c.bench_function("bench avl_tree insert", move |b| {
        b.iter(|| {
            let mut tree = AvlTree::new();
            for value in &values {
                tree.insert(*value);
            }
        })
    });
}

fn bench_avl_tree_contains(c: &mut Criterion) {
    let values = random_values();
    let mut tree = AvlTree::new();
    for value in &values {
        tree.insert(*value);
    }

    c.bench_function("bench avl_tree contains", move |b| {
        b.iter(|| {
            for value in &values {
                black_box(tree.contains(value));
            }
        })
    });
}

fn bench_avl_tree_remove(c: &mut Criterion) {
    let values = random_values();
    c.bench_function("bench avl_tree remove", move |b| {
        b.iter(|| {
            let mut tree = AvlTree::new();
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
    bench_avl_tree_insert,
    bench_avl_tree_contains,
    bench_avl_tree_remove,
);
criterion_main!(benches);
