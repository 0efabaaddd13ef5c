use avl_collections::avl_tree::AvlTree;
use rand::{Rng, SeedableRng, XorShiftRng};
use std::collections::BTreeSet;

// upper bound on the height of an avl tree holding `len` values
fn max_height(len: usize) -> usize {
    (1.44 * ((len + 2) as f64).log2()).ceil() as usize
}

fn assert_matches(tree: &AvlTree<u32>, expected: &BTreeSet<u32>) {
    assert!(tree.check().is_ok());
    assert!(tree.is_balanced());
    assert_eq!(tree.len(), expected.len());
    assert!(tree.height() <= max_height(tree.len()));
    assert_eq!(tree.inorder(), expected.iter().collect::<Vec<&u32>>());
}

#[test]
fn int_test_ascending_inserts() {
    let mut tree = AvlTree::new();
    let mut expected = BTreeSet::new();
    for value in 0..1024 {
        tree.insert(value);
        expected.insert(value);
    }

    assert_matches(&tree, &expected);
    assert_eq!(tree.height(), 11);
}

#[test]
fn int_test_descending_removes() {
    let mut tree = AvlTree::new();
    let mut expected = BTreeSet::new();
    for value in 0..512 {
        tree.insert(value);
        expected.insert(value);
    }

    for value in (0..512).rev().step_by(3) {
        assert_eq!(tree.remove(&value), Some(value));
        expected.remove(&value);
        assert!(tree.check().is_ok());
    }

    assert_matches(&tree, &expected);
}

#[test]
fn int_test_random_operations() {
    let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
    let mut tree = AvlTree::new();
    let mut expected = BTreeSet::new();

    for _ in 0..20000 {
        let value = rng.gen_range(0, 2000);

        if rng.gen::<bool>() {
            assert_eq!(tree.insert(value), expected.insert(value));
        } else {
            assert_eq!(tree.remove(&value).is_some(), expected.remove(&value));
        }

        assert_eq!(tree.contains(&value), expected.contains(&value));
        assert!(tree.is_balanced());
    }

    assert_matches(&tree, &expected);
    assert_eq!(tree.min(), expected.iter().next());
    assert_eq!(tree.max(), expected.iter().next_back());
}

#[test]
fn int_test_insert_idempotent() {
    let mut rng: XorShiftRng = SeedableRng::from_seed([2, 3, 5, 7]);
    let values = (0..500).map(|_| rng.gen_range(0, 1000)).collect::<Vec<u32>>();

    let mut once = AvlTree::new();
    let mut twice = AvlTree::new();
    for value in &values {
        once.insert(*value);
        twice.insert(*value);
        twice.insert(*value);
    }

    assert_eq!(once, twice);
    assert_eq!(once.height(), twice.height());
    assert_eq!(once.root(), twice.root());
}

#[test]
fn int_test_insert_remove_round_trip() {
    let mut rng: XorShiftRng = SeedableRng::from_seed([4, 4, 4, 4]);
    let mut tree = AvlTree::new();
    for _ in 0..300 {
        tree.insert(rng.gen_range(0, 1000) * 2);
    }

    let before = tree.inorder().into_iter().cloned().collect::<Vec<u32>>();
    for _ in 0..100 {
        let value = rng.gen_range(0, 1000) * 2 + 1;
        tree.insert(value);
        assert!(tree.contains(&value));
        assert_eq!(tree.remove(&value), Some(value));
        assert!(!tree.contains(&value));
        assert!(tree.check().is_ok());
    }

    assert_eq!(tree.inorder().into_iter().cloned().collect::<Vec<u32>>(), before);
}

#[test]
fn int_test_remove_everything() {
    let mut rng: XorShiftRng = SeedableRng::from_seed([9, 8, 7, 6]);
    let mut tree = AvlTree::new();
    let mut values = Vec::new();
    for _ in 0..1000 {
        let value = rng.next_u32();
        if tree.insert(value) {
            values.push(value);
        }
    }

    rng.shuffle(&mut values);
    for value in &values {
        assert_eq!(tree.remove(value), Some(*value));
    }

    assert!(tree.is_empty());
    assert_eq!(tree.height(), 0);
    assert!(tree.inorder().is_empty());
    assert_eq!(tree.remove(&0), None);
}
