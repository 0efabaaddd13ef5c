use crate::avl_tree::node::Node;
use crate::error::{Error, Result};
use std::cmp::{self, Ordering};
use std::mem;
use tracing::trace;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn height<T>(tree: &Tree<T>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.height,
    }
}

pub fn balance_factor<T>(tree: &Tree<T>) -> i32 {
    match tree {
        None => 0,
        Some(ref node) => node.balance(),
    }
}

// a node without a right child is returned as is
fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => return node,
    };
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

// a node without a left child is returned as is
fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => return node,
    };
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

/// Refreshes the height of the root of `tree` and performs at most one single or double rotation
/// so that its balance factor is back within `[-1, 1]`. Both subtrees must already be balanced.
fn rebalance<T>(tree: &mut Tree<T>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    let balance = node.balance();
    if balance < -1 {
        if balance_factor(&node.left) > 0 {
            trace!(height = node.height, "rotating left-right");
            node.left = node.left.take().map(rotate_left);
        } else {
            trace!(height = node.height, "rotating left-left");
        }
        node = rotate_right(node);
    } else if balance > 1 {
        if balance_factor(&node.right) < 0 {
            trace!(height = node.height, "rotating right-left");
            node.right = node.right.take().map(rotate_right);
        } else {
            trace!(height = node.height, "rotating right-right");
        }
        node = rotate_left(node);
    }

    *tree = Some(node);
}

// detaches the leftmost node of `tree`, rebalancing every node on the way back up
fn remove_min<T>(tree: &mut Tree<T>) -> Option<T> {
    let mut node = tree.take()?;
    if node.left.is_some() {
        let ret = remove_min(&mut node.left);
        *tree = Some(node);
        rebalance(tree);
        ret
    } else {
        *tree = node.right.take();
        let Node { value, .. } = *node;
        Some(value)
    }
}

/// Inserts `value` into `tree`, returning `false` and leaving the tree untouched if an equal value
/// is already present.
pub fn insert<T>(tree: &mut Tree<T>, value: T) -> bool
where
    T: Ord,
{
    let inserted = match tree {
        Some(ref mut node) => {
            match value.cmp(&node.value) {
                Ordering::Less => insert(&mut node.left, value),
                Ordering::Greater => insert(&mut node.right, value),
                Ordering::Equal => return false,
            }
        },
        None => {
            *tree = Some(Box::new(Node::new(value)));
            return true;
        },
    };

    if inserted {
        rebalance(tree);
    }
    inserted
}

/// Removes `value` from `tree`, returning the stored value if it was present.
///
/// A node with at most one child is replaced by that child. A node with two children takes the
/// value of its in-order successor, which is detached from the right subtree instead.
pub fn remove<T>(tree: &mut Tree<T>, value: &T) -> Option<T>
where
    T: Ord,
{
    let mut node = tree.take()?;
    let ret = match value.cmp(&node.value) {
        Ordering::Less => remove(&mut node.left, value),
        Ordering::Greater => remove(&mut node.right, value),
        Ordering::Equal => {
            match (node.left.take(), node.right.take()) {
                (None, child) | (child, None) => {
                    *tree = child;
                    let Node { value, .. } = *node;
                    return Some(value);
                },
                (left, right) => {
                    node.left = left;
                    node.right = right;
                    remove_min(&mut node.right)
                        .map(|successor| mem::replace(&mut node.value, successor))
                },
            }
        },
    };

    *tree = Some(node);
    if ret.is_some() {
        rebalance(tree);
    }
    ret
}

pub fn contains<T>(tree: &Tree<T>, value: &T) -> bool
where
    T: Ord,
{
    let mut curr = tree;
    while let Some(ref node) = curr {
        curr = match value.cmp(&node.value) {
            Ordering::Less => &node.left,
            Ordering::Greater => &node.right,
            Ordering::Equal => return true,
        };
    }
    false
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.value
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.value
    })
}

pub fn visit_inorder<'a, T, F>(tree: &'a Tree<T>, f: &mut F)
where
    F: FnMut(&'a T),
{
    if let Some(ref node) = tree {
        visit_inorder(&node.left, f);
        f(&node.value);
        visit_inorder(&node.right, f);
    }
}

/// Returns `true` if every node has subtrees whose heights differ by at most one. Heights are
/// recomputed rather than read from the cache.
pub fn is_balanced<T>(tree: &Tree<T>) -> bool {
    fn balanced_height<T>(tree: &Tree<T>) -> Option<usize> {
        match tree {
            None => Some(0),
            Some(ref node) => {
                let left = balanced_height(&node.left)?;
                let right = balanced_height(&node.right)?;
                if (right as i64 - left as i64).abs() > 1 {
                    None
                } else {
                    Some(cmp::max(left, right) + 1)
                }
            },
        }
    }

    balanced_height(tree).is_some()
}

/// Validates ordering, uniqueness, cached heights, and balance of every node, returning the
/// height of the tree.
pub fn check<T>(tree: &Tree<T>) -> Result<usize>
where
    T: Ord,
{
    fn check_node<'a, T>(tree: &'a Tree<T>, prev: &mut Option<&'a T>) -> Result<usize>
    where
        T: Ord,
    {
        let node = match tree {
            None => return Ok(0),
            Some(ref node) => node,
        };

        let left = check_node(&node.left, prev)?;
        if let Some(prev_value) = *prev {
            if *prev_value >= node.value {
                return Err(Error::Unordered);
            }
        }
        *prev = Some(&node.value);
        let right = check_node(&node.right, prev)?;

        let actual = cmp::max(left, right) + 1;
        if node.height != actual {
            return Err(Error::StaleHeight { cached: node.height, actual });
        }

        let balance = right as i32 - left as i32;
        if balance.abs() > 1 {
            return Err(Error::Unbalanced { balance });
        }

        Ok(actual)
    }

    check_node(tree, &mut None)
}
