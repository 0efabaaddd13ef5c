use crate::avl_tree::tree;
use std::cmp;

/// A struct representing an internal node of an avl tree.
pub struct Node<T> {
    pub value: T,
    pub height: usize,
    pub left: tree::Tree<T>,
    pub right: tree::Tree<T>,
}

impl<T> Node<T> {
    pub fn new(value: T) -> Self {
        Node {
            value,
            height: 1,
            left: None,
            right: None,
        }
    }

    // must be called after any change to `left` or `right` and before `balance` is read
    pub fn update(&mut self) {
        let Node { height, left, right, .. } = self;
        *height = cmp::max(tree::height(left), tree::height(right)) + 1;
    }

    /// Positive when right-heavy, negative when left-heavy.
    pub fn balance(&self) -> i32 {
        (tree::height(&self.right) as i32) - (tree::height(&self.left) as i32)
    }
}
