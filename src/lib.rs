//! A self-balancing binary search tree of unique ordered values.
//!
//! The tree keeps the heights of the two child subtrees of every node within one of each other,
//! so insertion, removal, and lookup all run in logarithmic time.
//!
//! # Examples
//! ```
//! use avl_collections::avl_tree::AvlTree;
//!
//! let mut tree = AvlTree::new();
//! for value in &[10, 20, 30, 40, 50, 25] {
//!     tree.insert(*value);
//! }
//!
//! assert_eq!(tree.inorder(), vec![&10, &20, &25, &30, &40, &50]);
//! assert_eq!(tree.root(), Some(&30));
//! assert_eq!(tree.height(), 3);
//! ```

mod error;
pub mod avl_tree;

pub use crate::error::{Error, Result};
