use crate::avl_tree::tree;
use crate::error::Result;
use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::fmt;
use std::io::Write;
use std::marker::PhantomData;

/// An ordered set of unique values implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one. Every insertion and removal
/// rebalances the nodes on its search path as the recursion unwinds, so the height of the tree
/// stays logarithmic in the number of values.
///
/// # Examples
/// ```
/// use avl_collections::avl_tree::AvlTree;
///
/// let mut tree = AvlTree::new();
/// tree.insert(0);
/// tree.insert(3);
///
/// assert_eq!(tree.len(), 2);
/// assert_eq!(tree.min(), Some(&0));
///
/// assert_eq!(tree.remove(&0), Some(0));
/// assert_eq!(tree.remove(&1), None);
/// ```
pub struct AvlTree<T> {
    root: tree::Tree<T>,
    len: usize,
}

impl<T> AvlTree<T>
where
    T: Ord,
{
    /// Constructs a new, empty `AvlTree<T>`.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlTree;
    ///
    /// let tree: AvlTree<u32> = AvlTree::new();
    /// ```
    pub fn new() -> Self {
        AvlTree {
            root: None,
            len: 0,
        }
    }

    /// Inserts a value into the tree. Returns `false` and discards `value` if an equal value is
    /// already present.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let inserted = tree::insert(&mut self.root, value);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes a value from the tree. If the value exists in the tree, it will return the stored
    /// value. Otherwise it will return `None`.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// assert_eq!(tree.remove(&1), Some(1));
    /// assert_eq!(tree.remove(&1), None);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let ret = tree::remove(&mut self.root, value);
        if ret.is_some() {
            self.len -= 1;
        }
        ret
    }

    /// Checks if a value exists in the tree.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// assert!(!tree.contains(&0));
    /// assert!(tree.contains(&1));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        tree::contains(&self.root, value)
    }

    /// Returns the number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clears the tree, removing all values.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// tree.insert(2);
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.height(), 0);
    /// ```
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Returns the height of the tree. An empty tree has height 0 and a single value has
    /// height 1.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// for value in 0..7 {
    ///     tree.insert(value);
    /// }
    /// assert_eq!(tree.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        tree::height(&self.root)
    }

    /// Returns the value stored at the root of the tree, or `None` if the tree is empty.
    pub fn root(&self) -> Option<&T> {
        self.root.as_ref().map(|node| &node.value)
    }

    /// Returns the minimum value of the tree. Returns `None` if the tree is empty.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// tree.insert(3);
    /// assert_eq!(tree.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.root)
    }

    /// Returns the maximum value of the tree. Returns `None` if the tree is empty.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// tree.insert(3);
    /// assert_eq!(tree.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.root)
    }

    /// Returns the values of the tree in ascending order.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(3);
    /// tree.insert(1);
    /// tree.insert(2);
    /// assert_eq!(tree.inorder(), vec![&1, &2, &3]);
    /// ```
    pub fn inorder(&self) -> Vec<&T> {
        let mut ret = Vec::with_capacity(self.len);
        self.visit_inorder(|value| ret.push(value));
        ret
    }

    /// Calls `f` on every value of the tree in ascending order.
    pub fn visit_inorder<'a, F>(&'a self, mut f: F)
    where
        F: FnMut(&'a T),
    {
        tree::visit_inorder(&self.root, &mut f);
    }

    /// Writes the values of the tree in ascending order separated by single spaces.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    ///
    /// let mut out = Vec::new();
    /// tree.write_inorder(&mut out).unwrap();
    /// assert_eq!(out, b"1 2");
    /// ```
    pub fn write_inorder<W>(&self, mut writer: W) -> Result<()>
    where
        W: Write,
        T: fmt::Display,
    {
        for (index, value) in self.inorder().into_iter().enumerate() {
            if index > 0 {
                write!(writer, " ")?;
            }
            write!(writer, "{}", value)?;
        }
        Ok(())
    }

    /// Returns `true` if the heights of the two subtrees of every node differ by at most one.
    pub fn is_balanced(&self) -> bool {
        tree::is_balanced(&self.root)
    }

    /// Validates every structural invariant of the tree: values are strictly ascending in-order,
    /// cached heights are exact, and every node is balanced.
    pub fn check(&self) -> Result<()> {
        tree::check(&self.root).map(|_| ())
    }
}

impl<T> Default for AvlTree<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for AvlTree<T>
where
    T: Ord + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.inorder()).finish()
    }
}

impl<T> PartialEq for AvlTree<T>
where
    T: Ord,
{
    fn eq(&self, other: &AvlTree<T>) -> bool {
        self.len == other.len && self.inorder() == other.inorder()
    }
}

impl<T> Eq for AvlTree<T> where T: Ord {}

impl<T> Serialize for AvlTree<T>
where
    T: Ord + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len))?;
        for value in self.inorder() {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

struct AvlTreeVisitor<T> {
    marker: PhantomData<T>,
}

impl<'de, T> Visitor<'de> for AvlTreeVisitor<T>
where
    T: Ord + Deserialize<'de>,
{
    type Value = AvlTree<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of values")
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut tree = AvlTree::new();
        while let Some(value) = seq.next_element()? {
            tree.insert(value);
        }
        Ok(tree)
    }
}

impl<'de, T> Deserialize<'de> for AvlTree<T>
where
    T: Ord + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(AvlTreeVisitor {
            marker: PhantomData,
        })
    }
}
