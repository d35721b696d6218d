use crate::arena::Arena;
use crate::splay_tree::dump::{Dump, NodeRef};
use crate::splay_tree::tree::{self, Nodes};
use crate::splay_tree::Result;
use std::cell::Cell;
use std::ptr;

/// An ordered set of unique values implemented using a splay tree.
///
/// A splay tree is a self-adjusting binary search tree with the additional property that recently
/// accessed values are quick to access again. Every `insert`, `remove`, and `search` "splays" the
/// touched value (or the last node on its search path) to the root, which gives amortized
/// logarithmic operations without storing any balance information.
///
/// Nodes live in an arena and refer to their parent and children by index, so each node knows its
/// parent without any shared ownership.
///
/// # Examples
///
/// ```
/// use splay::SplayTree;
///
/// let mut tree = SplayTree::new();
/// tree.insert(1);
/// tree.insert(7);
/// tree.insert(8);
/// assert_eq!(tree.root().map(|node| *node.value()), Some(8));
///
/// assert!(tree.search(&1));
/// assert_eq!(tree.root().map(|node| *node.value()), Some(1));
///
/// assert_eq!(tree.remove(&7), Some(7));
/// assert_eq!(tree.remove(&7), None);
/// assert_eq!(tree.len(), 2);
///
/// for record in tree.dump() {
///     println!("{}", record);
/// }
/// ```
pub struct SplayTree<T> {
    nodes: Nodes<T>,
    root: tree::Tree,
    stale: Cell<bool>,
}

impl<T> SplayTree<T> {
    /// Constructs a new, empty `SplayTree<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay::SplayTree;
    ///
    /// let tree: SplayTree<u32> = SplayTree::new();
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Constructs a new, empty `SplayTree<T>` that can hold `capacity` values before its node
    /// storage reallocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay::SplayTree;
    ///
    /// let tree: SplayTree<u32> = SplayTree::with_capacity(1024);
    /// assert!(tree.is_empty());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        SplayTree {
            nodes: Arena::with_capacity(capacity),
            root: None,
            stale: Cell::new(false),
        }
    }

    fn refresh(&self) {
        if self.stale.replace(false) {
            if let Some(root) = self.root {
                tree::compute_depth(&self.nodes, root);
            }
        }
    }

    /// Returns a handle to the root node, or `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// assert!(tree.root().is_none());
    /// tree.insert(1);
    /// let root = tree.root().unwrap();
    /// assert_eq!(*root.value(), 1);
    /// assert_eq!(root.depth(), 0);
    /// ```
    pub fn root(&self) -> Option<NodeRef<'_, T>> {
        self.refresh();
        self.root.map(|id| NodeRef {
            nodes: &self.nodes,
            id,
        })
    }

    /// Returns a pre-order iterator that describes every node of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// let lines: Vec<String> = tree.dump().map(|record| record.to_string()).collect();
    /// assert_eq!(
    ///     lines,
    ///     vec![
    ///         "2 (parent: NULL, L: 1 R: NULL) lvl: 0, BF: 1",
    ///         "1 (parent: 2, L: NULL R: NULL) lvl: 1, BF: 0",
    ///     ],
    /// );
    /// ```
    pub fn dump(&self) -> Dump<'_, T> {
        self.refresh();
        Dump::new(&self.nodes, self.root)
    }

    /// Recomputes and returns the depth of `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` was obtained from a different tree.
    pub fn compute_depth(&self, node: NodeRef<'_, T>) -> usize {
        assert!(
            ptr::eq(node.nodes, &self.nodes),
            "Error: node handle belongs to another tree.",
        );
        self.refresh();
        tree::compute_depth(&self.nodes, node.id)
    }

    /// Returns the number of values in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every value from the tree.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.stale.set(false);
    }
}

impl<T> SplayTree<T>
where
    T: Ord,
{
    /// Inserts a value into the tree and splays it to the root. Returns `false` if the value was
    /// already present, in which case the tree is still splayed towards it.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// assert!(tree.insert(1));
    /// assert!(tree.insert(2));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.root().map(|node| *node.value()), Some(1));
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        self.stale.set(true);
        tree::insert(&mut self.nodes, &mut self.root, value)
    }

    /// Removes a value from the tree and returns it, or returns `None` if it does not exist. The
    /// tree is splayed towards `value` either way.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1);
    /// assert_eq!(tree.remove(&1), Some(1));
    /// assert_eq!(tree.remove(&1), None);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T> {
        self.stale.set(true);
        tree::remove(&mut self.nodes, &mut self.root, value)
    }

    /// Splays the tree towards `value` and returns `true` if it is now at the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1);
    /// tree.insert(2);
    /// assert!(tree.search(&1));
    /// assert!(!tree.search(&3));
    /// assert_eq!(tree.root().map(|node| *node.value()), Some(2));
    /// ```
    pub fn search(&mut self, value: &T) -> bool {
        self.stale.set(true);
        tree::search(&mut self.nodes, &mut self.root, value)
    }

    /// Checks if a value exists in the tree. Note that `contains` does not splay the tree in order
    /// to use a non-mutable reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1);
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&0));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        tree::contains(&self.nodes, self.root, value)
    }

    /// Verifies the ordering, parent links, and depths of every node.
    pub fn check_invariants(&self) -> Result<()> {
        self.refresh();
        tree::check(&self.nodes, self.root)
    }
}

impl<T> Default for SplayTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::SplayTree;

    fn root_value(tree: &SplayTree<u32>) -> Option<u32> {
        tree.root().map(|node| *node.value())
    }

    #[test]
    fn test_len_empty() {
        let tree: SplayTree<u32> = SplayTree::new();
        assert_eq!(tree.len(), 0);
        assert!(tree.is_empty());
        assert!(tree.root().is_none());
    }

    #[test]
    fn test_insert() {
        let mut tree = SplayTree::new();
        assert!(tree.insert(1));
        assert!(tree.contains(&1));
        assert_eq!(root_value(&tree), Some(1));
        assert!(tree.check_invariants().is_ok());
    }

    #[test]
    fn test_insert_duplicate_splays() {
        let mut tree = SplayTree::new();
        tree.insert(1);
        tree.insert(2);
        tree.insert(3);
        assert!(!tree.insert(2));
        assert_eq!(tree.len(), 3);
        assert_eq!(root_value(&tree), Some(2));
        assert!(tree.check_invariants().is_ok());
    }

    #[test]
    fn test_remove() {
        let mut tree = SplayTree::new();
        tree.insert(1);
        tree.insert(2);
        assert_eq!(tree.remove(&1), Some(1));
        assert!(!tree.contains(&1));
        assert_eq!(tree.len(), 1);
        assert!(tree.check_invariants().is_ok());
    }

    #[test]
    fn test_remove_empty() {
        let mut tree: SplayTree<u32> = SplayTree::new();
        assert_eq!(tree.remove(&1), None);
        assert!(tree.root().is_none());
    }

    #[test]
    fn test_search_empty() {
        let mut tree: SplayTree<u32> = SplayTree::new();
        assert!(!tree.search(&1));
    }

    #[test]
    fn test_depths_refresh_after_mutation() {
        let mut tree = SplayTree::new();
        for value in 1..=5 {
            tree.insert(value);
        }
        // 5 -> 4 -> 3 -> 2 -> 1 down the left spine.
        let mut node = tree.root();
        let mut depth = 0;
        while let Some(current) = node {
            assert_eq!(current.depth(), depth);
            node = current.left();
            depth += 1;
        }
        assert_eq!(depth, 5);

        tree.search(&1);
        let root = tree.root().unwrap();
        assert_eq!(root.depth(), 0);
        assert!(tree.check_invariants().is_ok());
    }

    #[test]
    fn test_compute_depth() {
        let mut tree = SplayTree::new();
        tree.insert(1);
        tree.insert(2);
        let root = tree.root().unwrap();
        let child = root.left().unwrap();
        assert_eq!(tree.compute_depth(root), 0);
        assert_eq!(tree.compute_depth(child), 1);
    }

    #[test]
    #[should_panic]
    fn test_compute_depth_foreign_node() {
        let mut tree = SplayTree::new();
        let mut other = SplayTree::new();
        tree.insert(1);
        other.insert(1);
        tree.compute_depth(other.root().unwrap());
    }

    #[test]
    fn test_clear() {
        let mut tree = SplayTree::new();
        tree.insert(1);
        tree.insert(2);
        tree.clear();
        assert!(tree.is_empty());
        assert!(tree.root().is_none());
        assert!(tree.insert(3));
        assert!(tree.check_invariants().is_ok());
    }
}
