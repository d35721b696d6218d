use crate::arena::NodeId;
use std::cell::Cell;

/// A struct representing an internal node of a splay tree.
///
/// `depth` and `height` are caches that the tree recomputes on demand; they are only guaranteed
/// to be accurate after `tree::compute_depth` has run from the root.
pub struct Node<T> {
    pub value: T,
    pub depth: Cell<usize>,
    pub height: Cell<usize>,
    pub parent: Option<NodeId>,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}

impl<T> Node<T> {
    pub fn new(value: T) -> Self {
        Node {
            value,
            depth: Cell::new(0),
            height: Cell::new(1),
            parent: None,
            left: None,
            right: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}
