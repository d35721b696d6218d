use crate::arena::NodeId;
use crate::splay_tree::tree::{self, Nodes};
use std::fmt;

/// A read-only handle to a node of a `SplayTree<T>`.
///
/// Handles borrow the tree immutably, so the structure cannot change while one is alive and the
/// depths it reports are always current.
pub struct NodeRef<'a, T> {
    pub(crate) nodes: &'a Nodes<T>,
    pub(crate) id: NodeId,
}

impl<'a, T> Clone for NodeRef<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for NodeRef<'a, T> {}

impl<'a, T> NodeRef<'a, T> {
    fn at(&self, id: Option<NodeId>) -> Option<NodeRef<'a, T>> {
        id.map(|id| NodeRef {
            nodes: self.nodes,
            id,
        })
    }

    /// Returns the value stored in the node.
    pub fn value(&self) -> &'a T {
        &self.nodes[self.id].value
    }

    /// Returns the distance from the root; the root has depth 0.
    pub fn depth(&self) -> usize {
        self.nodes[self.id].depth.get()
    }

    /// Returns the number of nodes on the longest downward path starting at this node.
    pub fn height(&self) -> usize {
        self.nodes[self.id].height.get()
    }

    /// Returns the height of the left subtree minus the height of the right subtree.
    pub fn balance_factor(&self) -> isize {
        tree::balance_factor(self.nodes, self.id)
    }

    pub fn parent(&self) -> Option<NodeRef<'a, T>> {
        self.at(self.nodes[self.id].parent)
    }

    pub fn left(&self) -> Option<NodeRef<'a, T>> {
        self.at(self.nodes[self.id].left)
    }

    pub fn right(&self) -> Option<NodeRef<'a, T>> {
        self.at(self.nodes[self.id].right)
    }

    pub fn is_leaf(&self) -> bool {
        self.nodes[self.id].is_leaf()
    }

    /// Summarizes this node as a `DumpRecord`.
    pub fn record(&self) -> DumpRecord<'a, T> {
        DumpRecord {
            value: self.value(),
            parent: self.parent().map(|node| node.value()),
            left: self.left().map(|node| node.value()),
            right: self.right().map(|node| node.value()),
            depth: self.depth(),
            balance_factor: self.balance_factor(),
        }
    }
}

impl<'a, T> fmt::Debug for NodeRef<'a, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("value", self.value())
            .field("depth", &self.depth())
            .finish()
    }
}

/// One line of a tree dump: a node, its neighbours, and its position.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct DumpRecord<'a, T> {
    pub value: &'a T,
    pub parent: Option<&'a T>,
    pub left: Option<&'a T>,
    pub right: Option<&'a T>,
    pub depth: usize,
    pub balance_factor: isize,
}

struct OrNull<'a, T>(Option<&'a T>);

impl<'a, T> fmt::Display for OrNull<'a, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{}", value),
            None => write!(f, "NULL"),
        }
    }
}

impl<'a, T> fmt::Display for DumpRecord<'a, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} (parent: {}, L: {} R: {}) lvl: {}, BF: {}",
            self.value,
            OrNull(self.parent),
            OrNull(self.left),
            OrNull(self.right),
            self.depth,
            self.balance_factor,
        )
    }
}

/// A pre-order iterator over the nodes of a `SplayTree<T>` that yields a `DumpRecord` per node.
pub struct Dump<'a, T> {
    nodes: &'a Nodes<T>,
    stack: Vec<NodeId>,
}

impl<'a, T> Dump<'a, T> {
    pub(crate) fn new(nodes: &'a Nodes<T>, root: Option<NodeId>) -> Self {
        Dump {
            nodes,
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for Dump<'a, T> {
    type Item = DumpRecord<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = &self.nodes[id];
        self.stack.extend(node.right);
        self.stack.extend(node.left);
        Some(
            NodeRef {
                nodes: self.nodes,
                id,
            }
            .record(),
        )
    }
}
