use crate::arena::{Arena, NodeId};
use crate::splay_tree::node::Node;
use crate::splay_tree::{Error, Result};
use std::cmp::{self, Ordering};

pub type Nodes<T> = Arena<Node<T>>;
pub type Tree = Option<NodeId>;

fn link_left<T>(nodes: &mut Nodes<T>, parent: NodeId, child: Tree) {
    nodes[parent].left = child;
    if let Some(child) = child {
        nodes[child].parent = Some(parent);
    }
}

fn link_right<T>(nodes: &mut Nodes<T>, parent: NodeId, child: Tree) {
    nodes[parent].right = child;
    if let Some(child) = child {
        nodes[child].parent = Some(parent);
    }
}

fn expected_depth<T>(nodes: &Nodes<T>, id: NodeId) -> usize {
    nodes[id].parent.map_or(0, |parent| nodes[parent].depth.get() + 1)
}

fn subtree_height<T>(nodes: &Nodes<T>, tree: Tree) -> usize {
    tree.map_or(0, |id| nodes[id].height.get())
}

// Only the cached depths of the two pivots are touched; everything below them is fixed up by the
// next `compute_depth` pass.
fn touch<T>(nodes: &Nodes<T>, id: NodeId) {
    nodes[id].depth.set(expected_depth(nodes, id));
}

/// Rotates `x` with its left child and returns the child, which now roots the subtree. The parent
/// of `x` keeps pointing at `x`; the caller is responsible for relinking it.
///
/// # Panics
///
/// Panics if `x` has no left child.
pub fn rotate_right<T>(nodes: &mut Nodes<T>, x: NodeId) -> NodeId {
    let y = nodes[x].left.expect("Expected left child node to be `Some`.");
    trace!("rotate right: node {} over node {}", y.index(), x.index());
    let inner = nodes[y].right;
    link_left(nodes, x, inner);
    nodes[y].parent = nodes[x].parent;
    nodes[y].right = Some(x);
    nodes[x].parent = Some(y);
    touch(nodes, y);
    touch(nodes, x);
    y
}

/// Rotates `x` with its right child and returns the child, which now roots the subtree. The
/// parent of `x` keeps pointing at `x`; the caller is responsible for relinking it.
///
/// # Panics
///
/// Panics if `x` has no right child.
pub fn rotate_left<T>(nodes: &mut Nodes<T>, x: NodeId) -> NodeId {
    let y = nodes[x].right.expect("Expected right child node to be `Some`.");
    trace!("rotate left: node {} over node {}", y.index(), x.index());
    let inner = nodes[y].left;
    link_right(nodes, x, inner);
    nodes[y].parent = nodes[x].parent;
    nodes[y].left = Some(x);
    nodes[x].parent = Some(y);
    touch(nodes, y);
    touch(nodes, x);
    y
}

fn splay_subtree<T: Ord>(nodes: &mut Nodes<T>, tree: Tree, value: &T) -> Tree {
    match tree {
        Some(id) => Some(splay(nodes, id, value)),
        None => None,
    }
}

/// Moves the node holding `value` to the top of the subtree rooted at `id` and returns the new
/// subtree root. If `value` is absent, the last node on the search path is moved up instead.
///
/// The returned node inherits the parent of `id`, but the parent's child link is left for the
/// caller to reassign.
pub fn splay<T: Ord>(nodes: &mut Nodes<T>, id: NodeId, value: &T) -> NodeId {
    match value.cmp(&nodes[id].value) {
        Ordering::Equal => id,
        Ordering::Less => {
            let child = match nodes[id].left {
                Some(child) => child,
                None => return id,
            };
            let mut id = id;
            match value.cmp(&nodes[child].value) {
                // zig-zig
                Ordering::Less => {
                    let grandchild = nodes[child].left;
                    let grandchild = splay_subtree(nodes, grandchild, value);
                    link_left(nodes, child, grandchild);
                    id = rotate_right(nodes, id);
                },
                // zig-zag
                Ordering::Greater => {
                    let grandchild = nodes[child].right;
                    let grandchild = splay_subtree(nodes, grandchild, value);
                    link_right(nodes, child, grandchild);
                    if grandchild.is_some() {
                        let child = rotate_left(nodes, child);
                        link_left(nodes, id, Some(child));
                    }
                },
                Ordering::Equal => {},
            }
            match nodes[id].left {
                Some(_) => rotate_right(nodes, id),
                None => id,
            }
        },
        Ordering::Greater => {
            let child = match nodes[id].right {
                Some(child) => child,
                None => return id,
            };
            let mut id = id;
            match value.cmp(&nodes[child].value) {
                // zag-zag
                Ordering::Greater => {
                    let grandchild = nodes[child].right;
                    let grandchild = splay_subtree(nodes, grandchild, value);
                    link_right(nodes, child, grandchild);
                    id = rotate_left(nodes, id);
                },
                // zag-zig
                Ordering::Less => {
                    let grandchild = nodes[child].left;
                    let grandchild = splay_subtree(nodes, grandchild, value);
                    link_left(nodes, child, grandchild);
                    if grandchild.is_some() {
                        let child = rotate_right(nodes, child);
                        link_right(nodes, id, Some(child));
                    }
                },
                Ordering::Equal => {},
            }
            match nodes[id].right {
                Some(_) => rotate_left(nodes, id),
                None => id,
            }
        },
    }
}

/// Splays the tree towards `value` and returns `true` if the new root holds `value`.
pub fn search<T: Ord>(nodes: &mut Nodes<T>, tree: &mut Tree, value: &T) -> bool {
    *tree = splay_subtree(nodes, *tree, value);
    let found = match *tree {
        Some(root) => nodes[root].value == *value,
        None => false,
    };
    debug!("search {}", if found { "hit" } else { "miss" });
    found
}

/// Inserts `value` and makes it the root. Returns `false` without allocating if the value was
/// already present, in which case the existing node is splayed to the root instead.
pub fn insert<T: Ord>(nodes: &mut Nodes<T>, tree: &mut Tree, value: T) -> bool {
    let root = match *tree {
        Some(root) => splay(nodes, root, &value),
        None => {
            let id = nodes.allocate(Node::new(value));
            debug!("insert: node {} is the first node", id.index());
            *tree = Some(id);
            return true;
        },
    };
    *tree = Some(root);

    let ordering = value.cmp(&nodes[root].value);
    let new_root = match ordering {
        Ordering::Equal => {
            debug!("insert: value already stored at node {}", root.index());
            return false;
        },
        Ordering::Less => {
            let left = nodes[root].left.take();
            let id = nodes.allocate(Node::new(value));
            link_left(nodes, id, left);
            link_right(nodes, id, Some(root));
            id
        },
        Ordering::Greater => {
            let right = nodes[root].right.take();
            let id = nodes.allocate(Node::new(value));
            link_right(nodes, id, right);
            link_left(nodes, id, Some(root));
            id
        },
    };
    touch(nodes, new_root);
    touch(nodes, root);
    debug!("insert: node {} split at node {}", new_root.index(), root.index());
    *tree = Some(new_root);
    true
}

/// Removes `value` from the tree and returns it. A missing value leaves the tree splayed towards
/// it and returns `None`.
pub fn remove<T: Ord>(nodes: &mut Nodes<T>, tree: &mut Tree, value: &T) -> Option<T> {
    let root = splay(nodes, (*tree)?, value);
    *tree = Some(root);
    if nodes[root].value != *value {
        debug!("remove: value not found, root is node {}", root.index());
        return None;
    }

    let Node {
        value: removed,
        left,
        right,
        ..
    } = nodes.free(root);
    let new_root = match left {
        // The removed value is larger than everything on the left, so this surfaces the maximum.
        Some(left) => {
            // Rotations read the parent's depth, and the old root's slot is vacant now.
            nodes[left].parent = None;
            let top = splay(nodes, left, &removed);
            link_right(nodes, top, right);
            Some(top)
        },
        None => right,
    };
    if let Some(new_root) = new_root {
        nodes[new_root].parent = None;
        touch(nodes, new_root);
    }
    debug!("remove: freed node {}", root.index());
    *tree = new_root;
    Some(removed)
}

/// Non-splaying lookup.
pub fn contains<T: Ord>(nodes: &Nodes<T>, tree: Tree, value: &T) -> bool {
    let mut current = tree;
    while let Some(id) = current {
        current = match value.cmp(&nodes[id].value) {
            Ordering::Less => nodes[id].left,
            Ordering::Greater => nodes[id].right,
            Ordering::Equal => return true,
        };
    }
    false
}

/// Recomputes the cached depth of `id` and of every node below it, and the cached subtree
/// heights along the way. The depth of `id` is derived from its parent's cached depth, so calling
/// this on the root refreshes the whole tree. Returns the depth of `id`.
pub fn compute_depth<T>(nodes: &Nodes<T>, id: NodeId) -> usize {
    let mut order = Vec::new();
    let mut stack = vec![id];
    while let Some(current) = stack.pop() {
        touch(nodes, current);
        order.push(current);
        let node = &nodes[current];
        stack.extend(node.right);
        stack.extend(node.left);
    }
    for &current in order.iter().rev() {
        let node = &nodes[current];
        let height = cmp::max(
            subtree_height(nodes, node.left),
            subtree_height(nodes, node.right),
        );
        node.height.set(height + 1);
    }
    nodes[id].depth.get()
}

pub fn balance_factor<T>(nodes: &Nodes<T>, id: NodeId) -> isize {
    let node = &nodes[id];
    subtree_height(nodes, node.left) as isize - subtree_height(nodes, node.right) as isize
}

/// Walks the tree in order and verifies ordering, link consistency, and cached depths.
pub fn check<T: Ord>(nodes: &Nodes<T>, tree: Tree) -> Result<()> {
    if let Some(root) = tree {
        if nodes[root].parent.is_some() {
            return Err(Error::RootHasParent { node: root.index() });
        }
    }

    let mut count = 0;
    let mut prev: Option<&T> = None;
    let mut stack = Vec::new();
    let mut current = tree;
    loop {
        while let Some(id) = current {
            stack.push(id);
            current = nodes[id].left;
        }
        let id = match stack.pop() {
            Some(id) => id,
            None => break,
        };
        let node = &nodes[id];

        for &child in node.left.iter().chain(node.right.iter()) {
            if nodes[child].parent != Some(id) {
                return Err(Error::ParentMismatch { node: child.index() });
            }
        }
        if let Some(prev) = prev {
            if *prev >= node.value {
                return Err(Error::OrderViolation { node: id.index() });
            }
        }
        let actual = expected_depth(nodes, id);
        if node.depth.get() != actual {
            return Err(Error::StaleDepth {
                node: id.index(),
                cached: node.depth.get(),
                actual,
            });
        }

        prev = Some(&node.value);
        count += 1;
        current = node.right;
    }

    if count != nodes.len() {
        return Err(Error::LengthMismatch {
            expected: nodes.len(),
            actual: count,
        });
    }
    Ok(())
}
