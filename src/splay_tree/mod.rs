//! Self-adjusting binary search tree with the additional property that recently accessed elements
//! are quick to access again.

mod dump;
mod node;
mod set;
mod tree;

pub use self::dump::{Dump, DumpRecord, NodeRef};
pub use self::set::SplayTree;

use std::error;
use std::fmt;
use std::result;

/// A structural invariant that a tree was found to violate. Nodes are identified by their arena
/// index.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    OrderViolation { node: usize },
    ParentMismatch { node: usize },
    RootHasParent { node: usize },
    StaleDepth { node: usize, cached: usize, actual: usize },
    LengthMismatch { expected: usize, actual: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::OrderViolation { node } => {
                write!(f, "node {} is not greater than its in-order predecessor", node)
            },
            Error::ParentMismatch { node } => {
                write!(f, "node {} does not point back at the node that owns it", node)
            },
            Error::RootHasParent { node } => write!(f, "root node {} has a parent", node),
            Error::StaleDepth {
                node,
                cached,
                actual,
            } => write!(f, "node {} has cached depth {} but sits at depth {}", node, cached, actual),
            Error::LengthMismatch { expected, actual } => write!(
                f,
                "tree holds {} live nodes but only {} are reachable from the root",
                expected, actual,
            ),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
