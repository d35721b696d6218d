//! A splay tree: a binary search tree that moves every accessed value to the root.
//!
//! The tree lives in [`splay_tree`], backed by the index arena in [`arena`]. The library only emits
//! records through the `log` facade and never installs a logger itself.

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

pub mod arena;
pub mod splay_tree;

pub use crate::splay_tree::{Dump, DumpRecord, Error, NodeRef, Result, SplayTree};
