//! A fixed fan-out B-tree set with bidirectional cursors.
//!
//! This crate provides [`BTree`], an ordered collection of unique elements in
//! which every node stores up to a configurable number of elements (the
//! *fan-out bound*, 40 by default). A node holding `m` elements partitions its
//! subtree into `m + 1` ordered child subtrees. Nodes carry a back-reference
//! to their parent and their position among the parent's children, which lets
//! [`Cursor`] and [`Iter`] walk the tree in both directions without recursion
//! or an auxiliary stack.
//!
//! # Example
//!
//! ```
//! use fanout_btree::BTree;
//!
//! let mut tree = BTree::with_max_node_elems(2);
//! for n in [5, 3, 8, 1, 4] {
//!     tree.insert(n);
//! }
//!
//! // In-order traversal is sorted.
//! assert!(tree.iter().copied().eq([1, 3, 4, 5, 8]));
//!
//! // Duplicates are rejected.
//! let (_, inserted) = tree.insert(5);
//! assert!(!inserted);
//! assert_eq!(tree.len(), 5);
//!
//! // find() returns a cursor to the match, or the end cursor on a miss.
//! assert_eq!(tree.find(&8).get(), Ok(&8));
//! assert!(tree.find(&7).is_end());
//! ```
//!
//! # Structure
//!
//! This is **not** a textbook B-tree: insertion into a full node does not
//! split it. Instead a brand-new single-element node is opened at the located
//! empty child slot, so a node never holds more than the fan-out bound of
//! elements but the tree performs no rebalancing. Deletion is not supported.
//!
//! Nodes live in an arena (handle-indexed backing storage) owned by the
//! tree; parent links and sibling positions are plain data, never ownership,
//! which keeps the parent-linked graph free of reference-counting cycles and
//! makes a deep copy a plain clone of the backing storage.

#![no_std]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod raw;

pub mod btree;
pub mod cursor;
pub mod error;

pub use btree::{BTree, DEFAULT_MAX_NODE_ELEMS};
pub use cursor::{Cursor, CursorMut, Iter};
pub use error::{Error, Result};
