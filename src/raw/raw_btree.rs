use core::borrow::Borrow;

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Node, SearchResult};

/// A tree position as plain data: a node handle and an in-node slot index.
///
/// The position is valid while `index < node.len()`. The end sentinel of a
/// non-empty tree is `(root, root.len())`; the detached cursor `(None, 0)`
/// doubles as every position of the empty tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct RawCursor {
    node: Option<Handle>,
    index: usize,
}

impl RawCursor {
    /// The universal detached cursor.
    pub(crate) const DETACHED: Self = Self { node: None, index: 0 };

    pub(crate) const fn at(node: Handle, index: usize) -> Self {
        Self { node: Some(node), index }
    }

    pub(crate) const fn is_detached(self) -> bool {
        self.node.is_none()
    }
}

/// Where the locate descent stopped.
struct Location {
    node: Handle,
    index: usize,
    /// True when the slot holds an element equal to the target, false when it
    /// is the empty child slot the target would be inserted at.
    matched: bool,
}

/// The core tree backing [`BTree`](crate::BTree).
///
/// Owns every node through the arena; the `root` handle and the per-node
/// parent/position fields describe the graph. `max_node_elems` is the fan-out
/// bound fixed at construction.
pub(crate) struct RawBTree<T> {
    nodes: Arena<Node<T>>,
    root: Option<Handle>,
    len: usize,
    max_node_elems: usize,
}

impl<T> RawBTree<T> {
    pub(crate) const fn new(max_node_elems: usize) -> Self {
        assert!(max_node_elems > 0, "`RawBTree::new()` - the fan-out bound must be at least 1!");
        Self {
            nodes: Arena::new(),
            root: None,
            len: 0,
            max_node_elems,
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) const fn max_node_elems(&self) -> usize {
        self.max_node_elems
    }

    pub(crate) fn root(&self) -> Option<Handle> {
        self.root
    }

    pub(crate) fn node(&self, handle: Handle) -> &Node<T> {
        self.nodes.get(handle)
    }

    /// Returns the element at a position, or `None` if the position is the
    /// end sentinel, detached, or otherwise out of range.
    pub(crate) fn element(&self, cursor: RawCursor) -> Option<&T> {
        let node = self.nodes.get(cursor.node?);
        (cursor.index < node.len()).then(|| node.elem(cursor.index))
    }

    pub(crate) fn element_mut(&mut self, cursor: RawCursor) -> Option<&mut T> {
        let node = self.nodes.get_mut(cursor.node?);
        (cursor.index < node.len()).then(|| node.elem_mut(cursor.index))
    }

    /// The position of the smallest element: leftmost child chain from the
    /// root, slot 0. Equals the end position when the tree is empty.
    pub(crate) fn first_position(&self) -> RawCursor {
        let Some(root) = self.root else {
            return RawCursor::DETACHED;
        };

        let mut current = root;
        while let Some(child) = self.nodes.get(current).child(0) {
            current = child;
        }
        RawCursor::at(current, 0)
    }

    /// The canonical one-past-last position: the root at its element count.
    pub(crate) fn end_position(&self) -> RawCursor {
        match self.root {
            Some(root) => RawCursor::at(root, self.nodes.get(root).len()),
            None => RawCursor::DETACHED,
        }
    }

    pub(crate) fn is_end(&self, cursor: RawCursor) -> bool {
        cursor == self.end_position()
    }

    /// Steps to the next position in element order.
    ///
    /// The input must be a valid (dereferenceable) position; returns `None`
    /// otherwise. The result may be the end sentinel.
    pub(crate) fn successor(&self, cursor: RawCursor) -> Option<RawCursor> {
        let mut handle = cursor.node?;
        let node = self.nodes.get(handle);
        if cursor.index >= node.len() {
            return None;
        }

        // A subtree to the right of the slot holds the successor: enter it
        // and run down the leftmost child chain.
        if let Some(child) = node.child(cursor.index + 1) {
            let mut current = child;
            while let Some(left) = self.nodes.get(current).child(0) {
                current = left;
            }
            return Some(RawCursor::at(current, 0));
        }

        // Otherwise advance in place, climbing whenever the node's elements
        // are exhausted. The stored sibling position drops the cursor exactly
        // on the separating element the finished subtree was bracketing.
        let mut index = cursor.index + 1;
        loop {
            let node = self.nodes.get(handle);
            if index < node.len() {
                break;
            }
            match node.parent() {
                Some(parent) => {
                    index = node.position();
                    handle = parent;
                }
                // At the root, `index == len` is the end sentinel.
                None => break,
            }
        }
        Some(RawCursor::at(handle, index))
    }

    /// Steps to the previous position in element order.
    ///
    /// The input may be any valid position or the end sentinel; returns
    /// `None` when there is no predecessor (first element, empty tree, or an
    /// out-of-range position).
    pub(crate) fn predecessor(&self, cursor: RawCursor) -> Option<RawCursor> {
        let mut handle = cursor.node?;
        let node = self.nodes.get(handle);
        if cursor.index > node.len() {
            return None;
        }

        // The subtree at the slot itself holds the predecessor: enter it and
        // run down the rightmost child chain to its last element.
        if let Some(child) = node.child(cursor.index) {
            let mut current = child;
            loop {
                let node = self.nodes.get(current);
                match node.child(node.len()) {
                    Some(right) => current = right,
                    None => return Some(RawCursor::at(current, node.len() - 1)),
                }
            }
        }

        let mut index = cursor.index;
        while index == 0 {
            let node = self.nodes.get(handle);
            match node.parent() {
                Some(parent) => {
                    index = node.position();
                    handle = parent;
                }
                None => return None,
            }
        }
        Some(RawCursor::at(handle, index - 1))
    }

    /// Shared descent for find and insert.
    ///
    /// At each node, binary-search for the target; stop on a match or on an
    /// empty child slot, else descend into the bracketing child. Terminates
    /// because every step moves strictly deeper in a finite acyclic graph.
    /// Must not be called on an empty tree.
    fn locate<Q>(&self, elem: &Q) -> Location
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root.expect("`RawBTree::locate()` - called on an empty tree!");
        loop {
            let node = self.nodes.get(current);
            match node.search(elem) {
                SearchResult::Found(index) => {
                    return Location { node: current, index, matched: true };
                }
                SearchResult::NotFound(index) => match node.child(index) {
                    Some(child) => current = child,
                    None => {
                        return Location { node: current, index, matched: false };
                    }
                },
            }
        }
    }
}

impl<T: Ord> RawBTree<T> {
    /// Inserts an element unless an equal one is already present.
    ///
    /// Returns the position of the element (new or pre-existing) and whether
    /// an insertion took place. A full terminal node is not split: the new
    /// element opens a brand-new child node at the located empty slot.
    pub(crate) fn insert(&mut self, elem: T) -> (RawCursor, bool) {
        if self.root.is_none() {
            let root = self.nodes.alloc(Node::single(elem));
            self.root = Some(root);
            self.len = 1;
            return (RawCursor::at(root, 0), true);
        }

        let loc = self.locate(&elem);
        if loc.matched {
            return (RawCursor::at(loc.node, loc.index), false);
        }

        if self.nodes.get(loc.node).len() < self.max_node_elems {
            self.nodes.get_mut(loc.node).insert_elem(loc.index, elem);
            self.len += 1;
            return (RawCursor::at(loc.node, loc.index), true);
        }

        // The terminal node is at the fan-out bound: open a new node holding
        // only the element at the empty slot the descent stopped at.
        let mut child = Node::single(elem);
        child.set_parent(loc.node, loc.index);
        let child_handle = self.nodes.alloc(child);
        self.nodes.get_mut(loc.node).attach_child(loc.index, child_handle);
        self.len += 1;
        (RawCursor::at(child_handle, 0), true)
    }

    /// Returns the position of an equal element, or `None` on a miss.
    pub(crate) fn find<Q>(&self, elem: &Q) -> Option<RawCursor>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.root?;
        let loc = self.locate(elem);
        loc.matched.then(|| RawCursor::at(loc.node, loc.index))
    }
}

impl<T: Clone> Clone for RawBTree<T> {
    /// Deep-copies the whole node graph. Handles are dense arena indices, so
    /// cloning the arena preserves structure, parent links, and sibling
    /// positions without any fix-up pass.
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            root: self.root,
            len: self.len,
            max_node_elems: self.max_node_elems,
        }
    }
}
