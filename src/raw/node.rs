use core::borrow::Borrow;

use smallvec::{SmallVec, smallvec};

use super::handle::Handle;

/// Elements kept inline before spilling to the heap. The fan-out bound is a
/// runtime value, so nodes above this size simply spill.
const INLINE_ELEMS: usize = 4;

/// Result of a binary search within a single node.
pub(crate) enum SearchResult {
    /// An equal element sits at the given slot.
    Found(usize),
    /// No equal element; the slot is where one would be inserted, and also
    /// the index of the child subtree bracketing the target.
    NotFound(usize),
}

/// A variable fan-out block of the tree.
///
/// `elems` is sorted ascending with no duplicates and `children` is always
/// exactly one longer: `children[i]` roots the subtree of elements between
/// `elems[i - 1]` and `elems[i]` (the boundary slots hold the outer ranges).
/// `parent` and `position` are non-owning data used only to climb back up
/// during traversal; the arena alone owns node storage.
pub(crate) struct Node<T> {
    elems: SmallVec<[T; INLINE_ELEMS]>,
    children: SmallVec<[Option<Handle>; INLINE_ELEMS + 1]>,
    parent: Option<Handle>,
    position: usize,
}

impl<T> Node<T> {
    /// Creates a detached node holding a single element, with the two empty
    /// child slots bracketing it.
    pub(crate) fn single(elem: T) -> Self {
        let mut elems = SmallVec::new();
        elems.push(elem);
        Self {
            elems,
            children: smallvec![None, None],
            parent: None,
            position: 0,
        }
    }

    /// Returns the number of elements in this node.
    pub(crate) fn len(&self) -> usize {
        self.elems.len()
    }

    #[inline]
    pub(crate) fn elem(&self, index: usize) -> &T {
        &self.elems[index]
    }

    #[inline]
    pub(crate) fn elem_mut(&mut self, index: usize) -> &mut T {
        &mut self.elems[index]
    }

    pub(crate) fn elems(&self) -> &[T] {
        &self.elems
    }

    /// Returns the child handle at the given slot (`0..=len()`).
    #[inline]
    pub(crate) fn child(&self, index: usize) -> Option<Handle> {
        self.children[index]
    }

    pub(crate) fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Occupies an empty child slot. The slot must currently be empty.
    pub(crate) fn attach_child(&mut self, index: usize, child: Handle) {
        debug_assert!(self.children[index].is_none(), "child slot already occupied");
        self.children[index] = Some(child);
    }

    pub(crate) fn parent(&self) -> Option<Handle> {
        self.parent
    }

    /// Records the owning parent and this node's position among its children.
    pub(crate) fn set_parent(&mut self, parent: Handle, position: usize) {
        self.parent = Some(parent);
        self.position = position;
    }

    /// This node's position within its parent's child sequence. Meaningless
    /// for the root.
    pub(crate) fn position(&self) -> usize {
        self.position
    }

    /// Searches this node's elements for the target.
    #[inline]
    pub(crate) fn search<Q>(&self, elem: &Q) -> SearchResult
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        match self.elems.binary_search_by(|e| e.borrow().cmp(elem)) {
            Ok(idx) => SearchResult::Found(idx),
            Err(idx) => SearchResult::NotFound(idx),
        }
    }

    /// Inserts an element at the given sorted slot, opening an empty child
    /// slot beside it so `children` stays aligned with `elems`.
    pub(crate) fn insert_elem(&mut self, index: usize, elem: T) {
        self.elems.insert(index, elem);
        self.children.insert(index + 1, None);
    }
}

impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        Self {
            elems: self.elems.clone(),
            children: self.children.clone(),
            parent: self.parent,
            position: self.position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_element_node_shape() {
        let node = Node::single(7);
        assert_eq!(node.len(), 1);
        assert_eq!(node.child_count(), 2);
        assert_eq!(node.child(0), None);
        assert_eq!(node.child(1), None);
        assert_eq!(node.parent(), None);
    }

    #[test]
    fn insert_keeps_children_aligned() {
        let mut node = Node::single(10);
        node.insert_elem(0, 5);
        node.insert_elem(2, 20);

        assert_eq!(node.elems(), &[5, 10, 20]);
        assert_eq!(node.child_count(), node.len() + 1);
    }

    #[test]
    fn search_reports_slot() {
        let mut node = Node::single(10);
        node.insert_elem(1, 20);
        node.insert_elem(2, 30);

        assert!(matches!(node.search(&20), SearchResult::Found(1)));
        assert!(matches!(node.search(&5), SearchResult::NotFound(0)));
        assert!(matches!(node.search(&25), SearchResult::NotFound(2)));
        assert!(matches!(node.search(&99), SearchResult::NotFound(3)));
    }

    #[test]
    fn alignment_survives_mid_node_insert_with_occupied_slots() {
        // Node [10, 30] with an occupied rightmost child; inserting 20 must
        // open the empty slot next to 20, not at the end.
        let mut node = Node::single(10);
        node.insert_elem(1, 30);
        node.attach_child(2, Handle::from_index(0));

        node.insert_elem(1, 20);
        assert_eq!(node.elems(), &[10, 20, 30]);
        assert_eq!(node.child(1), None);
        assert_eq!(node.child(2), None);
        assert_eq!(node.child(3), Some(Handle::from_index(0)));
    }
}
