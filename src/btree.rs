//! An ordered set with a fixed, caller-chosen fan-out bound.
//!
//! [`BTree`] keeps unique elements sorted across a graph of multi-element
//! nodes. Unlike a classic B-tree it never splits or rebalances: when the
//! node an element belongs in is already at the fan-out bound, the element
//! opens a brand-new single-element child at the slot the descent stopped
//! at. Shape therefore depends on insertion order, but element order never
//! does, and no insertion ever moves an existing element or invalidates a
//! position.

use core::borrow::Borrow;
use core::fmt;

use alloc::collections::VecDeque;

use crate::cursor::{Cursor, CursorMut, Iter};
use crate::raw::RawBTree;

/// The default fan-out bound: the number of elements a node holds before new
/// elements open child nodes instead.
pub const DEFAULT_MAX_NODE_ELEMS: usize = 40;

/// An ordered set of unique elements over variable fan-out nodes.
///
/// Lookups and insertions descend by binary search within each node;
/// traversal is cursor-based and bidirectional, using parent links instead
/// of a stack. Insertion never splits nodes and never invalidates cursors
/// or positions.
///
/// # Examples
///
/// ```rust
/// use fanout_btree::BTree;
///
/// let tree: BTree<i32> = [5, 3, 8, 1, 4].into_iter().collect();
///
/// assert_eq!(tree.len(), 5);
/// assert!(tree.contains(&4));
/// assert!(tree.iter().copied().eq([1, 3, 4, 5, 8]));
/// ```
pub struct BTree<T> {
    raw: RawBTree<T>,
}

impl<T> BTree<T> {
    /// Creates an empty tree with the default fan-out bound of
    /// [`DEFAULT_MAX_NODE_ELEMS`].
    #[must_use]
    pub const fn new() -> Self {
        Self { raw: RawBTree::new(DEFAULT_MAX_NODE_ELEMS) }
    }

    /// Creates an empty tree whose nodes hold at most `max_node_elems`
    /// elements.
    ///
    /// # Panics
    ///
    /// Panics if `max_node_elems` is zero.
    #[must_use]
    pub const fn with_max_node_elems(max_node_elems: usize) -> Self {
        Self { raw: RawBTree::new(max_node_elems) }
    }

    /// Returns the number of elements in the tree.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the tree holds no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the fan-out bound this tree was created with.
    #[must_use]
    pub const fn max_node_elems(&self) -> usize {
        self.raw.max_node_elems()
    }

    /// Returns an iterator over the elements in ascending order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.raw)
    }

    /// Returns a cursor at the smallest element, or the end cursor if the
    /// tree is empty.
    #[must_use]
    pub fn cursor_front(&self) -> Cursor<'_, T> {
        Cursor::new(&self.raw, self.raw.first_position())
    }

    /// Returns the end cursor, one past the largest element.
    ///
    /// The end cursor does not point at an element, but stepping it backwards
    /// with [`move_prev`](Cursor::move_prev) lands on the largest element.
    #[must_use]
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(&self.raw, self.raw.end_position())
    }

    /// Returns a mutable cursor at the smallest element, or the end cursor if
    /// the tree is empty.
    #[must_use]
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T> {
        let raw = self.raw.first_position();
        CursorMut::new(&mut self.raw, raw)
    }

    /// Returns a mutable cursor at the end sentinel.
    #[must_use]
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T> {
        let raw = self.raw.end_position();
        CursorMut::new(&mut self.raw, raw)
    }
}

impl<T: Ord> BTree<T> {
    /// Inserts an element, or leaves the tree unchanged if an equal element
    /// is already present.
    ///
    /// Returns a cursor at the element (whether newly inserted or
    /// pre-existing) and `true` if the insertion took place.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fanout_btree::BTree;
    ///
    /// let mut tree = BTree::new();
    ///
    /// let (cursor, inserted) = tree.insert(7);
    /// assert!(inserted);
    /// assert_eq!(cursor.get(), Ok(&7));
    ///
    /// let (cursor, inserted) = tree.insert(7);
    /// assert!(!inserted);
    /// assert_eq!(cursor.get(), Ok(&7));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, elem: T) -> (Cursor<'_, T>, bool) {
        let (raw, inserted) = self.raw.insert(elem);
        (Cursor::new(&self.raw, raw), inserted)
    }

    /// Returns a cursor at the element equal to `elem`, or the end cursor if
    /// no such element exists.
    ///
    /// The lookup type `Q` may be any borrowed form of `T`, as long as it
    /// orders the same way.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fanout_btree::BTree;
    ///
    /// let tree: BTree<i32> = [5, 3, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.find(&8).get(), Ok(&8));
    /// assert!(tree.find(&7).is_end());
    /// ```
    #[must_use]
    pub fn find<Q>(&self, elem: &Q) -> Cursor<'_, T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let raw = self.raw.find(elem).unwrap_or_else(|| self.raw.end_position());
        Cursor::new(&self.raw, raw)
    }

    /// Returns a mutable cursor at the element equal to `elem`, or the end
    /// cursor if no such element exists.
    #[must_use]
    pub fn find_mut<Q>(&mut self, elem: &Q) -> CursorMut<'_, T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let raw = self.raw.find(elem).unwrap_or_else(|| self.raw.end_position());
        CursorMut::new(&mut self.raw, raw)
    }

    /// Returns `true` if the tree holds an element equal to `elem`.
    #[must_use]
    pub fn contains<Q>(&self, elem: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.find(elem).is_some()
    }
}

impl<T: Clone> Clone for BTree<T> {
    /// Deep-copies the whole tree; the clone has the same shape, not just the
    /// same elements.
    fn clone(&self) -> Self {
        Self { raw: self.raw.clone() }
    }
}

impl<T> Default for BTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for BTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for BTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.insert(elem);
        }
    }
}

impl<'a, T> IntoIterator for &'a BTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for BTree<T> {
    /// Trees compare by element sequence; two trees with different shapes
    /// (from different insertion orders or fan-out bounds) are still equal
    /// when they hold the same elements.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for BTree<T> {}

impl<T: fmt::Debug> fmt::Debug for BTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for BTree<T> {
    /// Writes every element in breadth-first node order, space-separated,
    /// with no trailing newline. Within a node elements appear in sorted
    /// order; across nodes the sequence reflects the tree's shape, so it
    /// generally differs from the ascending order [`iter`](BTree::iter)
    /// yields.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fanout_btree::BTree;
    ///
    /// let mut tree = BTree::with_max_node_elems(2);
    /// tree.extend([5, 3, 8, 1, 4]);
    ///
    /// assert_eq!(tree.to_string(), "3 5 1 4 8");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut queue = VecDeque::new();
        if let Some(root) = self.raw.root() {
            queue.push_back(root);
        }

        let mut first = true;
        while let Some(handle) = queue.pop_front() {
            let node = self.raw.node(handle);
            for elem in node.elems() {
                if !first {
                    f.write_str(" ")?;
                }
                first = false;
                write!(f, "{elem}")?;
            }
            for slot in 0..node.child_count() {
                if let Some(child) = node.child(slot) {
                    queue.push_back(child);
                }
            }
        }
        Ok(())
    }
}
