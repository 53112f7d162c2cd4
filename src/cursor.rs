//! Cursors and iterators over a [`BTree`].
//!
//! A cursor is a (node, slot) pair into the parent-linked node graph. It
//! steps to the successor or predecessor without recursion: down into a
//! bracketing subtree when one exists, otherwise along the current node and
//! up through the stored parent/sibling-position links. [`Cursor`] is the
//! read-only view, [`CursorMut`] the read-write view over the same underlying
//! position; a `CursorMut` can always be narrowed into a `Cursor`.
//!
//! [`Iter`] drives the same stepping protocol behind the standard iterator
//! traits, with `DoubleEndedIterator` providing reverse traversal.
//!
//! [`BTree`]: crate::BTree

use core::fmt;
use core::iter::FusedIterator;
use core::ptr;

use crate::error::{Error, Result};
use crate::raw::{RawBTree, RawCursor};

/// A read-only bidirectional cursor over a [`BTree`](crate::BTree).
///
/// Obtained from [`find`], [`cursor_front`], [`cursor_end`], or by narrowing
/// a [`CursorMut`]. The cursor borrows the tree, so the tree cannot be
/// mutated while any cursor into it is alive.
///
/// Two cursors are equal when both are detached (the end cursor of an empty
/// tree), or when they reference the same slot of the same node in the same
/// tree.
///
/// [`find`]: crate::BTree::find
/// [`cursor_front`]: crate::BTree::cursor_front
/// [`cursor_end`]: crate::BTree::cursor_end
pub struct Cursor<'a, T> {
    tree: &'a RawBTree<T>,
    raw: RawCursor,
}

/// A read-write bidirectional cursor over a [`BTree`](crate::BTree).
///
/// Holds the tree mutably borrowed for its whole lifetime. Offers the same
/// navigation as [`Cursor`] plus [`get_mut`](CursorMut::get_mut).
pub struct CursorMut<'a, T> {
    tree: &'a mut RawBTree<T>,
    raw: RawCursor,
}

/// An in-order iterator over a [`BTree`](crate::BTree).
///
/// Created by [`iter`](crate::BTree::iter). Yields elements in ascending
/// order from the front and descending order from the back.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T> {
    tree: &'a RawBTree<T>,
    front: RawCursor,
    back: RawCursor,
    remaining: usize,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(tree: &'a RawBTree<T>, raw: RawCursor) -> Self {
        Self { tree, raw }
    }

    /// Returns the element the cursor points at.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCursor`] if the cursor is detached or at the end
    /// sentinel.
    pub fn get(&self) -> Result<&'a T> {
        self.tree.element(self.raw).ok_or(Error::InvalidCursor)
    }

    /// Steps to the next element in ascending order; stepping off the last
    /// element lands on the end sentinel.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCursor`] if the cursor is already at the end sentinel
    /// or detached. The cursor is left unchanged on error.
    pub fn move_next(&mut self) -> Result<()> {
        self.raw = self.tree.successor(self.raw).ok_or(Error::InvalidCursor)?;
        Ok(())
    }

    /// Steps to the previous element in ascending order; valid from the end
    /// sentinel, which steps onto the last element.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCursor`] if there is no predecessor (the cursor is on
    /// the first element, or the tree is empty). The cursor is left
    /// unchanged on error.
    pub fn move_prev(&mut self) -> Result<()> {
        self.raw = self.tree.predecessor(self.raw).ok_or(Error::InvalidCursor)?;
        Ok(())
    }

    /// Returns `true` if the cursor sits at the end sentinel.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.tree.is_end(self.raw)
    }
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(tree: &'a mut RawBTree<T>, raw: RawCursor) -> Self {
        Self { tree, raw }
    }

    /// Returns the element the cursor points at.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCursor`] if the cursor is detached or at the end
    /// sentinel.
    pub fn get(&self) -> Result<&T> {
        self.tree.element(self.raw).ok_or(Error::InvalidCursor)
    }

    /// Returns the element the cursor points at, mutably.
    ///
    /// The caller must not modify the element in a way that changes its
    /// ordering relative to any other element in the tree; doing so is a
    /// logic error that leaves lookups and traversal order unspecified (but
    /// never memory-unsafe).
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCursor`] if the cursor is detached or at the end
    /// sentinel.
    pub fn get_mut(&mut self) -> Result<&mut T> {
        self.tree.element_mut(self.raw).ok_or(Error::InvalidCursor)
    }

    /// Steps to the next element in ascending order.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCursor`] if the cursor is already at the end sentinel
    /// or detached. The cursor is left unchanged on error.
    pub fn move_next(&mut self) -> Result<()> {
        self.raw = self.tree.successor(self.raw).ok_or(Error::InvalidCursor)?;
        Ok(())
    }

    /// Steps to the previous element in ascending order.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCursor`] if there is no predecessor. The cursor is
    /// left unchanged on error.
    pub fn move_prev(&mut self) -> Result<()> {
        self.raw = self.tree.predecessor(self.raw).ok_or(Error::InvalidCursor)?;
        Ok(())
    }

    /// Returns `true` if the cursor sits at the end sentinel.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.tree.is_end(self.raw)
    }

    /// Narrows to a read-only cursor at the same position, borrowing this
    /// cursor.
    #[must_use]
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.tree, self.raw)
    }

    /// Consumes the cursor, narrowing it to a read-only cursor at the same
    /// position for the full original lifetime.
    #[must_use]
    pub fn into_cursor(self) -> Cursor<'a, T> {
        Cursor::new(self.tree, self.raw)
    }
}

impl<'a, T> From<CursorMut<'a, T>> for Cursor<'a, T> {
    fn from(cursor: CursorMut<'a, T>) -> Self {
        cursor.into_cursor()
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        if self.raw.is_detached() && other.raw.is_detached() {
            return true;
        }
        ptr::eq(self.tree, other.tree) && self.raw == other.raw
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor").field("raw", &self.raw).finish()
    }
}

impl<T> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut").field("raw", &self.raw).finish()
    }
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(tree: &'a RawBTree<T>) -> Self {
        Self {
            tree,
            front: tree.first_position(),
            back: tree.end_position(),
            remaining: tree.len(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let elem = self.tree.element(self.front)?;
        self.front = self.tree.successor(self.front)?;
        self.remaining -= 1;
        Some(elem)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }

    fn last(mut self) -> Option<&'a T> {
        self.next_back()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        self.back = self.tree.predecessor(self.back)?;
        self.remaining -= 1;
        self.tree.element(self.back)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter").field("front", &self.front).field("back", &self.back).field("remaining", &self.remaining).finish()
    }
}
