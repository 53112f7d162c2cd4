//! Error types for cursor operations.
//!
//! A cursor that sits on the end sentinel (or belongs to an empty tree) does
//! not point at an element. Dereferencing it or stepping it out of range is
//! reported as [`Error::InvalidCursor`] instead of being left undefined; a
//! failed step leaves the cursor where it was. A missed [`find`] is an
//! expected outcome, not a fault, and is reported through the end cursor
//! rather than through this type.
//!
//! [`find`]: crate::BTree::find

use thiserror::Error;

/// Errors produced by [`Cursor`](crate::Cursor) and
/// [`CursorMut`](crate::CursorMut) operations.
#[derive(Error, Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The cursor is detached or positioned at the end sentinel, so there is
    /// no element to read or no position to step to.
    #[error("cursor does not point at an element")]
    InvalidCursor,
}

/// A `Result` alias for cursor operations.
pub type Result<T> = core::result::Result<T, Error>;
