mod arena;
mod handle;
mod node;
mod raw_btree;

pub(crate) use raw_btree::{RawBTree, RawCursor};
