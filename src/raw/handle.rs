use core::num::NonZero;

/// A stable index into the node arena.
///
/// Stored one past the arena index so the all-zeroes bit pattern stays free:
/// `Option<Handle>` is the same size as `Handle`, and the tree stores child
/// slots and parent back-references as `Option<Handle>` throughout.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub(crate) struct Handle(NonZero<u32>);

impl Handle {
    /// The largest arena index a `Handle` can refer to.
    pub(crate) const MAX: usize = u32::MAX as usize - 1;

    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) const fn from_index(index: usize) -> Self {
        assert!(index <= Self::MAX, "`Handle::from_index()` - `index` > `Handle::MAX`!");
        // The bound check above makes `index + 1` nonzero and in range.
        match NonZero::new(index as u32 + 1) {
            Some(raw) => Self(raw),
            None => unreachable!(),
        }
    }

    #[inline]
    pub(crate) const fn to_index(self) -> usize {
        self.0.get() as usize - 1
    }
}
