use alloc::vec::Vec;

use super::handle::Handle;

/// Backing storage for the node graph.
///
/// The tree never removes nodes, so there is no free list: handles are dense
/// indices into `slots`, and cloning the arena reproduces the whole graph
/// with every handle, parent link, and sibling position intact.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<T>,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    pub(crate) fn alloc(&mut self, element: T) -> Handle {
        // Strict less-than so the handle for the new slot stays representable.
        assert!(
            self.slots.len() < Handle::MAX,
            "`Arena::alloc()` - arena is at maximum capacity ({})",
            Handle::MAX
        );
        self.slots.push(element);
        Handle::from_index(self.slots.len() - 1)
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        &self.slots[handle.to_index()]
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        &mut self.slots[handle.to_index()]
    }
}
