//! Traits providing genericity over storage strategies.
//!
//! Long-form string buffers are procured through the [`Storage`] policy:
//! either carved from an [`Arena`](crate::arena::Arena) and abandoned in
//! place on growth, or taken from the global allocator and returned block
//! by block. The mutation logic in [`repr`](crate::repr) is written once
//! against this trait.

use core::ptr::NonNull;

use crate::arena::Arena;

/// Block sizes are rounded up to this granularity, and every block is
/// aligned to it. Word-sized so the share-count header of the legacy
/// representation is always naturally aligned.
pub(crate) const GRANULE: usize = core::mem::size_of::<usize>();

/// An allocation policy behind long-form string buffers.
pub(crate) trait Storage {
    /// True when blocks are individually returned to the allocator on
    /// reallocation and drop; false when they become dead space until the
    /// whole region is released.
    const RECLAIMS: bool;

    /// Procures an uninitialized, [`GRANULE`]-aligned block of `size` bytes.
    ///
    /// Exhaustion is fatal; this never returns an invalid pointer.
    fn allocate(&self, size: usize) -> NonNull<u8>;

    /// Returns a block previously procured from the same source.
    ///
    /// # Safety
    /// `block` must have come out of [`allocate`](Storage::allocate) on this
    /// storage (or an equivalent one) with this exact `size`, and must not
    /// be used again afterwards.
    unsafe fn release(&self, block: NonNull<u8>, size: usize);
}

/// Storage carving buffers out of an arena. Nothing is ever handed back.
pub(crate) struct InArena<'a>(pub(crate) &'a Arena<'a>);

impl Storage for InArena<'_> {
    const RECLAIMS: bool = false;

    #[inline]
    fn allocate(&self, size: usize) -> NonNull<u8> {
        self.0.allocate(size, GRANULE)
    }

    unsafe fn release(&self, _block: NonNull<u8>, _size: usize) {
        debug_assert!(false, "arena blocks are never individually released");
    }
}

/// Storage backed by the global allocator.
#[cfg(feature = "alloc")]
pub(crate) struct Heap;

#[cfg(feature = "alloc")]
impl Storage for Heap {
    const RECLAIMS: bool = true;

    #[inline]
    fn allocate(&self, size: usize) -> NonNull<u8> {
        // size is a small rounded block size and GRANULE is a power of two,
        // so this layout is always valid
        let layout = unsafe { core::alloc::Layout::from_size_align_unchecked(size, GRANULE) };
        match NonNull::new(unsafe { alloc::alloc::alloc(layout) }) {
            Some(block) => block,
            None => alloc::alloc::handle_alloc_error(layout),
        }
    }

    #[inline]
    unsafe fn release(&self, block: NonNull<u8>, size: usize) {
        let layout = core::alloc::Layout::from_size_align_unchecked(size, GRANULE);
        alloc::alloc::dealloc(block.as_ptr(), layout);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::MaybeUninit;

    #[test]
    fn arena_storage_stays_resident() {
        let mut backing_region = [MaybeUninit::uninit(); 256];
        let arena = Arena::from_buffer(&mut backing_region[..]);

        let block = InArena(&arena).allocate(32);
        assert!(arena.contains(block.as_ptr()));
        assert_eq!(block.as_ptr() as usize % GRANULE, 0);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn heap_storage_round_trips() {
        let block = Heap.allocate(64);
        unsafe {
            block.as_ptr().write_bytes(0xAB, 64);
            assert_eq!(*block.as_ptr().add(63), 0xAB);
            Heap.release(block, 64);
        }
    }
}
