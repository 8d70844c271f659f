//! Owned fixed-size slot block backing [`CircularDeque`](crate::CircularDeque).
//!
//! [`Slots`] is deliberately dumb: it knows how many slots it holds and how to
//! gather a wrapped run of another block into a fresh one.  All ring-buffer
//! bookkeeping (begin / end / size) lives in the deque itself.

use core::ops::{Index, IndexMut};

/// A heap block of exactly `len()` slots, or no allocation at all when empty.
///
/// An empty `Box<[T]>` does not allocate, so `Slots::unallocated()` is free and
/// dropping it is a no-op.
pub(crate) struct Slots<T> {
    slots: Box<[T]>,
}

impl<T: Copy + Default> Slots<T> {
    /// Allocates `capacity` default-initialised slots.
    pub(crate) fn allocate(capacity: usize) -> Self {
        Self {
            slots: vec![T::default(); capacity].into_boxed_slice(),
        }
    }

    /// Builds a block of exactly `items.len()` slots holding `items` in order.
    pub(crate) fn from_slice(items: &[T]) -> Self {
        Self {
            slots: items.into(),
        }
    }

    /// Allocates `capacity` slots and copies the `len` live slots of `src`,
    /// starting at physical slot `begin` and wrapping modulo `src.len()`, into
    /// slots `0..len` of the new block.
    ///
    /// The caller guarantees `len <= capacity` and `len <= src.len()`.
    pub(crate) fn gather(src: &Slots<T>, begin: usize, len: usize, capacity: usize) -> Self {
        let mut dst = Self::allocate(capacity);
        if len > 0 {
            let src_cap = src.len();
            for i in 0..len {
                dst.slots[i] = src.slots[(begin + i) % src_cap];
            }
        }
        dst
    }
}

impl<T> Slots<T> {
    /// A block with no slots and no heap allocation.
    #[inline(always)]
    pub(crate) fn unallocated() -> Self {
        Self {
            slots: Box::default(),
        }
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline(always)]
    pub(crate) fn is_allocated(&self) -> bool {
        !self.slots.is_empty()
    }

    /// Drops the current block, leaving this one unallocated.
    pub(crate) fn release(&mut self) {
        self.slots = Box::default();
    }

    /// # Safety
    /// `idx` must be less than `self.len()`.
    #[inline(always)]
    pub(crate) unsafe fn get_unchecked(&self, idx: usize) -> &T {
        unsafe { self.slots.get_unchecked(idx) }
    }

    /// # Safety
    /// `idx` must be less than `self.len()`.
    #[inline(always)]
    pub(crate) unsafe fn get_unchecked_mut(&mut self, idx: usize) -> &mut T {
        unsafe { self.slots.get_unchecked_mut(idx) }
    }

    #[inline(always)]
    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        self.slots.swap(a, b);
    }
}

impl<T> Index<usize> for Slots<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, idx: usize) -> &T {
        &self.slots[idx]
    }
}

impl<T> IndexMut<usize> for Slots<T> {
    #[inline(always)]
    fn index_mut(&mut self, idx: usize) -> &mut T {
        &mut self.slots[idx]
    }
}
