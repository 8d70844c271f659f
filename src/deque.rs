//! Double-ended queue over a single circular buffer that grows and shrinks.
//!
//! [`CircularDeque`] keeps its live elements in one heap block of `capacity`
//! slots.  Logical position `i` lives in physical slot `(begin + i) % capacity`,
//! so pushing or popping at either end never moves other elements.
//!
//! # Resize policy
//! - **Grow**: when `len == capacity` at the moment of a push, the block doubles
//!   (`0 -> 1` for the first push).
//! - **Shrink**: when `len == capacity / 4` at the moment of a pop, checked
//!   *before* the element is removed, the block halves.
//!
//! Every reallocation unwraps the ring so the new block starts at slot 0.
//!
//! # Access tiers
//! `Index`/`IndexMut`, [`pop_back`](CircularDeque::pop_back) and
//! [`pop_front`](CircularDeque::pop_front) trust the caller: positions must be
//! below `len()` and pops need a non-empty deque.  The `get*` and `try_*`
//! methods check and report instead.

use core::fmt;
use core::mem;
use core::ops::{Add, AddAssign, Index, IndexMut, Not};
use std::collections::VecDeque;

use crate::buffer::Slots;
use crate::error::DequeError;

// ─── AnyDeque ─────────────────────────────────────────────────────────────────

/// An object-safe abstraction over double-ended queue types.
///
/// Implemented by both `VecDeque<T>` and `CircularDeque<T>` so callers can
/// drive either one without knowing which it is.
pub trait AnyDeque<T> {
    /// Returns the number of elements in the deque.
    fn len(&self) -> usize;
    /// Returns `true` if the deque contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Appends an element to the back.
    fn push_back(&mut self, item: T);
    /// Prepends an element to the front.
    fn push_front(&mut self, item: T);
    /// Removes and returns the element from the back, or `None` if empty.
    fn pop_back(&mut self) -> Option<T>;
    /// Removes and returns the element from the front, or `None` if empty.
    fn pop_front(&mut self) -> Option<T>;
    /// Removes all elements.
    fn clear(&mut self);
    /// Returns a shared reference to the front element, or `None` if empty.
    fn front(&self) -> Option<&T>;
    /// Returns a shared reference to the back element, or `None` if empty.
    fn back(&self) -> Option<&T>;
}

impl<T> AnyDeque<T> for VecDeque<T> {
    fn len(&self) -> usize {
        self.len()
    }
    fn push_back(&mut self, item: T) {
        self.push_back(item);
    }
    fn push_front(&mut self, item: T) {
        self.push_front(item);
    }
    fn pop_back(&mut self) -> Option<T> {
        self.pop_back()
    }
    fn pop_front(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn clear(&mut self) {
        self.clear();
    }
    fn front(&self) -> Option<&T> {
        self.front()
    }
    fn back(&self) -> Option<&T> {
        self.back()
    }
}

/// A double-ended queue backed by one circular buffer it exclusively owns.
///
/// # Invariants
/// - `begin < capacity` and `end < capacity` whenever `capacity > 0`; both are
///   `0` otherwise.
/// - `len <= capacity`.
/// - `end == (begin + len) % capacity`.
/// - `capacity == 0` exactly when no block is allocated, and then
///   `begin == end == len == 0`.
///
/// The element type defaults to `i32`.  Any `Copy + Default` scalar works and
/// resize thresholds do not depend on it.
pub struct CircularDeque<T = i32> {
    pub(crate) begin: usize,
    pub(crate) end: usize,
    pub(crate) len: usize,
    pub(crate) capacity: usize,
    pub(crate) slots: Slots<T>,
}

impl<T: Copy + Default> AnyDeque<T> for CircularDeque<T> {
    fn len(&self) -> usize {
        self.len
    }
    fn push_back(&mut self, item: T) {
        self.push_back(item);
    }
    fn push_front(&mut self, item: T) {
        self.push_front(item);
    }
    fn pop_back(&mut self) -> Option<T> {
        self.try_pop_back().ok()
    }
    fn pop_front(&mut self) -> Option<T> {
        self.try_pop_front().ok()
    }
    fn clear(&mut self) {
        self.clear();
    }
    fn front(&self) -> Option<&T> {
        self.front()
    }
    fn back(&self) -> Option<&T> {
        self.back()
    }
}

impl<T> CircularDeque<T> {
    /// Creates an empty deque.  Does not allocate.
    pub fn new() -> Self {
        Self {
            begin: 0,
            end: 0,
            len: 0,
            capacity: 0,
            slots: Slots::unallocated(),
        }
    }

    /// Returns the number of live elements.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the deque holds no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of allocated slots.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Exchanges contents, capacity and buffer ownership with `other`.
    /// Never allocates.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Maps logical position `pos` to its physical slot.
    #[inline(always)]
    fn physical(&self, pos: usize) -> usize {
        (self.begin + pos) % self.capacity
    }

    #[inline(always)]
    fn wrap_add(&self, idx: usize, add: usize) -> usize {
        (idx + add) % self.capacity
    }

    #[inline(always)]
    fn wrap_sub(&self, idx: usize, sub: usize) -> usize {
        (idx + self.capacity - sub) % self.capacity
    }

    /// Returns the element at logical `pos` without any checks.
    ///
    /// # Safety
    /// `pos` must be less than `self.len()`.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, pos: usize) -> &T {
        let idx = self.physical(pos);
        unsafe { self.slots.get_unchecked(idx) }
    }

    /// Mutable counterpart of [`get_unchecked`](CircularDeque::get_unchecked).
    ///
    /// # Safety
    /// `pos` must be less than `self.len()`.
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self, pos: usize) -> &mut T {
        let idx = self.physical(pos);
        unsafe { self.slots.get_unchecked_mut(idx) }
    }

    /// Returns a shared reference to the element at logical `pos`, or `None`.
    #[inline]
    pub fn get(&self, pos: usize) -> Option<&T> {
        if pos < self.len {
            Some(&self.slots[self.physical(pos)])
        } else {
            None
        }
    }

    /// Returns an exclusive reference to the element at logical `pos`, or `None`.
    #[inline]
    pub fn get_mut(&mut self, pos: usize) -> Option<&mut T> {
        if pos < self.len {
            let idx = self.physical(pos);
            Some(&mut self.slots[idx])
        } else {
            None
        }
    }

    /// Returns the front element, or `None` if empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns the back element, or `None` if empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        if self.len == 0 {
            None
        } else {
            self.get(self.len - 1)
        }
    }

    /// Reverses the logical order in place and returns `self` for chaining.
    pub fn reverse(&mut self) -> &mut Self {
        for i in 0..self.len / 2 {
            let a = self.physical(i);
            let b = self.physical(self.len - 1 - i);
            self.slots.swap(a, b);
        }
        self
    }
}

impl<T: Copy + Default> CircularDeque<T> {
    /// Creates a deque holding a copy of `items`, with capacity exactly
    /// `items.len()`.
    pub fn from_slice(items: &[T]) -> Self {
        Self {
            begin: 0,
            end: 0,
            len: items.len(),
            capacity: items.len(),
            slots: Slots::from_slice(items),
        }
    }

    /// Copies the logical contents, front to back, into a `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        (0..self.len).map(|i| self[i]).collect()
    }

    /// Returns a copy of the element at logical `pos`.
    pub fn try_get(&self, pos: usize) -> Result<T, DequeError> {
        self.get(pos).copied().ok_or(DequeError::IndexOutOfBounds {
            index: pos,
            len: self.len,
        })
    }

    /// Appends `item` to the back, doubling the buffer first if it is full.
    pub fn push_back(&mut self, item: T) {
        if self.len == self.capacity {
            self.grow();
        }
        self.slots[self.end] = item;
        self.end = self.wrap_add(self.end, 1);
        self.len += 1;
    }

    /// Prepends `item` to the front, doubling the buffer first if it is full.
    pub fn push_front(&mut self, item: T) {
        if self.len == self.capacity {
            self.grow();
        }
        self.begin = self.wrap_sub(self.begin, 1);
        self.slots[self.begin] = item;
        self.len += 1;
    }

    /// Removes and returns the back element.
    ///
    /// # Panics
    /// Panics if the deque is empty.  Use [`try_pop_back`](Self::try_pop_back)
    /// when emptiness is not already known.
    pub fn pop_back(&mut self) -> T {
        match self.try_pop_back() {
            Ok(item) => item,
            Err(err) => panic!("CircularDeque::pop_back: {err}"),
        }
    }

    /// Removes and returns the front element.
    ///
    /// # Panics
    /// Panics if the deque is empty.  Use [`try_pop_front`](Self::try_pop_front)
    /// when emptiness is not already known.
    pub fn pop_front(&mut self) -> T {
        match self.try_pop_front() {
            Ok(item) => item,
            Err(err) => panic!("CircularDeque::pop_front: {err}"),
        }
    }

    /// Removes and returns the back element, or [`DequeError::Empty`].
    pub fn try_pop_back(&mut self) -> Result<T, DequeError> {
        if self.len == 0 {
            return Err(DequeError::Empty);
        }
        self.shrink_if_sparse();
        self.end = self.wrap_sub(self.end, 1);
        self.len -= 1;
        Ok(self.slots[self.end])
    }

    /// Removes and returns the front element, or [`DequeError::Empty`].
    pub fn try_pop_front(&mut self) -> Result<T, DequeError> {
        if self.len == 0 {
            return Err(DequeError::Empty);
        }
        self.shrink_if_sparse();
        let item = self.slots[self.begin];
        self.begin = self.wrap_add(self.begin, 1);
        self.len -= 1;
        Ok(item)
    }

    /// Drops every element and releases the buffer.
    pub fn clear(&mut self) {
        self.reallocate(0);
    }

    /// Appends every element of `other` to the back (the `+=` operation).
    ///
    /// If the combined length does not fit, the buffer is resized to exactly
    /// `self.len() + other.len()` first, so no doubling happens while appending.
    pub fn append(&mut self, other: &Self) -> &mut Self {
        let total = self.len + other.len;
        if total > self.capacity {
            self.reallocate(total);
        }
        for i in 0..other.len {
            self.push_back(other[i]);
        }
        self
    }

    /// Returns a new deque holding `self` followed by `other`.  Neither operand
    /// changes.
    ///
    /// The result starts as a trimmed copy of `self` and grows by ordinary
    /// doubling while `other` is pushed.
    pub fn concat(&self, other: &Self) -> Self {
        let mut out = self.clone();
        for i in 0..other.len {
            out.push_back(other[i]);
        }
        out
    }

    /// Returns a reversed copy, leaving `self` untouched.
    pub fn reversed(&self) -> Self {
        let mut out = self.clone();
        out.reverse();
        out
    }

    /// Replaces the contents with a copy of `source` (copy-and-swap).
    ///
    /// The copy is built before `self` is touched, and the old buffer is
    /// dropped with the temporary.
    pub fn assign(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }

    /// Cold path for pushes into a full buffer.
    #[inline(never)]
    fn grow(&mut self) {
        let new_capacity = if self.capacity == 0 {
            1
        } else {
            self.capacity * 2
        };
        self.reallocate(new_capacity);
    }

    /// Halves the buffer when a quarter or less of it is live, measured before
    /// the pending removal.
    #[inline(always)]
    fn shrink_if_sparse(&mut self) {
        if self.len == self.capacity / 4 {
            self.reallocate(self.capacity / 2);
        }
    }

    /// Moves the live elements into a fresh block of `new_capacity` slots,
    /// unwrapped so that `begin == 0`.  A target of zero releases the buffer
    /// and resets every field.
    ///
    /// The caller guarantees `new_capacity >= self.len` whenever it is nonzero.
    #[inline(never)]
    fn reallocate(&mut self, new_capacity: usize) {
        log::trace!(
            "reallocating deque buffer: {} -> {} slots ({} live)",
            self.capacity,
            new_capacity,
            self.len
        );
        if new_capacity == 0 {
            self.slots.release();
            self.begin = 0;
            self.end = 0;
            self.len = 0;
            self.capacity = 0;
        } else {
            self.slots = Slots::gather(&self.slots, self.begin, self.len, new_capacity);
            self.begin = 0;
            self.end = self.len % new_capacity;
            self.capacity = new_capacity;
        }
    }
}

impl<T> Index<usize> for CircularDeque<T> {
    type Output = T;

    /// Unchecked tier: `pos` must be below `len()`.  Only debug builds verify it.
    #[inline(always)]
    fn index(&self, pos: usize) -> &T {
        debug_assert!(pos < self.len, "index {pos} out of bounds for length {}", self.len);
        &self.slots[self.physical(pos)]
    }
}

impl<T> IndexMut<usize> for CircularDeque<T> {
    #[inline(always)]
    fn index_mut(&mut self, pos: usize) -> &mut T {
        debug_assert!(pos < self.len, "index {pos} out of bounds for length {}", self.len);
        let idx = self.physical(pos);
        &mut self.slots[idx]
    }
}

/// Deep copy, trimmed: the copy's capacity equals the source's length.
impl<T: Copy + Default> Clone for CircularDeque<T> {
    fn clone(&self) -> Self {
        Self {
            begin: 0,
            end: 0,
            len: self.len,
            capacity: self.len,
            slots: Slots::gather(&self.slots, self.begin, self.len, self.len),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign(source);
    }
}

impl<T> Default for CircularDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Default> AddAssign<&CircularDeque<T>> for CircularDeque<T> {
    fn add_assign(&mut self, other: &CircularDeque<T>) {
        self.append(other);
    }
}

impl<T: Copy + Default> Add<&CircularDeque<T>> for &CircularDeque<T> {
    type Output = CircularDeque<T>;

    fn add(self, other: &CircularDeque<T>) -> CircularDeque<T> {
        self.concat(other)
    }
}

/// `!&deque` is a reversed copy.
impl<T: Copy + Default> Not for &CircularDeque<T> {
    type Output = CircularDeque<T>;

    fn not(self) -> CircularDeque<T> {
        self.reversed()
    }
}

impl<T: PartialEq> PartialEq for CircularDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && (0..self.len).all(|i| self[i] == other[i])
    }
}
impl<T: Eq> Eq for CircularDeque<T> {}

impl<T: fmt::Debug> fmt::Debug for CircularDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries((0..self.len).map(|i| &self[i]))
            .finish()
    }
}

/// Writes each element followed by a single space, front to back.
impl<T: fmt::Display> fmt::Display for CircularDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.len {
            write!(f, "{} ", self[i])?;
        }
        Ok(())
    }
}

impl<T: Copy + Default> From<&[T]> for CircularDeque<T> {
    fn from(items: &[T]) -> Self {
        Self::from_slice(items)
    }
}

impl<T: Copy + Default> From<Vec<T>> for CircularDeque<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_slice(&items)
    }
}

impl<T: Copy + Default, const N: usize> From<[T; N]> for CircularDeque<T> {
    fn from(items: [T; N]) -> Self {
        Self::from_slice(&items)
    }
}
