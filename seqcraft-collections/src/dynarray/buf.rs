/*
   Dynamic Array: A contiguous growable array of elements that
   doubles its capacity when full and shrinks it to the next power of
   two once three quarters of its slots are unused. Every change of
   capacity moves the live elements into a freshly allocated buffer.

   Copyright 2021 "Rahul Singh <rsingh@arrsingh.com>"

   Licensed under the Apache License, Version 2.0 (the "License");
   you may not use this file except in compliance with the License.
   You may obtain a copy of the License at

       http://www.apache.org/licenses/LICENSE-2.0

   Unless required by applicable law or agreed to in writing, software
   distributed under the License is distributed on an "AS IS" BASIS,
   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
   See the License for the specific language governing permissions and
   limitations under the License.
*/

use core::mem::MaybeUninit;
use core::ptr;

/// A fixed size heap buffer of possibly uninitialized slots. The
/// buffer never tracks which slots are live, that is the job of the
/// owning [`DynArray`](super::array::DynArray), and it never drops
/// the values it holds.
pub(super) struct RawBuf<T> {
    slots: Box<[MaybeUninit<T>]>,
}

impl<T> RawBuf<T> {
    pub(super) fn new(capacity: usize) -> RawBuf<T> {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, MaybeUninit::uninit);
        RawBuf {
            slots: slots.into_boxed_slice(),
        }
    }

    pub(super) fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub(super) fn as_ptr(&self) -> *const T {
        self.slots.as_ptr() as *const T
    }

    pub(super) fn as_mut_ptr(&mut self) -> *mut T {
        self.slots.as_mut_ptr() as *mut T
    }

    /// Moves the first `len` slots into a newly allocated buffer of
    /// `capacity` slots and releases the current one.
    ///
    /// # Safety
    ///
    /// The first `len` slots must be initialized and `len` must not
    /// exceed either capacity.
    pub(super) unsafe fn realloc(&mut self, len: usize, capacity: usize) {
        debug_assert!(len <= capacity && len <= self.capacity());
        let mut fresh = RawBuf::new(capacity);
        ptr::copy_nonoverlapping(self.as_ptr(), fresh.as_mut_ptr(), len);
        // the old slots are MaybeUninit so dropping them does not
        // drop the values that were just moved out
        *self = fresh;
    }

    /// # Safety
    ///
    /// `index` must be less than the capacity. Any value already in
    /// the slot is overwritten without being dropped.
    pub(super) unsafe fn write(&mut self, index: usize, val: T) {
        ptr::write(self.as_mut_ptr().add(index), val);
    }

    /// # Safety
    ///
    /// The slot at `index` must be initialized. The slot is logically
    /// uninitialized after the read.
    pub(super) unsafe fn read(&self, index: usize) -> T {
        ptr::read(self.as_ptr().add(index))
    }

    /// Moves the slots `[index, len)` one slot to the right.
    ///
    /// # Safety
    ///
    /// Requires `index <= len < capacity`.
    pub(super) unsafe fn shift_right(&mut self, index: usize, len: usize) {
        debug_assert!(index <= len && len < self.capacity());
        let at = self.as_mut_ptr().add(index);
        ptr::copy(at, at.add(1), len - index);
    }

    /// Moves the slots `[index + 1, len)` one slot to the left,
    /// overwriting the slot at `index`.
    ///
    /// # Safety
    ///
    /// Requires `index < len <= capacity`.
    pub(super) unsafe fn shift_left(&mut self, index: usize, len: usize) {
        debug_assert!(index < len && len <= self.capacity());
        let at = self.as_mut_ptr().add(index);
        ptr::copy(at.add(1), at, len - index - 1);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_realloc_moves_live_slots() {
        let mut buf = RawBuf::<u32>::new(4);
        unsafe {
            buf.write(0, 10);
            buf.write(1, 20);
            buf.write(2, 30);
            buf.realloc(3, 8);
            assert_eq!(buf.capacity(), 8);
            assert_eq!(buf.read(0), 10);
            assert_eq!(buf.read(1), 20);
            assert_eq!(buf.read(2), 30);
        }
    }

    #[test]
    fn test_shift() {
        let mut buf = RawBuf::<u32>::new(4);
        unsafe {
            buf.write(0, 1);
            buf.write(1, 2);
            buf.write(2, 3);
            buf.shift_right(1, 3);
            buf.write(1, 9);
            assert_eq!(buf.read(0), 1);
            assert_eq!(buf.read(1), 9);
            assert_eq!(buf.read(2), 2);
            assert_eq!(buf.read(3), 3);

            buf.shift_left(0, 4);
            assert_eq!(buf.read(0), 9);
            assert_eq!(buf.read(1), 2);
            assert_eq!(buf.read(2), 3);
        }
    }

    #[test]
    fn test_zero_capacity() {
        let mut buf = RawBuf::<u32>::new(0);
        assert_eq!(buf.capacity(), 0);
        unsafe {
            buf.realloc(0, 1);
        }
        assert_eq!(buf.capacity(), 1);
    }
}
