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

use crate::dynarray::buf::RawBuf;
use crate::error::SeqError;
use crate::render;
use core::cmp;
use core::fmt;
use core::fmt::{Debug, Display};
use core::iter::FromIterator;
use core::ops::{Index, IndexMut};
use core::ptr;
use core::slice;

/// The capacity of an array created with [`DynArray::new`].
pub const DEFAULT_CAPACITY: usize = 8;

/// A contiguous growable array that owns a single heap buffer of
/// `capacity` slots holding `len` live elements at `[0, len)`.
///
/// The capacity doubles whenever an [`append`](#method.append) or an
/// [`insert`](#method.insert) finds the array full. Removing an
/// element checks the occupancy of the buffer and if the length has
/// fallen to a quarter of the capacity or below, the capacity is
/// reduced to the smallest power of two that is strictly greater than
/// the length. Both growing and shrinking allocate a fresh buffer,
/// move the live elements across and release the old buffer.
///
/// # Getting Started
///
/// ```
/// use seqcraft::collections::DynArray;
///
/// let mut array = DynArray::from(vec![1, 2, 3, 4, 5]);
/// array.insert(2, 2).unwrap();
/// assert_eq!(array.to_string(), "[ 1, 2, 2, 3, 4, 5 ]");
///
/// array.remove(2).unwrap();
/// assert_eq!(array.pop_at(2), Ok(3));
/// assert_eq!(array.pop(), Ok(5));
/// assert_eq!(array.to_string(), "[ 1, 2, 4 ]");
/// ```
pub struct DynArray<T> {
    buf: RawBuf<T>,
    len: usize,
}

impl<T> Drop for DynArray<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        DynArray::new()
    }
}

impl<T> DynArray<T> {
    /// Creates an empty array with a capacity of
    /// [`DEFAULT_CAPACITY`](DEFAULT_CAPACITY) slots.
    ///
    /// # Examples
    /// ```
    /// use seqcraft::collections::DynArray;
    /// let array = DynArray::<i32>::new();
    /// assert_eq!(array.len(), 0);
    /// assert_eq!(array.capacity(), 8);
    /// ```
    pub fn new() -> DynArray<T> {
        DynArray::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty array with the specified capacity. An array
    /// with a capacity of 0 allocates a single slot on the first
    /// append and doubles from there.
    ///
    /// # Examples
    /// ```
    /// use seqcraft::collections::DynArray;
    /// let mut array = DynArray::with_capacity(0);
    /// array.append(1);
    /// assert_eq!(array.capacity(), 1);
    /// array.append(2);
    /// assert_eq!(array.capacity(), 2);
    /// array.append(3);
    /// assert_eq!(array.capacity(), 4);
    /// ```
    pub fn with_capacity(capacity: usize) -> DynArray<T> {
        DynArray {
            buf: RawBuf::new(capacity),
            len: 0,
        }
    }

    /// Returns the number of elements in the array.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots currently allocated.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns the live elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    /// Returns the live elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr(), self.len) }
    }

    /// Returns an iterator over the elements from the first to the
    /// last.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns an iterator that allows modifying each element.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns true if the array contains an element equal to `x`.
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.as_slice().contains(x)
    }

    /// Returns a reference to the element at `index` or
    /// [`SeqError::IndexOutOfRange`] if `index` is not in `[0, len)`.
    ///
    /// # Examples
    /// ```
    /// use seqcraft::collections::DynArray;
    /// use seqcraft::SeqError;
    ///
    /// let array = DynArray::from(vec![4, 5]);
    /// assert_eq!(array.get(1), Ok(&5));
    /// assert_eq!(array.get(2), Err(SeqError::IndexOutOfRange { index: 2, len: 2 }));
    /// ```
    pub fn get(&self, index: usize) -> Result<&T, SeqError> {
        let len = self.len;
        self.as_slice()
            .get(index)
            .ok_or(SeqError::IndexOutOfRange { index, len })
    }

    /// Returns a mutable reference to the element at `index` or
    /// [`SeqError::IndexOutOfRange`] if `index` is not in `[0, len)`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, SeqError> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(SeqError::IndexOutOfRange { index, len })
    }

    /// Adds an element to the end of the array, doubling the
    /// capacity first if the array is full.
    ///
    /// This method should complete in amortized *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use seqcraft::collections::DynArray;
    /// let mut array = DynArray::with_capacity(2);
    /// array.append(1);
    /// array.append(2);
    /// array.append(3);
    /// assert_eq!(array.get(2), Ok(&3));
    /// assert_eq!(array.capacity(), 4);
    /// ```
    pub fn append(&mut self, elem: T) {
        if self.len == self.capacity() {
            self.grow();
        }
        unsafe {
            self.buf.write(self.len, elem);
        }
        self.len += 1;
    }

    /// Inserts an element at `index`, moving every element at or
    /// after `index` one position to the right. Valid indices are
    /// `[0, len]` and inserting at `len` is the same as an append.
    ///
    /// The array is left untouched if the index is out of range.
    ///
    /// This method should complete in *O*(*n*) time.
    ///
    /// # Examples
    /// ```
    /// use seqcraft::collections::DynArray;
    /// let mut array = DynArray::from(vec![1, 3]);
    /// array.insert(2, 1).unwrap();
    /// array.insert(4, 3).unwrap();
    /// assert_eq!(array.as_slice(), &[1, 2, 3, 4]);
    /// assert!(array.insert(5, 9).is_err());
    /// ```
    pub fn insert(&mut self, elem: T, index: usize) -> Result<(), SeqError> {
        if index > self.len {
            return Err(SeqError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }

        if self.len == self.capacity() {
            self.grow();
        }

        unsafe {
            self.buf.shift_right(index, self.len);
            self.buf.write(index, elem);
        }
        self.len += 1;
        Ok(())
    }

    /// Removes and drops the element at `index`. Valid indices are
    /// `[0, len)`. If the removal leaves the array at a quarter of
    /// its capacity or less, the capacity is reduced to the smallest
    /// power of two strictly greater than the new length.
    ///
    /// This method should complete in *O*(*n*) time.
    ///
    /// # Examples
    /// ```
    /// use seqcraft::collections::DynArray;
    /// let mut array = DynArray::with_capacity(16);
    /// for i in 0..5 {
    ///     array.append(i);
    /// }
    ///
    /// array.remove(0).unwrap();
    /// // 4 elements in 16 slots: shrink to the next power of two above 4
    /// assert_eq!(array.capacity(), 8);
    /// assert_eq!(array.as_slice(), &[1, 2, 3, 4]);
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<(), SeqError> {
        self.pop_at(index).map(drop)
    }

    /// Removes the element at `index` and returns it. This behaves
    /// like [`remove`](#method.remove), including the capacity
    /// check.
    ///
    /// # Examples
    /// ```
    /// use seqcraft::collections::DynArray;
    /// let mut array = DynArray::from(vec![1, 2, 3, 4, 5]);
    /// assert_eq!(array.pop_at(2), Ok(3));
    /// assert_eq!(array.as_slice(), &[1, 2, 4, 5]);
    /// ```
    pub fn pop_at(&mut self, index: usize) -> Result<T, SeqError> {
        if index >= self.len {
            return Err(SeqError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }

        let elem = unsafe {
            let elem = self.buf.read(index);
            self.buf.shift_left(index, self.len);
            elem
        };
        self.len -= 1;
        self.shrink_if_sparse();
        Ok(elem)
    }

    /// Removes the last element and returns it, or returns
    /// [`SeqError::IndexOutOfRange`] if the array is empty.
    ///
    /// # Examples
    /// ```
    /// use seqcraft::collections::DynArray;
    /// let mut array = DynArray::from(vec![1, 2]);
    /// assert_eq!(array.pop(), Ok(2));
    /// assert_eq!(array.pop(), Ok(1));
    /// assert!(array.pop().is_err());
    /// ```
    pub fn pop(&mut self) -> Result<T, SeqError> {
        match self.len {
            0 => Err(SeqError::IndexOutOfRange { index: 0, len: 0 }),
            len => self.pop_at(len - 1),
        }
    }

    /// Removes and drops every element. The capacity is left
    /// unchanged.
    pub fn clear(&mut self) {
        let live: *mut [T] = ptr::slice_from_raw_parts_mut(self.buf.as_mut_ptr(), self.len);
        // forget the elements before dropping them so that a panic in
        // a destructor cannot lead to a double drop
        self.len = 0;
        unsafe {
            ptr::drop_in_place(live);
        }
    }

    fn grow(&mut self) {
        let capacity = match self.capacity() {
            0 => 1,
            c => c * 2,
        };
        unsafe {
            self.buf.realloc(self.len, capacity);
        }
    }

    fn shrink_if_sparse(&mut self) {
        let capacity = self.capacity();
        if self.len > capacity / 4 {
            return;
        }

        let target = (self.len + 1).next_power_of_two();
        if target < capacity {
            unsafe {
                self.buf.realloc(self.len, target);
            }
        }
    }
}

impl<T> Index<usize> for DynArray<T> {
    type Output = T;
    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Ok(elem) => elem,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> IndexMut<usize> for DynArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.get_mut(index) {
            Ok(elem) => elem,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: Display> Display for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::fmt_seq(f, self.iter())
    }
}

impl<T: Debug> Debug for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DynArray {{ len: {}, capacity: {}, elements: {:?} }}",
            self.len,
            self.capacity(),
            self.as_slice()
        )
    }
}

impl<T: Clone> Clone for DynArray<T> {
    fn clone(&self) -> Self {
        let mut array = DynArray::with_capacity(self.capacity());
        for elem in self.iter() {
            array.append(elem.clone());
        }
        array
    }
}

impl<T: PartialEq> PartialEq for DynArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynArray<T> {}

impl<T> Extend<T> for DynArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.append(elem);
        }
    }
}

impl<T> FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let mut array = DynArray::with_capacity(cmp::max(lower, DEFAULT_CAPACITY));
        array.extend(iter);
        array
    }
}

impl<T> From<Vec<T>> for DynArray<T> {
    fn from(elems: Vec<T>) -> Self {
        elems.into_iter().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for DynArray<T> {
    fn from(elems: [T; N]) -> Self {
        IntoIterator::into_iter(elems).collect()
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynArray<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
