/*
   Seqcraft Lists: Linear and circular doubly linked lists whose
   nodes live in an arena and are addressed by index. Removed nodes
   go back to a free list and are reused by later inserts.

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

use crate::fl::FreeList;
use crate::node::InternalNode;
use core::marker::PhantomData;

/// An iterator over the elements of a
/// [`LinkedList`](crate::linkedlist::list::LinkedList) or a
/// [`CircularList`](crate::circularlist::list::CircularList), from the
/// head to the last node.
///
/// The iterator stops after visiting as many nodes as the list holds,
/// which is what ends a traversal of a circular list after exactly
/// one lap.
///
/// # Examples
/// ```
/// use seqcraft::lists::CircularList;
///
/// let list = CircularList::from(vec![1, 2, 3]);
/// let mut iter = list.iter();
/// assert_eq!(iter.next(), Some(&1));
/// assert_eq!(iter.next(), Some(&2));
/// assert_eq!(iter.next(), Some(&3));
/// assert_eq!(iter.next(), None);
/// ```
#[derive(Debug)]
pub struct Iter<'a, T> {
    fl: &'a FreeList<T>,
    cursor: Option<usize>,
    remaining: usize,
}

/// An iterator over the elements of a list with mutable references
/// that allows the values to be modified.
///
/// # Examples
/// ```
/// use seqcraft::lists::LinkedList;
///
/// let mut list = LinkedList::from(vec![1, 2, 3]);
/// for e in list.iter_mut() {
///     *e += 100;
/// }
/// assert_eq!(list.to_string(), "[ 101, 102, 103 ]");
/// ```
#[derive(Debug)]
pub struct IterMut<'a, T> {
    slots: *mut InternalNode<T>,
    cursor: Option<usize>,
    remaining: usize,
    _marker: PhantomData<&'a mut T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(fl: &'a FreeList<T>, head: Option<usize>, len: usize) -> Iter<'a, T> {
        Iter {
            fl,
            cursor: head,
            remaining: len,
        }
    }
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(fl: &'a mut FreeList<T>, head: Option<usize>, len: usize) -> IterMut<'a, T> {
        IterMut {
            slots: fl.slots_mut_ptr(),
            cursor: head,
            remaining: len,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.cursor?;
        self.cursor = self.fl.next(idx);
        self.remaining -= 1;
        Some(self.fl.val(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;
    fn next(&mut self) -> Option<&'a mut T> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.cursor?;
        self.remaining -= 1;
        // Every live node is visited at most once per lap and the
        // iterator stops after one lap, so no two returned references
        // point at the same slot.
        unsafe {
            let node = &mut *self.slots.add(idx);
            self.cursor = node.next;
            node.val.as_mut()
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}
