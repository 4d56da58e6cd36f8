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
use crate::iter::{Iter, IterMut};
use crate::node::{inc_cid, Node};
use core::ops::{Index, IndexMut};
use seqcraft_collections::error::SeqError;

const DEFAULT_CAPACITY: usize = 8;

/// A circular doubly linked list. The list stores its head and
/// reaches the last node through the head's predecessor, so both
/// ends can be modified in *O*(*1*) time.
///
/// Positions that name an existing element wrap around the circle:
/// [`get`](#method.get), [`get_mut`](#method.get_mut), indexing,
/// [`remove`](#method.remove) and [`pop_at`](#method.pop_at) use
/// `index % len` and only fail with [`SeqError::IndexOutOfRange`]
/// when the list is empty, so `remove(len)` on a non-empty circle
/// removes the head rather than failing. [`insert`](#method.insert)
/// names a gap between two elements and accepts `[0, len]` only.
///
/// Nodes come from an internal free list in the same way as for the
/// [`LinkedList`](crate::linkedlist::list::LinkedList).
///
/// # Getting Started
///
/// ```
/// use seqcraft::lists::CircularList;
///
/// let mut list: CircularList<i32> = (1..=5).collect();
/// assert_eq!(list[0], 1);
/// assert_eq!(list[5], 1);
/// assert_eq!(list[7], 3);
///
/// list.stack_front(0);
/// assert_eq!(list.to_string(), "[ 0, 1, 2, 3, 4, 5 ]");
/// assert_eq!(list.pop_at(8), Ok(2));
/// assert_eq!(list.pop(), Ok(5));
/// assert_eq!(list.to_string(), "[ 0, 1, 3, 4 ]");
/// ```
pub struct CircularList<T> {
    cid: usize,
    nid: usize,
    head: Option<usize>,
    len: usize,
    fl: FreeList<T>,
}

impl<T> CircularList<T> {
    /// Creates an empty circular list with a default capacity.
    pub fn new() -> CircularList<T> {
        CircularList::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty circular list with the specified capacity.
    /// The capacity doubles every time it is exceeded and is not
    /// given back when elements are removed.
    ///
    /// # Examples
    /// ```
    /// use seqcraft::lists::CircularList;
    /// let mut list = CircularList::with_capacity(1);
    /// list.append(1);
    /// assert_eq!(list.capacity(), 1);
    /// list.append(2);
    /// assert_eq!(list.capacity(), 2);
    /// ```
    pub fn with_capacity(capacity: usize) -> CircularList<T> {
        CircularList {
            cid: inc_cid(),
            nid: 0,
            head: None,
            len: 0,
            fl: FreeList::new(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of nodes allocated by the list, whether
    /// they hold an element or sit on the free list.
    pub fn capacity(&self) -> usize {
        self.len + self.fl.len()
    }

    /// Returns an iterator that makes exactly one lap of the circle
    /// starting at the head.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.fl, self.head, self.len)
    }

    /// Returns an iterator that makes exactly one lap of the circle
    /// starting at the head and allows the values to be modified.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.fl, self.head, self.len)
    }

    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Removes and drops every element. The release loop runs once
    /// per element rather than until it gets back to the head.
    ///
    /// # Examples
    /// ```
    /// use seqcraft::lists::CircularList;
    /// let mut list = CircularList::from(vec![1, 2, 3]);
    /// list.clear();
    /// assert!(list.is_empty());
    /// assert_eq!(list.to_string(), "[ ]");
    /// ```
    pub fn clear(&mut self) {
        let mut cur = self.head;
        for _ in 0..self.len {
            match cur {
                None => break,
                Some(idx) => {
                    cur = self.fl.next(idx);
                    drop(self.fl.release(idx));
                }
            }
        }
        self.head = None;
        self.len = 0;
    }

    /// Returns a reference to the head or `None` if the list is
    /// empty.
    pub fn head(&self) -> Option<&T> {
        self.head.map(|idx| self.fl.val(idx))
    }

    /// Returns a reference to the last element, the head's
    /// predecessor, or `None` if the list is empty.
    pub fn tail(&self) -> Option<&T> {
        self.last_idx().map(|idx| self.fl.val(idx))
    }

    /// Returns a reference to the element at `index % len` or
    /// [`SeqError::IndexOutOfRange`] if the list is empty.
    ///
    /// # Examples
    /// ```
    /// use seqcraft::lists::CircularList;
    /// use seqcraft::SeqError;
    ///
    /// let mut list = CircularList::new();
    /// assert_eq!(list.get(0), Err(SeqError::IndexOutOfRange { index: 0, len: 0 }));
    /// list.append(7);
    /// list.append(8);
    /// assert_eq!(list.get(3), Ok(&8));
    /// ```
    pub fn get(&self, index: usize) -> Result<&T, SeqError> {
        let idx = self.wrapped_idx(index)?;
        Ok(self.fl.val(idx))
    }

    /// Returns a mutable reference to the element at `index % len` or
    /// [`SeqError::IndexOutOfRange`] if the list is empty.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, SeqError> {
        let idx = self.wrapped_idx(index)?;
        Ok(self.fl.val_mut(idx))
    }

    /// Adds an element between the last node and the head. The head
    /// is unchanged unless the list was empty.
    ///
    /// This method should complete in *O*(*1*) time.
    pub fn append(&mut self, elem: T) -> Node<T> {
        let new_idx = self.link_before_head(elem);
        if self.head.is_none() {
            self.head = Some(new_idx);
        }
        self.handle(new_idx)
    }

    /// Adds an element between the last node and the head and makes
    /// it the new head.
    ///
    /// This method should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use seqcraft::lists::CircularList;
    /// let mut list = CircularList::from(vec![1, 2]);
    /// list.stack_front(0);
    /// assert_eq!(list.head(), Some(&0));
    /// assert_eq!(list.tail(), Some(&2));
    /// ```
    pub fn stack_front(&mut self, elem: T) -> Node<T> {
        let new_idx = self.link_before_head(elem);
        self.head = Some(new_idx);
        self.handle(new_idx)
    }

    /// Inserts an element so that it ends up at position `index` and
    /// returns a handle to the new node. Valid indices are `[0, len]`
    /// and are not wrapped: inserting at 0 is a
    /// [`stack_front`](#method.stack_front) and inserting at `len` is
    /// an [`append`](#method.append).
    ///
    /// # Examples
    /// ```
    /// use seqcraft::lists::CircularList;
    /// let mut list = CircularList::from(vec![1, 3]);
    /// list.insert(2, 1).unwrap();
    /// list.insert(4, 3).unwrap();
    /// assert_eq!(list.to_string(), "[ 1, 2, 3, 4 ]");
    /// assert!(list.insert(5, 5).is_err());
    /// ```
    pub fn insert(&mut self, elem: T, index: usize) -> Result<Node<T>, SeqError> {
        if index > self.len {
            return Err(SeqError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        if index == 0 {
            return Ok(self.stack_front(elem));
        }
        if index == self.len {
            return Ok(self.append(elem));
        }

        let at = self.wrapped_idx(index)?;
        let new_idx = self.link_before(at, elem);
        Ok(self.handle(new_idx))
    }

    /// Removes and drops the element at `index % len`. Fails only if
    /// the list is empty.
    pub fn remove(&mut self, index: usize) -> Result<(), SeqError> {
        self.pop_at(index).map(drop)
    }

    /// Removes the element at `index % len` and returns it. Fails
    /// only if the list is empty.
    ///
    /// # Examples
    /// ```
    /// use seqcraft::lists::CircularList;
    /// let mut list = CircularList::from(vec![1, 2, 3]);
    /// assert_eq!(list.pop_at(4), Ok(2));
    /// assert_eq!(list.to_string(), "[ 1, 3 ]");
    /// ```
    pub fn pop_at(&mut self, index: usize) -> Result<T, SeqError> {
        let idx = self.wrapped_idx(index)?;
        Ok(self.pop_idx(idx))
    }

    /// Removes the last element and returns it, or returns
    /// [`SeqError::IndexOutOfRange`] if the list is empty.
    pub fn pop(&mut self) -> Result<T, SeqError> {
        match self.last_idx() {
            None => Err(SeqError::IndexOutOfRange { index: 0, len: 0 }),
            Some(idx) => Ok(self.pop_idx(idx)),
        }
    }

    /// Returns a handle to the head node or `None` if the list is
    /// empty.
    pub fn head_node(&self) -> Option<Node<T>> {
        self.head.map(|idx| self.handle(idx))
    }

    /// Returns a handle to the successor of the specified node, which
    /// is the head when the node is the last one. Returns `None` only
    /// if the handle is invalid.
    ///
    /// # Examples
    /// ```
    /// use seqcraft::lists::CircularList;
    /// let mut list = CircularList::new();
    /// let first = list.append(1);
    /// let second = list.append(2);
    /// assert_eq!(list.next_node(&first), Some(second));
    /// assert_eq!(list.next_node(&second), Some(first));
    /// ```
    pub fn next_node(&self, node: &Node<T>) -> Option<Node<T>> {
        let idx = self.node_idx(node)?;
        self.fl.next(idx).map(|next| self.handle(next))
    }

    /// Returns a handle to the predecessor of the specified node,
    /// which is the last node when the node is the head. Returns
    /// `None` only if the handle is invalid.
    pub fn prev_node(&self, node: &Node<T>) -> Option<Node<T>> {
        let idx = self.node_idx(node)?;
        self.fl.prev(idx).map(|prev| self.handle(prev))
    }

    /// Returns a reference to the value of the specified node or
    /// `None` if the handle is invalid.
    pub fn node(&self, node: &Node<T>) -> Option<&T> {
        self.node_idx(node).map(|idx| self.fl.val(idx))
    }

    /// Returns a mutable reference to the value of the specified node
    /// or `None` if the handle is invalid.
    pub fn node_mut(&mut self, node: &Node<T>) -> Option<&mut T> {
        let idx = self.node_idx(node)?;
        Some(self.fl.val_mut(idx))
    }

    /// Removes the specified node from the circle and returns its
    /// value, or returns `None` if the handle is invalid. Removing the
    /// head makes its successor the new head.
    ///
    /// This method should complete in *O*(*1*) time.
    pub fn pop_node(&mut self, node: &Node<T>) -> Option<T> {
        let idx = self.node_idx(node)?;
        Some(self.pop_idx(idx))
    }

    //Private Helpers

    fn handle(&self, idx: usize) -> Node<T> {
        Node::new(self.cid, self.fl.nid(idx), idx)
    }

    fn node_idx(&self, node: &Node<T>) -> Option<usize> {
        if node.cid != self.cid {
            return None;
        }
        if !self.fl.is_live(node.idx, node.nid) {
            return None;
        }
        Some(node.idx)
    }

    fn last_idx(&self) -> Option<usize> {
        self.head.and_then(|head| self.fl.prev(head))
    }

    // Walks from the head in whichever direction reaches
    // `index % len` in fewer steps.
    fn wrapped_idx(&self, index: usize) -> Result<usize, SeqError> {
        let out_of_range = SeqError::IndexOutOfRange {
            index,
            len: self.len,
        };
        let head = match self.head {
            Some(head) if self.len > 0 => head,
            _ => return Err(out_of_range),
        };

        let pos = index % self.len;
        let mut cur = head;
        if pos <= self.len / 2 {
            for _ in 0..pos {
                cur = self.fl.next(cur).ok_or(out_of_range)?;
            }
        } else {
            for _ in 0..self.len - pos {
                cur = self.fl.prev(cur).ok_or(out_of_range)?;
            }
        }
        Ok(cur)
    }

    // Links a new node between the last node and the head, or as a
    // single node ring if the list is empty. The head is not moved.
    fn link_before_head(&mut self, elem: T) -> usize {
        match self.head {
            Some(head) => self.link_before(head, elem),
            None => {
                let nid = nid_inc!(self.nid);
                let new_idx = self.fl.acquire(elem, nid);
                self.fl.set_next(new_idx, Some(new_idx));
                self.fl.set_prev(new_idx, Some(new_idx));
                self.len += 1;
                new_idx
            }
        }
    }

    fn link_before(&mut self, at: usize, elem: T) -> usize {
        let before = self.fl.prev(at);
        let nid = nid_inc!(self.nid);
        let new_idx = self.fl.acquire(elem, nid);

        self.fl.set_prev(new_idx, before);
        self.fl.set_next(new_idx, Some(at));
        if let Some(before) = before {
            self.fl.set_next(before, Some(new_idx));
        }
        self.fl.set_prev(at, Some(new_idx));

        self.len += 1;
        new_idx
    }

    fn pop_idx(&mut self, idx: usize) -> T {
        if self.len == 1 {
            self.head = None;
        } else {
            let prev = self.fl.prev(idx);
            let next = self.fl.next(idx);
            if let Some(prev) = prev {
                self.fl.set_next(prev, next);
            }
            if let Some(next) = next {
                self.fl.set_prev(next, prev);
            }
            if self.head == Some(idx) {
                self.head = next;
            }
        }

        self.len -= 1;
        self.fl.release(idx)
    }
}

impl_list_traits!(CircularList);

impl<T> Index<usize> for CircularList<T> {
    type Output = T;
    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Ok(elem) => elem,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> IndexMut<usize> for CircularList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.get_mut(index) {
            Ok(elem) => elem,
            Err(e) => panic!("{}", e),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use quickcheck_macros::quickcheck;
    use rand::Rng;
    use std::cell::Cell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    // Makes one lap in each direction and checks that the ring closes
    // on the head, that every next link is mirrored by a prev link
    // and that the values match.
    macro_rules! assert_ring {
        ($cl: ident, $expected: expr) => {
            let expected: Vec<_> = $expected.iter().copied().collect();
            assert_eq!($cl.len(), expected.len());
            match $cl.head {
                None => assert!(expected.is_empty()),
                Some(head) => {
                    let mut forward = Vec::new();
                    let mut cur = head;
                    for _ in 0..$cl.len() {
                        let next = $cl.fl.next(cur).unwrap();
                        assert_eq!($cl.fl.prev(next), Some(cur));
                        forward.push(*$cl.fl.val(cur));
                        cur = next;
                    }
                    assert_eq!(cur, head);
                    assert_eq!(forward, expected);

                    let mut backward = Vec::new();
                    for _ in 0..$cl.len() {
                        cur = $cl.fl.prev(cur).unwrap();
                        backward.push(*$cl.fl.val(cur));
                    }
                    assert_eq!(cur, head);
                    backward.reverse();
                    assert_eq!(backward, expected);
                }
            }
            assert_eq!($cl.iter().copied().collect::<Vec<_>>(), expected);
            assert_eq!($cl.head(), expected.first());
            assert_eq!($cl.tail(), expected.last());
        };
    }

    macro_rules! assert_empty {
        ($cl: ident) => {
            assert!($cl.head.is_none());
            assert_eq!($cl.len(), 0);
            assert!($cl.is_empty());
            assert!($cl.head().is_none());
            assert!($cl.tail().is_none());
        };
    }

    macro_rules! assert_out_of_range {
        ($result: expr, $index: expr, $len: expr) => {
            assert_eq!(
                $result,
                Err(SeqError::IndexOutOfRange {
                    index: $index,
                    len: $len
                })
            );
        };
    }

    struct DropCounter {
        drops: Rc<Cell<usize>>,
    }

    impl Drop for DropCounter {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    #[test]
    fn test_single_node_ring() {
        let mut cl = CircularList::<u8>::new();
        let node = cl.append(1);
        assert_ring!(cl, [1]);
        let idx = node.idx;
        assert_eq!(cl.fl.next(idx), Some(idx));
        assert_eq!(cl.fl.prev(idx), Some(idx));
        assert_eq!(cl.next_node(&node), Some(node));
        assert_eq!(cl.prev_node(&node), Some(node));

        assert_eq!(cl.pop_at(0), Ok(1));
        assert_empty!(cl);
        assert_eq!(cl.node(&node), None);
    }

    #[test]
    fn test_append() {
        let mut cl = CircularList::<u8>::new();
        for i in 1..=8 {
            cl.append(i);
        }
        assert_ring!(cl, [1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(cl.to_string(), "[ 1, 2, 3, 4, 5, 6, 7, 8 ]");
    }

    #[test]
    fn test_stack_front() {
        let mut cl = CircularList::<u8>::new();
        cl.stack_front(3);
        assert_ring!(cl, [3]);
        cl.stack_front(2);
        assert_ring!(cl, [2, 3]);
        cl.stack_front(1);
        assert_ring!(cl, [1, 2, 3]);
        cl.append(4);
        assert_ring!(cl, [1, 2, 3, 4]);
    }

    #[test]
    fn test_insert() {
        let mut cl: CircularList<u8> = (1..=8).collect();
        cl.insert(0, 0).unwrap();
        assert_ring!(cl, [0, 1, 2, 3, 4, 5, 6, 7, 8]);
        cl.insert(9, 8).unwrap();
        assert_ring!(cl, [0, 1, 2, 3, 4, 5, 6, 7, 9, 8]);
        cl.insert(10, 10).unwrap();
        assert_ring!(cl, [0, 1, 2, 3, 4, 5, 6, 7, 9, 8, 10]);
        cl.insert(11, 1).unwrap();
        assert_ring!(cl, [0, 11, 1, 2, 3, 4, 5, 6, 7, 9, 8, 10]);
        // inserts are not wrapped
        assert_out_of_range!(cl.insert(12, 13).map(|_| ()), 13, 12);
        assert_eq!(cl.len(), 12);
    }

    #[test]
    fn test_remove() {
        let mut cl: CircularList<u8> = (1..=8).collect();
        cl.insert(0, 0).unwrap();
        cl.remove(0).unwrap();
        assert_ring!(cl, [1, 2, 3, 4, 5, 6, 7, 8]);
        cl.remove(7).unwrap();
        assert_ring!(cl, [1, 2, 3, 4, 5, 6, 7]);
        cl.remove(3).unwrap();
        assert_ring!(cl, [1, 2, 3, 5, 6, 7]);
        // wraps to 9 % 6 = 3
        cl.remove(9).unwrap();
        assert_ring!(cl, [1, 2, 3, 6, 7]);
    }

    #[test]
    fn test_remove_at_len_removes_head() {
        let mut cl: CircularList<u8> = (1..=3).collect();
        assert_eq!(cl.remove(3), Ok(()));
        assert_ring!(cl, [2, 3]);
        assert_eq!(cl.pop_at(2), Ok(2));
        assert_ring!(cl, [3]);
        assert_eq!(cl.remove(usize::MAX), Ok(()));
        assert_empty!(cl);
        assert_out_of_range!(cl.remove(0), 0, 0);
    }

    #[test]
    fn test_pop() {
        let mut cl: CircularList<u8> = (1..=8).collect();
        assert_eq!(cl.pop(), Ok(8));
        assert_ring!(cl, [1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(cl.len(), 7);
        assert_eq!(cl[4], 5);
        assert_eq!(cl.pop_at(10), Ok(4));
        assert_ring!(cl, [1, 2, 3, 5, 6, 7]);
        assert_eq!(cl.pop_at(0), Ok(1));
        assert_ring!(cl, [2, 3, 5, 6, 7]);
        while !cl.is_empty() {
            cl.pop().unwrap();
        }
        assert_empty!(cl);
        assert_out_of_range!(cl.pop(), 0, 0);
        assert_out_of_range!(cl.pop_at(3), 3, 0);
        assert_out_of_range!(cl.remove(1), 1, 0);
    }

    #[test]
    fn test_index_wraps() {
        let mut cl = CircularList::from(vec![10, 20, 30]);
        assert_eq!(cl[0], 10);
        assert_eq!(cl[3], 10);
        assert_eq!(cl[5], 30);
        assert_eq!(cl.get(usize::MAX), Ok(&10));
        cl[4] = 21;
        *cl.get_mut(8).unwrap() += 1;
        assert_ring!(cl, [10, 21, 31]);
    }

    #[test]
    #[should_panic(expected = "index out of range: the len is 0 but the index is 4")]
    fn test_index_empty() {
        let cl = CircularList::<u8>::new();
        let _elem = cl[4];
    }

    #[test]
    fn test_empty() {
        let mut cl = CircularList::<i32>::new();
        assert_empty!(cl);
        assert_out_of_range!(cl.get(0), 0, 0);
        assert_out_of_range!(cl.get_mut(2).map(|_| ()), 2, 0);
        assert_eq!(cl.head_node(), None);
        assert_eq!(cl.to_string(), "[ ]");
    }

    #[test]
    fn test_handles() {
        let mut cl = CircularList::new();
        let first = cl.append(1);
        let second = cl.append(2);
        let third = cl.append(3);

        assert_eq!(cl.head_node(), Some(first));
        assert_eq!(cl.next_node(&third), Some(first));
        assert_eq!(cl.prev_node(&first), Some(third));

        // popping the head moves it to the successor
        assert_eq!(cl.pop_node(&first), Some(1));
        assert_eq!(cl.head_node(), Some(second));
        assert_eq!(cl.next_node(&third), Some(second));
        assert_eq!(cl.next_node(&first), None);
        assert_ring!(cl, [2, 3]);

        *cl.node_mut(&third).unwrap() = 30;
        assert_eq!(cl.node(&third), Some(&30));
        let other = CircularList::<i32>::from(vec![1]);
        assert_eq!(other.node(&third), None);
    }

    #[test]
    fn test_clear_is_count_driven() {
        let drops = Rc::new(Cell::new(0));
        let mut cl = CircularList::with_capacity(2);
        for _ in 0..7 {
            cl.append(DropCounter {
                drops: drops.clone(),
            });
        }
        cl.remove(5).unwrap();
        assert_eq!(drops.get(), 1);
        cl.clear();
        assert_eq!(drops.get(), 7);
        assert_empty!(cl);
        assert_eq!(cl.capacity(), 8);

        cl.append(DropCounter {
            drops: drops.clone(),
        });
        drop(cl);
        assert_eq!(drops.get(), 8);
    }

    #[test]
    fn test_iter_one_lap() {
        let mut cl: CircularList<i32> = (0..5).collect();
        assert_eq!(cl.iter().count(), 5);
        for val in cl.iter_mut() {
            *val += 1;
        }
        assert_eq!(cl.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
        assert!(cl.contains(&5));
        assert!(!cl.contains(&0));
    }

    #[test]
    fn test_debug() {
        let cl = CircularList::from([1, 2]);
        assert_eq!(
            format!("{:?}", cl),
            "CircularList { len: 2, capacity: 2, elements: [1, 2] }"
        );
    }

    #[test]
    fn test_random_ops_against_vecdeque() {
        let mut rng = rand::thread_rng();
        let mut cl = CircularList::with_capacity(0);
        let mut model: VecDeque<u32> = VecDeque::new();

        for _ in 0..1000 {
            let val: u32 = rng.gen();
            match rng.gen_range(0..6) {
                0 => {
                    cl.append(val);
                    model.push_back(val);
                }
                1 => {
                    cl.stack_front(val);
                    model.push_front(val);
                }
                2 => {
                    let index = rng.gen_range(0..=model.len());
                    cl.insert(val, index).unwrap();
                    model.insert(index, val);
                }
                3 => {
                    let index: usize = rng.gen_range(0..1000);
                    if model.is_empty() {
                        assert!(cl.pop_at(index).is_err());
                    } else {
                        let wrapped = index % model.len();
                        assert_eq!(cl.pop_at(index).ok(), model.remove(wrapped));
                    }
                }
                4 => {
                    let index: usize = rng.gen_range(0..1000);
                    if !model.is_empty() {
                        assert_eq!(cl.get(index).ok(), model.get(index % model.len()));
                    }
                }
                _ => {
                    assert_eq!(cl.pop().ok(), model.pop_back());
                }
            }
        }
        assert_ring!(cl, model);
    }

    #[quickcheck]
    fn prop_index_wraps(elems: Vec<i32>, index: usize) -> bool {
        if elems.is_empty() {
            return true;
        }
        let cl = CircularList::from(elems.clone());
        cl.get(index) == cl.get(index % elems.len()) && cl[index] == elems[index % elems.len()]
    }

    #[quickcheck]
    fn prop_insert_remove_inverse(elems: Vec<i32>, val: i32, index: usize) -> bool {
        let mut cl = CircularList::from(elems.clone());
        let index = index % (elems.len() + 1);
        cl.insert(val, index).unwrap();
        cl.remove(index).unwrap();
        cl.iter().copied().eq(elems.into_iter())
    }

    #[quickcheck]
    fn prop_append_then_read_last(elems: Vec<i32>, val: i32) -> bool {
        let mut cl = CircularList::from(elems);
        let len = cl.len();
        cl.append(val);
        cl.len() == len + 1 && cl.get(len) == Ok(&val) && cl.tail() == Some(&val)
    }

    #[quickcheck]
    fn prop_pop_at_returns_read(elems: Vec<i32>, indices: Vec<usize>) -> bool {
        let mut cl = CircularList::from(elems);
        for index in indices {
            if cl.is_empty() {
                return cl.pop_at(index).is_err();
            }
            let len = cl.len();
            let read = cl[index];
            if cl.pop_at(index) != Ok(read) || cl.len() != len - 1 {
                return false;
            }
        }
        true
    }
}
