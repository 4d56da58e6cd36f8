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

/// A doubly linked list that stores only its head. Every node owns a
/// value and the arena indices of its neighbours, the first node has
/// no predecessor and the last node has no successor.
///
/// Since there is no tail reference, appending and every positional
/// operation walk from the head and complete in *O*(*n*) time, while
/// [`stack_front`](#method.stack_front) and the handle based methods
/// complete in *O*(*1*) time.
///
/// Nodes are allocated from an internal free list that starts with
/// the requested capacity and doubles whenever it runs out. Removed
/// nodes return to the free list and the capacity is released when
/// the list is dropped.
///
/// # Getting Started
///
/// ```
/// use seqcraft::lists::LinkedList;
///
/// let mut list = LinkedList::new();
/// list.append(1);
/// list.append(3);
/// list.stack_front(0);
/// list.insert(2, 2).unwrap();
/// assert_eq!(list.to_string(), "[ 0, 1, 2, 3 ]");
///
/// assert_eq!(list.pop_at(1), Ok(1));
/// assert_eq!(list.pop(), Ok(3));
/// assert_eq!(list.to_string(), "[ 0, 2 ]");
/// ```
pub struct LinkedList<T> {
    cid: usize,
    nid: usize,
    head: Option<usize>,
    len: usize,
    fl: FreeList<T>,
}

impl<T> LinkedList<T> {
    /// Creates an empty linked list with a default capacity.
    ///
    /// # Examples
    /// ```
    /// use seqcraft::lists::LinkedList;
    /// let list = LinkedList::<i32>::new();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.capacity(), 8);
    /// ```
    pub fn new() -> LinkedList<T> {
        LinkedList::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty linked list with the specified capacity. The
    /// list allocates additional nodes by doubling the capacity every
    /// time the capacity is exceeded, and does not give memory back
    /// when elements are removed.
    ///
    /// If the capacity is 0, one node is allocated every time an
    /// element is added to a full list.
    ///
    /// # Examples
    /// ```
    /// use seqcraft::lists::LinkedList;
    /// let mut list = LinkedList::with_capacity(2);
    /// list.append(1);
    /// list.append(2);
    /// assert_eq!(list.capacity(), 2);
    /// list.append(3);
    /// assert_eq!(list.capacity(), 4);
    /// ```
    pub fn with_capacity(capacity: usize) -> LinkedList<T> {
        LinkedList {
            cid: inc_cid(),
            nid: 0,
            head: None,
            len: 0,
            fl: FreeList::new(capacity),
        }
    }

    /// Returns the number of elements in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of nodes allocated by the list, whether
    /// they hold an element or sit on the free list.
    pub fn capacity(&self) -> usize {
        self.len + self.fl.len()
    }

    /// Returns an iterator from the head to the last node.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.fl, self.head, self.len)
    }

    /// Returns an iterator from the head to the last node that allows
    /// the values to be modified.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.fl, self.head, self.len)
    }

    /// Returns true if the list contains an element equal to `x`.
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Removes and drops every element. The nodes go back to the free
    /// list so the capacity is unchanged.
    ///
    /// The release loop is bounded by the length of the list rather
    /// than by the end of the chain.
    ///
    /// # Examples
    /// ```
    /// use seqcraft::lists::LinkedList;
    /// let mut list = LinkedList::from(vec![1, 2, 3]);
    /// list.clear();
    /// assert!(list.is_empty());
    /// assert_eq!(list.capacity(), 3);
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

    /// Returns a reference to the first element or `None` if the list
    /// is empty.
    pub fn head(&self) -> Option<&T> {
        self.head.map(|idx| self.fl.val(idx))
    }

    /// Returns a reference to the last element or `None` if the list
    /// is empty. The list has no tail reference so this walks the
    /// list.
    pub fn tail(&self) -> Option<&T> {
        self.last_idx().map(|idx| self.fl.val(idx))
    }

    /// Returns a reference to the element at `index` or
    /// [`SeqError::IndexOutOfRange`] if `index` is not in `[0, len)`.
    ///
    /// # Examples
    /// ```
    /// use seqcraft::lists::LinkedList;
    /// use seqcraft::SeqError;
    ///
    /// let list = LinkedList::from(vec![5, 6]);
    /// assert_eq!(list.get(1), Ok(&6));
    /// assert_eq!(list.get(2), Err(SeqError::IndexOutOfRange { index: 2, len: 2 }));
    /// ```
    pub fn get(&self, index: usize) -> Result<&T, SeqError> {
        let idx = self.checked_idx(index)?;
        Ok(self.fl.val(idx))
    }

    /// Returns a mutable reference to the element at `index` or
    /// [`SeqError::IndexOutOfRange`] if `index` is not in `[0, len)`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, SeqError> {
        let idx = self.checked_idx(index)?;
        Ok(self.fl.val_mut(idx))
    }

    /// Adds an element after the last node and returns a handle to
    /// the new node.
    ///
    /// This method should complete in *O*(*n*) time.
    pub fn append(&mut self, elem: T) -> Node<T> {
        let nid = nid_inc!(self.nid);
        let new_idx = self.fl.acquire(elem, nid);

        match self.last_idx() {
            None => self.head = Some(new_idx),
            Some(last) => {
                self.fl.set_next(last, Some(new_idx));
                self.fl.set_prev(new_idx, Some(last));
            }
        }

        self.len += 1;
        Node::new(self.cid, nid, new_idx)
    }

    /// Adds an element before the head, making it the new head, and
    /// returns a handle to the new node.
    ///
    /// This method should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use seqcraft::lists::LinkedList;
    /// let mut list = LinkedList::new();
    /// list.stack_front(1);
    /// list.stack_front(2);
    /// assert_eq!(list.head(), Some(&2));
    /// assert_eq!(list.tail(), Some(&1));
    /// ```
    pub fn stack_front(&mut self, elem: T) -> Node<T> {
        let nid = nid_inc!(self.nid);
        let new_idx = self.fl.acquire(elem, nid);

        if let Some(head) = self.head {
            self.fl.set_prev(head, Some(new_idx));
            self.fl.set_next(new_idx, Some(head));
        }
        self.head = Some(new_idx);

        self.len += 1;
        Node::new(self.cid, nid, new_idx)
    }

    /// Inserts an element so that it ends up at position `index` and
    /// returns a handle to the new node. Valid indices are `[0, len]`:
    /// inserting at 0 is a [`stack_front`](#method.stack_front) and
    /// inserting at `len` is an [`append`](#method.append).
    ///
    /// The list is left untouched if the index is out of range.
    ///
    /// This method should complete in *O*(*n*) time.
    ///
    /// # Examples
    /// ```
    /// use seqcraft::lists::LinkedList;
    /// let mut list = LinkedList::from(vec![1, 3]);
    /// list.insert(2, 1).unwrap();
    /// list.insert(4, 3).unwrap();
    /// assert_eq!(list.to_string(), "[ 1, 2, 3, 4 ]");
    /// assert!(list.insert(9, 9).is_err());
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

        let at = self.checked_idx(index)?;
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
        Ok(Node::new(self.cid, nid, new_idx))
    }

    /// Removes and drops the element at `index`. Valid indices are
    /// `[0, len)`.
    ///
    /// This method should complete in *O*(*n*) time.
    pub fn remove(&mut self, index: usize) -> Result<(), SeqError> {
        self.pop_at(index).map(drop)
    }

    /// Removes the element at `index` and returns it. Valid indices
    /// are `[0, len)`.
    ///
    /// # Examples
    /// ```
    /// use seqcraft::lists::LinkedList;
    /// let mut list = LinkedList::from(vec![1, 2, 3]);
    /// assert_eq!(list.pop_at(0), Ok(1));
    /// assert_eq!(list.head(), Some(&2));
    /// assert!(list.pop_at(2).is_err());
    /// ```
    pub fn pop_at(&mut self, index: usize) -> Result<T, SeqError> {
        let idx = self.checked_idx(index)?;
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

    /// Returns a handle to the node after the specified node. Returns
    /// `None` if the handle is invalid or the node is the last one.
    ///
    /// # Examples
    /// ```
    /// use seqcraft::lists::LinkedList;
    /// let mut list = LinkedList::new();
    /// let first = list.append(1);
    /// let second = list.append(2);
    /// assert_eq!(list.next_node(&first), Some(second));
    /// assert_eq!(list.next_node(&second), None);
    /// ```
    pub fn next_node(&self, node: &Node<T>) -> Option<Node<T>> {
        let idx = self.node_idx(node)?;
        self.fl.next(idx).map(|next| self.handle(next))
    }

    /// Returns a handle to the node before the specified node.
    /// Returns `None` if the handle is invalid or the node is the
    /// head.
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

    /// Removes the specified node and returns its value, or returns
    /// `None` if the handle is invalid. The handle is invalid
    /// afterwards.
    ///
    /// This method should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use seqcraft::lists::LinkedList;
    /// let mut list = LinkedList::new();
    /// list.append(1);
    /// let node = list.append(2);
    /// list.append(3);
    /// assert_eq!(list.pop_node(&node), Some(2));
    /// assert_eq!(list.pop_node(&node), None);
    /// assert_eq!(list.to_string(), "[ 1, 3 ]");
    /// ```
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

    fn checked_idx(&self, index: usize) -> Result<usize, SeqError> {
        if index >= self.len {
            return Err(SeqError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.walk(index).ok_or(SeqError::IndexOutOfRange {
            index,
            len: self.len,
        })
    }

    fn walk(&self, steps: usize) -> Option<usize> {
        let mut cur = self.head?;
        for _ in 0..steps {
            cur = self.fl.next(cur)?;
        }
        Some(cur)
    }

    fn last_idx(&self) -> Option<usize> {
        match self.len {
            0 => None,
            len => self.walk(len - 1),
        }
    }

    fn pop_idx(&mut self, idx: usize) -> T {
        let prev = self.fl.prev(idx);
        let next = self.fl.next(idx);

        match prev {
            None => self.head = next,
            Some(prev) => self.fl.set_next(prev, next),
        }

        if let Some(next) = next {
            self.fl.set_prev(next, prev);
        }

        self.len -= 1;
        self.fl.release(idx)
    }
}

impl_list_traits!(LinkedList);

impl<T> Index<usize> for LinkedList<T> {
    type Output = T;
    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Ok(elem) => elem,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> IndexMut<usize> for LinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.get_mut(index) {
            Ok(elem) => elem,
            Err(e) => panic!("{}", e),
        }
    }
}
