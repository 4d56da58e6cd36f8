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

use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct InternalNode<T> {
    pub(crate) val: Option<T>,
    pub(crate) nid: usize,
    pub(crate) prev: Option<usize>,
    pub(crate) next: Option<usize>,
}

/// A handle to a node in a [`LinkedList`] or a [`CircularList`].
///
/// A handle records the list it came from, the arena slot of the
/// node and the id the node was given when it was inserted. It does
/// not borrow the list, so handles can be copied and passed around
/// by value. Once the element that the handle refers to is removed,
/// the handle becomes invalid and stays invalid even if the slot is
/// reused by a later insert. Passing an invalid handle, or a handle
/// from another list, to a list is safe: every method that accepts a
/// handle returns `None` if the handle is invalid.
///
/// [`LinkedList`]: crate::linkedlist::list::LinkedList
/// [`CircularList`]: crate::circularlist::list::CircularList
pub struct Node<T> {
    pub(crate) cid: usize,
    pub(crate) nid: usize,
    pub(crate) idx: usize,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Node<T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<T> Copy for Node<T> {}

impl<T> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cid == other.cid && self.nid == other.nid && self.idx == other.idx
    }
}

impl<T> Eq for Node<T> {}

impl<T> Hash for Node<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.cid.hash(state);
        self.nid.hash(state);
        self.idx.hash(state);
    }
}

impl<T> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Node {{ cid: {}, nid: {}, idx: {} }}",
            self.cid, self.nid, self.idx
        )
    }
}

impl<T> InternalNode<T> {
    pub(crate) fn new(val: T, nid: usize) -> InternalNode<T> {
        InternalNode {
            val: Some(val),
            nid,
            prev: None,
            next: None,
        }
    }

    pub(crate) fn free() -> InternalNode<T> {
        InternalNode {
            val: None,
            nid: 0,
            prev: None,
            next: None,
        }
    }
}

impl<T> Node<T> {
    pub(crate) fn new(cid: usize, nid: usize, idx: usize) -> Node<T> {
        Node {
            cid,
            nid,
            idx,
            _marker: PhantomData,
        }
    }
}

/// Hands out a process wide unique id for every new list so that a
/// handle can never be resolved against a list it did not come from.
pub(crate) fn inc_cid() -> usize {
    static LL_COUNTER: AtomicUsize = AtomicUsize::new(1);
    LL_COUNTER.fetch_add(1, Ordering::Relaxed)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_clone_eq() {
        let node = Node::<u8>::new(1, 2, 3);
        let copy = node;
        assert_eq!(node, copy.clone());
        assert_ne!(node, Node::new(1, 3, 3));
        assert_eq!(format!("{:?}", node), "Node { cid: 1, nid: 2, idx: 3 }");
    }

    #[test]
    fn test_inc_cid() {
        let a = inc_cid();
        let b = inc_cid();
        assert!(a < b);
    }
}
