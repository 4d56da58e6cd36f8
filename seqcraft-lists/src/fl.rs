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

use crate::node::InternalNode;

/// The arena that owns every node of a list. Slots that hold a
/// value belong to the list, the others are chained together through
/// their `next` index to form the free list.
#[derive(Debug)]
pub(crate) struct FreeList<T> {
    capacity: usize,
    len: usize,
    head: Option<usize>,
    slots: Vec<InternalNode<T>>,
}

impl<T> FreeList<T> {
    pub(crate) fn new(capacity: usize) -> FreeList<T> {
        let mut fl = FreeList {
            capacity,
            len: 0,
            head: None,
            slots: Vec::with_capacity(capacity),
        };
        fl.alloc(capacity);
        fl
    }

    /// The number of free slots.
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// The total number of slots, free or in use.
    #[cfg(test)]
    pub(crate) fn slots(&self) -> usize {
        self.slots.len()
    }

    fn alloc(&mut self, size: usize) {
        let mut count: usize = 0;
        while count < size {
            self.slots.push(InternalNode::free());
            let idx = self.slots.len() - 1;
            self.push_head(idx);
            count += 1;
        }
    }

    fn push_head(&mut self, idx: usize) {
        let node = &mut self.slots[idx];
        node.prev = None;
        node.next = self.head;
        self.head = Some(idx);
        self.len += 1;
    }

    fn pop_head(&mut self) -> Option<usize> {
        let idx = self.head?;
        self.head = self.slots[idx].next;
        self.slots[idx].next = None;
        self.len -= 1;
        Some(idx)
    }

    /// Returns the value of the node at `idx` to the caller and puts
    /// the slot back on the free list.
    pub(crate) fn release(&mut self, idx: usize) -> T {
        let val = match self.slots[idx].val.take() {
            Some(val) => val,
            None => panic!("cannot release free slot {}", idx),
        };
        self.push_head(idx);
        val
    }

    /// Takes a slot off the free list, growing the arena if the free
    /// list is empty, and stores `val` in it. The returned node is
    /// unlinked.
    pub(crate) fn acquire(&mut self, val: T, nid: usize) -> usize {
        let idx = match self.pop_head() {
            Some(idx) => idx,
            None => {
                self.grow();
                match self.pop_head() {
                    Some(idx) => idx,
                    None => panic!("alloc failed on acquire"),
                }
            }
        };

        self.slots[idx] = InternalNode::new(val, nid);
        idx
    }

    fn grow(&mut self) {
        if self.capacity == 0 {
            self.alloc(1);
        } else {
            self.alloc(self.capacity);
            self.capacity *= 2;
        }
    }

    /// Returns true if the slot at `idx` holds a value that was
    /// stored with node id `nid`.
    pub(crate) fn is_live(&self, idx: usize, nid: usize) -> bool {
        match self.slots.get(idx) {
            Some(node) => node.val.is_some() && node.nid == nid,
            None => false,
        }
    }

    pub(crate) fn nid(&self, idx: usize) -> usize {
        self.slots[idx].nid
    }

    pub(crate) fn next(&self, idx: usize) -> Option<usize> {
        self.slots[idx].next
    }

    pub(crate) fn prev(&self, idx: usize) -> Option<usize> {
        self.slots[idx].prev
    }

    pub(crate) fn set_next(&mut self, idx: usize, next: Option<usize>) {
        self.slots[idx].next = next;
    }

    pub(crate) fn set_prev(&mut self, idx: usize, prev: Option<usize>) {
        self.slots[idx].prev = prev;
    }

    pub(crate) fn val(&self, idx: usize) -> &T {
        match &self.slots[idx].val {
            Some(val) => val,
            None => panic!("slot {} is on the free list", idx),
        }
    }

    pub(crate) fn val_mut(&mut self, idx: usize) -> &mut T {
        match &mut self.slots[idx].val {
            Some(val) => val,
            None => panic!("slot {} is on the free list", idx),
        }
    }

    /// Raw access to the slots for the mutable iterator, which hands
    /// out one reference per distinct slot.
    pub(crate) fn slots_mut_ptr(&mut self) -> *mut InternalNode<T> {
        self.slots.as_mut_ptr()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_new() {
        let fl = FreeList::<u8>::new(4);
        assert_eq!(fl.len(), 4);
        assert_eq!(fl.slots(), 4);
        let fl = FreeList::<u8>::new(0);
        assert_eq!(fl.len(), 0);
        assert_eq!(fl.slots(), 0);
    }

    #[test]
    fn test_acquire_release() {
        let mut fl = FreeList::<u8>::new(2);
        let a = fl.acquire(10, 0);
        let b = fl.acquire(20, 1);
        assert_ne!(a, b);
        assert_eq!(fl.len(), 0);
        assert_eq!(*fl.val(a), 10);
        assert_eq!(*fl.val(b), 20);
        assert!(fl.is_live(a, 0));
        assert!(!fl.is_live(a, 1));

        assert_eq!(fl.release(a), 10);
        assert_eq!(fl.len(), 1);
        assert!(!fl.is_live(a, 0));

        // the released slot is reused before the arena grows
        let c = fl.acquire(30, 2);
        assert_eq!(c, a);
        assert_eq!(fl.slots(), 2);
        assert!(fl.is_live(c, 2));
        assert!(!fl.is_live(c, 0));
    }

    #[test]
    fn test_grow() {
        let mut fl = FreeList::<u8>::new(2);
        for i in 0..3 {
            fl.acquire(i, i as usize);
        }
        assert_eq!(fl.slots(), 4);
        assert_eq!(fl.len(), 1);
        for i in 3..5 {
            fl.acquire(i, i as usize);
        }
        assert_eq!(fl.slots(), 8);
    }

    #[test]
    fn test_grow_from_zero() {
        let mut fl = FreeList::<u8>::new(0);
        for i in 0..3 {
            fl.acquire(i, i as usize);
            assert_eq!(fl.slots(), i as usize + 1);
        }
    }

    #[test]
    #[should_panic(expected = "cannot release free slot 0")]
    fn test_double_release() {
        let mut fl = FreeList::<u8>::new(1);
        let a = fl.acquire(1, 0);
        fl.release(a);
        fl.release(a);
    }
}
