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

//! Doubly linked lists that own their nodes in an arena. Nodes refer
//! to their neighbours by slot index instead of by pointer, and
//! removed slots are kept on a free list for reuse, so the lists
//! only allocate when the arena is full.
//!
//! [`LinkedList`](linkedlist::list::LinkedList) terminates at both
//! ends while [`CircularList`](circularlist::list::CircularList)
//! links its last node back to the head.
#[macro_use]
mod macros;

pub mod circularlist;
mod fl;
pub mod iter;
pub mod linkedlist;
pub mod node;
