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

//! A doubly linked list whose last node links back to the head. There
//! is no terminating node: while the list is non-empty the head's
//! predecessor is always the last node and the last node's successor
//! is always the head.
pub mod list;
