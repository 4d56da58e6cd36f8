/*
   Seqcraft Collections: A capacity managed contiguous array along
   with the error and rendering types shared by every seqcraft
   sequence container.

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

use core::fmt::{Display, Formatter, Result};

/// The error returned by positional operations of every seqcraft
/// container.
///
/// The valid range of an index depends on the operation and the
/// container. Reads and removals accept `[0, len)`, inserts accept
/// `[0, len]`, and the circular list wraps reads and removals
/// modulo `len` so it only fails when it is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeqError {
    /// The index does not name a valid position for the operation.
    IndexOutOfRange {
        /// The index that was passed in.
        index: usize,
        /// The length of the container at the time of the call.
        len: usize,
    },
}

impl Display for SeqError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            SeqError::IndexOutOfRange { index, len } => write!(
                f,
                "index out of range: the len is {} but the index is {}",
                len, index
            ),
        }
    }
}

impl std::error::Error for SeqError {}
