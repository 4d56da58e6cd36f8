//! Sequence containers built from first principles together with the
//! algorithms that run on them.
//!
//! Every container reports a bad position with the same error:
//! [`SeqError::IndexOutOfRange`].

pub use seqcraft_collections::error::SeqError;

/// Linear and circular doubly linked lists whose nodes are kept in an
/// arena and recycled through a free list
pub mod lists {
    pub use seqcraft_lists::circularlist::list::CircularList;
    pub use seqcraft_lists::linkedlist::list::LinkedList;
    /// An immutable iterator over the elements of a
    /// [`LinkedList`](LinkedList) or [`CircularList`](CircularList).
    pub use seqcraft_lists::iter::Iter;
    /// A mutable iterator over the elements of a
    /// [`LinkedList`](LinkedList) or [`CircularList`](CircularList).
    pub use seqcraft_lists::iter::IterMut;
    /// A handle to a node of a list.
    pub use seqcraft_lists::node::Node;
}

/// Contiguous collections designed around an explicit capacity
pub mod collections {
    pub use seqcraft_collections::dynarray::array::DynArray;
    /// This module contains constants specific to the [`DynArray`]
    pub mod dynarray {
        /// The capacity of a [`DynArray`](super::DynArray) created
        /// with `new()`.
        pub use seqcraft_collections::dynarray::array::DEFAULT_CAPACITY;
    }
}

/// Algorithms that run on the containers
pub mod algorithms {
    /// The Josephus elimination over a
    /// [`CircularList`](crate::lists::CircularList).
    pub mod josephus {
        pub use seqcraft_algorithms::josephus::eliminate;
        pub use seqcraft_algorithms::josephus::last_man_standing;
        pub use seqcraft_algorithms::josephus::Eliminations;
    }
}
