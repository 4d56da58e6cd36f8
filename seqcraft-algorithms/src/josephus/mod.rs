/*
   Seqcraft Algorithms: Algorithms that run on the seqcraft sequence
   containers, starting with the Josephus elimination over a
   circular list.

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

//! The Josephus elimination. Participants stand in a
//! [`CircularList`] and every `k`th surviving participant is removed
//! until nobody is left. The order of removal is the elimination
//! order and the last participant removed is the survivor of the
//! classical Josephus problem.
//!
//! # Examples
//! ```
//! use seqcraft::algorithms::josephus::{eliminate, last_man_standing};
//! use seqcraft::lists::CircularList;
//!
//! let mut circle: CircularList<usize> = (1..=5).collect();
//! assert_eq!(eliminate(&mut circle, 2), vec![2, 4, 1, 5, 3]);
//! assert!(circle.is_empty());
//!
//! assert_eq!(last_man_standing(5, 2), Some(3));
//! ```
use seqcraft_lists::circularlist::list::CircularList;
use seqcraft_lists::node::Node;

/// An iterator that removes participants from a circle in
/// elimination order and yields them. Participants that have not been
/// yielded yet stay in the circle, so dropping the iterator early
/// leaves the survivors in place.
///
/// This struct is created by [`Eliminations::new`].
pub struct Eliminations<'a, T> {
    circle: &'a mut CircularList<T>,
    step: usize,
    cursor: Option<Node<T>>,
}

impl<'a, T> Eliminations<'a, T> {
    /// Creates an iterator that eliminates every `k`th participant of
    /// `circle`, counting from the head. The first participant
    /// removed is the one `k - 1` places after the head.
    ///
    /// # Panics
    ///
    /// Panics if `k` is zero.
    ///
    /// # Examples
    /// ```
    /// use seqcraft::algorithms::josephus::Eliminations;
    /// use seqcraft::lists::CircularList;
    ///
    /// let mut circle: CircularList<u32> = (1..=7).collect();
    /// let first_three: Vec<u32> = Eliminations::new(&mut circle, 3).take(3).collect();
    /// assert_eq!(first_three, vec![3, 6, 2]);
    /// assert_eq!(circle.to_string(), "[ 1, 4, 5, 7 ]");
    /// ```
    pub fn new(circle: &'a mut CircularList<T>, k: usize) -> Eliminations<'a, T> {
        if k == 0 {
            panic!("the elimination step must be at least 1");
        }
        let cursor = match circle.head_node() {
            Some(head) => Some(advance(&*circle, head, k - 1)),
            None => None,
        };
        Eliminations {
            circle,
            step: k,
            cursor,
        }
    }
}

impl<'a, T> Iterator for Eliminations<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let victim = self.cursor.take()?;
        let successor = self.circle.next_node(&victim)?;
        let val = self.circle.pop_node(&victim)?;
        if !self.circle.is_empty() {
            self.cursor = Some(advance(&*self.circle, successor, self.step - 1));
        }
        Some(val)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.circle.len();
        (len, Some(len))
    }
}

impl<'a, T> ExactSizeIterator for Eliminations<'a, T> {}

// Moving `len` places lands back on the same node so only the
// remainder is walked.
fn advance<T>(circle: &CircularList<T>, from: Node<T>, steps: usize) -> Node<T> {
    let mut cur = from;
    for _ in 0..steps % circle.len() {
        match circle.next_node(&cur) {
            Some(next) => cur = next,
            None => break,
        }
    }
    cur
}

/// Eliminates every `k`th participant of `circle` until it is empty
/// and returns the participants in the order they were removed.
///
/// # Panics
///
/// Panics if `k` is zero.
pub fn eliminate<T>(circle: &mut CircularList<T>, k: usize) -> Vec<T> {
    Eliminations::new(circle, k).collect()
}

/// Returns the survivor of a circle of participants numbered `1..=n`
/// when every `k`th participant is eliminated, or `None` if `n` is
/// zero.
///
/// # Panics
///
/// Panics if `k` is zero.
///
/// # Examples
/// ```
/// use seqcraft::algorithms::josephus::last_man_standing;
///
/// assert_eq!(last_man_standing(41, 3), Some(31));
/// assert_eq!(last_man_standing(1, 9), Some(1));
/// assert_eq!(last_man_standing(0, 2), None);
/// ```
pub fn last_man_standing(n: usize, k: usize) -> Option<usize> {
    let mut circle: CircularList<usize> = CircularList::with_capacity(n);
    circle.extend(1..=n);
    Eliminations::new(&mut circle, k).last()
}

#[cfg(test)]
mod test {
    use super::*;
    use quickcheck_macros::quickcheck;
    use rand::Rng;

    // J(1) = 0, J(n) = (J(n - 1) + k) mod n, shifted to count from 1.
    fn survivor(n: usize, k: usize) -> usize {
        (2..=n).fold(0, |pos, m| (pos + k) % m) + 1
    }

    #[test]
    fn test_five_by_two() {
        let mut circle: CircularList<i32> = (1..=5).collect();
        assert_eq!(eliminate(&mut circle, 2), vec![2, 4, 1, 5, 3]);
        assert!(circle.is_empty());
        assert_eq!(circle.head(), None);
        assert_eq!(last_man_standing(5, 2), Some(3));
    }

    #[test]
    fn test_step_one_is_circle_order() {
        let mut circle: CircularList<i32> = (1..=6).collect();
        assert_eq!(eliminate(&mut circle, 1), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(last_man_standing(6, 1), Some(6));
    }

    #[test]
    fn test_step_larger_than_circle() {
        let mut circle: CircularList<i32> = (1..=3).collect();
        // the count wraps around the circle before it stops
        assert_eq!(eliminate(&mut circle, 7), vec![1, 2, 3]);
        assert_eq!(last_man_standing(3, 7), Some(3));
    }

    #[test]
    fn test_single_participant() {
        let mut circle = CircularList::from([42]);
        assert_eq!(eliminate(&mut circle, 5), vec![42]);
        assert!(circle.is_empty());
    }

    #[test]
    fn test_empty_circle() {
        let mut circle = CircularList::<i32>::new();
        assert_eq!(eliminate(&mut circle, 3), Vec::<i32>::new());
        assert_eq!(last_man_standing(0, 3), None);
    }

    #[test]
    #[should_panic(expected = "the elimination step must be at least 1")]
    fn test_zero_step() {
        let mut circle: CircularList<i32> = (1..=3).collect();
        eliminate(&mut circle, 0);
    }

    #[test]
    fn test_partial_elimination() {
        let mut circle: CircularList<i32> = (1..=10).collect();
        let mut elims = Eliminations::new(&mut circle, 4);
        assert_eq!(elims.len(), 10);
        assert_eq!(elims.next(), Some(4));
        assert_eq!(elims.next(), Some(8));
        assert_eq!(elims.len(), 8);
        drop(elims);
        assert_eq!(circle.to_string(), "[ 1, 2, 3, 5, 6, 7, 9, 10 ]");
    }

    #[test]
    fn test_against_recurrence() {
        for n in 1..60 {
            for k in 1..12 {
                assert_eq!(last_man_standing(n, k), Some(survivor(n, k)), "n={} k={}", n, k);
            }
        }
        assert_eq!(last_man_standing(68, 7), Some(survivor(68, 7)));
    }

    #[test]
    fn test_random_circles() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let n: usize = rng.gen_range(1..300);
            let k: usize = rng.gen_range(1..1000);
            let mut circle: CircularList<usize> = (1..=n).collect();
            let order = eliminate(&mut circle, k);
            assert_eq!(order.len(), n);
            assert_eq!(order.last().copied(), Some(survivor(n, k)), "n={} k={}", n, k);
        }
    }

    #[quickcheck]
    fn prop_eliminates_everyone_once(n: u8, k: u8) -> bool {
        let n = n as usize;
        let k = k as usize % 16 + 1;
        let mut circle: CircularList<usize> = (1..=n).collect();
        let mut order = eliminate(&mut circle, k);
        let last = order.last().copied();
        order.sort_unstable();
        circle.is_empty()
            && order == (1..=n).collect::<Vec<_>>()
            && last == last_man_standing(n, k)
    }
}
