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

macro_rules! nid_inc {
    ($nid: expr) => {{
        let nid = $nid;
        $nid += 1;
        nid
    }};
}

/// Implements the conversion, comparison, formatting and iteration
/// traits that both list types share. The list must provide `new`,
/// `append`, `len`, `capacity`, `iter` and `iter_mut`.
macro_rules! impl_list_traits {
    ($list: ident) => {
        impl<T> Default for $list<T> {
            fn default() -> Self {
                $list::new()
            }
        }

        impl<T> Extend<T> for $list<T> {
            fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
                for elem in iter {
                    self.append(elem);
                }
            }
        }

        impl<T> core::iter::FromIterator<T> for $list<T> {
            fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
                let mut list = $list::new();
                list.extend(iter);
                list
            }
        }

        impl<T> From<Vec<T>> for $list<T> {
            fn from(elems: Vec<T>) -> Self {
                let mut list = $list::with_capacity(elems.len());
                list.extend(elems);
                list
            }
        }

        impl<T, const N: usize> From<[T; N]> for $list<T> {
            fn from(elems: [T; N]) -> Self {
                let mut list = $list::with_capacity(N);
                list.extend(IntoIterator::into_iter(elems));
                list
            }
        }

        impl<'a, T> IntoIterator for &'a $list<T> {
            type Item = &'a T;
            type IntoIter = crate::iter::Iter<'a, T>;
            fn into_iter(self) -> Self::IntoIter {
                self.iter()
            }
        }

        impl<'a, T> IntoIterator for &'a mut $list<T> {
            type Item = &'a mut T;
            type IntoIter = crate::iter::IterMut<'a, T>;
            fn into_iter(self) -> Self::IntoIter {
                self.iter_mut()
            }
        }

        impl<T: PartialEq> PartialEq for $list<T> {
            fn eq(&self, other: &Self) -> bool {
                self.len() == other.len() && self.iter().eq(other.iter())
            }
        }

        impl<T: Eq> Eq for $list<T> {}

        impl<T: core::fmt::Display> core::fmt::Display for $list<T> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                seqcraft_collections::render::fmt_seq(f, self.iter())
            }
        }

        impl<T: core::fmt::Debug> core::fmt::Debug for $list<T> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(
                    f,
                    concat!(stringify!($list), " {{ len: {}, capacity: {}, elements: "),
                    self.len(),
                    self.capacity()
                )?;
                f.debug_list().entries(self.iter()).finish()?;
                write!(f, " }}")
            }
        }
    };
}
