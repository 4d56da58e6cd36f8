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

use core::fmt;
use core::fmt::Display;

/// Writes the elements in the bracketed form `[ e0, e1, ..., en ]`
/// used by the `Display` impl of every seqcraft container. An empty
/// sequence is written as `[ ]`.
pub fn fmt_seq<I>(f: &mut fmt::Formatter<'_>, elems: I) -> fmt::Result
where
    I: IntoIterator,
    I::Item: Display,
{
    write!(f, "[ ")?;
    let mut empty = true;
    for elem in elems {
        if !empty {
            write!(f, ", ")?;
        }
        write!(f, "{}", elem)?;
        empty = false;
    }

    if empty {
        write!(f, "]")
    } else {
        write!(f, " ]")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    struct Seq<'a>(&'a [i32]);

    impl<'a> Display for Seq<'a> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            fmt_seq(f, self.0.iter())
        }
    }

    #[test]
    fn test_fmt_seq() {
        assert_eq!(Seq(&[]).to_string(), "[ ]");
        assert_eq!(Seq(&[7]).to_string(), "[ 7 ]");
        assert_eq!(Seq(&[1, 2, 3]).to_string(), "[ 1, 2, 3 ]");
        assert_eq!(Seq(&[-1, 0]).to_string(), "[ -1, 0 ]");
    }
}
