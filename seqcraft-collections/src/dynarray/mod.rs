/*
   Dynamic Array: A contiguous growable array of elements that
   doubles its capacity when full and shrinks it to the next power of
   two once three quarters of its slots are unused. Every change of
   capacity moves the live elements into a freshly allocated buffer.

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

//! A contiguous array with an explicit capacity policy. The array
//! grows by doubling and, unlike `Vec`, gives memory back when
//! elements are removed: once the length falls to a quarter of the
//! capacity or below, the capacity is reduced to the smallest power
//! of two that is strictly greater than the length.
pub mod array;
mod buf;
