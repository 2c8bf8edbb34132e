//! # Polysort
//!
//! `polysort` is a small library of generic, in-place sorting algorithms
//! driven by caller-supplied three-way comparators, plus a thin adapter that
//! sorts fixed-schema CSV records by a chosen field.
//!
//! Four interchangeable algorithms are provided:
//!
//! - **Merge sort**: O(N log N), stable, O(N) scratch space per merge.
//! - **Quicksort**: Hoare partition pivoting on the first element; average
//!   O(N log N), degrading to O(N²) on already-sorted input by design.
//! - **Binary insertion sort**: O(N log N) comparisons, O(N²) moves; best on
//!   small or mostly-sorted input.
//! - **Hybrid merge / binary insertion sort**: merge sort that hands
//!   sub-ranges below a configurable threshold to binary insertion sort.
//!
//! All four share one contract: they mutate the slice in place, order
//! elements through an `FnMut(&T, &T) -> Ordering` comparator, and report
//! contract violations (empty input, zero-sized elements, a hybrid threshold
//! of one) as typed errors instead of producing a partial sort.
//!
//! ## Usage
//!
//! ### Sorting a slice
//!
//! ```rust
//! use polysort::prelude::*;
//!
//! let mut data = vec![5, 3, 5, 1];
//! merge_sort(&mut data, |a, b| a.cmp(b)).unwrap();
//! assert_eq!(data, vec![1, 3, 5, 5]);
//! ```
//!
//! ### Selecting the algorithm at run time
//!
//! ```rust
//! use polysort::prelude::*;
//!
//! let algorithm: Algorithm = "mergebininssort".parse().unwrap();
//! let mut data = vec![4, 1, 3, 2];
//! algorithm.sort(&mut data, |a, b| a.cmp(b)).unwrap();
//! assert_eq!(data, vec![1, 2, 3, 4]);
//! ```
//!
//! ### Sorting records
//!
//! The [`records`] module reads `id,string,int,float` CSV lines into a flat
//! buffer of fixed-stride [`records::Record`] values, sorts them by a chosen
//! field, and writes them back out:
//!
//! ```rust
//! use polysort::core::Algorithm;
//! use polysort::records::{SortField, sort_records};
//!
//! let input = "2,bob,30,1.5\n1,alice,25,2.5\n";
//! let mut output = Vec::new();
//! sort_records(input.as_bytes(), &mut output, SortField::Str, Algorithm::Merge).unwrap();
//! assert!(String::from_utf8(output).unwrap().starts_with("1,alice"));
//! ```
//!
//! ## Element kinds
//!
//! The comparator functions in [`core`] cover the supported element kinds:
//! integers, floats, [`core::FixedStr`] inline strings (the text moves with
//! the element), and heap strings (the element is a handle; only the handle
//! moves, the text never relocates). Any other element type works with a
//! custom comparator closure.
//!
//! ## Stability
//!
//! Stability is algorithm-specific: merge sort is stable (ties in the merge
//! select the left half), binary insertion sort places a new element
//! immediately after an equal one, and quicksort's exchange-based partition
//! gives no ordering guarantee between equal elements.

pub mod algo;
pub mod core;
pub mod records;

pub use algo::{binary_insertion_sort, merge_binary_insertion_sort, merge_sort, quick_sort};
pub use core::{Algorithm, FixedStr, SortError};

pub mod prelude {
    pub use crate::algo::{
        binary_insertion_sort, merge_binary_insertion_sort, merge_sort, quick_sort,
    };
    pub use crate::core::{Algorithm, FixedStr, SortError};
    pub use crate::records::{Record, SortField};
}
