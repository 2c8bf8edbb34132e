//! Core types for Polysort.
//!
//! This module defines:
//! - The concrete comparators for the supported element kinds
//!   ([`compare_ints`], [`compare_floats`], [`compare_fixed_strings`],
//!   [`compare_dyn_strings`]).
//! - [`FixedStr`]: an inline, NUL-padded string with a fixed byte capacity.
//! - [`Algorithm`]: the sorting algorithm selector.
//! - [`SortError`]: the contract violations a sort call can report.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Default switchover threshold used when the hybrid algorithm is selected
/// by name, without an explicit threshold.
pub const DEFAULT_HYBRID_THRESHOLD: usize = 50;

/// Compares two integers numerically.
#[inline]
pub fn compare_ints(left: &i32, right: &i32) -> Ordering {
    left.cmp(right)
}

/// Compares two floating-point numbers numerically.
///
/// Uses [`f32::total_cmp`], so the comparison is a total order even in the
/// presence of NaN values.
#[inline]
pub fn compare_floats(left: &f32, right: &f32) -> Ordering {
    left.total_cmp(right)
}

/// Compares two fixed-capacity strings byte-wise lexicographically.
#[inline]
pub fn compare_fixed_strings<const N: usize>(left: &FixedStr<N>, right: &FixedStr<N>) -> Ordering {
    left.content().cmp(right.content())
}

/// Compares two heap-allocated strings byte-wise lexicographically.
///
/// The element being sorted is the string *handle*; sorting an array of
/// handles moves the handles around while the text they point to never
/// relocates.
#[inline]
pub fn compare_dyn_strings(left: &String, right: &String) -> Ordering {
    left.as_bytes().cmp(right.as_bytes())
}

/// Errors produced when constructing a [`FixedStr`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FixedStrError {
    /// The input needs `len + 1` bytes (content plus terminator) but only
    /// `cap` are available.
    #[error("string of {len} bytes does not fit in a {cap}-byte fixed string")]
    TooLong { len: usize, cap: usize },
    /// The input contains a NUL byte, which is reserved as the terminator.
    #[error("string contains an interior NUL byte")]
    InteriorNul,
}

/// An inline string with a fixed byte capacity of `N`.
///
/// The content is stored NUL-padded inside the value itself, so a `FixedStr`
/// has no indirection: an array of `FixedStr<N>` is a flat buffer of
/// `N`-byte elements, and sorting it moves the text along with the element.
/// At most `N - 1` content bytes fit, leaving room for the terminator.
///
/// # Examples
///
/// ```
/// use polysort::core::FixedStr;
///
/// let name: FixedStr<32> = "alice".parse().unwrap();
/// assert_eq!(name.as_str(), "alice");
/// assert!("x".repeat(32).parse::<FixedStr<32>>().is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct FixedStr<const N: usize> {
    bytes: [u8; N],
}

impl<const N: usize> FixedStr<N> {
    /// Creates a fixed string from `s`, rejecting input that does not leave
    /// room for the NUL terminator or that contains an interior NUL.
    pub fn new(s: &str) -> Result<Self, FixedStrError> {
        if s.len() >= N {
            return Err(FixedStrError::TooLong {
                len: s.len(),
                cap: N,
            });
        }
        if s.as_bytes().contains(&0) {
            return Err(FixedStrError::InteriorNul);
        }
        let mut bytes = [0u8; N];
        bytes[..s.len()].copy_from_slice(s.as_bytes());
        Ok(Self { bytes })
    }

    /// The content bytes, up to but excluding the first NUL.
    pub fn content(&self) -> &[u8] {
        let end = self.bytes.iter().position(|&b| b == 0).unwrap_or(N);
        &self.bytes[..end]
    }

    /// The content as a string slice.
    pub fn as_str(&self) -> &str {
        // Safety: the bytes are only ever written by `new`, which copies them
        // from a `&str` and rejects interior NULs, so the content prefix is
        // valid UTF-8.
        unsafe { std::str::from_utf8_unchecked(self.content()) }
    }

    /// Number of content bytes.
    pub fn len(&self) -> usize {
        self.content().len()
    }

    /// Returns `true` if the content is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes[0] == 0
    }
}

impl<const N: usize> PartialOrd for FixedStr<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const N: usize> Ord for FixedStr<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_fixed_strings(self, other)
    }
}

impl<const N: usize> FromStr for FixedStr<N> {
    type Err = FixedStrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<const N: usize> fmt::Display for FixedStr<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<const N: usize> fmt::Debug for FixedStr<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedStr({:?})", self.as_str())
    }
}

/// Contract violations reported by the sorting entry points.
///
/// These are caller errors, not operational failures: the input either never
/// satisfied the call contract or the parameters are out of range. A sort
/// call that returns `Ok(())` has fully sorted its buffer; one that returns
/// an error has not touched it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SortError {
    /// The input slice holds no elements.
    #[error("the input must contain at least one element")]
    Empty,
    /// The element type has zero size, so the buffer carries no data to
    /// reorder.
    #[error("the element size cannot be zero")]
    ZeroSizedElement,
    /// The hybrid switchover threshold is not greater than one.
    #[error("the hybrid threshold must be greater than one, got {0}")]
    Threshold(usize),
}

/// Selects one of the four sorting algorithms.
///
/// The hybrid variant carries its switchover threshold, so a fully
/// configured sort is a single value that can be passed around, parsed from
/// the command line, or iterated over in benchmarks.
///
/// # Examples
///
/// ```
/// use polysort::core::Algorithm;
///
/// let algorithm: Algorithm = "quicksort".parse().unwrap();
/// let mut data = vec![5, 3, 5, 1];
/// algorithm.sort(&mut data, |a, b| a.cmp(b)).unwrap();
/// assert_eq!(data, vec![1, 3, 5, 5]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    /// Recursive merge sort with a stable, left-biased merge.
    Merge,
    /// Hoare-partition quicksort pivoting on the first element.
    Quick,
    /// Insertion sort locating each slot by binary search.
    BinaryInsertion,
    /// Merge sort that hands sub-ranges of at most `threshold` elements to
    /// binary insertion sort.
    MergeBinaryInsertion { threshold: usize },
}

impl Algorithm {
    /// Sorts `items` in place with this algorithm, ordering elements by
    /// `compare`.
    pub fn sort<T, F>(&self, items: &mut [T], compare: F) -> Result<(), SortError>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        match *self {
            Algorithm::Merge => crate::algo::merge_sort(items, compare),
            Algorithm::Quick => crate::algo::quick_sort(items, compare),
            Algorithm::BinaryInsertion => crate::algo::binary_insertion_sort(items, compare),
            Algorithm::MergeBinaryInsertion { threshold } => {
                crate::algo::merge_binary_insertion_sort(items, threshold, compare)
            }
        }
    }

    /// The canonical upper-case name, matching what [`FromStr`] accepts.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Merge => "MERGESORT",
            Algorithm::Quick => "QUICKSORT",
            Algorithm::BinaryInsertion => "BININSSORT",
            Algorithm::MergeBinaryInsertion { .. } => "MERGEBININSSORT",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when an algorithm name or id cannot be recognized.
#[derive(Debug, Error, PartialEq, Eq)]
#[error(
    "unknown algorithm {0:?}, expected MERGESORT, QUICKSORT, BININSSORT, \
     MERGEBININSSORT or an id in 1..=4"
)]
pub struct ParseAlgorithmError(String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    /// Accepts the canonical names (case-insensitive, with or without an
    /// `ALGORITHM_` prefix) and the numeric ids `1..=4`. Selecting the
    /// hybrid algorithm by name yields [`DEFAULT_HYBRID_THRESHOLD`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let name = upper.strip_prefix("ALGORITHM_").unwrap_or(&upper);
        match name {
            "1" | "MERGESORT" => Ok(Algorithm::Merge),
            "2" | "QUICKSORT" => Ok(Algorithm::Quick),
            "3" | "BININSSORT" => Ok(Algorithm::BinaryInsertion),
            "4" | "MERGEBININSSORT" => Ok(Algorithm::MergeBinaryInsertion {
                threshold: DEFAULT_HYBRID_THRESHOLD,
            }),
            _ => Err(ParseAlgorithmError(s.to_owned())),
        }
    }
}
