//! The four sorting algorithms.
//!
//! Every entry point sorts a slice in place through a caller-supplied
//! three-way comparator:
//! - [`merge_sort`]: recursive divide and conquer with a stable merge.
//! - [`quick_sort`]: Hoare-partition quicksort pivoting on the first element.
//! - [`binary_insertion_sort`]: insertion sort that finds each slot by
//!   binary search over the sorted prefix.
//! - [`merge_binary_insertion_sort`]: merge sort that delegates sub-ranges
//!   below a threshold to binary insertion sort.
//!
//! The algorithms are generic over the element type; stride and layout are
//! carried by `T`. Elements are moved bitwise, never cloned or dropped, so
//! the multiset of elements is preserved even if the comparator panics.

use crate::core::SortError;
use std::cmp::Ordering;
use std::mem::ManuallyDrop;
use std::ptr;

/// Validates the call contract shared by all entry points.
fn check_input<T>(items: &[T]) -> Result<(), SortError> {
    if size_of::<T>() == 0 {
        return Err(SortError::ZeroSizedElement);
    }
    if items.is_empty() {
        return Err(SortError::Empty);
    }
    Ok(())
}

/// Sorts `items` in place with the merge sort algorithm.
///
/// Splits the range at the midpoint, recursively sorts both halves and
/// merges them through a scratch buffer. The merge selects the left half on
/// ties, so equal elements keep their relative order: this sort is stable.
///
/// Runs in O(N log N) time and allocates O(N) scratch space per merge; the
/// scratch buffer lives only for the duration of a single merge step.
///
/// # Examples
///
/// ```
/// use polysort::algo::merge_sort;
///
/// let mut data = vec![5, 3, 5, 1];
/// merge_sort(&mut data, |a, b| a.cmp(b)).unwrap();
/// assert_eq!(data, vec![1, 3, 5, 5]);
/// ```
pub fn merge_sort<T, F>(items: &mut [T], mut compare: F) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    check_input(items)?;
    merge_sort_rec(items, &mut compare);
    Ok(())
}

fn merge_sort_rec<T, F>(v: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len <= 1 {
        return;
    }

    let half = len / 2;
    {
        let (left, right) = v.split_at_mut(half);
        merge_sort_rec(left, compare);
        merge_sort_rec(right, compare);
    }
    merge(v, half, compare);
}

/// Merges the sorted halves `v[..mid]` and `v[mid..]`.
///
/// All elements are moved into a scratch buffer, then written back in merged
/// order. Ties pick the left half. The hole guard owns whatever has not been
/// written back yet, so a panicking comparator leaves `v` holding the
/// original multiset of elements.
fn merge<T, F>(v: &mut [T], mid: usize, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    let mut scratch: Vec<T> = Vec::with_capacity(len);

    unsafe {
        // Move every element into the scratch buffer; `v` is logically
        // uninitialized until the guard has filled it back up. The scratch
        // vector keeps length zero, so dropping it never drops elements.
        ptr::copy_nonoverlapping(v.as_ptr(), scratch.as_mut_ptr(), len);

        let base = scratch.as_ptr();
        let mut hole = MergeHole {
            left: base,
            left_end: base.add(mid),
            right: base.add(mid),
            right_end: base.add(len),
            dest: v.as_mut_ptr(),
        };

        while hole.left < hole.left_end && hole.right < hole.right_end {
            let src = if compare(&*hole.left, &*hole.right) != Ordering::Greater {
                let src = hole.left;
                hole.left = hole.left.add(1);
                src
            } else {
                let src = hole.right;
                hole.right = hole.right.add(1);
                src
            };
            ptr::copy_nonoverlapping(src, hole.dest, 1);
            hole.dest = hole.dest.add(1);
        }
        // Dropping the guard appends whichever tail remains.
    }
}

/// Owns the unmerged remainder of both scratch halves. On drop it copies the
/// remaining tails to the destination, which both finishes a normal merge
/// and restores the elements when a comparator panic unwinds through it.
struct MergeHole<T> {
    left: *const T,
    left_end: *const T,
    right: *const T,
    right_end: *const T,
    dest: *mut T,
}

impl<T> Drop for MergeHole<T> {
    fn drop(&mut self) {
        unsafe {
            let left_len = self.left_end.offset_from(self.left) as usize;
            ptr::copy_nonoverlapping(self.left, self.dest, left_len);
            let right_len = self.right_end.offset_from(self.right) as usize;
            ptr::copy_nonoverlapping(self.right, self.dest.add(left_len), right_len);
        }
    }
}

/// Sorts `items` in place with the quicksort algorithm.
///
/// Uses a Hoare partition that always pivots on the first element of the
/// current range. Average O(N log N); already-sorted or reverse-sorted input
/// degrades to O(N²) because the fixed pivot choice splits such ranges
/// maximally unbalanced. The output is correct either way, and no stability
/// guarantee is made.
///
/// # Examples
///
/// ```
/// use polysort::algo::quick_sort;
///
/// let mut data = vec![2.5f32, 1.5, 2.0];
/// quick_sort(&mut data, |a, b| a.total_cmp(b)).unwrap();
/// assert_eq!(data, vec![1.5, 2.0, 2.5]);
/// ```
pub fn quick_sort<T, F>(items: &mut [T], mut compare: F) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    check_input(items)?;
    quick_sort_rec(items, &mut compare);
    Ok(())
}

fn quick_sort_rec<T, F>(v: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if v.len() <= 1 {
        return;
    }

    let boundary = partition(v, compare);
    let (left, right) = v.split_at_mut(boundary + 1);
    quick_sort_rec(left, compare);
    quick_sort_rec(right, compare);
}

/// Hoare partition around the value of the first element.
///
/// Two cursors scan inward, the left skipping elements strictly less than
/// the pivot and the right skipping elements strictly greater; out-of-place
/// pairs are exchanged until the cursors cross. Returns the crossing index
/// `j`, with `v[..=j]` all ordered at-or-below the pivot and `v[j + 1..]`
/// at-or-above it; `j` is always below the last index, so both recursion
/// sides shrink.
fn partition<T, F>(v: &mut [T], compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    // Bitwise copy of the pivot, used only for comparisons and never
    // dropped. The element it was read from stays in the slice; swaps may
    // move it but cannot invalidate the copy.
    let pivot = unsafe { ManuallyDrop::new(ptr::read(&v[0])) };

    let mut left = 0;
    let mut right = v.len() - 1;
    loop {
        while compare(&v[left], &*pivot) == Ordering::Less {
            left += 1;
        }
        while compare(&v[right], &*pivot) == Ordering::Greater {
            right -= 1;
        }
        if left >= right {
            return right;
        }
        v.swap(left, right);
        left += 1;
        right -= 1;
    }
}

/// Sorts `items` in place with the binary insertion sort algorithm.
///
/// Walks the slice left to right; each element is inserted into the sorted
/// prefix at the position found by binary search, shifting the intervening
/// elements right in one bulk move. An element comparing equal to one
/// already present is inserted immediately after it.
///
/// Costs O(N log N) comparisons but O(N²) element moves in the worst case,
/// which is why it suits small or mostly-sorted input and serves as the base
/// case of [`merge_binary_insertion_sort`].
///
/// # Examples
///
/// ```
/// use polysort::algo::binary_insertion_sort;
///
/// let mut data = vec!["cherry".to_string(), "apple".into(), "banana".into()];
/// binary_insertion_sort(&mut data, |a, b| a.cmp(b)).unwrap();
/// assert_eq!(data, vec!["apple", "banana", "cherry"]);
/// ```
pub fn binary_insertion_sort<T, F>(items: &mut [T], mut compare: F) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    check_input(items)?;
    binary_insertion(items, &mut compare);
    Ok(())
}

fn binary_insertion<T, F>(v: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..v.len() {
        let pos = insertion_point(&v[..i], &v[i], compare);
        if pos == i {
            continue;
        }
        unsafe {
            // Lift the element out bitwise, shift the gap right by one slot,
            // drop the element back into the freed position. No comparator
            // runs inside this window, so it cannot be observed half-moved.
            let elem = ManuallyDrop::new(ptr::read(&v[i]));
            let base = v.as_mut_ptr();
            ptr::copy(base.add(pos), base.add(pos + 1), i - pos);
            ptr::copy_nonoverlapping(&*elem as *const T, base.add(pos), 1);
        }
    }
}

/// Binary search over the non-empty sorted `prefix` for the slot `elem`
/// should occupy. A probe comparing equal returns the index just past the
/// matching element; otherwise the search narrows to the leftmost position
/// whose element compares greater.
fn insertion_point<T, F>(prefix: &[T], elem: &T, compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut lower = 0;
    let mut upper = prefix.len() - 1;

    while lower < upper {
        let half = (lower + upper) / 2;
        match compare(elem, &prefix[half]) {
            Ordering::Equal => return half + 1,
            Ordering::Greater => lower = half + 1,
            Ordering::Less => upper = half,
        }
    }

    match compare(elem, &prefix[lower]) {
        Ordering::Less => lower,
        _ => lower + 1,
    }
}

/// Sorts `items` in place with the hybrid merge / binary insertion sort.
///
/// Recursively halves the range exactly as [`merge_sort`] does, but any
/// sub-range of at most `threshold` elements is handed to binary insertion
/// sort instead of recursing further. A one-element range is trivially
/// sorted regardless of the threshold.
///
/// `threshold` must be greater than one. A threshold of 2 degenerates toward
/// pure merge sort and a threshold at or above the input length degenerates
/// to pure binary insertion sort; every value in between trades the merge
/// scratch allocations against the insertion sort's quadratic moves.
///
/// # Examples
///
/// ```
/// use polysort::algo::merge_binary_insertion_sort;
///
/// let mut data = vec![9, 1, 8, 2, 7, 3];
/// merge_binary_insertion_sort(&mut data, 4, |a, b| a.cmp(b)).unwrap();
/// assert_eq!(data, vec![1, 2, 3, 7, 8, 9]);
/// ```
pub fn merge_binary_insertion_sort<T, F>(
    items: &mut [T],
    threshold: usize,
    mut compare: F,
) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    check_input(items)?;
    if threshold <= 1 {
        return Err(SortError::Threshold(threshold));
    }
    hybrid_rec(items, threshold, &mut compare);
    Ok(())
}

fn hybrid_rec<T, F>(v: &mut [T], threshold: usize, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len <= 1 {
        return;
    }
    if len <= threshold {
        binary_insertion(v, compare);
        return;
    }

    let half = len / 2;
    {
        let (left, right) = v.split_at_mut(half);
        hybrid_rec(left, threshold, compare);
        hybrid_rec(right, threshold, compare);
    }
    merge(v, half, compare);
}
