//! Bubble sort with a shrinking upper bound.
//!
//! | Best   | Average | Worst  | Extra space | Stable |
//! | :----- | :------ | :----- | :---------- | :----- |
//! | O(n)   | O(n²)   | O(n²)  | O(1)        | Yes    |
//!
//! Each pass remembers the position of its last swap; everything past it is
//! already in place, so the next pass stops there. A pass without swaps ends
//! the sort, which makes already ordered input a single linear scan.

use crate::core::{copy_then_sort, default_ordering};
use std::cmp::Ordering;

/// Returns a sorted copy of `v` using the natural order of its elements.
///
/// # Examples
///
/// ```
/// use sortable::algo::bubble;
///
/// assert_eq!(bubble::sort(&[5, 1, 4, 2, 8]), vec![1, 2, 4, 5, 8]);
/// ```
pub fn sort<T: PartialOrd + Clone>(v: &[T]) -> Vec<T> {
    sort_by(v, default_ordering)
}

/// Returns a copy of `v` sorted with `compare`. Equal elements keep their relative order.
pub fn sort_by<T, F>(v: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    copy_then_sort(v, |sorted| bubble_sort(sorted, &mut compare))
}

pub(crate) fn bubble_sort<T, F>(v: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut size = v.len();

    while size > 1 {
        let mut new_size = 0;
        for i in 1..size {
            // Strictly greater only, equal neighbours never trade places.
            if compare(&v[i - 1], &v[i]) == Ordering::Greater {
                v.swap(i - 1, i);
                new_size = i;
            }
        }
        size = new_size;
    }
}
