//! Insertion sort.
//!
//! | Best   | Average | Worst  | Extra space | Stable |
//! | :----- | :------ | :----- | :---------- | :----- |
//! | O(n)   | O(n²)   | O(n²)  | O(1)        | Yes    |
//!
//! Usually the fastest of the quadratic sorts on small or nearly ordered input.

use crate::core::{copy_then_sort, default_ordering};
use std::cmp::Ordering;

/// Returns a sorted copy of `v` using the natural order of its elements.
///
/// # Examples
///
/// ```
/// use sortable::algo::insertion;
///
/// assert_eq!(insertion::sort(&["pear", "apple", "fig"]), vec!["apple", "fig", "pear"]);
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
    copy_then_sort(v, |sorted| insertion_sort(sorted, &mut compare))
}

/// Inserts every element into the already sorted prefix to its left.
///
/// The slot is found by walking left past every element strictly greater than
/// the key, then the run between slot and key is shifted right by one.
pub(crate) fn insertion_sort<T, F>(v: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && compare(&v[j - 1], &v[i]) == Ordering::Greater {
            j -= 1;
        }

        if j < i {
            v[j..=i].rotate_right(1);
        }
    }
}
