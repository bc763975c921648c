//! Selection sort.
//!
//! | Best   | Average | Worst  | Swaps | Extra space | Stable |
//! | :----- | :------ | :----- | :---- | :---------- | :----- |
//! | O(n²)  | O(n²)   | O(n²)  | O(n)  | O(1)        | No     |
//!
//! Always scans the whole unsorted suffix, so its running time does not depend
//! on the input order. It performs at most `n - 1` swaps, which is the reason
//! to pick it when moving elements is expensive. A swap can jump an element
//! over an equal one, so the sort is not stable.

use crate::core::{copy_then_sort, default_ordering};
use std::cmp::Ordering;

/// Returns a sorted copy of `v` using the natural order of its elements.
///
/// # Examples
///
/// ```
/// use sortable::algo::selection;
///
/// assert_eq!(selection::sort(&[5, 1, 4, 2, 8]), vec![1, 2, 4, 5, 8]);
/// ```
pub fn sort<T: PartialOrd + Clone>(v: &[T]) -> Vec<T> {
    sort_by(v, default_ordering)
}

/// Returns a copy of `v` sorted with `compare`. Equal elements may be reordered.
pub fn sort_by<T, F>(v: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    copy_then_sort(v, |sorted| selection_sort(sorted, &mut compare))
}

pub(crate) fn selection_sort<T, F>(v: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();

    for j in 0..len.saturating_sub(1) {
        let mut i_min = j;
        for i in (j + 1)..len {
            if compare(&v[i], &v[i_min]) == Ordering::Less {
                i_min = i;
            }
        }

        if i_min != j {
            v.swap(j, i_min);
        }
    }
}
