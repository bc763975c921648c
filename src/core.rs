//! Shared contract for every algorithm in [`crate::algo`].
//!
//! This module defines:
//! - [`default_ordering`]: the comparator used when the caller supplies none.
//! - [`by_sign`]: adapts a comparator returning a signed integer.
//! - [`validate`]: the input check for sequences only known at run time.
//! - The copy-then-sort discipline shared by all algorithms.

use crate::error::SortError;
use std::cmp::Ordering;

/// Natural order of `a` and `b` using `<` and `>`.
///
/// Values that are neither less nor greater than each other (including
/// incomparable ones such as `NaN`) are reported as [`Ordering::Equal`].
/// Supply an explicit comparator when that is not what you want.
///
/// # Examples
///
/// ```
/// use sortable::core::default_ordering;
/// use std::cmp::Ordering;
///
/// assert_eq!(default_ordering(&1, &2), Ordering::Less);
/// assert_eq!(default_ordering("b", "a"), Ordering::Greater);
/// ```
#[inline]
pub fn default_ordering<T: PartialOrd + ?Sized>(a: &T, b: &T) -> Ordering {
    if a < b {
        Ordering::Less
    } else if a > b {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Wraps a comparator returning negative/zero/positive into one returning [`Ordering`].
///
/// # Examples
///
/// ```
/// use sortable::algo::insertion;
/// use sortable::core::by_sign;
///
/// let desc = insertion::sort_by(&[3, 9, 1], by_sign(|a: &i32, b: &i32| b - a));
/// assert_eq!(desc, vec![9, 3, 1]);
/// ```
pub fn by_sign<T: ?Sized, F>(mut compare: F) -> impl FnMut(&T, &T) -> Ordering
where
    F: FnMut(&T, &T) -> i32,
{
    move |a: &T, b: &T| compare(a, b).cmp(&0)
}

/// Checks that `sequence` is a finite collection and takes ownership of its elements.
///
/// A sequence is accepted when its iterator reports an upper bound on its
/// length. Infinite or unbounded producers (`std::iter::repeat`,
/// `std::iter::from_fn`, ...) are rejected with [`SortError::InvalidArgument`]
/// before a single element is pulled from them.
///
/// # Examples
///
/// ```
/// use sortable::core::validate;
///
/// assert_eq!(validate(vec![3, 1, 2]).unwrap(), vec![3, 1, 2]);
/// assert!(validate(std::iter::repeat(7)).is_err());
/// ```
pub fn validate<I: IntoIterator>(sequence: I) -> Result<Vec<I::Item>, SortError> {
    let iter = sequence.into_iter();
    match iter.size_hint() {
        (_, Some(_)) => Ok(iter.collect()),
        (_, None) => Err(SortError::invalid_argument(
            "sequence",
            "must be a finite collection with a known length bound",
        )),
    }
}

/// Copies `v` into a new vector and lets `kernel` reorder the copy.
///
/// The kernel is not run for empty input, so a comparator captured by it is
/// never invoked. The caller's slice is only ever read.
pub(crate) fn copy_then_sort<T: Clone>(v: &[T], kernel: impl FnOnce(&mut [T])) -> Vec<T> {
    if v.is_empty() {
        return Vec::new();
    }

    // Shallow copy: clones each element handle, the slice itself is untouched.
    let mut sorted = v.to_vec();
    kernel(&mut sorted);
    sorted
}
