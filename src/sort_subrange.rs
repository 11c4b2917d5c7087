//! Sorting a window of a slice without fully sorting the rest.

use std::cmp::Ordering;
use std::ops::Range;

use crate::partial_sort::heap_select;
use crate::select::partition_at_index;

/// Sorts `v[range]` ascending while leaving the elements outside the window
/// in a valid but unspecified order: everything before the window compares
/// less than or equal to the window's minimum and everything after it
/// compares greater than or equal to the window's maximum.
///
/// An empty `range` is a no-op and performs no comparisons. Sorting the
/// whole slice as the "subrange" is equivalent to a full sort.
///
/// # Panics
///
/// Panics if `range.start > range.end` or `range.end > v.len()`.
///
/// ```
/// let mut v = [3, 2, 11, 5, 4, 6, 12, 7, 8, 9, 1, 10];
/// slice_partition::sort_subrange(&mut v, 2..6);
/// assert_eq!(&v[2..6], &[3, 4, 5, 6]);
/// ```
#[inline]
pub fn sort_subrange<T>(v: &mut [T], range: Range<usize>)
where
    T: Ord,
{
    sort_subrange_impl(v, range, &mut |a, b| a.lt(b));
}

/// Like [`sort_subrange`] with a caller-supplied comparator deciding the
/// order.
#[inline]
pub fn sort_subrange_by<T, F>(v: &mut [T], range: Range<usize>, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_subrange_impl(v, range, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn sort_subrange_impl<T, F>(v: &mut [T], range: Range<usize>, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    assert!(
        range.start <= range.end && range.end <= v.len(),
        "sort_subrange range {}..{} invalid for slice of length {}",
        range.start,
        range.end,
        v.len()
    );

    if range.start == range.end {
        return;
    }

    // Selection step: move the window's first element into its final sorted
    // position, so that nothing left of the window compares greater than
    // anything in or right of it. Skipped when the window starts at the
    // front, the bounded sort alone establishes the boundary then.
    if range.start != 0 {
        partition_at_index(v, range.start, is_less);
    }

    // Bounded sort: order the window and push everything greater past its
    // end. `range.start < range.end <= v.len()` holds here, so the tail
    // slice is non-empty and the window fits.
    let tail = &mut v[range.start..];
    heap_select(tail, range.end - range.start, is_less);
}

#[cfg(test)]
mod tests {
    use super::sort_subrange;

    #[test]
    fn empty_range_is_untouched() {
        let mut v = [3, 1, 2];
        sort_subrange(&mut v, 1..1);
        assert_eq!(v, [3, 1, 2]);
    }

    #[test]
    fn full_range_sorts() {
        let mut v = [3, 1, 2, 5, 4];
        sort_subrange(&mut v, 0..5);
        assert_eq!(v, [1, 2, 3, 4, 5]);
    }

    #[test]
    #[should_panic]
    fn reversed_range() {
        let mut v = [1, 2, 3];
        sort_subrange(&mut v, 2..1);
    }

    #[test]
    #[should_panic]
    fn range_past_end() {
        let mut v = [1, 2, 3];
        sort_subrange(&mut v, 1..4);
    }
}
