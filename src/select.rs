//! Quickselect, the `nth_element` building block of subrange sorting.

use std::cmp::Ordering;

use crate::partial_sort::heap_sort;
use crate::partition::partition;

/// Reorders `v` such that the element at `index` is at its final sorted
/// position: every element before it compares less than or equal to it, and
/// every element after it compares greater than or equal to it. Neither side
/// is sorted.
///
/// # Panics
///
/// Panics if `index >= v.len()`.
#[inline]
pub fn select_nth<T>(v: &mut [T], index: usize)
where
    T: Ord,
{
    partition_at_index(v, index, &mut |a, b| a.lt(b));
}

/// Like [`select_nth`] with a caller-supplied comparator deciding the order.
#[inline]
pub fn select_nth_by<T, F>(v: &mut [T], index: usize, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    partition_at_index(v, index, &mut |a, b| compare(a, b) == Ordering::Less);
}

// For small sub-slices it's faster to simply sort them. The selection is only
// called once per slice, so nothing more sophisticated than insertion sort is
// warranted.
const INSERTION_SORT_THRESHOLD: usize = 16;

pub(crate) fn partition_at_index<T, F>(v: &mut [T], index: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    if index >= len {
        panic!("partition_at_index index {index} greater than length of slice {len}");
    }

    if index == len - 1 {
        // Find the max element and place it in the last position of the
        // slice. `unwrap()` is fine, we checked that `v` is not empty.
        let max_idx = max_index(v, is_less).unwrap();
        v.swap(max_idx, index);
    } else if index == 0 {
        // Same with the min element and the first position.
        let min_idx = min_index(v, is_less).unwrap();
        v.swap(min_idx, index);
    } else {
        partition_at_index_loop(v, index, is_less);
    }
}

fn partition_at_index_loop<T, F>(mut v: &mut [T], mut index: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // Limit the number of imbalanced partitions and fall back to a
    // deterministic bounded sort, keeping adversarial inputs from degrading
    // to quadratic time. Bad pivots should be rare, so the limit is almost
    // never reached.
    let mut limit = 16;

    // True if the last partitioning was reasonably balanced.
    let mut was_balanced = true;

    loop {
        if v.len() <= INSERTION_SORT_THRESHOLD {
            insertion_sort(v, is_less);
            return;
        }

        if limit == 0 {
            heap_sort(v, is_less);
            return;
        }

        // If the last partitioning was imbalanced, try breaking patterns in
        // the slice by shuffling some elements around. Hopefully we'll choose
        // a better pivot this time.
        if !was_balanced {
            break_patterns(v);
            limit -= 1;
        }

        let pivot_pos = choose_pivot(v, is_less);
        let mid = partition_at_pivot(v, pivot_pos, is_less);
        was_balanced = mid.min(v.len() - mid) >= v.len() / 8;

        if mid < index {
            // Recurse into the right side, past the pivot.
            v = &mut v[mid + 1..];
            index = index - mid - 1;
        } else if mid > index {
            v = &mut v[..mid];
        } else {
            // The pivot landed exactly at `index`, everything after it is
            // greater than or equal to it by the partition post-condition.
            return;
        }
    }
}

/// Partitions `v` around the value at `pivot_pos` and returns the pivot's
/// final position: `v[..ret]` is less than the pivot, `v[ret + 1..]` is
/// greater than or equal to it.
fn partition_at_pivot<T, F>(v: &mut [T], pivot_pos: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    // Place the pivot at the beginning of the slice and borrow it from
    // there. The disjoint borrows guarantee the pivot can't alias the rest,
    // and no element is duplicated, so a panicking comparison can't corrupt
    // the slice.
    v.swap(0, pivot_pos);
    let (pivot, rest) = v.split_at_mut(1);
    let pivot = &pivot[0];

    let num_lt = partition(rest, |elem| is_less(elem, pivot));

    // Place the pivot between the two partitions.
    v.swap(0, num_lt);

    num_lt
}

/// Returns the index of the minimum element per `is_less`, or `None` for an
/// empty slice.
fn min_index<T, F: FnMut(&T, &T) -> bool>(v: &[T], is_less: &mut F) -> Option<usize> {
    v.iter()
        .enumerate()
        .reduce(|acc, t| if is_less(t.1, acc.1) { t } else { acc })
        .map(|(i, _)| i)
}

/// Returns the index of the maximum element per `is_less`, or `None` for an
/// empty slice.
fn max_index<T, F: FnMut(&T, &T) -> bool>(v: &[T], is_less: &mut F) -> Option<usize> {
    v.iter()
        .enumerate()
        .reduce(|acc, t| if is_less(acc.1, t.1) { t } else { acc })
        .map(|(i, _)| i)
}

/// Chooses a pivot position in `v` as the median of three elements spread
/// across the slice, with the candidates refined to medians of their
/// neighborhoods on larger slices.
fn choose_pivot<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    // Minimum length to refine the three candidates to neighborhood medians.
    const SHORTEST_MEDIAN_OF_MEDIANS: usize = 50;

    let len = v.len();

    // Three candidate indices spread across the slice. The caller only
    // invokes us above INSERTION_SORT_THRESHOLD, so the neighborhoods
    // `a - 1..=a + 1` etc. are in-bounds.
    let mut a = len / 4;
    let mut b = len / 4 * 2;
    let mut c = len / 4 * 3;

    if len >= SHORTEST_MEDIAN_OF_MEDIANS {
        a = median_idx(v, is_less, a - 1, a, a + 1);
        b = median_idx(v, is_less, b - 1, b, b + 1);
        c = median_idx(v, is_less, c - 1, c, c + 1);
    }

    median_idx(v, is_less, a, b, c)
}

/// Returns the index pointing to the median of the 3 elements `v[a]`, `v[b]`
/// and `v[c]`.
fn median_idx<T, F: FnMut(&T, &T) -> bool>(
    v: &[T],
    is_less: &mut F,
    mut a: usize,
    b: usize,
    mut c: usize,
) -> usize {
    if is_less(&v[c], &v[a]) {
        std::mem::swap(&mut a, &mut c);
    }
    if is_less(&v[c], &v[b]) {
        return c;
    }
    if is_less(&v[b], &v[a]) {
        return a;
    }
    b
}

/// Scatters some elements around in an attempt to break patterns that might
/// cause imbalanced partitions.
#[cold]
fn break_patterns<T>(v: &mut [T]) {
    let len = v.len();
    if len >= 8 {
        // Pseudorandom number generator from the "Xorshift RNGs" paper by
        // George Marsaglia.
        let mut random = len as u32;
        let mut gen_u32 = || {
            random ^= random << 13;
            random ^= random >> 17;
            random ^= random << 5;
            random
        };
        let mut gen_usize = || {
            if usize::BITS <= 32 {
                gen_u32() as usize
            } else {
                (((gen_u32() as u64) << 32) | (gen_u32() as u64)) as usize
            }
        };

        // Take random numbers modulo this number. It fits into `usize`
        // because `len` is not greater than `isize::MAX`.
        let modulus = len.next_power_of_two();

        // Some pivot candidates will be in the nearby of this index. Let's
        // randomize them.
        let pos = len / 4 * 2;

        for i in 0..3 {
            // Random number modulo a power of two, decreased by `len` until
            // it fits into `[0, len - 1]`.
            let mut other = gen_usize() & (modulus - 1);
            if other >= len {
                other -= len;
            }

            v.swap(pos - 1 + i, other);
        }
    }
}

/// Sorts short slices by shifting each element of the unsorted tail left
/// until it is in order.
fn insertion_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && is_less(&v[j], &v[j - 1]) {
            v.swap(j, j - 1);
            j -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::select_nth;

    #[test]
    fn nth_in_place() {
        let mut v = [9, 1, 8, 2, 7, 3, 6, 4, 5];
        let mut sorted = v.to_vec();
        sorted.sort_unstable();

        for index in 0..v.len() {
            let mut w = v;
            select_nth(&mut w, index);
            assert_eq!(w[index], sorted[index]);
            assert!(w[..index].iter().all(|x| x <= &w[index]));
            assert!(w[index..].iter().all(|x| x >= &w[index]));
        }

        // Also exercise an already selected input.
        select_nth(&mut v, 4);
        select_nth(&mut v, 4);
        assert_eq!(v[4], sorted[4]);
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_index() {
        select_nth(&mut [1, 2, 3], 3);
    }
}
