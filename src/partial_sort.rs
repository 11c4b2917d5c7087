//! Heap-based bounded sort, the `partial_sort` building block of subrange
//! sorting.

use std::cmp::Ordering;

/// Reorders `v` such that `v[..k]` contains the `k` smallest elements in
/// ascending order. The remaining `v[k..]` holds the rest of the elements in
/// an unspecified order, all of them comparing greater than or equal to the
/// sorted prefix.
///
/// Runs in O(n log k) comparisons with O(1) auxiliary space.
///
/// # Panics
///
/// Panics if `k > v.len()`.
#[inline]
pub fn partial_sort<T>(v: &mut [T], k: usize)
where
    T: Ord,
{
    heap_select(v, k, &mut |a, b| a.lt(b));
}

/// Like [`partial_sort`] with a caller-supplied comparator deciding the
/// order.
#[inline]
pub fn partial_sort_by<T, F>(v: &mut [T], k: usize, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    heap_select(v, k, &mut |a, b| compare(a, b) == Ordering::Less);
}

pub(crate) fn heap_select<T, F>(v: &mut [T], k: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    if k > len {
        panic!("partial_sort window {k} greater than length of slice {len}");
    }

    if k == 0 {
        return;
    }

    // Max-heap over the window, its root is the largest of the k smallest
    // elements seen so far.
    let (window, rest) = v.split_at_mut(k);
    for node in (0..k / 2).rev() {
        sift_down(window, node, is_less);
    }

    // Scan the remainder. Anything smaller than the heap root belongs in the
    // window and displaces the current root.
    for elem in rest {
        if is_less(elem, &window[0]) {
            std::mem::swap(elem, &mut window[0]);
            sift_down(window, 0, is_less);
        }
    }

    // Pop the heap down to a sorted window.
    for end in (1..k).rev() {
        window.swap(0, end);
        sift_down(&mut window[..end], 0, is_less);
    }
}

/// Fully sorts `v` ascending per `is_less`. Used as the deterministic
/// fallback of the selection loop.
pub(crate) fn heap_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    heap_select(v, v.len(), is_less);
}

/// Restores the max-heap property for the subtree rooted at `node`, assuming
/// both child subtrees already are max-heaps.
fn sift_down<T, F>(v: &mut [T], mut node: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        // Children of `node`.
        let mut child = 2 * node + 1;
        if child >= v.len() {
            break;
        }

        // Pick the greater child.
        if child + 1 < v.len() && is_less(&v[child], &v[child + 1]) {
            child += 1;
        }

        // Stop if the invariant holds at `node`.
        if !is_less(&v[node], &v[child]) {
            break;
        }

        v.swap(node, child);
        node = child;
    }
}
