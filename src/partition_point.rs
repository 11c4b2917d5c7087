/// Returns the index of the first element of `v` for which `pred` is false,
/// or `v.len()` if every element satisfies it.
///
/// The caller is responsible for `v` already being partitioned with respect
/// to `pred`, i.e. all elements satisfying the predicate come first. The
/// precondition is not checked; on an unpartitioned slice the result is
/// unspecified but the call still terminates. An empty slice returns 0.
///
/// Slices are random access, so this runs a binary search with O(log n)
/// predicate calls rather than a linear scan.
///
/// ```
/// let v = [1, 3, 5, 2, 4, 6];
/// let i = slice_partition::partition_point(&v, |x| x % 2 == 1);
/// assert_eq!(i, 3);
/// ```
pub fn partition_point<T, P>(v: &[T], mut pred: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    // There are v.len() + 1 possible outcomes of the search.
    // Invariant: [i+1, i+1+n) contains the result, with i notionally -1.
    let mut n = v.len() + 1;
    let mut i = usize::MAX;

    while n > 1 {
        // `mid` is in-bounds: i and mid only ever grow by as much as n
        // shrinks, n goes from v.len() + 1 down to exactly 1, so mid is at
        // most -1 + v.len().
        let mid = i.wrapping_add(n / 2);

        // Split [i+1, i+1+n) into [i+1, i+1+n-floor(n/2)) and
        // [i+1+floor(n/2), i+1+n). Both have length n - floor(n/2) and
        // together cover the original range. Testing pred(v[i+floor(n/2)])
        // tells us which half the result lies in.
        if pred(&v[mid]) {
            i = mid;
        }
        n -= n / 2;
    }

    // [i+1, i+1+n) contains the result, and n == 1.
    i.wrapping_add(1)
}
