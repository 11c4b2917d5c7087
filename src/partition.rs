use std::ptr;

/// Reorders `v` in place so that all elements satisfying `pred` precede all
/// elements that do not, and returns the boundary index: after the call every
/// element of `v[..boundary]` satisfies `pred` and no element of
/// `v[boundary..]` does.
///
/// The relative order within each group is not preserved (unstable
/// partition). An empty slice returns 0 without evaluating `pred`.
///
/// Two-pointer convergence: a forward scan advances over elements that
/// satisfy the predicate, a backward scan retreats over elements that don't,
/// and each stalled pair is swapped. O(n) predicate calls, at most n/2 swaps,
/// O(1) auxiliary space.
///
/// ```
/// let mut v = [1, 2, 3, 4, 5, 6];
/// let boundary = slice_partition::partition(&mut v, |x| x % 2 == 1);
/// assert_eq!(boundary, 3);
/// assert!(v[..3].iter().all(|x| x % 2 == 1));
/// ```
pub fn partition<T, P>(v: &mut [T], mut pred: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    let mut l = 0;
    let mut r = v.len();

    loop {
        // SAFETY: The unsafety below involves indexing an array. We initially
        // have `l == 0` and `r == v.len()`, every indexing operation is
        // guarded by `l < r`, and `r - 1` is in-bounds because `r > l >= 0`
        // at that point.
        unsafe {
            // Find the first element that belongs in the second group.
            while l < r && pred(v.get_unchecked(l)) {
                l += 1;
            }

            // Find the last element that belongs in the first group.
            while l < r && !pred(v.get_unchecked(r - 1)) {
                r -= 1;
            }

            // Are we done?
            if l >= r {
                break;
            }

            // Swap the found pair of out-of-place elements.
            r -= 1;
            let ptr = v.as_mut_ptr();
            ptr::swap(ptr.add(l), ptr.add(r));
            l += 1;
        }
    }

    l
}

#[cfg(test)]
mod tests {
    use super::partition;

    fn check(input: &[i32]) {
        let mut v = input.to_vec();
        let boundary = partition(&mut v, |&x| x % 10 == 0);

        assert!(v[..boundary].iter().all(|&x| x % 10 == 0));
        assert!(v[boundary..].iter().all(|&x| x % 10 != 0));

        let mut sorted_in = input.to_vec();
        let mut sorted_out = v.clone();
        sorted_in.sort_unstable();
        sorted_out.sort_unstable();
        assert_eq!(sorted_in, sorted_out);
    }

    #[test]
    fn empty() {
        let mut v: [i32; 0] = [];
        let boundary = partition(&mut v, |_| panic!("predicate must not run"));
        assert_eq!(boundary, 0);
    }

    #[test]
    fn singles() {
        check(&[0]);
        check(&[1]);
        check(&[10]);
    }

    #[test]
    fn doubles() {
        check(&[0, 0]);
        check(&[0, 5]);
        check(&[5, 0]);
        check(&[5, 4]);
    }

    #[test]
    fn longer() {
        check(&[1, 2, 3]);
        check(&[1, 2, 10]);
        check(&[1, 20, 3, 10]);
        check(&[20, 3, 10, 1]);
        check(&[20, 30, 10, 40]);
    }
}
