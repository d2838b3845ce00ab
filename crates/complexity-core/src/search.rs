//! O(log n) binary search.

use std::cmp::Ordering;

/// Find `target` in a slice sorted in non-decreasing order.
///
/// Keeps inclusive `low`/`high` bounds over the positions not yet excluded
/// and probes `floor((low + high) / 2)`. Returns the first probed index
/// whose element equals `target`; with duplicates that is *some* matching
/// index, not necessarily the leftmost. Returns `None` once `low > high`.
///
/// The slice is not checked for sortedness; unsorted input gives an
/// unspecified (but memory-safe) answer.
///
/// # Example
/// ```
/// use complexity_core::binary_search;
/// assert_eq!(binary_search(&[1, 2, 3, 4, 5], &3), Some(2));
/// assert_eq!(binary_search(&[1, 2, 3, 4, 5], &9), None);
/// ```
pub fn binary_search<T: Ord>(sorted: &[T], target: &T) -> Option<usize> {
    if sorted.is_empty() {
        return None;
    }

    let mut low = 0usize;
    let mut high = sorted.len() - 1;

    while low <= high {
        // Same as (low + high) / 2 without the overflow.
        let mid = low + (high - low) / 2;
        match sorted[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => {
                if mid == 0 {
                    return None;
                }
                high = mid - 1;
            }
        }
    }
    None
}
