//! O(n log n) stable merge sort.
//!
//! Both entry points take a borrowed slice and return a freshly allocated
//! `Vec`; the caller's data is never touched. The split is balanced
//! (`⌊n/2⌋` / `⌈n/2⌉`) and the merge prefers the left run on ties, which is
//! what makes the sort stable.

use std::cmp::Ordering;

/// Sort into a new vector in non-decreasing order.
///
/// # Example
/// ```
/// let input = [5, 3, 6, 2, 1];
/// assert_eq!(complexity_core::merge_sort(&input), [1, 2, 3, 5, 6]);
/// assert_eq!(input, [5, 3, 6, 2, 1]);
/// ```
#[must_use]
pub fn merge_sort<T: Ord + Clone>(seq: &[T]) -> Vec<T> {
    merge_sort_by(seq, T::cmp)
}

/// Sort into a new vector using `compare`, keeping equal elements in input order.
#[must_use]
pub fn merge_sort_by<T, F>(seq: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    sort_recursive(seq, &mut compare)
}

fn sort_recursive<T, F>(seq: &[T], compare: &mut F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if seq.len() <= 1 {
        return seq.to_vec();
    }

    let mid = seq.len() / 2;
    let left = sort_recursive(&seq[..mid], compare);
    let right = sort_recursive(&seq[mid..], compare);
    merge(left, right, compare)
}

/// Merge two sorted runs. Ties take from `left`.
fn merge<T, F>(left: Vec<T>, right: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(l, r) != Ordering::Greater,
            _ => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        out.extend(next);
    }

    out.extend(left);
    out.extend(right);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_input() {
        assert_eq!(merge_sort(&[5, 3, 6, 2, 1]), [1, 2, 3, 5, 6]);
    }

    #[test]
    fn empty_and_single() {
        assert!(merge_sort::<i64>(&[]).is_empty());
        assert_eq!(merge_sort(&[42]), [42]);
    }

    #[test]
    fn already_sorted_and_reversed() {
        let asc: Vec<i64> = (0..50).collect();
        let desc: Vec<i64> = (0..50).rev().collect();
        assert_eq!(merge_sort(&asc), asc);
        assert_eq!(merge_sort(&desc), asc);
    }

    #[test]
    fn duplicates_and_negatives() {
        assert_eq!(
            merge_sort(&[3, -1, 3, 0, -1, i64::MIN, i64::MAX]),
            [i64::MIN, -1, -1, 0, 3, 3, i64::MAX]
        );
    }

    #[test]
    fn input_is_left_untouched() {
        let input = vec![9, 8, 7];
        let sorted = merge_sort(&input);
        assert_eq!(input, [9, 8, 7]);
        assert_eq!(sorted, [7, 8, 9]);
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let records = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (2, 'e')];
        let sorted = merge_sort_by(&records, |x, y| x.0.cmp(&y.0));
        assert_eq!(sorted, [(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c'), (2, 'e')]);
    }

    #[test]
    fn merge_appends_longer_tail() {
        let mut cmp = i64::cmp;
        assert_eq!(merge(vec![1, 5], vec![2, 3, 4, 6, 7], &mut cmp), [1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(merge(vec![], vec![1, 2], &mut cmp), [1, 2]);
    }
}
