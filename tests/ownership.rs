//! Cross-crate checks that outputs are fresh allocations independent of the input.

use complexity_core::{merge_sort, quadratic_pair_sums, FibStream};

#[test]
fn merge_sort_output_does_not_alias_input() {
    let input = vec![3i64, 1, 2];
    let mut sorted = merge_sort(&input);
    sorted[0] = 99;
    assert_eq!(input, [3, 1, 2]);
    assert_ne!(sorted.as_ptr(), input.as_ptr());
}

#[test]
fn pair_sums_reserve_all_pairs_up_front() {
    let sums = quadratic_pair_sums(&[1, 2, 3, 4]);
    assert_eq!(sums.len(), 16);
    assert!(sums.capacity() >= 16);
}

#[test]
fn cloned_stream_continues_independently() {
    let mut original = FibStream::new();
    original.nth(9);
    let mut fork = original.clone();
    assert_eq!(original.next(), fork.next());
    original.next();
    assert_ne!(original.next(), fork.next());
}
