#![no_main]

use libfuzzer_sys::fuzz_target;

use complexity_core::{merge_sort, merge_sort_by};

fuzz_target!(|data: &[u8]| {
    // Pair each byte with its position so stability is observable.
    let tagged: Vec<(u8, usize)> = data.iter().copied().zip(0..).collect();

    let ours = merge_sort_by(&tagged, |a, b| a.0.cmp(&b.0));
    let mut reference = tagged.clone();
    reference.sort_by_key(|&(k, _)| k);
    assert_eq!(ours, reference, "merge_sort_by is not a stable sort");

    let bytes: Vec<u8> = data.to_vec();
    let sorted = merge_sort(&bytes);
    assert_eq!(bytes, data, "input mutated");
    assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
});
