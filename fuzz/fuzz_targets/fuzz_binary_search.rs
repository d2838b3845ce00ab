#![no_main]

use libfuzzer_sys::fuzz_target;

use complexity_core::{binary_search, merge_sort};

fuzz_target!(|data: &[u8]| {
    let Some((&target, rest)) = data.split_first() else {
        return;
    };
    let sorted = merge_sort(rest);

    match binary_search(&sorted, &target) {
        Some(i) => assert_eq!(sorted[i], target, "index {i} does not hold {target}"),
        None => assert!(!sorted.contains(&target), "{target} present but not found"),
    }
});
