//! O(1) baseline.

use crate::constants::SELF_CHECK_ITERATIONS;

/// Return the input unchanged.
///
/// No branching and no dependency on the size of `value`: this is the
/// constant-time witness the other operations are measured against.
///
/// # Example
/// ```
/// assert_eq!(complexity_core::constant_time(7), 7);
/// ```
#[inline]
pub fn constant_time<T>(value: T) -> T {
    value
}

/// Sum `constant_time(1) + constant_time(2) + constant_time(3)` once per iteration.
///
/// Each iteration is O(1), so the loop as a whole is O(iterations).
#[must_use]
pub fn repeated_constant_sum(iterations: u32) -> i64 {
    let a = constant_time(1i64);
    let b = constant_time(2i64);
    let c = constant_time(3i64);

    let mut sum = 0i64;
    for _ in 0..iterations {
        sum += a + b + c;
    }
    sum
}

/// The self-check the demo prints as `loop sum`.
#[must_use]
pub fn self_check_sum() -> i64 {
    repeated_constant_sum(SELF_CHECK_ITERATIONS)
}
