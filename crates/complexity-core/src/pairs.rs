//! O(n²) pair enumeration.

/// Sum every ordered pair `(i, j)` of positions, in row-major order.
///
/// The output has `n * n` entries and entry `i * n + j` is
/// `values[i] + values[j]`. Deliberately quadratic.
///
/// # Example
/// ```
/// let sums = complexity_core::quadratic_pair_sums(&[1, 2, 3]);
/// assert_eq!(sums, [2, 3, 4, 3, 4, 5, 4, 5, 6]);
/// ```
#[must_use]
pub fn quadratic_pair_sums(values: &[i64]) -> Vec<i128> {
    let n = values.len();
    let mut out = Vec::with_capacity(n * n);
    for &a in values {
        for &b in values {
            out.push(i128::from(a) + i128::from(b));
        }
    }
    out
}
