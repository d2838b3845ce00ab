//! O(n) linear reduction.

/// Sum all values in a single pass.
///
/// Accepts any iterable, including iterators whose length is unknown in
/// advance; nothing is materialized. The accumulator is `i128`, so no `i64`
/// input of realistic length can overflow it.
///
/// # Example
/// ```
/// use complexity_core::linear_sum;
/// assert_eq!(linear_sum([1, 2, 3, 4, 5]), 15);
/// assert_eq!(linear_sum(0..5), 10);
/// assert_eq!(linear_sum(std::iter::empty()), 0);
/// ```
pub fn linear_sum<I>(values: I) -> i128
where
    I: IntoIterator<Item = i64>,
{
    let mut total = 0i128;
    for v in values {
        total += i128::from(v);
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_zero() {
        assert_eq!(linear_sum(Vec::new()), 0);
    }

    #[test]
    fn one_to_five() {
        assert_eq!(linear_sum(vec![1, 2, 3, 4, 5]), 15);
    }

    #[test]
    fn consumes_lazy_iterator_once() {
        let mut visited = 0;
        let total = linear_sum((1..=100).inspect(|_| visited += 1));
        assert_eq!(total, 5050);
        assert_eq!(visited, 100);
    }

    #[test]
    fn does_not_overflow_i64() {
        assert_eq!(
            linear_sum([i64::MAX, i64::MAX]),
            2 * i128::from(i64::MAX)
        );
        assert_eq!(linear_sum([i64::MIN, -1]), i128::from(i64::MIN) - 1);
    }
}
