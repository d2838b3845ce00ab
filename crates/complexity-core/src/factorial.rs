//! Recursive factorial.
//!
//! The recursive form is kept on purpose: it illustrates a call stack that
//! grows linearly with `n`. Very large inputs will exhaust the thread's
//! stack; [`factorial_iterative`] has no such limit and serves as the
//! reference implementation.

use num_bigint::BigUint;
use num_traits::One;

use crate::error::ComplexityError;

/// Compute `n!` recursively.
///
/// `0! = 1! = 1`. Negative `n` is rejected with
/// [`ComplexityError::InvalidArgument`].
///
/// Recursion depth is `n`; callers are responsible for keeping `n` within
/// what their stack can hold.
///
/// # Example
/// ```
/// use complexity_core::factorial_recursive;
/// assert_eq!(factorial_recursive(6).unwrap().to_string(), "720");
/// assert!(factorial_recursive(-1).is_err());
/// ```
pub fn factorial_recursive(n: i64) -> Result<BigUint, ComplexityError> {
    let n = validate(n)?;
    Ok(recurse(n))
}

fn recurse(n: u64) -> BigUint {
    if n <= 1 {
        return BigUint::one();
    }
    recurse(n - 1) * n
}

/// Compute `n!` with an accumulator loop. Same error contract as
/// [`factorial_recursive`], no recursion depth limit.
pub fn factorial_iterative(n: i64) -> Result<BigUint, ComplexityError> {
    let n = validate(n)?;
    Ok((2..=n).fold(BigUint::one(), |acc, k| acc * k))
}

fn validate(n: i64) -> Result<u64, ComplexityError> {
    u64::try_from(n).map_err(|_| {
        ComplexityError::InvalidArgument(format!("n must be non-negative, got {n}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_cases() {
        assert_eq!(factorial_recursive(0).unwrap(), BigUint::one());
        assert_eq!(factorial_recursive(1).unwrap(), BigUint::one());
    }

    #[test]
    fn six_is_720() {
        assert_eq!(factorial_recursive(6).unwrap(), BigUint::from(720u32));
    }

    #[test]
    fn twenty_five_exceeds_u64() {
        assert_eq!(
            factorial_recursive(25).unwrap().to_string(),
            "15511210043330985984000000"
        );
    }

    #[test]
    fn negative_is_invalid_argument() {
        let err = factorial_recursive(-3).unwrap_err();
        assert!(matches!(err, ComplexityError::InvalidArgument(_)));
        assert!(err.to_string().contains("-3"));
        assert!(matches!(
            factorial_iterative(i64::MIN),
            Err(ComplexityError::InvalidArgument(_))
        ));
    }

    #[test]
    fn recursive_matches_iterative() {
        for n in 0..=60 {
            assert_eq!(
                factorial_recursive(n).unwrap(),
                factorial_iterative(n).unwrap(),
                "n = {n}"
            );
        }
    }
}
