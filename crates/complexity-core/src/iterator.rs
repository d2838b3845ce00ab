//! Lazy infinite Fibonacci stream.

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Unbounded, lazily evaluated Fibonacci sequence: 0, 1, 1, 2, 3, 5, …
///
/// Only the two most recent values are kept, and each call to `next` does
/// one addition. The iterator never returns `None`. To restart, create a
/// new instance; instances never share state.
///
/// # Example
/// ```
/// use complexity_core::FibStream;
/// let fibs: Vec<_> = FibStream::new().take(7).map(|v| v.to_string()).collect();
/// assert_eq!(fibs, ["0", "1", "1", "2", "3", "5", "8"]);
/// ```
#[derive(Debug, Clone)]
pub struct FibStream {
    a: BigUint,
    b: BigUint,
}

impl FibStream {
    #[must_use]
    pub fn new() -> Self {
        Self {
            a: BigUint::zero(),
            b: BigUint::one(),
        }
    }
}

impl Default for FibStream {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FibStream {
    type Item = BigUint;

    fn next(&mut self) -> Option<Self::Item> {
        let next = &self.a + &self.b;
        let b = std::mem::replace(&mut self.b, next);
        Some(std::mem::replace(&mut self.a, b))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl std::iter::FusedIterator for FibStream {}
