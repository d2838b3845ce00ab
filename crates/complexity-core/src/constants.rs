//! Constants shared by the library and the demo binary.

use std::time::Duration;

/// Default suspension used by [`crate::timed::timed_square`] in the demo (10 ms).
pub const DEFAULT_SQUARE_DELAY: Duration = Duration::from_millis(10);

/// Number of iterations of the constant-time self-check loop.
pub const SELF_CHECK_ITERATIONS: u32 = 10;

/// Largest `n` the property tests feed to the recursive factorial.
///
/// Recursion depth is linear in `n`; this stays far below the default
/// thread stack on every supported platform.
pub const FACTORIAL_TEST_BOUND: i64 = 500;

/// Largest factorial argument the demo binary accepts.
///
/// The recursive factorial uses one stack frame per unit of `n`; this keeps
/// the demo well inside the main thread's stack.
pub const MAX_DEMO_FACTORIAL: i64 = 10_000;

/// Process exit codes used by the demo binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// An operation rejected its argument.
    pub const ERROR_INVALID_ARGUMENT: i32 = 4;
    /// Interrupted by the user (Ctrl+C).
    pub const ERROR_CANCELED: i32 = 130;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_delay_is_ten_millis() {
        assert_eq!(DEFAULT_SQUARE_DELAY.as_millis(), 10);
    }

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            exit_codes::SUCCESS,
            exit_codes::ERROR_GENERIC,
            exit_codes::ERROR_INVALID_ARGUMENT,
            exit_codes::ERROR_CANCELED,
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
