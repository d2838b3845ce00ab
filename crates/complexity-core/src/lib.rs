//! # complexity-core
//!
//! Small reference implementations, one per complexity class: O(1), O(n),
//! O(n²), O(log n), O(n log n), recursion, lazy infinite generation and a
//! cooperative suspend-and-resume computation.
//!
//! Every operation is pure and callable in isolation; none of them share
//! state with another.

pub mod baseline;
pub mod constants;
pub mod error;
pub mod factorial;
pub mod iterator;
pub mod pairs;
pub mod progress;
pub mod reduction;
pub mod search;
pub mod sort;
pub mod timed;

// Re-exports
pub use baseline::{constant_time, repeated_constant_sum};
pub use constants::{exit_codes, DEFAULT_SQUARE_DELAY};
pub use error::ComplexityError;
pub use factorial::{factorial_iterative, factorial_recursive};
pub use iterator::FibStream;
pub use pairs::quadratic_pair_sums;
pub use progress::CancellationToken;
pub use reduction::linear_sum;
pub use search::binary_search;
pub use sort::{merge_sort, merge_sort_by};
pub use timed::{timed_square, timed_square_cancellable};
