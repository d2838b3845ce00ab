//! Demonstration runner.
//!
//! Calls every primitive once, in a fixed order, with the classic sample
//! inputs, then races two timed squares against each other.

use std::time::{Duration, Instant};

use tokio::sync::mpsc;
use tracing::{debug, warn};

use complexity_core::baseline::self_check_sum;
use complexity_core::{
    binary_search, constant_time, factorial_recursive, linear_sum, merge_sort,
    quadratic_pair_sums, timed_square_cancellable, CancellationToken, ComplexityError,
    FibStream, DEFAULT_SQUARE_DELAY,
};

use crate::interfaces::{DemoReport, RaceEntry, StepOutcome, StepResult};
use crate::output::{format_index, format_sequence};

const SEARCH_SAMPLE: [i64; 5] = [1, 2, 3, 4, 5];
const SEARCH_TARGET: i64 = 3;
const SORT_SAMPLE: [i64; 5] = [5, 3, 6, 2, 1];
const PAIR_SAMPLE: [i64; 3] = [1, 2, 3];
const SQUARE_SAMPLE: i64 = 4;
const RACE_CHALLENGER: i64 = 5;

/// Inputs that can be changed from the command line.
#[derive(Debug, Clone)]
pub struct DemoOptions {
    /// Suspension for `timed_square`; the race challenger waits half of it.
    pub delay: Duration,
    /// How many Fibonacci numbers to take from the stream.
    pub fib_count: usize,
    /// Argument for the recursive factorial.
    pub factorial_n: i64,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            delay: DEFAULT_SQUARE_DELAY,
            fib_count: 5,
            factorial_n: 6,
        }
    }
}

/// Run every demo step in order. Failing steps are recorded, not propagated.
pub async fn run_demo(opts: &DemoOptions, cancel: &CancellationToken) -> DemoReport {
    let mut steps = vec![
        step("constant_time(7)", || Ok(constant_time(7).to_string())),
        step("linear_sum(0..5)", || Ok(linear_sum(0..5).to_string())),
        step(&format!("first {} fibonacci numbers", opts.fib_count), || {
            let fibs: Vec<_> = FibStream::new().take(opts.fib_count).collect();
            Ok(format_sequence(&fibs))
        }),
        step(
            &format!(
                "binary_search({}, {SEARCH_TARGET})",
                format_sequence(&SEARCH_SAMPLE)
            ),
            || Ok(format_index(binary_search(&SEARCH_SAMPLE, &SEARCH_TARGET))),
        ),
        step(
            &format!("merge_sort({})", format_sequence(&SORT_SAMPLE)),
            || Ok(format_sequence(&merge_sort(&SORT_SAMPLE))),
        ),
        step(&format!("factorial_recursive({})", opts.factorial_n), || {
            factorial_recursive(opts.factorial_n).map(|v| v.to_string())
        }),
        step(
            &format!("len(quadratic_pair_sums({}))", format_sequence(&PAIR_SAMPLE)),
            || Ok(quadratic_pair_sums(&PAIR_SAMPLE).len().to_string()),
        ),
    ];

    let start = Instant::now();
    let squared = timed_square_cancellable(SQUARE_SAMPLE, opts.delay, cancel).await;
    steps.push(StepResult {
        label: format!("timed_square({SQUARE_SAMPLE})"),
        outcome: squared.map_or(StepOutcome::Cancelled, |v| StepOutcome::Value(v.to_string())),
        duration: start.elapsed(),
    });

    steps.push(step("loop sum", || Ok(self_check_sum().to_string())));

    let race = race(opts.delay, cancel).await;
    DemoReport { steps, race }
}

/// Run `timed_square(4, delay)` and `timed_square(5, delay / 2)` concurrently.
///
/// Entries are returned in completion order.
pub async fn race(delay: Duration, cancel: &CancellationToken) -> Vec<RaceEntry> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let contenders = [(SQUARE_SAMPLE, delay), (RACE_CHALLENGER, delay / 2)];

    let [first, second] = contenders.map(|(x, d)| {
        let tx = tx.clone();
        async move {
            let value = timed_square_cancellable(x, d, cancel).await;
            tx.send(RaceEntry { x, delay: d, value })
                .expect("receiver is held until both contenders finish");
        }
    });
    tokio::join!(first, second);
    drop(tx);

    let mut finished = Vec::with_capacity(contenders.len());
    while let Some(entry) = rx.recv().await {
        finished.push(entry);
    }
    finished
}

fn step<F>(label: &str, op: F) -> StepResult
where
    F: FnOnce() -> Result<String, ComplexityError>,
{
    let start = Instant::now();
    let result = op();
    let duration = start.elapsed();

    let outcome = match result {
        Ok(value) => {
            debug!(label, %value, ?duration, "step complete");
            StepOutcome::Value(value)
        }
        Err(e) => {
            warn!(label, error = %e, "step failed");
            StepOutcome::Failed(e)
        }
    };
    StepResult {
        label: label.to_string(),
        outcome,
        duration,
    }
}
