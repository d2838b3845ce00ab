//! Application configuration from CLI flags and environment.

use std::time::Duration;

use clap::Parser;

use complexity_core::constants::MAX_DEMO_FACTORIAL;

/// Complexity: reference implementations of common complexity classes.
#[derive(Parser, Debug)]
#[command(name = "complexity", version, about)]
pub struct AppConfig {
    /// Suspension for the timed square (e.g. "10ms", "1s").
    #[arg(long, default_value = "10ms", env = "COMPLEXITY_DELAY", value_parser = parse_duration)]
    pub delay: Duration,

    /// How many Fibonacci numbers to take from the lazy stream.
    #[arg(long, default_value_t = 5)]
    pub fib_count: usize,

    /// Argument for the recursive factorial (negative shows the error path).
    ///
    /// Recursion depth equals the argument, so values are capped at 10000
    /// to stay within the main thread's stack.
    #[arg(
        long = "factorial",
        default_value_t = 6,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i64).range(..=MAX_DEMO_FACTORIAL)
    )]
    pub factorial_n: i64,

    /// Print only the values.
    #[arg(short, long, conflicts_with = "json")]
    pub quiet: bool,

    /// Show per-step timings.
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit the whole report as JSON.
    #[arg(long)]
    pub json: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

/// Parse a duration string like "10ms", "30s", "5m", "1h" or bare seconds.
pub fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    let invalid = || format!("invalid duration: {s:?}");
    let number = |digits: &str| digits.trim().parse::<u64>().map_err(|_| invalid());

    if let Some(ms) = s.strip_suffix("ms") {
        Ok(Duration::from_millis(number(ms)?))
    } else if let Some(secs) = s.strip_suffix('s') {
        Ok(Duration::from_secs(number(secs)?))
    } else if let Some(mins) = s.strip_suffix('m') {
        let secs = number(mins)?.checked_mul(60).ok_or_else(invalid)?;
        Ok(Duration::from_secs(secs))
    } else if let Some(hours) = s.strip_suffix('h') {
        let secs = number(hours)?.checked_mul(3600).ok_or_else(invalid)?;
        Ok(Duration::from_secs(secs))
    } else {
        Ok(Duration::from_secs(number(s)?))
    }
}
