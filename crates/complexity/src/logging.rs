//! Tracing subscriber setup.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Build the log filter from `RUST_LOG`-style directives.
///
/// WARN applies only when no directive is given; an explicit level such as
/// `debug` overrides it.
pub fn env_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives.unwrap_or_default())
}

/// Install the stderr subscriber, filtered by `RUST_LOG`.
pub fn init() {
    let directives = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter(directives.as_deref()))
        .init();
}
