//! Exit codes for demo outcomes.

use complexity_cli::DemoReport;
use complexity_core::{exit_codes, ComplexityError};

/// Map a library error to its exit code.
pub fn handle_error(err: &ComplexityError) -> i32 {
    match err {
        ComplexityError::InvalidArgument(_) => exit_codes::ERROR_INVALID_ARGUMENT,
    }
}

/// Exit code for a finished demo run. Cancellation wins over step failures.
pub fn exit_code(report: &DemoReport) -> i32 {
    if report.was_cancelled() {
        return exit_codes::ERROR_CANCELED;
    }
    report
        .first_error()
        .map_or(exit_codes::SUCCESS, handle_error)
}
