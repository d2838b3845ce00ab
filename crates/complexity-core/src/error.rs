//! Error type shared by the fallible operations.

/// Error type for complexity primitives.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComplexityError {
    /// The argument violates the operation's domain (e.g. a negative factorial).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_reason() {
        let err = ComplexityError::InvalidArgument("n must be non-negative".into());
        assert_eq!(err.to_string(), "invalid argument: n must be non-negative");
    }
}
