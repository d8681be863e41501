//! Crate error type.

use thiserror::Error as ThisError;

/// Errors produced while building or solving an instance.
#[derive(Debug, ThisError)]
pub enum Error {
    /// The point set cannot form a tour (fewer than two points, or a
    /// non-finite coordinate).
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Reading or writing an instance file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// An instance or report could not be (de)serialized.
    #[error("invalid instance data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Convenience result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Builds an [`Error::InvalidInput`] from any message.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let err = Error::invalid_input("need at least two points");
        assert_eq!(err.to_string(), "invalid input: need at least two points");
    }

    #[test]
    fn test_io_error_is_transparent() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = Error::from(io);
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.to_string(), "missing");
    }

    #[test]
    fn test_parse_error_from_serde() {
        let bad = serde_json::from_str::<Vec<f64>>("not json");
        let err = Error::from(bad.expect_err("must fail"));
        assert!(matches!(err, Error::Parse(_)));
        assert!(err.to_string().starts_with("invalid instance data:"));
    }
}
