//! Error types shared across the crate.

use thiserror::Error as ThisError;

/// Result type for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised around the algorithms, never by them.
///
/// The distance computations themselves are total; these variants cover
/// checks that callers apply to input before invoking them.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// The caller supplied input that the operation refuses to handle.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Shorthand for [`Error::InvalidInput`].
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = Error::invalid_input("too long");
        assert_eq!(err.to_string(), "invalid input: too long");
        assert_eq!(err, Error::InvalidInput("too long".to_string()));
    }
}
