//! Common error types used throughout reelname.
//!
//! Covers the failure cases shared by every crate in the workspace: a lookup
//! that found nothing and invalid user input.

/// Common error type for reelname.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Nothing matched the requested item.
    #[error("nothing found for {0}")]
    NotFound(String),

    /// Invalid input was provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Create a new NotFound error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a new InvalidInput error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::not_found("title \"Alien\"");
        assert_eq!(err.to_string(), "nothing found for title \"Alien\"");

        let err = Error::invalid_input("bad offset");
        assert_eq!(err.to_string(), "Invalid input: bad offset");
    }

    #[test]
    fn test_error_string_into() {
        let err = Error::not_found(String::from("test"));
        assert!(matches!(err, Error::NotFound(ref s) if s == "test"));
    }
}
