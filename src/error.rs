//! Error types for encoding, reshaping, and record materialization.
//!
//! The document builder is infallible by construction (the classification
//! set is closed and every input is an owned tree), so errors here come from
//! three places only:
//!
//! - the text encoder's recursion guard,
//! - the reshaper being handed text that is not JSON,
//! - the record materializer being handed a document that does not match
//!   the target record shape.
//!
//! ## Examples
//!
//! ```rust
//! use docwire::{reshape, Error};
//!
//! let result = reshape("{not json", false);
//! assert!(matches!(result, Err(Error::Parse { .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// All errors this crate surfaces.
///
/// Nothing is retried and nothing is swallowed: every failure propagates to
/// the caller, and no partial output is returned alongside an error.
#[derive(Debug, Error)]
pub enum Error {
    /// Input text handed to the reshaper was not valid JSON.
    #[error("invalid JSON: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
    },

    /// The document did not structurally match the requested record shape.
    #[error("document does not match target record: {source}")]
    Deserialize {
        #[source]
        source: serde_json::Error,
    },

    /// Encoding descended past the configured nesting limit.
    #[error("nesting depth limit {limit} exceeded at '{path}'")]
    DepthLimitExceeded { path: String, limit: usize },

    /// Generic message, used by the `serde::de::Error` plumbing.
    #[error("{0}")]
    Message(String),
}

impl Error {
    pub(crate) fn parse(source: serde_json::Error) -> Self {
        Error::Parse { source }
    }

    pub(crate) fn deserialize(source: serde_json::Error) -> Self {
        Error::Deserialize { source }
    }

    pub(crate) fn depth_limit(path: &str, limit: usize) -> Self {
        Error::DepthLimitExceeded {
            path: path.to_string(),
            limit,
        }
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_limit_message() {
        let err = Error::depth_limit("a.b.c", 128);
        let text = err.to_string();
        assert!(text.contains("128"));
        assert!(text.contains("a.b.c"));
    }

    #[test]
    fn test_parse_message() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::parse(source);
        assert!(err.to_string().starts_with("invalid JSON"));
    }
}
