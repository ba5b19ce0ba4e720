//! Error types for the stream pipeline.
//!
//! Stage callbacks (transforms, predicates, comparators, sink functions)
//! are total and have no error channel. [`StreamError`] covers the
//! remaining failure surface: source misuse, configuration problems and
//! the element limit enforced by a configured [`Pipeline`](crate::Pipeline).

use thiserror::Error;

/// Top-level error type for `clawft-stream`.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum StreamError {
    /// An element was requested from a source that has none left.
    #[error("source exhausted: no elements remaining")]
    SourceExhausted,

    /// A configured run pulled more elements than its limit allows.
    #[error("element limit exceeded: source produced more than {limit} elements")]
    LimitExceeded {
        /// The configured `max_elements` value.
        limit: usize,
    },

    /// Configuration is malformed or semantically invalid.
    #[error("invalid config: {reason}")]
    ConfigInvalid {
        /// What is wrong with the configuration.
        reason: String,
    },

    /// JSON deserialization error while loading a config.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StreamError>;
