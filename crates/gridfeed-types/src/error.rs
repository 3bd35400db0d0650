//! Error types for gridfeed.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::TimeRange;

/// Result type alias for gridfeed operations.
pub type Result<T> = std::result::Result<T, GridfeedError>;

/// Errors that can occur while querying the remote platform.
#[derive(Error, Debug)]
pub enum GridfeedError {
    /// Transport failed after exhausting all retry attempts.
    #[error("transport failed after {attempts} attempt(s): {message}")]
    Transport {
        /// Number of attempts made before giving up.
        attempts: u32,
        /// Description of the last transport failure.
        message: String,
    },

    /// Transport failed in a way the transport does not classify as
    /// transient; surfaced on the first attempt, never retried.
    #[error("transport failed without retry: {0}")]
    UnretryableTransport(String),

    /// The server returned a non-success response with no recoverable
    /// classification.
    #[error("server returned HTTP {status} for {range}: {body}")]
    Protocol {
        /// HTTP status code.
        status: u16,
        /// The requested chunk range.
        range: TimeRange,
        /// Raw response body.
        body: String,
    },

    /// The result-size limit was hit on a range that can no longer be
    /// bisected.
    #[error("pagination limit at minimum range {range}: server reported {requested} items")]
    PaginationLimit {
        /// The unsplittable range.
        range: TimeRange,
        /// Item count the server reported for the request.
        requested: u64,
    },

    /// A response body could not be parsed into records.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid time range.
    #[error(transparent)]
    TimeRange(#[from] TimeRangeError),

    /// Invalid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Error for invalid time ranges.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeRangeError {
    /// Start instant is after end instant.
    #[error("invalid time range: {start} > {end}")]
    InvalidRange {
        /// The start instant.
        start: DateTime<Utc>,
        /// The end instant.
        end: DateTime<Utc>,
    },
}

/// Error for invalid configuration, raised before any request is issued.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Retry attempts must be at least 1; zero would make every call fail
    /// without ever reaching the network.
    #[error("retry attempts must be at least 1")]
    ZeroRetryAttempts,
}
