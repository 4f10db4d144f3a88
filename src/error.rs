//! Error types for the search pipeline.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur while contacting or interpreting the upstream.
///
/// All transport-class variants are rendered into the response envelope's
/// error field by the orchestrator; none of them escape as panics. Failures
/// scoped to a single result container are not represented here at all:
/// the extractor absorbs them by skipping the container.
#[derive(Error, Debug)]
pub enum SearchError {
    /// HTTP request failed.
    #[error("upstream request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with a non-success status.
    #[error("upstream returned status {0}")]
    Status(u16),

    /// Request exceeded the configured timeout.
    #[error("upstream request timed out")]
    Timeout,

    /// Query text was empty after trimming.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// A CSS selector string failed to parse.
    #[error("invalid selector: {0}")]
    Selector(String),
}
