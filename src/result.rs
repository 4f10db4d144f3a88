//! Search result and response envelope types.

use serde::{Deserialize, Serialize};

/// A single extracted search result.
///
/// The URL is always the unwrapped destination, never the upstream's
/// redirect wrapper. The description may be empty; the title never is,
/// since containers without a title are not emitted at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Result title, plain text.
    pub title: String,
    /// Destination URL.
    pub url: String,
    /// Result description/snippet, plain text. Empty string when upstream
    /// provides none.
    pub description: String,
}

impl SearchResult {
    /// Creates a new search result.
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            description: description.into(),
        }
    }
}

/// Response envelope for one search cycle.
///
/// Either carries extracted results or an error description, never both:
/// a transport failure aborts the whole response, while the failure of a
/// single container is absorbed during extraction and leaves no trace here.
/// Construction through [`SearchResponse::success`] and
/// [`SearchResponse::failure`] keeps that invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// The query text this response answers.
    pub query: String,
    /// Extracted records, in upstream presentation order.
    results: Vec<SearchResult>,
    /// Number of successfully extracted records.
    pub total_results: usize,
    /// Transport failure description, if the upstream fetch failed.
    error: Option<String>,
}

impl SearchResponse {
    /// Creates a successful response from extracted results.
    pub fn success(query: impl Into<String>, results: Vec<SearchResult>) -> Self {
        let total_results = results.len();
        Self {
            query: query.into(),
            results,
            total_results,
            error: None,
        }
    }

    /// Creates a failed response with no results.
    pub fn failure(query: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            results: Vec::new(),
            total_results: 0,
            error: Some(error.into()),
        }
    }

    /// Returns the extracted results.
    pub fn items(&self) -> &[SearchResult] {
        &self.results
    }

    /// Returns the error description, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns whether this response carries an error.
    pub fn is_err(&self) -> bool {
        self.error.is_some()
    }
}
